use csv::WriterBuilder;
use gamesage::{NormalizerResources, SemanticArtifacts};
use log::{error, info};
use std::env;
use std::io;
use std::path::PathBuf;

const DEFAULT_ARTIFACTS_DIR: &str = "data/artifacts";

/// Writes the related and unrelated games of every corpus game as TSV to stdout.
fn main() {
    env_logger::init();

    let artifacts_dir = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_ARTIFACTS_DIR.to_string());

    let artifacts = match SemanticArtifacts::load_from_dir(&PathBuf::from(&artifacts_dir)) {
        Ok(artifacts) => artifacts,
        Err(e) => {
            error!("Failed to load artifacts from {}: {}", artifacts_dir, e);
            std::process::exit(1);
        }
    };

    let resources = NormalizerResources::with_defaults(&artifacts.term_dictionary);
    let game_sage = match artifacts.game_sage(&resources) {
        Ok(game_sage) => game_sage,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(io::stdout());

    if let Err(e) = writer.write_record(["external_id", "title", "related", "unrelated"]) {
        error!("Failed to write header: {}", e);
        std::process::exit(1);
    }

    for (index, document) in artifacts.corpus.documents().iter().enumerate() {
        let results = match game_sage.related_games_for_document(&document.external_id) {
            Ok(results) => results,
            Err(e) => {
                error!("Failed to rank {}: {}", document.external_id, e);
                std::process::exit(1);
            }
        };

        let record = [
            document.external_id.clone(),
            document.title.clone().unwrap_or_default(),
            results.most_related.to_string(),
            results.least_related.to_string(),
        ];

        if let Err(e) = writer.write_record(&record) {
            error!("Failed to write record: {}", e);
            std::process::exit(1);
        }

        if (index + 1) % 1000 == 0 {
            info!("Processed {} games", index + 1);
        }
    }

    if let Err(e) = writer.flush() {
        error!("Failed to flush output: {}", e);
        std::process::exit(1);
    }

    info!("Processed {} games", artifacts.corpus.len());
}
