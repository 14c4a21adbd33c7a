use gamesage::{NormalizerResources, PipelineVariant, SemanticArtifacts};
use log::error;
use std::path::Path;

fn main() {
    env_logger::init();

    let artifacts = match SemanticArtifacts::load_from_dir(Path::new("tests/test_data_files")) {
        Ok(artifacts) => artifacts,
        Err(e) => {
            error!("Failed to load artifacts: {}", e);
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

    let text = "I really enjoyed exploring dungeons and fighting dragons with a sword";

    for variant in [PipelineVariant::Ontology, PipelineVariant::Gameplay] {
        println!("{}: {}", variant, game_sage.normalize(text, variant));

        match game_sage.related_games(text, variant) {
            Ok(results) => {
                for entry in results.most_related.iter().take(3) {
                    let title = artifacts
                        .corpus
                        .document(&entry.external_id)
                        .ok()
                        .and_then(|document| document.title.clone())
                        .unwrap_or_default();
                    println!("  {:>6.3}  {}", entry.score, title);
                }
            }
            Err(e) => error!("{}", e),
        }
    }
}
