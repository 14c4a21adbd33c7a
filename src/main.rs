use gamesage::{NormalizerResources, PipelineVariant, SemanticArtifacts};
use log::{error, info};
use std::env;
use std::io::{self, Read};
use std::path::PathBuf;

const ARTIFACTS_DIR_ENV_VAR: &str = "GAMESAGE_ARTIFACTS_DIR";
const DEFAULT_ARTIFACTS_DIR: &str = "data/artifacts";

fn main() {
    // Initialize the logger
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!(
            "Usage: {} <ontology|gameplay> [ARTIFACTS_DIR]",
            args.first().map_or("gamesage-cli", |program| program.as_str())
        );
        std::process::exit(2);
    }

    let variant: PipelineVariant = match args[1].parse() {
        Ok(variant) => variant,
        Err(e) => {
            error!("{}", e);
            std::process::exit(2);
        }
    };

    let artifacts_dir = args
        .get(2)
        .cloned()
        .or_else(|| env::var(ARTIFACTS_DIR_ENV_VAR).ok())
        .unwrap_or_else(|| DEFAULT_ARTIFACTS_DIR.to_string());

    let artifacts = match SemanticArtifacts::load_from_dir(&PathBuf::from(&artifacts_dir)) {
        Ok(artifacts) => artifacts,
        Err(e) => {
            error!("Failed to load artifacts from {}: {}", artifacts_dir, e);
            std::process::exit(1);
        }
    };

    // Read the input text from stdin
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("Failed to read from stdin: {}", e);
        std::process::exit(1);
    }

    let resources = NormalizerResources::with_defaults(&artifacts.term_dictionary);

    let results = artifacts
        .game_sage(&resources)
        .and_then(|game_sage| game_sage.related_games(&input, variant));

    match results {
        Ok(results) => {
            info!(
                "Found {} related and {} unrelated games",
                results.most_related.len(),
                results.least_related.len()
            );

            // Serialized lists, most related first
            println!("{}", results.most_related);
            println!("{}", results.least_related);
        }
        Err(e) => {
            error!("Error computing related games: {}", e);
            std::process::exit(1);
        }
    }
}
