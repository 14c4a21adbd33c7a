use flate2::write::GzEncoder;
use flate2::Compression;
use gamesage::{Error, ProjectionModel, SemanticArtifacts};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use test_utils::constants::TEST_CORPUS_IDS;
use test_utils::{load_test_artifacts, read_test_data_file};

const ARTIFACT_FILE_NAMES: &[&str] = &[
    "term_dictionary.tsv",
    "weighting_model.tsv",
    "projection_model.tsv",
    "corpus.tsv",
];

fn temp_artifacts_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("gamesage_{}_{}", name, std::process::id()));
    fs::create_dir_all(&dir).expect("Failed to create temp dir");
    dir
}

#[cfg(test)]
mod artifact_loading_tests {
    use super::*;

    #[test]
    fn test_loads_test_artifacts() {
        let artifacts = load_test_artifacts();

        assert_eq!(artifacts.term_dictionary.term_count(), 12);
        assert_eq!(artifacts.term_dictionary.get_term_id("super_mario_bros"), Some(10));
        assert_eq!(artifacts.projection_model.dimension(), 4);
        assert_eq!(artifacts.weighting_model.idf(11), Some(1.0));
    }

    #[test]
    fn test_placeholder_rows_are_skipped() {
        let artifacts = load_test_artifacts();
        let corpus = &artifacts.corpus;

        assert_eq!(corpus.len(), TEST_CORPUS_IDS.len());
        assert_eq!(corpus.position_of("3"), None);
        assert_eq!(corpus.position_of("5"), Some(2));
        assert_eq!(corpus.external_id_at(5), Some("10"));
    }

    #[test]
    fn test_loads_gzip_compressed_artifacts() {
        let dir = temp_artifacts_dir("gzip");

        for file_name in ARTIFACT_FILE_NAMES {
            let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
            encoder
                .write_all(read_test_data_file(file_name).as_bytes())
                .unwrap();
            fs::write(dir.join(format!("{}.gz", file_name)), encoder.finish().unwrap()).unwrap();
        }

        let artifacts = SemanticArtifacts::load_from_dir(&dir).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        assert_eq!(artifacts.term_dictionary.term_count(), 12);
        assert_eq!(artifacts.corpus.len(), TEST_CORPUS_IDS.len());
    }

    #[test]
    fn test_missing_artifact() {
        let dir = temp_artifacts_dir("missing");
        fs::write(dir.join("term_dictionary.tsv"), "term_id\tterm\n").unwrap();

        let result = SemanticArtifacts::load_from_dir(&dir);
        fs::remove_dir_all(&dir).unwrap();

        assert!(matches!(result, Err(Error::ArtifactError(_))));
    }

    #[test]
    fn test_malformed_artifacts() {
        let term_dictionary = read_test_data_file("term_dictionary.tsv");
        let weighting_model = read_test_data_file("weighting_model.tsv");
        let projection_model = read_test_data_file("projection_model.tsv");
        let corpus = read_test_data_file("corpus.tsv");

        let duplicate_term = format!("{}12\tdragon\n", term_dictionary);
        assert!(matches!(
            SemanticArtifacts::from_tsv_strings(
                &duplicate_term,
                &weighting_model,
                &projection_model,
                &corpus
            ),
            Err(Error::ArtifactError(_))
        ));

        let bad_idf = format!("{}12\tnot_a_number\n", weighting_model);
        assert!(matches!(
            SemanticArtifacts::from_tsv_strings(
                &term_dictionary,
                &bad_idf,
                &projection_model,
                &corpus
            ),
            Err(Error::ArtifactError(_))
        ));

        let ragged_projection = format!("{}12\t0.5\t1.0\n", projection_model);
        assert!(matches!(
            SemanticArtifacts::from_tsv_strings(
                &term_dictionary,
                &weighting_model,
                &ragged_projection,
                &corpus
            ),
            Err(Error::DimensionMismatch {
                expected: 4,
                found: 2
            })
        ));

        let ragged_corpus = format!("{}11\tMetroid\t9.0\t1.0\n", corpus);
        assert!(matches!(
            SemanticArtifacts::from_tsv_strings(
                &term_dictionary,
                &weighting_model,
                &projection_model,
                &ragged_corpus
            ),
            Err(Error::DimensionMismatch {
                expected: 4,
                found: 2
            })
        ));
    }

    #[test]
    fn test_largest_term_id_is_rejected() {
        let term_dictionary = format!("term_id\tterm\n{}\tdragon\n", usize::MAX);

        let result = SemanticArtifacts::from_tsv_strings(
            &term_dictionary,
            &read_test_data_file("weighting_model.tsv"),
            &read_test_data_file("projection_model.tsv"),
            &read_test_data_file("corpus.tsv"),
        );

        assert!(matches!(result, Err(Error::ArtifactError(_))));
    }
}
