pub const TEST_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../tests/test_data_files");

pub const QUERY_FIXTURES_DIR: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../tests/test_data_files/queries"
);

/// Corpus IDs of the test artifacts, in corpus order. ID 3 is a placeholder row.
pub const TEST_CORPUS_IDS: &[&str] = &["1", "2", "5", "7", "8", "10"];

pub const FANTASY_QUERY: &str =
    "I really enjoyed exploring dungeons and fighting dragons with a sword";
