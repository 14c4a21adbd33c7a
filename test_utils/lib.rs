pub mod constants;

use constants::{QUERY_FIXTURES_DIR, TEST_DATA_DIR};
use gamesage::{PipelineVariant, RankedList, SemanticArtifacts};
use std::fs;
use std::path::{Path, PathBuf};

/// Loads the small test corpus and its model triple.
pub fn load_test_artifacts() -> SemanticArtifacts {
    SemanticArtifacts::load_from_dir(Path::new(TEST_DATA_DIR))
        .expect("Failed to load test artifacts")
}

/// Reads a test artifact file as a string.
pub fn read_test_data_file(file_name: &str) -> String {
    fs::read_to_string(Path::new(TEST_DATA_DIR).join(file_name))
        .expect("Failed to read test data file")
}

/// External IDs of a ranked list, in order.
pub fn ranked_ids(ranked_list: &RankedList) -> Vec<&str> {
    ranked_list
        .iter()
        .map(|entry| entry.external_id.as_str())
        .collect()
}

/// A query text file with its `VARIANT:` and `EXPECTED_*:` directives.
#[derive(Debug, Clone)]
pub struct QueryFixture {
    pub path: PathBuf,
    pub variant: PipelineVariant,
    pub text: String,
    pub expected_tokens: Option<String>,
    pub expected_most_related: Option<String>,
    pub expected_least_related: Option<String>,
}

fn get_directive(content: &str, directive: &str) -> Option<String> {
    content.lines().find_map(|line| {
        line.trim()
            .strip_prefix(directive)
            .map(|value| value.trim().to_string())
    })
}

pub fn load_query_fixture(file_path: &Path) -> QueryFixture {
    let content = fs::read_to_string(file_path).expect("Failed to read query fixture");

    let variant = get_directive(&content, "VARIANT:")
        .expect("Query fixture is missing a VARIANT line")
        .parse()
        .expect("Query fixture has an unknown variant");

    // Everything which is not a directive is query text
    let text = content
        .lines()
        .filter(|line| {
            let line = line.trim_start();
            !line.starts_with("VARIANT:")
                && !line.starts_with("EXPECTED_")
                && !line.starts_with("COMMENT:")
        })
        .collect::<Vec<_>>()
        .join("\n");

    QueryFixture {
        path: file_path.to_path_buf(),
        variant,
        text,
        expected_tokens: get_directive(&content, "EXPECTED_TOKENS:"),
        expected_most_related: get_directive(&content, "EXPECTED_MOST_RELATED:"),
        expected_least_related: get_directive(&content, "EXPECTED_LEAST_RELATED:"),
    }
}

/// Every query fixture, sorted by file name.
pub fn load_query_fixtures() -> Vec<QueryFixture> {
    let mut paths: Vec<PathBuf> = fs::read_dir(QUERY_FIXTURES_DIR)
        .expect("Failed to read query fixtures directory")
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().map_or(false, |extension| extension == "txt"))
        .collect();
    paths.sort();

    paths.iter().map(|path| load_query_fixture(path)).collect()
}
