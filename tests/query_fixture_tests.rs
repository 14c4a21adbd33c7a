use gamesage::NormalizerResources;
use test_utils::{load_query_fixtures, load_test_artifacts, ranked_ids};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_fixtures() {
        let artifacts = load_test_artifacts();
        let resources = NormalizerResources::with_defaults(&artifacts.term_dictionary);
        let game_sage = artifacts
            .game_sage(&resources)
            .expect("Failed to build GameSage");

        let fixtures = load_query_fixtures();
        assert!(!fixtures.is_empty(), "No query fixtures found");

        for fixture in fixtures {
            let file_name = fixture.path.display();

            if let Some(expected_tokens) = &fixture.expected_tokens {
                assert_eq!(
                    &game_sage.normalize(&fixture.text, fixture.variant),
                    expected_tokens,
                    "Unexpected token stream for {}",
                    file_name
                );
            }

            let results = game_sage
                .related_games(&fixture.text, fixture.variant)
                .expect("Failed to rank corpus");

            if let Some(expected_id) = &fixture.expected_most_related {
                assert_eq!(
                    ranked_ids(&results.most_related).first().copied(),
                    Some(expected_id.as_str()),
                    "Unexpected most related game for {}",
                    file_name
                );
            }

            if let Some(expected_id) = &fixture.expected_least_related {
                assert_eq!(
                    ranked_ids(&results.least_related).first().copied(),
                    Some(expected_id.as_str()),
                    "Unexpected least related game for {}",
                    file_name
                );
            }
        }
    }
}
