use gamesage::{NormalizerResources, PipelineVariant, SemanticArtifacts};
use test_utils::constants::FANTASY_QUERY;
use test_utils::load_test_artifacts;

fn normalize(artifacts: &SemanticArtifacts, text: &str, variant: PipelineVariant) -> String {
    let resources = NormalizerResources::with_defaults(&artifacts.term_dictionary);
    let game_sage = artifacts
        .game_sage(&resources)
        .expect("Failed to build GameSage");

    game_sage.normalize(text, variant)
}

fn contains_long_token(normalized: &str, length: usize) -> bool {
    normalized.split(' ').any(|token| token.len() == length)
}

#[cfg(test)]
mod ontology_normalizer_tests {
    use super::*;

    #[test]
    fn test_removes_filler_and_reduces_inflections() {
        let artifacts = load_test_artifacts();
        let normalized = normalize(&artifacts, FANTASY_QUERY, PipelineVariant::Ontology);

        assert_eq!(normalized, "enjoy explore dungeon fight dragon sword");

        for filler in ["i", "really", "and", "with", "a", "enjoyed"] {
            assert!(!normalized.split(' ').any(|token| token == filler));
        }
    }

    #[test]
    fn test_idempotent() {
        let artifacts = load_test_artifacts();
        let normalized = "explore dungeon fight dragon sword";

        assert_eq!(
            normalize(&artifacts, normalized, PipelineVariant::Ontology),
            normalized
        );
    }

    #[test]
    fn test_lemmas_which_are_stop_words_are_removed() {
        let artifacts = load_test_artifacts();

        // "things" is content, its lemma "thing" is a stop word
        assert_eq!(
            normalize(&artifacts, "things dragons", PipelineVariant::Ontology),
            "dragon"
        );
    }

    #[test]
    fn test_whitespace_and_preliminary_punctuation() {
        let artifacts = load_test_artifacts();

        assert_eq!(
            normalize(
                &artifacts,
                "Dragons,swords;\tdungeons.\r\n",
                PipelineVariant::Ontology
            ),
            "dragon sword dungeon"
        );
    }

    #[test]
    fn test_symbols_are_removed() {
        let artifacts = load_test_artifacts();

        assert_eq!(
            normalize(
                &artifacts,
                "dragon's \"sword\": (dungeon)!",
                PipelineVariant::Ontology
            ),
            "dragon sword dungeon"
        );
    }

    #[test]
    fn test_non_printable_characters_are_dropped() {
        let artifacts = load_test_artifacts();

        assert_eq!(
            normalize(&artifacts, "Pokémon dragons", PipelineVariant::Ontology),
            "pokmon dragon"
        );
    }

    #[test]
    fn test_game_titles_become_single_tokens() {
        let artifacts = load_test_artifacts();

        assert_eq!(
            normalize(
                &artifacts,
                "I love Super Mario Bros 3 and The Legend of Zelda",
                PipelineVariant::Ontology
            ),
            "love super_mario_bros_3 the_legend_of_zelda"
        );
    }

    #[test]
    fn test_very_long_inflected_token() {
        let artifacts = load_test_artifacts();
        let text = format!("{}ed dragons", "y".repeat(300_000));

        let normalized = normalize(&artifacts, &text, PipelineVariant::Ontology);
        assert!(contains_long_token(&normalized, 300_000));
        assert!(normalized.ends_with(" dragon"));
    }

    #[test]
    fn test_empty_text() {
        let artifacts = load_test_artifacts();

        assert_eq!(normalize(&artifacts, "", PipelineVariant::Ontology), "");
        assert_eq!(normalize(&artifacts, " \n\t ", PipelineVariant::Ontology), "");
    }
}

#[cfg(test)]
mod gameplay_normalizer_tests {
    use super::*;

    #[test]
    fn test_keeps_only_verbs_and_common_nouns() {
        let artifacts = load_test_artifacts();

        assert_eq!(
            normalize(
                &artifacts,
                "I explored dungeons and fought dragons.",
                PipelineVariant::Gameplay
            ),
            "explore dungeon fight dragon"
        );
    }

    #[test]
    fn test_idempotent() {
        let artifacts = load_test_artifacts();
        let normalized = "explore dungeon fight dragon";

        assert_eq!(
            normalize(&artifacts, normalized, PipelineVariant::Gameplay),
            normalized
        );
    }

    #[test]
    fn test_tokens_are_lowercased() {
        let artifacts = load_test_artifacts();

        assert_eq!(
            normalize(&artifacts, "Dragons fly", PipelineVariant::Gameplay),
            "dragon fly"
        );
    }

    #[test]
    fn test_contractions_are_stop_words() {
        let artifacts = load_test_artifacts();

        assert_eq!(
            normalize(&artifacts, "I dont like swords", PipelineVariant::Gameplay),
            "sword"
        );
    }

    #[test]
    fn test_newlines_keep_sentence_boundaries() {
        let artifacts = load_test_artifacts();

        assert_eq!(
            normalize(
                &artifacts,
                "I fought dragons\nI explored dungeons",
                PipelineVariant::Gameplay
            ),
            "fight dragon explore dungeon"
        );
    }

    #[test]
    fn test_very_long_inflected_token() {
        let artifacts = load_test_artifacts();
        let text = format!("They {}ed dragons", "y".repeat(300_000));

        let normalized = normalize(&artifacts, &text, PipelineVariant::Gameplay);
        assert!(contains_long_token(&normalized, 300_000));
    }

    #[test]
    fn test_empty_text() {
        let artifacts = load_test_artifacts();

        assert_eq!(normalize(&artifacts, "", PipelineVariant::Gameplay), "");
    }
}
