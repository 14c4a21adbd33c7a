use gamesage::PhraseTokenizer;

#[cfg(test)]
mod phrase_tokenizer_tests {
    use super::*;

    #[test]
    fn test_longest_phrase_wins() {
        let tokenizer = PhraseTokenizer::new(["super mario", "super mario bros"]);

        let tokenized = tokenizer.tokenize("i love super mario bros today");
        assert_eq!(tokenized, "i love super_mario_bros today");
        assert!(!tokenized.contains("super_mario bros"));
    }

    #[test]
    fn test_longest_phrase_wins_regardless_of_table_order() {
        let tokenizer = PhraseTokenizer::new(["super mario bros", "super mario"]);

        assert_eq!(
            tokenizer.tokenize("super mario bros and super mario"),
            "super_mario_bros and super_mario"
        );
    }

    #[test]
    fn test_equal_length_phrases_keep_table_order() {
        let tokenizer = PhraseTokenizer::new(["mario bros", "super mario"]);

        assert_eq!(tokenizer.tokenize("super mario bros"), "super mario_bros");
    }

    #[test]
    fn test_matches_whole_words_only() {
        let tokenizer = PhraseTokenizer::new(["game boy"]);

        assert_eq!(tokenizer.tokenize("game boyfriend"), "game boyfriend");
        assert_eq!(tokenizer.tokenize("a game boy"), "a game_boy");
    }

    #[test]
    fn test_from_titles() {
        let tokenizer = PhraseTokenizer::from_titles(["Dragon Quest", "Tetris", "Gran Turismo"]);

        assert_eq!(tokenizer.len(), 2);
        assert_eq!(
            tokenizer.tokenize("dragon quest and tetris"),
            "dragon_quest and tetris"
        );
    }

    #[test]
    fn test_empty_table() {
        let tokenizer = PhraseTokenizer::default();

        assert!(tokenizer.is_empty());
        assert_eq!(tokenizer.tokenize("  dragon   quest "), "dragon quest");
    }
}
