use crate::types::Token;

/// Reads a plain-text word list: one entry per line, lowercased, blank lines skipped.
pub fn read_word_list_from_string(text: &str) -> Vec<Token> {
    text.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_one_entry_per_line() {
        let words = read_word_list_from_string("Game Boy\r\n\nXbox 360\n  \n");
        assert_eq!(words, vec!["game boy", "xbox 360"]);
    }
}
