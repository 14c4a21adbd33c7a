use crate::constants::PRINTABLE_WHITESPACE;

/// Drops every character outside of printable ASCII (graphic characters plus the usual
/// whitespace characters).
pub fn retain_printable_ascii(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_graphic() || PRINTABLE_WHITESPACE.contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_non_ascii() {
        assert_eq!(retain_printable_ascii("Pokémon™ Red"), "Pokmon Red");
    }

    #[test]
    fn test_keeps_whitespace_and_control_free_text() {
        assert_eq!(retain_printable_ascii("a\tb\nc\u{0}d"), "a\tb\ncd");
    }
}
