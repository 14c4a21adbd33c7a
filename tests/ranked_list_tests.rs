use gamesage::{Error, RankedEntry, RankedList};

#[cfg(test)]
mod ranked_list_tests {
    use super::*;

    #[test]
    fn test_serializes_id_score_pairs() {
        let ranked_list = RankedList::new(vec![
            RankedEntry::new("1", 0.5),
            RankedEntry::new("22", -0.25),
        ]);

        assert_eq!(ranked_list.to_string(), "1&0.5,22&-0.25");
    }

    #[test]
    fn test_empty_list_is_empty_string() {
        assert_eq!(RankedList::default().to_string(), "");
        assert_eq!("".parse::<RankedList>().unwrap(), RankedList::default());
    }

    #[test]
    fn test_round_trip() {
        let ranked_list = RankedList::new(vec![
            RankedEntry::new("10", 0.1 + 0.2),
            RankedEntry::new("7", 1.0),
            RankedEntry::new("3", -0.9999999999999999),
            RankedEntry::new("5", 0.0),
        ]);

        let parsed: RankedList = ranked_list.to_string().parse().unwrap();
        assert_eq!(parsed, ranked_list);
    }

    #[test]
    fn test_parses_redisplayed_list() {
        let ranked_list: RankedList = "12&0.87,4&0.5".parse().unwrap();

        assert_eq!(ranked_list.len(), 2);
        assert!(ranked_list.contains_id("4"));
        assert_eq!(ranked_list.entries()[0], RankedEntry::new("12", 0.87));
    }

    #[test]
    fn test_malformed_lists_fail_entirely() {
        for malformed in [
            "1&0.5,2",
            "1&0.5&3",
            "&0.5",
            "1&",
            "1&abc",
            "1&NaN",
            "1&inf",
            "1&0.5,",
            ",1&0.5",
        ] {
            assert!(
                matches!(malformed.parse::<RankedList>(), Err(Error::FormatError(_))),
                "Expected a format error for '{}'",
                malformed
            );
        }
    }
}
