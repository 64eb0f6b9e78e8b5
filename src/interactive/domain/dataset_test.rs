#[cfg(test)]
mod tests {
    use super::super::dataset::*;

    #[test]
    fn test_parse_preserves_file_order() {
        let json = r#"{"🚀": ["rocket", "launch"], "😀": ["grin", "happy"], "🐱": ["cat"]}"#;
        let dataset = Dataset::from_slice(json.as_bytes()).unwrap();

        let emojis: Vec<&str> = dataset.entries().iter().map(|e| e.emoji.as_str()).collect();
        assert_eq!(emojis, vec!["🚀", "😀", "🐱"]);
        assert_eq!(
            dataset.keywords("🚀").unwrap(),
            &["rocket".to_string(), "launch".to_string()]
        );
    }

    #[test]
    fn test_parse_empty_object() {
        let dataset = Dataset::from_slice(b"{}").unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.len(), 0);
    }

    #[test]
    fn test_duplicate_key_keeps_first_position_and_last_keywords() {
        let json = r#"{"😀": ["grin"], "🚀": ["rocket"], "😀": ["smile"]}"#;
        let dataset = Dataset::from_slice(json.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.entries()[0].emoji, "😀");
        assert_eq!(dataset.keywords("😀").unwrap(), &["smile".to_string()]);
    }

    #[test]
    fn test_rejects_wrong_shapes() {
        assert!(Dataset::from_slice(b"[]").is_err());
        assert!(Dataset::from_slice(br#"{"x": "not a list"}"#).is_err());
        assert!(Dataset::from_slice(br#"{"x": [1, 2]}"#).is_err());
        assert!(Dataset::from_slice(br#"{"x": ["ok"]"#).is_err());
        assert!(Dataset::from_slice(b"").is_err());
    }

    #[test]
    fn test_from_pairs() {
        let dataset = Dataset::from_pairs(vec![
            ("😀", vec!["grin", "happy"]),
            ("🚀", vec!["rocket"]),
        ]);

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.entries()[1].keywords, vec!["rocket".to_string()]);
        assert!(dataset.keywords("🐱").is_none());
    }
}
