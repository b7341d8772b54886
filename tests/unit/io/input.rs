//! Tests for starting word list parsing

#[cfg(test)]
mod tests {
    use mds_components::DecyclingError;
    use mds_components::io::input::{parse_word, parse_word_list, read_word_file};
    use tempfile::tempdir;

    // Verifies decimal and hexadecimal words
    // Verified by parsing hex digits as decimal
    #[test]
    fn test_parse_word() {
        assert_eq!(parse_word("42").expect("decimal"), 42);
        assert_eq!(parse_word("0x2a").expect("hex"), 42);
        assert_eq!(parse_word("0X2A").expect("hex"), 42);
        assert!(matches!(
            parse_word("-3"),
            Err(DecyclingError::InvalidCandidate { .. })
        ));
        assert!(parse_word("0xg").is_err());
    }

    // Tests whitespace and comma separators in any mix
    // Verified by splitting on whitespace only
    #[test]
    fn test_parse_word_list() {
        assert_eq!(
            parse_word_list("0, 3 4,6\n7\t0x8").expect("list"),
            vec![0, 3, 4, 6, 7, 8]
        );
        assert!(parse_word_list("  ,\n").expect("empty list").is_empty());
        assert!(parse_word_list("1 two 3").is_err());
    }

    // Tests reading a list from a file and reporting a missing one
    // Verified by returning an empty list for missing files
    #[test]
    fn test_read_word_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("mds.txt");
        std::fs::write(&path, "0 1\n5 7\n").expect("write list");
        assert_eq!(read_word_file(&path).expect("list"), vec![0, 1, 5, 7]);

        assert!(matches!(
            read_word_file(&dir.path().join("missing.txt")),
            Err(DecyclingError::FileSystem { .. })
        ));
    }
}
