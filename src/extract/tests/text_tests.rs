use crate::extract::text::{normalize_whitespace, squash_whitespace};

#[cfg(test)]
mod squash_tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(squash_whitespace(""), "");
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(squash_whitespace("   \n \t \r\n  "), "");
    }

    #[test]
    fn test_mixed_run_collapses_to_one_space() {
        assert_eq!(squash_whitespace("a \n\t b"), "a b");
    }

    #[test]
    fn test_trims_edges() {
        assert_eq!(squash_whitespace("\n  link text \t"), "link text");
    }

    #[test]
    fn test_already_clean_is_unchanged() {
        assert_eq!(squash_whitespace("Read more"), "Read more");
    }

    #[test]
    fn test_non_breaking_space_is_whitespace() {
        assert_eq!(squash_whitespace("a\u{a0}b"), "a b");
    }
}

#[cfg(test)]
mod normalize_tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(normalize_whitespace(""), "");
    }

    #[test]
    fn test_blank_run_becomes_single_newline() {
        assert_eq!(normalize_whitespace("a \n\n b"), "a\nb");
    }

    #[test]
    fn test_spaces_and_tabs_collapse() {
        assert_eq!(normalize_whitespace("a \t  b"), "a b");
    }

    #[test]
    fn test_crlf_runs_become_single_newline() {
        assert_eq!(normalize_whitespace("line one\r\n\r\nline two"), "line one\nline two");
    }

    #[test]
    fn test_single_newline_is_preserved() {
        assert_eq!(normalize_whitespace("para one\npara two"), "para one\npara two");
    }

    #[test]
    fn test_trims_edges() {
        assert_eq!(normalize_whitespace("\n  text  \n"), "text");
    }

    #[test]
    fn test_indented_paragraphs() {
        assert_eq!(
            normalize_whitespace("  first   paragraph\n\n   second\tparagraph  "),
            "first paragraph\nsecond paragraph"
        );
    }
}
