//! Edge case tests for mython-lex

#[cfg(test)]
mod tests {
    use crate::{Lexer, LexerError, LexerOptions, Token};

    fn lex_all(source: &str) -> Vec<Token> {
        Lexer::from_source(source).unwrap().tokens().to_vec()
    }

    fn lex_strict(source: &str) -> Result<Vec<Token>, LexerError> {
        Lexer::with_options(source.as_bytes(), LexerOptions::strict())
            .map(|lexer| lexer.tokens().to_vec())
    }

    fn id(name: &str) -> Token {
        Token::Id(name.to_string())
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert_eq!(lex_all(""), vec![Token::Eof]);
    }

    #[test]
    fn test_edge_only_spaces() {
        assert_eq!(lex_all("      \n   \n"), vec![Token::Eof]);
    }

    #[test]
    fn test_edge_single_space_then_char_is_skipped() {
        // one non-space byte at the very end after indentation
        assert_eq!(lex_all(" x\n"), vec![Token::Eof]);
        assert_eq!(lex_all("   )\n"), vec![Token::Eof]);
    }

    #[test]
    fn test_edge_single_char_line_without_indent() {
        assert_eq!(lex_all("x\n"), vec![id("x"), Token::Newline, Token::Eof]);
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        assert_eq!(
            lex_all("x = 1\r\nif x:\r\n  y = 2\r\n  \r\n"),
            vec![
                id("x"),
                Token::Char('='),
                Token::Number(1),
                Token::Newline,
                Token::If,
                id("x"),
                Token::Char(':'),
                Token::Newline,
                Token::Indent,
                id("y"),
                Token::Char('='),
                Token::Number(2),
                Token::Newline,
                Token::Dedent,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_edge_odd_indentation_rounds_down() {
        let tokens = lex_all("a = 1\n   b = 2\n");
        assert_eq!(tokens.iter().filter(|t| **t == Token::Indent).count(), 1);
    }

    #[test]
    fn test_edge_one_space_is_no_indent() {
        let tokens = lex_all("a = 1\n b = 2\n");
        assert!(!tokens.contains(&Token::Indent));
    }

    #[test]
    fn test_edge_jump_two_levels() {
        let tokens = lex_all("a = 1\n    b = 2\n");
        assert_eq!(
            tokens,
            vec![
                id("a"),
                Token::Char('='),
                Token::Number(1),
                Token::Newline,
                Token::Indent,
                Token::Indent,
                id("b"),
                Token::Char('='),
                Token::Number(2),
                Token::Newline,
                Token::Dedent,
                Token::Dedent,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_edge_leading_tab_is_not_indentation() {
        assert_eq!(
            lex_all("\tx = 1\n"),
            vec![
                Token::Char('\t'),
                id("x"),
                Token::Char('='),
                Token::Number(1),
                Token::Newline,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_edge_comment_between_blocks() {
        let tokens = lex_all("if a:\n  b = 1\n# done\nc = 2\n");
        let dedent = tokens.iter().position(|t| *t == Token::Dedent).unwrap();
        assert_eq!(tokens[dedent + 1], id("c"));
    }

    #[test]
    fn test_edge_hash_inside_string() {
        assert_eq!(
            lex_all("print '#1'\n"),
            vec![
                Token::Print,
                Token::String("#1".to_string()),
                Token::Newline,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_edge_comment_right_after_token() {
        assert_eq!(
            lex_all("x#y\n"),
            vec![id("x"), Token::Newline, Token::Eof]
        );
    }

    #[test]
    fn test_edge_negative_number_is_two_tokens() {
        assert_eq!(
            lex_all("-5\n"),
            vec![Token::Char('-'), Token::Number(5), Token::Newline, Token::Eof]
        );
    }

    #[test]
    fn test_edge_digit_then_letters() {
        assert_eq!(
            lex_all("12abc\n"),
            vec![Token::Number(12), id("abc"), Token::Newline, Token::Eof]
        );
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let tokens = lex_all(&format!("{} = 1\n", name));
        assert_eq!(tokens[0], id(&name));
    }

    #[test]
    fn test_edge_keywords_not_idents() {
        let tokens = lex_all("class return if else def print\n");
        assert_eq!(
            &tokens[..6],
            &[
                Token::Class,
                Token::Return,
                Token::If,
                Token::Else,
                Token::Def,
                Token::Print,
            ]
        );
    }

    #[test]
    fn test_edge_unclassified_punctuation() {
        assert_eq!(
            lex_all("a[0] % b\n"),
            vec![
                id("a"),
                Token::Char('['),
                Token::Number(0),
                Token::Char(']'),
                Token::Char('%'),
                id("b"),
                Token::Newline,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_edge_non_ascii_starting_a_token_is_skipped() {
        assert_eq!(
            lex_all("x = \u{e9}1\n"),
            vec![id("x"), Token::Char('='), Token::Number(1), Token::Newline, Token::Eof]
        );
    }

    #[test]
    fn test_edge_non_ascii_inside_identifier_is_kept() {
        assert_eq!(
            lex_all("caf\u{e9} = 1\n"),
            vec![id("caf\u{e9}"), Token::Char('='), Token::Number(1), Token::Newline, Token::Eof]
        );
        assert_eq!(
            Lexer::new(&b"x\x07y\n"[..]).unwrap().tokens(),
            &[id("x\u{7}y"), Token::Newline, Token::Eof]
        );
    }

    #[test]
    fn test_edge_non_ascii_inside_string_is_kept() {
        assert_eq!(
            lex_all("s = 'caf\u{e9}'\n")[2],
            Token::String("caf\u{e9}".to_string())
        );
    }

    #[test]
    fn test_edge_line_of_only_stray_bytes() {
        assert_eq!(lex_all("\u{1}\u{2}\n"), vec![Token::Eof]);
    }

    #[test]
    fn test_edge_unterminated_string_ends_at_line() {
        assert_eq!(
            lex_all("s = 'abc\nt = 1\n"),
            vec![
                id("s"),
                Token::Char('='),
                Token::String("abc".to_string()),
                Token::Newline,
                id("t"),
                Token::Char('='),
                Token::Number(1),
                Token::Newline,
                Token::Eof,
            ]
        );
    }

    // ==================== STRICT MODE ====================

    #[test]
    fn test_strict_accepts_well_formed_source() {
        let tokens = lex_strict("def f(x):\n  return x + 1\n").unwrap();
        assert_eq!(tokens.last(), Some(&Token::Eof));
    }

    #[test]
    fn test_strict_reports_line_of_unterminated_string() {
        let err = lex_strict("a = 1\nb = \"oops\n").unwrap_err();
        assert!(matches!(err, LexerError::UnterminatedString { line: 2 }));
    }

    #[test]
    fn test_strict_reports_overflow() {
        let err = lex_strict("n = 4294967296\n").unwrap_err();
        assert!(matches!(err, LexerError::IntegerOverflow { line: 1, .. }));
    }

    #[test]
    fn test_strict_reports_stray_byte() {
        let err = lex_strict("x = 1\n\n  y = \u{7f}\n").unwrap_err();
        assert!(matches!(err, LexerError::StrayByte { line: 3, byte: 0x7f }));
    }

    #[test]
    fn test_strict_ignores_comments_and_blank_lines() {
        assert!(lex_strict("# \u{1} anything\n\n  \n").is_ok());
    }
}
