//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Delimiters and identifiers
//! - Numeric literals (integers, decimals, separators, negatives)
//! - Character and string literals with escape sequences
//! - Comments and line tracking
//! - Error cases

use proptest::prelude::*;

use super::{lexer::tokenize, tokens::TokenKind};
use crate::errors::errors::ErrorImpl;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), None)
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_delimiters() {
    assert_eq!(
        kinds("( ) [ ]"),
        vec![
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::LeftBracket,
            TokenKind::RightBracket,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize(String::new(), None).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!(tokens[0].lexeme, "EOF");
    assert_eq!(tokens[0].line, 1);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar-baz + <= a[1] nil".to_string();
    let tokens = tokenize(source, Some("test.mlsp".to_string())).unwrap();

    let lexemes: Vec<&str> = tokens.iter().map(|token| token.lexeme.as_str()).collect();
    assert_eq!(lexemes, vec!["foo", "bar-baz", "+", "<=", "a[1]", "nil", "EOF"]);
    assert!(tokens[..6].iter().all(|token| token.kind == TokenKind::Identifier));
}

#[test]
fn test_identifier_stops_at_delimiters() {
    let tokens = tokenize("(a)b\"s\"c'x;d".to_string(), None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::LeftParen);
    assert_eq!(tokens[1].lexeme, "a");
    assert_eq!(tokens[2].kind, TokenKind::RightParen);
    assert_eq!(tokens[3].lexeme, "b");
    assert_eq!(tokens[4].kind, TokenKind::String);
    assert_eq!(tokens[5].lexeme, "c");
    assert_eq!(tokens[6].kind, TokenKind::Character);
    assert_eq!(tokens[6].lexeme, "x");
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 -5 -2.5 1_000 1_000.000_1".to_string();
    let tokens = tokenize(source, None).unwrap();

    let expected = [
        (TokenKind::Integer, "42"),
        (TokenKind::Number, "3.14"),
        (TokenKind::Integer, "0"),
        (TokenKind::Integer, "-5"),
        (TokenKind::Number, "-2.5"),
        (TokenKind::Integer, "1000"),
        (TokenKind::Number, "1000.0001"),
    ];

    for (token, (kind, lexeme)) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, kind);
        assert_eq!(token.lexeme, lexeme);
    }
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_lone_dash_is_identifier() {
    let tokens = tokenize("- -x (-)".to_string(), None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "-");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].lexeme, "-x");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].lexeme, "-");
    assert_eq!(tokens[4].kind, TokenKind::RightParen);
}

#[test]
fn test_number_stops_at_other_characters() {
    let tokens = tokenize("12abc 7)".to_string(), None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].lexeme, "12");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].lexeme, "abc");
    assert_eq!(tokens[2].lexeme, "7");
    assert_eq!(tokens[3].kind, TokenKind::RightParen);
}

#[test]
fn test_malformed_numbers() {
    for source in ["1__2", "1._2", "1_.2", "1.2.3", "-1..2"] {
        let error = tokenize(source.to_string(), None).unwrap_err();
        assert!(
            matches!(error.get_impl(), ErrorImpl::MalformedNumber { .. }),
            "{} should be malformed, got {:?}",
            source,
            error
        );
    }
}

#[test]
fn test_trailing_separator() {
    for source in ["1_", "1.", "-3_", "12.5_ x"] {
        let error = tokenize(source.to_string(), None).unwrap_err();
        assert!(
            matches!(error.get_impl(), ErrorImpl::TrailingSeparator { .. }),
            "{} should end with a separator, got {:?}",
            source,
            error
        );
    }
}

#[test]
fn test_tokenize_strings() {
    let source = r#""hello" "world" "multiple words" """#.to_string();
    let tokens = tokenize(source, None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, "hello");
    assert_eq!(tokens[1].lexeme, "world");
    assert_eq!(tokens[2].lexeme, "multiple words");
    assert_eq!(tokens[3].kind, TokenKind::String);
    assert_eq!(tokens[3].lexeme, "");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_escapes() {
    let source = r#""a\nb" "tab\there" "back\\slash" "\"quoted\"" "\a\b\v\f\r\e\'""#.to_string();
    let tokens = tokenize(source, None).unwrap();

    assert_eq!(tokens[0].lexeme, "a\nb");
    assert_eq!(tokens[1].lexeme, "tab\there");
    assert_eq!(tokens[2].lexeme, "back\\slash");
    assert_eq!(tokens[3].lexeme, "\"quoted\"");
    assert_eq!(tokens[4].lexeme, "\x07\x08\x0b\x0c\r\x1b'");
}

#[test]
fn test_unknown_escape_code() {
    let error = tokenize(r#""bad\q""#.to_string(), None).unwrap_err();

    assert_eq!(error.get_impl(), &ErrorImpl::UnknownEscapeCode { code: 'q' });
    assert_eq!(error.get_line(), 1);
}

#[test]
fn test_unterminated_string_cites_opening_line() {
    let error = tokenize("(a)\n\"abc\n\ndef".to_string(), None).unwrap_err();

    assert_eq!(error.get_impl(), &ErrorImpl::UnterminatedString);
    assert_eq!(error.get_line(), 2);

    let error = tokenize("\"abc\\".to_string(), None).unwrap_err();
    assert_eq!(error.get_impl(), &ErrorImpl::UnterminatedString);
}

#[test]
fn test_multiline_string() {
    let tokens = tokenize("\"one\ntwo\" after".to_string(), None).unwrap();

    assert_eq!(tokens[0].lexeme, "one\ntwo");
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].lexeme, "after");
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn test_tokenize_characters() {
    let tokens = tokenize(r"'a '\n '\\ '( 'é".to_string(), None).unwrap();

    assert!(tokens[..5].iter().all(|token| token.kind == TokenKind::Character));
    assert_eq!(tokens[0].lexeme, "a");
    assert_eq!(tokens[1].lexeme, "\n");
    assert_eq!(tokens[2].lexeme, "\\");
    assert_eq!(tokens[3].lexeme, "(");
    assert_eq!(tokens[4].lexeme, "é");
}

#[test]
fn test_unterminated_character() {
    let error = tokenize("'".to_string(), None).unwrap_err();
    assert_eq!(error.get_impl(), &ErrorImpl::UnterminatedCharacter);

    let error = tokenize("'\\".to_string(), None).unwrap_err();
    assert_eq!(error.get_impl(), &ErrorImpl::UnterminatedCharacter);
}

#[test]
fn test_comments_are_skipped() {
    let source = "; leading comment\n(a ; trailing ( comment\n b) ; end".to_string();
    let tokens = tokenize(source, None).unwrap();

    let lexemes: Vec<&str> = tokens.iter().map(|token| token.lexeme.as_str()).collect();
    assert_eq!(lexemes, vec!["(", "a", "b", ")", "EOF"]);
    assert_eq!(tokens[0].line, 2);
    assert_eq!(tokens[2].line, 3);
    assert_eq!(tokens[4].line, 3);
}

#[test]
fn test_line_tracking() {
    let tokens = tokenize("a\n\nb\r\n  c\n".to_string(), None).unwrap();

    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].line, 3);
    assert_eq!(tokens[2].line, 4);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
    assert_eq!(tokens[3].line, 5);
}

#[test]
fn test_error_carries_file_name() {
    let error = tokenize("\"open".to_string(), Some("test.mlsp".to_string())).unwrap_err();
    assert_eq!(error.get_position().file(), "test.mlsp");

    let error = tokenize("\"open".to_string(), None).unwrap_err();
    assert_eq!(error.get_position().file(), "shell");
}

#[test]
fn test_only_ascii_whitespace_separates() {
    let tokens = tokenize("a\u{a0}b\x0bc\x0cd".to_string(), None).unwrap();

    let lexemes: Vec<&str> = tokens.iter().map(|token| token.lexeme.as_str()).collect();
    assert_eq!(lexemes, vec!["a\u{a0}b", "c", "d", "EOF"]);
}

proptest! {
    #[test]
    fn eof_is_last_and_unique(words in prop::collection::vec("[a-z()\\[\\] \n]{0,8}", 0..16)) {
        let source = words.join(" ");
        let tokens = tokenize(source, None).unwrap();

        prop_assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::EOF));
        prop_assert_eq!(tokens.iter().filter(|token| token.kind == TokenKind::EOF).count(), 1);
    }

    #[test]
    fn token_line_counts_preceding_newlines(
        pieces in prop::collection::vec(("[a-z]{1,6}", "[ \n]{1,3}"), 1..12)
    ) {
        let mut source = String::new();
        let mut expected = vec![];
        for (word, gap) in &pieces {
            expected.push(source.matches('\n').count() + 1);
            source.push_str(word);
            source.push_str(gap);
        }
        let final_line = source.matches('\n').count() + 1;

        let tokens = tokenize(source, None).unwrap();
        let lines: Vec<usize> = tokens.iter().map(|token| token.line).collect();

        prop_assert_eq!(&lines[..lines.len() - 1], &expected[..]);
        prop_assert_eq!(lines[lines.len() - 1], final_line);
    }

    #[test]
    fn integers_keep_their_digits(value in any::<i64>()) {
        let tokens = tokenize(value.to_string(), None).unwrap();

        prop_assert_eq!(tokens[0].kind, TokenKind::Integer);
        prop_assert_eq!(&tokens[0].lexeme, &value.to_string());
    }
}

#[test]
fn test_token_display() {
    let tokens = tokenize("(x".to_string(), None).unwrap();

    assert_eq!(tokens[0].to_string(), "LEXEME: (, TYPE: Left Parenthesis, LINE: 1.");
    assert_eq!(tokens[2].to_string(), "LEXEME: EOF, TYPE: End Of File, LINE: 1.");
}
