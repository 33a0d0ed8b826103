//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for single character tokens

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The token's text
/// * `$line` - The 1-based line the token starts on
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $line:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            lexeme: $lexeme,
            line: $line,
        }
    };
}

/// Creates a lexer handler for a token made of one fixed character.
///
/// The generated handler pushes a token of the given kind on the current
/// line and moves the cursor past the character.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\(").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::LeftParen, "("),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _matched: usize| {
            let line = lexer.line();
            lexer.push(MK_TOKEN!($kind, String::from($value), line));
            lexer.advance_n($value.len());
            Ok(())
        }
    };
}
