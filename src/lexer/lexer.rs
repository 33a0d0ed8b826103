use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, ESCAPE_CODE_LOOKUP};

/// Called with the length in bytes of the text its pattern matched at the cursor.
pub type PatternHandler = fn(&mut Lexer, usize) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: PatternHandler,
}

lazy_static! {
    // Tried in order; the first pattern matching at the cursor wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^[ \t\n\x0b\x0c\r]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^;[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LeftParen, "(") },
        RegexPattern { regex: Regex::new(r"^\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RightParen, ")") },
        RegexPattern { regex: Regex::new(r"^\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LeftBracket, "[") },
        RegexPattern { regex: Regex::new(r"^\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RightBracket, "]") },
        RegexPattern { regex: Regex::new(r"^-?[0-9]").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r"^'").unwrap(), handler: character_handler },
        RegexPattern { regex: Regex::new("^\"").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new(r#"^[^"';() \t\n\x0b\x0c\r]+"#).unwrap(), handler: identifier_handler },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
            file: file_name,
        }
    }

    /// Moves the cursor `n` bytes forward, counting the newlines passed over.
    pub fn advance_n(&mut self, n: usize) {
        let end = (self.pos + n).min(self.source.len());
        self.line += self.source[self.pos..end].matches('\n').count();
        self.pos = end;
    }

    /// Consumes and returns the character under the cursor.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.at()?;
        self.advance_n(ch.len_utf8());
        Some(ch)
    }

    pub fn push(&mut self, token: Token) {
        trace!(kind = %token.kind, lexeme = %token.lexeme, line = token.line, "token");
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    fn error_at(&self, error: ErrorImpl, line: usize) -> Error {
        Error::new(error, Position(line, Rc::clone(&self.file)))
    }

    fn error(&self, error: ErrorImpl) -> Error {
        self.error_at(error, self.line)
    }

    /// Resolves the character following a backslash.
    fn escape_code(&self, code: char) -> Result<char, Error> {
        ESCAPE_CODE_LOOKUP
            .get(&code)
            .copied()
            .ok_or_else(|| self.error(ErrorImpl::UnknownEscapeCode { code }))
    }
}

fn skip_handler(lexer: &mut Lexer, matched: usize) -> Result<(), Error> {
    lexer.advance_n(matched);
    Ok(())
}

fn number_handler(lexer: &mut Lexer, _matched: usize) -> Result<(), Error> {
    let start = lexer.pos;
    let line = lexer.line;
    let mut number = String::new();

    if lexer.at() == Some('-') {
        number.push('-');
        lexer.advance();
    }

    let mut dot = false;
    // Set after a `_` or `.`, neither of which may be followed by another.
    let mut last_separator = false;

    while let Some(ch) = lexer.at() {
        match ch {
            '0'..='9' => {
                number.push(ch);
                last_separator = false;
            }
            '_' | '.' => {
                if last_separator || (ch == '.' && dot) {
                    let raw = lexer.source[start..lexer.pos + 1].to_string();
                    return Err(lexer.error(ErrorImpl::MalformedNumber { number: raw }));
                }

                if ch == '.' {
                    dot = true;
                    number.push('.');
                }
                last_separator = true;
            }
            _ => break,
        }

        lexer.advance();
    }

    if last_separator {
        let raw = lexer.source[start..lexer.pos].to_string();
        return Err(lexer.error(ErrorImpl::TrailingSeparator { number: raw }));
    }

    let kind = if dot { TokenKind::Number } else { TokenKind::Integer };
    lexer.push(MK_TOKEN!(kind, number, line));
    Ok(())
}

fn character_handler(lexer: &mut Lexer, matched: usize) -> Result<(), Error> {
    let line = lexer.line;
    lexer.advance_n(matched);

    let mut character = lexer
        .advance()
        .ok_or_else(|| lexer.error_at(ErrorImpl::UnterminatedCharacter, line))?;

    if character == '\\' {
        let code = lexer
            .advance()
            .ok_or_else(|| lexer.error_at(ErrorImpl::UnterminatedCharacter, line))?;
        character = lexer.escape_code(code)?;
    }

    lexer.push(MK_TOKEN!(TokenKind::Character, character.to_string(), line));
    Ok(())
}

fn string_handler(lexer: &mut Lexer, matched: usize) -> Result<(), Error> {
    let opening_line = lexer.line;
    lexer.advance_n(matched);

    let mut string = String::new();

    loop {
        match lexer.advance() {
            Some('"') => break,
            Some('\\') => {
                let code = lexer
                    .advance()
                    .ok_or_else(|| lexer.error_at(ErrorImpl::UnterminatedString, opening_line))?;
                string.push(lexer.escape_code(code)?);
            }
            Some(ch) => string.push(ch),
            None => return Err(lexer.error_at(ErrorImpl::UnterminatedString, opening_line)),
        }
    }

    lexer.push(MK_TOKEN!(TokenKind::String, string, opening_line));
    Ok(())
}

fn identifier_handler(lexer: &mut Lexer, matched: usize) -> Result<(), Error> {
    let identifier = lexer.remainder()[..matched].to_string();
    let line = lexer.line;

    lexer.push(MK_TOKEN!(TokenKind::Identifier, identifier, line));
    lexer.advance_n(matched);
    Ok(())
}

/// Converts `source` into tokens, always terminated by a single `EOF` token.
///
/// `file` names the source in error positions and defaults to `shell`.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let (handler, matched) = PATTERNS
            .iter()
            .find_map(|pattern| {
                pattern
                    .regex
                    .find(lex.remainder())
                    .map(|found| (pattern.handler, found.end()))
            })
            // Every character the patterns above leave out starts an identifier.
            .unwrap_or((identifier_handler as PatternHandler, lex.at().map_or(1, char::len_utf8)));

        handler(&mut lex, matched)?;
    }

    let line = lex.line;
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), line));
    debug!(file = %lex.file, tokens = lex.tokens.len(), lines = line, "tokenized");

    Ok(lex.tokens)
}
