use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref ESCAPE_CODE_LOOKUP: HashMap<char, char> = {
        let mut map = HashMap::new();
        map.insert('a', '\x07');
        map.insert('b', '\x08');
        map.insert('t', '\t');
        map.insert('n', '\n');
        map.insert('v', '\x0b');
        map.insert('f', '\x0c');
        map.insert('r', '\r');
        map.insert('e', '\x1b');
        map.insert('\\', '\\');
        map.insert('\'', '\'');
        map.insert('"', '"');
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,

    Number,  // 3.14
    Integer, // 42
    Character,
    String,
    Identifier,

    EOF,
}

impl TokenKind {
    /// Human readable name, used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::LeftParen => "Left Parenthesis",
            TokenKind::RightParen => "Right Parenthesis",
            TokenKind::LeftBracket => "Left Bracket",
            TokenKind::RightBracket => "Right Bracket",
            TokenKind::Number => "Number",
            TokenKind::Integer => "Integer",
            TokenKind::Character => "Character",
            TokenKind::String => "String",
            TokenKind::Identifier => "Identifier",
            TokenKind::EOF => "End Of File",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LEXEME: {}, TYPE: {}, LINE: {}.",
            self.lexeme, self.kind, self.line
        )
    }
}
