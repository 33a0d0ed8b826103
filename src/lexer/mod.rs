//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a flat stream of tokens for parsing. It handles:
//!
//! - Parentheses and brackets
//! - Integer and decimal literals with `_` digit separators
//! - Character and string literals with backslash escapes
//! - Identifiers, `;` line comments and whitespace
//! - Line tracking for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
