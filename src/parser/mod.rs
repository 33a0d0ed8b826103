//! Parser module for building the Abstract Syntax Tree (AST).
//!
//! This module contains the recursive descent parser that turns the token
//! stream into an arena-owned tree of statements. It handles:
//!
//! - Parenthesised programs `( ... )` and bracketed lists `[ ... ]`
//! - Number, integer, character, string and identifier literals
//! - Unterminated scope and unexpected token errors
//!
//! Primary statements are dispatched through a lookup table keyed by the
//! kind of the current token, with one token of lookahead and no backtracking.

pub mod lookups;
pub mod parser;
pub mod stmt;
