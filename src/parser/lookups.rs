use std::collections::HashMap;

use crate::{ast::ast::StmtId, errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser) -> Result<StmtId, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Scopes
    parser.nud(TokenKind::LeftParen, parse_program_stmt);
    parser.nud(TokenKind::LeftBracket, parse_list_stmt);

    // Literals and symbols
    parser.nud(TokenKind::Number, parse_number_stmt);
    parser.nud(TokenKind::Integer, parse_integer_stmt);
    parser.nud(TokenKind::Character, parse_character_stmt);
    parser.nud(TokenKind::String, parse_string_stmt);
    parser.nud(TokenKind::Identifier, parse_identifier_stmt);
}

// Lookup table inside parser struct, so it's easier
pub type NUDLookup = HashMap<TokenKind, StmtHandler>;
