use crate::{
    ast::ast::{Stmt, StmtId},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Parses one primary statement, dispatching on the kind of the current token.
pub fn parse_primary_stmt(parser: &mut Parser) -> Result<StmtId, Error> {
    let kind = parser.current_token_kind();
    let handler = parser.get_nud_lookup().get(&kind).copied();

    match handler {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected_token()),
    }
}

/// Parses statements until `close`, returning them with the opening line.
fn parse_scope_body(
    parser: &mut Parser,
    open: TokenKind,
    close: TokenKind,
    unterminated: ErrorImpl,
) -> Result<(Vec<StmtId>, usize), Error> {
    let line = parser.expect(open)?.line;
    parser.enter_scope(line)?;

    let mut elements = vec![];
    while !parser.is_one_of_many(&[TokenKind::EOF, close]) {
        elements.push(parse_primary_stmt(parser)?);
    }

    if !parser.is(close) {
        return Err(parser.error_at(unterminated, line));
    }

    parser.advance();
    parser.exit_scope();
    Ok((elements, line))
}

pub fn parse_program_stmt(parser: &mut Parser) -> Result<StmtId, Error> {
    let (elements, line) = parse_scope_body(
        parser,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        ErrorImpl::UnterminatedScope,
    )?;

    Ok(parser.emplace(Stmt::Program { elements, line }))
}

pub fn parse_list_stmt(parser: &mut Parser) -> Result<StmtId, Error> {
    let (elements, line) = parse_scope_body(
        parser,
        TokenKind::LeftBracket,
        TokenKind::RightBracket,
        ErrorImpl::UnterminatedList,
    )?;

    Ok(parser.emplace(Stmt::List { elements, line }))
}

pub fn parse_number_stmt(parser: &mut Parser) -> Result<StmtId, Error> {
    let token = parser.expect(TokenKind::Number)?;

    let value = token
        .lexeme
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| {
            parser.error_at(
                ErrorImpl::NumberParseError {
                    token: token.lexeme.clone(),
                },
                token.line,
            )
        })?;

    Ok(parser.emplace(Stmt::Number {
        value,
        line: token.line,
    }))
}

pub fn parse_integer_stmt(parser: &mut Parser) -> Result<StmtId, Error> {
    let token = parser.expect(TokenKind::Integer)?;

    let value = token.lexeme.parse::<i64>().map_err(|_| {
        parser.error_at(
            ErrorImpl::IntegerParseError {
                token: token.lexeme.clone(),
            },
            token.line,
        )
    })?;

    Ok(parser.emplace(Stmt::Integer {
        value,
        line: token.line,
    }))
}

pub fn parse_character_stmt(parser: &mut Parser) -> Result<StmtId, Error> {
    let token = parser.expect(TokenKind::Character)?;

    let value = token.lexeme.chars().next().ok_or_else(|| {
        parser.error_at(
            ErrorImpl::UnexpectedToken {
                token: TokenKind::Character.name().to_string(),
            },
            token.line,
        )
    })?;

    Ok(parser.emplace(Stmt::Character {
        value,
        line: token.line,
    }))
}

pub fn parse_string_stmt(parser: &mut Parser) -> Result<StmtId, Error> {
    let token = parser.expect(TokenKind::String)?;

    Ok(parser.emplace(Stmt::String {
        value: token.lexeme,
        line: token.line,
    }))
}

pub fn parse_identifier_stmt(parser: &mut Parser) -> Result<StmtId, Error> {
    let token = parser.expect(TokenKind::Identifier)?;

    Ok(parser.emplace(Stmt::Identifier {
        name: token.lexeme,
        line: token.line,
    }))
}
