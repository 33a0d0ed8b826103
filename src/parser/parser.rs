//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser walks the token stream left to right with one token of
//! lookahead and emplaces every statement into an [`AstTree`], children
//! before the scope that contains them.

use std::{collections::HashMap, rc::Rc};

use tracing::debug;

use crate::{
    ast::{
        ast::{Stmt, StmtId},
        tree::AstTree,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    lookups::{create_token_lookups, NUDLookup, StmtHandler},
    stmt::parse_primary_stmt,
};

/// Deepest allowed nesting of `( ... )` and `[ ... ]` scopes.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source being parsed
    file: Rc<String>,
    /// Lookup table for primary statement handlers
    nud_lookup: NUDLookup,
    /// The tree being built
    tree: AstTree,
    /// Number of scopes currently open
    depth: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse
    /// * `file` - Reference-counted string containing the source name
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
            nud_lookup: HashMap::new(),
            tree: AstTree::new(),
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token; running off the end reads as EOF.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().map_or(TokenKind::EOF, |token| token.kind)
    }

    /// Line of the current token, or of the last one once the stream is exhausted.
    pub fn current_line(&self) -> usize {
        self.current_token()
            .or(self.tokens.last())
            .map_or(1, |token| token.line)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == kind
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.current_token_kind())
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consumes the current token if it has the expected kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an
    /// `UnexpectedToken` error at the current line.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if !self.is(expected_kind) {
            return Err(self.unexpected_token());
        }

        self.advance()
            .cloned()
            .ok_or_else(|| self.unexpected_token())
    }

    pub fn unexpected_token(&self) -> Error {
        self.error(ErrorImpl::UnexpectedToken {
            token: self.current_token_kind().name().to_string(),
        })
    }

    pub fn error(&self, error: ErrorImpl) -> Error {
        self.error_at(error, self.current_line())
    }

    pub fn error_at(&self, error: ErrorImpl, line: usize) -> Error {
        Error::new(error, Position(line, Rc::clone(&self.file)))
    }

    /// Returns a reference to the primary statement lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Registers a primary statement handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `nud_fn` - The handler function for statements starting with it
    pub fn nud(&mut self, kind: TokenKind, nud_fn: StmtHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    pub fn emplace(&mut self, stmt: Stmt) -> StmtId {
        self.tree.emplace(stmt)
    }

    /// Opens a scope that started on `line`, failing past [`MAX_NESTING_DEPTH`].
    pub fn enter_scope(&mut self, line: usize) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error_at(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                line,
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn exit_scope(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup table, and parses top-level statements until EOF.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse, normally ending in an EOF token
/// * `file` - Reference-counted string containing the source name
///
/// # Returns
///
/// The completed tree, with `program` listing the top-level statements,
/// or the first error encountered.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<AstTree, Error> {
    let mut parser = Parser::new(tokens, file);
    create_token_lookups(&mut parser);

    while !parser.is(TokenKind::EOF) {
        let stmt = parse_primary_stmt(&mut parser)?;
        parser.tree.program.push(stmt);
    }

    debug!(
        file = %parser.file,
        statements = parser.tree.len(),
        top_level = parser.tree.program.len(),
        "parsed"
    );

    Ok(parser.tree)
}
