use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at line {}", self.internal_error, self.position.0)
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_line(&self) -> usize {
        self.position.0
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnterminatedCharacter => "UnterminatedCharacter",
            ErrorImpl::UnknownEscapeCode { .. } => "UnknownEscapeCode",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::TrailingSeparator { .. } => "TrailingSeparator",
            ErrorImpl::UnterminatedScope => "UnterminatedScope",
            ErrorImpl::UnterminatedList => "UnterminatedList",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::IntegerParseError { .. } => "IntegerParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("Did you forget a closing `\"`?"))
            }
            ErrorImpl::UnterminatedCharacter => ErrorTip::None,
            ErrorImpl::UnknownEscapeCode { code } => ErrorTip::Suggestion(format!(
                "Unknown escape code `\\{}`, expected one of \\a \\b \\t \\n \\v \\f \\r \\e \\\\ \\' \\\"",
                code
            )),
            ErrorImpl::MalformedNumber { number } => ErrorTip::Suggestion(format!(
                "Number `{}` has consecutive separators or more than one dot",
                number
            )),
            ErrorImpl::TrailingSeparator { number } => ErrorTip::Suggestion(format!(
                "Number `{}` must not end with a `_` or a `.`",
                number
            )),
            ErrorImpl::UnterminatedScope => {
                ErrorTip::Suggestion(String::from("Did you forget a closing `)`?"))
            }
            ErrorImpl::UnterminatedList => {
                ErrorTip::Suggestion(String::from("Did you forget a closing `]`?"))
            }
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, is a delimiter unbalanced?",
                token
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, it may be too large",
                token
            )),
            ErrorImpl::IntegerParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid integer: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Scopes and lists may be nested at most {} levels deep",
                limit
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Lexical
    #[error("unterminated string")]
    UnterminatedString,
    #[error("unterminated character literal")]
    UnterminatedCharacter,
    #[error("unknown escape code '\\{code}'")]
    UnknownEscapeCode { code: char },
    #[error("expected number {number:?} to not have two or more consecutive separators or dots")]
    MalformedNumber { number: String },
    #[error("expected number {number:?} to not end with a separator or a dot")]
    TrailingSeparator { number: String },

    // Syntactic
    #[error("unterminated scope")]
    UnterminatedScope,
    #[error("unterminated list")]
    UnterminatedList,
    #[error("unexpected token {token:?} while parsing")]
    UnexpectedToken { token: String },
    #[error("nesting exceeds the limit of {limit} levels")]
    NestingTooDeep { limit: usize },

    // Conversion
    #[error("number {token:?} could not be converted to a number")]
    NumberParseError { token: String },
    #[error("integer {token:?} could not be converted to an integer")]
    IntegerParseError { token: String },
}
