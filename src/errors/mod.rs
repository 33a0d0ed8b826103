//! Error types and error handling for the front end.
//!
//! Every lexical, syntactic and conversion failure is reported as an
//! [`errors::Error`] carrying the 1-based source line it was detected on.
//! Errors are fatal for the current parse; callers propagate them with `?`
//! up to a single handler that renders them.

pub mod errors;
