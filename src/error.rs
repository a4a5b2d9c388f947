use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur during lexing and grammar
/// recognition: unknown characters, oversized literals, and tokens that do
/// not fit the grammar at the current position.
pub mod parse_error;
/// Semantic errors.
///
/// Contains the errors raised while statements execute: symbol-table
/// violations (duplicate declarations, unknown or uninitialized names) and
/// arithmetic failures.
pub mod semantic_error;

pub use parse_error::ParseError;
pub use semantic_error::SemanticError;

/// The single error surface returned by [`crate::check`] and the parser.
///
/// The first error encountered aborts the run; there is no recovery and no
/// collection of further errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The input is lexically or syntactically malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The input is well-formed but violates a scoping or arithmetic rule.
    #[error(transparent)]
    Semantic(#[from] SemanticError),
}

impl Error {
    /// The source line the error was detected on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Parse(e) => e.line(),
            Self::Semantic(e) => e.line(),
        }
    }
}
