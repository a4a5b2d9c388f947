use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// A character that starts no token.
    #[error("Error on line {line}, column {column}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
        /// One-based column of the character within its line.
        column:    usize,
    },
    /// An integer literal too large to be represented.
    #[error("Error on line {line}: Integer literal {literal} is too large.")]
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Found a token that starts no statement or factor.
    #[error("Error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A specific token was required but another was found.
    #[error("Error on line {line}: Expected {expected}, got {found}.")]
    ExpectedTokenMismatch {
        /// The token the grammar required.
        expected: String,
        /// The token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A condition lacks one of `==`, `!=`, `>`, `>=`, `<`, `<=`.
    #[error("Error on line {line}: Expected a relational operator, got {found}.")]
    MissingRelationalOperator {
        /// The token found in place of the operator.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The token stream ran out before the end-of-input token was consumed.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The last line seen.
        line: usize,
    },
}

impl ParseError {
    /// The source line the error was detected on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. }
            | Self::LiteralTooLarge { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::ExpectedTokenMismatch { line, .. }
            | Self::MissingRelationalOperator { line, .. }
            | Self::UnexpectedEndOfInput { line } => *line,
        }
    }
}
