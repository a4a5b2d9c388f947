use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Represents all errors raised while statements are executed.
pub enum SemanticError {
    /// The name already exists in the innermost scope.
    #[error("Error on line {line}: Variable '{name}' already declared in this scope.")]
    DuplicateDeclaration {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Assignment to a name no active scope declares.
    #[error("Error on line {line}: Assignment to undeclared variable '{name}'.")]
    UndeclaredVariableAssignment {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An expression reads a name no active scope declares.
    #[error("Error on line {line}: Variable '{name}' used before declaration.")]
    UseBeforeDeclaration {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An expression reads a declared name that holds no value yet.
    #[error("Error on line {line}: Variable '{name}' used before initialization.")]
    UseBeforeInitialization {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Whole-number arithmetic left the `i64` range.
    #[error("Error on line {line}: Integer overflow while trying to compute result.")]
    ArithmeticOverflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A block tried to close the global scope. Indicates unpaired scope
    /// handling, not a problem with the input.
    #[error("Error on line {line}: Block closed without a matching open scope.")]
    UnbalancedScope {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl SemanticError {
    /// The source line the error was detected on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::DuplicateDeclaration { line, .. }
            | Self::UndeclaredVariableAssignment { line, .. }
            | Self::UseBeforeDeclaration { line, .. }
            | Self::UseBeforeInitialization { line, .. }
            | Self::ArithmeticOverflow { line }
            | Self::DivisionByZero { line }
            | Self::UnbalancedScope { line } => *line,
        }
    }
}
