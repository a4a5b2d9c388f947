//! # nahw
//!
//! nahw is a lexer and single-pass syntax/semantic checker for a tiny
//! imperative language with Arabic keywords. It validates a program's
//! grammar while evaluating its declarations and assignments, and reports
//! either success or the first error encountered together with the final
//! state of every scope.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{lexer::tokenize, parser::core::Parser, scope::ScopeStack};

/// Provides unified error types for lexing, parsing and execution.
///
/// This module defines all errors that can be raised while checking a
/// program. Every error carries the source line it was detected on.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, semantics).
/// - Combines them into the single [`error::Error`] surface.
pub mod error;
/// Orchestrates the process of checking source code.
///
/// This module ties together lexing, parsing with immediate evaluation, the
/// scoped symbol table and value representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, symbol table and values.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

pub use error::Error;

/// The outcome of checking one program.
///
/// The scope stack is returned whether or not checking succeeded. On failure
/// it reflects every statement executed before the error, including blocks
/// that were still open.
#[derive(Debug)]
pub struct Report {
    /// `Ok(())` if the program is syntactically and semantically valid.
    pub outcome: Result<(), Error>,
    /// The symbol table as it stood when checking stopped.
    pub scopes:  ScopeStack,
}

impl Report {
    /// Returns `true` if the program was accepted.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Lexes, parses and executes a program, returning the outcome and the final
/// scope stack.
///
/// A lexical error stops before parsing starts, leaving only the empty
/// global scope.
///
/// # Examples
/// ```
/// use nahw::{check, interpreter::value::core::Value};
///
/// let report = check("var x = 2;\nx = x * 21;");
/// assert!(report.is_valid());
/// assert_eq!(report.scopes.lookup("x").unwrap().value, Some(Value::Integer(42)));
///
/// // Statements before the error have already executed.
/// let report = check("var a = 1;\nb = 2;");
/// assert!(!report.is_valid());
/// assert!(report.scopes.lookup("a").is_some());
/// ```
#[must_use]
pub fn check(source: &str) -> Report {
    let tokens = match tokenize(source) {
        Ok(tokens) => tokens,
        Err(e) => {
            return Report { outcome: Err(e.into()),
                            scopes:  ScopeStack::new(), };
        },
    };

    let mut parser = Parser::new(&tokens);
    let outcome = parser.parse();

    Report { outcome,
             scopes: parser.into_scopes() }
}

/// Checks a program and returns its final scope stack on success.
///
/// # Errors
/// Returns the first lexical, syntactic or semantic error encountered.
///
/// # Examples
/// ```
/// use nahw::get_result;
///
/// let scopes = get_result("متغير y = 5;").unwrap();
/// assert_eq!(scopes.global().len(), 1);
///
/// // Example with an intentional error (unknown variable).
/// assert!(get_result("var y = x + 1;").is_err());
/// ```
pub fn get_result(source: &str) -> Result<ScopeStack, Error> {
    let Report { outcome, scopes } = check(source);
    outcome.map(|()| scopes)
}
