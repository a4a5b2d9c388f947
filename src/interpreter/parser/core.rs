use std::{iter::Peekable, slice::Iter};

use log::debug;

use crate::{
    error::{Error, ParseError},
    interpreter::{lexer::Token, scope::ScopeStack},
};

/// Result type used by the parser.
///
/// Grammar rules return either a value of type `T` or the first lexical,
/// syntactic or semantic [`Error`] encountered.
pub type ParseResult<T> = Result<T, Error>;

/// Single-pass recursive-descent parser and evaluator.
///
/// Each grammar rule validates its tokens and, where the rule has a meaning,
/// computes values and mutates the owned [`ScopeStack`] at the same time.
/// Tokens are consumed left to right and never rewound.
///
/// ## Usage
///
/// ```
/// use nahw::interpreter::{lexer::tokenize, parser::core::Parser, value::core::Value};
///
/// let tokens = tokenize("var x = 3 + 5 * (3 - 1);").unwrap();
/// let mut parser = Parser::new(&tokens);
/// parser.parse().unwrap();
///
/// let x = parser.scopes().lookup("x").unwrap();
/// assert_eq!(x.value, Some(Value::Integer(13)));
/// ```
pub struct Parser<'a> {
    pub(in crate::interpreter::parser) tokens: Peekable<Iter<'a, (Token, usize)>>,
    pub(in crate::interpreter::parser) scopes: ScopeStack,
    /// Line of the most recently inspected token.
    pub(in crate::interpreter::parser) line:   usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over a token sequence produced by
    /// [`crate::interpreter::lexer::tokenize`], with a fresh scope stack.
    #[must_use]
    pub fn new(tokens: &'a [(Token, usize)]) -> Self {
        Self { tokens: tokens.iter().peekable(),
               scopes: ScopeStack::new(),
               line:   1, }
    }

    /// Parses and executes the whole program.
    ///
    /// Grammar: `program := statement_list EOF`
    ///
    /// # Errors
    /// Returns the first error encountered. Statements before the failure
    /// point have already executed, and their effects stay visible through
    /// [`Parser::scopes`].
    pub fn parse(&mut self) -> ParseResult<()> {
        self.parse_statement_list()?;
        self.expect(&Token::Eof)?;
        debug!("input is syntactically and semantically valid");
        Ok(())
    }

    /// The scope stack in its current state.
    #[must_use]
    pub const fn scopes(&self) -> &ScopeStack {
        &self.scopes
    }

    /// Consumes the parser and returns its scope stack.
    #[must_use]
    pub fn into_scopes(self) -> ScopeStack {
        self.scopes
    }

    /// Parses statements until end of input or a closing brace, neither of
    /// which is consumed.
    ///
    /// Grammar: `statement_list := statement*`
    pub(in crate::interpreter::parser) fn parse_statement_list(&mut self) -> ParseResult<()> {
        while !matches!(self.peek()?, Token::Eof | Token::RBrace) {
            self.parse_statement()?;
        }
        Ok(())
    }

    /// Returns the next token without consuming it and records its line.
    ///
    /// # Errors
    /// `ParseError::UnexpectedEndOfInput` if the sequence is exhausted, which
    /// only happens for token slices lacking a trailing [`Token::Eof`].
    pub(in crate::interpreter::parser) fn peek(&mut self) -> ParseResult<&'a Token> {
        match self.tokens.peek().copied() {
            Some((token, line)) => {
                self.line = *line;
                Ok(token)
            },
            None => Err(ParseError::UnexpectedEndOfInput { line: self.line }.into()),
        }
    }

    /// Consumes the next token.
    pub(in crate::interpreter::parser) fn advance(&mut self) {
        self.tokens.next();
    }
}
