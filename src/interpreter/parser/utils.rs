use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl<'a> Parser<'a> {
    /// Consumes the next token if it equals `expected`.
    ///
    /// Only used for tokens without a payload; identifiers go through
    /// [`Parser::expect_identifier`].
    ///
    /// # Returns
    /// The line of the consumed token.
    ///
    /// # Errors
    /// `ParseError::ExpectedTokenMismatch` naming both tokens if the next
    /// token differs.
    pub(in crate::interpreter::parser) fn expect(&mut self, expected: &Token) -> ParseResult<usize> {
        let found = self.peek()?;
        if found != expected {
            return Err(ParseError::ExpectedTokenMismatch { expected: expected.to_string(),
                                                           found:    found.to_string(),
                                                           line:     self.line, }.into());
        }
        self.advance();
        Ok(self.line)
    }

    /// Consumes an identifier and returns its name.
    ///
    /// # Errors
    /// `ParseError::ExpectedTokenMismatch` if the next token is not an
    /// identifier.
    pub(in crate::interpreter::parser) fn expect_identifier(&mut self) -> ParseResult<&'a str> {
        match self.peek()? {
            Token::Identifier(name) => {
                self.advance();
                Ok(name.as_str())
            },
            found => Err(ParseError::ExpectedTokenMismatch { expected: "identifier".to_string(),
                                                             found:    found.to_string(),
                                                             line:     self.line, }.into()),
        }
    }
}
