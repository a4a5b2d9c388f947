use crate::{
    error::{ParseError, SemanticError},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
        value::core::Value,
    },
};

impl Parser<'_> {
    /// Parses a factor: a parenthesized expression, a variable or a literal.
    ///
    /// Grammar: `factor := "(" expression ")" | IDENT | NUM`
    ///
    /// # Errors
    /// - `ParseError::UnexpectedToken` if the next token starts no factor.
    /// - `SemanticError::UseBeforeDeclaration` or
    ///   `SemanticError::UseBeforeInitialization` for unusable variables.
    pub(in crate::interpreter::parser) fn parse_factor(&mut self) -> ParseResult<Value> {
        match self.peek()? {
            Token::LParen => {
                self.advance();
                let value = self.parse_expression()?;
                self.expect(&Token::RParen)?;
                Ok(value)
            },
            Token::Identifier(name) => {
                let line = self.line;
                self.advance();
                self.read_variable(name, line)
            },
            Token::Integer(n) => {
                self.advance();
                Ok(Value::Integer(*n))
            },
            token => Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                       line:  self.line, }.into()),
        }
    }

    /// Resolves a variable read inside an expression.
    fn read_variable(&self, name: &str, line: usize) -> ParseResult<Value> {
        let entry =
            self.scopes
                .lookup(name)
                .ok_or_else(|| SemanticError::UseBeforeDeclaration { name: name.to_string(),
                                                                     line })?;

        match entry.value {
            Some(value) if entry.initialized => Ok(value),
            _ => Err(SemanticError::UseBeforeInitialization { name: name.to_string(),
                                                              line }.into()),
        }
    }
}
