use log::trace;

use crate::{
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        value::{
            core::Value,
            operator::{ArithmeticOperator, RelationalOperator},
        },
    },
};

impl Parser<'_> {
    /// Parses a condition and computes its truth value.
    ///
    /// Grammar: `condition := expression relop expression`
    ///
    /// # Errors
    /// `ParseError::MissingRelationalOperator` if the token after the left
    /// expression is not one of `==`, `!=`, `>`, `>=`, `<`, `<=`.
    pub(in crate::interpreter::parser) fn parse_condition(&mut self) -> ParseResult<bool> {
        let left = self.parse_expression()?;

        let token = self.peek()?;
        let Ok(op) = RelationalOperator::try_from(token) else {
            return Err(ParseError::MissingRelationalOperator { found: token.to_string(),
                                                               line:  self.line, }.into());
        };
        let line = self.line;
        self.advance();

        let right = self.parse_expression()?;
        let holds = left.compare(op, right);
        trace!("line {line}: {left} {op} {right} is {holds}");
        Ok(holds)
    }

    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// Grammar: `expression := term (("+" | "-") term)*`
    pub(in crate::interpreter::parser) fn parse_expression(&mut self) -> ParseResult<Value> {
        let mut value = self.parse_term()?;
        while let Some(op) = ArithmeticOperator::additive(self.peek()?) {
            let line = self.line;
            self.advance();

            let right = self.parse_term()?;
            value = value.apply(op, right, line)?;
        }
        Ok(value)
    }

    /// Parses multiplication and division expressions.
    ///
    /// Handles left-associative binary operators: `*` and `/`. The right
    /// operand is truncated toward zero to a whole number before it is
    /// applied; the left operand is used as is.
    ///
    /// Grammar: `term := factor (("*" | "/") factor)*`
    fn parse_term(&mut self) -> ParseResult<Value> {
        let mut value = self.parse_factor()?;
        while let Some(op) = ArithmeticOperator::multiplicative(self.peek()?) {
            let line = self.line;
            self.advance();

            let right = self.parse_factor()?.truncate(line)?;
            value = value.apply(op, right, line)?;
        }
        Ok(value)
    }
}
