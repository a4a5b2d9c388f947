use log::debug;

use crate::interpreter::{
    lexer::Token,
    parser::core::{ParseResult, Parser},
};

impl Parser<'_> {
    /// Parses an `if` statement.
    ///
    /// Grammar: `if := "if" "(" condition ")" "{" statement_list "}"`
    pub(in crate::interpreter::parser) fn parse_if(&mut self) -> ParseResult<()> {
        self.parse_guarded_block(&Token::If)
    }

    /// Parses a `while` statement.
    ///
    /// Grammar: `while := "while" "(" condition ")" "{" statement_list "}"`
    pub(in crate::interpreter::parser) fn parse_while(&mut self) -> ParseResult<()> {
        self.parse_guarded_block(&Token::While)
    }

    /// Shared body of `if` and `while`.
    ///
    /// The condition is fully evaluated but its result is discarded: the body
    /// executes exactly once, in a fresh scope, whatever the condition says,
    /// and a `while` body is never repeated.
    ///
    /// The scope is popped before the closing brace is matched. If the body
    /// fails, the scope stays on the stack.
    fn parse_guarded_block(&mut self, keyword: &Token) -> ParseResult<()> {
        self.expect(keyword)?;
        self.expect(&Token::LParen)?;
        let holds = self.parse_condition()?;
        self.expect(&Token::RParen)?;
        let line = self.expect(&Token::LBrace)?;

        debug!("line {line}: {keyword} condition is {holds}, body runs once");

        self.scopes.enter_scope();
        self.parse_statement_list()?;
        self.scopes.exit_scope().map_err(|e| e.at_line(self.line))?;

        self.expect(&Token::RBrace)?;
        Ok(())
    }
}
