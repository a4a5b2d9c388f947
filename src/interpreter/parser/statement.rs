use log::debug;

use crate::{
    error::{ParseError, SemanticError},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses and executes a single statement.
    ///
    /// A statement may be one of:
    /// - a variable declaration (`var x = ...;`),
    /// - an assignment (`x = ...;`),
    /// - an `if` block,
    /// - a `while` block.
    ///
    /// The alternative is chosen from the first token alone.
    ///
    /// # Errors
    /// `ParseError::UnexpectedToken` if the next token starts none of them.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> ParseResult<()> {
        match self.peek()? {
            Token::Var => self.parse_declaration(),
            Token::Identifier(_) => self.parse_assignment(),
            Token::If => self.parse_if(),
            Token::While => self.parse_while(),
            token => Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                       line:  self.line, }.into()),
        }
    }

    /// Parses a variable declaration and initializes the new variable.
    ///
    /// Grammar: `declaration := "var" IDENT "=" expression ";"`
    ///
    /// The name is declared in the innermost scope once `=` has been matched
    /// and before the initializer is evaluated, so an initializer that reads
    /// the name it declares fails with `UseBeforeInitialization`. The value is
    /// only stored after the closing `;`.
    ///
    /// # Errors
    /// - `SemanticError::DuplicateDeclaration` if the innermost scope already
    ///   declares the name.
    /// - Any error raised by the initializer or by a missing token.
    fn parse_declaration(&mut self) -> ParseResult<()> {
        self.expect(&Token::Var)?;
        let name = self.expect_identifier()?;
        let line = self.line;
        self.expect(&Token::Equals)?;

        self.scopes.declare(name).map_err(|e| e.at_line(line))?;
        let value = self.parse_expression()?;
        self.expect(&Token::Semicolon)?;

        self.scopes.assign(name, value).map_err(|e| e.at_line(line))?;
        debug!("line {line}: declared {name} = {value}");
        Ok(())
    }

    /// Parses an assignment to an existing variable.
    ///
    /// Grammar: `assignment := IDENT "=" expression ";"`
    ///
    /// The nearest binding of the name is updated once the closing `;` has
    /// been matched; no binding is ever created.
    ///
    /// # Errors
    /// - `SemanticError::UndeclaredVariableAssignment` if no active scope
    ///   declares the name.
    /// - Any error raised by the expression or by a missing token.
    fn parse_assignment(&mut self) -> ParseResult<()> {
        let name = self.expect_identifier()?;
        let line = self.line;

        if self.scopes.lookup(name).is_none() {
            return Err(SemanticError::UndeclaredVariableAssignment { name: name.to_string(),
                                                                     line }.into());
        }
        self.expect(&Token::Equals)?;

        let value = self.parse_expression()?;
        self.expect(&Token::Semicolon)?;

        self.scopes.assign(name, value).map_err(|e| e.at_line(line))?;
        debug!("line {line}: assigned {name} = {value}");
        Ok(())
    }
}
