use crate::interpreter::lexer::Token;

/// A binary arithmetic operator appearing in an expression or term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, always real-valued.
    Div,
}

impl ArithmeticOperator {
    /// Maps `+` and `-` to their operator, or `None` for any other token.
    #[must_use]
    pub const fn additive(token: &Token) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Sub),
            _ => None,
        }
    }

    /// Maps `*` and `/` to their operator, or `None` for any other token.
    #[must_use]
    pub const fn multiplicative(token: &Token) -> Option<Self> {
        match token {
            Token::Star => Some(Self::Mul),
            Token::Slash => Some(Self::Div),
            _ => None,
        }
    }
}

impl std::fmt::Display for ArithmeticOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{symbol}")
    }
}

/// One of the six comparison operators accepted in a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationalOperator {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
}

impl TryFrom<&Token> for RelationalOperator {
    type Error = ();

    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        match token {
            Token::EqualEqual => Ok(Self::Equal),
            Token::BangEqual => Ok(Self::NotEqual),
            Token::Greater => Ok(Self::Greater),
            Token::GreaterEqual => Ok(Self::GreaterEqual),
            Token::Less => Ok(Self::Less),
            Token::LessEqual => Ok(Self::LessEqual),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for RelationalOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
        };
        write!(f, "{symbol}")
    }
}
