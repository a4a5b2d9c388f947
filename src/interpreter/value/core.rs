use std::cmp::Ordering;

use crate::{
    error::SemanticError,
    interpreter::value::operator::{ArithmeticOperator, RelationalOperator},
    util::num::{cmp_i64_f64, f64_trunc_to_i64_checked},
};

/// Result type used while computing values.
pub type EvalResult<T> = Result<T, SemanticError>;

/// A value computed by an expression and stored in a variable.
///
/// Literals are always whole numbers; a real only appears as the result of a
/// division or of arithmetic involving another real.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A whole number (64 bit integer).
    Integer(i64),
    /// A real number (double precision floating-point).
    Real(f64),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // `{:?}` keeps the fractional part of whole reals: `4.0`, not `4`.
            Self::Real(r) => write!(f, "{r:?}"),
        }
    }
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// Whole numbers above `2^53` in magnitude round to the nearest
    /// representable real.
    ///
    /// # Example
    /// ```
    /// use nahw::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real(), 10.0);
    /// assert_eq!(Value::Real(2.5).as_real(), 2.5);
    /// assert_eq!(Value::Integer(9_007_199_254_740_993).as_real(), 9_007_199_254_740_992.0);
    /// ```
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Real(r) => r,
        }
    }

    /// Truncates the value toward zero to a whole number.
    ///
    /// Whole numbers are returned unchanged.
    ///
    /// # Errors
    /// Returns `SemanticError::ArithmeticOverflow` for reals that are not
    /// finite or fall outside the `i64` range.
    pub fn truncate(self, line: usize) -> EvalResult<Self> {
        match self {
            Self::Integer(_) => Ok(self),
            Self::Real(r) => Ok(Self::Integer(f64_trunc_to_i64_checked(r, line)?)),
        }
    }

    /// Applies an arithmetic operator to two values.
    ///
    /// Two whole operands stay whole for `+`, `-` and `*`; a real operand
    /// promotes the operation to reals. Division always produces a real.
    /// Promotion rounds like [`Value::as_real`] and never fails.
    ///
    /// # Errors
    /// - `SemanticError::ArithmeticOverflow` if whole-number arithmetic leaves
    ///   the `i64` range.
    /// - `SemanticError::DivisionByZero` if the divisor is zero.
    ///
    /// # Example
    /// ```
    /// use nahw::interpreter::value::{core::Value, operator::ArithmeticOperator};
    ///
    /// let ten = Value::Integer(10);
    /// let four = Value::Integer(4);
    ///
    /// assert_eq!(ten.apply(ArithmeticOperator::Div, four, 1).unwrap(), Value::Real(2.5));
    /// assert_eq!(ten.apply(ArithmeticOperator::Mul, four, 1).unwrap(), Value::Integer(40));
    /// ```
    pub fn apply(self, op: ArithmeticOperator, right: Self, line: usize) -> EvalResult<Self> {
        use ArithmeticOperator::{Add, Div, Mul, Sub};

        let overflow = SemanticError::ArithmeticOverflow { line };

        match (op, self, right) {
            (Div, left, right) => {
                let divisor = right.as_real();
                if divisor == 0.0 {
                    return Err(SemanticError::DivisionByZero { line });
                }
                Ok(Self::Real(left.as_real() / divisor))
            },
            (Add, Self::Integer(a), Self::Integer(b)) => a.checked_add(b).map(Self::Integer).ok_or(overflow),
            (Sub, Self::Integer(a), Self::Integer(b)) => a.checked_sub(b).map(Self::Integer).ok_or(overflow),
            (Mul, Self::Integer(a), Self::Integer(b)) => a.checked_mul(b).map(Self::Integer).ok_or(overflow),
            (op, left, right) => {
                let (a, b) = (left.as_real(), right.as_real());
                Ok(Self::Real(match op {
                                  Add => a + b,
                                  Sub => a - b,
                                  _ => a * b,
                              }))
            },
        }
    }

    /// Compares two values with a relational operator.
    ///
    /// Mixed whole/real comparisons are exact: the whole operand is never
    /// rounded to a real first.
    #[must_use]
    pub fn compare(self, op: RelationalOperator, right: Self) -> bool {
        let ordering = match (self, right) {
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(&b)),
            (Self::Integer(a), Self::Real(b)) => cmp_i64_f64(a, b),
            (Self::Real(a), Self::Integer(b)) => cmp_i64_f64(b, a).map(Ordering::reverse),
            (Self::Real(a), Self::Real(b)) => a.partial_cmp(&b),
        };

        match op {
            RelationalOperator::Equal => ordering == Some(Ordering::Equal),
            RelationalOperator::NotEqual => ordering != Some(Ordering::Equal),
            RelationalOperator::Greater => ordering == Some(Ordering::Greater),
            RelationalOperator::GreaterEqual => {
                matches!(ordering, Some(Ordering::Greater | Ordering::Equal))
            },
            RelationalOperator::Less => ordering == Some(Ordering::Less),
            RelationalOperator::LessEqual => {
                matches!(ordering, Some(Ordering::Less | Ordering::Equal))
            },
        }
    }
}
