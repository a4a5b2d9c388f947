/// The parser type, its result alias and the program entry rule.
pub mod core;

/// Statement rules.
///
/// Declarations and assignments, including the symbol-table updates they
/// perform.
pub mod statement;

/// `if` and `while` blocks and the scope each of them opens.
pub mod block;

/// Conditions and left-associative arithmetic.
///
/// Evaluates `+`, `-`, `*` and `/` with the usual precedence, and relational
/// comparisons between two expressions.
pub mod binary;

/// Factors: parenthesized expressions, variable reads and literals.
pub mod factor;

/// Token-matching helpers shared by the grammar rules.
pub mod utils;
