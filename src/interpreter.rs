/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence of
/// tokens, each corresponding to a keyword, identifier, literal, operator or
/// punctuation mark. This is the first stage of checking.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their source line.
/// - Recognises the Arabic keywords and their ASCII aliases.
/// - Reports lexical errors for unknown characters and oversized literals.
pub mod lexer;
/// The parser module recognises the grammar and executes it in one pass.
///
/// The parser consumes the token sequence with one procedure per grammar
/// rule. While it validates syntax it evaluates expressions and declares and
/// assigns variables, so no separate tree is built.
///
/// # Responsibilities
/// - Validates statements, blocks, conditions and expressions.
/// - Computes values for declarations and assignments.
/// - Opens and closes one scope per block.
pub mod parser;
/// The scope module holds the scoped symbol table.
///
/// A stack of name-to-binding maps supporting declaration, assignment and
/// lookup with shadowing across nested blocks.
pub mod scope;
/// The value module defines the numbers expressions compute.
///
/// # Responsibilities
/// - Defines the `Value` enum with whole and real variants.
/// - Implements arithmetic with promotion and overflow checks.
/// - Implements relational comparisons.
pub mod value;
