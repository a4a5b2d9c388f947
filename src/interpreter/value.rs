/// Operator kinds.
///
/// Maps arithmetic and relational tokens onto the operators the evaluator
/// applies to values.
pub mod operator;

pub mod core;
