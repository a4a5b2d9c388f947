use std::fs;

use nahw::{
    Error, check,
    error::{ParseError, SemanticError},
    get_result,
    interpreter::value::core::Value,
};
use walkdir::WalkDir;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_success(src: &str) {
    init_logger();
    if let Err(e) = get_result(src) {
        panic!("Script failed: {e}");
    }
}

fn expect_error(src: &str) -> Error {
    init_logger();
    match get_result(src) {
        Ok(scopes) => panic!("Script succeeded but was expected to fail, scopes: {scopes}"),
        Err(e) => e,
    }
}

fn global_value(src: &str, name: &str) -> Value {
    let scopes = get_result(src).unwrap_or_else(|e| panic!("Script failed: {e}"));
    let entry = scopes.lookup(name)
                      .unwrap_or_else(|| panic!("'{name}' is not declared in {scopes}"));
    assert!(entry.initialized, "'{name}' is not initialized");
    entry.value.unwrap_or_else(|| panic!("'{name}' has no value"))
}

fn programs_in(dir: &str) -> Vec<(String, String)> {
    let programs: Vec<_> =
        WalkDir::new(dir).sort_by_file_name()
                         .into_iter()
                         .filter_map(Result::ok)
                         .filter(|e| e.path().extension().is_some_and(|ext| ext == "nahw"))
                         .map(|e| {
                             let path = e.path().display().to_string();
                             let source = fs::read_to_string(e.path())
                                 .unwrap_or_else(|err| panic!("Failed to read {path}: {err}"));
                             (path, source)
                         })
                         .collect();
    assert!(!programs.is_empty(), "No programs found in {dir}");
    programs
}

#[test]
fn valid_programs_are_accepted() {
    init_logger();
    for (path, source) in programs_in("tests/programs/valid") {
        if let Err(e) = get_result(&source) {
            panic!("{path} was rejected:\n{source}\nError: {e}");
        }
    }
}

#[test]
fn invalid_programs_are_rejected() {
    init_logger();
    for (path, source) in programs_in("tests/programs/invalid") {
        assert!(get_result(&source).is_err(), "{path} was accepted:\n{source}");
    }
}

#[test]
fn end_to_end_program_runs_every_body_once() {
    let source = fs::read_to_string("tests/programs/valid/precedence.nahw").unwrap();
    let scopes = get_result(&source).unwrap();

    assert_eq!(scopes.depth(), 1);
    assert_eq!(scopes.global().len(), 2);
    assert_eq!(scopes.lookup("x").unwrap().value, Some(Value::Integer(26)));
    assert_eq!(scopes.lookup("y").unwrap().value, Some(Value::Integer(31)));
    assert_eq!(scopes.to_string(), "[{x = 26, y = 31}]");
}

#[test]
fn arabic_program_matches_ascii_program() {
    let arabic = fs::read_to_string("tests/programs/valid/arabic_keywords.nahw").unwrap();
    let ascii = fs::read_to_string("tests/programs/valid/precedence.nahw").unwrap();

    assert_eq!(get_result(&arabic).unwrap(), get_result(&ascii).unwrap());
}

#[test]
fn false_conditions_do_not_skip_bodies() {
    let src = "var x = 1;\nif (x > 100) { x = 5; }\nwhile (x < 0) { x = x + 1; }";
    assert_eq!(global_value(src, "x"), Value::Integer(6));
}

#[test]
fn while_body_is_not_repeated() {
    let src = "var n = 0;\nwhile (n < 10) { n = n + 1; }";
    assert_eq!(global_value(src, "n"), Value::Integer(1));
}

#[test]
fn arithmetic_precedence_and_associativity() {
    assert_eq!(global_value("var r = 3 + 5 * (3 - 1);", "r"), Value::Integer(13));
    assert_eq!(global_value("var r = 10 - 4 - 3;", "r"), Value::Integer(3));
    assert_eq!(global_value("var r = 2 * 3 + 4 * 5;", "r"), Value::Integer(26));
    assert_eq!(global_value("var r = ((7));", "r"), Value::Integer(7));
}

#[test]
fn division_is_real_valued() {
    assert_eq!(global_value("var r = 10 / 4;", "r"), Value::Real(2.5));
    assert_eq!(global_value("var r = 8 / 2;", "r"), Value::Real(4.0));
    assert_eq!(global_value("var r = 100 / 10 / 4;", "r"), Value::Real(2.5));
}

#[test]
fn multiplicative_right_operand_is_truncated() {
    let src = "var a = 10 / 4;\nvar b = 2 * a;\nvar c = a * 2;\nvar d = 7 / (5 / 2);";
    let scopes = get_result(src).unwrap();

    assert_eq!(scopes.lookup("b").unwrap().value, Some(Value::Integer(4)));
    assert_eq!(scopes.lookup("c").unwrap().value, Some(Value::Real(5.0)));
    assert_eq!(scopes.lookup("d").unwrap().value, Some(Value::Real(3.5)));
}

#[test]
fn additive_operands_are_not_truncated() {
    assert_eq!(global_value("var r = 1 + 10 / 4;", "r"), Value::Real(3.5));
}

#[test]
fn declaration_initializes_variable() {
    let scopes = get_result("var n = 6 * 7;").unwrap();
    let entry = scopes.lookup("n").unwrap();

    assert!(entry.initialized);
    assert_eq!(entry.value, Some(Value::Integer(42)));
}

#[test]
fn duplicate_declaration_in_same_scope() {
    assert_eq!(expect_error("var a = 1;\nvar a = 2;"),
               Error::Semantic(SemanticError::DuplicateDeclaration { name: "a".to_string(),
                                                                     line: 2, }));
    assert!(matches!(expect_error("if (1 < 2) { var t = 1; var t = 2; }"),
                     Error::Semantic(SemanticError::DuplicateDeclaration { .. })));
}

#[test]
fn shadowing_in_nested_scope_is_allowed() {
    let src = "var a = 1;\nif (a == 1) { var a = 2; a = a + 1; }\nvar b = a;";
    let scopes = get_result(src).unwrap();

    assert_eq!(scopes.lookup("a").unwrap().value, Some(Value::Integer(1)));
    assert_eq!(scopes.lookup("b").unwrap().value, Some(Value::Integer(1)));
}

#[test]
fn nested_assignment_reaches_outer_binding() {
    let src = "var total = 1;\nwhile (total > 0) { if (total > 0) { total = total + 9; } }";
    assert_eq!(global_value(src, "total"), Value::Integer(10));
}

#[test]
fn block_names_are_gone_after_exit() {
    let src = "if (1 == 1) { var inner = 1; }\nvar outer = inner;";
    assert_eq!(expect_error(src),
               Error::Semantic(SemanticError::UseBeforeDeclaration { name: "inner".to_string(),
                                                                     line: 2, }));
}

#[test]
fn assignment_to_undeclared_variable() {
    let report = check("var a = 1;\nb = a;");

    assert_eq!(report.outcome,
               Err(Error::Semantic(SemanticError::UndeclaredVariableAssignment { name: "b".to_string(),
                                                                                 line: 2, })));
    assert!(report.scopes.lookup("b").is_none());
    assert_eq!(report.scopes.global().len(), 1);
}

#[test]
fn read_of_undeclared_variable() {
    assert!(matches!(expect_error("var a = missing + 1;"),
                     Error::Semantic(SemanticError::UseBeforeDeclaration { .. })));
    assert!(matches!(expect_error("if (missing > 1) { }"),
                     Error::Semantic(SemanticError::UseBeforeDeclaration { .. })));
}

#[test]
fn self_referencing_declaration_is_used_before_initialization() {
    let report = check("var x = x + 1;");

    assert_eq!(report.outcome,
               Err(Error::Semantic(SemanticError::UseBeforeInitialization { name: "x".to_string(),
                                                                            line: 1, })));
    let entry = report.scopes.lookup("x").unwrap();
    assert!(!entry.initialized);
    assert_eq!(entry.value, None);
}

#[test]
fn shadowing_declaration_cannot_read_outer_value() {
    let src = "var x = 1;\nif (x == 1) { var x = x + 1; }";
    assert!(matches!(expect_error(src),
                     Error::Semantic(SemanticError::UseBeforeInitialization { .. })));
}

#[test]
fn bare_identifier_statement_is_a_mismatch() {
    let report = check("var x = 1;\nx;");

    assert_eq!(report.outcome,
               Err(Error::Parse(ParseError::ExpectedTokenMismatch { expected: "'='".to_string(),
                                                                    found:    "';'".to_string(),
                                                                    line:     2, })));
    assert_eq!(report.scopes.lookup("x").unwrap().value, Some(Value::Integer(1)));
}

#[test]
fn statement_cannot_start_with_literal() {
    assert_eq!(expect_error("5 = 3;"),
               Error::Parse(ParseError::UnexpectedToken { token: "integer 5".to_string(),
                                                          line:  1, }));
}

#[test]
fn factor_rejects_operator() {
    assert!(matches!(expect_error("var a = ;"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(expect_error("var a = 1 + * 2;"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn missing_relational_operator() {
    assert_eq!(expect_error("var a = 1;\nwhile (a) { a = 2; }"),
               Error::Parse(ParseError::MissingRelationalOperator { found: "')'".to_string(),
                                                                    line:  2, }));
}

#[test]
fn missing_semicolon_and_parens() {
    assert!(matches!(expect_error("var a = 1"),
                     Error::Parse(ParseError::ExpectedTokenMismatch { .. })));
    assert!(matches!(expect_error("var a = (1 + 2;"),
                     Error::Parse(ParseError::ExpectedTokenMismatch { .. })));
    assert!(matches!(expect_error("if 1 < 2 { }"),
                     Error::Parse(ParseError::ExpectedTokenMismatch { .. })));
}

#[test]
fn declaration_without_initializer_declares_nothing() {
    let report = check("var x;");

    assert_eq!(report.outcome,
               Err(Error::Parse(ParseError::ExpectedTokenMismatch { expected: "'='".to_string(),
                                                                    found:    "';'".to_string(),
                                                                    line:     1, })));
    assert!(report.scopes.lookup("x").is_none());
}

#[test]
fn unterminated_statements_leave_scopes_untouched() {
    let report = check("var a = 1;\na = 5");
    assert_eq!(report.outcome,
               Err(Error::Parse(ParseError::ExpectedTokenMismatch { expected: "';'".to_string(),
                                                                    found:    "end of input".to_string(),
                                                                    line:     2, })));
    assert_eq!(report.scopes.lookup("a").unwrap().value, Some(Value::Integer(1)));

    let report = check("var a = 1;\nvar b = a + 1");
    assert!(!report.is_valid());
    assert!(report.scopes.lookup("b").is_none());
    assert_eq!(report.scopes.global().len(), 1);
}

#[test]
fn stray_closing_brace_at_top_level() {
    assert_eq!(expect_error("var a = 1;\n}"),
               Error::Parse(ParseError::ExpectedTokenMismatch { expected: "end of input".to_string(),
                                                                found:    "'}'".to_string(),
                                                                line:     2, }));
}

#[test]
fn unclosed_block_is_reported_after_scope_exit() {
    let report = check("var a = 1;\nif (a == 1) {\n    var b = 2;\n");

    assert!(matches!(report.outcome,
                     Err(Error::Parse(ParseError::ExpectedTokenMismatch { .. }))));
    assert_eq!(report.scopes.depth(), 1);
}

#[test]
fn failure_inside_block_leaves_scope_open() {
    let report = check("var a = 1;\nif (a == 1) {\n    var t = 2;\n    u = 3;\n}");

    assert!(matches!(report.outcome,
                     Err(Error::Semantic(SemanticError::UndeclaredVariableAssignment { .. }))));
    assert_eq!(report.scopes.depth(), 2);
    assert_eq!(report.scopes.innermost().get("t").unwrap().value, Some(Value::Integer(2)));
}

#[test]
fn statements_before_error_stay_executed() {
    let report = check("var a = 1;\na = a + 1;\nvar a = 3;");

    assert!(!report.is_valid());
    assert_eq!(report.scopes.lookup("a").unwrap().value, Some(Value::Integer(2)));
}

#[test]
fn unknown_character_is_a_lexical_error() {
    let report = check("var a = 1;\na = a % 2;");

    assert_eq!(report.outcome,
               Err(Error::Parse(ParseError::UnexpectedCharacter { character: '%',
                                                                  line:      2,
                                                                  column:    7, })));
    // Nothing executes when lexing fails.
    assert!(report.scopes.global().is_empty());
}

#[test]
fn arithmetic_failures() {
    assert_eq!(expect_error("var a = 1 / 0;"),
               Error::Semantic(SemanticError::DivisionByZero { line: 1 }));
    // The divisor 1 / 2 is truncated to 0.
    assert_eq!(expect_error("var a = 1 / (1 / 2);"),
               Error::Semantic(SemanticError::DivisionByZero { line: 1 }));
    assert_eq!(expect_error("var a = 9223372036854775807 + 1;"),
               Error::Semantic(SemanticError::ArithmeticOverflow { line: 1 }));
}

#[test]
fn large_whole_numbers_round_when_promoted() {
    assert_eq!(global_value("var a = 9007199254740993 / 1;", "a"),
               Value::Real(9_007_199_254_740_992.0));
    assert_eq!(global_value("var a = 9223372036854775807 / 2;", "a"),
               Value::Real(4_611_686_018_427_387_904.0));
}

#[test]
fn large_whole_numbers_compare_against_reals() {
    assert_success("var a = 9007199254740993;\nif (a > 10 / 4) { }");

    let src = "var a = 9007199254740993;\nvar b = 0;\nif (a > 9007199254740992 / 1) { b = 1; }";
    assert_eq!(global_value(src, "b"), Value::Integer(1));
}

#[test]
fn arabic_indic_digits_are_whole_numbers() {
    assert_eq!(global_value("متغير x = ١٠ + ۵;", "x"), Value::Integer(15));
}

#[test]
fn unicode_whitespace_and_identifiers_are_accepted() {
    assert_eq!(global_value("var\u{a0}café\u{3000}= 7;", "café"), Value::Integer(7));
}

#[test]
fn error_messages_name_line_and_subject() {
    assert_eq!(expect_error("var a = 1;\nvar a = 2;").to_string(),
               "Error on line 2: Variable 'a' already declared in this scope.");
    assert_eq!(expect_error("var a = b;").to_string(),
               "Error on line 1: Variable 'b' used before declaration.");
    assert_eq!(expect_error("var a = 1;\n\nif (a) { }").to_string(),
               "Error on line 3: Expected a relational operator, got ')'.");
}

#[test]
fn empty_program_is_valid() {
    assert_success("");
    assert_success("   \n\t\n");
}

#[test]
fn empty_blocks_are_valid() {
    assert_success("if (1 < 2) { }\nwhile (1 > 2) { }");
    assert_success("if (1 < 2) { if (2 < 3) { while (3 < 4) { } } }");
}

#[test]
fn every_relational_operator_is_accepted() {
    for op in ["==", "!=", ">", ">=", "<", "<="] {
        assert_success(&format!("var a = 1;\nif (a {op} 2) {{ a = 3; }}"));
    }
}
