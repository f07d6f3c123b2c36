//! End-to-end analysis tests
//!
//! Each case parses a complete program and compares the serialized step
//! table against the exact JSON a consumer would see.

use spacey_analyzer::{Error, StepKind, analyze};

/// Analyze `src` and serialize the model the way the CLI's JSON output does
fn to_json(src: &str) -> String {
    let model = analyze(src).unwrap_or_else(|e| panic!("{src}: {e}"));
    serde_json::to_string(&model).unwrap()
}

fn table(rows: &[&str]) -> String {
    format!("[{}]", rows.join(","))
}

// ============================================================================
// Loops
// ============================================================================

#[test]
fn test_while_simple() {
    assert_eq!(
        to_json("while(x > 5){}"),
        r#"[{"Line":1,"Type":"WhileStatement","Name":"","Condition":"x > 5","Value":""}]"#
    );
}

#[test]
fn test_while_with_body() {
    assert_eq!(
        to_json("while(Y <= 5 && X == 3){Y=Y+2;}"),
        table(&[
            r#"{"Line":1,"Type":"WhileStatement","Name":"","Condition":"Y <= 5 && X == 3","Value":""}"#,
            r#"{"Line":1,"Type":"AssignmentExpression","Name":"Y","Condition":"","Value":"Y + 2"}"#,
        ])
    );
}

#[test]
fn test_for_headers() {
    assert_eq!(
        to_json("for(i=0;i<5;i++){}"),
        r#"[{"Line":1,"Type":"ForStatement","Name":"","Condition":"i = 0;i < 5;i++","Value":""}]"#
    );
    assert_eq!(
        to_json("for(let i=0;i<5;i++){}"),
        r#"[{"Line":1,"Type":"ForStatement","Name":"","Condition":"let i = 0;i < 5;i++","Value":""}]"#
    );
}

#[test]
fn test_for_with_body() {
    let body = r#"{"Line":1,"Type":"AssignmentExpression","Name":"x","Condition":"","Value":"x + 5"}"#;
    assert_eq!(
        to_json("for(i=0;i<5;i++){x=x+5;}"),
        table(&[
            r#"{"Line":1,"Type":"ForStatement","Name":"","Condition":"i = 0;i < 5;i++","Value":""}"#,
            body,
        ])
    );
    assert_eq!(
        to_json("for(let i=0;i<5;i++){x=x+5;}"),
        table(&[
            r#"{"Line":1,"Type":"ForStatement","Name":"","Condition":"let i = 0;i < 5;i++","Value":""}"#,
            body,
        ])
    );
}

// ============================================================================
// Declarations
// ============================================================================

#[test]
fn test_function_declarations() {
    let header = [
        r#"{"Line":1,"Type":"FunctionDeclaration","Name":"mergeSort","Condition":"","Value":""}"#,
        r#"{"Line":1,"Type":"VariableDeclaration","Name":"arr","Condition":"","Value":""}"#,
    ];
    assert_eq!(to_json("function mergeSort (arr){}"), table(&header));

    let mut rows = header.to_vec();
    rows.push(r#"{"Line":1,"Type":"ReturnStatement","Name":"","Condition":"","Value":"arr[0] + 1"}"#);
    assert_eq!(to_json("function mergeSort (arr){return arr[0]+1;}"), table(&rows));

    let mut rows = header.to_vec();
    rows.push(r#"{"Line":1,"Type":"ReturnStatement","Name":"","Condition":"","Value":""}"#);
    assert_eq!(to_json("function mergeSort (arr){return ;}"), table(&rows));
}

#[test]
fn test_variable_declarations() {
    assert_eq!(
        to_json("let x;"),
        r#"[{"Line":1,"Type":"VariableDeclaration","Name":"x","Condition":"","Value":""}]"#
    );
    assert_eq!(
        to_json("var x = 5;"),
        r#"[{"Line":1,"Type":"VariableDeclaration","Name":"x","Condition":"","Value":"5"}]"#
    );
    assert_eq!(
        to_json("var y"),
        r#"[{"Line":1,"Type":"VariableDeclaration","Name":"y","Condition":"","Value":""}]"#
    );
}

// ============================================================================
// Expression Statements
// ============================================================================

#[test]
fn test_update_expressions() {
    let inc = r#"[{"Line":1,"Type":"UpdateExpression","Name":"num","Condition":"","Value":"num + 1"}]"#;
    let dec = r#"[{"Line":1,"Type":"UpdateExpression","Name":"num","Condition":"","Value":"num - 1"}]"#;
    assert_eq!(to_json("num++;"), inc);
    assert_eq!(to_json("++num;"), inc);
    assert_eq!(to_json("num--;"), dec);
    assert_eq!(to_json("--num;"), dec);
}

#[test]
fn test_assignment_expressions() {
    let cases = [
        ("x=y+8;", "y + 8"),
        ("x+=10;", "x + 10"),
        ("x-=15;", "x - 15"),
        ("x=(y+8)*3+4;", "(y + 8) * 3 + 4"),
    ];
    for (src, value) in cases {
        assert_eq!(
            to_json(src),
            format!(
                r#"[{{"Line":1,"Type":"AssignmentExpression","Name":"x","Condition":"","Value":"{value}"}}]"#
            ),
            "{src}"
        );
    }
}

// ============================================================================
// If Chains
// ============================================================================

const IF_X_LT_3: &str = r#"{"Line":1,"Type":"IfStatement","Name":"","Condition":"x < 3","Value":""}"#;
const ELSE_IF_X_GT_3: &str =
    r#"{"Line":1,"Type":"ElseIfStatement","Name":"","Condition":"x > 3","Value":""}"#;
const ELSE: &str = r#"{"Line":1,"Type":"ElseStatement","Name":"","Condition":"","Value":""}"#;
const X_PLUS_2: &str =
    r#"{"Line":1,"Type":"AssignmentExpression","Name":"x","Condition":"","Value":"x + 2"}"#;
const X_MINUS_2: &str =
    r#"{"Line":1,"Type":"AssignmentExpression","Name":"x","Condition":"","Value":"x - 2"}"#;
const X_TIMES_X: &str =
    r#"{"Line":1,"Type":"AssignmentExpression","Name":"x","Condition":"","Value":"x * x"}"#;

#[test]
fn test_if_without_else() {
    assert_eq!(to_json("if(x<3){}"), table(&[IF_X_LT_3]));
}

#[test]
fn test_if_with_empty_else() {
    assert_eq!(to_json("if(x<3){}else{}"), table(&[IF_X_LT_3, ELSE]));
}

#[test]
fn test_if_else_block_and_single_bodies() {
    let expected = table(&[IF_X_LT_3, X_PLUS_2, ELSE, X_MINUS_2]);
    assert_eq!(to_json("if(x<3){x=x+2;}else{x=x-2;}"), expected);
    assert_eq!(to_json("if(x<3) x=x+2; else x=x-2;"), expected);
}

#[test]
fn test_if_else_if() {
    let expected = table(&[IF_X_LT_3, X_PLUS_2, ELSE_IF_X_GT_3, X_MINUS_2]);
    assert_eq!(to_json("if(x<3){x=x+2;}else if(x>3){x=x-2;}"), expected);
    assert_eq!(to_json("if(x<3) x=x+2; else if(x>3) x=x-2;"), expected);
}

#[test]
fn test_if_else_if_else() {
    assert_eq!(
        to_json("if(x<3){x=x+2;}else if(x>3){x=x-2;}else{x=x*x;}"),
        table(&[IF_X_LT_3, X_PLUS_2, ELSE_IF_X_GT_3, X_MINUS_2, ELSE, X_TIMES_X])
    );
}

#[test]
fn test_double_else_if() {
    assert_eq!(
        to_json("if(x<3){x=x+2;}else if(x>3){x=x-2;}else if(x==22){x=x*x;}"),
        table(&[
            IF_X_LT_3,
            X_PLUS_2,
            ELSE_IF_X_GT_3,
            X_MINUS_2,
            r#"{"Line":1,"Type":"ElseIfStatement","Name":"","Condition":"x == 22","Value":""}"#,
            X_TIMES_X,
        ])
    );
}

// ============================================================================
// Whole Programs
// ============================================================================

const BINARY_SEARCH: &str = "function binarySearch(X, V, n){ let low, high, mid; low = 0; high = n - 1; while (low <= high) { mid = (low + high)/2; if (X < V[mid]) high = mid - 1; else if (X > V[mid]) low = mid + 1; else return mid; } return -1; }";

#[test]
fn test_binary_search_one_line() {
    assert_eq!(
        to_json(BINARY_SEARCH),
        table(&[
            r#"{"Line":1,"Type":"FunctionDeclaration","Name":"binarySearch","Condition":"","Value":""}"#,
            r#"{"Line":1,"Type":"VariableDeclaration","Name":"X","Condition":"","Value":""}"#,
            r#"{"Line":1,"Type":"VariableDeclaration","Name":"V","Condition":"","Value":""}"#,
            r#"{"Line":1,"Type":"VariableDeclaration","Name":"n","Condition":"","Value":""}"#,
            r#"{"Line":1,"Type":"VariableDeclaration","Name":"low","Condition":"","Value":""}"#,
            r#"{"Line":1,"Type":"VariableDeclaration","Name":"high","Condition":"","Value":""}"#,
            r#"{"Line":1,"Type":"VariableDeclaration","Name":"mid","Condition":"","Value":""}"#,
            r#"{"Line":1,"Type":"AssignmentExpression","Name":"low","Condition":"","Value":"0"}"#,
            r#"{"Line":1,"Type":"AssignmentExpression","Name":"high","Condition":"","Value":"n - 1"}"#,
            r#"{"Line":1,"Type":"WhileStatement","Name":"","Condition":"low <= high","Value":""}"#,
            r#"{"Line":1,"Type":"AssignmentExpression","Name":"mid","Condition":"","Value":"(low + high) / 2"}"#,
            r#"{"Line":1,"Type":"IfStatement","Name":"","Condition":"X < V[mid]","Value":""}"#,
            r#"{"Line":1,"Type":"AssignmentExpression","Name":"high","Condition":"","Value":"mid - 1"}"#,
            r#"{"Line":1,"Type":"ElseIfStatement","Name":"","Condition":"X > V[mid]","Value":""}"#,
            r#"{"Line":1,"Type":"AssignmentExpression","Name":"low","Condition":"","Value":"mid + 1"}"#,
            r#"{"Line":1,"Type":"ElseStatement","Name":"","Condition":"","Value":""}"#,
            r#"{"Line":1,"Type":"ReturnStatement","Name":"","Condition":"","Value":"mid"}"#,
            r#"{"Line":1,"Type":"ReturnStatement","Name":"","Condition":"","Value":"-1"}"#,
        ])
    );
}

#[test]
fn test_binary_search_multi_line() {
    let src = "\
function binarySearch(X, V, n) {
    let low, high, mid;
    low = 0;
    high = n - 1;
    while (low <= high) {
        mid = (low + high) / 2;
        if (X < V[mid])
            high = mid - 1;
        else if (X > V[mid])
            low = mid + 1;
        else
            return mid;
    }
    return -1;
}
";
    let model = analyze(src).unwrap();
    let lines: Vec<(StepKind, u32)> = model.iter().map(|r| (r.kind(), r.line())).collect();
    assert_eq!(
        lines,
        vec![
            (StepKind::FunctionDeclaration, 1),
            (StepKind::VariableDeclaration, 1),
            (StepKind::VariableDeclaration, 1),
            (StepKind::VariableDeclaration, 1),
            (StepKind::VariableDeclaration, 2),
            (StepKind::VariableDeclaration, 2),
            (StepKind::VariableDeclaration, 2),
            (StepKind::AssignmentExpression, 3),
            (StepKind::AssignmentExpression, 4),
            (StepKind::WhileStatement, 5),
            (StepKind::AssignmentExpression, 6),
            (StepKind::IfStatement, 7),
            (StepKind::AssignmentExpression, 8),
            (StepKind::ElseIfStatement, 9),
            (StepKind::AssignmentExpression, 10),
            (StepKind::ElseStatement, 12),
            (StepKind::ReturnStatement, 12),
            (StepKind::ReturnStatement, 14),
        ]
    );
}

#[test]
fn test_text_fields_match_kind() {
    let model = analyze(BINARY_SEARCH).unwrap();
    for record in &model {
        match record.kind() {
            StepKind::FunctionDeclaration | StepKind::VariableDeclaration => {
                assert!(!record.name().is_empty());
                assert!(record.condition().is_empty());
            }
            StepKind::WhileStatement | StepKind::IfStatement | StepKind::ElseIfStatement => {
                assert!(record.name().is_empty());
                assert!(!record.condition().is_empty());
                assert!(record.value().is_empty());
            }
            StepKind::ElseStatement => {
                assert!(record.name().is_empty());
                assert!(record.condition().is_empty());
                assert!(record.value().is_empty());
            }
            StepKind::AssignmentExpression | StepKind::UpdateExpression => {
                assert!(!record.name().is_empty());
                assert!(record.condition().is_empty());
            }
            StepKind::ReturnStatement => assert!(record.name().is_empty()),
            StepKind::ForStatement => assert!(record.condition().contains(';')),
        }
    }
}

#[test]
fn test_compound_assignment_value_is_plain_text() {
    assert_eq!(
        to_json("x -= a - b;"),
        r#"[{"Line":1,"Type":"AssignmentExpression","Name":"x","Condition":"","Value":"x - a - b"}]"#
    );
}

#[test]
fn test_lines_with_carriage_return_endings() {
    for src in ["a = 1;\rb = 2;", "a = 1;\r\nb = 2;", "a = 1;\u{2028}b = 2;"] {
        let lines: Vec<u32> = analyze(src).unwrap().iter().map(|r| r.line()).collect();
        assert_eq!(lines, vec![1, 2], "{src:?}");
    }
}

#[test]
fn test_trailing_dot_number() {
    assert_eq!(
        to_json("x = 1.;"),
        r#"[{"Line":1,"Type":"AssignmentExpression","Name":"x","Condition":"","Value":"1"}]"#
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_syntax_error_reports_line() {
    let err = analyze("let a = 1;\nwhile (a < ) {\n}").unwrap_err();
    assert!(matches!(err, Error::Syntax { .. }), "{err:?}");
    assert_eq!(err.line(), Some(2));
    assert!(err.to_string().starts_with("SyntaxError: "));
}

#[test]
fn test_unsupported_constructs_report_line() {
    let cases = [
        ("x = 1;\ndo { x++; } while (x < 3);", "DoWhileStatement", 2),
        ("function f() {\n  x *= 2;\n}", "*=", 2),
        ("if (a) {\n} else {\n  g();\n}", "CallExpression", 3),
        ("for (const k of items) {}", "ForOfStatement", 1),
        ("outer:\nwhile (a) {}", "LabeledStatement", 1),
    ];
    for (src, construct, line) in cases {
        let err = analyze(src).unwrap_err();
        assert_eq!(
            err,
            Error::Unsupported {
                construct: construct.to_string(),
                line,
            },
            "{src}"
        );
    }
}
