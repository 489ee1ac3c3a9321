use std::fs::{self};

use reckon::{calculate, interpreter::value::core::Variant};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_expression_blocks(&content).into_iter().enumerate() {
            count += 1;
            match calculate(&code) {
                Ok(Variant::Boolean(true)) => {},
                Ok(other) => panic!("Example {} in {:?} gave {:?}, expected true:\n{}",
                                    i + 1,
                                    path,
                                    other,
                                    code),
                Err(e) => panic!("Example {} in {:?} failed:\n{}\nError: {}", i + 1, path, code, e),
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_expression_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```reckon") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_success(src: &str) {
    match calculate(src) {
        Ok(Variant::Boolean(true)) => {},
        Ok(other) => panic!("Expression {src:?} gave {other:?}, expected true"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(value) = calculate(src) {
        panic!("Expression {src:?} gave {value:?} but was expected to fail")
    }
}

#[test]
fn basic_arithmetic() {
    assert_success("1 + 2 = 3");
    assert_success("7 * 9 = 63");
    assert_success("8 - 5 = 3");
    assert_success("10 / 2 = 5");
    assert_success("10 / 4 = 2");
    assert_success("10.0 / 4 = 2.5");
    assert_success("17 % 5 = 2");
}

#[test]
fn operator_precedence() {
    assert_success("2 + 3 * 4 = 14");
    assert_success("(2 + 3) * 4 = 20");
    assert_success("2 * 3 ^ 2 = 18");
    assert_success("1 << 3 + 1 = 9");
    assert_success("NOT 1 = 2");
}

#[test]
fn unary_operators() {
    assert_success("-5 + 3 = -2");
    assert_success("-(-5) = 5");
    assert_success("+7 = 7");
    assert_success("-(2 + 3) = -5");
}

#[test]
fn logic_and_bitwise() {
    assert_success("TRUE AND NOT FALSE");
    assert_success("(TRUE XOR TRUE) = FALSE");
    assert_success("(6 AND 3) = 2");
    assert_success("(6 OR 3) = 7");
    assert_success("(6 XOR 3) = 5");
    assert_success("(NOT 0) = -1");
}

#[test]
fn strings() {
    assert_success("'abc' + 'def' = 'abcdef'");
    assert_success("'n = ' + 5 = 'n = 5'");
    assert_success("'abc' < 'abd'");
    assert_success("'it''s'[2] = ''''");
    assert_success("'Hello World' LIKE 'hello%'");
    assert_success("'Hello' NOT LIKE 'H_llo_'");
}

#[test]
fn nulls() {
    assert_success("NULL IS NULL");
    assert_success("(NULL + 1) IS NULL");
    assert_success("(NULL < 1) IS NULL");
    assert_success("NOT NULL");
    assert_success("NULL <> 0");
}

#[test]
fn arrays() {
    assert_success("Array(1, 2, 3)[2] = 3");
    assert_success("3 IN Array(1, 2, 3)");
    assert_success("'b' IN Array('a', 'b')");
    assert_success("4 NOT IN Array(1, 2, 3)");
    assert_success("Array(1, 2) = Array(1, 2)");
    assert_success("Array(Array(1, 2), Array(3))[0][1] = 2");
}

#[test]
fn comments_are_ignored() {
    assert_success("1 + /* inline */ 1 = 2");
    assert_success("2 > 1 // trailing");
}

#[test]
fn keywords_ignore_case() {
    assert_success("true and not false");
    assert_success("null is Null");
    assert_success("'x' like 'X'");
}

#[test]
fn invalid_expressions_fail() {
    assert_failure("");
    assert_failure("1 +");
    assert_failure("(1 + 2");
    assert_failure("Array(1)[");
    assert_failure("1 2");
    assert_failure("1 # 2");
    assert_failure("undefined_variable");
    assert_failure("UnknownFunction(1)");
    assert_failure("1 / 0");
    assert_failure("'abc'[3]");
    assert_failure("'abc' * 2");
    assert_failure("Abs(1, 2)");
}
