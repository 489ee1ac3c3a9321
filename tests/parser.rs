use reckon::{
    error::SyntaxError,
    interpreter::{
        instruction::{Instruction, InstructionKind},
        parser::core::{ExpressionParser, Program, parse},
        value::core::Variant,
    },
    tokenizer::token::Position,
};

fn postfix(source: &str) -> Vec<String> {
    let program = parse(source).unwrap_or_else(|e| panic!("{source:?} failed to parse: {e}"));
    program.instructions().iter().map(ToString::to_string).collect()
}

fn assert_postfix(source: &str, expected: &[&str]) {
    assert_eq!(postfix(source), expected, "postfix of {source:?}");
}

fn assert_syntax_error(source: &str) -> SyntaxError {
    match parse(source) {
        Ok(program) => panic!("{source:?} parsed to {program:?} but was expected to fail"),
        Err(e) => e,
    }
}

fn kinds(program: &Program) -> Vec<InstructionKind> {
    program.instructions().iter().map(Instruction::kind).collect()
}

#[test]
fn function_call_emits_count_then_name() {
    let program = parse("(2+2)*ABS(-2)").unwrap();
    let expected = [Instruction::constant(Variant::Integer(2), Position::new(1, 2)),
                    Instruction::constant(Variant::Integer(2), Position::new(1, 4)),
                    Instruction::operator(InstructionKind::Add, Position::new(1, 3)),
                    Instruction::constant(Variant::Integer(2), Position::new(1, 12)),
                    Instruction::operator(InstructionKind::Unary, Position::new(1, 11)),
                    Instruction::constant(Variant::Integer(1), Position::new(1, 7)),
                    Instruction::function("ABS", Position::new(1, 7)),
                    Instruction::operator(InstructionKind::Mul, Position::new(1, 6))];
    assert_eq!(program.instructions(), expected);
    assert!(program.variable_names().is_empty());
}

#[test]
fn variables_are_listed_once_in_order() {
    let program = parse("A + b / (3 - Max(-123, 1)*2) + A + a").unwrap();
    assert_eq!(program.variable_names(), ["A", "b", "a"]);
}

#[test]
fn function_names_are_not_variables() {
    let program = parse("Now() + x").unwrap();
    assert_eq!(program.variable_names(), ["x"]);
    assert_postfix("Now()", &["0", "Now()"]);
    assert_postfix("f(1,)", &["1", "1", "f()"]);
}

#[test]
fn precedence_levels() {
    assert_postfix("1 + 2 * 3", &["1", "2", "3", "*", "+"]);
    assert_postfix("1 * 2 + 3", &["1", "2", "*", "3", "+"]);
    assert_postfix("2 ^ 3 * 4", &["2", "3", "^", "4", "*"]);
    assert_postfix("a = 1 AND b < 2", &["a", "1", "=", "b", "2", "<", "AND"]);
    assert_postfix("1 + 2 = 3", &["1", "2", "+", "3", "="]);
    assert_postfix("1 << 2 + 1", &["1", "2", "<<", "1", "+"]);
}

#[test]
fn operators_associate_left() {
    assert_postfix("8 - 3 - 1", &["8", "3", "-", "1", "-"]);
    assert_postfix("2 ^ 3 ^ 2", &["2", "3", "^", "2", "^"]);
    assert_postfix("a OR b AND c", &["a", "b", "OR", "c", "AND"]);
}

#[test]
fn not_is_emitted_after_its_operand() {
    assert_postfix("NOT a = 1", &["a", "1", "=", "NOT"]);
    assert_postfix("NOT a OR b", &["a", "NOT", "b", "OR"]);
}

#[test]
fn unary_signs() {
    assert_postfix("-x ^ 2", &["x", "neg", "2", "^"]);
    assert_postfix("+5", &["5"]);
    assert_postfix("3 - -2", &["3", "2", "neg", "-"]);
}

#[test]
fn sql_operators() {
    assert_postfix("name LIKE 'A%'", &["name", "'A%'", "LIKE"]);
    assert_postfix("name NOT LIKE 'A%'", &["name", "'A%'", "NOT LIKE"]);
    assert_postfix("x IS NULL", &["x", "IS NULL"]);
    assert_postfix("x IS NOT NULL AND y", &["x", "IS NOT NULL", "y", "AND"]);
    assert_postfix("2 IN a", &["2", "a", "IN"]);
    assert_postfix("5 NOT IN a", &["5", "a", "NOT IN"]);
}

#[test]
fn literals() {
    let program = parse("TRUE XOR false").unwrap();
    assert_eq!(program.instructions()[0].value(), &Variant::Boolean(true));
    assert_eq!(program.instructions()[1].value(), &Variant::Boolean(false));

    let program = parse("NULL").unwrap();
    assert_eq!(program.instructions()[0].value(), &Variant::Null);

    let program = parse("3000000000 + 1.5 + 2e2 + 'it''s'").unwrap();
    let values: Vec<&Variant> = program.instructions()
                                       .iter()
                                       .filter(|i| i.kind() == InstructionKind::Constant)
                                       .map(Instruction::value)
                                       .collect();
    assert_eq!(values,
               [&Variant::Long(3_000_000_000),
                &Variant::Double(1.5),
                &Variant::Double(200.0),
                &Variant::from("it's")]);
}

#[test]
fn quoted_identifiers() {
    let program = parse("\"unit price\" * 2").unwrap();
    assert_eq!(program.variable_names(), ["unit price"]);
}

#[test]
fn element_access_chains() {
    assert_postfix("'abc'[1]", &["'abc'", "1", "[]"]);
    assert_postfix("m[i + 1][0]", &["m", "i", "1", "+", "[]", "0", "[]"]);
    assert_postfix("-a[0]", &["a", "neg", "0", "[]"]);

    let program = parse("m[0]").unwrap();
    let element = program.instructions().last().unwrap();
    assert_eq!(element.kind(), InstructionKind::Element);
    assert_eq!(element.position(), Position::new(1, 2));
}

#[test]
fn comments_and_whitespace_are_ignored() {
    assert_postfix("1 /* one */ +\n 2 // two", &["1", "2", "+"]);
}

#[test]
fn source_and_tokens_parse_alike() {
    let parser = ExpressionParser::new();
    let source = "A + b / (3 - Max(-123, 1)*2) NOT LIKE 'x%'";

    let tokens = parser.tokenizer().tokenize(source);
    assert_eq!(parser.parse(source).unwrap(), parser.parse_tokens(&tokens).unwrap());

    let quoted = r#""a b" + 'it''s' + "Price""#;
    let tokens = parser.tokenizer().tokenize(quoted);
    let from_tokens = parser.parse_tokens(&tokens).unwrap();
    assert_eq!(parser.parse(quoted).unwrap(), from_tokens);
    assert_eq!(from_tokens.variable_names(), ["a b", "Price"]);
    assert_eq!(from_tokens.instructions()[1].value(), &Variant::from("it's"));
}

#[test]
fn unclosed_parenthesis() {
    let e = assert_syntax_error("(2+2");
    assert_eq!(e, SyntaxError::MissingCloseParenthesis { position: Position::new(1, 5) });

    let e = assert_syntax_error("Max(1, 2");
    assert!(matches!(e, SyntaxError::MissingCloseParenthesis { .. }));

    let e = assert_syntax_error("(1 2)");
    assert_eq!(e, SyntaxError::MissingCloseParenthesis { position: Position::new(1, 4) });
}

#[test]
fn unclosed_bracket() {
    let e = assert_syntax_error("a[1");
    assert_eq!(e, SyntaxError::MissingCloseBracket { position: Position::new(1, 4) });
}

#[test]
fn leftover_tokens() {
    let e = assert_syntax_error("1 2");
    assert_eq!(e,
               SyntaxError::ErrorNear { token:    "2".to_string(),
                                        position: Position::new(1, 3), });

    let e = assert_syntax_error("a IS 1");
    assert!(matches!(e, SyntaxError::ErrorNear { ref token, .. } if token == "IS"));
}

#[test]
fn unexpected_end() {
    assert_eq!(assert_syntax_error(""),
               SyntaxError::UnexpectedEnd { position: Position::new(1, 0) });
    assert_eq!(assert_syntax_error("   "),
               SyntaxError::UnexpectedEnd { position: Position::new(1, 0) });
    assert_eq!(assert_syntax_error("1 +"),
               SyntaxError::UnexpectedEnd { position: Position::new(1, 4) });
    assert!(matches!(assert_syntax_error("NOT"), SyntaxError::UnexpectedEnd { .. }));
}

#[test]
fn misplaced_tokens() {
    let e = assert_syntax_error("2 + )");
    assert_eq!(e,
               SyntaxError::ErrorAt { token:    ")".to_string(),
                                      position: Position::new(1, 5), });
    assert!(matches!(assert_syntax_error("* 2"), SyntaxError::ErrorAt { .. }));
    assert!(matches!(assert_syntax_error("1 + ,"), SyntaxError::ErrorAt { .. }));
}

#[test]
fn unknown_symbols() {
    let e = assert_syntax_error("1 + $");
    assert_eq!(e,
               SyntaxError::UnknownSymbol { symbol:   "$".to_string(),
                                            position: Position::new(1, 5), });
    assert!(matches!(assert_syntax_error("a;"), SyntaxError::UnknownSymbol { .. }));
}

#[test]
fn errors_report_line_and_column() {
    let e = assert_syntax_error("1 +\n  (2");
    assert_eq!(e.position(), Position::new(2, 5));
    assert_eq!(e.to_string(), "Missing close parenthesis at line 2 and column 5");
}

#[test]
fn kinds_of_a_full_expression() {
    let program = parse("x IN Array(1, 2) = TRUE").unwrap();
    assert_eq!(kinds(&program),
               [InstructionKind::Variable,
                InstructionKind::Constant,
                InstructionKind::Constant,
                InstructionKind::Constant,
                InstructionKind::Function,
                InstructionKind::In,
                InstructionKind::Constant,
                InstructionKind::Equal]);
}
