use crate::interpreter::{
    instruction::InstructionKind,
    parser::{
        core::ParseResult,
        lexical::LexemeKind,
        unary::parse_unary,
        utils::ParseContext,
    },
};

/// Parses a full expression.
///
/// This is the entry point for every nested expression: function arguments,
/// parenthesised groups and element indices all start here.
///
/// Grammar: `expression := logical`
///
/// # Errors
/// Returns [`SyntaxError::UnexpectedEnd`](crate::error::SyntaxError) when no
/// input is left.
pub(in crate::interpreter::parser) fn parse_expression(ctx: &mut ParseContext) -> ParseResult<()> {
    ctx.expect_more()?;
    parse_logical(ctx)
}

/// Parses `AND`, `OR` and `XOR` chains. All three bind equally and
/// associate to the left.
///
/// Grammar: `logical := negation (("AND" | "OR" | "XOR") negation)*`
fn parse_logical(ctx: &mut ParseContext) -> ParseResult<()> {
    parse_negation(ctx)?;
    while let Some(lexeme) = ctx.current() {
        let kind = match lexeme.kind() {
            LexemeKind::And => InstructionKind::And,
            LexemeKind::Or => InstructionKind::Or,
            LexemeKind::Xor => InstructionKind::Xor,
            _ => break,
        };
        let position = lexeme.position();
        ctx.advance();
        parse_negation(ctx)?;
        ctx.emit_operator(kind, position);
    }
    Ok(())
}

/// Parses an optional prefix `NOT`, which is emitted after its operand.
///
/// Grammar: `negation := "NOT"? comparison`
fn parse_negation(ctx: &mut ParseContext) -> ParseResult<()> {
    if let Some(lexeme) = ctx.current()
       && lexeme.kind() == LexemeKind::Not
    {
        let position = lexeme.position();
        ctx.advance();
        parse_comparison(ctx)?;
        ctx.emit_operator(InstructionKind::Not, position);
        return Ok(());
    }
    parse_comparison(ctx)
}

/// Parses comparison chains.
///
/// Grammar: `comparison := additive (("=" | "<>" | ">" | "<" | ">=" | "<=") additive)*`
fn parse_comparison(ctx: &mut ParseContext) -> ParseResult<()> {
    parse_additive(ctx)?;
    while let Some(lexeme) = ctx.current() {
        let kind = match lexeme.kind() {
            LexemeKind::Equal => InstructionKind::Equal,
            LexemeKind::NotEqual => InstructionKind::NotEqual,
            LexemeKind::More => InstructionKind::More,
            LexemeKind::Less => InstructionKind::Less,
            LexemeKind::EqualMore => InstructionKind::EqualMore,
            LexemeKind::EqualLess => InstructionKind::EqualLess,
            _ => break,
        };
        let position = lexeme.position();
        ctx.advance();
        parse_additive(ctx)?;
        ctx.emit_operator(kind, position);
    }
    Ok(())
}

/// Parses addition, subtraction and the SQL-style postfix operators.
///
/// `IS NULL` and `IS NOT NULL` take no right operand. `NOT LIKE` and
/// `NOT IN` are matched as whole sequences, so a lone `NOT` here ends the
/// chain.
///
/// Grammar:
/// ```text
/// additive := multiplicative (
///     ("+" | "-" | "LIKE" | "NOT" "LIKE" | "NOT" "IN") multiplicative
///     | "IS" "NULL"
///     | "IS" "NOT" "NULL"
/// )*
/// ```
fn parse_additive(ctx: &mut ParseContext) -> ParseResult<()> {
    parse_multiplicative(ctx)?;
    while let Some(position) = ctx.current().map(|lexeme| lexeme.position()) {
        let kind = if ctx.match_sequence(&[LexemeKind::Is, LexemeKind::Not, LexemeKind::Null]) {
            ctx.emit_operator(InstructionKind::IsNotNull, position);
            continue;
        } else if ctx.match_sequence(&[LexemeKind::Is, LexemeKind::Null]) {
            ctx.emit_operator(InstructionKind::IsNull, position);
            continue;
        } else if ctx.match_sequence(&[LexemeKind::Not, LexemeKind::Like]) {
            InstructionKind::NotLike
        } else if ctx.match_sequence(&[LexemeKind::Not, LexemeKind::In]) {
            InstructionKind::NotIn
        } else if ctx.match_sequence(&[LexemeKind::Plus]) {
            InstructionKind::Add
        } else if ctx.match_sequence(&[LexemeKind::Minus]) {
            InstructionKind::Sub
        } else if ctx.match_sequence(&[LexemeKind::Like]) {
            InstructionKind::Like
        } else {
            break;
        };
        parse_multiplicative(ctx)?;
        ctx.emit_operator(kind, position);
    }
    Ok(())
}

/// Parses multiplication, division and remainder.
///
/// Grammar: `multiplicative := power (("*" | "/" | "%") power)*`
fn parse_multiplicative(ctx: &mut ParseContext) -> ParseResult<()> {
    parse_power(ctx)?;
    while let Some(lexeme) = ctx.current() {
        let kind = match lexeme.kind() {
            LexemeKind::Star => InstructionKind::Mul,
            LexemeKind::Slash => InstructionKind::Div,
            LexemeKind::Percent => InstructionKind::Mod,
            _ => break,
        };
        let position = lexeme.position();
        ctx.advance();
        parse_power(ctx)?;
        ctx.emit_operator(kind, position);
    }
    Ok(())
}

/// Parses the tightest binary operators. Exponentiation associates to the
/// left like the rest: `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2`.
///
/// Grammar: `power := unary (("^" | "IN" | "<<" | ">>") unary)*`
fn parse_power(ctx: &mut ParseContext) -> ParseResult<()> {
    parse_unary(ctx)?;
    while let Some(lexeme) = ctx.current() {
        let kind = match lexeme.kind() {
            LexemeKind::Caret => InstructionKind::Pow,
            LexemeKind::In => InstructionKind::In,
            LexemeKind::ShiftLeft => InstructionKind::ShiftLeft,
            LexemeKind::ShiftRight => InstructionKind::ShiftRight,
            _ => break,
        };
        let position = lexeme.position();
        ctx.advance();
        parse_unary(ctx)?;
        ctx.emit_operator(kind, position);
    }
    Ok(())
}
