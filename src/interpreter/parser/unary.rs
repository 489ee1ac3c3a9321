use crate::{
    error::SyntaxError,
    interpreter::{
        instruction::{Instruction, InstructionKind},
        parser::{
            binary::parse_expression,
            core::ParseResult,
            lexical::{Lexeme, LexemeKind},
            utils::ParseContext,
        },
        value::core::Variant,
    },
    tokenizer::token::Position,
};

/// Parses a sign, a primary and any number of trailing element accesses.
///
/// A leading `+` is dropped. A leading `-` becomes a negation emitted after
/// the primary, so it binds tighter than every binary operator: `-2 ^ 2`
/// squares `-2`.
///
/// Grammar: `unary := ("+" | "-")? primary ("[" expression "]")*`
///
/// # Errors
/// - `UnexpectedEnd` if the input runs out before the primary.
/// - `MissingCloseBracket` if an index is not closed by `]`.
/// - Propagates any errors from the primary.
pub(in crate::interpreter::parser) fn parse_unary(ctx: &mut ParseContext) -> ParseResult<()> {
    let sign = ctx.expect_more()?;
    let negation = match sign.kind() {
        LexemeKind::Plus => {
            ctx.advance();
            None
        },
        LexemeKind::Minus => {
            let position = sign.position();
            ctx.advance();
            Some(position)
        },
        _ => None,
    };

    parse_primary(ctx)?;

    if let Some(position) = negation {
        ctx.emit_operator(InstructionKind::Unary, position);
    }

    while let Some(open) = ctx.current()
          && open.kind() == LexemeKind::LeftBracket
    {
        let position = open.position();
        ctx.advance();
        parse_expression(ctx)?;
        expect_close(ctx, LexemeKind::RightBracket)?;
        ctx.emit_operator(InstructionKind::Element, position);
    }

    Ok(())
}

/// Parses a constant, a variable, a function call, `NULL` or a
/// parenthesised expression.
///
/// An identifier directly followed by `(` is a function call. Its arguments
/// are emitted in order, then their count as an integer constant, then the
/// call itself. Every other identifier is a variable reference and is
/// recorded in the program's variable list.
///
/// Grammar:
/// ```text
/// primary := constant
///          | "NULL"
///          | identifier
///          | identifier "(" (expression ("," expression)*)? ")"
///          | "(" expression ")"
/// ```
fn parse_primary(ctx: &mut ParseContext) -> ParseResult<()> {
    let primary = ctx.expect_more()?.clone();

    match primary.kind() {
        LexemeKind::Constant => {
            ctx.advance();
            ctx.emit(Instruction::constant(primary.value().clone(), primary.position()));
        },
        LexemeKind::Null => {
            ctx.advance();
            ctx.emit(Instruction::constant(Variant::Null, primary.position()));
        },
        LexemeKind::Identifier if ctx.kind_at(1) == Some(LexemeKind::LeftParen) => {
            parse_call(ctx, &primary)?;
        },
        LexemeKind::Identifier => {
            ctx.advance();
            let name = identifier(&primary);
            ctx.record_variable(name);
            ctx.emit(Instruction::variable(name, primary.position()));
        },
        LexemeKind::LeftParen => {
            ctx.advance();
            parse_expression(ctx)?;
            expect_close(ctx, LexemeKind::RightParen)?;
        },
        _ => {
            return Err(SyntaxError::ErrorAt { token:    primary.text().to_string(),
                                              position: primary.position(), });
        },
    }

    Ok(())
}

/// Parses a call to `function`, whose name is under the cursor and whose
/// `(` follows it.
///
/// A trailing comma before `)` is accepted.
fn parse_call(ctx: &mut ParseContext, function: &Lexeme) -> ParseResult<()> {
    ctx.advance();
    ctx.advance();

    let mut count = 0;
    while ctx.has_more() && !ctx.at(LexemeKind::RightParen) {
        count += 1;
        parse_expression(ctx)?;
        if !ctx.at(LexemeKind::Comma) {
            break;
        }
        ctx.advance();
    }
    expect_close(ctx, LexemeKind::RightParen)?;

    ctx.emit(Instruction::constant(Variant::Integer(count), function.position()));
    ctx.emit(Instruction::function(identifier(function), function.position()));
    Ok(())
}

/// Consumes the closing `)` or `]`.
///
/// A wrong token is reported where it stands; running out of input is
/// reported just past the last token.
fn expect_close(ctx: &mut ParseContext, close: LexemeKind) -> ParseResult<()> {
    if ctx.at(close) {
        ctx.advance();
        return Ok(());
    }

    let position = ctx.current()
                      .map_or_else(|| ctx.end_position(), Lexeme::position);
    Err(missing(close, position))
}

const fn missing(close: LexemeKind, position: Position) -> SyntaxError {
    match close {
        LexemeKind::RightBracket => SyntaxError::MissingCloseBracket { position },
        _ => SyntaxError::MissingCloseParenthesis { position },
    }
}

fn identifier(lexeme: &Lexeme) -> &str {
    lexeme.value().as_str().unwrap_or_else(|| lexeme.text())
}
