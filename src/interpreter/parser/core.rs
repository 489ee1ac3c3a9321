use std::sync::LazyLock;

use tracing::debug;

use crate::{
    error::SyntaxError,
    interpreter::{
        instruction::Instruction,
        lexer::expression_tokenizer,
        parser::{
            binary::parse_expression,
            lexical::classify_tokens,
            utils::ParseContext,
        },
    },
    tokenizer::{core::Tokenizer, token::Token},
};

pub type ParseResult<T> = Result<T, SyntaxError>;

static DEFAULT_PARSER: LazyLock<ExpressionParser> = LazyLock::new(ExpressionParser::new);

/// A compiled expression.
///
/// Holds the postfix instruction stream and the names of the variables it
/// references, in order of first appearance. A program is immutable and can
/// be evaluated any number of times, from any number of threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    instructions:   Vec<Instruction>,
    variable_names: Vec<String>,
}

impl Program {
    /// The postfix instruction stream.
    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Variable names as written, each listed once.
    #[must_use]
    pub fn variable_names(&self) -> &[String] {
        &self.variable_names
    }

    /// Whether the program has no instructions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

/// Compiles expression source into a [`Program`].
///
/// The parser owns an expression tokenizer configured to drop whitespace,
/// comments and the end-of-stream token and to decode quoted strings.
#[derive(Debug)]
pub struct ExpressionParser {
    tokenizer: Tokenizer,
}

impl ExpressionParser {
    /// Creates a parser.
    #[must_use]
    pub fn new() -> Self {
        let mut tokenizer = expression_tokenizer();
        tokenizer.options.skip_whitespaces = true;
        tokenizer.options.skip_comments = true;
        tokenizer.options.skip_eof = true;
        tokenizer.options.decode_strings = true;
        Self { tokenizer }
    }

    /// The tokenizer used by [`ExpressionParser::parse`].
    #[must_use]
    pub const fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Tokenizes and compiles `source`.
    ///
    /// # Errors
    /// Returns a [`SyntaxError`] describing the first problem found. Source
    /// with no tokens is an [`SyntaxError::UnexpectedEnd`] at line 1, column
    /// 0; [`ExpressionCalculator`](crate::interpreter::calculator::ExpressionCalculator)
    /// treats it as an empty program instead.
    pub fn parse(&self, source: &str) -> ParseResult<Program> {
        self.parse_tokens(&self.tokenizer.tokenize(source))
    }

    /// Compiles an already tokenized expression.
    ///
    /// Whitespace, comment and end-of-stream tokens are ignored, so the
    /// output of any expression tokenizer configuration is accepted.
    /// Quoted tokens must already be decoded.
    ///
    /// # Errors
    /// Returns a [`SyntaxError`] describing the first problem found.
    pub fn parse_tokens(&self, tokens: &[Token]) -> ParseResult<Program> {
        let mut ctx = ParseContext::new(classify_tokens(tokens)?);

        parse_expression(&mut ctx)?;
        if let Some(leftover) = ctx.current() {
            return Err(SyntaxError::ErrorNear { token:    leftover.text().to_string(),
                                                position: leftover.position(), });
        }

        let (instructions, variable_names) = ctx.finish();
        debug!(instructions = instructions.len(), variables = ?variable_names, "compiled expression");

        Ok(Program { instructions,
                     variable_names })
    }
}

impl Default for ExpressionParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Compiles `source` with a shared default parser.
///
/// # Errors
/// Returns a [`SyntaxError`] describing the first problem found.
///
/// # Example
/// ```
/// use reckon::interpreter::parser::core::parse;
///
/// let program = parse("price * (1 + rate)").unwrap();
/// let postfix: Vec<String> = program.instructions()
///                                   .iter()
///                                   .map(ToString::to_string)
///                                   .collect();
/// assert_eq!(postfix, ["price", "1", "rate", "+", "*"]);
/// assert_eq!(program.variable_names(), ["price", "rate"]);
/// ```
pub fn parse(source: &str) -> ParseResult<Program> {
    DEFAULT_PARSER.parse(source)
}
