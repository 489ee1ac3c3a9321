use std::fmt;

use crate::{interpreter::value::core::Variant, tokenizer::token::Position};

/// What an [`Instruction`] does when the evaluator reaches it.
///
/// Operator kinds pop their operands from the evaluation stack and push one
/// result: binary operators pop two values, unary operators one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionKind {
    /// Pushes the instruction's value.
    Constant,
    /// Pushes the value bound to the name held in the instruction's value.
    Variable,
    /// Pops an argument count and that many arguments, then pushes the
    /// result of the function named by the instruction's value.
    Function,
    /// Arithmetic negation.
    Unary,
    /// `AND`
    And,
    /// `OR`
    Or,
    /// `XOR`
    Xor,
    /// `NOT`
    Not,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Pow,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `=`
    Equal,
    /// `<>` or `!=`
    NotEqual,
    /// `>`
    More,
    /// `<`
    Less,
    /// `>=`
    EqualMore,
    /// `<=`
    EqualLess,
    /// `IN`
    In,
    /// `NOT IN`
    NotIn,
    /// `LIKE`
    Like,
    /// `NOT LIKE`
    NotLike,
    /// `IS NULL`
    IsNull,
    /// `IS NOT NULL`
    IsNotNull,
    /// `collection[index]`
    Element,
}

impl InstructionKind {
    /// The source spelling of an operator kind.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Constant => "constant",
            Self::Variable => "variable",
            Self::Function => "function",
            Self::Unary => "-",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Not => "NOT",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::Equal => "=",
            Self::NotEqual => "<>",
            Self::More => ">",
            Self::Less => "<",
            Self::EqualMore => ">=",
            Self::EqualLess => "<=",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::IsNull => "IS NULL",
            Self::IsNotNull => "IS NOT NULL",
            Self::Element => "[]",
        }
    }
}

/// One step of a compiled expression, in postfix order.
///
/// # Example
/// ```
/// use reckon::interpreter::{instruction::{Instruction, InstructionKind},
///                           value::core::Variant};
///
/// let load = Instruction::variable("price", Default::default());
/// assert_eq!(load.kind(), InstructionKind::Variable);
/// assert_eq!(load.name(), Some("price"));
/// assert_eq!(load.to_string(), "price");
///
/// let two = Instruction::constant(Variant::Integer(2), Default::default());
/// assert_eq!(two.name(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    kind:     InstructionKind,
    value:    Variant,
    position: Position,
}

impl Instruction {
    /// Creates an instruction.
    #[must_use]
    pub const fn new(kind: InstructionKind, value: Variant, position: Position) -> Self {
        Self { kind, value, position }
    }

    /// An operator instruction without a payload.
    #[must_use]
    pub const fn operator(kind: InstructionKind, position: Position) -> Self {
        Self::new(kind, Variant::Null, position)
    }

    /// Pushes `value`.
    #[must_use]
    pub const fn constant(value: Variant, position: Position) -> Self {
        Self::new(InstructionKind::Constant, value, position)
    }

    /// Loads the variable `name`.
    #[must_use]
    pub fn variable(name: impl Into<String>, position: Position) -> Self {
        Self::new(InstructionKind::Variable, Variant::String(name.into()), position)
    }

    /// Calls the function `name`.
    #[must_use]
    pub fn function(name: impl Into<String>, position: Position) -> Self {
        Self::new(InstructionKind::Function, Variant::String(name.into()), position)
    }

    /// What the instruction does.
    #[must_use]
    pub const fn kind(&self) -> InstructionKind {
        self.kind
    }

    /// The constant pushed, or the referenced name.
    #[must_use]
    pub const fn value(&self) -> &Variant {
        &self.value
    }

    /// Where the instruction came from in the source.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// The variable or function name, for instructions that reference one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match (self.kind, &self.value) {
            (InstructionKind::Variable | InstructionKind::Function, Variant::String(name)) => {
                Some(name)
            },
            _ => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            InstructionKind::Constant => match &self.value {
                Variant::String(text) => write!(f, "'{text}'"),
                Variant::Null => f.write_str("NULL"),
                value => write!(f, "{value}"),
            },
            InstructionKind::Variable => write!(f, "{}", self.value),
            InstructionKind::Function => write!(f, "{}()", self.value),
            InstructionKind::Unary => f.write_str("neg"),
            kind => f.write_str(kind.symbol()),
        }
    }
}
