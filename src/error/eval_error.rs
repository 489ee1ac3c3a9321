use crate::{error::at_opt, interpreter::value::core::VariantType, tokenizer::token::Position};

/// Result type used throughout coercion and evaluation.
pub type EvalResult<T> = Result<T, EvalError>;

/// Represents all errors that can occur while evaluating a compiled
/// expression.
///
/// Errors raised inside the coercion engine do not know where they happened
/// and carry no position; the evaluator fills it in from the instruction that
/// failed (see [`EvalError::at`]).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// A variable reference had no binding.
    #[error("Variable '{name}' was not found{}", at_opt(.position))]
    VariableNotFound {
        /// The name as written in the expression.
        name:     String,
        /// Where the reference appears.
        position: Option<Position>,
    },
    /// A function call had no binding.
    #[error("Function '{name}' was not found{}", at_opt(.position))]
    FunctionNotFound {
        /// The name as written in the expression.
        name:     String,
        /// Where the call appears.
        position: Option<Position>,
    },
    /// A function received an unsupported number of arguments.
    #[error("Wrong number of parameters: expected {expected}, found {found}{}", at_opt(.position))]
    WrongParameterCount {
        /// A description of the accepted counts, such as `"2 or more"`.
        expected: String,
        /// How many arguments were passed.
        found:    usize,
        /// Where the call appears.
        position: Option<Position>,
    },
    /// An operator is not defined for the operand types.
    #[error("Operation {operator} is not supported for {lhs}{}{}",
            .rhs.map(|rhs| format!(" and {rhs}")).unwrap_or_default(),
            at_opt(.position))]
    OperationNotSupported {
        /// The operator's spelling.
        operator: String,
        /// Type of the left (or only) operand.
        lhs:      VariantType,
        /// Type of the right operand, for binary operators.
        rhs:      Option<VariantType>,
        /// Where the operator appears.
        position: Option<Position>,
    },
    /// The active coercion policy cannot convert between two types.
    #[error("Conversion from {from} to {to} is not supported{}", at_opt(.position))]
    ConversionNotSupported {
        /// The source type.
        from:     VariantType,
        /// The requested type.
        to:       VariantType,
        /// Where the conversion was needed.
        position: Option<Position>,
    },
    /// A function body failed or panicked.
    #[error("Calculation failed: {message}{}", at_opt(.position))]
    CalculationFailed {
        /// What went wrong.
        message:  String,
        /// Where the call appears.
        position: Option<Position>,
    },
    /// Integer division or remainder by zero.
    #[error("Division by zero{}", at_opt(.position))]
    DivisionByZero {
        /// Where the operator appears.
        position: Option<Position>,
    },
    /// An element index outside the collection.
    #[error("Index {index} is out of bounds for length {length}{}", at_opt(.position))]
    IndexOutOfBounds {
        /// The requested index.
        index:    i64,
        /// The collection length.
        length:   usize,
        /// Where the indexing appears.
        position: Option<Position>,
    },
    /// The instruction stream broke the evaluator's contract.
    #[error("Internal error: {message}{}", at_opt(.position))]
    Internal {
        /// What was inconsistent.
        message:  String,
        /// The instruction being executed, when known.
        position: Option<Position>,
    },
}

impl EvalError {
    /// An unsupported-operation error without a position.
    #[must_use]
    pub fn unsupported(operator: &str, lhs: VariantType, rhs: Option<VariantType>) -> Self {
        Self::OperationNotSupported { operator: operator.to_string(),
                                      lhs,
                                      rhs,
                                      position: None }
    }

    /// A failed-conversion error without a position.
    #[must_use]
    pub const fn conversion(from: VariantType, to: VariantType) -> Self {
        Self::ConversionNotSupported { from, to, position: None }
    }

    /// A wrong-parameter-count error without a position.
    #[must_use]
    pub fn parameter_count(expected: impl Into<String>, found: usize) -> Self {
        Self::WrongParameterCount { expected: expected.into(),
                                    found,
                                    position: None }
    }

    /// A calculation failure without a position.
    #[must_use]
    pub fn calculation(message: impl Into<String>) -> Self {
        Self::CalculationFailed { message:  message.into(),
                                  position: None, }
    }

    /// Returns the position the error refers to, if known.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::VariableNotFound { position, .. }
            | Self::FunctionNotFound { position, .. }
            | Self::WrongParameterCount { position, .. }
            | Self::OperationNotSupported { position, .. }
            | Self::ConversionNotSupported { position, .. }
            | Self::CalculationFailed { position, .. }
            | Self::DivisionByZero { position }
            | Self::IndexOutOfBounds { position, .. }
            | Self::Internal { position, .. } => *position,
        }
    }

    /// Attaches `where_` as the error position unless one is already set.
    ///
    /// # Example
    /// ```
    /// use reckon::{error::EvalError, tokenizer::token::Position};
    ///
    /// let err = EvalError::DivisionByZero { position: None }.at(Position::new(1, 4));
    /// assert_eq!(err.position(), Some(Position::new(1, 4)));
    /// assert_eq!(err.to_string(), "Division by zero at line 1 and column 4");
    /// ```
    #[must_use]
    pub fn at(mut self, where_: Position) -> Self {
        let (Self::VariableNotFound { position, .. }
             | Self::FunctionNotFound { position, .. }
             | Self::WrongParameterCount { position, .. }
             | Self::OperationNotSupported { position, .. }
             | Self::ConversionNotSupported { position, .. }
             | Self::CalculationFailed { position, .. }
             | Self::DivisionByZero { position }
             | Self::IndexOutOfBounds { position, .. }
             | Self::Internal { position, .. }) = &mut self;
        position.get_or_insert(where_);
        self
    }
}
