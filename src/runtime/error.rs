use thiserror::Error;

/// Failure raised while evaluating a variable or operator.
///
/// Errors propagate unchanged from the innermost failing node to the caller;
/// no operator wraps or recovers them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("wrong number of inputs for {operator}: expected {expected}, got {got}")]
    WrongArity {
        operator: String,
        expected: usize,
        got: usize,
    },
    #[error("{operator} expected input {index} to be {expected}, got {got}")]
    WrongType {
        operator: String,
        index: usize,
        expected: &'static str,
        got: &'static str,
    },
    #[error("operands must share one type, got {left} and {right}")]
    TypeMismatch {
        left: &'static str,
        right: &'static str,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("index {index} out of bounds for list of length {length}")]
    IndexOutOfBounds { index: i64, length: usize },
    /// Operator- or host-specific failure.
    #[error("{0}")]
    Custom(String),
}

impl EvaluationError {
    pub fn custom(message: impl Into<String>) -> Self {
        EvaluationError::Custom(message.into())
    }
}
