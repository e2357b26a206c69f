use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// An operation needs more operands than the stack holds
    #[error("Operation requires {needed} operand(s), stack holds {available}")]
    Underflow { needed: usize, available: usize },
    /// Peek below the bottom of the stack or at a negative depth
    #[error("Invalid depth {depth} for a stack of {count} operand(s)")]
    InvalidDepth { depth: isize, count: usize },

    #[error("Failed to convert '{0}' to float")]
    StrToFloat(String),
    #[error("Invalid operator '{0}'")]
    InvalidOp(String),
    #[error("Failed to parse input: {0}")]
    ParseFailed(String),
}

/// Result of an operation that produces an operand
pub type CalcResult = Result<f64, CalcError>;
pub type CalcErrorResult = Result<(), CalcError>;
