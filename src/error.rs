// src/error.rs

use std::fmt::{Display, Formatter};

/// Errors raised by the GF(3) arithmetic core and its textual input layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    /// A field element, scalar, or polynomial divisor was zero.
    DivisionByZero { context: &'static str },
    /// Brace-format input could not be read.
    Parse(String),
}

impl Display for ArithmeticError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ArithmeticError::DivisionByZero { context } => write!(f, "Division by zero ({})", context),
            ArithmeticError::Parse(s) => write!(f, "Parse error: {}", s),
        }
    }
}

impl std::error::Error for ArithmeticError {}

pub type Result<T> = std::result::Result<T, ArithmeticError>;
