// src/lib.rs

pub mod config;
pub mod error;
pub mod field;
pub mod polynomial;

pub use error::{ArithmeticError, Result};
pub use field::z3::Z3;
pub use polynomial::division::divide;
pub use polynomial::polynomial::Polynomial;
