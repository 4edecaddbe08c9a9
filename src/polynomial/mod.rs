// src/polynomial/mod.rs

pub mod division;
pub mod format;
pub mod polynomial;
pub mod serialization;
