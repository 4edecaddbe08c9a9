// src/field/mod.rs

pub mod z3;
