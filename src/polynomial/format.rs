// src/polynomial/format.rs
//
// Brace format `{c0,c1,...,cn}` (constant term first) and the sum-of-terms
// expression form `c0+c1*x^1+...+cn*x^n`.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use log::{debug, warn};
use num::BigInt;
use crate::error::{ArithmeticError, Result};
use crate::field::z3::Z3;
use crate::polynomial::polynomial::Polynomial;

pub const DEFAULT_MAX_INPUT_DEGREE: usize = 2500;

impl Polynomial {
    /// Reads the first `{...}` group in `input`. Text before the opening brace
    /// and after the closing brace is ignored. Coefficients may be integers of
    /// any size; each is reduced mod 3.
    pub fn parse_braced(input: &str, max_degree: usize) -> Result<Polynomial> {
        let start = input
            .find('{')
            .ok_or_else(|| parse_error("missing opening brace '{'".to_string()))?;
        let body = &input[start + 1..];
        let end = body
            .find('}')
            .ok_or_else(|| parse_error("missing closing brace '}'".to_string()))?;

        let mut coefficients = Vec::new();
        for (power, entry) in body[..end].split(',').enumerate() {
            if power > max_degree {
                return Err(parse_error(format!(
                    "more than {} coefficients (maximum degree {})",
                    max_degree + 1,
                    max_degree
                )));
            }
            let entry = entry.trim();
            let number: BigInt = entry.parse().map_err(|_| {
                parse_error(format!("invalid coefficient '{}' for x^{}", entry, power))
            })?;
            coefficients.push(Z3::from(&number));
        }

        let polynomial = Polynomial::from_vec(coefficients);
        debug!("parsed polynomial of degree {}", polynomial.degree());
        Ok(polynomial)
    }

    /// Human-readable form. Zero terms are skipped, except that the top term
    /// is always written with an explicit exponent.
    pub fn to_string_with_variable(&self, variable: &str) -> String {
        let degree = self.degree();
        if degree == 0 {
            return self[0].to_string();
        }

        let mut terms = Vec::new();
        if !self[0].is_zero() {
            terms.push(self[0].to_string());
        }
        for power in 1..degree {
            let c = self[power];
            if !c.is_zero() {
                terms.push(format!("{}*{}^{}", c, variable, power));
            }
        }
        terms.push(format!("{}*{}^{}", self[degree], variable, degree));
        terms.join("+")
    }

    pub fn to_expression(&self) -> String {
        self.to_string_with_variable("x")
    }
}

fn parse_error(message: String) -> ArithmeticError {
    warn!("Rejected polynomial input: {}", message);
    ArithmeticError::Parse(message)
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let body: Vec<String> = self.coefficients().iter().map(|c| c.to_string()).collect();
        write!(f, "{{{}}}", body.join(","))
    }
}

impl FromStr for Polynomial {
    type Err = ArithmeticError;

    fn from_str(input: &str) -> Result<Polynomial> {
        Polynomial::parse_braced(input, DEFAULT_MAX_INPUT_DEGREE)
    }
}
