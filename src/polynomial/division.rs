// src/polynomial/division.rs

use log::{debug, trace, warn};
use crate::error::{ArithmeticError, Result};
use crate::field::z3::Z3;
use crate::polynomial::polynomial::Polynomial;

/// Euclidean division over GF(3). Returns `(quotient, remainder)` with
/// `dividend == quotient * divisor + remainder` and the remainder either zero
/// or of degree strictly below the divisor's.
pub fn divide(dividend: &Polynomial, divisor: &Polynomial) -> Result<(Polynomial, Polynomial)> {
    if divisor.is_zero() {
        warn!("Division by zero polynomial (dividend degree {})", dividend.degree());
        return Err(ArithmeticError::DivisionByZero { context: "polynomial" });
    }

    let divisor_degree = divisor.degree();
    if dividend.is_zero() || dividend.degree() < divisor_degree {
        return Ok((Polynomial::zero(), dividend.clone()));
    }

    let divisor_coefficients = divisor.coefficients();
    let leading_inverse = divisor.leading_coefficient().inverse()?;

    // Reduce the remainder in place, one leading term per step.
    let mut remainder = dividend.coefficients().to_vec();
    let mut quotient = vec![Z3::ZERO; dividend.degree() - divisor_degree + 1];
    let mut steps = 0usize;

    while remainder.len() > divisor_degree {
        let degree = remainder.len() - 1;
        let leading = remainder[degree];
        if leading.is_zero() {
            remainder.pop();
            continue;
        }

        let term_degree = degree - divisor_degree;
        let term_coefficient = leading * leading_inverse;
        quotient[term_degree] = term_coefficient;
        for (i, &d) in divisor_coefficients.iter().enumerate() {
            remainder[term_degree + i] -= term_coefficient * d;
        }
        steps += 1;

        trace!("divide step {}: term {}*x^{}", steps, term_coefficient, term_degree);

        // The leading term always cancels.
        debug_assert!(remainder[degree].is_zero());
        remainder.pop();
    }

    let quotient = Polynomial::from_vec(quotient);
    let remainder = Polynomial::from_vec(remainder);

    debug!(
        "divide: deg {} / deg {} -> quotient deg {}, remainder deg {} in {} steps",
        dividend.degree(), divisor_degree, quotient.degree(), remainder.degree(), steps
    );

    Ok((quotient, remainder))
}
