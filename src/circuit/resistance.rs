//! Series and parallel resistance networks

use super::error::{CircuitError, Result};

/// Calculate total resistance of resistors in series.
///
/// Series resistance is the arithmetic sum of the branch values. An empty
/// list has no defined total.
pub fn series_resistance(resistances: &[f64]) -> Result<f64> {
    if resistances.is_empty() {
        return Err(CircuitError::invalid_input(
            "List of resistances cannot be empty",
        ));
    }

    Ok(resistances.iter().sum())
}

/// Calculate total resistance of resistors in parallel.
///
/// Computed as the reciprocal of the summed reciprocals, 1 / sum(1/r).
/// Every branch must be strictly positive; a zero or negative branch has
/// no physical meaning in a parallel network.
pub fn parallel_resistance(resistances: &[f64]) -> Result<f64> {
    if resistances.is_empty() {
        return Err(CircuitError::invalid_input(
            "List of resistances cannot be empty",
        ));
    }

    if resistances.iter().any(|&r| r <= 0.0) {
        return Err(CircuitError::invalid_input(
            "All resistances must be positive",
        ));
    }

    let reciprocal_sum: f64 = resistances.iter().map(|r| 1.0 / r).sum();

    // The positivity check above makes a zero sum unreachable
    if reciprocal_sum == 0.0 {
        return Err(CircuitError::invalid_input("Total resistance cannot be zero"));
    }

    Ok(1.0 / reciprocal_sum)
}
