//! Transient behaviour: RC charge/discharge characteristics

use super::error::{CircuitError, Result};

/// Calculate the time constant of an RC circuit (tau = R * C).
///
/// Physical resistance and capacitance cannot be negative; zero is allowed
/// and yields a zero time constant.
pub fn rc_time_constant(resistance: f64, capacitance: f64) -> Result<f64> {
    if resistance < 0.0 || capacitance < 0.0 {
        return Err(CircuitError::invalid_input(
            "Resistance and capacitance must be non-negative",
        ));
    }

    Ok(resistance * capacitance)
}
