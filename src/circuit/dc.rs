//! DC circuit formulas: Ohm's law, power, voltage divider

use super::error::{CircuitError, Result};

/// Calculate current through a resistor using Ohm's Law (I = V / R).
///
/// A zero resistance is rejected explicitly rather than letting the
/// division produce an infinite or NaN current.
pub fn current_from_ohms_law(voltage: f64, resistance: f64) -> Result<f64> {
    if resistance == 0.0 {
        return Err(CircuitError::invalid_input("Resistance cannot be zero"));
    }

    Ok(voltage / resistance)
}

/// Calculate electrical power (P = V * I).
///
/// Total over all reals; negative values simply describe power flowing in
/// the opposite direction.
pub fn power(voltage: f64, current: f64) -> f64 {
    voltage * current
}

/// Calculate the output voltage across r2 in a two-resistor voltage divider.
///
/// Vout = Vin * r2 / (r1 + r2). The divider is undefined when the total
/// resistance is zero.
pub fn voltage_divider(input_voltage: f64, r1: f64, r2: f64) -> Result<f64> {
    if r1 + r2 == 0.0 {
        return Err(CircuitError::invalid_input(
            "The sum of resistances cannot be zero",
        ));
    }

    Ok(input_voltage * r2 / (r1 + r2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(12.0, 4.0, 3.0)]
    #[case(10.0, 2.0, 5.0)]
    #[case(-12.0, 4.0, -3.0)]
    #[case(0.0, 100.0, 0.0)]
    fn test_ohms_law(#[case] voltage: f64, #[case] resistance: f64, #[case] expected: f64) {
        assert_eq!(current_from_ohms_law(voltage, resistance).unwrap(), expected);
    }

    #[test]
    fn test_ohms_law_rejects_zero_resistance() {
        let err = current_from_ohms_law(12.0, 0.0).unwrap_err();
        assert!(matches!(err, CircuitError::InvalidInput(_)));
    }

    #[test]
    fn test_ohms_law_accepts_negative_resistance() {
        // Only zero is rejected; the formula itself is defined for negatives
        assert_eq!(current_from_ohms_law(12.0, -4.0).unwrap(), -3.0);
    }

    #[rstest]
    #[case(230.0, 10.0, 2300.0)]
    #[case(12.0, -2.0, -24.0)]
    #[case(0.0, 16.0, 0.0)]
    fn test_power(#[case] voltage: f64, #[case] current: f64, #[case] expected: f64) {
        assert_eq!(power(voltage, current), expected);
    }

    #[test]
    fn test_voltage_divider() {
        assert_eq!(voltage_divider(10.0, 2.0, 3.0).unwrap(), 6.0);
    }

    #[test]
    fn test_voltage_divider_full_output_when_r1_zero() {
        assert_eq!(voltage_divider(10.0, 0.0, 5.0).unwrap(), 10.0);
    }

    #[test]
    fn test_voltage_divider_rejects_zero_total() {
        assert!(voltage_divider(10.0, 0.0, 0.0).is_err());
        // Cancelling resistances are just as undefined as two zeros
        assert!(voltage_divider(10.0, -5.0, 5.0).is_err());
    }
}
