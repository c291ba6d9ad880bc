use thiserror::Error;

/// Formula-level errors
///
/// Every failure in this library is an input-validation rejection, never a
/// transient fault, so a single error kind is enough.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CircuitError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, CircuitError>;

impl CircuitError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        CircuitError::InvalidInput(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CircuitError::invalid_input("Resistance cannot be zero");
        assert_eq!(err.to_string(), "Invalid input: Resistance cannot be zero");
    }
}
