/// Circuit Formula Library
///
/// Pure functions computing standard electrical quantities from scalar and
/// list inputs. Every function validates its own preconditions and returns
/// `Result<f64, CircuitError>`; a call either fully succeeds or is rejected
/// with `InvalidInput`. No state is kept between calls.

pub mod dc;
pub mod error;
pub mod resistance;
pub mod transient;

pub use dc::{current_from_ohms_law, power, voltage_divider};
pub use error::{CircuitError, Result};
pub use resistance::{parallel_resistance, series_resistance};
pub use transient::rc_time_constant;
