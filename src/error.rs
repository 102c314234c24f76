use thiserror::Error;

/// Gradient configuration errors.
///
/// All of these are startup errors: a table that fails to build is a fatal
/// misconfiguration, never something to render around.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradientError {
    #[error("invalid hex color {0:?}, expected \"#rrggbb\"")]
    InvalidHexColor(String),
    #[error("gradient needs at least two stops, got {0}")]
    TooFewStops(usize),
    #[error("gradient stops must span [0, 1], got [{first}, {last}]")]
    UncoveredDomain { first: f64, last: f64 },
    #[error("gradient stop positions must be strictly increasing (stop {0})")]
    UnorderedStops(usize),
}
