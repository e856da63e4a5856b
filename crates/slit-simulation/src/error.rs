use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("invalid simulation config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SimulationError>;

/// Rejects NaN and ±∞
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimulationError::InvalidParameter { name, value })
    }
}
