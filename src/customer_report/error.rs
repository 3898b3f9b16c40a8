use thiserror::Error;

/// Errors raised when a discount policy is built from user input.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum PolicyError {
    #[error("Discount threshold must be a finite amount, got {0}")]
    InvalidThreshold(f64),
    #[error("Discount rate must be between 0 and 1, got {0}")]
    InvalidRate(f64),
}
