//! Calculator operations and the registry that creates them by name.
//!
//! Each operation parses its own arguments and renders its own result, so a
//! command only has to forward tokens and print what comes back.

pub mod arithmetic;
mod format;
mod registry;
pub mod statistics;
mod validation;

pub use format::format_number;
pub use registry::OperationRegistry;
pub use validation::parse_operands;

use thiserror::Error;

/// Failures an operation reports back as its result text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OperationError {
    #[error("{0}")]
    TooFewArguments(&'static str),

    #[error("Invalid argument at position {position}: '{value}' is not a valid number")]
    InvalidNumber { position: usize, value: String },

    #[error("Error: Division by zero is not allowed")]
    DivisionByZero,

    #[error("Error during {label}: numeric overflow")]
    Overflow { label: &'static str },
}

/// A named calculation over numeric string arguments.
pub trait Operation {
    /// One-line summary shown by `menu`.
    fn description(&self) -> &'static str;

    /// Label used in fault messages, e.g. `addition operation`.
    fn fault_label(&self) -> &'static str;

    /// Check arity and parse every argument.
    fn validate_args(&self, args: &[&str]) -> Result<Vec<f64>, OperationError>;

    /// Compute over already-validated operands.
    fn compute(&self, values: &[f64]) -> Result<f64, OperationError>;

    /// Validate, compute and render. Never fails: problems become the text.
    fn execute(&self, args: &[&str]) -> String {
        let values = match self.validate_args(args) {
            Ok(values) => values,
            Err(e) => return e.to_string(),
        };
        match self.compute(&values) {
            Ok(result) if !result.is_finite() && values.iter().all(|v| v.is_finite()) => {
                OperationError::Overflow {
                    label: self.fault_label(),
                }
                .to_string()
            }
            Ok(result) => format_number(result),
            Err(e) => e.to_string(),
        }
    }
}
