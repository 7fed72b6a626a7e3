//! Shared argument validation for operations.

use super::OperationError;

/// Check that at least `min` arguments were given, then parse each one.
///
/// Positions in the error are 1-based. The arity check runs first, so a short
/// argument list reports `too_few` even if its tokens are not numbers.
pub fn parse_operands(
    args: &[&str],
    min: usize,
    too_few: &'static str,
) -> Result<Vec<f64>, OperationError> {
    if args.len() < min {
        return Err(OperationError::TooFewArguments(too_few));
    }
    args.iter()
        .enumerate()
        .map(|(i, arg)| {
            arg.parse::<f64>()
                .map_err(|_| OperationError::InvalidNumber {
                    position: i + 1,
                    value: (*arg).to_string(),
                })
        })
        .collect()
}
