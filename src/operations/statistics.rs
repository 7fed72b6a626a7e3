//! Descriptive statistics: mean, median, sample standard deviation.

use super::{Operation, OperationError, OperationRegistry, parse_operands};

pub fn register(registry: &mut OperationRegistry) {
    registry.register::<Mean>("mean");
    registry.register::<Median>("median");
    registry.register::<StandardDeviation>("stddev");
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[derive(Debug, Default)]
pub struct Mean;

impl Operation for Mean {
    fn description(&self) -> &'static str {
        "Mean operation that calculates the arithmetic mean (average) of multiple numbers."
    }

    fn fault_label(&self) -> &'static str {
        "mean calculation"
    }

    fn validate_args(&self, args: &[&str]) -> Result<Vec<f64>, OperationError> {
        parse_operands(args, 2, "Mean calculation requires at least two numbers")
    }

    fn compute(&self, values: &[f64]) -> Result<f64, OperationError> {
        Ok(mean(values))
    }
}

#[derive(Debug, Default)]
pub struct Median;

impl Operation for Median {
    fn description(&self) -> &'static str {
        "Median operation that calculates the median value of multiple numbers."
    }

    fn fault_label(&self) -> &'static str {
        "median calculation"
    }

    fn validate_args(&self, args: &[&str]) -> Result<Vec<f64>, OperationError> {
        parse_operands(
            args,
            3,
            "Median calculation requires at least three numbers for meaningful results",
        )
    }

    fn compute(&self, values: &[f64]) -> Result<f64, OperationError> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 1 {
            Ok(sorted[mid])
        } else {
            Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
        }
    }
}

#[derive(Debug, Default)]
pub struct StandardDeviation;

impl Operation for StandardDeviation {
    fn description(&self) -> &'static str {
        "Standard Deviation operation that calculates the standard deviation of multiple numbers."
    }

    fn fault_label(&self) -> &'static str {
        "standard deviation calculation"
    }

    fn validate_args(&self, args: &[&str]) -> Result<Vec<f64>, OperationError> {
        parse_operands(
            args,
            2,
            "Standard deviation calculation requires at least two numbers",
        )
    }

    /// Sample standard deviation (n - 1 denominator).
    fn compute(&self, values: &[f64]) -> Result<f64, OperationError> {
        let m = mean(values);
        let squares: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
        Ok((squares / (values.len() - 1) as f64).sqrt())
    }
}
