//! Basic arithmetic: add, subtract, multiply, divide.
//!
//! All four take two or more operands and fold left to right.

use super::{Operation, OperationError, OperationRegistry, parse_operands};

pub fn register(registry: &mut OperationRegistry) {
    registry.register::<Add>("add");
    registry.register::<Subtract>("subtract");
    registry.register::<Multiply>("multiply");
    registry.register::<Divide>("divide");
}

#[derive(Debug, Default)]
pub struct Add;

impl Operation for Add {
    fn description(&self) -> &'static str {
        "Addition operation that sums multiple numeric values."
    }

    fn fault_label(&self) -> &'static str {
        "addition operation"
    }

    fn validate_args(&self, args: &[&str]) -> Result<Vec<f64>, OperationError> {
        parse_operands(args, 2, "Addition requires at least two numbers")
    }

    fn compute(&self, values: &[f64]) -> Result<f64, OperationError> {
        Ok(values.iter().sum())
    }
}

#[derive(Debug, Default)]
pub struct Subtract;

impl Operation for Subtract {
    fn description(&self) -> &'static str {
        "Subtraction operation that subtracts subsequent numbers from the first."
    }

    fn fault_label(&self) -> &'static str {
        "subtraction operation"
    }

    fn validate_args(&self, args: &[&str]) -> Result<Vec<f64>, OperationError> {
        parse_operands(args, 2, "Subtraction requires at least two numbers")
    }

    fn compute(&self, values: &[f64]) -> Result<f64, OperationError> {
        let (first, rest) = values
            .split_first()
            .ok_or(OperationError::TooFewArguments(
                "Subtraction requires at least two numbers",
            ))?;
        Ok(rest.iter().fold(*first, |acc, v| acc - v))
    }
}

#[derive(Debug, Default)]
pub struct Multiply;

impl Operation for Multiply {
    fn description(&self) -> &'static str {
        "Multiplication operation that multiplies multiple numbers together."
    }

    fn fault_label(&self) -> &'static str {
        "multiplication operation"
    }

    fn validate_args(&self, args: &[&str]) -> Result<Vec<f64>, OperationError> {
        parse_operands(args, 2, "Multiplication requires at least two numbers")
    }

    fn compute(&self, values: &[f64]) -> Result<f64, OperationError> {
        Ok(values.iter().product())
    }
}

#[derive(Debug, Default)]
pub struct Divide;

impl Operation for Divide {
    fn description(&self) -> &'static str {
        "Division operation that performs sequential division of numbers."
    }

    fn fault_label(&self) -> &'static str {
        "division operation"
    }

    fn validate_args(&self, args: &[&str]) -> Result<Vec<f64>, OperationError> {
        parse_operands(args, 2, "Division requires at least two numbers")
    }

    fn compute(&self, values: &[f64]) -> Result<f64, OperationError> {
        let (first, rest) = values
            .split_first()
            .ok_or(OperationError::TooFewArguments(
                "Division requires at least two numbers",
            ))?;
        rest.iter().try_fold(*first, |acc, &divisor| {
            if divisor == 0.0 {
                Err(OperationError::DivisionByZero)
            } else {
                Ok(acc / divisor)
            }
        })
    }
}
