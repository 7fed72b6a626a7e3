//! Left-to-right arithmetic expression evaluator.
//!
//! There is no operator precedence: `2+3*4` is `((2+3)*4)`. Parentheses are
//! the only grouping. The innermost rightmost group is evaluated first and
//! its rendered value is spliced back into the text, repeating until no
//! group is left.

use regex::Regex;
use thiserror::Error;

use crate::operations::format_number;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    #[error("Invalid characters in expression")]
    InvalidCharacters,

    #[error("Mismatched parentheses")]
    MismatchedParentheses,

    #[error("No valid terms found")]
    NoTerms,

    #[error("maximum nesting depth of {} exceeded", MAX_NESTING_DEPTH)]
    TooDeeplyNested,

    #[error("could not convert string to float: '{0}'")]
    InvalidNumber(String),
}

/// Deepest parenthesis nesting accepted.
pub const MAX_NESTING_DEPTH: usize = 500;

pub struct ExpressionEvaluator {
    allowed: Regex,
    term: Regex,
}

impl ExpressionEvaluator {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            allowed: Regex::new(r"^[0-9+\-*/().]+$")?,
            term: Regex::new(r"[+\-*/]?[0-9]+\.?[0-9]*")?,
        })
    }

    /// Evaluate `expression`, ignoring all whitespace.
    ///
    /// Division by zero inside an expression yields NaN rather than an error.
    pub fn evaluate(&self, expression: &str) -> Result<f64, ExpressionError> {
        let mut expr: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
        self.check(&expr)?;
        if nesting_depth(&expr) > MAX_NESTING_DEPTH {
            return Err(ExpressionError::TooDeeplyNested);
        }

        while let Some(open) = expr.rfind('(') {
            let close = expr[open..]
                .find(')')
                .map(|offset| open + offset)
                .ok_or(ExpressionError::MismatchedParentheses)?;
            // Rightmost `(` with its first `)`: the group holds no parentheses.
            let inner = &expr[open + 1..close];
            if inner.is_empty() {
                return Err(ExpressionError::NoTerms);
            }
            let value = self.fold_terms(inner)?;
            expr = format!(
                "{}{}{}",
                &expr[..open],
                format_number(value),
                &expr[close + 1..]
            );
            self.check(&expr)?;
        }

        self.fold_terms(&expr)
    }

    fn check(&self, expr: &str) -> Result<(), ExpressionError> {
        if expr.is_empty() {
            return Err(ExpressionError::NoTerms);
        }
        if !self.allowed.is_match(expr) {
            return Err(ExpressionError::InvalidCharacters);
        }
        Ok(())
    }

    fn fold_terms(&self, expr: &str) -> Result<f64, ExpressionError> {
        let mut terms = self.term.find_iter(expr).map(|m| m.as_str());
        let first = terms.next().ok_or(ExpressionError::NoTerms)?;
        let mut result = parse_numeral(first)?;

        for term in terms {
            let (op, digits) = match term.as_bytes()[0] {
                b'+' | b'-' | b'*' | b'/' => (term.as_bytes()[0], &term[1..]),
                _ => (b'+', term),
            };
            let value = parse_numeral(digits)?;
            result = match op {
                b'+' => result + value,
                b'-' => result - value,
                b'*' => result * value,
                _ if value == 0.0 => f64::NAN,
                _ => result / value,
            };
        }

        Ok(result)
    }
}

fn nesting_depth(expr: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0;
    for c in expr.chars() {
        match c {
            '(' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}

fn parse_numeral(text: &str) -> Result<f64, ExpressionError> {
    text.parse::<f64>()
        .map_err(|_| ExpressionError::InvalidNumber(text.to_string()))
}
