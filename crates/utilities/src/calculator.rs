use crate::error::{UtilityError, UtilityResult};

/// Floating-point calculator.
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    pub fn divide(&self, a: f64, b: f64) -> UtilityResult<f64> {
        if b == 0.0 {
            return Err(UtilityError::DivideByZero);
        }
        Ok(a / b)
    }

    /// `n!`; 0! and 1! are both 1.
    pub fn factorial(&self, n: i32) -> UtilityResult<i64> {
        if n < 0 {
            return Err(UtilityError::OutOfRange(
                "Factorial is not defined for negative numbers.",
            ));
        }

        (2..=i64::from(n)).try_fold(1i64, |acc, i| {
            acc.checked_mul(i).ok_or(UtilityError::Overflow("factorial"))
        })
    }
}
