use super::Slot;
use crate::domain::PatternError;

/// A binary arithmetic operation.
pub trait Arithmetic {
    fn apply(&self, a: f64, b: f64) -> Result<f64, PatternError>;
}

pub struct Sum;

impl Arithmetic for Sum {
    fn apply(&self, a: f64, b: f64) -> Result<f64, PatternError> {
        Ok(a + b)
    }
}

pub struct Multiply;

impl Arithmetic for Multiply {
    fn apply(&self, a: f64, b: f64) -> Result<f64, PatternError> {
        Ok(a * b)
    }
}

pub struct Divide;

impl Arithmetic for Divide {
    fn apply(&self, a: f64, b: f64) -> Result<f64, PatternError> {
        if b == 0.0 {
            return Err(PatternError::DivisionByZero);
        }
        Ok(a / b)
    }
}

pub struct Calculator {
    operation: Slot<dyn Arithmetic>,
}

impl Calculator {
    pub fn new(operation: impl Arithmetic + 'static) -> Self {
        Self {
            operation: Slot::bound("arithmetic", Box::new(operation)),
        }
    }

    pub fn set_strategy(&mut self, operation: impl Arithmetic + 'static) {
        self.operation.set_behavior(Box::new(operation));
    }

    pub fn compute(&self, a: f64, b: f64) -> Result<f64, PatternError> {
        self.operation.require()?.apply(a, b)
    }
}
