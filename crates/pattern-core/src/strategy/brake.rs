use super::Slot;
use crate::domain::PatternError;

pub trait Brake {
    fn brake(&self) -> String;
}

pub struct BrakeWithAbs;

impl Brake for BrakeWithAbs {
    fn brake(&self) -> String {
        "braking with ABS".to_string()
    }
}

pub struct BrakeWithoutAbs;

impl Brake for BrakeWithoutAbs {
    fn brake(&self) -> String {
        "braking without ABS".to_string()
    }
}

/// A car is never built without brakes.
pub struct Car {
    brake: Slot<dyn Brake>,
}

impl Car {
    pub fn new(brake: impl Brake + 'static) -> Self {
        Self {
            brake: Slot::bound("brake", Box::new(brake)),
        }
    }

    pub fn set_brake_behavior(&mut self, brake: impl Brake + 'static) {
        self.brake.set_behavior(Box::new(brake));
    }

    pub fn prepare_brake(&self) -> Result<String, PatternError> {
        Ok(self.brake.require()?.brake())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn car_switches_brakes_at_runtime() {
        let mut car = Car::new(BrakeWithAbs);
        assert_eq!(car.prepare_brake().unwrap(), "braking with ABS");

        car.set_brake_behavior(BrakeWithoutAbs);
        assert_eq!(car.prepare_brake().unwrap(), "braking without ABS");
    }
}
