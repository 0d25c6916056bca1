//! Ducks with swappable quack and flight behavior.

use super::Slot;

pub trait Quack {
    fn quack(&self) -> String;
}

/// Flight capability. Shared by ducks and vehicles.
pub trait Fly {
    fn fly(&self) -> String;
}

pub struct QuackSound;

impl Quack for QuackSound {
    fn quack(&self) -> String {
        "Quack!".to_string()
    }
}

pub struct FlyWithWings;

impl Fly for FlyWithWings {
    fn fly(&self) -> String {
        "flying with wings".to_string()
    }
}

pub struct FlyRocketPowered;

impl Fly for FlyRocketPowered {
    fn fly(&self) -> String {
        "flying with a rocket".to_string()
    }
}

pub struct Duck {
    name: String,
    quack: Slot<dyn Quack>,
    fly: Slot<dyn Fly>,
}

impl Duck {
    /// A duck with no behaviors bound.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quack: Slot::unset("quack"),
            fly: Slot::unset("fly"),
        }
    }

    /// Mallard: quacks and flies with wings out of the box.
    pub fn mallard() -> Self {
        let mut duck = Self::new("MallardDuck");
        duck.set_quack_behavior(QuackSound);
        duck.set_fly_behavior(FlyWithWings);
        duck
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_quack_behavior(&mut self, behavior: impl Quack + 'static) {
        self.quack.set_behavior(Box::new(behavior));
    }

    pub fn set_fly_behavior(&mut self, behavior: impl Fly + 'static) {
        self.fly.set_behavior(Box::new(behavior));
    }

    pub fn perform_quack(&self) -> Option<String> {
        self.quack.perform(|q| q.quack())
    }

    pub fn perform_fly(&self) -> Option<String> {
        self.fly.perform(|f| f.fly())
    }

    pub fn to_stand(&self) -> String {
        format!("{} to stand!", self.name)
    }
}
