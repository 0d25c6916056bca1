//! Vehicles that may drive, swim, or fly, depending on what is bound.

use serde::{Deserialize, Serialize};

use super::Slot;
use super::duck::Fly;

pub trait Drive {
    fn drive(&self) -> String;
}

pub trait Swim {
    fn swim(&self) -> String;
}

pub struct Driving;

impl Drive for Driving {
    fn drive(&self) -> String {
        "driving on the road".to_string()
    }
}

pub struct Swimming;

impl Swim for Swimming {
    fn swim(&self) -> String {
        "sailing on the surface".to_string()
    }
}

pub struct ScubaDiving;

impl Swim for ScubaDiving {
    fn swim(&self) -> String {
        "scuba diving".to_string()
    }
}

pub struct RotorFlight;

impl Fly for RotorFlight {
    fn fly(&self) -> String {
        "flying with rotors".to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleModel {
    Mercedes,
    Helicopter,
    Yacht,
}

impl VehicleModel {
    pub fn name(self) -> &'static str {
        match self {
            VehicleModel::Mercedes => "Mercedes",
            VehicleModel::Helicopter => "Helicopter",
            VehicleModel::Yacht => "Yacht",
        }
    }
}

/// All three slots start unset unless injected.
pub struct Vehicle {
    model: VehicleModel,
    fly: Slot<dyn Fly>,
    drive: Slot<dyn Drive>,
    swim: Slot<dyn Swim>,
}

impl Vehicle {
    pub fn new(model: VehicleModel) -> Self {
        Self {
            model,
            fly: Slot::unset("fly"),
            drive: Slot::unset("drive"),
            swim: Slot::unset("swim"),
        }
    }

    pub fn with_fly(mut self, behavior: impl Fly + 'static) -> Self {
        self.set_fly_behavior(behavior);
        self
    }

    pub fn with_drive(mut self, behavior: impl Drive + 'static) -> Self {
        self.set_drive_behavior(behavior);
        self
    }

    pub fn with_swim(mut self, behavior: impl Swim + 'static) -> Self {
        self.set_swim_behavior(behavior);
        self
    }

    pub fn model(&self) -> VehicleModel {
        self.model
    }

    pub fn set_fly_behavior(&mut self, behavior: impl Fly + 'static) {
        self.fly.set_behavior(Box::new(behavior));
    }

    pub fn set_drive_behavior(&mut self, behavior: impl Drive + 'static) {
        self.drive.set_behavior(Box::new(behavior));
    }

    pub fn set_swim_behavior(&mut self, behavior: impl Swim + 'static) {
        self.swim.set_behavior(Box::new(behavior));
    }

    pub fn fly(&self) -> Option<String> {
        self.fly.perform(|b| b.fly())
    }

    pub fn drive(&self) -> Option<String> {
        self.drive.perform(|b| b.drive())
    }

    pub fn swim(&self) -> Option<String> {
        self.swim.perform(|b| b.swim())
    }
}
