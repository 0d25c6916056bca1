//! Cargo transport: one vehicle per terrain.

use serde::{Deserialize, Serialize};

use super::Factory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportKind {
    Ground,
    Air,
    Water,
}

impl TransportKind {
    pub const ALL: [TransportKind; 3] = [
        TransportKind::Ground,
        TransportKind::Air,
        TransportKind::Water,
    ];
}

pub trait Transport {
    fn name(&self) -> &'static str;

    fn kind(&self) -> TransportKind;

    fn deliver_cargo(&self) -> String {
        format!("{} delivers the cargo", self.name())
    }

    fn back_to_base(&self) -> String {
        format!("{} returns to base", self.name())
    }
}

pub struct Bicycle;

impl Transport for Bicycle {
    fn name(&self) -> &'static str {
        "Bicycle"
    }

    fn kind(&self) -> TransportKind {
        TransportKind::Ground
    }
}

pub struct Boat;

impl Transport for Boat {
    fn name(&self) -> &'static str {
        "Boat"
    }

    fn kind(&self) -> TransportKind {
        TransportKind::Water
    }
}

pub struct Kite;

impl Transport for Kite {
    fn name(&self) -> &'static str {
        "Kite"
    }

    fn kind(&self) -> TransportKind {
        TransportKind::Air
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TransportFactory;

impl Factory for TransportFactory {
    type Kind = TransportKind;
    type Product = Box<dyn Transport>;

    fn create(&self, kind: TransportKind) -> Box<dyn Transport> {
        tracing::debug!(?kind, "creating transport");
        match kind {
            TransportKind::Ground => Box::new(Bicycle),
            TransportKind::Water => Box::new(Boat),
            TransportKind::Air => Box::new(Kite),
        }
    }
}

pub struct CargoDelivery {
    factory: TransportFactory,
    vehicles: Vec<Box<dyn Transport>>,
}

impl CargoDelivery {
    pub fn new(factory: TransportFactory) -> Self {
        Self {
            factory,
            vehicles: Vec::new(),
        }
    }

    /// Add one vehicle per requested kind, duplicates included.
    pub fn make_delivery_to(&mut self, kinds: &[TransportKind]) {
        self.vehicles
            .extend(kinds.iter().map(|&kind| self.factory.create(kind)));
    }

    pub fn vehicles(&self) -> impl Iterator<Item = &dyn Transport> {
        self.vehicles.iter().map(|v| &**v)
    }

    pub fn deliver_cargo(&self) -> Vec<String> {
        self.vehicles
            .iter()
            .flat_map(|v| [v.deliver_cargo(), v.back_to_base()])
            .collect()
    }
}
