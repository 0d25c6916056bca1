//! Coffee-shop menu: base beverages and condiments.

use serde::{Deserialize, Serialize};

use super::{Addon, BaseEntity};
use crate::domain::PriceTable;

/// Base beverages on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeverageKind {
    Espresso,
    HouseBlend,
    DarkRoast,
    Decaf,
}

impl BeverageKind {
    pub const ALL: [BeverageKind; 4] = [
        BeverageKind::Espresso,
        BeverageKind::HouseBlend,
        BeverageKind::DarkRoast,
        BeverageKind::Decaf,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BeverageKind::Espresso => "Espresso",
            BeverageKind::HouseBlend => "House Blend Coffee",
            BeverageKind::DarkRoast => "Dark Roast",
            BeverageKind::Decaf => "Decaf",
        }
    }

    /// Only espresso is priced by cup size.
    pub fn prices(self) -> PriceTable {
        match self {
            BeverageKind::Espresso => PriceTable::sized(199, 210, 300),
            BeverageKind::HouseBlend => PriceTable::flat(89),
            BeverageKind::DarkRoast => PriceTable::flat(99),
            BeverageKind::Decaf => PriceTable::flat(105),
        }
    }

    pub fn base(self) -> BaseEntity {
        BaseEntity::new(self.label(), self.prices())
    }
}

/// Condiments that wrap a beverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condiment {
    Mocha,
    Soy,
    Whip,
    Cinnamon,
}

impl Condiment {
    pub fn addon(&self) -> Addon {
        match self {
            Condiment::Mocha => Addon::new("Mocha", PriceTable::flat(20)),
            // soy is the one size-sensitive condiment
            Condiment::Soy => Addon::new("Soy", PriceTable::sized(10, 20, 30)),
            Condiment::Whip => Addon::new("Whip", PriceTable::flat(10)),
            Condiment::Cinnamon => Addon::new("Cinnamon", PriceTable::flat(110)),
        }
    }
}

impl From<Condiment> for Addon {
    fn from(condiment: Condiment) -> Self {
        condiment.addon()
    }
}
