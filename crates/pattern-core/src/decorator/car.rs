//! Car dealership: a base model and aftermarket tuning kits.
//!
//! Cars come in one size, so every price table here is flat.

use serde::{Deserialize, Serialize};

use super::{Addon, BaseEntity};
use crate::domain::PriceTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarModel {
    MercedesGl,
}

impl CarModel {
    pub fn base(self) -> BaseEntity {
        match self {
            CarModel::MercedesGl => BaseEntity::new("MercedesGL", PriceTable::flat(3_000_000)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TuningKit {
    Amg,
    Brabus,
}

impl From<TuningKit> for Addon {
    fn from(kit: TuningKit) -> Self {
        match kit {
            TuningKit::Amg => Addon::new("AMG", PriceTable::flat(2_000_000)),
            TuningKit::Brabus => Addon::new("Brabus", PriceTable::flat(10_000_000)),
        }
    }
}
