//! Money and per-size price lookup.
//!
//! Prices are kept in integer cents so chain sums compare exactly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use super::variant::Size;

/// An amount of money in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(self) -> u64 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Price selected by the current [`Size`].
///
/// `Flat` ignores the size entirely; `Sized` is the lookup table used by
/// size-sensitive bases (Espresso) and surcharges (Soy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceTable {
    Flat { price: Price },
    Sized { small: Price, medium: Price, large: Price },
}

impl PriceTable {
    pub const fn flat(cents: u64) -> Self {
        PriceTable::Flat {
            price: Price::from_cents(cents),
        }
    }

    pub const fn sized(small: u64, medium: u64, large: u64) -> Self {
        PriceTable::Sized {
            small: Price::from_cents(small),
            medium: Price::from_cents(medium),
            large: Price::from_cents(large),
        }
    }

    pub fn get(&self, size: Size) -> Price {
        match *self {
            PriceTable::Flat { price } => price,
            PriceTable::Sized {
                small,
                medium,
                large,
            } => match size {
                Size::Small => small,
                Size::Medium => medium,
                Size::Large => large,
            },
        }
    }

    /// Does the price depend on the size at all?
    pub fn is_size_sensitive(&self) -> bool {
        matches!(self, PriceTable::Sized { .. })
    }
}
