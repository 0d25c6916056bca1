//! Strategy slots: named, swappable behavior references.
//!
//! An owner keeps one [`Slot`] per capability (fly, quack, brake, ...) and
//! delegates to whatever is bound. Swapping replaces the whole box in one
//! assignment; the owner itself is untouched.
//!
//! Two calling conventions:
//! - [`Slot::perform`] is lenient: an unset slot is a no-op (`None`).
//! - [`Slot::require`] is strict: an unset slot is [`PatternError::SlotUnset`].
//!
//! Owners with optional behaviors (ducks, vehicles, fighters) use the
//! lenient form. Owners that are always constructed bound (car brakes,
//! calculator, printer, converter, sorter) use the strict form.

pub mod brake;
pub mod calculator;
pub mod currency;
pub mod duck;
pub mod fighter;
pub mod printer;
pub mod sorter;
pub mod vehicle;
pub mod weather;

pub use self::brake::{Brake, BrakeWithAbs, BrakeWithoutAbs, Car};
pub use self::calculator::{Arithmetic, Calculator, Divide, Multiply, Sum};
pub use self::currency::{CentralBank, Converter, RateSource, Yahoo};
pub use self::duck::{Duck, Fly, FlyRocketPowered, FlyWithWings, Quack, QuackSound};
pub use self::fighter::{Fatality, Fighter, ScorpionFatality, ShangTsungFatality, SubZeroFatality};
pub use self::printer::{AlternatingCase, LowerCase, PrintFormat, Printer, UpperCase};
pub use self::sorter::{Ascending, Descending, SortAlgorithm, Sorter};
pub use self::vehicle::{
    Drive, Driving, RotorFlight, ScubaDiving, Swim, Swimming, Vehicle, VehicleModel,
};
pub use self::weather::{
    ColoradoTower, MoscowTower, SilentTower, StavropolTower, WeatherFetcher, WeatherSource,
};

use crate::domain::PatternError;

/// Binding state of a slot.
///
/// State transitions:
/// - Unset -> Bound (set_behavior)
/// - Bound -> Bound (set_behavior, replaces)
/// - Bound -> Unset (clear)
///
/// There is no terminal state.
pub enum Binding<B: ?Sized> {
    Unset,
    Bound(Box<B>),
}

impl<B: ?Sized> Binding<B> {
    pub fn is_bound(&self) -> bool {
        matches!(self, Binding::Bound(_))
    }
}

/// A named strategy slot.
pub struct Slot<B: ?Sized> {
    name: &'static str,
    binding: Binding<B>,
}

impl<B: ?Sized> Slot<B> {
    pub fn unset(name: &'static str) -> Self {
        Self {
            name,
            binding: Binding::Unset,
        }
    }

    pub fn bound(name: &'static str, behavior: Box<B>) -> Self {
        Self {
            name,
            binding: Binding::Bound(behavior),
        }
    }

    /// Build from an optional behavior (constructor injection).
    pub fn from_option(name: &'static str, behavior: Option<Box<B>>) -> Self {
        match behavior {
            Some(behavior) => Self::bound(name, behavior),
            None => Self::unset(name),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn binding(&self) -> &Binding<B> {
        &self.binding
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_bound()
    }

    /// Replace the active behavior, returning the previous one.
    pub fn set_behavior(&mut self, behavior: Box<B>) -> Option<Box<B>> {
        tracing::debug!(slot = self.name, "strategy bound");
        match std::mem::replace(&mut self.binding, Binding::Bound(behavior)) {
            Binding::Bound(previous) => Some(previous),
            Binding::Unset => None,
        }
    }

    /// Unbind, returning whatever was bound.
    pub fn clear(&mut self) -> Option<Box<B>> {
        tracing::debug!(slot = self.name, "strategy cleared");
        match std::mem::replace(&mut self.binding, Binding::Unset) {
            Binding::Bound(previous) => Some(previous),
            Binding::Unset => None,
        }
    }

    /// Delegate to the bound behavior; no-op when unset.
    pub fn perform<R>(&self, f: impl FnOnce(&B) -> R) -> Option<R> {
        match &self.binding {
            Binding::Bound(behavior) => Some(f(&**behavior)),
            Binding::Unset => {
                tracing::trace!(slot = self.name, "unset slot, skipping");
                None
            }
        }
    }

    /// Strict access: the bound behavior, or `SlotUnset`.
    pub fn require(&self) -> Result<&B, PatternError> {
        match &self.binding {
            Binding::Bound(behavior) => Ok(&**behavior),
            Binding::Unset => Err(PatternError::SlotUnset { slot: self.name }),
        }
    }
}

impl<B: ?Sized> std::fmt::Debug for Slot<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = if self.is_bound() { "bound" } else { "unset" };
        f.debug_struct("Slot")
            .field("name", &self.name)
            .field("state", &state)
            .finish()
    }
}
