//! Decorator chain: entities priced by size, wrapped by add-ons.
//!
//! A chain is a base [`BaseEntity`] owned by zero or more [`Decorated`]
//! nodes. Each node owns exactly the value it wraps, so chains are singly
//! linked, acyclic, and only grow at the outside.
//!
//! # Size handling
//! - The size lives once, at the base.
//! - `set_variant` / `variant` on any node forward down to the base.
//! - A size-sensitive surcharge reads the wrapped chain's size when `cost()`
//!   is called, so changing the size after wrapping is reflected.

pub mod beverage;
pub mod car;

pub use self::beverage::{BeverageKind, Condiment};
pub use self::car::{CarModel, TuningKit};

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::domain::{Price, PriceTable, Size};

/// Separator between the base label and each add-on label.
pub const DESCRIPTION_DELIMITER: &str = ", ";

/// Capability shared by base entities and every decorator node.
pub trait Component {
    fn cost(&self) -> Price;

    fn description(&self) -> String;

    fn variant(&self) -> Size;

    fn set_variant(&mut self, size: Size);

    /// Number of decorator nodes above the base.
    fn depth(&self) -> usize {
        0
    }
}

impl<C: Component + ?Sized> Component for Box<C> {
    fn cost(&self) -> Price {
        (**self).cost()
    }

    fn description(&self) -> String {
        (**self).description()
    }

    fn variant(&self) -> Size {
        (**self).variant()
    }

    fn set_variant(&mut self, size: Size) {
        (**self).set_variant(size)
    }

    fn depth(&self) -> usize {
        (**self).depth()
    }
}

/// Fluent wrapping for any component.
pub trait ComponentExt: Component + Sized {
    /// Wrap the whole chain in one more node.
    fn wrap(self, addon: impl Into<Addon>) -> Decorated<Self> {
        Decorated::new(self, addon)
    }

    /// Erase the concrete chain type.
    fn boxed(self) -> Box<dyn Component>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<C: Component + Sized> ComponentExt for C {}

/// A base entity: label, size, and a per-size price table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseEntity {
    label: Cow<'static, str>,
    #[serde(default)]
    variant: Size,
    prices: PriceTable,
}

impl BaseEntity {
    pub fn new(label: impl Into<Cow<'static, str>>, prices: PriceTable) -> Self {
        Self {
            label: label.into(),
            variant: Size::default(),
            prices,
        }
    }

    pub fn with_variant(mut self, size: Size) -> Self {
        self.variant = size;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }
}

impl Default for BaseEntity {
    fn default() -> Self {
        Self::new("Unknown beverage", PriceTable::flat(0))
    }
}

impl Component for BaseEntity {
    fn cost(&self) -> Price {
        self.prices.get(self.variant)
    }

    fn description(&self) -> String {
        self.label.to_string()
    }

    fn variant(&self) -> Size {
        self.variant
    }

    fn set_variant(&mut self, size: Size) {
        self.variant = size;
    }
}

/// What a decorator node adds: a label suffix and a surcharge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Addon {
    pub label: Cow<'static, str>,
    pub surcharge: PriceTable,
}

impl Addon {
    pub fn new(label: impl Into<Cow<'static, str>>, surcharge: PriceTable) -> Self {
        Self {
            label: label.into(),
            surcharge,
        }
    }
}

/// One node of a decorator chain.
///
/// Holds no size of its own.
#[derive(Debug, Clone)]
pub struct Decorated<C> {
    inner: C,
    addon: Addon,
}

impl<C: Component> Decorated<C> {
    pub fn new(inner: C, addon: impl Into<Addon>) -> Self {
        let addon = addon.into();
        tracing::debug!(
            addon = %addon.label,
            depth = inner.depth() + 1,
            "wrapping component"
        );
        Self { inner, addon }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn addon(&self) -> &Addon {
        &self.addon
    }

    /// Surcharge of this node alone, at the wrapped chain's current size.
    pub fn surcharge(&self) -> Price {
        self.addon.surcharge.get(self.inner.variant())
    }
}

impl<C: Component> Component for Decorated<C> {
    fn cost(&self) -> Price {
        self.inner.cost() + self.surcharge()
    }

    fn description(&self) -> String {
        let mut description = self.inner.description();
        description.push_str(DESCRIPTION_DELIMITER);
        description.push_str(&self.addon.label);
        description
    }

    fn variant(&self) -> Size {
        self.inner.variant()
    }

    fn set_variant(&mut self, size: Size) {
        self.inner.set_variant(size)
    }

    fn depth(&self) -> usize {
        self.inner.depth() + 1
    }
}
