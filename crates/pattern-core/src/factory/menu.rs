//! Coffee menu factory: hands out base beverages and assembles orders.

use serde::{Deserialize, Serialize};

use super::Factory;
use crate::decorator::{BaseEntity, BeverageKind, Component, ComponentExt, Condiment};
use crate::domain::Size;

/// A customer order: base beverage, cup size, condiments in wrap order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub beverage: BeverageKind,
    #[serde(default)]
    pub size: Size,
    #[serde(default)]
    pub condiments: Vec<Condiment>,
}

impl Order {
    pub fn new(beverage: BeverageKind) -> Self {
        Self {
            beverage,
            size: Size::default(),
            condiments: Vec::new(),
        }
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn with(mut self, condiment: Condiment) -> Self {
        self.condiments.push(condiment);
        self
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MenuFactory;

impl MenuFactory {
    /// Base beverage sized, then wrapped by each condiment in order.
    pub fn assemble(&self, order: &Order) -> Box<dyn Component> {
        let base = self.create(order.beverage).with_variant(order.size);
        order
            .condiments
            .iter()
            .fold(base.boxed(), |drink, &condiment| drink.wrap(condiment).boxed())
    }
}

impl Factory for MenuFactory {
    type Kind = BeverageKind;
    type Product = BaseEntity;

    fn create(&self, kind: BeverageKind) -> BaseEntity {
        tracing::debug!(?kind, "creating beverage");
        kind.base()
    }
}
