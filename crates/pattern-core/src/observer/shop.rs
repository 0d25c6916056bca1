//! Baby-goods shop price list and its mailing-list clients.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Observer, StateSource, Subject};
use crate::domain::{ObserverError, PatternError, Price};

/// Goods and their current prices, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceList(BTreeMap<String, Price>);

impl PriceList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, good: impl Into<String>, price: Price) -> Self {
        self.0.insert(good.into(), price);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Price)> {
        self.0.iter().map(|(good, price)| (good.as_str(), *price))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Price)> for PriceList {
    fn from_iter<I: IntoIterator<Item = (String, Price)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Subject<PriceList> {
    /// Publish a new price list to every subscribed client.
    pub fn publish_prices(&mut self, prices: PriceList) -> Result<(), PatternError> {
        tracing::info!(goods = prices.len(), subscribers = self.len(), "publishing price list");
        self.set_state(prices)
    }
}

/// A shop client collecting one notice per good per mailing.
#[derive(Debug, Clone)]
pub struct ShopClient {
    name: String,
    notices: Vec<String>,
    mailings: usize,
}

impl ShopClient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            notices: Vec::new(),
            mailings: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    pub fn mailings(&self) -> usize {
        self.mailings
    }
}

impl Observer<PriceList> for ShopClient {
    fn update(&mut self, subject: &dyn StateSource<PriceList>) -> Result<(), ObserverError> {
        for (good, price) in subject.state().iter() {
            self.notices
                .push(format!("{}: {} now costs {}", self.name, good, price));
        }
        self.mailings += 1;
        Ok(())
    }
}
