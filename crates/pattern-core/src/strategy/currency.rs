use super::Slot;
use crate::domain::PatternError;

/// Where exchange rates come from.
pub trait RateSource {
    fn fetch_rates(&self) -> String;
}

pub struct CentralBank;

impl RateSource for CentralBank {
    fn fetch_rates(&self) -> String {
        "fetching rates from the central bank".to_string()
    }
}

pub struct Yahoo;

impl RateSource for Yahoo {
    fn fetch_rates(&self) -> String {
        "fetching rates from Yahoo".to_string()
    }
}

pub struct Converter {
    source: Slot<dyn RateSource>,
}

impl Converter {
    pub fn new(source: impl RateSource + 'static) -> Self {
        Self {
            source: Slot::bound("rate_source", Box::new(source)),
        }
    }

    pub fn set_strategy(&mut self, source: impl RateSource + 'static) {
        self.source.set_behavior(Box::new(source));
    }

    pub fn rates(&self) -> Result<String, PatternError> {
        Ok(self.source.require()?.fetch_rates())
    }
}
