//! Weather reports from interchangeable towers.

use super::Slot;

pub const NO_WEATHER: &str = "No weather";

/// A tower that reports the weather.
///
/// Towers that don't override `report` say [`NO_WEATHER`].
pub trait WeatherSource {
    fn report(&self) -> String {
        NO_WEATHER.to_string()
    }
}

pub struct MoscowTower;

impl WeatherSource for MoscowTower {
    fn report(&self) -> String {
        "Moscow is very cold".to_string()
    }
}

pub struct StavropolTower;

impl WeatherSource for StavropolTower {
    fn report(&self) -> String {
        "Stavropol is warm".to_string()
    }
}

pub struct ColoradoTower;

impl WeatherSource for ColoradoTower {
    fn report(&self) -> String {
        "Colorado is very hot".to_string()
    }
}

/// A tower under construction; uses the default report.
pub struct SilentTower;

impl WeatherSource for SilentTower {}

pub struct WeatherFetcher {
    source: Slot<dyn WeatherSource>,
}

impl WeatherFetcher {
    pub fn new() -> Self {
        Self {
            source: Slot::unset("weather_source"),
        }
    }

    pub fn with_source(source: impl WeatherSource + 'static) -> Self {
        let mut fetcher = Self::new();
        fetcher.set_source(source);
        fetcher
    }

    pub fn set_source(&mut self, source: impl WeatherSource + 'static) {
        self.source.set_behavior(Box::new(source));
    }

    pub fn fetch(&self) -> Option<String> {
        self.source.perform(|s| s.report())
    }
}

impl Default for WeatherFetcher {
    fn default() -> Self {
        Self::new()
    }
}
