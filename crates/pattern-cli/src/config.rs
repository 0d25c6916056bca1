//! Demo configuration.
//!
//! Every field is optional in the JSON file; missing fields fall back to the
//! built-in sequences.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use pattern_core::decorator::{BeverageKind, Condiment};
use pattern_core::factory::{ExerciseKind, Order, TransportKind};
use pattern_core::observer::{Measurements, PriceList};
use pattern_core::{Price, Size};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Beverage orders for the decorator demo.
    pub orders: Vec<Order>,
    /// Weather station readings, applied in order.
    pub measurements: Vec<Measurements>,
    /// Price lists (prices in cents) mailed to shop clients, in order.
    pub price_lists: Vec<PriceList>,
    pub shop_clients: Vec<String>,
    pub route: Vec<TransportKind>,
    pub workout: Vec<ExerciseKind>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            orders: vec![
                Order::new(BeverageKind::Espresso).size(Size::Medium),
                Order::new(BeverageKind::DarkRoast)
                    .with(Condiment::Mocha)
                    .with(Condiment::Mocha)
                    .with(Condiment::Whip),
                Order::new(BeverageKind::HouseBlend)
                    .size(Size::Medium)
                    .with(Condiment::Soy)
                    .with(Condiment::Mocha)
                    .with(Condiment::Whip),
            ],
            measurements: vec![
                Measurements::new(30.0, 30.0, 30.0),
                Measurements::new(50.0, 50.0, 50.0),
                Measurements::new(70.0, 70.0, 70.0),
                Measurements::new(90.0, 90.0, 90.0),
            ],
            price_lists: vec![
                PriceList::new()
                    .with("Diapers", Price::from_cents(250_000))
                    .with("Pram", Price::from_cents(9_000_000))
                    .with("Cot", Price::from_cents(7_000_000)),
                PriceList::new().with("Feeding Chair", Price::from_cents(1_000_000)),
            ],
            shop_clients: vec!["Maria".into(), "Boris".into(), "Serg".into()],
            route: vec![
                TransportKind::Ground,
                TransportKind::Water,
                TransportKind::Air,
                TransportKind::Air,
                TransportKind::Ground,
            ],
            workout: ExerciseKind::ALL.to_vec(),
        }
    }
}

impl DemoConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid demo config")
    }
}

/// Read the config file, or use defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<DemoConfig> {
    let Some(path) = path else {
        tracing::debug!("no config file, using defaults");
        return Ok(DemoConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = DemoConfig::from_json(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded demo config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_means_defaults() {
        let config = DemoConfig::from_json("{}").unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn partial_config_overrides_only_given_fields() {
        let config = DemoConfig::from_json(
            r#"{
                "route": ["air"],
                "measurements": [{"temperature": 1.0, "humidity": 2.0, "pressure": 3.0}]
            }"#,
        )
        .unwrap();

        assert_eq!(config.route, vec![TransportKind::Air]);
        assert_eq!(config.measurements, vec![Measurements::new(1.0, 2.0, 3.0)]);
        assert_eq!(config.workout, DemoConfig::default().workout);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = DemoConfig::from_json(r#"{"route": ["submarine"]}"#).unwrap_err();
        assert!(err.to_string().contains("invalid demo config"));
    }

    #[test]
    fn missing_path_uses_defaults() {
        assert_eq!(load(None).unwrap(), DemoConfig::default());
    }

    #[test]
    fn unreadable_path_is_an_error() {
        let err = load(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
