//! Weather station subject and its displays.
//!
//! Every display pulls the readings it cares about from the station on
//! `update` and renders one line; the driver decides where the line goes.

use serde::{Deserialize, Serialize};

use super::{Observer, StateSource, Subject};
use crate::domain::{ObserverError, PatternError};

/// Latest station readings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub temperature: f32,
    pub humidity: f32,
    pub pressure: f32,
}

impl Measurements {
    pub fn new(temperature: f32, humidity: f32, pressure: f32) -> Self {
        Self {
            temperature,
            humidity,
            pressure,
        }
    }
}

impl Subject<Measurements> {
    /// Record new readings and notify all displays.
    pub fn set_measurements(
        &mut self,
        temperature: f32,
        humidity: f32,
        pressure: f32,
    ) -> Result<(), PatternError> {
        self.set_state(Measurements::new(temperature, humidity, pressure))
    }
}

/// Common surface of the station displays.
pub trait DisplayElement {
    /// The most recently rendered line, if any update happened yet.
    fn display(&self) -> Option<&str>;

    /// How many updates this display has processed.
    fn updates(&self) -> usize;
}

#[derive(Debug, Default)]
pub struct CurrentConditionsDisplay {
    temperature: f32,
    humidity: f32,
    rendered: Option<String>,
    updates: usize,
}

impl CurrentConditionsDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Observer<Measurements> for CurrentConditionsDisplay {
    fn update(&mut self, subject: &dyn StateSource<Measurements>) -> Result<(), ObserverError> {
        let m = subject.state();
        self.temperature = m.temperature;
        self.humidity = m.humidity;
        self.updates += 1;
        self.rendered = Some(format!(
            "Current conditions: {:.1}F degrees and {:.1}% humidity",
            self.temperature, self.humidity
        ));
        Ok(())
    }
}

impl DisplayElement for CurrentConditionsDisplay {
    fn display(&self) -> Option<&str> {
        self.rendered.as_deref()
    }

    fn updates(&self) -> usize {
        self.updates
    }
}

/// Running min / max / average temperature.
///
/// Rejects non-finite temperatures, since one NaN would poison the average.
#[derive(Debug, Default)]
pub struct StatisticsDisplay {
    min: Option<f32>,
    max: Option<f32>,
    sum: f32,
    rendered: Option<String>,
    updates: usize,
}

impl StatisticsDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn average(&self) -> Option<f32> {
        (self.updates > 0).then(|| self.sum / self.updates as f32)
    }

    pub fn min(&self) -> Option<f32> {
        self.min
    }

    pub fn max(&self) -> Option<f32> {
        self.max
    }
}

impl Observer<Measurements> for StatisticsDisplay {
    fn update(&mut self, subject: &dyn StateSource<Measurements>) -> Result<(), ObserverError> {
        let temp = subject.state().temperature;
        if !temp.is_finite() {
            return Err(ObserverError::new(format!(
                "statistics display rejected temperature {temp}"
            )));
        }
        self.min = Some(self.min.map_or(temp, |m| m.min(temp)));
        self.max = Some(self.max.map_or(temp, |m| m.max(temp)));
        self.sum += temp;
        self.updates += 1;
        self.rendered = Some(format!(
            "Avg/Max/Min temperature = {:.1}/{:.1}/{:.1}",
            self.sum / self.updates as f32,
            self.max.unwrap_or(temp),
            self.min.unwrap_or(temp),
        ));
        Ok(())
    }
}

impl DisplayElement for StatisticsDisplay {
    fn display(&self) -> Option<&str> {
        self.rendered.as_deref()
    }

    fn updates(&self) -> usize {
        self.updates
    }
}

/// Pressure trend since the previous reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Forecast {
    Improving,
    Same,
    Cooler,
}

impl Forecast {
    pub fn text(self) -> &'static str {
        match self {
            Forecast::Improving => "Improving weather on the way!",
            Forecast::Same => "More of the same",
            Forecast::Cooler => "Watch out for cooler, rainy weather",
        }
    }
}

#[derive(Debug, Default)]
pub struct ForecastDisplay {
    current_pressure: Option<f32>,
    forecast: Option<Forecast>,
    updates: usize,
}

impl ForecastDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn forecast(&self) -> Option<Forecast> {
        self.forecast
    }
}

impl Observer<Measurements> for ForecastDisplay {
    fn update(&mut self, subject: &dyn StateSource<Measurements>) -> Result<(), ObserverError> {
        let pressure = subject.state().pressure;
        let last = self.current_pressure.replace(pressure);
        // first reading has nothing to compare against
        let forecast = match last {
            Some(last) if pressure > last => Forecast::Improving,
            Some(last) if pressure < last => Forecast::Cooler,
            _ => Forecast::Same,
        };
        self.forecast = Some(forecast);
        self.updates += 1;
        Ok(())
    }
}

impl DisplayElement for ForecastDisplay {
    fn display(&self) -> Option<&str> {
        self.forecast.map(Forecast::text)
    }

    fn updates(&self) -> usize {
        self.updates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_displays_follow_the_station() {
        let mut station = Subject::new(Measurements::default());
        let current = station.attach(CurrentConditionsDisplay::new()).unwrap();
        let stats = station.attach(StatisticsDisplay::new()).unwrap();
        let forecast = station.attach(ForecastDisplay::new()).unwrap();

        station.set_measurements(30.0, 30.0, 30.0).unwrap();
        station.set_measurements(50.0, 50.0, 50.0).unwrap();
        station.set_measurements(70.0, 70.0, 70.0).unwrap();

        assert!(current.detach(&mut station));
        station.set_measurements(90.0, 90.0, 90.0).unwrap();

        assert_eq!(current.borrow().updates(), 3);
        assert_eq!(
            current.borrow().display(),
            Some("Current conditions: 70.0F degrees and 70.0% humidity")
        );

        let stats = stats.borrow();
        assert_eq!(stats.updates(), 4);
        assert_eq!(stats.min(), Some(30.0));
        assert_eq!(stats.max(), Some(90.0));
        assert_eq!(stats.average(), Some(60.0));
        assert_eq!(stats.display(), Some("Avg/Max/Min temperature = 60.0/90.0/30.0"));

        assert_eq!(forecast.borrow().forecast(), Some(Forecast::Improving));
    }

    #[test]
    fn forecast_tracks_pressure_trend() {
        let mut station = Subject::new(Measurements::default());
        let forecast = station.attach(ForecastDisplay::new()).unwrap();

        station.set_measurements(20.0, 50.0, 1013.0).unwrap();
        assert_eq!(forecast.borrow().forecast(), Some(Forecast::Same));

        station.set_measurements(20.0, 50.0, 1009.5).unwrap();
        assert_eq!(forecast.borrow().forecast(), Some(Forecast::Cooler));
        assert_eq!(
            forecast.borrow().display(),
            Some("Watch out for cooler, rainy weather")
        );
    }

    #[test]
    fn nan_reading_fails_fast_at_statistics() {
        let mut station = Subject::new(Measurements::default());
        let current = station.attach(CurrentConditionsDisplay::new()).unwrap();
        let stats = station.attach(StatisticsDisplay::new()).unwrap();
        let forecast = station.attach(ForecastDisplay::new()).unwrap();

        let err = station.set_measurements(f32::NAN, 40.0, 1000.0).unwrap_err();

        assert!(matches!(err, PatternError::ObserverFailed { observer, .. } if observer == stats.id()));
        assert_eq!(current.borrow().updates(), 1);
        assert_eq!(stats.borrow().updates(), 0);
        assert_eq!(forecast.borrow().updates(), 0);
    }

    #[test]
    fn display_is_empty_before_first_update() {
        let display = CurrentConditionsDisplay::new();
        assert_eq!(display.display(), None);
        assert_eq!(display.updates(), 0);
    }
}
