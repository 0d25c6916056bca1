//! Demo scenarios driving pattern-core.
//!
//! Each demo returns a [`Report`]; printing is left to `main`.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use pattern_core::decorator::{BeverageKind, CarModel, Condiment, TuningKit};
use pattern_core::factory::{
    CargoDelivery, ExerciseFactory, Factory, Gym, MenuFactory, TransportFactory,
};
use pattern_core::observer::{
    CurrentConditionsDisplay, DisplayElement, ForecastDisplay, Measurements, PriceList, ShopClient,
    StatisticsDisplay,
};
use pattern_core::strategy::{
    AlternatingCase, Ascending, BrakeWithAbs, BrakeWithoutAbs, Calculator, Car, CentralBank,
    ColoradoTower, Converter, Descending, Divide, Driving, Duck, Fighter, FlyRocketPowered,
    LowerCase, MoscowTower, Multiply, Printer, RotorFlight, ScorpionFatality, ScubaDiving,
    ShangTsungFatality, SilentTower, Sorter, StavropolTower, SubZeroFatality, Sum, Swimming,
    UpperCase, Vehicle, VehicleModel, WeatherFetcher, Yahoo,
};
use pattern_core::{Component, ComponentExt, Size, Subject};

use crate::config::DemoConfig;

const NO_BEHAVIOR: &str = "(no behavior)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoKind {
    Decorator,
    Strategy,
    Observer,
    Factory,
    All,
}

/// Output of one demo: a title and the lines it produced, in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub demo: &'static str,
    pub lines: Vec<String>,
}

impl Report {
    fn new(demo: &'static str) -> Self {
        Self {
            demo,
            lines: Vec::new(),
        }
    }

    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn push_display(&mut self, line: Option<&str>) {
        if let Some(line) = line {
            self.push(line);
        }
    }
}

pub fn run(kind: DemoKind, config: &DemoConfig) -> Result<Vec<Report>> {
    let reports = match kind {
        DemoKind::Decorator => vec![decorator(config)],
        DemoKind::Strategy => vec![strategy()?],
        DemoKind::Observer => vec![observer(config)?],
        DemoKind::Factory => vec![factory(config)],
        DemoKind::All => vec![
            decorator(config),
            strategy()?,
            observer(config)?,
            factory(config),
        ],
    };
    Ok(reports)
}

fn priced(component: &dyn Component) -> String {
    format!("{} {}", component.description(), component.cost())
}

pub fn decorator(config: &DemoConfig) -> Report {
    let mut report = Report::new("decorator");

    for order in &config.orders {
        report.push(priced(MenuFactory.assemble(order).as_ref()));
    }

    // Size changes after wrapping reach every layer through the base.
    let mut resized = MenuFactory
        .create(BeverageKind::HouseBlend)
        .with_variant(Size::Medium)
        .wrap(Condiment::Soy);
    resized.set_variant(Size::Small);
    let resized = resized
        .wrap(Condiment::Mocha)
        .wrap(Condiment::Whip)
        .wrap(Condiment::Cinnamon);
    report.push(priced(&resized));

    let car = CarModel::MercedesGl
        .base()
        .wrap(TuningKit::Amg)
        .wrap(TuningKit::Brabus);
    report.push(priced(&car));

    report
}

pub fn strategy() -> Result<Report> {
    let mut report = Report::new("strategy");
    let or_none = |line: Option<String>| line.unwrap_or_else(|| NO_BEHAVIOR.to_owned());

    let mut duck = Duck::mallard();
    report.push(or_none(duck.perform_quack()));
    report.push(or_none(duck.perform_fly()));
    duck.set_fly_behavior(FlyRocketPowered);
    report.push(or_none(duck.perform_fly()));
    report.push(duck.to_stand());
    let rubber = Duck::new("RubberDuck");
    report.push(or_none(rubber.perform_fly()));

    let mut car = Car::new(BrakeWithoutAbs);
    report.push(car.prepare_brake()?);
    car.set_brake_behavior(BrakeWithAbs);
    report.push(car.prepare_brake()?);

    let vehicles = [
        Vehicle::new(VehicleModel::Mercedes).with_drive(Driving),
        Vehicle::new(VehicleModel::Helicopter).with_fly(RotorFlight),
        Vehicle::new(VehicleModel::Yacht).with_swim(Swimming),
    ];
    for vehicle in &vehicles {
        let moves: Vec<String> = [vehicle.drive(), vehicle.fly(), vehicle.swim()]
            .into_iter()
            .flatten()
            .collect();
        report.push(format!("{}: {}", vehicle.model().name(), moves.join(", ")));
    }
    let mut yacht = Vehicle::new(VehicleModel::Yacht).with_swim(Swimming);
    yacht.set_swim_behavior(ScubaDiving);
    report.push(or_none(yacht.swim()));

    let mut fighters = [
        Fighter::new("Scorpion").with_fatality(ScorpionFatality),
        Fighter::new("Sub-Zero").with_fatality(SubZeroFatality),
        Fighter::new("Shang Tsung"),
    ];
    fighters[2].set_fatality(ShangTsungFatality);
    fighters[1].reduce_health(30);
    for fighter in &fighters {
        report.push(format!(
            "{} ({} hp): {}",
            fighter.displayed(),
            fighter.health(),
            or_none(fighter.prepare_fatality())
        ));
    }

    let mut calculator = Calculator::new(Sum);
    report.push(format!("11 + 11 = {}", calculator.compute(11.0, 11.0)?));
    calculator.set_strategy(Divide);
    report.push(format!("200 / 2 = {}", calculator.compute(200.0, 2.0)?));
    calculator.set_strategy(Multiply);
    report.push(format!("3 * 3 = {}", calculator.compute(3.0, 3.0)?));

    let text = "Hello World!!!";
    let mut printer = Printer::new(LowerCase);
    report.push(printer.render(text)?);
    printer.set_strategy(UpperCase);
    report.push(printer.render(text)?);
    printer.set_strategy(AlternatingCase);
    report.push(printer.render(text)?);

    let mut weather = WeatherFetcher::new();
    report.push(or_none(weather.fetch()));
    weather.set_source(MoscowTower);
    report.push(or_none(weather.fetch()));
    weather.set_source(StavropolTower);
    report.push(or_none(weather.fetch()));
    weather.set_source(ColoradoTower);
    report.push(or_none(weather.fetch()));
    weather.set_source(SilentTower);
    report.push(or_none(weather.fetch()));

    let mut converter = Converter::new(CentralBank);
    report.push(converter.rates()?);
    converter.set_strategy(Yahoo);
    report.push(converter.rates()?);

    let mut sorter = Sorter::new(Ascending);
    report.push(format!("{:?}", sorter.sort(vec![5, 1, 4, 2, 3])?));
    sorter.set_strategy(Descending);
    report.push(format!("{:?}", sorter.sort(vec![5, 1, 4, 2, 3])?));

    Ok(report)
}

pub fn observer(config: &DemoConfig) -> Result<Report> {
    let mut report = Report::new("observer");

    let mut station = Subject::new(Measurements::default());
    let current = station
        .attach(CurrentConditionsDisplay::new())
        .context("attach current conditions display")?;
    let stats = station
        .attach(StatisticsDisplay::new())
        .context("attach statistics display")?;
    let forecast = station
        .attach(ForecastDisplay::new())
        .context("attach forecast display")?;

    // The current conditions display is detached before the last reading.
    let last = config.measurements.len().saturating_sub(1);
    for (i, reading) in config.measurements.iter().enumerate() {
        if i == last && i > 0 && current.detach(&mut station) {
            report.push("current conditions display detached");
        }
        station
            .set_state(*reading)
            .context("weather station notification failed")?;
        if station.is_registered(current.id()) {
            report.push_display(current.borrow().display());
        }
        report.push_display(stats.borrow().display());
        report.push_display(forecast.borrow().display());
    }

    let mut shop = Subject::new(PriceList::new());
    let clients = config
        .shop_clients
        .iter()
        .map(|name| shop.attach(ShopClient::new(name.as_str())))
        .collect::<Result<Vec<_>, _>>()
        .context("attach shop clients")?;
    for prices in &config.price_lists {
        shop.publish_prices(prices.clone())
            .context("price mailing failed")?;
    }
    for client in &clients {
        report.lines.extend(client.borrow().notices().iter().cloned());
    }

    Ok(report)
}

pub fn factory(config: &DemoConfig) -> Report {
    let mut report = Report::new("factory");

    let mut gym = Gym::new(ExerciseFactory);
    for &kind in &config.workout {
        gym.add(kind);
    }
    report.lines.extend(gym.run());

    let mut delivery = CargoDelivery::new(TransportFactory);
    delivery.make_delivery_to(&config.route);
    report.lines.extend(delivery.deliver_cargo());

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn decorator_prices_default_orders() {
        let report = decorator(&DemoConfig::default());
        assert_eq!(
            report.lines,
            vec![
                "Espresso $2.10",
                "Dark Roast, Mocha, Mocha, Whip $1.49",
                "House Blend Coffee, Soy, Mocha, Whip $1.39",
                "House Blend Coffee, Soy, Mocha, Whip, Cinnamon $2.39",
                "MercedesGL, AMG, Brabus $150000.00",
            ]
        );
    }

    #[test]
    fn strategy_swaps_behaviors_at_runtime() {
        let report = strategy().unwrap();
        assert_eq!(report.lines[0], "Quack!");
        assert_eq!(report.lines[1], "flying with wings");
        assert_eq!(report.lines[2], "flying with a rocket");
        assert_eq!(report.lines[4], NO_BEHAVIOR);
        assert!(report.lines.contains(&"braking with ABS".to_owned()));
        assert!(report.lines.contains(&"11 + 11 = 22".to_owned()));
        assert!(report.lines.contains(&"HeLlO WoRlD!!!".to_owned()));
        assert!(report.lines.contains(&"[5, 4, 3, 2, 1]".to_owned()));
    }

    #[test]
    fn observer_stops_updating_detached_display() {
        let report = observer(&DemoConfig::default()).unwrap();
        let current: Vec<_> = report
            .lines
            .iter()
            .filter(|l| l.starts_with("Current conditions"))
            .collect();
        assert_eq!(current.len(), 3);
        assert!(report.lines.contains(&"current conditions display detached".to_owned()));
        assert!(report.lines.contains(&"Avg/Max/Min temperature = 60.0/90.0/30.0".to_owned()));
    }

    #[test]
    fn observer_mails_every_client_each_price() {
        let report = observer(&DemoConfig::default()).unwrap();
        let mailed = report.lines.iter().filter(|l| l.contains(" now costs ")).count();
        assert_eq!(mailed, 3 * 4);
        assert!(report.lines.contains(&"Maria: Feeding Chair now costs $10000.00".to_owned()));
    }

    #[test]
    fn factory_runs_workout_and_route() {
        let report = factory(&DemoConfig::default());
        assert_eq!(report.lines.len(), 3 * 2 + 5 * 2);
        assert_eq!(report.lines[0], "Started Jumping");
        assert_eq!(report.lines[6], "Bicycle delivers the cargo");
    }

    #[rstest]
    #[case(DemoKind::Decorator, 1)]
    #[case(DemoKind::Strategy, 1)]
    #[case(DemoKind::Observer, 1)]
    #[case(DemoKind::Factory, 1)]
    #[case(DemoKind::All, 4)]
    fn run_selects_demos(#[case] kind: DemoKind, #[case] expected: usize) {
        let reports = run(kind, &DemoConfig::default()).unwrap();
        assert_eq!(reports.len(), expected);
    }

    #[test]
    fn report_serializes_as_json() {
        let mut report = Report::new("factory");
        report.push("Started Squat");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["demo"], "factory");
        assert_eq!(json["lines"][0], "Started Squat");
    }
}
