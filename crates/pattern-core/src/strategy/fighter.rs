//! Game characters whose finishing move is a strategy.

use super::Slot;

pub const FULL_HEALTH: i32 = 100;

pub trait Fatality {
    fn finish(&self) -> String;
}

pub struct ScorpionFatality;

impl Fatality for ScorpionFatality {
    fn finish(&self) -> String {
        "Scorpion fatality: spear and fire".to_string()
    }
}

pub struct SubZeroFatality;

impl Fatality for SubZeroFatality {
    fn finish(&self) -> String {
        "Sub-Zero fatality: deep freeze".to_string()
    }
}

pub struct ShangTsungFatality;

impl Fatality for ShangTsungFatality {
    fn finish(&self) -> String {
        "Shang Tsung fatality: soul steal".to_string()
    }
}

pub struct Fighter {
    name: String,
    health: i32,
    fatality: Slot<dyn Fatality>,
}

impl Fighter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: FULL_HEALTH,
            fatality: Slot::unset("fatality"),
        }
    }

    pub fn with_fatality(mut self, fatality: impl Fatality + 'static) -> Self {
        self.set_fatality(fatality);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn set_fatality(&mut self, fatality: impl Fatality + 'static) {
        self.fatality.set_behavior(Box::new(fatality));
    }

    pub fn prepare_fatality(&self) -> Option<String> {
        self.fatality.perform(|f| f.finish())
    }

    /// Health may go negative; nothing clamps it.
    pub fn reduce_health(&mut self, value: i32) {
        self.health -= value;
    }

    pub fn displayed(&self) -> String {
        format!("Displayed {}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fighter_learns_fatality_after_creation() {
        let mut sub_zero = Fighter::new("Sub-Zero");
        assert_eq!(sub_zero.prepare_fatality(), None);

        sub_zero.set_fatality(SubZeroFatality);
        assert_eq!(
            sub_zero.prepare_fatality().as_deref(),
            Some("Sub-Zero fatality: deep freeze")
        );
    }

    #[test]
    fn shang_tsung_borrows_a_fatality() {
        let mut shang = Fighter::new("Shang Tsung").with_fatality(ShangTsungFatality);
        assert_eq!(
            shang.prepare_fatality().as_deref(),
            Some("Shang Tsung fatality: soul steal")
        );

        shang.set_fatality(SubZeroFatality);
        assert_eq!(
            shang.prepare_fatality().as_deref(),
            Some("Sub-Zero fatality: deep freeze")
        );
        assert_eq!(shang.displayed(), "Displayed Shang Tsung");
    }

    #[test]
    fn health_goes_down() {
        let mut scorpion = Fighter::new("Scorpion").with_fatality(ScorpionFatality);
        scorpion.reduce_health(30);
        scorpion.reduce_health(80);
        assert_eq!(scorpion.health(), -10);
    }
}
