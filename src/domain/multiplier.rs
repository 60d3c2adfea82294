use std::fmt;

use serde::Serialize;

/// Number of units bought together; scales the product cost. Never below 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CostMultiplier(u32);

impl Default for CostMultiplier {
    fn default() -> Self {
        Self(1)
    }
}

impl CostMultiplier {
    pub fn get(self) -> u32 {
        self.0
    }

    pub fn step(&mut self, delta: i32) {
        let next = i64::from(self.0) + i64::from(delta);
        self.0 = next.clamp(1, i64::from(u32::MAX)) as u32;
    }

    pub fn increment(&mut self) {
        self.step(1);
    }

    pub fn decrement(&mut self) {
        self.step(-1);
    }

    pub fn reset(&mut self) {
        self.0 = 1;
    }
}

impl fmt::Display for CostMultiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors_at_one() {
        let mut multiplier = CostMultiplier::default();
        multiplier.decrement();
        multiplier.decrement();
        assert_eq!(multiplier.get(), 1);
    }

    #[test]
    fn steps_and_resets() {
        let mut multiplier = CostMultiplier::default();
        multiplier.increment();
        multiplier.increment();
        assert_eq!(multiplier.to_string(), "3x");

        multiplier.step(-10);
        assert_eq!(multiplier.get(), 1);

        multiplier.step(4);
        multiplier.reset();
        assert_eq!(multiplier, CostMultiplier::default());
    }
}
