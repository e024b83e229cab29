//! Strobe generator.

use tracing::debug;

use crate::*;

/// Registers of [`Strobe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Signal)]
pub struct StrobeState {
    count: u32,
    pulse: bool,
}

impl StrobeState {
    /// Returns the current value of the down-counter.
    pub fn count(&self) -> u32 { self.count }

    /// Returns whether the strobe is output this tick.
    pub fn pulse(&self) -> bool { self.pulse }
}

/// Emits a one-tick pulse every `period` ticks.
///
/// A down-counter starts at `period` and reloads to `period` once it reaches the bottom of its
/// range. The pulse is registered on the tick the counter reads 1, so it appears one tick later:
/// the first pulse is at tick `period` and the following ones every `period` ticks.
#[derive(Debug, Clone)]
pub struct Strobe {
    period: u32,
}

impl Strobe {
    /// Creates a new strobe generator. The period must be greater than 1.
    pub fn new(period: u32) -> Result<Self, ConfigError> {
        if period <= 1 {
            return Err(ConfigError::StrobePeriod { period });
        }
        debug!(period, "strobe generator");
        Ok(Self { period })
    }

    /// Returns the period.
    pub fn period(&self) -> u32 { self.period }
}

impl Module for Strobe {
    type Input = ();
    type Output = bool;
    type State = StrobeState;

    fn get_module_name(&self) -> String { format!("strobe_{}", self.period) }

    fn init(&self) -> StrobeState { StrobeState { count: self.period, pulse: false } }

    fn step(&self, _: (), state: &StrobeState) -> (bool, StrobeState) {
        let count = if state.count <= 1 { self.period } else { state.count - 1 };
        (state.pulse, StrobeState { count, pulse: state.count == 1 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_periods() {
        assert_eq!(Strobe::new(0).unwrap_err(), ConfigError::StrobePeriod { period: 0 });
        assert_eq!(Strobe::new(1).unwrap_err(), ConfigError::StrobePeriod { period: 1 });
        assert!(Strobe::new(2).is_ok());
    }

    #[test]
    fn one_pulse_every_period_starting_at_period() {
        for period in 2..=17 {
            let mut strobe = Instance::new(Strobe::new(period).unwrap());
            let pulses = (0..period * 6).filter(|_| strobe.tick(())).count();
            assert_eq!(pulses, 5, "period {}", period);

            let mut strobe = Instance::new(Strobe::new(period).unwrap());
            let ticks = (0..=period * 6).filter(|_| strobe.tick(())).collect::<Vec<_>>();
            let expected = (1..=6).map(|k| k * period).collect::<Vec<_>>();
            assert_eq!(ticks, expected, "period {}", period);
        }
    }

    #[test]
    fn reset_restarts_the_count() {
        let mut strobe = Instance::new(Strobe::new(4).unwrap());
        strobe.tick(());
        strobe.tick(());
        strobe.step(true, ());
        assert_eq!(strobe.state().count(), 4);
        let ticks = (0..9).filter(|_| strobe.tick(())).collect::<Vec<_>>();
        assert_eq!(ticks, vec![4, 8]);
    }
}
