//! Edge detector for synchronized signals.

use crate::*;

/// Direction of the transition to detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// `false` to `true`.
    Rising,
    /// `true` to `false`.
    Falling,
}

/// Registers of [`EdgeDetector`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Signal)]
pub struct EdgeState {
    sample: bool,
    prev: bool,
}

/// Emits a one-tick pulse on each transition of the configured polarity.
///
/// The input is registered once before comparison, so a raw change takes three ticks to show up
/// behind a [`Synchronizer`].
#[derive(Debug, Clone)]
pub struct EdgeDetector {
    polarity: Polarity,
}

impl EdgeDetector {
    /// Creates a new edge detector.
    pub fn new(polarity: Polarity) -> Self { Self { polarity } }

    /// Returns the configured polarity.
    pub fn polarity(&self) -> Polarity { self.polarity }
}

impl Module for EdgeDetector {
    type Input = Synchronized<bool>;
    type Output = bool;
    type State = EdgeState;

    fn get_module_name(&self) -> String {
        match self.polarity {
            Polarity::Rising => "edge_detector_rising".to_string(),
            Polarity::Falling => "edge_detector_falling".to_string(),
        }
    }

    fn init(&self) -> EdgeState { EdgeState::default() }

    fn step(&self, input: Synchronized<bool>, state: &EdgeState) -> (bool, EdgeState) {
        let pulse = match self.polarity {
            Polarity::Rising => state.sample && !state.prev,
            Polarity::Falling => !state.sample && state.prev,
        };
        (pulse, EdgeState { sample: input.get(), prev: state.sample })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(polarity: Polarity, raw: &[bool]) -> Vec<bool> {
        let mut detector = Instance::new(Synchronizer::<bool>::new().then(EdgeDetector::new(polarity)));
        raw.iter().map(|v| detector.tick(*v)).collect()
    }

    #[test]
    fn rising_edge_needs_three_ticks() {
        let raw = [true, true, true, true, true, true];
        let pulses = run(Polarity::Rising, &raw);
        assert_eq!(pulses, vec![false, false, false, true, false, false]);
    }

    #[test]
    fn falling_edge_is_single_tick() {
        let raw = [true, true, false, false, false, false, false, false];
        let pulses = run(Polarity::Falling, &raw);
        assert_eq!(pulses.iter().filter(|p| **p).count(), 1);
        assert!(pulses[5]);
    }

    #[test]
    fn opposite_polarities_never_fire_together() {
        let raw = [false, true, false, true, true, false, false, true, false, true, true, true, false];
        let rising = run(Polarity::Rising, &raw);
        let falling = run(Polarity::Falling, &raw);
        assert!(rising.iter().zip(&falling).all(|(r, f)| !(*r && *f)));
        assert_eq!(rising.iter().filter(|p| **p).count(), 4);
        assert!(falling.iter().filter(|p| **p).count() >= 3);
    }
}
