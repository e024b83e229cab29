//! Decimating moving-average filter.

use tracing::debug;

use crate::*;

/// Input of [`AverageFilter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Signal)]
pub struct AverageInput<const N: usize> {
    /// A new sample is presented this tick.
    pub valid: bool,
    /// The sample.
    pub sample: Bits<N>,
}

/// Output of [`AverageFilter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Signal)]
pub struct AverageOutput {
    /// A window completed on the previous tick; `value` was just updated.
    pub valid: bool,
    /// Sum of the last complete window, `N + power` bits wide.
    pub value: u32,
}

/// Registers of [`AverageFilter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Signal)]
pub struct AverageState {
    sum: u32,
    count: u32,
    average: u32,
    valid: bool,
}

impl AverageState {
    /// Returns the running sum of the current window.
    pub fn sum(&self) -> u32 { self.sum }

    /// Returns the number of samples in the current window.
    pub fn count(&self) -> u32 { self.count }
}

/// Sums `2^power` consecutive `N`-bit samples.
///
/// The sum is not divided: its low `power` bits are the extra resolution gained by averaging.
/// The output holds the last complete window's sum until the next window completes.
#[derive(Debug, Clone)]
pub struct AverageFilter<const N: usize> {
    power: u32,
}

impl<const N: usize> AverageFilter<N> {
    /// Maximum width of the sum.
    pub const MAX_WIDTH: u32 = u32::BITS;

    /// Creates a new filter averaging over `2^power` samples.
    pub fn new(power: u32) -> Result<Self, ConfigError> {
        let width = N as u32;
        if width + power > Self::MAX_WIDTH {
            return Err(ConfigError::AveragePower { power, width, max: Self::MAX_WIDTH });
        }
        debug!(power, width, "averaging filter");
        Ok(Self { power })
    }

    /// Returns the window size exponent.
    pub fn power(&self) -> u32 { self.power }

    /// Returns the number of samples per window.
    pub fn window(&self) -> u32 { 1 << self.power }

    /// Returns the width of the output value in bits.
    pub fn output_width(&self) -> u32 { N as u32 + self.power }
}

impl<const N: usize> Module for AverageFilter<N> {
    type Input = AverageInput<N>;
    type Output = AverageOutput;
    type State = AverageState;

    fn get_module_name(&self) -> String { format!("average_filter_{}", self.power) }

    fn init(&self) -> AverageState { AverageState::default() }

    fn step(&self, input: AverageInput<N>, state: &AverageState) -> (AverageOutput, AverageState) {
        let output = AverageOutput { valid: state.valid, value: state.average };

        if !input.valid {
            return (output, AverageState { valid: false, ..*state });
        }

        let sum = state.sum + input.sample.value() as u32;
        let count = state.count + 1;
        let next = if count == self.window() {
            AverageState { sum: 0, count: 0, average: sum, valid: true }
        } else {
            AverageState { sum, count, average: state.average, valid: false }
        };
        (output, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample<const N: usize>(value: u64) -> AverageInput<N> { AverageInput { valid: true, sample: Bits::new(value) } }

    #[test]
    fn rejects_too_wide_windows() {
        assert!(AverageFilter::<8>::new(24).is_ok());
        assert_eq!(AverageFilter::<8>::new(25).unwrap_err(), ConfigError::AveragePower { power: 25, width: 8, max: 32 });
    }

    #[test]
    fn sixty_four_constant_samples_sum_without_loss() {
        let filter = AverageFilter::<8>::new(6).unwrap();
        assert_eq!(filter.window(), 64);
        assert_eq!(filter.output_width(), 14);
        let mut inst = Instance::new(filter);

        let c = 0xb4;
        for i in 0..64 {
            let out = inst.tick(sample::<8>(c));
            assert!(!out.valid);
            assert_eq!(out.value, 0);
            assert_eq!(inst.state().count(), (i + 1) % 64);
        }
        assert_eq!(inst.state().sum(), 0);

        let out = inst.tick(sample::<8>(c));
        assert!(out.valid);
        assert_eq!(out.value, 64 * c as u32);
        assert_eq!(inst.state().sum(), c as u32);
        assert_eq!(inst.state().count(), 1);
    }

    #[test]
    fn holds_stale_value_between_windows() {
        let mut inst = Instance::new(AverageFilter::<4>::new(2).unwrap());
        for v in [1, 2, 3, 4] {
            inst.tick(sample::<4>(v));
        }
        let idle = AverageInput::<4>::default();
        let out = inst.tick(idle);
        assert_eq!(out, AverageOutput { valid: true, value: 10 });
        for _ in 0..10 {
            assert_eq!(inst.tick(idle), AverageOutput { valid: false, value: 10 });
        }
        for v in [15, 15, 15] {
            assert_eq!(inst.tick(sample::<4>(v)).value, 10);
        }
        assert_eq!(inst.state().sum(), 45);
    }

    #[test]
    fn power_zero_passes_samples_through() {
        let mut inst = Instance::new(AverageFilter::<8>::new(0).unwrap());
        inst.tick(sample::<8>(77));
        assert_eq!(inst.tick(AverageInput::default()), AverageOutput { valid: true, value: 77 });
    }
}
