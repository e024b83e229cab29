//! Test bench closing the loop through a modeled comparator.

use std::fmt;

use crate::*;

/// Analog side of the loop: compares the DAC output against the held input.
pub trait Comparator {
    /// Returns whether `trial` is less than or equal to the analog input.
    fn compare(&self, trial: u64) -> bool;
}

impl<F: Fn(u64) -> bool> Comparator for F {
    fn compare(&self, trial: u64) -> bool { self(trial) }
}

/// Comparator of an ideal converter whose input sits exactly at `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdealComparator {
    /// Code the conversion should produce.
    pub target: u64,
}

impl Comparator for IdealComparator {
    fn compare(&self, trial: u64) -> bool { trial <= self.target }
}

/// A conversion subsystem instance wired to a comparator.
///
/// Each tick the comparator sees the DAC value driven by the committed state, so the analog path
/// settles within the tick and the only latency is the subsystem's own synchronizer.
pub struct Bench<const N: usize, D: DecimalConverter, C: Comparator> {
    adc: Instance<ConversionSubsystem<N, D>>,
    comparator: C,
}

impl<const N: usize, D: DecimalConverter, C: Comparator> fmt::Debug for Bench<N, D, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.debug_struct("Bench").field("adc", &self.adc).finish() }
}

impl<const N: usize, D: DecimalConverter, C: Comparator> Bench<N, D, C> {
    /// Creates a bench.
    pub fn new(adc: ConversionSubsystem<N, D>, comparator: C) -> Self { Self { adc: Instance::new(adc), comparator } }

    /// Creates a bench recording every tick into a trace named `name`.
    pub fn traced(adc: ConversionSubsystem<N, D>, comparator: C, name: &str) -> Self {
        Self { adc: Instance::traced(adc, name), comparator }
    }

    /// Returns the subsystem instance.
    pub fn instance(&self) -> &Instance<ConversionSubsystem<N, D>> { &self.adc }

    /// Returns the committed state of the subsystem.
    pub fn state(&self) -> &AdcState<N, D::State> { self.adc.state() }

    /// Replaces the comparator, e.g. to move the analog input.
    pub fn set_comparator(&mut self, comparator: C) { self.comparator = comparator; }

    /// Evaluates one tick.
    pub fn step(&mut self, reset: bool, enable: bool, format: FormatSelect) -> AdcOutput<N> {
        let trial = self.adc.module().dac(self.adc.state());
        let comparator = self.comparator.compare(trial.value());
        self.adc.step(reset, AdcInput { enable, comparator, format })
    }

    /// Evaluates one tick without reset.
    pub fn tick(&mut self, enable: bool, format: FormatSelect) -> AdcOutput<N> { self.step(false, enable, format) }

    /// Evaluates one tick with reset asserted and enable low.
    pub fn reset(&mut self) -> AdcOutput<N> { self.step(true, false, FormatSelect::default()) }

    /// Runs with enable high until the next conversion completes and returns its result.
    ///
    /// Returns `None` if no conversion completes within `N + 3` strobe periods.
    pub fn convert(&mut self, format: FormatSelect) -> Option<Bits<N>> {
        let limit = (N as u64 + 3) * u64::from(self.adc.module().strobe_period());
        for _ in 0..limit {
            let done = self.state().engine().state() == ConversionState::Done;
            self.tick(true, format);
            if done {
                return Some(self.state().engine().result());
            }
        }
        None
    }

    /// Takes the recorded trace.
    pub fn take_trace(&mut self) -> Option<Trace> { self.adc.take_trace() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bench(target: u64) -> Bench<8, DigitRegister, IdealComparator> {
        Bench::new(AdcConfig::default().build(digit_register()).unwrap(), IdealComparator { target })
    }

    #[test]
    fn ideal_comparator_threshold() {
        let comparator = IdealComparator { target: 10 };
        assert!(comparator.compare(9));
        assert!(comparator.compare(10));
        assert!(!comparator.compare(11));
    }

    #[test]
    fn converts_every_target() {
        for target in 0..256 {
            let mut bench = bench(target);
            assert_eq!(bench.convert(FormatSelect::Raw), Some(Bits::new(target)));
        }
    }

    #[test]
    fn follows_a_moving_input() {
        let mut bench = bench(17);
        assert_eq!(bench.convert(FormatSelect::Raw), Some(Bits::new(17)));
        bench.set_comparator(IdealComparator { target: 201 });
        assert_eq!(bench.convert(FormatSelect::Raw), Some(Bits::new(201)));
    }

    #[test]
    fn closure_comparator() {
        let adc = AdcConfig::default().build::<4, _>(digit_register()).unwrap();
        let mut bench = Bench::new(adc, |trial: u64| trial < 6);
        assert_eq!(bench.convert(FormatSelect::Raw), Some(Bits::new(5)));
    }

    #[test]
    fn stays_idle_while_disabled() {
        let mut bench = bench(3);
        for _ in 0..100 {
            assert!(!bench.tick(false, FormatSelect::Raw).result_valid);
        }
        assert_eq!(bench.state().engine().state(), ConversionState::Idle);
    }
}
