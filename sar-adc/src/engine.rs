//! Successive-approximation engine.

use tracing::{debug, trace};

use crate::*;

/// Phase of a conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Signal)]
pub enum ConversionState {
    /// Waiting for enable.
    #[default]
    Idle,
    /// External sample-and-hold is tracking the input.
    Sampling,
    /// Binary search, one bit per strobe.
    Searching,
    /// Result valid for one tick.
    Done,
}

/// How `valid` reports a finished conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidMode {
    /// One tick, while the engine is in [`ConversionState::Done`].
    #[default]
    Pulse,
    /// From `Done` until the next search starts, or until the conversion loop is stopped.
    Level,
}

/// Input of [`SarEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Signal)]
pub struct EngineInput {
    /// Go/stop. Dropping it aborts the conversion in progress.
    pub enable: bool,
    /// Pacing strobe; the engine advances at most one step per strobe.
    pub strobe: bool,
    /// Comparator: the current trial value is less than or equal to the analog input.
    pub comparator: Synchronized<bool>,
}

/// Output of [`SarEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Signal)]
pub struct EngineOutput<const N: usize> {
    /// Sample-and-hold control, asserted while sampling.
    pub sample_hold: bool,
    /// Trial value driven to the DAC or resistor ladder.
    pub dac: Bits<N>,
    /// Conversion result is valid, according to the [`ValidMode`].
    pub valid: bool,
    /// One-tick pulse per completed conversion, regardless of the [`ValidMode`].
    pub done: bool,
    /// Last completed conversion.
    pub result: Bits<N>,
}

/// Registers of [`SarEngine`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Signal)]
pub struct EngineState<const N: usize> {
    state: ConversionState,
    mask: Bits<N>,
    acc: Bits<N>,
    result: Bits<N>,
    held: bool,
}

impl<const N: usize> EngineState<N> {
    /// Returns the conversion phase.
    pub fn state(&self) -> ConversionState { self.state }

    /// Returns the trial mask: the bit currently under test, zero outside of a search.
    pub fn mask(&self) -> Bits<N> { self.mask }

    /// Returns the accumulator: bits decided so far.
    pub fn acc(&self) -> Bits<N> { self.acc }

    /// Returns the result register.
    pub fn result(&self) -> Bits<N> { self.result }

    /// Returns the value driven to the DAC: the decided bits with the bit under test set.
    pub fn trial(&self) -> Bits<N> { self.acc | self.mask }

    /// Returns a state with arbitrary register contents, e.g. to model power-up garbage.
    pub fn with_registers(state: ConversionState, mask: Bits<N>, acc: Bits<N>) -> Self {
        Self { state, mask, acc, ..Self::default() }
    }
}

/// Binary-search state machine for `N`-bit conversions.
///
/// Every step is taken on a strobe. The trial for bit `i` is driven from the strobe that starts
/// step `i`, and the comparator is read at the next strobe; the strobe period therefore bounds the
/// time the DAC, the comparator and the synchronizer have to settle.
#[derive(Debug, Clone, Default)]
pub struct SarEngine<const N: usize> {
    valid_mode: ValidMode,
}

impl<const N: usize> SarEngine<N> {
    /// Creates a new engine.
    pub fn new(valid_mode: ValidMode) -> Self { Self { valid_mode } }

    /// Returns the validity mode.
    pub fn valid_mode(&self) -> ValidMode { self.valid_mode }
}

impl<const N: usize> Module for SarEngine<N> {
    type Input = EngineInput;
    type Output = EngineOutput<N>;
    type State = EngineState<N>;

    fn get_module_name(&self) -> String { format!("sar_engine_{}", N) }

    fn init(&self) -> EngineState<N> { EngineState::default() }

    fn step(&self, input: EngineInput, s: &EngineState<N>) -> (EngineOutput<N>, EngineState<N>) {
        let done = s.state == ConversionState::Done;
        let output = EngineOutput {
            sample_hold: s.state == ConversionState::Sampling,
            dac: s.trial(),
            valid: done || (self.valid_mode == ValidMode::Level && s.held),
            done,
            result: s.result,
        };

        if !input.enable {
            if matches!(s.state, ConversionState::Sampling | ConversionState::Searching) {
                debug!(state = ?s.state, acc = ?s.acc, "conversion aborted");
            }
            let next = EngineState { result: s.result, ..EngineState::default() };
            return (output, next);
        }

        let next = match s.state {
            ConversionState::Idle if input.strobe => EngineState { state: ConversionState::Sampling, ..*s },
            ConversionState::Sampling if input.strobe => EngineState {
                state: ConversionState::Searching,
                mask: Bits::msb(),
                acc: Bits::ZERO,
                held: false,
                ..*s
            },
            ConversionState::Searching if input.strobe => {
                let acc = if input.comparator.get() { s.acc | s.mask } else { s.acc };
                let mask = s.mask >> 1;
                trace!(trial = ?s.trial(), acc = ?acc, "bit decided");
                if mask.is_zero() {
                    debug!(result = ?acc, "conversion done");
                    EngineState { state: ConversionState::Done, mask, acc, result: acc, held: true }
                } else {
                    EngineState { mask, acc, ..*s }
                }
            }
            ConversionState::Done => EngineState { state: ConversionState::Sampling, ..*s },
            _ => *s,
        };
        (output, next)
    }
}
