//! Conversion subsystem: the composition root of the conversion loop.

use crate::*;

/// Input of [`ConversionSubsystem`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Signal)]
pub struct AdcInput {
    /// Go/stop for the conversion loop.
    pub enable: bool,
    /// Raw comparator output. Asynchronous to the tick.
    pub comparator: bool,
    /// Encoding of `numeric`.
    pub format: FormatSelect,
}

/// Output of [`ConversionSubsystem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Signal)]
pub struct AdcOutput<const N: usize> {
    /// Drives the external sample-and-hold.
    pub sample_hold: bool,
    /// Drives the external DAC or resistor ladder.
    pub dac: Bits<N>,
    /// A conversion completed.
    pub result_valid: bool,
    /// Value in the selected encoding.
    pub numeric: u16,
    /// Rising edge of the synchronized comparator.
    pub comparator_edge: bool,
}

/// Registers of [`ConversionSubsystem`]; `S` is the state of the decimal converter.
#[derive(Debug, Clone, PartialEq, Eq, Signal)]
pub struct AdcState<const N: usize, S: Signal> {
    sync: (bool, bool),
    edge: EdgeState,
    strobe: StrobeState,
    engine: EngineState<N>,
    capture: Bits<N>,
    fresh: bool,
    average: AverageState,
    decimal: S,
}

impl<const N: usize, S: Signal> AdcState<N, S> {
    /// Returns the strobe generator's registers.
    pub fn strobe(&self) -> &StrobeState { &self.strobe }

    /// Returns the engine's registers.
    pub fn engine(&self) -> &EngineState<N> { &self.engine }

    /// Returns the capture register.
    pub fn captured(&self) -> Bits<N> { self.capture }

    /// Returns the averaging filter's registers.
    pub fn average(&self) -> &AverageState { &self.average }
}

/// Comparator synchronizer, edge detector, strobe generator, SAR engine, capture register,
/// averaging filter and output formatting, stepped together.
///
/// Every part is evaluated against the registers committed by the previous tick, and the whole
/// next state is committed at once by the driving [`Instance`].
#[derive(Debug, Clone)]
pub struct ConversionSubsystem<const N: usize, D: DecimalConverter> {
    synchronizer: Synchronizer<bool>,
    edge: EdgeDetector,
    strobe: Strobe,
    engine: SarEngine<N>,
    capture: CaptureRegister<Bits<N>>,
    fresh: DelayRegister<bool>,
    average: AverageFilter<N>,
    full_scale: u32,
    decimal: D,
}

impl<const N: usize, D: DecimalConverter> ConversionSubsystem<N, D> {
    /// Assembles the subsystem from validated parts. See [`AdcConfig::build`].
    pub(crate) fn new(strobe: Strobe, engine: SarEngine<N>, average: AverageFilter<N>, full_scale: u32, decimal: D) -> Self {
        Self {
            synchronizer: Synchronizer::new(),
            edge: EdgeDetector::new(Polarity::Rising),
            strobe,
            engine,
            capture: capture_register(),
            fresh: delay_register(),
            average,
            full_scale,
            decimal,
        }
    }

    /// Returns the strobe period.
    pub fn strobe_period(&self) -> u32 { self.strobe.period() }

    /// Returns the averaging filter.
    pub fn average_filter(&self) -> &AverageFilter<N> { &self.average }

    /// Returns the value driven to the DAC in the given state.
    pub fn dac(&self, state: &AdcState<N, D::State>) -> Bits<N> { state.engine.trial() }
}

impl<const N: usize, D: DecimalConverter> Module for ConversionSubsystem<N, D> {
    type Input = AdcInput;
    type Output = AdcOutput<N>;
    type State = AdcState<N, D::State>;

    fn get_module_name(&self) -> String { format!("sar_adc_{}", N) }

    fn init(&self) -> Self::State {
        AdcState {
            sync: self.synchronizer.init(),
            edge: self.edge.init(),
            strobe: self.strobe.init(),
            engine: self.engine.init(),
            capture: self.capture.init(),
            fresh: self.fresh.init(),
            average: self.average.init(),
            decimal: self.decimal.init(),
        }
    }

    fn step(&self, input: AdcInput, s: &Self::State) -> (AdcOutput<N>, Self::State) {
        let (level, sync) = self.synchronizer.step(input.comparator, &s.sync);
        let (comparator_edge, edge) = self.edge.step(level, &s.edge);
        let (strobe_pulse, strobe) = self.strobe.step((), &s.strobe);
        let (engine_out, engine) =
            self.engine.step(EngineInput { enable: input.enable, strobe: strobe_pulse, comparator: level }, &s.engine);

        // The captured value is fresh on the tick after the engine reports completion.
        let (captured, capture) = self.capture.step((engine_out.done, engine_out.result), &s.capture);
        let (fresh_out, fresh) = self.fresh.step(engine_out.done, &s.fresh);
        let (averaged, average) = self.average.step(AverageInput { valid: fresh_out, sample: captured }, &s.average);

        let scaled = scale(averaged.value, self.average.output_width(), self.full_scale);
        let (decimal_out, decimal) = self.decimal.step(scaled, &s.decimal);

        let formats = Formats {
            raw: captured.value() as u16,
            averaged: averaged.value as u16,
            scaled,
            decimal: decimal_out,
        };

        let output = AdcOutput {
            sample_hold: engine_out.sample_hold,
            dac: engine_out.dac,
            result_valid: engine_out.valid,
            numeric: formats.select(input.format),
            comparator_edge,
        };
        let next = AdcState { sync, edge, strobe, engine, capture, fresh, average, decimal };
        (output, next)
    }
}
