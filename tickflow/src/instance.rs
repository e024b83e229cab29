//! Instance of a module driven by the tick.

use tracing::{debug, trace};

use crate::*;

/// Instance of a module: the module together with its committed registers.
///
/// Each call of [`Instance::step`] is one tick. The module is evaluated against the state committed
/// by the previous tick, and only then is the new state committed. Modules composed inside one
/// top-level module therefore all observe the same previous-tick state, regardless of the order
/// in which the composition evaluates them.
#[derive(Debug)]
pub struct Instance<M: Module> {
    module: M,
    state: M::State,
    ticks: u64,
    trace: Option<Trace>,
}

impl<M: Module> Instance<M> {
    /// Creates a new instance with registers at their initial value.
    pub fn new(module: M) -> Self {
        let state = module.init();
        debug!(module = %module.get_module_name(), "instantiated");
        Self { module, state, ticks: 0, trace: None }
    }

    /// Creates a new instance starting from the given register values instead of `init()`.
    ///
    /// Models power-up contents of registers that are not reset yet.
    pub fn with_state(module: M, state: M::State) -> Self { Self { module, state, ticks: 0, trace: None } }

    /// Creates a new instance recording every tick into a trace named `name`.
    pub fn traced(module: M, name: &str) -> Self {
        let mut this = Self::new(module);
        this.trace = Some(Trace::new::<M>(name));
        this
    }

    /// Returns the module.
    pub fn module(&self) -> &M { &self.module }

    /// Returns the committed state.
    pub fn state(&self) -> &M::State { &self.state }

    /// Returns the number of ticks evaluated so far.
    pub fn ticks(&self) -> u64 { self.ticks }

    /// Evaluates one tick without reset.
    pub fn tick(&mut self, input: M::Input) -> M::Output { self.step(false, input) }

    /// Evaluates one tick.
    ///
    /// The output is computed from the committed state as usual. If `reset` is asserted, the
    /// registers are then forced to their initial value instead of the computed next state.
    pub fn step(&mut self, reset: bool, input: M::Input) -> M::Output {
        let recorded = self.trace.as_ref().map(|_| input.clone());
        let (output, next) = self.module.step(input, &self.state);

        if let (Some(trace), Some(input)) = (self.trace.as_mut(), recorded) {
            trace.record(self.ticks, input, output.clone(), self.state.clone());
        }

        self.state = if reset {
            trace!(module = %self.module.get_module_name(), tick = self.ticks, "synchronous reset");
            self.module.init()
        } else {
            next
        };
        self.ticks += 1;
        output
    }

    /// Takes the recorded trace, leaving the instance untraced.
    pub fn take_trace(&mut self) -> Option<Trace> { self.trace.take() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delay() -> Fsm<bool, bool, bool, fn(bool, &bool) -> (bool, bool)> {
        Fsm::new("delay", false, |input: bool, state: &bool| (*state, input))
    }

    #[test]
    fn commits_after_output() {
        let mut inst = Instance::new(delay());
        assert!(!inst.tick(true));
        assert!(*inst.state());
        assert!(inst.tick(false));
        assert!(!inst.tick(false));
        assert_eq!(inst.ticks(), 3);
    }

    #[test]
    fn reset_forces_init() {
        let mut inst = Instance::new(delay());
        inst.tick(true);
        assert!(inst.step(true, true));
        assert!(!*inst.state());
        assert!(!inst.tick(false));
    }

    #[test]
    fn starts_from_given_state() {
        let mut inst = Instance::with_state(delay(), true);
        assert!(inst.tick(false));
        inst.step(true, false);
        assert!(!*inst.state());
    }

    #[test]
    fn traced_instance_records_every_tick() {
        let mut inst = Instance::traced(delay(), "delay");
        for i in 0..5 {
            inst.tick(i % 2 == 0);
        }
        let trace = inst.take_trace().unwrap();
        assert_eq!(trace.len(), 5);
        assert!(inst.take_trace().is_none());
    }
}
