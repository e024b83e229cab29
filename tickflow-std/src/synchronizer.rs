//! Two-stage synchronizer for signals crossing into the tick domain.

use crate::*;

/// Value re-timed into the tick domain.
///
/// Only [`Synchronizer`] constructs this type, so a consumer taking `Synchronized<T>` cannot be
/// wired to a raw asynchronous input by mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Synchronized<T>(T);

impl<T> Synchronized<T> {
    /// Returns the synchronized value.
    pub fn get(self) -> T { self.0 }
}

impl<T: Signal> Signal for Synchronized<T> {
    const WIDTH: usize = T::WIDTH;

    fn transl(self) -> Vec<bool> { self.0.transl() }

    fn port_decls() -> PortDecls { T::port_decls() }
}

/// Two back-to-back sampling stages.
///
/// The output at tick `t` is the input sampled at tick `t - 2`. The first stage may go metastable
/// in hardware; the second stage gives it a full tick to resolve before anyone observes it.
#[derive(Debug, Clone, Default)]
pub struct Synchronizer<T: Signal + Default> {
    _marker: std::marker::PhantomData<T>,
}

impl<T: Signal + Default> Synchronizer<T> {
    /// Number of sampling stages, i.e. the latency in ticks.
    pub const STAGES: u32 = 2;

    /// Creates a new synchronizer.
    pub fn new() -> Self { Self { _marker: std::marker::PhantomData } }
}

impl<T: Signal + Default> Module for Synchronizer<T> {
    type Input = T;
    type Output = Synchronized<T>;
    /// (first stage, second stage)
    type State = (T, T);

    fn get_module_name(&self) -> String { "synchronizer".to_string() }

    fn init(&self) -> (T, T) { (T::default(), T::default()) }

    fn step(&self, input: T, state: &(T, T)) -> (Synchronized<T>, (T, T)) {
        let (first, second) = state.clone();
        (Synchronized(second), (input, first))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_by_two_ticks() {
        let mut sync = Instance::new(Synchronizer::<bool>::new());
        let raw = [true, false, false, true, true, false];
        let out = raw.iter().map(|v| sync.tick(*v).get()).collect::<Vec<_>>();
        assert_eq!(out, vec![false, false, true, false, false, true]);
    }

    #[test]
    fn carries_multi_bit_values() {
        let mut sync = Instance::new(Synchronizer::<Bits<4>>::new());
        assert_eq!(sync.tick(Bits::new(0xa)).get(), Bits::ZERO);
        assert_eq!(sync.tick(Bits::new(0x5)).get(), Bits::ZERO);
        assert_eq!(sync.tick(Bits::new(0x3)).get(), Bits::new(0xa));
        assert_eq!(sync.tick(Bits::new(0x3)).get(), Bits::new(0x5));
        assert_eq!(Synchronized::<Bits<4>>::WIDTH, 4);
    }

    #[test]
    fn reset_clears_both_stages() {
        let mut sync = Instance::new(Synchronizer::<bool>::new());
        sync.tick(true);
        sync.step(true, true);
        assert!(!sync.tick(false).get());
        assert!(!sync.tick(false).get());
    }
}
