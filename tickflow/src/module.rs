//! Module.

use std::fmt;

use crate::*;

/// Synchronous module (Mealy machine).
///
/// A module describes (1) the current-tick output for every tick and (2) the next-tick state, both
/// as functions of the committed state and the current-tick input. `step` must not have side
/// effects: the state is committed by the [`Instance`] driving the module, after every module of
/// the design has been evaluated for the tick.
pub trait Module: fmt::Debug {
    /// Input sampled every tick.
    type Input: Signal;

    /// Output produced every tick.
    type Output: Signal;

    /// Registers of the module.
    type State: Signal;

    /// Returns module name.
    fn get_module_name(&self) -> String;

    /// Value of registers after construction and after synchronous reset.
    fn init(&self) -> Self::State;

    /// Computes the current-tick output and the next-tick state.
    fn step(&self, input: Self::Input, state: &Self::State) -> (Self::Output, Self::State);
}

impl<M: Module + ?Sized> Module for &M {
    type Input = M::Input;
    type Output = M::Output;
    type State = M::State;

    fn get_module_name(&self) -> String { (**self).get_module_name() }

    fn init(&self) -> Self::State { (**self).init() }

    fn step(&self, input: Self::Input, state: &Self::State) -> (Self::Output, Self::State) {
        (**self).step(input, state)
    }
}
