//! Finite state machine (Mealy machine) described by a closure.

use std::fmt;
use std::marker::PhantomData;

use crate::*;

/// Finite state machine (Mealy machine).
///
/// `f` generates (1) the current-tick output and (2) the next-tick state from the current-tick
/// input and the current state.
#[derive(Clone)]
pub struct Fsm<I: Signal, O: Signal, S: Signal, F: Fn(I, &S) -> (O, S)> {
    /// Module name.
    module_name: String,
    /// FSM function.
    f: F,
    /// Initial value of registers in the FSM.
    init: S,
    _marker: PhantomData<fn(I) -> O>,
}

impl<I: Signal, O: Signal, S: Signal, F: Fn(I, &S) -> (O, S)> Fsm<I, O, S, F> {
    /// Creates a new FSM.
    pub fn new(module_name: &str, init: S, f: F) -> Self {
        Self { module_name: module_name.to_string(), f, init, _marker: PhantomData }
    }
}

impl<I: Signal, O: Signal, S: Signal, F: Fn(I, &S) -> (O, S)> fmt::Debug for Fsm<I, O, S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fsm").field("module_name", &self.module_name).field("init", &self.init).finish()
    }
}

impl<I: Signal, O: Signal, S: Signal, F: Fn(I, &S) -> (O, S)> Module for Fsm<I, O, S, F> {
    type Input = I;
    type Output = O;
    type State = S;

    fn get_module_name(&self) -> String { self.module_name.clone() }

    fn init(&self) -> S { self.init.clone() }

    fn step(&self, input: I, state: &S) -> (O, S) { (self.f)(input, state) }
}
