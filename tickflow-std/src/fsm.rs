//! Composition of modules.

use crate::*;

/// Composition combinators for modules.
pub trait FsmExt: Module + Sized {
    /// Feeds the output of `self` to `next` within the same tick.
    fn then<B: Module<Input = Self::Output>>(self, next: B) -> Then<Self, B> { Then { first: self, next } }

    /// Feeds the output of `self` to `next` within the same tick, and outputs both.
    fn tap<B: Module<Input = Self::Output>>(self, next: B) -> Tap<Self, B> { Tap { first: self, next } }
}

impl<M: Module> FsmExt for M {}

/// Sequential composition. See [`FsmExt::then`].
#[derive(Debug, Clone)]
pub struct Then<A, B> {
    first: A,
    next: B,
}

impl<A: Module, B: Module<Input = A::Output>> Module for Then<A, B> {
    type Input = A::Input;
    type Output = B::Output;
    type State = (A::State, B::State);

    fn get_module_name(&self) -> String {
        format!("{}_{}", self.first.get_module_name(), self.next.get_module_name())
    }

    fn init(&self) -> Self::State { (self.first.init(), self.next.init()) }

    fn step(&self, input: A::Input, state: &Self::State) -> (B::Output, Self::State) {
        let (mid, first_next) = self.first.step(input, &state.0);
        let (output, next_next) = self.next.step(mid, &state.1);
        (output, (first_next, next_next))
    }
}

/// Sequential composition exposing the intermediate value. See [`FsmExt::tap`].
#[derive(Debug, Clone)]
pub struct Tap<A, B> {
    first: A,
    next: B,
}

impl<A: Module, B: Module<Input = A::Output>> Module for Tap<A, B> {
    type Input = A::Input;
    type Output = (A::Output, B::Output);
    type State = (A::State, B::State);

    fn get_module_name(&self) -> String {
        format!("{}_{}", self.first.get_module_name(), self.next.get_module_name())
    }

    fn init(&self) -> Self::State { (self.first.init(), self.next.init()) }

    fn step(&self, input: A::Input, state: &Self::State) -> (Self::Output, Self::State) {
        let (mid, first_next) = self.first.step(input, &state.0);
        let (output, next_next) = self.next.step(mid.clone(), &state.1);
        ((mid, output), (first_next, next_next))
    }
}
