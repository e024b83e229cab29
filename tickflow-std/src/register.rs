//! Registers.

use crate::*;

/// Enable-gated register: `next = enable ? input : current`.
pub type CaptureRegister<T> = Fsm<(bool, T), T, T, fn((bool, T), &T) -> (T, T)>;

/// Register delaying its input by one tick.
pub type DelayRegister<T> = Fsm<T, T, T, fn(T, &T) -> (T, T)>;

/// Creates a capture register.
///
/// The output is the stored value. It latches the input only on ticks where the enable is
/// asserted and otherwise holds; reset forces the default (zero) value.
pub fn capture_register<T: Signal + Default>() -> CaptureRegister<T> {
    Fsm::new("capture_register", T::default(), |(enable, value): (bool, T), current: &T| {
        (current.clone(), if enable { value } else { current.clone() })
    })
}

/// Creates a register delaying its input by one tick.
pub fn delay_register<T: Signal + Default>() -> DelayRegister<T> {
    Fsm::new("delay_register", T::default(), |value: T, current: &T| (current.clone(), value))
}
