//! Binary-to-decimal collaborator.
//!
//! The conversion subsystem hands its scaled value to a clocked binary-to-decimal converter and
//! shows whatever that converter currently outputs. Any module taking and returning 16 bits fits;
//! its internals are not part of the conversion loop.

use arrayvec::ArrayVec;

use crate::*;

/// Clocked binary-to-decimal converter: 16-bit binary in, 16-bit digit-encoded value out.
pub trait DecimalConverter: Module<Input = u16, Output = u16> {}

impl<M: Module<Input = u16, Output = u16>> DecimalConverter for M {}

/// Register holding the four low decimal digits of its input, one per nibble.
pub type DigitRegister = Fsm<u16, u16, u16, fn(u16, &u16) -> (u16, u16)>;

/// Creates a stand-in converter with one tick of latency. Values above 9999 show as 9999.
pub fn digit_register() -> DigitRegister {
    Fsm::new("digit_register", 0, |value: u16, current: &u16| (*current, to_digits(value)))
}

/// Packs the four low decimal digits of `value` (clamped to 9999), one per nibble.
pub fn to_digits(value: u16) -> u16 {
    let mut value = value.min(9999);
    let mut digits = ArrayVec::<u16, 4>::new();
    while !digits.is_full() {
        digits.push(value % 10);
        value /= 10;
    }
    digits.iter().rev().fold(0, |acc, digit| (acc << 4) | digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_digits_into_nibbles() {
        assert_eq!(to_digits(0), 0x0000);
        assert_eq!(to_digits(7), 0x0007);
        assert_eq!(to_digits(4999), 0x4999);
        assert_eq!(to_digits(1204), 0x1204);
        assert_eq!(to_digits(65535), 0x9999);
    }

    #[test]
    fn register_has_one_tick_latency() {
        let mut reg = Instance::new(digit_register());
        assert_eq!(reg.tick(123), 0);
        assert_eq!(reg.tick(456), 0x0123);
        assert_eq!(reg.tick(456), 0x0456);
    }
}
