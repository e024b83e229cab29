//! Default configuration.

use static_assertions::*;

/// Resolution of one conversion in bits.
pub const ADC_BITS: usize = 8;

/// Ticks per engine step. Must leave time for the comparator to settle and pass the synchronizer.
pub const STROBE_PERIOD: u32 = 4;
const_assert!(STROBE_PERIOD > 1);

/// Averaging window exponent: results are averaged over `2^AVERAGE_POWER` conversions.
pub const AVERAGE_POWER: u32 = 6;

/// Width of the numeric output.
pub const NUMERIC_WIDTH: u32 = 16;
const_assert!(ADC_BITS as u32 + AVERAGE_POWER <= NUMERIC_WIDTH);

/// Value of the scaled output at full scale. Four decimal digits.
pub const FULL_SCALE: u32 = 9999;
const_assert!(FULL_SCALE <= u16::MAX as u32);
