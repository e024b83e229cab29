//! Output format selection.

use crate::*;

/// Encoding of the numeric output, selected by the 2-bit `format_select` input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Signal)]
pub enum FormatSelect {
    /// Last conversion result, `N` bits.
    #[default]
    Raw,
    /// Sum of the last averaging window, `N + power` bits.
    Averaged,
    /// Averaged value scaled to `0..=full_scale`.
    ScaledBinary,
    /// Scaled value as decimal digits, one per nibble.
    ScaledDecimal,
}

impl FormatSelect {
    /// Decodes the 2-bit selector.
    pub fn from_bits(bits: Bits<2>) -> Self {
        match bits.value() {
            0 => Self::Raw,
            1 => Self::Averaged,
            2 => Self::ScaledBinary,
            _ => Self::ScaledDecimal,
        }
    }
}

/// Candidate values of the numeric output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Formats {
    /// Last conversion result.
    pub raw: u16,
    /// Sum of the last averaging window.
    pub averaged: u16,
    /// Averaged value scaled to full scale.
    pub scaled: u16,
    /// Decimal digits of the scaled value.
    pub decimal: u16,
}

impl Formats {
    /// Selects the value for the given format.
    pub fn select(&self, format: FormatSelect) -> u16 {
        match format {
            FormatSelect::Raw => self.raw,
            FormatSelect::Averaged => self.averaged,
            FormatSelect::ScaledBinary => self.scaled,
            FormatSelect::ScaledDecimal => self.decimal,
        }
    }
}

/// Maps a sum of `2^power` `N`-bit samples to `0..=full_scale`.
///
/// `width` is `N + power`. Truncates toward zero and saturates at `u16::MAX`.
pub fn scale(averaged: u32, width: u32, full_scale: u32) -> u16 {
    let scaled = (u64::from(averaged) * u64::from(full_scale)) >> width;
    u16::try_from(scaled).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_encoding() {
        for (bits, format) in [
            (0, FormatSelect::Raw),
            (1, FormatSelect::Averaged),
            (2, FormatSelect::ScaledBinary),
            (3, FormatSelect::ScaledDecimal),
        ] {
            assert_eq!(FormatSelect::from_bits(Bits::new(bits)), format);
            assert_eq!(bitvec_to_u64(&format.transl()), bits);
        }
        assert_eq!(FormatSelect::WIDTH, 2);
    }

    #[test]
    fn selects_each_candidate() {
        let formats = Formats { raw: 1, averaged: 2, scaled: 3, decimal: 4 };
        assert_eq!(formats.select(FormatSelect::Raw), 1);
        assert_eq!(formats.select(FormatSelect::Averaged), 2);
        assert_eq!(formats.select(FormatSelect::ScaledBinary), 3);
        assert_eq!(formats.select(FormatSelect::ScaledDecimal), 4);
    }

    #[test]
    fn scale_maps_to_full_scale() {
        assert_eq!(scale(0, 14, 9999), 0);
        assert_eq!(scale(1 << 13, 14, 9999), 4999);
        assert_eq!(scale((1 << 14) - 64, 14, 9999), 9959);
        assert_eq!(scale(u32::MAX, 8, u32::MAX), u16::MAX);
    }
}
