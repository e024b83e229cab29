//! Utilities.

use std::iter::IntoIterator;

/// Returns the mask with the lower `width` bits set.
pub const fn mask(width: usize) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1 << width) - 1
    }
}

/// Returns bit-represented value of an integer, LSB first.
pub fn u64_to_bitvec(n: usize, value: u64) -> Vec<bool> {
    assert!(
        n >= 64 || value >> n == 0,
        "Width of signal ({}) is too small to be converted from the value '{}'",
        n,
        value
    );
    (0..n).map(|i| if i >= 64 { false } else { (value & (1 << i)) != 0 }).collect::<Vec<_>>()
}

/// Returns the integer represented by the given bits, LSB first. Bits beyond the 64th are ignored.
pub fn bitvec_to_u64(bits: &[bool]) -> u64 {
    bits.iter().take(64).enumerate().fold(0, |acc, (i, bit)| if *bit { acc | (1 << i) } else { acc })
}

/// Combines all elements into one String, separated by `sep`. Returns `None` if all elements are `None`.
pub fn join_options<I>(sep: &str, iterable: I) -> Option<String>
where I: IntoIterator<Item = Option<String>> {
    let iterable = iterable.into_iter().flatten().collect::<Vec<_>>();
    if iterable.is_empty() {
        None
    } else {
        Some(iterable.join(sep))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitvec_is_lsb_first() {
        assert_eq!(u64_to_bitvec(4, 0b0110), vec![false, true, true, false]);
        assert_eq!(bitvec_to_u64(&[true, false, true]), 0b101);
        assert_eq!(mask(3), 0b111);
        assert_eq!(mask(64), u64::MAX);
    }

    #[test]
    #[should_panic]
    fn bitvec_rejects_overflow() { u64_to_bitvec(2, 0b100); }

    #[test]
    fn join_options_skips_none() {
        assert_eq!(join_options("_", [Some("in".to_string()), None, Some("valid".to_string())]), Some("in_valid".into()));
        assert_eq!(join_options("_", [None, None]), None);
    }
}
