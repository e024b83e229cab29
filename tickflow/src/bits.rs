//! Fixed-width unsigned bit vectors.

use std::fmt;
use std::ops::*;

use crate::*;

/// Unsigned value of `N` bits (`1 <= N <= 64`).
///
/// The value is masked to `N` bits on every construction and operation, so it behaves like a
/// hardware register of that width: shifting left drops the MSB, and there is no carry out.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Bits<const N: usize>(u64);

impl<const N: usize> Bits<N> {
    const VALID_WIDTH: () = assert!(N >= 1 && N <= 64, "Bits width must be in 1..=64");

    /// Mask of the valid bits.
    pub const MASK: u64 = mask(N);

    /// All-zero value.
    pub const ZERO: Self = Self(0);

    /// All-one value.
    pub const MAX: Self = Self(mask(N));

    /// Creates a value, discarding bits above `N`.
    pub const fn new(value: u64) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_WIDTH;
        Self(value & Self::MASK)
    }

    /// Returns the value with only the most significant bit set.
    pub const fn msb() -> Self { Self::new(1 << (N - 1)) }

    /// Returns the value as an integer.
    pub const fn value(self) -> u64 { self.0 }

    /// Returns whether the `i`-th bit is set.
    pub const fn bit(self, i: usize) -> bool { i < N && (self.0 >> i) & 1 == 1 }

    /// Returns whether no bit is set.
    pub const fn is_zero(self) -> bool { self.0 == 0 }

    /// Zero-extends or truncates into `M` bits.
    pub const fn resize<const M: usize>(self) -> Bits<M> { Bits::new(self.0) }
}

impl<const N: usize> fmt::Debug for Bits<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}'b{:0width$b}", N, self.0, width = N) }
}

impl<const N: usize> fmt::Display for Bits<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

impl<const N: usize> From<Bits<N>> for u64 {
    fn from(bits: Bits<N>) -> Self { bits.0 }
}

impl<const N: usize> BitOr for Bits<N> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self { Self(self.0 | rhs.0) }
}

impl<const N: usize> BitAnd for Bits<N> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self { Self(self.0 & rhs.0) }
}

impl<const N: usize> Not for Bits<N> {
    type Output = Self;

    fn not(self) -> Self { Self::new(!self.0) }
}

impl<const N: usize> Shr<usize> for Bits<N> {
    type Output = Self;

    fn shr(self, rhs: usize) -> Self { if rhs >= N { Self::ZERO } else { Self(self.0 >> rhs) } }
}

impl<const N: usize> Shl<usize> for Bits<N> {
    type Output = Self;

    fn shl(self, rhs: usize) -> Self { if rhs >= N { Self::ZERO } else { Self::new(self.0 << rhs) } }
}

impl<const N: usize> Signal for Bits<N> {
    const WIDTH: usize = N;

    fn transl(self) -> Vec<bool> { u64_to_bitvec(N, self.0) }

    fn port_decls() -> PortDecls { PortDecls::Bits(N) }
}
