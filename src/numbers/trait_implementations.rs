use core::{cmp::Ordering, fmt};

use super::{Bits, Digit, DoubleDigit, Unsigned};

impl Bits for Digit {
    const BITS: usize = 32;
}

impl Bits for DoubleDigit {
    const BITS: usize = 64;
}

impl<const L: usize> Default for Unsigned<L> {
    fn default() -> Self {
        Self([0; L])
    }
}

/// Fails for L = 0, bound not expressable.
impl<const L: usize> From<Digit> for Unsigned<L> {
    fn from(digit: Digit) -> Self {
        let mut x = Self::default();
        x.0[L - 1] = digit;
        x
    }
}

impl<const L: usize> From<[Digit; L]> for Unsigned<L> {
    fn from(digits: [Digit; L]) -> Self {
        Self(digits)
    }
}

// Magnitude order, as defined by the subtraction-based `compare`.
impl<const L: usize> Ord for Unsigned<L> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl<const L: usize> PartialOrd for Unsigned<L> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const L: usize> fmt::Debug for Unsigned<L> {
    /// Canonical hex with feature `hex-debug`, else the raw big-endian digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[cfg(feature = "hex-debug")] {
            write!(f, "Unsigned<{}>(0x{:x})", L, self)
        }

        #[cfg(not(feature = "hex-debug"))] {
            f.debug_tuple("Unsigned").field(&self.0).finish()
        }
    }
}

#[cfg(feature = "ct-maybe")]
mod constant_time {
    use subtle::{Choice, ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess};

    use crate::Unsigned;

    impl<const L: usize> ConstantTimeEq for Unsigned<L> {
        fn ct_eq(&self, other: &Self) -> Choice {
            self.0[..].ct_eq(&other.0[..])
        }
    }

    impl<const L: usize> ConstantTimeGreater for Unsigned<L> {
        /// `self > other` iff `other - self` borrows; the subtraction
        /// touches every digit regardless of the values.
        fn ct_gt(&self, other: &Self) -> Choice {
            let (borrow, _) = other.borrowing_sub(self);
            Choice::from(borrow as u8)
        }
    }

    impl<const L: usize> ConstantTimeLess for Unsigned<L> {}

}
