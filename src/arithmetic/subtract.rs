use core::ops::{Neg, Sub, SubAssign};

use ref_cast::RefCast;

use crate::{Digit, SignedDoubleDigit, Unsigned, Wrapping};

/// Subtract with borrow, `acc` is 0 or -1 on entry and exit.
#[inline]
pub fn sbb(a: Digit, b: Digit, acc: &mut SignedDoubleDigit) -> Digit {
    *acc += a as SignedDoubleDigit;
    *acc -= b as SignedDoubleDigit;
    let lo = *acc as Digit;
    *acc >>= Digit::BITS;
    lo
}

/// a -= b, for big-endian slices of equal length.
///
/// Returns the borrow out of the most significant digit, 0 or 1.
pub(crate) fn sub_assign_borrow(a: &mut [Digit], b: &[Digit]) -> Digit {
    debug_assert_eq!(a.len(), b.len());

    let mut borrow = 0;
    for (a, b) in a.iter_mut().rev().zip(b.iter().rev()) {
        *a = sbb(*a, *b, &mut borrow);
    }

    // the accumulator went to -1, report it as the digit 1
    (-borrow) as Digit
}

// Subtraction in Unsigned / 2^M -- can forget borrows

impl<const L: usize> SubAssign<&Self> for Wrapping<Unsigned<L>> {
    fn sub_assign(&mut self, subtrahend: &Self) {
        sub_assign_borrow(&mut self.0, &subtrahend.0);
    }
}

impl<const L: usize> Sub for &Wrapping<Unsigned<L>> {
    type Output = Wrapping<Unsigned<L>>;

    fn sub(self, subtrahend: Self) -> Self::Output {
        let mut difference = self.clone();
        difference -= subtrahend;
        difference
    }
}

impl<const L: usize> Neg for &Wrapping<Unsigned<L>> {
    type Output = Wrapping<Unsigned<L>>;

    fn neg(self) -> Self::Output {
        &Wrapping(Unsigned::zero()) - self
    }
}

impl<const L: usize> Unsigned<L> {
    /// Difference and borrow.
    ///
    /// Borrow 0: the difference is exactly `self - subtrahend`.
    /// Borrow 1: `self < subtrahend`, and the difference is the
    /// wrapped-around $2^{32L} + \text{self} - \text{subtrahend}$.
    #[must_use]
    pub fn borrowing_sub(&self, subtrahend: &Self) -> (Digit, Self) {
        let mut difference = self.clone();
        let borrow = sub_assign_borrow(&mut difference, subtrahend);
        (borrow, difference)
    }

    /// `None` if `subtrahend > self`.
    pub fn checked_sub(&self, subtrahend: &Self) -> Option<Self> {
        let (borrow, difference) = self.borrowing_sub(subtrahend);
        (borrow == 0).then(|| difference)
    }

    pub fn wrapping_sub_assign(&mut self, subtrahend: &Self) {
        *Wrapping::ref_cast_mut(self) -= Wrapping::ref_cast(subtrahend);
    }

    pub fn wrapping_sub(&self, subtrahend: &Self) -> Self {
        let mut difference = self.clone();
        difference.wrapping_sub_assign(subtrahend);
        difference
    }

    /// $2^{32L} - \text{self}$, and zero for zero.
    pub fn wrapping_neg(&self) -> Self {
        (-Wrapping::ref_cast(self)).0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fixtures::*;

    #[test]
    fn sbb_borrows() {
        let mut acc = 0;
        assert_eq!(sbb(0, 1, &mut acc), 0xffff_ffff);
        assert_eq!(acc, -1);
        assert_eq!(sbb(5, 1, &mut acc), 3);
        assert_eq!(acc, 0);
    }

    #[test]
    fn one_minus_two_borrows() {
        let one = U2048::from_hex("1").unwrap();
        let two = U2048::from_hex("2").unwrap();
        let (borrow, difference) = one.borrowing_sub(&two);
        assert_eq!(borrow, 1);
        // 2^2048 - 1
        assert_eq!(difference.to_hex(), "f".repeat(512));

        assert_eq!(one.checked_sub(&two), None);
        assert_eq!(two.checked_sub(&one), Some(one.clone()));
    }

    #[test]
    fn borrow_crosses_digit_boundary() {
        let a = U2048::from_hex("100000000").unwrap();
        let (borrow, difference) = a.borrowing_sub(&U2048::one());
        assert_eq!(borrow, 0);
        assert_eq!(difference.to_hex(), "ffffffff");
    }

    #[test]
    fn self_minus_self_is_zero() {
        let x = U2048::random(XorShiftRng::new(9));
        let (borrow, difference) = x.borrowing_sub(&x);
        assert_eq!(borrow, 0);
        assert!(difference.is_zero());
    }

    #[test]
    fn inverse_of_addition() {
        let mut rng = XorShiftRng::new(13);
        for _ in 0..32 {
            let a = U2048::random(&mut rng);
            let b = U2048::random(&mut rng);
            let (borrow, d) = a.borrowing_sub(&b);
            if borrow == 0 {
                assert_eq!(d.carrying_add(&b), (0, a.clone()));
            } else {
                // wrapped around, adding back overflows exactly once
                assert_eq!(d.carrying_add(&b), (1, a.clone()));
            }
        }
    }

    #[test]
    fn borrow_iff_less() {
        let mut rng = XorShiftRng::new(17);
        for _ in 0..32 {
            let a = U2048::random(&mut rng);
            let b = U2048::random(&mut rng);
            let (borrow, _) = a.borrowing_sub(&b);
            assert_eq!(borrow == 1, to_biguint(&a) < to_biguint(&b));
        }
    }

    #[test]
    fn negation() {
        let x = U64::from(1);
        assert_eq!(x.wrapping_neg().to_hex(), "ffffffffffffffff");
        assert!(U64::zero().wrapping_neg().is_zero());
        assert_eq!(x.wrapping_neg().wrapping_add(&x), U64::zero());

        let three = U64::from(3);
        assert_eq!(three.wrapping_sub(&U64::from(5)), U64::from(2).wrapping_neg());
    }
}
