use core::ops::{Add, AddAssign};

use ref_cast::RefCast;

use crate::{Digit, DoubleDigit, Unsigned, Wrapping};

// Add with carry:
#[inline]
pub fn adc(a: Digit, b: Digit, acc: &mut DoubleDigit) -> Digit {
    *acc += a as DoubleDigit;
    *acc += b as DoubleDigit;
    let lo = *acc as Digit;
    *acc >>= Digit::BITS;
    lo
}

#[inline]
/// Two argument addition of raw big-endian slices of equal length:
/// a += b
///
/// Returns the carry out of the most significant digit, 0 or 1.
pub(crate) fn add_assign_carry(a: &mut [Digit], b: &[Digit]) -> Digit {
    debug_assert_eq!(a.len(), b.len());

    let mut carry = 0;
    for (a, b) in a.iter_mut().rev().zip(b.iter().rev()) {
        *a = adc(*a, *b, &mut carry);
    }

    carry as Digit
}

// Addition in Unsigned / 2^M

impl<const L: usize> AddAssign<&Self> for Wrapping<Unsigned<L>> {
    fn add_assign(&mut self, summand: &Self) {
        add_assign_carry(&mut self.0, &summand.0);
    }
}

impl<const L: usize> Add for &Wrapping<Unsigned<L>> {
    type Output = Wrapping<Unsigned<L>>;

    fn add(self, summand: Self) -> Self::Output {
        let mut sum = self.clone();
        sum += summand;
        sum
    }
}

impl<const L: usize> Unsigned<L> {
    /// Sum and carry. The sum is taken modulo $2^{32L}$, the carry
    /// (0 or 1) signals the true sum did not fit.
    ///
    /// The same algorithm serves every width; at 4096 bits it is the
    /// accumulator of [`Self::widening_mul`].
    #[must_use]
    pub fn carrying_add(&self, summand: &Self) -> (Digit, Self) {
        let mut sum = self.clone();
        let carry = add_assign_carry(&mut sum, summand);
        (carry, sum)
    }

    /// `None` on overflow.
    pub fn checked_add(&self, summand: &Self) -> Option<Self> {
        let (carry, sum) = self.carrying_add(summand);
        (carry == 0).then(|| sum)
    }

    pub fn wrapping_add_assign(&mut self, summand: &Self) {
        *Wrapping::ref_cast_mut(self) += Wrapping::ref_cast(summand);
    }

    pub fn wrapping_add(&self, summand: &Self) -> Self {
        let mut sum = self.clone();
        sum.wrapping_add_assign(summand);
        sum
    }
}
