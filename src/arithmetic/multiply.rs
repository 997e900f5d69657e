use core::ops::{Mul, MulAssign};

use crate::{Digit, DoubleDigit, Unsigned, Wrapping};

/// Multiply-accumulate with carry: returns the low digit of `a + b*c + acc`,
/// leaving the high digit in `acc`. Cannot overflow a `DoubleDigit`.
#[inline]
pub fn mac_with_carry(a: Digit, b: Digit, c: Digit, acc: &mut DoubleDigit) -> Digit {
    *acc += a as DoubleDigit;
    *acc += (b as DoubleDigit) * (c as DoubleDigit);
    let lo = *acc as Digit;
    *acc >>= Digit::BITS;
    lo
}

/// Const generics on stable can't express `Unsigned<2 * L>`, so products
/// take their width `P` as parameter, and this rejects `P != 2 * L` at
/// compile time.
struct DoubleWidth<const L: usize, const P: usize>;

impl<const L: usize, const P: usize> DoubleWidth<L, P> {
    const CHECK: () = assert!(P == 2 * L, "product width must be twice the factor width");
}

impl<const L: usize> Unsigned<L> {
    /// Product with a single digit, embedded in the double width `P = 2L`.
    ///
    /// The digits of `self` times `multiplier` occupy the low `L` digits,
    /// the final carry the digit right above them. Never truncates.
    pub fn mul_digit<const P: usize>(&self, multiplier: Digit) -> Unsigned<P> {
        #[allow(clippy::let_unit_value)]
        let () = DoubleWidth::<L, P>::CHECK;

        let mut product = Unsigned::<P>::zero();
        let mut carry = 0;
        for (p, &a) in product.0[P - L..].iter_mut().rev().zip(self.0.iter().rev()) {
            *p = mac_with_carry(0, a, multiplier, &mut carry);
        }
        product.0[P - L - 1] = carry as Digit;

        product
    }

    /// Schoolbook multiplication, the full product in `P = 2L` digits.
    ///
    /// For each digit of `other`, the partial product [`Self::mul_digit`]
    /// is shifted to the digit's place and accumulated with
    /// [`Self::carrying_add`] at double width.
    ///
    /// The accumulation carry is dropped: two factors below $2^{32L}$ have a
    /// product below $2^{64L}$, so it is always zero.
    pub fn widening_mul<const P: usize>(&self, other: &Self) -> Unsigned<P> {
        #[allow(clippy::let_unit_value)]
        let () = DoubleWidth::<L, P>::CHECK;
        trace!("multiplying {} by {} significant digits", self.len(), other.len());

        let mut product = Unsigned::<P>::zero();
        for (i, &digit) in other.0.iter().enumerate() {
            let mut partial: Unsigned<P> = self.mul_digit(digit);
            partial.shift_digits_left(L - 1 - i);

            let (carry, sum) = product.carrying_add(&partial);
            debug_assert_eq!(carry, 0);
            product = sum;
        }
        product
    }

    /// The product modulo $2^{32L}$, i.e. the low half of [`Self::widening_mul`].
    pub fn wrapping_mul(&self, other: &Self) -> Self {
        let mut product = Self::zero();

        for (i, &b) in other.0.iter().enumerate() {
            if b == 0 {
                continue;
            }
            // place value of `b`, in digits
            let shift = L - 1 - i;
            let mut carry = 0;
            for (p, &a) in product.0[..L - shift].iter_mut().rev().zip(self.0[shift..].iter().rev()) {
                *p = mac_with_carry(*p, a, b, &mut carry);
            }
        }
        product
    }
}

macro_rules! impl_widening_mul {
    ($($l:literal => $p:literal),* $(,)?) => {$(
        impl Mul for &Unsigned<$l> {
            type Output = Unsigned<$p>;

            fn mul(self, other: Self) -> Self::Output {
                self.widening_mul(other)
            }
        }
    )*}
}

impl_widening_mul!(1 => 2, 2 => 4, 4 => 8, 8 => 16, 16 => 32, 32 => 64, 64 => 128);

impl<const L: usize> MulAssign<&Self> for Wrapping<Unsigned<L>> {
    fn mul_assign(&mut self, factor: &Self) {
        self.0 = self.0.wrapping_mul(&factor.0);
    }
}

impl<const L: usize> Mul for &Wrapping<Unsigned<L>> {
    type Output = Wrapping<Unsigned<L>>;

    fn mul(self, factor: Self) -> Self::Output {
        Wrapping(self.0.wrapping_mul(&factor.0))
    }
}
