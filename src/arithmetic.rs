//! Digit-wise arithmetic on [`Unsigned`][crate::Unsigned].
//!
//! Every operation works from the least significant digit (the end of the
//! digit array) towards the most significant one, keeping the carry or
//! borrow in a [`DoubleDigit`][crate::DoubleDigit] (resp. signed) accumulator.
//!
//! Nothing here allocates. Operands are taken by reference and results are
//! fresh values; only the `*_assign` methods and `shift_digits_left` write
//! to `self`. Overflow beyond the fixed width is reported, never raised:
//! - `carrying_add` and `borrowing_sub` return the carry/borrow digit,
//! - [`Wrapping`] drops it, i.e. computes "$\text{mod } 2^{32L}$".

use ref_cast::RefCast;

mod add;
mod compare;
mod multiply;
mod shift;
mod subtract;

#[repr(transparent)]
#[derive(Clone, Debug, Default, Eq, PartialEq, RefCast)]
/// Intentionally-wrapped arithmetic.
///
/// We can't use `core::num::Wrapping` due to type coherence clashing
/// with our usage requirements.
///
/// The idea is that `T` is [`Unsigned<L>`][crate::Unsigned], and we wrap around $2^N$ where `N = 32L`.
pub struct Wrapping<T>(pub T);
