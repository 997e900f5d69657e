use alloc::vec::Vec;
use core::ops::{Deref, DerefMut};

use rand_core::RngCore;
use zeroize::Zeroize;

use crate::{Error, Result};

mod trait_implementations;

/// `u32`
pub type Digit = u32;
/// Holds a digit plus the carry of a digit operation.
pub type DoubleDigit = u64;
/// Holds a digit minus a digit and a borrow.
pub type SignedDoubleDigit = i64;

/// Number of bits of a type.
pub trait Bits {
    const BITS: usize;
}

/// Unsigned integer with `L` digits (L for length).
///
/// Internal representation is big-endian: index 0 holds the most significant
/// digit, index `L - 1` the least significant one. This is also the order
/// exposed via `Deref<Target = [Digit]>`.
///
/// The width never changes. Operations that could exceed it return the
/// carry (or borrow) next to the truncated result instead.
#[derive(Clone, Eq, Hash, PartialEq, Zeroize)]
#[repr(transparent)]
pub struct Unsigned<const L: usize>(pub(crate) [Digit; L]);

impl<const L: usize> Bits for Unsigned<L> {
    const BITS: usize = L * Digit::BITS as usize;
}

// c'tors and such
impl<const L: usize> Unsigned<L> {
    pub const DIGITS: usize = L;

    pub const fn from_digits(digits: [Digit; L]) -> Self {
        Self(digits)
    }

    /// Big-endian digits, right-aligned: the last digit of `slice`
    /// becomes the least significant digit.
    ///
    /// Panics if `slice.len() > L`.
    pub fn from_slice(slice: &[Digit]) -> Self {
        let mut x = Self::zero();
        x.0[L - slice.len()..].copy_from_slice(slice);
        x
    }

    /// Big-endian bytes, leading zero bytes may be omitted.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > 4 * L {
            warn!("{} bytes do not fit in {} digits", bytes.len(), L);
            return Err(Error::OutOfRange);
        }
        let mut x = Self::zero();
        for (digit, chunk) in x.0.iter_mut().rev().zip(bytes.rchunks(4)) {
            *digit = chunk
                .iter()
                .fold(0, |acc, &byte| (acc << 8) | byte as Digit);
        }
        Ok(x)
    }

    /// Big-endian bytes, always `4 * L` of them.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.0.iter().flat_map(|digit| digit.to_be_bytes()).collect()
    }

    /// Uniformly random value.
    pub fn random(mut rng: impl RngCore) -> Self {
        let mut x = Self::zero();
        for digit in x.0.iter_mut() {
            *digit = rng.next_u32();
        }
        x
    }

    pub fn digits(&self) -> &[Digit; L] {
        &self.0
    }

    /// 0 if zero, else the number of digits from the most significant non-zero one on.
    pub fn len(&self) -> usize {
        self.0
            .iter()
            .position(|&digit| digit != 0)
            .map(|i| L - i)
            .unwrap_or(0)
    }

    pub fn leading_digit(&self) -> Option<Digit> {
        match self.len() {
            0 => None,
            l => Some(self.0[L - l]),
        }
    }

    /// Embed in `Unsigned<C>`, if possible.
    ///
    /// Fails iff `self.len() > C`.
    ///
    /// Not expressable as `TryInto`, as it would clash with the blanket
    /// implementation for `C = L`.
    pub fn try_into_unsigned<const C: usize>(&self) -> Result<Unsigned<C>> {
        let l = self.len();
        if l <= C {
            Ok(Unsigned::<C>::from_slice(&self.0[L - l..]))
        } else {
            Err(Error::OutOfRange)
        }
    }

    pub fn one() -> Self {
        One::one()
    }

    pub fn zero() -> Self {
        Zero::zero()
    }

    pub fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }
}

impl<const L: usize> Deref for Unsigned<L> {
    type Target = [Digit];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const L: usize> DerefMut for Unsigned<L> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

pub trait One: Sized + PartialEq {
    fn one() -> Self;

    fn is_one(&self) -> bool { *self == Self::one() }
    fn set_one(&mut self) { *self = Self::one(); }
}

pub trait Zero: Sized + PartialEq {
    fn zero() -> Self;

    fn is_zero(&self) -> bool { *self == Self::zero() }
    fn set_zero(&mut self) { *self = Self::zero(); }
}

/// Fails for L = 0, bound not expressable.
impl<const L: usize> One for Unsigned<L> {
    fn one() -> Self {
        let mut one = Self::default();
        one.0[L - 1] = 1;
        one
    }
}

impl<const L: usize> Zero for Unsigned<L> {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.0.iter().all(|&digit| digit == 0)
    }
}
