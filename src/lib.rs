#![cfg_attr(not(test), no_std)]
//! Fixed-width unsigned integers, sized in 32-bit digits.
//!
//! The primary operand type is [`U2048`], products land in [`U4096`].
//! Both are instances of the single generic [`Unsigned`].
//!
//! Arithmetic never fails: carries and borrows are returned next to the
//! result, and it is up to the caller to inspect them. The only fallible
//! operations are the constructors (hex and byte decoding).
//!
//! ```
//! use fixed_width_uint::{U2048, U4096};
//!
//! let a = U2048::from_hex("ffffffff").unwrap();
//! let (carry, sum) = a.carrying_add(&U2048::one());
//! assert_eq!(carry, 0);
//! assert_eq!(sum.to_hex(), "100000000");
//!
//! let product: U4096 = &sum * &sum;
//! assert_eq!(product.to_hex(), "10000000000000000");
//! ```

extern crate alloc;
#[macro_use]
extern crate delog;

generate_macros!();

mod aliases;
pub use aliases::*;
mod arithmetic;
pub use arithmetic::Wrapping;
mod error;
pub use error::{Error, Result};
mod hex;
mod numbers;
pub use numbers::{Bits, Digit, DoubleDigit, One, SignedDoubleDigit, Unsigned, Zero};

#[cfg(test)]
mod fixtures;
