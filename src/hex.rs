//! Conversion between hexadecimal strings and [`Unsigned`].
//!
//! The string form is big-endian, without prefix. Decoding accepts both
//! cases and leading zeros, encoding is canonical: lowercase (unless `{:X}`
//! is requested), no leading zeros, and zero is `"0"`.

use alloc::string::String;
use core::{fmt, str::FromStr};

use crate::{Digit, Error, Result, Unsigned};

/// Hex characters per digit.
const CHUNK: usize = 2 * core::mem::size_of::<Digit>();

impl<const L: usize> Unsigned<L> {
    /// Parse a hex string of at most `8 * L` characters (512 for [`U2048`][crate::U2048]).
    ///
    /// The string is consumed in chunks of eight characters starting from
    /// its end, each chunk filling the next more significant digit. The
    /// empty string is zero.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.as_bytes();
        if hex.len() > CHUNK * L {
            warn!("hex string of {} characters exceeds {} digits", hex.len(), L);
            return Err(Error::OutOfRange);
        }

        let mut x = Self::zero();
        for (digit, chunk) in x.0.iter_mut().rev().zip(hex.rchunks(CHUNK)) {
            *digit = parse_chunk(chunk)?;
        }
        Ok(x)
    }

    /// Canonical lowercase hex, cf. [`fmt::LowerHex`].
    pub fn to_hex(&self) -> String {
        use fmt::Write;
        let mut hex = String::with_capacity(CHUNK * self.len().max(1));
        // writing into a String does not fail
        write!(hex, "{:x}", self).ok();
        hex
    }

    fn write_hex(&self, f: &mut fmt::Formatter<'_>, upper: bool) -> fmt::Result {
        let l = self.len();
        if l == 0 {
            return f.write_str("0");
        }

        let significant = &self.0[L - l..];
        if upper {
            write!(f, "{:X}", significant[0])?;
            for digit in &significant[1..] {
                write!(f, "{:08X}", digit)?;
            }
        } else {
            write!(f, "{:x}", significant[0])?;
            for digit in &significant[1..] {
                write!(f, "{:08x}", digit)?;
            }
        }
        Ok(())
    }
}

fn parse_chunk(chunk: &[u8]) -> Result<Digit> {
    chunk.iter().try_fold(0, |acc: Digit, &byte| {
        let nibble = char::from(byte).to_digit(16).ok_or_else(|| {
            warn!("invalid hex digit {:#04x}", byte);
            Error::InvalidDigit(byte)
        })?;
        Ok((acc << 4) | nibble)
    })
}

impl<const L: usize> fmt::LowerHex for Unsigned<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_hex(f, false)
    }
}

impl<const L: usize> fmt::UpperHex for Unsigned<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_hex(f, true)
    }
}

/// Same as [`fmt::LowerHex`].
impl<const L: usize> fmt::Display for Unsigned<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_hex(f, false)
    }
}

impl<const L: usize> FromStr for Unsigned<L> {
    type Err = Error;

    fn from_str(hex: &str) -> Result<Self> {
        Self::from_hex(hex)
    }
}
