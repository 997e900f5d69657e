use core::fmt;

/// Failures are only possible when constructing numbers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// input needs more digits than the target width offers
    OutOfRange,
    /// the offending byte is not a hexadecimal digit
    InvalidDigit(u8),
}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange => f.write_str("number out of range"),
            Error::InvalidDigit(byte) => write!(f, "invalid hex digit {:?}", char::from(*byte)),
        }
    }
}
