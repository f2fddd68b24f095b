use core::fmt;

/// Errors reported by the one-shot digest and HMAC functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The message bit-length does not fit in the 64-bit length field.
    LengthOverflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::LengthOverflow => f.write_str("message bit-length exceeds 64 bits"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
