//! SM3 cryptographic hash function (GM/T 0004-2012) and HMAC-SM3.
//!
//! ```
//! let digest = sm3::hash(b"abc").unwrap();
//! assert_eq!(digest[..4], [0x66, 0xc7, 0xf0, 0xf4]);
//!
//! let mac = sm3::hmac(b"abc", b"key").unwrap();
//! assert_eq!(mac.len(), sm3::DIGEST_LEN);
//! ```
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod consts;
mod driver;
mod error;
mod hmac;
mod preprocess;
mod sm3;
mod utils;

pub use digest::Digest;

pub use crate::consts::{BLOCK_LEN, DIGEST_LEN};
pub use crate::driver::hash;
pub use crate::error::Error;
pub use crate::hmac::{hmac, normalize_key};
pub use crate::preprocess::{pad, padding_zero_bits, PaddedMessage};
pub use crate::sm3::Sm3;
pub use crate::utils::{compress, expand, round_constant, Block};
