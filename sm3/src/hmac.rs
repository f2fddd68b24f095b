use crate::consts::{BLOCK_LEN, DIGEST_LEN, IPAD, OPAD};
use crate::driver::hash;
use crate::error::Error;
use crate::preprocess::message_bit_len;
use crate::sm3::Sm3;
use digest::Digest;

/// Brings `key` to exactly one block: hashed when longer than a block,
/// then zero-extended.
pub fn normalize_key(key: &[u8]) -> Result<[u8; BLOCK_LEN], Error> {
    let mut padded = [0u8; BLOCK_LEN];
    if key.len() > BLOCK_LEN {
        padded[..DIGEST_LEN].copy_from_slice(&hash(key)?);
    } else {
        padded[..key.len()].copy_from_slice(key);
    }
    Ok(padded)
}

fn xor_pad(key: &[u8; BLOCK_LEN], pad: u8) -> [u8; BLOCK_LEN] {
    let mut out = *key;
    out.iter_mut().for_each(|b| *b ^= pad);
    out
}

/// Bit-length of `(K ^ ipad) || message`, one block longer than the message.
fn inner_bit_len(message_len: usize) -> Result<u64, Error> {
    message_len
        .checked_add(BLOCK_LEN)
        .ok_or(Error::LengthOverflow)
        .and_then(message_bit_len)
}

/// HMAC-SM3: `H((K ^ opad) || H((K ^ ipad) || message))`.
///
/// Both hashes chain their parts through [`Sm3`] so the concatenations
/// are never allocated, which keeps the function usable without `std`.
pub fn hmac(message: &[u8], key: &[u8]) -> Result<[u8; DIGEST_LEN], Error> {
    inner_bit_len(message.len())?;

    let key = normalize_key(key)?;
    let inner = Sm3::new()
        .chain(&xor_pad(&key, IPAD)[..])
        .chain(message)
        .result();
    let outer = Sm3::new()
        .chain(&xor_pad(&key, OPAD)[..])
        .chain(inner)
        .result();

    let mut mac = [0u8; DIGEST_LEN];
    mac.copy_from_slice(&outer);
    Ok(mac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_key_is_zero_extended() {
        let key = normalize_key(b"key").unwrap();
        assert_eq!(key[..3], *b"key");
        assert!(key[3..].iter().all(|&b| b == 0));
    }

    #[test]
    fn block_sized_key_is_kept() {
        let raw = [0x42u8; BLOCK_LEN];
        assert_eq!(normalize_key(&raw).unwrap()[..], raw[..]);
    }

    #[test]
    fn long_key_is_hashed() {
        let raw = [0x42u8; BLOCK_LEN + 1];
        let key = normalize_key(&raw).unwrap();
        assert_eq!(key[..DIGEST_LEN], hash(&raw).unwrap());
        assert!(key[DIGEST_LEN..].iter().all(|&b| b == 0));
    }

    #[test]
    fn pads_differ() {
        let key = normalize_key(b"").unwrap();
        assert!(xor_pad(&key, IPAD).iter().all(|&b| b == 0x36));
        assert!(xor_pad(&key, OPAD).iter().all(|&b| b == 0x5c));
    }

    #[test]
    fn inner_length_overflow() {
        assert_eq!(inner_bit_len(0), Ok(8 * BLOCK_LEN as u64));
        assert_eq!(inner_bit_len(3), Ok(8 * (BLOCK_LEN as u64 + 3)));
        assert_eq!(inner_bit_len(usize::MAX), Err(Error::LengthOverflow));
        assert_eq!(
            inner_bit_len(usize::MAX - BLOCK_LEN + 1),
            Err(Error::LengthOverflow)
        );
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn inner_length_overflow_at_bit_limit() {
        let max_bytes = (u64::MAX / 8) as usize;
        assert_eq!(inner_bit_len(max_bytes - BLOCK_LEN), Ok(8 * max_bytes as u64));
        assert_eq!(
            inner_bit_len(max_bytes - BLOCK_LEN + 1),
            Err(Error::LengthOverflow)
        );
    }

    #[test]
    fn matches_nested_hash() {
        let key = normalize_key(b"secret").unwrap();
        let mut inner_input = [0u8; BLOCK_LEN + 3];
        inner_input[..BLOCK_LEN].copy_from_slice(&xor_pad(&key, IPAD));
        inner_input[BLOCK_LEN..].copy_from_slice(b"abc");
        let inner = hash(&inner_input).unwrap();

        let mut outer_input = [0u8; BLOCK_LEN + DIGEST_LEN];
        outer_input[..BLOCK_LEN].copy_from_slice(&xor_pad(&key, OPAD));
        outer_input[BLOCK_LEN..].copy_from_slice(&inner);

        assert_eq!(hmac(b"abc", b"secret").unwrap(), hash(&outer_input).unwrap());
    }
}
