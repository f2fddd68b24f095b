use block_buffer::byteorder::{ByteOrder, BE};

use crate::consts::{DIGEST_LEN, IV, STATE_LEN};
use crate::error::Error;
use crate::preprocess::pad;
use crate::utils::compress256;

pub(crate) fn serialize(state: &[u32; STATE_LEN]) -> [u8; DIGEST_LEN] {
    let mut out = [0u8; DIGEST_LEN];
    BE::write_u32_into(state, &mut out);
    out
}

/// Computes the SM3 digest of `message`.
///
/// Fails only when the bit-length of `message` cannot be represented in
/// the 64-bit length field.
pub fn hash(message: &[u8]) -> Result<[u8; DIGEST_LEN], Error> {
    let padded = pad(message)?;
    let mut state = IV;
    for block in padded.blocks() {
        compress256(&mut state, block);
    }
    Ok(serialize(&state))
}
