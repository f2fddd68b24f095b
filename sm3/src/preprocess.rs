use core::convert::TryFrom;

use block_buffer::byteorder::{ByteOrder, BE};

use crate::consts::BLOCK_LEN;
use crate::error::Error;
use crate::utils::{blocks_of, Block};

const LENGTH_FIELD_LEN: usize = 8;

/// Number of `0` bits `k` such that `bit_len + 1 + k ≡ 448 (mod 512)`, `k` minimal.
pub fn padding_zero_bits(bit_len: u64) -> u64 {
    let r = bit_len % 512;
    if r < 448 {
        447 - r
    } else {
        959 - r
    }
}

pub(crate) fn message_bit_len(byte_len: usize) -> Result<u64, Error> {
    u64::try_from(byte_len)
        .ok()
        .and_then(|n| n.checked_mul(8))
        .ok_or(Error::LengthOverflow)
}

/// A message padded to a multiple of 512 bits.
///
/// Whole blocks of the message are borrowed in place; only the last one
/// or two blocks, which carry the `0x80` marker and the length field,
/// are owned.
#[derive(Clone, Debug)]
pub struct PaddedMessage<'a> {
    body: &'a [u8],
    tail: [u8; 2 * BLOCK_LEN],
    tail_len: usize,
}

impl<'a> PaddedMessage<'a> {
    /// Length in bytes, always a multiple of `BLOCK_LEN`.
    pub fn len(&self) -> usize {
        self.body.len() + self.tail_len
    }

    /// Always false: even the empty message pads to one block.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn block_count(&self) -> usize {
        self.len() / BLOCK_LEN
    }

    /// The original bit-length, as encoded in the trailing 64-bit field.
    pub fn message_bit_len(&self) -> u64 {
        BE::read_u64(&self.tail[self.tail_len - LENGTH_FIELD_LEN..self.tail_len])
    }

    /// Blocks in message order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> + '_ {
        blocks_of(self.body).chain(blocks_of(&self.tail[..self.tail_len]))
    }
}

/// Appends the `1` bit, `k` zero bits and the big-endian 64-bit bit-length.
pub fn pad(message: &[u8]) -> Result<PaddedMessage<'_>, Error> {
    let bit_len = message_bit_len(message.len())?;
    let split = message.len() - message.len() % BLOCK_LEN;
    let (body, rest) = message.split_at(split);

    // the marker byte and length field must fit behind the remainder
    let tail_len = if rest.len() < BLOCK_LEN - LENGTH_FIELD_LEN {
        BLOCK_LEN
    } else {
        2 * BLOCK_LEN
    };
    let mut tail = [0u8; 2 * BLOCK_LEN];
    tail[..rest.len()].copy_from_slice(rest);
    tail[rest.len()] = 0x80;
    BE::write_u64(&mut tail[tail_len - LENGTH_FIELD_LEN..tail_len], bit_len);

    Ok(PaddedMessage {
        body,
        tail,
        tail_len,
    })
}
