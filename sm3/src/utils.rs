use core::convert::TryFrom;

use block_buffer::byteorder::{ByteOrder, BE};

use crate::consts::{BLOCK_LEN, EXPANDED_LEN, ROUNDS, STATE_LEN, T_0, T_1};

/// One 512-bit message block.
pub type Block = [u8; BLOCK_LEN];

#[inline(always)]
fn ff0(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
fn ff1(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}

#[inline(always)]
fn gg0(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
fn gg1(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline(always)]
fn p0(x: u32) -> u32 {
    x ^ x.rotate_left(9) ^ x.rotate_left(17)
}

#[inline(always)]
fn p1(x: u32) -> u32 {
    x ^ x.rotate_left(15) ^ x.rotate_left(23)
}

/// Splits `bytes` into whole blocks; a trailing partial chunk is not yielded.
#[inline(always)]
pub(crate) fn blocks_of(bytes: &[u8]) -> impl Iterator<Item = &Block> + '_ {
    bytes
        .chunks_exact(BLOCK_LEN)
        .filter_map(|chunk| <&Block>::try_from(chunk).ok())
}

/// Round constant `T_j <<< (j mod 32)` used by round `j` of the compression function.
#[inline(always)]
pub fn round_constant(j: usize) -> u32 {
    let t = if j < 16 { T_0 } else { T_1 };
    t.rotate_left((j % 32) as u32)
}

/// Message expansion: derives `W[0..68]` and `W'[0..64]` from one block.
pub fn expand(block: &Block) -> ([u32; EXPANDED_LEN], [u32; ROUNDS]) {
    let mut w = [0u32; EXPANDED_LEN];
    let mut w_prime = [0u32; ROUNDS];

    BE::read_u32_into(block, &mut w[..16]);
    for j in 16..EXPANDED_LEN {
        w[j] = p1(w[j - 16] ^ w[j - 9] ^ w[j - 3].rotate_left(15))
            ^ w[j - 13].rotate_left(7)
            ^ w[j - 6];
    }
    for j in 0..ROUNDS {
        w_prime[j] = w[j] ^ w[j + 4];
    }
    (w, w_prime)
}

/// CF: runs the 64 rounds over `state` and returns `state xor ABCDEFGH`.
pub fn compress(
    state: &[u32; STATE_LEN],
    w: &[u32; EXPANDED_LEN],
    w_prime: &[u32; ROUNDS],
) -> [u32; STATE_LEN] {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;
    for j in 0..ROUNDS {
        let (ff, gg) = if j < 16 {
            (ff0(a, b, c), gg0(e, f, g))
        } else {
            (ff1(a, b, c), gg1(e, f, g))
        };
        let a12 = a.rotate_left(12);
        let ss1 = a12
            .wrapping_add(e)
            .wrapping_add(round_constant(j))
            .rotate_left(7);
        let ss2 = ss1 ^ a12;
        let tt1 = ff.wrapping_add(d).wrapping_add(ss2).wrapping_add(w_prime[j]);
        let tt2 = gg.wrapping_add(h).wrapping_add(ss1).wrapping_add(w[j]);
        d = c;
        c = b.rotate_left(9);
        b = a;
        a = tt1;
        h = g;
        g = f.rotate_left(19);
        f = e;
        e = p0(tt2);
    }
    [
        state[0] ^ a,
        state[1] ^ b,
        state[2] ^ c,
        state[3] ^ d,
        state[4] ^ e,
        state[5] ^ f,
        state[6] ^ g,
        state[7] ^ h,
    ]
}

/// Expands `block` and folds it into `state`.
pub(crate) fn compress256(state: &mut [u32; STATE_LEN], block: &Block) {
    let (w, w_prime) = expand(block);
    *state = compress(state, &w, &w_prime);
}
