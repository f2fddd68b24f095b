use block_buffer::BlockBuffer;
use digest::generic_array::typenum::{U32, U64};
use digest::generic_array::GenericArray;
use digest::{BlockInput, FixedOutput, Input, Reset};

use crate::consts::{IV, STATE_LEN};
use crate::driver::serialize;
use crate::utils::{blocks_of, compress256};

type BlockSize = U64;

fn process_block(state: &mut [u32; STATE_LEN], block: &GenericArray<u8, BlockSize>) {
    for block in blocks_of(block.as_slice()) {
        compress256(state, block);
    }
}

#[derive(Clone)]
struct Engine {
    len: u64,
    buffer: BlockBuffer<BlockSize>,
    state: [u32; STATE_LEN],
}

impl Engine {
    fn new() -> Engine {
        Engine {
            len: 0,
            buffer: Default::default(),
            state: IV,
        }
    }

    fn input(&mut self, input: &[u8]) {
        self.len = self.len.wrapping_add((input.len() as u64) << 3);
        let state = &mut self.state;
        self.buffer.input(input, |block| process_block(state, block));
    }

    fn finish(&mut self) {
        let state = &mut self.state;
        let l = self.len;
        self.buffer
            .len64_padding::<block_buffer::byteorder::BE, _>(l, |block| {
                process_block(state, block)
            });
    }
}

/// Incremental SM3 hasher for code written against the `digest` traits.
///
/// Produces the same output as [`hash`](crate::hash) over the
/// concatenation of all inputs, as long as the total input stays below
/// 2^64 bits. Past that the bit counter wraps modulo 2^64 and the length
/// field no longer matches the input; `hash` reports
/// [`Error::LengthOverflow`](crate::Error::LengthOverflow) instead.
#[derive(Clone)]
pub struct Sm3 {
    engine: Engine,
}

impl Default for Sm3 {
    fn default() -> Self {
        Sm3 {
            engine: Engine::new(),
        }
    }
}

impl BlockInput for Sm3 {
    type BlockSize = BlockSize;
}

impl Input for Sm3 {
    fn input<B: AsRef<[u8]>>(&mut self, input: B) {
        self.engine.input(input.as_ref());
    }
}

impl FixedOutput for Sm3 {
    type OutputSize = U32;

    fn fixed_result(mut self) -> GenericArray<u8, Self::OutputSize> {
        self.engine.finish();
        GenericArray::clone_from_slice(&serialize(&self.engine.state))
    }
}

impl Reset for Sm3 {
    fn reset(&mut self) {
        self.engine = Engine::new();
    }
}
