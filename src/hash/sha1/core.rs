//! SHA-1 streaming context.

use super::{BLOCK_SIZE, DIGEST_SIZE, INIT, computations};
use crate::hash::block_buffer::BlockBuffer;

/// Incremental SHA-1 hasher.
pub struct Sha1 {
    state: [u32; 5],
    buffer: BlockBuffer<BLOCK_SIZE>,
    bit_len: u64,
}

impl Default for Sha1 {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha1 {
    pub fn new() -> Self {
        Self {
            state: INIT,
            buffer: BlockBuffer::new(),
            bit_len: 0,
        }
    }

    /// Absorbs `data`. An empty slice is a no-op.
    pub fn update(&mut self, data: &[u8]) {
        self.bit_len = self.bit_len.wrapping_add((data.len() as u64).wrapping_mul(8));
        let state = &mut self.state;
        self.buffer.absorb(data, |block| computations::compress(block, state));
    }

    /// Pads, appends the big-endian bit-length, and emits the 20-byte digest.
    pub fn finalize(mut self) -> [u8; DIGEST_SIZE] {
        let residual_len = self.buffer.len();
        let pad_len = if residual_len < 56 {
            56 - residual_len
        } else {
            120 - residual_len
        };

        let mut pad = [0u8; 64];
        pad[0] = 0x80;
        let state = &mut self.state;
        self.buffer.absorb(&pad[..pad_len], |block| computations::compress(block, state));
        self.buffer.absorb(&self.bit_len.to_be_bytes(), |block| {
            computations::compress(block, state)
        });

        let mut digest = [0u8; DIGEST_SIZE];
        for (word, chunk) in self.state.iter().zip(digest.chunks_exact_mut(4)) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        digest
    }
}

/// Computes the SHA-1 digest of `data` in one call.
pub fn sha1(data: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut ctx = Sha1::new();
    ctx.update(data);
    ctx.finalize()
}
