//! MD5 streaming context.

use super::{BLOCK_SIZE, DIGEST_SIZE, INIT, computations};
use crate::hash::block_buffer::BlockBuffer;

/// Incremental MD5 hasher.
///
/// ```
/// use hashstream::hash::md5::Md5;
///
/// let mut ctx = Md5::new();
/// ctx.update(b"abc");
/// let digest = ctx.finalize();
/// assert_eq!(hex(&digest), "900150983cd24fb0d6963f7d28e17f72");
///
/// fn hex(bytes: &[u8]) -> String {
///     bytes.iter().map(|b| format!("{b:02x}")).collect()
/// }
/// ```
pub struct Md5 {
    state: [u32; 4],
    buffer: BlockBuffer<BLOCK_SIZE>,
    bit_len: u64,
}

impl Default for Md5 {
    fn default() -> Self {
        Self::new()
    }
}

impl Md5 {
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

    /// Pads, appends the bit-length, and emits the 16-byte digest.
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
        self.buffer.absorb(&self.bit_len.to_le_bytes(), |block| {
            computations::compress(block, state)
        });

        let mut digest = [0u8; DIGEST_SIZE];
        for (word, chunk) in self.state.iter().zip(digest.chunks_exact_mut(4)) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        digest
    }
}

/// Computes the MD5 digest of `data` in one call.
pub fn md5(data: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut ctx = Md5::new();
    ctx.update(data);
    ctx.finalize()
}
