//! SHA-3 streaming context, generic over rate and output size.

use super::computations::absorb_block;
use crate::hash::block_buffer::BlockBuffer;

/// Incremental SHA-3 hasher. `RATE` is the sponge rate in bytes
/// (1600-bit width minus twice the capacity); `OUT` is the digest size.
pub struct Sha3<const RATE: usize, const OUT: usize> {
    state: [u64; 25],
    buffer: BlockBuffer<RATE>,
}

impl<const RATE: usize, const OUT: usize> Default for Sha3<RATE, OUT> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const RATE: usize, const OUT: usize> Sha3<RATE, OUT> {
    pub fn new() -> Self {
        Self {
            state: [0u64; 25],
            buffer: BlockBuffer::new(),
        }
    }

    /// Absorbs `data`. An empty slice is a no-op.
    pub fn update(&mut self, data: &[u8]) {
        let state = &mut self.state;
        self.buffer.absorb(data, |block| absorb_block(block, state));
    }

    /// Pads with the SHA-3 domain suffix (pad10*1, domain byte `0x06`) and
    /// squeezes `OUT` bytes from the state.
    pub fn finalize(mut self) -> [u8; OUT] {
        let residual_len = self.buffer.len();
        let pad_len = RATE - residual_len;

        let mut pad = [0u8; RATE];
        pad[0] = 0x06;
        pad[pad_len - 1] |= 0x80;

        let state = &mut self.state;
        self.buffer.absorb(&pad[..pad_len], |block| absorb_block(block, state));

        let mut output = [0u8; OUT];
        for (chunk, lane) in output.chunks_mut(8).zip(self.state.iter()) {
            let bytes = lane.to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
        output
    }
}

pub type Sha3_224 = Sha3<144, 28>;
pub type Sha3_256 = Sha3<136, 32>;
pub type Sha3_384 = Sha3<104, 48>;
pub type Sha3_512 = Sha3<72, 64>;

/// Computes the SHA3-224 digest of `data` in one call.
pub fn sha3_224(data: &[u8]) -> [u8; 28] {
    let mut ctx = Sha3_224::new();
    ctx.update(data);
    ctx.finalize()
}

/// Computes the SHA3-256 digest of `data` in one call.
pub fn sha3_256(data: &[u8]) -> [u8; 32] {
    let mut ctx = Sha3_256::new();
    ctx.update(data);
    ctx.finalize()
}

/// Computes the SHA3-384 digest of `data` in one call.
pub fn sha3_384(data: &[u8]) -> [u8; 48] {
    let mut ctx = Sha3_384::new();
    ctx.update(data);
    ctx.finalize()
}

/// Computes the SHA3-512 digest of `data` in one call.
pub fn sha3_512(data: &[u8]) -> [u8; 64] {
    let mut ctx = Sha3_512::new();
    ctx.update(data);
    ctx.finalize()
}
