//! SHA-2 streaming contexts.
//!
//! SHA-224 and SHA-384 are not separate algorithms: each runs the same
//! compressor as its 256/512 sibling from a distinct initial vector and
//! truncates the final state on output (FIPS 180-4 §6.3/§6.5).

use super::{BLOCK_SIZE_256, BLOCK_SIZE_512, H224_INIT, H256_INIT, H384_INIT, H512_INIT, computations};
use crate::hash::block_buffer::BlockBuffer;

struct Engine32 {
    state: [u32; 8],
    buffer: BlockBuffer<BLOCK_SIZE_256>,
    bit_len: u64,
}

impl Engine32 {
    fn new(iv: [u32; 8]) -> Self {
        Self {
            state: iv,
            buffer: BlockBuffer::new(),
            bit_len: 0,
        }
    }

    fn update(&mut self, data: &[u8]) {
        self.bit_len = self.bit_len.wrapping_add((data.len() as u64).wrapping_mul(8));
        let state = &mut self.state;
        self.buffer.absorb(data, |block| computations::compress256(block, state));
    }

    fn finalize_state(mut self) -> [u32; 8] {
        let residual_len = self.buffer.len();
        let pad_len = if residual_len < 56 {
            56 - residual_len
        } else {
            120 - residual_len
        };

        let mut pad = [0u8; 64];
        pad[0] = 0x80;
        let state = &mut self.state;
        self.buffer.absorb(&pad[..pad_len], |block| computations::compress256(block, state));
        self.buffer.absorb(&self.bit_len.to_be_bytes(), |block| {
            computations::compress256(block, state)
        });
        self.state
    }
}

struct Engine64 {
    state: [u64; 8],
    buffer: BlockBuffer<BLOCK_SIZE_512>,
    bit_len: u128,
}

impl Engine64 {
    fn new(iv: [u64; 8]) -> Self {
        Self {
            state: iv,
            buffer: BlockBuffer::new(),
            bit_len: 0,
        }
    }

    fn update(&mut self, data: &[u8]) {
        self.bit_len = self.bit_len.wrapping_add((data.len() as u128).wrapping_mul(8));
        let state = &mut self.state;
        self.buffer.absorb(data, |block| computations::compress512(block, state));
    }

    fn finalize_state(mut self) -> [u64; 8] {
        let residual_len = self.buffer.len();
        let pad_len = if residual_len < 112 {
            112 - residual_len
        } else {
            240 - residual_len
        };

        let mut pad = [0u8; 128];
        pad[0] = 0x80;
        let state = &mut self.state;
        self.buffer.absorb(&pad[..pad_len], |block| computations::compress512(block, state));
        self.buffer.absorb(&self.bit_len.to_be_bytes(), |block| {
            computations::compress512(block, state)
        });
        self.state
    }
}

/// Incremental SHA-224 hasher.
pub struct Sha224(Engine32);

impl Default for Sha224 {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha224 {
    pub fn new() -> Self {
        Self(Engine32::new(H224_INIT))
    }

    pub fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    /// Emits the 28-byte digest: the first seven words of the SHA-256 state.
    pub fn finalize(self) -> [u8; 28] {
        let state = self.0.finalize_state();
        let mut digest = [0u8; 28];
        for (word, chunk) in state[..7].iter().zip(digest.chunks_exact_mut(4)) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        digest
    }
}

/// Incremental SHA-256 hasher.
pub struct Sha256(Engine32);

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha256 {
    pub fn new() -> Self {
        Self(Engine32::new(H256_INIT))
    }

    pub fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    pub fn finalize(self) -> [u8; 32] {
        let state = self.0.finalize_state();
        let mut digest = [0u8; 32];
        for (word, chunk) in state.iter().zip(digest.chunks_exact_mut(4)) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        digest
    }
}

/// Incremental SHA-384 hasher.
pub struct Sha384(Engine64);

impl Default for Sha384 {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha384 {
    pub fn new() -> Self {
        Self(Engine64::new(H384_INIT))
    }

    pub fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    /// Emits the 48-byte digest: the first six words of the SHA-512 state.
    pub fn finalize(self) -> [u8; 48] {
        let state = self.0.finalize_state();
        let mut digest = [0u8; 48];
        for (word, chunk) in state[..6].iter().zip(digest.chunks_exact_mut(8)) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        digest
    }
}

/// Incremental SHA-512 hasher.
pub struct Sha512(Engine64);

impl Default for Sha512 {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha512 {
    pub fn new() -> Self {
        Self(Engine64::new(H512_INIT))
    }

    pub fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    pub fn finalize(self) -> [u8; 64] {
        let state = self.0.finalize_state();
        let mut digest = [0u8; 64];
        for (word, chunk) in state.iter().zip(digest.chunks_exact_mut(8)) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        digest
    }
}

/// Computes the SHA-224 digest of `data` in one call.
pub fn sha224(data: &[u8]) -> [u8; 28] {
    let mut ctx = Sha224::new();
    ctx.update(data);
    ctx.finalize()
}

/// Computes the SHA-256 digest of `data` in one call.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut ctx = Sha256::new();
    ctx.update(data);
    ctx.finalize()
}

/// Computes the SHA-384 digest of `data` in one call.
pub fn sha384(data: &[u8]) -> [u8; 48] {
    let mut ctx = Sha384::new();
    ctx.update(data);
    ctx.finalize()
}

/// Computes the SHA-512 digest of `data` in one call.
pub fn sha512(data: &[u8]) -> [u8; 64] {
    let mut ctx = Sha512::new();
    ctx.update(data);
    ctx.finalize()
}
