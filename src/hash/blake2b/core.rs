//! BLAKE2b streaming context.
//!
//! Unlike the Merkle-Damgard engines, BLAKE2's last block carries a flag in
//! the compression function itself, so a full buffer is never compressed
//! speculatively: it is only flushed once data reaches the following block,
//! keeping the true final block available for [`Blake2b::finalize`].

use super::{BLOCK_SIZE, IV, MAX_DIGEST_SIZE, MAX_KEY_SIZE, MAX_PERSONAL_SIZE, computations};

/// Errors returned when constructing a [`Blake2b`] context.
#[derive(Debug)]
pub enum Blake2bError {
    /// Digest size must be between 1 and 64 bytes.
    DigestSizeInvalid,
    /// Key must be at most 64 bytes.
    KeyTooLong,
    /// Personalization must be at most 16 bytes.
    PersonalTooLong,
}

/// Incremental BLAKE2b hasher.
pub struct Blake2b {
    state: [u64; 8],
    buffer: [u8; BLOCK_SIZE],
    buffer_len: usize,
    t_low: u64,
    t_high: u64,
    digest_size: usize,
}

impl Blake2b {
    /// Creates a context for an unkeyed, unpersonalized digest of `digest_size` bytes.
    pub fn new(digest_size: usize) -> Result<Self, Blake2bError> {
        Self::with_params(digest_size, &[], &[])
    }

    /// Creates a context with an optional key (keyed MAC mode) and/or
    /// personalization string.
    pub fn with_params(digest_size: usize, key: &[u8], personal: &[u8]) -> Result<Self, Blake2bError> {
        if digest_size == 0 || digest_size > MAX_DIGEST_SIZE {
            return Err(Blake2bError::DigestSizeInvalid);
        }
        if key.len() > MAX_KEY_SIZE {
            return Err(Blake2bError::KeyTooLong);
        }
        if personal.len() > MAX_PERSONAL_SIZE {
            return Err(Blake2bError::PersonalTooLong);
        }

        let mut state = IV;
        let param = 0x0101_0000u64 ^ ((key.len() as u64) << 8) ^ digest_size as u64;
        state[0] ^= param;

        if !personal.is_empty() {
            let mut buf = [0u8; MAX_PERSONAL_SIZE];
            buf[..personal.len()].copy_from_slice(personal);
            state[6] ^= u64::from_le_bytes(buf[..8].try_into().unwrap());
            state[7] ^= u64::from_le_bytes(buf[8..].try_into().unwrap());
        }

        let mut ctx = Self {
            state,
            buffer: [0u8; BLOCK_SIZE],
            buffer_len: 0,
            t_low: 0,
            t_high: 0,
            digest_size,
        };

        if !key.is_empty() {
            let mut block = [0u8; BLOCK_SIZE];
            block[..key.len()].copy_from_slice(key);
            ctx.update(&block);
        }

        Ok(ctx)
    }

    fn increment_counter(&mut self, n: u64) {
        let (low, overflow) = self.t_low.overflowing_add(n);
        self.t_low = low;
        if overflow {
            self.t_high = self.t_high.wrapping_add(1);
        }
    }

    /// Absorbs `data`. An empty slice is a no-op.
    pub fn update(&mut self, mut data: &[u8]) {
        if data.is_empty() {
            return;
        }

        if self.buffer_len > 0 {
            let space = BLOCK_SIZE - self.buffer_len;
            let take = space.min(data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if data.is_empty() {
                return;
            }

            self.increment_counter(BLOCK_SIZE as u64);
            let block = self.buffer;
            computations::compress(&block, &mut self.state, self.t_low, self.t_high, false);
            self.buffer_len = 0;
        }

        while data.len() > BLOCK_SIZE {
            let block: [u8; BLOCK_SIZE] = data[..BLOCK_SIZE].try_into().unwrap();
            self.increment_counter(BLOCK_SIZE as u64);
            computations::compress(&block, &mut self.state, self.t_low, self.t_high, false);
            data = &data[BLOCK_SIZE..];
        }

        self.buffer[..data.len()].copy_from_slice(data);
        self.buffer_len = data.len();
    }

    /// The digest size this context was constructed with.
    pub fn digest_size(&self) -> usize {
        self.digest_size
    }

    /// Compresses the final block and returns a 64-byte array; only the
    /// first [`Blake2b::digest_size`] bytes are meaningful.
    pub fn finalize(mut self) -> [u8; MAX_DIGEST_SIZE] {
        self.increment_counter(self.buffer_len as u64);
        let mut block = [0u8; BLOCK_SIZE];
        block[..self.buffer_len].copy_from_slice(&self.buffer[..self.buffer_len]);
        computations::compress(&block, &mut self.state, self.t_low, self.t_high, true);

        let mut out = [0u8; MAX_DIGEST_SIZE];
        for (chunk, word) in out.chunks_mut(8).zip(self.state.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        out
    }
}

/// Computes an unkeyed BLAKE2b digest of `data` in one call.
pub fn blake2b(data: &[u8], digest_size: usize) -> Result<[u8; MAX_DIGEST_SIZE], Blake2bError> {
    let mut ctx = Blake2b::new(digest_size)?;
    ctx.update(data);
    Ok(ctx.finalize())
}
