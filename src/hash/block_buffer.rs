//! Fixed-capacity residual buffer shared by every block-based hash engine.
//!
//! Every Merkle–Damgård-shaped compressor (MD5, SHA-1, SHA-2, BLAKE2b,
//! BLAKE2s) and the Keccak sponge (SHA-3) need the same thing between
//! `update` calls: somewhere to stage the trailing bytes that don't yet fill
//! a whole block. This type is that staging area. It never allocates and
//! never grows past `N` bytes.
//!
//! What differs per engine is *what happens* to a full block (overwrite and
//! compress for Merkle–Damgård, XOR and permute for the sponge) and how the
//! trailing partial block is padded at finalization — both stay with the
//! engine, not here.

pub(crate) struct BlockBuffer<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> BlockBuffer<N> {
    pub(crate) const fn new() -> Self {
        Self { buf: [0u8; N], len: 0 }
    }

    /// Bytes currently staged, always `< N`.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn residual(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Feed `input`, invoking `compress` once per full block produced.
    /// Whole blocks that don't need staging are passed to `compress`
    /// directly from the caller's slice, never copied into the residual.
    pub(crate) fn absorb(&mut self, mut input: &[u8], mut compress: impl FnMut(&[u8; N])) {
        if self.len > 0 {
            let space = N - self.len;
            let take = space.min(input.len());
            self.buf[self.len..self.len + take].copy_from_slice(&input[..take]);
            self.len += take;
            input = &input[take..];

            if self.len < N {
                return;
            }

            compress(&self.buf);
            self.len = 0;
        }

        while input.len() >= N {
            let block: &[u8; N] = input[..N].try_into().unwrap();
            compress(block);
            input = &input[N..];
        }

        self.buf[..input.len()].copy_from_slice(input);
        self.len = input.len();
    }
}
