//! MD5 round logic.
//!
//! Isolated from the public streaming interface for the same reason the
//! SHA-2 compressor keeps its rounds in a sibling `computations` module:
//! it makes the round structure easy to check against the specification
//! without the buffering plumbing in the way.

use super::{K, S};

#[inline(always)]
fn f(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | ((!b) & d)
}

#[inline(always)]
fn g(b: u32, c: u32, d: u32) -> u32 {
    (b & d) | (c & (!d))
}

#[inline(always)]
fn h(b: u32, c: u32, d: u32) -> u32 {
    b ^ c ^ d
}

#[inline(always)]
fn i(b: u32, c: u32, d: u32) -> u32 {
    c ^ (b | (!d))
}

/// Runs all 64 rounds over one 512-bit block, folding the result into
/// `state` (modular addition, as MD5's Davies–Meyer step requires).
pub fn compress(block: &[u8; 64], state: &mut [u32; 4]) {
    let mut x = [0u32; 16];
    for (slot, chunk) in x.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_le_bytes(chunk.try_into().unwrap());
    }

    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];

    for idx in 0..64 {
        let (f_val, g_idx) = match idx {
            0..=15 => (f(b, c, d), idx),
            16..=31 => (g(b, c, d), (5 * idx + 1) % 16),
            32..=47 => (h(b, c, d), (3 * idx + 5) % 16),
            _ => (i(b, c, d), (7 * idx) % 16),
        };

        let temp = d;
        d = c;
        c = b;
        b = b.wrapping_add(
            a.wrapping_add(f_val)
                .wrapping_add(K[idx])
                .wrapping_add(x[g_idx])
                .rotate_left(S[idx]),
        );
        a = temp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}
