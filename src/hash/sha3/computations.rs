//! Keccak-f[1600] permutation over a flat 25-lane state, `state[x + 5*y]`.

use super::{NUM_ROUNDS, RC, RHO_OFFSETS};

fn theta(state: &mut [u64; 25]) {
    let mut c = [0u64; 5];
    for x in 0..5 {
        c[x] = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
    }

    let mut d = [0u64; 5];
    for x in 0..5 {
        d[x] = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
    }

    for y in 0..5 {
        for x in 0..5 {
            state[x + 5 * y] ^= d[x];
        }
    }
}

fn rho(state: &mut [u64; 25]) {
    for i in 0..25 {
        state[i] = state[i].rotate_left(RHO_OFFSETS[i]);
    }
}

fn pi(state: &[u64; 25]) -> [u64; 25] {
    let mut out = [0u64; 25];
    for y in 0..5 {
        for x in 0..5 {
            out[x + 5 * y] = state[(x + 3 * y) % 5 + 5 * x];
        }
    }
    out
}

fn chi(state: &[u64; 25]) -> [u64; 25] {
    let mut out = [0u64; 25];
    for y in 0..5 {
        for x in 0..5 {
            out[x + 5 * y] =
                state[x + 5 * y] ^ (!state[(x + 1) % 5 + 5 * y] & state[(x + 2) % 5 + 5 * y]);
        }
    }
    out
}

fn iota(state: &mut [u64; 25], round: usize) {
    state[0] ^= RC[round];
}

pub fn keccak_f1600(state: &mut [u64; 25]) {
    for round in 0..NUM_ROUNDS {
        theta(state);
        rho(state);
        *state = pi(state);
        *state = chi(state);
        iota(state, round);
    }
}

/// XORs a little-endian-interpreted rate-sized block into the state's first
/// `RATE / 8` lanes and permutes. `RATE` must be a multiple of 8.
pub fn absorb_block<const RATE: usize>(block: &[u8; RATE], state: &mut [u64; 25]) {
    for (lane, chunk) in state.iter_mut().zip(block.chunks_exact(8)) {
        *lane ^= u64::from_le_bytes(chunk.try_into().unwrap());
    }
    keccak_f1600(state);
}
