//! SHA-3 / Keccak (FIPS 202): sponge construction over Keccak-f[1600].
//!
//! SHA-2's width splits into two compressors; SHA-3's four variants are a
//! single sponge parameterized by rate and output size, so one generic type
//! covers all of them instead of four near-duplicate structs.

pub mod computations;
pub mod core;

pub use self::core::{Sha3, Sha3_224, Sha3_256, Sha3_384, Sha3_512, sha3_224, sha3_256, sha3_384, sha3_512};

pub(crate) const NUM_ROUNDS: usize = 24;

/// Rotation offsets for rho, flattened so `offset[x + 5*y]` matches
/// `state[x + 5*y]`. Values are taken mod 64 by `rotate_left` itself.
pub(crate) const RHO_OFFSETS: [u32; 25] = [
    0, 1, 190, 28, 91,
    36, 300, 6, 55, 276,
    3, 10, 171, 153, 231,
    105, 45, 15, 21, 136,
    210, 66, 253, 120, 78,
];

/// Round constants for iota, one per round of Keccak-f[1600].
pub(crate) const RC: [u64; NUM_ROUNDS] = [
    0x0000000000000001, 0x0000000000008082, 0x800000000000808a, 0x8000000080008000,
    0x000000000000808b, 0x0000000080000001, 0x8000000080008081, 0x8000000000008009,
    0x000000000000008a, 0x0000000000000088, 0x0000000080008009, 0x000000008000000a,
    0x000000008000808b, 0x800000000000008b, 0x8000000000008089, 0x8000000000008003,
    0x8000000000008002, 0x8000000000000080, 0x000000000000800a, 0x800000008000000a,
    0x8000000080008081, 0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
];
