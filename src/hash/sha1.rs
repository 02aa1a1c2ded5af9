//! SHA-1 (FIPS 180-4).
//!
//! Cryptographically broken for collision resistance (see SHAttered, 2017);
//! retained for interoperability with legacy formats (git object IDs, old
//! TLS certificates) that still require it.

pub mod computations;
pub mod core;

pub use self::core::{Sha1, sha1};

pub(crate) const BLOCK_SIZE: usize = 64;
pub(crate) const DIGEST_SIZE: usize = 20;

pub(crate) const INIT: [u32; 5] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

/// Round constants for the four 20-round phases.
pub(crate) const K: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];
