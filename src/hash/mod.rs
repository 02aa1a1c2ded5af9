//! Streaming cryptographic hash functions.
//!
//! Every algorithm in this module follows the same shape: a context type
//! with `new`/`update`/`finalize`, plus a one-shot convenience function for
//! callers who already have the whole message in memory. `finalize` takes
//! `self` by value, so a context cannot be driven after it has produced a
//! digest; the borrow checker enforces this at compile time rather than at
//! runtime.

pub(crate) mod block_buffer;

pub mod blake2b;
pub mod blake2s;
pub mod md5;
pub mod sha1;
pub mod sha2;
pub mod sha3;

pub use blake2b::{Blake2b, Blake2bError, blake2b};
pub use blake2s::{Blake2s, Blake2sError, blake2s};
pub use md5::md5;
pub use sha1::sha1;
pub use sha2::{sha224, sha256, sha384, sha512};
pub use sha3::{sha3_224, sha3_256, sha3_384, sha3_512};
