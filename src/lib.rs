//! Streaming cryptographic hash functions for Nebula
//!
//! This crate provides incremental implementations of the hash algorithms
//! used throughout the Nebula ecosystem: MD5, SHA-1, the SHA-2 family
//! (SHA-224/256/384/512), the SHA-3 family (SHA3-224/256/384/512), and
//! BLAKE2 (BLAKE2b/BLAKE2s, including keyed mode).
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. All
//! implementations are dependency-free, explicit in their semantics, and
//! suitable for security-critical code.
//!
//! # Module overview
//!
//! - `hash`
//!   Streaming hash contexts, one submodule per algorithm. Each submodule
//!   exposes a context type (`new`/`update`/`finalize`) and a one-shot
//!   convenience function. `finalize` consumes the context by value, so a
//!   digest can only be produced once per context.
//!
//! # Design goals
//!
//! - No heap allocations: contexts buffer residual input in fixed-size
//!   arrays sized to each algorithm's block length.
//! - Minimal and explicit APIs: no trait objects, no runtime dispatch
//!   between algorithms.
//! - Stable, well-defined semantics matching the algorithms' published
//!   specifications (RFC 1321, FIPS 180-4, FIPS 202, RFC 7693).
//!
//! This crate does not provide a CLI, file I/O, key derivation functions,
//! HMAC, or SHAKE; it is a hashing primitive, not a cryptography toolkit.
//! It makes no side-channel-resistance or hardware-acceleration guarantees
//! beyond what each algorithm's specification itself provides.

pub mod hash;
