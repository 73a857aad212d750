// src/crypto/mod.rs

//! Low-level crypto primitives.
//!
//! - [`primitive`] - hash primitive contract over the RustCrypto digests
//! - [`hmac`] - HMAC engine with precomputed pads
//! - [`kdf`] - PBKDF2 engine
//! - [`compare`] - accumulate-then-reduce comparator
//!
//! Per-algorithm HMAC aliases are defined in `aliases.rs`.

pub mod compare;
pub mod hmac;
pub mod kdf;
pub mod primitive;
