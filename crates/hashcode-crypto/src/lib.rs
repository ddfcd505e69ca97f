//! # hashcode-crypto — MAC Engine
//!
//! Computes the keyed digest that the token service hands back to callers.
//! The engine is a pure function of `(message, key)`: no state, no I/O, no
//! error conditions. It is safe to call concurrently from any thread.
//!
//! HMAC is provided by the RustCrypto `hmac` crate over `sha1` (default) or
//! `sha2::Sha256`, selected by the key's [`HashAlgorithm`](hashcode_core::HashAlgorithm).

pub mod mac;

pub use mac::{compute, compute_with};
