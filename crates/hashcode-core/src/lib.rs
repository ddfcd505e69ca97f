//! # hashcode-core — Foundational Types for the Token Service
//!
//! Defines the value types shared by the MAC engine and the HTTP service.
//! Every other crate in the workspace depends on `hashcode-core`; it depends
//! on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **`SecretKey` never leaks.** Its `Debug` output is redacted and its
//!    bytes are zeroized on drop. There is no `Display` and no `Serialize`.
//!
//! 2. **`Digest` is algorithm-tagged.** The raw MAC output travels with the
//!    [`HashAlgorithm`] that produced it, so the expected length is always
//!    known.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `hashcode-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod digest;
pub mod error;
pub mod key;

pub use digest::{Digest, HashAlgorithm};
pub use error::CoreError;
pub use key::SecretKey;
