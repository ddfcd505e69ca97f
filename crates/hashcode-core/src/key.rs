//! # Shared Secret
//!
//! [`SecretKey`] holds the process-wide HMAC key. It is built once at
//! start-up and shared by reference with every request.
//!
//! The key is never printed: `Debug` is redacted and there is no `Display`
//! or `Serialize` impl. Key bytes are zeroized when the value is dropped.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::digest::HashAlgorithm;
use crate::error::CoreError;

/// The shared secret used to key every MAC, together with the hash
/// algorithm it is used with.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    bytes: Vec<u8>,
    #[zeroize(skip)]
    algorithm: HashAlgorithm,
}

impl SecretKey {
    /// Build a key from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptySecret`] if `bytes` is empty.
    pub fn new(bytes: impl Into<Vec<u8>>, algorithm: HashAlgorithm) -> Result<Self, CoreError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(CoreError::EmptySecret);
        }
        Ok(Self { bytes, algorithm })
    }

    /// Raw key bytes. Callers must not copy them beyond the current call.
    pub fn expose_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false` for a constructed key.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretKey")
            .field("bytes", &"[REDACTED]")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}
