//! # MAC Digests
//!
//! Defines [`Digest`] and [`HashAlgorithm`]. A digest always carries the
//! algorithm that produced it so that its length can be checked and the
//! hash can be upgraded from SHA-1 to SHA-256 without changing callers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The hash function underneath the HMAC construction.
///
/// SHA-1 is the default and matches the deployed token format. SHA-256 is
/// the upgrade path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// HMAC-SHA1, 20-byte output.
    #[default]
    Sha1,
    /// HMAC-SHA256, 32-byte output.
    Sha256,
}

impl HashAlgorithm {
    /// Length in bytes of a MAC produced with this algorithm.
    pub fn output_len(&self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 => 32,
        }
    }

    /// Return the configuration identifier for this algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = CoreError;

    /// Parse `sha1` / `sha256`, case-insensitively. `sha-1` and `sha-256`
    /// are accepted as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha1" | "sha-1" => Ok(Self::Sha1),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            _ => Err(CoreError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// A MAC digest with its algorithm tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest {
    algorithm: HashAlgorithm,
    bytes: Vec<u8>,
}

impl Digest {
    /// Wrap raw MAC output produced with `algorithm`.
    pub fn new(algorithm: HashAlgorithm, bytes: Vec<u8>) -> Self {
        debug_assert_eq!(bytes.len(), algorithm.output_len());
        Self { algorithm, bytes }
    }

    /// The algorithm that produced this digest.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Return the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        to_hex(&self.bytes)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Encode bytes as lowercase hex, two characters per byte.
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_lengths() {
        assert_eq!(HashAlgorithm::Sha1.output_len(), 20);
        assert_eq!(HashAlgorithm::Sha256.output_len(), 32);
    }

    #[test]
    fn default_algorithm_is_sha1() {
        assert_eq!(HashAlgorithm::default(), HashAlgorithm::Sha1);
    }

    #[test]
    fn parse_algorithm_names() {
        assert_eq!("sha1".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha1);
        assert_eq!("SHA-1".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha1);
        assert_eq!(" sha256 ".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
        assert_eq!("Sha-256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
    }

    #[test]
    fn parse_unknown_algorithm_fails() {
        let err = "md5".parse::<HashAlgorithm>().unwrap_err();
        assert_eq!(err, CoreError::UnknownAlgorithm("md5".to_string()));
        assert!(err.to_string().contains("md5"));
    }

    #[test]
    fn display_matches_as_str() {
        for alg in [HashAlgorithm::Sha1, HashAlgorithm::Sha256] {
            assert_eq!(alg.to_string(), alg.as_str());
            assert_eq!(alg.as_str().parse::<HashAlgorithm>().unwrap(), alg);
        }
    }

    #[test]
    fn algorithm_serializes_lowercase() {
        let json = serde_json::to_string(&HashAlgorithm::Sha256).unwrap();
        assert_eq!(json, "\"sha256\"");
    }

    #[test]
    fn hex_is_lowercase_and_padded() {
        assert_eq!(to_hex(&[0x00, 0x0a, 0xff, 0xAB]), "000affab");
        assert_eq!(to_hex(&[]), "");
    }

    #[test]
    fn digest_accessors() {
        let d = Digest::new(HashAlgorithm::Sha1, vec![0xde; 20]);
        assert_eq!(d.algorithm(), HashAlgorithm::Sha1);
        assert_eq!(d.len(), 20);
        assert!(!d.is_empty());
        assert_eq!(d.as_bytes(), d.as_ref());
        assert_eq!(d.to_hex(), "de".repeat(20));
    }
}
