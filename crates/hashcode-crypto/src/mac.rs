//! # HMAC Computation
//!
//! Both entry points accept any byte sequence, including empty messages.
//! [`compute_with`] also accepts an empty key; rejecting one is the job of
//! [`SecretKey::new`](hashcode_core::SecretKey::new) at start-up.

use hashcode_core::{Digest, HashAlgorithm, SecretKey};
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;

type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;

/// Compute the MAC of `message` under the process secret.
///
/// Uses the algorithm the key was configured with.
pub fn compute(message: &[u8], key: &SecretKey) -> Digest {
    compute_with(key.algorithm(), message, key.expose_bytes())
}

/// Compute the MAC of `message` under raw `key` bytes with an explicit
/// algorithm.
pub fn compute_with(algorithm: HashAlgorithm, message: &[u8], key: &[u8]) -> Digest {
    tracing::trace!(%algorithm, message_len = message.len(), "computing MAC");
    let bytes = match algorithm {
        HashAlgorithm::Sha1 => mac_bytes::<HmacSha1>(key, message),
        HashAlgorithm::Sha256 => mac_bytes::<HmacSha256>(key, message),
    };
    Digest::new(algorithm, bytes)
}

fn mac_bytes<M: Mac + KeyInit>(key: &[u8], message: &[u8]) -> Vec<u8> {
    // HMAC hashes long keys and pads short ones, so no key length is invalid.
    let mut mac = match <M as KeyInit>::new_from_slice(key) {
        Ok(mac) => mac,
        Err(_) => unreachable!("HMAC accepts keys of any length"),
    };
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}
