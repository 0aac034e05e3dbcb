//! Nonce strategies for deterministic signing

use eckit_api::traits::NONCE_SIZE;
use eckit_api::{NonceStrategy, Result, SecretBuffer};
use eckit_params::{EC_MESSAGE_HASH_SIZE, EC_PRIVATE_KEY_SIZE};
use k256::FieldBytes;
use sha2::Sha256;

use crate::context::curve_ctx;
use crate::ops::check_len;

/// RFC 6979 deterministic nonce derivation over HMAC-SHA-256.
///
/// This is the default strategy: the nonce is a pure function of the private
/// key and the message digest, so signing never depends on an external
/// randomness source.
pub struct Rfc6979Nonce;

impl NonceStrategy for Rfc6979Nonce {
    fn generate(&self, priv_key: &[u8], message_hash: &[u8]) -> Result<SecretBuffer<NONCE_SIZE>> {
        check_len("private key", priv_key, EC_PRIVATE_KEY_SIZE)?;
        check_len("message hash", message_hash, EC_MESSAGE_HASH_SIZE)?;
        let ctx = curve_ctx()?;
        let k = rfc6979::generate_k::<Sha256, _>(
            FieldBytes::from_slice(priv_key),
            ctx.order(),
            FieldBytes::from_slice(message_hash),
            &[],
        );
        let mut candidate = [0u8; NONCE_SIZE];
        candidate.copy_from_slice(&k);
        Ok(SecretBuffer::new(candidate))
    }
}

/// Strategy that always returns the same nonce.
///
/// Reusing a nonce across two different digests leaks the private key, so
/// this must never sign more than one message per key. It exists for test
/// vectors and protocols that precompute their nonces.
pub struct FixedNonce(SecretBuffer<NONCE_SIZE>);

impl FixedNonce {
    pub fn new(nonce: [u8; NONCE_SIZE]) -> Self {
        Self(SecretBuffer::new(nonce))
    }
}

impl NonceStrategy for FixedNonce {
    fn generate(&self, _priv_key: &[u8], _message_hash: &[u8]) -> Result<SecretBuffer<NONCE_SIZE>> {
        Ok(self.0.clone())
    }
}
