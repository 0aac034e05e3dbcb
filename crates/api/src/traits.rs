//! Strategy traits for gateway operations
//!
//! The signer takes its nonce source as an explicit parameter instead of a
//! process-wide hook, so determinism is a property of the injected strategy
//! and tests can substitute a fixed or failing one.

use crate::error::Result;
use crate::security::SecretBuffer;

/// Size in bytes of an ephemeral nonce candidate
pub const NONCE_SIZE: usize = 32;

/// Source of ephemeral signing nonces
///
/// # Security Requirements
///
/// - Implementations must be deterministic: the same `(priv_key,
///   message_hash)` pair must always produce the same candidate.
/// - Implementations must be safe for concurrent invocation; the gateway
///   shares a strategy across threads without synchronization.
/// - The returned candidate is treated as secret material and is zeroized
///   by the caller after use.
pub trait NonceStrategy: Send + Sync {
    /// Derive the ephemeral nonce candidate for one signing operation.
    ///
    /// `priv_key` and `message_hash` are the exact buffers passed to the
    /// signing operation, already length-validated by the gateway. The
    /// candidate must encode a big-endian scalar; the gateway rejects
    /// candidates that are zero or not below the group order.
    fn generate(&self, priv_key: &[u8], message_hash: &[u8]) -> Result<SecretBuffer<NONCE_SIZE>>;
}
