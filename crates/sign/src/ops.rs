//! Public gateway operations
//!
//! Each operation validates argument shape locally, acquires the shared
//! curve context, delegates the cryptographic work, and returns with no
//! retained state. Either the full output value is produced or an error is
//! returned with no output; partial results are never observable.

use eckit_api::{Error, NonceStrategy, Result, SecretBuffer};
use eckit_params::{
    EC_MESSAGE_HASH_SIZE, EC_PRIVATE_KEY_SIZE, EC_PUBLIC_KEY_SIZE, EC_SIGNATURE_SIZE,
};
use k256::SecretKey;
use rand::{CryptoRng, RngCore};

use crate::context::curve_ctx;
use crate::flags::Algorithm;
use crate::nonce::Rfc6979Nonce;

pub(crate) fn check_len(context: &'static str, bytes: &[u8], expected: usize) -> Result<()> {
    if bytes.len() == expected {
        Ok(())
    } else {
        Err(Error::InvalidLength {
            context,
            expected,
            actual: bytes.len(),
        })
    }
}

/// Check that `priv_key` is a valid private key scalar.
///
/// Succeeds only for a buffer of exactly 32 bytes holding a nonzero scalar
/// below the group order. The buffer is read, never modified.
pub fn private_key_verify(priv_key: &[u8]) -> Result<()> {
    check_len("private key", priv_key, EC_PRIVATE_KEY_SIZE)?;
    let ctx = curve_ctx()?;
    ctx.parse_secret(priv_key).map(|_| ())
}

/// Derive the compressed public key for a private key.
///
/// The transient secret scalar is zeroized on every path; on failure no
/// output is produced at all.
pub fn public_key_from_private_key(priv_key: &[u8]) -> Result<[u8; EC_PUBLIC_KEY_SIZE]> {
    check_len("private key", priv_key, EC_PRIVATE_KEY_SIZE)?;
    let ctx = curve_ctx()?;
    let secret = ctx.parse_secret(priv_key)?;
    let point = ctx.derive_public(&secret);
    let encoded = point.as_bytes();
    if encoded.len() != EC_PUBLIC_KEY_SIZE {
        return Err(Error::SerializationError {
            context: "compressed public key",
        });
    }
    let mut out = [0u8; EC_PUBLIC_KEY_SIZE];
    out.copy_from_slice(encoded);
    Ok(out)
}

/// Check that `pub_key` is a well-formed compressed public key.
pub fn public_key_verify(pub_key: &[u8]) -> Result<()> {
    check_len("public key", pub_key, EC_PUBLIC_KEY_SIZE)?;
    let ctx = curve_ctx()?;
    ctx.parse_public(pub_key).map(|_| ())
}

/// Sign a pre-hashed message with the default deterministic nonce strategy.
///
/// See [`sig_from_hash_with`].
pub fn sig_from_hash(
    priv_key: &[u8],
    message_hash: &[u8],
    flags: u32,
) -> Result<[u8; EC_SIGNATURE_SIZE]> {
    sig_from_hash_with(priv_key, message_hash, flags, &Rfc6979Nonce)
}

/// Sign a pre-hashed message with an explicit nonce strategy.
///
/// Argument shape is validated before any cryptographic work: both buffers
/// must have their exact sizes and `flags` must select exactly one
/// algorithm family. The Schnorr family is recognized but unimplemented and
/// always rejected. For ECDSA, an invalid key scalar is reported as a
/// caller error while a nonce-generation failure is reported as an internal
/// error distinct from any caller mistake.
pub fn sig_from_hash_with(
    priv_key: &[u8],
    message_hash: &[u8],
    flags: u32,
    nonce: &dyn NonceStrategy,
) -> Result<[u8; EC_SIGNATURE_SIZE]> {
    check_len("private key", priv_key, EC_PRIVATE_KEY_SIZE)?;
    check_len("message hash", message_hash, EC_MESSAGE_HASH_SIZE)?;
    let algorithm = Algorithm::from_flags(flags)?;
    let ctx = curve_ctx()?;
    algorithm.scheme().sign(ctx, priv_key, message_hash, nonce)
}

/// Verify a compact signature against a public key and a pre-hashed message.
///
/// Any failure — malformed key, malformed or non-canonical signature, or a
/// genuine mismatch — means the signature must not be trusted.
pub fn sig_verify(pub_key: &[u8], message_hash: &[u8], flags: u32, sig: &[u8]) -> Result<()> {
    check_len("public key", pub_key, EC_PUBLIC_KEY_SIZE)?;
    check_len("message hash", message_hash, EC_MESSAGE_HASH_SIZE)?;
    check_len("signature", sig, EC_SIGNATURE_SIZE)?;
    let algorithm = Algorithm::from_flags(flags)?;
    let ctx = curve_ctx()?;
    algorithm.scheme().verify(ctx, pub_key, message_hash, sig)
}

/// Generate a uniformly random valid private key.
///
/// The key is returned in a zeroizing buffer; callers own its lifetime.
pub fn generate_private_key<R: CryptoRng + RngCore>(
    rng: &mut R,
) -> SecretBuffer<EC_PRIVATE_KEY_SIZE> {
    let secret = SecretKey::random(rng);
    let mut out = [0u8; EC_PRIVATE_KEY_SIZE];
    out.copy_from_slice(&secret.to_bytes());
    SecretBuffer::new(out)
}
