//! Shared curve context
//!
//! Every gateway operation acquires the process-wide [`CurveContext`] and
//! delegates its curve arithmetic through it. The context is initialized
//! lazily on first acquisition and shared read-only afterwards; acquisition
//! is fallible so the resource-exhaustion contract is preserved even though
//! the pure-Rust backend initializes infallibly in practice.

use std::sync::OnceLock;

use k256::ecdsa::hazmat::SignPrimitive;
use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{Signature, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{EncodedPoint, FieldBytes, NonZeroScalar, Scalar, SecretKey};
use zeroize::Zeroizing;

use eckit_api::{Error, Result};
use eckit_params::{
    EC_MESSAGE_HASH_SIZE, EC_PRIVATE_KEY_SIZE, EC_PUBLIC_KEY_SIZE, EC_SIGNATURE_SIZE,
    SECP256K1_ORDER,
};

// The wire-format constants must match the curve library's representations.
const _: () = assert!(core::mem::size_of::<FieldBytes>() == EC_PRIVATE_KEY_SIZE);
const _: () = assert!(core::mem::size_of::<FieldBytes>() == EC_MESSAGE_HASH_SIZE);
const _: () = assert!(core::mem::size_of::<FieldBytes>() + 1 == EC_PUBLIC_KEY_SIZE);
const _: () = assert!(2 * core::mem::size_of::<FieldBytes>() == EC_SIGNATURE_SIZE);

static CONTEXT: OnceLock<Option<CurveContext>> = OnceLock::new();

/// Acquire the shared curve context, initializing it on first use.
pub(crate) fn curve_ctx() -> Result<&'static CurveContext> {
    CONTEXT
        .get_or_init(CurveContext::init)
        .as_ref()
        .ok_or(Error::ContextUnavailable {
            context: "curve context initialization",
        })
}

/// Read-only handle to the secp256k1 curve operations.
pub struct CurveContext {
    /// Big-endian group order, fed to deterministic nonce generation.
    order: FieldBytes,
}

impl CurveContext {
    fn init() -> Option<Self> {
        // Startup invariant: the order constant must be a canonical scalar
        // encoding, i.e. n - 1 parses as a valid nonzero scalar.
        let mut probe = SECP256K1_ORDER;
        probe[EC_PRIVATE_KEY_SIZE - 1] -= 1;
        let parsed = NonZeroScalar::from_repr(FieldBytes::clone_from_slice(&probe));
        if bool::from(parsed.is_none()) {
            return None;
        }
        Some(Self {
            order: FieldBytes::clone_from_slice(&SECP256K1_ORDER),
        })
    }

    /// Big-endian group order bytes.
    pub(crate) fn order(&self) -> &FieldBytes {
        &self.order
    }

    /// Parse and validate a private key scalar (nonzero, below the order).
    pub(crate) fn parse_secret(&self, bytes: &[u8]) -> Result<SecretKey> {
        SecretKey::from_slice(bytes).map_err(|_| Error::InvalidKey {
            context: "private key scalar",
        })
    }

    /// Derive the compressed public point for a private key.
    pub(crate) fn derive_public(&self, secret: &SecretKey) -> EncodedPoint {
        secret.public_key().to_encoded_point(true)
    }

    /// Parse a SEC1-encoded public key.
    pub(crate) fn parse_public(&self, bytes: &[u8]) -> Result<VerifyingKey> {
        VerifyingKey::from_sec1_bytes(bytes).map_err(|_| Error::InvalidKey {
            context: "public key point",
        })
    }

    /// Parse a compact (r || s) signature.
    pub(crate) fn parse_signature(&self, bytes: &[u8]) -> Result<Signature> {
        Signature::from_slice(bytes).map_err(|_| Error::InvalidSignature {
            context: "compact signature",
        })
    }

    /// Sign a pre-hashed message with an explicit ephemeral nonce.
    ///
    /// The produced signature is normalized to its low-S form. The private
    /// scalar copy is zeroized before returning on every path.
    pub(crate) fn sign_prehashed(
        &self,
        secret: &SecretKey,
        nonce: &Scalar,
        prehash: &FieldBytes,
    ) -> Result<Signature> {
        let d = Zeroizing::new(*secret.to_nonzero_scalar());
        let (sig, _) =
            d.try_sign_prehashed(*nonce, prehash)
                .map_err(|_| Error::RandomGenerationError {
                    context: "ecdsa signing primitive",
                })?;
        Ok(sig.normalize_s().unwrap_or(sig))
    }

    /// Verify a signature over a pre-hashed message.
    pub(crate) fn verify_prehashed(
        &self,
        key: &VerifyingKey,
        prehash: &[u8],
        sig: &Signature,
    ) -> Result<()> {
        key.verify_prehash(prehash, sig)
            .map_err(|_| Error::AuthenticationFailed {
                context: "ecdsa signature",
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_initializes() {
        let ctx = curve_ctx().expect("context");
        assert_eq!(ctx.order().as_slice(), &SECP256K1_ORDER);
    }

    #[test]
    fn test_context_is_shared() {
        let a = curve_ctx().expect("context") as *const CurveContext;
        let b = curve_ctx().expect("context") as *const CurveContext;
        assert_eq!(a, b);
    }
}
