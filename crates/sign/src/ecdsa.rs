//! ECDSA over secp256k1
//!
//! Signing uses an explicit ephemeral nonce obtained from the injected
//! strategy and delegates to the curve library's prehash primitives.
//! Signatures are produced in low-S form and non-canonical signatures are
//! rejected on verification.

use eckit_api::{Error, NonceStrategy, Result};
use eckit_params::EC_SIGNATURE_SIZE;
use k256::elliptic_curve::scalar::IsHigh;
use k256::elliptic_curve::{Field, PrimeField};
use k256::{FieldBytes, Scalar};
use zeroize::Zeroizing;

use crate::context::CurveContext;
use crate::scheme::Scheme;

pub(crate) struct EcdsaScheme;

impl Scheme for EcdsaScheme {
    fn sign(
        &self,
        ctx: &CurveContext,
        priv_key: &[u8],
        message_hash: &[u8],
        nonce: &dyn NonceStrategy,
    ) -> Result<[u8; EC_SIGNATURE_SIZE]> {
        // An out-of-range key is a caller mistake; everything that fails
        // after this point is a nonce-generation failure.
        let secret = ctx.parse_secret(priv_key)?;

        let candidate =
            nonce
                .generate(priv_key, message_hash)
                .map_err(|_| Error::RandomGenerationError {
                    context: "nonce strategy",
                })?;
        let k = Option::<Scalar>::from(Scalar::from_repr(FieldBytes::clone_from_slice(
            candidate.as_slice(),
        )))
        .filter(|k| !bool::from(k.is_zero()))
        .map(Zeroizing::new)
        .ok_or(Error::RandomGenerationError {
            context: "nonce candidate out of range",
        })?;

        let prehash = FieldBytes::clone_from_slice(message_hash);
        let sig = ctx.sign_prehashed(&secret, &k, &prehash)?;

        // Compact serialization cannot fail once the signature exists.
        let mut out = [0u8; EC_SIGNATURE_SIZE];
        out.copy_from_slice(&sig.to_bytes());
        Ok(out)
    }

    fn verify(
        &self,
        ctx: &CurveContext,
        pub_key: &[u8],
        message_hash: &[u8],
        sig: &[u8],
    ) -> Result<()> {
        let key = ctx.parse_public(pub_key)?;
        let parsed = ctx.parse_signature(sig)?;
        if bool::from(parsed.s().is_high()) {
            return Err(Error::InvalidSignature {
                context: "upper-half s value",
            });
        }
        ctx.verify_prehashed(&key, message_hash, &parsed)
    }
}
