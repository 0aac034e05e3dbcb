//! Signature scheme dispatch interface
//!
//! One implementation per [`Algorithm`](crate::Algorithm) variant. Inputs
//! reaching a scheme are already length-validated by the gateway; schemes own
//! the per-family cryptographic work and error classification.

use eckit_api::{NonceStrategy, Result};
use eckit_params::EC_SIGNATURE_SIZE;

use crate::context::CurveContext;

pub(crate) trait Scheme: Send + Sync {
    /// Produce a compact signature over a pre-hashed message.
    fn sign(
        &self,
        ctx: &CurveContext,
        priv_key: &[u8],
        message_hash: &[u8],
        nonce: &dyn NonceStrategy,
    ) -> Result<[u8; EC_SIGNATURE_SIZE]>;

    /// Check a compact signature against a public key and a pre-hashed
    /// message.
    fn verify(
        &self,
        ctx: &CurveContext,
        pub_key: &[u8],
        message_hash: &[u8],
        sig: &[u8],
    ) -> Result<()>;
}
