//! Schnorr signature family
//!
//! Recognized by the flag validator but not implemented; both operations
//! reject unconditionally before touching any key material.

use eckit_api::{Error, NonceStrategy, Result};
use eckit_params::EC_SIGNATURE_SIZE;

use crate::context::CurveContext;
use crate::scheme::Scheme;

pub(crate) struct SchnorrScheme;

impl Scheme for SchnorrScheme {
    fn sign(
        &self,
        _ctx: &CurveContext,
        _priv_key: &[u8],
        _message_hash: &[u8],
        _nonce: &dyn NonceStrategy,
    ) -> Result<[u8; EC_SIGNATURE_SIZE]> {
        Err(Error::NotImplemented {
            feature: "schnorr signing",
        })
    }

    fn verify(
        &self,
        _ctx: &CurveContext,
        _pub_key: &[u8],
        _message_hash: &[u8],
        _sig: &[u8],
    ) -> Result<()> {
        Err(Error::NotImplemented {
            feature: "schnorr verification",
        })
    }
}
