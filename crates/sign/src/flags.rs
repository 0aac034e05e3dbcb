//! Operation flag validation
//!
//! The caller-facing surface keeps the bitmask encoding; internally the
//! bitmask resolves to a closed [`Algorithm`] variant before any
//! cryptographic work happens.

use eckit_api::{Error, Result};
use eckit_params::{EC_FLAGS_ALL, EC_FLAG_ECDSA, EC_FLAG_SCHNORR};

use crate::ecdsa::EcdsaScheme;
use crate::scheme::Scheme;
use crate::schnorr::SchnorrScheme;

/// Signature algorithm family selected by the operation flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Ecdsa,
    Schnorr,
}

impl Algorithm {
    /// Resolve a flags bitmask to exactly one algorithm family.
    ///
    /// Any undefined bit, both family bits, or neither family bit is
    /// rejected.
    pub fn from_flags(flags: u32) -> Result<Self> {
        if flags & !EC_FLAGS_ALL != 0 {
            return Err(Error::InvalidParameter {
                context: "undefined operation flag bits",
            });
        }
        match flags {
            EC_FLAG_ECDSA => Ok(Self::Ecdsa),
            EC_FLAG_SCHNORR => Ok(Self::Schnorr),
            _ => Err(Error::InvalidParameter {
                context: "flags must select exactly one algorithm",
            }),
        }
    }

    pub(crate) fn scheme(self) -> &'static dyn Scheme {
        match self {
            Self::Ecdsa => &EcdsaScheme,
            Self::Schnorr => &SchnorrScheme,
        }
    }
}
