//! # eckit
//!
//! A small elliptic-curve operation gateway over secp256k1: strict buffer
//! validation, compressed public-key derivation, deterministic ECDSA signing
//! and verification over pre-hashed messages, with guaranteed zeroization of
//! sensitive intermediates on every exit path.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! eckit = "0.2"
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`eckit-api`]: error taxonomy, result codes, strategy traits, secret
//!   buffers
//! - [`eckit-params`]: fixed sizes, flag bits and curve constants
//! - [`eckit-sign`]: the gateway operations themselves
//!
//! ## Example
//!
//! ```rust
//! use eckit::params::EC_FLAG_ECDSA;
//! use eckit::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let priv_key = generate_private_key(&mut OsRng);
//! let pub_key = public_key_from_private_key(priv_key.as_slice())?;
//!
//! // Callers hash their own messages; the gateway signs a 32-byte digest.
//! let digest = [0x51u8; 32];
//! let signature = sig_from_hash(priv_key.as_slice(), &digest, EC_FLAG_ECDSA)?;
//! sig_verify(&pub_key, &digest, EC_FLAG_ECDSA, &signature)?;
//! # Ok::<(), eckit::api::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use eckit_api as api;
pub use eckit_params as params;
pub use eckit_sign as sign;

/// Common imports for eckit users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultCode};

    // Re-export strategy and security types
    pub use crate::api::{NonceStrategy, SecretBuffer};

    // Re-export the gateway operations
    pub use crate::sign::{
        generate_private_key, private_key_verify, public_key_from_private_key, public_key_verify,
        sig_from_hash, sig_from_hash_with, sig_verify, Algorithm, FixedNonce, Rfc6979Nonce,
    };
}
