//! Elliptic-curve operation gateway over secp256k1
//!
//! This crate validates caller-supplied key, hash, signature and flag buffers
//! against strict size and format invariants, derives compressed public keys,
//! and produces and verifies compact ECDSA signatures over pre-hashed
//! messages. All curve arithmetic is delegated to the `k256` curve library
//! through a lazily-initialized, read-only context; sensitive intermediates
//! are zeroized on every exit path.
//!
//! Signing nonces come from an explicitly injected [`NonceStrategy`]
//! implementation; [`Rfc6979Nonce`] is the deterministic default.
//!
//! # Example
//! ```rust
//! use eckit_params::EC_FLAG_ECDSA;
//! use eckit_sign::{generate_private_key, public_key_from_private_key, sig_from_hash, sig_verify};
//! use rand::rngs::OsRng;
//!
//! let priv_key = generate_private_key(&mut OsRng);
//! let pub_key = public_key_from_private_key(priv_key.as_slice())?;
//!
//! let digest = [0x3a; 32];
//! let signature = sig_from_hash(priv_key.as_slice(), &digest, EC_FLAG_ECDSA)?;
//! sig_verify(&pub_key, &digest, EC_FLAG_ECDSA, &signature)?;
//! # Ok::<(), eckit_api::Error>(())
//! ```

mod context;
mod ecdsa;
mod scheme;
mod schnorr;

pub mod flags;
pub mod nonce;
pub mod ops;

pub use eckit_api::NonceStrategy;

pub use flags::Algorithm;
pub use nonce::{FixedNonce, Rfc6979Nonce};
pub use ops::{
    generate_private_key, private_key_verify, public_key_from_private_key, public_key_verify,
    sig_from_hash, sig_from_hash_with, sig_verify,
};
