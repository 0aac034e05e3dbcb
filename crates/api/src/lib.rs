//! Public API types and traits for the eckit elliptic-curve gateway
//!
//! This crate provides the shared API surface for the eckit workspace:
//! the error taxonomy and result-code mapping, the nonce-strategy trait,
//! and the zeroizing secret-buffer type.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod security;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultCode};
pub use security::SecretBuffer;
pub use traits::NonceStrategy;
