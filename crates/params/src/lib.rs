//! Constant parameters for the eckit elliptic-curve gateway
//!
//! This crate defines the fixed buffer sizes, operation flag bits, and curve
//! constants shared by the rest of the workspace. It is dependency-free and
//! always no_std compatible.

#![no_std]

pub mod secp256k1;

pub use secp256k1::*;
