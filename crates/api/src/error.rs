//! Error handling for elliptic-curve gateway operations

use core::fmt;

/// Primary error type for gateway operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A caller-supplied buffer has the wrong length
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A key failed the curve library's validity checks
    InvalidKey { context: &'static str },

    /// A signature could not be parsed or is non-canonical
    InvalidSignature { context: &'static str },

    /// An operation parameter (e.g. the flags bitmask) is invalid
    InvalidParameter { context: &'static str },

    /// A well-formed signature did not verify against the key and digest
    AuthenticationFailed { context: &'static str },

    /// The requested algorithm family is recognized but not implemented
    NotImplemented { feature: &'static str },

    /// The shared curve context could not be obtained
    ContextUnavailable { context: &'static str },

    /// Nonce generation failed during signing; not a caller mistake
    RandomGenerationError { context: &'static str },

    /// Serializing a curve-library value produced an unexpected encoding
    SerializationError { context: &'static str },
}

/// Result type for gateway operations
pub type Result<T> = core::result::Result<T, Error>;

/// Coarse result taxonomy matching the gateway's wire-level contract.
///
/// Every [`Error`] folds into exactly one non-`Ok` code; callers that only
/// need the original three-code view use [`Error::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    Ok,
    InvalidInput,
    NoMemory,
    InternalError,
}

impl Error {
    /// Fold this error into the coarse result taxonomy.
    ///
    /// Malformed inputs, invalid keys and genuine verification failures are
    /// deliberately indistinguishable at this level.
    pub fn code(&self) -> ResultCode {
        match self {
            Self::ContextUnavailable { .. } => ResultCode::NoMemory,
            Self::RandomGenerationError { .. } => ResultCode::InternalError,
            _ => ResultCode::InvalidInput,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::InvalidKey { context } => write!(f, "Invalid key: {}", context),
            Self::InvalidSignature { context } => write!(f, "Invalid signature: {}", context),
            Self::InvalidParameter { context } => write!(f, "Invalid parameter: {}", context),
            Self::AuthenticationFailed { context } => {
                write!(f, "Authentication failed: {}", context)
            }
            Self::NotImplemented { feature } => write!(f, "{} is not implemented", feature),
            Self::ContextUnavailable { context } => {
                write!(f, "Curve context unavailable: {}", context)
            }
            Self::RandomGenerationError { context } => {
                write!(f, "Nonce generation failed: {}", context)
            }
            Self::SerializationError { context } => write!(f, "Serialization error: {}", context),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_mapping() {
        assert_eq!(
            Error::InvalidLength {
                context: "private key",
                expected: 32,
                actual: 31
            }
            .code(),
            ResultCode::InvalidInput
        );
        assert_eq!(
            Error::InvalidKey { context: "scalar" }.code(),
            ResultCode::InvalidInput
        );
        assert_eq!(
            Error::AuthenticationFailed { context: "sig" }.code(),
            ResultCode::InvalidInput
        );
        assert_eq!(
            Error::NotImplemented { feature: "schnorr" }.code(),
            ResultCode::InvalidInput
        );
        assert_eq!(
            Error::ContextUnavailable { context: "init" }.code(),
            ResultCode::NoMemory
        );
        assert_eq!(
            Error::RandomGenerationError { context: "nonce" }.code(),
            ResultCode::InternalError
        );
    }

    #[test]
    fn test_display_includes_context() {
        let err = Error::InvalidLength {
            context: "message hash",
            expected: 32,
            actual: 16,
        };
        let rendered = err.to_string();
        assert!(rendered.contains("message hash"));
        assert!(rendered.contains("32"));
        assert!(rendered.contains("16"));
    }
}
