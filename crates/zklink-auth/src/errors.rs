use alloc::{boxed::Box, string::String};

use thiserror::Error;
use zklink_pubdata::utils::serde::DeserializationError;

// WITNESS ERROR
// ================================================================================================

#[derive(Debug, Error)]
pub enum WitnessError {
    #[error("witness scheme tag {0} is not supported, expected 0 (signature) or 1 (create2)")]
    UnsupportedSchemeTag(u8),
    #[error("signer failed to provide a change pubkey signature")]
    DelegatedSignerFailure(#[source] SignerError),
    #[error("failed to decode witness")]
    MalformedWitness(#[source] DeserializationError),
}

impl From<DeserializationError> for WitnessError {
    fn from(err: DeserializationError) -> Self {
        Self::MalformedWitness(err)
    }
}

// SIGNER ERROR
// ================================================================================================

#[derive(Debug, Error)]
pub enum SignerError {
    #[error("signature rejected: {0}")]
    RejectedSignature(String),
    /// Custom error variant for implementors of the
    /// [`TypedDataSigner`](crate::TypedDataSigner) trait.
    #[error("{error_msg}")]
    Other {
        error_msg: Box<str>,
        // thiserror will return this when calling Error::source on SignerError.
        source: Option<Box<dyn core::error::Error + Send + Sync + 'static>>,
    },
}

impl SignerError {
    /// Creates a custom error using the [`SignerError::Other`] variant from an error message.
    pub fn other(message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self::Other { error_msg: message.into(), source: None }
    }

    /// Creates a custom error using the [`SignerError::Other`] variant from an error message and
    /// a source error.
    pub fn other_with_source(
        message: impl Into<String>,
        source: impl core::error::Error + Send + Sync + 'static,
    ) -> Self {
        let message: String = message.into();
        Self::Other {
            error_msg: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
