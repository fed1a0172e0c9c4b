#[cfg(feature = "async")]
use alloc::boxed::Box;
use alloc::{string::ToString, vec::Vec};

use winter_maybe_async::*;

use crate::{SignerError, eip712::TypedData};

// TYPED DATA SIGNER
// ================================================================================================

/// Defines a signer of EIP-712 typed data, usually the wallet of the account owner.
///
/// With the `async` feature enabled the signer is asynchronous, which lets implementations
/// reach a remote wallet.
#[maybe_async_trait]
pub trait TypedDataSigner {
    /// Signs the [TypedData::signing_hash] of `typed_data` and returns the 65-byte `r ++ s ++ v`
    /// signature.
    ///
    /// # Errors
    /// Returns an error if the signer refuses to sign or does not hold the required key.
    #[maybe_async]
    fn sign_typed_data(&self, typed_data: &TypedData) -> Result<Vec<u8>, SignerError>;
}

#[maybe_async_trait]
impl TypedDataSigner for () {
    #[maybe_async]
    fn sign_typed_data(&self, _typed_data: &TypedData) -> Result<Vec<u8>, SignerError> {
        Err(SignerError::RejectedSignature(
            "default signer cannot provide signatures".to_string(),
        ))
    }
}
