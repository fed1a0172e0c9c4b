use miden_crypto::utils::DeserializationError;
use thiserror::Error;

use crate::{MAX_CHAIN_ID, MIN_CHAIN_ID};

// PUBDATA ERROR
// ================================================================================================

#[derive(Debug, Error)]
pub enum PubdataError {
    #[error("value {value} of field `{field}` does not fit into {bits} bits")]
    ValueOutOfRange {
        field: &'static str,
        value: u128,
        bits: u32,
    },
    #[error("chain id {0} is outside of the supported range {min}..={max}", min = MIN_CHAIN_ID, max = MAX_CHAIN_ID)]
    ChainIdOutOfRange(u8),
    #[error("failed to decode pubdata")]
    MalformedField(#[source] DeserializationError),
    #[error("`{0}` is not a known operation type")]
    UnknownOpType(u8),
    #[error("padding byte at offset {offset} must be zero")]
    NonZeroPadding { offset: usize },
    #[error("amount {0} cannot be packed into a 40-bit float without losing precision")]
    AmountNotPackable(u128),
    #[error("fee {0} cannot be packed into a 16-bit float without losing precision")]
    FeeNotPackable(u128),
}

impl From<DeserializationError> for PubdataError {
    fn from(err: DeserializationError) -> Self {
        Self::MalformedField(err)
    }
}
