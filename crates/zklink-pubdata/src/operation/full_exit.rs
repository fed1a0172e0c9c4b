use alloc::vec::Vec;

use super::{OpType, PubdataOp, impl_pubdata_serde};
use crate::{
    AccountId, Address, ChainId, SubAccountId, TokenId,
    codec::{PubdataReader, PubdataWriter},
    utils::serde::{ByteReader, ByteWriter, DeserializationError, Serializable},
};

// FULL EXIT
// ================================================================================================

/// Withdraws the whole balance of a token from a rollup account, requested on layer 1.
///
/// The requested amount is unknown when the layer-1 contract queues the request, so the queued
/// record carries a zero amount; see [FullExit::to_request_pubdata].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullExit {
    pub chain_id: ChainId,
    pub account_id: AccountId,
    pub sub_account_id: SubAccountId,
    pub owner: Address,
    pub token_id: TokenId,
    pub src_token_id: TokenId,
    /// Amount actually withdrawn when the rollup executed the request.
    pub amount: u128,
}

impl FullExit {
    /// Returns the record as queued by the layer-1 contract, with the amount zeroed.
    pub fn to_request_pubdata(&self) -> Vec<u8> {
        Self { amount: 0, ..*self }.to_pubdata()
    }
}

impl PubdataOp for FullExit {
    const OP_TYPE: OpType = OpType::FullExit;
    const SIZE: usize = 47;

    fn write_fields<W: ByteWriter>(&self, target: &mut W) {
        self.chain_id.write_into(target);
        self.account_id.write_into(target);
        self.sub_account_id.write_into(target);
        self.owner.write_into(target);
        self.token_id.write_into(target);
        self.src_token_id.write_into(target);
        target.write_u128_be(self.amount);
    }

    fn read_fields<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        Ok(Self {
            chain_id: source.read_named("chain_id")?,
            account_id: source.read_named("account_id")?,
            sub_account_id: source.read_named("sub_account_id")?,
            owner: source.read_named("owner")?,
            token_id: source.read_named("token_id")?,
            src_token_id: source.read_named("src_token_id")?,
            amount: source.read_u128_be("amount")?,
        })
    }
}

impl_pubdata_serde!(FullExit);
