use alloc::vec::Vec;

use super::{OpType, PubdataOp, impl_pubdata_serde};
use crate::{
    AccountId, Address, ChainId, SubAccountId, TokenId,
    codec::{PubdataReader, PubdataWriter},
    utils::serde::{ByteReader, ByteWriter, DeserializationError, Serializable},
};

// DEPOSIT
// ================================================================================================

/// Moves tokens from a layer-1 address into a rollup account.
///
/// The layer-1 contract queues deposits before the rollup knows which account receives them,
/// so the queued record carries [AccountId::UNASSIGNED]; see [Deposit::to_request_pubdata].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deposit {
    pub chain_id: ChainId,
    pub account_id: AccountId,
    pub sub_account_id: SubAccountId,
    pub token_id: TokenId,
    /// Token credited on the rollup; differs from `token_id` for mapped tokens.
    pub target_token_id: TokenId,
    pub amount: u128,
    pub owner: Address,
}

impl Deposit {
    /// Returns the record as queued by the layer-1 contract, with the account id zeroed.
    pub fn to_request_pubdata(&self) -> Vec<u8> {
        Self { account_id: AccountId::UNASSIGNED, ..*self }.to_pubdata()
    }
}

impl PubdataOp for Deposit {
    const OP_TYPE: OpType = OpType::Deposit;
    const SIZE: usize = 47;

    fn write_fields<W: ByteWriter>(&self, target: &mut W) {
        self.chain_id.write_into(target);
        self.account_id.write_into(target);
        self.sub_account_id.write_into(target);
        self.token_id.write_into(target);
        self.target_token_id.write_into(target);
        target.write_u128_be(self.amount);
        self.owner.write_into(target);
    }

    fn read_fields<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        Ok(Self {
            chain_id: source.read_named("chain_id")?,
            account_id: source.read_named("account_id")?,
            sub_account_id: source.read_named("sub_account_id")?,
            token_id: source.read_named("token_id")?,
            target_token_id: source.read_named("target_token_id")?,
            amount: source.read_u128_be("amount")?,
            owner: source.read_named("owner")?,
        })
    }
}

impl_pubdata_serde!(Deposit);
