use super::{OpType, PubdataOp, impl_pubdata_serde};
use crate::{
    AccountId, Address, ChainId, PackedFee, SubAccountId, TokenId,
    codec::{PubdataReader, PubdataWriter},
    utils::serde::{ByteReader, ByteWriter, DeserializationError, Serializable},
};

// FORCE EXIT
// ================================================================================================

/// Withdraws the balance of a target account to its layer-1 address on behalf of an initiator
/// account, which pays the fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForceExit {
    pub chain_id: ChainId,
    pub initiator_account_id: AccountId,
    pub target_account_id: AccountId,
    pub target_sub_account_id: SubAccountId,
    pub token_id: TokenId,
    pub src_token_id: TokenId,
    pub fee_token_id: TokenId,
    pub amount: u128,
    pub fee: PackedFee,
    pub target: Address,
}

impl PubdataOp for ForceExit {
    const OP_TYPE: OpType = OpType::ForceExit;
    const SIZE: usize = 55;

    fn write_fields<W: ByteWriter>(&self, target: &mut W) {
        self.chain_id.write_into(target);
        self.initiator_account_id.write_into(target);
        self.target_account_id.write_into(target);
        self.target_sub_account_id.write_into(target);
        self.token_id.write_into(target);
        self.src_token_id.write_into(target);
        self.fee_token_id.write_into(target);
        target.write_u128_be(self.amount);
        self.fee.write_into(target);
        self.target.write_into(target);
    }

    fn read_fields<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        Ok(Self {
            chain_id: source.read_named("chain_id")?,
            initiator_account_id: source.read_named("initiator_account_id")?,
            target_account_id: source.read_named("target_account_id")?,
            target_sub_account_id: source.read_named("target_sub_account_id")?,
            token_id: source.read_named("token_id")?,
            src_token_id: source.read_named("src_token_id")?,
            fee_token_id: source.read_named("fee_token_id")?,
            amount: source.read_u128_be("amount")?,
            fee: source.read_named("fee")?,
            target: source.read_named("target")?,
        })
    }
}

impl_pubdata_serde!(ForceExit);
