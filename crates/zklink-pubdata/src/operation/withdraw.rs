use super::{OpType, PubdataOp, impl_pubdata_serde};
use crate::{
    AccountId, Address, ChainId, PackedFee, SubAccountId, TokenId,
    codec::{PubdataReader, PubdataWriter},
    utils::serde::{ByteReader, ByteWriter, DeserializationError, Serializable},
};

// WITHDRAW
// ================================================================================================

/// Moves tokens from a rollup account to a layer-1 address.
///
/// A non-zero `fast_withdraw_fee_rate` lets a third party pay the owner out ahead of block
/// finalization in exchange for the given fee rate (in basis points).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Withdraw {
    pub chain_id: ChainId,
    pub account_id: AccountId,
    pub sub_account_id: SubAccountId,
    /// Token paid out on layer 1.
    pub token_id: TokenId,
    /// Token debited on the rollup.
    pub src_token_id: TokenId,
    pub amount: u128,
    pub fee: PackedFee,
    pub owner: Address,
    pub nonce: u32,
    pub fast_withdraw_fee_rate: u16,
}

impl PubdataOp for Withdraw {
    const OP_TYPE: OpType = OpType::Withdraw;
    const SIZE: usize = 55;

    fn write_fields<W: ByteWriter>(&self, target: &mut W) {
        self.chain_id.write_into(target);
        self.account_id.write_into(target);
        self.sub_account_id.write_into(target);
        self.token_id.write_into(target);
        self.src_token_id.write_into(target);
        target.write_u128_be(self.amount);
        self.fee.write_into(target);
        self.owner.write_into(target);
        target.write_u32_be(self.nonce);
        target.write_u16_be(self.fast_withdraw_fee_rate);
    }

    fn read_fields<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        Ok(Self {
            chain_id: source.read_named("chain_id")?,
            account_id: source.read_named("account_id")?,
            sub_account_id: source.read_named("sub_account_id")?,
            token_id: source.read_named("token_id")?,
            src_token_id: source.read_named("src_token_id")?,
            amount: source.read_u128_be("amount")?,
            fee: source.read_named("fee")?,
            owner: source.read_named("owner")?,
            nonce: source.read_u32_be("nonce")?,
            fast_withdraw_fee_rate: source.read_u16_be("fast_withdraw_fee_rate")?,
        })
    }
}

impl_pubdata_serde!(Withdraw);
