use super::{OpType, PubdataOp, impl_pubdata_serde};
use crate::{
    AccountId, PackedAmount, PackedFee, SlotId, SubAccountId, TokenId,
    codec::{PubdataReader, PubdataWriter},
    utils::serde::{ByteReader, ByteWriter, Deserializable, DeserializationError, Serializable},
};

// ORDER MATCHING
// ================================================================================================

/// Settles a taker order against a maker order, submitted by a third account which collects
/// the fee.
///
/// The taker's sub-account is not part of the record: taker and maker must trade from the same
/// sub-account, so the maker's `sub_account_id` applies to both. The encoder does not check this;
/// callers are responsible for pairing orders of the same sub-account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderMatching {
    pub submitter_account_id: AccountId,
    pub taker: OrderMatchingTaker,
    pub maker: OrderMatchingMaker,
    pub fee_token_id: TokenId,
    pub fee: PackedFee,
    pub base_amount: u128,
    pub quote_amount: u128,
}

/// The taker side of an [OrderMatching].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderMatchingTaker {
    pub account_id: AccountId,
    pub slot_id: SlotId,
    pub token_id: TokenId,
    pub amount: PackedAmount,
    pub fee_ratio: u8,
}

impl OrderMatchingTaker {
    pub const SERIALIZED_SIZE: usize = 13;
}

/// The maker side of an [OrderMatching].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderMatchingMaker {
    pub account_id: AccountId,
    pub sub_account_id: SubAccountId,
    pub slot_id: SlotId,
    pub token_id: TokenId,
    pub amount: PackedAmount,
    pub fee_ratio: u8,
}

impl OrderMatchingMaker {
    pub const SERIALIZED_SIZE: usize = 14;
}

impl PubdataOp for OrderMatching {
    const OP_TYPE: OpType = OpType::OrderMatching;
    const SIZE: usize = 1
        + AccountId::SERIALIZED_SIZE
        + OrderMatchingTaker::SERIALIZED_SIZE
        + OrderMatchingMaker::SERIALIZED_SIZE
        + TokenId::SERIALIZED_SIZE
        + PackedFee::SERIALIZED_SIZE
        + 2 * core::mem::size_of::<u128>();

    fn write_fields<W: ByteWriter>(&self, target: &mut W) {
        self.submitter_account_id.write_into(target);
        self.taker.write_into(target);
        self.maker.write_into(target);
        self.fee_token_id.write_into(target);
        self.fee.write_into(target);
        target.write_u128_be(self.base_amount);
        target.write_u128_be(self.quote_amount);
    }

    fn read_fields<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        Ok(Self {
            submitter_account_id: source.read_named("submitter_account_id")?,
            taker: source.read_named("taker")?,
            maker: source.read_named("maker")?,
            fee_token_id: source.read_named("fee_token_id")?,
            fee: source.read_named("fee")?,
            base_amount: source.read_u128_be("base_amount")?,
            quote_amount: source.read_u128_be("quote_amount")?,
        })
    }
}

impl_pubdata_serde!(OrderMatching);

// SERIALIZATION
// ================================================================================================

impl Serializable for OrderMatchingTaker {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        self.account_id.write_into(target);
        self.slot_id.write_into(target);
        self.token_id.write_into(target);
        self.amount.write_into(target);
        target.write_u8(self.fee_ratio);
    }

    fn get_size_hint(&self) -> usize {
        Self::SERIALIZED_SIZE
    }
}

impl Deserializable for OrderMatchingTaker {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        Ok(Self {
            account_id: source.read_named("account_id")?,
            slot_id: source.read_named("slot_id")?,
            token_id: source.read_named("token_id")?,
            amount: source.read_named("amount")?,
            fee_ratio: source.read_u8_be("fee_ratio")?,
        })
    }
}

impl Serializable for OrderMatchingMaker {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        self.account_id.write_into(target);
        self.sub_account_id.write_into(target);
        self.slot_id.write_into(target);
        self.token_id.write_into(target);
        self.amount.write_into(target);
        target.write_u8(self.fee_ratio);
    }

    fn get_size_hint(&self) -> usize {
        Self::SERIALIZED_SIZE
    }
}

impl Deserializable for OrderMatchingMaker {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        Ok(Self {
            account_id: source.read_named("account_id")?,
            sub_account_id: source.read_named("sub_account_id")?,
            slot_id: source.read_named("slot_id")?,
            token_id: source.read_named("token_id")?,
            amount: source.read_named("amount")?,
            fee_ratio: source.read_u8_be("fee_ratio")?,
        })
    }
}
