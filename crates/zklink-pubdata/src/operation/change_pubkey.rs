use super::{OpType, PubdataOp, impl_pubdata_serde};
use crate::{
    AccountId, Address, ChainId, PackedFee, PubKeyHash, TokenId,
    codec::{PubdataReader, PubdataWriter},
    utils::serde::{ByteReader, ByteWriter, DeserializationError, Serializable},
};

// CHANGE PUBKEY
// ================================================================================================

/// Sets the rollup signing key of an account.
///
/// The layer-1 owner authorizes the change either by signature or through a CREATE2 derived
/// address; the authorization witness travels next to the pubdata, not inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangePubKey {
    pub chain_id: ChainId,
    pub account_id: AccountId,
    pub pub_key_hash: PubKeyHash,
    pub owner: Address,
    pub nonce: u32,
    pub fee_token_id: TokenId,
    pub fee: PackedFee,
}

impl PubdataOp for ChangePubKey {
    const OP_TYPE: OpType = OpType::ChangePubKey;
    const SIZE: usize = 54;

    fn write_fields<W: ByteWriter>(&self, target: &mut W) {
        self.chain_id.write_into(target);
        self.account_id.write_into(target);
        self.pub_key_hash.write_into(target);
        self.owner.write_into(target);
        target.write_u32_be(self.nonce);
        self.fee_token_id.write_into(target);
        self.fee.write_into(target);
    }

    fn read_fields<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        Ok(Self {
            chain_id: source.read_named("chain_id")?,
            account_id: source.read_named("account_id")?,
            pub_key_hash: source.read_named("pub_key_hash")?,
            owner: source.read_named("owner")?,
            nonce: source.read_u32_be("nonce")?,
            fee_token_id: source.read_named("fee_token_id")?,
            fee: source.read_named("fee")?,
        })
    }
}

impl_pubdata_serde!(ChangePubKey);
