use alloc::vec::Vec;

use zklink_pubdata::{
    Address, TokenId, codec::PubdataWriter, hash::keccak256, utils::serde::Serializable,
};

/// Length of the packed tuple hashed by [accept_hash].
pub const ACCEPT_PREIMAGE_SIZE: usize = Address::SERIALIZED_SIZE + 2 + 16 + 2 + 4;

/// Returns the hash under which the layer-1 contract records that an accepter fronted a fast
/// withdrawal to `receiver`.
///
/// The hash is `keccak256(receiver ++ token_id ++ amount ++ withdraw_fee_rate ++ nonce)` over the
/// tightly packed big-endian fields.
pub fn accept_hash(
    receiver: &Address,
    token_id: TokenId,
    amount: u128,
    withdraw_fee_rate: u16,
    nonce: u32,
) -> [u8; 32] {
    let mut preimage = Vec::with_capacity(ACCEPT_PREIMAGE_SIZE);
    receiver.write_into(&mut preimage);
    token_id.write_into(&mut preimage);
    preimage.write_u128_be(amount);
    preimage.write_u16_be(withdraw_fee_rate);
    preimage.write_u32_be(nonce);
    debug_assert_eq!(preimage.len(), ACCEPT_PREIMAGE_SIZE);

    keccak256(preimage)
}
