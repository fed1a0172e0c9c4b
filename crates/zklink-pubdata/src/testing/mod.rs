use alloc::vec::Vec;

use rand::Rng;

use crate::{
    AccountId, Address, ChainId, MAX_CHAIN_ID, MIN_CHAIN_ID, PackedAmount, PackedFee, PubKeyHash,
    SlotId, SubAccountId, TokenId,
    operation::{
        ChangePubKey, Deposit, ForceExit, FullExit, Noop, OpType, Operation, OrderMatching,
        OrderMatchingMaker, OrderMatchingTaker, Transfer, TransferToNew, Withdraw,
    },
};

pub mod constants;
use constants::{ADDRESS_ONES, ADDRESS_TWOS, ETH_TOKEN_ID, PUB_KEY_HASH};

// FIXED OPERATIONS
// ================================================================================================

/// Returns one operation of every type, in tag order.
pub fn operations() -> Vec<Operation> {
    let chain_id = ChainId::new(MIN_CHAIN_ID).expect("min chain id is valid");
    let eth = TokenId::new(ETH_TOKEN_ID);
    let amount = PackedAmount::new(1_000 << 5).expect("packed amount fits into 40 bits");

    vec![
        Noop.into(),
        Deposit {
            chain_id,
            account_id: AccountId::new(7),
            sub_account_id: SubAccountId::new(0),
            token_id: eth,
            target_token_id: eth,
            amount: 1_000_000_000_000_000_000,
            owner: ADDRESS_ONES,
        }
        .into(),
        TransferToNew {
            from_account_id: AccountId::new(7),
            from_sub_account_id: SubAccountId::new(0),
            token_id: eth,
            amount,
            to_account_id: AccountId::new(8),
            to_sub_account_id: SubAccountId::new(1),
            to: ADDRESS_TWOS,
            fee: PackedFee::new(3),
        }
        .into(),
        Withdraw {
            chain_id,
            account_id: AccountId::new(7),
            sub_account_id: SubAccountId::new(0),
            token_id: eth,
            src_token_id: eth,
            amount: 500,
            fee: PackedFee::new(1),
            owner: ADDRESS_ONES,
            nonce: 1,
            fast_withdraw_fee_rate: 50,
        }
        .into(),
        Transfer {
            from_account_id: AccountId::new(8),
            from_sub_account_id: SubAccountId::new(1),
            token_id: eth,
            amount,
            to_account_id: AccountId::new(7),
            to_sub_account_id: SubAccountId::new(0),
            fee: PackedFee::new(2),
        }
        .into(),
        FullExit {
            chain_id,
            account_id: AccountId::new(7),
            sub_account_id: SubAccountId::new(0),
            owner: ADDRESS_ONES,
            token_id: eth,
            src_token_id: eth,
            amount: 42,
        }
        .into(),
        ChangePubKey {
            chain_id,
            account_id: AccountId::new(7),
            pub_key_hash: PUB_KEY_HASH,
            owner: ADDRESS_ONES,
            nonce: 0,
            fee_token_id: eth,
            fee: PackedFee::new(0),
        }
        .into(),
        ForceExit {
            chain_id,
            initiator_account_id: AccountId::new(7),
            target_account_id: AccountId::new(8),
            target_sub_account_id: SubAccountId::new(1),
            token_id: eth,
            src_token_id: eth,
            fee_token_id: eth,
            amount: 123,
            fee: PackedFee::new(4),
            target: ADDRESS_TWOS,
        }
        .into(),
        OrderMatching {
            submitter_account_id: AccountId::new(9),
            taker: OrderMatchingTaker {
                account_id: AccountId::new(7),
                slot_id: SlotId::new(1),
                token_id: eth,
                amount,
                fee_ratio: 5,
            },
            maker: OrderMatchingMaker {
                account_id: AccountId::new(8),
                sub_account_id: SubAccountId::new(0),
                slot_id: SlotId::new(2),
                token_id: TokenId::new(2),
                amount,
                fee_ratio: 10,
            },
            fee_token_id: eth,
            fee: PackedFee::new(6),
            base_amount: 1_000,
            quote_amount: 2_000,
        }
        .into(),
    ]
}

// RANDOM OPERATIONS
// ================================================================================================

/// Returns a random operation of the given type with every field drawn from its full range.
pub fn random_operation<R: Rng>(op_type: OpType, rng: &mut R) -> Operation {
    match op_type {
        OpType::Noop => Noop.into(),
        OpType::Deposit => Deposit {
            chain_id: random_chain_id(rng),
            account_id: AccountId::new(rng.random()),
            sub_account_id: SubAccountId::new(rng.random()),
            token_id: TokenId::new(rng.random()),
            target_token_id: TokenId::new(rng.random()),
            amount: rng.random(),
            owner: random_address(rng),
        }
        .into(),
        OpType::TransferToNew => TransferToNew {
            from_account_id: AccountId::new(rng.random()),
            from_sub_account_id: SubAccountId::new(rng.random()),
            token_id: TokenId::new(rng.random()),
            amount: random_packed_amount(rng),
            to_account_id: AccountId::new(rng.random()),
            to_sub_account_id: SubAccountId::new(rng.random()),
            to: random_address(rng),
            fee: PackedFee::new(rng.random()),
        }
        .into(),
        OpType::Withdraw => Withdraw {
            chain_id: random_chain_id(rng),
            account_id: AccountId::new(rng.random()),
            sub_account_id: SubAccountId::new(rng.random()),
            token_id: TokenId::new(rng.random()),
            src_token_id: TokenId::new(rng.random()),
            amount: rng.random(),
            fee: PackedFee::new(rng.random()),
            owner: random_address(rng),
            nonce: rng.random(),
            fast_withdraw_fee_rate: rng.random(),
        }
        .into(),
        OpType::Transfer => Transfer {
            from_account_id: AccountId::new(rng.random()),
            from_sub_account_id: SubAccountId::new(rng.random()),
            token_id: TokenId::new(rng.random()),
            amount: random_packed_amount(rng),
            to_account_id: AccountId::new(rng.random()),
            to_sub_account_id: SubAccountId::new(rng.random()),
            fee: PackedFee::new(rng.random()),
        }
        .into(),
        OpType::FullExit => FullExit {
            chain_id: random_chain_id(rng),
            account_id: AccountId::new(rng.random()),
            sub_account_id: SubAccountId::new(rng.random()),
            owner: random_address(rng),
            token_id: TokenId::new(rng.random()),
            src_token_id: TokenId::new(rng.random()),
            amount: rng.random(),
        }
        .into(),
        OpType::ChangePubKey => ChangePubKey {
            chain_id: random_chain_id(rng),
            account_id: AccountId::new(rng.random()),
            pub_key_hash: PubKeyHash::new(rng.random()),
            owner: random_address(rng),
            nonce: rng.random(),
            fee_token_id: TokenId::new(rng.random()),
            fee: PackedFee::new(rng.random()),
        }
        .into(),
        OpType::ForceExit => ForceExit {
            chain_id: random_chain_id(rng),
            initiator_account_id: AccountId::new(rng.random()),
            target_account_id: AccountId::new(rng.random()),
            target_sub_account_id: SubAccountId::new(rng.random()),
            token_id: TokenId::new(rng.random()),
            src_token_id: TokenId::new(rng.random()),
            fee_token_id: TokenId::new(rng.random()),
            amount: rng.random(),
            fee: PackedFee::new(rng.random()),
            target: random_address(rng),
        }
        .into(),
        OpType::OrderMatching => {
            let sub_account_id = SubAccountId::new(rng.random());
            OrderMatching {
                submitter_account_id: AccountId::new(rng.random()),
                taker: OrderMatchingTaker {
                    account_id: AccountId::new(rng.random()),
                    slot_id: SlotId::new(rng.random()),
                    token_id: TokenId::new(rng.random()),
                    amount: random_packed_amount(rng),
                    fee_ratio: rng.random(),
                },
                maker: OrderMatchingMaker {
                    account_id: AccountId::new(rng.random()),
                    sub_account_id,
                    slot_id: SlotId::new(rng.random()),
                    token_id: TokenId::new(rng.random()),
                    amount: random_packed_amount(rng),
                    fee_ratio: rng.random(),
                },
                fee_token_id: TokenId::new(rng.random()),
                fee: PackedFee::new(rng.random()),
                base_amount: rng.random(),
                quote_amount: rng.random(),
            }
            .into()
        },
    }
}

pub fn random_chain_id<R: Rng>(rng: &mut R) -> ChainId {
    ChainId::new(rng.random_range(MIN_CHAIN_ID..=MAX_CHAIN_ID)).expect("chain id is in range")
}

pub fn random_address<R: Rng>(rng: &mut R) -> Address {
    Address::new(rng.random())
}

pub fn random_packed_amount<R: Rng>(rng: &mut R) -> PackedAmount {
    PackedAmount::new(rng.random_range(0..=PackedAmount::MAX)).expect("value is within 40 bits")
}
