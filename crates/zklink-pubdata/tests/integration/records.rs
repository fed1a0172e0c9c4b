use assert_matches::assert_matches;
use proptest::prelude::*;
use zklink_pubdata::{
    AccountId, CHUNK_BYTES, ChainId, Deposit, OpType, Operation, PackedAmount, PackedFee,
    PubdataError, PubdataOp, SubAccountId, TokenId, Transfer, chunks_for, pad,
    testing::{
        constants::{ADDRESS_ONES, ETH_TOKEN_ID},
        random_operation,
    },
    utils::serde::{Deserializable, Serializable},
};

use crate::seeded_rng;

#[test]
fn deposit_record() -> anyhow::Result<()> {
    let deposit = Deposit {
        chain_id: ChainId::new(1)?,
        account_id: AccountId::new(7),
        sub_account_id: SubAccountId::new(0),
        token_id: TokenId::new(ETH_TOKEN_ID),
        target_token_id: TokenId::new(ETH_TOKEN_ID),
        amount: 1_000_000_000_000_000_000,
        owner: ADDRESS_ONES,
    };

    let pubdata = deposit.to_pubdata();
    assert_eq!(pubdata.len(), 47);
    assert_eq!(&pubdata[..6], &[0x01, 0x01, 0x00, 0x00, 0x00, 0x07]);
    assert_eq!(&pubdata[27..], ADDRESS_ONES.as_bytes());

    let padded = deposit.to_padded_pubdata();
    assert_eq!(padded.len(), 56);
    assert_eq!(Deposit::from_pubdata(&padded)?, deposit);

    // the request variant hides the account id the operator assigns
    let request = deposit.to_request_pubdata();
    assert_eq!(&request[2..6], &[0; 4]);
    assert_eq!(&request[6..], &pubdata[6..]);
    Ok(())
}

#[test]
fn transfer_record_has_fixed_size() -> anyhow::Result<()> {
    let transfer = Transfer {
        from_account_id: AccountId::new(u32::MAX),
        from_sub_account_id: SubAccountId::new(u8::MAX),
        token_id: TokenId::new(u16::MAX),
        amount: PackedAmount::new(PackedAmount::MAX)?,
        to_account_id: AccountId::new(u32::MAX),
        to_sub_account_id: SubAccountId::new(u8::MAX),
        fee: PackedFee::new(u16::MAX),
    };
    assert_eq!(transfer.to_pubdata().len(), 34);
    assert_eq!(transfer.to_padded_pubdata().len(), 42);
    assert_eq!(Transfer::CHUNKS, 3);
    Ok(())
}

#[test]
fn aligned_input_gains_a_full_chunk() {
    let padded = pad(&[0xff; CHUNK_BYTES]);
    assert_eq!(padded.len(), 2 * CHUNK_BYTES);
    assert_eq!(chunks_for(CHUNK_BYTES), 2);
}

#[test]
fn random_operations_round_trip() {
    let mut rng = seeded_rng();
    for _ in 0..32 {
        for op_type in OpType::ALL {
            let op = random_operation(op_type, &mut rng);
            let pubdata = op.to_pubdata();

            assert_eq!(pubdata.len(), op_type.pubdata_size());
            assert_eq!(Operation::from_pubdata(&pubdata).unwrap(), op);
            assert_eq!(Operation::from_pubdata(&op.to_padded_pubdata()).unwrap(), op);
            assert_eq!(Operation::read_from_bytes(&op.to_bytes()).unwrap(), op);
        }
    }
}

#[test]
fn encoding_is_deterministic() {
    let mut rng = seeded_rng();
    for op_type in OpType::ALL {
        let op = random_operation(op_type, &mut rng);
        assert_eq!(op.to_pubdata(), op.to_pubdata());
        assert_eq!(op.to_padded_pubdata(), pad(&op.to_pubdata()));
    }
}

#[test]
fn out_of_range_chain_id_is_rejected() {
    let mut pubdata = random_operation(OpType::Deposit, &mut seeded_rng()).to_pubdata();
    pubdata[1] = 5;
    assert_matches!(Operation::from_pubdata(&pubdata), Err(PubdataError::MalformedField(_)));
    pubdata[1] = 0;
    assert_matches!(Operation::from_pubdata(&pubdata), Err(PubdataError::MalformedField(_)));
}

#[test]
fn non_zero_transfer_tail_is_rejected() {
    let mut pubdata = random_operation(OpType::Transfer, &mut seeded_rng()).to_pubdata();
    let last = pubdata.len() - 1;
    pubdata[last] = 1;
    assert_matches!(Operation::from_pubdata(&pubdata), Err(PubdataError::MalformedField(_)));
}

proptest! {
    #[test]
    fn padding_is_chunk_aligned(record in prop::collection::vec(any::<u8>(), 0..200)) {
        let padded = pad(&record);
        let added = padded.len() - record.len();

        prop_assert_eq!(padded.len() % CHUNK_BYTES, 0);
        prop_assert!((1..=CHUNK_BYTES).contains(&added));
        prop_assert_eq!(&padded[..record.len()], record.as_slice());
        prop_assert!(padded[record.len()..].iter().all(|byte| *byte == 0));
        prop_assert_eq!(chunks_for(record.len()), padded.len() / CHUNK_BYTES);
    }

    #[test]
    fn packed_amount_width_is_enforced(raw in any::<u64>()) {
        match PackedAmount::new(raw) {
            Ok(packed) => {
                prop_assert!(raw <= PackedAmount::MAX);
                prop_assert_eq!(packed.to_bytes().len(), PackedAmount::SERIALIZED_SIZE);
            },
            Err(err) => {
                prop_assert!(raw > PackedAmount::MAX);
                let out_of_range = matches!(err, PubdataError::ValueOutOfRange { bits: 40, .. });
                prop_assert!(out_of_range);
            },
        }
    }
}
