use assert_matches::assert_matches;
use rand::Rng;
use zklink_pubdata::{
    CHUNK_BYTES, OpType, Operation, PubdataError,
    block::StoredBlockInfo,
    hash::keccak256,
    testing::{operations, random_operation},
};

use crate::seeded_rng;

#[test]
fn random_block_stream_round_trips() {
    let mut rng = seeded_rng();
    let ops: Vec<Operation> = (0..64)
        .map(|_| {
            let op_type = OpType::ALL[rng.random_range(0..OpType::ALL.len())];
            random_operation(op_type, &mut rng)
        })
        .collect();

    let stream: Vec<u8> = ops.iter().flat_map(Operation::to_padded_pubdata).collect();
    let chunks: usize = ops.iter().map(Operation::chunks).sum();
    assert_eq!(stream.len(), chunks * CHUNK_BYTES);
    assert_eq!(Operation::decode_stream(&stream).unwrap(), ops);
}

#[test]
fn padding_offset_is_relative_to_the_stream() {
    let ops = operations();
    let mut stream: Vec<u8> = ops.iter().flat_map(Operation::to_padded_pubdata).collect();
    let first_len = ops[0].to_padded_pubdata().len();
    let second_len = ops[1].to_padded_pubdata().len();

    // last padding byte of the second record
    let offset = first_len + second_len - 1;
    stream[offset] = 0xff;
    assert_matches!(
        Operation::decode_stream(&stream),
        Err(PubdataError::NonZeroPadding { offset: o }) if o == offset
    );
}

#[test]
fn empty_stream_has_no_operations() {
    assert!(Operation::decode_stream(&[]).unwrap().is_empty());
}

#[test]
fn commitment_hash_covers_every_field() {
    let genesis = StoredBlockInfo::genesis();
    let mut next = genesis;
    next.block_number = 1;
    next.timestamp = 1_700_000_000;

    assert_ne!(genesis.hash(), next.hash());
    assert_eq!(genesis.hash(), keccak256(zklink_pubdata::utils::serde::Serializable::to_bytes(&genesis)));
}
