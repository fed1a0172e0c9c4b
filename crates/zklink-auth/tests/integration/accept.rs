use zklink_auth::{ACCEPT_PREIMAGE_SIZE, Address, TokenId, accept_hash, hash::keccak256};

#[test]
fn accept_hash_matches_packed_preimage() -> anyhow::Result<()> {
    let receiver: Address = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8".parse().unwrap();
    let amount = 1_000_000_000_000_000_000u128;

    let mut preimage = Vec::with_capacity(ACCEPT_PREIMAGE_SIZE);
    preimage.extend_from_slice(receiver.as_bytes());
    preimage.extend_from_slice(&2u16.to_be_bytes());
    preimage.extend_from_slice(&amount.to_be_bytes());
    preimage.extend_from_slice(&100u16.to_be_bytes());
    preimage.extend_from_slice(&9u32.to_be_bytes());
    assert_eq!(preimage.len(), ACCEPT_PREIMAGE_SIZE);

    assert_eq!(accept_hash(&receiver, TokenId::new(2), amount, 100, 9), keccak256(preimage));
    Ok(())
}

#[test]
fn accept_hash_separates_nonces() {
    let receiver = Address::new([0x42; 20]);
    let hashes: Vec<[u8; 32]> =
        (0..16).map(|nonce| accept_hash(&receiver, TokenId::new(1), 500, 0, nonce)).collect();
    for (i, hash) in hashes.iter().enumerate() {
        assert!(!hashes[i + 1..].contains(hash));
    }
}
