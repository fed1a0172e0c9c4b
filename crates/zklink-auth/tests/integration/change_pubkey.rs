use assert_matches::assert_matches;
use zklink_auth::{
    AccountId, Address, ChangePubKeyMessage, ChangePubKeyWitness, Create2Data, Eip712Domain,
    PubKeyHash, SignerError, TypedData, WitnessError, build_create2_witness,
    build_signature_witness,
    hash::keccak256,
    testing::{EcdsaSigner, TruncatingSigner, recover_signer},
};
use zklink_pubdata::{ChangePubKey, ChainId, PackedFee, PubdataOp, TokenId};

// HELPERS
// ================================================================================================

const ZKLINK_CONTRACT: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
const HARDHAT_CHAIN_ID: u64 = 31337;

fn domain() -> Eip712Domain {
    Eip712Domain::zklink(HARDHAT_CHAIN_ID, ZKLINK_CONTRACT.parse().unwrap())
}

fn pub_key_hash() -> PubKeyHash {
    "0x823b747710c5bc9b8a47243f2c3d1805f1aa00c5".parse().unwrap()
}

fn signer() -> EcdsaSigner {
    let mut secret = [0u8; 32];
    secret[31] = 1;
    EcdsaSigner::new(secret)
}

// SIGNATURE WITNESS
// ================================================================================================

#[test]
fn test_signer_address() {
    let expected: Address = "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf".parse().unwrap();
    assert_eq!(signer().address(), expected);
}

#[cfg(not(feature = "async"))]
#[test]
fn signature_witness_recovers_to_the_owner() -> anyhow::Result<()> {
    let signer = signer();
    let account_id = AccountId::new(7);
    let nonce = 3;

    let witness = build_signature_witness(&domain(), pub_key_hash(), nonce, account_id, &signer)?;
    assert_eq!(witness.len(), 66);
    assert_eq!(witness[0], 0x00);
    assert!(witness[65] == 27 || witness[65] == 28);

    let typed_data = TypedData::new(
        domain(),
        ChangePubKeyMessage { pub_key_hash: pub_key_hash(), nonce, account_id },
    );
    assert_eq!(recover_signer(&typed_data, &witness[1..])?, signer.address());

    // the signature is bound to the nonce it was produced for
    let replayed = TypedData::new(
        domain(),
        ChangePubKeyMessage { pub_key_hash: pub_key_hash(), nonce: nonce + 1, account_id },
    );
    assert_ne!(recover_signer(&replayed, &witness[1..])?, signer.address());

    assert_matches!(ChangePubKeyWitness::from_bytes(&witness)?, ChangePubKeyWitness::Signature(_));
    Ok(())
}

#[cfg(not(feature = "async"))]
#[test]
fn signature_witness_is_deterministic() -> anyhow::Result<()> {
    let first = build_signature_witness(&domain(), pub_key_hash(), 0, AccountId::new(1), &signer())?;
    let second = build_signature_witness(&domain(), pub_key_hash(), 0, AccountId::new(1), &signer())?;
    assert_eq!(first, second);
    Ok(())
}

#[cfg(not(feature = "async"))]
#[test]
fn signer_failures_are_not_masked() {
    assert_matches!(
        build_signature_witness(&domain(), pub_key_hash(), 0, AccountId::new(1), &()),
        Err(WitnessError::DelegatedSignerFailure(SignerError::RejectedSignature(_)))
    );
    assert_matches!(
        build_signature_witness(&domain(), pub_key_hash(), 0, AccountId::new(1), &TruncatingSigner),
        Err(WitnessError::DelegatedSignerFailure(SignerError::Other { .. }))
    );
}

// CREATE2 WITNESS
// ================================================================================================

#[test]
fn create2_owner_authorizes_the_pubdata_record() -> anyhow::Result<()> {
    let creator: Address = "0xdeadbeef00000000000000000000000000000000".parse().unwrap();
    let salt = [0x5a; 32];
    let code_hash = keccak256(b"owner contract init code");

    let (witness, owner) = build_create2_witness(&pub_key_hash(), creator, salt, code_hash);
    assert_eq!(
        ChangePubKeyWitness::from_bytes(&witness)?,
        ChangePubKeyWitness::Create2(Create2Data { creator, salt, code_hash })
    );

    // the owner recorded in the pubdata is the one the witness proves, for any account and nonce
    for (account_id, nonce) in [(1, 0), (7, 3), (u32::MAX, u32::MAX)] {
        let op = ChangePubKey {
            chain_id: ChainId::new(1)?,
            account_id: AccountId::new(account_id),
            pub_key_hash: pub_key_hash(),
            owner,
            nonce,
            fee_token_id: TokenId::new(1),
            fee: PackedFee::new(0),
        };
        let pubdata = op.to_pubdata();
        assert_eq!(&pubdata[26..46], owner.as_bytes());

        let (_, again) = build_create2_witness(&pub_key_hash(), creator, salt, code_hash);
        assert_eq!(again, owner);
    }
    Ok(())
}

#[test]
fn unknown_scheme_is_rejected() {
    let (mut witness, _) = build_create2_witness(&pub_key_hash(), Address::ZERO, [0; 32], [0; 32]);
    witness[0] = 2;
    assert_matches!(
        ChangePubKeyWitness::from_bytes(&witness),
        Err(WitnessError::UnsupportedSchemeTag(2))
    );
}
