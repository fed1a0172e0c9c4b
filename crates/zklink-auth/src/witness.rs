use alloc::vec::Vec;

use winter_maybe_async::*;
use zklink_pubdata::{
    AccountId, Address, PubKeyHash,
    hash::{hash_bytes_to_bytes20, keccak256_concat},
    utils::serde::{
        ByteReader, ByteWriter, Deserializable, DeserializationError, Serializable, SliceReader,
    },
};

use crate::{
    SignerError, TypedDataSigner, WitnessError,
    eip712::{ChangePubKeyMessage, Eip712Domain, TypedData},
};

// CONSTANTS
// ================================================================================================

const SIGNATURE_TAG: u8 = 0;
const CREATE2_TAG: u8 = 1;

/// Length of an `r ++ s ++ v` ECDSA signature.
pub const SIGNATURE_BYTES: usize = 65;

/// Prefix byte of a CREATE2 address preimage.
const CREATE2_PREFIX: u8 = 0xff;

// CHANGE PUBKEY WITNESS
// ================================================================================================

/// Proof that the layer-1 owner of an account authorized a new rollup pubkey hash.
///
/// Encoded as a scheme tag byte followed by the scheme's payload:
/// - `0x00 ++ signature` for a typed-data signature of the owner.
/// - `0x01 ++ creator ++ salt ++ code_hash` for owners which are CREATE2-deployed contracts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangePubKeyWitness {
    Signature(Vec<u8>),
    Create2(Create2Data),
}

impl ChangePubKeyWitness {
    /// Returns the scheme tag byte which starts the encoded witness.
    pub fn scheme_tag(&self) -> u8 {
        match self {
            ChangePubKeyWitness::Signature(_) => SIGNATURE_TAG,
            ChangePubKeyWitness::Create2(_) => CREATE2_TAG,
        }
    }

    /// Decodes a witness of either scheme.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The scheme tag is neither `0` nor `1`.
    /// - A signature is not exactly [SIGNATURE_BYTES] long.
    /// - A CREATE2 payload is truncated or followed by extra bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WitnessError> {
        let (&tag, payload) = bytes
            .split_first()
            .ok_or(WitnessError::MalformedWitness(DeserializationError::UnexpectedEOF))?;

        match tag {
            SIGNATURE_TAG => {
                if payload.len() != SIGNATURE_BYTES {
                    return Err(WitnessError::MalformedWitness(DeserializationError::InvalidValue(
                        format!(
                            "signature must be {SIGNATURE_BYTES} bytes long but was {} bytes",
                            payload.len()
                        ),
                    )));
                }
                Ok(ChangePubKeyWitness::Signature(payload.to_vec()))
            },
            CREATE2_TAG => {
                let mut source = SliceReader::new(payload);
                let data = Create2Data::read_from(&mut source)?;
                if source.has_more_bytes() {
                    return Err(WitnessError::MalformedWitness(DeserializationError::InvalidValue(
                        format!(
                            "create2 witness must be {} bytes long",
                            1 + Create2Data::SERIALIZED_SIZE
                        ),
                    )));
                }
                Ok(ChangePubKeyWitness::Create2(data))
            },
            other => Err(WitnessError::UnsupportedSchemeTag(other)),
        }
    }
}

impl Serializable for ChangePubKeyWitness {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        target.write_u8(self.scheme_tag());
        match self {
            ChangePubKeyWitness::Signature(signature) => target.write_bytes(signature),
            ChangePubKeyWitness::Create2(data) => data.write_into(target),
        }
    }

    fn get_size_hint(&self) -> usize {
        1 + match self {
            ChangePubKeyWitness::Signature(signature) => signature.len(),
            ChangePubKeyWitness::Create2(_) => Create2Data::SERIALIZED_SIZE,
        }
    }
}

// CREATE2 DATA
// ================================================================================================

/// The deployment parameters of a CREATE2 owner contract.
///
/// The salt the contract was deployed with is `keccak256(salt ++ pub_key_hash)`, so the owner
/// address commits to the pubkey hash being authorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Create2Data {
    pub creator: Address,
    pub salt: [u8; 32],
    pub code_hash: [u8; 32],
}

impl Create2Data {
    pub const SERIALIZED_SIZE: usize = Address::SERIALIZED_SIZE + 32 + 32;

    /// Returns the address of the contract deployed for `pub_key_hash`.
    pub fn owner(&self, pub_key_hash: &PubKeyHash) -> Address {
        let salt = keccak256_concat(&[&self.salt[..], &pub_key_hash.as_bytes()[..]]);
        compute_create2_address(&self.creator, &salt, &self.code_hash)
    }
}

impl Serializable for Create2Data {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        self.creator.write_into(target);
        target.write_bytes(&self.salt);
        target.write_bytes(&self.code_hash);
    }

    fn get_size_hint(&self) -> usize {
        Self::SERIALIZED_SIZE
    }
}

impl Deserializable for Create2Data {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        Ok(Self {
            creator: source.read()?,
            salt: source.read_array()?,
            code_hash: source.read_array()?,
        })
    }
}

// BUILDERS
// ================================================================================================

/// Asks `signer` to sign the change of `account_id`'s pubkey hash to `pub_key_hash` and returns
/// the encoded signature witness, `0x00 ++ signature`.
///
/// # Errors
/// Returns [WitnessError::DelegatedSignerFailure] if the signer fails or returns a signature
/// which is not [SIGNATURE_BYTES] long. The request is not retried.
#[maybe_async]
pub fn build_signature_witness<S: TypedDataSigner>(
    domain: &Eip712Domain,
    pub_key_hash: PubKeyHash,
    nonce: u32,
    account_id: AccountId,
    signer: &S,
) -> Result<Vec<u8>, WitnessError> {
    let typed_data = TypedData::new(
        domain.clone(),
        ChangePubKeyMessage { pub_key_hash, nonce, account_id },
    );

    #[cfg(feature = "log")]
    log::debug!(
        "requesting change pubkey signature for account {account_id} with nonce {nonce} on chain {}",
        domain.chain_id
    );

    let signature = maybe_await!(signer.sign_typed_data(&typed_data))
        .and_then(|signature| {
            if signature.len() == SIGNATURE_BYTES {
                Ok(signature)
            } else {
                Err(SignerError::other(format!(
                    "expected a {SIGNATURE_BYTES}-byte signature but received {} bytes",
                    signature.len()
                )))
            }
        })
        .map_err(|err| {
            #[cfg(feature = "log")]
            log::warn!("signer failed to authorize pubkey change of account {account_id}: {err}");
            WitnessError::DelegatedSignerFailure(err)
        })?;

    Ok(ChangePubKeyWitness::Signature(signature).to_bytes())
}

/// Returns the encoded CREATE2 witness, `0x01 ++ creator ++ salt ++ code_hash`, together with
/// the owner address it proves.
///
/// The owner depends only on the deployment parameters and `pub_key_hash`; account id and nonce
/// play no part in it.
pub fn build_create2_witness(
    pub_key_hash: &PubKeyHash,
    creator: Address,
    salt: [u8; 32],
    code_hash: [u8; 32],
) -> (Vec<u8>, Address) {
    let data = Create2Data { creator, salt, code_hash };
    let owner = data.owner(pub_key_hash);
    (ChangePubKeyWitness::Create2(data).to_bytes(), owner)
}

/// Returns the address of a contract deployed by `creator` with CREATE2:
/// `keccak256(0xff ++ creator ++ salt ++ code_hash)[12..]`.
pub fn compute_create2_address(creator: &Address, salt: &[u8; 32], code_hash: &[u8; 32]) -> Address {
    let mut preimage = Vec::with_capacity(1 + Address::SERIALIZED_SIZE + 64);
    preimage.push(CREATE2_PREFIX);
    preimage.extend_from_slice(creator.as_bytes());
    preimage.extend_from_slice(salt);
    preimage.extend_from_slice(code_hash);
    Address::new(hash_bytes_to_bytes20(preimage))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use zklink_pubdata::{
        hash::keccak256,
        testing::constants::{ADDRESS_ONES, PUB_KEY_HASH},
    };

    use super::*;

    #[rstest::rstest]
    #[case::zero_creator(
        "0x0000000000000000000000000000000000000000",
        "0x4D1A2e2bB4F88F0250f26Ffff098B0b30B26BF38"
    )]
    #[case::deadbeef_creator(
        "0xdeadbeef00000000000000000000000000000000",
        "0xB928f69Bb1D91Cd65274e3c79d8986362984fDA3"
    )]
    fn create2_address_vectors(#[case] creator: &str, #[case] expected: &str) {
        let creator: Address = creator.parse().unwrap();
        let expected: Address = expected.parse().unwrap();
        let code_hash = keccak256([0x00u8]);
        assert_eq!(compute_create2_address(&creator, &[0; 32], &code_hash), expected);
    }

    #[test]
    fn create2_witness_layout() {
        let (witness, owner) = build_create2_witness(&PUB_KEY_HASH, ADDRESS_ONES, [2; 32], [3; 32]);

        assert_eq!(witness.len(), 85);
        assert_eq!(witness[0], 0x01);
        assert_eq!(&witness[1..21], ADDRESS_ONES.as_bytes());
        assert_eq!(&witness[21..53], &[2; 32]);
        assert_eq!(&witness[53..], &[3; 32]);

        let salt = keccak256_concat(&[&[2u8; 32][..], &PUB_KEY_HASH.as_bytes()[..]]);
        assert_eq!(owner, compute_create2_address(&ADDRESS_ONES, &salt, &[3; 32]));
    }

    #[test]
    fn create2_owner_commits_to_pub_key_hash() {
        let (_, owner) = build_create2_witness(&PUB_KEY_HASH, ADDRESS_ONES, [2; 32], [3; 32]);
        let (_, other) = build_create2_witness(&PubKeyHash::ZERO, ADDRESS_ONES, [2; 32], [3; 32]);
        assert_ne!(owner, other);
    }

    #[test]
    fn witness_decoding() {
        let (create2, _) = build_create2_witness(&PUB_KEY_HASH, ADDRESS_ONES, [2; 32], [3; 32]);
        assert_eq!(
            ChangePubKeyWitness::from_bytes(&create2).unwrap(),
            ChangePubKeyWitness::Create2(Create2Data {
                creator: ADDRESS_ONES,
                salt: [2; 32],
                code_hash: [3; 32],
            })
        );

        let mut signature = vec![0x00];
        signature.extend_from_slice(&[7; SIGNATURE_BYTES]);
        assert_eq!(
            ChangePubKeyWitness::from_bytes(&signature).unwrap(),
            ChangePubKeyWitness::Signature(vec![7; SIGNATURE_BYTES])
        );
    }

    #[rstest::rstest]
    #[case(2)]
    #[case(0x7f)]
    #[case(u8::MAX)]
    fn unsupported_scheme_tag(#[case] tag: u8) {
        assert_matches!(
            ChangePubKeyWitness::from_bytes(&[tag; 86]),
            Err(WitnessError::UnsupportedSchemeTag(t)) if t == tag
        );
    }

    #[test]
    fn malformed_witness() {
        assert_matches!(
            ChangePubKeyWitness::from_bytes(&[]),
            Err(WitnessError::MalformedWitness(_))
        );
        assert_matches!(
            ChangePubKeyWitness::from_bytes(&[0x00; 10]),
            Err(WitnessError::MalformedWitness(_))
        );
        assert_matches!(
            ChangePubKeyWitness::from_bytes(&[0x01; 40]),
            Err(WitnessError::MalformedWitness(_))
        );
        assert_matches!(
            ChangePubKeyWitness::from_bytes(&[0x01; 86]),
            Err(WitnessError::MalformedWitness(_))
        );
    }

    #[cfg(not(feature = "async"))]
    #[test]
    fn default_signer_failure_propagates() {
        let domain = Eip712Domain::zklink(31337, ADDRESS_ONES);
        assert_matches!(
            build_signature_witness(&domain, PUB_KEY_HASH, 0, AccountId::new(7), &()),
            Err(WitnessError::DelegatedSignerFailure(SignerError::RejectedSignature(_)))
        );
    }
}
