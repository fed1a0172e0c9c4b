#[cfg(feature = "async")]
use alloc::boxed::Box;
use alloc::vec::Vec;

use secp256k1::{
    Message, PublicKey, Secp256k1, SecretKey,
    ecdsa::{RecoverableSignature, RecoveryId},
};
use winter_maybe_async::*;
use zklink_pubdata::{Address, hash::hash_bytes_to_bytes20};

use crate::{SignerError, TypedDataSigner, eip712::TypedData, witness::SIGNATURE_BYTES};

/// Offset added to the recovery id to form the `v` byte of an Ethereum signature.
const V_OFFSET: u8 = 27;

// ECDSA SIGNER
// ================================================================================================

/// A [TypedDataSigner] holding a single secp256k1 key, signing the way an Ethereum wallet does.
#[derive(Clone, Debug)]
pub struct EcdsaSigner {
    secret_key: SecretKey,
    address: Address,
}

impl EcdsaSigner {
    /// Creates a signer from a 32-byte secret key.
    ///
    /// # Panics
    /// Panics if `secret` is zero or not below the curve order.
    pub fn new(secret: [u8; 32]) -> Self {
        let secret_key = SecretKey::from_slice(&secret).expect("secret key must be valid");
        let public_key = PublicKey::from_secret_key(&Secp256k1::signing_only(), &secret_key);
        Self { secret_key, address: address_of(&public_key) }
    }

    /// Returns the layer-1 address of this signer.
    pub fn address(&self) -> Address {
        self.address
    }
}

#[maybe_async_trait]
impl TypedDataSigner for EcdsaSigner {
    #[maybe_async]
    fn sign_typed_data(&self, typed_data: &TypedData) -> Result<Vec<u8>, SignerError> {
        let message = Message::from_digest(typed_data.signing_hash());
        let (recovery_id, compact) = Secp256k1::signing_only()
            .sign_ecdsa_recoverable(&message, &self.secret_key)
            .serialize_compact();

        let mut signature = compact.to_vec();
        signature.push(V_OFFSET + recovery_id.to_i32() as u8);
        Ok(signature)
    }
}

// FAULTY SIGNER
// ================================================================================================

/// A [TypedDataSigner] which returns a fixed, truncated signature.
#[derive(Clone, Debug, Default)]
pub struct TruncatingSigner;

#[maybe_async_trait]
impl TypedDataSigner for TruncatingSigner {
    #[maybe_async]
    fn sign_typed_data(&self, _typed_data: &TypedData) -> Result<Vec<u8>, SignerError> {
        Ok(vec![0xab; SIGNATURE_BYTES - 1])
    }
}

// HELPERS
// ================================================================================================

/// Returns the address which produced `signature` over the signing hash of `typed_data`.
pub fn recover_signer(
    typed_data: &TypedData,
    signature: &[u8],
) -> Result<Address, secp256k1::Error> {
    if signature.len() != SIGNATURE_BYTES {
        return Err(secp256k1::Error::InvalidSignature);
    }
    let (compact, v) = signature.split_at(SIGNATURE_BYTES - 1);
    let recovery_id = RecoveryId::from_i32(i32::from(v[0]) - i32::from(V_OFFSET))?;
    let signature = RecoverableSignature::from_compact(compact, recovery_id)?;

    let message = Message::from_digest(typed_data.signing_hash());
    let public_key = Secp256k1::verification_only().recover_ecdsa(&message, &signature)?;
    Ok(address_of(&public_key))
}

/// Returns the Ethereum address of `public_key`: the low 20 bytes of the keccak-256 hash of its
/// uncompressed encoding without the prefix byte.
pub fn address_of(public_key: &PublicKey) -> Address {
    Address::new(hash_bytes_to_bytes20(&public_key.serialize_uncompressed()[1..]))
}
