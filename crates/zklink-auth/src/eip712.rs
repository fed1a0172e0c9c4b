//! EIP-712 typed data for change-pubkey authorizations.
//!
//! The layer-1 contract accepts a new rollup pubkey hash for an account if the account owner
//! signed the typed struct `ChangePubKey(bytes20 pubKeyHash,uint32 nonce,uint32 accountId)`
//! under the contract's domain. Only the hashing side of EIP-712 lives here; producing the
//! signature is left to a [TypedDataSigner](crate::TypedDataSigner).

use alloc::string::String;

use zklink_pubdata::{
    AccountId, Address, PubKeyHash,
    hash::{keccak256, keccak256_concat},
};

// CONSTANTS
// ================================================================================================

pub const EIP712_DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

pub const CHANGE_PUBKEY_TYPE: &str =
    "ChangePubKey(bytes20 pubKeyHash,uint32 nonce,uint32 accountId)";

/// Domain name of the zkLink contract.
pub const DOMAIN_NAME: &str = "ZkLink";

/// Domain version of the zkLink contract.
pub const DOMAIN_VERSION: &str = "1";

/// Prefix of the final signing hash: `\x19` followed by the EIP-712 version byte.
const SIGNING_PREFIX: [u8; 2] = [0x19, 0x01];

// EIP-712 DOMAIN
// ================================================================================================

/// The domain a typed signature is bound to.
///
/// `chain_id` is the id of the layer-1 network the contract is deployed on, not the rollup
/// [ChainId](zklink_pubdata::ChainId).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eip712Domain {
    pub name: String,
    pub version: String,
    pub chain_id: u64,
    pub verifying_contract: Address,
}

impl Eip712Domain {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        chain_id: u64,
        verifying_contract: Address,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            chain_id,
            verifying_contract,
        }
    }

    /// Returns the domain of the zkLink contract deployed at `verifying_contract` on the
    /// layer-1 network with id `chain_id`.
    pub fn zklink(chain_id: u64, verifying_contract: Address) -> Self {
        Self::new(DOMAIN_NAME, DOMAIN_VERSION, chain_id, verifying_contract)
    }

    /// Returns the domain separator, `hashStruct(domain)`.
    pub fn separator(&self) -> [u8; 32] {
        keccak256_concat(&[
            &keccak256(EIP712_DOMAIN_TYPE)[..],
            &keccak256(self.name.as_bytes())[..],
            &keccak256(self.version.as_bytes())[..],
            &uint_word(self.chain_id)[..],
            &address_word(&self.verifying_contract)[..],
        ])
    }
}

// CHANGE PUBKEY MESSAGE
// ================================================================================================

/// The struct an account owner signs to authorize a new rollup pubkey hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangePubKeyMessage {
    pub pub_key_hash: PubKeyHash,
    pub nonce: u32,
    pub account_id: AccountId,
}

impl ChangePubKeyMessage {
    /// Returns `hashStruct(message)`.
    pub fn struct_hash(&self) -> [u8; 32] {
        keccak256_concat(&[
            &keccak256(CHANGE_PUBKEY_TYPE)[..],
            &bytes20_word(self.pub_key_hash.as_bytes())[..],
            &uint_word(u64::from(self.nonce))[..],
            &uint_word(u64::from(self.account_id.as_u32()))[..],
        ])
    }
}

// TYPED DATA
// ================================================================================================

/// A [ChangePubKeyMessage] bound to a domain; this is what a signer is asked to sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedData {
    pub domain: Eip712Domain,
    pub message: ChangePubKeyMessage,
}

impl TypedData {
    pub fn new(domain: Eip712Domain, message: ChangePubKeyMessage) -> Self {
        Self { domain, message }
    }

    /// Returns the digest which is signed: `keccak256(0x19 0x01 ++ separator ++ structHash)`.
    pub fn signing_hash(&self) -> [u8; 32] {
        keccak256_concat(&[
            &SIGNING_PREFIX[..],
            &self.domain.separator()[..],
            &self.message.struct_hash()[..],
        ])
    }
}

// HELPERS
// ================================================================================================

/// Left-pads an unsigned integer to a 32-byte word.
fn uint_word(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Left-pads an address to a 32-byte word.
fn address_word(address: &Address) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(address.as_bytes());
    word
}

/// Right-pads a fixed-size byte string to a 32-byte word.
fn bytes20_word(bytes: &[u8; 20]) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[..20].copy_from_slice(bytes);
    word
}

#[cfg(test)]
mod tests {
    use zklink_pubdata::testing::constants::{ADDRESS_ONES, PUB_KEY_HASH};

    use super::*;

    fn message() -> ChangePubKeyMessage {
        ChangePubKeyMessage {
            pub_key_hash: PUB_KEY_HASH,
            nonce: 0,
            account_id: AccountId::new(7),
        }
    }

    #[test]
    fn ether_mail_domain_separator() {
        let contract = "0xCcCCccccCCCCcCCCCCCcCcCccCcCCCcCcccccccC".parse().unwrap();
        let domain = Eip712Domain::new("Ether Mail", "1", 1, contract);
        let expected: [u8; 32] = zklink_pubdata::utils::hex_to_bytes(
            "0xf2cee375fa42b42143804025fc449deafd50cc031ca257e0b194a650a912090f",
        )
        .unwrap();
        assert_eq!(domain.separator(), expected);
    }

    #[test]
    fn zklink_domain_defaults() {
        let domain = Eip712Domain::zklink(31337, ADDRESS_ONES);
        assert_eq!(domain.name, "ZkLink");
        assert_eq!(domain.version, "1");
        assert_ne!(domain.separator(), Eip712Domain::zklink(1, ADDRESS_ONES).separator());
    }

    #[test]
    fn struct_hash_encodes_every_member() {
        let hash = message().struct_hash();

        let mut nonce_changed = message();
        nonce_changed.nonce = 1;
        assert_ne!(nonce_changed.struct_hash(), hash);

        let mut account_changed = message();
        account_changed.account_id = AccountId::new(8);
        assert_ne!(account_changed.struct_hash(), hash);

        let mut pub_key_changed = message();
        pub_key_changed.pub_key_hash = PubKeyHash::new([0; 20]);
        assert_ne!(pub_key_changed.struct_hash(), hash);
    }

    #[test]
    fn struct_hash_layout() {
        let mut preimage = keccak256(CHANGE_PUBKEY_TYPE).to_vec();
        preimage.extend_from_slice(PUB_KEY_HASH.as_bytes());
        preimage.extend_from_slice(&[0; 12]);
        preimage.extend_from_slice(&[0; 32]);
        preimage.extend_from_slice(&[0; 31]);
        preimage.push(7);
        assert_eq!(message().struct_hash(), keccak256(preimage));
    }

    #[test]
    fn signing_hash_layout() {
        let typed_data = TypedData::new(Eip712Domain::zklink(31337, ADDRESS_ONES), message());
        let mut preimage = vec![0x19, 0x01];
        preimage.extend_from_slice(&typed_data.domain.separator());
        preimage.extend_from_slice(&typed_data.message.struct_hash());
        assert_eq!(typed_data.signing_hash(), keccak256(preimage));
    }
}
