#![no_std]

#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod accept;
pub use accept::{ACCEPT_PREIMAGE_SIZE, accept_hash};

pub mod eip712;
pub use eip712::{ChangePubKeyMessage, Eip712Domain, TypedData};

mod errors;
pub use errors::{SignerError, WitnessError};

mod signer;
pub use signer::TypedDataSigner;

pub mod witness;
pub use witness::{
    ChangePubKeyWitness, Create2Data, build_create2_witness, build_signature_witness,
    compute_create2_address,
};

#[cfg(any(feature = "testing", test))]
pub mod testing;

// RE-EXPORTS
// ================================================================================================

pub use zklink_pubdata::{AccountId, Address, PubKeyHash, TokenId, hash, utils};
