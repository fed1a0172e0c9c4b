#![no_std]

#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod block;
pub mod chunk;
pub mod codec;
pub mod hash;
pub mod operation;
pub mod packing;
pub mod primitives;

#[cfg(any(feature = "testing", test))]
pub mod testing;

mod constants;
mod errors;

// RE-EXPORTS
// ================================================================================================

pub use chunk::{chunks_for, pad};
pub use constants::*;
pub use errors::PubdataError;
pub use operation::{
    ChangePubKey, Deposit, ForceExit, FullExit, Noop, OpType, Operation, OrderMatching,
    OrderMatchingMaker, OrderMatchingTaker, PubdataOp, Transfer, TransferToNew, Withdraw,
};
pub use primitives::{
    AccountId, Address, ChainId, PackedAmount, PackedFee, PubKeyHash, SlotId, SubAccountId, TokenId,
};

pub mod utils {
    pub use miden_crypto::utils::{HexParseError, hex_to_bytes};

    pub mod serde {
        pub use miden_crypto::utils::{
            ByteReader, ByteWriter, Deserializable, DeserializationError, Serializable,
            SliceReader,
        };
    }
}
