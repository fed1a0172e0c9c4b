use alloc::vec::Vec;
use core::fmt;

use crate::{
    ChainId, PubdataError,
    chunk::{chunks_for, pad, padded_len},
    utils::serde::{
        ByteReader, ByteWriter, Deserializable, DeserializationError, Serializable, SliceReader,
    },
};

mod change_pubkey;
pub use change_pubkey::ChangePubKey;

mod deposit;
pub use deposit::Deposit;

mod force_exit;
pub use force_exit::ForceExit;

mod full_exit;
pub use full_exit::FullExit;

mod order_matching;
pub use order_matching::{OrderMatching, OrderMatchingMaker, OrderMatchingTaker};

mod transfer;
pub use transfer::{Transfer, TransferToNew};

mod withdraw;
pub use withdraw::Withdraw;

// CONSTANTS
// ================================================================================================

// Keep these in sync with the operation types of the on-chain verifier.
const NOOP: u8 = 0;
const DEPOSIT: u8 = 1;
const TRANSFER_TO_NEW: u8 = 2;
const WITHDRAW: u8 = 3;
const TRANSFER: u8 = 4;
const FULL_EXIT: u8 = 5;
const CHANGE_PUBKEY: u8 = 6;
const FORCE_EXIT: u8 = 7;
const ORDER_MATCHING: u8 = 11;

// OPERATION TYPE
// ================================================================================================

/// The tag byte which starts every pubdata record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum OpType {
    Noop = NOOP,
    Deposit = DEPOSIT,
    TransferToNew = TRANSFER_TO_NEW,
    Withdraw = WITHDRAW,
    Transfer = TRANSFER,
    FullExit = FULL_EXIT,
    ChangePubKey = CHANGE_PUBKEY,
    ForceExit = FORCE_EXIT,
    OrderMatching = ORDER_MATCHING,
}

impl OpType {
    /// Every operation type in tag order.
    pub const ALL: [OpType; 9] = [
        OpType::Noop,
        OpType::Deposit,
        OpType::TransferToNew,
        OpType::Withdraw,
        OpType::Transfer,
        OpType::FullExit,
        OpType::ChangePubKey,
        OpType::ForceExit,
        OpType::OrderMatching,
    ];

    /// Returns the length of the unpadded record of this type, tag byte included.
    pub const fn pubdata_size(&self) -> usize {
        match self {
            OpType::Noop => Noop::SIZE,
            OpType::Deposit => Deposit::SIZE,
            OpType::TransferToNew => TransferToNew::SIZE,
            OpType::Withdraw => Withdraw::SIZE,
            OpType::Transfer => Transfer::SIZE,
            OpType::FullExit => FullExit::SIZE,
            OpType::ChangePubKey => ChangePubKey::SIZE,
            OpType::ForceExit => ForceExit::SIZE,
            OpType::OrderMatching => OrderMatching::SIZE,
        }
    }

    /// Returns the number of chunks a padded record of this type occupies.
    pub const fn chunks(&self) -> usize {
        chunks_for(self.pubdata_size())
    }

    /// Returns true if records of this type carry a chain id right after the tag byte.
    pub const fn is_chain_bound(&self) -> bool {
        matches!(
            self,
            OpType::Deposit
                | OpType::Withdraw
                | OpType::FullExit
                | OpType::ChangePubKey
                | OpType::ForceExit
        )
    }
}

impl TryFrom<u8> for OpType {
    type Error = PubdataError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            NOOP => Ok(OpType::Noop),
            DEPOSIT => Ok(OpType::Deposit),
            TRANSFER_TO_NEW => Ok(OpType::TransferToNew),
            WITHDRAW => Ok(OpType::Withdraw),
            TRANSFER => Ok(OpType::Transfer),
            FULL_EXIT => Ok(OpType::FullExit),
            CHANGE_PUBKEY => Ok(OpType::ChangePubKey),
            FORCE_EXIT => Ok(OpType::ForceExit),
            ORDER_MATCHING => Ok(OpType::OrderMatching),
            _ => Err(PubdataError::UnknownOpType(value)),
        }
    }
}

impl From<OpType> for u8 {
    fn from(value: OpType) -> Self {
        value as u8
    }
}

impl fmt::Display for OpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Serializable for OpType {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        target.write_u8(*self as u8);
    }
}

impl Deserializable for OpType {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        let tag = source.read_u8()?;
        OpType::try_from(tag).map_err(|err| DeserializationError::InvalidValue(format!("{err}")))
    }
}

// PUBDATA OPERATION
// ================================================================================================

/// A payload which is encoded as a single tagged pubdata record.
///
/// Implementors only describe their fields; the tag byte, padding and decoding of complete
/// records are shared.
pub trait PubdataOp: Sized {
    /// Tag byte of the record.
    const OP_TYPE: OpType;

    /// Length of the unpadded record, tag byte included.
    const SIZE: usize;

    /// Number of chunks the padded record occupies.
    const CHUNKS: usize = chunks_for(Self::SIZE);

    /// Writes the fields following the tag byte.
    fn write_fields<W: ByteWriter>(&self, target: &mut W);

    /// Reads the fields following the tag byte.
    fn read_fields<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError>;

    /// Returns the unpadded record.
    fn to_pubdata(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(Self::SIZE);
        Self::OP_TYPE.write_into(&mut bytes);
        self.write_fields(&mut bytes);
        debug_assert_eq!(bytes.len(), Self::SIZE);
        bytes
    }

    /// Returns the record padded to a whole number of chunks.
    fn to_padded_pubdata(&self) -> Vec<u8> {
        pad(&self.to_pubdata())
    }

    /// Decodes a record of this type. Trailing bytes must be zero padding.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The tag byte is not [Self::OP_TYPE].
    /// - A field is truncated or holds an invalid value.
    /// - A byte after the record is not zero.
    fn from_pubdata(bytes: &[u8]) -> Result<Self, PubdataError> {
        let mut source = SliceReader::new(bytes);
        let op_type: OpType = source.read()?;
        if op_type != Self::OP_TYPE {
            return Err(PubdataError::MalformedField(DeserializationError::InvalidValue(
                format!("expected a {} record but found a {op_type} record", Self::OP_TYPE),
            )));
        }
        let op = Self::read_fields(&mut source)?;
        check_zero_padding(bytes, Self::SIZE)?;
        Ok(op)
    }
}

/// Implements [Serializable] and [Deserializable] for a [PubdataOp] so that `to_bytes()` yields
/// the unpadded record.
macro_rules! impl_pubdata_serde {
    ($op:ty) => {
        impl $crate::utils::serde::Serializable for $op {
            fn write_into<W: $crate::utils::serde::ByteWriter>(&self, target: &mut W) {
                $crate::utils::serde::Serializable::write_into(
                    &<$op as $crate::operation::PubdataOp>::OP_TYPE,
                    target,
                );
                $crate::operation::PubdataOp::write_fields(self, target);
            }

            fn get_size_hint(&self) -> usize {
                <$op as $crate::operation::PubdataOp>::SIZE
            }
        }

        impl $crate::utils::serde::Deserializable for $op {
            fn read_from<R: $crate::utils::serde::ByteReader>(
                source: &mut R,
            ) -> Result<Self, $crate::utils::serde::DeserializationError> {
                let op_type = <$crate::operation::OpType as $crate::utils::serde::Deserializable>::read_from(source)?;
                if op_type != <$op as $crate::operation::PubdataOp>::OP_TYPE {
                    return Err($crate::utils::serde::DeserializationError::InvalidValue(
                        format!("unexpected operation type {op_type}"),
                    ));
                }
                <$op as $crate::operation::PubdataOp>::read_fields(source)
            }
        }
    };
}

pub(crate) use impl_pubdata_serde;

// NOOP
// ================================================================================================

/// Filler operation consisting of the tag byte only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Noop;

impl PubdataOp for Noop {
    const OP_TYPE: OpType = OpType::Noop;
    const SIZE: usize = 1;

    fn write_fields<W: ByteWriter>(&self, _target: &mut W) {}

    fn read_fields<R: ByteReader>(_source: &mut R) -> Result<Self, DeserializationError> {
        Ok(Noop)
    }
}

impl_pubdata_serde!(Noop);

// OPERATION
// ================================================================================================

/// A rollup operation as it appears in block pubdata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Noop(Noop),
    Deposit(Deposit),
    TransferToNew(TransferToNew),
    Withdraw(Withdraw),
    Transfer(Transfer),
    FullExit(FullExit),
    ChangePubKey(ChangePubKey),
    ForceExit(ForceExit),
    OrderMatching(OrderMatching),
}

impl Operation {
    /// Returns the tag byte of this operation.
    pub fn op_type(&self) -> OpType {
        match self {
            Operation::Noop(_) => OpType::Noop,
            Operation::Deposit(_) => OpType::Deposit,
            Operation::TransferToNew(_) => OpType::TransferToNew,
            Operation::Withdraw(_) => OpType::Withdraw,
            Operation::Transfer(_) => OpType::Transfer,
            Operation::FullExit(_) => OpType::FullExit,
            Operation::ChangePubKey(_) => OpType::ChangePubKey,
            Operation::ForceExit(_) => OpType::ForceExit,
            Operation::OrderMatching(_) => OpType::OrderMatching,
        }
    }

    /// Returns the chain id of chain-bound operations and `None` for operations which only touch
    /// rollup state.
    pub fn chain_id(&self) -> Option<ChainId> {
        match self {
            Operation::Deposit(op) => Some(op.chain_id),
            Operation::Withdraw(op) => Some(op.chain_id),
            Operation::FullExit(op) => Some(op.chain_id),
            Operation::ChangePubKey(op) => Some(op.chain_id),
            Operation::ForceExit(op) => Some(op.chain_id),
            Operation::Noop(_)
            | Operation::TransferToNew(_)
            | Operation::Transfer(_)
            | Operation::OrderMatching(_) => None,
        }
    }

    /// Returns the number of chunks the padded record occupies.
    pub fn chunks(&self) -> usize {
        self.op_type().chunks()
    }

    /// Returns the unpadded record.
    pub fn to_pubdata(&self) -> Vec<u8> {
        self.to_bytes()
    }

    /// Returns the record padded to a whole number of chunks.
    pub fn to_padded_pubdata(&self) -> Vec<u8> {
        pad(&self.to_bytes())
    }

    /// Decodes a single record. Trailing bytes, if any, must be zero padding.
    ///
    /// # Errors
    /// Returns an error if the tag is unknown, a field is malformed, or a padding byte is not
    /// zero.
    pub fn from_pubdata(bytes: &[u8]) -> Result<Self, PubdataError> {
        let tag = *bytes
            .first()
            .ok_or(PubdataError::MalformedField(DeserializationError::UnexpectedEOF))?;
        let op_type = OpType::try_from(tag)?;
        let op = Self::read_from(&mut SliceReader::new(bytes))?;
        check_zero_padding(bytes, op_type.pubdata_size())?;
        Ok(op)
    }

    /// Splits the concatenated padded records of a block into operations.
    ///
    /// # Errors
    /// Returns an error if any record fails to decode or the stream ends inside a record.
    pub fn decode_stream(pubdata: &[u8]) -> Result<Vec<Self>, PubdataError> {
        let mut ops = Vec::new();
        let mut offset = 0;
        while offset < pubdata.len() {
            let op_type = OpType::try_from(pubdata[offset])?;
            let end = offset + padded_len(op_type.pubdata_size());
            let record = pubdata
                .get(offset..end)
                .ok_or(PubdataError::MalformedField(DeserializationError::UnexpectedEOF))?;
            ops.push(Self::from_pubdata(record).map_err(|err| match err {
                PubdataError::NonZeroPadding { offset: inner } => {
                    PubdataError::NonZeroPadding { offset: offset + inner }
                },
                other => other,
            })?);
            offset = end;
        }
        Ok(ops)
    }
}

impl Serializable for Operation {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        match self {
            Operation::Noop(op) => op.write_into(target),
            Operation::Deposit(op) => op.write_into(target),
            Operation::TransferToNew(op) => op.write_into(target),
            Operation::Withdraw(op) => op.write_into(target),
            Operation::Transfer(op) => op.write_into(target),
            Operation::FullExit(op) => op.write_into(target),
            Operation::ChangePubKey(op) => op.write_into(target),
            Operation::ForceExit(op) => op.write_into(target),
            Operation::OrderMatching(op) => op.write_into(target),
        }
    }

    fn get_size_hint(&self) -> usize {
        self.op_type().pubdata_size()
    }
}

impl Deserializable for Operation {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        let op_type: OpType = source.read()?;
        let op = match op_type {
            OpType::Noop => Operation::Noop(Noop::read_fields(source)?),
            OpType::Deposit => Operation::Deposit(Deposit::read_fields(source)?),
            OpType::TransferToNew => Operation::TransferToNew(TransferToNew::read_fields(source)?),
            OpType::Withdraw => Operation::Withdraw(Withdraw::read_fields(source)?),
            OpType::Transfer => Operation::Transfer(Transfer::read_fields(source)?),
            OpType::FullExit => Operation::FullExit(FullExit::read_fields(source)?),
            OpType::ChangePubKey => Operation::ChangePubKey(ChangePubKey::read_fields(source)?),
            OpType::ForceExit => Operation::ForceExit(ForceExit::read_fields(source)?),
            OpType::OrderMatching => Operation::OrderMatching(OrderMatching::read_fields(source)?),
        };
        Ok(op)
    }
}

macro_rules! impl_from_payload {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Operation {
                fn from(op: $variant) -> Self {
                    Operation::$variant(op)
                }
            }
        )*
    };
}

impl_from_payload!(
    Noop,
    Deposit,
    TransferToNew,
    Withdraw,
    Transfer,
    FullExit,
    ChangePubKey,
    ForceExit,
    OrderMatching
);

// HELPERS
// ================================================================================================

/// Checks that every byte of `bytes` past `record_len` is zero.
fn check_zero_padding(bytes: &[u8], record_len: usize) -> Result<(), PubdataError> {
    match bytes.iter().skip(record_len).position(|byte| *byte != 0) {
        Some(position) => Err(PubdataError::NonZeroPadding { offset: record_len + position }),
        None => Ok(()),
    }
}

// TESTS
// ================================================================================================
