use alloc::string::String;
use core::{fmt, str::FromStr};

use crate::{
    MAX_CHAIN_ID, MIN_CHAIN_ID, PubdataError,
    codec::{PubdataReader, PubdataWriter, U40_MAX},
    utils::{
        HexParseError, hex_to_bytes,
        serde::{ByteReader, ByteWriter, Deserializable, DeserializationError, Serializable},
    },
};

// INTEGER IDENTIFIERS
// ================================================================================================

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident($inner:ty), $as_inner:ident) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($inner);

        impl $name {
            /// The serialized size in bytes.
            pub const SERIALIZED_SIZE: usize = core::mem::size_of::<$inner>();

            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            pub const fn $as_inner(&self) -> $inner {
                self.0
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $inner {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Serializable for $name {
            fn write_into<W: ByteWriter>(&self, target: &mut W) {
                target.write_bytes(&self.0.to_be_bytes());
            }

            fn get_size_hint(&self) -> usize {
                Self::SERIALIZED_SIZE
            }
        }

        impl Deserializable for $name {
            fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
                let bytes = source.read_array::<{ core::mem::size_of::<$inner>() }>()?;
                Ok(Self(<$inner>::from_be_bytes(bytes)))
            }
        }
    };
}

integer_id!(
    /// Identifier of an account in the rollup account tree.
    ///
    /// [AccountId::UNASSIGNED] is written for deposits into accounts the rollup has not created
    /// yet.
    AccountId(u32),
    as_u32
);

impl AccountId {
    pub const UNASSIGNED: Self = Self(0);
}

integer_id!(
    /// Sub-account of an account. Each sub-account holds its own balances.
    SubAccountId(u8),
    as_u8
);

integer_id!(
    /// Identifier of a token registered with the rollup.
    TokenId(u16),
    as_u16
);

integer_id!(
    /// Order slot of an account used by order matching to track partially filled orders.
    SlotId(u8),
    as_u8
);

// CHAIN ID
// ================================================================================================

/// Identifier of one of the layer-1 chains connected to the rollup.
///
/// A chain id is always within `MIN_CHAIN_ID..=MAX_CHAIN_ID`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChainId(u8);

impl ChainId {
    pub const SERIALIZED_SIZE: usize = 1;

    /// Returns a new [ChainId].
    ///
    /// # Errors
    /// Returns an error if `value` is outside of `MIN_CHAIN_ID..=MAX_CHAIN_ID`.
    pub const fn new(value: u8) -> Result<Self, PubdataError> {
        if value < MIN_CHAIN_ID || value > MAX_CHAIN_ID {
            return Err(PubdataError::ChainIdOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Returns the bit of this chain in a chain mask. OR-ing every chain's bit gives
    /// [ALL_CHAINS](crate::ALL_CHAINS).
    pub const fn mask(&self) -> u8 {
        1 << (self.0 - 1)
    }

    /// Returns every supported chain id in ascending order.
    pub fn all() -> impl Iterator<Item = ChainId> {
        (MIN_CHAIN_ID..=MAX_CHAIN_ID).map(ChainId)
    }
}

impl TryFrom<u8> for ChainId {
    type Error = PubdataError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ChainId> for u8 {
    fn from(value: ChainId) -> Self {
        value.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serializable for ChainId {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        target.write_u8(self.0);
    }

    fn get_size_hint(&self) -> usize {
        Self::SERIALIZED_SIZE
    }
}

impl Deserializable for ChainId {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        let value = source.read_u8()?;
        Self::new(value).map_err(|err| DeserializationError::InvalidValue(format!("{err}")))
    }
}

// 20-BYTE VALUES
// ================================================================================================

macro_rules! bytes20 {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name([u8; 20]);

        impl $name {
            pub const SERIALIZED_SIZE: usize = 20;

            pub const ZERO: Self = Self([0; 20]);

            pub const fn new(bytes: [u8; 20]) -> Self {
                Self(bytes)
            }

            pub const fn as_bytes(&self) -> &[u8; 20] {
                &self.0
            }

            /// Returns the value as a `0x`-prefixed lowercase hex string.
            pub fn to_hex(&self) -> String {
                format!("0x{}", hex::encode(self.0))
            }
        }

        impl From<[u8; 20]> for $name {
            fn from(bytes: [u8; 20]) -> Self {
                Self(bytes)
            }
        }

        impl From<$name> for [u8; 20] {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = HexParseError;

            /// Parses a `0x`-prefixed 40 digit hex string. Mixed-case (checksummed) input is
            /// accepted.
            fn from_str(hex: &str) -> Result<Self, Self::Err> {
                hex_to_bytes(hex).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl Serializable for $name {
            fn write_into<W: ByteWriter>(&self, target: &mut W) {
                target.write_bytes(&self.0);
            }

            fn get_size_hint(&self) -> usize {
                Self::SERIALIZED_SIZE
            }
        }

        impl Deserializable for $name {
            fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
                source.read_array::<20>().map(Self)
            }
        }
    };
}

bytes20!(
    /// A 20-byte layer-1 account address.
    Address
);

bytes20!(
    /// A 20-byte hash of a rollup signing public key.
    PubKeyHash
);

// PACKED AMOUNT
// ================================================================================================

/// A token amount compressed into a 40-bit float (35-bit mantissa, 5-bit decimal exponent).
///
/// The value held is the raw packed representation. See [crate::packing] for the conversion
/// from and to full-width amounts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackedAmount(u64);

impl PackedAmount {
    pub const SERIALIZED_SIZE: usize = 5;

    /// Largest raw value a packed amount can hold.
    pub const MAX: u64 = U40_MAX;

    /// Wraps an already packed 40-bit value.
    ///
    /// # Errors
    /// Returns an error if `raw` does not fit into 40 bits.
    pub const fn new(raw: u64) -> Result<Self, PubdataError> {
        if raw > Self::MAX {
            return Err(PubdataError::ValueOutOfRange {
                field: "packed_amount",
                value: raw as u128,
                bits: 40,
            });
        }
        Ok(Self(raw))
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for PackedAmount {
    type Error = PubdataError;

    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl Serializable for PackedAmount {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        target.write_u40_be(self.0);
    }

    fn get_size_hint(&self) -> usize {
        Self::SERIALIZED_SIZE
    }
}

impl Deserializable for PackedAmount {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        source.read_u40_be("packed_amount").map(Self)
    }
}

// PACKED FEE
// ================================================================================================

/// A fee compressed into a 16-bit float (11-bit mantissa, 5-bit decimal exponent).
///
/// Every `u16` is a valid packed fee.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackedFee(u16);

impl PackedFee {
    pub const SERIALIZED_SIZE: usize = 2;

    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    pub const fn as_u16(&self) -> u16 {
        self.0
    }
}

impl From<u16> for PackedFee {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl Serializable for PackedFee {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        target.write_u16_be(self.0);
    }

    fn get_size_hint(&self) -> usize {
        Self::SERIALIZED_SIZE
    }
}

impl Deserializable for PackedFee {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        source.read_u16_be("packed_fee").map(Self)
    }
}

// TESTS
// ================================================================================================
