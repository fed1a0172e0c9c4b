use crate::{
    EMPTY_STRING_KECCAK, GENESIS_ROOT, ZERO_BYTES32,
    codec::{PubdataReader, PubdataWriter},
    hash::keccak256,
    utils::serde::{ByteReader, ByteWriter, Deserializable, DeserializationError, Serializable},
};

/// Size of one ABI word.
const WORD_BYTES: usize = 32;

// STORED BLOCK INFO
// ================================================================================================

/// The summary of a committed block which the layer-1 contract stores and which the next commit
/// must reference.
///
/// The contract stores only [StoredBlockInfo::hash], the keccak-256 hash of the ABI encoding of
/// this struct, so the encoding produced by [Serializable] is the standard (non-packed) ABI
/// encoding with every field left-padded to 32 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoredBlockInfo {
    pub block_number: u32,
    pub priority_operations: u64,
    pub pending_onchain_operations_hash: [u8; 32],
    pub timestamp: u64,
    pub state_hash: [u8; 32],
    pub commitment: [u8; 32],
    pub sync_hash: [u8; 32],
}

impl StoredBlockInfo {
    /// The serialized size in bytes: seven ABI words.
    pub const SERIALIZED_SIZE: usize = 7 * WORD_BYTES;

    /// Returns the block the rollup is deployed with.
    pub const fn genesis() -> Self {
        Self {
            block_number: 0,
            priority_operations: 0,
            pending_onchain_operations_hash: EMPTY_STRING_KECCAK,
            timestamp: 0,
            state_hash: GENESIS_ROOT,
            commitment: ZERO_BYTES32,
            sync_hash: EMPTY_STRING_KECCAK,
        }
    }

    /// Returns the hash under which the layer-1 contract stores this block.
    pub fn hash(&self) -> [u8; 32] {
        keccak256(self.to_bytes())
    }
}

// SERIALIZATION
// ================================================================================================

impl Serializable for StoredBlockInfo {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        target.write_zeros(WORD_BYTES - 4);
        target.write_u32_be(self.block_number);
        target.write_zeros(WORD_BYTES - 8);
        target.write_bytes(&self.priority_operations.to_be_bytes());
        target.write_bytes(&self.pending_onchain_operations_hash);
        target.write_zeros(WORD_BYTES - 8);
        target.write_bytes(&self.timestamp.to_be_bytes());
        target.write_bytes(&self.state_hash);
        target.write_bytes(&self.commitment);
        target.write_bytes(&self.sync_hash);
    }

    fn get_size_hint(&self) -> usize {
        Self::SERIALIZED_SIZE
    }
}

impl Deserializable for StoredBlockInfo {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        source.read_zeros(WORD_BYTES - 4, "block_number")?;
        let block_number = source.read_u32_be("block_number")?;
        source.read_zeros(WORD_BYTES - 8, "priority_operations")?;
        let priority_operations = u64::from_be_bytes(source.read_field("priority_operations")?);
        let pending_onchain_operations_hash = source.read_field("pending_onchain_operations_hash")?;
        source.read_zeros(WORD_BYTES - 8, "timestamp")?;
        let timestamp = u64::from_be_bytes(source.read_field("timestamp")?);

        Ok(Self {
            block_number,
            priority_operations,
            pending_onchain_operations_hash,
            timestamp,
            state_hash: source.read_field("state_hash")?,
            commitment: source.read_field("commitment")?,
            sync_hash: source.read_field("sync_hash")?,
        })
    }
}
