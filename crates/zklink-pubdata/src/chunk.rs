//! Chunk alignment of pubdata records.
//!
//! The verifier consumes pubdata in chunks of [CHUNK_BYTES] bytes. A record is aligned by
//! appending `CHUNK_BYTES - len % CHUNK_BYTES` zero bytes. That amount is never zero: a record
//! which is already a whole number of chunks long still gets a full chunk of zeros appended.
//! This matches the chunk counts the verifier derives for every operation type and must not be
//! changed to "pad only when misaligned".

use alloc::vec::Vec;

use crate::CHUNK_BYTES;

/// Returns the number of zero bytes [pad] appends to a record of `len` bytes. Always in
/// `1..=CHUNK_BYTES`.
pub const fn padding_len(len: usize) -> usize {
    CHUNK_BYTES - len % CHUNK_BYTES
}

/// Returns the length of a padded record of `len` bytes.
pub const fn padded_len(len: usize) -> usize {
    len + padding_len(len)
}

/// Returns the number of chunks a padded record of `len` bytes occupies.
pub const fn chunks_for(len: usize) -> usize {
    padded_len(len) / CHUNK_BYTES
}

/// Returns `record` followed by `1..=CHUNK_BYTES` zero bytes so that the result is a whole
/// number of chunks long.
pub fn pad(record: &[u8]) -> Vec<u8> {
    let mut padded = Vec::with_capacity(padded_len(record.len()));
    padded.extend_from_slice(record);
    padded.resize(padded_len(record.len()), 0);
    padded
}
