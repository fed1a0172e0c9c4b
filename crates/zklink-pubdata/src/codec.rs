//! Big-endian field codec used by every pubdata record.
//!
//! The byte writer and reader traits re-exported from `miden-crypto` encode integers in
//! little-endian order. Pubdata follows the Solidity packed ABI instead: every integer is
//! big-endian, left-padded with zeros to the declared width, and written without any length
//! prefix. The extension traits in this module add those field encodings on top of the plain
//! byte-level [ByteWriter] and [ByteReader].

use alloc::string::String;

use crate::utils::serde::{ByteReader, ByteWriter, Deserializable, DeserializationError};

/// Largest value representable in a 40-bit field.
pub const U40_MAX: u64 = (1 << 40) - 1;

// PUBDATA WRITER
// ================================================================================================

/// Big-endian fixed-width writers.
pub trait PubdataWriter: ByteWriter {
    fn write_u16_be(&mut self, value: u16) {
        self.write_bytes(&value.to_be_bytes());
    }

    fn write_u32_be(&mut self, value: u32) {
        self.write_bytes(&value.to_be_bytes());
    }

    /// Writes the low 40 bits of `value`.
    ///
    /// Callers must make sure the value fits; [PackedAmount](crate::PackedAmount) guarantees it
    /// at construction.
    fn write_u40_be(&mut self, value: u64) {
        debug_assert!(value <= U40_MAX, "value {value} does not fit into 40 bits");
        self.write_bytes(&value.to_be_bytes()[3..]);
    }

    fn write_u128_be(&mut self, value: u128) {
        self.write_bytes(&value.to_be_bytes());
    }

    /// Writes `len` zero bytes.
    fn write_zeros(&mut self, len: usize) {
        for _ in 0..len {
            self.write_u8(0);
        }
    }
}

impl<W: ByteWriter> PubdataWriter for W {}

// PUBDATA READER
// ================================================================================================

/// Big-endian fixed-width readers.
///
/// Every method takes the name of the field being read so that a truncated record reports which
/// field it ran out of bytes on.
pub trait PubdataReader: ByteReader + Sized {
    fn read_field<const N: usize>(
        &mut self,
        field: &'static str,
    ) -> Result<[u8; N], DeserializationError> {
        self.read_array::<N>().map_err(|err| annotate(field, err))
    }

    fn read_u8_be(&mut self, field: &'static str) -> Result<u8, DeserializationError> {
        self.read_field::<1>(field).map(|bytes| bytes[0])
    }

    fn read_u16_be(&mut self, field: &'static str) -> Result<u16, DeserializationError> {
        self.read_field(field).map(u16::from_be_bytes)
    }

    fn read_u32_be(&mut self, field: &'static str) -> Result<u32, DeserializationError> {
        self.read_field(field).map(u32::from_be_bytes)
    }

    fn read_u40_be(&mut self, field: &'static str) -> Result<u64, DeserializationError> {
        let bytes = self.read_field::<5>(field)?;
        let mut buf = [0u8; 8];
        buf[3..].copy_from_slice(&bytes);
        Ok(u64::from_be_bytes(buf))
    }

    fn read_u128_be(&mut self, field: &'static str) -> Result<u128, DeserializationError> {
        self.read_field(field).map(u128::from_be_bytes)
    }

    /// Reads a value of type `D` and tags any failure with the field name.
    fn read_named<D: Deserializable>(
        &mut self,
        field: &'static str,
    ) -> Result<D, DeserializationError> {
        D::read_from(self).map_err(|err| annotate(field, err))
    }

    /// Reads `len` bytes which must all be zero.
    fn read_zeros(&mut self, len: usize, field: &'static str) -> Result<(), DeserializationError> {
        let bytes = self.read_slice(len).map_err(|err| annotate(field, err))?;
        if bytes.iter().any(|byte| *byte != 0) {
            return Err(DeserializationError::InvalidValue(format!(
                "field `{field}` must contain {len} zero bytes"
            )));
        }
        Ok(())
    }
}

impl<R: ByteReader> PubdataReader for R {}

// HELPERS
// ================================================================================================

fn annotate(field: &'static str, err: DeserializationError) -> DeserializationError {
    let message: String = match err {
        DeserializationError::UnexpectedEOF => format!("field `{field}` is truncated"),
        DeserializationError::InvalidValue(msg) => format!("field `{field}`: {msg}"),
        other => return other,
    };
    DeserializationError::InvalidValue(message)
}

// TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use assert_matches::assert_matches;

    use super::*;
    use crate::utils::serde::SliceReader;

    #[test]
    fn integers_are_big_endian_and_left_padded() {
        let mut bytes = Vec::new();
        bytes.write_u16_be(0x0102);
        bytes.write_u32_be(7);
        bytes.write_u40_be(0x01_0203_0405);
        bytes.write_u128_be(1);

        let mut expected = vec![0x01, 0x02, 0x00, 0x00, 0x00, 0x07, 0x01, 0x02, 0x03, 0x04, 0x05];
        expected.extend_from_slice(&[0; 15]);
        expected.push(0x01);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn reads_mirror_writes() {
        let mut bytes = Vec::new();
        bytes.write_u8(9);
        bytes.write_u16_be(u16::MAX);
        bytes.write_u40_be(U40_MAX);
        bytes.write_u128_be(u128::MAX - 1);
        bytes.write_zeros(3);

        let mut reader = SliceReader::new(&bytes);
        assert_eq!(reader.read_u8_be("a").unwrap(), 9);
        assert_eq!(reader.read_u16_be("b").unwrap(), u16::MAX);
        assert_eq!(reader.read_u40_be("c").unwrap(), U40_MAX);
        assert_eq!(reader.read_u128_be("d").unwrap(), u128::MAX - 1);
        reader.read_zeros(3, "e").unwrap();
        assert!(!reader.has_more_bytes());
    }

    #[test]
    fn truncated_field_names_the_field() {
        let bytes = [0u8; 3];
        let mut reader = SliceReader::new(&bytes);
        let err = reader.read_u32_be("account_id").unwrap_err();
        assert_matches!(err, DeserializationError::InvalidValue(msg) if msg.contains("account_id"));
    }

    #[test]
    fn non_zero_padding_is_rejected() {
        let bytes = [0u8, 0, 1];
        let mut reader = SliceReader::new(&bytes);
        assert_matches!(
            reader.read_zeros(3, "padding"),
            Err(DeserializationError::InvalidValue(_))
        );
    }
}
