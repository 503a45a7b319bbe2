//! Primitive encoding/decoding for the guard wire format.
//!
//! Everything is fixed width and little-endian: integers, one-byte bools,
//! 32-byte keys and zero-padded fixed string slots.

use crate::error::DecodeError;
use crate::model::Pubkey;

// =============================================================================
// DECODING
// =============================================================================

/// Reader for decoding binary data.
///
/// Wraps a byte slice and provides methods for reading primitives
/// with bounds checking and error handling.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the current position in the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of remaining bytes.
    pub fn remaining_len(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns true if all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Advances past `n` bytes without reading them.
    pub fn skip(&mut self, n: usize, context: &'static str) -> Result<(), DecodeError> {
        self.read_bytes(n, context).map(|_| ())
    }

    /// Reads exactly n bytes.
    #[inline]
    pub fn read_bytes(&mut self, n: usize, context: &'static str) -> Result<&'a [u8], DecodeError> {
        let remaining = self.remaining_len();
        if n > remaining {
            return Err(DecodeError::TruncatedInput {
                context,
                needed: n,
                remaining,
            });
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Reads a fixed-size byte array.
    #[inline]
    pub fn read_array<const N: usize>(&mut self, context: &'static str) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N, context)?);
        Ok(out)
    }

    /// Reads a single byte.
    #[inline]
    pub fn read_u8(&mut self, context: &'static str) -> Result<u8, DecodeError> {
        let [byte] = self.read_array::<1>(context)?;
        Ok(byte)
    }

    /// Reads a little-endian u16.
    #[inline]
    pub fn read_u16(&mut self, context: &'static str) -> Result<u16, DecodeError> {
        Ok(u16::from_le_bytes(self.read_array(context)?))
    }

    /// Reads a little-endian u32.
    #[inline]
    pub fn read_u32(&mut self, context: &'static str) -> Result<u32, DecodeError> {
        Ok(u32::from_le_bytes(self.read_array(context)?))
    }

    /// Reads a little-endian u64.
    #[inline]
    pub fn read_u64(&mut self, context: &'static str) -> Result<u64, DecodeError> {
        Ok(u64::from_le_bytes(self.read_array(context)?))
    }

    /// Reads a little-endian i64.
    #[inline]
    pub fn read_i64(&mut self, context: &'static str) -> Result<i64, DecodeError> {
        Ok(i64::from_le_bytes(self.read_array(context)?))
    }

    /// Reads a one-byte bool, rejecting anything other than 0 or 1.
    pub fn read_bool(&mut self, field: &'static str) -> Result<bool, DecodeError> {
        match self.read_u8(field)? {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(DecodeError::InvalidBool { field, value }),
        }
    }

    /// Reads a 32-byte public key.
    #[inline]
    pub fn read_pubkey(&mut self, context: &'static str) -> Result<Pubkey, DecodeError> {
        self.read_array(context)
    }

    /// Reads a fixed-width string slot.
    ///
    /// The whole slot is decoded, padding included. Invalid UTF-8 is
    /// replaced rather than rejected.
    pub fn read_fixed_str(&mut self, width: usize, context: &'static str) -> Result<String, DecodeError> {
        let bytes = self.read_bytes(width, context)?;
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Writer for encoding binary data.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Creates a new writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates a new writer with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Returns the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Returns a reference to the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if no bytes have been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Writes a single byte.
    #[inline]
    pub fn write_u8(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Writes raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes `n` zero bytes.
    pub fn write_zeros(&mut self, n: usize) {
        self.buf.resize(self.buf.len() + n, 0);
    }

    /// Writes a little-endian u16.
    #[inline]
    pub fn write_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a little-endian u32.
    #[inline]
    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a little-endian u64.
    #[inline]
    pub fn write_u64(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a little-endian i64.
    #[inline]
    pub fn write_i64(&mut self, value: i64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a one-byte bool.
    #[inline]
    pub fn write_bool(&mut self, value: bool) {
        self.buf.push(value as u8);
    }

    /// Writes a 32-byte public key.
    #[inline]
    pub fn write_pubkey(&mut self, key: &Pubkey) {
        self.buf.extend_from_slice(key);
    }

    /// Writes `s` into a `width`-byte slot, zero-filling the rest.
    ///
    /// The caller must ensure `s.len() <= width`.
    pub fn write_fixed_str(&mut self, s: &str, width: usize) {
        debug_assert!(s.len() <= width);
        self.buf.extend_from_slice(s.as_bytes());
        self.write_zeros(width - s.len());
    }

    /// Overwrites a previously written little-endian u64 at `pos`.
    ///
    /// Used to fill in a reserved header once its value is known.
    pub fn patch_u64(&mut self, pos: usize, value: u64) {
        self.buf[pos..pos + 8].copy_from_slice(&value.to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_are_little_endian() {
        let mut writer = Writer::new();
        writer.write_u16(0x0102);
        writer.write_u32(0x03040506);
        writer.write_u64(0x0708090a0b0c0d0e);
        assert_eq!(
            writer.as_bytes(),
            &[
                0x02, 0x01, 0x06, 0x05, 0x04, 0x03, 0x0e, 0x0d, 0x0c, 0x0b, 0x0a, 0x09, 0x08, 0x07
            ]
        );

        let mut reader = Reader::new(writer.as_bytes());
        assert_eq!(reader.read_u16("test").unwrap(), 0x0102);
        assert_eq!(reader.read_u32("test").unwrap(), 0x03040506);
        assert_eq!(reader.read_u64("test").unwrap(), 0x0708090a0b0c0d0e);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_i64_negative() {
        let mut writer = Writer::new();
        writer.write_i64(-2);
        assert_eq!(writer.as_bytes(), &[0xfe, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);
        let mut reader = Reader::new(writer.as_bytes());
        assert_eq!(reader.read_i64("test").unwrap(), -2);
    }

    #[test]
    fn test_bool_rejects_other_values() {
        let data = [1u8, 0, 2];
        let mut reader = Reader::new(&data);
        assert!(reader.read_bool("flag").unwrap());
        assert!(!reader.read_bool("flag").unwrap());
        assert!(matches!(
            reader.read_bool("flag"),
            Err(DecodeError::InvalidBool { field: "flag", value: 2 })
        ));
    }

    #[test]
    fn test_fixed_str_pads_and_keeps_padding() {
        let mut writer = Writer::new();
        writer.write_fixed_str("VIP", 6);
        assert_eq!(writer.as_bytes(), b"VIP\0\0\0");

        let mut reader = Reader::new(writer.as_bytes());
        assert_eq!(reader.read_fixed_str(6, "label").unwrap(), "VIP\0\0\0");
    }

    #[test]
    fn test_patch_u64() {
        let mut writer = Writer::new();
        writer.write_u64(0);
        writer.write_u8(0xaa);
        writer.patch_u64(0, 0x08);
        assert_eq!(writer.as_bytes(), &[8, 0, 0, 0, 0, 0, 0, 0, 0xaa]);
    }

    #[test]
    fn test_truncated_input() {
        let data = [0u8; 5];
        let mut reader = Reader::new(&data);
        let result = reader.read_u64("mask");
        assert!(matches!(
            result,
            Err(DecodeError::TruncatedInput { context: "mask", needed: 8, remaining: 5 })
        ));
        // a failed read consumes nothing
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_skip() {
        let data = [0u8; 4];
        let mut reader = Reader::new(&data);
        reader.skip(3, "header").unwrap();
        assert_eq!(reader.remaining_len(), 1);
        assert!(matches!(reader.skip(2, "header"), Err(DecodeError::TruncatedInput { .. })));
    }
}
