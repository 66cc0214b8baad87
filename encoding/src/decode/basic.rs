//! This module provides the stream reader of primitive data,
//! in either byte order, decided at run-time by a swap flag.

use byteordered::{ByteOrdered, Endianness};
use dicom_lite_core::header::Tag;
use std::io::{self, Read};

type Result<T> = std::io::Result<T>;

/// The largest buffer reserved ahead of reading a byte string.
const PREALLOC_LIMIT: usize = 1 << 20;

/// The byte order of the running machine.
pub fn native_endianness() -> Endianness {
    if cfg!(target_endian = "big") {
        Endianness::Big
    } else {
        Endianness::Little
    }
}

/// A reader of fixed-size scalars and fixed-length byte strings.
///
/// Scalars are read in native byte order,
/// then byte-swapped if the stream has the opposite byte order.
/// Byte strings are never swapped.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct StreamReader {
    swap: bool,
}

impl StreamReader {
    /// Create a reader, swapping the bytes of every scalar if `swap` is set.
    pub fn new(swap: bool) -> Self {
        StreamReader { swap }
    }

    /// Create a reader for a stream in the given byte order.
    pub fn for_endianness(endianness: Endianness) -> Self {
        StreamReader::new(endianness != native_endianness())
    }

    /// Whether scalars are byte-swapped.
    pub fn swap(&self) -> bool {
        self.swap
    }

    /// The byte order of the stream.
    pub fn endianness(&self) -> Endianness {
        match (native_endianness(), self.swap) {
            (e, false) => e,
            (Endianness::Little, true) => Endianness::Big,
            (Endianness::Big, true) => Endianness::Little,
        }
    }

    /// Read an unsigned 8-bit integer.
    pub fn decode_u8<S>(&self, source: S) -> Result<u8>
    where
        S: Read,
    {
        ByteOrdered::runtime(source, self.endianness()).read_u8()
    }

    /// Read a signed 8-bit integer.
    pub fn decode_i8<S>(&self, source: S) -> Result<i8>
    where
        S: Read,
    {
        ByteOrdered::runtime(source, self.endianness()).read_i8()
    }

    /// Read an unsigned short (US).
    pub fn decode_us<S>(&self, source: S) -> Result<u16>
    where
        S: Read,
    {
        ByteOrdered::runtime(source, self.endianness()).read_u16()
    }

    /// Read a signed short (SS).
    pub fn decode_ss<S>(&self, source: S) -> Result<i16>
    where
        S: Read,
    {
        ByteOrdered::runtime(source, self.endianness()).read_i16()
    }

    /// Read an unsigned long (UL).
    pub fn decode_ul<S>(&self, source: S) -> Result<u32>
    where
        S: Read,
    {
        ByteOrdered::runtime(source, self.endianness()).read_u32()
    }

    /// Read a signed long (SL).
    pub fn decode_sl<S>(&self, source: S) -> Result<i32>
    where
        S: Read,
    {
        ByteOrdered::runtime(source, self.endianness()).read_i32()
    }

    /// Read a single precision float (FL).
    pub fn decode_fl<S>(&self, source: S) -> Result<f32>
    where
        S: Read,
    {
        ByteOrdered::runtime(source, self.endianness()).read_f32()
    }

    /// Read a double precision float (FD).
    pub fn decode_fd<S>(&self, source: S) -> Result<f64>
    where
        S: Read,
    {
        ByteOrdered::runtime(source, self.endianness()).read_f64()
    }

    /// Read a data element tag: group number, then element number.
    pub fn decode_tag<S>(&self, mut source: S) -> Result<Tag>
    where
        S: Read,
    {
        let group = self.decode_us(&mut source)?;
        let element = self.decode_us(&mut source)?;
        Ok(Tag(group, element))
    }

    /// Read exactly `len` bytes.
    ///
    /// The buffer grows with the bytes actually read,
    /// so a bogus length fails on end of stream
    /// instead of allocating it upfront.
    pub fn read_bytes<S>(&self, source: S, len: usize) -> Result<Vec<u8>>
    where
        S: Read,
    {
        let mut buf = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        source.take(len as u64).read_to_end(&mut buf)?;
        if buf.len() < len {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("expected {} bytes, got {}", len, buf.len()),
            ));
        }
        Ok(buf)
    }

    /// Read exactly `len` bytes as text.
    ///
    /// The text ends at the first NUL byte, if any.
    /// Invalid UTF-8 sequences are replaced.
    pub fn read_string<S>(&self, source: S, len: usize) -> Result<String>
    where
        S: Read,
    {
        let mut buf = self.read_bytes(source, len)?;
        if let Some(end) = buf.iter().position(|b| *b == 0) {
            buf.truncate(end);
        }
        Ok(match String::from_utf8(buf) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn swap_follows_native_order() {
        let bytes = 42u16.to_ne_bytes();
        let value = StreamReader::new(false).decode_us(&bytes[..]).unwrap();
        assert_eq!(value, 42);
        let value = StreamReader::new(true).decode_us(&bytes[..]).unwrap();
        assert_eq!(value, 42u16.swap_bytes());

        assert!(!StreamReader::for_endianness(native_endianness()).swap());
        assert_ne!(StreamReader::new(true).endianness(), native_endianness());
    }

    #[cfg(target_endian = "little")]
    #[test]
    fn read_us_little_endian_host() {
        let bytes: [u8; 2] = [0x2A, 0x00];
        assert_eq!(StreamReader::new(false).decode_us(&bytes[..]).unwrap(), 42);
        assert_eq!(
            StreamReader::new(true).decode_us(&bytes[..]).unwrap(),
            0x2A00
        );
    }

    #[test]
    fn read_tag_and_scalars() {
        #[rustfmt::skip]
        let bytes: Vec<u8> = [
            &0x0028u16.to_le_bytes()[..], &0x0010u16.to_le_bytes()[..], // (0028,0010)
            &(-2i16).to_le_bytes()[..],
            &1.5f32.to_le_bytes()[..],
            &0xFFFF_FFFFu32.to_le_bytes()[..],
        ]
        .concat();
        let reader = StreamReader::for_endianness(Endianness::Little);
        let mut cursor = Cursor::new(&bytes);
        assert_eq!(reader.decode_tag(&mut cursor).unwrap(), Tag(0x0028, 0x0010));
        assert_eq!(reader.decode_ss(&mut cursor).unwrap(), -2);
        assert_eq!(reader.decode_fl(&mut cursor).unwrap(), 1.5);
        assert_eq!(reader.decode_ul(&mut cursor).unwrap(), 0xFFFF_FFFF);
        assert!(reader.decode_us(&mut cursor).is_err());
    }

    #[test]
    fn big_endian_tag() {
        let bytes = [0x00, 0x28, 0x00, 0x10];
        let reader = StreamReader::for_endianness(Endianness::Big);
        assert_eq!(reader.decode_tag(&bytes[..]).unwrap(), Tag(0x0028, 0x0010));
    }

    #[test]
    fn strings_stop_at_nul() {
        let reader = StreamReader::new(true);
        let mut cursor = Cursor::new(b"CT\0\0MR".to_vec());
        assert_eq!(reader.read_string(&mut cursor, 4).unwrap(), "CT");
        assert_eq!(reader.read_string(&mut cursor, 2).unwrap(), "MR");
        assert!(reader.read_string(&mut cursor, 1).is_err());
    }
}
