//! Detection of the file layout before any data element is read.
//!
//! [`Attribute::check`] looks for the `DICM` magic code after the
//! 128-byte preamble, then guesses the byte order of the stream
//! from the group number of the first data element.

use snafu::{Backtrace, ResultExt, Snafu};
use std::io::{self, Read, Seek, SeekFrom};

const DICM_MAGIC_CODE: [u8; 4] = [b'D', b'I', b'C', b'M'];

/// The size of the file preamble, before the magic code.
pub const PREAMBLE_LENGTH: u64 = 128;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not seek to position {}", position))]
    Seek {
        position: u64,
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Could not read the magic code"))]
    ReadMagicCode {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Could not read the first data element"))]
    ReadFirstElement {
        backtrace: Backtrace,
        source: io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The layout attributes of a DICOM stream.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    /// Whether the stream starts with a preamble and the `DICM` code
    pub part10: bool,
    /// Whether scalars are in the opposite byte order of the host
    pub swap: bool,
}

impl Attribute {
    /// Inspect the start of `source`.
    ///
    /// On success, the source is positioned at the first data element:
    /// right after the magic code for Part 10 files,
    /// at the very start otherwise.
    pub fn check<S>(mut source: S) -> Result<Self>
    where
        S: Read + Seek,
    {
        source
            .seek(SeekFrom::Start(PREAMBLE_LENGTH))
            .context(SeekSnafu {
                position: PREAMBLE_LENGTH,
            })?;
        let mut magic = [0u8; 4];
        let part10 = match source.read_exact(&mut magic) {
            Ok(()) => magic == DICM_MAGIC_CODE,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => false,
            Err(e) => return Err(e).context(ReadMagicCodeSnafu),
        };

        let attribute = Attribute {
            part10,
            swap: false,
        };
        let start = attribute.position();
        source
            .seek(SeekFrom::Start(start))
            .context(SeekSnafu { position: start })?;

        // group numbers of the first element are small,
        // so a large one means the other byte order
        let mut group = [0u8; 2];
        let swap = match source.read_exact(&mut group) {
            Ok(()) => i16::from_ne_bytes(group) > 0xFF,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => false,
            Err(e) => return Err(e).context(ReadFirstElementSnafu),
        };
        source
            .seek(SeekFrom::Start(start))
            .context(SeekSnafu { position: start })?;

        Ok(Attribute { swap, ..attribute })
    }

    /// The position of the first data element.
    pub fn position(&self) -> u64 {
        if self.part10 {
            PREAMBLE_LENGTH + DICM_MAGIC_CODE.len() as u64
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn part10(first_bytes: &[u8]) -> Vec<u8> {
        let mut data = vec![0u8; 128];
        data.extend_from_slice(b"DICM");
        data.extend_from_slice(first_bytes);
        data
    }

    #[test]
    fn detects_part10_file() {
        let data = part10(&[0x02, 0x00, 0x00, 0x00]);
        let mut cursor = Cursor::new(&data);
        let attribute = Attribute::check(&mut cursor).unwrap();
        assert!(attribute.part10);
        assert_eq!(attribute.position(), 132);
        assert_eq!(cursor.position(), 132);
    }

    #[test]
    fn bare_data_set_is_rewound() {
        let data: &[u8] = &[0x08, 0x00, 0x60, 0x00, 0x02, 0x00, 0x00, 0x00, b'C', b'T'];
        let mut cursor = Cursor::new(data);
        let attribute = Attribute::check(&mut cursor).unwrap();
        assert!(!attribute.part10);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn detects_foreign_byte_order() {
        let native = Attribute::check(Cursor::new(part10(&0x0002u16.to_ne_bytes()))).unwrap();
        assert!(!native.swap);

        let foreign = Attribute::check(Cursor::new(part10(&0x0200u16.to_ne_bytes()))).unwrap();
        assert!(foreign.swap);
    }

    #[test]
    fn empty_source() {
        let attribute = Attribute::check(Cursor::new(Vec::new())).unwrap();
        assert_eq!(attribute, Attribute::default());
    }
}
