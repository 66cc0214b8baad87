//! This module provides the stateful decoder of data elements.
//!
//! A [`StatefulDecoder`] owns the byte source and the swap flag
//! detected for it, and decodes one data element at a time:
//! the tag, then the value representation header
//! (falling back to the tag's dictionary VR on implicit VR streams),
//! then the value.

use dicom_lite_core::dictionary::DataDictionary;
use dicom_lite_core::header::{
    DataType, ElementEncoding, Length, Tag, Vr, VrType, PIXEL_DATA,
};
use dicom_lite_core::value::{PrimitiveValue, Value};
use dicom_lite_core::Element;
use dicom_lite_dictionary_std::{StandardDataDictionary, StandardVrDictionary};
use dicom_lite_encoding::decode::StreamReader;
use dicom_lite_encoding::Endianness;
use snafu::{Backtrace, ResultExt, Snafu};
use std::io::{self, Read};

#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Could not read tag at position {}", position))]
    ReadTag {
        position: u64,
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Could not read value representation at position {}", position))]
    ReadVr {
        position: u64,
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Could not read reserved bytes at position {}", position))]
    ReadReserved {
        position: u64,
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Could not read value length at position {}", position))]
    ReadLength {
        position: u64,
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display(
        "Could not read {} value of {} bytes at position {}",
        data_type,
        len,
        position
    ))]
    ReadValue {
        data_type: DataType,
        len: u32,
        position: u64,
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Could not read item header at position {}", position))]
    ReadItemHeader {
        position: u64,
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Could not read {} bytes of item value at position {}", len, position))]
    ReadItemValue {
        len: u32,
        position: u64,
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Unknown element encoding for value representation {}", vr_type))]
    UnknownElementEncoding {
        vr_type: VrType,
        backtrace: Backtrace,
    },
    #[snafu(display("Sequence has more than {} items", max_items))]
    TooManyItems {
        max_items: usize,
        backtrace: Backtrace,
    },
    #[snafu(display("Encapsulated (compressed) pixel data is not supported"))]
    EncapsulatedPixelData { backtrace: Backtrace },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The default bound on the number of items scanned in one sequence.
pub const DEFAULT_MAX_ITEMS: usize = 65_536;

/// Options for the stateful decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct DecoderOptions {
    /// The maximum number of items scanned in one sequence value
    pub max_items: usize,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        DecoderOptions {
            max_items: DEFAULT_MAX_ITEMS,
        }
    }
}

impl DecoderOptions {
    /// Create the default set of options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the maximum number of items scanned in one sequence value.
    pub fn max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }
}

type ScalarDecodeFn = fn(&StreamReader, &mut dyn Read) -> io::Result<PrimitiveValue>;

fn decode_char(reader: &StreamReader, source: &mut dyn Read) -> io::Result<PrimitiveValue> {
    reader.decode_i8(source).map(PrimitiveValue::Char)
}

fn decode_uchar(reader: &StreamReader, source: &mut dyn Read) -> io::Result<PrimitiveValue> {
    reader.decode_u8(source).map(PrimitiveValue::UChar)
}

fn decode_short(reader: &StreamReader, source: &mut dyn Read) -> io::Result<PrimitiveValue> {
    reader.decode_ss(source).map(PrimitiveValue::Short)
}

fn decode_ushort(reader: &StreamReader, source: &mut dyn Read) -> io::Result<PrimitiveValue> {
    reader.decode_us(source).map(PrimitiveValue::UShort)
}

fn decode_int(reader: &StreamReader, source: &mut dyn Read) -> io::Result<PrimitiveValue> {
    reader.decode_sl(source).map(PrimitiveValue::Int)
}

fn decode_uint(reader: &StreamReader, source: &mut dyn Read) -> io::Result<PrimitiveValue> {
    reader.decode_ul(source).map(PrimitiveValue::UInt)
}

fn decode_float(reader: &StreamReader, source: &mut dyn Read) -> io::Result<PrimitiveValue> {
    reader.decode_fl(source).map(PrimitiveValue::Float)
}

fn decode_double(reader: &StreamReader, source: &mut dyn Read) -> io::Result<PrimitiveValue> {
    reader.decode_fd(source).map(PrimitiveValue::Double)
}

/// The scalar decode routine of each fixed-size data type.
fn scalar_decoder(data_type: DataType) -> Option<ScalarDecodeFn> {
    let f: ScalarDecodeFn = match data_type {
        DataType::Char => decode_char,
        DataType::UChar => decode_uchar,
        DataType::Short => decode_short,
        DataType::UShort => decode_ushort,
        DataType::Int => decode_int,
        DataType::UInt => decode_uint,
        DataType::Float => decode_float,
        DataType::Double => decode_double,
        DataType::String | DataType::Other => return None,
    };
    Some(f)
}

/// Remove the trailing padding of a text value.
fn trim_trail_padding(mut text: String) -> String {
    let len = text.trim_end_matches(|c: char| c == ' ' || c == '\0').len();
    text.truncate(len);
    text
}

/// A stateful abstraction for the data element decoding process.
///
/// `S` is the byte source, `D` the attribute dictionary
/// used to resolve tag names and default value representations.
#[derive(Debug)]
pub struct StatefulDecoder<S, D = StandardDataDictionary> {
    pub(crate) from: S,
    pub(crate) reader: StreamReader,
    dict: D,
    pub(crate) options: DecoderOptions,
    pub(crate) position: u64,
}

impl<S> StatefulDecoder<S>
where
    S: Read,
{
    /// Create a decoder over `from`, with the standard dictionary.
    /// `swap` tells whether scalars in the stream are in the opposite
    /// byte order of the host.
    pub fn new(from: S, swap: bool) -> Self {
        Self::new_with_position(from, swap, 0)
    }

    /// Create a decoder over a source which was already read
    /// up to `position` bytes.
    pub fn new_with_position(from: S, swap: bool, position: u64) -> Self {
        StatefulDecoder::new_with(
            from,
            swap,
            position,
            StandardDataDictionary,
            DecoderOptions::default(),
        )
    }
}

impl<S, D> StatefulDecoder<S, D>
where
    S: Read,
    D: DataDictionary,
{
    /// Create a decoder with a custom dictionary and options.
    pub fn new_with(from: S, swap: bool, position: u64, dict: D, options: DecoderOptions) -> Self {
        StatefulDecoder {
            from,
            reader: StreamReader::new(swap),
            dict,
            options,
            position,
        }
    }

    /// Whether scalars are currently byte-swapped.
    pub fn swap(&self) -> bool {
        self.reader.swap()
    }

    /// The byte order of the scalars in the stream.
    pub fn endianness(&self) -> Endianness {
        self.reader.endianness()
    }

    /// Switch the byte order of the scalars read from now on.
    pub fn set_endianness(&mut self, endianness: Endianness) {
        self.reader = StreamReader::for_endianness(endianness);
    }

    /// The number of bytes read from the source so far,
    /// including those before the decoder was created.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Retrieve a mutable reference to the byte source.
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.from
    }

    /// Retrieve the byte source.
    pub fn into_inner(self) -> S {
        self.from
    }

    /// Decode a tag and resolve its name and default value representation
    /// through the dictionary.
    /// Unknown tags resolve to an empty name and `VrType::NONE`.
    pub fn decode_tag(&mut self) -> Result<(Tag, &'static str, VrType)> {
        let tag = self
            .reader
            .decode_tag(&mut self.from)
            .context(ReadTagSnafu {
                position: self.position,
            })?;
        self.position += 4;
        let (name, vr) = self.dict.resolve(tag);
        Ok((tag, name, vr))
    }

    /// Decode the value representation header which follows a tag.
    ///
    /// The two bytes at the current position are read as a VR code.
    /// If they are not a known code, the stream is implicit VR:
    /// the bytes are the start of a 4-byte length
    /// and `default_vr` (the tag's dictionary VR) describes the value.
    pub fn decode_vr(&mut self, default_vr: VrType) -> Result<Vr> {
        let mut code = [0u8; 2];
        self.from.read_exact(&mut code).context(ReadVrSnafu {
            position: self.position,
        })?;
        self.position += 2;

        let vr_dict = StandardVrDictionary;
        let (vr_type, encoding, data_type) = match vr_dict.by_code(code) {
            Some(entry) => (entry.vr_type, entry.encoding, entry.data_type),
            None => {
                let entry = vr_dict.by_type(default_vr);
                (entry.vr_type, ElementEncoding::Implicit, entry.data_type)
            }
        };

        let position = self.position;
        let length = match encoding {
            ElementEncoding::Implicit => {
                // the code bytes were the low half of the length
                let len = self
                    .reader
                    .decode_ul((&code[..]).chain(&mut self.from))
                    .context(ReadLengthSnafu {
                        position: position - 2,
                    })?;
                self.position += 2;
                len
            }
            ElementEncoding::Explicit => {
                let len = self
                    .reader
                    .decode_us(&mut self.from)
                    .context(ReadLengthSnafu { position })?;
                self.position += 2;
                u32::from(len)
            }
            ElementEncoding::ExplicitCustom => {
                let mut reserved = [0u8; 2];
                self.from
                    .read_exact(&mut reserved)
                    .context(ReadReservedSnafu { position })?;
                let len = self
                    .reader
                    .decode_ul(&mut self.from)
                    .context(ReadLengthSnafu {
                        position: position + 2,
                    })?;
                self.position += 6;
                len
            }
            ElementEncoding::Unknown => {
                return UnknownElementEncodingSnafu { vr_type }.fail();
            }
        };

        Ok(Vr::new(vr_type, encoding, data_type, Length(length)))
    }

    /// Read the value described by a value representation header.
    ///
    /// Values of undefined length, and sequences of defined length,
    /// are read as items.
    /// A fixed-size data type whose size disagrees with the value length
    /// is read as opaque bytes.
    pub fn read_value(&mut self, vr: &Vr) -> Result<Value> {
        let len = match vr.length.get() {
            None => {
                let text = self.read_item(vr.length)?;
                return Ok(Value::new(PrimitiveValue::Str(text), vr.length));
            }
            Some(len) => len,
        };
        if vr.vr_type == VrType::SQ {
            let text = self.read_item(vr.length)?;
            return Ok(Value::new(PrimitiveValue::Str(text), vr.length));
        }
        if len == 0 {
            return Ok(Value::empty(vr.length));
        }

        let data_type = if vr.data_type.is_fixed_size() && vr.data_type.size() != len {
            DataType::Other
        } else {
            vr.data_type
        };

        let position = self.position;
        let primitive = match scalar_decoder(data_type) {
            Some(decode) => decode(&self.reader, &mut self.from),
            None if data_type == DataType::String => self
                .reader
                .read_string(&mut self.from, len as usize)
                .map(|text| PrimitiveValue::Str(trim_trail_padding(text))),
            None => self
                .reader
                .read_bytes(&mut self.from, len as usize)
                .map(PrimitiveValue::Bytes),
        }
        .context(ReadValueSnafu {
            data_type,
            len,
            position,
        })?;
        self.position += u64::from(len);

        Ok(Value::new(primitive, vr.length))
    }

    /// Decode a full data element: tag, value representation and value.
    ///
    /// The value of the pixel data element is not read:
    /// the source is left at the start of the pixel bytes.
    pub fn decode_element(&mut self) -> Result<Element> {
        let (tag, name, default_vr) = self.decode_tag()?;
        let vr = self.decode_vr(default_vr)?;

        if tag == PIXEL_DATA {
            snafu::ensure!(vr.length.is_defined(), EncapsulatedPixelDataSnafu);
            return Ok(Element::new(tag, name, vr, Value::empty(vr.length)));
        }

        let value = self.read_value(&vr)?;
        Ok(Element::new(tag, name, vr, value))
    }

    /// Read exactly `len` raw bytes from the source.
    pub fn read_bytes(&mut self, len: usize) -> io::Result<Vec<u8>> {
        let bytes = self.reader.read_bytes(&mut self.from, len)?;
        self.position += len as u64;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_lite_core::dictionary::StubDataDictionary;
    use std::io::Cursor;

    // manually crafting some DICOM data elements
    //  Tag: (0002,0002) Media Storage SOP Class UID
    //  VR: UI
    //  Length: 26
    //  Value: "1.2.840.10008.5.1.4.1.1.1\0"
    // --
    //  Tag: (0028,0010) Rows
    //  VR: US
    //  Length: 2
    //  Value: 512
    // --
    //  Tag: (7FE0,0010) Pixel Data
    //  VR: OW
    //  Reserved bytes: 0x0000
    //  Length: 4
    #[rustfmt::skip]
    const RAW_EXPLICIT_LE: &[u8] = &[
        0x02, 0x00, 0x02, 0x00,
            b'U', b'I',
            0x1a, 0x00,
            b'1', b'.', b'2', b'.', b'8', b'4', b'0', b'.', b'1', b'0', b'0', b'0', b'8', b'.', b'5', b'.', b'1', b'.',
            b'4', b'.', b'1', b'.', b'1', b'.', b'1', 0x00,
        0x28, 0x00, 0x10, 0x00,
            b'U', b'S',
            0x02, 0x00,
            0x00, 0x02,
        0xe0, 0x7f, 0x10, 0x00,
            b'O', b'W',
            0x00, 0x00,
            0x04, 0x00, 0x00, 0x00,
        // pixel bytes
        0x01, 0x02, 0x03, 0x04,
    ];

    fn le_decoder(data: &[u8]) -> StatefulDecoder<Cursor<&[u8]>> {
        let swap = cfg!(target_endian = "big");
        StatefulDecoder::new(Cursor::new(data), swap)
    }

    #[test]
    fn decode_explicit_vr_le_elements() {
        let mut decoder = le_decoder(RAW_EXPLICIT_LE);

        let elem = decoder.decode_element().unwrap();
        assert_eq!(elem.tag(), Tag(0x0002, 0x0002));
        assert_eq!(elem.name(), "Media Storage SOP Class UID");
        assert_eq!(elem.vr().vr_type, VrType::UI);
        assert_eq!(elem.vr().encoding, ElementEncoding::Explicit);
        assert_eq!(elem.vr().length, Length(26));
        assert_eq!(elem.primitive().string().unwrap(), "1.2.840.10008.5.1.4.1.1.1");
        assert_eq!(decoder.position(), 34);

        let elem = decoder.decode_element().unwrap();
        assert_eq!(elem.tag(), Tag(0x0028, 0x0010));
        assert_eq!(elem.primitive().ushort().unwrap(), 512);
        assert_eq!(decoder.position(), 44);

        let elem = decoder.decode_element().unwrap();
        assert_eq!(elem.tag(), PIXEL_DATA);
        assert_eq!(elem.vr().vr_type, VrType::OW);
        assert_eq!(elem.vr().encoding, ElementEncoding::ExplicitCustom);
        assert_eq!(elem.vr().length, Length(4));
        assert!(elem.primitive().is_empty());
        // VR code, reserved bytes and length were all consumed
        assert_eq!(decoder.position(), 56);
        assert_eq!(decoder.read_bytes(4).unwrap(), vec![1, 2, 3, 4]);
    }

    /// A US value of [0x2A, 0x00] is 42 without swapping,
    /// and 0x2A00 with swapping, on a little endian host.
    #[cfg(target_endian = "little")]
    #[test]
    fn read_us_value_with_and_without_swap() {
        let vr = Vr::new(VrType::US, ElementEncoding::Explicit, DataType::UShort, Length(2));
        let data: &[u8] = &[0x2A, 0x00];

        let mut decoder = StatefulDecoder::new(data, false);
        let value = decoder.read_value(&vr).unwrap();
        assert_eq!(value.primitive(), &PrimitiveValue::UShort(42));

        let mut decoder = StatefulDecoder::new(data, true);
        let value = decoder.read_value(&vr).unwrap();
        assert_eq!(value.primitive(), &PrimitiveValue::UShort(10752));
        assert_eq!(value.length().get(), Some(2));
    }

    #[test]
    fn implicit_vr_falls_back_to_dictionary() {
        #[rustfmt::skip]
        let data: Vec<u8> = [
            &0x0028u16.to_le_bytes()[..], &0x0011u16.to_le_bytes()[..], // (0028,0011) Columns
            &2u32.to_le_bytes()[..],
            &300u16.to_le_bytes()[..],
            &0x0010u16.to_le_bytes()[..], &0x0010u16.to_le_bytes()[..], // (0010,0010) Patient's Name
            &6u32.to_le_bytes()[..],
            b"DOE^J ",
        ]
        .concat();
        let mut decoder = le_decoder(&data);

        let elem = decoder.decode_element().unwrap();
        assert_eq!(elem.name(), "Columns");
        assert_eq!(elem.vr().vr_type, VrType::US);
        assert_eq!(elem.vr().encoding, ElementEncoding::Implicit);
        assert_eq!(elem.vr().data_type, DataType::UShort);
        assert_eq!(elem.primitive().ushort().unwrap(), 300);
        assert_eq!(decoder.position(), 10);

        let elem = decoder.decode_element().unwrap();
        assert_eq!(elem.vr().vr_type, VrType::PN);
        // trailing padding is removed
        assert_eq!(elem.primitive().string().unwrap(), "DOE^J");
        assert_eq!(elem.value().length(), Length(6));
        assert_eq!(decoder.position(), 24);
    }

    /// Private tags decode as bare, unknown elements
    /// and leave the source at the next element.
    #[test]
    fn unknown_tag_is_decoded_and_skipped() {
        #[rustfmt::skip]
        let data: Vec<u8> = [
            &0x0009u16.to_le_bytes()[..], &0x0010u16.to_le_bytes()[..], // (0009,0010) private
            &4u32.to_le_bytes()[..],
            b"ACME",
            &0x0008u16.to_le_bytes()[..], &0x0060u16.to_le_bytes()[..], // (0008,0060) Modality
            &2u32.to_le_bytes()[..],
            b"CT",
        ]
        .concat();
        let mut decoder = le_decoder(&data);

        let elem = decoder.decode_element().unwrap();
        assert!(!elem.is_known());
        assert_eq!(elem.vr().vr_type, VrType::NONE);
        assert_eq!(elem.primitive().string().unwrap(), "ACME");

        let elem = decoder.decode_element().unwrap();
        assert!(elem.is_known());
        assert_eq!(elem.primitive().string().unwrap(), "CT");
    }

    #[test]
    fn custom_dictionary_leaves_every_tag_unknown() {
        let data: Vec<u8> = [
            &0x0028u16.to_le_bytes()[..],
            &0x0010u16.to_le_bytes()[..],
            &2u32.to_le_bytes()[..],
            &16u16.to_le_bytes()[..],
        ]
        .concat();
        let swap = cfg!(target_endian = "big");
        let mut decoder = StatefulDecoder::new_with(
            Cursor::new(&data),
            swap,
            0,
            StubDataDictionary,
            DecoderOptions::new(),
        );
        let elem = decoder.decode_element().unwrap();
        assert!(!elem.is_known());
        // without a dictionary VR, the value is kept as text
        assert_eq!(elem.vr().data_type, DataType::String);
        assert!(elem.primitive().string().is_ok());
    }

    #[test]
    fn mismatched_fixed_size_is_read_as_bytes() {
        // (0018,1310) Acquisition Matrix, US with 4 values
        #[rustfmt::skip]
        let data: &[u8] = &[
            0x18, 0x00, 0x10, 0x13,
            b'U', b'S',
            0x08, 0x00,
            0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00,
        ];
        let mut decoder = le_decoder(data);
        let elem = decoder.decode_element().unwrap();
        assert_eq!(elem.vr().data_type, DataType::UShort);
        assert_eq!(
            elem.primitive(),
            &PrimitiveValue::Bytes(vec![0, 0, 0, 1, 0, 1, 0, 0])
        );
        assert_eq!(decoder.position(), 16);
    }

    #[test]
    fn float_and_signed_values() {
        #[rustfmt::skip]
        let data: Vec<u8> = [
            &[0x28, 0x00, 0x06, 0x01][..], b"SS", &[0x02, 0x00][..],  // (0028,0106) SS
            &(-100i16).to_le_bytes()[..],
            &[0x18, 0x00, 0x50, 0x00][..], b"FD", &[0x08, 0x00][..],  // (0018,0050) as FD
            &2.5f64.to_le_bytes()[..],
        ]
        .concat();
        let mut decoder = le_decoder(&data);
        let elem = decoder.decode_element().unwrap();
        assert_eq!(elem.primitive(), &PrimitiveValue::Short(-100));
        let elem = decoder.decode_element().unwrap();
        // the VR on the wire wins over the dictionary VR
        assert_eq!(elem.vr().vr_type, VrType::FD);
        assert_eq!(elem.primitive(), &PrimitiveValue::Double(2.5));
    }

    #[test]
    fn encapsulated_pixel_data_is_rejected() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            0xe0, 0x7f, 0x10, 0x00,
            b'O', b'B',
            0x00, 0x00,
            0xff, 0xff, 0xff, 0xff,
        ];
        let mut decoder = le_decoder(data);
        assert!(matches!(
            decoder.decode_element(),
            Err(Error::EncapsulatedPixelData { .. })
        ));
    }

    #[test]
    fn truncated_value_fails() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            0x08, 0x00, 0x60, 0x00,
            b'C', b'S',
            0x04, 0x00,
            b'C', b'T',
        ];
        let mut decoder = le_decoder(data);
        assert!(matches!(
            decoder.decode_element(),
            Err(Error::ReadValue { len: 4, position: 8, .. })
        ));
    }

    #[test]
    fn empty_source_fails_on_tag() {
        let mut decoder = le_decoder(&[]);
        assert!(matches!(
            decoder.decode_element(),
            Err(Error::ReadTag { position: 0, .. })
        ));
    }
}
