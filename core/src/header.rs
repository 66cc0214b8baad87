//! This module contains the data types for a data element header:
//! tags, value representation codes, element encodings, data types
//! and value lengths.

use std::cmp::Ordering;
use std::fmt;

/// Idiomatic alias for a tag's group number.
pub type GroupNumber = u16;
/// Idiomatic alias for a tag's element number.
pub type ElementNumber = u16;

/// The data type for DICOM data element tags.
///
/// Identity is the (group, element) pair.
/// Tags are ordered lexicographically: by group number first,
/// then by element number.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy, Default)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// Getter for the tag's group value.
    #[inline]
    pub fn group(self) -> GroupNumber {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub fn element(self) -> ElementNumber {
        self.1
    }

    /// Whether this tag lies in the file meta information group (0002).
    #[inline]
    pub fn is_meta(self) -> bool {
        self.0 == 0x0002
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl PartialEq<(u16, u16)> for Tag {
    fn eq(&self, other: &(u16, u16)) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}

impl PartialEq<[u16; 2]> for Tag {
    fn eq(&self, other: &[u16; 2]) -> bool {
        self.0 == other[0] && self.1 == other[1]
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from(value: (u16, u16)) -> Tag {
        Tag(value.0, value.1)
    }
}

impl From<[u16; 2]> for Tag {
    #[inline]
    fn from(value: [u16; 2]) -> Tag {
        Tag(value[0], value[1])
    }
}

/// Item start marker.
pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
/// Item delimitation marker, closing an item of undefined length.
pub const ITEM_DELIMITATION: Tag = Tag(0xFFFE, 0xE00D);
/// Sequence delimitation marker, closing a sequence of undefined length.
pub const SEQUENCE_DELIMITATION: Tag = Tag(0xFFFE, 0xE0DD);
/// Pixel Data, the last element of the header.
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

/// An enum type for a DICOM value representation.
///
/// `NONE` stands for the absence of a known representation,
/// as is the case for private or otherwise undocumented tags.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd)]
pub enum VrType {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Single
    FL,
    /// Floating Point Double
    FD,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Time
    TM,
    /// Unique Identifier (UID)
    UI,
    /// Unsigned Long
    UL,
    /// Unsigned Short
    US,
    /// Unknown
    UN,
    /// Unlimited Text
    UT,
    /// No value representation
    NONE,
}

impl VrType {
    /// Retrieve the two-character code of this VR.
    pub fn to_str(self) -> &'static str {
        use VrType::*;
        match self {
            AE => "AE",
            AS => "AS",
            AT => "AT",
            CS => "CS",
            DA => "DA",
            DS => "DS",
            DT => "DT",
            FL => "FL",
            FD => "FD",
            IS => "IS",
            LO => "LO",
            LT => "LT",
            OB => "OB",
            OW => "OW",
            PN => "PN",
            SH => "SH",
            SL => "SL",
            SQ => "SQ",
            SS => "SS",
            ST => "ST",
            TM => "TM",
            UI => "UI",
            UL => "UL",
            US => "US",
            UN => "UN",
            UT => "UT",
            NONE => "NONE",
        }
    }

    /// Retrieve the human readable name of this VR.
    pub fn description(self) -> &'static str {
        use VrType::*;
        match self {
            AE => "Application Entity",
            AS => "Age String",
            AT => "Attribute Tag",
            CS => "Code String",
            DA => "Date",
            DS => "Decimal String",
            DT => "Date Time",
            FL => "Floating Point Single",
            FD => "Floating Point Double",
            IS => "Integer String",
            LO => "Long String",
            LT => "Long Text",
            OB => "Other Byte String",
            OW => "Other Word String",
            PN => "Person Name",
            SH => "Short String",
            SL => "Signed Long",
            SQ => "Sequence of Items",
            SS => "Signed Short",
            ST => "Short Text",
            TM => "Time",
            UI => "Unique Identifier",
            UL => "Unsigned Long",
            US => "Unsigned Short",
            UN => "Unknown",
            UT => "Unlimited Text",
            NONE => "None",
        }
    }
}

impl fmt::Display for VrType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

/// How the value length is laid out on the wire after the tag.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone)]
pub enum ElementEncoding {
    /// No VR code; a 4-byte length follows the tag.
    Implicit,
    /// 2-character VR code followed by a 2-byte length.
    Explicit,
    /// 2-character VR code, 2 reserved bytes and a 4-byte length.
    ExplicitCustom,
    /// Not a valid encoding.
    Unknown,
}

impl fmt::Display for ElementEncoding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ElementEncoding::Implicit => "Implicit",
            ElementEncoding::Explicit => "Explicit",
            ElementEncoding::ExplicitCustom => "Explicit (reserved bytes)",
            ElementEncoding::Unknown => "Unknown",
        })
    }
}

/// The native data type carried by a value representation.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone)]
pub enum DataType {
    /// 8-bit signed integer
    Char,
    /// 8-bit unsigned integer
    UChar,
    /// 32-bit signed integer
    Int,
    /// 32-bit unsigned integer
    UInt,
    /// 16-bit signed integer
    Short,
    /// 16-bit unsigned integer
    UShort,
    /// 32-bit floating point
    Float,
    /// 64-bit floating point
    Double,
    /// Text of the given length
    String,
    /// Opaque bytes of the given length
    Other,
}

impl DataType {
    /// The byte size of a single value of this type,
    /// or 0 if the size is driven by the value length.
    pub fn size(self) -> u32 {
        match self {
            DataType::Char | DataType::UChar => 1,
            DataType::Short | DataType::UShort => 2,
            DataType::Int | DataType::UInt | DataType::Float => 4,
            DataType::Double => 8,
            DataType::String | DataType::Other => 0,
        }
    }

    /// Whether this type has a fixed byte size.
    #[inline]
    pub fn is_fixed_size(self) -> bool {
        self.size() != 0
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            DataType::Char => "Char",
            DataType::UChar => "Unsigned char",
            DataType::Int => "Int",
            DataType::UInt => "Unsigned int",
            DataType::Short => "Short",
            DataType::UShort => "Unsigned short",
            DataType::Float => "Float",
            DataType::Double => "Double",
            DataType::String => "String",
            DataType::Other => "Other",
        })
    }
}

/// A type for representing a value length, in bytes.
/// An internal value of `0xFFFF_FFFF` represents an undefined
/// length, which has to be determined by traversing the
/// delimitation markers of the content.
///
/// Two undefined lengths are not equal.
///
/// ```
/// # use dicom_lite_core::Length;
/// assert_ne!(Length::UNDEFINED, Length::UNDEFINED);
/// assert_eq!(Length(16), Length(16));
/// ```
#[derive(Clone, Copy)]
pub struct Length(pub u32);

const UNDEFINED_LEN: u32 = 0xFFFF_FFFF;

impl Length {
    /// A length that is undefined.
    pub const UNDEFINED: Self = Length(UNDEFINED_LEN);

    /// Check whether this length is undefined (unknown).
    #[inline]
    pub fn is_undefined(self) -> bool {
        self.0 == UNDEFINED_LEN
    }

    /// Check whether this length is well defined (not undefined).
    #[inline]
    pub fn is_defined(self) -> bool {
        !self.is_undefined()
    }

    /// Fetch the concrete length value, if available.
    #[inline]
    pub fn get(self) -> Option<u32> {
        match self.0 {
            UNDEFINED_LEN => None,
            v => Some(v),
        }
    }
}

impl From<u32> for Length {
    #[inline]
    fn from(o: u32) -> Self {
        Length(o)
    }
}

impl PartialEq<Length> for Length {
    fn eq(&self, rhs: &Length) -> bool {
        match (self.0, rhs.0) {
            (UNDEFINED_LEN, _) | (_, UNDEFINED_LEN) => false,
            (l1, l2) => l1 == l2,
        }
    }
}

impl PartialOrd<Length> for Length {
    fn partial_cmp(&self, rhs: &Length) -> Option<Ordering> {
        match (self.0, rhs.0) {
            (UNDEFINED_LEN, _) | (_, UNDEFINED_LEN) => None,
            (l1, l2) => Some(l1.cmp(&l2)),
        }
    }
}

impl fmt::Debug for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            UNDEFINED_LEN => f.write_str("Length(Undefined)"),
            l => f.debug_tuple("Length").field(&l).finish(),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            UNDEFINED_LEN => f.write_str("U/L"),
            l => write!(f, "{}", &l),
        }
    }
}

/// A decoded value representation header:
/// the VR type, how its length was encoded,
/// the native data type of the value and the value length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vr {
    /// The value representation
    pub vr_type: VrType,
    /// The wire layout of the length field
    pub encoding: ElementEncoding,
    /// The native data type of the value
    pub data_type: DataType,
    /// The value length in bytes
    pub length: Length,
}

impl Vr {
    /// Create a VR header.
    pub fn new(vr_type: VrType, encoding: ElementEncoding, data_type: DataType, length: Length) -> Self {
        Vr {
            vr_type,
            encoding,
            data_type,
            length,
        }
    }
}

impl fmt::Display for Vr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "VR type:        {}", self.vr_type)?;
        writeln!(f, "VR description: {}", self.vr_type.description())?;
        writeln!(f, "Element type:   {}", self.encoding)?;
        writeln!(f, "Data type:      {}", self.data_type)?;
        write!(f, "Value length:   {} ({:08x}H)", self.length.0, self.length.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_from_u16_pair() {
        let t = Tag::from((0x0010u16, 0x0020u16));
        assert_eq!(0x0010u16, t.group());
        assert_eq!(0x0020u16, t.element());
        assert_eq!(t, (0x0010, 0x0020));
    }

    #[test]
    fn tag_from_u16_array() {
        let t = Tag::from([0x0010u16, 0x0020u16]);
        assert_eq!(t, [0x0010, 0x0020]);
    }

    /// Tags follow a strict total order:
    /// group first, then element.
    #[test]
    fn tag_order_is_lexicographic() {
        assert!(Tag(1, 5) < Tag(2, 3));
        assert!(Tag(2, 3) > Tag(1, 5));
        assert!(Tag(0x0028, 0x0010) < Tag(0x0028, 0x0011));
        assert_eq!(Tag(0x0028, 0x0010).cmp(&Tag(0x0028, 0x0010)), Ordering::Equal);

        let mut tags = vec![PIXEL_DATA, Tag(0x0028, 0x0011), Tag(0x0008, 0x0060), Tag(0x0028, 0x0010)];
        tags.sort();
        assert_eq!(
            tags,
            vec![Tag(0x0008, 0x0060), Tag(0x0028, 0x0010), Tag(0x0028, 0x0011), PIXEL_DATA]
        );
    }

    #[test]
    fn meta_group_tags() {
        assert!(Tag(0x0002, 0x0000).is_meta());
        assert!(Tag(0x0002, 0x0010).is_meta());
        assert!(!Tag(0x0008, 0x0002).is_meta());
        assert!(!PIXEL_DATA.is_meta());
    }

    #[test]
    fn tag_display() {
        assert_eq!(PIXEL_DATA.to_string(), "(7FE0,0010)");
        assert_eq!(format!("{:?}", Tag(0x0008, 0x0060)), "Tag(0x0008, 0x0060)");
    }

    #[test]
    fn data_type_sizes() {
        assert_eq!(DataType::UChar.size(), 1);
        assert_eq!(DataType::UShort.size(), 2);
        assert_eq!(DataType::Float.size(), 4);
        assert_eq!(DataType::Double.size(), 8);
        assert!(!DataType::String.is_fixed_size());
        assert!(!DataType::Other.is_fixed_size());
    }

    #[test]
    fn undefined_length() {
        assert!(Length::UNDEFINED.is_undefined());
        assert_eq!(Length::UNDEFINED.get(), None);
        assert_eq!(Length(8).get(), Some(8));
        assert!(Length(4) < Length(8));
        assert!(!(Length::UNDEFINED < Length(8)));
        assert_eq!(Length::UNDEFINED.to_string(), "U/L");
    }

    #[test]
    fn vr_header_display() {
        let vr = Vr::new(VrType::US, ElementEncoding::Explicit, DataType::UShort, Length(2));
        assert_eq!(
            vr.to_string(),
            "VR type:        US\n\
             VR description: Unsigned Short\n\
             Element type:   Explicit\n\
             Data type:      Unsigned short\n\
             Value length:   2 (00000002H)"
        );
    }
}
