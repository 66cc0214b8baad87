//! This module holds the decoded value of a data element.
//!
//! A [`PrimitiveValue`] is a closed sum type over the native data types
//! a value representation may carry.
//! Its getters are strict: reading a `u16` out of a string fails
//! with a [`CastValueError`] instead of reinterpreting bytes.
//! The `to_*` conversions are lenient and also parse textual numbers.

use crate::header::{DataType, Length};
use num_traits::NumCast;
use snafu::{Backtrace, OptionExt, Snafu};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// The kind of a primitive value, including the empty value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// No data
    Empty,
    /// `i8`
    Char,
    /// `u8`
    UChar,
    /// `i16`
    Short,
    /// `u16`
    UShort,
    /// `i32`
    Int,
    /// `u32`
    UInt,
    /// `f32`
    Float,
    /// `f64`
    Double,
    /// text
    Str,
    /// opaque bytes
    Bytes,
}

/// Triggered when a value is read as a type other than its own.
#[derive(Debug, Snafu)]
#[snafu(display("bad value cast: requested {} but value is {:?}", requested, got))]
pub struct CastValueError {
    /// The name of the requested getter
    pub requested: &'static str,
    /// The actual type of the value
    pub got: ValueType,
    backtrace: Backtrace,
}

/// Triggered when a value cannot be converted to the requested type.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ConvertValueError {
    /// The value kind has no conversion to the requested type.
    #[snafu(display("cannot convert {:?} value to {}", original, requested))]
    Incompatible {
        requested: &'static str,
        original: ValueType,
        backtrace: Backtrace,
    },
    /// The text could not be parsed as a number.
    #[snafu(display("cannot parse {:?} as {}", text, requested))]
    ParseNumber {
        requested: &'static str,
        text: String,
        backtrace: Backtrace,
    },
    /// The number does not fit in the requested type.
    #[snafu(display("number out of range for {}", requested))]
    OutOfRange {
        requested: &'static str,
        backtrace: Backtrace,
    },
}

/// A single decoded value.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveValue {
    /// No data, as in a zero-length value or the pixel data element.
    Empty,
    /// 8-bit signed integer
    Char(i8),
    /// 8-bit unsigned integer
    UChar(u8),
    /// 16-bit signed integer
    Short(i16),
    /// 16-bit unsigned integer
    UShort(u16),
    /// 32-bit signed integer
    Int(i32),
    /// 32-bit unsigned integer
    UInt(u32),
    /// 32-bit floating point
    Float(f32),
    /// 64-bit floating point
    Double(f64),
    /// Text, with trailing padding removed
    Str(String),
    /// Opaque bytes
    Bytes(Vec<u8>),
}

macro_rules! impl_primitive_getters {
    ($name: ident, $variant: ident, $ret: ty) => {
        /// Get the value if it holds exactly this type.
        /// An error is returned if the variant is not compatible.
        pub fn $name(&self) -> Result<$ret, CastValueError> {
            match self {
                PrimitiveValue::$variant(v) => Ok(*v),
                value => CastValueSnafu {
                    requested: stringify!($name),
                    got: value.value_type(),
                }
                .fail(),
            }
        }
    };
}

impl PrimitiveValue {
    /// Retrieve the kind of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            PrimitiveValue::Empty => ValueType::Empty,
            PrimitiveValue::Char(_) => ValueType::Char,
            PrimitiveValue::UChar(_) => ValueType::UChar,
            PrimitiveValue::Short(_) => ValueType::Short,
            PrimitiveValue::UShort(_) => ValueType::UShort,
            PrimitiveValue::Int(_) => ValueType::Int,
            PrimitiveValue::UInt(_) => ValueType::UInt,
            PrimitiveValue::Float(_) => ValueType::Float,
            PrimitiveValue::Double(_) => ValueType::Double,
            PrimitiveValue::Str(_) => ValueType::Str,
            PrimitiveValue::Bytes(_) => ValueType::Bytes,
        }
    }

    /// The data type which decodes to this kind of value,
    /// or `None` for the empty value.
    pub fn data_type(&self) -> Option<DataType> {
        match self.value_type() {
            ValueType::Empty => None,
            ValueType::Char => Some(DataType::Char),
            ValueType::UChar => Some(DataType::UChar),
            ValueType::Short => Some(DataType::Short),
            ValueType::UShort => Some(DataType::UShort),
            ValueType::Int => Some(DataType::Int),
            ValueType::UInt => Some(DataType::UInt),
            ValueType::Float => Some(DataType::Float),
            ValueType::Double => Some(DataType::Double),
            ValueType::Str => Some(DataType::String),
            ValueType::Bytes => Some(DataType::Other),
        }
    }

    /// Whether this is the empty value.
    pub fn is_empty(&self) -> bool {
        matches!(self, PrimitiveValue::Empty)
    }

    impl_primitive_getters!(char, Char, i8);
    impl_primitive_getters!(uchar, UChar, u8);
    impl_primitive_getters!(short, Short, i16);
    impl_primitive_getters!(ushort, UShort, u16);
    impl_primitive_getters!(int, Int, i32);
    impl_primitive_getters!(uint, UInt, u32);
    impl_primitive_getters!(float, Float, f32);
    impl_primitive_getters!(double, Double, f64);

    /// Get the text of a string value.
    pub fn string(&self) -> Result<&str, CastValueError> {
        match self {
            PrimitiveValue::Str(s) => Ok(s),
            value => CastValueSnafu {
                requested: "string",
                got: value.value_type(),
            }
            .fail(),
        }
    }

    /// Get the bytes of an opaque value.
    pub fn bytes(&self) -> Result<&[u8], CastValueError> {
        match self {
            PrimitiveValue::Bytes(b) => Ok(b),
            value => CastValueSnafu {
                requested: "bytes",
                got: value.value_type(),
            }
            .fail(),
        }
    }

    /// Convert the value to a textual representation.
    pub fn to_str(&self) -> Cow<'_, str> {
        match self {
            PrimitiveValue::Str(s) => Cow::Borrowed(s),
            value => Cow::Owned(value.to_string()),
        }
    }

    /// Convert the first value to an integer.
    ///
    /// Numbers are cast with a range check.
    /// Text is split on `\` and the first component is parsed,
    /// truncating a decimal number towards zero.
    ///
    /// ```
    /// # use dicom_lite_core::value::PrimitiveValue;
    /// let v = PrimitiveValue::Str("40.5\\400".to_string());
    /// assert_eq!(v.to_int::<i32>().unwrap(), 40);
    /// assert_eq!(PrimitiveValue::UShort(512).to_int::<u32>().unwrap(), 512);
    /// ```
    pub fn to_int<T>(&self) -> Result<T, ConvertValueError>
    where
        T: NumCast + FromStr,
    {
        let requested = std::any::type_name::<T>();
        match self {
            PrimitiveValue::Char(v) => <T as NumCast>::from(*v).context(OutOfRangeSnafu { requested }),
            PrimitiveValue::UChar(v) => <T as NumCast>::from(*v).context(OutOfRangeSnafu { requested }),
            PrimitiveValue::Short(v) => <T as NumCast>::from(*v).context(OutOfRangeSnafu { requested }),
            PrimitiveValue::UShort(v) => <T as NumCast>::from(*v).context(OutOfRangeSnafu { requested }),
            PrimitiveValue::Int(v) => <T as NumCast>::from(*v).context(OutOfRangeSnafu { requested }),
            PrimitiveValue::UInt(v) => <T as NumCast>::from(*v).context(OutOfRangeSnafu { requested }),
            PrimitiveValue::Float(v) => <T as NumCast>::from(v.trunc()).context(OutOfRangeSnafu { requested }),
            PrimitiveValue::Double(v) => <T as NumCast>::from(v.trunc()).context(OutOfRangeSnafu { requested }),
            PrimitiveValue::Str(s) => {
                let text = first_component(s);
                if let Ok(v) = text.parse::<T>() {
                    return Ok(v);
                }
                let v: f64 = text.parse().ok().context(ParseNumberSnafu {
                    requested,
                    text: text.to_string(),
                })?;
                <T as NumCast>::from(v.trunc()).context(OutOfRangeSnafu { requested })
            }
            value => IncompatibleSnafu {
                requested,
                original: value.value_type(),
            }
            .fail(),
        }
    }

    /// Convert the first value to a double precision floating point number.
    ///
    /// Text is split on `\` and the first component is parsed.
    pub fn to_float64(&self) -> Result<f64, ConvertValueError> {
        match self {
            PrimitiveValue::Char(v) => Ok((*v).into()),
            PrimitiveValue::UChar(v) => Ok((*v).into()),
            PrimitiveValue::Short(v) => Ok((*v).into()),
            PrimitiveValue::UShort(v) => Ok((*v).into()),
            PrimitiveValue::Int(v) => Ok((*v).into()),
            PrimitiveValue::UInt(v) => Ok((*v).into()),
            PrimitiveValue::Float(v) => Ok((*v).into()),
            PrimitiveValue::Double(v) => Ok(*v),
            PrimitiveValue::Str(s) => {
                let text = first_component(s);
                text.parse().ok().context(ParseNumberSnafu {
                    requested: "f64",
                    text: text.to_string(),
                })
            }
            value => IncompatibleSnafu {
                requested: "f64",
                original: value.value_type(),
            }
            .fail(),
        }
    }
}

fn first_component(s: &str) -> &str {
    s.split('\\')
        .next()
        .unwrap_or_default()
        .trim_matches(|c: char| c.is_whitespace() || c == '\0')
}

/// Maximum number of bytes shown when printing an opaque value.
const MAX_BYTES_SHOWN: usize = 32;

impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PrimitiveValue::Empty => Ok(()),
            PrimitiveValue::Char(v) => write!(f, "{}", v),
            PrimitiveValue::UChar(v) => write!(f, "{}", v),
            PrimitiveValue::Short(v) => write!(f, "{}", v),
            PrimitiveValue::UShort(v) => write!(f, "{}", v),
            PrimitiveValue::Int(v) => write!(f, "{}", v),
            PrimitiveValue::UInt(v) => write!(f, "{}", v),
            PrimitiveValue::Float(v) => write!(f, "{}", v),
            PrimitiveValue::Double(v) => write!(f, "{}", v),
            PrimitiveValue::Str(s) => f.write_str(s),
            PrimitiveValue::Bytes(bytes) => {
                for (i, b) in bytes.iter().take(MAX_BYTES_SHOWN).enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{:02x}", b)?;
                }
                if bytes.len() > MAX_BYTES_SHOWN {
                    f.write_str(" ...")?;
                }
                Ok(())
            }
        }
    }
}

/// A decoded value along with the value length which produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    primitive: PrimitiveValue,
    length: Length,
}

impl Value {
    /// Create a value out of its decoded content and its length on the wire.
    pub fn new(primitive: PrimitiveValue, length: Length) -> Self {
        Value { primitive, length }
    }

    /// A value with no content.
    pub fn empty(length: Length) -> Self {
        Value::new(PrimitiveValue::Empty, length)
    }

    /// The value length as encoded in the element header.
    pub fn length(&self) -> Length {
        self.length
    }

    /// The decoded content.
    pub fn primitive(&self) -> &PrimitiveValue {
        &self.primitive
    }

    /// Take the decoded content.
    pub fn into_primitive(self) -> PrimitiveValue {
        self.primitive
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.primitive, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_getters() {
        let v = PrimitiveValue::UShort(42);
        assert_eq!(v.ushort().unwrap(), 42);
        let err = v.short().unwrap_err();
        assert_eq!(err.requested, "short");
        assert_eq!(err.got, ValueType::UShort);

        let v = PrimitiveValue::Str("CT".to_string());
        assert_eq!(v.string().unwrap(), "CT");
        assert!(v.ushort().is_err());
        assert!(v.bytes().is_err());
    }

    #[test]
    fn convert_text_to_numbers() {
        let v = PrimitiveValue::Str(" 2.5\\0.5".to_string());
        assert_eq!(v.to_float64().unwrap(), 2.5);
        assert_eq!(v.to_int::<i32>().unwrap(), 2);

        let v = PrimitiveValue::Str("-1024".to_string());
        assert_eq!(v.to_int::<i32>().unwrap(), -1024);
        assert_eq!(v.to_float64().unwrap(), -1024.);

        let v = PrimitiveValue::Str("ABC".to_string());
        assert!(matches!(
            v.to_int::<i32>(),
            Err(ConvertValueError::ParseNumber { .. })
        ));
    }

    #[test]
    fn convert_numbers() {
        assert_eq!(PrimitiveValue::Short(-5).to_int::<i32>().unwrap(), -5);
        assert!(matches!(
            PrimitiveValue::Short(-5).to_int::<u16>(),
            Err(ConvertValueError::OutOfRange { .. })
        ));
        assert_eq!(PrimitiveValue::Float(1.5).to_float64().unwrap(), 1.5);
        assert!(matches!(
            PrimitiveValue::Empty.to_float64(),
            Err(ConvertValueError::Incompatible { .. })
        ));
    }

    #[test]
    fn every_number_widens_to_double() {
        let values = [
            PrimitiveValue::Char(-3),
            PrimitiveValue::UChar(200),
            PrimitiveValue::Short(-300),
            PrimitiveValue::UShort(60000),
            PrimitiveValue::Int(-70000),
            PrimitiveValue::UInt(4_000_000_000),
            PrimitiveValue::Float(0.25),
            PrimitiveValue::Double(-0.125),
        ];
        let doubles: Vec<f64> = values.iter().map(|v| v.to_float64().unwrap()).collect();
        assert_eq!(
            doubles,
            vec![-3., 200., -300., 60000., -70000., 4_000_000_000., 0.25, -0.125]
        );
    }

    #[test]
    fn display_values() {
        assert_eq!(PrimitiveValue::UShort(512).to_string(), "512");
        assert_eq!(PrimitiveValue::Empty.to_string(), "");
        assert_eq!(
            PrimitiveValue::Bytes(vec![0x01, 0xAB, 0x00]).to_string(),
            "01 ab 00"
        );
        let long = PrimitiveValue::Bytes(vec![0; 40]);
        assert!(long.to_string().ends_with(" ..."));

        let value = Value::new(PrimitiveValue::Str("MR".to_string()), Length(2));
        assert_eq!(value.to_string(), "MR");
        assert_eq!(value.length().get(), Some(2));
    }
}
