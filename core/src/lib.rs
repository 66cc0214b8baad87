#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of dicom-lite containing the data structures
//! shared by the decoder layers.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] comprises the data types of a data element header:
//!   tags, value representation codes, element encodings,
//!   native data types and value lengths.
//! - [`value`] holds the decoded value sum type and its accessors.
//! - [`element`] composes a header and a value into a data element.
//! - [`dictionary`] describes the behavior of a data dictionary,
//!   which translates tags to a name and typical value representation.

pub mod dictionary;
pub mod element;
pub mod header;
pub mod value;

pub use dictionary::{DataDictionary, TagEntry};
pub use element::Element;
pub use header::{DataType, ElementEncoding, Length, Tag, Vr, VrType};
pub use value::{PrimitiveValue, Value};
