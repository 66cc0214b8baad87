//! This crate provides the data element decoder of dicom-lite.
//!
//! - [`attribute`] inspects the start of a stream:
//!   whether it is a Part 10 file and which byte order it uses.
//! - [`stateful::decode`] contains [`StatefulDecoder`],
//!   which decodes one data element at a time,
//!   on explicit and implicit VR streams alike.
//! - [`transfer_syntax`] identifies the transfer syntax
//!   declared in the file meta group.
//!
//! All APIs are based on synchronous I/O.
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]

pub mod attribute;
pub mod stateful;
pub mod transfer_syntax;

pub use attribute::Attribute;
pub use stateful::decode::{DecoderOptions, StatefulDecoder};
pub use transfer_syntax::TransferSyntax;
