//! Decoding primitives of dicom-lite.
//!
//! This crate provides the [`StreamReader`],
//! which reads fixed-size scalars and fixed-length byte strings
//! from any [`Read`](std::io::Read) source,
//! byte-swapping scalars when the stream and the host disagree
//! on byte order.
//!
//! For the time being, all APIs are based on synchronous I/O.

pub mod decode;

pub use byteordered::Endianness;
pub use decode::StreamReader;
