//! This module contains the primitive decoding logic:
//! reading scalars and byte strings in the byte order of the stream.

pub mod basic;

pub use self::basic::{native_endianness, StreamReader};
