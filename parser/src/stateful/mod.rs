//! Stateful decoding of data elements.
pub mod decode;
mod item;
