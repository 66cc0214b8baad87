//! This crate implements the built-in dictionaries of dicom-lite.
//!
//! ## Run-time dictionaries
//!
//! - [`data_element`]: the attribute dictionary, mapping a tag to
//!   its name and typical value representation.
//!   Its records are kept in per-group tables ([`tables`])
//!   and indexed by tag on first use.
//!   Private and otherwise undocumented tags are simply absent.
//! - [`vr`]: the value representation dictionary, mapping a
//!   two-character VR code to the element encoding and
//!   the native data type of its values.
//!
//! Both dictionaries are read-only singletons
//! behind a unit type, safe to share across threads.
//!
//! ## Constants
//!
//! - [`tags`], which map an attribute keyword to a DICOM tag
pub mod data_element;
pub mod tables;
pub mod tags;
pub mod vr;

pub use data_element::{StandardDataDictionary, StandardDataDictionaryRegistry};
pub use vr::{StandardVrDictionary, VrEntry};
