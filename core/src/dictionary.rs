//! This module contains the concept of a data dictionary,
//! which resolves a tag into its name and typical value representation.
//!
//! The built-in dictionary lives in `dicom-lite-dictionary-std`.

use crate::header::{Tag, VrType};
use std::fmt::Debug;

/// A dictionary entry describing one attribute.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct TagEntry {
    /// The attribute tag
    pub tag: Tag,
    /// The attribute name, as printed in header dumps
    pub name: &'static str,
    /// The _typical_ value representation of the attribute
    pub vr: VrType,
}

/// Type trait for a dictionary of DICOM attributes.
///
/// The methods herein have no generic parameters, so as to enable being
/// used as a trait object.
pub trait DataDictionary: Debug {
    /// Fetch an entry by its tag.
    fn by_tag(&self, tag: Tag) -> Option<&TagEntry>;

    /// Resolve a tag into its name and default VR,
    /// yielding an empty name and `VrType::NONE` for unknown tags.
    fn resolve(&self, tag: Tag) -> (&'static str, VrType) {
        self.by_tag(tag)
            .map(|e| (e.name, e.vr))
            .unwrap_or(("", VrType::NONE))
    }
}

/// An empty dictionary, resolving no tag.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StubDataDictionary;

impl DataDictionary for StubDataDictionary {
    fn by_tag(&self, _tag: Tag) -> Option<&TagEntry> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_resolves_nothing() {
        assert_eq!(StubDataDictionary.by_tag(Tag(0x0008, 0x0060)), None);
        assert_eq!(
            StubDataDictionary.resolve(Tag(0x0008, 0x0060)),
            ("", VrType::NONE)
        );
    }
}
