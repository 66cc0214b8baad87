use crate::tables::GROUPS;
use dicom_lite_core::dictionary::{DataDictionary, TagEntry};
use dicom_lite_core::header::Tag;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};

static DICT: Lazy<StandardDataDictionaryRegistry> = Lazy::new(init_dictionary);

/// Retrieve a singleton instance of the standard dictionary registry.
///
/// Note that one does not generally have to call this
/// unless when retrieving the underlying registry is important.
/// The unit type [`StandardDataDictionary`]
/// already provides a lazy loaded singleton implementing the necessary traits.
#[inline]
pub fn registry() -> &'static StandardDataDictionaryRegistry {
    &DICT
}

/// The data struct actually containing the standard dictionary.
///
/// This structure is made opaque via the unit type [`StandardDataDictionary`],
/// which provides a lazy loaded singleton.
#[derive(Debug)]
pub struct StandardDataDictionaryRegistry {
    /// mapping: tag → entry
    by_tag: HashMap<Tag, &'static TagEntry>,
}

impl StandardDataDictionaryRegistry {
    fn new() -> StandardDataDictionaryRegistry {
        StandardDataDictionaryRegistry {
            by_tag: HashMap::with_capacity(400),
        }
    }

    /// record the given dictionary entry reference
    fn index(&mut self, entry: &'static TagEntry) -> &mut Self {
        self.by_tag.insert(entry.tag, entry);
        self
    }

    /// The number of indexed attributes.
    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    /// Whether no attribute was indexed.
    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }
}

/// A data element dictionary which consults
/// the library's global attribute registry.
///
/// This is the type which would generally be used
/// whenever a data element dictionary is needed,
/// such as when reading DICOM files.
///
/// The dictionary index is automatically initialized upon the first use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardDataDictionary;

impl DataDictionary for StandardDataDictionary {
    fn by_tag(&self, tag: Tag) -> Option<&TagEntry> {
        registry().by_tag.get(&tag).copied()
    }
}

impl<'a> DataDictionary for &'a StandardDataDictionary {
    fn by_tag(&self, tag: Tag) -> Option<&TagEntry> {
        registry().by_tag.get(&tag).copied()
    }
}

impl Display for StandardDataDictionary {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.write_str("Standard DICOM Data Dictionary")
    }
}

fn init_dictionary() -> StandardDataDictionaryRegistry {
    let mut d = StandardDataDictionaryRegistry::new();
    for entry in GROUPS.iter().flat_map(|group| group.iter()) {
        d.index(entry);
    }
    d
}

#[cfg(test)]
mod tests {
    use super::StandardDataDictionary;
    use crate::tables::GROUPS;
    use dicom_lite_core::dictionary::{DataDictionary, TagEntry};
    use dicom_lite_core::header::{Tag, VrType};

    // tests for just a few attributes to make sure that the entries
    // were well installed into the crate
    #[test]
    fn smoke_test() {
        let dict = StandardDataDictionary;

        assert_eq!(
            dict.by_tag(Tag(0x0008, 0x0060)),
            Some(&TagEntry {
                tag: Tag(0x0008, 0x0060),
                name: "Modality",
                vr: VrType::CS,
            })
        );

        let pixel_data = dict
            .by_tag(Tag(0x7FE0, 0x0010))
            .expect("Pixel Data attribute should exist");
        assert_eq!(pixel_data.name, "Pixel Data");
        assert_eq!(pixel_data.vr, VrType::OW);

        assert_eq!(dict.resolve(Tag(0x0028, 0x0010)), ("Rows", VrType::US));
        assert_eq!(dict.resolve(Tag(0x0028, 0x0103)).1, VrType::US);
    }

    /// Private tags are not in the dictionary,
    /// yet resolving them never fails.
    #[test]
    fn unknown_tags_resolve_to_bare_entries() {
        let dict = StandardDataDictionary;
        assert_eq!(dict.by_tag(Tag(0x0009, 0x0010)), None);
        assert_eq!(dict.resolve(Tag(0x0009, 0x0010)), ("", VrType::NONE));
    }

    #[test]
    fn tables_are_grouped_and_unique() {
        let mut count = 0;
        for group in GROUPS {
            let g = group[0].tag.group();
            assert!(group.iter().all(|e| e.tag.group() == g));
            count += group.len();
        }
        assert_eq!(super::registry().len(), count);
    }
}
