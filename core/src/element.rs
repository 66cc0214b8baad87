//! A decoded data element: tag, value representation and value.

use crate::header::{Tag, Vr};
use crate::value::{PrimitiveValue, Value};
use std::cmp::Ordering;
use std::fmt;

/// A data element decoded from a stream.
///
/// Equality and ordering only consider the tag.
#[derive(Debug, Clone)]
pub struct Element {
    tag: Tag,
    name: &'static str,
    vr: Vr,
    value: Value,
}

impl Element {
    /// Create a data element.
    /// `name` is the dictionary name of the tag, empty if the tag is unknown.
    pub fn new(tag: Tag, name: &'static str, vr: Vr, value: Value) -> Self {
        Element {
            tag,
            name,
            vr,
            value,
        }
    }

    /// The element's tag.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// The dictionary name of the tag, or an empty string.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The decoded value representation header.
    pub fn vr(&self) -> &Vr {
        &self.vr
    }

    /// The decoded value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Shortcut to the decoded content of the value.
    pub fn primitive(&self) -> &PrimitiveValue {
        self.value.primitive()
    }

    /// Whether the tag was found in the dictionary.
    pub fn is_known(&self) -> bool {
        !self.name.is_empty()
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
    }
}

impl Eq for Element {}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Element {
    fn cmp(&self, other: &Self) -> Ordering {
        self.tag.cmp(&other.tag)
    }
}

/// Prints the element as a header dump block.
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Group ID:       0x{:04x}", self.tag.group())?;
        writeln!(f, "Element ID:     0x{:04x}", self.tag.element())?;
        writeln!(f, "Element name:   {}", self.name)?;
        writeln!(f, "{}", self.vr)?;
        write!(f, "Value:          {}", self.value)
    }
}
