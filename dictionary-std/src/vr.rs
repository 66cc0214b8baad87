//! The value representation dictionary:
//! maps a two-character VR code to its element encoding
//! and the native data type of its values.

use dicom_lite_core::header::ElementEncoding::{Explicit, ExplicitCustom, Implicit};
use dicom_lite_core::header::{DataType, ElementEncoding, VrType};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A value representation record.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct VrEntry {
    /// The value representation
    pub vr_type: VrType,
    /// How the value length follows the VR code on the wire
    pub encoding: ElementEncoding,
    /// The native data type of a single value
    pub data_type: DataType,
}

const fn v(vr_type: VrType, encoding: ElementEncoding, data_type: DataType) -> VrEntry {
    VrEntry {
        vr_type,
        encoding,
        data_type,
    }
}

/// Every known VR code.
///
/// Binary and sequence VRs (and UT) carry 2 reserved bytes
/// and a 4-byte length after the code.
/// AT is kept opaque, as its two group/element numbers
/// do not fit any single scalar type.
static VR_TABLE: &[VrEntry] = &[
    v(VrType::AE, Explicit, DataType::String),
    v(VrType::AS, Explicit, DataType::String),
    v(VrType::AT, Explicit, DataType::Other),
    v(VrType::CS, Explicit, DataType::String),
    v(VrType::DA, Explicit, DataType::String),
    v(VrType::DS, Explicit, DataType::String),
    v(VrType::DT, Explicit, DataType::String),
    v(VrType::FL, Explicit, DataType::Float),
    v(VrType::FD, Explicit, DataType::Double),
    v(VrType::IS, Explicit, DataType::String),
    v(VrType::LO, Explicit, DataType::String),
    v(VrType::LT, Explicit, DataType::String),
    v(VrType::OB, ExplicitCustom, DataType::Other),
    v(VrType::OW, ExplicitCustom, DataType::Other),
    v(VrType::PN, Explicit, DataType::String),
    v(VrType::SH, Explicit, DataType::String),
    v(VrType::SL, Explicit, DataType::Int),
    v(VrType::SQ, ExplicitCustom, DataType::Other),
    v(VrType::SS, Explicit, DataType::Short),
    v(VrType::ST, Explicit, DataType::String),
    v(VrType::TM, Explicit, DataType::String),
    v(VrType::UI, Explicit, DataType::String),
    v(VrType::UL, Explicit, DataType::UInt),
    v(VrType::US, Explicit, DataType::UShort),
    v(VrType::UN, ExplicitCustom, DataType::Other),
    v(VrType::UT, ExplicitCustom, DataType::String),
];

/// The record of tags without a known VR.
static NONE_ENTRY: VrEntry = v(VrType::NONE, Implicit, DataType::String);

static BY_CODE: Lazy<HashMap<[u8; 2], &'static VrEntry>> = Lazy::new(|| {
    VR_TABLE
        .iter()
        .map(|entry| {
            let code = entry.vr_type.to_str().as_bytes();
            ([code[0], code[1]], entry)
        })
        .collect()
});

/// The value representation dictionary.
///
/// The index is automatically initialized upon the first use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StandardVrDictionary;

impl StandardVrDictionary {
    /// Look up the two bytes read where a VR code is expected.
    /// Returns `None` if they are not a known code,
    /// which is the case of implicit VR encoded elements.
    pub fn by_code(&self, code: [u8; 2]) -> Option<&'static VrEntry> {
        BY_CODE.get(&code).copied()
    }

    /// Retrieve the record of a value representation.
    pub fn by_type(&self, vr_type: VrType) -> &'static VrEntry {
        VR_TABLE
            .iter()
            .find(|entry| entry.vr_type == vr_type)
            .unwrap_or(&NONE_ENTRY)
    }
}
