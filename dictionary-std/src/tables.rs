//! Attribute tables, one per group.
//!
//! Names are the ones printed in header dumps and CSV exports.

use dicom_lite_core::dictionary::TagEntry;
use dicom_lite_core::header::{Tag, VrType, VrType::*};

const fn e(group: u16, element: u16, vr: VrType, name: &'static str) -> TagEntry {
    TagEntry {
        tag: Tag(group, element),
        name,
        vr,
    }
}

/// File meta information.
pub static GROUP_0002: &[TagEntry] = &[
    e(0x0002, 0x0000, UL, "File Meta Information Group Length"),
    e(0x0002, 0x0001, OB, "File Meta Information Version"),
    e(0x0002, 0x0002, UI, "Media Storage SOP Class UID"),
    e(0x0002, 0x0003, UI, "Media Storage SOP Instance UID"),
    e(0x0002, 0x0010, UI, "Transfer Syntax UID"),
    e(0x0002, 0x0012, UI, "Implementation Class UID"),
    e(0x0002, 0x0013, SH, "Implementation Version Name"),
    e(0x0002, 0x0016, AE, "Source Application Entity Title"),
    e(0x0002, 0x0100, UI, "Private Information Creator UID"),
    e(0x0002, 0x0102, OB, "Private Information"),
];

/// Directory structuring.
pub static GROUP_0004: &[TagEntry] = &[
    e(0x0004, 0x1130, CS, "File-set ID"),
    e(0x0004, 0x1141, CS, "File-set Descriptor File ID"),
    e(0x0004, 0x1142, CS, "Specific Character Set of File-set Descriptor File"),
    e(0x0004, 0x1200, UL, "Offset of the First Directory Record of the Root Directory Entity"),
    e(0x0004, 0x1202, UL, "Offset of the Last Directory Record of the Root Directory Entity"),
    e(0x0004, 0x1212, US, "File-set Consistency Flag"),
    e(0x0004, 0x1220, SQ, "Directory Record Sequence"),
    e(0x0004, 0x1400, UL, "Offset of the Next Directory Record"),
    e(0x0004, 0x1410, US, "Record In-use Flag"),
    e(0x0004, 0x1420, UL, "Offset of Referenced Lower-Level Directory Entity"),
    e(0x0004, 0x1430, CS, "Directory Record Type"),
    e(0x0004, 0x1500, CS, "Referenced File ID"),
    e(0x0004, 0x1510, UI, "Referenced SOP Class UID in File"),
    e(0x0004, 0x1511, UI, "Referenced SOP Instance UID in File"),
    e(0x0004, 0x1512, UI, "Referenced Transfer Syntax UID in File"),
];

/// Identifying information.
pub static GROUP_0008: &[TagEntry] = &[
    e(0x0008, 0x0000, UL, "Identifying Group Length"),
    e(0x0008, 0x0005, CS, "Specific Character Set"),
    e(0x0008, 0x0008, CS, "Image Type"),
    e(0x0008, 0x0012, DA, "Instance Creation Date"),
    e(0x0008, 0x0013, TM, "Instance Creation Time"),
    e(0x0008, 0x0014, UI, "Instance Creator UID"),
    e(0x0008, 0x0016, UI, "SOP Class UID"),
    e(0x0008, 0x0018, UI, "SOP Instance UID"),
    e(0x0008, 0x0020, DA, "Study Date"),
    e(0x0008, 0x0021, DA, "Series Date"),
    e(0x0008, 0x0022, DA, "Acquisition Date"),
    e(0x0008, 0x0023, DA, "Content Date"),
    e(0x0008, 0x002A, DT, "Acquisition DateTime"),
    e(0x0008, 0x0030, TM, "Study Time"),
    e(0x0008, 0x0031, TM, "Series Time"),
    e(0x0008, 0x0032, TM, "Acquisition Time"),
    e(0x0008, 0x0033, TM, "Content Time"),
    e(0x0008, 0x0050, SH, "Accession Number"),
    e(0x0008, 0x0060, CS, "Modality"),
    e(0x0008, 0x0064, CS, "Conversion Type"),
    e(0x0008, 0x0070, LO, "Manufacturer"),
    e(0x0008, 0x0080, LO, "Institution Name"),
    e(0x0008, 0x0081, ST, "Institution Address"),
    e(0x0008, 0x0090, PN, "Referring Physician's Name"),
    e(0x0008, 0x0092, ST, "Referring Physician's Address"),
    e(0x0008, 0x0094, SH, "Referring Physician's Telephone Numbers"),
    e(0x0008, 0x1010, SH, "Station Name"),
    e(0x0008, 0x1030, LO, "Study Description"),
    e(0x0008, 0x1032, SQ, "Procedure Code Sequence"),
    e(0x0008, 0x103E, LO, "Series Description"),
    e(0x0008, 0x1040, LO, "Institutional Department Name"),
    e(0x0008, 0x1050, PN, "Performing Physician's Name"),
    e(0x0008, 0x1060, PN, "Name of Physician(s) Reading Study"),
    e(0x0008, 0x1070, PN, "Operators' Name"),
    e(0x0008, 0x1080, LO, "Admitting Diagnoses Description"),
    e(0x0008, 0x1090, LO, "Manufacturer's Model Name"),
    e(0x0008, 0x1110, SQ, "Referenced Study Sequence"),
    e(0x0008, 0x1111, SQ, "Referenced Performed Procedure Step Sequence"),
    e(0x0008, 0x1120, SQ, "Referenced Patient Sequence"),
    e(0x0008, 0x1140, SQ, "Referenced Image Sequence"),
    e(0x0008, 0x1150, UI, "Referenced SOP Class UID"),
    e(0x0008, 0x1155, UI, "Referenced SOP Instance UID"),
    e(0x0008, 0x2111, ST, "Derivation Description"),
    e(0x0008, 0x2112, SQ, "Source Image Sequence"),
    e(0x0008, 0x9215, SQ, "Derivation Code Sequence"),
];

/// Patient information.
pub static GROUP_0010: &[TagEntry] = &[
    e(0x0010, 0x0000, UL, "Patient Group Length"),
    e(0x0010, 0x0010, PN, "Patient's Name"),
    e(0x0010, 0x0020, LO, "Patient ID"),
    e(0x0010, 0x0021, LO, "Issuer of Patient ID"),
    e(0x0010, 0x0030, DA, "Patient's Birth Date"),
    e(0x0010, 0x0032, TM, "Patient's Birth Time"),
    e(0x0010, 0x0040, CS, "Patient's Sex"),
    e(0x0010, 0x1000, LO, "Other Patient IDs"),
    e(0x0010, 0x1001, PN, "Other Patient Names"),
    e(0x0010, 0x1010, AS, "Patient's Age"),
    e(0x0010, 0x1020, DS, "Patient's Size"),
    e(0x0010, 0x1030, DS, "Patient's Weight"),
    e(0x0010, 0x2160, SH, "Ethnic Group"),
    e(0x0010, 0x2180, SH, "Occupation"),
    e(0x0010, 0x21B0, LT, "Additional Patient History"),
    e(0x0010, 0x4000, LT, "Patient Comments"),
];

/// Acquisition information.
pub static GROUP_0018: &[TagEntry] = &[
    e(0x0018, 0x0000, UL, "Acquisition Group Length"),
    e(0x0018, 0x0010, LO, "Contrast/Bolus Agent"),
    e(0x0018, 0x0015, CS, "Body Part Examined"),
    e(0x0018, 0x0020, CS, "Scanning Sequence"),
    e(0x0018, 0x0021, CS, "Sequence Variant"),
    e(0x0018, 0x0022, CS, "Scan Options"),
    e(0x0018, 0x0023, CS, "MR Acquisition Type"),
    e(0x0018, 0x0024, SH, "Sequence Name"),
    e(0x0018, 0x0025, CS, "Angio Flag"),
    e(0x0018, 0x0050, DS, "Slice Thickness"),
    e(0x0018, 0x0060, DS, "KVP"),
    e(0x0018, 0x0080, DS, "Repetition Time"),
    e(0x0018, 0x0081, DS, "Echo Time"),
    e(0x0018, 0x0082, DS, "Inversion Time"),
    e(0x0018, 0x0083, DS, "Number of Averages"),
    e(0x0018, 0x0084, DS, "Imaging Frequency"),
    e(0x0018, 0x0085, SH, "Imaged Nucleus"),
    e(0x0018, 0x0086, IS, "Echo Number(s)"),
    e(0x0018, 0x0087, DS, "Magnetic Field Strength"),
    e(0x0018, 0x0088, DS, "Spacing Between Slices"),
    e(0x0018, 0x0090, DS, "Data Collection Diameter"),
    e(0x0018, 0x0091, IS, "Echo Train Length"),
    e(0x0018, 0x0093, DS, "Percent Sampling"),
    e(0x0018, 0x0094, DS, "Percent Phase Field of View"),
    e(0x0018, 0x0095, DS, "Pixel Bandwidth"),
    e(0x0018, 0x1000, LO, "Device Serial Number"),
    e(0x0018, 0x1020, LO, "Software Versions"),
    e(0x0018, 0x1030, LO, "Protocol Name"),
    e(0x0018, 0x1100, DS, "Reconstruction Diameter"),
    e(0x0018, 0x1110, DS, "Distance Source to Detector"),
    e(0x0018, 0x1111, DS, "Distance Source to Patient"),
    e(0x0018, 0x1120, DS, "Gantry/Detector Tilt"),
    e(0x0018, 0x1130, DS, "Table Height"),
    e(0x0018, 0x1140, CS, "Rotation Direction"),
    e(0x0018, 0x1150, IS, "Exposure Time"),
    e(0x0018, 0x1151, IS, "X-Ray Tube Current"),
    e(0x0018, 0x1152, IS, "Exposure"),
    e(0x0018, 0x1160, SH, "Filter Type"),
    e(0x0018, 0x1170, IS, "Generator Power"),
    e(0x0018, 0x1190, DS, "Focal Spot(s)"),
    e(0x0018, 0x1210, SH, "Convolution Kernel"),
    e(0x0018, 0x1250, SH, "Receive Coil Name"),
    e(0x0018, 0x1251, SH, "Transmit Coil Name"),
    e(0x0018, 0x1310, US, "Acquisition Matrix"),
    e(0x0018, 0x1312, CS, "In-plane Phase Encoding Direction"),
    e(0x0018, 0x1314, DS, "Flip Angle"),
    e(0x0018, 0x1316, DS, "SAR"),
    e(0x0018, 0x5100, CS, "Patient Position"),
];

/// Relationship information.
pub static GROUP_0020: &[TagEntry] = &[
    e(0x0020, 0x0000, UL, "Relationship Group Length"),
    e(0x0020, 0x000D, UI, "Study Instance UID"),
    e(0x0020, 0x000E, UI, "Series Instance UID"),
    e(0x0020, 0x0010, SH, "Study ID"),
    e(0x0020, 0x0011, IS, "Series Number"),
    e(0x0020, 0x0012, IS, "Acquisition Number"),
    e(0x0020, 0x0013, IS, "Instance Number"),
    e(0x0020, 0x0020, CS, "Patient Orientation"),
    e(0x0020, 0x0032, DS, "Image Position (Patient)"),
    e(0x0020, 0x0037, DS, "Image Orientation (Patient)"),
    e(0x0020, 0x0052, UI, "Frame of Reference UID"),
    e(0x0020, 0x0060, CS, "Laterality"),
    e(0x0020, 0x0100, IS, "Temporal Position Identifier"),
    e(0x0020, 0x0105, IS, "Number of Temporal Positions"),
    e(0x0020, 0x1002, IS, "Images in Acquisition"),
    e(0x0020, 0x1040, LO, "Position Reference Indicator"),
    e(0x0020, 0x1041, DS, "Slice Location"),
    e(0x0020, 0x4000, LT, "Image Comments"),
];

/// Image presentation.
pub static GROUP_0028: &[TagEntry] = &[
    e(0x0028, 0x0000, UL, "Image Presentation Group Length"),
    e(0x0028, 0x0002, US, "Samples per Pixel"),
    e(0x0028, 0x0004, CS, "Photometric Interpretation"),
    e(0x0028, 0x0006, US, "Planar Configuration"),
    e(0x0028, 0x0008, IS, "Number of Frames"),
    e(0x0028, 0x0009, AT, "Frame Increment Pointer"),
    e(0x0028, 0x0010, US, "Rows"),
    e(0x0028, 0x0011, US, "Columns"),
    e(0x0028, 0x0030, DS, "Pixel Spacing"),
    e(0x0028, 0x0034, IS, "Pixel Aspect Ratio"),
    e(0x0028, 0x0100, US, "Bits Allocated"),
    e(0x0028, 0x0101, US, "Bits Stored"),
    e(0x0028, 0x0102, US, "High Bit"),
    e(0x0028, 0x0103, US, "Pixel Representation"),
    e(0x0028, 0x0106, SS, "Smallest Image Pixel Value"),
    e(0x0028, 0x0107, SS, "Largest Image Pixel Value"),
    e(0x0028, 0x0120, SS, "Pixel Padding Value"),
    e(0x0028, 0x1050, DS, "Window Center"),
    e(0x0028, 0x1051, DS, "Window Width"),
    e(0x0028, 0x1052, DS, "Rescale Intercept"),
    e(0x0028, 0x1053, DS, "Rescale Slope"),
    e(0x0028, 0x1054, LO, "Rescale Type"),
    e(0x0028, 0x1055, LO, "Window Center & Width Explanation"),
    e(0x0028, 0x1101, US, "Red Palette Color Lookup Table Descriptor"),
    e(0x0028, 0x1102, US, "Green Palette Color Lookup Table Descriptor"),
    e(0x0028, 0x1103, US, "Blue Palette Color Lookup Table Descriptor"),
    e(0x0028, 0x1201, OW, "Red Palette Color Lookup Table Data"),
    e(0x0028, 0x1202, OW, "Green Palette Color Lookup Table Data"),
    e(0x0028, 0x1203, OW, "Blue Palette Color Lookup Table Data"),
    e(0x0028, 0x2110, CS, "Lossy Image Compression"),
    e(0x0028, 0x3000, SQ, "Modality LUT Sequence"),
    e(0x0028, 0x3010, SQ, "VOI LUT Sequence"),
];

/// Study information.
pub static GROUP_0032: &[TagEntry] = &[
    e(0x0032, 0x000A, CS, "Study Status ID"),
    e(0x0032, 0x000C, CS, "Study Priority ID"),
    e(0x0032, 0x1032, PN, "Requesting Physician"),
    e(0x0032, 0x1033, LO, "Requesting Service"),
    e(0x0032, 0x1060, LO, "Requested Procedure Description"),
    e(0x0032, 0x4000, LT, "Study Comments"),
];

/// Visit information.
pub static GROUP_0038: &[TagEntry] = &[
    e(0x0038, 0x0010, LO, "Admission ID"),
    e(0x0038, 0x0300, LO, "Current Patient Location"),
    e(0x0038, 0x0500, LO, "Patient State"),
];

/// Waveform.
pub static GROUP_003A: &[TagEntry] = &[
    e(0x003A, 0x0005, US, "Number of Waveform Channels"),
    e(0x003A, 0x0010, UL, "Number of Waveform Samples"),
    e(0x003A, 0x001A, DS, "Sampling Frequency"),
    e(0x003A, 0x0200, SQ, "Channel Definition Sequence"),
];

/// Procedure step.
pub static GROUP_0040: &[TagEntry] = &[
    e(0x0040, 0x0244, DA, "Performed Procedure Step Start Date"),
    e(0x0040, 0x0245, TM, "Performed Procedure Step Start Time"),
    e(0x0040, 0x0253, SH, "Performed Procedure Step ID"),
    e(0x0040, 0x0254, LO, "Performed Procedure Step Description"),
    e(0x0040, 0x0260, SQ, "Performed Protocol Code Sequence"),
    e(0x0040, 0x0275, SQ, "Request Attributes Sequence"),
    e(0x0040, 0x1001, SH, "Requested Procedure ID"),
];

/// Device.
pub static GROUP_0050: &[TagEntry] = &[
    e(0x0050, 0x0004, CS, "Calibration Image"),
    e(0x0050, 0x0010, SQ, "Device Sequence"),
];

/// Nuclear medicine.
pub static GROUP_0054: &[TagEntry] = &[
    e(0x0054, 0x0011, US, "Number of Energy Windows"),
    e(0x0054, 0x0021, US, "Number of Detectors"),
    e(0x0054, 0x0051, US, "Number of Rotations"),
    e(0x0054, 0x0081, US, "Number of Slices"),
    e(0x0054, 0x1001, CS, "Units"),
    e(0x0054, 0x1101, LO, "Attenuation Correction Method"),
];

/// Histogram.
pub static GROUP_0060: &[TagEntry] = &[
    e(0x0060, 0x3000, SQ, "Histogram Sequence"),
    e(0x0060, 0x3002, US, "Histogram Number of Bins"),
];

/// Presentation state.
pub static GROUP_0070: &[TagEntry] = &[
    e(0x0070, 0x0001, SQ, "Graphic Annotation Sequence"),
    e(0x0070, 0x0080, CS, "Content Label"),
    e(0x0070, 0x0081, LO, "Content Description"),
];

/// Storage.
pub static GROUP_0088: &[TagEntry] = &[
    e(0x0088, 0x0130, SH, "Storage Media File-set ID"),
    e(0x0088, 0x0140, UI, "Storage Media File-set UID"),
    e(0x0088, 0x0200, SQ, "Icon Image Sequence"),
];

/// Authorization.
pub static GROUP_0100: &[TagEntry] = &[
    e(0x0100, 0x0410, CS, "SOP Instance Status"),
    e(0x0100, 0x0420, DT, "SOP Authorization DateTime"),
    e(0x0100, 0x0424, LT, "SOP Authorization Comment"),
];

/// Digital signatures.
pub static GROUP_0400: &[TagEntry] = &[
    e(0x0400, 0x0005, US, "MAC ID Number"),
    e(0x0400, 0x0010, UI, "MAC Calculation Transfer Syntax UID"),
    e(0x0400, 0x0015, CS, "MAC Algorithm"),
    e(0x0400, 0x0100, UI, "Digital Signature UID"),
];

/// Film session.
pub static GROUP_2000: &[TagEntry] = &[
    e(0x2000, 0x0010, IS, "Number of Copies"),
    e(0x2000, 0x0020, CS, "Print Priority"),
    e(0x2000, 0x0030, CS, "Medium Type"),
    e(0x2000, 0x0040, CS, "Film Destination"),
];

/// Film box.
pub static GROUP_2010: &[TagEntry] = &[
    e(0x2010, 0x0010, ST, "Image Display Format"),
    e(0x2010, 0x0040, CS, "Film Orientation"),
    e(0x2010, 0x0050, CS, "Film Size ID"),
    e(0x2010, 0x0060, CS, "Magnification Type"),
];

/// Image box.
pub static GROUP_2020: &[TagEntry] = &[
    e(0x2020, 0x0010, US, "Image Box Position"),
    e(0x2020, 0x0020, CS, "Polarity"),
    e(0x2020, 0x0110, SQ, "Basic Grayscale Image Sequence"),
];

/// Annotation.
pub static GROUP_2030: &[TagEntry] = &[
    e(0x2030, 0x0010, US, "Annotation Position"),
    e(0x2030, 0x0020, LO, "Text String"),
];

/// Overlay box.
pub static GROUP_2040: &[TagEntry] = &[
    e(0x2040, 0x0060, CS, "Overlay Magnification Type"),
    e(0x2040, 0x0070, CS, "Overlay Smoothing Type"),
];

/// Presentation LUT.
pub static GROUP_2050: &[TagEntry] = &[
    e(0x2050, 0x0010, SQ, "Presentation LUT Sequence"),
    e(0x2050, 0x0020, CS, "Presentation LUT Shape"),
];

/// Print job.
pub static GROUP_2100: &[TagEntry] = &[
    e(0x2100, 0x0020, CS, "Execution Status"),
    e(0x2100, 0x0030, CS, "Execution Status Info"),
    e(0x2100, 0x0040, DA, "Creation Date"),
    e(0x2100, 0x0050, TM, "Creation Time"),
];

/// Printer.
pub static GROUP_2110: &[TagEntry] = &[
    e(0x2110, 0x0010, CS, "Printer Status"),
    e(0x2110, 0x0020, CS, "Printer Status Info"),
    e(0x2110, 0x0030, LO, "Printer Name"),
];

/// Queue.
pub static GROUP_2120: &[TagEntry] = &[
    e(0x2120, 0x0010, CS, "Queue Status"),
    e(0x2120, 0x0050, SQ, "Print Job Description Sequence"),
];

/// Print content.
pub static GROUP_2130: &[TagEntry] = &[
    e(0x2130, 0x0010, SQ, "Print Management Capabilities Sequence"),
    e(0x2130, 0x0040, SQ, "Image Box Content Sequence"),
];

/// RT image.
pub static GROUP_3002: &[TagEntry] = &[
    e(0x3002, 0x0002, SH, "RT Image Label"),
    e(0x3002, 0x0011, DS, "Image Plane Pixel Spacing"),
    e(0x3002, 0x0022, DS, "Radiation Machine SAD"),
];

/// RT dose.
pub static GROUP_3004: &[TagEntry] = &[
    e(0x3004, 0x0002, CS, "Dose Units"),
    e(0x3004, 0x0004, CS, "Dose Type"),
    e(0x3004, 0x000C, DS, "Grid Frame Offset Vector"),
    e(0x3004, 0x000E, DS, "Dose Grid Scaling"),
];

/// RT structure set.
pub static GROUP_3006: &[TagEntry] = &[
    e(0x3006, 0x0002, SH, "Structure Set Label"),
    e(0x3006, 0x0020, SQ, "Structure Set ROI Sequence"),
    e(0x3006, 0x0039, SQ, "ROI Contour Sequence"),
];

/// RT treatment record.
pub static GROUP_3008: &[TagEntry] = &[
    e(0x3008, 0x0010, SQ, "Measured Dose Reference Sequence"),
    e(0x3008, 0x0250, DA, "Treatment Date"),
    e(0x3008, 0x0251, TM, "Treatment Time"),
];

/// RT plan.
pub static GROUP_300A: &[TagEntry] = &[
    e(0x300A, 0x0002, SH, "RT Plan Label"),
    e(0x300A, 0x0003, LO, "RT Plan Name"),
    e(0x300A, 0x00B0, SQ, "Beam Sequence"),
];

/// RT relationship.
pub static GROUP_300C: &[TagEntry] = &[
    e(0x300C, 0x0002, SQ, "Referenced RT Plan Sequence"),
    e(0x300C, 0x0060, SQ, "Referenced Structure Set Sequence"),
];

/// RT approval.
pub static GROUP_300E: &[TagEntry] = &[
    e(0x300E, 0x0002, CS, "Approval Status"),
    e(0x300E, 0x0004, DA, "Review Date"),
    e(0x300E, 0x0005, TM, "Review Time"),
    e(0x300E, 0x0008, PN, "Reviewer Name"),
];

/// Text.
pub static GROUP_4000: &[TagEntry] = &[
    e(0x4000, 0x0010, LT, "Arbitrary"),
    e(0x4000, 0x4000, LT, "Text Comments"),
];

/// Results.
pub static GROUP_4008: &[TagEntry] = &[
    e(0x4008, 0x0040, SH, "Results ID"),
    e(0x4008, 0x0100, DA, "Interpretation Recorded Date"),
    e(0x4008, 0x0300, ST, "Impressions"),
];

/// MAC parameters.
pub static GROUP_4FFE: &[TagEntry] = &[e(0x4FFE, 0x0001, SQ, "MAC Parameters Sequence")];

/// Waveform data.
pub static GROUP_5200: &[TagEntry] = &[
    e(0x5200, 0x9229, SQ, "Shared Functional Groups Sequence"),
    e(0x5200, 0x9230, SQ, "Per-frame Functional Groups Sequence"),
];

/// Waveform sequence.
pub static GROUP_5400: &[TagEntry] = &[
    e(0x5400, 0x0100, SQ, "Waveform Sequence"),
    e(0x5400, 0x1004, US, "Waveform Bits Allocated"),
    e(0x5400, 0x1006, CS, "Waveform Sample Interpretation"),
    e(0x5400, 0x1010, OW, "Waveform Data"),
];

/// Pixel data.
pub static GROUP_7FE0: &[TagEntry] = &[
    e(0x7FE0, 0x0000, UL, "Pixel Data Group Length"),
    e(0x7FE0, 0x0010, OW, "Pixel Data"),
];

/// Digital signatures sequence.
pub static GROUP_FFFA: &[TagEntry] = &[e(0xFFFA, 0xFFFA, SQ, "Digital Signatures Sequence")];

/// Data set trailing padding.
pub static GROUP_FFFC: &[TagEntry] = &[e(0xFFFC, 0xFFFC, OB, "Data Set Trailing Padding")];

/// Item and delimitation markers.
pub static GROUP_FFFE: &[TagEntry] = &[
    e(0xFFFE, 0xE000, NONE, "Item"),
    e(0xFFFE, 0xE00D, NONE, "Item Delimitation Item"),
    e(0xFFFE, 0xE0DD, NONE, "Sequence Delimitation Item"),
];

/// All tables, in group order.
pub static GROUPS: &[&[TagEntry]] = &[
    GROUP_0002, GROUP_0004, GROUP_0008, GROUP_0010, GROUP_0018, GROUP_0020, GROUP_0028,
    GROUP_0032, GROUP_0038, GROUP_003A, GROUP_0040, GROUP_0050, GROUP_0054, GROUP_0060,
    GROUP_0070, GROUP_0088, GROUP_0100, GROUP_0400, GROUP_2000, GROUP_2010, GROUP_2020,
    GROUP_2030, GROUP_2040, GROUP_2050, GROUP_2100, GROUP_2110, GROUP_2120, GROUP_2130,
    GROUP_3002, GROUP_3004, GROUP_3006, GROUP_3008, GROUP_300A, GROUP_300C, GROUP_300E,
    GROUP_4000, GROUP_4008, GROUP_4FFE, GROUP_5200, GROUP_5400, GROUP_7FE0, GROUP_FFFA,
    GROUP_FFFC, GROUP_FFFE,
];
