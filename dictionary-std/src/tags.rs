//! Attribute tag constants, named after the attribute keyword.

use dicom_lite_core::header::Tag;

/// File Meta Information Group Length (0002,0000)
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// Transfer Syntax UID (0002,0010)
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// Modality (0008,0060)
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// Manufacturer (0008,0070)
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// Slice Thickness (0018,0050)
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// Spacing Between Slices (0018,0088)
pub const SPACING_BETWEEN_SLICES: Tag = Tag(0x0018, 0x0088);
/// Series Number (0020,0011)
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// Instance Number (0020,0013), also known as Image Number
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// Slice Location (0020,1041)
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
/// Rows (0028,0010)
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns (0028,0011)
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// Pixel Spacing (0028,0030)
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// Bits Allocated (0028,0100)
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// Bits Stored (0028,0101)
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// High Bit (0028,0102)
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// Pixel Representation (0028,0103)
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// Window Center (0028,1050)
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// Window Width (0028,1051)
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// Rescale Intercept (0028,1052)
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// Rescale Slope (0028,1053)
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// Pixel Data (7FE0,0010)
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
