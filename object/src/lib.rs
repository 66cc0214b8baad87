//! This crate contains a high-level abstraction for reading DICOM images.
//!
//! A [`Dicom`] document is read from a file with [`open_file`],
//! or with additional options through [`OpenFileOptions`].
//! Reading decodes data elements up to the pixel data,
//! keeps the elements known to the attribute dictionary,
//! extracts the image geometry and the windowing parameters,
//! and finally loads the stored pixel samples.
//!
//! # Examples
//!
//! ```no_run
//! use dicom_lite_object::open_file;
//! # fn foo() -> Result<(), Box<dyn std::error::Error>> {
//! let mut obj = open_file("0001.dcm")?;
//! println!("{}x{} {}", obj.columns(), obj.rows(), obj.modality());
//!
//! // 8-bit intensities under the current window
//! let pixels: Vec<u8> = obj.pixel_data();
//!
//! // window again without reading the file
//! obj.change_window(40, 400);
//! let pixels: Vec<u8> = obj.pixel_data();
//! obj.reset_window();
//! # Ok(())
//! # }
//! ```
//!
//! A directory of slices of the same size is read as a [`DicomList`]:
//!
//! ```no_run
//! use dicom_lite_object::list::{DicomList, SortBy};
//! # fn foo() -> Result<(), Box<dyn std::error::Error>> {
//! let mut volume = DicomList::open_dir("series/")?;
//! volume.sort(SortBy::ImageNumber);
//! let voxels: Vec<u8> = volume.volume_data();
//! # Ok(())
//! # }
//! ```
pub mod export;
pub mod file;
pub mod list;
pub mod mem;
pub mod pixeldata;
pub mod window;

pub use dicom_lite_core::{Element, Tag};
pub use dicom_lite_dictionary_std::StandardDataDictionary;
pub use file::{check_extension, from_reader, open_file, OpenFileOptions};
pub use list::DicomList;
pub use mem::Dicom;
pub use window::Window;

use snafu::{Backtrace, Snafu};

/// An error which may occur when loading a DICOM document
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ReadError {
    #[snafu(display("Could not open file '{}'", filename.display()))]
    OpenFile {
        filename: std::path::PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not check the file attributes"))]
    CheckAttribute {
        #[snafu(backtrace)]
        source: dicom_lite_parser::attribute::Error,
    },
    #[snafu(display("Could not read data element"))]
    ReadHeader {
        #[snafu(backtrace)]
        source: dicom_lite_parser::stateful::decode::Error,
    },
    #[snafu(display("Unsupported transfer syntax `{}`", uid))]
    ReadUnsupportedTransferSyntax { uid: String, backtrace: Backtrace },
    #[snafu(display("Could not read {} bytes of pixel data", size))]
    ReadPixelData {
        size: usize,
        backtrace: Backtrace,
        source: std::io::Error,
    },
}

/// An error which may occur when exporting a DICOM document
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum WriteError {
    #[snafu(display("Could not write to file '{}'", filename.display()))]
    WriteFile {
        filename: std::path::PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display(
        "Unsupported export format for '{}', expected hdr, csv or raw",
        filename.display()
    ))]
    UnsupportedExtension {
        filename: std::path::PathBuf,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = ReadError> = std::result::Result<T, E>;
