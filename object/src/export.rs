//! Exporting a document as a header dump, a CSV table or raw pixel data.
//!
//! The format is chosen from the file extension by [`Dicom::write`].

use crate::mem::Dicom;
use crate::{UnsupportedExtensionSnafu, WriteError, WriteFileSnafu};
use snafu::ResultExt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// The header row of the CSV export.
pub const CSV_HEADER: &str =
    "Group ID,Element ID,Element name,VR type,VR description,Value length,Value";

/// An export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Every known element header and value (`.hdr`)
    Header,
    /// One row per known element (`.csv`)
    Csv,
    /// The stored pixel data as is (`.raw`)
    Raw,
}

impl ExportFormat {
    /// The export format for the extension of the given path.
    /// Letter case is ignored.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "hdr" => Some(ExportFormat::Header),
            "csv" => Some(ExportFormat::Csv),
            "raw" => Some(ExportFormat::Raw),
            _ => None,
        }
    }
}

impl Dicom {
    /// Export this document to the given path,
    /// in the format named by its extension: `hdr`, `csv` or `raw`.
    pub fn write<P>(&self, path: P) -> Result<(), WriteError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let format = ExportFormat::from_path(path)
            .ok_or_else(|| UnsupportedExtensionSnafu { filename: path }.build())?;
        let file = File::create(path).context(WriteFileSnafu { filename: path })?;
        let mut to = BufWriter::new(file);
        self.write_as(&mut to, format)
            .and_then(|()| to.flush())
            .context(WriteFileSnafu { filename: path })
    }

    /// Export this document to a writer.
    pub fn write_as<W>(&self, to: W, format: ExportFormat) -> io::Result<()>
    where
        W: Write,
    {
        match format {
            ExportFormat::Header => self.write_header(to),
            ExportFormat::Csv => self.write_header_csv(to),
            ExportFormat::Raw => self.write_raw_data(to),
        }
    }

    /// Print every known element, each followed by a blank line.
    pub fn write_header<W>(&self, mut to: W) -> io::Result<()>
    where
        W: Write,
    {
        for element in self.element_list() {
            writeln!(to, "{}", element)?;
            writeln!(to)?;
        }
        Ok(())
    }

    /// Print the known elements as a CSV table.
    pub fn write_header_csv<W>(&self, mut to: W) -> io::Result<()>
    where
        W: Write,
    {
        writeln!(to, "{}", CSV_HEADER)?;
        for element in self.element_list() {
            let tag = element.tag();
            let vr = element.vr();
            writeln!(
                to,
                "0x{:04x},0x{:04x},{},{},{},{},{}",
                tag.group(),
                tag.element(),
                element.name(),
                vr.vr_type,
                vr.vr_type.description(),
                vr.length.0,
                element.value()
            )?;
        }
        Ok(())
    }

    /// Write the stored pixel data verbatim.
    pub fn write_raw_data<W>(&self, mut to: W) -> io::Result<()>
    where
        W: Write,
    {
        to.write_all(self.raw_data())
    }
}
