//! The in-memory DICOM document.
//!
//! A [`Dicom`] holds the known data elements of a file,
//! the image attributes extracted from them,
//! the stored pixel samples and the display window.
use crate::pixeldata::{self, SampleFormat};
use crate::window::Window;
use crate::{
    CheckAttributeSnafu, OpenFileSnafu, ReadHeaderSnafu, ReadPixelDataSnafu,
    ReadUnsupportedTransferSyntaxSnafu, Result,
};
use dicom_lite_core::value::{ConvertValueError, PrimitiveValue};
use dicom_lite_core::{Element, Tag};
use dicom_lite_dictionary_std::{tags, StandardDataDictionary};
use dicom_lite_encoding::Endianness;
use dicom_lite_parser::{Attribute, DecoderOptions, StatefulDecoder, TransferSyntax};
use snafu::{ensure, ResultExt};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

/// A DICOM image document.
///
/// Reading stops at the pixel data element:
/// elements after it are not decoded.
#[derive(Debug, Clone)]
pub struct Dicom {
    filename: Option<PathBuf>,
    success: bool,
    attribute: Attribute,
    endianness: Endianness,
    transfer_syntax: Option<TransferSyntax>,

    modality: String,
    manufacturer: String,
    slice_thickness: f64,
    slice_spacing: f64,
    series_number: i32,
    image_number: i32,
    slice_location: f64,
    rows: u16,
    columns: u16,
    pixel_spacing: [f32; 2],
    bits_allocated: u16,
    bits_stored: u16,
    high_bit: u16,
    /// `true` when pixel samples are unsigned
    pixel_representation: bool,
    window_level: i32,
    window_width: i32,
    rescale_intercept: f64,
    rescale_slope: f64,

    min_raw_value: i32,
    max_raw_value: i32,
    window: Window,
    element_list: Vec<Element>,
    position: u64,
    raw_data: Vec<u8>,
}

impl Default for Dicom {
    fn default() -> Self {
        Dicom {
            filename: None,
            success: false,
            attribute: Attribute::default(),
            endianness: Endianness::Little,
            transfer_syntax: None,
            modality: "unknown".to_string(),
            manufacturer: "unknown".to_string(),
            slice_thickness: 0.,
            slice_spacing: 0.,
            series_number: 0,
            image_number: 0,
            slice_location: 0.,
            rows: 0,
            columns: 0,
            pixel_spacing: [0., 0.],
            bits_allocated: 0,
            bits_stored: 0,
            high_bit: 0,
            pixel_representation: true,
            window_level: 0,
            window_width: 0,
            rescale_intercept: 0.,
            rescale_slope: 1.,
            min_raw_value: 0,
            max_raw_value: 0,
            window: Window::default(),
            element_list: Vec::new(),
            position: 0,
            raw_data: Vec::new(),
        }
    }
}

impl Dicom {
    /// Create an empty document, with no elements nor pixel data.
    pub fn new() -> Self {
        Dicom::default()
    }

    /// Read the file at the given path into this document,
    /// replacing its previous contents.
    ///
    /// On failure, the document keeps what was read so far
    /// and [`is_success`](Dicom::is_success) reports `false`.
    pub fn read<P>(&mut self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.read_with_options(path, DecoderOptions::default())
    }

    pub(crate) fn read_with_options<P>(&mut self, path: P, options: DecoderOptions) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        *self = Dicom::default();
        self.filename = Some(path.to_path_buf());

        let outcome = File::open(path)
            .context(OpenFileSnafu { filename: path })
            .and_then(|file| self.read_document(BufReader::new(file), options));
        self.finish_read(outcome)
    }

    /// Read a document from a byte source,
    /// replacing the previous contents of this document.
    pub fn read_from<S>(&mut self, source: S, options: DecoderOptions) -> Result<()>
    where
        S: Read + Seek,
    {
        *self = Dicom::default();
        let outcome = self.read_document(source, options);
        self.finish_read(outcome)
    }

    /// Record and log the outcome of a read.
    fn finish_read(&mut self, outcome: Result<()>) -> Result<()> {
        self.success = outcome.is_ok();
        if let Err(e) = &outcome {
            match &self.filename {
                Some(path) => error!(
                    "Could not read DICOM file {}: {}",
                    path.display(),
                    snafu::Report::from_error(e)
                ),
                None => error!("Could not read DICOM data: {}", snafu::Report::from_error(e)),
            }
        }
        outcome
    }

    fn read_document<S>(&mut self, mut source: S, options: DecoderOptions) -> Result<()>
    where
        S: Read + Seek,
    {
        self.attribute = Attribute::check(&mut source).context(CheckAttributeSnafu)?;
        let mut decoder = StatefulDecoder::new_with(
            &mut source,
            self.attribute.swap,
            self.attribute.position(),
            StandardDataDictionary,
            options,
        );

        self.read_header(&mut decoder)?;
        self.endianness = decoder.endianness();
        self.position = decoder.position();

        let size = self.size();
        self.raw_data = decoder
            .read_bytes(size)
            .context(ReadPixelDataSnafu { size })?;

        self.set_min_max_window_value();
        self.set_min_max_raw_value();
        self.set_windowing_parameter();
        Ok(())
    }

    /// Decode elements up to and including the pixel data element.
    fn read_header<S>(&mut self, decoder: &mut StatefulDecoder<S>) -> Result<()>
    where
        S: Read,
    {
        let mut meta_end: Option<u64> = None;
        // the byte order of the data set after the file meta group
        let mut pending: Option<(u64, Endianness)> = None;

        loop {
            if let Some((end, endianness)) = pending {
                if decoder.position() >= end {
                    decoder.set_endianness(endianness);
                    pending = None;
                }
            }

            let element = decoder.decode_element().context(ReadHeaderSnafu)?;
            let tag = element.tag();

            if tag.is_meta() {
                if tag == tags::FILE_META_INFORMATION_GROUP_LENGTH {
                    if let Ok(len) = element.primitive().to_int::<u64>() {
                        meta_end = Some(decoder.position() + len);
                    }
                } else if tag == tags::TRANSFER_SYNTAX_UID {
                    let ts = TransferSyntax::from_uid(&element.primitive().to_str());
                    ensure!(
                        ts.is_supported(),
                        ReadUnsupportedTransferSyntaxSnafu { uid: ts.uid() }
                    );
                    if let (Some(end), Some(endianness)) = (meta_end, ts.endianness()) {
                        pending = Some((end, endianness));
                    }
                    self.transfer_syntax = Some(ts);
                }
            }

            self.parse_element(&element);

            let done = tag == tags::PIXEL_DATA;
            if element.is_known() {
                self.element_list.push(element);
            } else {
                debug!("Skipping unknown element {}", tag);
            }
            if done {
                return Ok(());
            }
        }
    }

    /// Extract the image attributes of a decoded element.
    fn parse_element(&mut self, element: &Element) {
        let value = element.primitive();
        match element.tag() {
            tags::MODALITY => self.modality = value.to_str().into_owned(),
            tags::MANUFACTURER => self.manufacturer = value.to_str().into_owned(),
            tags::SLICE_THICKNESS => extract(element, &mut self.slice_thickness, |v| v.to_float64()),
            tags::SPACING_BETWEEN_SLICES => {
                extract(element, &mut self.slice_spacing, |v| v.to_float64())
            }
            tags::SERIES_NUMBER => extract(element, &mut self.series_number, |v| v.to_int()),
            tags::INSTANCE_NUMBER => extract(element, &mut self.image_number, |v| v.to_int()),
            tags::SLICE_LOCATION => extract(element, &mut self.slice_location, |v| v.to_float64()),
            tags::COLUMNS => extract(element, &mut self.columns, |v| v.to_int()),
            tags::ROWS => extract(element, &mut self.rows, |v| v.to_int()),
            tags::BITS_ALLOCATED => extract(element, &mut self.bits_allocated, |v| v.to_int()),
            tags::BITS_STORED => extract(element, &mut self.bits_stored, |v| v.to_int()),
            tags::HIGH_BIT => extract(element, &mut self.high_bit, |v| v.to_int()),
            tags::PIXEL_REPRESENTATION => {
                extract(element, &mut self.pixel_representation, |v| {
                    v.to_int::<u16>().map(|r| r == 0)
                })
            }
            tags::PIXEL_SPACING => self.parse_pixel_spacing(value),
            tags::WINDOW_CENTER => extract(element, &mut self.window_level, |v| v.to_int()),
            tags::WINDOW_WIDTH => extract(element, &mut self.window_width, |v| v.to_int()),
            tags::RESCALE_INTERCEPT => {
                extract(element, &mut self.rescale_intercept, |v| v.to_float64())
            }
            tags::RESCALE_SLOPE => extract(element, &mut self.rescale_slope, |v| v.to_float64()),
            _ => {}
        }
    }

    /// Pixel spacing is two `\`-separated decimal strings.
    fn parse_pixel_spacing(&mut self, value: &PrimitiveValue) {
        let text = value.to_str();
        if text.trim().is_empty() {
            return;
        }
        let tokens: Vec<&str> = text
            .split('\\')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.len() != 2 {
            warn!("Wrong string for the pixel spacing: {}", text);
            return;
        }
        match (tokens[0].parse::<f32>(), tokens[1].parse::<f32>()) {
            (Ok(row), Ok(column)) => self.pixel_spacing = [row, column],
            _ => warn!("Wrong string for the pixel spacing: {}", text),
        }
    }

    fn set_windowing_parameter(&mut self) {
        if self.window_level == 0 && self.window_width == 0 {
            let (min, max) = match (self.bits_allocated, self.pixel_representation) {
                (8, true) => (i32::from(u8::MIN), i32::from(u8::MAX)),
                (8, false) => (i32::from(i8::MIN), i32::from(i8::MAX)),
                // 16-bit data is not widened to its type range
                (16, _) => (self.min_raw_value, self.max_raw_value),
                _ => (self.min_raw_value, self.max_raw_value),
            };
            self.window_level = (f64::from(max + min) / 2.0) as i32;
            self.window_width = max - min + 1;
        }
        self.window.set_level(self.window_level);
        self.window.set_width(self.window_width);
    }

    fn set_min_max_window_value(&mut self) {
        self.window.set(self.bits_stored, !self.pixel_representation);
        self.window.rescale(self.rescale_slope, self.rescale_intercept);
    }

    fn set_min_max_raw_value(&mut self) {
        let (min, max) = match self.sample_format() {
            Some(format) => {
                let samples =
                    pixeldata::decode_samples(&self.raw_data, format, self.endianness, self.npixels());
                pixeldata::min_max(&samples)
            }
            None => (0, 0),
        };
        self.min_raw_value = min;
        self.max_raw_value = max;
    }

    fn sample_format(&self) -> Option<SampleFormat> {
        SampleFormat::new(self.bits_allocated, self.pixel_representation)
    }

    fn npixels(&self) -> usize {
        usize::from(self.rows) * usize::from(self.columns)
    }

    /// The display intensities of the pixels under the current window.
    ///
    /// 8-bit unsigned samples are returned as is,
    /// 8-bit signed samples are shifted into the unsigned range.
    /// For bit depths other than 8 or 16, all pixels are zero.
    pub fn pixel_data(&self) -> Vec<u8> {
        self.pixel_data_with_window(self.window.level(), self.window.width())
    }

    /// The display intensities of the pixels under the given window.
    pub fn pixel_data_with_window(&self, level: i32, width: i32) -> Vec<u8> {
        match self.sample_format() {
            Some(format) => pixeldata::to_display(
                &self.raw_data,
                format,
                self.endianness,
                self.npixels(),
                (self.rescale_slope, self.rescale_intercept),
                (level, width),
            ),
            None => {
                error!(
                    "Cannot read the pixel data of {} bits allocated",
                    self.bits_allocated
                );
                vec![0; self.npixels()]
            }
        }
    }

    /// The stored value of the pixel at `index`.
    ///
    /// Pixels outside of the pixel data,
    /// and pixels of an unsupported bit depth, are zero.
    pub fn raw_value(&self, index: usize) -> i32 {
        self.sample_format()
            .and_then(|format| pixeldata::sample_at(&self.raw_data, format, self.endianness, index))
            .unwrap_or(0)
    }

    /// The stored value of the pixel at column `x` of row `y`.
    pub fn raw_value_at(&self, x: usize, y: usize) -> i32 {
        self.raw_value(usize::from(self.columns) * y + x)
    }

    /// The rescaled value of the pixel at `index`, rounded.
    pub fn value(&self, index: usize) -> i32 {
        self.rescaled(self.raw_value(index))
    }

    /// The rescaled value of the pixel at column `x` of row `y`, rounded.
    pub fn value_at(&self, x: usize, y: usize) -> i32 {
        self.rescaled(self.raw_value_at(x, y))
    }

    fn rescaled(&self, raw: i32) -> i32 {
        (f64::from(raw) * self.rescale_slope + self.rescale_intercept).round() as i32
    }

    /// Apply a new window level and width,
    /// without touching the pixel data.
    pub fn change_window(&mut self, level: i32, width: i32) {
        self.window.set_level(level);
        self.window.set_width(width);
    }

    /// Restore the window level and width read from the file.
    pub fn reset_window(&mut self) {
        self.window.set_level(self.window_level);
        self.window.set_width(self.window_width);
    }

    /// Replace the stored pixel data,
    /// updating the window range and the raw value extrema.
    pub fn set_raw_data(&mut self, raw_data: Vec<u8>) {
        self.raw_data = raw_data;
        self.set_min_max_window_value();
        self.set_min_max_raw_value();
    }

    /// Find the known element with the given tag.
    pub fn find_element(&self, tag: Tag) -> Option<&Element> {
        self.element_list.iter().find(|e| e.tag() == tag)
    }

    /// The known elements of the document, in file order.
    pub fn element_list(&self) -> &[Element] {
        &self.element_list
    }

    /// Whether the last read was successful.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// The path of the file last read, if any.
    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    pub fn attribute(&self) -> Attribute {
        self.attribute
    }

    /// The transfer syntax declared in the file meta group, if any.
    pub fn transfer_syntax(&self) -> Option<&TransferSyntax> {
        self.transfer_syntax.as_ref()
    }

    /// The byte order of the pixel samples.
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// The position of the pixel samples in the file.
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn modality(&self) -> &str {
        &self.modality
    }

    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    pub fn slice_thickness(&self) -> f64 {
        self.slice_thickness
    }

    pub fn slice_spacing(&self) -> f64 {
        self.slice_spacing
    }

    pub fn series_number(&self) -> i32 {
        self.series_number
    }

    pub fn image_number(&self) -> i32 {
        self.image_number
    }

    pub fn slice_location(&self) -> f64 {
        self.slice_location
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// The image width, in pixels (same as the number of columns).
    pub fn width(&self) -> u16 {
        self.columns
    }

    /// The image height, in pixels (same as the number of rows).
    pub fn height(&self) -> u16 {
        self.rows
    }

    /// The size of the pixel data in bytes.
    pub fn size(&self) -> usize {
        self.npixels() * usize::from(self.bytes_allocated())
    }

    /// The physical distance between pixel centers, as row then column spacing.
    pub fn pixel_spacing(&self) -> [f32; 2] {
        self.pixel_spacing
    }

    pub fn bits_allocated(&self) -> u16 {
        self.bits_allocated
    }

    pub fn bytes_allocated(&self) -> u16 {
        self.bits_allocated >> 3
    }

    pub fn bits_stored(&self) -> u16 {
        self.bits_stored
    }

    pub fn bytes_stored(&self) -> u16 {
        self.bits_stored >> 3
    }

    pub fn high_bit(&self) -> u16 {
        self.high_bit
    }

    /// Whether pixel samples are unsigned.
    ///
    /// This is `true` when the Pixel Representation attribute is 0.
    pub fn pixel_representation(&self) -> bool {
        self.pixel_representation
    }

    /// The window center, read from the file or derived from the pixel data.
    pub fn window_level(&self) -> i32 {
        self.window_level
    }

    /// The window width, read from the file or derived from the pixel data.
    pub fn window_width(&self) -> i32 {
        self.window_width
    }

    pub fn min_window_value(&self) -> i32 {
        self.window.min_value()
    }

    pub fn max_window_value(&self) -> i32 {
        self.window.max_value()
    }

    pub fn min_raw_value(&self) -> i32 {
        self.min_raw_value
    }

    pub fn max_raw_value(&self) -> i32 {
        self.max_raw_value
    }

    pub fn min_value(&self) -> i32 {
        self.rescaled(self.min_raw_value)
    }

    pub fn max_value(&self) -> i32 {
        self.rescaled(self.max_raw_value)
    }

    pub fn rescale_intercept(&self) -> f64 {
        self.rescale_intercept
    }

    pub fn rescale_slope(&self) -> f64 {
        self.rescale_slope
    }

    /// The current display window.
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// The stored pixel samples, as read from the file.
    pub fn raw_data(&self) -> &[u8] {
        &self.raw_data
    }
}

/// Convert the value of `element` into `target`,
/// leaving it untouched when the value is empty
/// or cannot be converted.
fn extract<T, F>(element: &Element, target: &mut T, convert: F)
where
    F: FnOnce(&PrimitiveValue) -> Result<T, ConvertValueError>,
{
    let value = element.primitive();
    if value.is_empty() || matches!(value, PrimitiveValue::Str(s) if s.trim().is_empty()) {
        return;
    }
    match convert(value) {
        Ok(v) => *target = v,
        Err(e) => warn!("Could not read {} {}: {}", element.name(), element.tag(), e),
    }
}

impl fmt::Display for Dicom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filename = self
            .filename
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        writeln!(f, "Filename : {}", filename)?;
        writeln!(f, "Modality : {}", self.modality)?;
        writeln!(f, "Manufacturer : {}", self.manufacturer)?;
        writeln!(f, "Slice thickness : {}", self.slice_thickness)?;
        writeln!(f, "Slice spacing : {}", self.slice_spacing)?;
        writeln!(f, "Series number : {}", self.series_number)?;
        writeln!(f, "Image number : {}", self.image_number)?;
        writeln!(f, "Slice location : {}", self.slice_location)?;
        writeln!(f, "Row : {}", self.rows)?;
        writeln!(f, "Column : {}", self.columns)?;
        writeln!(
            f,
            "Pixel spacing : {} {}",
            self.pixel_spacing[0], self.pixel_spacing[1]
        )?;
        writeln!(f, "Bits allocated : {}", self.bits_allocated)?;
        writeln!(f, "Bits stored : {}", self.bits_stored)?;
        writeln!(f, "High bit : {}", self.high_bit)?;
        writeln!(
            f,
            "Pixel representation : {}",
            if self.pixel_representation {
                "unsigned"
            } else {
                "signed"
            }
        )?;
        writeln!(f, "Window center : {}", self.window_level)?;
        writeln!(f, "Window width : {}", self.window_width)?;
        writeln!(f, "Rescale intercept : {}", self.rescale_intercept)?;
        writeln!(f, "Rescale slope : {}", self.rescale_slope)
    }
}
