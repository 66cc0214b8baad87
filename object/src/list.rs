//! A volume of image slices read from a directory.
//!
//! All slices of a [`DicomList`] share the size of the first slice
//! read. Slices of another size are left out.

use crate::file::{check_extension, open_file};
use crate::mem::Dicom;
use itertools::Itertools;
use snafu::{ensure, Backtrace, ResultExt, Snafu};
use std::fmt;
use std::fs;
use std::ops::Index;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("'{}' is not a directory", dirname.display()))]
    NotADirectory {
        dirname: PathBuf,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not read directory '{}'", dirname.display()))]
    ReadDirectory {
        dirname: PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("No DICOM files found in '{}'", dirname.display()))]
    NoFiles {
        dirname: PathBuf,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The order of the slices in a volume.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortBy {
    /// Ascending slice location
    #[default]
    SliceLocation,
    /// Ascending image (instance) number
    ImageNumber,
    /// Ascending series number
    SeriesNumber,
}

/// A list of image slices of the same size.
#[derive(Debug, Clone)]
pub struct DicomList {
    dirname: Option<PathBuf>,
    extension_check: bool,
    slices: Vec<Dicom>,
    rows: u16,
    columns: u16,
    slice_thickness: f64,
    slice_spacing: f64,
    pixel_spacing: [f32; 2],
    min_raw_value: i32,
    max_raw_value: i32,
}

impl Default for DicomList {
    fn default() -> Self {
        DicomList {
            dirname: None,
            extension_check: true,
            slices: Vec::new(),
            rows: 0,
            columns: 0,
            slice_thickness: 0.,
            slice_spacing: 0.,
            pixel_spacing: [0., 0.],
            min_raw_value: 0,
            max_raw_value: 0,
        }
    }
}

impl DicomList {
    /// Create an empty list, which only reads files
    /// with a DICOM file extension.
    pub fn new() -> Self {
        DicomList::default()
    }

    /// Read the DICOM files in a directory,
    /// sorted by slice location.
    pub fn open_dir<P>(dirname: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let mut list = DicomList::new();
        list.read(dirname)?;
        list.sort(SortBy::default());
        Ok(list)
    }

    /// Set whether to read only files with a DICOM file extension.
    pub fn extension_check(mut self, enabled: bool) -> Self {
        self.extension_check = enabled;
        self
    }

    /// Read the files of a directory into the list,
    /// replacing the slices read before.
    ///
    /// Files which cannot be read as DICOM documents are skipped.
    /// The directory must hold at least one candidate file.
    pub fn read<P>(&mut self, dirname: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let dirname = dirname.as_ref();
        self.clear();
        self.dirname = Some(dirname.to_path_buf());
        ensure!(dirname.is_dir(), NotADirectorySnafu { dirname });

        let files: Vec<PathBuf> = fs::read_dir(dirname)
            .context(ReadDirectorySnafu { dirname })?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<_>>>()
            .context(ReadDirectorySnafu { dirname })?
            .into_iter()
            .filter(|path| path.is_file())
            .filter(|path| !self.extension_check || check_extension(path))
            .sorted()
            .collect();
        ensure!(!files.is_empty(), NoFilesSnafu { dirname });

        for path in files {
            match open_file(&path) {
                Ok(dicom) => {
                    self.push(dicom);
                }
                Err(e) => warn!("Skipping {}: {}", path.display(), snafu::Report::from_error(e)),
            }
        }
        Ok(())
    }

    /// Add a slice to the list.
    ///
    /// The first slice defines the size of the volume.
    /// Returns `false` if the slice has another size and was left out.
    pub fn push(&mut self, dicom: Dicom) -> bool {
        if self.slices.is_empty() {
            self.rows = dicom.rows();
            self.columns = dicom.columns();
            self.slice_thickness = dicom.slice_thickness();
            self.slice_spacing = dicom.slice_spacing();
            self.pixel_spacing = dicom.pixel_spacing();
            self.min_raw_value = dicom.min_raw_value();
            self.max_raw_value = dicom.max_raw_value();
        } else {
            if self.rows != dicom.rows() || self.columns != dicom.columns() {
                warn!(
                    "Image size {}x{} of {} does not match the volume size {}x{}",
                    dicom.columns(),
                    dicom.rows(),
                    dicom
                        .filename()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default(),
                    self.columns,
                    self.rows
                );
                return false;
            }
            self.min_raw_value = self.min_raw_value.min(dicom.min_raw_value());
            self.max_raw_value = self.max_raw_value.max(dicom.max_raw_value());
        }
        self.slices.push(dicom);
        true
    }

    /// Sort the slices in ascending order of the given attribute.
    pub fn sort(&mut self, by: SortBy) {
        match by {
            SortBy::SliceLocation => self
                .slices
                .sort_by(|a, b| a.slice_location().total_cmp(&b.slice_location())),
            SortBy::ImageNumber => self.slices.sort_by_key(Dicom::image_number),
            SortBy::SeriesNumber => self.slices.sort_by_key(Dicom::series_number),
        }
    }

    /// Remove all slices.
    pub fn clear(&mut self) {
        self.slices.clear();
        self.rows = 0;
        self.columns = 0;
        self.slice_thickness = 0.;
        self.slice_spacing = 0.;
        self.pixel_spacing = [0., 0.];
        self.min_raw_value = 0;
        self.max_raw_value = 0;
    }

    /// The number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// The size of the pixel data of all slices, in bytes.
    pub fn size(&self) -> usize {
        self.slices.iter().map(Dicom::size).sum()
    }

    /// The directory last read, if any.
    pub fn dirname(&self) -> Option<&Path> {
        self.dirname.as_deref()
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn width(&self) -> u16 {
        self.columns
    }

    pub fn height(&self) -> u16 {
        self.rows
    }

    pub fn slice_thickness(&self) -> f64 {
        self.slice_thickness
    }

    pub fn slice_spacing(&self) -> f64 {
        self.slice_spacing
    }

    pub fn pixel_spacing(&self) -> [f32; 2] {
        self.pixel_spacing
    }

    /// The smallest stored value over all slices.
    pub fn min_raw_value(&self) -> i32 {
        self.min_raw_value
    }

    /// The largest stored value over all slices.
    pub fn max_raw_value(&self) -> i32 {
        self.max_raw_value
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dicom> {
        self.slices.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Dicom> {
        self.slices.get(index)
    }

    /// The stored pixel data of all slices, in slice order.
    pub fn volume_data(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.size());
        for dicom in &self.slices {
            data.extend_from_slice(dicom.raw_data());
        }
        data
    }
}

impl Index<usize> for DicomList {
    type Output = Dicom;

    fn index(&self, index: usize) -> &Dicom {
        &self.slices[index]
    }
}

impl<'a> IntoIterator for &'a DicomList {
    type Item = &'a Dicom;
    type IntoIter = std::slice::Iter<'a, Dicom>;

    fn into_iter(self) -> Self::IntoIter {
        self.slices.iter()
    }
}

impl fmt::Display for DicomList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dirname = self
            .dirname
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        writeln!(f, "Filename : {}", dirname)?;
        writeln!(f, "Row : {}", self.rows)?;
        writeln!(f, "Column : {}", self.columns)?;
        writeln!(f, "Number of slices : {}", self.slices.len())?;
        writeln!(f, "Slice spacing : {}", self.slice_spacing)?;
        writeln!(f, "Slice thickness : {}", self.slice_thickness)?;
        writeln!(
            f,
            "Pixel spacing : {} {}",
            self.pixel_spacing[0], self.pixel_spacing[1]
        )?;
        writeln!(f, "Min. raw value : {}", self.min_raw_value)?;
        writeln!(f, "Max. raw value : {}", self.max_raw_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::from_reader;
    use std::io::Cursor;

    fn implicit(group: u16, element: u16, value: &[u8]) -> Vec<u8> {
        [
            &group.to_le_bytes()[..],
            &element.to_le_bytes()[..],
            &(value.len() as u32).to_le_bytes()[..],
            value,
        ]
        .concat()
    }

    /// An 8-bit image with one row of `pixels`.
    fn slice(location: &str, number: &str, pixels: &[u8]) -> Vec<u8> {
        [
            &implicit(0x0020, 0x0013, number.as_bytes())[..],
            &implicit(0x0020, 0x1041, location.as_bytes())[..],
            &implicit(0x0028, 0x0010, &1u16.to_le_bytes())[..],
            &implicit(0x0028, 0x0011, &(pixels.len() as u16).to_le_bytes())[..],
            &implicit(0x0028, 0x0100, &8u16.to_le_bytes())[..],
            &implicit(0x7FE0, 0x0010, pixels)[..],
        ]
        .concat()
    }

    fn dicom(data: Vec<u8>) -> Dicom {
        from_reader(Cursor::new(data)).unwrap()
    }

    #[cfg(target_endian = "little")]
    #[test]
    fn first_slice_defines_the_volume() {
        let mut list = DicomList::new();
        assert!(list.is_empty());
        assert!(list.push(dicom(slice("2.0", "1", &[5, 6]))));
        assert!(list.push(dicom(slice("1.0", "2", &[1, 9]))));
        // another size
        assert!(!list.push(dicom(slice("3.0", "3", &[0, 0, 0]))));

        assert_eq!(list.len(), 2);
        assert_eq!((list.rows(), list.columns()), (1, 2));
        assert_eq!(list.size(), 4);
        assert_eq!((list.min_raw_value(), list.max_raw_value()), (1, 9));
        assert_eq!(list.volume_data(), vec![5, 6, 1, 9]);

        list.sort(SortBy::SliceLocation);
        assert_eq!(list[0].image_number(), 2);
        assert_eq!(list.volume_data(), vec![1, 9, 5, 6]);

        list.sort(SortBy::ImageNumber);
        assert_eq!(
            list.iter().map(Dicom::image_number).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[cfg(target_endian = "little")]
    #[test]
    fn read_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.dcm"), slice("-1.5", "2", &[3, 4])).unwrap();
        fs::write(dir.path().join("a.DCM"), slice("7.5", "1", &[1, 2])).unwrap();
        fs::write(dir.path().join("c.dcm"), b"not an image").unwrap();
        fs::write(dir.path().join("d.txt"), slice("0.0", "3", &[5, 6])).unwrap();
        fs::create_dir(dir.path().join("sub.dcm")).unwrap();

        let list = DicomList::open_dir(dir.path()).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.dirname(), Some(dir.path()));
        assert_eq!(list.volume_data(), vec![3, 4, 1, 2]);

        let mut list = DicomList::new().extension_check(false);
        list.read(dir.path()).unwrap();
        assert_eq!(list.len(), 3);
        // reading again replaces the slices
        list.read(dir.path()).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.size(), 6);

        let text = list.to_string();
        assert!(text.contains("Number of slices : 3\n"));
        assert!(text.contains("Column : 2\n"));
    }

    #[test]
    fn directory_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            DicomList::open_dir(dir.path()),
            Err(Error::NoFiles { .. })
        ));

        fs::write(dir.path().join("notes.txt"), b"hello").unwrap();
        assert!(matches!(
            DicomList::open_dir(dir.path()),
            Err(Error::NoFiles { .. })
        ));
        assert!(matches!(
            DicomList::open_dir(dir.path().join("notes.txt")),
            Err(Error::NotADirectory { .. })
        ));
        assert!(matches!(
            DicomList::open_dir(dir.path().join("missing")),
            Err(Error::NotADirectory { .. })
        ));
    }
}
