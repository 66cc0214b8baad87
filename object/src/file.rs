use crate::mem::Dicom;
use crate::Result;
use dicom_lite_parser::DecoderOptions;
use std::io::{Read, Seek};
use std::path::Path;

/// Create a DICOM document by reading from a byte source.
///
/// The source may start with the 128-byte preamble and `DICM` code,
/// or directly with the first data element.
pub fn from_reader<F>(file: F) -> Result<Dicom>
where
    F: Read + Seek,
{
    OpenFileOptions::new().from_reader(file)
}

/// Create a DICOM document by reading from a file.
pub fn open_file<P>(path: P) -> Result<Dicom>
where
    P: AsRef<Path>,
{
    OpenFileOptions::new().open_file(path)
}

/// Whether the path has a DICOM file extension:
/// `dcm` or `dicom`, in any letter case.
pub fn check_extension<P>(path: P) -> bool
where
    P: AsRef<Path>,
{
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("dcm") || ext.eq_ignore_ascii_case("dicom"))
        .unwrap_or(false)
}

/// A builder type for opening a DICOM file with additional options.
///
/// # Example
///
/// ```no_run
/// # use dicom_lite_object::OpenFileOptions;
/// let file = OpenFileOptions::new()
///     .max_items(1024)
///     .open_file("path/to/file.dcm")?;
/// # Result::<(), Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Default, Clone)]
#[non_exhaustive]
pub struct OpenFileOptions {
    decoder: DecoderOptions,
}

impl OpenFileOptions {
    pub fn new() -> Self {
        OpenFileOptions::default()
    }

    /// Set the maximum number of items read in a single sequence.
    pub fn max_items(mut self, max_items: usize) -> Self {
        self.decoder = self.decoder.max_items(max_items);
        self
    }

    /// Open the file at the given path.
    pub fn open_file<P>(self, path: P) -> Result<Dicom>
    where
        P: AsRef<Path>,
    {
        let mut dicom = Dicom::new();
        dicom.read_with_options(path, self.decoder)?;
        Ok(dicom)
    }

    /// Obtain a DICOM document by reading from a byte source.
    pub fn from_reader<R>(self, from: R) -> Result<Dicom>
    where
        R: Read + Seek,
    {
        let mut dicom = Dicom::new();
        dicom.read_from(from, self.decoder)?;
        Ok(dicom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReadError;
    use dicom_lite_parser::stateful::decode::Error as DecodeError;
    use rstest::rstest;
    use std::io::Cursor;

    #[rstest]
    #[case("image.dcm", true)]
    #[case("IMAGE.DCM", true)]
    #[case("dir/slice.Dicom", true)]
    #[case("image.dcm.bak", false)]
    #[case("image.raw", false)]
    #[case("dcm", false)]
    fn extensions(#[case] path: &str, #[case] expected: bool) {
        assert_eq!(check_extension(path), expected);
    }

    #[test]
    fn item_bound_is_applied() {
        #[rustfmt::skip]
        let mut data: Vec<u8> = vec![
            // (0008,1140) Referenced Image Sequence, undefined length
            0x08, 0x00, 0x40, 0x11, b'S', b'Q', 0x00, 0x00, 0xff, 0xff, 0xff, 0xff,
        ];
        for _ in 0..3 {
            // empty item
            data.extend_from_slice(&[0xfe, 0xff, 0x00, 0xe0, 0x00, 0x00, 0x00, 0x00]);
        }
        // sequence delimitation
        data.extend_from_slice(&[0xfe, 0xff, 0xdd, 0xe0, 0x00, 0x00, 0x00, 0x00]);

        let err = OpenFileOptions::new()
            .max_items(2)
            .from_reader(Cursor::new(data.clone()))
            .unwrap_err();
        assert!(matches!(
            err,
            ReadError::ReadHeader {
                source: DecodeError::TooManyItems { max_items: 2, .. }
            }
        ));

        // with the default bound, the sequence is read
        // and the stream ends before the pixel data
        let err = from_reader(Cursor::new(data)).unwrap_err();
        assert!(matches!(
            err,
            ReadError::ReadHeader {
                source: DecodeError::ReadTag { .. }
            }
        ));
    }
}
