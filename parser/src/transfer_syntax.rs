//! The transfer syntaxes recognized after the file meta group.

use dicom_lite_encoding::Endianness;
use std::fmt;

/// A transfer syntax, identified by the UID
/// in the (0002,0010) Transfer Syntax UID element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransferSyntax {
    /// 1.2.840.10008.1.2
    ImplicitVrLittleEndian,
    /// 1.2.840.10008.1.2.1
    ExplicitVrLittleEndian,
    /// 1.2.840.10008.1.2.2 (retired)
    ExplicitVrBigEndian,
    /// 1.2.840.10008.1.2.1.99
    DeflatedExplicitVrLittleEndian,
    /// 1.2.840.10008.1.2.4.*
    Jpeg(String),
    /// 1.2.840.10008.1.2.5
    RleLossless,
    /// Any other UID
    Unknown(String),
}

impl TransferSyntax {
    /// Identify a transfer syntax by its UID.
    /// Trailing padding is ignored.
    pub fn from_uid(uid: &str) -> Self {
        let uid = uid.trim_end_matches(|c: char| c == '\0' || c == ' ');
        match uid {
            "1.2.840.10008.1.2" => TransferSyntax::ImplicitVrLittleEndian,
            "1.2.840.10008.1.2.1" => TransferSyntax::ExplicitVrLittleEndian,
            "1.2.840.10008.1.2.2" => TransferSyntax::ExplicitVrBigEndian,
            "1.2.840.10008.1.2.1.99" => TransferSyntax::DeflatedExplicitVrLittleEndian,
            "1.2.840.10008.1.2.5" => TransferSyntax::RleLossless,
            uid if uid.starts_with("1.2.840.10008.1.2.4.") => {
                TransferSyntax::Jpeg(uid.to_string())
            }
            uid => TransferSyntax::Unknown(uid.to_string()),
        }
    }

    /// The byte order of the data set, if known.
    pub fn endianness(&self) -> Option<Endianness> {
        match self {
            TransferSyntax::ExplicitVrBigEndian => Some(Endianness::Big),
            TransferSyntax::Unknown(_) => None,
            _ => Some(Endianness::Little),
        }
    }

    /// Whether the data set can be read by this library.
    /// Deflated and compressed data sets cannot.
    pub fn is_supported(&self) -> bool {
        !matches!(
            self,
            TransferSyntax::DeflatedExplicitVrLittleEndian
                | TransferSyntax::Jpeg(_)
                | TransferSyntax::RleLossless
        )
    }

    /// The UID of the transfer syntax.
    pub fn uid(&self) -> &str {
        match self {
            TransferSyntax::ImplicitVrLittleEndian => "1.2.840.10008.1.2",
            TransferSyntax::ExplicitVrLittleEndian => "1.2.840.10008.1.2.1",
            TransferSyntax::ExplicitVrBigEndian => "1.2.840.10008.1.2.2",
            TransferSyntax::DeflatedExplicitVrLittleEndian => "1.2.840.10008.1.2.1.99",
            TransferSyntax::RleLossless => "1.2.840.10008.1.2.5",
            TransferSyntax::Jpeg(uid) | TransferSyntax::Unknown(uid) => uid,
        }
    }
}

impl fmt::Display for TransferSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransferSyntax::ImplicitVrLittleEndian => "Implicit VR Little Endian",
            TransferSyntax::ExplicitVrLittleEndian => "Explicit VR Little Endian",
            TransferSyntax::ExplicitVrBigEndian => "Explicit VR Big Endian",
            TransferSyntax::DeflatedExplicitVrLittleEndian => "Deflated Explicit VR Little Endian",
            TransferSyntax::Jpeg(_) => "JPEG",
            TransferSyntax::RleLossless => "RLE Lossless",
            TransferSyntax::Unknown(_) => "Unknown",
        };
        write!(f, "{} ({})", name, self.uid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_uids() {
        assert_eq!(
            TransferSyntax::from_uid("1.2.840.10008.1.2\0"),
            TransferSyntax::ImplicitVrLittleEndian
        );
        let ts = TransferSyntax::from_uid("1.2.840.10008.1.2.2");
        assert_eq!(ts.endianness(), Some(Endianness::Big));
        assert!(ts.is_supported());

        let ts = TransferSyntax::from_uid("1.2.840.10008.1.2.4.50");
        assert_eq!(ts, TransferSyntax::Jpeg("1.2.840.10008.1.2.4.50".to_string()));
        assert!(!ts.is_supported());
        assert!(!TransferSyntax::from_uid("1.2.840.10008.1.2.5").is_supported());

        let ts = TransferSyntax::from_uid("1.2.3.4");
        assert_eq!(ts.endianness(), None);
        assert!(ts.is_supported());
        assert_eq!(ts.to_string(), "Unknown (1.2.3.4)");
    }
}
