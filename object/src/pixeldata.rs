//! Decoding of stored pixel samples
//! and their mapping to 8-bit display intensities.

use byteordered::{ByteOrdered, Endianness};
use itertools::{Itertools, MinMaxResult};

/// The native type of a stored pixel sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleFormat {
    U8,
    I8,
    U16,
    I16,
}

impl SampleFormat {
    /// The sample format for the given bits allocated per sample
    /// and pixel representation.
    /// Only 8 and 16 bits are supported.
    pub fn new(bits_allocated: u16, unsigned: bool) -> Option<Self> {
        match (bits_allocated, unsigned) {
            (8, true) => Some(SampleFormat::U8),
            (8, false) => Some(SampleFormat::I8),
            (16, true) => Some(SampleFormat::U16),
            (16, false) => Some(SampleFormat::I16),
            _ => None,
        }
    }

    /// The number of bytes of each sample.
    pub fn bytes(self) -> usize {
        match self {
            SampleFormat::U8 | SampleFormat::I8 => 1,
            SampleFormat::U16 | SampleFormat::I16 => 2,
        }
    }
}

/// Decode up to `count` samples from the start of `raw`.
pub(crate) fn decode_samples(
    raw: &[u8],
    format: SampleFormat,
    endianness: Endianness,
    count: usize,
) -> Vec<i32> {
    let count = count.min(raw.len() / format.bytes());
    let mut reader = ByteOrdered::runtime(raw, endianness);
    (0..count)
        .map(|_| match format {
            SampleFormat::U8 => reader.read_u8().map(i32::from),
            SampleFormat::I8 => reader.read_i8().map(i32::from),
            SampleFormat::U16 => reader.read_u16().map(i32::from),
            SampleFormat::I16 => reader.read_i16().map(i32::from),
        })
        .map_while(Result::ok)
        .collect()
}

/// Decode the sample at `index`, if the buffer holds it.
pub(crate) fn sample_at(
    raw: &[u8],
    format: SampleFormat,
    endianness: Endianness,
    index: usize,
) -> Option<i32> {
    let start = index.checked_mul(format.bytes())?;
    let bytes = raw.get(start..start + format.bytes())?;
    decode_samples(bytes, format, endianness, 1).first().copied()
}

/// The smallest and largest sample, or zeros without samples.
pub(crate) fn min_max(samples: &[i32]) -> (i32, i32) {
    match samples.iter().minmax() {
        MinMaxResult::NoElements => (0, 0),
        MinMaxResult::OneElement(v) => (*v, *v),
        MinMaxResult::MinMax(min, max) => (*min, *max),
    }
}

/// Map `npixels` samples to display intensities.
///
/// Unsigned 8-bit samples are copied, and signed 8-bit samples are
/// shifted into the unsigned range, regardless of the window.
/// Other samples are rescaled and windowed.
pub(crate) fn to_display(
    raw: &[u8],
    format: SampleFormat,
    endianness: Endianness,
    npixels: usize,
    (slope, intercept): (f64, f64),
    (level, width): (i32, i32),
) -> Vec<u8> {
    let mut pixels = vec![0u8; npixels];
    match format {
        SampleFormat::U8 => {
            for (pixel, sample) in pixels.iter_mut().zip(raw) {
                *pixel = *sample;
            }
        }
        SampleFormat::I8 => {
            for (pixel, sample) in pixels.iter_mut().zip(raw) {
                *pixel = (i16::from(*sample as i8) - i16::from(i8::MIN)) as u8;
            }
        }
        SampleFormat::U16 | SampleFormat::I16 => {
            let level = f64::from(level);
            let width = f64::from(width);
            let samples = decode_samples(raw, format, endianness, npixels);
            for (pixel, sample) in pixels.iter_mut().zip(samples) {
                let value = f64::from(sample) * slope + intercept;
                let intensity = ((value - level) / width + 0.5) * 255.0;
                *pixel = intensity.clamp(0.0, 255.0) as u8;
            }
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_formats() {
        assert_eq!(SampleFormat::new(8, true), Some(SampleFormat::U8));
        assert_eq!(SampleFormat::new(16, false), Some(SampleFormat::I16));
        assert_eq!(SampleFormat::new(12, true), None);
        assert_eq!(SampleFormat::new(32, false), None);
        assert_eq!(SampleFormat::I16.bytes(), 2);
    }

    #[test]
    fn decode_in_either_byte_order() {
        let raw = [0x01, 0x02, 0xFF, 0xFF, 0x03];
        assert_eq!(
            decode_samples(&raw, SampleFormat::U16, Endianness::Little, 10),
            vec![0x0201, 0xFFFF]
        );
        assert_eq!(
            decode_samples(&raw, SampleFormat::I16, Endianness::Big, 10),
            vec![0x0102, -1]
        );
        assert_eq!(
            decode_samples(&raw, SampleFormat::I8, Endianness::Big, 3),
            vec![1, 2, -1]
        );
        assert_eq!(sample_at(&raw, SampleFormat::U16, Endianness::Little, 1), Some(0xFFFF));
        assert_eq!(sample_at(&raw, SampleFormat::U16, Endianness::Little, 2), None);
    }

    #[test]
    fn extrema() {
        assert_eq!(min_max(&[]), (0, 0));
        assert_eq!(min_max(&[7]), (7, 7));
        assert_eq!(min_max(&[3, -2, 9, 0]), (-2, 9));
    }

    #[test]
    fn eight_bit_samples_skip_windowing() {
        let raw = [0, 10, 200, 255];
        let pixels = to_display(&raw, SampleFormat::U8, Endianness::Little, 4, (2.0, 5.0), (1, 1));
        assert_eq!(pixels, raw);

        let raw = [0x80, 0xFF, 0x00, 0x7F]; // -128, -1, 0, 127
        let pixels = to_display(&raw, SampleFormat::I8, Endianness::Little, 4, (1.0, 0.0), (0, 0));
        assert_eq!(pixels, vec![0, 127, 128, 255]);
    }

    #[test]
    fn sixteen_bit_samples_are_windowed() {
        let raw: Vec<u8> = [0i16, 64, -128, 1000]
            .iter()
            .flat_map(|v| v.to_le_bytes())
            .collect();
        let pixels = to_display(&raw, SampleFormat::I16, Endianness::Little, 4, (1.0, 0.0), (0, 256));
        // (v / 256 + 0.5) * 255
        assert_eq!(pixels, vec![127, 191, 0, 255]);

        // rescale before windowing
        let pixels = to_display(&raw, SampleFormat::I16, Endianness::Little, 1, (1.0, 64.0), (0, 256));
        assert_eq!(pixels, vec![191]);
    }

    #[test]
    fn short_buffer_leaves_zeros() {
        let pixels = to_display(&[9], SampleFormat::U8, Endianness::Little, 3, (1.0, 0.0), (0, 0));
        assert_eq!(pixels, vec![9, 0, 0]);
    }
}
