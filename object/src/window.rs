//! Display windowing parameters.

/// The windowing parameters of an image:
/// the range of values which the stored bits can represent,
/// and the level and width of the window mapped to display intensities.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    bits: u16,
    signed: bool,
    min_value: i32,
    max_value: i32,
    range: i32,
    level: i32,
    width: i32,
}

impl Window {
    /// Create a window over the native value range of
    /// `bits` stored bits, signed or unsigned.
    ///
    /// Only 8, 12 and 16 bits have a native range,
    /// other bit depths leave the range empty.
    pub fn new(bits: u16, signed: bool) -> Self {
        let mut window = Window::default();
        window.set(bits, signed);
        window
    }

    /// Reset the value range to the native range of
    /// `bits` stored bits, signed or unsigned.
    /// The level and width are kept.
    pub fn set(&mut self, bits: u16, signed: bool) {
        self.bits = bits;
        self.signed = signed;
        match native_range(bits, signed) {
            Some((min, max)) => {
                self.min_value = min;
                self.max_value = max;
                self.range = max - min + 1;
            }
            None => {
                self.min_value = 0;
                self.max_value = 0;
                self.range = 0;
            }
        }
    }

    /// Apply the modality rescale to the value range,
    /// truncating the result to integers.
    /// The range itself is not changed.
    pub fn rescale(&mut self, slope: f64, intercept: f64) {
        let min = (f64::from(self.min_value) * slope + intercept) as i32;
        let max = (f64::from(self.max_value) * slope + intercept) as i32;
        self.min_value = min.min(max);
        self.max_value = min.max(max);
    }

    pub fn set_level(&mut self, level: i32) {
        self.level = level;
    }

    pub fn set_width(&mut self, width: i32) {
        self.width = width;
    }

    pub fn bits(&self) -> u16 {
        self.bits
    }

    pub fn is_signed(&self) -> bool {
        self.signed
    }

    pub fn min_value(&self) -> i32 {
        self.min_value
    }

    pub fn max_value(&self) -> i32 {
        self.max_value
    }

    /// The number of values in the native range.
    pub fn range(&self) -> i32 {
        self.range
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    /// Clamp a window level into the value range.
    pub fn clamp_level(&self, level: i32) -> i32 {
        level.clamp(self.min_value, self.max_value)
    }

    /// Clamp a window width into `[0, range]`.
    pub fn clamp_width(&self, width: i32) -> i32 {
        width.clamp(0, self.range.max(0))
    }
}

fn native_range(bits: u16, signed: bool) -> Option<(i32, i32)> {
    match (bits, signed) {
        (8, false) => Some((0, 0xFF)),
        (8, true) => Some((-0x80, 0x7F)),
        (12, false) => Some((0, 0xFFF)),
        (12, true) => Some((-0x800, 0x7FF)),
        (16, false) => Some((0, 0xFFFF)),
        (16, true) => Some((-0x8000, 0x7FFF)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(8, false, 0, 255, 256)]
    #[case(8, true, -128, 127, 256)]
    #[case(12, false, 0, 4095, 4096)]
    #[case(12, true, -2048, 2047, 4096)]
    #[case(16, false, 0, 65535, 65536)]
    #[case(16, true, -32768, 32767, 65536)]
    #[case(10, false, 0, 0, 0)]
    #[case(32, true, 0, 0, 0)]
    fn native_ranges(
        #[case] bits: u16,
        #[case] signed: bool,
        #[case] min: i32,
        #[case] max: i32,
        #[case] range: i32,
    ) {
        let window = Window::new(bits, signed);
        assert_eq!(window.bits(), bits);
        assert_eq!(window.is_signed(), signed);
        assert_eq!(window.min_value(), min);
        assert_eq!(window.max_value(), max);
        assert_eq!(window.range(), range);
        assert_eq!((window.level(), window.width()), (0, 0));
    }

    #[test]
    fn rescale_truncates() {
        let mut window = Window::new(12, false);
        window.rescale(1.0, -1024.0);
        assert_eq!(window.min_value(), -1024);
        assert_eq!(window.max_value(), 3071);
        assert_eq!(window.range(), 4096);

        let mut window = Window::new(8, false);
        window.rescale(0.5, 0.3);
        assert_eq!(window.min_value(), 0);
        assert_eq!(window.max_value(), 127);
    }

    #[test]
    fn rescale_with_negative_slope_keeps_order() {
        let mut window = Window::new(8, false);
        window.rescale(-1.0, 0.0);
        assert_eq!(window.min_value(), -255);
        assert_eq!(window.max_value(), 0);
        assert!(window.min_value() <= window.max_value());
    }

    #[test]
    fn clamping() {
        let mut window = Window::new(8, true);
        window.set_level(40);
        window.set_width(400);
        assert_eq!(window.level(), 40);
        assert_eq!(window.width(), 400);

        assert_eq!(window.clamp_level(200), 127);
        assert_eq!(window.clamp_level(-200), -128);
        assert_eq!(window.clamp_level(5), 5);
        assert_eq!(window.clamp_width(400), 256);
        assert_eq!(window.clamp_width(-3), 0);

        assert_eq!(Window::new(7, false).clamp_width(10), 0);
    }
}
