#[allow(unused_imports)]
use micromath::F32Ext;

use core::fmt;
use rgb::RGB8;

/// One color of the resistor color code, indexed by the digit it encodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ColorBand {
    Black = 0,
    Brown = 1,
    Red = 2,
    Orange = 3,
    Yellow = 4,
    Green = 5,
    Blue = 6,
    Violet = 7,
    Grey = 8,
    White = 9,
}

impl ColorBand {
    /// The palette, in digit order.
    pub const ALL: [ColorBand; 10] = [
        ColorBand::Black,
        ColorBand::Brown,
        ColorBand::Red,
        ColorBand::Orange,
        ColorBand::Yellow,
        ColorBand::Green,
        ColorBand::Blue,
        ColorBand::Violet,
        ColorBand::Grey,
        ColorBand::White,
    ];

    /// Returns the color for `digit`, or `None` if it is above 9.
    pub const fn from_digit(digit: u8) -> Option<Self> {
        if digit < 10 {
            Some(Self::ALL[digit as usize])
        } else {
            None
        }
    }

    pub const fn digit(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            ColorBand::Black => "Black",
            ColorBand::Brown => "Brown",
            ColorBand::Red => "Red",
            ColorBand::Orange => "Orange",
            ColorBand::Yellow => "Yellow",
            ColorBand::Green => "Green",
            ColorBand::Blue => "Blue",
            ColorBand::Violet => "Violet",
            ColorBand::Grey => "Grey",
            ColorBand::White => "White",
        }
    }

    /// Full intensity RGB value of the color.
    pub const fn rgb(self) -> RGB8 {
        let (r, g, b) = match self {
            ColorBand::Black => (0, 0, 0),
            ColorBand::Brown => (150, 75, 0),
            ColorBand::Red => (255, 0, 0),
            ColorBand::Orange => (255, 165, 0),
            ColorBand::Yellow => (255, 255, 0),
            ColorBand::Green => (0, 255, 0),
            ColorBand::Blue => (0, 0, 255),
            ColorBand::Violet => (143, 0, 255),
            ColorBand::Grey => (128, 128, 128),
            ColorBand::White => (255, 255, 255),
        };
        RGB8 { r, g, b }
    }

    /// RGB value dimmed to `brightness` (0 = off, 255 = full intensity),
    /// for driving LEDs directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use ohmmeter::ColorBand;
    /// use rgb::RGB8;
    ///
    /// assert_eq!(ColorBand::Red.scaled(10), RGB8 { r: 10, g: 0, b: 0 });
    /// ```
    pub fn scaled(self, brightness: u8) -> RGB8 {
        let scale = |channel: u8| (u16::from(channel) * u16::from(brightness) / 255) as u8;
        let color = self.rgb();

        RGB8 {
            r: scale(color.r),
            g: scale(color.g),
            b: scale(color.b),
        }
    }
}

impl fmt::Display for ColorBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The three bands of a resistor value: two significant digits and the
/// power of ten they are multiplied by.
///
/// Each field is an index into [`ColorBand::ALL`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BandDecoding {
    pub first: u8,
    pub second: u8,
    pub multiplier: u8,
}

impl BandDecoding {
    pub const fn new(first: u8, second: u8, multiplier: u8) -> Self {
        Self {
            first,
            second,
            multiplier,
        }
    }

    /// The three bands as colors, in reading order.
    pub fn colors(&self) -> [ColorBand; 3] {
        [
            band(self.first),
            band(self.second),
            band(self.multiplier),
        ]
    }

    /// The value the bands encode, `(first * 10 + second) * 10^multiplier`.
    pub fn ohms(&self) -> f32 {
        let significant = f32::from(self.first) * 10.0 + f32::from(self.second);
        significant * 10u32.pow(u32::from(self.multiplier.min(9))) as f32
    }
}

fn band(index: u8) -> ColorBand {
    ColorBand::ALL[usize::from(index.min(9))]
}

/// Decodes a commercial resistor value into its color bands.
///
/// The value is rounded to a whole number of ohms and its decimal digits
/// are taken from the least significant end. The last two digits taken
/// become the first and second band, every zero digit taken counts towards
/// the multiplier. When the second band is itself a zero it was counted
/// twice, so the multiplier is reduced by one.
///
/// Zero, negative and non-finite values decode to three black bands.
///
/// # Examples
///
/// ```
/// use ohmmeter::{decode, BandDecoding, ColorBand};
///
/// // 4.7 kΩ: yellow, violet, red
/// let bands = decode(4700.0);
/// assert_eq!(bands, BandDecoding::new(4, 7, 2));
/// assert_eq!(
///     bands.colors(),
///     [ColorBand::Yellow, ColorBand::Violet, ColorBand::Red]
/// );
/// ```
pub fn decode(commercial_value: f32) -> BandDecoding {
    if !commercial_value.is_finite() || commercial_value <= 0.0 {
        return BandDecoding::default();
    }

    let mut remaining = commercial_value.round() as u32;
    let mut current = 0;
    let mut previous = 0;
    let mut multiplier = 0;

    while remaining > 0 {
        previous = current;
        current = (remaining % 10) as u8;
        remaining /= 10;

        if current == 0 {
            multiplier += 1;
        }
    }

    if previous == 0 && multiplier > 0 {
        multiplier -= 1;
    }

    BandDecoding {
        first: current,
        second: previous,
        multiplier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::STANDARD_VALUES;

    #[test]
    fn four_point_seven_kilo() {
        assert_eq!(decode(4700.0), BandDecoding::new(4, 7, 2));
    }

    #[test]
    fn hundred_kilo() {
        let bands = decode(100_000.0);
        assert_eq!(bands, BandDecoding::new(1, 0, 4));
        assert_eq!(
            bands.colors(),
            [ColorBand::Brown, ColorBand::Black, ColorBand::Yellow]
        );
    }

    #[test]
    fn second_band_zero() {
        assert_eq!(decode(1000.0), BandDecoding::new(1, 0, 2));
        assert_eq!(decode(2000.0), BandDecoding::new(2, 0, 2));
        assert_eq!(decode(10_000.0), BandDecoding::new(1, 0, 3));
        assert_eq!(decode(20_000.0), BandDecoding::new(2, 0, 3));
    }

    #[test]
    fn smallest_values() {
        assert_eq!(decode(510.0), BandDecoding::new(5, 1, 1));
        assert_eq!(decode(910.0), BandDecoding::new(9, 1, 1));
    }

    #[test]
    fn rounds_before_decoding() {
        assert_eq!(decode(4699.6), BandDecoding::new(4, 7, 2));
        assert_eq!(decode(4700.4), BandDecoding::new(4, 7, 2));
    }

    #[test]
    fn degenerate_input() {
        assert_eq!(decode(0.0), BandDecoding::new(0, 0, 0));
        assert_eq!(decode(-470.0), BandDecoding::new(0, 0, 0));
        assert_eq!(decode(f32::NAN), BandDecoding::new(0, 0, 0));
        assert_eq!(decode(f32::INFINITY), BandDecoding::new(0, 0, 0));
    }

    #[test]
    fn single_digit_value() {
        assert_eq!(decode(5.0), BandDecoding::new(5, 0, 0));
    }

    #[test]
    fn every_standard_value_round_trips() {
        for value in STANDARD_VALUES {
            let bands = decode(value);
            assert!(bands.first <= 9 && bands.second <= 9 && bands.multiplier <= 9);
            assert!(bands.first > 0, "{} has a leading zero band", value);
            assert_eq!(bands.ohms(), value, "{} decoded as {:?}", value, bands);
        }
    }

    #[test]
    fn palette_is_in_digit_order() {
        for (digit, color) in ColorBand::ALL.iter().enumerate() {
            assert_eq!(usize::from(color.digit()), digit);
            assert_eq!(ColorBand::from_digit(digit as u8), Some(*color));
        }
        assert_eq!(ColorBand::from_digit(10), None);
    }

    #[test]
    fn color_names() {
        assert_eq!(ColorBand::Violet.name(), "Violet");
        assert_eq!(ColorBand::Grey.name(), "Grey");
        assert_eq!(format!("{}", ColorBand::Orange), "Orange");
    }

    #[test]
    fn scaled_rgb() {
        assert_eq!(ColorBand::White.scaled(255), ColorBand::White.rgb());
        assert_eq!(ColorBand::White.scaled(0), RGB8 { r: 0, g: 0, b: 0 });
        assert_eq!(ColorBand::Blue.scaled(20), RGB8 { r: 0, g: 0, b: 20 });
        assert_eq!(ColorBand::Grey.scaled(51), RGB8 { r: 25, g: 25, b: 25 });
    }
}
