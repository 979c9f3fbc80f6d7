//! Color component with mutually consistent hex and RGB representations.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;

use crate::error::{Error, Result};

/// Color of the entity, stored both as `#RRGGBB` string and as RGB triple.
///
/// Setting either representation immediately recomputes the other one.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    hex: String,
    rgb: (u8, u8, u8),
}

impl Color {
    /// Creates new color from RGB values.
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        let rgb = (red, green, blue);
        Self {
            hex: Self::rgb_to_hex(rgb),
            rgb,
        }
    }

    /// Creates new color from 6 hex digits with optional leading `#`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if string is not a valid hex color.
    ///
    pub fn from_hex(hex: &str) -> Result<Self> {
        let mut color = Self::default();
        color.set_hex(hex)?;
        Ok(color)
    }

    /// Creates new color from sequence of exactly 3 numeric values.
    ///
    /// See [`set_rgb`](Color::set_rgb) for coercion of the values.
    ///
    pub fn from_rgb<T>(rgb: &[T]) -> Result<Self>
    where
        T: Copy + Into<f64>,
    {
        let mut color = Self::default();
        color.set_rgb(rgb)?;
        Ok(color)
    }

    /// Normalized upper case `#RRGGBB` representation.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// RGB representation, each value in range `0..=255`.
    pub fn rgb(&self) -> (u8, u8, u8) {
        self.rgb
    }

    /// Sets color from 6 hex digits with optional leading `#`, case insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if string does not contain exactly 6 hex digits.
    /// Color stays untouched in this case.
    ///
    pub fn set_hex(&mut self, hex: &str) -> Result<()> {
        self.rgb = Self::hex_to_rgb(hex)?;
        self.hex = Self::rgb_to_hex(self.rgb);
        Ok(())
    }

    /// Sets color from sequence of exactly 3 numeric values.
    ///
    /// Each value is truncated toward zero and clamped into `0..=255`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if sequence length is not 3.
    ///
    pub fn set_rgb<T>(&mut self, rgb: &[T]) -> Result<()>
    where
        T: Copy + Into<f64>,
    {
        let (red, green, blue) = match *rgb {
            [red, green, blue] => (red, green, blue),
            _ => {
                return Err(Error::InvalidFormat(format!(
                    "RGB must contain exactly 3 values, got {}",
                    rgb.len(),
                )))
            }
        };
        let coerce = |value: T| value.into().trunc().clamp(0.0, 255.0) as u8;
        self.rgb = (coerce(red), coerce(green), coerce(blue));
        self.hex = Self::rgb_to_hex(self.rgb);
        Ok(())
    }

    /// Formats RGB triple as upper case `#RRGGBB` string.
    pub fn rgb_to_hex(rgb: (u8, u8, u8)) -> String {
        let (red, green, blue) = rgb;
        format!("#{:02X}{:02X}{:02X}", red, green, blue)
    }

    /// Parses 6 hex digits with optional leading `#` into RGB triple.
    pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8)> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.chars().count() != 6 {
            return Err(Error::InvalidFormat(format!(
                "hex string must be 6 characters, got {:?}",
                hex,
            )));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidFormat(format!(
                "hex string contains non-hex digits: {:?}",
                hex,
            )));
        }
        // All characters are ASCII here, so byte ranges are char boundaries.
        let pair = |start: usize| {
            u8::from_str_radix(&digits[start..start + 2], 16)
                .map_err(|err| Error::InvalidFormat(err.to_string()))
        };
        Ok((pair(0)?, pair(2)?, pair(4)?))
    }

    /// Converts this color into `palette` sRGB color.
    pub fn to_srgb(&self) -> Srgb<u8> {
        let (red, green, blue) = self.rgb;
        Srgb::new(red, green, blue)
    }

    /// Converts this color into normalized sRGB color suitable for clearing the frame.
    pub fn to_clear_color(&self) -> Srgb<f32> {
        self.to_srgb().into_format()
    }
}

impl Default for Color {
    /// Black color, `#000000`.
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.hex)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<Srgb<u8>> for Color {
    fn from(srgb: Srgb<u8>) -> Self {
        Self::new(srgb.red, srgb.green, srgb.blue)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from(rgb: (u8, u8, u8)) -> Self {
        Self::new(rgb.0, rgb.1, rgb.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        let color = Color::from_hex("#4d607d").unwrap();
        assert_eq!(color.hex(), "#4D607D");
        assert_eq!(color.rgb(), (0x4D, 0x60, 0x7D));

        let color: Color = "ff8800".parse().unwrap();
        assert_eq!(color.hex(), "#FF8800");
        assert_eq!(color.rgb(), (255, 136, 0));
        assert_eq!(color.to_string(), "#FF8800");
    }

    #[test]
    fn test_hex_round_trip() {
        for hex in ["#000000", "#FFFFFF", "#0a1B2c", "7f7F00", "#123456"] {
            let color = Color::from_hex(hex).unwrap();
            let normalized = format!("#{}", hex.trim_start_matches('#').to_uppercase());
            assert_eq!(color.hex(), normalized);
            assert_eq!(Color::rgb_to_hex(color.rgb()), normalized);
        }
    }

    #[test]
    fn test_invalid_hex() {
        for hex in [
            "", "#", "#12345", "1234567", "##123456", "#12345G", "#12345é",
        ] {
            assert!(
                matches!(Color::from_hex(hex), Err(Error::InvalidFormat(_))),
                "{:?} must be rejected",
                hex,
            );
        }

        let mut color = Color::new(1, 2, 3);
        assert!(color.set_hex("nope").is_err());
        assert_eq!(color, Color::new(1, 2, 3));
    }

    #[test]
    fn test_rgb() {
        for rgb in [(0, 0, 0), (255, 255, 255), (18, 52, 86), (1, 128, 254)] {
            let color = Color::from_rgb(&[rgb.0, rgb.1, rgb.2]).unwrap();
            assert_eq!(color.rgb(), rgb);
            assert_eq!(color.hex(), Color::rgb_to_hex(rgb));
            assert_eq!(Color::hex_to_rgb(color.hex()), Ok(rgb));
        }
        assert_eq!(Color::new(18, 52, 86).hex(), "#123456");
    }

    #[test]
    fn test_rgb_coercion() {
        let color = Color::from_rgb(&[12.9, -4.0, 300.5]).unwrap();
        assert_eq!(color.rgb(), (12, 0, 255));
        assert_eq!(color.hex(), "#0C00FF");
    }

    #[test]
    fn test_invalid_rgb() {
        assert!(matches!(
            Color::from_rgb::<u8>(&[1, 2]),
            Err(Error::InvalidFormat(_)),
        ));
        assert!(matches!(
            Color::from_rgb(&[1.0, 2.0, 3.0, 4.0]),
            Err(Error::InvalidFormat(_)),
        ));
    }

    #[test]
    fn test_setters_keep_consistency() {
        let mut color = Color::default();
        assert_eq!(color.hex(), "#000000");

        color.set_hex("#a259f7").unwrap();
        assert_eq!(color.rgb(), (0xA2, 0x59, 0xF7));

        color.set_rgb(&[16_u8, 32, 48]).unwrap();
        assert_eq!(color.hex(), "#102030");
    }

    #[test]
    fn test_palette() {
        let color = Color::new(255, 0, 51);
        let srgb = color.to_srgb();
        assert_eq!((srgb.red, srgb.green, srgb.blue), (255, 0, 51));
        assert_eq!(Color::from(srgb), color);

        let clear = Color::new(255, 0, 0).to_clear_color();
        assert!((clear.red - 1.0).abs() < 1e-6);
        assert!(clear.green.abs() < 1e-6);
    }
}
