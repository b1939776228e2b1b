use bytemuck::{Pod, Zeroable};
use thiserror::Error;

/// A color in the linear sRGB color space with an alpha component.
///
/// Values are stored as `f32`s, typically in the range `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Errors produced when parsing a color string such as `#67D39D`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The string does not start with `#`.
    #[error("color `{0}` must start with '#'")]
    MissingPrefix(String),
    /// The hex part is neither 6 (`RRGGBB`) nor 8 (`AARRGGBB`) digits long.
    #[error("color `{value}` has {len} hex digits, expected 6 or 8")]
    InvalidLength {
        /// Offending input.
        value: String,
        /// Number of digits after the prefix.
        len: usize,
    },
    /// The hex part contains a non-hex character.
    #[error("color `{0}` contains a non-hex digit")]
    InvalidDigit(String),
}

impl Color {
    // --- Common Colors ---
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a new `Color` from four `f32` values (red, green, blue, alpha).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new `Color` from four `u8` values (red, green, blue, alpha).
    #[inline]
    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Creates a new opaque `Color` from three `u8` values (red, green, blue).
    #[inline]
    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Creates a color from a packed `0xAARRGGBB` value.
    ///
    /// ```
    /// use tessera_step_indicator::Color;
    ///
    /// let success = Color::from_argb_u32(0xFF67D39D);
    /// assert_eq!(success.a, 1.0);
    /// ```
    #[inline]
    pub const fn from_argb_u32(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::from_rgba_u8(r, g, b, a)
    }

    /// Packs the color into a `0xAARRGGBB` value, clamping each channel.
    pub fn to_argb_u32(self) -> u32 {
        u32::from_be_bytes([
            channel_to_u8(self.a),
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
        ])
    }

    /// Parses `#RRGGBB` (opaque) or `#AARRGGBB`.
    pub fn from_hex(value: &str) -> Result<Self, ColorParseError> {
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingPrefix(value.to_string()))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(value.to_string()));
        }

        let opaque_mask = match digits.len() {
            6 => 0xFF00_0000,
            8 => 0,
            len => {
                return Err(ColorParseError::InvalidLength {
                    value: value.to_string(),
                    len,
                });
            }
        };

        let packed = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::InvalidDigit(value.to_string()))?;
        Ok(Self::from_argb_u32(opaque_mask | packed))
    }

    /// Formats the color as `#AARRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:08X}", self.to_argb_u32())
    }

    /// Returns the same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Converts the color to an array of `[f32; 4]`.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

fn channel_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// The default color is fully transparent.
impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl From<[f32; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for [f32; 4] {
    #[inline]
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

impl From<u32> for Color {
    #[inline]
    fn from(argb: u32) -> Self {
        Self::from_argb_u32(argb)
    }
}

impl std::str::FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
