//! # Density-Independent Pixels (Dp)
//!
//! This module provides the [`Dp`] length unit and the [`Density`] scale that
//! converts it to physical pixels.
//!
//! ## Overview
//!
//! Style lengths such as the step thickness are expressed in dp so the ring
//! keeps the same physical size across screens. The conversion factor is not
//! stored globally: callers pass the [`Density`] of the surface they render
//! into.
//!
//! ## Usage
//!
//! ```
//! use tessera_step_indicator::{Density, Dp};
//!
//! let thickness = Dp(10.0);
//! assert_eq!(thickness.to_px(Density::new(2.0)), 20.0);
//!
//! let back = Dp::from_px(20.0, Density::new(2.0));
//! assert_eq!(back, thickness);
//! ```

/// Density-independent pixels (dp).
///
/// One dp equals one physical pixel at [`Density::STANDARD`].
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Dp(pub f64);

impl Dp {
    /// A constant representing zero dp.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Dp` instance with the specified value.
    pub const fn new(value: f64) -> Self {
        Dp(value)
    }

    /// Converts this dp value to physical pixels at the given density.
    pub fn to_px(self, density: Density) -> f32 {
        (self.0 * density.scale()) as f32
    }

    /// Creates a `Dp` value from physical pixels at the given density.
    ///
    /// A zero density is treated as [`Density::STANDARD`].
    pub fn from_px(px: f32, density: Density) -> Self {
        let scale = density.scale();
        if scale == 0.0 {
            Dp(px as f64)
        } else {
            Dp(px as f64 / scale)
        }
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Dp::new(value)
    }
}

/// How many physical pixels correspond to one dp.
///
/// For example:
/// - Scale factor of 1.0: 1 dp = 1 pixel (standard density)
/// - Scale factor of 2.0: 1 dp = 2 pixels (high density)
/// - Scale factor of 0.75: 1 dp = 0.75 pixels (low density)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Density(f64);

impl Density {
    /// One dp per physical pixel.
    pub const STANDARD: Self = Self(1.0);

    /// Creates a density from a scale factor.
    ///
    /// Non-finite or negative factors fall back to [`Density::STANDARD`].
    pub fn new(scale: f64) -> Self {
        if scale.is_finite() && scale >= 0.0 {
            Self(scale)
        } else {
            Self::STANDARD
        }
    }

    /// The raw scale factor.
    pub fn scale(self) -> f64 {
        self.0
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dp_to_px_scales_by_density() {
        assert_eq!(Dp(10.0).to_px(Density::STANDARD), 10.0);
        assert_eq!(Dp(10.0).to_px(Density::new(2.75)), 27.5);
        assert_eq!(Dp::ZERO.to_px(Density::new(3.0)), 0.0);
    }

    #[test]
    fn test_invalid_density_falls_back_to_standard() {
        assert_eq!(Density::new(f64::NAN), Density::STANDARD);
        assert_eq!(Density::new(-1.0), Density::STANDARD);
        assert_eq!(Dp::from_px(12.0, Density::new(0.0)), Dp(12.0));
    }
}
