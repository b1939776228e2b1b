//! Style configuration for the step indicator.
//!
//! ## Usage
//!
//! Start from [`StepIndicatorStyle::default`] and override the fields you
//! need with the generated setters.
use derive_setters::Setters;

use crate::{
    Color, Density, Dp,
    canvas::{ArcCap, ArcPaint},
    state::StepState,
};

/// Stroke cap for step arcs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum StepStrokeCap {
    /// Flat stroke ends flush with the arc.
    #[default]
    Butt,
    /// Rounded stroke ends.
    Round,
    /// Square ends extending half the stroke width past the arc.
    Square,
}

impl From<StepStrokeCap> for ArcCap {
    fn from(cap: StepStrokeCap) -> Self {
        match cap {
            StepStrokeCap::Butt => ArcCap::Butt,
            StepStrokeCap::Round => ArcCap::Round,
            StepStrokeCap::Square => ArcCap::Square,
        }
    }
}

/// Spacing inserted between consecutive step arcs.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum StepGap {
    /// Gap expressed directly as an angle.
    Degrees(f32),
    /// Gap expressed as an arc length along the ring.
    Dp(Dp),
}

impl StepGap {
    /// Resolves the gap to an angle for a ring of the given radius.
    ///
    /// A length gap on a ring with no radius resolves to zero degrees.
    pub fn sweep_degrees(self, radius_px: f32, density: Density) -> f32 {
        match self {
            StepGap::Degrees(degrees) => degrees,
            StepGap::Dp(length) => {
                let circumference = std::f32::consts::TAU * radius_px;
                if circumference <= 0.0 {
                    0.0
                } else {
                    length.to_px(density) / circumference * 360.0
                }
            }
        }
    }
}

impl Default for StepGap {
    fn default() -> Self {
        StepGap::Degrees(StepIndicatorDefaults::GAP_DEGREES)
    }
}

/// Default values for the step indicator.
pub struct StepIndicatorDefaults;

impl StepIndicatorDefaults {
    /// Steps drawn before the host provides data.
    pub const TOTAL_STEPS: u32 = 12;
    /// Successful steps drawn before the host provides data.
    pub const SUCCESSFUL_STEPS: u32 = 2;
    /// Failed steps drawn before the host provides data.
    pub const FAILED_STEPS: u32 = 2;
    /// Color of successful steps (`#67D39D`).
    pub const SUCCESS_COLOR: Color = Color::from_argb_u32(0xFF67D39D);
    /// Color of failed steps (`#EB6A6E`).
    pub const FAILED_COLOR: Color = Color::from_argb_u32(0xFFEB6A6E);
    /// Color of pending steps (`#3E3953`).
    pub const PENDING_COLOR: Color = Color::from_argb_u32(0xFF3E3953);
    /// Stroke thickness of every arc.
    pub const STEP_THICKNESS: Dp = Dp(10.0);
    /// Angle left empty between consecutive arcs.
    pub const GAP_DEGREES: f32 = 0.8;
    /// Distance in physical pixels between the stroke and the bounds edge.
    pub const RING_INSET_PX: f32 = 10.0;
    /// Angle of the first arc's start: the top of the ring.
    pub const START_ANGLE_DEGREES: f32 = 270.0;
}

/// Immutable style of a [`StepIndicator`](crate::StepIndicator).
///
/// Values are not validated;
/// a negative thickness is handed to the canvas as is.
#[derive(Clone, Debug, PartialEq, Setters)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct StepIndicatorStyle {
    /// Color of successful steps.
    #[setters(into)]
    pub success_color: Color,
    /// Color of failed steps.
    #[setters(into)]
    pub failed_color: Color,
    /// Color of pending steps.
    #[setters(into)]
    pub pending_color: Color,
    /// Stroke thickness of every arc.
    #[setters(into)]
    pub step_thickness: Dp,
    /// Spacing between consecutive arcs.
    pub gap: StepGap,
    /// End shape of each arc.
    pub stroke_cap: StepStrokeCap,
    /// Distance in physical pixels between the stroke and the bounds edge.
    pub ring_inset_px: f32,
}

impl Default for StepIndicatorStyle {
    fn default() -> Self {
        Self {
            success_color: StepIndicatorDefaults::SUCCESS_COLOR,
            failed_color: StepIndicatorDefaults::FAILED_COLOR,
            pending_color: StepIndicatorDefaults::PENDING_COLOR,
            step_thickness: StepIndicatorDefaults::STEP_THICKNESS,
            gap: StepGap::default(),
            stroke_cap: StepStrokeCap::default(),
            ring_inset_px: StepIndicatorDefaults::RING_INSET_PX,
        }
    }
}

/// The three paints derived from a style at a given density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepPaints {
    /// Paint for [`StepState::Success`].
    pub success: ArcPaint,
    /// Paint for [`StepState::Failed`].
    pub failed: ArcPaint,
    /// Paint for [`StepState::Pending`].
    pub pending: ArcPaint,
}

impl StepPaints {
    /// Derives paints from a style.
    pub fn from_style(style: &StepIndicatorStyle, density: Density) -> Self {
        let stroke_width_px = style.step_thickness.to_px(density);
        let cap = ArcCap::from(style.stroke_cap);
        let paint = |color| ArcPaint {
            color,
            stroke_width_px,
            cap,
        };

        Self {
            success: paint(style.success_color),
            failed: paint(style.failed_color),
            pending: paint(style.pending_color),
        }
    }

    /// Selects the paint for a step state.
    pub fn for_state(&self, state: StepState) -> &ArcPaint {
        match state {
            StepState::Success => &self.success,
            StepState::Failed => &self.failed,
            StepState::Pending => &self.pending,
        }
    }
}
