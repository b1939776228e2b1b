//! Circular step progress indicator.
//!
//! The ring is split into one arc per step and each arc is colored by the
//! step's state: successful steps first, then failed ones, then pending
//! ones, clockwise from the top.
//!
//! # Usage
//!
//! ```
//! use tessera_step_indicator::{
//!     Density, MeshCanvas, PxSize, StepIndicator, StepIndicatorStyle, StepStrokeCap,
//! };
//!
//! let style = StepIndicatorStyle::default().stroke_cap(StepStrokeCap::Round);
//! let mut indicator = StepIndicator::new(style, Density::new(2.0));
//! indicator.set_data(10, 5, 3);
//!
//! if indicator.take_redraw_request() {
//!     let mut canvas = MeshCanvas::new();
//!     indicator.render(&mut canvas, PxSize::new(320.0, 320.0));
//!     let mesh = canvas.finish().unwrap();
//!     assert_eq!(mesh.arc_count, 10);
//! }
//! ```
//!
//! Hosts with their own renderer can record [`StepArcCommand`]s with a
//! [`CommandRecorder`] or implement [`Canvas`] directly.

pub mod canvas;
pub mod color;
pub mod dp;
pub mod geometry;
pub mod indicator;
pub mod layout;
pub mod mesh;
pub mod state;
pub mod style;

pub use crate::{
    canvas::{ArcCap, ArcPaint, Canvas, CommandRecorder, StepArcCommand},
    color::{Color, ColorParseError},
    dp::{Density, Dp},
    geometry::{ArcOval, PxSize, RingGeometry},
    indicator::StepIndicator,
    layout::{StepArc, StepLayout},
    mesh::{MeshCanvas, MeshError, StepMesh, StepVertex},
    state::{StepCounts, StepDataError, StepState},
    style::{StepGap, StepIndicatorDefaults, StepIndicatorStyle, StepPaints, StepStrokeCap},
};
