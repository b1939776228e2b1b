//! Ring geometry derived from the render bounds.
use lyon_geom::{Point, point};

/// Size of the render surface in physical pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PxSize {
    /// The width in physical pixels
    pub width: f32,
    /// The height in physical pixels
    pub height: f32,
}

impl PxSize {
    /// Creates a new size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle bounding the circle an arc is drawn on.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ArcOval {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl ArcOval {
    /// Center of the oval.
    pub fn center(&self) -> Point<f32> {
        point(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Horizontal and vertical radii.
    pub fn radii(&self) -> (f32, f32) {
        (
            (self.right - self.left) / 2.0,
            (self.bottom - self.top) / 2.0,
        )
    }
}

/// Center and radius of the ring's stroke centerline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
}

impl RingGeometry {
    /// Fits the ring inside `size`, leaving room for half the stroke and
    /// `inset_px` on each side of the shorter dimension.
    pub fn from_bounds(size: PxSize, stroke_width_px: f32, inset_px: f32) -> Self {
        let diameter = size.width.min(size.height);
        let radius = ((diameter - stroke_width_px) / 2.0 - inset_px).max(0.0);
        Self {
            center_x: size.width / 2.0,
            center_y: size.height / 2.0,
            radius,
        }
    }

    /// The square around the ring that arcs are drawn in.
    pub fn oval(&self) -> ArcOval {
        ArcOval {
            left: self.center_x - self.radius,
            top: self.center_y - self.radius,
            right: self.center_x + self.radius,
            bottom: self.center_y + self.radius,
        }
    }
}
