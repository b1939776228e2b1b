//! Triangle-mesh canvas built on lyon stroke tessellation.
//!
//! [`MeshCanvas`] turns every arc into stroked geometry ready to be uploaded
//! to a vertex buffer. Vertex positions stay in the physical-pixel space of
//! the render bounds.
use lyon_geom::{Angle, Arc, vector};
use lyon_path::Path;
use lyon_tessellation::{
    BuffersBuilder, LineCap as LyonLineCap, StrokeOptions, StrokeTessellator, StrokeVertex,
    VertexBuffers,
};
use thiserror::Error;
use tracing::trace;

use crate::{
    canvas::{ArcCap, ArcPaint, Canvas},
    geometry::ArcOval,
};

/// Errors that can occur while tessellating step arcs.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Tessellation of the arc geometry failed.
    #[error("tessellation error: {0}")]
    Tessellation(#[from] lyon_tessellation::TessellationError),
}

/// Vertex emitted by [`MeshCanvas`].
#[repr(C)]
#[derive(Copy, Clone, PartialEq, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StepVertex {
    /// Position in physical pixels.
    pub position: [f32; 2],
    /// Linear RGBA color.
    pub color: [f32; 4],
}

/// Tessellated output of a render pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepMesh {
    /// Triangle vertices.
    pub vertices: Vec<StepVertex>,
    /// Triangle-list indices into `vertices`.
    pub indices: Vec<u32>,
    /// Number of arcs that produced geometry.
    pub arc_count: usize,
}

impl StepMesh {
    /// Whether the mesh holds no triangles.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Canvas that tessellates arc strokes into a [`StepMesh`].
///
/// Arcs with a non-positive sweep, stroke width or radius produce no
/// geometry. The first tessellation failure is kept and reported by
/// [`MeshCanvas::finish`].
pub struct MeshCanvas {
    tessellator: StrokeTessellator,
    tolerance: f32,
    buffers: VertexBuffers<StepVertex, u32>,
    arc_count: usize,
    error: Option<MeshError>,
}

impl MeshCanvas {
    /// Creates a canvas with lyon's default flattening tolerance.
    pub fn new() -> Self {
        Self::with_tolerance(StrokeOptions::DEFAULT_TOLERANCE)
    }

    /// Creates a canvas with a custom flattening tolerance in pixels.
    pub fn with_tolerance(tolerance: f32) -> Self {
        Self {
            tessellator: StrokeTessellator::new(),
            tolerance,
            buffers: VertexBuffers::new(),
            arc_count: 0,
            error: None,
        }
    }

    /// Returns the accumulated mesh, or the first tessellation error.
    pub fn finish(self) -> Result<StepMesh, MeshError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        Ok(StepMesh {
            vertices: self.buffers.vertices,
            indices: self.buffers.indices,
            arc_count: self.arc_count,
        })
    }

    fn tessellate_arc(
        &mut self,
        oval: ArcOval,
        start_angle_degrees: f32,
        sweep_angle_degrees: f32,
        paint: &ArcPaint,
    ) -> Result<bool, MeshError> {
        let (radius_x, radius_y) = oval.radii();
        let drawable = [sweep_angle_degrees, paint.stroke_width_px, radius_x, radius_y]
            .iter()
            .all(|value| value.is_finite() && *value > 0.0);
        if !drawable {
            return Ok(false);
        }

        let path = arc_path(oval, start_angle_degrees, sweep_angle_degrees);
        let options = StrokeOptions::default()
            .with_line_width(paint.stroke_width_px)
            .with_line_cap(map_line_cap(paint.cap))
            .with_tolerance(self.tolerance);
        let color = paint.color.to_array();

        self.tessellator.tessellate_path(
            &path,
            &options,
            &mut BuffersBuilder::new(&mut self.buffers, |vertex: StrokeVertex| StepVertex {
                position: vertex.position().to_array(),
                color,
            }),
        )?;

        Ok(true)
    }
}

impl Default for MeshCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for MeshCanvas {
    fn draw_arc(
        &mut self,
        oval: ArcOval,
        start_angle_degrees: f32,
        sweep_angle_degrees: f32,
        paint: &ArcPaint,
    ) {
        if self.error.is_some() {
            return;
        }

        match self.tessellate_arc(oval, start_angle_degrees, sweep_angle_degrees, paint) {
            Ok(true) => self.arc_count += 1,
            Ok(false) => trace!(sweep_angle_degrees, "skipping empty arc"),
            Err(error) => self.error = Some(error),
        }
    }
}

fn arc_path(oval: ArcOval, start_angle_degrees: f32, sweep_angle_degrees: f32) -> Path {
    let (radius_x, radius_y) = oval.radii();
    let arc = Arc {
        center: oval.center(),
        radii: vector(radius_x, radius_y),
        start_angle: Angle::degrees(start_angle_degrees),
        sweep_angle: Angle::degrees(sweep_angle_degrees),
        x_rotation: Angle::zero(),
    };

    let mut builder = Path::builder();
    builder.begin(arc.from());
    arc.for_each_quadratic_bezier(&mut |segment| {
        builder.quadratic_bezier_to(segment.ctrl, segment.to);
    });
    builder.end(false);
    builder.build()
}

fn map_line_cap(cap: ArcCap) -> LyonLineCap {
    match cap {
        ArcCap::Butt => LyonLineCap::Butt,
        ArcCap::Round => LyonLineCap::Round,
        ArcCap::Square => LyonLineCap::Square,
    }
}
