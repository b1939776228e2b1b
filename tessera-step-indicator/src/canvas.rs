//! Immediate-mode drawing seam.
//!
//! ## Usage
//!
//! Implement [`Canvas`] to route step arcs into a renderer, or use
//! [`CommandRecorder`] to collect them as [`StepArcCommand`]s.
use crate::{Color, geometry::ArcOval};

/// Stroke cap used for arc ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcCap {
    /// Flat stroke ends.
    Butt,
    /// Rounded stroke ends.
    Round,
    /// Square stroke ends.
    Square,
}

/// Stroke parameters for one arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPaint {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in physical pixels.
    pub stroke_width_px: f32,
    /// Stroke cap applied to arc ends.
    pub cap: ArcCap,
}

/// A surface that can stroke circular arcs.
///
/// Angles are in degrees, 0° is at 3 o'clock and positive sweeps run
/// clockwise on a y-down surface.
pub trait Canvas {
    /// Strokes the arc of the circle inscribed in `oval`.
    fn draw_arc(
        &mut self,
        oval: ArcOval,
        start_angle_degrees: f32,
        sweep_angle_degrees: f32,
        paint: &ArcPaint,
    );
}

/// Draw command for a single step arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepArcCommand {
    /// Rectangle of the circle the arc lies on.
    pub oval: ArcOval,
    /// Start angle in degrees, where 0° is at 3 o'clock.
    pub start_angle_degrees: f32,
    /// Sweep angle in degrees, in the clockwise direction.
    pub sweep_angle_degrees: f32,
    /// Stroke applied to the arc.
    pub paint: ArcPaint,
}

impl StepArcCommand {
    /// Scales the command's alpha.
    pub fn apply_opacity(&mut self, opacity: f32) {
        self.paint.color = self
            .paint
            .color
            .with_alpha(self.paint.color.a * opacity.clamp(0.0, 1.0));
    }
}

/// Canvas that records every arc in draw order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CommandRecorder {
    commands: Vec<StepArcCommand>,
}

impl CommandRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands.
    pub fn commands(&self) -> &[StepArcCommand] {
        &self.commands
    }

    /// Takes the recorded commands, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<StepArcCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Drops all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for CommandRecorder {
    fn draw_arc(
        &mut self,
        oval: ArcOval,
        start_angle_degrees: f32,
        sweep_angle_degrees: f32,
        paint: &ArcPaint,
    ) {
        self.commands.push(StepArcCommand {
            oval,
            start_angle_degrees,
            sweep_angle_degrees,
            paint: *paint,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paint() -> ArcPaint {
        ArcPaint {
            color: Color::WHITE,
            stroke_width_px: 4.0,
            cap: ArcCap::Round,
        }
    }

    #[test]
    fn recorder_keeps_draw_order() {
        let mut recorder = CommandRecorder::new();
        let oval = ArcOval::default();
        recorder.draw_arc(oval, 270.0, 10.0, &paint());
        recorder.draw_arc(oval, 281.0, 10.0, &paint());

        let starts: Vec<f32> = recorder
            .commands()
            .iter()
            .map(|c| c.start_angle_degrees)
            .collect();
        assert_eq!(starts, vec![270.0, 281.0]);

        assert_eq!(recorder.take().len(), 2);
        assert!(recorder.commands().is_empty());
    }

    #[test]
    fn opacity_is_clamped() {
        let mut command = StepArcCommand {
            oval: ArcOval::default(),
            start_angle_degrees: 0.0,
            sweep_angle_degrees: 90.0,
            paint: paint(),
        };
        command.apply_opacity(0.5);
        assert_eq!(command.paint.color.a, 0.5);
        command.apply_opacity(4.0);
        assert_eq!(command.paint.color.a, 0.5);
    }
}
