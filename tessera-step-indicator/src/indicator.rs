//! The circular step indicator widget.
//!
//! ## Usage
//!
//! Own a [`StepIndicator`] in the host view, feed it counts with
//! [`StepIndicator::set_data`], and call [`StepIndicator::render`] from the
//! host's draw callback whenever [`StepIndicator::take_redraw_request`]
//! reports pending work.
use tracing::{debug, trace};

use crate::{
    Density,
    canvas::Canvas,
    geometry::{PxSize, RingGeometry},
    layout::StepLayout,
    state::{StepCounts, StepDataError},
    style::{StepIndicatorStyle, StepPaints},
};

/// # StepIndicator
///
/// A ring split into one arc per step, colored by step state.
///
/// ## Examples
///
/// ```
/// use tessera_step_indicator::{CommandRecorder, PxSize, StepIndicator};
///
/// let mut indicator = StepIndicator::default();
/// indicator.set_data(10, 5, 3);
/// assert_eq!(indicator.pending_steps(), 2);
///
/// let mut recorder = CommandRecorder::new();
/// indicator.render(&mut recorder, PxSize::new(240.0, 240.0));
/// assert_eq!(recorder.commands().len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct StepIndicator {
    style: StepIndicatorStyle,
    density: Density,
    paints: StepPaints,
    counts: StepCounts,
    redraw_requested: bool,
}

impl StepIndicator {
    /// Creates an indicator with default counts.
    ///
    /// A freshly created indicator starts with a redraw request pending.
    pub fn new(style: StepIndicatorStyle, density: Density) -> Self {
        let paints = StepPaints::from_style(&style, density);
        Self {
            style,
            density,
            paints,
            counts: StepCounts::default(),
            redraw_requested: true,
        }
    }

    /// Current style.
    pub fn style(&self) -> &StepIndicatorStyle {
        &self.style
    }

    /// Density used to resolve dp lengths.
    pub fn density(&self) -> Density {
        self.density
    }

    /// Paints derived from the current style.
    pub fn paints(&self) -> &StepPaints {
        &self.paints
    }

    /// Current step counts.
    pub fn counts(&self) -> StepCounts {
        self.counts
    }

    /// Steps that are neither successful nor failed.
    pub fn pending_steps(&self) -> u32 {
        self.counts.pending()
    }

    /// Replaces the style and re-derives the step paints.
    pub fn configure(&mut self, style: StepIndicatorStyle) {
        debug!(?style, "configuring step indicator");
        self.paints = StepPaints::from_style(&style, self.density);
        self.style = style;
        self.request_redraw();
    }

    /// Changes the density and re-derives the step paints.
    pub fn set_density(&mut self, density: Density) {
        if density == self.density {
            return;
        }
        self.density = density;
        self.paints = StepPaints::from_style(&self.style, density);
        self.request_redraw();
    }

    /// Replaces the counts, clamping values that break the count invariant.
    ///
    /// Reporting more finished steps than `total` is a caller error; the
    /// counts are clamped and a warning is logged. See
    /// [`StepCounts::clamped`].
    pub fn set_data(&mut self, total: i32, successful: i32, failed: i32) {
        self.apply_counts(StepCounts::clamped(total, successful, failed));
    }

    /// Replaces the counts, rejecting values that break the count invariant.
    ///
    /// On error the current counts are kept and no redraw is requested.
    pub fn try_set_data(
        &mut self,
        total: i32,
        successful: i32,
        failed: i32,
    ) -> Result<(), StepDataError> {
        let counts = StepCounts::new(total, successful, failed)?;
        self.apply_counts(counts);
        Ok(())
    }

    fn apply_counts(&mut self, counts: StepCounts) {
        debug!(
            total = counts.total(),
            successful = counts.successful(),
            failed = counts.failed(),
            pending = counts.pending(),
            "step data updated"
        );
        self.counts = counts;
        self.request_redraw();
    }

    /// Marks the indicator as needing a redraw.
    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Whether a redraw is pending.
    pub fn is_redraw_requested(&self) -> bool {
        self.redraw_requested
    }

    /// Clears and returns the pending redraw request.
    ///
    /// Updates made since the last call are coalesced into one request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Ring position and radius for the given bounds.
    pub fn ring(&self, size: PxSize) -> RingGeometry {
        RingGeometry::from_bounds(
            size,
            self.paints.success.stroke_width_px,
            self.style.ring_inset_px,
        )
    }

    /// Arc layout for the given bounds.
    ///
    /// Bounds only matter when the gap is a length rather than an angle.
    pub fn layout(&self, size: PxSize) -> StepLayout {
        let ring = self.ring(size);
        let gap_degrees = self.style.gap.sweep_degrees(ring.radius, self.density);
        StepLayout::new(self.counts, gap_degrees)
    }

    /// Angular width of each arc for the given bounds.
    pub fn arc_width_degrees(&self, size: PxSize) -> f32 {
        self.layout(size).arc_width_degrees()
    }

    /// Draws one arc per step onto `canvas`.
    ///
    /// Arcs start at the top of the ring and run clockwise in index order.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C, size: PxSize) {
        let ring = self.ring(size);
        let oval = ring.oval();
        let layout = self.layout(size);
        trace!(
            width = size.width,
            height = size.height,
            radius = ring.radius,
            arc_width = layout.arc_width_degrees(),
            "rendering step indicator"
        );

        for arc in layout.arcs() {
            canvas.draw_arc(
                oval,
                arc.start_angle_degrees,
                arc.sweep_angle_degrees,
                self.paints.for_state(arc.state),
            );
        }
    }
}

impl Default for StepIndicator {
    fn default() -> Self {
        Self::new(StepIndicatorStyle::default(), Density::STANDARD)
    }
}
