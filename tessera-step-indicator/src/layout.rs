//! Arc layout of the ring.
//!
//! ## Usage
//!
//! [`StepLayout`] splits the full circle evenly among the steps: each step
//! gets `360 / total` degrees, of which `gap` degrees are left empty after
//! the arc.
use crate::{
    state::{StepCounts, StepState},
    style::StepIndicatorDefaults,
};

/// A positioned step arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepArc {
    /// Ring index, 0-based, clockwise from the top.
    pub index: u32,
    /// State the arc represents.
    pub state: StepState,
    /// Start angle in degrees. Not wrapped into `[0, 360)`.
    pub start_angle_degrees: f32,
    /// Angular width of the arc.
    pub sweep_angle_degrees: f32,
}

/// Angular layout for a set of step counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepLayout {
    counts: StepCounts,
    gap_degrees: f32,
    start_angle_degrees: f32,
}

impl StepLayout {
    /// Lays the steps out from the top of the ring.
    ///
    /// ```
    /// use tessera_step_indicator::{StepCounts, StepLayout};
    ///
    /// let layout = StepLayout::new(StepCounts::default(), 0.8);
    /// assert!((layout.arc_width_degrees() - 29.2).abs() < 1e-4);
    /// ```
    pub fn new(counts: StepCounts, gap_degrees: f32) -> Self {
        Self {
            counts,
            gap_degrees,
            start_angle_degrees: StepIndicatorDefaults::START_ANGLE_DEGREES,
        }
    }

    /// Counts the layout was built from.
    pub fn counts(&self) -> StepCounts {
        self.counts
    }

    /// Gap between arcs in degrees.
    pub fn gap_degrees(&self) -> f32 {
        self.gap_degrees
    }

    /// Angle each step occupies, arc plus trailing gap.
    pub fn step_degrees(&self) -> f32 {
        360.0 / self.counts.total() as f32
    }

    /// Angular width of a single arc.
    ///
    /// Negative when the gap is wider than a step's share of the circle.
    pub fn arc_width_degrees(&self) -> f32 {
        self.step_degrees() - self.gap_degrees
    }

    /// Arcs in draw order.
    pub fn arcs(&self) -> impl ExactSizeIterator<Item = StepArc> + '_ {
        let step = self.step_degrees();
        let sweep = self.arc_width_degrees();
        (0..self.counts.total()).map(move |index| StepArc {
            index,
            state: self.counts.state_of(index),
            start_angle_degrees: self.start_angle_degrees + index as f32 * step,
            sweep_angle_degrees: sweep,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    #[test]
    fn arcs_start_at_top_and_advance_by_step() {
        let layout = StepLayout::new(StepCounts::new(4, 1, 1).unwrap(), 2.0);
        let arcs: Vec<StepArc> = layout.arcs().collect();

        assert_eq!(arcs.len(), 4);
        assert_eq!(arcs[0].start_angle_degrees, 270.0);
        assert_eq!(arcs[1].start_angle_degrees, 360.0);
        assert_eq!(arcs[3].start_angle_degrees, 540.0);
        assert!(arcs.iter().all(|a| a.sweep_angle_degrees == 88.0));
        assert_eq!(
            arcs.iter().map(|a| a.state).collect::<Vec<_>>(),
            vec![
                StepState::Success,
                StepState::Failed,
                StepState::Pending,
                StepState::Pending
            ]
        );
    }

    #[test]
    fn arcs_and_gaps_cover_full_circle() {
        for total in 1..=40 {
            let counts = StepCounts::new(total, total / 3, total / 4).unwrap();
            let layout = StepLayout::new(counts, 0.8);

            let covered: f32 = layout
                .arcs()
                .map(|a| a.sweep_angle_degrees + layout.gap_degrees())
                .sum();
            let expected = total as f32 * (layout.arc_width_degrees() + layout.gap_degrees());
            assert!((covered - expected).abs() < EPSILON);
            assert!((covered - 360.0).abs() < EPSILON);

            let last = layout.arcs().last().unwrap();
            let end = last.start_angle_degrees + last.sweep_angle_degrees + layout.gap_degrees();
            assert!((end - 270.0 - 360.0).abs() < EPSILON);
        }
    }

    #[test]
    fn default_layout_width() {
        let layout = StepLayout::new(StepCounts::default(), 0.8);
        assert_eq!(layout.counts().pending(), 8);
        assert!((layout.arc_width_degrees() - (30.0 - 0.8)).abs() < EPSILON);
    }

    #[test]
    fn oversized_gap_gives_negative_width() {
        let layout = StepLayout::new(StepCounts::new(36, 0, 0).unwrap(), 12.0);
        assert!(layout.arc_width_degrees() < 0.0);
        assert_eq!(layout.arcs().len(), 36);
    }
}
