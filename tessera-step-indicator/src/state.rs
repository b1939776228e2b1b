//! Step counts and per-index state classification.
//!
//! ## Usage
//!
//! Build [`StepCounts`] from host data, then ask it for the [`StepState`] of
//! each ring index.
use thiserror::Error;
use tracing::warn;

/// Visual state of a single step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepState {
    /// The step completed successfully.
    Success,
    /// The step failed.
    Failed,
    /// The step has not run yet.
    Pending,
}

/// Reasons a set of step counts is rejected by [`StepCounts::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepDataError {
    /// The ring needs at least one step.
    #[error("total steps must be positive, got {0}")]
    NonPositiveTotal(i32),
    /// A successful or failed count was below zero.
    #[error("step counts must not be negative (successful: {successful}, failed: {failed})")]
    NegativeCount {
        /// Requested successful steps.
        successful: i32,
        /// Requested failed steps.
        failed: i32,
    },
    /// More steps were reported finished than exist.
    #[error("{successful} successful + {failed} failed steps exceed {total} total steps")]
    CountsExceedTotal {
        /// Requested total steps.
        total: i32,
        /// Requested successful steps.
        successful: i32,
        /// Requested failed steps.
        failed: i32,
    },
}

/// Validated step counts.
///
/// Invariant: `total > 0` and `successful + failed <= total`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StepCounts {
    total: u32,
    successful: u32,
    failed: u32,
}

impl StepCounts {
    /// Creates counts, rejecting values that break the invariant.
    ///
    /// ```
    /// use tessera_step_indicator::{StepCounts, StepDataError};
    ///
    /// let counts = StepCounts::new(10, 5, 3).unwrap();
    /// assert_eq!(counts.pending(), 2);
    ///
    /// assert!(matches!(
    ///     StepCounts::new(4, 3, 3),
    ///     Err(StepDataError::CountsExceedTotal { .. })
    /// ));
    /// ```
    pub fn new(total: i32, successful: i32, failed: i32) -> Result<Self, StepDataError> {
        if total <= 0 {
            return Err(StepDataError::NonPositiveTotal(total));
        }
        if successful < 0 || failed < 0 {
            return Err(StepDataError::NegativeCount { successful, failed });
        }
        if i64::from(successful) + i64::from(failed) > i64::from(total) {
            return Err(StepDataError::CountsExceedTotal {
                total,
                successful,
                failed,
            });
        }

        Ok(Self {
            total: total as u32,
            successful: successful as u32,
            failed: failed as u32,
        })
    }

    /// Creates counts, clamping out-of-range values into the invariant.
    ///
    /// `total` is raised to at least 1, negative counts become 0,
    /// `successful` is capped at `total` and `failed` at whatever is left.
    /// Any adjustment is logged at `warn` level.
    pub fn clamped(total: i32, successful: i32, failed: i32) -> Self {
        match Self::new(total, successful, failed) {
            Ok(counts) => counts,
            Err(error) => {
                let total_c = total.max(1) as u32;
                let successful_c = (successful.max(0) as u32).min(total_c);
                let failed_c = (failed.max(0) as u32).min(total_c - successful_c);
                warn!(
                    %error,
                    total = total_c,
                    successful = successful_c,
                    failed = failed_c,
                    "clamping step counts"
                );
                Self {
                    total: total_c,
                    successful: successful_c,
                    failed: failed_c,
                }
            }
        }
    }

    /// Total number of steps on the ring.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Number of successful steps.
    pub fn successful(&self) -> u32 {
        self.successful
    }

    /// Number of failed steps.
    pub fn failed(&self) -> u32 {
        self.failed
    }

    /// Steps that are neither successful nor failed.
    pub fn pending(&self) -> u32 {
        self.total - self.successful - self.failed
    }

    /// Classifies a ring index.
    ///
    /// Indices below `successful` are [`StepState::Success`], the next
    /// `failed` indices are [`StepState::Failed`], everything after is
    /// [`StepState::Pending`].
    pub fn state_of(&self, index: u32) -> StepState {
        classify(self.successful, self.failed, index)
    }
}

impl Default for StepCounts {
    fn default() -> Self {
        Self {
            total: crate::style::StepIndicatorDefaults::TOTAL_STEPS,
            successful: crate::style::StepIndicatorDefaults::SUCCESSFUL_STEPS,
            failed: crate::style::StepIndicatorDefaults::FAILED_STEPS,
        }
    }
}

fn classify(successful: u32, failed: u32, index: u32) -> StepState {
    if index < successful {
        StepState::Success
    } else if u64::from(index) < u64::from(successful) + u64::from(failed) {
        StepState::Failed
    } else {
        StepState::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states(counts: &StepCounts) -> Vec<StepState> {
        (0..counts.total()).map(|i| counts.state_of(i)).collect()
    }

    #[test]
    fn classifies_contiguous_bands() {
        let counts = StepCounts::new(10, 5, 3).unwrap();
        let states = states(&counts);

        assert!(states[0..5].iter().all(|s| *s == StepState::Success));
        assert!(states[5..8].iter().all(|s| *s == StepState::Failed));
        assert!(states[8..10].iter().all(|s| *s == StepState::Pending));
        assert_eq!(counts.pending(), 2);
    }

    #[test]
    fn defaults_match_widget_defaults() {
        let counts = StepCounts::default();
        assert_eq!(counts.total(), 12);
        assert_eq!(counts.successful(), 2);
        assert_eq!(counts.failed(), 2);
        assert_eq!(counts.pending(), 8);
    }

    #[test]
    fn band_sizes_match_counts_for_every_split() {
        for total in 1..=16 {
            for successful in 0..=total {
                for failed in 0..=(total - successful) {
                    let counts = StepCounts::new(total, successful, failed).unwrap();
                    let states = states(&counts);
                    let count = |state: StepState| {
                        states.iter().filter(|s| **s == state).count() as u32
                    };

                    assert_eq!(count(StepState::Success), counts.successful());
                    assert_eq!(count(StepState::Failed), counts.failed());
                    assert_eq!(count(StepState::Pending), counts.pending());

                    // success -> failed -> pending, never backwards
                    let rank = |s: &StepState| match s {
                        StepState::Success => 0,
                        StepState::Failed => 1,
                        StepState::Pending => 2,
                    };
                    assert!(states.windows(2).all(|w| rank(&w[0]) <= rank(&w[1])));
                }
            }
        }
    }

    #[test]
    fn new_rejects_invalid_counts() {
        assert_eq!(
            StepCounts::new(0, 0, 0),
            Err(StepDataError::NonPositiveTotal(0))
        );
        assert_eq!(
            StepCounts::new(5, -1, 0),
            Err(StepDataError::NegativeCount {
                successful: -1,
                failed: 0
            })
        );
        assert_eq!(
            StepCounts::new(4, 3, 3),
            Err(StepDataError::CountsExceedTotal {
                total: 4,
                successful: 3,
                failed: 3
            })
        );
        assert!(StepCounts::new(i32::MAX, i32::MAX, i32::MAX).is_err());
    }

    #[test]
    fn clamped_keeps_valid_counts() {
        assert_eq!(
            StepCounts::clamped(10, 5, 3),
            StepCounts::new(10, 5, 3).unwrap()
        );
    }

    #[test]
    fn clamped_repairs_invalid_counts() {
        let zero_total = StepCounts::clamped(0, 0, 0);
        assert_eq!(zero_total.total(), 1);
        assert_eq!(zero_total.pending(), 1);

        let overflow = StepCounts::clamped(4, 3, 3);
        assert_eq!(overflow.successful(), 3);
        assert_eq!(overflow.failed(), 1);
        assert_eq!(overflow.pending(), 0);

        let negative = StepCounts::clamped(-3, -2, 7);
        assert_eq!(negative.total(), 1);
        assert_eq!(negative.successful(), 0);
        assert_eq!(negative.failed(), 1);
    }

    #[test]
    fn clamping_preserves_raw_classification() {
        // What the unclamped rule would draw for (4, 3, 3)
        let raw: Vec<StepState> = (0..4).map(|i| classify(3, 3, i)).collect();
        assert_eq!(states(&StepCounts::clamped(4, 3, 3)), raw);
    }
}
