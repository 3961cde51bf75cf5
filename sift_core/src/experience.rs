//! Closed experience ranges shared by candidates and filter criteria.

use serde::{Deserialize, Serialize};

/// A pair of optional year bounds.
///
/// On a [`Candidate`](crate::Candidate) this is the candidate's own claimed
/// range; on [`FilterCriteria`](crate::FilterCriteria) it is the requested
/// bound. Both sides use the same type so that overlap is computed in exactly
/// one place, [`ExperienceRange::overlaps`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExperienceRange {
    /// Lower bound in years.
    #[serde(default)]
    pub min: Option<u32>,
    /// Upper bound in years.
    #[serde(default)]
    pub max: Option<u32>,
}

impl ExperienceRange {
    /// Largest year value accepted at the request boundary.
    pub const MAX_YEARS: u32 = 50;

    #[must_use]
    pub const fn new(min: Option<u32>, max: Option<u32>) -> Self {
        Self { min, max }
    }

    /// A fully bounded range, as stored on a candidate.
    #[must_use]
    pub const fn closed(min: u32, max: u32) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Returns `true` when neither bound is set.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Returns `true` when both bounds are set and `max < min`.
    #[must_use]
    pub const fn is_inverted(&self) -> bool {
        match (self.min, self.max) {
            (Some(min), Some(max)) => max < min,
            _ => false,
        }
    }

    /// Interval-overlap test of `self` (a candidate's claimed range) against
    /// `requested` bounds.
    ///
    /// The requested minimum is satisfied when the candidate's maximum reaches
    /// it; the requested maximum is satisfied when the candidate's minimum does
    /// not exceed it. Each check applies only when its bound is set. A missing
    /// candidate bound is treated as open (`0` below, unbounded above).
    ///
    /// An inverted `requested` range is evaluated as-is rather than rejected.
    #[must_use]
    pub fn overlaps(&self, requested: &Self) -> bool {
        let own_min = self.min.unwrap_or(0);
        let own_max = self.max.unwrap_or(u32::MAX);

        requested.min.is_none_or(|min| own_max >= min)
            && requested.max.is_none_or(|max| own_min <= max)
    }
}
