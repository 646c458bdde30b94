//! Period — an immutable check-in/check-out interval.
//!
//! Periods are half-open: a stay occupies `[check_in, check_out)`, so a guest
//! leaving at the exact instant the next one arrives does not conflict.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvalidPeriodError;
use crate::time::Timestamp;

/// A validated stay interval with `check_in < check_out`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPeriod")]
pub struct Period {
    check_in: Timestamp,
    check_out: Timestamp,
}

#[derive(Deserialize)]
struct RawPeriod {
    check_in: Timestamp,
    check_out: Timestamp,
}

impl TryFrom<RawPeriod> for Period {
    type Error = InvalidPeriodError;

    fn try_from(raw: RawPeriod) -> Result<Self, Self::Error> {
        Self::new(raw.check_in, raw.check_out)
    }
}

impl Period {
    /// Build a period, rejecting empty or inverted intervals.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPeriodError`] when `check_out <= check_in`.
    pub fn new(check_in: Timestamp, check_out: Timestamp) -> Result<Self, InvalidPeriodError> {
        if check_out <= check_in {
            return Err(InvalidPeriodError {
                check_in,
                check_out,
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    #[must_use]
    pub fn check_in(&self) -> Timestamp {
        self.check_in
    }

    #[must_use]
    pub fn check_out(&self) -> Timestamp {
        self.check_out
    }

    /// Whole nights between the check-in and check-out calendar dates (UTC).
    #[must_use]
    pub fn duration_nights(&self) -> i64 {
        (self.check_out.date_naive() - self.check_in.date_naive()).num_days()
    }

    /// Whether the two intervals share any instant.
    #[must_use]
    pub fn overlaps(&self, other: &Period) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }

    /// Whether the stay has not started yet at `reference_now`.
    #[must_use]
    pub fn is_future(&self, reference_now: Timestamp) -> bool {
        self.check_in > reference_now
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} → {}",
            self.check_in.to_rfc3339(),
            self.check_out.to_rfc3339()
        )
    }
}
