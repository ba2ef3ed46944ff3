//! Wall-clock limit for budgeted searches.

use std::time::{Duration, Instant};

use crate::error::{Error, Result};

/// A point in time after which a search should stop at its next check.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp::Deadline;
///
/// let deadline = Deadline::after(Duration::from_secs(60));
/// assert!(!deadline.expired());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    /// A deadline `limit` from now.
    ///
    /// # Panics
    ///
    /// Panics if `now + limit` overflows [`Instant`]; see [`Deadline::checked_after`].
    pub fn after(limit: Duration) -> Self {
        Self {
            at: Instant::now() + limit,
        }
    }

    /// A deadline `limit` from now, or `None` if that instant is not representable.
    pub fn checked_after(limit: Duration) -> Option<Self> {
        Instant::now().checked_add(limit).map(|at| Self { at })
    }

    /// Builds a deadline from an optional limit in seconds.
    ///
    /// Rejects negative and non-finite limits. A limit too large to
    /// represent as an instant means no deadline.
    pub fn from_secs(secs: Option<f64>) -> Result<Option<Self>> {
        match secs {
            None => Ok(None),
            Some(s) if s.is_finite() && s >= 0.0 => Ok(Duration::try_from_secs_f64(s)
                .ok()
                .and_then(Self::checked_after)),
            Some(s) => Err(Error::invalid_config(format!(
                "time limit must be a non-negative number of seconds, got {s}"
            ))),
        }
    }

    /// Returns true once the deadline has passed.
    pub fn expired(&self) -> bool {
        Instant::now() >= self.at
    }
}

/// Returns true if `deadline` is set and has passed.
pub(crate) fn is_expired(deadline: Option<&Deadline>) -> bool {
    deadline.is_some_and(Deadline::expired)
}
