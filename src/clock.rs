//! Time source and checked timestamp arithmetic for temporal claim checks.

use crate::error::{Error, Result};
use std::fmt;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Minimum valid Unix timestamp (1970-01-01 00:00:00 UTC)
pub(crate) const MIN_TIMESTAMP: i64 = 0;

/// Maximum valid Unix timestamp (2100-01-01 00:00:00 UTC)
pub(crate) const MAX_TIMESTAMP: i64 = 4_102_444_800;

/// Source of "now" for temporal claim checks.
///
/// The default clock reads the real system time. A fixed timestamp or an
/// arbitrary function can be substituted instead, which makes validation
/// deterministic in tests and lets callers replay historical tokens.
///
/// The clock is resolved once per validation call; every temporal comparison
/// within that call sees the same reading.
#[derive(Clone, Default)]
pub enum Clock {
    /// Read the real system clock.
    #[default]
    System,
    /// Always return the given Unix timestamp.
    Fixed(i64),
    /// Delegate to a caller-supplied function.
    Func(Arc<dyn Fn() -> i64 + Send + Sync>),
}

impl Clock {
    /// Build a clock from a function returning a Unix timestamp.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn() -> i64 + Send + Sync + 'static,
    {
        Clock::Func(Arc::new(f))
    }

    /// Current Unix timestamp according to this clock.
    pub fn now(&self) -> i64 {
        match self {
            Clock::System => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_else(|_| std::time::Duration::from_secs(0))
                .as_secs() as i64,
            Clock::Fixed(timestamp) => *timestamp,
            Clock::Func(f) => f(),
        }
    }
}

impl fmt::Debug for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clock::System => f.write_str("Clock::System"),
            Clock::Fixed(timestamp) => write!(f, "Clock::Fixed({timestamp})"),
            Clock::Func(_) => f.write_str("Clock::Func(..)"),
        }
    }
}

/// Check that a timestamp claim is within acceptable bounds
pub(crate) fn validate_timestamp_bounds(value: i64) -> Result<()> {
    if !(MIN_TIMESTAMP..=MAX_TIMESTAMP).contains(&value) {
        return Err(Error::TimestampOutOfBounds {
            value,
            min: MIN_TIMESTAMP,
            max: MAX_TIMESTAMP,
        });
    }
    Ok(())
}

/// Apply clock skew to a timestamp with overflow protection
pub(crate) fn apply_skew(timestamp: i64, skew_seconds: u64, add: bool) -> Result<i64> {
    let skew_i64 = skew_seconds as i64;
    if add {
        timestamp.checked_add(skew_i64)
    } else {
        timestamp.checked_sub(skew_i64)
    }
    .ok_or(Error::TimestampOverflow)
}
