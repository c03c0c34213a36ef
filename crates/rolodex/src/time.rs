//! Time injection for record timestamps.

use chrono::{DateTime, Utc};

/// A source of wall-clock timestamps for `createdAt` / `updatedAt`.
///
/// This abstraction lets the service take the real system clock in
/// production and a fixed source in tests.
///
/// # Example
///
/// ```
/// use chrono::{DateTime, Utc};
/// use rolodex::TimeSource;
///
/// struct FixedTime(DateTime<Utc>);
/// impl TimeSource for FixedTime {
///     fn now(&self) -> DateTime<Utc> {
///         self.0
///     }
/// }
///
/// let time = FixedTime(DateTime::from_timestamp(1234, 0).unwrap());
/// assert_eq!(time.now().timestamp(), 1234);
/// ```
pub trait TimeSource {
    /// Returns the current time in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// The system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
