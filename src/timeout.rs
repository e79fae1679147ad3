// SPDX-License-Identifier: MIT OR Apache-2.0
//! How long an acquisition attempt may wait.

use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub use std::time::Instant;
#[cfg(target_arch = "wasm32")]
pub use web_time::Instant;

/// How long an acquisition attempt is allowed to wait for the lock.
///
/// - [`Timeout::Unbounded`] waits until the lock is acquired.
/// - `Timeout::Bounded(Duration::ZERO)` makes exactly one attempt and returns.
/// - `Timeout::Bounded(d)` keeps trying until `d` has elapsed.
///
/// Most callers pass a [`Duration`] directly, which converts into
/// `Timeout::Bounded`.
///
/// # Examples
///
/// ```
/// use rw_timed_lock::{RwTimedLock, Timeout};
/// use std::time::Duration;
///
/// let lock = RwTimedLock::new();
/// assert!(lock.try_write(Timeout::IMMEDIATE));
/// assert!(!lock.try_write(Duration::from_millis(5)));
/// lock.write_unlock();
/// assert!(lock.try_read(Timeout::Unbounded));
/// lock.read_unlock();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timeout {
    /// Wait as long as it takes.
    Unbounded,
    /// Give up once this much time has passed.
    Bounded(Duration),
}

impl Timeout {
    /// A single attempt with no waiting.
    pub const IMMEDIATE: Timeout = Timeout::Bounded(Duration::ZERO);

    /// Builds a timeout from a signed nanosecond count.
    ///
    /// Negative values mean "no timeout", zero means a single attempt and
    /// positive values bound the wait.
    ///
    /// ```
    /// use rw_timed_lock::Timeout;
    /// use std::time::Duration;
    ///
    /// assert_eq!(Timeout::from_signed_nanos(-1), Timeout::Unbounded);
    /// assert_eq!(Timeout::from_signed_nanos(0), Timeout::IMMEDIATE);
    /// assert_eq!(
    ///     Timeout::from_signed_nanos(1_000),
    ///     Timeout::Bounded(Duration::from_micros(1))
    /// );
    /// ```
    pub const fn from_signed_nanos(nanos: i64) -> Timeout {
        if nanos < 0 {
            Timeout::Unbounded
        } else {
            Timeout::Bounded(Duration::from_nanos(nanos as u64))
        }
    }

    /// The absolute deadline for an attempt starting at `now`.
    ///
    /// `None` means the attempt never times out. A deadline too far in the
    /// future to be represented is treated the same way.
    pub(crate) fn deadline_from(self, now: Instant) -> Option<Instant> {
        match self {
            Timeout::Unbounded => None,
            Timeout::Bounded(duration) => now.checked_add(duration),
        }
    }
}

impl From<Duration> for Timeout {
    fn from(duration: Duration) -> Self {
        Timeout::Bounded(duration)
    }
}

impl From<Option<Duration>> for Timeout {
    fn from(duration: Option<Duration>) -> Self {
        match duration {
            Some(duration) => Timeout::Bounded(duration),
            None => Timeout::Unbounded,
        }
    }
}
