// SPDX-License-Identifier: MIT OR Apache-2.0
use thiserror::Error;

/// Error returned when a lock could not be acquired before its deadline.
///
/// This is returned by the bounded locking methods on [`RwLock`](crate::RwLock),
/// such as [`try_lock_write`](crate::RwLock::try_lock_write), when another
/// thread kept the lock for the whole timeout.
///
/// # Examples
///
/// ```
/// use rw_timed_lock::{RwLock, TimedOut, Timeout};
///
/// let rwlock = RwLock::new(42);
/// let _guard = rwlock.lock_sync_write();
///
/// match rwlock.try_lock_read(Timeout::IMMEDIATE) {
///     Ok(_) => panic!("Should not succeed"),
///     Err(TimedOut) => println!("Lock is held by a writer"),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("lock not acquired before the deadline")]
pub struct TimedOut;
