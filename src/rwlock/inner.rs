// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::raw::RwTimedLock;
use crate::timeout::Timeout;
use std::cell::UnsafeCell;
use std::fmt::Display;

/// A reader-writer lock protecting a value of type `T`.
///
/// Any number of [`ReadGuard`](crate::ReadGuard)s may exist at once; a
/// [`WriteGuard`](crate::WriteGuard) is exclusive. Every acquisition can be
/// bounded by a [`Timeout`](crate::Timeout) and reports
/// [`TimedOut`](crate::TimedOut) when it expires.
///
/// The lock is unfair and not re-entrant: acquiring the write lock twice from
/// the same thread without dropping the first guard never succeeds.
///
/// # Examples
///
/// ```
/// # // std::thread::spawn panics on wasm32
/// # if cfg!(target_arch = "wasm32") { return; }
/// use rw_timed_lock::RwLock;
/// use std::sync::Arc;
/// use std::thread;
/// use std::time::Duration;
///
/// let shared = Arc::new(RwLock::new(0));
///
/// let writer = {
///     let shared = Arc::clone(&shared);
///     thread::spawn(move || {
///         let mut guard = shared.lock_sync_write();
///         thread::sleep(Duration::from_millis(20));
///         *guard += 1;
///     })
/// };
/// writer.join().unwrap();
///
/// // Plenty of time for the writer to finish
/// let value = shared.try_lock_read(Duration::from_secs(5)).map(|g| *g);
/// assert_eq!(value, Ok(1));
/// ```
#[derive(Debug, Default)]
pub struct RwLock<T> {
    pub(crate) raw: RwTimedLock,
    pub(crate) inner: UnsafeCell<T>,
}

unsafe impl<T: Send> Send for RwLock<T> {}
unsafe impl<T: Send + Sync> Sync for RwLock<T> {}

impl<T> RwLock<T> {
    /// Creates a new, unlocked lock holding `value`.
    ///
    /// ```
    /// use rw_timed_lock::RwLock;
    ///
    /// static COUNTER: RwLock<u32> = RwLock::new(0);
    /// *COUNTER.lock_sync_write() += 1;
    /// assert_eq!(*COUNTER.lock_sync_read(), 1);
    /// ```
    pub const fn new(value: T) -> RwLock<T> {
        RwLock {
            raw: RwTimedLock::new(),
            inner: UnsafeCell::new(value),
        }
    }

    /// Consumes the lock, returning the protected value.
    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }

    /// Mutable access without locking; the borrow checker proves exclusivity.
    pub fn get_mut(&mut self) -> &mut T {
        self.inner.get_mut()
    }

    /// Whether the lock is held in either mode.
    ///
    /// The answer may be stale by the time it is returned. Releasing the lock
    /// is only possible by dropping its guards.
    ///
    /// ```
    /// use rw_timed_lock::RwLock;
    ///
    /// let rwlock = RwLock::new(());
    /// let guard = rwlock.lock_sync_write();
    /// assert!(rwlock.is_locked());
    /// drop(guard);
    /// assert!(!rwlock.is_locked());
    /// ```
    ///
    /// ```compile_fail
    /// use rw_timed_lock::RwLock;
    ///
    /// let rwlock = RwLock::new(());
    /// let _guard = rwlock.lock_sync_write();
    /// rwlock.raw.write_unlock();
    /// ```
    pub fn is_locked(&self) -> bool {
        self.raw.is_locked()
    }

    /// Whether a [`WriteGuard`](crate::WriteGuard) is alive.
    pub fn is_locked_exclusive(&self) -> bool {
        self.raw.is_locked_exclusive()
    }

    /// How many [`ReadGuard`](crate::ReadGuard)s are alive.
    ///
    /// ```
    /// use rw_timed_lock::RwLock;
    ///
    /// let rwlock = RwLock::new(());
    /// let _a = rwlock.lock_sync_read();
    /// let _b = rwlock.lock_sync_read();
    /// assert_eq!(rwlock.reader_count(), 2);
    /// ```
    pub fn reader_count(&self) -> usize {
        self.raw.reader_count()
    }
}

impl<T> From<T> for RwLock<T> {
    fn from(value: T) -> Self {
        RwLock::new(value)
    }
}

impl<T: Display> Display for RwLock<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.try_lock_read(Timeout::IMMEDIATE) {
            Ok(guard) => std::fmt::Display::fmt(&*guard, f),
            Err(_) => write!(f, "RwLock {{ <locked> }}"),
        }
    }
}
