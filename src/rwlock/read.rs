// SPDX-License-Identifier: MIT OR Apache-2.0
use super::inner::RwLock;
use crate::error::TimedOut;
use crate::guard::ReadGuard;
use crate::timeout::{Instant, Timeout};

impl<T> RwLock<T> {
    /// Attempts to acquire a read lock, waiting at most `timeout`.
    ///
    /// Multiple readers can hold read locks simultaneously, so this only waits
    /// while a writer holds the lock. A zero timeout makes a single attempt.
    ///
    /// # Examples
    ///
    /// ```
    /// use rw_timed_lock::{RwLock, Timeout};
    /// use std::time::Duration;
    ///
    /// let rwlock = RwLock::new("data");
    ///
    /// // Multiple readers can acquire locks
    /// let guard1 = rwlock.try_lock_read(Timeout::IMMEDIATE).unwrap();
    /// let guard2 = rwlock.try_lock_read(Duration::from_millis(10)).unwrap();
    /// assert_eq!(*guard1, "data");
    /// assert_eq!(*guard2, "data");
    /// ```
    ///
    /// ## Writer Blocks Readers
    ///
    /// ```
    /// use rw_timed_lock::{RwLock, TimedOut};
    /// use std::time::Duration;
    ///
    /// let rwlock = RwLock::new(0);
    /// let _writer = rwlock.lock_sync_write();
    ///
    /// let result = rwlock.try_lock_read(Duration::from_millis(10));
    /// assert!(matches!(result, Err(TimedOut)));
    /// ```
    pub fn try_lock_read(
        &self,
        timeout: impl Into<Timeout>,
    ) -> Result<ReadGuard<'_, T>, TimedOut> {
        if self.raw.try_read(timeout) {
            Ok(ReadGuard { lock: self })
        } else {
            Err(TimedOut)
        }
    }

    /// Attempts to acquire a read lock before `deadline`.
    ///
    /// A deadline that has already passed still makes one attempt.
    pub fn try_lock_read_until(&self, deadline: Instant) -> Result<ReadGuard<'_, T>, TimedOut> {
        if self.raw.try_read_until(deadline) {
            Ok(ReadGuard { lock: self })
        } else {
            Err(TimedOut)
        }
    }

    /// Acquires a read lock, waiting as long as a writer holds the lock.
    ///
    /// # Platform Behavior
    ///
    /// - **Native**: Uses efficient thread parking
    /// - **WASM with `Atomics.wait`**: Uses `Atomics.wait` for proper blocking
    /// - **WASM without `Atomics.wait`**: Falls back to spinning (e.g., browser main thread)
    ///
    /// # Examples
    ///
    /// ```
    /// use rw_timed_lock::RwLock;
    ///
    /// let rwlock = RwLock::new(vec![1, 2, 3]);
    /// let guard = rwlock.lock_sync_read();
    /// assert_eq!(guard.len(), 3);
    /// ```
    pub fn lock_sync_read(&self) -> ReadGuard<'_, T> {
        self.raw.read_lock();
        ReadGuard { lock: self }
    }

    /// Asynchronously acquires a read lock.
    ///
    /// Awaiting never blocks the executor thread, so this works everywhere,
    /// including the WASM main thread.
    ///
    /// ```
    /// # test_executors::spin_on(async {
    /// use rw_timed_lock::RwLock;
    ///
    /// let rwlock = RwLock::new(5);
    /// let guard = rwlock.lock_async_read().await;
    /// assert_eq!(*guard, 5);
    /// # });
    /// ```
    pub async fn lock_async_read(&self) -> ReadGuard<'_, T> {
        self.raw.read_lock_async().await;
        ReadGuard { lock: self }
    }

    /// Runs `f` with shared access to the data, holding a read lock for the call.
    ///
    /// ```
    /// use rw_timed_lock::RwLock;
    ///
    /// let rwlock = RwLock::new(vec![1, 2, 3]);
    /// let sum = rwlock.with_sync(|data| data.iter().sum::<i32>());
    /// assert_eq!(sum, 6);
    /// ```
    pub fn with_sync<R, F: FnOnce(&T) -> R>(&self, f: F) -> R {
        let guard = self.lock_sync_read();
        f(&guard)
    }

    /// Runs `f` with shared access to the data, acquiring the read lock asynchronously.
    pub async fn with_async<R, F: FnOnce(&T) -> R>(&self, f: F) -> R {
        let guard = self.lock_async_read().await;
        f(&guard)
    }
}
