// SPDX-License-Identifier: MIT OR Apache-2.0
use super::inner::RwLock;
use crate::error::TimedOut;
use crate::guard::WriteGuard;
use crate::timeout::{Instant, Timeout};

impl<T> RwLock<T> {
    /// Attempts to acquire the write lock, waiting at most `timeout`.
    ///
    /// Write locks are exclusive: this waits until no reader and no other
    /// writer holds the lock, or gives up with [`TimedOut`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rw_timed_lock::{RwLock, TimedOut};
    /// use std::time::Duration;
    ///
    /// let rwlock = RwLock::new(vec![1, 2, 3]);
    ///
    /// match rwlock.try_lock_write(Duration::from_millis(10)) {
    ///     Ok(mut guard) => guard.push(4),
    ///     Err(TimedOut) => println!("Could not acquire write lock"),
    /// }
    /// ```
    ///
    /// ## Readers Block Writers
    ///
    /// ```
    /// use rw_timed_lock::{RwLock, TimedOut, Timeout};
    ///
    /// let rwlock = RwLock::new(0);
    /// let _reader = rwlock.lock_sync_read();
    ///
    /// assert!(matches!(rwlock.try_lock_write(Timeout::IMMEDIATE), Err(TimedOut)));
    /// ```
    pub fn try_lock_write(
        &self,
        timeout: impl Into<Timeout>,
    ) -> Result<WriteGuard<'_, T>, TimedOut> {
        if self.raw.try_write(timeout) {
            Ok(WriteGuard { lock: self })
        } else {
            Err(TimedOut)
        }
    }

    /// Attempts to acquire the write lock before `deadline`.
    ///
    /// A deadline that has already passed still makes one attempt.
    pub fn try_lock_write_until(&self, deadline: Instant) -> Result<WriteGuard<'_, T>, TimedOut> {
        if self.raw.try_write_until(deadline) {
            Ok(WriteGuard { lock: self })
        } else {
            Err(TimedOut)
        }
    }

    /// Acquires the write lock, waiting as long as it takes.
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
    /// use std::collections::HashMap;
    ///
    /// let rwlock = RwLock::new(HashMap::new());
    /// rwlock.lock_sync_write().insert("version", 2);
    /// assert_eq!(rwlock.lock_sync_read().get("version"), Some(&2));
    /// ```
    pub fn lock_sync_write(&self) -> WriteGuard<'_, T> {
        self.raw.write_lock();
        WriteGuard { lock: self }
    }

    /// Asynchronously acquires the write lock.
    ///
    /// ```
    /// # test_executors::spin_on(async {
    /// use rw_timed_lock::RwLock;
    /// use std::collections::HashMap;
    ///
    /// let rwlock = RwLock::new(HashMap::new());
    ///
    /// let mut guard = rwlock.lock_async_write().await;
    /// guard.insert("key", "value");
    /// drop(guard);
    ///
    /// let guard = rwlock.lock_async_read().await;
    /// assert_eq!(guard.get("key"), Some(&"value"));
    /// # });
    /// ```
    pub async fn lock_async_write(&self) -> WriteGuard<'_, T> {
        self.raw.write_lock_async().await;
        WriteGuard { lock: self }
    }

    /// Runs `f` with exclusive access to the data, holding the write lock for the call.
    ///
    /// ```
    /// use rw_timed_lock::RwLock;
    ///
    /// let rwlock = RwLock::new(vec![1, 2, 3]);
    /// let new_len = rwlock.with_mut_sync(|data| {
    ///     data.push(4);
    ///     data.len()
    /// });
    /// assert_eq!(new_len, 4);
    /// ```
    pub fn with_mut_sync<R, F: FnOnce(&mut T) -> R>(&self, f: F) -> R {
        let mut guard = self.lock_sync_write();
        f(&mut guard)
    }

    /// Runs `f` with exclusive access to the data, acquiring the write lock asynchronously.
    pub async fn with_mut_async<R, F: FnOnce(&mut T) -> R>(&self, f: F) -> R {
        let mut guard = self.lock_async_write().await;
        f(&mut guard)
    }
}
