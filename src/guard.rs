// SPDX-License-Identifier: MIT OR Apache-2.0
//! Guard types for [`RwLock`].
//!
//! A guard is proof that the lock is held in its mode. Dropping it performs
//! the matching unlock, which is why the guard API can never trigger the raw
//! lock's unbalanced-unlock panics.

use crate::rwlock::RwLock;

/// A guard that provides read-only access to the data protected by an [`RwLock`].
///
/// Created by the read locking methods on [`RwLock`]. Multiple `ReadGuard`s
/// can exist at the same time. When the last one is dropped, waiting writers
/// are woken.
///
/// # Examples
///
/// ```
/// use rw_timed_lock::RwLock;
///
/// let rwlock = RwLock::new(vec![1, 2, 3]);
///
/// {
///     let guard1 = rwlock.lock_sync_read();
///     let guard2 = rwlock.lock_sync_read();
///     assert_eq!(guard1.len(), 3);
///     assert_eq!(guard2[0], 1);
/// } // Both guards dropped, read locks released
///
/// assert!(!rwlock.is_locked());
/// ```
#[derive(Debug)]
#[must_use = "if unused the RwLock will immediately unlock"]
pub struct ReadGuard<'a, T> {
    pub(crate) lock: &'a RwLock<T>,
}

/// A guard that provides exclusive read-write access to the data protected by an [`RwLock`].
///
/// Created by the write locking methods on [`RwLock`]. Only one `WriteGuard`
/// exists at a time for a given lock. Dropping it wakes every waiter.
///
/// # Examples
///
/// ```
/// use rw_timed_lock::RwLock;
///
/// let rwlock = RwLock::new(String::from("hello"));
///
/// {
///     let mut guard = rwlock.lock_sync_write();
///     guard.push_str(", world!");
///     assert_eq!(&*guard, "hello, world!");
/// } // Guard dropped, write lock released
/// ```
#[derive(Debug)]
#[must_use = "if unused the RwLock will immediately unlock"]
pub struct WriteGuard<'a, T> {
    pub(crate) lock: &'a RwLock<T>,
}

impl<T> std::ops::Deref for ReadGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        // SAFETY: a read lock is held, so no writer can exist.
        unsafe { &*self.lock.inner.get() }
    }
}

impl<T> std::ops::Deref for WriteGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        // SAFETY: the write lock is held.
        unsafe { &*self.lock.inner.get() }
    }
}

impl<T> std::ops::DerefMut for WriteGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        // SAFETY: the write lock is held and `&mut self` is unique.
        unsafe { &mut *self.lock.inner.get() }
    }
}

impl<T> Drop for ReadGuard<'_, T> {
    fn drop(&mut self) {
        self.lock.raw.read_unlock();
    }
}

impl<T> Drop for WriteGuard<'_, T> {
    fn drop(&mut self) {
        self.lock.raw.write_unlock();
    }
}

// ================================================================================================
// Boilerplate trait implementations
// ================================================================================================

impl<T> AsRef<T> for ReadGuard<'_, T> {
    fn as_ref(&self) -> &T {
        self
    }
}

impl<T> AsRef<T> for WriteGuard<'_, T> {
    fn as_ref(&self) -> &T {
        self
    }
}

impl<T> AsMut<T> for WriteGuard<'_, T> {
    fn as_mut(&mut self) -> &mut T {
        self
    }
}

impl<T: std::fmt::Display> std::fmt::Display for ReadGuard<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&**self, f)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for WriteGuard<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&**self, f)
    }
}
