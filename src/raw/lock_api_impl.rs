// SPDX-License-Identifier: MIT OR Apache-2.0
//! [`lock_api`] integration, so [`RwTimedLock`] can back any generic lock wrapper.
//!
//! ```
//! use rw_timed_lock::RwTimedLock;
//! use std::time::Duration;
//!
//! let lock: lock_api::RwLock<RwTimedLock, i32> = lock_api::RwLock::new(1);
//! let guard = lock.write();
//! assert!(lock.try_read_for(Duration::from_millis(5)).is_none());
//! drop(guard);
//! assert_eq!(*lock.try_read_for(Duration::from_millis(5)).unwrap(), 1);
//! ```
use super::{LOCKED_WRITE, RwTimedLock, UNLOCKED};
use crate::timeout::{Instant, Timeout};
use lock_api::{GuardSend, RawRwLock, RawRwLockTimed};
use std::sync::atomic::Ordering::Relaxed;
use std::time::Duration;

unsafe impl RawRwLock for RwTimedLock {
    #[allow(clippy::declare_interior_mutable_const)]
    const INIT: RwTimedLock = RwTimedLock::new();

    // No owner is tracked, so a guard may be released on another thread.
    type GuardMarker = GuardSend;

    fn lock_shared(&self) {
        self.read_lock();
    }

    // Fails only while a writer holds the lock, unlike a single-shot `try_read`.
    fn try_lock_shared(&self) -> bool {
        self.try_read_uncontended()
    }

    unsafe fn unlock_shared(&self) {
        self.read_unlock();
    }

    fn lock_exclusive(&self) {
        self.write_lock();
    }

    fn try_lock_exclusive(&self) -> bool {
        self.try_write(Timeout::IMMEDIATE)
    }

    unsafe fn unlock_exclusive(&self) {
        self.write_unlock();
    }

    fn is_locked(&self) -> bool {
        self.state.load(Relaxed) != UNLOCKED
    }

    fn is_locked_exclusive(&self) -> bool {
        self.state.load(Relaxed) == LOCKED_WRITE
    }
}

unsafe impl RawRwLockTimed for RwTimedLock {
    type Duration = Duration;
    type Instant = Instant;

    fn try_lock_shared_for(&self, timeout: Duration) -> bool {
        self.try_read(timeout)
    }

    fn try_lock_shared_until(&self, timeout: Instant) -> bool {
        self.try_read_until(timeout)
    }

    fn try_lock_exclusive_for(&self, timeout: Duration) -> bool {
        self.try_write(timeout)
    }

    fn try_lock_exclusive_until(&self, timeout: Instant) -> bool {
        self.try_write_until(timeout)
    }
}
