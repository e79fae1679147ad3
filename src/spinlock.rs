// SPDX-License-Identifier: MIT OR Apache-2.0
//! A tiny spinlock for the lock's internal bookkeeping.
//!
//! Critical sections guarded by [`Spinlock`] are a handful of instructions long:
//! swapping the current wake gate out of an [`RwTimedLock`](crate::RwTimedLock),
//! or pushing a waiter onto a gate's waiter list. Parking a thread would cost
//! far more than spinning for that long, and spinning works everywhere,
//! including the browser main thread.

use std::cell::UnsafeCell;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering::{Acquire, Relaxed, Release};

/// A spinlock for protecting short-lived critical sections.
///
/// The data is only reachable through [`with_mut`](Spinlock::with_mut), so
/// every access is scoped and the lock is always released.
#[derive(Debug)]
pub(crate) struct Spinlock<T> {
    data: UnsafeCell<T>,
    locked: AtomicBool,
}

/// Releases the spinlock when dropped, including on unwind.
struct Unlock<'a>(&'a AtomicBool);

impl Drop for Unlock<'_> {
    fn drop(&mut self) {
        self.0.store(false, Release);
    }
}

impl<T> Spinlock<T> {
    pub(crate) const fn new(data: T) -> Self {
        Spinlock {
            data: UnsafeCell::new(data),
            locked: AtomicBool::new(false),
        }
    }

    /// Runs `f` with exclusive access to the protected data.
    pub(crate) fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        while self
            .locked
            .compare_exchange_weak(false, true, Acquire, Relaxed)
            .is_err()
        {
            std::hint::spin_loop();
        }
        let _unlock = Unlock(&self.locked);

        // SAFETY: `locked` is held until `_unlock` drops, so no other reference exists.
        unsafe { f(&mut *self.data.get()) }
    }
}

unsafe impl<T: Send> Send for Spinlock<T> {}
unsafe impl<T: Send> Sync for Spinlock<T> {}
