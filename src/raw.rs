// SPDX-License-Identifier: MIT OR Apache-2.0
//! The raw reader-writer lock with bounded-time acquisition.
//!
//! [`RwTimedLock`] protects no data of its own: callers pair each successful
//! acquisition with the matching unlock call. For RAII guards around a value,
//! use [`RwLock`](crate::RwLock), or plug this type into
//! [`lock_api::RwLock`] through its [`lock_api::RawRwLock`] implementation.
//!
//! # State
//!
//! The whole lock is one signed integer:
//!
//! | value | meaning |
//! |-------|---------|
//! | `0` | unlocked |
//! | `-1` | write-locked |
//! | `n > 0` | read-locked by `n` readers |
//!
//! Writers move it between `0` and `-1` with compare-and-swap; readers move it
//! between `n` and `n + 1`. It never jumps from `-1` to a positive count or
//! back without passing through `0`.
//!
//! # Waiting
//!
//! A thread that fails to acquire snapshots the lock's current
//! wake gate and waits for it to fire. Write unlocks, and read
//! unlocks that release the last reader, swap in a fresh gate and fire the old
//! one, so every waiter retries. The lock is unfair: whichever thread wins the
//! compare-and-swap first gets the lock, regardless of how long others waited.

use crate::gate::WakeGate;
use crate::spinlock::Spinlock;
use crate::timeout::{Instant, Timeout};
use log::{debug, trace};
use std::sync::Arc;
use std::sync::atomic::AtomicI32;
use std::sync::atomic::Ordering::{Acquire, Relaxed, Release};

mod lock_api_impl;


pub(crate) const UNLOCKED: i32 = 0;
pub(crate) const LOCKED_WRITE: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Read,
    Write,
}

/// A reader-writer lock whose acquisitions can give up after a timeout.
///
/// Any number of readers may hold the lock at once; a writer holds it alone.
/// Every acquisition comes in a bounded form ([`try_write`](Self::try_write),
/// [`try_read`](Self::try_read)) taking a [`Timeout`], and an unbounded form
/// ([`write_lock`](Self::write_lock), [`read_lock`](Self::read_lock)).
///
/// Unlocking a lock that is not held in the matching mode is a bug in the
/// caller and panics with `"write-unlock failed"` or `"read-unlock failed"`.
/// The lock does not track owners, so it cannot tell which thread unlocks it,
/// and it is not re-entrant: a thread that holds the write lock and calls
/// [`write_lock`](Self::write_lock) again deadlocks.
///
/// # Examples
///
/// ```
/// use rw_timed_lock::RwTimedLock;
/// use std::time::Duration;
///
/// let lock = RwTimedLock::new();
///
/// lock.write_lock();
/// // a second writer gives up after 10ms
/// assert!(!lock.try_write(Duration::from_millis(10)));
/// lock.write_unlock();
///
/// // readers share the lock
/// lock.read_lock();
/// assert!(lock.try_read(Duration::ZERO));
/// assert_eq!(lock.reader_count(), 2);
/// lock.read_unlock();
/// lock.read_unlock();
/// ```
///
/// ## Waking a waiting writer
///
/// ```
/// # // std::thread::spawn panics on wasm32
/// # if cfg!(target_arch = "wasm32") { return; }
/// use rw_timed_lock::RwTimedLock;
/// use std::sync::Arc;
/// use std::thread;
/// use std::time::Duration;
///
/// let lock = Arc::new(RwTimedLock::new());
/// lock.write_lock();
///
/// let lock_clone = Arc::clone(&lock);
/// let unlocker = thread::spawn(move || {
///     thread::sleep(Duration::from_millis(50));
///     lock_clone.write_unlock();
/// });
///
/// assert!(lock.try_write(Duration::from_secs(5)));
/// lock.write_unlock();
/// unlocker.join().unwrap();
/// ```
#[derive(Debug)]
pub struct RwTimedLock {
    state: AtomicI32,
    // `None` stands for a fresh, unfired gate that nobody has observed yet.
    gate: Spinlock<Option<Arc<WakeGate>>>,
}

impl Default for RwTimedLock {
    fn default() -> Self {
        RwTimedLock::new()
    }
}

impl RwTimedLock {
    /// Creates a new, unlocked lock.
    ///
    /// ```
    /// use rw_timed_lock::RwTimedLock;
    ///
    /// static LOCK: RwTimedLock = RwTimedLock::new();
    /// assert!(!LOCK.is_locked());
    /// ```
    pub const fn new() -> Self {
        RwTimedLock {
            state: AtomicI32::new(UNLOCKED),
            gate: Spinlock::new(None),
        }
    }

    // ============================================================================================
    // Acquisition
    // ============================================================================================

    /// Attempts to acquire the write lock, waiting at most `timeout`.
    ///
    /// Returns `true` if the lock was acquired. A zero timeout tries exactly
    /// once; [`Timeout::Unbounded`] waits until the lock is acquired.
    ///
    /// ```
    /// use rw_timed_lock::{RwTimedLock, Timeout};
    /// use std::time::Duration;
    ///
    /// let lock = RwTimedLock::new();
    /// assert!(lock.try_write(Timeout::IMMEDIATE));
    /// assert!(!lock.try_write(Timeout::IMMEDIATE));
    /// assert!(!lock.try_write(Duration::from_millis(10)));
    /// lock.write_unlock();
    /// ```
    pub fn try_write(&self, timeout: impl Into<Timeout>) -> bool {
        let deadline = timeout.into().deadline_from(Instant::now());
        self.acquire(Mode::Write, deadline)
    }

    /// Attempts to acquire a read lock, waiting at most `timeout`.
    ///
    /// Returns `true` if the lock was acquired. Only a writer keeps readers out.
    ///
    /// ```
    /// use rw_timed_lock::{RwTimedLock, Timeout};
    /// use std::time::Duration;
    ///
    /// let lock = RwTimedLock::new();
    /// assert!(lock.try_read(Timeout::IMMEDIATE));
    /// assert!(lock.try_read(Duration::from_millis(10)));
    /// assert!(!lock.try_write(Timeout::IMMEDIATE));
    /// lock.read_unlock();
    /// lock.read_unlock();
    /// ```
    pub fn try_read(&self, timeout: impl Into<Timeout>) -> bool {
        let deadline = timeout.into().deadline_from(Instant::now());
        self.acquire(Mode::Read, deadline)
    }

    /// Attempts to acquire the write lock before `deadline`.
    ///
    /// A deadline in the past still makes one attempt.
    pub fn try_write_until(&self, deadline: Instant) -> bool {
        self.acquire(Mode::Write, Some(deadline))
    }

    /// Attempts to acquire a read lock before `deadline`.
    ///
    /// A deadline in the past still makes one attempt.
    pub fn try_read_until(&self, deadline: Instant) -> bool {
        self.acquire(Mode::Read, Some(deadline))
    }

    /// Acquires the write lock, blocking until it is available.
    pub fn write_lock(&self) {
        self.acquire(Mode::Write, None);
    }

    /// Acquires a read lock, blocking while a writer holds the lock.
    pub fn read_lock(&self) {
        self.acquire(Mode::Read, None);
    }

    /// Acquires the write lock without blocking the thread.
    ///
    /// ```
    /// # test_executors::spin_on(async {
    /// use rw_timed_lock::RwTimedLock;
    ///
    /// let lock = RwTimedLock::new();
    /// lock.write_lock_async().await;
    /// assert!(lock.is_locked_exclusive());
    /// lock.write_unlock();
    /// # });
    /// ```
    pub async fn write_lock_async(&self) {
        self.acquire_async(Mode::Write).await
    }

    /// Acquires a read lock without blocking the thread.
    pub async fn read_lock_async(&self) {
        self.acquire_async(Mode::Read).await
    }

    fn try_acquire(&self, mode: Mode) -> bool {
        match mode {
            Mode::Write => self
                .state
                .compare_exchange(UNLOCKED, LOCKED_WRITE, Acquire, Relaxed)
                .is_ok(),
            Mode::Read => {
                let readers = self.state.load(Relaxed);
                if readers < 0 {
                    return false;
                }
                assert!(readers < i32::MAX, "Too many readers");
                self.state
                    .compare_exchange(readers, readers + 1, Acquire, Relaxed)
                    .is_ok()
            }
        }
    }

    /// Takes a read lock unless a writer holds it, retrying when another
    /// reader's increment wins the race.
    pub(crate) fn try_read_uncontended(&self) -> bool {
        self.state
            .fetch_update(Acquire, Relaxed, |readers| {
                if readers < 0 {
                    return None;
                }
                assert!(readers < i32::MAX, "Too many readers");
                Some(readers + 1)
            })
            .is_ok()
    }

    fn is_acquirable(&self, mode: Mode) -> bool {
        let state = self.state.load(Relaxed);
        match mode {
            Mode::Write => state == UNLOCKED,
            Mode::Read => state >= 0,
        }
    }

    /// The gate the next unlock will fire.
    fn current_gate(&self) -> Arc<WakeGate> {
        self.gate.with_mut(|gate| {
            Arc::clone(gate.get_or_insert_with(|| Arc::new(WakeGate::new())))
        })
    }

    /// Snapshots the current gate, or `None` if the lock became acquirable
    /// since the failed attempt and the caller should retry at once.
    ///
    /// An unlock that finished before the snapshot already swapped its gate
    /// out, so its wakeup would be lost; the state re-check catches exactly
    /// that case.
    fn gate_to_wait_on(&self, mode: Mode) -> Option<Arc<WakeGate>> {
        let gate = self.current_gate();
        if self.is_acquirable(mode) {
            None
        } else {
            Some(gate)
        }
    }

    fn acquire(&self, mode: Mode, deadline: Option<Instant>) -> bool {
        loop {
            if self.try_acquire(mode) {
                return true;
            }
            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                debug!("{mode:?} lock timed out");
                return false;
            }
            let Some(gate) = self.gate_to_wait_on(mode) else {
                continue;
            };
            match deadline {
                None => gate.wait_sync(),
                Some(deadline) => {
                    if !gate.wait_sync_until(deadline) {
                        debug!("{mode:?} lock timed out");
                        return false;
                    }
                }
            }
            trace!("{mode:?} lock woken, retrying");
        }
    }

    async fn acquire_async(&self, mode: Mode) {
        loop {
            if self.try_acquire(mode) {
                return;
            }
            if let Some(gate) = self.gate_to_wait_on(mode) {
                gate.wait_async().await;
                trace!("{mode:?} lock woken, retrying");
            }
        }
    }

    // ============================================================================================
    // Release
    // ============================================================================================

    /// Releases the write lock.
    ///
    /// # Panics
    ///
    /// Panics with `"write-unlock failed"` if the lock is not write-locked.
    ///
    /// ```should_panic
    /// use rw_timed_lock::RwTimedLock;
    ///
    /// let lock = RwTimedLock::new();
    /// lock.write_lock();
    /// lock.write_unlock();
    /// lock.write_unlock(); // panics
    /// ```
    pub fn write_unlock(&self) {
        if let Err(state) =
            self.state
                .compare_exchange(LOCKED_WRITE, UNLOCKED, Release, Relaxed)
        {
            panic!("write-unlock failed: lock is not write-locked (state {state})");
        }
        self.wake_waiters();
    }

    /// Releases one read lock.
    ///
    /// Waiters are woken only when the last reader leaves; while other readers
    /// remain, nobody blocked on the lock can get in.
    ///
    /// # Panics
    ///
    /// Panics with `"read-unlock failed"` if no read lock is held, including
    /// when the lock is write-locked. The state is left untouched.
    ///
    /// ```should_panic
    /// use rw_timed_lock::RwTimedLock;
    ///
    /// let lock = RwTimedLock::new();
    /// lock.write_lock();
    /// lock.read_unlock(); // panics
    /// ```
    pub fn read_unlock(&self) {
        let previous = self
            .state
            .fetch_update(Release, Relaxed, |readers| {
                (readers > 0).then(|| readers - 1)
            })
            .unwrap_or_else(|state| {
                panic!("read-unlock failed: lock is not read-locked (state {state})")
            });
        if previous == 1 {
            self.wake_waiters();
        }
    }

    /// Swaps a fresh gate in and fires the one waiters have been watching.
    fn wake_waiters(&self) {
        let old = self.gate.with_mut(Option::take);
        if let Some(old) = old {
            let woken = old.fire();
            trace!("woke {woken} waiter(s)");
        }
    }

    // ============================================================================================
    // Inspection
    // ============================================================================================

    /// Whether the lock is held in either mode.
    ///
    /// The answer may be stale by the time it is returned.
    pub fn is_locked(&self) -> bool {
        self.state.load(Relaxed) != UNLOCKED
    }

    /// Whether a writer holds the lock.
    pub fn is_locked_exclusive(&self) -> bool {
        self.state.load(Relaxed) == LOCKED_WRITE
    }

    /// How many readers hold the lock; `0` when unlocked or write-locked.
    pub fn reader_count(&self) -> usize {
        self.state.load(Relaxed).max(0) as usize
    }
}
