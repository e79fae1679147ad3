// SPDX-License-Identifier: MIT OR Apache-2.0
//! A reader-writer lock whose acquisitions can time out, for native and WebAssembly targets.
//!
//! Standard locks offer "try once" or "wait forever". This crate adds the
//! middle ground: wait for the lock, but give up after a caller-supplied
//! timeout, in both shared (read) and exclusive (write) mode.
//!
//! - [`RwTimedLock`] is the raw lock: `try_write(timeout) -> bool`,
//!   `try_read(timeout) -> bool`, blocking `write_lock`/`read_lock` and explicit
//!   `write_unlock`/`read_unlock`. It also implements
//!   [`lock_api::RawRwLock`] and [`lock_api::RawRwLockTimed`].
//! - [`RwLock<T>`] wraps a value and hands out [`ReadGuard`]s and
//!   [`WriteGuard`]s that unlock when dropped.
//!
//! # Timeouts
//!
//! A [`Timeout`] is either [`Timeout::Unbounded`] or a [`Duration`](std::time::Duration).
//! A zero duration makes exactly one attempt. Durations convert into
//! `Timeout` implicitly.
//!
//! ```
//! use rw_timed_lock::RwTimedLock;
//! use std::time::Duration;
//!
//! let lock = RwTimedLock::new();
//! lock.write_lock();
//! assert!(!lock.try_write(Duration::ZERO));
//! assert!(!lock.try_read(Duration::from_millis(10)));
//! lock.write_unlock();
//! assert!(lock.try_write(Duration::ZERO));
//! lock.write_unlock();
//! ```
//!
//! # Misuse
//!
//! Unlocking a raw lock that is not held in that mode panics, with
//! `"write-unlock failed"` or `"read-unlock failed"`. Continuing would let two
//! writers in at once, so this is never reported as an error value.
//!
//! # Fairness
//!
//! None. Whoever wins the race after an unlock gets the lock; a steady stream
//! of readers can keep a writer out until its timeout expires.

mod error;
mod gate;
mod guard;
mod raw;
pub mod rwlock;
mod spinlock;
mod timeout;
#[cfg(target_arch = "wasm32")]
mod wasm_support;

pub use error::TimedOut;
pub use guard::{ReadGuard, WriteGuard};
pub use raw::RwTimedLock;
pub use rwlock::RwLock;
pub use timeout::{Instant, Timeout};
