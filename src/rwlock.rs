// SPDX-License-Identifier: MIT OR Apache-2.0
//! A reader-writer lock around a value, with timeouts on every acquisition.
//!
//! [`RwLock<T>`] pairs an [`RwTimedLock`](crate::RwTimedLock) with the data it
//! protects and hands out RAII guards, so unlocks can never be unbalanced.
//!
//! # Locking strategies
//!
//! - **`try_lock_read/write(timeout)`**: bounded wait, `Err(TimedOut)` when it expires
//! - **`try_lock_read/write_until(deadline)`**: the same with an absolute deadline
//! - **`lock_sync_read/write`**: waits as long as it takes
//! - **`lock_async_read/write`**: awaits without blocking the thread
//!
//! Blocking waits adapt to the platform:
//!
//! - **Native**: thread parking
//! - **WASM with `Atomics.wait`**: thread parking
//! - **WASM without `Atomics.wait`**: spinning (e.g., browser main thread)
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use rw_timed_lock::RwLock;
//!
//! let rwlock = RwLock::new(42);
//!
//! // Multiple readers can access simultaneously
//! let guard1 = rwlock.lock_sync_read();
//! let guard2 = rwlock.lock_sync_read();
//! assert_eq!(*guard1, 42);
//! assert_eq!(*guard2, 42);
//! drop(guard1);
//! drop(guard2);
//!
//! // Writer gets exclusive access
//! let mut guard = rwlock.lock_sync_write();
//! *guard = 100;
//! drop(guard);
//!
//! assert_eq!(*rwlock.lock_sync_read(), 100);
//! ```
//!
//! ## Timeouts
//!
//! ```
//! use rw_timed_lock::{RwLock, TimedOut};
//! use std::time::Duration;
//!
//! let rwlock = RwLock::new("data");
//! let reader = rwlock.lock_sync_read();
//!
//! // Writers give up while a reader is active
//! let result = rwlock.try_lock_write(Duration::from_millis(10));
//! assert!(matches!(result, Err(TimedOut)));
//!
//! drop(reader);
//! assert!(rwlock.try_lock_write(Duration::from_millis(10)).is_ok());
//! ```
//!
//! ## Async Usage
//!
//! ```
//! # test_executors::spin_on(async {
//! use rw_timed_lock::RwLock;
//!
//! let rwlock = RwLock::new(vec![1, 2, 3]);
//!
//! let mut guard = rwlock.lock_async_write().await;
//! guard.push(4);
//! drop(guard);
//!
//! let len = rwlock.with_async(|data| data.len()).await;
//! assert_eq!(len, 4);
//! # });
//! ```

mod inner;
mod read;
mod write;

#[cfg(test)]
mod tests;

pub use inner::RwLock;
