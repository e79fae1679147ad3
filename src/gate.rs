// SPDX-License-Identifier: MIT OR Apache-2.0
//! The wake gate: a one-shot, multi-observer broadcast signal.
//!
//! An [`RwTimedLock`](crate::RwTimedLock) has no condition variable with a
//! timed wait. Instead, a thread that fails to acquire the lock takes a
//! snapshot of the lock's *current* gate and waits for it to fire. Every
//! unlock that can let a waiter in swaps a fresh gate into the lock and then
//! fires the old one, waking everybody who was watching it.
//!
//! A gate starts unfired and fires at most once. After it has fired, every
//! past, present and future observer sees it as fired immediately.
//!
//! Like the lock itself, waiting adapts to the platform:
//!
//! - **Native**: parks the thread
//! - **WASM with `Atomics.wait`**: parks the thread
//! - **WASM without `Atomics.wait`**: spins (e.g., browser main thread)
//! - **Async**: awaits a continuation, works everywhere

use crate::spinlock::Spinlock;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering::Acquire;
use std::thread;

pub(crate) use crate::timeout::Instant;

#[cfg(target_arch = "wasm32")]
pub(crate) use crate::wasm_support::atomics_wait_supported;

#[derive(Debug)]
pub(crate) struct WakeGate {
    fired: AtomicBool,
    waiting_sync_threads: Spinlock<Vec<thread::Thread>>,
    waiting_async_threads: Spinlock<Vec<r#continue::Sender<()>>>,
}

impl WakeGate {
    pub(crate) const fn new() -> Self {
        WakeGate {
            fired: AtomicBool::new(false),
            waiting_sync_threads: Spinlock::new(vec![]),
            waiting_async_threads: Spinlock::new(vec![]),
        }
    }

    pub(crate) fn is_fired(&self) -> bool {
        self.fired.load(Acquire)
    }

    #[cfg(test)]
    pub(crate) fn async_waiter_count(&self) -> usize {
        self.waiting_async_threads.with_mut(|senders| senders.len())
    }
}

impl Drop for WakeGate {
    fn drop(&mut self) {
        // an abandoned async waiter may still be registered on an unfired gate
        let senders = self.waiting_async_threads.with_mut(std::mem::take);
        for sender in senders {
            sender.send(());
        }
    }
}

mod fire;
mod wait_async;
mod wait_block;
mod wait_spin;
mod wait_sync;
