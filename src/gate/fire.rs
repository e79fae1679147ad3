// SPDX-License-Identifier: MIT OR Apache-2.0
use super::WakeGate;
use std::sync::atomic::Ordering::Release;

impl WakeGate {
    /// Fires the gate and wakes every registered waiter.
    ///
    /// The flag is published before the waiter lists are drained, so a waiter
    /// registering concurrently either lands in a drained list or sees the
    /// flag. Firing twice is harmless. Returns how many waiters were woken.
    pub(crate) fn fire(&self) -> usize {
        self.fired.store(true, Release);

        let threads = self.waiting_sync_threads.with_mut(std::mem::take);
        let senders = self.waiting_async_threads.with_mut(std::mem::take);
        let woken = threads.len() + senders.len();

        for thread in threads {
            thread.unpark();
        }
        for sender in senders {
            sender.send(());
        }
        woken
    }
}
