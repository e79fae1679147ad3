// SPDX-License-Identifier: MIT OR Apache-2.0
use super::{Instant, WakeGate};
use std::thread;

impl WakeGate {
    /// Adds the current thread to the waiter list unless the gate already fired.
    ///
    /// Returns `false` if the gate had fired, in which case nothing was registered.
    fn register_current_thread(&self) -> bool {
        self.waiting_sync_threads.with_mut(|threads| {
            if self.is_fired() {
                false
            } else {
                threads.push(thread::current());
                true
            }
        })
    }

    /// Parks the current thread until the gate fires.
    ///
    /// Will panic on WASM without `Atomics.wait`; use
    /// [`wait_sync`](Self::wait_sync) there.
    pub(crate) fn wait_block(&self) {
        if !self.register_current_thread() {
            return;
        }
        // park may return spuriously
        while !self.is_fired() {
            thread::park();
        }
    }

    /// Parks the current thread until the gate fires or `deadline` passes.
    ///
    /// Returns `true` if the gate fired.
    pub(crate) fn wait_block_until(&self, deadline: Instant) -> bool {
        if !self.register_current_thread() {
            return true;
        }
        loop {
            if self.is_fired() {
                return true;
            }
            let now = Instant::now();
            if now >= deadline {
                // Leave the list so a later fire does not unpark a thread that moved on.
                let current = thread::current().id();
                self.waiting_sync_threads
                    .with_mut(|threads| threads.retain(|t| t.id() != current));
                return self.is_fired();
            }
            thread::park_timeout(deadline - now);
        }
    }
}
