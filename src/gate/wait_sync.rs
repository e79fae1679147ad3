// SPDX-License-Identifier: MIT OR Apache-2.0
use super::{Instant, WakeGate};

#[cfg(target_arch = "wasm32")]
use super::atomics_wait_supported;

impl WakeGate {
    /// Waits for the gate to fire, choosing the waiting strategy per platform.
    ///
    /// - **Native**: parks the thread
    /// - **WASM with `Atomics.wait`**: parks the thread
    /// - **WASM without `Atomics.wait`**: spins
    pub(crate) fn wait_sync(&self) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.wait_block()
        }
        #[cfg(target_arch = "wasm32")]
        {
            if atomics_wait_supported() {
                self.wait_block()
            } else {
                self.wait_spin()
            }
        }
    }

    /// Waits for the gate to fire or `deadline` to pass, choosing the waiting
    /// strategy per platform.
    ///
    /// Returns `true` if the gate fired.
    pub(crate) fn wait_sync_until(&self, deadline: Instant) -> bool {
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.wait_block_until(deadline)
        }
        #[cfg(target_arch = "wasm32")]
        {
            if atomics_wait_supported() {
                self.wait_block_until(deadline)
            } else {
                self.wait_spin_until(deadline)
            }
        }
    }
}
