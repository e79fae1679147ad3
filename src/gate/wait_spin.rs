// SPDX-License-Identifier: MIT OR Apache-2.0
//! Spinning waits, for threads that are not allowed to block.
use super::{Instant, WakeGate};

// Native targets always park; the spinning paths are chosen only on wasm.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
impl WakeGate {
    /// Spins until the gate fires.
    pub(crate) fn wait_spin(&self) {
        while !self.is_fired() {
            std::hint::spin_loop();
        }
    }

    /// Spins until the gate fires or `deadline` passes.
    ///
    /// Returns `true` if the gate fired.
    pub(crate) fn wait_spin_until(&self, deadline: Instant) -> bool {
        loop {
            if self.is_fired() {
                return true;
            }
            if Instant::now() >= deadline {
                return self.is_fired();
            }
            std::hint::spin_loop();
        }
    }
}
