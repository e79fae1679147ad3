// SPDX-License-Identifier: MIT OR Apache-2.0
use super::WakeGate;

impl WakeGate {
    /// Resolves once the gate fires.
    ///
    /// Never blocks the thread, so it works everywhere, including the WASM
    /// main thread.
    pub(crate) async fn wait_async(&self) {
        let receiver = self.waiting_async_threads.with_mut(|senders| {
            if self.is_fired() {
                None
            } else {
                let (sender, receiver) = r#continue::continuation();
                senders.push(sender);
                Some(receiver)
            }
        });
        if let Some(receiver) = receiver {
            receiver.await;
        }
    }
}
