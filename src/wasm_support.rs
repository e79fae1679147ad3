// SPDX-License-Identifier: MIT OR Apache-2.0
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
export function _rwtl_canBlock() {
    if (typeof SharedArrayBuffer === 'undefined') return false;
    if (typeof Atomics === 'undefined' || typeof Atomics.wait !== 'function') return false;

    try {
        const ia = new Int32Array(new SharedArrayBuffer(4));
        const result = Atomics.wait(ia, 0, 0, 0);
        return result === 'timed-out' || result === 'not-equal';
    } catch (_) {
        return false;
    }
}
")]
extern "C" {
    fn _rwtl_canBlock() -> bool;
}

/// Whether the current thread may block in `Atomics.wait`.
///
/// The browser main thread throws on `Atomics.wait`, so waiters there spin.
pub(crate) fn atomics_wait_supported() -> bool {
    _rwtl_canBlock()
}
