//! Mock key emitter for unit testing.
//!
//! The real emitter posts events into the OS input stream, which requires a
//! desktop session and actually toggles things like volume and brightness on
//! the test machine.  The `MockKeyEmitter` replaces the OS call with
//! in-memory recording: every dispatched code is pushed into a
//! `Mutex<Vec<KeyCode>>` so assertions can inspect exactly what was emitted
//! and in what order.
//!
//! # `should_fail` flag
//!
//! Set `should_fail = true` before wrapping the mock in an `Arc` to simulate
//! a native layer that does not echo the requested code.  The call is still
//! recorded, so tests can assert both that the emitter was invoked and that
//! the dispatch was reported as a mismatch.

use std::sync::Mutex;

use specialkey_core::KeyCode;

use crate::application::trigger_key::KeyEmitter;

/// A mock emitter that records all calls without touching the OS.
#[derive(Default)]
pub struct MockKeyEmitter {
    /// Records each code passed to `emit`, in call order.
    pub emitted: Mutex<Vec<KeyCode>>,
    /// When `true`, `emit` returns a value that cannot equal the requested
    /// code, which the use case treats as an emission failure.
    pub should_fail: bool,
}

impl MockKeyEmitter {
    /// Creates a new `MockKeyEmitter` with an empty record and `should_fail = false`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyEmitter for MockKeyEmitter {
    /// Records the code, then echoes it — or returns a non-echo value if
    /// `should_fail` is set.
    fn emit(&self, code: KeyCode) -> KeyCode {
        self.emitted.lock().unwrap().push(code);
        if self.should_fail {
            return KeyCode::MAX;
        }
        code
    }
}
