//! Windows special-key table.
//!
//! Intentionally empty: no special keys are mapped on Windows yet, so every
//! lookup on this platform fails with a key-unknown error rather than a
//! platform-unknown one.
// TODO: populate with WM_APPCOMMAND codes (APPCOMMAND_VOLUME_UP, ...) once a
// Windows emitter exists.

use super::KeyCode;

pub(super) const TABLE: &[(&str, KeyCode)] = &[];
