//! Platform-specific special-key emitters.
//!
//! The native implementation is selected at compile time via
//! `#[cfg(target_os = ...)]`.  Only macOS has a native emitter today — it is
//! also the only platform with a non-empty key table, so on every other
//! platform resolution fails before emission is ever attempted.

pub mod mock;

#[cfg(target_os = "macos")]
pub mod macos;

use std::sync::Arc;

use specialkey_core::KeyCode;

use crate::application::trigger_key::KeyEmitter;

/// Emitter for platforms without a native special-key facility.
///
/// Unreachable through [`crate::TriggerKeyUseCase`] (the empty key table
/// stops every dispatch at resolution).  If driven directly, the returned
/// value never equals a table code, so the dispatch is reported as an
/// emission mismatch rather than a silent success.
pub struct UnsupportedKeyEmitter;

impl KeyEmitter for UnsupportedKeyEmitter {
    fn emit(&self, _code: KeyCode) -> KeyCode {
        KeyCode::MAX
    }
}

/// Returns the native emitter for the platform this binary was built for.
#[cfg(target_os = "macos")]
pub fn platform_emitter() -> Arc<dyn KeyEmitter> {
    Arc::new(macos::MacosKeyEmitter::new())
}

/// Returns the native emitter for the platform this binary was built for.
#[cfg(not(target_os = "macos"))]
pub fn platform_emitter() -> Arc<dyn KeyEmitter> {
    Arc::new(UnsupportedKeyEmitter)
}
