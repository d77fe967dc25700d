//! TriggerKeyUseCase: resolves a key name and dispatches it to the OS.
//!
//! This use case sits at the application layer and delegates to a
//! [`KeyEmitter`] trait object for the actual OS-level event injection.  The
//! platform-specific implementations are in the infrastructure layer.
//!
//! A dispatch is a straight line: resolve the name, emit the code once, check
//! the echo.  There is no queue, no retry, and no deferred completion — the
//! whole call, including any callback, runs synchronously on the caller's
//! stack.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use specialkey_core::platform::current_os;
use specialkey_core::resolve::{resolve_key, ResolveError};
use specialkey_core::KeyCode;

/// Error type for a key dispatch.
///
/// Every failure keeps its specific category so callers can branch on it;
/// the diagnostic log line carries the same detail for observability.
#[derive(Debug, Error, PartialEq)]
pub enum TriggerError {
    /// The key name did not survive validation; the source says why.
    #[error("mediakey name error: {0}")]
    Resolve(#[from] ResolveError),

    /// The native layer did not echo the requested code, so the emission
    /// outcome cannot be trusted.
    #[error("emission mismatch: requested code {requested}, native layer returned {returned}")]
    EmissionMismatch { requested: KeyCode, returned: KeyCode },
}

/// Platform-native special-key emission capability.
///
/// Each supported OS provides an implementation in the infrastructure layer.
/// The contract mirrors the native layer underneath: `emit` is called at most
/// once per dispatch, synchronously, and must return the code it actually
/// dispatched.  Returning anything other than `code` marks the emission as
/// failed.
pub trait KeyEmitter: Send + Sync {
    /// Asks the OS to emit the special-key event identified by `code`.
    fn emit(&self, code: KeyCode) -> KeyCode;
}

/// The Trigger Key use case.
///
/// Takes a caller-supplied key name (any [`Value`]; validation happens
/// inside), resolves it against the host platform's table, and dispatches the
/// resolved code through the configured [`KeyEmitter`].
pub struct TriggerKeyUseCase {
    emitter: Arc<dyn KeyEmitter>,
    /// Explicit platform override; `None` means detect the host per call.
    os_name: Option<String>,
}

impl TriggerKeyUseCase {
    /// Creates a use case that resolves against the host platform.
    pub fn new(emitter: Arc<dyn KeyEmitter>) -> Self {
        Self { emitter, os_name: None }
    }

    /// Creates a use case pinned to an explicit platform identifier.
    ///
    /// This is how tests exercise the macOS table from any host; the
    /// identifier is validated on every dispatch like a detected one.
    pub fn for_platform(emitter: Arc<dyn KeyEmitter>, os_name: impl Into<String>) -> Self {
        Self { emitter, os_name: Some(os_name.into()) }
    }

    fn os_name(&self) -> &str {
        // Host detection is repeated per call; only an override is stored.
        self.os_name.as_deref().unwrap_or_else(|| current_os())
    }

    /// Dispatches the special key named by `name`.
    ///
    /// On success the returned code is the one the native layer confirmed.
    ///
    /// # Errors
    ///
    /// [`TriggerError::Resolve`] if the name fails validation (the emitter is
    /// not invoked in that case), or [`TriggerError::EmissionMismatch`] if
    /// the native layer does not echo the requested code.
    pub fn trigger(&self, name: impl Into<Value>) -> Result<KeyCode, TriggerError> {
        let code = resolve_key(&name.into(), self.os_name())?;

        let returned = self.emitter.emit(code);
        if returned != code {
            warn!("native layer returned {returned} for requested code {code}");
            return Err(TriggerError::EmissionMismatch { requested: code, returned });
        }

        Ok(code)
    }

    /// Dispatches `name` and hands the outcome to `callback`.
    ///
    /// The callback is invoked exactly once, synchronously, within this call;
    /// its return value is passed through to the caller.
    pub fn trigger_with_callback<N, F, R>(&self, name: N, callback: F) -> R
    where
        N: Into<Value>,
        F: FnOnce(Result<KeyCode, TriggerError>) -> R,
    {
        callback(self.trigger(name))
    }

    /// Dispatches `name` and discards the outcome.
    ///
    /// The fire-and-forget form: never panics, never returns an error.
    /// Failures are still visible on the diagnostic log path.
    pub fn trigger_detached(&self, name: impl Into<Value>) {
        let _ = self.trigger(name);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
