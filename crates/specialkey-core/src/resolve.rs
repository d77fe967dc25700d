//! Key-name resolution: caller-supplied value in, platform key code out.
//!
//! Callers hand the emulator whatever they happen to hold — possibly nothing,
//! possibly a number — so the name argument is a [`serde_json::Value`] rather
//! than a `&str`, and the resolver owns the full validation chain.  The four
//! checks run in a fixed order and short-circuit on the first failure:
//!
//! 1. the name is present (`Value::Null` is the absent sentinel),
//! 2. the name is a string,
//! 3. the platform identifier is recognized,
//! 4. the name is an entry of that platform's table.
//!
//! Each failure is reported twice: as a [`ResolveError`] variant carrying the
//! offending value (the primary channel callers branch on), and as one
//! `tracing` diagnostic line.  The log line never changes the outcome.

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::keymap::{KeyCode, KeyMap};
use crate::platform::Platform;

/// Why a key name failed to resolve.
#[derive(Debug, Error, PartialEq)]
pub enum ResolveError {
    /// No key name was supplied.
    #[error("key name required")]
    NameMissing,

    /// A key name was supplied but it is not a string.
    #[error("key name is not a string: {0}")]
    NameNotString(Value),

    /// The host platform is not in the key map.
    #[error("platform unknown: {0:?}")]
    PlatformUnknown(String),

    /// The name is not an entry of the resolved platform's table.
    #[error("key unknown: {0:?}")]
    KeyUnknown(String),
}

/// Resolves `name` to the key code registered for it on `os_name`.
///
/// `os_name` is the raw host identifier (see [`crate::platform::current_os`]);
/// it is parsed here, after the name checks, so the validation order is the
/// same no matter which argument is bad.
///
/// # Errors
///
/// Returns the first failing check as a [`ResolveError`].
pub fn resolve_key(name: &Value, os_name: &str) -> Result<KeyCode, ResolveError> {
    if name.is_null() {
        warn!("key name required");
        return Err(ResolveError::NameMissing);
    }

    let Value::String(name) = name else {
        warn!("key name is not a string: {name}");
        return Err(ResolveError::NameNotString(name.clone()));
    };

    let Some(platform) = Platform::from_os_name(os_name) else {
        warn!("platform unknown: {os_name:?}");
        return Err(ResolveError::PlatformUnknown(os_name.to_owned()));
    };

    match KeyMap::code_for(platform, name) {
        Some(code) => Ok(code),
        None => {
            warn!("key unknown on {platform}: {name:?}");
            Err(ResolveError::KeyUnknown(name.clone()))
        }
    }
}
