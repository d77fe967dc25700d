//! Host platform identification.
//!
//! The resolver only understands a closed set of platform families.  The
//! detector is deliberately minimal: it reads the compile-time OS identifier
//! and tries to parse it into a [`Platform`].  Detection is repeated on every
//! call — it costs nothing and the platform cannot change within a process,
//! so there is no cache to invalidate.

use serde::{Deserialize, Serialize};

/// Returns the host operating system identifier.
///
/// Thin wrapper over [`std::env::consts::OS`] (`"macos"`, `"windows"`,
/// `"linux"`, or another value on less common hosts).  Kept as a function so
/// the dispatcher reads the host environment through one seam.
pub fn current_os() -> &'static str {
    std::env::consts::OS
}

/// A supported host platform family.
///
/// [`Platform::from_os_name`] is the only way to obtain a `Platform` from
/// host data, so an unrecognized host can never be smuggled past the
/// resolver's platform check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
}

impl Platform {
    /// Parses an OS identifier as reported by [`current_os`].
    ///
    /// Returns `None` for anything outside the closed set, including the
    /// empty string.
    pub fn from_os_name(name: &str) -> Option<Self> {
        match name {
            "macos" => Some(Platform::MacOs),
            "windows" => Some(Platform::Windows),
            "linux" => Some(Platform::Linux),
            _ => None,
        }
    }

    /// Returns the platform the current process is running on, if supported.
    pub fn current() -> Option<Self> {
        Self::from_os_name(current_os())
    }

    /// The canonical OS identifier for this platform.
    pub fn os_name(self) -> &'static str {
        match self {
            Platform::MacOs => "macos",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.os_name())
    }
}
