//! Static key-name → key-code tables, one per supported platform.
//!
//! The table of tables is built once on first access and is immutable for the
//! process lifetime, so it is safe for unlimited concurrent read-only access.
//! Lookups go through a real `HashMap` key check: an entry either exists in a
//! platform's table or it does not — there is no fallback or default entry
//! that a lookup could accidentally match.
//!
//! A platform may legitimately carry an empty table (Windows and Linux do
//! today).  An empty table means "platform recognized, no supported keys",
//! which is a different failure than an unrecognized platform.

pub mod darwin;
pub mod linux;
pub mod windows;

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::platform::Platform;

/// Platform-specific integer identifying a special key.
///
/// Values are unique within one platform's table and lie in `[0, N)` for a
/// table of `N` keys.  No uniqueness is guaranteed across platforms.
pub type KeyCode = u16;

static KEY_MAP: Lazy<HashMap<Platform, HashMap<&'static str, KeyCode>>> = Lazy::new(|| {
    HashMap::from([
        (Platform::MacOs, darwin::TABLE.iter().copied().collect()),
        (Platform::Windows, windows::TABLE.iter().copied().collect()),
        (Platform::Linux, linux::TABLE.iter().copied().collect()),
    ])
});

/// Unified read-only facade over the per-platform tables.
pub struct KeyMap;

impl KeyMap {
    /// Looks up `name` in `platform`'s table.
    ///
    /// Returns `None` if the name is not an entry of that exact table; names
    /// known only on other platforms do not match.
    pub fn code_for(platform: Platform, name: &str) -> Option<KeyCode> {
        KEY_MAP.get(&platform).and_then(|table| table.get(name)).copied()
    }

    /// Returns `true` if `name` is an entry of `platform`'s table.
    pub fn contains(platform: Platform, name: &str) -> bool {
        Self::code_for(platform, name).is_some()
    }

    /// Number of keys mapped on `platform`.  Zero is legitimate.
    pub fn key_count(platform: Platform) -> usize {
        KEY_MAP.get(&platform).map_or(0, |table| table.len())
    }

    /// Iterates over the key names mapped on `platform`, in no particular order.
    pub fn names(platform: Platform) -> impl Iterator<Item = &'static str> {
        KEY_MAP.get(&platform).into_iter().flat_map(|table| table.keys().copied())
    }
}
