//! Linux special-key table.
//!
//! Intentionally empty, like the Windows table: the platform is recognized,
//! but no key names resolve on it.

use super::KeyCode;

pub(super) const TABLE: &[(&str, KeyCode)] = &[];
