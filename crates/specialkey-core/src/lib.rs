//! # specialkey-core
//!
//! Shared library for the special-key emulator containing platform
//! identification, the static key-name tables, and the resolver that turns a
//! caller-supplied key name into a platform-specific key code.
//!
//! This crate is pure lookup logic: it has zero dependencies on OS APIs.
//! Asking the operating system to actually dispatch the resolved key event is
//! the job of the `specialkey-emulator` crate.
//!
//! # What is a special key? (for beginners)
//!
//! A *special key* (or *media key*) is a keyboard event outside the standard
//! character set that controls a system-level function: volume up/down, mute,
//! play/pause, display brightness, keyboard illumination, eject.  Each
//! platform identifies these keys by its own numeric code — on macOS they are
//! the `NX_KEYTYPE_*` constants from IOKit's `ev_keymap.h` (for example
//! `NX_KEYTYPE_SOUND_UP` is code 0).
//!
//! This crate defines:
//!
//! - **`platform`** – A closed set of supported host platforms and the
//!   detector that reads the current one from the build environment.
//!
//! - **`keymap`** – The immutable, process-wide table mapping each platform
//!   to its key-name → key-code entries.
//!
//! - **`resolve`** – The validation chain that checks a caller-supplied value
//!   (which may be missing or not even a string) against the table and
//!   produces either a key code or a typed failure.

pub mod keymap;
pub mod platform;
pub mod resolve;

// Re-export the most-used items at the crate root so callers can write
// `specialkey_core::resolve_key` instead of `specialkey_core::resolve::resolve_key`.
pub use keymap::{KeyCode, KeyMap};
pub use platform::{current_os, Platform};
pub use resolve::{resolve_key, ResolveError};
