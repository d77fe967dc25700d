//! # specialkey-emulator
//!
//! Public dispatch surface of the special-key emulator: hand it a key name
//! (for example `"NX_KEYTYPE_ILLUMINATION_UP"`) and it asks the operating
//! system to emit the matching synthetic special-key event.
//!
//! The heavy lifting — platform detection, the static key tables, and the
//! validation chain — lives in `specialkey-core`.  This crate adds the two
//! layers around it:
//!
//! - **`application`** – The [`TriggerKeyUseCase`]: resolve the name, invoke
//!   the native emission capability exactly once, and confirm that the
//!   native layer echoed the requested code.  Includes the optional
//!   completion-callback adapter and the fire-and-forget form.
//!
//! - **`infrastructure`** – The [`KeyEmitter`] implementations: a
//!   compile-time-selected native emitter for the host platform and a mock
//!   that records every emission for tests.
//!
//! # Minimal usage
//!
//! ```
//! use specialkey_emulator::{platform_emitter, TriggerKeyUseCase};
//!
//! let emulator = TriggerKeyUseCase::new(platform_emitter());
//! // Fire-and-forget: the outcome is discarded, failures only reach the log.
//! emulator.trigger_detached("NX_KEYTYPE_MUTE");
//! ```

pub mod application;
pub mod infrastructure;

pub use application::trigger_key::{KeyEmitter, TriggerError, TriggerKeyUseCase};
pub use infrastructure::emission::{mock::MockKeyEmitter, platform_emitter};
