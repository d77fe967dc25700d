//! macOS special-key table.
//!
//! The `NX_KEYTYPE_*` names and codes come from IOKit's `ev_keymap.h`
//! (`IOHIDFamily/IOHIDSystem/IOKit/hidsystem/ev_keymap.h`).  These are the
//! codes carried in the data word of an `NX_SYSDEFINED` event, not ANSI
//! `kVK_*` key positions.

use super::KeyCode;

/// Every special key supported on macOS, in `ev_keymap.h` order.
pub(super) const TABLE: &[(&str, KeyCode)] = &[
    ("NX_KEYTYPE_SOUND_UP", 0),
    ("NX_KEYTYPE_SOUND_DOWN", 1),
    ("NX_KEYTYPE_BRIGHTNESS_UP", 2),
    ("NX_KEYTYPE_BRIGHTNESS_DOWN", 3),
    ("NX_KEYTYPE_CAPS_LOCK", 4),
    ("NX_KEYTYPE_HELP", 5),
    ("NX_KEYTYPE_POWER_KEY", 6),
    ("NX_KEYTYPE_MUTE", 7),
    ("NX_KEYTYPE_UP_ARROW_KEY", 8),
    ("NX_KEYTYPE_DOWN_ARROW_KEY", 9),
    ("NX_KEYTYPE_NUM_LOCK", 10),
    ("NX_KEYTYPE_CONTRAST_UP", 11),
    ("NX_KEYTYPE_CONTRAST_DOWN", 12),
    ("NX_KEYTYPE_LAUNCH_PANEL", 13),
    ("NX_KEYTYPE_EJECT", 14),
    ("NX_KEYTYPE_VIDMIRROR", 15),
    ("NX_KEYTYPE_PLAY", 16),
    ("NX_KEYTYPE_NEXT", 17),
    ("NX_KEYTYPE_PREVIOUS", 18),
    ("NX_KEYTYPE_FAST", 19),
    ("NX_KEYTYPE_REWIND", 20),
    ("NX_KEYTYPE_ILLUMINATION_UP", 21),
    ("NX_KEYTYPE_ILLUMINATION_DOWN", 22),
    ("NX_KEYTYPE_ILLUMINATION_TOGGLE", 23),
];
