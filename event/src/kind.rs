// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
use core::fmt;

/// The type tag at the start of every event.
///
/// Only the tag decides which payload follows the common prefix. Tags from [`EventType::USER`]
/// through [`EventType::LAST`] are reserved for applications.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(transparent)]
pub struct EventType(u32);

macro_rules! event_types {
    ($($(#[$attr:meta])* $name:ident = $value:literal,)*) => {
        /// Tags as plain integers, usable in patterns.
        #[allow(dead_code)]
        pub(crate) mod tags {
            $(pub const $name: u32 = $value;)*
        }

        impl EventType {
            $($(#[$attr])* pub const $name: Self = EventType($value);)*

            fn table_name(self) -> Option<&'static str> {
                match self.0 {
                    $($value => Some(concat!("SDL_EVENT_", stringify!($name))),)*
                    _ => None,
                }
            }
        }
    };
}

event_types! {
    FIRST = 0,

    /// The user requested to quit.
    QUIT = 0x100,
    TERMINATING = 0x101,
    LOW_MEMORY = 0x102,
    WILL_ENTER_BACKGROUND = 0x103,
    DID_ENTER_BACKGROUND = 0x104,
    WILL_ENTER_FOREGROUND = 0x105,
    DID_ENTER_FOREGROUND = 0x106,
    LOCALE_CHANGED = 0x107,
    SYSTEM_THEME_CHANGED = 0x108,

    DISPLAY_ORIENTATION = 0x151,
    DISPLAY_ADDED = 0x152,
    DISPLAY_REMOVED = 0x153,
    DISPLAY_MOVED = 0x154,
    DISPLAY_DESKTOP_MODE_CHANGED = 0x155,
    DISPLAY_CURRENT_MODE_CHANGED = 0x156,
    DISPLAY_CONTENT_SCALE_CHANGED = 0x157,

    WINDOW_SHOWN = 0x202,
    WINDOW_HIDDEN = 0x203,
    WINDOW_EXPOSED = 0x204,
    WINDOW_MOVED = 0x205,
    WINDOW_RESIZED = 0x206,
    WINDOW_PIXEL_SIZE_CHANGED = 0x207,
    WINDOW_METAL_VIEW_RESIZED = 0x208,
    WINDOW_MINIMIZED = 0x209,
    WINDOW_MAXIMIZED = 0x20a,
    WINDOW_RESTORED = 0x20b,
    WINDOW_MOUSE_ENTER = 0x20c,
    WINDOW_MOUSE_LEAVE = 0x20d,
    WINDOW_FOCUS_GAINED = 0x20e,
    WINDOW_FOCUS_LOST = 0x20f,
    WINDOW_CLOSE_REQUESTED = 0x210,
    WINDOW_HIT_TEST = 0x211,
    WINDOW_ICCPROF_CHANGED = 0x212,
    WINDOW_DISPLAY_CHANGED = 0x213,
    WINDOW_DISPLAY_SCALE_CHANGED = 0x214,
    WINDOW_SAFE_AREA_CHANGED = 0x215,
    WINDOW_OCCLUDED = 0x216,
    WINDOW_ENTER_FULLSCREEN = 0x217,
    WINDOW_LEAVE_FULLSCREEN = 0x218,
    WINDOW_DESTROYED = 0x219,
    WINDOW_HDR_STATE_CHANGED = 0x21a,

    KEY_DOWN = 0x300,
    KEY_UP = 0x301,
    TEXT_EDITING = 0x302,
    TEXT_INPUT = 0x303,
    KEYMAP_CHANGED = 0x304,
    KEYBOARD_ADDED = 0x305,
    KEYBOARD_REMOVED = 0x306,
    TEXT_EDITING_CANDIDATES = 0x307,

    MOUSE_MOTION = 0x400,
    MOUSE_BUTTON_DOWN = 0x401,
    MOUSE_BUTTON_UP = 0x402,
    MOUSE_WHEEL = 0x403,
    MOUSE_ADDED = 0x404,
    MOUSE_REMOVED = 0x405,

    JOYSTICK_AXIS_MOTION = 0x600,
    JOYSTICK_BALL_MOTION = 0x601,
    JOYSTICK_HAT_MOTION = 0x602,
    JOYSTICK_BUTTON_DOWN = 0x603,
    JOYSTICK_BUTTON_UP = 0x604,
    JOYSTICK_ADDED = 0x605,
    JOYSTICK_REMOVED = 0x606,
    JOYSTICK_BATTERY_UPDATED = 0x607,
    JOYSTICK_UPDATE_COMPLETE = 0x608,

    GAMEPAD_AXIS_MOTION = 0x650,
    GAMEPAD_BUTTON_DOWN = 0x651,
    GAMEPAD_BUTTON_UP = 0x652,
    GAMEPAD_ADDED = 0x653,
    GAMEPAD_REMOVED = 0x654,
    GAMEPAD_REMAPPED = 0x655,
    GAMEPAD_TOUCHPAD_DOWN = 0x656,
    GAMEPAD_TOUCHPAD_MOTION = 0x657,
    GAMEPAD_TOUCHPAD_UP = 0x658,
    GAMEPAD_SENSOR_UPDATE = 0x659,
    GAMEPAD_UPDATE_COMPLETE = 0x65a,
    GAMEPAD_STEAM_HANDLE_UPDATED = 0x65b,

    FINGER_DOWN = 0x700,
    FINGER_UP = 0x701,
    FINGER_MOTION = 0x702,

    CLIPBOARD_UPDATE = 0x900,

    DROP_FILE = 0x1000,
    DROP_TEXT = 0x1001,
    DROP_BEGIN = 0x1002,
    DROP_COMPLETE = 0x1003,
    DROP_POSITION = 0x1004,

    AUDIO_DEVICE_ADDED = 0x1100,
    AUDIO_DEVICE_REMOVED = 0x1101,
    AUDIO_DEVICE_FORMAT_CHANGED = 0x1102,

    SENSOR_UPDATE = 0x1200,

    PEN_DOWN = 0x1300,
    PEN_UP = 0x1301,
    PEN_MOTION = 0x1302,
    PEN_BUTTON_DOWN = 0x1303,
    PEN_BUTTON_UP = 0x1304,

    CAMERA_DEVICE_ADDED = 0x1400,
    CAMERA_DEVICE_REMOVED = 0x1401,
    CAMERA_DEVICE_APPROVED = 0x1402,
    CAMERA_DEVICE_DENIED = 0x1403,

    RENDER_TARGETS_RESET = 0x2000,
    RENDER_DEVICE_RESET = 0x2001,
    RENDER_DEVICE_LOST = 0x2002,

    /// The first application defined tag.
    USER = 0x8000,
    /// The last tag of the application range.
    LAST = 0xffff,
}

impl EventType {
    pub const fn from_raw(raw: u32) -> Self {
        EventType(raw)
    }

    pub const fn to_raw(self) -> u32 {
        self.0
    }

    /// The `n`-th application defined tag, `None` past [`EventType::LAST`].
    pub const fn user(n: u32) -> Option<Self> {
        match n.checked_add(tags::USER) {
            Some(raw) if raw <= tags::LAST => Some(EventType(raw)),
            _ => None,
        }
    }

    /// Whether this tag is from the application range.
    pub const fn is_user(self) -> bool {
        self.0 >= tags::USER && self.0 <= tags::LAST
    }

    /// The name of the constant of this tag.
    ///
    /// Application tags share the name of [`EventType::USER`].
    pub fn name(self) -> Option<&'static str> {
        if self.is_user() {
            return Some("SDL_EVENT_USER");
        }

        self.table_name()
    }
}

impl From<EventType> for u32 {
    fn from(ty: EventType) -> u32 {
        ty.0
    }
}

impl From<u32> for EventType {
    fn from(raw: u32) -> Self {
        EventType(raw)
    }
}

impl fmt::Debug for EventType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.name() {
            Some(name) if self.0 > tags::USER && self.is_user() => {
                write!(f, "{}+{}", name, self.0 - tags::USER)
            }
            Some(name) => f.write_str(name),
            None => f
                .debug_tuple("EventType")
                .field(&format_args!("{:#x}", self.0))
                .finish(),
        }
    }
}
