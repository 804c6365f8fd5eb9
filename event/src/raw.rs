// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
//! The fixed-size event buffer and the layouts of its payloads.
//!
//! All layouts are those of the native engine on 64-bit targets. Boolean fields are kept as
//! bytes and pointers as 64-bit addresses so that every layout is plain old data, every padding
//! byte is spelled out as a field.
use core::mem::{align_of, size_of};

use bytemuck::{Pod, Zeroable};

use crate::error::EventError;
use crate::kind::tags::*;
use crate::kind::EventType;

/// The number of pen axes carried by pen events.
pub const PEN_NUM_AXES: usize = 6;

/// One event as it sits in the native queue.
///
/// The buffer is large enough for every payload. Its first 16 bytes are always a
/// [`CommonEvent`], the type tag in it decides which payload layout applies to the rest.
#[derive(Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct RawEvent {
    words: [u64; 16],
}

/// A payload layout that can be viewed within a [`RawEvent`].
///
/// Implementations exist for all native payloads. Applications may implement it for their own
/// plain old data to view events of the application tag range.
///
/// A payload must fit the buffer and need no more alignment than it provides. Using a layout
/// that does not is a compile error:
///
/// ```compile_fail
/// use sdl_event::{EventType, Payload, RawEvent};
///
/// #[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
/// #[repr(C)]
/// struct Oversized {
///     words: [u64; 20],
/// }
///
/// impl Payload for Oversized {
///     const NAME: &'static str = "Oversized";
///
///     fn accepts(ty: EventType) -> bool {
///         ty.is_user()
///     }
/// }
///
/// let raw = RawEvent::from_payload(&Oversized { words: [0; 20] });
/// ```
pub trait Payload: Pod {
    /// A name for diagnostics.
    const NAME: &'static str;

    /// Evaluated wherever the layout is placed in a buffer, fails for layouts that do not fit.
    const LAYOUT: () = assert!(
        size_of::<Self>() <= RawEvent::SIZE && align_of::<Self>() <= RawEvent::ALIGN,
        "payload does not fit the event buffer"
    );

    /// Whether events with this tag carry this payload.
    fn accepts(ty: EventType) -> bool;
}

/// The prefix shared by all events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct CommonEvent {
    pub ty: u32,
    pub reserved: u32,
    /// Nanoseconds since engine initialization.
    pub timestamp: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct DisplayEvent {
    pub common: CommonEvent,
    pub display_id: u32,
    pub data1: i32,
    pub data2: i32,
    pub _padding: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct WindowEvent {
    pub common: CommonEvent,
    pub window_id: u32,
    pub data1: i32,
    pub data2: i32,
    pub _padding: u32,
}

/// A device was added or removed, for keyboards, mice, joysticks, gamepads and cameras.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct DeviceEvent {
    pub common: CommonEvent,
    pub which: u32,
    pub _padding: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct KeyboardEvent {
    pub common: CommonEvent,
    pub window_id: u32,
    pub which: u32,
    pub scancode: u32,
    pub key: u32,
    pub modifiers: u16,
    pub raw: u16,
    pub down: u8,
    pub repeat: u8,
    pub _padding: [u8; 2],
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct TextEditingEvent {
    pub common: CommonEvent,
    pub window_id: u32,
    pub _padding: u32,
    /// Address of a NUL-terminated UTF-8 string owned by the engine.
    pub text: u64,
    pub start: i32,
    pub length: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct TextEditingCandidatesEvent {
    pub common: CommonEvent,
    pub window_id: u32,
    pub _padding: u32,
    /// Address of an array of `num_candidates` string addresses.
    pub candidates: u64,
    pub num_candidates: i32,
    /// Negative if no candidate is selected.
    pub selected_candidate: i32,
    pub horizontal: u8,
    pub _padding2: [u8; 7],
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct TextInputEvent {
    pub common: CommonEvent,
    pub window_id: u32,
    pub _padding: u32,
    pub text: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct MouseMotionEvent {
    pub common: CommonEvent,
    pub window_id: u32,
    pub which: u32,
    /// Pressed buttons, bit `n - 1` for button `n`.
    pub state: u32,
    pub x: f32,
    pub y: f32,
    pub xrel: f32,
    pub yrel: f32,
    pub _padding: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct MouseButtonEvent {
    pub common: CommonEvent,
    pub window_id: u32,
    pub which: u32,
    pub button: u8,
    pub down: u8,
    pub clicks: u8,
    pub _padding: u8,
    pub x: f32,
    pub y: f32,
    pub _padding2: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct MouseWheelEvent {
    pub common: CommonEvent,
    pub window_id: u32,
    pub which: u32,
    pub x: f32,
    pub y: f32,
    pub direction: u32,
    pub mouse_x: f32,
    pub mouse_y: f32,
    pub _padding: u32,
}

/// An axis of a joystick or gamepad moved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct AxisEvent {
    pub common: CommonEvent,
    pub which: u32,
    pub axis: u8,
    pub _padding: [u8; 3],
    pub value: i16,
    pub _padding2: u16,
    pub _padding3: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct JoyBallEvent {
    pub common: CommonEvent,
    pub which: u32,
    pub ball: u8,
    pub _padding: [u8; 3],
    pub xrel: i16,
    pub yrel: i16,
    pub _padding2: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct JoyHatEvent {
    pub common: CommonEvent,
    pub which: u32,
    pub hat: u8,
    pub value: u8,
    pub _padding: [u8; 2],
}

/// A button of a joystick or gamepad changed state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct ButtonEvent {
    pub common: CommonEvent,
    pub which: u32,
    pub button: u8,
    pub down: u8,
    pub _padding: [u8; 2],
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct JoyBatteryEvent {
    pub common: CommonEvent,
    pub which: u32,
    pub state: i32,
    pub percent: i32,
    pub _padding: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct GamepadTouchpadEvent {
    pub common: CommonEvent,
    pub which: u32,
    pub touchpad: i32,
    pub finger: i32,
    pub x: f32,
    pub y: f32,
    pub pressure: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct GamepadSensorEvent {
    pub common: CommonEvent,
    pub which: u32,
    pub sensor: i32,
    pub data: [f32; 3],
    pub _padding: u32,
    pub sensor_timestamp: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct AudioDeviceEvent {
    pub common: CommonEvent,
    pub which: u32,
    pub recording: u8,
    pub _padding: [u8; 3],
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct SensorEvent {
    pub common: CommonEvent,
    pub which: u32,
    pub data: [f32; 6],
    pub _padding: u32,
    pub sensor_timestamp: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct TouchFingerEvent {
    pub common: CommonEvent,
    pub touch_id: u64,
    pub finger_id: u64,
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub pressure: f32,
    pub window_id: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct PenTipEvent {
    pub common: CommonEvent,
    pub window_id: u32,
    pub which: u32,
    pub tip: u8,
    pub down: u8,
    pub pen_state: u16,
    pub x: f32,
    pub y: f32,
    pub axes: [f32; PEN_NUM_AXES],
    pub _padding: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct PenMotionEvent {
    pub common: CommonEvent,
    pub window_id: u32,
    pub which: u32,
    pub _padding: [u8; 2],
    pub pen_state: u16,
    pub x: f32,
    pub y: f32,
    pub axes: [f32; PEN_NUM_AXES],
    pub _padding2: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct PenButtonEvent {
    pub common: CommonEvent,
    pub window_id: u32,
    pub which: u32,
    pub button: u8,
    pub down: u8,
    pub pen_state: u16,
    pub x: f32,
    pub y: f32,
    pub axes: [f32; PEN_NUM_AXES],
    pub _padding: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct DropEvent {
    pub common: CommonEvent,
    pub window_id: u32,
    pub x: f32,
    pub y: f32,
    pub _padding: u32,
    /// Address of the source application name, may be null.
    pub source: u64,
    /// Address of the dropped file name or text, may be null.
    pub data: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct ClipboardEvent {
    pub common: CommonEvent,
    pub owner: u8,
    pub _padding: [u8; 3],
    pub num_mime_types: i32,
    /// Address of an array of `num_mime_types` string addresses.
    pub mime_types: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct RenderEvent {
    pub common: CommonEvent,
    pub window_id: u32,
    pub _padding: u32,
}

/// An application defined event.
///
/// The data fields are opaque to the engine and are never dereferenced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct UserEvent {
    pub common: CommonEvent,
    pub window_id: u32,
    pub code: i32,
    pub data1: u64,
    pub data2: u64,
}

macro_rules! payloads {
    ($($name:ident: $tags:pat,)*) => {
        $(
            const _: () = <$name as Payload>::LAYOUT;

            impl Payload for $name {
                const NAME: &'static str = stringify!($name);

                fn accepts(ty: EventType) -> bool {
                    matches!(ty.to_raw(), $tags)
                }
            }
        )*
    };
}

impl Payload for CommonEvent {
    const NAME: &'static str = "CommonEvent";

    fn accepts(_: EventType) -> bool {
        true
    }
}

payloads! {
    DisplayEvent: DISPLAY_ORIENTATION..=DISPLAY_CONTENT_SCALE_CHANGED,
    WindowEvent: WINDOW_SHOWN..=WINDOW_HDR_STATE_CHANGED,
    DeviceEvent: KEYBOARD_ADDED
        | KEYBOARD_REMOVED
        | MOUSE_ADDED
        | MOUSE_REMOVED
        | JOYSTICK_ADDED
        | JOYSTICK_REMOVED
        | JOYSTICK_UPDATE_COMPLETE
        | GAMEPAD_ADDED..=GAMEPAD_REMAPPED
        | GAMEPAD_UPDATE_COMPLETE
        | GAMEPAD_STEAM_HANDLE_UPDATED
        | CAMERA_DEVICE_ADDED..=CAMERA_DEVICE_DENIED,
    KeyboardEvent: KEY_DOWN | KEY_UP,
    TextEditingEvent: TEXT_EDITING,
    TextEditingCandidatesEvent: TEXT_EDITING_CANDIDATES,
    TextInputEvent: TEXT_INPUT,
    MouseMotionEvent: MOUSE_MOTION,
    MouseButtonEvent: MOUSE_BUTTON_DOWN | MOUSE_BUTTON_UP,
    MouseWheelEvent: MOUSE_WHEEL,
    AxisEvent: JOYSTICK_AXIS_MOTION | GAMEPAD_AXIS_MOTION,
    JoyBallEvent: JOYSTICK_BALL_MOTION,
    JoyHatEvent: JOYSTICK_HAT_MOTION,
    ButtonEvent: JOYSTICK_BUTTON_DOWN
        | JOYSTICK_BUTTON_UP
        | GAMEPAD_BUTTON_DOWN
        | GAMEPAD_BUTTON_UP,
    JoyBatteryEvent: JOYSTICK_BATTERY_UPDATED,
    GamepadTouchpadEvent: GAMEPAD_TOUCHPAD_DOWN..=GAMEPAD_TOUCHPAD_UP,
    GamepadSensorEvent: GAMEPAD_SENSOR_UPDATE,
    AudioDeviceEvent: AUDIO_DEVICE_ADDED..=AUDIO_DEVICE_FORMAT_CHANGED,
    SensorEvent: SENSOR_UPDATE,
    TouchFingerEvent: FINGER_DOWN..=FINGER_MOTION,
    PenTipEvent: PEN_DOWN | PEN_UP,
    PenMotionEvent: PEN_MOTION,
    PenButtonEvent: PEN_BUTTON_DOWN | PEN_BUTTON_UP,
    DropEvent: DROP_FILE..=DROP_POSITION,
    ClipboardEvent: CLIPBOARD_UPDATE,
    RenderEvent: RENDER_TARGETS_RESET..=RENDER_DEVICE_LOST,
    UserEvent: USER..=LAST,
}

const _: () = assert!(size_of::<RawEvent>() == RawEvent::SIZE);

impl RawEvent {
    /// The size of every event, in bytes.
    pub const SIZE: usize = 128;
    /// The alignment of the buffer, the most any payload may require.
    pub const ALIGN: usize = align_of::<RawEvent>();

    /// An event with all bytes zero, tagged [`EventType::FIRST`].
    pub fn zeroed() -> Self {
        Zeroable::zeroed()
    }

    /// An event carrying a payload, the bytes past it zero.
    pub fn from_payload<T: Payload>(payload: &T) -> Self {
        let () = T::LAYOUT;
        let mut event = RawEvent::zeroed();
        let bytes = bytemuck::bytes_of(payload);
        event.as_bytes_mut()[..bytes.len()].copy_from_slice(bytes);
        event
    }

    pub fn from_bytes(bytes: [u8; Self::SIZE]) -> Self {
        bytemuck::cast(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; Self::SIZE] {
        bytemuck::cast_ref(self)
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8; Self::SIZE] {
        bytemuck::cast_mut(self)
    }

    pub fn common(&self) -> &CommonEvent {
        self.view()
    }

    pub fn event_type(&self) -> EventType {
        EventType::from_raw(self.common().ty)
    }

    /// Nanoseconds since engine initialization.
    pub fn timestamp(&self) -> u64 {
        self.common().timestamp
    }

    /// View the payload, if the type tag says this event carries it.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::TypeMismatch`] if the tag belongs to another payload.
    pub fn payload<T: Payload>(&self) -> Result<&T, EventError> {
        self.check::<T>()?;
        Ok(self.view())
    }

    /// Mutably view the payload, if the type tag says this event carries it.
    pub fn payload_mut<T: Payload>(&mut self) -> Result<&mut T, EventError> {
        self.check::<T>()?;
        let bytes = &mut self.as_bytes_mut()[..size_of::<T>()];
        Ok(bytemuck::from_bytes_mut(bytes))
    }

    fn check<T: Payload>(&self) -> Result<(), EventError> {
        let () = T::LAYOUT;
        let found = self.event_type();
        if !T::accepts(found) {
            return Err(EventError::TypeMismatch {
                expected: T::NAME,
                found: found.to_raw(),
            });
        }

        Ok(())
    }

    fn view<T: Payload>(&self) -> &T {
        let () = T::LAYOUT;
        bytemuck::from_bytes(&self.as_bytes()[..size_of::<T>()])
    }
}

impl Default for RawEvent {
    fn default() -> Self {
        RawEvent::zeroed()
    }
}

impl core::fmt::Debug for RawEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("RawEvent")
            .field("ty", &self.event_type())
            .field("timestamp", &self.timestamp())
            .finish_non_exhaustive()
    }
}
