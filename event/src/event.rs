// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
//! Owned, decoded events.
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::EventError;
use crate::kind::tags::*;
use crate::kind::EventType;
use crate::raw::{self, Payload, RawEvent, PEN_NUM_AXES};
use crate::strings::NativeStrings;

/// An event with its payload copied out of the raw buffer.
///
/// Variants that cover several tags keep the tag in their `ty` field.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Event {
    Quit(Common),
    /// Application lifecycle, locale and theme changes.
    App(Common),
    Display(Display),
    Window(Window),
    KeyboardDevice(Device),
    Keyboard(Keyboard),
    TextEditing(TextEditing),
    TextEditingCandidates(TextEditingCandidates),
    TextInput(TextInput),
    KeymapChanged(Common),
    MouseDevice(Device),
    MouseMotion(MouseMotion),
    MouseButton(MouseButton),
    MouseWheel(MouseWheel),
    JoyAxis(Axis),
    JoyBall(JoyBall),
    JoyHat(JoyHat),
    JoyButton(Button),
    JoyDevice(Device),
    JoyBattery(JoyBattery),
    GamepadAxis(Axis),
    GamepadButton(Button),
    GamepadDevice(Device),
    GamepadTouchpad(GamepadTouchpad),
    GamepadSensor(GamepadSensor),
    TouchFinger(TouchFinger),
    Clipboard(Clipboard),
    Drop(DragDrop),
    AudioDevice(AudioDevice),
    CameraDevice(Device),
    Sensor(Sensor),
    PenTip(PenTip),
    PenMotion(PenMotion),
    PenButton(PenButton),
    Render(Render),
    User(User),
}

/// An event without payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Common {
    pub ty: EventType,
    pub timestamp: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Display {
    pub ty: EventType,
    pub timestamp: u64,
    pub display_id: u32,
    pub data1: i32,
    pub data2: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub ty: EventType,
    pub timestamp: u64,
    pub window_id: u32,
    pub data1: i32,
    pub data2: i32,
}

/// A device was added, removed or otherwise changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Device {
    pub ty: EventType,
    pub timestamp: u64,
    pub which: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Keyboard {
    pub ty: EventType,
    pub timestamp: u64,
    pub window_id: u32,
    pub which: u32,
    pub scancode: u32,
    pub key: u32,
    pub modifiers: u16,
    pub raw: u16,
    pub down: bool,
    pub repeat: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEditing {
    pub timestamp: u64,
    pub window_id: u32,
    pub text: Option<String>,
    pub start: i32,
    pub length: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEditingCandidates {
    pub timestamp: u64,
    pub window_id: u32,
    pub candidates: Vec<String>,
    pub selected: Option<usize>,
    pub horizontal: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextInput {
    pub timestamp: u64,
    pub window_id: u32,
    pub text: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseMotion {
    pub timestamp: u64,
    pub window_id: u32,
    pub which: u32,
    pub state: u32,
    pub x: f32,
    pub y: f32,
    pub xrel: f32,
    pub yrel: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseButton {
    pub ty: EventType,
    pub timestamp: u64,
    pub window_id: u32,
    pub which: u32,
    pub button: u8,
    pub down: bool,
    pub clicks: u8,
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseWheel {
    pub timestamp: u64,
    pub window_id: u32,
    pub which: u32,
    pub x: f32,
    pub y: f32,
    pub direction: WheelDirection,
    pub mouse_x: f32,
    pub mouse_y: f32,
}

/// Whether wheel deltas are reported inverted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WheelDirection {
    #[default]
    Normal,
    Flipped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Axis {
    pub timestamp: u64,
    pub which: u32,
    pub axis: u8,
    pub value: i16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JoyBall {
    pub timestamp: u64,
    pub which: u32,
    pub ball: u8,
    pub xrel: i16,
    pub yrel: i16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JoyHat {
    pub timestamp: u64,
    pub which: u32,
    pub hat: u8,
    pub value: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Button {
    pub ty: EventType,
    pub timestamp: u64,
    pub which: u32,
    pub button: u8,
    pub down: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JoyBattery {
    pub timestamp: u64,
    pub which: u32,
    pub state: PowerState,
    /// Charge in percent, negative if unknown.
    pub percent: i32,
}

/// The power supply state of a device.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PowerState {
    Error,
    #[default]
    Unknown,
    OnBattery,
    NoBattery,
    Charging,
    Charged,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GamepadTouchpad {
    pub ty: EventType,
    pub timestamp: u64,
    pub which: u32,
    pub touchpad: i32,
    pub finger: i32,
    pub x: f32,
    pub y: f32,
    pub pressure: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GamepadSensor {
    pub timestamp: u64,
    pub which: u32,
    pub sensor: i32,
    pub data: [f32; 3],
    pub sensor_timestamp: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchFinger {
    pub ty: EventType,
    pub timestamp: u64,
    pub touch_id: u64,
    pub finger_id: u64,
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub pressure: f32,
    pub window_id: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clipboard {
    pub timestamp: u64,
    /// Whether this application owns the clipboard contents.
    pub owner: bool,
    pub mime_types: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DragDrop {
    pub ty: EventType,
    pub timestamp: u64,
    pub window_id: u32,
    pub x: f32,
    pub y: f32,
    pub source: Option<String>,
    pub data: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AudioDevice {
    pub ty: EventType,
    pub timestamp: u64,
    pub which: u32,
    pub recording: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sensor {
    pub timestamp: u64,
    pub which: u32,
    pub data: [f32; 6],
    pub sensor_timestamp: u64,
}

/// Indexes into the axes of pen events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum PenAxis {
    Pressure = 0,
    XTilt = 1,
    YTilt = 2,
    Distance = 3,
    Rotation = 4,
    Slider = 5,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PenTip {
    pub ty: EventType,
    pub timestamp: u64,
    pub window_id: u32,
    pub which: u32,
    pub tip: u8,
    pub down: bool,
    pub pen_state: u16,
    pub x: f32,
    pub y: f32,
    pub axes: [f32; PEN_NUM_AXES],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PenMotion {
    pub timestamp: u64,
    pub window_id: u32,
    pub which: u32,
    pub pen_state: u16,
    pub x: f32,
    pub y: f32,
    pub axes: [f32; PEN_NUM_AXES],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PenButton {
    pub ty: EventType,
    pub timestamp: u64,
    pub window_id: u32,
    pub which: u32,
    pub button: u8,
    pub down: bool,
    pub pen_state: u16,
    pub x: f32,
    pub y: f32,
    pub axes: [f32; PEN_NUM_AXES],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Render {
    pub ty: EventType,
    pub timestamp: u64,
    pub window_id: u32,
}

/// An application defined event.
///
/// The data addresses are passed through untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct User {
    pub ty: EventType,
    pub timestamp: u64,
    pub window_id: u32,
    pub code: i32,
    pub data1: u64,
    pub data2: u64,
}

impl Event {
    /// Copy the payload of a raw event, selected by its type tag.
    ///
    /// String fields are copied through `strings` and are absent when it can not resolve them.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::UnknownEventType`] for tags that carry no known payload.
    pub fn decode(raw: &RawEvent, strings: &impl NativeStrings) -> Result<Self, EventError> {
        let ty = raw.event_type();
        let event = match ty.to_raw() {
            QUIT => Event::Quit(Common::new(raw)),
            TERMINATING..=SYSTEM_THEME_CHANGED => Event::App(Common::new(raw)),
            DISPLAY_ORIENTATION..=DISPLAY_CONTENT_SCALE_CHANGED => {
                let ev = view::<raw::DisplayEvent>(raw)?;
                Event::Display(Display {
                    ty,
                    timestamp: ev.common.timestamp,
                    display_id: ev.display_id,
                    data1: ev.data1,
                    data2: ev.data2,
                })
            }
            WINDOW_SHOWN..=WINDOW_HDR_STATE_CHANGED => {
                let ev = view::<raw::WindowEvent>(raw)?;
                Event::Window(Window {
                    ty,
                    timestamp: ev.common.timestamp,
                    window_id: ev.window_id,
                    data1: ev.data1,
                    data2: ev.data2,
                })
            }
            KEY_DOWN | KEY_UP => {
                let ev = view::<raw::KeyboardEvent>(raw)?;
                Event::Keyboard(Keyboard {
                    ty,
                    timestamp: ev.common.timestamp,
                    window_id: ev.window_id,
                    which: ev.which,
                    scancode: ev.scancode,
                    key: ev.key,
                    modifiers: ev.modifiers,
                    raw: ev.raw,
                    down: ev.down != 0,
                    repeat: ev.repeat != 0,
                })
            }
            TEXT_EDITING => {
                let ev = view::<raw::TextEditingEvent>(raw)?;
                Event::TextEditing(TextEditing {
                    timestamp: ev.common.timestamp,
                    window_id: ev.window_id,
                    text: strings.string(ev.text),
                    start: ev.start,
                    length: ev.length,
                })
            }
            TEXT_EDITING_CANDIDATES => {
                let ev = view::<raw::TextEditingCandidatesEvent>(raw)?;
                let len = usize::try_from(ev.num_candidates).unwrap_or(0);
                Event::TextEditingCandidates(TextEditingCandidates {
                    timestamp: ev.common.timestamp,
                    window_id: ev.window_id,
                    candidates: strings.string_list(ev.candidates, len),
                    selected: usize::try_from(ev.selected_candidate).ok(),
                    horizontal: ev.horizontal != 0,
                })
            }
            TEXT_INPUT => {
                let ev = view::<raw::TextInputEvent>(raw)?;
                Event::TextInput(TextInput {
                    timestamp: ev.common.timestamp,
                    window_id: ev.window_id,
                    text: strings.string(ev.text),
                })
            }
            KEYMAP_CHANGED => Event::KeymapChanged(Common::new(raw)),
            KEYBOARD_ADDED | KEYBOARD_REMOVED => Event::KeyboardDevice(Device::new(raw)?),
            MOUSE_MOTION => {
                let ev = view::<raw::MouseMotionEvent>(raw)?;
                Event::MouseMotion(MouseMotion {
                    timestamp: ev.common.timestamp,
                    window_id: ev.window_id,
                    which: ev.which,
                    state: ev.state,
                    x: ev.x,
                    y: ev.y,
                    xrel: ev.xrel,
                    yrel: ev.yrel,
                })
            }
            MOUSE_BUTTON_DOWN | MOUSE_BUTTON_UP => {
                let ev = view::<raw::MouseButtonEvent>(raw)?;
                Event::MouseButton(MouseButton {
                    ty,
                    timestamp: ev.common.timestamp,
                    window_id: ev.window_id,
                    which: ev.which,
                    button: ev.button,
                    down: ev.down != 0,
                    clicks: ev.clicks,
                    x: ev.x,
                    y: ev.y,
                })
            }
            MOUSE_WHEEL => {
                let ev = view::<raw::MouseWheelEvent>(raw)?;
                Event::MouseWheel(MouseWheel {
                    timestamp: ev.common.timestamp,
                    window_id: ev.window_id,
                    which: ev.which,
                    x: ev.x,
                    y: ev.y,
                    direction: WheelDirection::from_raw(ev.direction),
                    mouse_x: ev.mouse_x,
                    mouse_y: ev.mouse_y,
                })
            }
            MOUSE_ADDED | MOUSE_REMOVED => Event::MouseDevice(Device::new(raw)?),
            JOYSTICK_AXIS_MOTION => Event::JoyAxis(Axis::new(raw)?),
            JOYSTICK_BALL_MOTION => {
                let ev = view::<raw::JoyBallEvent>(raw)?;
                Event::JoyBall(JoyBall {
                    timestamp: ev.common.timestamp,
                    which: ev.which,
                    ball: ev.ball,
                    xrel: ev.xrel,
                    yrel: ev.yrel,
                })
            }
            JOYSTICK_HAT_MOTION => {
                let ev = view::<raw::JoyHatEvent>(raw)?;
                Event::JoyHat(JoyHat {
                    timestamp: ev.common.timestamp,
                    which: ev.which,
                    hat: ev.hat,
                    value: ev.value,
                })
            }
            JOYSTICK_BUTTON_DOWN | JOYSTICK_BUTTON_UP => Event::JoyButton(Button::new(raw)?),
            JOYSTICK_ADDED | JOYSTICK_REMOVED | JOYSTICK_UPDATE_COMPLETE => {
                Event::JoyDevice(Device::new(raw)?)
            }
            JOYSTICK_BATTERY_UPDATED => {
                let ev = view::<raw::JoyBatteryEvent>(raw)?;
                Event::JoyBattery(JoyBattery {
                    timestamp: ev.common.timestamp,
                    which: ev.which,
                    state: PowerState::from_raw(ev.state),
                    percent: ev.percent,
                })
            }
            GAMEPAD_AXIS_MOTION => Event::GamepadAxis(Axis::new(raw)?),
            GAMEPAD_BUTTON_DOWN | GAMEPAD_BUTTON_UP => Event::GamepadButton(Button::new(raw)?),
            GAMEPAD_ADDED..=GAMEPAD_REMAPPED
            | GAMEPAD_UPDATE_COMPLETE
            | GAMEPAD_STEAM_HANDLE_UPDATED => Event::GamepadDevice(Device::new(raw)?),
            GAMEPAD_TOUCHPAD_DOWN..=GAMEPAD_TOUCHPAD_UP => {
                let ev = view::<raw::GamepadTouchpadEvent>(raw)?;
                Event::GamepadTouchpad(GamepadTouchpad {
                    ty,
                    timestamp: ev.common.timestamp,
                    which: ev.which,
                    touchpad: ev.touchpad,
                    finger: ev.finger,
                    x: ev.x,
                    y: ev.y,
                    pressure: ev.pressure,
                })
            }
            GAMEPAD_SENSOR_UPDATE => {
                let ev = view::<raw::GamepadSensorEvent>(raw)?;
                Event::GamepadSensor(GamepadSensor {
                    timestamp: ev.common.timestamp,
                    which: ev.which,
                    sensor: ev.sensor,
                    data: ev.data,
                    sensor_timestamp: ev.sensor_timestamp,
                })
            }
            FINGER_DOWN..=FINGER_MOTION => {
                let ev = view::<raw::TouchFingerEvent>(raw)?;
                Event::TouchFinger(TouchFinger {
                    ty,
                    timestamp: ev.common.timestamp,
                    touch_id: ev.touch_id,
                    finger_id: ev.finger_id,
                    x: ev.x,
                    y: ev.y,
                    dx: ev.dx,
                    dy: ev.dy,
                    pressure: ev.pressure,
                    window_id: ev.window_id,
                })
            }
            CLIPBOARD_UPDATE => {
                let ev = view::<raw::ClipboardEvent>(raw)?;
                let len = usize::try_from(ev.num_mime_types).unwrap_or(0);
                Event::Clipboard(Clipboard {
                    timestamp: ev.common.timestamp,
                    owner: ev.owner != 0,
                    mime_types: strings.string_list(ev.mime_types, len),
                })
            }
            DROP_FILE..=DROP_POSITION => {
                let ev = view::<raw::DropEvent>(raw)?;
                Event::Drop(DragDrop {
                    ty,
                    timestamp: ev.common.timestamp,
                    window_id: ev.window_id,
                    x: ev.x,
                    y: ev.y,
                    source: strings.string(ev.source),
                    data: strings.string(ev.data),
                })
            }
            AUDIO_DEVICE_ADDED..=AUDIO_DEVICE_FORMAT_CHANGED => {
                let ev = view::<raw::AudioDeviceEvent>(raw)?;
                Event::AudioDevice(AudioDevice {
                    ty,
                    timestamp: ev.common.timestamp,
                    which: ev.which,
                    recording: ev.recording != 0,
                })
            }
            SENSOR_UPDATE => {
                let ev = view::<raw::SensorEvent>(raw)?;
                Event::Sensor(Sensor {
                    timestamp: ev.common.timestamp,
                    which: ev.which,
                    data: ev.data,
                    sensor_timestamp: ev.sensor_timestamp,
                })
            }
            PEN_DOWN | PEN_UP => {
                let ev = view::<raw::PenTipEvent>(raw)?;
                Event::PenTip(PenTip {
                    ty,
                    timestamp: ev.common.timestamp,
                    window_id: ev.window_id,
                    which: ev.which,
                    tip: ev.tip,
                    down: ev.down != 0,
                    pen_state: ev.pen_state,
                    x: ev.x,
                    y: ev.y,
                    axes: ev.axes,
                })
            }
            PEN_MOTION => {
                let ev = view::<raw::PenMotionEvent>(raw)?;
                Event::PenMotion(PenMotion {
                    timestamp: ev.common.timestamp,
                    window_id: ev.window_id,
                    which: ev.which,
                    pen_state: ev.pen_state,
                    x: ev.x,
                    y: ev.y,
                    axes: ev.axes,
                })
            }
            PEN_BUTTON_DOWN | PEN_BUTTON_UP => {
                let ev = view::<raw::PenButtonEvent>(raw)?;
                Event::PenButton(PenButton {
                    ty,
                    timestamp: ev.common.timestamp,
                    window_id: ev.window_id,
                    which: ev.which,
                    button: ev.button,
                    down: ev.down != 0,
                    pen_state: ev.pen_state,
                    x: ev.x,
                    y: ev.y,
                    axes: ev.axes,
                })
            }
            CAMERA_DEVICE_ADDED..=CAMERA_DEVICE_DENIED => Event::CameraDevice(Device::new(raw)?),
            RENDER_TARGETS_RESET..=RENDER_DEVICE_LOST => {
                let ev = view::<raw::RenderEvent>(raw)?;
                Event::Render(Render {
                    ty,
                    timestamp: ev.common.timestamp,
                    window_id: ev.window_id,
                })
            }
            USER..=LAST => {
                let ev = view::<raw::UserEvent>(raw)?;
                Event::User(User {
                    ty,
                    timestamp: ev.common.timestamp,
                    window_id: ev.window_id,
                    code: ev.code,
                    data1: ev.data1,
                    data2: ev.data2,
                })
            }
            other => return Err(EventError::UnknownEventType(other)),
        };

        Ok(event)
    }

    /// The type tag the event was decoded from.
    pub fn event_type(&self) -> EventType {
        match self {
            Event::Quit(ev) | Event::App(ev) | Event::KeymapChanged(ev) => ev.ty,
            Event::Display(ev) => ev.ty,
            Event::Window(ev) => ev.ty,
            Event::KeyboardDevice(ev)
            | Event::MouseDevice(ev)
            | Event::JoyDevice(ev)
            | Event::GamepadDevice(ev)
            | Event::CameraDevice(ev) => ev.ty,
            Event::Keyboard(ev) => ev.ty,
            Event::TextEditing(_) => EventType::TEXT_EDITING,
            Event::TextEditingCandidates(_) => EventType::TEXT_EDITING_CANDIDATES,
            Event::TextInput(_) => EventType::TEXT_INPUT,
            Event::MouseMotion(_) => EventType::MOUSE_MOTION,
            Event::MouseButton(ev) => ev.ty,
            Event::MouseWheel(_) => EventType::MOUSE_WHEEL,
            Event::JoyAxis(_) => EventType::JOYSTICK_AXIS_MOTION,
            Event::JoyBall(_) => EventType::JOYSTICK_BALL_MOTION,
            Event::JoyHat(_) => EventType::JOYSTICK_HAT_MOTION,
            Event::JoyButton(ev) | Event::GamepadButton(ev) => ev.ty,
            Event::JoyBattery(_) => EventType::JOYSTICK_BATTERY_UPDATED,
            Event::GamepadAxis(_) => EventType::GAMEPAD_AXIS_MOTION,
            Event::GamepadTouchpad(ev) => ev.ty,
            Event::GamepadSensor(_) => EventType::GAMEPAD_SENSOR_UPDATE,
            Event::TouchFinger(ev) => ev.ty,
            Event::Clipboard(_) => EventType::CLIPBOARD_UPDATE,
            Event::Drop(ev) => ev.ty,
            Event::AudioDevice(ev) => ev.ty,
            Event::Sensor(_) => EventType::SENSOR_UPDATE,
            Event::PenTip(ev) => ev.ty,
            Event::PenMotion(_) => EventType::PEN_MOTION,
            Event::PenButton(ev) => ev.ty,
            Event::Render(ev) => ev.ty,
            Event::User(ev) => ev.ty,
        }
    }

    /// Nanoseconds since engine initialization.
    pub fn timestamp(&self) -> u64 {
        match self {
            Event::Quit(ev) | Event::App(ev) | Event::KeymapChanged(ev) => ev.timestamp,
            Event::Display(ev) => ev.timestamp,
            Event::Window(ev) => ev.timestamp,
            Event::KeyboardDevice(ev)
            | Event::MouseDevice(ev)
            | Event::JoyDevice(ev)
            | Event::GamepadDevice(ev)
            | Event::CameraDevice(ev) => ev.timestamp,
            Event::Keyboard(ev) => ev.timestamp,
            Event::TextEditing(ev) => ev.timestamp,
            Event::TextEditingCandidates(ev) => ev.timestamp,
            Event::TextInput(ev) => ev.timestamp,
            Event::MouseMotion(ev) => ev.timestamp,
            Event::MouseButton(ev) => ev.timestamp,
            Event::MouseWheel(ev) => ev.timestamp,
            Event::JoyAxis(ev) | Event::GamepadAxis(ev) => ev.timestamp,
            Event::JoyBall(ev) => ev.timestamp,
            Event::JoyHat(ev) => ev.timestamp,
            Event::JoyButton(ev) | Event::GamepadButton(ev) => ev.timestamp,
            Event::JoyBattery(ev) => ev.timestamp,
            Event::GamepadTouchpad(ev) => ev.timestamp,
            Event::GamepadSensor(ev) => ev.timestamp,
            Event::TouchFinger(ev) => ev.timestamp,
            Event::Clipboard(ev) => ev.timestamp,
            Event::Drop(ev) => ev.timestamp,
            Event::AudioDevice(ev) => ev.timestamp,
            Event::Sensor(ev) => ev.timestamp,
            Event::PenTip(ev) => ev.timestamp,
            Event::PenMotion(ev) => ev.timestamp,
            Event::PenButton(ev) => ev.timestamp,
            Event::Render(ev) => ev.timestamp,
            Event::User(ev) => ev.timestamp,
        }
    }
}

fn view<T: Payload>(raw: &RawEvent) -> Result<&T, EventError> {
    raw.payload::<T>()
}

impl Common {
    fn new(raw: &RawEvent) -> Self {
        Common {
            ty: raw.event_type(),
            timestamp: raw.timestamp(),
        }
    }
}

impl Device {
    fn new(raw: &RawEvent) -> Result<Self, EventError> {
        let ev = view::<raw::DeviceEvent>(raw)?;
        Ok(Device {
            ty: raw.event_type(),
            timestamp: ev.common.timestamp,
            which: ev.which,
        })
    }
}

impl Axis {
    fn new(raw: &RawEvent) -> Result<Self, EventError> {
        let ev = view::<raw::AxisEvent>(raw)?;
        Ok(Axis {
            timestamp: ev.common.timestamp,
            which: ev.which,
            axis: ev.axis,
            value: ev.value,
        })
    }
}

impl Button {
    fn new(raw: &RawEvent) -> Result<Self, EventError> {
        let ev = view::<raw::ButtonEvent>(raw)?;
        Ok(Button {
            ty: raw.event_type(),
            timestamp: ev.common.timestamp,
            which: ev.which,
            button: ev.button,
            down: ev.down != 0,
        })
    }
}

impl MouseMotion {
    /// Whether a mouse button, counted from `1` for the left button, is held.
    pub fn is_pressed(&self, button: u8) -> bool {
        match button.checked_sub(1) {
            Some(bit) if bit < 32 => self.state & (1 << bit) != 0,
            _ => false,
        }
    }
}

impl WheelDirection {
    fn from_raw(raw: u32) -> Self {
        match raw {
            1 => WheelDirection::Flipped,
            _ => WheelDirection::Normal,
        }
    }
}

impl PowerState {
    fn from_raw(raw: i32) -> Self {
        match raw {
            -1 => PowerState::Error,
            1 => PowerState::OnBattery,
            2 => PowerState::NoBattery,
            3 => PowerState::Charging,
            4 => PowerState::Charged,
            _ => PowerState::Unknown,
        }
    }
}

macro_rules! pen_axes {
    ($($name:ident),*) => {
        $(
            impl $name {
                pub fn axis(&self, axis: PenAxis) -> f32 {
                    self.axes[axis as usize]
                }
            }
        )*
    };
}

pen_axes!(PenTip, PenMotion, PenButton);
