//! Decoding of events written byte by byte at the offsets of the native layouts.
use sdl_event::{
    AudioDevice, Axis, Clipboard, Display, Event, EventType, GamepadSensor, GamepadTouchpad,
    JoyBall, JoyHat, MouseButton, MouseWheel, NoStrings, PenButton, PenTip, RawEvent, Render,
    Sensor, StringTable, TextEditing, TouchFinger, WheelDirection,
};

/// A native event buffer under construction.
struct Native([u8; RawEvent::SIZE]);

impl Native {
    fn new(ty: EventType, timestamp: u64) -> Self {
        Native([0; RawEvent::SIZE])
            .u32(0, ty.to_raw())
            .u32(4, 0xdead_beef)
            .u64(8, timestamp)
    }

    fn put(mut self, offset: usize, bytes: &[u8]) -> Self {
        self.0[offset..offset + bytes.len()].copy_from_slice(bytes);
        self
    }

    fn u8(self, offset: usize, value: u8) -> Self {
        self.put(offset, &[value])
    }

    fn u16(self, offset: usize, value: u16) -> Self {
        self.put(offset, &value.to_ne_bytes())
    }

    fn i16(self, offset: usize, value: i16) -> Self {
        self.put(offset, &value.to_ne_bytes())
    }

    fn u32(self, offset: usize, value: u32) -> Self {
        self.put(offset, &value.to_ne_bytes())
    }

    fn i32(self, offset: usize, value: i32) -> Self {
        self.put(offset, &value.to_ne_bytes())
    }

    fn f32(self, offset: usize, value: f32) -> Self {
        self.put(offset, &value.to_ne_bytes())
    }

    fn f32s(self, offset: usize, values: &[f32]) -> Self {
        values
            .iter()
            .enumerate()
            .fold(self, |native, (idx, &value)| native.f32(offset + 4 * idx, value))
    }

    fn u64(self, offset: usize, value: u64) -> Self {
        self.put(offset, &value.to_ne_bytes())
    }

    fn decode(self) -> Event {
        Event::decode(&RawEvent::from_bytes(self.0), &NoStrings).unwrap()
    }

    fn decode_with(self, strings: &StringTable) -> Event {
        Event::decode(&RawEvent::from_bytes(self.0), strings).unwrap()
    }
}

#[test]
fn sensor() {
    let data = [0.5, -1.0, 2.25, 9.81, 0.0, -0.125];
    let event = Native::new(EventType::SENSOR_UPDATE, 77)
        .u32(16, 4)
        .f32s(20, &data)
        .u32(44, 0xffff_ffff)
        .u64(48, 123_456_789)
        .decode();

    assert_eq!(
        event,
        Event::Sensor(Sensor {
            timestamp: 77,
            which: 4,
            data,
            sensor_timestamp: 123_456_789,
        })
    );
}

#[test]
fn touch_finger() {
    let event = Native::new(EventType::FINGER_MOTION, 5)
        .u64(16, 0x1_0000_0002)
        .u64(24, 3)
        .f32(32, 0.25)
        .f32(36, 0.75)
        .f32(40, -0.01)
        .f32(44, 0.02)
        .f32(48, 0.9)
        .u32(52, 12)
        .decode();

    assert_eq!(
        event,
        Event::TouchFinger(TouchFinger {
            ty: EventType::FINGER_MOTION,
            timestamp: 5,
            touch_id: 0x1_0000_0002,
            finger_id: 3,
            x: 0.25,
            y: 0.75,
            dx: -0.01,
            dy: 0.02,
            pressure: 0.9,
            window_id: 12,
        })
    );
}

#[test]
fn text_editing() {
    let mut strings = StringTable::new();
    let text = strings.add_string("かな");

    let event = Native::new(EventType::TEXT_EDITING, 8)
        .u32(16, 2)
        .u32(20, 0xffff_ffff)
        .u64(24, text)
        .i32(32, 1)
        .i32(36, -1)
        .decode_with(&strings);

    assert_eq!(
        event,
        Event::TextEditing(TextEditing {
            timestamp: 8,
            window_id: 2,
            text: Some("かな".into()),
            start: 1,
            length: -1,
        })
    );
}

#[test]
fn clipboard() {
    let mut strings = StringTable::new();
    let html = strings.add_string("text/html");
    let plain = strings.add_string("text/plain");
    let list = strings.add_list(&[html, plain]);

    let event = Native::new(EventType::CLIPBOARD_UPDATE, 1)
        .u8(16, 1)
        .i32(20, 2)
        .u64(24, list)
        .decode_with(&strings);

    assert_eq!(
        event,
        Event::Clipboard(Clipboard {
            timestamp: 1,
            owner: true,
            mime_types: vec!["text/html".into(), "text/plain".into()],
        })
    );

    // A negative count reads as no types at all.
    let event = Native::new(EventType::CLIPBOARD_UPDATE, 1)
        .i32(20, -4)
        .u64(24, list)
        .decode_with(&strings);
    let Event::Clipboard(clipboard) = event else {
        panic!("expected a clipboard event");
    };
    assert!(!clipboard.owner);
    assert!(clipboard.mime_types.is_empty());
}

#[test]
fn gamepad_sensor_and_touchpad() {
    let event = Native::new(EventType::GAMEPAD_SENSOR_UPDATE, 2)
        .u32(16, 9)
        .i32(20, 1)
        .f32s(24, &[1.0, 2.0, 3.0])
        .u64(40, 987)
        .decode();

    assert_eq!(
        event,
        Event::GamepadSensor(GamepadSensor {
            timestamp: 2,
            which: 9,
            sensor: 1,
            data: [1.0, 2.0, 3.0],
            sensor_timestamp: 987,
        })
    );

    let event = Native::new(EventType::GAMEPAD_TOUCHPAD_DOWN, 3)
        .u32(16, 9)
        .i32(20, 0)
        .i32(24, 1)
        .f32(28, 0.5)
        .f32(32, 0.125)
        .f32(36, 1.0)
        .decode();

    assert_eq!(
        event,
        Event::GamepadTouchpad(GamepadTouchpad {
            ty: EventType::GAMEPAD_TOUCHPAD_DOWN,
            timestamp: 3,
            which: 9,
            touchpad: 0,
            finger: 1,
            x: 0.5,
            y: 0.125,
            pressure: 1.0,
        })
    );
}

#[test]
fn audio_device() {
    let event = Native::new(EventType::AUDIO_DEVICE_REMOVED, 4)
        .u32(16, 31)
        .u8(20, 1)
        .decode();

    assert_eq!(
        event,
        Event::AudioDevice(AudioDevice {
            ty: EventType::AUDIO_DEVICE_REMOVED,
            timestamp: 4,
            which: 31,
            recording: true,
        })
    );
}

#[test]
fn mouse_button_and_wheel() {
    let event = Native::new(EventType::MOUSE_BUTTON_DOWN, 6)
        .u32(16, 1)
        .u32(20, 2)
        .u8(24, 3)
        .u8(25, 1)
        .u8(26, 2)
        .f32(28, 10.5)
        .f32(32, 20.5)
        .decode();

    assert_eq!(
        event,
        Event::MouseButton(MouseButton {
            ty: EventType::MOUSE_BUTTON_DOWN,
            timestamp: 6,
            window_id: 1,
            which: 2,
            button: 3,
            down: true,
            clicks: 2,
            x: 10.5,
            y: 20.5,
        })
    );

    let event = Native::new(EventType::MOUSE_WHEEL, 7)
        .u32(16, 1)
        .u32(20, 2)
        .f32(24, 0.0)
        .f32(28, -3.0)
        .u32(32, 1)
        .f32(36, 100.0)
        .f32(40, 200.0)
        .decode();

    assert_eq!(
        event,
        Event::MouseWheel(MouseWheel {
            timestamp: 7,
            window_id: 1,
            which: 2,
            x: 0.0,
            y: -3.0,
            direction: WheelDirection::Flipped,
            mouse_x: 100.0,
            mouse_y: 200.0,
        })
    );
}

#[test]
fn joystick_motion() {
    let event = Native::new(EventType::JOYSTICK_AXIS_MOTION, 1)
        .u32(16, 5)
        .u8(20, 2)
        .i16(24, -32768)
        .decode();
    assert_eq!(
        event,
        Event::JoyAxis(Axis {
            timestamp: 1,
            which: 5,
            axis: 2,
            value: -32768,
        })
    );

    let event = Native::new(EventType::GAMEPAD_AXIS_MOTION, 1)
        .u32(16, 5)
        .u8(20, 4)
        .i16(24, 32767)
        .decode();
    assert_eq!(
        event,
        Event::GamepadAxis(Axis {
            timestamp: 1,
            which: 5,
            axis: 4,
            value: 32767,
        })
    );

    let event = Native::new(EventType::JOYSTICK_BALL_MOTION, 2)
        .u32(16, 5)
        .u8(20, 1)
        .i16(24, -7)
        .i16(26, 9)
        .decode();
    assert_eq!(
        event,
        Event::JoyBall(JoyBall {
            timestamp: 2,
            which: 5,
            ball: 1,
            xrel: -7,
            yrel: 9,
        })
    );

    let event = Native::new(EventType::JOYSTICK_HAT_MOTION, 3)
        .u32(16, 5)
        .u8(20, 0)
        .u8(21, 0x09)
        .decode();
    assert_eq!(
        event,
        Event::JoyHat(JoyHat {
            timestamp: 3,
            which: 5,
            hat: 0,
            value: 0x09,
        })
    );
}

#[test]
fn pen_tip_and_button() {
    let axes = [0.5, 0.1, -0.1, 0.0, 90.0, 1.0];
    let event = Native::new(EventType::PEN_DOWN, 10)
        .u32(16, 3)
        .u32(20, 8)
        .u8(24, 1)
        .u8(25, 1)
        .u16(26, 0x0003)
        .f32(28, 40.0)
        .f32(32, 50.0)
        .f32s(36, &axes)
        .decode();

    assert_eq!(
        event,
        Event::PenTip(PenTip {
            ty: EventType::PEN_DOWN,
            timestamp: 10,
            window_id: 3,
            which: 8,
            tip: 1,
            down: true,
            pen_state: 0x0003,
            x: 40.0,
            y: 50.0,
            axes,
        })
    );

    let event = Native::new(EventType::PEN_BUTTON_UP, 11)
        .u32(16, 3)
        .u32(20, 8)
        .u8(24, 2)
        .u8(25, 0)
        .u16(26, 0x0001)
        .f32(28, 1.0)
        .f32(32, 2.0)
        .f32s(36, &axes)
        .decode();

    assert_eq!(
        event,
        Event::PenButton(PenButton {
            ty: EventType::PEN_BUTTON_UP,
            timestamp: 11,
            window_id: 3,
            which: 8,
            button: 2,
            down: false,
            pen_state: 0x0001,
            x: 1.0,
            y: 2.0,
            axes,
        })
    );
}

#[test]
fn display_and_render() {
    let event = Native::new(EventType::DISPLAY_MOVED, 12)
        .u32(16, 2)
        .i32(20, -1920)
        .i32(24, 0)
        .decode();

    assert_eq!(
        event,
        Event::Display(Display {
            ty: EventType::DISPLAY_MOVED,
            timestamp: 12,
            display_id: 2,
            data1: -1920,
            data2: 0,
        })
    );

    let event = Native::new(EventType::RENDER_DEVICE_LOST, 13)
        .u32(16, 6)
        .decode();

    assert_eq!(
        event,
        Event::Render(Render {
            ty: EventType::RENDER_DEVICE_LOST,
            timestamp: 13,
            window_id: 6,
        })
    );
}
