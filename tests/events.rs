mod common;

use std::{cell::RefCell, rc::Rc};

use common::{DeviceOptions, MockHost, recording_desc};
use est_platform::{
    host::{HostEvent, gamepad_axis, gamepad_button, mouse_button, scancode},
    input::{ControllerAxis, ControllerButton, GamepadAxis, GamepadButton, Key, MouseButton},
    platform::{ControllerInfo, ControllerKind, Platform, PlatformDesc},
};

/// Everything the callbacks received, in order.
#[derive(Debug, Clone, PartialEq)]
enum Seen {
    Exit,
    Mouse(MouseButton, bool),
    Wheel(f32, f32),
    Key(Key, bool),
    Text(String),
    Connect(ControllerInfo),
    Disconnect(usize, ControllerKind),
    Button(usize, ControllerButton, bool),
    Axis(usize, ControllerAxis, f32),
}

type Journal = Rc<RefCell<Vec<Seen>>>;

fn observe(desc: PlatformDesc) -> (PlatformDesc, Journal) {
    let journal = Journal::default();

    let (exit, mouse, wheel, key, text) = (
        journal.clone(),
        journal.clone(),
        journal.clone(),
        journal.clone(),
        journal.clone(),
    );
    let (connect, disconnect, button, axis) = (
        journal.clone(),
        journal.clone(),
        journal.clone(),
        journal.clone(),
    );

    let desc = desc
        .on_exit_request(move || exit.borrow_mut().push(Seen::Exit))
        .on_mouse_button(move |b, pressed| mouse.borrow_mut().push(Seen::Mouse(b, pressed)))
        .on_mouse_wheel(move |x, y| wheel.borrow_mut().push(Seen::Wheel(x, y)))
        .on_key(move |k, pressed| key.borrow_mut().push(Seen::Key(k, pressed)))
        .on_text(move |t| text.borrow_mut().push(Seen::Text(t.to_string())))
        .on_controller_connect(move |info| connect.borrow_mut().push(Seen::Connect(info.clone())))
        .on_controller_disconnect(move |index, kind| {
            disconnect.borrow_mut().push(Seen::Disconnect(index, kind))
        })
        .on_controller_button(move |index, b, pressed| {
            button.borrow_mut().push(Seen::Button(index, b, pressed))
        })
        .on_controller_axis(move |index, a, value| {
            axis.borrow_mut().push(Seen::Axis(index, a, value))
        });

    (desc, journal)
}

fn observed_with(desc: PlatformDesc) -> (Platform<MockHost>, Journal) {
    let (desc, journal) = observe(desc);
    let mut platform = Platform::new(MockHost::new(), desc);
    platform.startup().unwrap();
    (platform, journal)
}

fn observed() -> (Platform<MockHost>, Journal) {
    let (desc, _logs, _device) = recording_desc(DeviceOptions::default());
    observed_with(desc)
}

/// Pushes `events`, pumps once and returns what the callbacks saw.
fn pump(platform: &mut Platform<MockHost>, journal: &Journal, events: Vec<HostEvent>) -> Vec<Seen> {
    for event in events {
        platform.host_mut().push(event);
    }

    platform.poll_events();
    journal.borrow_mut().drain(..).collect()
}

#[test]
fn quit_requests_exit() {
    let (mut platform, journal) = observed();

    assert_eq!(pump(&mut platform, &journal, vec![HostEvent::Quit]), vec![Seen::Exit]);
    assert!(platform.is_running());
}

#[test]
fn poll_without_events_pumps_once() {
    let (mut platform, journal) = observed();

    assert!(pump(&mut platform, &journal, vec![]).is_empty());
    assert_eq!(platform.host().calls.pumps, 1);
}

#[test]
fn mouse_buttons_and_wheel() {
    let (mut platform, journal) = observed();

    let seen = pump(
        &mut platform,
        &journal,
        vec![
            HostEvent::MouseButton {
                button: mouse_button::LEFT,
                pressed: true,
            },
            HostEvent::MouseButton {
                button: mouse_button::MIDDLE,
                pressed: false,
            },
            HostEvent::MouseButton {
                button: mouse_button::RIGHT,
                pressed: true,
            },
            HostEvent::MouseButton {
                button: mouse_button::X2,
                pressed: true,
            },
            HostEvent::MouseWheel { x: 0.0, y: -1.5 },
        ],
    );

    assert_eq!(
        seen,
        vec![
            Seen::Mouse(MouseButton::Left, true),
            Seen::Mouse(MouseButton::Middle, false),
            Seen::Mouse(MouseButton::Right, true),
            Seen::Mouse(MouseButton::None, true),
            Seen::Wheel(0.0, -1.5),
        ]
    );
}

#[test]
fn key_repeats_are_filtered() {
    let (mut platform, journal) = observed();

    let key = |scancode, pressed, repeat| HostEvent::Key {
        scancode,
        pressed,
        repeat,
    };

    let seen = pump(
        &mut platform,
        &journal,
        vec![
            key(scancode::A, true, false),
            key(scancode::A, true, true),
            key(scancode::A, true, true),
            key(scancode::A, false, false),
            key(scancode::RETURN, true, false),
            key(9999, true, false),
        ],
    );

    assert_eq!(
        seen,
        vec![
            Seen::Key(Key::A, true),
            Seen::Key(Key::A, false),
            Seen::Key(Key::Enter, true),
            Seen::Key(Key::Unknown, true),
        ]
    );
}

#[test]
fn text_input_is_forwarded() {
    let (mut platform, journal) = observed();

    let seen = pump(
        &mut platform,
        &journal,
        vec![HostEvent::TextInput("é".into()), HostEvent::TextInput("a".into())],
    );

    assert_eq!(
        seen,
        vec![Seen::Text("é".to_string()), Seen::Text("a".to_string())]
    );
}

#[test]
fn events_without_callbacks_are_dropped() {
    let (desc, logs, _device) = recording_desc(DeviceOptions::default());
    let mut platform = Platform::new(MockHost::new(), desc);
    platform.startup().unwrap();
    platform.host_mut().add_joystick(0, 7, "stick");

    for event in [
        HostEvent::Quit,
        HostEvent::MouseWheel { x: 1.0, y: 1.0 },
        HostEvent::JoystickAdded { device: 0 },
        HostEvent::JoystickButton {
            instance: 7,
            button: 1,
            pressed: true,
        },
    ] {
        platform.host_mut().push(event);
    }
    platform.poll_events();

    // slots are tracked even when nobody listens
    assert_eq!(platform.joystick_count(), 1);
    assert!(logs.errors().is_empty());
}

#[test]
fn joystick_lifecycle() {
    let (mut platform, journal) = observed();
    platform.host_mut().add_joystick(3, 42, "Arcade Stick");

    let seen = pump(&mut platform, &journal, vec![HostEvent::JoystickAdded { device: 3 }]);
    assert_eq!(
        seen,
        vec![Seen::Connect(ControllerInfo {
            index: 0,
            kind: ControllerKind::Joystick,
            name: "Arcade Stick".to_string(),
            button_count: 12,
            axis_count: 4,
            hat_count: 0,
            vendor: 0x046d,
            product: 0xc216,
            version: 0x0110,
        })]
    );
    assert_eq!(platform.host().calls.opened_joysticks, vec![3]);

    let seen = pump(
        &mut platform,
        &journal,
        vec![
            HostEvent::JoystickButton {
                instance: 42,
                button: 7,
                pressed: true,
            },
            HostEvent::JoystickAxis {
                instance: 42,
                axis: 2,
                value: i16::MIN,
            },
            HostEvent::JoystickAxis {
                instance: 42,
                axis: 2,
                value: i16::MAX,
            },
            HostEvent::JoystickRemoved { instance: 42 },
        ],
    );

    assert_eq!(
        seen,
        vec![
            Seen::Button(0, ControllerButton::Joystick(7), true),
            Seen::Axis(0, ControllerAxis::Joystick(2), -1.0),
            Seen::Axis(0, ControllerAxis::Joystick(2), 1.0),
            Seen::Disconnect(0, ControllerKind::Joystick),
        ]
    );
    assert_eq!(platform.host().calls.closed_joysticks, vec![42]);
    assert_eq!(platform.joystick_count(), 0);
}

#[test]
fn joysticks_take_the_first_free_slot() {
    let (mut platform, journal) = observed();
    for (device, instance) in [(0, 10), (1, 11), (2, 12)] {
        platform.host_mut().add_joystick(device, instance, "stick");
    }

    pump(
        &mut platform,
        &journal,
        vec![
            HostEvent::JoystickAdded { device: 0 },
            HostEvent::JoystickAdded { device: 1 },
        ],
    );

    let seen = pump(
        &mut platform,
        &journal,
        vec![
            HostEvent::JoystickRemoved { instance: 10 },
            HostEvent::JoystickAdded { device: 2 },
            HostEvent::JoystickButton {
                instance: 12,
                button: 0,
                pressed: true,
            },
        ],
    );

    assert!(matches!(seen[1], Seen::Connect(ControllerInfo { index: 0, .. })));
    assert_eq!(seen[2], Seen::Button(0, ControllerButton::Joystick(0), true));
    assert_eq!(platform.joystick_count(), 2);
}

#[test]
fn repeated_joystick_add_keeps_one_slot() {
    let (mut platform, journal) = observed();
    platform.host_mut().add_joystick(0, 10, "stick");

    let seen = pump(
        &mut platform,
        &journal,
        vec![
            HostEvent::JoystickAdded { device: 0 },
            HostEvent::JoystickAdded { device: 0 },
        ],
    );

    assert_eq!(seen.len(), 1);
    assert!(matches!(seen[0], Seen::Connect(ControllerInfo { index: 0, .. })));
    assert_eq!(platform.joystick_count(), 1);
    assert!(platform.host().calls.closed_joysticks.is_empty());

    // the single slot still routes and releases the device
    let seen = pump(
        &mut platform,
        &journal,
        vec![HostEvent::JoystickRemoved { instance: 10 }],
    );
    assert_eq!(seen, vec![Seen::Disconnect(0, ControllerKind::Joystick)]);
    assert_eq!(platform.joystick_count(), 0);
}

#[test]
fn gamepad_instance_keeps_one_slot() {
    let (mut platform, journal) = observed();
    platform.host_mut().add_gamepad(0, 5, "pad");
    platform.host_mut().add_gamepad(1, 5, "pad");

    let seen = pump(
        &mut platform,
        &journal,
        vec![
            HostEvent::GamepadAdded { device: 0 },
            HostEvent::GamepadAdded { device: 1 },
        ],
    );

    assert_eq!(seen.len(), 1);
    assert!(matches!(seen[0], Seen::Connect(ControllerInfo { index: 0, .. })));
    assert_eq!(platform.gamepad_count(), 1);
}

#[test]
fn gamepad_lifecycle() {
    let (mut platform, journal) = observed();
    platform.host_mut().add_gamepad(1, 77, "Xbox Controller");

    // mapped gamepads only connect through GamepadAdded
    let seen = pump(
        &mut platform,
        &journal,
        vec![
            HostEvent::JoystickAdded { device: 1 },
            HostEvent::GamepadAdded { device: 1 },
        ],
    );

    assert_eq!(
        seen,
        vec![Seen::Connect(ControllerInfo {
            index: 1,
            kind: ControllerKind::Gamepad,
            name: "Xbox Controller".to_string(),
            button_count: 15,
            axis_count: 6,
            hat_count: 1,
            vendor: 0x045e,
            product: 0x028e,
            version: 0x0114,
        })]
    );
    assert!(platform.host().calls.opened_joysticks.is_empty());
    assert_eq!(platform.joystick_count(), 0);
    assert_eq!(platform.gamepad_count(), 1);

    let seen = pump(
        &mut platform,
        &journal,
        vec![
            HostEvent::GamepadButton {
                instance: 77,
                button: gamepad_button::A as u8,
                pressed: true,
            },
            HostEvent::GamepadButton {
                instance: 77,
                button: gamepad_button::GUIDE as u8,
                pressed: false,
            },
            HostEvent::GamepadAxis {
                instance: 77,
                axis: gamepad_axis::TRIGGER_RIGHT as u8,
                value: 0,
            },
            HostEvent::GamepadRemoved { instance: 77 },
        ],
    );

    assert_eq!(
        seen,
        vec![
            Seen::Button(1, ControllerButton::Gamepad(GamepadButton::A), true),
            Seen::Button(1, ControllerButton::Gamepad(GamepadButton::Select), false),
            Seen::Axis(1, ControllerAxis::Gamepad(GamepadAxis::RightTrigger), 0.0),
            Seen::Disconnect(1, ControllerKind::Gamepad),
        ]
    );
    assert_eq!(platform.host().calls.closed_gamepads, vec![77]);
    assert_eq!(platform.gamepad_count(), 0);
}

#[test]
fn out_of_range_gamepad_codes_become_none() {
    let (mut platform, journal) = observed();
    platform.host_mut().add_gamepad(0, 5, "pad");
    pump(&mut platform, &journal, vec![HostEvent::GamepadAdded { device: 0 }]);

    let seen = pump(
        &mut platform,
        &journal,
        vec![
            HostEvent::GamepadButton {
                instance: 5,
                button: gamepad_button::COUNT as u8,
                pressed: true,
            },
            HostEvent::GamepadButton {
                instance: 5,
                button: 200,
                pressed: true,
            },
            HostEvent::GamepadAxis {
                instance: 5,
                axis: gamepad_axis::COUNT as u8,
                value: 100,
            },
        ],
    );

    assert_eq!(seen[0], Seen::Button(0, ControllerButton::Gamepad(GamepadButton::None), true));
    assert_eq!(seen[1], Seen::Button(0, ControllerButton::Gamepad(GamepadButton::None), true));
    assert!(matches!(
        seen[2],
        Seen::Axis(0, ControllerAxis::Gamepad(GamepadAxis::None), _)
    ));
}

#[test]
fn occupied_or_out_of_range_gamepad_slot_is_ignored() {
    let (mut platform, journal) = observed();
    platform.host_mut().add_gamepad(2, 20, "first");
    platform.host_mut().add_gamepad(9, 90, "far away");

    pump(&mut platform, &journal, vec![HostEvent::GamepadAdded { device: 2 }]);

    let seen = pump(
        &mut platform,
        &journal,
        vec![
            HostEvent::GamepadAdded { device: 2 },
            HostEvent::GamepadAdded { device: 9 },
        ],
    );

    assert!(seen.is_empty());
    assert_eq!(platform.host().calls.opened_gamepads, vec![2]);
    assert_eq!(platform.gamepad_count(), 1);
}

#[test]
fn joystick_capacity_overflow_is_dropped() {
    let (mut platform, journal) = observed();

    let mut events = Vec::new();
    for device in 0..5 {
        platform.host_mut().add_joystick(device, 100 + device, "stick");
        events.push(HostEvent::JoystickAdded { device });
    }

    let seen = pump(&mut platform, &journal, events);

    assert_eq!(seen.len(), 4);
    assert_eq!(platform.joystick_count(), 4);
    assert_eq!(platform.host().calls.opened_joysticks, vec![0, 1, 2, 3]);

    // the dropped device is unknown to the platform
    let seen = pump(
        &mut platform,
        &journal,
        vec![
            HostEvent::JoystickButton {
                instance: 104,
                button: 0,
                pressed: true,
            },
            HostEvent::JoystickRemoved { instance: 104 },
        ],
    );
    assert!(seen.is_empty());
    assert!(platform.host().calls.closed_joysticks.is_empty());
}

#[test]
fn max_controllers_limits_the_slots() {
    let (desc, _logs, _device) = recording_desc(DeviceOptions::default());
    let (mut platform, journal) = observed_with(desc.with_max_controllers(1));
    platform.host_mut().add_joystick(0, 1, "one");
    platform.host_mut().add_joystick(1, 2, "two");
    platform.host_mut().add_gamepad(1, 3, "pad");

    let seen = pump(
        &mut platform,
        &journal,
        vec![
            HostEvent::JoystickAdded { device: 0 },
            HostEvent::GamepadAdded { device: 1 },
        ],
    );

    assert_eq!(seen.len(), 1);
    assert_eq!(platform.joystick_count(), 1);
    assert_eq!(platform.gamepad_count(), 0);
}

#[test]
fn unknown_instances_are_dropped() {
    let (mut platform, journal) = observed();

    let seen = pump(
        &mut platform,
        &journal,
        vec![
            HostEvent::JoystickButton {
                instance: 1,
                button: 0,
                pressed: true,
            },
            HostEvent::JoystickAxis {
                instance: 1,
                axis: 0,
                value: 10,
            },
            HostEvent::GamepadButton {
                instance: 1,
                button: 0,
                pressed: true,
            },
            HostEvent::GamepadAxis {
                instance: 1,
                axis: 0,
                value: 10,
            },
            HostEvent::JoystickRemoved { instance: 1 },
            HostEvent::GamepadRemoved { instance: 1 },
        ],
    );

    assert!(seen.is_empty());
    assert!(platform.host().calls.closed_joysticks.is_empty());
    assert!(platform.host().calls.closed_gamepads.is_empty());
}

#[test]
fn failed_open_only_warns() {
    let (desc, logs, _device) = recording_desc(DeviceOptions::default());
    let (mut platform, journal) = observed_with(desc);

    // nothing plugged at device 0
    let seen = pump(
        &mut platform,
        &journal,
        vec![
            HostEvent::JoystickAdded { device: 0 },
            HostEvent::GamepadAdded { device: 0 },
        ],
    );

    assert!(seen.is_empty());
    assert_eq!(logs.warnings().len(), 2);
    assert_eq!(platform.joystick_count(), 0);
    assert_eq!(platform.gamepad_count(), 0);
}
