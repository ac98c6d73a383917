use std::collections::{HashMap, HashSet, VecDeque};

use gilrs::{Axis, Button, EventType, GamepadId, Gilrs, MappingSource, ev::Code};

use super::{
    DeviceIndex, GamepadInfo, HostError, HostEvent, InstanceId, JoystickInfo, gamepad_axis,
    gamepad_button,
};

/// Raw element codes seen on one device, in first-seen order.
#[derive(Default)]
struct DeviceCodes {
    buttons: Vec<Code>,
    axes: Vec<Code>,
}

fn code_index(codes: &mut Vec<Code>, code: Code) -> u8 {
    let index = match codes.iter().position(|c| *c == code) {
        Some(index) => index,
        None => {
            codes.push(code);
            codes.len() - 1
        }
    };

    index.min(u8::MAX as usize) as u8
}

/// Controller events from gilrs, expressed in the host vocabulary.
///
/// The gilrs gamepad id doubles as device index and instance id.
pub(crate) struct GamepadSource {
    gilrs: Gilrs,
    mapped: HashSet<GamepadId>,
    codes: HashMap<GamepadId, DeviceCodes>,
    pending: VecDeque<HostEvent>,
}

impl GamepadSource {
    pub fn new() -> Result<Self, HostError> {
        let gilrs = match Gilrs::new() {
            Ok(gilrs) => gilrs,
            Err(gilrs::Error::NotImplemented(gilrs)) => {
                log::warn!("Gamepads are not supported on this platform");
                gilrs
            }
            Err(e) => return Err(HostError::Init(format!("gilrs: {}", e))),
        };

        let mut source = Self {
            gilrs,
            mapped: HashSet::new(),
            codes: HashMap::new(),
            pending: VecDeque::new(),
        };

        let connected: Vec<GamepadId> = source.gilrs.gamepads().map(|(id, _)| id).collect();
        for id in connected {
            source.connected(id);
        }

        Ok(source)
    }

    fn find(&self, device: DeviceIndex) -> Option<GamepadId> {
        self.gilrs
            .gamepads()
            .map(|(id, _)| id)
            .find(|id| usize::from(*id) == device as usize)
    }

    fn connected(&mut self, id: GamepadId) {
        let device = usize::from(id) as DeviceIndex;
        self.pending.push_back(HostEvent::JoystickAdded { device });

        let mapped = self
            .gilrs
            .connected_gamepad(id)
            .is_some_and(|g| g.mapping_source() != MappingSource::None);

        if mapped {
            self.mapped.insert(id);
            self.pending.push_back(HostEvent::GamepadAdded { device });
        }

        log::info!("Controller {} connected, mapped: {}", device, mapped);
    }

    fn disconnected(&mut self, id: GamepadId) {
        let instance = usize::from(id) as InstanceId;
        self.pending.push_back(HostEvent::JoystickRemoved { instance });

        if self.mapped.remove(&id) {
            self.pending.push_back(HostEvent::GamepadRemoved { instance });
        }

        self.codes.remove(&id);
        log::info!("Controller {} disconnected", instance);
    }

    /// Moves every pending controller event into `events`.
    pub fn poll(&mut self, events: &mut VecDeque<HostEvent>) {
        while let Some(event) = self.gilrs.next_event() {
            let id = event.id;
            let instance = usize::from(id) as InstanceId;
            let mapped = self.mapped.contains(&id);

            match event.event {
                EventType::Connected => self.connected(id),
                EventType::Disconnected => self.disconnected(id),

                EventType::ButtonPressed(button, code) => self.button(id, button, code, true),
                EventType::ButtonReleased(button, code) => self.button(id, button, code, false),

                EventType::ButtonChanged(button, value, _) if mapped => {
                    let axis = match button {
                        Button::LeftTrigger2 => gamepad_axis::TRIGGER_LEFT,
                        Button::RightTrigger2 => gamepad_axis::TRIGGER_RIGHT,
                        _ => continue,
                    };

                    self.pending.push_back(HostEvent::GamepadAxis {
                        instance,
                        axis: axis as u8,
                        value: axis_value(value),
                    });
                }

                EventType::AxisChanged(axis, value, code) => {
                    if mapped {
                        if let Some((axis, invert)) = standard_axis(axis) {
                            let value = if invert { -value } else { value };
                            self.pending.push_back(HostEvent::GamepadAxis {
                                instance,
                                axis,
                                value: axis_value(value),
                            });
                        }
                    } else {
                        let codes = self.codes.entry(id).or_default();
                        self.pending.push_back(HostEvent::JoystickAxis {
                            instance,
                            axis: code_index(&mut codes.axes, code),
                            value: axis_value(value),
                        });
                    }
                }

                _ => {}
            }
        }

        events.extend(self.pending.drain(..));
    }

    fn button(&mut self, id: GamepadId, button: Button, code: Code, pressed: bool) {
        let instance = usize::from(id) as InstanceId;

        if self.mapped.contains(&id) {
            if let Some(button) = standard_button(button) {
                self.pending.push_back(HostEvent::GamepadButton {
                    instance,
                    button,
                    pressed,
                });
            }
        } else {
            let codes = self.codes.entry(id).or_default();
            self.pending.push_back(HostEvent::JoystickButton {
                instance,
                button: code_index(&mut codes.buttons, code),
                pressed,
            });
        }
    }

    pub fn is_gamepad(&self, device: DeviceIndex) -> bool {
        self.find(device).is_some_and(|id| self.mapped.contains(&id))
    }

    pub fn open_joystick(&mut self, device: DeviceIndex) -> Option<JoystickInfo> {
        let id = self.find(device)?;
        let gamepad = self.gilrs.connected_gamepad(id)?;

        let info = JoystickInfo {
            instance: usize::from(id) as InstanceId,
            name: gamepad.name().to_string(),
            button_count: count_present(&BUTTONS, |b| gamepad.button_code(b).is_some()),
            axis_count: count_present(&AXES, |a| gamepad.axis_code(a).is_some()),
            vendor: gamepad.vendor_id().unwrap_or(0),
            product: gamepad.product_id().unwrap_or(0),
            version: 0,
        };

        Some(info)
    }

    pub fn open_gamepad(&mut self, device: DeviceIndex) -> Option<GamepadInfo> {
        let id = self.find(device)?;
        if !self.mapped.contains(&id) {
            return None;
        }

        let gamepad = self.gilrs.connected_gamepad(id)?;
        let info = GamepadInfo {
            instance: usize::from(id) as InstanceId,
            name: gamepad.name().to_string(),
            vendor: gamepad.vendor_id().unwrap_or(0),
            product: gamepad.product_id().unwrap_or(0),
            version: 0,
        };

        Some(info)
    }
}

const BUTTONS: [Button; 19] = [
    Button::South,
    Button::East,
    Button::North,
    Button::West,
    Button::C,
    Button::Z,
    Button::LeftTrigger,
    Button::LeftTrigger2,
    Button::RightTrigger,
    Button::RightTrigger2,
    Button::Select,
    Button::Start,
    Button::Mode,
    Button::LeftThumb,
    Button::RightThumb,
    Button::DPadUp,
    Button::DPadDown,
    Button::DPadLeft,
    Button::DPadRight,
];

const AXES: [Axis; 8] = [
    Axis::LeftStickX,
    Axis::LeftStickY,
    Axis::LeftZ,
    Axis::RightStickX,
    Axis::RightStickY,
    Axis::RightZ,
    Axis::DPadX,
    Axis::DPadY,
];

/// Number of elements the device reports a code for.
///
/// gilrs fills a gamepad's state lazily from events, so the element count
/// at connect time has to come from the code lookups instead.
fn count_present<T: Copy>(all: &[T], present: impl Fn(T) -> bool) -> u32 {
    all.iter().filter(|element| present(**element)).count() as u32
}

fn standard_button(button: Button) -> Option<u8> {
    let code = match button {
        Button::South => gamepad_button::A,
        Button::East => gamepad_button::B,
        Button::West => gamepad_button::X,
        Button::North => gamepad_button::Y,
        Button::Select => gamepad_button::BACK,
        Button::Mode => gamepad_button::GUIDE,
        Button::Start => gamepad_button::START,
        Button::LeftThumb => gamepad_button::LEFT_STICK,
        Button::RightThumb => gamepad_button::RIGHT_STICK,
        Button::LeftTrigger => gamepad_button::LEFT_SHOULDER,
        Button::RightTrigger => gamepad_button::RIGHT_SHOULDER,
        Button::DPadUp => gamepad_button::DPAD_UP,
        Button::DPadDown => gamepad_button::DPAD_DOWN,
        Button::DPadLeft => gamepad_button::DPAD_LEFT,
        Button::DPadRight => gamepad_button::DPAD_RIGHT,
        _ => return None,
    };

    Some(code as u8)
}

/// Standard axis code, and whether the direction is flipped (gilrs Y points up).
fn standard_axis(axis: Axis) -> Option<(u8, bool)> {
    let mapped = match axis {
        Axis::LeftStickX => (gamepad_axis::LEFT_X, false),
        Axis::LeftStickY => (gamepad_axis::LEFT_Y, true),
        Axis::RightStickX => (gamepad_axis::RIGHT_X, false),
        Axis::RightStickY => (gamepad_axis::RIGHT_Y, true),
        Axis::LeftZ => (gamepad_axis::TRIGGER_LEFT, false),
        Axis::RightZ => (gamepad_axis::TRIGGER_RIGHT, false),
        _ => return None,
    };

    Some((mapped.0 as u8, mapped.1))
}

fn axis_value(value: f32) -> i16 {
    let value = value.clamp(-1.0, 1.0);
    if value >= 0.0 {
        (value * 32767.0).round() as i16
    } else {
        (value * 32768.0).round() as i16
    }
}
