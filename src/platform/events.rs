use crate::{
    host::{DeviceIndex, Host, HostEvent, InstanceId, gamepad_axis, gamepad_button},
    input::{
        ControllerAxis, ControllerButton, GamepadAxis, GamepadButton, gamepad_axis_from_host,
        gamepad_button_from_host, key_from_scancode, mouse_button_from_host, normalize_axis,
    },
    platform_warn,
};

use super::{ControllerHandle, ControllerInfo, ControllerKind, Platform};

/// Button, axis and hat counts reported for every mapped gamepad.
const GAMEPAD_BUTTON_COUNT: u32 = gamepad_button::COUNT as u32;
const GAMEPAD_AXIS_COUNT: u32 = gamepad_axis::COUNT as u32;
const GAMEPAD_HAT_COUNT: u32 = 1;

impl<H: Host> Platform<H> {
    /// Pumps the host once and dispatches every queued event to the callbacks.
    ///
    /// Never blocks waiting for new events.
    pub fn poll_events(&mut self) {
        if self.guard("poll_events").is_none() {
            return;
        }

        self.host.pump_events();

        while let Some(event) = self.host.poll_event() {
            self.dispatch(event);
        }
    }

    fn dispatch(&mut self, event: HostEvent) {
        let callbacks = &mut self.desc.callbacks;

        match event {
            HostEvent::Quit => {
                if let Some(callback) = callbacks.exit_request.as_mut() {
                    callback();
                }
            }

            HostEvent::MouseButton { button, pressed } => {
                if let Some(callback) = callbacks.mouse_button.as_mut() {
                    callback(mouse_button_from_host(button), pressed);
                }
            }

            HostEvent::MouseWheel { x, y } => {
                if let Some(callback) = callbacks.mouse_wheel.as_mut() {
                    callback(x, y);
                }
            }

            HostEvent::Key {
                scancode,
                pressed,
                repeat,
            } => {
                if repeat {
                    return;
                }

                if let Some(callback) = callbacks.key.as_mut() {
                    callback(key_from_scancode(scancode), pressed);
                }
            }

            HostEvent::TextInput(text) => {
                if let Some(callback) = callbacks.text.as_mut() {
                    callback(&text);
                }
            }

            HostEvent::JoystickAdded { device } => self.joystick_added(device),
            HostEvent::JoystickRemoved { instance } => self.joystick_removed(instance),

            HostEvent::JoystickButton {
                instance,
                button,
                pressed,
            } => {
                let Some(index) = self.joysticks.find(instance) else {
                    return;
                };

                if let Some(callback) = callbacks.controller_button.as_mut() {
                    callback(index, ControllerButton::Joystick(button), pressed);
                }
            }

            HostEvent::JoystickAxis {
                instance,
                axis,
                value,
            } => {
                let Some(index) = self.joysticks.find(instance) else {
                    return;
                };

                if let Some(callback) = callbacks.controller_axis.as_mut() {
                    callback(index, ControllerAxis::Joystick(axis), normalize_axis(value));
                }
            }

            HostEvent::GamepadAdded { device } => self.gamepad_added(device),
            HostEvent::GamepadRemoved { instance } => self.gamepad_removed(instance),

            HostEvent::GamepadButton {
                instance,
                button,
                pressed,
            } => {
                let Some(index) = self.gamepads.find(instance) else {
                    return;
                };

                let button = match (button as i32) < gamepad_button::COUNT {
                    true => gamepad_button_from_host(button as i32),
                    false => GamepadButton::None,
                };

                if let Some(callback) = callbacks.controller_button.as_mut() {
                    callback(index, ControllerButton::Gamepad(button), pressed);
                }
            }

            HostEvent::GamepadAxis {
                instance,
                axis,
                value,
            } => {
                let Some(index) = self.gamepads.find(instance) else {
                    return;
                };

                let axis = match (axis as i32) < gamepad_axis::COUNT {
                    true => gamepad_axis_from_host(axis as i32),
                    false => GamepadAxis::None,
                };

                if let Some(callback) = callbacks.controller_axis.as_mut() {
                    callback(index, ControllerAxis::Gamepad(axis), normalize_axis(value));
                }
            }
        }
    }

    fn joystick_added(&mut self, device: DeviceIndex) {
        // Mapped gamepads arrive again as GamepadAdded.
        if self.host.is_gamepad(device) {
            return;
        }

        let Some(index) = self.joysticks.first_free() else {
            return;
        };

        let Some(info) = self.host.open_joystick(device) else {
            platform_warn!(self.desc.logger, "Failed to open joystick {}", device);
            return;
        };

        // A device occupies at most one slot.
        if self.joysticks.find(info.instance).is_some() {
            return;
        }

        self.joysticks.insert_at(
            index,
            ControllerHandle {
                instance: info.instance,
            },
        );

        let info = ControllerInfo {
            index,
            kind: ControllerKind::Joystick,
            name: info.name,
            button_count: info.button_count,
            axis_count: info.axis_count,
            hat_count: 0,
            vendor: info.vendor,
            product: info.product,
            version: info.version,
        };

        if let Some(callback) = self.desc.callbacks.controller_connect.as_mut() {
            callback(&info);
        }
    }

    fn joystick_removed(&mut self, instance: InstanceId) {
        let Some(index) = self.joysticks.find(instance) else {
            return;
        };

        self.joysticks.take(index);

        if let Some(callback) = self.desc.callbacks.controller_disconnect.as_mut() {
            callback(index, ControllerKind::Joystick);
        }

        self.host.close_joystick(instance);
    }

    fn gamepad_added(&mut self, device: DeviceIndex) {
        let index = device as usize;
        if !self.gamepads.is_free(index) {
            return;
        }

        let Some(info) = self.host.open_gamepad(device) else {
            platform_warn!(self.desc.logger, "Failed to open gamepad {}", device);
            return;
        };

        if self.gamepads.find(info.instance).is_some() {
            return;
        }

        self.gamepads.insert_at(
            index,
            ControllerHandle {
                instance: info.instance,
            },
        );

        let info = ControllerInfo {
            index,
            kind: ControllerKind::Gamepad,
            name: info.name,
            button_count: GAMEPAD_BUTTON_COUNT,
            axis_count: GAMEPAD_AXIS_COUNT,
            hat_count: GAMEPAD_HAT_COUNT,
            vendor: info.vendor,
            product: info.product,
            version: info.version,
        };

        if let Some(callback) = self.desc.callbacks.controller_connect.as_mut() {
            callback(&info);
        }
    }

    fn gamepad_removed(&mut self, instance: InstanceId) {
        let Some(index) = self.gamepads.find(instance) else {
            return;
        };

        self.gamepads.take(index);

        if let Some(callback) = self.desc.callbacks.controller_disconnect.as_mut() {
            callback(index, ControllerKind::Gamepad);
        }

        self.host.close_gamepad(instance);
    }
}
