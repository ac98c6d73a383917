use std::{
    collections::{HashMap, VecDeque},
    sync::{Mutex, PoisonError},
    thread::ThreadId,
    time::Duration,
};

use smol_str::SmolStr;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalPosition},
    event::{self, ElementState, MouseScrollDelta},
    event_loop::{ActiveEventLoop, EventLoop, EventLoopProxy},
    keyboard::{KeyCode, PhysicalKey},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Fullscreen, Window, WindowAttributes, WindowId},
};

#[cfg(target_os = "windows")]
use winit::platform::windows::EventLoopBuilderExtWindows;

#[cfg(all(not(feature = "x11"), target_os = "linux"))]
use winit::platform::wayland::EventLoopBuilderExtWayland;

#[cfg(all(feature = "x11", target_os = "linux"))]
use winit::platform::x11::EventLoopBuilderExtX11;

#[cfg(feature = "gamepad")]
use super::gamepad::GamepadSource;

use super::{
    DeviceIndex, GamepadInfo, Host, HostError, HostEvent, HostWindow, InstanceId, JoystickInfo,
    WindowDesc, mouse_button, scancode,
};
use crate::{math::Point2, utils::LogBridge};

// winit allows a single event loop per process, and only on the thread
// that created it.
lazy_static::lazy_static! {
    static ref EVENT_LOOP_THREAD_ID: Mutex<Option<ThreadId>> = Mutex::new(None);
}

/// Windows are created inside the event loop, so creation goes through the proxy.
pub(crate) enum HostCommand {
    CreateWindow {
        ref_id: u64,
        attributes: WindowAttributes,
        centered: bool,
    },
}

#[derive(Default)]
struct HostState {
    windows: HashMap<u64, Window>,
    window_ids: HashMap<WindowId, u64>,
    events: VecDeque<HostEvent>,
    last_error: Option<String>,
}

impl ApplicationHandler<HostCommand> for HostState {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, window_id: WindowId, event: event::WindowEvent) {
        if !self.window_ids.contains_key(&window_id) {
            return;
        }

        match event {
            event::WindowEvent::CloseRequested => {
                self.events.push_back(HostEvent::Quit);
            }
            event::WindowEvent::MouseInput { state, button, .. } => {
                self.events.push_back(HostEvent::MouseButton {
                    button: mouse_button_code(button),
                    pressed: state == ElementState::Pressed,
                });
            }
            event::WindowEvent::MouseWheel { delta, .. } => {
                let (x, y) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => (x, y),
                    MouseScrollDelta::PixelDelta(pos) => (pos.x as f32, pos.y as f32),
                };

                self.events.push_back(HostEvent::MouseWheel { x, y });
            }
            event::WindowEvent::KeyboardInput {
                event, is_synthetic, ..
            } => {
                if is_synthetic {
                    return;
                }

                let code = match event.physical_key {
                    PhysicalKey::Code(code) => scancode_from_key_code(code),
                    PhysicalKey::Unidentified(_) => scancode::UNKNOWN,
                };

                let pressed = event.state == ElementState::Pressed;
                self.events.push_back(HostEvent::Key {
                    scancode: code,
                    pressed,
                    repeat: event.repeat,
                });

                if let Some(text) = event.text.as_ref().filter(|_| pressed) {
                    if text.chars().any(|c| !c.is_control()) {
                        self.events
                            .push_back(HostEvent::TextInput(SmolStr::new(text.as_str())));
                    }
                }
            }
            _ => {}
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, command: HostCommand) {
        match command {
            HostCommand::CreateWindow {
                ref_id,
                attributes,
                centered,
            } => {
                let window = match event_loop.create_window(attributes) {
                    Ok(window) => window,
                    Err(e) => {
                        log::error!("Failed to create window: {}", e);
                        self.last_error = Some(e.to_string());
                        return;
                    }
                };

                if centered {
                    let monitor = window.current_monitor().or_else(|| event_loop.primary_monitor());
                    if let Some(monitor) = monitor {
                        let area = monitor.size();
                        let size = window.outer_size();
                        let origin = monitor.position();

                        window.set_outer_position(PhysicalPosition::new(
                            origin.x + (area.width as i32 - size.width as i32) / 2,
                            origin.y + (area.height as i32 - size.height as i32) / 2,
                        ));
                    }
                }

                log::debug!("Window {} created", ref_id);
                self.window_ids.insert(window.id(), ref_id);
                self.windows.insert(ref_id, window);
            }
        }
    }
}

/// [Host] backed by a pumped winit event loop, plus gilrs controllers with
/// the `gamepad` feature.
pub struct WinitHost {
    event_loop: Option<EventLoop<HostCommand>>,
    proxy: Option<EventLoopProxy<HostCommand>>,
    state: HostState,
    next_window: u64,
    swap_interval: i32,
    clipboard: Option<arboard::Clipboard>,

    #[cfg(feature = "gamepad")]
    gamepads: Option<GamepadSource>,
}

impl WinitHost {
    pub fn new() -> Self {
        Self {
            event_loop: None,
            proxy: None,
            state: HostState::default(),
            next_window: 1,
            swap_interval: 0,
            clipboard: None,

            #[cfg(feature = "gamepad")]
            gamepads: None,
        }
    }

    /// Swap interval last requested by the platform, for render devices
    /// that present on their own.
    pub fn swap_interval(&self) -> i32 {
        self.swap_interval
    }

    /// The winit window behind `window`, for render devices that need a surface.
    pub fn window(&self, window: HostWindow) -> Option<&Window> {
        self.state.windows.get(&window.0)
    }

    /// The system clipboard, opened on first use.
    fn system_clipboard(&mut self) -> Option<&mut arboard::Clipboard> {
        if self.clipboard.is_none() {
            match arboard::Clipboard::new() {
                Ok(clipboard) => self.clipboard = Some(clipboard),
                Err(e) => {
                    log::warn!("Failed to open clipboard: {}", e);
                    return None;
                }
            }
        }

        self.clipboard.as_mut()
    }

    fn pump(&mut self) {
        let Some(event_loop) = self.event_loop.as_mut() else {
            return;
        };

        if let PumpStatus::Exit(code) = event_loop.pump_app_events(Some(Duration::ZERO), &mut self.state) {
            log::debug!("Event loop exited with code: {}", code);
            self.state.events.push_back(HostEvent::Quit);
        }
    }
}

impl Default for WinitHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for WinitHost {
    fn version(&self) -> String {
        "winit 0.30".to_string()
    }

    fn install_log_bridge(&mut self, bridge: LogBridge) -> Result<(), HostError> {
        bridge
            .install()
            .map_err(|e| HostError::LogBridge(e.to_string()))
    }

    fn apply_display_hints(&mut self) -> bool {
        // winit opts into per-monitor DPI awareness on its own.
        true
    }

    fn init(&mut self) -> Result<(), HostError> {
        if self.event_loop.is_some() {
            return Ok(());
        }

        claim_event_loop_thread()?;

        #[cfg(feature = "gamepad")]
        let gamepads = match GamepadSource::new() {
            Ok(gamepads) => gamepads,
            Err(e) => {
                release_event_loop_thread();
                return Err(e);
            }
        };

        let mut builder = EventLoop::<HostCommand>::with_user_event();

        #[cfg(any(target_os = "windows", target_os = "linux"))]
        {
            builder.with_any_thread(true);
        }

        #[cfg(all(feature = "x11", target_os = "linux"))]
        {
            builder.with_x11();
        }

        let event_loop = match builder.build() {
            Ok(event_loop) => event_loop,
            Err(e) => {
                release_event_loop_thread();
                return Err(HostError::EventLoop(e.to_string()));
            }
        };

        self.proxy = Some(event_loop.create_proxy());
        self.event_loop = Some(event_loop);

        #[cfg(feature = "gamepad")]
        {
            self.gamepads = Some(gamepads);
        }

        Ok(())
    }

    fn create_window(&mut self, desc: &WindowDesc) -> Result<HostWindow, HostError> {
        let Some(proxy) = self.proxy.as_ref() else {
            return Err(HostError::NotInitialized);
        };

        let ref_id = self.next_window;
        self.next_window += 1;

        let attributes = Window::default_attributes()
            .with_title(desc.title.as_str())
            .with_inner_size(LogicalSize::new(desc.width as f64, desc.height as f64))
            .with_visible(!desc.hidden)
            .with_resizable(false);

        if proxy
            .send_event(HostCommand::CreateWindow {
                ref_id,
                attributes,
                centered: desc.centered,
            })
            .is_err()
        {
            return Err(HostError::EventLoop("event loop is closed".to_string()));
        }

        // The command is usually handled by the first pump, the rest covers
        // backends that deliver user events late.
        for _ in 0..8 {
            self.pump();

            if self.state.windows.contains_key(&ref_id) {
                return Ok(HostWindow(ref_id));
            }

            if let Some(error) = self.state.last_error.take() {
                return Err(HostError::WindowCreation(error));
            }
        }

        Err(HostError::WindowCreation("window was never created".to_string()))
    }

    fn destroy_window(&mut self, window: HostWindow) {
        if let Some(handle) = self.state.windows.remove(&window.0) {
            self.state.window_ids.remove(&handle.id());
        }
    }

    fn show_window(&mut self, window: HostWindow) {
        if let Some(handle) = self.state.windows.get(&window.0) {
            handle.set_visible(true);
        }
    }

    fn set_window_title(&mut self, window: HostWindow, title: &str) {
        if let Some(handle) = self.state.windows.get(&window.0) {
            handle.set_title(title);
        }
    }

    fn set_window_size(&mut self, window: HostWindow, width: i32, height: i32) {
        if let Some(handle) = self.state.windows.get(&window.0) {
            let _ = handle.request_inner_size(LogicalSize::new(width as f64, height as f64));
        }
    }

    fn window_size(&self, window: HostWindow) -> Point2 {
        match self.state.windows.get(&window.0) {
            Some(handle) => {
                let size = handle.inner_size().to_logical::<f64>(handle.scale_factor());
                Point2::new(size.width.round(), size.height.round())
            }
            None => Point2::ZERO,
        }
    }

    fn window_size_in_pixels(&self, window: HostWindow) -> Point2 {
        match self.state.windows.get(&window.0) {
            Some(handle) => {
                let size = handle.inner_size();
                Point2::new(size.width, size.height)
            }
            None => Point2::ZERO,
        }
    }

    fn set_fullscreen(&mut self, window: HostWindow, fullscreen: bool) {
        if let Some(handle) = self.state.windows.get(&window.0) {
            handle.set_fullscreen(fullscreen.then_some(Fullscreen::Borderless(None)));
        }
    }

    fn set_resizable(&mut self, window: HostWindow, resizable: bool) {
        if let Some(handle) = self.state.windows.get(&window.0) {
            handle.set_resizable(resizable);
        }
    }

    fn set_swap_interval(&mut self, interval: i32) {
        self.swap_interval = interval;
    }

    fn pump_events(&mut self) {
        self.pump();

        #[cfg(feature = "gamepad")]
        if let Some(gamepads) = self.gamepads.as_mut() {
            gamepads.poll(&mut self.state.events);
        }
    }

    fn poll_event(&mut self) -> Option<HostEvent> {
        self.state.events.pop_front()
    }

    #[cfg(feature = "gamepad")]
    fn is_gamepad(&self, device: DeviceIndex) -> bool {
        self.gamepads
            .as_ref()
            .is_some_and(|gamepads| gamepads.is_gamepad(device))
    }

    #[cfg(feature = "gamepad")]
    fn open_joystick(&mut self, device: DeviceIndex) -> Option<JoystickInfo> {
        self.gamepads.as_mut()?.open_joystick(device)
    }

    #[cfg(feature = "gamepad")]
    fn open_gamepad(&mut self, device: DeviceIndex) -> Option<GamepadInfo> {
        self.gamepads.as_mut()?.open_gamepad(device)
    }

    #[cfg(not(feature = "gamepad"))]
    fn is_gamepad(&self, _device: DeviceIndex) -> bool {
        false
    }

    #[cfg(not(feature = "gamepad"))]
    fn open_joystick(&mut self, _device: DeviceIndex) -> Option<JoystickInfo> {
        None
    }

    // gilrs keeps no per-device handles to release.
    fn close_joystick(&mut self, _instance: InstanceId) {}

    #[cfg(not(feature = "gamepad"))]
    fn open_gamepad(&mut self, _device: DeviceIndex) -> Option<GamepadInfo> {
        None
    }

    fn close_gamepad(&mut self, _instance: InstanceId) {}

    fn pref_path(&self, application: &str) -> Option<String> {
        super::default_pref_path(application)
    }

    fn set_clipboard(&mut self, text: &str) {
        let Some(clipboard) = self.system_clipboard() else {
            return;
        };

        if let Err(e) = clipboard.set_text(text) {
            log::warn!("Failed to set clipboard text: {}", e);
        }
    }

    fn clipboard(&mut self) -> Option<String> {
        match self.system_clipboard()?.get_text() {
            Ok(text) => Some(text),
            Err(arboard::Error::ContentNotAvailable) => None,
            Err(e) => {
                log::warn!("Failed to get clipboard text: {}", e);
                None
            }
        }
    }
}

/// Records the calling thread as the event loop owner.
fn claim_event_loop_thread() -> Result<(), HostError> {
    let thread_id = std::thread::current().id();
    let mut owner = EVENT_LOOP_THREAD_ID
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    match *owner {
        Some(id) if id != thread_id => Err(HostError::ThreadMismatch),
        _ => {
            *owner = Some(thread_id);
            Ok(())
        }
    }
}

/// Forgets the owner after a failed init, so another thread may try again.
fn release_event_loop_thread() {
    *EVENT_LOOP_THREAD_ID
        .lock()
        .unwrap_or_else(PoisonError::into_inner) = None;
}

fn mouse_button_code(button: event::MouseButton) -> u8 {
    match button {
        event::MouseButton::Left => mouse_button::LEFT,
        event::MouseButton::Middle => mouse_button::MIDDLE,
        event::MouseButton::Right => mouse_button::RIGHT,
        event::MouseButton::Back => mouse_button::X1,
        event::MouseButton::Forward => mouse_button::X2,
        event::MouseButton::Other(_) => mouse_button::UNKNOWN,
    }
}

/// Maps a winit physical key to its USB HID usage id.
fn scancode_from_key_code(code: KeyCode) -> u32 {
    match code {
        KeyCode::KeyA => scancode::A,
        KeyCode::KeyB => scancode::B,
        KeyCode::KeyC => scancode::C,
        KeyCode::KeyD => scancode::D,
        KeyCode::KeyE => scancode::E,
        KeyCode::KeyF => scancode::F,
        KeyCode::KeyG => scancode::G,
        KeyCode::KeyH => scancode::H,
        KeyCode::KeyI => scancode::I,
        KeyCode::KeyJ => scancode::J,
        KeyCode::KeyK => scancode::K,
        KeyCode::KeyL => scancode::L,
        KeyCode::KeyM => scancode::M,
        KeyCode::KeyN => scancode::N,
        KeyCode::KeyO => scancode::O,
        KeyCode::KeyP => scancode::P,
        KeyCode::KeyQ => scancode::Q,
        KeyCode::KeyR => scancode::R,
        KeyCode::KeyS => scancode::S,
        KeyCode::KeyT => scancode::T,
        KeyCode::KeyU => scancode::U,
        KeyCode::KeyV => scancode::V,
        KeyCode::KeyW => scancode::W,
        KeyCode::KeyX => scancode::X,
        KeyCode::KeyY => scancode::Y,
        KeyCode::KeyZ => scancode::Z,
        KeyCode::Digit1 => scancode::NUM_1,
        KeyCode::Digit2 => scancode::NUM_2,
        KeyCode::Digit3 => scancode::NUM_3,
        KeyCode::Digit4 => scancode::NUM_4,
        KeyCode::Digit5 => scancode::NUM_5,
        KeyCode::Digit6 => scancode::NUM_6,
        KeyCode::Digit7 => scancode::NUM_7,
        KeyCode::Digit8 => scancode::NUM_8,
        KeyCode::Digit9 => scancode::NUM_9,
        KeyCode::Digit0 => scancode::NUM_0,
        KeyCode::Enter => scancode::RETURN,
        KeyCode::Escape => scancode::ESCAPE,
        KeyCode::Backspace => scancode::BACKSPACE,
        KeyCode::Tab => scancode::TAB,
        KeyCode::Space => scancode::SPACE,
        KeyCode::Minus => scancode::MINUS,
        KeyCode::Equal => scancode::EQUALS,
        KeyCode::BracketLeft => scancode::LEFTBRACKET,
        KeyCode::BracketRight => scancode::RIGHTBRACKET,
        KeyCode::Backslash => scancode::BACKSLASH,
        KeyCode::Semicolon => scancode::SEMICOLON,
        KeyCode::Quote => scancode::APOSTROPHE,
        KeyCode::Backquote => scancode::GRAVE,
        KeyCode::Comma => scancode::COMMA,
        KeyCode::Period => scancode::PERIOD,
        KeyCode::Slash => scancode::SLASH,
        KeyCode::CapsLock => scancode::CAPSLOCK,
        KeyCode::F1 => scancode::F1,
        KeyCode::F2 => scancode::F2,
        KeyCode::F3 => scancode::F3,
        KeyCode::F4 => scancode::F4,
        KeyCode::F5 => scancode::F5,
        KeyCode::F6 => scancode::F6,
        KeyCode::F7 => scancode::F7,
        KeyCode::F8 => scancode::F8,
        KeyCode::F9 => scancode::F9,
        KeyCode::F10 => scancode::F10,
        KeyCode::F11 => scancode::F11,
        KeyCode::F12 => scancode::F12,
        KeyCode::PrintScreen => scancode::PRINTSCREEN,
        KeyCode::ScrollLock => scancode::SCROLLLOCK,
        KeyCode::Pause => scancode::PAUSE,
        KeyCode::Insert => scancode::INSERT,
        KeyCode::Home => scancode::HOME,
        KeyCode::PageUp => scancode::PAGEUP,
        KeyCode::Delete => scancode::DELETE,
        KeyCode::End => scancode::END,
        KeyCode::PageDown => scancode::PAGEDOWN,
        KeyCode::ArrowRight => scancode::RIGHT,
        KeyCode::ArrowLeft => scancode::LEFT,
        KeyCode::ArrowDown => scancode::DOWN,
        KeyCode::ArrowUp => scancode::UP,
        KeyCode::NumLock => scancode::NUMLOCKCLEAR,
        KeyCode::NumpadDivide => scancode::KP_DIVIDE,
        KeyCode::NumpadMultiply | KeyCode::NumpadStar => scancode::KP_MULTIPLY,
        KeyCode::NumpadSubtract => scancode::KP_MINUS,
        KeyCode::NumpadAdd => scancode::KP_PLUS,
        KeyCode::NumpadEnter => scancode::KP_ENTER,
        KeyCode::Numpad1 => scancode::KP_1,
        KeyCode::Numpad2 => scancode::KP_2,
        KeyCode::Numpad3 => scancode::KP_3,
        KeyCode::Numpad4 => scancode::KP_4,
        KeyCode::Numpad5 => scancode::KP_5,
        KeyCode::Numpad6 => scancode::KP_6,
        KeyCode::Numpad7 => scancode::KP_7,
        KeyCode::Numpad8 => scancode::KP_8,
        KeyCode::Numpad9 => scancode::KP_9,
        KeyCode::Numpad0 => scancode::KP_0,
        KeyCode::NumpadDecimal => scancode::KP_PERIOD,
        KeyCode::IntlBackslash => scancode::NONUSBACKSLASH,
        KeyCode::ContextMenu => scancode::APPLICATION,
        KeyCode::Power => scancode::POWER,
        KeyCode::NumpadEqual => scancode::KP_EQUALS,
        KeyCode::F13 => scancode::F13,
        KeyCode::F14 => scancode::F14,
        KeyCode::F15 => scancode::F15,
        KeyCode::F16 => scancode::F16,
        KeyCode::F17 => scancode::F17,
        KeyCode::F18 => scancode::F18,
        KeyCode::F19 => scancode::F19,
        KeyCode::F20 => scancode::F20,
        KeyCode::F21 => scancode::F21,
        KeyCode::F22 => scancode::F22,
        KeyCode::F23 => scancode::F23,
        KeyCode::F24 => scancode::F24,
        KeyCode::Help => scancode::HELP,
        KeyCode::Select => scancode::SELECT,
        KeyCode::Again => scancode::AGAIN,
        KeyCode::Undo => scancode::UNDO,
        KeyCode::Cut => scancode::CUT,
        KeyCode::Copy => scancode::COPY,
        KeyCode::Paste => scancode::PASTE,
        KeyCode::Find => scancode::FIND,
        KeyCode::AudioVolumeMute => scancode::MUTE,
        KeyCode::AudioVolumeUp => scancode::VOLUMEUP,
        KeyCode::AudioVolumeDown => scancode::VOLUMEDOWN,
        KeyCode::NumpadComma => scancode::KP_COMMA,
        KeyCode::IntlRo => scancode::INTERNATIONAL1,
        KeyCode::KanaMode => scancode::INTERNATIONAL2,
        KeyCode::IntlYen => scancode::INTERNATIONAL3,
        KeyCode::Convert => scancode::INTERNATIONAL4,
        KeyCode::NonConvert => scancode::INTERNATIONAL5,
        KeyCode::Lang1 => scancode::LANG1,
        KeyCode::Lang2 => scancode::LANG2,
        KeyCode::NumpadParenLeft => scancode::KP_LEFTPAREN,
        KeyCode::NumpadParenRight => scancode::KP_RIGHTPAREN,
        KeyCode::NumpadBackspace => scancode::KP_BACKSPACE,
        KeyCode::NumpadHash => scancode::KP_HASH,
        KeyCode::NumpadClear => scancode::KP_CLEAR,
        KeyCode::ControlLeft => scancode::LCTRL,
        KeyCode::ShiftLeft => scancode::LSHIFT,
        KeyCode::AltLeft => scancode::LALT,
        KeyCode::SuperLeft => scancode::LGUI,
        KeyCode::ControlRight => scancode::RCTRL,
        KeyCode::ShiftRight => scancode::RSHIFT,
        KeyCode::AltRight => scancode::RALT,
        KeyCode::SuperRight => scancode::RGUI,
        _ => scancode::UNKNOWN,
    }
}
