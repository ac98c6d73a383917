//! The contract between the platform and the windowing/input library
//! underneath it.
//!
//! A [Host] owns the native event queue, windows and controller handles.
//! Events come out of it in a host-native numeric vocabulary ([codes]),
//! which the platform translates into the stable [crate::input] enums.

use smol_str::SmolStr;

use crate::{math::Point2, utils::LogBridge};

pub mod codes;
pub use codes::*;

#[cfg(feature = "winit")]
mod winit_host;
#[cfg(feature = "winit")]
pub use winit_host::WinitHost;

#[cfg(feature = "gamepad")]
mod gamepad;

/// Index of a device in the host enumeration, only meaningful in `*Added` events.
pub type DeviceIndex = u32;

/// Identifier of an opened device for as long as it stays connected.
pub type InstanceId = u32;

/// Opaque handle of a window owned by the host.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct HostWindow(pub u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowDesc {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub hidden: bool,
    pub high_dpi: bool,
    pub centered: bool,
}

/// Raw events as produced by the host.
#[derive(Clone, Debug, PartialEq)]
pub enum HostEvent {
    Quit,
    MouseButton {
        button: u8,
        pressed: bool,
    },
    MouseWheel {
        x: f32,
        y: f32,
    },
    Key {
        scancode: u32,
        pressed: bool,
        /// Set on auto-repeat events generated while a key is held.
        repeat: bool,
    },
    TextInput(SmolStr),
    JoystickAdded {
        device: DeviceIndex,
    },
    JoystickRemoved {
        instance: InstanceId,
    },
    JoystickButton {
        instance: InstanceId,
        button: u8,
        pressed: bool,
    },
    JoystickAxis {
        instance: InstanceId,
        axis: u8,
        value: i16,
    },
    GamepadAdded {
        device: DeviceIndex,
    },
    GamepadRemoved {
        instance: InstanceId,
    },
    GamepadButton {
        instance: InstanceId,
        button: u8,
        pressed: bool,
    },
    GamepadAxis {
        instance: InstanceId,
        axis: u8,
        value: i16,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JoystickInfo {
    pub instance: InstanceId,
    pub name: String,
    pub button_count: u32,
    pub axis_count: u32,
    pub vendor: u16,
    pub product: u16,
    pub version: u16,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GamepadInfo {
    pub instance: InstanceId,
    pub name: String,
    pub vendor: u16,
    pub product: u16,
    pub version: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("Failed to initialize host: {0}")]
    Init(String),

    #[error("Failed to create window: {0}")]
    WindowCreation(String),

    #[error("Event loop error: {0}")]
    EventLoop(String),

    #[error("Failed to install log bridge: {0}")]
    LogBridge(String),

    #[error("Host event loop belongs to another thread")]
    ThreadMismatch,

    #[error("Host is not initialized")]
    NotInitialized,
}

/// Windowing, input and controller services consumed by [crate::platform::Platform].
///
/// All calls happen on the thread that drives the platform.
pub trait Host {
    /// Name and version of the host library, for diagnostics.
    fn version(&self) -> String;

    /// Routes the host library's own log output into the platform sinks.
    fn install_log_bridge(&mut self, bridge: LogBridge) -> Result<(), HostError>;

    /// Opts into per-monitor DPI awareness where the platform needs it.
    /// Returns false if the hints could not be applied.
    fn apply_display_hints(&mut self) -> bool;

    /// Initializes video, events and controller subsystems.
    fn init(&mut self) -> Result<(), HostError>;

    fn create_window(&mut self, desc: &WindowDesc) -> Result<HostWindow, HostError>;
    fn destroy_window(&mut self, window: HostWindow);
    fn show_window(&mut self, window: HostWindow);
    fn set_window_title(&mut self, window: HostWindow, title: &str);
    fn set_window_size(&mut self, window: HostWindow, width: i32, height: i32);

    /// Window size in logical units.
    fn window_size(&self, window: HostWindow) -> Point2;

    /// Window size in physical pixels.
    fn window_size_in_pixels(&self, window: HostWindow) -> Point2;

    fn set_fullscreen(&mut self, window: HostWindow, fullscreen: bool);
    fn set_resizable(&mut self, window: HostWindow, resizable: bool);
    fn set_swap_interval(&mut self, interval: i32);

    /// Gathers pending native events into the queue without blocking.
    fn pump_events(&mut self);

    /// Pops the next queued event.
    fn poll_event(&mut self) -> Option<HostEvent>;

    /// Whether the device at `device` is recognized as a mapped gamepad.
    fn is_gamepad(&self, device: DeviceIndex) -> bool;
    fn open_joystick(&mut self, device: DeviceIndex) -> Option<JoystickInfo>;
    fn close_joystick(&mut self, instance: InstanceId);
    fn open_gamepad(&mut self, device: DeviceIndex) -> Option<GamepadInfo>;
    fn close_gamepad(&mut self, instance: InstanceId);

    /// Writable per-user directory for `application`, with a trailing separator.
    fn pref_path(&self, application: &str) -> Option<String>;
    fn set_clipboard(&mut self, text: &str);
    fn clipboard(&mut self) -> Option<String>;
}

/// Creates (if needed) and returns `<user data dir>/<application>/`.
pub fn default_pref_path(application: &str) -> Option<String> {
    let mut path = dirs::data_dir()?;
    if !application.is_empty() {
        path.push(application);
    }

    if let Err(e) = std::fs::create_dir_all(&path) {
        log::error!("Failed to create user path {}: {}", path.display(), e);
        return None;
    }

    let mut path = path.to_string_lossy().into_owned();
    if !path.ends_with(std::path::MAIN_SEPARATOR) {
        path.push(std::path::MAIN_SEPARATOR);
    }

    Some(path)
}
