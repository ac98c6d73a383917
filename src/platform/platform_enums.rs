use crate::{device::Renderer, host::HostError};

#[derive(Clone, Copy, Hash, PartialEq, Eq, Debug, Default)]
pub struct Flags(u32);

bitflags::bitflags! {
    impl Flags: u32 {
        const None = 0;
        const Fullscreen = 1 << 0;
        const Vsync = 1 << 1;
        const Resizable = 1 << 2;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    #[error("Platform is already running")]
    AlreadyRunning,

    #[error("Width and height must be larger than 0, got {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error(transparent)]
    Host(HostError),

    #[error("No render device registered for renderer {0}")]
    UnsupportedRenderer(Renderer),

    #[error("Failed to create window: {0}")]
    WindowCreation(HostError),

    #[error("Failed to initialize render device")]
    DeviceInitialize,
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum ControllerKind {
    Joystick,
    Gamepad,
}

/// Description of a controller handed to the connect callback.
///
/// `index` is the slot in the joystick or gamepad table, depending on `kind`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerInfo {
    pub index: usize,
    pub kind: ControllerKind,
    pub name: String,
    pub button_count: u32,
    pub axis_count: u32,
    pub hat_count: u32,
    pub vendor: u16,
    pub product: u16,
    pub version: u16,
}
