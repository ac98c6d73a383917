use std::{fmt, sync::Arc};

use crate::{
    device::{DeviceRegistry, RenderDevice, Renderer},
    input::{ControllerAxis, ControllerButton, Key, MouseButton},
    utils::{Logger, Logging},
};

use super::{ControllerInfo, ControllerKind, Flags, MAX_CONTROLLERS};

pub type ExitRequestCallback = Box<dyn FnMut()>;
pub type MouseButtonCallback = Box<dyn FnMut(MouseButton, bool)>;
pub type MouseWheelCallback = Box<dyn FnMut(f32, f32)>;
pub type KeyCallback = Box<dyn FnMut(Key, bool)>;
pub type TextCallback = Box<dyn FnMut(&str)>;
pub type ControllerConnectCallback = Box<dyn FnMut(&ControllerInfo)>;
pub type ControllerDisconnectCallback = Box<dyn FnMut(usize, ControllerKind)>;
pub type ControllerButtonCallback = Box<dyn FnMut(usize, ControllerButton, bool)>;
pub type ControllerAxisCallback = Box<dyn FnMut(usize, ControllerAxis, f32)>;

/// Input callbacks, invoked synchronously from [super::Platform::poll_events].
#[derive(Default)]
pub(crate) struct Callbacks {
    pub exit_request: Option<ExitRequestCallback>,
    pub mouse_button: Option<MouseButtonCallback>,
    pub mouse_wheel: Option<MouseWheelCallback>,
    pub key: Option<KeyCallback>,
    pub text: Option<TextCallback>,
    pub controller_connect: Option<ControllerConnectCallback>,
    pub controller_disconnect: Option<ControllerDisconnectCallback>,
    pub controller_button: Option<ControllerButtonCallback>,
    pub controller_axis: Option<ControllerAxisCallback>,
}

/// Startup configuration of a [super::Platform].
///
/// ```no_run
/// use est_platform::prelude::*;
///
/// let desc = PlatformDesc::new()
///     .with_size(1280, 720)
///     .with_title("Demo")
///     .with_flags(Flags::Resizable | Flags::Vsync)
///     .on_key(|key, pressed| println!("{:?} {}", key, pressed));
/// ```
pub struct PlatformDesc {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) window_title: String,
    pub(crate) application_name: String,
    pub(crate) renderer: Renderer,
    pub(crate) flags: Flags,
    pub(crate) max_controllers: usize,
    pub(crate) devices: DeviceRegistry,
    pub(crate) logger: Logger,
    pub(crate) callbacks: Callbacks,
}

impl PlatformDesc {
    pub fn new() -> Self {
        Self {
            width: 1280,
            height: 720,
            window_title: String::new(),
            application_name: String::new(),
            renderer: Renderer::None,
            flags: Flags::None,
            max_controllers: MAX_CONTROLLERS,
            devices: DeviceRegistry::with_builtin(),
            logger: Logger::new(Logging::Default),
            callbacks: Callbacks::default(),
        }
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.window_title = title.to_string();
        self
    }

    /// Name of the per-user data directory returned by `user_path`.
    pub fn with_application_name(mut self, name: &str) -> Self {
        self.application_name = name.to_string();
        self
    }

    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn with_logging(mut self, logging: Logging) -> Self {
        self.logger.set_level(logging);
        self
    }

    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    /// Number of joystick and gamepad slots each.
    pub fn with_max_controllers(mut self, count: usize) -> Self {
        self.max_controllers = count;
        self
    }

    /// Registers a render device factory for `renderer`.
    pub fn with_device<F>(mut self, renderer: Renderer, factory: F) -> Self
    where
        F: Fn() -> Box<dyn RenderDevice> + 'static,
    {
        self.devices.register(renderer, factory);
        self
    }

    pub fn on_log_info<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.logger.set_info(Arc::new(callback));
        self
    }

    pub fn on_log_warn<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.logger.set_warn(Arc::new(callback));
        self
    }

    pub fn on_log_error<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.logger.set_error(Arc::new(callback));
        self
    }

    pub fn on_exit_request<F: FnMut() + 'static>(mut self, callback: F) -> Self {
        self.callbacks.exit_request = Some(Box::new(callback));
        self
    }

    pub fn on_mouse_button<F: FnMut(MouseButton, bool) + 'static>(mut self, callback: F) -> Self {
        self.callbacks.mouse_button = Some(Box::new(callback));
        self
    }

    pub fn on_mouse_wheel<F: FnMut(f32, f32) + 'static>(mut self, callback: F) -> Self {
        self.callbacks.mouse_wheel = Some(Box::new(callback));
        self
    }

    pub fn on_key<F: FnMut(Key, bool) + 'static>(mut self, callback: F) -> Self {
        self.callbacks.key = Some(Box::new(callback));
        self
    }

    pub fn on_text<F: FnMut(&str) + 'static>(mut self, callback: F) -> Self {
        self.callbacks.text = Some(Box::new(callback));
        self
    }

    pub fn on_controller_connect<F: FnMut(&ControllerInfo) + 'static>(mut self, callback: F) -> Self {
        self.callbacks.controller_connect = Some(Box::new(callback));
        self
    }

    pub fn on_controller_disconnect<F>(mut self, callback: F) -> Self
    where
        F: FnMut(usize, ControllerKind) + 'static,
    {
        self.callbacks.controller_disconnect = Some(Box::new(callback));
        self
    }

    pub fn on_controller_button<F>(mut self, callback: F) -> Self
    where
        F: FnMut(usize, ControllerButton, bool) + 'static,
    {
        self.callbacks.controller_button = Some(Box::new(callback));
        self
    }

    pub fn on_controller_axis<F>(mut self, callback: F) -> Self
    where
        F: FnMut(usize, ControllerAxis, f32) + 'static,
    {
        self.callbacks.controller_axis = Some(Box::new(callback));
        self
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    pub fn renderer(&self) -> Renderer {
        self.renderer
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn max_controllers(&self) -> usize {
        self.max_controllers
    }

    pub fn logging(&self) -> Logging {
        self.logger.level()
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}

impl Default for PlatformDesc {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PlatformDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlatformDesc")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("window_title", &self.window_title)
            .field("application_name", &self.application_name)
            .field("renderer", &self.renderer)
            .field("flags", &self.flags)
            .field("max_controllers", &self.max_controllers)
            .field("devices", &self.devices)
            .field("logger", &self.logger)
            .finish_non_exhaustive()
    }
}
