//! The platform runtime: lifecycle, window state, event pump and render
//! passthrough, on top of a [Host].

use crate::{
    device::{RenderDevice, Renderer},
    host::{Host, HostWindow, WindowDesc},
    math::Point2,
    platform_error, platform_info, platform_warn,
    utils::{LogBridge, Logging},
};

mod desc;
mod events;
mod platform_enums;
mod registry;
mod render;

pub use desc::*;
pub use platform_enums::*;
pub use registry::*;

/// Title used when the desc does not set one.
pub const DEFAULT_WINDOW_TITLE: &str = "est-platform application";

/// Owns the host, the window, the render device and the controller tables.
///
/// Every public operation except [Platform::startup], [Platform::shutdown]
/// and the plain accessors refuses to run while the platform is stopped,
/// logging `Failed '<operation>', platform is not running` and returning a
/// neutral value.
pub struct Platform<H: Host> {
    host: H,
    desc: PlatformDesc,
    running: bool,
    flags: Flags,
    window: Option<HostWindow>,
    device: Option<Box<dyn RenderDevice>>,
    joysticks: ControllerSlots,
    gamepads: ControllerSlots,
    clipboard_text: Option<String>,
    user_path: Option<String>,
}

impl<H: Host> Platform<H> {
    /// Creates a stopped platform. Call [Platform::startup] to open the window.
    pub fn new(host: H, desc: PlatformDesc) -> Self {
        let capacity = desc.max_controllers;

        Self {
            host,
            desc,
            running: false,
            flags: Flags::None,
            window: None,
            device: None,
            joysticks: ControllerSlots::new(capacity),
            gamepads: ControllerSlots::new(capacity),
            clipboard_text: None,
            user_path: None,
        }
    }

    pub fn startup(&mut self) -> Result<(), PlatformError> {
        if self.running {
            platform_error!(self.desc.logger, "Platform is already running");
            return Err(PlatformError::AlreadyRunning);
        }

        let (width, height) = (self.desc.width, self.desc.height);
        if width <= 0 || height <= 0 {
            platform_error!(
                self.desc.logger,
                "Width and height must be larger than 0, got {}x{}",
                width,
                height
            );
            return Err(PlatformError::InvalidSize { width, height });
        }

        platform_info!(self.desc.logger, "Host: {}", self.host.version());

        if self.desc.logger.level() != Logging::None && self.desc.logger.has_sinks() {
            let bridge = LogBridge::new(self.desc.logger.clone());
            if let Err(e) = self.host.install_log_bridge(bridge) {
                platform_warn!(self.desc.logger, "{}", e);
            }
        }

        if !self.host.apply_display_hints() {
            platform_warn!(self.desc.logger, "Failed to apply display DPI hints");
        }

        if let Err(e) = self.host.init() {
            platform_error!(self.desc.logger, "{}", e);
            return Err(PlatformError::Host(e));
        }

        let Some(mut device) = self.desc.devices.create(self.desc.renderer) else {
            let error = PlatformError::UnsupportedRenderer(self.desc.renderer);
            platform_error!(self.desc.logger, "{}", error);
            return Err(error);
        };

        device.prepare();

        let title = match self.desc.window_title.is_empty() {
            true => DEFAULT_WINDOW_TITLE.to_string(),
            false => self.desc.window_title.clone(),
        };

        let window = match self.host.create_window(&WindowDesc {
            title,
            width,
            height,
            hidden: true,
            high_dpi: true,
            centered: true,
        }) {
            Ok(window) => window,
            Err(e) => {
                platform_error!(self.desc.logger, "Failed to create window: {}", e);
                return Err(PlatformError::WindowCreation(e));
            }
        };

        self.window = Some(window);
        self.running = true;

        if !device.initialize() {
            platform_error!(
                self.desc.logger,
                "Failed to initialize {} render device",
                device.renderer()
            );

            self.running = false;
            self.window = None;
            self.host.destroy_window(window);
            return Err(PlatformError::DeviceInitialize);
        }

        platform_info!(self.desc.logger, "Renderer: {}", device.renderer());
        self.device = Some(device);

        self.joysticks = ControllerSlots::new(self.desc.max_controllers);
        self.gamepads = ControllerSlots::new(self.desc.max_controllers);

        self.flags = Flags::None;
        self.set_flags(self.desc.flags);
        self.host.show_window(window);

        Ok(())
    }

    /// Tears everything down. Does nothing if the platform is not running.
    pub fn shutdown(&mut self) {
        if !self.running {
            return;
        }

        if let Some(device) = self.device.as_mut() {
            device.shutdown();
        }

        self.clipboard_text = None;
        self.user_path = None;

        for handle in self.joysticks.drain() {
            self.host.close_joystick(handle.instance);
        }

        for handle in self.gamepads.drain() {
            self.host.close_gamepad(handle.instance);
        }

        self.running = false;

        if let Some(window) = self.window.take() {
            self.host.destroy_window(window);
        }

        self.device = None;
        self.flags = Flags::None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn desc(&self) -> &PlatformDesc {
        &self.desc
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Number of occupied joystick slots.
    pub fn joystick_count(&self) -> usize {
        self.joysticks.count()
    }

    /// Number of occupied gamepad slots.
    pub fn gamepad_count(&self) -> usize {
        self.gamepads.count()
    }

    pub fn set_flags(&mut self, flags: Flags) {
        let Some(window) = self.guard("set_flags") else {
            return;
        };

        if flags == self.flags {
            return;
        }

        self.host
            .set_fullscreen(window, flags.contains(Flags::Fullscreen));
        self.host
            .set_resizable(window, flags.contains(Flags::Resizable));

        let swap_interval = self
            .device
            .as_ref()
            .is_some_and(|device| device.uses_swap_interval());

        if swap_interval {
            let interval = if flags.contains(Flags::Vsync) { 1 } else { 0 };
            self.host.set_swap_interval(interval);
        }

        self.flags = flags;
    }

    pub fn set_title(&mut self, title: &str) {
        if let Some(window) = self.guard("set_title") {
            self.host.set_window_title(window, title);
        }
    }

    pub fn set_size(&mut self, width: i32, height: i32) {
        let Some(window) = self.guard("set_size") else {
            return;
        };

        if width <= 0 || height <= 0 {
            platform_error!(
                self.desc.logger,
                "Width and height must be larger than 0, got {}x{}",
                width,
                height
            );
            return;
        }

        self.host.set_window_size(window, width, height);
    }

    /// Window size in logical units.
    pub fn size(&self) -> Point2 {
        match self.guard("size") {
            Some(window) => self.host.window_size(window),
            None => Point2::ZERO,
        }
    }

    /// Window size in physical pixels.
    pub fn size_in_pixels(&self) -> Point2 {
        match self.guard("size_in_pixels") {
            Some(window) => self.host.window_size_in_pixels(window),
            None => Point2::ZERO,
        }
    }

    /// Per-user writable directory named after the application, with a
    /// trailing separator. Created on first use.
    pub fn user_path(&mut self) -> Option<&str> {
        self.guard("user_path")?;

        if self.user_path.is_none() {
            self.user_path = self.host.pref_path(&self.desc.application_name);
        }

        self.user_path.as_deref()
    }

    pub fn set_clipboard(&mut self, text: &str) {
        if self.guard("set_clipboard").is_some() {
            self.host.set_clipboard(text);
        }
    }

    /// Current clipboard text. The returned string lives until the next call.
    pub fn clipboard(&mut self) -> Option<&str> {
        self.guard("clipboard")?;

        self.clipboard_text = self.host.clipboard();
        self.clipboard_text.as_deref()
    }

    pub fn renderer(&self) -> Renderer {
        self.guard("renderer");

        self.device
            .as_ref()
            .map(|device| device.renderer())
            .unwrap_or(Renderer::None)
    }

    pub fn begin_frame(&mut self) {
        if self.guard("begin_frame").is_none() {
            return;
        }

        if let Some(device) = self.device.as_mut() {
            device.frame_begin();
        }
    }

    pub fn end_frame(&mut self) {
        if self.guard("end_frame").is_none() {
            return;
        }

        if let Some(device) = self.device.as_mut() {
            device.frame_end();
        }
    }

    /// Returns the window if running, logs the refused operation otherwise.
    fn guard(&self, operation: &str) -> Option<HostWindow> {
        match (self.running, self.window) {
            (true, Some(window)) => Some(window),
            _ => {
                platform_error!(
                    self.desc.logger,
                    "Failed '{}', platform is not running",
                    operation
                );
                None
            }
        }
    }
}

impl<H: Host> Drop for Platform<H> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
