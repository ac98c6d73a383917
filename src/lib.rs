//! Window, input & controller platform layer with pluggable render devices

/// Render device contract, resource types and the headless device
pub mod device;
/// Host contract and the winit based host
pub mod host;
/// Image decode & encode passthrough
pub mod image;
/// Stable input vocabulary and host code translators
pub mod input;
/// Mathematical utilities and types
pub mod math;
/// Platform lifecycle, event pump and render passthrough
pub mod platform;
/// Predefined types and traits for easy access
pub mod prelude;
/// Utility functions and types for common tasks
pub mod utils;

/// Create a [platform::Platform] on top of winit.
///
/// The platform is not started yet, call [platform::Platform::startup] on the
/// thread that will drive it.
#[cfg(feature = "winit")]
pub fn create_platform(desc: platform::PlatformDesc) -> platform::Platform<host::WinitHost> {
    platform::Platform::new(host::WinitHost::new(), desc)
}
