pub use super::device::{
    ClearCommand, ClearMask, DrawCommand, HeadlessDevice, IndexFormat, MeshId, RenderDevice,
    Renderer, ShaderData, ShaderId, TargetId, TextureFormat, TextureId, TextureSampler,
    VertexElement, VertexFormat, VertexType,
};
pub use super::host::Host;
pub use super::input::*;
pub use super::math::*;
pub use super::platform::*;
pub use super::utils::Logging;

#[cfg(feature = "winit")]
pub use super::create_platform;
#[cfg(feature = "winit")]
pub use super::host::WinitHost;
