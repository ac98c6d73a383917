//! Pluggable render devices.
//!
//! The platform never renders by itself; every render call is forwarded to
//! the [RenderDevice] selected at startup from the [DeviceRegistry].

use std::fmt;

mod device_types;
pub use device_types::*;

mod headless;
pub use headless::HeadlessDevice;

/// Most color attachments a render target can carry.
pub const MAX_TARGET_ATTACHMENTS: usize = 8;

#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub enum Renderer {
    /// Pick the first registered device.
    #[default]
    None,
    D3D11,
    OpenGL,
    /// CPU-side device without any GPU, see [HeadlessDevice].
    Headless,
}

impl fmt::Display for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Renderer::None => "None",
            Renderer::D3D11 => "D3D11",
            Renderer::OpenGL => "OpenGL",
            Renderer::Headless => "Headless",
        };

        f.write_str(name)
    }
}

/// Render operations the platform forwards to.
///
/// Lifecycle hooks have empty defaults so simple devices only implement
/// the resource calls.
pub trait RenderDevice {
    fn renderer(&self) -> Renderer;

    /// Whether vsync is driven through the host swap interval.
    fn uses_swap_interval(&self) -> bool {
        false
    }

    /// Called before the window is created.
    fn prepare(&mut self) {}

    /// Called once the window exists. Returning false aborts startup.
    fn initialize(&mut self) -> bool {
        true
    }

    fn shutdown(&mut self) {}
    fn frame_begin(&mut self) {}
    fn frame_end(&mut self) {}

    fn texture_create(&mut self, width: i32, height: i32, format: TextureFormat) -> Option<TextureId>;
    fn texture_set_data(&mut self, texture: TextureId, data: &[u8]);
    fn texture_get_data(&mut self, texture: TextureId, data: &mut [u8]);
    fn texture_destroy(&mut self, texture: TextureId);

    fn target_create(&mut self, width: i32, height: i32, attachments: &[TextureFormat]) -> Option<TargetId>;
    fn target_get_attachment(&mut self, target: TargetId, index: usize) -> Option<TextureId>;
    fn target_destroy(&mut self, target: TargetId);

    fn shader_create(&mut self, data: &ShaderData) -> Option<ShaderId>;
    fn shader_get_uniforms(&mut self, shader: ShaderId) -> Vec<UniformInfo>;
    fn shader_set_uniform(&mut self, shader: ShaderId, index: usize, values: &[f32]);
    fn shader_set_texture(&mut self, shader: ShaderId, index: usize, textures: &[Option<TextureId>]);
    fn shader_set_sampler(&mut self, shader: ShaderId, index: usize, samplers: &[TextureSampler]);
    fn shader_destroy(&mut self, shader: ShaderId);

    fn mesh_create(&mut self) -> Option<MeshId>;
    fn mesh_set_vertex_format(&mut self, mesh: MeshId, format: &VertexFormat);
    fn mesh_set_vertex_data(&mut self, mesh: MeshId, data: &[u8]);
    fn mesh_set_index_format(&mut self, mesh: MeshId, format: IndexFormat);
    fn mesh_set_index_data(&mut self, mesh: MeshId, data: &[u8]);
    fn mesh_destroy(&mut self, mesh: MeshId);

    fn draw(&mut self, command: &DrawCommand);
    fn clear(&mut self, command: &ClearCommand);
}

pub type DeviceFactory = Box<dyn Fn() -> Box<dyn RenderDevice>>;

/// Device factories keyed by [Renderer], in registration order.
pub struct DeviceRegistry {
    factories: Vec<(Renderer, DeviceFactory)>,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self {
            factories: Vec::new(),
        }
    }

    /// Registry holding only the [HeadlessDevice].
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Renderer::Headless, || Box::new(HeadlessDevice::new()));
        registry
    }

    /// Registers `factory` for `kind`, replacing an earlier one of the same kind.
    /// Registering [Renderer::None] is ignored.
    pub fn register<F>(&mut self, kind: Renderer, factory: F)
    where
        F: Fn() -> Box<dyn RenderDevice> + 'static,
    {
        if kind == Renderer::None {
            return;
        }

        let factory: DeviceFactory = Box::new(factory);

        match self.factories.iter_mut().find(|(k, _)| *k == kind) {
            Some(entry) => entry.1 = factory,
            None => self.factories.push((kind, factory)),
        }
    }

    pub fn contains(&self, kind: Renderer) -> bool {
        self.factories.iter().any(|(k, _)| *k == kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = Renderer> + '_ {
        self.factories.iter().map(|(k, _)| *k)
    }

    /// Instantiates the device for `kind`.
    ///
    /// [Renderer::None] picks the first registered non-headless device and
    /// falls back to the headless one.
    pub fn create(&self, kind: Renderer) -> Option<Box<dyn RenderDevice>> {
        let factory = match kind {
            Renderer::None => self
                .factories
                .iter()
                .find(|(k, _)| *k != Renderer::Headless)
                .or_else(|| self.factories.first()),
            kind => self.factories.iter().find(|(k, _)| *k == kind),
        };

        factory.map(|(_, factory)| factory())
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl fmt::Debug for DeviceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.kinds()).finish()
    }
}
