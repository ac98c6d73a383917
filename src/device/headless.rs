use fxhash::FxHashMap;

use super::{
    ClearCommand, DrawCommand, IndexFormat, MAX_TARGET_ATTACHMENTS, MeshId, RenderDevice, Renderer,
    ShaderData, ShaderId, TargetId, TextureFormat, TextureId, TextureSampler, UniformInfo,
    UniformType, VertexFormat,
};

struct HeadlessTexture {
    format: TextureFormat,
    data: Vec<u8>,
}

struct HeadlessShader {
    uniforms: Vec<UniformInfo>,
    values: FxHashMap<usize, Vec<f32>>,
    textures: FxHashMap<usize, Vec<Option<TextureId>>>,
    samplers: FxHashMap<usize, Vec<TextureSampler>>,
}

#[derive(Default)]
struct HeadlessMesh {
    vertex_format: VertexFormat,
    vertex_data: Vec<u8>,
    index_format: IndexFormat,
    index_data: Vec<u8>,
}

/// Counters of what went through a [HeadlessDevice].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadlessStats {
    pub frames: usize,
    pub draws: usize,
    pub clears: usize,
    pub textures: usize,
    pub targets: usize,
    pub shaders: usize,
    pub meshes: usize,
}

/// Render device keeping every resource in memory without touching a GPU.
///
/// Textures keep their pixels, so data written with `texture_set_data` reads
/// back unchanged. Draws and clears are only counted.
pub struct HeadlessDevice {
    renderer: Renderer,
    next_id: u64,
    textures: FxHashMap<u64, HeadlessTexture>,
    targets: FxHashMap<u64, Vec<TextureId>>,
    shaders: FxHashMap<u64, HeadlessShader>,
    meshes: FxHashMap<u64, HeadlessMesh>,
    stats: HeadlessStats,
}

impl HeadlessDevice {
    pub fn new() -> Self {
        Self::with_renderer(Renderer::Headless)
    }

    /// Headless device reporting itself as `renderer`.
    pub fn with_renderer(renderer: Renderer) -> Self {
        Self {
            renderer,
            next_id: 1,
            textures: FxHashMap::default(),
            targets: FxHashMap::default(),
            shaders: FxHashMap::default(),
            meshes: FxHashMap::default(),
            stats: HeadlessStats::default(),
        }
    }

    pub fn stats(&self) -> HeadlessStats {
        HeadlessStats {
            textures: self.textures.len(),
            targets: self.targets.len(),
            shaders: self.shaders.len(),
            meshes: self.meshes.len(),
            ..self.stats
        }
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn create_texture(&mut self, width: i32, height: i32, format: TextureFormat) -> Option<TextureId> {
        if width <= 0 || height <= 0 {
            return None;
        }

        let size = width as usize * height as usize * format.bytes_per_pixel();
        let id = self.next_id();
        self.textures.insert(
            id,
            HeadlessTexture {
                format,
                data: vec![0; size],
            },
        );

        Some(TextureId(id))
    }
}

impl Default for HeadlessDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderDevice for HeadlessDevice {
    fn renderer(&self) -> Renderer {
        self.renderer
    }

    fn shutdown(&mut self) {
        self.textures.clear();
        self.targets.clear();
        self.shaders.clear();
        self.meshes.clear();
    }

    fn frame_end(&mut self) {
        self.stats.frames += 1;
    }

    fn texture_create(&mut self, width: i32, height: i32, format: TextureFormat) -> Option<TextureId> {
        self.create_texture(width, height, format)
    }

    fn texture_set_data(&mut self, texture: TextureId, data: &[u8]) {
        if let Some(texture) = self.textures.get_mut(&texture.0) {
            let len = texture.data.len().min(data.len());
            texture.data[..len].copy_from_slice(&data[..len]);
        }
    }

    fn texture_get_data(&mut self, texture: TextureId, data: &mut [u8]) {
        if let Some(texture) = self.textures.get(&texture.0) {
            let len = texture.data.len().min(data.len());
            data[..len].copy_from_slice(&texture.data[..len]);
        }
    }

    fn texture_destroy(&mut self, texture: TextureId) {
        self.textures.remove(&texture.0);
    }

    fn target_create(&mut self, width: i32, height: i32, attachments: &[TextureFormat]) -> Option<TargetId> {
        if attachments.is_empty() || attachments.len() > MAX_TARGET_ATTACHMENTS {
            return None;
        }

        let mut textures = Vec::with_capacity(attachments.len());
        for format in attachments {
            match self.create_texture(width, height, *format) {
                Some(texture) => textures.push(texture),
                None => {
                    for texture in textures {
                        self.textures.remove(&texture.0);
                    }
                    return None;
                }
            }
        }

        let id = self.next_id();
        self.targets.insert(id, textures);
        Some(TargetId(id))
    }

    fn target_get_attachment(&mut self, target: TargetId, index: usize) -> Option<TextureId> {
        self.targets.get(&target.0)?.get(index).copied()
    }

    fn target_destroy(&mut self, target: TargetId) {
        if let Some(textures) = self.targets.remove(&target.0) {
            for texture in textures {
                self.textures.remove(&texture.0);
            }
        }
    }

    fn shader_create(&mut self, data: &ShaderData) -> Option<ShaderId> {
        let mut uniforms = Vec::new();
        for source in [&data.vertex, &data.fragment] {
            for (name, ty, array_elements) in scan_uniforms(source) {
                if uniforms.iter().any(|u: &UniformInfo| u.name == name) {
                    continue;
                }

                uniforms.push(UniformInfo {
                    index: uniforms.len(),
                    name,
                    ty,
                    array_elements,
                });
            }
        }

        let id = self.next_id();
        self.shaders.insert(
            id,
            HeadlessShader {
                uniforms,
                values: FxHashMap::default(),
                textures: FxHashMap::default(),
                samplers: FxHashMap::default(),
            },
        );

        Some(ShaderId(id))
    }

    fn shader_get_uniforms(&mut self, shader: ShaderId) -> Vec<UniformInfo> {
        self.shaders
            .get(&shader.0)
            .map(|s| s.uniforms.clone())
            .unwrap_or_default()
    }

    fn shader_set_uniform(&mut self, shader: ShaderId, index: usize, values: &[f32]) {
        if let Some(shader) = self.shaders.get_mut(&shader.0) {
            shader.values.insert(index, values.to_vec());
        }
    }

    fn shader_set_texture(&mut self, shader: ShaderId, index: usize, textures: &[Option<TextureId>]) {
        if let Some(shader) = self.shaders.get_mut(&shader.0) {
            shader.textures.insert(index, textures.to_vec());
        }
    }

    fn shader_set_sampler(&mut self, shader: ShaderId, index: usize, samplers: &[TextureSampler]) {
        if let Some(shader) = self.shaders.get_mut(&shader.0) {
            shader.samplers.insert(index, samplers.to_vec());
        }
    }

    fn shader_destroy(&mut self, shader: ShaderId) {
        self.shaders.remove(&shader.0);
    }

    fn mesh_create(&mut self) -> Option<MeshId> {
        let id = self.next_id();
        self.meshes.insert(id, HeadlessMesh::default());
        Some(MeshId(id))
    }

    fn mesh_set_vertex_format(&mut self, mesh: MeshId, format: &VertexFormat) {
        if let Some(mesh) = self.meshes.get_mut(&mesh.0) {
            mesh.vertex_format = format.clone();
        }
    }

    fn mesh_set_vertex_data(&mut self, mesh: MeshId, data: &[u8]) {
        if let Some(mesh) = self.meshes.get_mut(&mesh.0) {
            mesh.vertex_data = data.to_vec();
        }
    }

    fn mesh_set_index_format(&mut self, mesh: MeshId, format: IndexFormat) {
        if let Some(mesh) = self.meshes.get_mut(&mesh.0) {
            mesh.index_format = format;
        }
    }

    fn mesh_set_index_data(&mut self, mesh: MeshId, data: &[u8]) {
        if let Some(mesh) = self.meshes.get_mut(&mesh.0) {
            mesh.index_data = data.to_vec();
        }
    }

    fn mesh_destroy(&mut self, mesh: MeshId) {
        self.meshes.remove(&mesh.0);
    }

    fn draw(&mut self, command: &DrawCommand) {
        let Some(mesh) = self.meshes.get(&command.mesh.0) else {
            return;
        };

        if !self.shaders.contains_key(&command.shader.0) {
            return;
        }

        let available = mesh.index_data.len() / mesh.index_format.size();
        let end = command.index_start as usize + command.index_count as usize;
        if end > available || mesh.vertex_format.stride == 0 {
            return;
        }

        if mesh.vertex_data.len() % mesh.vertex_format.stride != 0 {
            return;
        }

        self.stats.draws += 1;
    }

    fn clear(&mut self, command: &ClearCommand) {
        if let Some(target) = command.target {
            if !self.targets.contains_key(&target.0) {
                return;
            }

            let color = command.color.to_bytes();
            for texture in &self.targets[&target.0] {
                if let Some(texture) = self.textures.get_mut(&texture.0) {
                    if texture.format == TextureFormat::R8G8B8A8
                        && command.mask.contains(super::ClearMask::Color)
                    {
                        for pixel in texture.data.chunks_exact_mut(4) {
                            pixel.copy_from_slice(&color);
                        }
                    }
                }
            }
        }

        self.stats.clears += 1;
    }
}

/// Finds `uniform <type> <name>[<n>];` declarations in a GLSL-like source.
fn scan_uniforms(source: &str) -> Vec<(String, UniformType, usize)> {
    let mut result = Vec::new();

    for statement in source.split(';') {
        let mut tokens = statement.split_whitespace();
        if !tokens.any(|t| t == "uniform") {
            continue;
        }

        let (Some(ty), Some(name)) = (tokens.next(), tokens.next()) else {
            continue;
        };

        let ty = match ty {
            "float" => UniformType::Float,
            "vec2" => UniformType::Float2,
            "vec3" => UniformType::Float3,
            "vec4" => UniformType::Float4,
            "mat3x2" => UniformType::Mat3x2,
            "mat4" | "mat4x4" => UniformType::Mat4x4,
            "texture2D" => UniformType::Texture2D,
            "sampler2D" | "sampler" => UniformType::Sampler2D,
            _ => UniformType::None,
        };

        let (name, array_elements) = match name.split_once('[') {
            Some((name, rest)) => {
                let count = rest.trim_end_matches(']').trim().parse().unwrap_or(1);
                (name, count)
            }
            None => (name, 1),
        };

        result.push((name.to_string(), ty, array_elements));
    }

    result
}
