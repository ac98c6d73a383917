use crate::{
    device::{
        ClearCommand, DrawCommand, IndexFormat, MAX_TARGET_ATTACHMENTS, MeshId, RenderDevice,
        ShaderData, ShaderId, TargetId, TextureFormat, TextureId, TextureSampler, UniformInfo,
        VertexFormat,
    },
    host::Host,
    platform_error,
};

use super::Platform;

impl<H: Host> Platform<H> {
    fn render_device(&mut self, operation: &str) -> Option<&mut Box<dyn RenderDevice>> {
        self.guard(operation)?;
        self.device.as_mut()
    }

    pub fn texture_create(&mut self, width: i32, height: i32, format: TextureFormat) -> Option<TextureId> {
        self.render_device("texture_create")?
            .texture_create(width, height, format)
    }

    pub fn texture_set_data(&mut self, texture: TextureId, data: &[u8]) {
        if let Some(device) = self.render_device("texture_set_data") {
            device.texture_set_data(texture, data);
        }
    }

    pub fn texture_get_data(&mut self, texture: TextureId, data: &mut [u8]) {
        if let Some(device) = self.render_device("texture_get_data") {
            device.texture_get_data(texture, data);
        }
    }

    pub fn texture_destroy(&mut self, texture: TextureId) {
        if let Some(device) = self.render_device("texture_destroy") {
            device.texture_destroy(texture);
        }
    }

    pub fn target_create(
        &mut self,
        width: i32,
        height: i32,
        attachments: &[TextureFormat],
    ) -> Option<TargetId> {
        self.guard("target_create")?;

        if attachments.len() > MAX_TARGET_ATTACHMENTS {
            platform_error!(
                self.desc.logger,
                "Render target can have at most {} attachments, got {}",
                MAX_TARGET_ATTACHMENTS,
                attachments.len()
            );
            return None;
        }

        self.device.as_mut()?.target_create(width, height, attachments)
    }

    pub fn target_get_attachment(&mut self, target: TargetId, index: usize) -> Option<TextureId> {
        self.guard("target_get_attachment")?;

        if index >= MAX_TARGET_ATTACHMENTS {
            platform_error!(
                self.desc.logger,
                "Attachment index {} out of range, max is {}",
                index,
                MAX_TARGET_ATTACHMENTS
            );
            return None;
        }

        self.device.as_mut()?.target_get_attachment(target, index)
    }

    pub fn target_destroy(&mut self, target: TargetId) {
        if let Some(device) = self.render_device("target_destroy") {
            device.target_destroy(target);
        }
    }

    pub fn shader_create(&mut self, data: &ShaderData) -> Option<ShaderId> {
        self.render_device("shader_create")?.shader_create(data)
    }

    pub fn shader_get_uniforms(&mut self, shader: ShaderId) -> Vec<UniformInfo> {
        match self.render_device("shader_get_uniforms") {
            Some(device) => device.shader_get_uniforms(shader),
            None => Vec::new(),
        }
    }

    pub fn shader_set_uniform(&mut self, shader: ShaderId, index: usize, values: &[f32]) {
        if let Some(device) = self.render_device("shader_set_uniform") {
            device.shader_set_uniform(shader, index, values);
        }
    }

    pub fn shader_set_texture(&mut self, shader: ShaderId, index: usize, textures: &[Option<TextureId>]) {
        if let Some(device) = self.render_device("shader_set_texture") {
            device.shader_set_texture(shader, index, textures);
        }
    }

    pub fn shader_set_sampler(&mut self, shader: ShaderId, index: usize, samplers: &[TextureSampler]) {
        if let Some(device) = self.render_device("shader_set_sampler") {
            device.shader_set_sampler(shader, index, samplers);
        }
    }

    pub fn shader_destroy(&mut self, shader: ShaderId) {
        if let Some(device) = self.render_device("shader_destroy") {
            device.shader_destroy(shader);
        }
    }

    pub fn mesh_create(&mut self) -> Option<MeshId> {
        self.render_device("mesh_create")?.mesh_create()
    }

    pub fn mesh_set_vertex_format(&mut self, mesh: MeshId, format: &VertexFormat) {
        if let Some(device) = self.render_device("mesh_set_vertex_format") {
            device.mesh_set_vertex_format(mesh, format);
        }
    }

    pub fn mesh_set_vertex_data(&mut self, mesh: MeshId, data: &[u8]) {
        if let Some(device) = self.render_device("mesh_set_vertex_data") {
            device.mesh_set_vertex_data(mesh, data);
        }
    }

    pub fn mesh_set_index_format(&mut self, mesh: MeshId, format: IndexFormat) {
        if let Some(device) = self.render_device("mesh_set_index_format") {
            device.mesh_set_index_format(mesh, format);
        }
    }

    pub fn mesh_set_index_data(&mut self, mesh: MeshId, data: &[u8]) {
        if let Some(device) = self.render_device("mesh_set_index_data") {
            device.mesh_set_index_data(mesh, data);
        }
    }

    pub fn mesh_destroy(&mut self, mesh: MeshId) {
        if let Some(device) = self.render_device("mesh_destroy") {
            device.mesh_destroy(mesh);
        }
    }

    pub fn draw(&mut self, command: &DrawCommand) {
        if let Some(device) = self.render_device("draw") {
            device.draw(command);
        }
    }

    pub fn clear(&mut self, command: &ClearCommand) {
        if let Some(device) = self.render_device("clear") {
            device.clear(command);
        }
    }
}
