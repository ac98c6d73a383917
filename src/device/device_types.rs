use crate::math::{Color, Rect};

/// Opaque texture handle handed out by a [super::RenderDevice].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TextureId(pub u64);

/// Opaque render target handle.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TargetId(pub u64);

/// Opaque shader handle.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShaderId(pub u64);

/// Opaque mesh handle.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct MeshId(pub u64);

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum TextureFormat {
    /// Red, green, blue, and alpha channels. 8 bit integer per channel.
    R8G8B8A8,
    /// Red channel only. 8 bit integer per channel.
    R8,
    /// 24 bit depth and 8 bit stencil.
    Depth24Stencil8,
}

impl TextureFormat {
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            TextureFormat::R8G8B8A8 => 4,
            TextureFormat::R8 => 1,
            TextureFormat::Depth24Stencil8 => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum TextureFilter {
    Nearest,
    Linear,
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum TextureWrap {
    Repeat,
    MirroredRepeat,
    ClampToEdge,
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct TextureSampler {
    pub filter: TextureFilter,
    pub wrap_x: TextureWrap,
    pub wrap_y: TextureWrap,
}

impl TextureSampler {
    pub fn new(filter: TextureFilter, wrap_x: TextureWrap, wrap_y: TextureWrap) -> Self {
        Self {
            filter,
            wrap_x,
            wrap_y,
        }
    }

    pub const DEFAULT: Self = Self {
        filter: TextureFilter::Linear,
        wrap_x: TextureWrap::ClampToEdge,
        wrap_y: TextureWrap::ClampToEdge,
    };
}

impl Default for TextureSampler {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum UniformType {
    None,
    Float,
    Float2,
    Float3,
    Float4,
    Mat3x2,
    Mat4x4,
    Texture2D,
    Sampler2D,
}

impl UniformType {
    /// Number of floats a single element of this type consumes.
    pub fn float_count(&self) -> usize {
        match self {
            UniformType::Float => 1,
            UniformType::Float2 => 2,
            UniformType::Float3 => 3,
            UniformType::Float4 => 4,
            UniformType::Mat3x2 => 6,
            UniformType::Mat4x4 => 16,
            UniformType::None | UniformType::Texture2D | UniformType::Sampler2D => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformInfo {
    pub index: usize,
    pub name: String,
    pub ty: UniformType,
    pub array_elements: usize,
}

/// Shader sources, in whatever language the device consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderData {
    pub vertex: String,
    pub fragment: String,
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum VertexType {
    Float,
    Float2,
    Float3,
    Float4,
    Byte4,
    UByte4,
    Short2,
    UShort2,
    Short4,
    UShort4,
}

impl VertexType {
    pub fn size(&self) -> usize {
        match self {
            VertexType::Float => 4,
            VertexType::Float2 => 8,
            VertexType::Float3 => 12,
            VertexType::Float4 => 16,
            VertexType::Byte4 | VertexType::UByte4 => 4,
            VertexType::Short2 | VertexType::UShort2 => 4,
            VertexType::Short4 | VertexType::UShort4 => 8,
        }
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct VertexElement {
    pub index: u32,
    pub ty: VertexType,
    pub normalized: bool,
}

#[derive(Debug, Clone, Default, Hash, PartialEq, Eq)]
pub struct VertexFormat {
    pub elements: Vec<VertexElement>,
    pub stride: usize,
}

impl VertexFormat {
    /// Builds a format whose stride is the packed size of its elements.
    pub fn packed(elements: Vec<VertexElement>) -> Self {
        let stride = elements.iter().map(|e| e.ty.size()).sum();
        Self { elements, stride }
    }
}

#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub enum IndexFormat {
    #[default]
    Sixteen,
    ThirtyTwo,
}

impl IndexFormat {
    pub fn size(&self) -> usize {
        match self {
            IndexFormat::Sixteen => 2,
            IndexFormat::ThirtyTwo => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub enum Compare {
    #[default]
    None,
    Always,
    Never,
    Less,
    Equal,
    LessOrEqual,
    Greater,
    NotEqual,
    GreaterOrEqual,
}

#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub enum Cull {
    #[default]
    None,
    Front,
    Back,
}

#[derive(Clone, Debug, Hash, Copy, PartialEq, Eq)]
pub enum BlendOperation {
    Add,
    Subtract,
    ReverseSubtract,
    Min,
    Max,
}

#[derive(Clone, Debug, Hash, Copy, PartialEq, Eq)]
pub enum BlendFactor {
    Zero,
    One,
    SrcColor,
    OneMinusSrcColor,
    DstColor,
    OneMinusDstColor,
    SrcAlpha,
    OneMinusSrcAlpha,
    DstAlpha,
    OneMinusDstAlpha,
    ConstantColor,
    OneMinusConstantColor,
    SrcAlphaSaturated,
}

#[derive(Clone, Hash, Copy, Debug, PartialEq, Eq)]
pub struct BlendMask(u8);

bitflags::bitflags! {
    impl BlendMask: u8 {
        const None = 0b0000;
        const Red = 0b0001;
        const Green = 0b0010;
        const Blue = 0b0100;
        const Alpha = 0b1000;
        const Rgb = Self::Red.bits() | Self::Green.bits() | Self::Blue.bits();
        const Rgba = Self::Rgb.bits() | Self::Alpha.bits();
    }
}

#[derive(Clone, Debug, Hash, Copy, PartialEq, Eq)]
pub struct Blend {
    pub color_op: BlendOperation,
    pub color_src: BlendFactor,
    pub color_dst: BlendFactor,
    pub alpha_op: BlendOperation,
    pub alpha_src: BlendFactor,
    pub alpha_dst: BlendFactor,
    pub mask: BlendMask,
    pub constant: Color,
}

impl Blend {
    pub const PREMULTIPLY: Self = Self {
        color_op: BlendOperation::Add,
        color_src: BlendFactor::One,
        color_dst: BlendFactor::OneMinusSrcAlpha,
        alpha_op: BlendOperation::Add,
        alpha_src: BlendFactor::One,
        alpha_dst: BlendFactor::OneMinusSrcAlpha,
        mask: BlendMask::Rgba,
        constant: Color::WHITE,
    };

    pub const NONE: Self = Self {
        color_op: BlendOperation::Add,
        color_src: BlendFactor::One,
        color_dst: BlendFactor::Zero,
        alpha_op: BlendOperation::Add,
        alpha_src: BlendFactor::One,
        alpha_dst: BlendFactor::Zero,
        mask: BlendMask::Rgba,
        constant: Color::WHITE,
    };
}

impl Default for Blend {
    fn default() -> Self {
        Self::PREMULTIPLY
    }
}

/// A single draw call.
///
/// `target: None` draws to the window back buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCommand {
    pub target: Option<TargetId>,
    pub mesh: MeshId,
    pub shader: ShaderId,
    pub viewport: Option<Rect>,
    pub scissor: Option<Rect>,
    pub index_start: u32,
    pub index_count: u32,
    pub instance_count: u32,
    pub compare: Compare,
    pub depth_mask: bool,
    pub cull: Cull,
    pub blend: Blend,
}

impl DrawCommand {
    pub fn new(mesh: MeshId, shader: ShaderId, index_count: u32) -> Self {
        Self {
            target: None,
            mesh,
            shader,
            viewport: None,
            scissor: None,
            index_start: 0,
            index_count,
            instance_count: 0,
            compare: Compare::None,
            depth_mask: false,
            cull: Cull::None,
            blend: Blend::PREMULTIPLY,
        }
    }
}

#[derive(Clone, Hash, Copy, Debug, PartialEq, Eq)]
pub struct ClearMask(u8);

bitflags::bitflags! {
    impl ClearMask: u8 {
        const None = 0b000;
        const Color = 0b001;
        const Depth = 0b010;
        const Stencil = 0b100;
        const All = Self::Color.bits() | Self::Depth.bits() | Self::Stencil.bits();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClearCommand {
    pub target: Option<TargetId>,
    pub clip: Rect,
    pub color: Color,
    pub depth: f32,
    pub stencil: i32,
    pub mask: ClearMask,
}

impl ClearCommand {
    pub fn color(target: Option<TargetId>, clip: Rect, color: Color) -> Self {
        Self {
            target,
            clip,
            color,
            depth: 1.0,
            stencil: 0,
            mask: ClearMask::Color,
        }
    }
}
