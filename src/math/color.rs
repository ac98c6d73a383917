/// RGBA color, 0..=255 per channel.
#[repr(C)]
#[derive(Clone, Copy, Default, Debug, Hash, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels as floats in the [0, 1] range.
    pub fn to_f32(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    pub fn to_bytes(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const TRANSPARENT: Color = Self::new(0, 0, 0, 0);
    pub const BLACK: Color = Self::new(0, 0, 0, 255);
    pub const WHITE: Color = Self::new(255, 255, 255, 255);
    pub const CORNFLOWERBLUE: Color = Self::new(100, 149, 237, 255);
}
