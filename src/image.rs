//! Image decode/encode passthrough.
//!
//! Pixels are always RGBA, 8 bits per channel, rows tightly packed.

use std::io::Write;

use ::image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};

pub const BYTES_PER_PIXEL: usize = 4;

/// A decoded RGBA8 image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Image {
    pub fn stride(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }
}

/// Decodes any format supported by the `image` crate into RGBA8.
pub fn load(data: &[u8]) -> Option<Image> {
    let image = match ::image::load_from_memory(data) {
        Ok(image) => image,
        Err(e) => {
            log::warn!("Failed to load image from memory: {}", e);
            return None;
        }
    };

    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();

    Some(Image {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

/// Releases a loaded image.
pub fn free(image: Image) {
    drop(image);
}

/// Encodes `pixels` as PNG into `writer`.
///
/// Returns false if the size is empty, the buffer is shorter than
/// `width * height * 4` bytes, or encoding fails.
pub fn write<W: Write>(writer: W, width: u32, height: u32, pixels: &[u8]) -> bool {
    if width == 0 || height == 0 {
        return false;
    }

    let len = width as usize * height as usize * BYTES_PER_PIXEL;
    if pixels.len() < len {
        log::warn!(
            "Image buffer too small: expected {} bytes, got {}",
            len,
            pixels.len()
        );
        return false;
    }

    let encoder = PngEncoder::new(writer);
    if let Err(e) = encoder.write_image(&pixels[..len], width, height, ExtendedColorType::Rgba8) {
        log::warn!("Failed to write image: {}", e);
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(width: u32, height: u32) -> Vec<u8> {
        let mut pixels = Vec::with_capacity((width * height) as usize * BYTES_PER_PIXEL);
        for y in 0..height {
            for x in 0..width {
                let v = if (x + y) % 2 == 0 { 255 } else { 0 };
                pixels.extend_from_slice(&[v, 0, 255 - v, 255]);
            }
        }
        pixels
    }

    #[test]
    fn png_survives_write_and_load() {
        let pixels = checker(3, 2);
        let mut png = Vec::new();

        assert!(write(&mut png, 3, 2, &pixels));
        assert!(png.starts_with(b"\x89PNG"));

        let image = load(&png).unwrap();
        assert_eq!((image.width, image.height), (3, 2));
        assert_eq!(image.stride(), 12);
        assert_eq!(image.pixels, pixels);

        free(image);
    }

    #[test]
    fn short_buffer_is_rejected() {
        let mut png = Vec::new();
        assert!(!write(&mut png, 4, 4, &[0; 10]));
        assert!(!write(&mut png, 0, 4, &[]));
        assert!(png.is_empty());
    }

    #[test]
    fn garbage_does_not_decode() {
        assert!(load(b"definitely not an image").is_none());
        assert!(load(&[]).is_none());
    }
}
