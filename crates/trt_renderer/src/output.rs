//! Tone mapping and image file output.

use std::path::Path;

use image::RgbaImage;
use thiserror::Error;
use trt_core::Color;
use trt_math::Interval;

use crate::renderer::ImageBuffer;

/// Errors that can occur while writing a rendered image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Pixel buffer holds {actual} bytes, expected {expected} for {width}x{height}")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Scale a color down so its brightest channel is at most 1.
///
/// Hue is preserved; colors already in range are left untouched.
#[inline]
pub fn tone_map(color: Color) -> Color {
    let max = color.max_element();
    if max > 1.0 {
        color * (1.0 / max)
    } else {
        color
    }
}

/// Convert a linear color to opaque 8-bit RGBA.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let c = tone_map(color);
    let to_byte = |v: f32| (255.0 * Interval::UNIT.clamp(v)) as u8;
    [to_byte(c.x), to_byte(c.y), to_byte(c.z), 255]
}

impl ImageBuffer {
    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }

    /// Convert to an `image` RGBA image.
    pub fn to_image(&self) -> OutputResult<RgbaImage> {
        let bytes = self.to_rgba();
        let actual = bytes.len();
        RgbaImage::from_raw(self.width, self.height, bytes).ok_or(OutputError::BufferSize {
            width: self.width,
            height: self.height,
            expected: (self.width * self.height * 4) as usize,
            actual,
        })
    }

    /// Write the image as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> OutputResult<()> {
        let path = path.as_ref();
        self.to_image()?
            .save_with_format(path, image::ImageFormat::Png)?;
        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_map_leaves_in_range_colors() {
        let c = Color::new(0.2, 0.7, 0.8);
        assert_eq!(tone_map(c), c);
        assert_eq!(tone_map(Color::ONE), Color::ONE);
    }

    #[test]
    fn test_tone_map_divides_by_max_channel() {
        let mapped = tone_map(Color::new(2.0, 1.0, 0.5));
        assert_eq!(mapped, Color::new(1.0, 0.5, 0.25));
    }

    #[test]
    fn test_color_to_rgba() {
        assert_eq!(color_to_rgba(Color::ZERO), [0, 0, 0, 255]);
        assert_eq!(color_to_rgba(Color::ONE), [255, 255, 255, 255]);
        // Truncates rather than rounds: 0.5 * 255 = 127.5
        assert_eq!(color_to_rgba(Color::new(0.5, 0.0, 0.0)), [127, 0, 0, 255]);
        // Highlights are desaturated, not clipped per channel
        assert_eq!(color_to_rgba(Color::new(4.0, 2.0, 0.0)), [255, 127, 0, 255]);
        // Negative channels clamp to zero
        assert_eq!(color_to_rgba(Color::new(-0.3, 0.2, 0.1))[0], 0);
    }

    #[test]
    fn test_to_rgba_layout() {
        let mut image = ImageBuffer::new(2, 1);
        image.set(1, 0, Color::new(1.0, 0.0, 0.0));

        assert_eq!(image.to_rgba(), vec![0, 0, 0, 255, 255, 0, 0, 255]);
    }

    #[test]
    fn test_to_image_dimensions() {
        let image = ImageBuffer::new(5, 3);
        let rgba = image.to_image().unwrap();

        assert_eq!(rgba.dimensions(), (5, 3));
        assert_eq!(rgba.get_pixel(4, 2).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_to_image_rejects_mismatched_buffer() {
        let mut image = ImageBuffer::new(2, 2);
        image.pixels.pop();

        assert!(matches!(
            image.to_image(),
            Err(OutputError::BufferSize { expected: 16, actual: 12, .. })
        ));
    }

    #[test]
    fn test_save_png_round_trip() {
        let mut image = ImageBuffer::new(3, 2);
        image.set(0, 1, Color::new(0.2, 0.7, 0.8));
        let path = std::env::temp_dir().join(format!("trt_output_{}.png", std::process::id()));

        image.save_png(&path).unwrap();
        let loaded = image::open(&path).unwrap().to_rgba8();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.dimensions(), (3, 2));
        assert_eq!(loaded.get_pixel(0, 1).0, color_to_rgba(Color::new(0.2, 0.7, 0.8)));
    }
}
