use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub use image::RgbaImage;
use image::{ImageFormat, Rgb, Rgba};
use log::error;

use super::{BlankCanvas, Persist, PixelCanvas};
use crate::error::BlipError;
use crate::result::Result;

/// Opens a PNG (or any other format `image` understands) as RGBA pixels
pub fn open_image(path: &Path) -> Result<RgbaImage> {
    Ok(image::open(path)
        .map_err(|e| {
            error!("Error opening image {path:?}: {e}");
            BlipError::InvalidImageMedia
        })?
        .to_rgba8())
}

/// Colors are plain RGB values, writing one keeps the alpha of the pixel
impl PixelCanvas for RgbaImage {
    type Color = Rgb<u8>;

    fn width(&self) -> u32 {
        RgbaImage::width(self)
    }

    fn height(&self) -> u32 {
        RgbaImage::height(self)
    }

    fn get_pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let Rgba([r, g, b, _]) = *RgbaImage::get_pixel(self, x, y);
        [r, g, b]
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Self::Color) {
        let pixel = RgbaImage::get_pixel_mut(self, x, y);
        pixel.0[..3].copy_from_slice(&color.0);
    }

    fn allocate_color(&mut self, rgb: [u8; 3]) -> Self::Color {
        Rgb(rgb)
    }
}

/// an opaque black canvas
impl BlankCanvas for RgbaImage {
    fn blank(width: u32, height: u32) -> Self {
        RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, u8::MAX]))
    }
}

impl Persist for RgbaImage {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            BlipError::WriteError { source: e }
        })?;
        let mut writer = BufWriter::new(f);

        self.write_to(&mut writer, ImageFormat::Png).map_err(|e| {
            error!("Error saving image: {e}");
            BlipError::ImageEncodingError
        })
    }
}
