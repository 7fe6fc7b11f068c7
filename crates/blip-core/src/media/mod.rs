pub mod image;

use std::path::Path;

pub use self::image::{open_image, RgbaImage};

/// Pixel level access to an image, the codec never touches pixels in any other way
pub trait PixelCanvas {
    /// a handle for a color that can be set on pixels
    type Color: Copy;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// the red, green and blue value of a pixel
    fn get_pixel(&self, x: u32, y: u32) -> [u8; 3];

    fn set_pixel(&mut self, x: u32, y: u32, color: Self::Color);

    fn allocate_color(&mut self, rgb: [u8; 3]) -> Self::Color;
}

/// A canvas that can be created from scratch
pub trait BlankCanvas: PixelCanvas + Sized {
    fn blank(width: u32, height: u32) -> Self;
}

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> crate::Result<()>;
}
