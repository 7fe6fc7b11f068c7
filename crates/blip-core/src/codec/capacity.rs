use log::debug;

use crate::codec::policy::Profile;
use crate::codec::region::{Region, RegionSet};
use crate::error::BlipError;
use crate::result::Result;

/// largest width or height a generated canvas may have
pub const MAX_DIMENSION: u32 = 65_535;

/// pixels required to hold `bytes` payload bytes
pub fn pixels_needed(bytes: u64, profile: Profile) -> u64 {
    bytes.div_ceil(profile.bytes_per_pixel() as u64)
}

/// Dimensions of a fresh canvas that fits a payload
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CanvasPlan {
    pub width: u32,
    pub height: u32,
}

impl CanvasPlan {
    pub fn region(&self) -> Result<Region> {
        Region::covering(self.width, self.height)
    }
}

/// Grows the height of a `width` wide canvas until `bytes` fit in
pub fn plan_canvas(bytes: u64, width: u32, profile: Profile) -> Result<CanvasPlan> {
    if width == 0 {
        return Err(BlipError::InvalidWidth);
    }

    let height = pixels_needed(bytes, profile).div_ceil(width as u64).max(1);
    if width > MAX_DIMENSION || height > MAX_DIMENSION as u64 {
        return Err(BlipError::DimensionsExceeded {
            width: width as u64,
            height,
            max: MAX_DIMENSION,
        });
    }
    debug!("planned a canvas of {width}x{height} for {bytes} bytes");

    Ok(CanvasPlan {
        width,
        height: height as u32,
    })
}

/// Fails if `bytes` do not fit into the regions
pub fn ensure_capacity(bytes: u64, regions: &RegionSet, profile: Profile) -> Result<()> {
    let needed = pixels_needed(bytes, profile);
    let available = regions.capacity();
    debug!("payload needs {needed} of {available} pixels");

    if needed > available {
        return Err(BlipError::InsufficientRegionArea { needed, available });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_up_to_whole_pixels() {
        assert_eq!(pixels_needed(0, Profile::Gorge), 0);
        assert_eq!(pixels_needed(1, Profile::Gorge), 1);
        assert_eq!(pixels_needed(3, Profile::Gorge), 1);
        assert_eq!(pixels_needed(4, Profile::Gorge), 2);
        assert_eq!(pixels_needed(4, Profile::Bite), 2);
        assert_eq!(pixels_needed(4, Profile::Nibble), 4);
    }

    #[test]
    fn should_grow_the_canvas_height() {
        assert_eq!(
            plan_canvas(22, 1, Profile::Gorge).unwrap(),
            CanvasPlan {
                width: 1,
                height: 8
            }
        );
        assert_eq!(plan_canvas(22, 4, Profile::Gorge).unwrap().height, 2);
        assert_eq!(plan_canvas(22, 100, Profile::Gorge).unwrap().height, 1);
        assert_eq!(plan_canvas(0, 5, Profile::Gorge).unwrap().height, 1);
    }

    #[test]
    fn should_refuse_oversized_canvases() {
        assert!(matches!(
            plan_canvas(3 * (MAX_DIMENSION as u64 + 1), 1, Profile::Gorge),
            Err(BlipError::DimensionsExceeded { .. })
        ));
        assert!(matches!(
            plan_canvas(1, MAX_DIMENSION + 1, Profile::Gorge),
            Err(BlipError::DimensionsExceeded { .. })
        ));
        assert!(matches!(
            plan_canvas(1, 0, Profile::Gorge),
            Err(BlipError::InvalidWidth)
        ));
    }

    #[test]
    fn should_accept_an_exact_fit_and_refuse_one_pixel_less() {
        let exact = RegionSet::from(Region::new(0, 3, 0, 0).unwrap());
        let too_small = RegionSet::from(Region::new(0, 2, 0, 0).unwrap());

        assert!(ensure_capacity(8, &exact, Profile::Bite).is_ok());
        assert!(ensure_capacity(7, &exact, Profile::Bite).is_ok());
        assert!(matches!(
            ensure_capacity(8, &too_small, Profile::Bite),
            Err(BlipError::InsufficientRegionArea {
                needed: 4,
                available: 3
            })
        ));
    }
}
