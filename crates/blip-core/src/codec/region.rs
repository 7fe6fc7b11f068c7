use std::str::FromStr;

use crate::error::BlipError;
use crate::result::Result;

/// A rectangular area of pixels with inclusive bounds
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Region {
    x1: u32,
    x2: u32,
    y1: u32,
    y2: u32,
}

impl Region {
    pub fn new(x1: u32, x2: u32, y1: u32, y2: u32) -> Result<Self> {
        if x1 > x2 || y1 > y2 {
            return Err(BlipError::InvalidRegion { x1, x2, y1, y2 });
        }
        Ok(Self { x1, x2, y1, y2 })
    }

    /// the region spanning a whole `width` x `height` image
    pub fn covering(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(BlipError::InvalidWidth);
        }
        Self::new(0, width - 1, 0, height - 1)
    }

    pub fn x1(&self) -> u32 {
        self.x1
    }

    pub fn x2(&self) -> u32 {
        self.x2
    }

    pub fn y1(&self) -> u32 {
        self.y1
    }

    pub fn y2(&self) -> u32 {
        self.y2
    }

    pub fn width(&self) -> u32 {
        self.x2 - self.x1 + 1
    }

    pub fn height(&self) -> u32 {
        self.y2 - self.y1 + 1
    }

    /// number of pixels
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    pub fn check_within(&self, width: u32, height: u32) -> Result<()> {
        if self.x2 >= width || self.y2 >= height {
            return Err(BlipError::RegionOutOfBounds {
                x1: self.x1,
                x2: self.x2,
                y1: self.y1,
                y2: self.y2,
                width,
                height,
            });
        }
        Ok(())
    }

    /// pixel coordinates row by row, this order is part of the format
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> {
        let Self { x1, x2, y1, y2 } = *self;
        (y1..=y2).flat_map(move |y| (x1..=x2).map(move |x| (x, y)))
    }
}

/// Parses `x1,x2,y1,y2`
impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let coords = s
            .split(',')
            .map(|c| c.trim().parse::<u32>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| format!("invalid region coordinate in `{s}`: {e}"))?;

        match coords[..] {
            [x1, x2, y1, y2] => Region::new(x1, x2, y1, y2).map_err(|e| e.to_string()),
            _ => Err(format!("a region needs 4 coordinates `x1,x2,y1,y2`, got `{s}`")),
        }
    }
}

/// The ordered regions a payload is spread over
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RegionSet {
    regions: Vec<Region>,
}

impl RegionSet {
    pub fn new(regions: Vec<Region>) -> Result<Self> {
        if regions.is_empty() {
            return Err(BlipError::MissingRegions);
        }
        Ok(Self { regions })
    }

    /// total number of pixels over all regions
    pub fn capacity(&self) -> u64 {
        self.regions.iter().map(Region::area).sum()
    }

    pub fn check_within(&self, width: u32, height: u32) -> Result<()> {
        self.regions
            .iter()
            .try_for_each(|r| r.check_within(width, height))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    /// all pixel coordinates, region after region
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.regions.iter().flat_map(Region::pixels)
    }
}

impl From<Region> for RegionSet {
    fn from(region: Region) -> Self {
        Self {
            regions: vec![region],
        }
    }
}
