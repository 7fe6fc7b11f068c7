use crate::codec::hex::push_hex;
use crate::codec::policy::{Channel, Profile, ResolvedPolicy};
use crate::codec::region::{Region, RegionSet};
use crate::media::PixelCanvas;
use crate::result::Result;

/// Reads pixels back into hex text, in the order a [`PixelWriter`] wrote them
///
/// [`PixelWriter`]: crate::codec::PixelWriter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelReader {
    channels: Vec<Channel>,
    profile: Profile,
}

impl Default for PixelReader {
    fn default() -> Self {
        Self::raw()
    }
}

impl PixelReader {
    /// reads all three channels of every pixel, whatever they were written with
    pub fn raw() -> Self {
        Self {
            channels: Channel::ALL.to_vec(),
            profile: Profile::Gorge,
        }
    }

    /// reads only the channels a policy writes payload into
    pub fn for_policy(policy: &ResolvedPolicy) -> Self {
        Self {
            channels: policy.data_channels().collect(),
            profile: policy.profile(),
        }
    }

    /// payload bytes read per pixel
    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// hex digits per pixel
    pub fn group_size(&self) -> usize {
        self.profile.hex_group_size()
    }

    /// Hex text of a `region`, or of the whole canvas when there is none
    pub fn read_hex<C: PixelCanvas>(&self, canvas: &C, region: Option<Region>) -> Result<String> {
        let region = match region {
            Some(region) => region,
            None => Region::covering(canvas.width(), canvas.height())?,
        };
        self.read_hex_regions(canvas, &RegionSet::from(region))
    }

    /// Hex text of all `regions`, one after the other
    pub fn read_hex_regions<C: PixelCanvas>(&self, canvas: &C, regions: &RegionSet) -> Result<String> {
        regions.check_within(canvas.width(), canvas.height())?;

        let mut hex = String::with_capacity(regions.capacity() as usize * self.group_size());
        for (x, y) in regions.pixels() {
            let rgb = canvas.get_pixel(x, y);
            for channel in &self.channels {
                push_hex(&mut hex, rgb[channel.index()]);
            }
        }

        Ok(hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::policy::{ChannelBehavior::*, ChannelPolicy};
    use crate::error::BlipError;
    use image::{Rgba, RgbaImage};

    fn gradient() -> RgbaImage {
        RgbaImage::from_fn(3, 2, |x, y| Rgba([x as u8, y as u8, 0xa0 + x as u8, 0xff]))
    }

    #[test]
    fn should_read_the_whole_image_row_by_row() {
        let hex = PixelReader::raw().read_hex(&gradient(), None).unwrap();

        assert_eq!(hex, "0000a00100a10200a20001a00101a10201a2");
    }

    #[test]
    fn should_read_only_the_given_region() {
        let region = Region::new(1, 2, 1, 1).unwrap();
        let hex = PixelReader::raw()
            .read_hex(&gradient(), Some(region))
            .unwrap();

        assert_eq!(hex, "0101a10201a2");
    }

    #[test]
    fn should_read_regions_one_after_the_other() {
        let regions = RegionSet::new(vec![
            Region::new(2, 2, 1, 1).unwrap(),
            Region::new(0, 0, 0, 0).unwrap(),
        ])
        .unwrap();
        let hex = PixelReader::raw()
            .read_hex_regions(&gradient(), &regions)
            .unwrap();

        assert_eq!(hex, "0201a20000a0");
    }

    #[test]
    fn should_read_only_data_channels_of_a_policy() {
        let policy = ChannelPolicy::new(Preserve, Overwrite, DeriveByXor)
            .resolve()
            .unwrap();
        let reader = PixelReader::for_policy(&policy);
        let hex = reader
            .read_hex(&gradient(), Some(Region::new(0, 2, 1, 1).unwrap()))
            .unwrap();

        assert_eq!(reader.profile(), Profile::Nibble);
        assert_eq!(reader.group_size(), 2);
        assert_eq!(hex, "010101");
    }

    #[test]
    fn should_refuse_regions_outside_of_the_image() {
        let err = PixelReader::raw()
            .read_hex(&gradient(), Some(Region::new(0, 3, 0, 0).unwrap()))
            .unwrap_err();

        assert!(matches!(err, BlipError::RegionOutOfBounds { .. }));
    }
}
