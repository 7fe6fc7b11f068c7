use log::debug;

use crate::codec::compressor::decompress;
use crate::codec::hex::{from_hex, trim_pad};
use crate::codec::policy::ChannelPolicy;
use crate::codec::reader::PixelReader;
use crate::codec::region::{Region, RegionSet};
use crate::media::PixelCanvas;
use crate::result::Result;

/// Reads a payload back out of the pixels an [`Encoder`] wrote.
///
/// By default all three channels of every pixel are read, which is what an
/// encode with the default policy produces.
///
/// [`Encoder`]: crate::codec::Encoder
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Decoder {
    reader: PixelReader,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads only the channels `policy` wrote payload into
    pub fn with_policy(policy: ChannelPolicy) -> Result<Self> {
        let policy = policy.resolve()?;
        Ok(Self {
            reader: PixelReader::for_policy(&policy),
        })
    }

    /// Decodes the payload of `region`, or of the whole canvas if there is none
    pub fn decode<C: PixelCanvas>(&self, canvas: &C, region: Option<Region>) -> Result<Vec<u8>> {
        let hex = self.reader.read_hex(canvas, region)?;
        self.unpack(&hex)
    }

    /// Decodes a payload that was embedded into several regions
    pub fn decode_regions<C: PixelCanvas>(&self, canvas: &C, regions: &RegionSet) -> Result<Vec<u8>> {
        let hex = self.reader.read_hex_regions(canvas, regions)?;
        self.unpack(&hex)
    }

    fn unpack(&self, hex: &str) -> Result<Vec<u8>> {
        let data = trim_pad(hex, self.reader.profile());
        debug!("read {} hex digits, {} after trimming", hex.len(), data.len());

        decompress(&from_hex(data)?)
    }
}
