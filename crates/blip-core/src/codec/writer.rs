use std::collections::HashMap;

use log::debug;

use crate::codec::hex::{parse_pair, sentinel_chunk};
use crate::codec::policy::{Channel, ChannelBehavior, ResolvedPolicy};
use crate::codec::region::RegionSet;
use crate::media::PixelCanvas;
use crate::result::Result;

/// What a [`PixelWriter`] did
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct WriteSummary {
    /// pixels written from payload chunks
    pub payload_pixels: u64,
    /// pixels filled with the sentinel chunk
    pub sentinel_pixels: u64,
    /// distinct colors allocated on the canvas
    pub colors: usize,
}

/// Streams hex chunks into the pixels of a [`RegionSet`], one chunk per pixel
pub struct PixelWriter {
    policy: ResolvedPolicy,
}

impl PixelWriter {
    pub fn new(policy: ResolvedPolicy) -> Self {
        Self { policy }
    }

    /// Writes `chunks` region by region, row by row.
    ///
    /// All regions are checked against the canvas before the first pixel is
    /// touched. Once `chunks` runs dry the remaining pixels get the sentinel
    /// chunk, so the whole region set is always written.
    pub fn write<C, I>(&self, canvas: &mut C, regions: &RegionSet, chunks: I) -> Result<WriteSummary>
    where
        C: PixelCanvas,
        I: IntoIterator<Item = Result<String>>,
    {
        regions.check_within(canvas.width(), canvas.height())?;

        let sentinel = sentinel_chunk(self.policy.profile());
        let mut chunks = chunks.into_iter();
        let mut colors: HashMap<[u8; 3], C::Color> = HashMap::new();
        let mut summary = WriteSummary::default();

        for (x, y) in regions.pixels() {
            let chunk = match chunks.next() {
                Some(chunk) => {
                    summary.payload_pixels += 1;
                    chunk?
                }
                None => {
                    summary.sentinel_pixels += 1;
                    sentinel.clone()
                }
            };

            let original = if self.policy.needs_original_pixel() {
                canvas.get_pixel(x, y)
            } else {
                [0; 3]
            };
            let rgb = self.render_pixel(original, &chunk)?;

            let color = *colors
                .entry(rgb)
                .or_insert_with(|| canvas.allocate_color(rgb));
            canvas.set_pixel(x, y, color);
        }

        summary.colors = colors.len();
        debug!("{summary:?}");

        Ok(summary)
    }

    /// Computes the new color of a pixel from its original color and a hex chunk
    pub fn render_pixel(&self, original: [u8; 3], chunk: &str) -> Result<[u8; 3]> {
        let mut rgb = original;
        let mut cursor = 0;
        let mut xor = 0;

        for channel in Channel::ALL {
            let i = channel.index();
            match self.policy.behavior(channel) {
                ChannelBehavior::Overwrite => {
                    rgb[i] = parse_pair(chunk, cursor)?;
                    cursor += 2;
                }
                ChannelBehavior::Preserve | ChannelBehavior::DeriveByXor => {
                    if self.policy.xor_source() == Some(channel) {
                        xor = rgb[i];
                    }
                }
            }
        }

        // needs all channels known, the XOR source may come after the derived one
        for channel in Channel::ALL {
            if self.policy.behavior(channel) == ChannelBehavior::DeriveByXor {
                rgb[channel.index()] ^= xor;
            }
        }

        Ok(rgb)
    }
}
