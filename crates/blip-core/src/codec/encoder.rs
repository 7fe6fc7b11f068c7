use std::io::{Read, Seek, Write};

use log::{debug, warn};

use crate::codec::capacity::{ensure_capacity, plan_canvas};
use crate::codec::compressor::{CompressionOptions, Compressor};
use crate::codec::hex::HexChunks;
use crate::codec::policy::{ChannelPolicy, ResolvedPolicy};
use crate::codec::region::RegionSet;
use crate::codec::writer::{PixelWriter, WriteSummary};
use crate::error::BlipError;
use crate::media::{BlankCanvas, PixelCanvas};
use crate::result::Result;

/// Where the encoded payload ends up
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum EncodeMode {
    /// a fresh canvas, `width` pixels wide and as high as the payload needs
    Overwrite { width: u32 },
    /// the given regions of an existing carrier image, everything else stays untouched
    Embed { regions: RegionSet },
}

#[derive(Debug, Clone)]
pub struct EncoderOptions {
    pub mode: EncodeMode,
    pub policy: ChannelPolicy,
    pub compression: CompressionOptions,
}

impl EncoderOptions {
    pub fn overwrite(width: u32) -> Self {
        Self::with_mode(EncodeMode::Overwrite { width })
    }

    pub fn embed(regions: RegionSet) -> Self {
        Self::with_mode(EncodeMode::Embed { regions })
    }

    fn with_mode(mode: EncodeMode) -> Self {
        Self {
            mode,
            policy: ChannelPolicy::default(),
            compression: CompressionOptions::default(),
        }
    }

    pub fn with_policy(mut self, policy: ChannelPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_compression(mut self, compression: CompressionOptions) -> Self {
        self.compression = compression;
        self
    }
}

/// Compresses a payload and writes it into the pixels of a canvas.
///
/// Nothing is written before the payload is known to fit.
#[derive(Debug, Clone)]
pub struct Encoder {
    mode: EncodeMode,
    policy: ResolvedPolicy,
    compressor: Compressor,
}

impl Encoder {
    /// Validates the options, a bad policy or a zero width never makes it to an encode.
    ///
    /// A fresh canvas is always written with all channels overwritten, so that
    /// [`Decoder::new`] reads it back. A custom policy only applies when embedding.
    ///
    /// [`Decoder::new`]: crate::codec::Decoder::new
    pub fn new(options: EncoderOptions) -> Result<Self> {
        let policy = match options.mode {
            EncodeMode::Overwrite { width: 0 } => return Err(BlipError::InvalidWidth),
            EncodeMode::Overwrite { .. } => {
                if options.policy != ChannelPolicy::default() {
                    warn!("Channel policy is ignored, a fresh canvas gets all channels overwritten");
                }
                ChannelPolicy::default().resolve()?
            }
            EncodeMode::Embed { .. } => options.policy.resolve()?,
        };

        Ok(Self {
            mode: options.mode,
            policy,
            compressor: Compressor::new(options.compression),
        })
    }

    pub fn mode(&self) -> &EncodeMode {
        &self.mode
    }

    pub fn policy(&self) -> &ResolvedPolicy {
        &self.policy
    }

    /// Encodes `payload` and returns the written canvas.
    ///
    /// `carrier` is required when embedding and ignored when overwriting.
    pub fn encode<C, R>(&self, payload: R, carrier: Option<C>) -> Result<C>
    where
        C: BlankCanvas,
        R: Read,
    {
        let mut spool = self.compressor.spool();
        self.encode_with_spool(payload, carrier, &mut spool)
    }

    /// Same as [`Encoder::encode`], the compressed payload goes through `spool`
    pub fn encode_with_spool<C, R, S>(
        &self,
        mut payload: R,
        carrier: Option<C>,
        spool: &mut S,
    ) -> Result<C>
    where
        C: BlankCanvas,
        R: Read,
        S: Read + Write + Seek,
    {
        let profile = self.policy.profile();
        match &self.mode {
            EncodeMode::Overwrite { width } => {
                if carrier.is_some() {
                    warn!("Carrier image is ignored, a fresh canvas gets written");
                }
                let total = self.compressor.compress_into(&mut payload, spool)?;
                let plan = plan_canvas(total, *width, profile)?;
                let regions = RegionSet::from(plan.region()?);

                let mut canvas = C::blank(plan.width, plan.height);
                self.write_payload(&mut canvas, &regions, spool, total)?;
                Ok(canvas)
            }
            EncodeMode::Embed { regions } => {
                let mut canvas = carrier.ok_or(BlipError::CarrierNotSet)?;
                let total = self.compressor.compress_into(&mut payload, spool)?;
                ensure_capacity(total, regions, profile)?;

                self.write_payload(&mut canvas, regions, spool, total)?;
                Ok(canvas)
            }
        }
    }

    fn write_payload<C, S>(
        &self,
        canvas: &mut C,
        regions: &RegionSet,
        spool: &mut S,
        total: u64,
    ) -> Result<WriteSummary>
    where
        C: PixelCanvas,
        S: Read,
    {
        debug!(
            "writing {total} bytes with {:?} into {} pixels",
            self.policy.profile(),
            regions.capacity()
        );
        let chunks = HexChunks::new((&mut *spool).take(total), self.policy.profile());
        PixelWriter::new(self.policy).write(canvas, regions, chunks)
    }
}
