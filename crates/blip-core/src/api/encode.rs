use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

use log::error;

use crate::codec::{ChannelPolicy, CompressionOptions, Encoder, EncoderOptions, Region, RegionSet};
use crate::media::{open_image, Persist, RgbaImage};
use crate::{BlipError, Result};

pub fn prepare() -> EncodeApi {
    EncodeApi::default()
}

#[derive(Default, Debug)]
pub struct EncodeApi {
    message: Option<String>,
    file: Option<PathBuf>,
    width: Option<u32>,
    carrier: Option<PathBuf>,
    regions: Vec<Region>,
    policy: ChannelPolicy,
    compression: CompressionOptions,
    output: Option<PathBuf>,
}

impl EncodeApi {
    /// Hide this text, a file set with `with_file` takes precedence
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// Hide the content of this file
    pub fn with_file<A: AsRef<Path>>(mut self, data_file: A) -> Self {
        self.file = Some(data_file.as_ref().to_path_buf());
        self
    }

    pub fn use_file(mut self, data_file: Option<PathBuf>) -> Self {
        self.file = data_file;
        self
    }

    /// Writes a fresh image of this width
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Embeds into this image instead of writing a fresh one
    pub fn with_carrier_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.carrier = Some(image.as_ref().to_path_buf());
        self
    }

    /// Adds a region to embed into, regions are filled in the order they were added
    pub fn with_region(mut self, region: Region) -> Self {
        self.regions.push(region);
        self
    }

    pub fn with_regions(mut self, regions: Vec<Region>) -> Self {
        self.regions.extend(regions);
        self
    }

    /// Channel policy for embedding, a fresh image always gets all channels overwritten
    pub fn with_policy(mut self, policy: ChannelPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_compression(mut self, compression: CompressionOptions) -> Self {
        self.compression = compression;
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Encodes the payload and saves the resulting PNG
    pub fn execute(self) -> Result<()> {
        let options = self.options()?.with_policy(self.policy);
        let Some(output) = self.output else {
            return Err(BlipError::TargetNotSet);
        };
        let encoder = Encoder::new(options.with_compression(self.compression))?;
        let carrier = match self.carrier {
            Some(carrier) if self.width.is_none() => Some(open_image(&carrier)?),
            _ => None,
        };

        let payload: Box<dyn Read> = match (self.file, self.message) {
            (Some(file), _) => Box::new(BufReader::new(open_payload(&file)?)),
            (None, Some(message)) => Box::new(Cursor::new(message.into_bytes())),
            (None, None) => return Err(BlipError::PayloadNotSet),
        };

        let mut image: RgbaImage = encoder.encode(payload, carrier)?;
        image.save_as(&output)
    }

    /// A width means a fresh image, otherwise the payload gets embedded
    fn options(&self) -> Result<EncoderOptions> {
        if let Some(width) = self.width {
            return Ok(EncoderOptions::overwrite(width));
        }
        if self.carrier.is_none() {
            return Err(BlipError::CarrierNotSet);
        }

        Ok(EncoderOptions::embed(RegionSet::new(self.regions.clone())?))
    }
}

fn open_payload(file: &Path) -> Result<File> {
    File::open(file).map_err(|e| {
        error!("Error opening payload {file:?}: {e}");
        BlipError::ReadError { source: e }
    })
}
