use std::path::PathBuf;

use blip_core::{CompressionOptions, Region};
use clap::Args;

use super::PolicyArgs;
use crate::CliResult;

/// Hides a file or a message in a fresh PNG image or in regions of an existing one
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// File to hide in the image
    #[arg(
        short = 'i',
        long = "in",
        value_name = "data file",
        required_unless_present = "message",
        conflicts_with = "message"
    )]
    pub data_file: Option<PathBuf>,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message")]
    pub message: Option<String>,

    /// Final image will be stored as file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// Width of a fresh image, its height grows with the payload
    #[arg(
        short,
        long,
        value_name = "pixels",
        required_unless_present = "carrier",
        conflicts_with = "carrier"
    )]
    pub width: Option<u32>,

    /// PNG image to embed the data into, used readonly
    #[arg(short, long, value_name = "carrier image", requires = "regions")]
    pub carrier: Option<PathBuf>,

    /// Inclusive pixel bounds to embed into, filled in the given order
    #[arg(short, long = "region", value_name = "x1,x2,y1,y2", requires = "carrier")]
    pub regions: Vec<Region>,

    #[command(flatten)]
    pub policy: PolicyArgs,

    /// gzip compression level
    #[arg(long, value_name = "0-9", value_parser = clap::value_parser!(u32).range(0..=9))]
    pub level: Option<u32>,
}

impl EncodeArgs {
    pub fn run(self) -> CliResult<()> {
        let mut compression = CompressionOptions::default();
        if let Some(level) = self.level {
            compression = compression.with_level(level);
        }

        let mut api = blip_core::api::encode::prepare()
            .use_file(self.data_file)
            .use_message(self.message)
            .with_regions(self.regions)
            .with_policy(self.policy.policy())
            .with_compression(compression)
            .with_output(self.write_to_file);

        if let Some(width) = self.width {
            api = api.with_width(width);
        }
        if let Some(carrier) = self.carrier {
            api = api.with_carrier_image(carrier);
        }

        api.execute()
    }
}
