use std::path::PathBuf;

use blip_core::Region;
use clap::Args;

use super::PolicyArgs;
use crate::CliResult;

/// Reads hidden data back out of a PNG image
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Source image that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub input_image: PathBuf,

    /// Data will be stored as binary file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,

    /// Only read these inclusive pixel bounds, by default the whole image is read
    #[arg(short, long, value_name = "x1,x2,y1,y2")]
    pub region: Option<Region>,

    #[command(flatten)]
    pub policy: PolicyArgs,
}

impl DecodeArgs {
    pub fn run(self) -> CliResult<()> {
        blip_core::api::decode::prepare()
            .from_secret_image(self.input_image)
            .use_region(self.region)
            .with_policy(self.policy.policy())
            .into_file(self.output_file)
            .execute()
    }
}
