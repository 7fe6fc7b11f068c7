use clap::Args;

use blip_core::{ChannelBehavior, ChannelPolicy};

pub mod decode;
pub mod encode;

/// What happens to each color channel, shared by encode and decode
#[derive(Args, Debug)]
pub struct PolicyArgs {
    /// Red channel: preserve, overwrite or xor
    #[arg(long, value_name = "behavior", default_value = "overwrite")]
    pub red: ChannelBehavior,

    /// Green channel: preserve, overwrite or xor
    #[arg(long, value_name = "behavior", default_value = "overwrite")]
    pub green: ChannelBehavior,

    /// Blue channel: preserve, overwrite or xor
    #[arg(long, value_name = "behavior", default_value = "overwrite")]
    pub blue: ChannelBehavior,
}

impl PolicyArgs {
    pub fn policy(&self) -> ChannelPolicy {
        ChannelPolicy::new(self.red, self.green, self.blue)
    }
}
