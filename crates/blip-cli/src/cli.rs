use clap::{Parser, Subcommand};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Encode(encode::EncodeArgs),
    Decode(decode::DecodeArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use blip_core::{ChannelBehavior, Region};
    use clap::CommandFactory;
    use std::path::PathBuf;

    #[test]
    fn should_have_a_consistent_command_line() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn should_parse_an_embed_with_several_regions() {
        let args = CliArgs::try_parse_from([
            "blip",
            "encode",
            "-m",
            "Hello",
            "--carrier",
            "carrier.png",
            "--region",
            "0,9,0,9",
            "--region",
            "20,29,0,9",
            "--green",
            "preserve",
            "--blue",
            "xor",
            "-o",
            "secret.png",
        ])
        .expect("Cannot parse arguments");

        let Commands::Encode(encode) = args.command else {
            panic!("encode command expected");
        };
        assert_eq!(encode.carrier, Some(PathBuf::from("carrier.png")));
        assert_eq!(
            encode.regions,
            vec![
                Region::new(0, 9, 0, 9).unwrap(),
                Region::new(20, 29, 0, 9).unwrap()
            ]
        );
        assert_eq!(encode.policy.red, ChannelBehavior::Overwrite);
        assert_eq!(encode.policy.green, ChannelBehavior::Preserve);
        assert_eq!(encode.policy.blue, ChannelBehavior::DeriveByXor);
    }

    #[test]
    fn should_refuse_a_width_together_with_a_carrier() {
        let result = CliArgs::try_parse_from([
            "blip",
            "encode",
            "-m",
            "Hello",
            "--width",
            "10",
            "--carrier",
            "carrier.png",
            "--region",
            "0,9,0,9",
            "-o",
            "secret.png",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn should_refuse_regions_with_mixed_up_bounds() {
        let result = CliArgs::try_parse_from([
            "blip", "decode", "-i", "secret.png", "-o", "out.bin", "--region", "9,0,0,9",
        ]);

        assert!(result.is_err());
    }
}
