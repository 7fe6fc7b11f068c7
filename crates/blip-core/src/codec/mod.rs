//! The pixel codec: gzip compression, hex serialization and the channel policy
//! that decides which color channels carry payload.

pub mod capacity;
pub mod compressor;
pub mod decoder;
pub mod encoder;
pub mod hex;
pub mod policy;
pub mod reader;
pub mod region;
pub mod writer;

pub use capacity::{CanvasPlan, MAX_DIMENSION};
pub use compressor::{CompressionOptions, Compressor};
pub use decoder::Decoder;
pub use encoder::{EncodeMode, Encoder, EncoderOptions};
pub use policy::{Channel, ChannelBehavior, ChannelPolicy, Profile, ResolvedPolicy};
pub use reader::PixelReader;
pub use region::{Region, RegionSet};
pub use writer::{PixelWriter, WriteSummary};
