//! # Blip Core API
//!
//! Hides arbitrary bytes in the color channels of an image. The payload is
//! gzip compressed, turned into hex text and written pixel by pixel, either
//! into a fresh canvas or into regions of an existing image.
//!
//! The two main structures are
//! - [`Encoder`][enc] for writing a payload into pixels
//! - [`Decoder`][dec] for reading it back
//!
//! A [`ChannelPolicy`][pol] decides which color channels carry payload, which
//! keep their value and which are derived by XOR.
//!
//! # Usage Examples
//!
//! ## Write a message into a fresh image
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//!
//! blip_core::api::encode::prepare()
//!     .with_message("Hello, World!")  // will be compressed and written into the image
//!     .with_width(32)                 // the image grows in height as needed
//!     .with_output(temp_dir.path().join("image-with-a-message.png"))
//!     .execute()
//!     .expect("Failed to encode message");
//! ```
//!
//! ## Read it back
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let image = temp_dir.path().join("image-with-a-message.png");
//! # blip_core::api::encode::prepare()
//! #     .with_message("Hello, World!")
//! #     .with_width(32)
//! #     .with_output(&image)
//! #     .execute()
//! #     .expect("Failed to encode message");
//!
//! let payload = blip_core::api::decode::prepare()
//!     .from_secret_image(&image)
//!     .execute_to_vec()
//!     .expect("Failed to decode message");
//!
//! assert_eq!(payload, b"Hello, World!");
//! ```
//!
//! ## Embed into pixels in memory
//!
//! ```rust
//! use blip_core::codec::{Decoder, Encoder, EncoderOptions, Region};
//! use image::{Rgba, RgbaImage};
//!
//! let carrier = RgbaImage::from_pixel(64, 64, Rgba([200, 100, 50, 255]));
//! let region = Region::new(8, 55, 8, 55).expect("Invalid region");
//!
//! let encoder = Encoder::new(EncoderOptions::embed(region.into())).expect("Invalid options");
//! let image = encoder
//!     .encode(&b"secret"[..], Some(carrier))
//!     .expect("Failed to embed");
//!
//! let payload = Decoder::new().decode(&image, Some(region)).expect("Failed to decode");
//! assert_eq!(payload, b"secret");
//! ```
//!
//! [enc]: ./codec/encoder/struct.Encoder.html
//! [dec]: ./codec/decoder/struct.Decoder.html
//! [pol]: ./codec/policy/struct.ChannelPolicy.html

#![warn(clippy::redundant_else)]

pub mod api;
pub mod codec;
pub mod error;
pub mod media;
pub mod result;

pub use crate::codec::{
    ChannelBehavior, ChannelPolicy, CompressionOptions, Decoder, EncodeMode, Encoder,
    EncoderOptions, Region, RegionSet,
};
pub use crate::error::{BlipError, ErrorKind};
pub use crate::media::Persist;
pub use crate::result::Result;
