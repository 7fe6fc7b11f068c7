//! File level entry points, they open, encode or decode and save in one go.

pub mod decode;
pub mod encode;
