//! Byte pair serialization: every byte becomes two lowercase hex digits.
//!
//! The writer consumes the text in chunks of one pixel each, the reader
//! produces it for a whole region. Unused capacity at the end of a region is
//! filled with `ff`, which is what [`trim_pad`] strips again.

use std::io::Read;

use crate::codec::policy::Profile;
use crate::error::BlipError;
use crate::result::Result;

/// fills up an incomplete trailing group, never part of valid hex output
pub const SENTINEL: char = ' ';

/// the digit a decoder sees for every unused channel
pub const PAD_MARKER: char = 'f';

const DIGITS: &[u8; 16] = b"0123456789abcdef";

pub fn push_hex(out: &mut String, byte: u8) {
    out.push(DIGITS[(byte >> 4) as usize] as char);
    out.push(DIGITS[(byte & 0x0f) as usize] as char);
}

pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        push_hex(&mut out, *b);
    }
    out
}

/// Appends [`SENTINEL`]s until `text` ends on a pixel boundary of `profile`
pub fn pad(mut text: String, profile: Profile) -> String {
    let group = profile.hex_group_size();
    let rest = text.len() % group;
    if rest != 0 {
        text.extend(std::iter::repeat(SENTINEL).take(group - rest));
    }
    text
}

/// Cuts the trailing run of [`PAD_MARKER`]s, rounded down to whole pixels of `profile`.
///
/// Payload that legitimately ends on whole groups of `ff` bytes is cut as well,
/// there is no stored length to tell them apart.
pub fn trim_pad(text: &str, profile: Profile) -> &str {
    let group = profile.hex_group_size();
    let run = text
        .bytes()
        .rev()
        .take_while(|c| *c == PAD_MARKER as u8)
        .count();

    &text[..text.len() - run / group * group]
}

pub fn from_hex(text: &str) -> Result<Vec<u8>> {
    if text.len() % 2 != 0 {
        return Err(BlipError::OddHexLength(text.len()));
    }

    let mut bytes = Vec::with_capacity(text.len() / 2);
    for position in (0..text.len()).step_by(2) {
        bytes.push(parse_digits(text.as_bytes(), position)?);
    }
    Ok(bytes)
}

/// Parses the two hex digits at `position`, a pair of [`SENTINEL`]s reads as `0xff`
pub fn parse_pair(text: &str, position: usize) -> Result<u8> {
    let pair = text
        .as_bytes()
        .get(position..position + 2)
        .ok_or(BlipError::OddHexLength(text.len()))?;

    if pair == &[SENTINEL as u8; 2][..] {
        return Ok(0xff);
    }
    parse_digits(pair, 0).map_err(|e| match e {
        BlipError::InvalidHexDigit { digit, position: p } => BlipError::InvalidHexDigit {
            digit,
            position: position + p,
        },
        other => other,
    })
}

fn parse_digits(text: &[u8], position: usize) -> Result<u8> {
    let hi = digit(text[position], position)?;
    let lo = digit(text[position + 1], position + 1)?;
    Ok(hi << 4 | lo)
}

fn digit(c: u8, position: usize) -> Result<u8> {
    (c as char)
        .to_digit(16)
        .map(|d| d as u8)
        .ok_or(BlipError::InvalidHexDigit {
            digit: c as char,
            position,
        })
}

/// The chunk written into every pixel once the payload is exhausted
pub fn sentinel_chunk(profile: Profile) -> String {
    "ff".repeat(profile.bytes_per_pixel())
}

/// Lazily turns a byte source into one padded hex chunk per pixel
pub struct HexChunks<R: Read> {
    source: R,
    profile: Profile,
    buf: Vec<u8>,
}

impl<R: Read> HexChunks<R> {
    pub fn new(source: R, profile: Profile) -> Self {
        Self {
            source,
            profile,
            buf: Vec::with_capacity(profile.bytes_per_pixel()),
        }
    }
}

impl<R: Read> Iterator for HexChunks<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        let n = self.profile.bytes_per_pixel() as u64;
        match (&mut self.source).take(n).read_to_end(&mut self.buf) {
            Ok(0) => None,
            Ok(_) => Some(Ok(pad(to_hex(&self.buf), self.profile))),
            Err(source) => Some(Err(BlipError::ReadError { source })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_write_two_lowercase_digits_per_byte() {
        assert_eq!(to_hex(&[0x00, 0x0a, 0xff, 0x1f]), "000aff1f");
        assert_eq!(to_hex(&[]), "");
    }

    #[test]
    fn should_read_back_what_was_written() {
        let bytes = (0..=255u8).collect::<Vec<_>>();
        assert_eq!(from_hex(&to_hex(&bytes)).unwrap(), bytes);
        assert_eq!(from_hex("0AfF").unwrap(), vec![0x0a, 0xff]);
    }

    #[test]
    fn should_pad_to_whole_groups() {
        assert_eq!(pad("1f8b08".to_string(), Profile::Gorge), "1f8b08");
        assert_eq!(pad("1f8b".to_string(), Profile::Gorge), "1f8b  ");
        assert_eq!(pad("1f".to_string(), Profile::Bite), "1f  ");
        assert_eq!(pad(String::new(), Profile::Gorge), "");
    }

    #[test]
    fn should_trim_only_whole_groups_of_markers() {
        assert_eq!(trim_pad("1f8b08ffffff", Profile::Gorge), "1f8b08");
        assert_eq!(trim_pad("1f8b0fffffffffff", Profile::Gorge), "1f8b0fffff");
        assert_eq!(trim_pad("1f8b08ff", Profile::Gorge), "1f8b08ff");
        assert_eq!(trim_pad("00ffff", Profile::Nibble), "00");
        assert_eq!(trim_pad("", Profile::Gorge), "");
    }

    #[test]
    fn should_trim_and_pad_by_pixel_width_of_the_profile() {
        assert_eq!(trim_pad("00ffffff", Profile::Nibble), "00");
        assert_eq!(trim_pad("00ffffff", Profile::Bite), "00ff");
        assert_eq!(trim_pad("00ffffff", Profile::Gorge), "00");
        assert_eq!(trim_pad("00ffff", Profile::Gorge), "00ffff");
        assert_eq!(pad("ab".to_string(), Profile::Nibble), "ab");
        assert_eq!(pad("ab".to_string(), Profile::Gorge), "ab    ");
    }

    #[test]
    fn should_render_padding_as_markers_that_trim_away() {
        let bytes = [0x1f, 0x8b, 0x08, 0x00];
        let profile = Profile::Gorge;
        let padded = pad(to_hex(&bytes), profile);

        // what a writer puts into the pixels for the padded text
        let rendered = to_hex(
            &(0..padded.len())
                .step_by(2)
                .map(|p| parse_pair(&padded, p).unwrap())
                .collect::<Vec<_>>(),
        );
        assert_eq!(rendered, "1f8b0800ffff");
        assert_eq!(trim_pad(&(rendered + "ffffff"), profile), "1f8b0800ffff");

        let trimmed = trim_pad("1f8b08ffffffffffff", profile);
        assert_eq!(trimmed, "1f8b08");
        assert_eq!(trimmed, to_hex(&bytes[..3]));
    }

    #[test]
    fn should_parse_a_sentinel_pair_as_ff() {
        assert_eq!(parse_pair("ab  ", 2).unwrap(), 0xff);
        assert_eq!(parse_pair("ab  ", 0).unwrap(), 0xab);
    }

    #[test]
    fn should_reject_malformed_hex() {
        assert!(matches!(from_hex("abc"), Err(BlipError::OddHexLength(3))));
        assert!(matches!(
            from_hex("0g"),
            Err(BlipError::InvalidHexDigit {
                digit: 'g',
                position: 1
            })
        ));
        assert!(matches!(
            from_hex("0 "),
            Err(BlipError::InvalidHexDigit { digit: ' ', .. })
        ));
        assert!(matches!(
            from_hex("00  "),
            Err(BlipError::InvalidHexDigit {
                digit: ' ',
                position: 2
            })
        ));
        assert!(matches!(
            parse_pair("00zz", 2),
            Err(BlipError::InvalidHexDigit {
                digit: 'z',
                position: 2
            })
        ));
    }

    #[test]
    fn should_chunk_a_stream_pixel_by_pixel() {
        let data: &[u8] = &[0x1f, 0x8b, 0x08, 0x00, 0x01];
        let chunks = HexChunks::new(data, Profile::Gorge)
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(chunks, vec!["1f8b08".to_string(), "0001  ".to_string()]);

        let chunks = HexChunks::new(data, Profile::Bite)
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(chunks, vec!["1f8b", "0800", "01  "]);
    }

    #[test]
    fn should_not_chunk_an_empty_stream() {
        let data: &[u8] = &[];
        assert!(HexChunks::new(data, Profile::Nibble).next().is_none());
    }

    #[test]
    fn should_build_sentinel_chunks_per_profile() {
        assert_eq!(sentinel_chunk(Profile::Nibble), "ff");
        assert_eq!(sentinel_chunk(Profile::Gorge), "ffffff");
    }
}
