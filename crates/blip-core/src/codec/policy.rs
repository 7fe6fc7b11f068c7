use std::str::FromStr;

use crate::error::BlipError;
use crate::result::Result;

/// A color channel of a pixel, in the fixed order they are processed
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// What happens to a single color channel of a pixel that carries data
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum ChannelBehavior {
    /// keep the original value, the first preserved channel is the XOR source
    Preserve,
    /// the value is replaced by the next payload byte
    #[default]
    Overwrite,
    /// the original value XOR the value of the XOR source channel
    DeriveByXor,
}

impl FromStr for ChannelBehavior {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "preserve" | "keep" => Ok(ChannelBehavior::Preserve),
            "overwrite" | "write" => Ok(ChannelBehavior::Overwrite),
            "xor" | "derive" | "derive-by-xor" => Ok(ChannelBehavior::DeriveByXor),
            other => Err(format!(
                "unknown channel behavior `{other}`, expected one of: preserve, overwrite, xor"
            )),
        }
    }
}

/// Number of payload bytes a single pixel carries
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub enum Profile {
    /// one channel per pixel carries data
    Nibble = 1,
    /// two channels per pixel carry data
    Bite = 2,
    /// the whole pixel is data
    Gorge = 3,
}

impl Profile {
    pub fn bytes_per_pixel(self) -> usize {
        self as usize
    }

    /// hex digits that make up one pixel worth of data
    pub fn hex_group_size(self) -> usize {
        self.bytes_per_pixel() * 2
    }

    fn from_overwrite_count(count: u8) -> Option<Self> {
        match count {
            1 => Some(Profile::Nibble),
            2 => Some(Profile::Bite),
            3 => Some(Profile::Gorge),
            _ => None,
        }
    }
}

/// Per channel behavior as declared by the user, see [`ChannelPolicy::resolve`]
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct ChannelPolicy {
    pub red: ChannelBehavior,
    pub green: ChannelBehavior,
    pub blue: ChannelBehavior,
}

impl ChannelPolicy {
    pub fn new(red: ChannelBehavior, green: ChannelBehavior, blue: ChannelBehavior) -> Self {
        Self { red, green, blue }
    }

    pub fn with_channel(mut self, channel: Channel, behavior: ChannelBehavior) -> Self {
        match channel {
            Channel::Red => self.red = behavior,
            Channel::Green => self.green = behavior,
            Channel::Blue => self.blue = behavior,
        }
        self
    }

    pub fn behavior(&self, channel: Channel) -> ChannelBehavior {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Works out the profile and the XOR source channel.
    ///
    /// Channels are visited in the order R, G, B. A channel that derives its
    /// value by XOR can be satisfied by a preserved channel that comes later,
    /// so a missing XOR source is only reported once all channels are seen.
    pub fn resolve(&self) -> Result<ResolvedPolicy> {
        let mut overwrites = 0u8;
        let mut xor_source = None;
        let mut xor_wanted = false;

        for channel in Channel::ALL {
            match self.behavior(channel) {
                ChannelBehavior::Overwrite => overwrites += 1,
                ChannelBehavior::Preserve => {
                    if xor_source.is_none() {
                        xor_source = Some(channel);
                    }
                }
                ChannelBehavior::DeriveByXor => xor_wanted = true,
            }
        }

        if xor_wanted && xor_source.is_none() {
            return Err(BlipError::NoXorSource);
        }
        let profile = Profile::from_overwrite_count(overwrites).ok_or(BlipError::NoDataChannel)?;

        Ok(ResolvedPolicy {
            policy: *self,
            profile,
            xor_source,
        })
    }
}

/// A validated [`ChannelPolicy`], immutable for the lifetime of an encode or decode
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ResolvedPolicy {
    policy: ChannelPolicy,
    profile: Profile,
    xor_source: Option<Channel>,
}

impl ResolvedPolicy {
    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn xor_source(&self) -> Option<Channel> {
        self.xor_source
    }

    pub fn behavior(&self, channel: Channel) -> ChannelBehavior {
        self.policy.behavior(channel)
    }

    /// channels that receive payload bytes, in R, G, B order
    pub fn data_channels(&self) -> impl Iterator<Item = Channel> + '_ {
        Channel::ALL
            .into_iter()
            .filter(|c| self.behavior(*c) == ChannelBehavior::Overwrite)
    }

    /// true if the original pixel has to be known before it gets written
    pub fn needs_original_pixel(&self) -> bool {
        self.profile != Profile::Gorge
    }
}

impl Default for ResolvedPolicy {
    fn default() -> Self {
        Self {
            policy: ChannelPolicy::default(),
            profile: Profile::Gorge,
            xor_source: None,
        }
    }
}
