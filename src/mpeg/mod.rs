//! MPEG audio frame headers.
//!
//! Every MPEG audio frame starts with a 4-byte header describing the stream version,
//! layer, bitrate, sampling rate and channel layout. The header alone is enough to
//! compute the total size of the frame, which is what a demuxer needs to split a
//! bitstream into frames without decoding any audio.
//!
//! # Example
//!
//! ```
//! use mpeg_audio_io::mpeg::{Layer, MpegFrameHeader, MpegVersion};
//!
//! let header = MpegFrameHeader::from_bytes(&[0xFF, 0xFB, 0x90, 0x00])?;
//! assert_eq!(header.version, MpegVersion::Mpeg1);
//! assert_eq!(header.layer, Layer::Layer3);
//! assert_eq!(header.frame_size, 417);
//! # Ok::<(), mpeg_audio_io::mpeg::MpegHeaderError>(())
//! ```

pub mod constants;
pub mod error;
pub mod header;

pub use error::MpegHeaderError;
pub use header::{MpegFrameHeader, decode_frame_header};

use core::fmt::{Display, Formatter, Result as FmtResult};

use crate::mpeg::constants::{RESERVED_LAYER_CODE, RESERVED_VERSION_CODE};

/// MPEG audio version (header bits 20-19)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MpegVersion {
    /// MPEG-1 (ISO/IEC 11172-3)
    Mpeg1,
    /// MPEG-2 lower sampling frequencies (ISO/IEC 13818-3)
    Mpeg2,
    /// Unofficial MPEG-2.5 extension for very low sampling rates
    Mpeg25,
}

impl MpegVersion {
    /// Parse the 2-bit version code; the reserved code yields `None`
    pub const fn from_code(code: u8) -> Option<Self> {
        match code & 0b11 {
            0b00 => Some(MpegVersion::Mpeg25),
            RESERVED_VERSION_CODE => None,
            0b10 => Some(MpegVersion::Mpeg2),
            _ => Some(MpegVersion::Mpeg1),
        }
    }

    /// The 2-bit version code as stored in the header
    pub const fn code(self) -> u8 {
        match self {
            MpegVersion::Mpeg25 => 0b00,
            MpegVersion::Mpeg2 => 0b10,
            MpegVersion::Mpeg1 => 0b11,
        }
    }

    /// Right shift applied to the MPEG1 sampling rate table
    pub const fn sample_rate_shift(self) -> u32 {
        match self {
            MpegVersion::Mpeg1 => 0,
            MpegVersion::Mpeg2 => 1,
            MpegVersion::Mpeg25 => 2,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            MpegVersion::Mpeg1 => "MPEG1",
            MpegVersion::Mpeg2 => "MPEG2",
            MpegVersion::Mpeg25 => "MPEG2.5",
        }
    }
}

impl Display for MpegVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// MPEG audio layer (header bits 18-17)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Layer1,
    Layer2,
    Layer3,
}

impl Layer {
    /// Parse the 2-bit layer code; the reserved code yields `None`
    pub const fn from_code(code: u8) -> Option<Self> {
        match code & 0b11 {
            RESERVED_LAYER_CODE => None,
            0b01 => Some(Layer::Layer3),
            0b10 => Some(Layer::Layer2),
            _ => Some(Layer::Layer1),
        }
    }

    /// The 2-bit layer code as stored in the header (note the inverted numbering)
    pub const fn code(self) -> u8 {
        match self {
            Layer::Layer3 => 0b01,
            Layer::Layer2 => 0b10,
            Layer::Layer1 => 0b11,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Layer::Layer1 => "Layer1",
            Layer::Layer2 => "Layer2",
            Layer::Layer3 => "Layer3",
        }
    }
}

impl Display for Layer {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Channel mode (header bits 7-6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelMode {
    Stereo,
    JointStereo,
    /// Two independent mono channels
    DualChannel,
    Mono,
}

impl ChannelMode {
    /// Parse the 2-bit channel mode code (all four codes are legal)
    pub const fn from_code(code: u8) -> Self {
        match code & 0b11 {
            0b00 => ChannelMode::Stereo,
            0b01 => ChannelMode::JointStereo,
            0b10 => ChannelMode::DualChannel,
            _ => ChannelMode::Mono,
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            ChannelMode::Stereo => 0b00,
            ChannelMode::JointStereo => 0b01,
            ChannelMode::DualChannel => 0b10,
            ChannelMode::Mono => 0b11,
        }
    }

    /// Number of audio channels carried in this mode
    pub const fn channels(self) -> u8 {
        match self {
            ChannelMode::Mono => 1,
            ChannelMode::Stereo | ChannelMode::JointStereo | ChannelMode::DualChannel => 2,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ChannelMode::Stereo => "Stereo",
            ChannelMode::JointStereo => "J-Stereo",
            ChannelMode::DualChannel => "Dual",
            ChannelMode::Mono => "Mono",
        }
    }
}

impl Display for ChannelMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_codes() {
        assert_eq!(MpegVersion::from_code(0b11), Some(MpegVersion::Mpeg1));
        assert_eq!(MpegVersion::from_code(0b10), Some(MpegVersion::Mpeg2));
        assert_eq!(MpegVersion::from_code(0b00), Some(MpegVersion::Mpeg25));
        assert_eq!(MpegVersion::from_code(0b01), None);

        for version in [MpegVersion::Mpeg1, MpegVersion::Mpeg2, MpegVersion::Mpeg25] {
            assert_eq!(MpegVersion::from_code(version.code()), Some(version));
        }
    }

    #[test]
    fn test_layer_codes() {
        assert_eq!(Layer::from_code(0b00), None);
        assert_eq!(Layer::from_code(0b01), Some(Layer::Layer3));
        assert_eq!(Layer::from_code(0b10), Some(Layer::Layer2));
        assert_eq!(Layer::from_code(0b11), Some(Layer::Layer1));
    }

    #[test]
    fn test_channel_mode() {
        assert_eq!(ChannelMode::from_code(3), ChannelMode::Mono);
        assert_eq!(ChannelMode::Mono.channels(), 1);
        assert_eq!(ChannelMode::DualChannel.channels(), 2);
        assert_eq!(ChannelMode::JointStereo.to_string(), "J-Stereo");
    }

    #[test]
    fn test_names() {
        assert_eq!(MpegVersion::Mpeg25.to_string(), "MPEG2.5");
        assert_eq!(Layer::Layer2.to_string(), "Layer2");
    }
}
