//! MPEG audio frame header decoding.
//!
//! Header layout (32 bits, big-endian):
//!
//! ```text
//! AAAAAAAA AAABBCCD EEEEFFGH IIJJKLMM
//! A: sync (not checked)  B: version       C: layer          D: protection (0 = CRC follows)
//! E: bitrate index       F: sample rate   G: padding        H: private
//! I: channel mode        J: mode ext.     K: copyright      L: original (0 = copy)
//! M: emphasis
//! ```

use core::fmt::{Display, Formatter, Result as FmtResult};
use std::time::Duration;

use crate::mpeg::constants::{
    BITRATE_MPEG1_LAYER1, BITRATE_MPEG1_LAYER2, BITRATE_MPEG1_LAYER3, BITRATE_MPEG2_LAYER1,
    BITRATE_MPEG2_LAYER2_3, LAYER1_SAMPLES_PER_FRAME, LAYER1_SLOT_BYTES, LAYER2_3_FRAME_COEFFICIENT,
    LAYER2_3_SLOT_BYTES, LONG_SAMPLES_PER_FRAME, MPEG_HEADER_LEN, RESERVED_BITRATE_INDEX,
    RESERVED_SAMPLE_RATE_INDEX, SAMPLE_RATE_BASE, SHORT_SAMPLES_PER_FRAME,
};
use crate::mpeg::error::MpegHeaderError;
use crate::mpeg::{ChannelMode, Layer, MpegVersion};

/// Decoded MPEG audio frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MpegFrameHeader {
    /// MPEG version
    pub version: MpegVersion,
    /// Audio layer
    pub layer: Layer,
    /// Whether a 16-bit CRC follows the header
    pub crc_protected: bool,
    /// Raw bitrate index (0-14)
    pub bitrate_index: u8,
    /// Raw sampling rate index (0-2)
    pub sample_rate_index: u8,
    /// Sampling rate in Hz
    pub sample_rate_hz: u32,
    /// Bitrate in kbps (0 only for free-format streams)
    pub bitrate_kbps: u16,
    /// Whether the frame carries one extra padding slot
    pub padding: bool,
    pub private_bit: bool,
    pub channel_mode: ChannelMode,
    /// Joint stereo mode extension, passed through uninterpreted
    pub mode_extension: u8,
    pub copyrighted: bool,
    /// Original media (the header bit is set for copies)
    pub original: bool,
    /// Emphasis code, passed through uninterpreted
    pub emphasis: u8,
    /// Samples per channel in this frame
    pub samples_per_frame: u32,
    /// Total frame size in bytes, header included
    pub frame_size: u32,
}

impl MpegFrameHeader {
    /// Decode a frame header from exactly 4 bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the version, layer, bitrate index or sampling rate index hold
    /// a reserved code, or if the computed frame size cannot even hold the header. The
    /// sync bits are not inspected.
    pub fn from_bytes(bytes: &[u8; MPEG_HEADER_LEN]) -> Result<Self, MpegHeaderError> {
        let word = u32::from_be_bytes(*bytes);

        let version =
            MpegVersion::from_code((word >> 19) as u8).ok_or(MpegHeaderError::ReservedVersion)?;
        let layer = Layer::from_code((word >> 17) as u8).ok_or(MpegHeaderError::ReservedLayer)?;
        let crc_protected = word & 0x0001_0000 == 0;

        let bitrate_index = ((word >> 12) & 0xF) as u8;
        if bitrate_index == RESERVED_BITRATE_INDEX {
            return Err(MpegHeaderError::ReservedBitrateIndex);
        }

        let sample_rate_index = ((word >> 10) & 0b11) as u8;
        if sample_rate_index == RESERVED_SAMPLE_RATE_INDEX {
            return Err(MpegHeaderError::ReservedSampleRateIndex);
        }

        let sample_rate_hz =
            SAMPLE_RATE_BASE[sample_rate_index as usize] >> version.sample_rate_shift();
        let bitrate_kbps = bitrate_table(version, layer)[bitrate_index as usize];
        let padding = word & 0x0000_0200 != 0;
        let samples_per_frame = samples_per_frame(version, layer);

        let frame_size =
            compute_frame_size(layer, u32::from(bitrate_kbps) * 1000, sample_rate_hz, padding);
        if frame_size < MPEG_HEADER_LEN as u32 {
            return Err(MpegHeaderError::frame_size(frame_size));
        }

        Ok(MpegFrameHeader {
            version,
            layer,
            crc_protected,
            bitrate_index,
            sample_rate_index,
            sample_rate_hz,
            bitrate_kbps,
            padding,
            private_bit: word & 0x0000_0100 != 0,
            channel_mode: ChannelMode::from_code((word >> 6) as u8),
            mode_extension: ((word >> 4) & 0b11) as u8,
            copyrighted: word & 0x0000_0008 != 0,
            original: word & 0x0000_0004 == 0,
            emphasis: (word & 0b11) as u8,
            samples_per_frame,
            frame_size,
        })
    }

    /// Number of audio channels (1 for mono, otherwise 2)
    #[inline]
    pub const fn channels(&self) -> u8 {
        self.channel_mode.channels()
    }

    /// Bitrate in bits per second
    #[inline]
    pub const fn bitrate_bps(&self) -> u32 {
        self.bitrate_kbps as u32 * 1000
    }

    /// Size of one slot, the unit frame sizes are counted in
    #[inline]
    pub const fn bytes_per_slot(&self) -> u32 {
        match self.layer {
            Layer::Layer1 => LAYER1_SLOT_BYTES,
            Layer::Layer2 | Layer::Layer3 => LAYER2_3_SLOT_BYTES,
        }
    }

    /// Bytes following the header in this frame
    #[inline]
    pub const fn body_len(&self) -> usize {
        self.frame_size as usize - MPEG_HEADER_LEN
    }

    /// Playback duration of this frame
    pub fn duration(&self) -> Duration {
        let nanos =
            u64::from(self.samples_per_frame) * 1_000_000_000 / u64::from(self.sample_rate_hz);
        Duration::from_nanos(nanos)
    }
}

impl Display for MpegFrameHeader {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{} {}, {} kbps, {} Hz, {}, {} bytes",
            self.version,
            self.layer,
            self.bitrate_kbps,
            self.sample_rate_hz,
            self.channel_mode,
            self.frame_size
        )
    }
}

/// Decode a frame header from exactly 4 bytes.
///
/// See [`MpegFrameHeader::from_bytes`].
#[inline]
pub fn decode_frame_header(
    bytes: &[u8; MPEG_HEADER_LEN],
) -> Result<MpegFrameHeader, MpegHeaderError> {
    MpegFrameHeader::from_bytes(bytes)
}

const fn bitrate_table(version: MpegVersion, layer: Layer) -> &'static [u16; 15] {
    match (version, layer) {
        (MpegVersion::Mpeg1, Layer::Layer1) => &BITRATE_MPEG1_LAYER1,
        (MpegVersion::Mpeg1, Layer::Layer2) => &BITRATE_MPEG1_LAYER2,
        (MpegVersion::Mpeg1, Layer::Layer3) => &BITRATE_MPEG1_LAYER3,
        (MpegVersion::Mpeg2 | MpegVersion::Mpeg25, Layer::Layer1) => &BITRATE_MPEG2_LAYER1,
        (MpegVersion::Mpeg2 | MpegVersion::Mpeg25, Layer::Layer2 | Layer::Layer3) => {
            &BITRATE_MPEG2_LAYER2_3
        }
    }
}

const fn samples_per_frame(version: MpegVersion, layer: Layer) -> u32 {
    match (version, layer) {
        (_, Layer::Layer1) => LAYER1_SAMPLES_PER_FRAME,
        (MpegVersion::Mpeg1, Layer::Layer3) | (_, Layer::Layer2) => LONG_SAMPLES_PER_FRAME,
        (MpegVersion::Mpeg2 | MpegVersion::Mpeg25, Layer::Layer3) => SHORT_SAMPLES_PER_FRAME,
    }
}

/// Frame size in bytes. The slot count is floored before padding is added.
///
/// Layer II and III use 144 under every version, so MPEG2/2.5 Layer III sizes are
/// derived as for 1152-sample frames even though those frames carry 576 samples.
const fn compute_frame_size(
    layer: Layer,
    bitrate_bps: u32,
    sample_rate_hz: u32,
    padding: bool,
) -> u32 {
    let padding = padding as u32;
    match layer {
        Layer::Layer1 => (12 * bitrate_bps / sample_rate_hz + padding) * LAYER1_SLOT_BYTES,
        Layer::Layer2 | Layer::Layer3 => {
            LAYER2_3_FRAME_COEFFICIENT * bitrate_bps / sample_rate_hz + padding
        }
    }
}
