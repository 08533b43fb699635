//! MPEG frame header error types.

use thiserror::Error;

/// Errors produced while decoding a 4-byte MPEG audio frame header.
///
/// Every variant is fatal to a demuxer: without a valid header there is no way to know
/// how many bytes the frame occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MpegHeaderError {
    // ========================================================================
    // Malformed header fields
    // ========================================================================
    #[error("Reserved MPEG version code")]
    ReservedVersion,

    #[error("Reserved layer code")]
    ReservedLayer,

    #[error("Reserved bitrate index 15 (free format and reserved rates are unsupported)")]
    ReservedBitrateIndex,

    #[error("Reserved sampling rate index 3")]
    ReservedSampleRateIndex,

    // ========================================================================
    // Frame size errors
    // ========================================================================
    #[error("Computed frame size is zero")]
    ZeroFrameSize,

    #[error("Computed frame size {frame_size} is shorter than the 4-byte header")]
    FrameShorterThanHeader { frame_size: u32 },
}

impl MpegHeaderError {
    /// Classify a computed frame size that cannot hold a header
    pub const fn frame_size(frame_size: u32) -> Self {
        if frame_size == 0 {
            MpegHeaderError::ZeroFrameSize
        } else {
            MpegHeaderError::FrameShorterThanHeader { frame_size }
        }
    }

    /// True when the header fields were legal but the computed size was unusable
    pub const fn is_zero_frame_size(&self) -> bool {
        matches!(
            self,
            MpegHeaderError::ZeroFrameSize | MpegHeaderError::FrameShorterThanHeader { .. }
        )
    }
}
