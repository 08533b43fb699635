use core::fmt::{Display, Formatter, Result as FmtResult};
use std::io;
use thiserror::Error;

use crate::demux::PendingKind;
use crate::mpeg::error::MpegHeaderError;

/// Result type for mpeg_audio_io operations
#[allow(clippy::result_large_err)]
pub type DemuxResult<T> = Result<T, DemuxError>;

/// Errors raised while demuxing an MPEG audio stream
#[derive(Debug, Error)]
pub enum DemuxError {
    /// Read errors from the byte source driving the demuxer
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A frame header could not be decoded; the stream cannot be resynchronised
    #[error("Invalid MPEG frame header at {position}: {source}")]
    InvalidFrameHeader {
        #[source]
        source: MpegHeaderError,
        position: ErrorPosition,
    },

    #[error("Demuxer halted after a fatal error; no further input is accepted")]
    Halted,

    #[error("Demuxer already finished; no further input is accepted")]
    Finished,
}

impl DemuxError {
    /// Create an InvalidFrameHeader error for frame `frame_index` starting at `offset`
    pub const fn invalid_frame_header(
        source: MpegHeaderError,
        offset: u64,
        frame_index: u64,
    ) -> Self {
        DemuxError::InvalidFrameHeader {
            source,
            position: ErrorPosition::new(offset, frame_index),
        }
    }

    /// The underlying header error, if this error came from header decoding
    pub const fn header_error(&self) -> Option<&MpegHeaderError> {
        match self {
            DemuxError::InvalidFrameHeader { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Where in the stream a bad frame header was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ErrorPosition {
    /// Byte offset of the header's first byte
    pub offset: u64,
    /// Zero-based index of the frame the header would have opened, which is also the
    /// number of frames decoded before it
    pub frame_index: u64,
}

impl ErrorPosition {
    pub const fn new(offset: u64, frame_index: u64) -> Self {
        ErrorPosition {
            offset,
            frame_index,
        }
    }
}

impl Display for ErrorPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "byte offset {} (frame #{})", self.offset, self.frame_index)
    }
}

/// Warning returned by `finish` when the stream ended part-way through a record.
///
/// The buffered bytes are dropped; nothing is emitted for the dangling record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Incomplete stream: ended while {pending} at byte offset {record_offset} \
     ({buffered} bytes buffered, {missing} more required)"
)]
pub struct IncompleteStream {
    /// What the demuxer was waiting for
    pub pending: PendingKind,
    /// Stream offset where the dangling record began
    pub record_offset: u64,
    /// Bytes of the dangling record that had been received
    pub buffered: usize,
    /// Bytes still needed to complete the pending read
    pub missing: usize,
}
