//! Streaming demuxing of MPEG audio bitstreams.
//!
//! - `streaming`: the push-driven [`MpegDemuxer`] state machine
//! - `reader`: [`MpegEventReader`], a pull-based iterator over any `Read` source

pub mod reader;
pub mod streaming;

pub use reader::MpegEventReader;
pub use streaming::MpegDemuxer;

use core::fmt::{Display, Formatter, Result as FmtResult};

/// What the demuxer is currently waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PendingKind {
    /// A 4-byte frame header (or the start of a tag)
    AwaitingHeader,
    /// Minor version, flags and syncsafe size of an ID3v2 tag
    AwaitingId3v2Rest,
    /// The declared body of an ID3v2 tag
    AwaitingId3v2Body,
    /// The 124 bytes completing an ID3v1 block
    AwaitingId3v1Rest,
    /// The body of the frame whose header was last emitted
    AwaitingFrameBody,
}

impl PendingKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            PendingKind::AwaitingHeader => "awaiting a frame header",
            PendingKind::AwaitingId3v2Rest => "awaiting the rest of an ID3v2 header",
            PendingKind::AwaitingId3v2Body => "awaiting an ID3v2 tag body",
            PendingKind::AwaitingId3v1Rest => "awaiting the rest of an ID3v1 block",
            PendingKind::AwaitingFrameBody => "awaiting a frame body",
        }
    }
}

impl Display for PendingKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
