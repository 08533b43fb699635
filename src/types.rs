use core::fmt::{Display, Formatter, Result as FmtResult};

use crate::{id3::Id3v2Header, mpeg::MpegFrameHeader};

/// The structural piece an event describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Id3v2,
    Header,
    FrameBody,
    Id3v1,
}

impl EventKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            EventKind::Id3v2 => "id3v2",
            EventKind::Header => "header",
            EventKind::FrameBody => "frame",
            EventKind::Id3v1 => "id3v1",
        }
    }
}

impl Display for EventKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// An owned record of one demuxer emission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemuxEvent {
    /// Complete ID3v2 tag (header and body)
    Id3v2 { header: Id3v2Header, raw: Vec<u8> },
    /// MPEG frame header
    Header {
        raw: [u8; 4],
        header: MpegFrameHeader,
    },
    /// Body of the preceding frame
    FrameBody(Vec<u8>),
    /// 128-byte ID3v1 block
    Id3v1(Vec<u8>),
}

impl DemuxEvent {
    pub(crate) fn header(raw: &[u8; 4], header: &MpegFrameHeader) -> Self {
        DemuxEvent::Header {
            raw: *raw,
            header: *header,
        }
    }

    pub(crate) fn id3v2(header: &Id3v2Header, raw: &[u8]) -> Self {
        DemuxEvent::Id3v2 {
            header: *header,
            raw: raw.to_vec(),
        }
    }

    pub const fn kind(&self) -> EventKind {
        match self {
            DemuxEvent::Id3v2 { .. } => EventKind::Id3v2,
            DemuxEvent::Header { .. } => EventKind::Header,
            DemuxEvent::FrameBody(_) => EventKind::FrameBody,
            DemuxEvent::Id3v1(_) => EventKind::Id3v1,
        }
    }

    /// The literal input bytes this event covers
    pub fn raw_bytes(&self) -> &[u8] {
        match self {
            DemuxEvent::Id3v2 { raw, .. } => raw,
            DemuxEvent::Header { raw, .. } => raw,
            DemuxEvent::FrameBody(body) => body,
            DemuxEvent::Id3v1(raw) => raw,
        }
    }

    /// The decoded frame header, for `Header` events
    pub const fn frame_header(&self) -> Option<&MpegFrameHeader> {
        match self {
            DemuxEvent::Header { header, .. } => Some(header),
            _ => None,
        }
    }
}

impl Display for DemuxEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DemuxEvent::Id3v2 { header, .. } => write!(f, "id3v2: {}", header),
            DemuxEvent::Header { header, .. } => write!(f, "header: {}", header),
            DemuxEvent::FrameBody(body) => write!(f, "frame: {} bytes", body.len()),
            DemuxEvent::Id3v1(raw) => write!(f, "id3v1: {} bytes", raw.len()),
        }
    }
}

/// Options controlling demuxer buffering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemuxOptions {
    /// Bytes requested per `read` call by the reader front end
    pub read_buffer_size: usize,
    /// Initial capacity of the carry-over buffer. The largest legal MPEG frame is 2881 bytes.
    pub carry_capacity: usize,
}

impl DemuxOptions {
    pub const DEFAULT_READ_BUFFER_SIZE: usize = 8192;
    pub const DEFAULT_CARRY_CAPACITY: usize = 4096;

    pub const fn with_read_buffer_size(mut self, size: usize) -> Self {
        // A zero-sized read buffer would look like EOF to the reader front end
        self.read_buffer_size = if size == 0 { 1 } else { size };
        self
    }

    pub const fn with_carry_capacity(mut self, capacity: usize) -> Self {
        self.carry_capacity = capacity;
        self
    }
}

impl Default for DemuxOptions {
    fn default() -> Self {
        DemuxOptions {
            read_buffer_size: Self::DEFAULT_READ_BUFFER_SIZE,
            carry_capacity: Self::DEFAULT_CARRY_CAPACITY,
        }
    }
}
