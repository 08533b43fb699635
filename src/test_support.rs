//! Stream builders shared by the unit tests.

use crate::{MpegDemuxer, error::IncompleteStream, mpeg::MpegFrameHeader, types::DemuxEvent};

/// Assemble a frame header from raw field codes (sync set, no CRC).
pub(crate) fn header_bytes(
    version: u8,
    layer: u8,
    bitrate_index: u8,
    sample_rate_index: u8,
    padding: bool,
    channel_mode: u8,
) -> [u8; 4] {
    let word: u32 = (0x7FF << 21)
        | (u32::from(version & 0b11) << 19)
        | (u32::from(layer & 0b11) << 17)
        | (1 << 16)
        | (u32::from(bitrate_index & 0xF) << 12)
        | (u32::from(sample_rate_index & 0b11) << 10)
        | (u32::from(padding) << 9)
        | (u32::from(channel_mode & 0b11) << 6);
    word.to_be_bytes()
}

/// An ID3v2.4 tag with a `body_len`-byte body.
pub(crate) fn id3v2_tag(body_len: u32) -> Vec<u8> {
    let mut tag = b"ID3\x04\x00\x00".to_vec();
    tag.extend_from_slice(&[
        ((body_len >> 21) & 0x7F) as u8,
        ((body_len >> 14) & 0x7F) as u8,
        ((body_len >> 7) & 0x7F) as u8,
        (body_len & 0x7F) as u8,
    ]);
    tag.extend((0..body_len).map(|i| (i % 127) as u8));
    tag
}

pub(crate) fn id3v1_block() -> Vec<u8> {
    let mut block = b"TAG".to_vec();
    block.extend_from_slice(b"Song Title");
    block.resize(128, 0);
    block[127] = 17;
    block
}

#[derive(Default)]
pub(crate) struct StreamBuilder {
    data: Vec<u8>,
}

impl StreamBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn id3v2(mut self, body_len: u32) -> Self {
        self.data.extend(id3v2_tag(body_len));
        self
    }

    pub(crate) fn id3v1(mut self) -> Self {
        self.data.extend(id3v1_block());
        self
    }

    /// Append `count` frames with the given header and a patterned body.
    pub(crate) fn frames(mut self, header: [u8; 4], count: usize) -> Self {
        let body_len = MpegFrameHeader::from_bytes(&header)
            .map(|h| h.body_len())
            .unwrap_or_else(|e| panic!("test header does not decode: {}", e));
        for n in 0..count {
            self.data.extend_from_slice(&header);
            self.data
                .extend((0..body_len).map(|i| ((i + n * 31) % 251) as u8));
        }
        self
    }

    pub(crate) fn raw(mut self, bytes: &[u8]) -> Self {
        self.data.extend_from_slice(bytes);
        self
    }

    pub(crate) fn build(self) -> Vec<u8> {
        self.data
    }
}

/// Demux `data` in chunks of `size` bytes; panics on fatal errors.
pub(crate) fn demux_in_chunks(
    data: &[u8],
    size: usize,
) -> (Vec<DemuxEvent>, Option<IncompleteStream>) {
    let mut demuxer = MpegDemuxer::new(Vec::new());
    for chunk in data.chunks(size.max(1)) {
        demuxer
            .supply(chunk)
            .unwrap_or_else(|e| panic!("demux failed: {}", e));
    }
    let incomplete = demuxer.finish();
    (demuxer.into_consumer(), incomplete)
}
