#![allow(dead_code)]

use mpeg_audio_io::{DemuxEvent, MpegDemuxer, MpegFrameHeader};

/// Headers covering every version/layer pairing, padded and unpadded.
pub const HEADERS: &[[u8; 4]] = &[
    [0xFF, 0xFB, 0x90, 0x64], // MPEG1 Layer III 128k 44.1k
    [0xFF, 0xFB, 0x92, 0x64], // same, padded
    [0xFF, 0xFD, 0xA4, 0x00], // MPEG1 Layer II 192k 48k
    [0xFF, 0xFF, 0x12, 0xC0], // MPEG1 Layer I 32k 44.1k padded, mono
    [0xFF, 0xF3, 0x80, 0xC4], // MPEG2 Layer III 64k 22.05k, 417 bytes
    [0xFF, 0xE3, 0x18, 0x40], // MPEG2.5 Layer III 8k 8k, 144 bytes
];

pub fn id3v2_tag(body_len: u32) -> Vec<u8> {
    let mut tag = b"ID3\x03\x00\x00".to_vec();
    tag.extend_from_slice(&[
        ((body_len >> 21) & 0x7F) as u8,
        ((body_len >> 14) & 0x7F) as u8,
        ((body_len >> 7) & 0x7F) as u8,
        (body_len & 0x7F) as u8,
    ]);
    tag.extend((0..body_len).map(|i| (i * 7 % 256) as u8));
    tag
}

pub fn id3v1_block() -> Vec<u8> {
    let mut block = b"TAG".to_vec();
    block.resize(128, b' ');
    block
}

pub fn frame(header: [u8; 4], seed: u8) -> Vec<u8> {
    let decoded = MpegFrameHeader::from_bytes(&header).expect("test header decodes");
    let mut frame = header.to_vec();
    frame.extend((0..decoded.body_len()).map(|i| (i as u8).wrapping_mul(seed)));
    frame
}

/// Build a stream from header indices into [`HEADERS`].
pub fn stream(id3v2_body: Option<u32>, frames: &[usize], id3v1: bool) -> Vec<u8> {
    let mut data = Vec::new();
    if let Some(body) = id3v2_body {
        data.extend(id3v2_tag(body));
    }
    for (n, &idx) in frames.iter().enumerate() {
        data.extend(frame(HEADERS[idx % HEADERS.len()], n as u8 | 1));
    }
    if id3v1 {
        data.extend(id3v1_block());
    }
    data
}

/// Feed `data` split at the given chunk sizes (cycled) and collect the events.
pub fn demux_with_sizes(data: &[u8], sizes: &[usize]) -> Vec<DemuxEvent> {
    let mut demuxer = MpegDemuxer::new(Vec::new());
    let mut rest = data;
    let mut i = 0;
    while !rest.is_empty() {
        let size = sizes.get(i % sizes.len().max(1)).copied().unwrap_or(rest.len());
        let (chunk, tail) = rest.split_at(size.min(rest.len()));
        demuxer.supply(chunk).expect("valid stream");
        rest = tail;
        i += 1;
    }
    assert!(demuxer.finish().is_none(), "stream ended mid-record");
    demuxer.into_consumer()
}

pub fn concat(events: &[DemuxEvent]) -> Vec<u8> {
    events.iter().flat_map(|e| e.raw_bytes().to_vec()).collect()
}
