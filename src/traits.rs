use std::collections::VecDeque;

use crate::{id3::Id3v2Header, mpeg::MpegFrameHeader, types::DemuxEvent};

/// Receiver for the structural pieces found by [`MpegDemuxer`](crate::MpegDemuxer).
///
/// Callbacks run synchronously inside `supply`, in stream order. Every slice is the
/// literal byte range taken from the input, so writing each one out in the order
/// received reproduces the original stream. Slices are only borrowed for the duration
/// of the call; copy them if they must outlive it.
///
/// All methods default to doing nothing, so implementors only override what they need.
///
/// # Example
///
/// ```
/// use mpeg_audio_io::{MpegDemuxer, mpeg::MpegFrameHeader, traits::DemuxConsumer};
///
/// #[derive(Default)]
/// struct FrameCounter(usize);
///
/// impl DemuxConsumer for FrameCounter {
///     fn on_header(&mut self, _raw: &[u8; 4], _header: &MpegFrameHeader) {
///         self.0 += 1;
///     }
/// }
///
/// let mut demuxer = MpegDemuxer::new(FrameCounter::default());
/// demuxer.supply(&[])?;
/// assert!(demuxer.finish().is_none());
/// assert_eq!(demuxer.consumer().0, 0);
/// # Ok::<(), mpeg_audio_io::error::DemuxError>(())
/// ```
pub trait DemuxConsumer {
    /// A decoded frame header and its 4 raw bytes
    fn on_header(&mut self, _raw: &[u8; 4], _header: &MpegFrameHeader) {}

    /// The body of the frame whose header was last reported (`frame_size - 4` bytes)
    fn on_frame_body(&mut self, _body: &[u8]) {}

    /// A complete ID3v2 tag: the 10-byte header followed by its declared body
    fn on_id3v2(&mut self, _header: &Id3v2Header, _raw: &[u8]) {}

    /// A complete 128-byte ID3v1 block, `TAG` marker included
    fn on_id3v1(&mut self, _raw: &[u8]) {}
}

impl<C: DemuxConsumer + ?Sized> DemuxConsumer for &mut C {
    fn on_header(&mut self, raw: &[u8; 4], header: &MpegFrameHeader) {
        (**self).on_header(raw, header)
    }

    fn on_frame_body(&mut self, body: &[u8]) {
        (**self).on_frame_body(body)
    }

    fn on_id3v2(&mut self, header: &Id3v2Header, raw: &[u8]) {
        (**self).on_id3v2(header, raw)
    }

    fn on_id3v1(&mut self, raw: &[u8]) {
        (**self).on_id3v1(raw)
    }
}

/// Collects owned events in emission order
impl DemuxConsumer for Vec<DemuxEvent> {
    fn on_header(&mut self, raw: &[u8; 4], header: &MpegFrameHeader) {
        self.push(DemuxEvent::header(raw, header));
    }

    fn on_frame_body(&mut self, body: &[u8]) {
        self.push(DemuxEvent::FrameBody(body.to_vec()));
    }

    fn on_id3v2(&mut self, header: &Id3v2Header, raw: &[u8]) {
        self.push(DemuxEvent::id3v2(header, raw));
    }

    fn on_id3v1(&mut self, raw: &[u8]) {
        self.push(DemuxEvent::Id3v1(raw.to_vec()));
    }
}

/// Queues owned events; used by the pull-based reader front end
impl DemuxConsumer for VecDeque<DemuxEvent> {
    fn on_header(&mut self, raw: &[u8; 4], header: &MpegFrameHeader) {
        self.push_back(DemuxEvent::header(raw, header));
    }

    fn on_frame_body(&mut self, body: &[u8]) {
        self.push_back(DemuxEvent::FrameBody(body.to_vec()));
    }

    fn on_id3v2(&mut self, header: &Id3v2Header, raw: &[u8]) {
        self.push_back(DemuxEvent::id3v2(header, raw));
    }

    fn on_id3v1(&mut self, raw: &[u8]) {
        self.push_back(DemuxEvent::Id3v1(raw.to_vec()));
    }
}
