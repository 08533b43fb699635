//! Push-driven MPEG audio demuxer.
//!
//! `MpegDemuxer` accepts the stream in chunks of any size and splits it into an
//! optional leading ID3v2 tag, MPEG frames (header + body) and ID3v1 blocks. It never
//! holds more than the one record currently being completed.

use std::{io, mem};

use tracing::{debug, trace, warn};

use crate::{
    demux::PendingKind,
    error::{DemuxError, DemuxResult, IncompleteStream},
    id3::{ID3V1_LEN, ID3V1_MARKER, ID3V2_HEADER_LEN, ID3V2_MARKER, Id3v2Header},
    mpeg::{MpegFrameHeader, constants::MPEG_HEADER_LEN},
    traits::DemuxConsumer,
    types::DemuxOptions,
};

/// Cursor state. Each variant is named by the read it is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DemuxState {
    AwaitingHeader,
    AwaitingId3v2Rest { version_major: u8 },
    AwaitingId3v2Body { header: Id3v2Header },
    AwaitingId3v1Rest,
    AwaitingFrameBody { frame_size: u32 },
    /// A fatal error was reported; input is refused
    Halted,
    Finished,
}

impl DemuxState {
    /// Exact number of bytes the current read needs
    const fn pending_len(&self) -> Option<usize> {
        match self {
            DemuxState::AwaitingHeader => Some(MPEG_HEADER_LEN),
            DemuxState::AwaitingId3v2Rest { .. } => Some(ID3V2_HEADER_LEN - MPEG_HEADER_LEN),
            DemuxState::AwaitingId3v2Body { header } => Some(header.body_length as usize),
            DemuxState::AwaitingId3v1Rest => Some(ID3V1_LEN - MPEG_HEADER_LEN),
            DemuxState::AwaitingFrameBody { frame_size } => {
                Some(*frame_size as usize - MPEG_HEADER_LEN)
            }
            DemuxState::Halted | DemuxState::Finished => None,
        }
    }

    const fn pending_kind(&self) -> Option<PendingKind> {
        match self {
            DemuxState::AwaitingHeader => Some(PendingKind::AwaitingHeader),
            DemuxState::AwaitingId3v2Rest { .. } => Some(PendingKind::AwaitingId3v2Rest),
            DemuxState::AwaitingId3v2Body { .. } => Some(PendingKind::AwaitingId3v2Body),
            DemuxState::AwaitingId3v1Rest => Some(PendingKind::AwaitingId3v1Rest),
            DemuxState::AwaitingFrameBody { .. } => Some(PendingKind::AwaitingFrameBody),
            DemuxState::Halted | DemuxState::Finished => None,
        }
    }
}

/// A resumable MPEG audio demuxer.
///
/// Feed bytes with [`supply`](Self::supply) in stream order and call
/// [`finish`](Self::finish) once the source is exhausted. Structural pieces are
/// reported to the [`DemuxConsumer`] synchronously, in order, as soon as they are
/// complete, so the output does not depend on how the input was chunked.
///
/// A frame header that cannot be decoded is fatal: the demuxer cannot know how long
/// the frame is, so it stops and refuses further input.
///
/// # Example
///
/// ```
/// use mpeg_audio_io::{DemuxEvent, MpegDemuxer};
///
/// let mut frame = vec![0xFF, 0xFB, 0x90, 0x64];
/// frame.resize(417, 0);
///
/// let mut demuxer = MpegDemuxer::new(Vec::<DemuxEvent>::new());
/// for chunk in frame.chunks(100) {
///     demuxer.supply(chunk)?;
/// }
/// assert!(demuxer.finish().is_none());
///
/// let events = demuxer.into_consumer();
/// assert_eq!(events.len(), 2);
/// assert_eq!(events[1].raw_bytes().len(), 413);
/// # Ok::<(), mpeg_audio_io::error::DemuxError>(())
/// ```
#[derive(Debug)]
pub struct MpegDemuxer<C: DemuxConsumer> {
    /// Receiver of emitted pieces
    consumer: C,
    state: DemuxState,
    /// Bytes received toward the current pending read
    carry: Vec<u8>,
    /// Completed leading reads of an in-flight tag
    record: Vec<u8>,
    /// True until the first 4-byte read completes; ID3v2 is only recognised there
    at_stream_start: bool,
    /// Bytes handed to completed reads so far
    position: u64,
    /// Stream offset where the in-flight record began
    record_offset: u64,
    /// Frame headers emitted so far
    frame_count: u64,
}

impl<C: DemuxConsumer> MpegDemuxer<C> {
    pub fn new(consumer: C) -> Self {
        Self::with_options(consumer, DemuxOptions::default())
    }

    pub fn with_options(consumer: C, options: DemuxOptions) -> Self {
        MpegDemuxer {
            consumer,
            state: DemuxState::AwaitingHeader,
            carry: Vec::with_capacity(options.carry_capacity),
            record: Vec::new(),
            at_stream_start: true,
            position: 0,
            record_offset: 0,
            frame_count: 0,
        }
    }

    /// Feed the next chunk of the stream.
    ///
    /// The chunk may be empty, a single byte, or span any number of records. Every
    /// record completed by this chunk is emitted before the call returns; a trailing
    /// partial record is kept until more input arrives.
    ///
    /// # Errors
    ///
    /// - [`DemuxError::InvalidFrameHeader`] if a frame header cannot be decoded. Records
    ///   completed earlier in the same chunk have already been emitted.
    /// - [`DemuxError::Halted`] if a previous call failed.
    /// - [`DemuxError::Finished`] if [`finish`](Self::finish) was already called.
    pub fn supply(&mut self, chunk: &[u8]) -> DemuxResult<()> {
        let mut input = chunk;
        loop {
            let Some(pending) = self.state.pending_len() else {
                return Err(match self.state {
                    DemuxState::Finished => DemuxError::Finished,
                    _ => DemuxError::Halted,
                });
            };

            if self.carry.is_empty() {
                // Complete reads come straight out of the caller's chunk
                if input.len() < pending {
                    break;
                }
                let (piece, rest) = input.split_at(pending);
                input = rest;
                self.complete(piece)?;
            } else {
                let missing = pending.saturating_sub(self.carry.len());
                if input.len() < missing {
                    break;
                }
                let (tail, rest) = input.split_at(missing);
                input = rest;
                let mut piece = mem::take(&mut self.carry);
                piece.extend_from_slice(tail);
                let result = self.complete(&piece);
                piece.clear();
                self.carry = piece;
                result?;
            }
        }

        self.carry.extend_from_slice(input);
        Ok(())
    }

    /// Signal the end of the stream.
    ///
    /// Returns a warning if the stream stopped part-way through a record; the buffered
    /// bytes of that record are discarded without being emitted. Afterwards `supply`
    /// returns [`DemuxError::Finished`].
    pub fn finish(&mut self) -> Option<IncompleteStream> {
        let state = mem::replace(&mut self.state, DemuxState::Finished);
        let carried = mem::take(&mut self.carry).len();
        self.record.clear();

        let (pending, pending_len) = (state.pending_kind()?, state.pending_len()?);
        let in_record = state != DemuxState::AwaitingHeader;
        if !in_record && carried == 0 {
            return None;
        }

        let record_offset = if in_record {
            self.record_offset
        } else {
            self.position
        };
        let incomplete = IncompleteStream {
            pending,
            record_offset,
            buffered: (self.position - record_offset) as usize + carried,
            missing: pending_len - carried,
        };
        warn!(
            record_offset,
            buffered = incomplete.buffered,
            missing = incomplete.missing,
            "stream ended {}; dropping partial record",
            pending
        );
        Some(incomplete)
    }

    /// What the demuxer is waiting for, or `None` once halted or finished
    pub const fn pending_kind(&self) -> Option<PendingKind> {
        self.state.pending_kind()
    }

    /// Size of the read currently pending, or `None` once halted or finished
    pub const fn pending_len(&self) -> Option<usize> {
        self.state.pending_len()
    }

    /// Bytes held toward the pending read
    pub fn buffered_len(&self) -> usize {
        self.carry.len()
    }

    /// Size of the frame being read, while its body is pending
    pub const fn current_frame_size(&self) -> Option<u32> {
        match self.state {
            DemuxState::AwaitingFrameBody { frame_size } => Some(frame_size),
            _ => None,
        }
    }

    /// Number of stream bytes classified so far (excludes buffered bytes)
    pub const fn position(&self) -> u64 {
        self.position
    }

    /// Number of frame headers emitted so far
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn is_halted(&self) -> bool {
        self.state == DemuxState::Halted
    }

    pub fn is_finished(&self) -> bool {
        self.state == DemuxState::Finished
    }

    pub const fn consumer(&self) -> &C {
        &self.consumer
    }

    pub fn consumer_mut(&mut self) -> &mut C {
        &mut self.consumer
    }

    pub fn into_consumer(self) -> C {
        self.consumer
    }

    /// Run the transition for one completed read of exactly `pending_len` bytes.
    fn complete(&mut self, piece: &[u8]) -> DemuxResult<()> {
        let offset = self.position;
        self.position += piece.len() as u64;

        let next = match self.state {
            DemuxState::AwaitingHeader => self.complete_header(piece, offset)?,
            DemuxState::AwaitingId3v2Rest { version_major } => {
                self.record.extend_from_slice(piece);
                let header = Id3v2Header::from_rest(version_major, &fixed(piece));
                debug!(
                    offset = self.record_offset,
                    body_length = header.body_length,
                    "ID3v2.{}.{} tag",
                    header.version_major,
                    header.version_minor
                );
                DemuxState::AwaitingId3v2Body { header }
            }
            DemuxState::AwaitingId3v2Body { header } => {
                self.record.extend_from_slice(piece);
                self.consumer.on_id3v2(&header, &self.record);
                self.record.clear();
                DemuxState::AwaitingHeader
            }
            DemuxState::AwaitingId3v1Rest => {
                self.record.extend_from_slice(piece);
                self.consumer.on_id3v1(&self.record);
                self.record.clear();
                DemuxState::AwaitingHeader
            }
            DemuxState::AwaitingFrameBody { .. } => {
                self.consumer.on_frame_body(piece);
                DemuxState::AwaitingHeader
            }
            DemuxState::Halted => return Err(DemuxError::Halted),
            DemuxState::Finished => return Err(DemuxError::Finished),
        };

        self.state = next;
        Ok(())
    }

    fn complete_header(&mut self, piece: &[u8], offset: u64) -> DemuxResult<DemuxState> {
        let raw: [u8; MPEG_HEADER_LEN] = fixed(piece);
        self.record_offset = offset;

        let at_stream_start = mem::replace(&mut self.at_stream_start, false);
        if at_stream_start && ID3V2_MARKER.starts(&raw) {
            self.record.extend_from_slice(&raw);
            return Ok(DemuxState::AwaitingId3v2Rest {
                version_major: raw[3],
            });
        }

        // Checked at every header boundary, not only near the end of the stream
        if ID3V1_MARKER.starts(&raw) {
            debug!(offset, "ID3v1 block");
            self.record.extend_from_slice(&raw);
            return Ok(DemuxState::AwaitingId3v1Rest);
        }

        match MpegFrameHeader::from_bytes(&raw) {
            Ok(header) => {
                trace!(offset, frame_size = header.frame_size, "frame header");
                self.frame_count += 1;
                self.consumer.on_header(&raw, &header);
                Ok(DemuxState::AwaitingFrameBody {
                    frame_size: header.frame_size,
                })
            }
            Err(source) => {
                debug!(offset, error = %source, "halting on invalid frame header");
                self.state = DemuxState::Halted;
                self.record.clear();
                Err(DemuxError::invalid_frame_header(source, offset, self.frame_count))
            }
        }
    }
}

/// Writable-stream front end: each `write` supplies the whole buffer.
///
/// Demuxing errors surface as [`io::ErrorKind::InvalidData`].
impl<C: DemuxConsumer> io::Write for MpegDemuxer<C> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.supply(buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Copy a completed read of known length into a fixed-size array.
#[inline]
fn fixed<const N: usize>(piece: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&piece[..N]);
    out
}
