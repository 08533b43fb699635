//! Pull-based demuxing over any `Read` source.

use std::{
    collections::VecDeque,
    io::{ErrorKind, Read},
};

use crate::{
    demux::MpegDemuxer,
    error::{DemuxError, DemuxResult, IncompleteStream},
    types::{DemuxEvent, DemuxOptions},
};

/// Iterator over the structural pieces of an MPEG audio stream read from `R`.
///
/// Reads `read_buffer_size` bytes at a time, feeds them to an [`MpegDemuxer`] and
/// yields the resulting events in order. A fatal error is yielded once, after every
/// event completed before it, and ends the iteration. If the source ends part-way
/// through a record, iteration ends normally and the warning is available from
/// [`incomplete`](Self::incomplete).
///
/// # Example
///
/// ```no_run
/// use mpeg_audio_io::{EventKind, MpegEventReader};
/// use std::fs::File;
/// use std::io::BufReader;
///
/// let reader = MpegEventReader::new(BufReader::new(File::open("audio.mp3")?));
/// let mut frames = 0;
/// for event in reader {
///     if event?.kind() == EventKind::Header {
///         frames += 1;
///     }
/// }
/// println!("{} frames", frames);
/// # Ok::<(), mpeg_audio_io::error::DemuxError>(())
/// ```
#[derive(Debug)]
pub struct MpegEventReader<R: Read> {
    reader: R,
    demuxer: MpegDemuxer<VecDeque<DemuxEvent>>,
    /// Reusable read buffer
    buffer: Vec<u8>,
    /// Fatal error held back until queued events are drained
    error: Option<DemuxError>,
    incomplete: Option<IncompleteStream>,
    done: bool,
}

impl<R: Read> MpegEventReader<R> {
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, DemuxOptions::default())
    }

    pub fn with_options(reader: R, options: DemuxOptions) -> Self {
        MpegEventReader {
            reader,
            demuxer: MpegDemuxer::with_options(VecDeque::new(), options),
            buffer: vec![0u8; options.read_buffer_size.max(1)],
            error: None,
            incomplete: None,
            done: false,
        }
    }

    /// Warning for a record left dangling at end of input, once the source is exhausted
    pub const fn incomplete(&self) -> Option<&IncompleteStream> {
        self.incomplete.as_ref()
    }

    /// Number of stream bytes classified so far
    pub const fn position(&self) -> u64 {
        self.demuxer.position()
    }

    pub const fn frame_count(&self) -> u64 {
        self.demuxer.frame_count()
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Read one buffer and feed it to the demuxer.
    fn fill(&mut self) {
        let n = loop {
            match self.reader.read(&mut self.buffer) {
                Ok(n) => break n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.error = Some(DemuxError::Io(e));
                    return;
                }
            }
        };

        if n == 0 {
            self.incomplete = self.demuxer.finish();
            self.done = true;
            return;
        }

        if let Err(e) = self.demuxer.supply(&self.buffer[..n]) {
            self.error = Some(e);
        }
    }
}

impl<R: Read> Iterator for MpegEventReader<R> {
    type Item = DemuxResult<DemuxEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(event) = self.demuxer.consumer_mut().pop_front() {
                return Some(Ok(event));
            }
            if let Some(err) = self.error.take() {
                self.done = true;
                return Some(Err(err));
            }
            if self.done {
                return None;
            }
            self.fill();
        }
    }
}
