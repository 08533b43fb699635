// Correctness and logic
#![warn(clippy::unit_cmp)] // Detects comparing unit types
#![warn(clippy::match_same_arms)] // Duplicate match arms
#![allow(clippy::result_large_err)] // Allow large error types for comprehensive error handling
#![allow(clippy::collapsible_if)] // Sometimes clearer to have separate conditions
#![allow(clippy::unnecessary_cast)] // Explicit casts for clarity
#![allow(clippy::identity_op)] // Explicit operations for clarity

// Performance-focused
#![warn(clippy::inefficient_to_string)] // `format!("{}", x)` vs `x.to_string()`
#![warn(clippy::map_clone)] // Cloning inside `map()` unnecessarily
#![warn(clippy::unnecessary_to_owned)] // Detects redundant `.to_owned()` or `.clone()`
#![warn(clippy::large_stack_arrays)] // Helps avoid stack overflows
#![warn(clippy::needless_collect)] // Avoids `.collect().iter()` chains

// Style and idiomatic Rust
#![warn(clippy::redundant_clone)] // Detects unnecessary `.clone()`
#![warn(clippy::needless_return)] // Avoids `return` at the end of functions
#![warn(clippy::let_unit_value)] // Avoids binding `()` to variables
#![warn(clippy::manual_map)] // Use `.map()` instead of manual `match`
#![cfg_attr(not(test), warn(clippy::unwrap_used))] // Avoids using `unwrap()`
#![cfg_attr(not(test), warn(clippy::panic))] // Avoids using `panic!` in production code

// Maintainability
#![warn(clippy::missing_panics_doc)] // Docs for functions that might panic
#![warn(clippy::missing_safety_doc)] // Docs for `unsafe` functions
#![warn(clippy::missing_const_for_fn)] // Suggests making eligible functions `const`
#![forbid(unsafe_code)]

//! Streaming demuxer for MPEG audio bitstreams.
//!
//! An MP3 file is a sequence of structural pieces: an optional ID3v2 tag at the very
//! start, a run of MPEG audio frames (4-byte header plus a body whose length the header
//! determines), and usually a 128-byte ID3v1 block at the end. [`MpegDemuxer`] splits
//! a stream into those pieces as bytes arrive, in chunks of any size, without holding
//! more than the record it is currently completing.
//!
//! Every piece is reported as the literal byte range it occupies, so writing the pieces
//! back out in order reproduces the input exactly.
//!
//! - Push: feed chunks to [`MpegDemuxer::supply`] and receive callbacks on a
//!   [`DemuxConsumer`]. `MpegDemuxer` also implements `std::io::Write`.
//! - Pull: iterate a [`MpegEventReader`] over any `Read` source.
//!
//! Tag contents and audio payloads are passed through opaquely.

pub mod demux;
pub mod error;
pub mod id3;
pub mod mpeg;
pub mod traits;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::{
    demux::{MpegDemuxer, MpegEventReader, PendingKind},
    error::{DemuxError, DemuxResult, ErrorPosition, IncompleteStream},
    id3::Id3v2Header,
    mpeg::{ChannelMode, Layer, MpegFrameHeader, MpegHeaderError, MpegVersion},
    traits::DemuxConsumer,
    types::{DemuxEvent, DemuxOptions, EventKind},
};

/// Demux a complete in-memory stream into owned events.
///
/// A record left incomplete at the end of `bytes` is dropped and logged, as with
/// [`MpegDemuxer::finish`].
///
/// # Errors
///
/// Returns [`DemuxError::InvalidFrameHeader`] if a frame header cannot be decoded.
pub fn demux_slice(bytes: &[u8]) -> DemuxResult<Vec<DemuxEvent>> {
    let mut demuxer = MpegDemuxer::new(Vec::new());
    demuxer.supply(bytes)?;
    // The warning has already been logged by `finish`
    let _ = demuxer.finish();
    Ok(demuxer.into_consumer())
}
