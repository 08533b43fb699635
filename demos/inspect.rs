//! Print the structure of an MP3 file.
//!
//! ```text
//! cargo run --example inspect -- path/to/file.mp3 [--frames]
//! RUST_LOG=debug cargo run --example inspect -- path/to/file.mp3
//! ```

use std::{env, fs::File, io::BufReader, process::ExitCode, time::Duration};

use mpeg_audio_io::{DemuxEvent, DemuxResult, MpegEventReader};
use tracing_subscriber::EnvFilter;

#[derive(Default)]
struct Summary {
    frames: u64,
    audio_bytes: u64,
    duration: Duration,
    first: Option<String>,
    id3v2_bytes: usize,
    id3v1_blocks: usize,
}

fn inspect(path: &str, list_frames: bool) -> DemuxResult<()> {
    let mut reader = MpegEventReader::new(BufReader::new(File::open(path)?));
    let mut summary = Summary::default();

    for event in reader.by_ref() {
        match event? {
            DemuxEvent::Id3v2 { header, raw } => {
                println!("{} ({} bytes total)", header, header.total_size());
                if header.unsynchronisation() {
                    println!("  unsynchronised");
                }
                if header.footer_present() {
                    println!("  footer flagged; the 10 footer bytes follow the tag");
                }
                summary.id3v2_bytes += raw.len();
            }
            DemuxEvent::Header { header, .. } => {
                if list_frames {
                    println!("frame {:>6}: {}", summary.frames, header);
                }
                summary.frames += 1;
                summary.duration += header.duration();
                summary.first.get_or_insert_with(|| header.to_string());
            }
            DemuxEvent::FrameBody(body) => summary.audio_bytes += body.len() as u64,
            DemuxEvent::Id3v1(_) => summary.id3v1_blocks += 1,
        }
    }

    println!("file:        {}", path);
    if let Some(first) = &summary.first {
        println!("first frame: {}", first);
    }
    println!("frames:      {}", summary.frames);
    println!("audio bytes: {}", summary.audio_bytes);
    println!("duration:    {:.3} s", summary.duration.as_secs_f64());
    println!("ID3v2 bytes: {}", summary.id3v2_bytes);
    println!("ID3v1 tags:  {}", summary.id3v1_blocks);
    if let Some(incomplete) = reader.incomplete() {
        println!("warning:     {}", incomplete);
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let list_frames = args.iter().any(|a| a == "--frames");
    let Some(path) = args.iter().find(|a| !a.starts_with("--")) else {
        eprintln!("usage: inspect <file.mp3> [--frames]");
        return ExitCode::FAILURE;
    };

    match inspect(path, list_frames) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
