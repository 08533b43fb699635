use std::{hint::black_box, io::Cursor, time::Duration};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mpeg_audio_io::{DemuxConsumer, MpegDemuxer, MpegEventReader, MpegFrameHeader};

/// MPEG1 Layer III 128 kbps 44.1 kHz joint stereo, unpadded and padded
const HEADERS: [[u8; 4]; 2] = [[0xFF, 0xFB, 0x90, 0x64], [0xFF, 0xFB, 0x92, 0x64]];
const FRAME_COUNTS: &[usize] = &[100, 2_000];
const CHUNK_SIZES: &[usize] = &[64, 4096, 65_536];

/// Counts pieces without copying them
#[derive(Default)]
struct Tally {
    headers: u64,
    body_bytes: u64,
}

impl DemuxConsumer for Tally {
    fn on_header(&mut self, _raw: &[u8; 4], _header: &MpegFrameHeader) {
        self.headers += 1;
    }

    fn on_frame_body(&mut self, body: &[u8]) {
        self.body_bytes += body.len() as u64;
    }
}

fn synthetic_stream(frames: usize) -> Vec<u8> {
    let mut data = b"ID3\x04\x00\x00\x00\x00\x08\x00".to_vec();
    data.extend(std::iter::repeat_n(0u8, 1024));
    for n in 0..frames {
        // Pad every third frame to mimic a real 44.1 kHz stream
        let header = HEADERS[usize::from(n % 3 == 2)];
        let size = if n % 3 == 2 { 418 } else { 417 };
        data.extend_from_slice(&header);
        data.extend((4..size).map(|i| (i ^ n) as u8));
    }
    let mut tag = b"TAG".to_vec();
    tag.resize(128, 0);
    data.extend(tag);
    data
}

fn configure_group(group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>) {
    group.sample_size(30);
    group.warm_up_time(Duration::from_secs(2));
    group.measurement_time(Duration::from_secs(5));
}

fn bench_supply(c: &mut Criterion) {
    let mut group = c.benchmark_group("supply");
    configure_group(&mut group);

    for &frames in FRAME_COUNTS {
        let data = synthetic_stream(frames);
        group.throughput(Throughput::Bytes(data.len() as u64));

        group.bench_with_input(BenchmarkId::new("whole", frames), &data, |b, data| {
            b.iter(|| {
                let mut demuxer = MpegDemuxer::new(Tally::default());
                demuxer.supply(black_box(data)).expect("valid stream");
                black_box(demuxer.into_consumer().headers)
            });
        });

        for &chunk in CHUNK_SIZES {
            let id = BenchmarkId::new(format!("chunked_{}", chunk), frames);
            group.bench_with_input(id, &data, |b, data| {
                b.iter(|| {
                    let mut demuxer = MpegDemuxer::new(Tally::default());
                    for piece in data.chunks(chunk) {
                        demuxer.supply(black_box(piece)).expect("valid stream");
                    }
                    black_box(demuxer.into_consumer().body_bytes)
                });
            });
        }
    }

    group.finish();
}

fn bench_event_reader(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_reader");
    configure_group(&mut group);

    for &frames in FRAME_COUNTS {
        let data = synthetic_stream(frames);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(frames), &data, |b, data| {
            b.iter(|| {
                let reader = MpegEventReader::new(Cursor::new(black_box(data.as_slice())));
                black_box(reader.filter_map(Result::ok).count())
            });
        });
    }

    group.finish();
}

criterion_group!(
    name = demux_benches;
    config = Criterion::default()
        .sample_size(50)
        .configure_from_args();
    targets = bench_supply, bench_event_reader
);
criterion_main!(demux_benches);
