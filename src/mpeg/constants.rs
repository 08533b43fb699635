//! MPEG audio constants and lookup tables.

/// Size of an MPEG audio frame header in bytes
pub const MPEG_HEADER_LEN: usize = 4;

/// Raw version code reserved by the standard
pub const RESERVED_VERSION_CODE: u8 = 0b01;

/// Raw layer code reserved by the standard
pub const RESERVED_LAYER_CODE: u8 = 0b00;

/// Bitrate index reserved by the standard
pub const RESERVED_BITRATE_INDEX: u8 = 0b1111;

/// Sampling rate index reserved by the standard
pub const RESERVED_SAMPLE_RATE_INDEX: u8 = 0b11;

/// MPEG1 sampling rates by index. MPEG2 halves these, MPEG2.5 quarters them.
pub const SAMPLE_RATE_BASE: [u32; 3] = [44100, 48000, 32000];

/// Bitrates in kbps, indexed by the 4-bit bitrate index (0 = free format).
pub const BITRATE_MPEG1_LAYER1: [u16; 15] = [
    0, 32, 64, 96, 128, 160, 192, 224, 256, 288, 320, 352, 384, 416, 448,
];
pub const BITRATE_MPEG1_LAYER2: [u16; 15] = [
    0, 32, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 384,
];
pub const BITRATE_MPEG1_LAYER3: [u16; 15] = [
    0, 32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320,
];
/// MPEG2 and MPEG2.5 share the lower-sampling-frequency tables
pub const BITRATE_MPEG2_LAYER1: [u16; 15] = [
    0, 32, 48, 56, 64, 80, 96, 112, 128, 144, 160, 176, 192, 224, 256,
];
pub const BITRATE_MPEG2_LAYER2_3: [u16; 15] = [
    0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160,
];

/// Samples per frame for Layer I
pub const LAYER1_SAMPLES_PER_FRAME: u32 = 384;

/// Samples per frame for Layer II, and Layer III under MPEG1
pub const LONG_SAMPLES_PER_FRAME: u32 = 1152;

/// Samples per frame for Layer III under MPEG2 and MPEG2.5
pub const SHORT_SAMPLES_PER_FRAME: u32 = 576;

/// Layer I frames are counted in 4-byte slots
pub const LAYER1_SLOT_BYTES: u32 = 4;

/// Layer II and III frames are counted in single-byte slots
pub const LAYER2_3_SLOT_BYTES: u32 = 1;

/// Layer II and III frame size coefficient (1152 / 8), used for every version
pub const LAYER2_3_FRAME_COEFFICIENT: u32 = 144;
