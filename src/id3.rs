//! ID3 tag envelopes.
//!
//! The demuxer only needs enough of ID3 to know how many bytes a tag occupies: the
//! fixed 10-byte ID3v2 header at the start of a stream, and the fixed 128-byte ID3v1
//! block that usually trails it. Tag contents are left to a dedicated tag decoder.

use core::fmt::{Display, Formatter, Result as FmtResult};

/// ID3v2 header size (marker, version, flags, syncsafe size)
pub const ID3V2_HEADER_LEN: usize = 10;

/// ID3v1 block size, marker included
pub const ID3V1_LEN: usize = 128;

/// Three-byte tag marker -- does not own the data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TagMarker {
    pub id: [u8; 3],
}

impl Display for TagMarker {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match core::str::from_utf8(&self.id) {
            Ok(s) => write!(f, "{}", s),
            Err(_) => write!(f, "0x{:02X}{:02X}{:02X}", self.id[0], self.id[1], self.id[2]),
        }
    }
}

impl TagMarker {
    #[inline]
    pub const fn new(id: &[u8; 3]) -> Self {
        TagMarker { id: *id }
    }

    /// True when `bytes` begins with this marker
    #[inline]
    pub fn starts(&self, bytes: &[u8]) -> bool {
        bytes.starts_with(&self.id)
    }
}

pub const ID3V2_MARKER: TagMarker = TagMarker::new(b"ID3");
pub const ID3V1_MARKER: TagMarker = TagMarker::new(b"TAG");

/// Decode a 4-byte syncsafe integer (7 significant bits per byte, big-endian).
#[inline]
pub const fn decode_syncsafe(bytes: [u8; 4]) -> u32 {
    ((bytes[0] as u32 & 0x7F) << 21)
        | ((bytes[1] as u32 & 0x7F) << 14)
        | ((bytes[2] as u32 & 0x7F) << 7)
        | (bytes[3] as u32 & 0x7F)
}

/// The fixed header of an ID3v2 tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id3v2Header {
    /// Major version (3 for ID3v2.3, 4 for ID3v2.4)
    pub version_major: u8,
    pub version_minor: u8,
    /// Raw flags byte
    pub flags: u8,
    /// Length of the tag body following the 10-byte header
    pub body_length: u32,
}

impl Id3v2Header {
    /// Parse the six bytes that follow the marker and major version byte.
    ///
    /// Layout: minor version, flags, then the 4-byte syncsafe body length.
    pub const fn from_rest(version_major: u8, rest: &[u8; 6]) -> Self {
        Id3v2Header {
            version_major,
            version_minor: rest[0],
            flags: rest[1],
            body_length: decode_syncsafe([rest[2], rest[3], rest[4], rest[5]]),
        }
    }

    /// Header plus body, in bytes
    #[inline]
    pub const fn total_size(&self) -> usize {
        ID3V2_HEADER_LEN + self.body_length as usize
    }

    #[inline]
    pub const fn unsynchronisation(&self) -> bool {
        self.flags & 0x80 != 0
    }

    #[inline]
    pub const fn extended_header(&self) -> bool {
        self.flags & 0x40 != 0
    }

    #[inline]
    pub const fn experimental(&self) -> bool {
        self.flags & 0x20 != 0
    }

    /// ID3v2.4 footer flag. The footer is not part of the declared body length.
    #[inline]
    pub const fn footer_present(&self) -> bool {
        self.flags & 0x10 != 0
    }
}

impl Display for Id3v2Header {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "ID3v2.{}.{}, flags 0x{:02X}, {} body bytes",
            self.version_major, self.version_minor, self.flags, self.body_length
        )
    }
}
