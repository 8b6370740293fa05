#![doc = r#"
Errors describing malformed MIDI data.

These are wrapped by [`ReaderError`](crate::reader::ReaderError), which adds
the byte offset and the track/event being decoded.
"#]
use thiserror::Error;

/// Anything about the bytes that made them impossible to decode.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A variable length quantity did not terminate within four bytes
    #[error("Variable length quantity exceeds four bytes")]
    MalformedVlq,
    /// The `MThd` chunk was not where it was expected or had a bad size
    #[error("Invalid header: {0}")]
    InvalidHeader(#[from] HeaderError),
    /// A track was expected but a chunk with another identifier was found
    #[error("Invalid chunk identifier {}", DisplayId(.0))]
    InvalidChunkId([u8; 4]),
    /// Meta event type byte with no registered decoder
    #[error("Unknown meta event type {0:#04X}")]
    UnknownMetaType(u8),
    /// Channel status byte whose high nibble has no registered decoder
    #[error("Unknown channel status {0:#04X}")]
    UnknownChannelStatus(u8),
    /// A data byte appeared where a status byte was required
    #[error("Invalid status byte {0:#04X}")]
    InvalidStatus(u8),
    /// The track ran out of bytes before an end of track event
    #[error("Track is missing an end of track event")]
    MissingEndOfTrack,
    /// The events of a track did not consume exactly the chunk's declared length
    #[error("Track chunk declared {declared} bytes but its events consumed {consumed}")]
    ChunkLengthMismatch {
        /// The length written in the chunk header
        declared: u32,
        /// Bytes actually consumed up to and including the end of track event
        consumed: usize,
    },
    /// A fixed size meta event declared fewer bytes than its layout needs
    #[error("Meta event {meta_type:#04X} needs {expected} bytes, found length {found}")]
    InvalidMetaLength {
        /// The meta event type byte
        meta_type: u8,
        /// Bytes required by the layout
        expected: usize,
        /// Declared length
        found: u32,
    },
    /// A text meta event held non-ASCII bytes
    #[error("{0}")]
    TextDecode(#[from] TextDecodeError),
    /// System exclusive events are recognized but not decoded
    #[error("Unsupported event with status {0:#04X}")]
    UnsupportedEvent(u8),
}

/// Problems with the `MThd` header chunk.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeaderError {
    /// The file did not start with `MThd`
    #[error("expected MThd, found {}", DisplayId(.0))]
    InvalidChunkId([u8; 4]),
    /// The header chunk length was not 6
    #[error("expected a header length of 6, found {0}")]
    InvalidLength(u32),
    /// Fewer than the fourteen header bytes were available
    #[error("expected 14 header bytes, found {0}")]
    TooShort(usize),
}

/// A byte outside the ASCII range inside a text event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Text byte {byte:#04X} at index {index} is not ASCII")]
pub struct TextDecodeError {
    /// The offending byte
    pub byte: u8,
    /// Its index within the text payload
    pub index: usize,
}

/// Invalid SMPTE values, either in the header division or an offset event.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SmpteError {
    /// The header's frame rate was not -24, -25, -29, or -30
    #[error("Invalid header frame rate {0}")]
    HeaderFrameTime(i8),
    /// The frame rate bits of an offset were out of range
    #[error("Invalid track frame type {0}")]
    TrackFrame(u8),
    /// Hours above 23
    #[error("Invalid hour offset {0}")]
    HourOffset(u8),
    /// Minutes above 59
    #[error("Invalid minute offset {0}")]
    MinuteOffset(u8),
    /// Seconds above 59
    #[error("Invalid second offset {0}")]
    SecondOffset(u8),
    /// Fractional frames above 99
    #[error("Invalid subframe {0}")]
    Subframe(u8),
}

struct DisplayId<'a>(&'a [u8; 4]);

impl core::fmt::Display for DisplayId<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for byte in self.0 {
            if byte.is_ascii_graphic() {
                write!(f, "{}", *byte as char)?;
            } else {
                write!(f, "\\x{byte:02X}")?;
            }
        }
        Ok(())
    }
}
