use super::{
    FormatType, Timing,
    chunk::{ChunkHeader, HEADER_ID},
};
use crate::{
    HeaderError, ParseError, SmpteError,
    reader::{MidiSource, ReadResult, Reader, ReaderError},
};

#[doc = r#"
The contents of the `MThd` chunk

```text
"MThd" | 00 00 00 06 | format (2) | track count (2) | division (2)
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MidiFileHeader {
    format: u16,
    track_count: u16,
    ppqn: u16,
}

impl MidiFileHeader {
    /// The only valid header chunk length
    pub const LENGTH: u32 = 6;

    /// Create a header from its three words
    pub const fn new(format: u16, track_count: u16, ppqn: u16) -> Self {
        Self {
            format,
            track_count,
            ppqn,
        }
    }

    /// Size of the whole header chunk, identifier and length included
    pub const CHUNK_SIZE: usize = 14;

    /// Reads the fourteen header bytes at the start of a file.
    pub fn read<R: MidiSource>(reader: &mut Reader<R>) -> ReadResult<Self> {
        if reader.remaining() < Self::CHUNK_SIZE {
            return Err(ReaderError::parse_error(
                reader.buffer_position(),
                ParseError::InvalidHeader(HeaderError::TooShort(reader.remaining())),
            ));
        }
        let start = reader.buffer_position();
        let chunk = ChunkHeader::read(reader)?;
        if chunk.id() != HEADER_ID {
            return Err(ReaderError::parse_error(
                start,
                ParseError::InvalidHeader(HeaderError::InvalidChunkId(chunk.id())),
            ));
        }
        if chunk.length() != Self::LENGTH {
            return Err(ReaderError::parse_error(
                start + 4,
                ParseError::InvalidHeader(HeaderError::InvalidLength(chunk.length())),
            ));
        }
        let format = reader.read_u16()?;
        let track_count = reader.read_u16()?;
        let ppqn = reader.read_u16()?;
        Ok(Self::new(format, track_count, ppqn))
    }

    /// The raw format word. Informational only; not validated.
    pub const fn format(&self) -> u16 {
        self.format
    }

    /// The format word interpreted, if it is 0, 1, or 2.
    pub const fn format_type(&self) -> Option<FormatType> {
        FormatType::from_word(self.format)
    }

    /// Number of track chunks announced
    pub const fn track_count(&self) -> u16 {
        self.track_count
    }

    /// The raw division word, ticks per quarter note for metrical files
    pub const fn ppqn(&self) -> u16 {
        self.ppqn
    }

    /// The division word interpreted
    pub const fn timing(&self) -> Result<Timing, SmpteError> {
        Timing::from_division(self.ppqn)
    }
}
