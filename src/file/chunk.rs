#![doc = r#"
Chunk headers

MIDI files are organized into chunks, each identified by a 4-character ASCII
type identifier followed by a 32-bit big-endian length and then the chunk
data.

```text
[Header Chunk: "MThd"]
[Track Chunk 1: "MTrk"]
...
[Track Chunk N: "MTrk"]
```

Chunks with any other identifier are unknown chunks. They may be skipped by
their length.
"#]

use crate::reader::{MidiSource, ReadResult, Reader};

/// Identifier of the header chunk
pub const HEADER_ID: [u8; 4] = *b"MThd";
/// Identifier of a track chunk
pub const TRACK_ID: [u8; 4] = *b"MTrk";

/// The eight bytes preceding every chunk's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    id: [u8; 4],
    length: u32,
}

impl ChunkHeader {
    /// Reads the identifier and the length.
    pub fn read<R: MidiSource>(reader: &mut Reader<R>) -> ReadResult<Self> {
        let id = reader.read_exact_size()?;
        let length = reader.read_u32()?;
        Ok(Self { id, length })
    }

    /// The four byte identifier
    pub const fn id(&self) -> [u8; 4] {
        self.id
    }

    /// Length of the data following the header
    pub const fn length(&self) -> u32 {
        self.length
    }

    /// True for `MTrk`
    pub fn is_track(&self) -> bool {
        self.id == TRACK_ID
    }
}
