#![doc = r#"
Rusty representation of a [`MidiFile`]

Decoding is one pass over an in-memory buffer: the fourteen byte `MThd`
header, then exactly as many `MTrk` chunks as the header announces. Any
error aborts the whole file; no partial result is returned.
"#]

pub mod chunk;

mod format;
pub use format::*;

mod header;
pub use header::*;

pub mod meta;

mod timing;
pub use timing::*;

mod track;
pub use track::*;

use crate::{
    ParseOptions, SmpteError,
    reader::{MidiSource, ReadResult, Reader},
};
use alloc::vec::Vec;

#[doc = r#"
A decoded Standard MIDI File.

# Example
```rust
# use smf_reader::prelude::*;
let bytes = [
    b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 0, 0, 1, 0x01, 0xE0,
    b'M', b'T', b'r', b'k', 0, 0, 0, 4, 0x00, 0xFF, 0x2F, 0x00,
];
let file = MidiFile::parse(&bytes[..]).unwrap();
assert_eq!(file.ppqn(), 480);
assert_eq!(file.tracks().len(), 1);
```
"#]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MidiFile {
    header: MidiFileHeader,
    tracks: Vec<Track>,
}

impl MidiFile {
    /// Parse a set of bytes into a file struct with the default [`ParseOptions`]
    pub fn parse<R: MidiSource>(bytes: R) -> ReadResult<Self> {
        Self::parse_with(bytes, ParseOptions::new())
    }

    /// Parse a set of bytes into a file struct
    pub fn parse_with<R: MidiSource>(bytes: R, options: ParseOptions) -> ReadResult<Self> {
        let mut reader = Reader::new(bytes);
        FileDecoder::new(options).decode(&mut reader)
    }

    /// Reads a whole file from disk and parses it.
    #[cfg(feature = "std")]
    pub fn read_file(
        path: impl AsRef<std::path::Path>,
        options: ParseOptions,
    ) -> Result<Self, LoadError> {
        let bytes = std::fs::read(path)?;
        Ok(Self::parse_with(bytes, options)?)
    }

    /// Returns header info
    pub fn header(&self) -> &MidiFileHeader {
        &self.header
    }

    /// The raw format word, 0, 1, or 2 in well formed files
    pub fn format(&self) -> u16 {
        self.header.format()
    }

    /// The format word interpreted
    pub fn format_type(&self) -> Option<FormatType> {
        self.header.format_type()
    }

    /// Pulses per quarter note: the raw division word
    pub fn ppqn(&self) -> u16 {
        self.header.ppqn()
    }

    /// The division word interpreted
    pub fn timing(&self) -> Result<Timing, SmpteError> {
        self.header.timing()
    }

    /// The tracks, in file order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Consumes the file, returning its tracks
    pub fn into_tracks(self) -> Vec<Track> {
        self.tracks
    }
}

#[doc = r#"
Reads the header and then one track per announced track.
"#]
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDecoder {
    options: ParseOptions,
}

impl FileDecoder {
    /// Create a decoder with the given options
    pub const fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Decode a complete file starting at the reader's cursor.
    pub fn decode<R: MidiSource>(&self, reader: &mut Reader<R>) -> ReadResult<MidiFile> {
        let header = MidiFileHeader::read(reader)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            format = header.format(),
            tracks = header.track_count(),
            ppqn = header.ppqn(),
            "decoded file header"
        );

        let track_decoder = TrackDecoder::new(self.options);
        let tracks = (0..header.track_count() as usize)
            .map(|index| {
                track_decoder
                    .decode(reader)
                    .map_err(|e| e.in_track(index))
            })
            .collect::<ReadResult<Vec<_>>>()?;

        Ok(MidiFile { header, tracks })
    }
}

/// Failure to load a file from disk.
#[cfg(feature = "std")]
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("Could not read file: {0}")]
    Io(#[from] std::io::Error),
    /// The bytes were not a valid MIDI file
    #[error(transparent)]
    Read(#[from] crate::reader::ReaderError),
}
