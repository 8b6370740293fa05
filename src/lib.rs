#![doc = r#"
A decoder for Standard MIDI Files

`smf_reader` turns the bytes of a `.mid` file into a [`MidiFile`]: the header
words (format, track count, pulses per quarter note) and one [`Track`] per
`MTrk` chunk, each an ordered list of [`TrackEvent`]s ending in end of track.

```rust
use smf_reader::prelude::*;

let bytes = [
    b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 0, 0, 1, 0, 96,
    b'M', b'T', b'r', b'k', 0, 0, 0, 12,
    0x00, 0x90, 0x3C, 0x64, // note on, middle C
    0x60, 0x3C, 0x00,       // running status: note on, velocity 0
    0x00, 0xFF, 0x2F, 0x00, // end of track
    0x00,
];
// the chunk is one byte too long for its events
let err = MidiFile::parse(&bytes[..]).unwrap_err();
assert!(matches!(err.parse_kind(), Some(ParseError::ChunkLengthMismatch { .. })));

let options = ParseOptions::new().check_chunk_length(false);
let file = MidiFile::parse_with(&bytes[..], options).unwrap();
let track = &file.tracks()[0];
assert_eq!(track.len(), 3);
assert_eq!(track.events()[1].delta_time(), 96);
```

# Layout
- [`reader`]: the byte cursor, the running status [`EventDecoder`](reader::EventDecoder), and errors
- [`vlq`]: variable length quantities
- [`message::channel`]: channel events and their decoder registry
- [`file::meta`]: meta events and their decoder registry
- [`file`]: file and track chunks
"#]
#![no_std]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod error;
pub use error::*;

pub mod events;

pub mod file;

pub mod message;

mod options;
pub use options::*;

pub mod prelude;

pub mod reader;

pub mod vlq;

pub use events::{Event, TrackEvent};
pub use file::{MidiFile, Track};
