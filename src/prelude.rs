#![doc = r#"
Everything needed to decode a file and inspect its events
"#]

pub use crate::{
    HeaderError, ParseError, ParseOptions, SmpteError, SysExHandling, TextDecodeError,
    events::{Event, SysExEvent, TrackEvent},
    file::{
        FileDecoder, FormatType, MidiFile, MidiFileHeader, SmpteFps, SmpteHeader, Timing,
        Track, TrackDecoder,
        meta::{KeySignature, MetaEvent, MetaType, SmpteOffset, Tempo, TimeSignature},
    },
    message::channel::{Channel, ChannelEvent, ChannelMessage, ChannelStatus},
    reader::{EventDecoder, MidiSource, ReadResult, Reader, ReaderError, ReaderErrorKind},
};

#[cfg(feature = "std")]
pub use crate::file::LoadError;
