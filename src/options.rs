#![doc = r#"
Knobs for how strictly a file is decoded

```rust
# use smf_reader::prelude::*;
let options = ParseOptions::new()
    .check_chunk_length(false)
    .sysex(SysExHandling::Decode);
assert!(!options.checks_chunk_length());
```
"#]

/// What to do with system exclusive (`F0`/`F7`) events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SysExHandling {
    /// Fail with [`ParseError::UnsupportedEvent`](crate::ParseError::UnsupportedEvent)
    #[default]
    Reject,
    /// Read the length prefixed payload into a [`SysExEvent`](crate::events::SysExEvent)
    Decode,
}

/// Options threaded through file and track decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseOptions {
    check_chunk_length: bool,
    skip_unknown_chunks: bool,
    sysex: SysExHandling,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseOptions {
    /// The strict defaults: chunk lengths are checked, unknown chunks and sysex rejected.
    pub const fn new() -> Self {
        Self {
            check_chunk_length: true,
            skip_unknown_chunks: false,
            sysex: SysExHandling::Reject,
        }
    }

    /// Require the events of a track to consume exactly the chunk's declared length.
    ///
    /// When disabled, decoding of the next chunk starts right after the end of track event.
    pub const fn check_chunk_length(mut self, check: bool) -> Self {
        self.check_chunk_length = check;
        self
    }

    /// Skip chunks that are neither `MThd` nor `MTrk` instead of failing.
    pub const fn skip_unknown_chunks(mut self, skip: bool) -> Self {
        self.skip_unknown_chunks = skip;
        self
    }

    /// Choose how system exclusive events are handled.
    pub const fn sysex(mut self, handling: SysExHandling) -> Self {
        self.sysex = handling;
        self
    }

    /// See [`Self::check_chunk_length`]
    pub const fn checks_chunk_length(&self) -> bool {
        self.check_chunk_length
    }

    /// See [`Self::skip_unknown_chunks`]
    pub const fn skips_unknown_chunks(&self) -> bool {
        self.skip_unknown_chunks
    }

    /// See [`Self::sysex`]
    pub const fn sysex_handling(&self) -> SysExHandling {
        self.sysex
    }
}
