#![doc = r#"
The events that make up a track

Every [`TrackEvent`] pairs a delta time with one [`Event`]. The event is one
of three families, picked by the status byte:

```text
0x80..=0xEF  channel event     (note on/off, controllers, ...)
0xFF         meta event        (tempo, text, end of track, ...)
0xF0, 0xF7   system exclusive  (raw blobs)
```
"#]

use crate::{
    file::meta::MetaEvent,
    message::channel::{Channel, ChannelEvent},
};
use alloc::vec::Vec;

/// One decoded event, without its timing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// A message on one of the sixteen channels
    Channel(ChannelEvent),
    /// A non-sounding meta event
    Meta(MetaEvent),
    /// A system exclusive blob
    SysEx(SysExEvent),
}

impl Event {
    /// True for the end of track meta event.
    pub const fn is_end_of_track(&self) -> bool {
        matches!(self, Self::Meta(MetaEvent::EndOfTrack))
    }

    /// The channel, for channel events.
    pub const fn channel(&self) -> Option<Channel> {
        match self {
            Self::Channel(c) => Some(c.channel()),
            _ => None,
        }
    }
}

impl From<ChannelEvent> for Event {
    fn from(value: ChannelEvent) -> Self {
        Self::Channel(value)
    }
}

impl From<MetaEvent> for Event {
    fn from(value: MetaEvent) -> Self {
        Self::Meta(value)
    }
}

impl From<SysExEvent> for Event {
    fn from(value: SysExEvent) -> Self {
        Self::SysEx(value)
    }
}

/// System exclusive data, only produced when decoding is enabled in
/// [`ParseOptions`](crate::ParseOptions).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SysExEvent {
    /// `F0 len data`. The leading `F0` is not part of `data`.
    SysEx(Vec<u8>),
    /// `F7 len data`, a continuation packet or an escaped raw message
    EscapeSequence(Vec<u8>),
}

impl SysExEvent {
    /// The raw payload
    pub fn data(&self) -> &[u8] {
        match self {
            Self::SysEx(d) | Self::EscapeSequence(d) => d,
        }
    }
}

#[doc = r#"
An [`Event`] and the ticks elapsed since the previous event of its track.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackEvent {
    delta_time: u32,
    event: Event,
}

impl TrackEvent {
    /// Create a new track event
    pub fn new(delta_time: u32, event: impl Into<Event>) -> Self {
        Self {
            delta_time,
            event: event.into(),
        }
    }

    /// Ticks since the previous event in the same track
    pub const fn delta_time(&self) -> u32 {
        self.delta_time
    }

    /// The event
    pub const fn event(&self) -> &Event {
        &self.event
    }

    /// Consumes the wrapper
    pub fn into_event(self) -> Event {
        self.event
    }

    /// True for the end of track meta event.
    pub const fn is_end_of_track(&self) -> bool {
        self.event.is_end_of_track()
    }
}
