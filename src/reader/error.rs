use crate::ParseError;
use core::fmt;
use thiserror::Error;

#[doc = r#"
An error produced while decoding a MIDI buffer.

Carries the absolute byte offset where decoding stopped and, once the error
has bubbled through the track loop, which track and event were being decoded.
"#]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Reading at Position {position}{context}, {kind}")]
pub struct ReaderError {
    position: usize,
    context: ErrorContext,
    pub(crate) kind: ReaderErrorKind,
}

/// A kind of error that a reader can produce
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReaderErrorKind {
    /// Parsing errors
    #[error("Parsing {0}")]
    Parse(#[from] ParseError),
    /// The buffer ended in the middle of a field.
    #[error("Input truncated!")]
    TruncatedInput,
}

/// Where in the file an error happened, beyond the byte offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Zero-based index of the track chunk being decoded
    pub track: Option<usize>,
    /// Zero-based index of the event within that track
    pub event: Option<usize>,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.track, self.event) {
            (Some(track), Some(event)) => write!(f, " (track {track}, event {event})"),
            (Some(track), None) => write!(f, " (track {track})"),
            (None, Some(event)) => write!(f, " (event {event})"),
            (None, None) => Ok(()),
        }
    }
}

impl ReaderError {
    /// Create a reader error from a position and kind
    pub const fn new(position: usize, kind: ReaderErrorKind) -> Self {
        Self {
            position,
            context: ErrorContext {
                track: None,
                event: None,
            },
            kind,
        }
    }

    /// Create a new parse error
    pub const fn parse_error(position: usize, error: ParseError) -> Self {
        Self::new(position, ReaderErrorKind::Parse(error))
    }

    /// Create a new truncated input error
    pub const fn truncated(position: usize) -> Self {
        Self::new(position, ReaderErrorKind::TruncatedInput)
    }

    /// Attach the index of the track being decoded. An index that is already set wins.
    pub fn in_track(mut self, track: usize) -> Self {
        self.context.track.get_or_insert(track);
        self
    }

    /// Attach the index of the event being decoded. An index that is already set wins.
    pub fn in_event(mut self, event: usize) -> Self {
        self.context.event.get_or_insert(event);
        self
    }

    /// True if the buffer ended mid-field.
    pub const fn is_truncated(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::TruncatedInput)
    }

    /// Returns the error kind of the reader.
    pub fn error_kind(&self) -> &ReaderErrorKind {
        &self.kind
    }

    /// Returns the parse error, if this is not a truncation.
    pub fn parse_kind(&self) -> Option<&ParseError> {
        match &self.kind {
            ReaderErrorKind::Parse(e) => Some(e),
            ReaderErrorKind::TruncatedInput => None,
        }
    }

    /// Returns the position where the read error occurred.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the track/event context of the error.
    pub fn context(&self) -> ErrorContext {
        self.context
    }
}

/// The Read Result type (see [`ReaderError`])
pub type ReadResult<T> = Result<T, ReaderError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_includes_context() {
        let err = ReaderError::parse_error(42, ParseError::UnknownMetaType(0x7E))
            .in_event(3)
            .in_track(1);
        assert_eq!(
            err.to_string(),
            "Reading at Position 42 (track 1, event 3), Parsing Unknown meta event type 0x7E"
        );
        assert_eq!(
            ReaderError::truncated(7).to_string(),
            "Reading at Position 7, Input truncated!"
        );
    }

    #[test]
    fn innermost_context_wins() {
        let err = ReaderError::truncated(0).in_track(2).in_track(5);
        assert_eq!(err.context().track, Some(2));
        assert_eq!(err.context().event, None);
    }
}
