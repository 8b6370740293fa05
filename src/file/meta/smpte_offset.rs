#![doc = r#"
SMPTE Offset - the time code at which a track is supposed to start

# Format

```text
FF 54 05 hr mn se fr ff
```

- `hr`: `0rrhhhhh`, frame rate in bits 5-6, hours in bits 0-4
- `mn`: minutes (0-59)
- `se`: seconds (0-59)
- `fr`: frames (range depends on the frame rate)
- `ff`: fractional frames in 100ths of a frame (0-99)

The offset is stored exactly as read. [`SmpteOffset::validate`] checks the
ranges and unpacks the frame rate.
"#]

use crate::{SmpteError, file::SmpteFps};

/// The five raw bytes of an SMPTE offset meta event.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmpteOffset {
    /// Frame rate bits and hours, `0rrhhhhh`
    pub hours: u8,
    /// Minute component of the time code (0-59).
    pub minutes: u8,
    /// Second component of the time code (0-59).
    pub seconds: u8,
    /// Frame number within the current second.
    ///
    /// Valid range depends on the frame rate:
    /// - 24 fps: 0-23
    /// - 25 fps: 0-24
    /// - 29.97 fps: 0-29 (with drop-frame rules)
    /// - 30 fps: 0-29
    pub fps: u8,
    /// Subframe component, in 100ths of a frame (0-99).
    pub fractional_frames: u8,
}

impl SmpteOffset {
    /// Build from the five payload bytes.
    pub const fn from_bytes(bytes: [u8; 5]) -> Self {
        Self {
            hours: bytes[0],
            minutes: bytes[1],
            seconds: bytes[2],
            fps: bytes[3],
            fractional_frames: bytes[4],
        }
    }

    /// The hour, with the frame rate bits masked off.
    pub const fn hour(&self) -> u8 {
        self.hours & 0b0001_1111
    }

    /// The frame rate encoded in bits 5-6 of the hour byte.
    ///
    /// - `00`: 24 fps
    /// - `01`: 25 fps
    /// - `10`: 29.97 fps (drop frame)
    /// - `11`: 30 fps
    pub const fn frame_rate(&self) -> Result<SmpteFps, SmpteError> {
        // 0 rr hhhhh
        match self.hours >> 5 {
            0 => Ok(SmpteFps::TwentyFour),
            1 => Ok(SmpteFps::TwentyFive),
            2 => Ok(SmpteFps::TwentyNine),
            3 => Ok(SmpteFps::Thirty),
            v => Err(SmpteError::TrackFrame(v)),
        }
    }

    /// Checks every field against its range, returning the frame rate.
    ///
    /// # Errors
    /// - `SmpteError::TrackFrame` if the frame rate bits are invalid
    /// - `SmpteError::HourOffset` if hours > 23
    /// - `SmpteError::MinuteOffset` if minutes > 59
    /// - `SmpteError::SecondOffset` if seconds > 59
    /// - `SmpteError::Subframe` if fractional frames > 99
    pub const fn validate(&self) -> Result<SmpteFps, SmpteError> {
        let fps = match self.frame_rate() {
            Ok(fps) => fps,
            Err(e) => return Err(e),
        };
        if self.hour() > 23 {
            return Err(SmpteError::HourOffset(self.hour()));
        }
        if self.minutes > 59 {
            return Err(SmpteError::MinuteOffset(self.minutes));
        }
        if self.seconds > 59 {
            return Err(SmpteError::SecondOffset(self.seconds));
        }
        if self.fractional_frames > 99 {
            return Err(SmpteError::Subframe(self.fractional_frames));
        }
        Ok(fps)
    }

    /// The offset in microseconds, using the encoded frame rate.
    pub fn as_micros(&self) -> Result<f64, SmpteError> {
        let fps = self.validate()?;
        Ok(self.as_micros_with_override(fps))
    }

    /// The offset in microseconds using `fps` instead of the encoded rate.
    ///
    /// Useful when the file header's SMPTE rate should win over the track's.
    pub fn as_micros_with_override(&self, fps: SmpteFps) -> f64 {
        let whole_seconds =
            self.hour() as u64 * 3600 + self.minutes as u64 * 60 + self.seconds as u64;
        (whole_seconds * 1_000_000) as f64
            + (self.fps as u64 * 1_000_000) as f64 / fps.as_f64()
            + (self.fractional_frames as u32 * 10_000) as f64 / fps.as_f64()
    }
}

#[test]
fn parse_smpte_offset() {
    use pretty_assertions::assert_eq;
    // the bytes after 00 FF 54 05
    let offset = SmpteOffset::from_bytes([0x41, 0x17, 0x2D, 0x0C, 0x22]);

    assert_eq!(offset.validate(), Ok(SmpteFps::TwentyNine));
    assert_eq!(offset.hour(), 1);
    assert_eq!(offset.minutes, 23);
    assert_eq!(offset.seconds, 45);
    assert_eq!(offset.fps, 12);
    assert_eq!(offset.fractional_frames, 34);
}

#[test]
fn parse_invalid_smpte_offset() {
    use pretty_assertions::assert_eq;
    let offset = SmpteOffset::from_bytes([0x7F, 0x17, 0x2D, 0x0C, 0x22]);
    assert_eq!(offset.validate(), Err(SmpteError::HourOffset(31)));

    let offset = SmpteOffset::from_bytes([0x41, 0x50, 0x2D, 0x0C, 0x22]);
    assert_eq!(offset.validate(), Err(SmpteError::MinuteOffset(80)));

    let offset = SmpteOffset::from_bytes([0x81, 0x00, 0x00, 0x00, 0x00]);
    assert_eq!(offset.frame_rate(), Err(SmpteError::TrackFrame(4)));
}

#[test]
fn offset_in_micros() {
    use pretty_assertions::assert_eq;
    // 25 fps, 00:00:01, 5 frames, 50 subframes
    let offset = SmpteOffset::from_bytes([0x20, 0x00, 0x01, 0x05, 0x32]);
    assert_eq!(offset.as_micros(), Ok(1_000_000. + 200_000. + 20_000.));
}
