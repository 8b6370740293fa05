#[doc = r#"
A tempo change, stored as microseconds per quarter note in 24 bits.

# Example
```rust
# use smf_reader::prelude::*;
let tempo = Tempo::from_be_bytes([0x07, 0xA1, 0x20]);
assert_eq!(tempo.micros_per_quarter_note(), 500_000);
assert_eq!(tempo.bpm(), 120.);
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tempo(u32);

impl Default for Tempo {
    /// 120 beats per minute, the value assumed when a file sets none.
    fn default() -> Self {
        Self(500_000)
    }
}

impl Tempo {
    /// Create a tempo from microseconds per quarter note. Only the low 24 bits are kept.
    pub const fn new(micros_per_quarter_note: u32) -> Self {
        Self(micros_per_quarter_note & 0x00FF_FFFF)
    }

    /// Decode the three byte big-endian payload.
    pub const fn from_be_bytes(bytes: [u8; 3]) -> Self {
        Self(u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]]))
    }

    /// Microseconds per quarter note
    pub const fn micros_per_quarter_note(&self) -> u32 {
        self.0
    }

    /// Quarter notes per minute. A zero tempo yields infinity.
    pub fn bpm(&self) -> f64 {
        60_000_000. / self.0 as f64
    }
}
