use num_enum::{IntoPrimitive, TryFromPrimitive};

#[doc = r#"
One of the sixteen MIDI channels.

Channels are numbered from one for humans and from zero on the wire.

# Example
```rust
# use smf_reader::prelude::*;
let channel = Channel::from_status(0x9A);
assert_eq!(channel, Channel::Eleven);
assert_eq!(channel.to_byte(), 10);
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Channel {
    One = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
    Twelve,
    Thirteen,
    Fourteen,
    Fifteen,
    Sixteen,
}

impl Channel {
    /// Extracts the channel from the low nibble of a status byte.
    pub const fn from_status(status: u8) -> Self {
        use Channel::*;
        match status & 0x0F {
            0 => One,
            1 => Two,
            2 => Three,
            3 => Four,
            4 => Five,
            5 => Six,
            6 => Seven,
            7 => Eight,
            8 => Nine,
            9 => Ten,
            10 => Eleven,
            11 => Twelve,
            12 => Thirteen,
            13 => Fourteen,
            14 => Fifteen,
            _ => Sixteen,
        }
    }

    /// The zero-based wire value, `0..=15`.
    pub const fn to_byte(self) -> u8 {
        self as u8
    }
}

#[test]
fn every_nibble_maps_back() {
    for byte in 0..16u8 {
        let channel = Channel::from_status(0xB0 | byte);
        assert_eq!(channel.to_byte(), byte);
        assert_eq!(Channel::try_from(byte).ok(), Some(channel));
    }
    assert!(Channel::try_from(16).is_err());
}
