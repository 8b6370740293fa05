#![doc = r#"
Messages that travel on a MIDI channel
"#]

pub mod channel;
