//! Fuzz inbound envelope decoding: arbitrary bytes must either parse into a
//! well-formed event envelope or fail with a decode error, never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use synlink_proto::EventEnvelope;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = EventEnvelope::decode(text);
    }
});
