//! Standard MIDI File byte primitives
//!
//! Big-endian chunk fields, variable-length delta times and the handful of
//! channel and meta events a single-track ringtone file needs. Events are
//! written without running status.

use super::defaults::MICROS_PER_MINUTE;

const HEADER_MAGIC: &[u8; 4] = b"MThd";
const TRACK_MAGIC: &[u8; 4] = b"MTrk";
const HEADER_LENGTH: u32 = 6;

// Channel message status nibbles
const NOTE_OFF: u8 = 0x80;
const NOTE_ON: u8 = 0x90;
const CONTROL_CHANGE: u8 = 0xB0;
const PROGRAM_CHANGE: u8 = 0xC0;

// Meta event types
const META: u8 = 0xFF;
const META_COPYRIGHT: u8 = 0x02;
const META_TRACK_NAME: u8 = 0x03;
const META_END_OF_TRACK: u8 = 0x2F;
const META_TEMPO: u8 = 0x51;

/// Controller number for channel volume
pub const CONTROLLER_VOLUME: u8 = 0x07;

/// Append `value` as a MIDI variable-length quantity
///
/// Seven bits per byte, most significant group first, with the high bit set
/// on every byte except the last.
pub fn write_var_len(value: u32, out: &mut Vec<u8>) {
    let mut groups = [0u8; 5];
    let mut count = 0;
    let mut rest = value;
    loop {
        groups[count] = (rest & 0x7F) as u8;
        count += 1;
        rest >>= 7;
        if rest == 0 {
            break;
        }
    }
    for i in (0..count).rev() {
        let continuation = if i > 0 { 0x80 } else { 0x00 };
        out.push(groups[i] | continuation);
    }
}

/// Append the `MThd` chunk
pub fn write_header_chunk(format: u16, tracks: u16, division: u16, out: &mut Vec<u8>) {
    out.extend_from_slice(HEADER_MAGIC);
    out.extend_from_slice(&HEADER_LENGTH.to_be_bytes());
    out.extend_from_slice(&format.to_be_bytes());
    out.extend_from_slice(&tracks.to_be_bytes());
    out.extend_from_slice(&division.to_be_bytes());
}

/// Append an `MTrk` chunk wrapping an already encoded event stream
pub fn write_track_chunk(events: &[u8], out: &mut Vec<u8>) {
    out.extend_from_slice(TRACK_MAGIC);
    out.extend_from_slice(&(events.len() as u32).to_be_bytes());
    out.extend_from_slice(events);
}

/// Microseconds per quarter note for a tempo in BPM, truncated to 24 bits
///
/// A zero BPM yields zero rather than dividing by zero.
pub fn tempo_micros(bpm: u32) -> u32 {
    MICROS_PER_MINUTE.checked_div(bpm).unwrap_or(0) & 0x00FF_FFFF
}

/// Accumulates the event stream of one track
#[derive(Debug, Default)]
pub struct TrackWriter {
    data: Vec<u8>,
}

impl TrackWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Channel event: delta time, status | channel, data bytes
    pub fn midi_event(&mut self, delta: u32, status: u8, channel: u8, data: &[u8]) {
        write_var_len(delta, &mut self.data);
        self.data.push(status | channel);
        self.data.extend_from_slice(data);
    }

    /// Text meta-event at delta 0 with a single length byte
    ///
    /// Each UTF-16 unit contributes its low byte and the length byte wraps
    /// past 255; plain ASCII text under 256 bytes is written unchanged.
    fn meta_text(&mut self, kind: u8, text: &str) {
        let bytes: Vec<u8> = text.encode_utf16().map(|unit| unit as u8).collect();
        self.data.extend_from_slice(&[0x00, META, kind, bytes.len() as u8]);
        self.data.extend_from_slice(&bytes);
    }

    pub fn copyright(&mut self, text: &str) {
        self.meta_text(META_COPYRIGHT, text);
    }

    pub fn track_name(&mut self, name: &str) {
        self.meta_text(META_TRACK_NAME, name);
    }

    pub fn control_change(&mut self, delta: u32, channel: u8, controller: u8, value: u8) {
        self.midi_event(delta, CONTROL_CHANGE, channel, &[controller, value]);
    }

    /// Tempo meta-event at delta 0
    pub fn tempo(&mut self, bpm: u32) {
        let micros = tempo_micros(bpm);
        self.data.extend_from_slice(&[0x00, META, META_TEMPO, 0x03]);
        self.data.extend_from_slice(&micros.to_be_bytes()[1..]);
    }

    pub fn program_change(&mut self, delta: u32, channel: u8, program: u8) {
        self.midi_event(delta, PROGRAM_CHANGE, channel, &[program]);
    }

    pub fn note_on(&mut self, delta: u32, channel: u8, key: u8, velocity: u8) {
        self.midi_event(delta, NOTE_ON, channel, &[key, velocity]);
    }

    pub fn note_off(&mut self, delta: u32, channel: u8, key: u8, velocity: u8) {
        self.midi_event(delta, NOTE_OFF, channel, &[key, velocity]);
    }

    pub fn end_of_track(&mut self) {
        self.data.extend_from_slice(&[0x00, META, META_END_OF_TRACK, 0x00]);
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}
