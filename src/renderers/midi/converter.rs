//! Tune-to-MIDI conversion
//!
//! Writes a format 0 Standard MIDI File with one track: copyright, track
//! name, channel volume, tempo and program, then a note-on/note-off pair per
//! sounding note. Rests emit nothing; their length is carried into the delta
//! time of the next note-on.

use crate::models::{Duration, Note, Pitch, Tune};

use super::defaults::{CHANNEL, CHANNEL_VOLUME, COPYRIGHT, DIVISION, NOTE_ON_VELOCITY};
use super::smf::{write_header_chunk, write_track_chunk, TrackWriter, CONTROLLER_VOLUME};

/// Length of a note in ticks at `DIVISION` ticks per quarter
///
/// A dot adds half the base length, using integer division.
pub fn ticks_for(duration: Duration, dotted: bool) -> u32 {
    let base = DIVISION as u32 * 4 / duration.denominator() as u32;
    if dotted {
        base + base / 2
    } else {
        base
    }
}

/// MIDI key number for a pitch in an RTTTL octave, `None` for rests
///
/// `key = 12 + 12 * (octave - 1) + semitone`, so C4 is 48 and A4 is 57.
pub fn midi_key(pitch: Pitch, octave: u8) -> Option<u8> {
    let semitone = pitch.semitone()?;
    let octave = u32::from(octave).saturating_sub(1);
    Some((12 + 12 * octave + u32::from(semitone)) as u8)
}

/// Encode a parsed tune as SMF bytes
///
/// `program` goes out unchecked; values above 127 make a non-conformant
/// program-change event.
pub fn tune_to_midi(tune: &Tune, program: u8) -> Vec<u8> {
    let mut track = TrackWriter::new();

    track.copyright(COPYRIGHT);
    track.track_name(&tune.name);
    track.control_change(0, CHANNEL, CONTROLLER_VOLUME, CHANNEL_VOLUME);
    track.tempo(tune.defaults.bpm);
    track.program_change(0, CHANNEL, program);
    write_notes(&tune.notes, &mut track);
    track.end_of_track();

    let events = track.into_bytes();
    let mut out = Vec::with_capacity(14 + 8 + events.len());
    write_header_chunk(0, 1, DIVISION, &mut out);
    write_track_chunk(&events, &mut out);

    log::debug!(
        "encoded {:?}: {} notes, program {}, {} bytes",
        tune.name,
        tune.notes.len(),
        program,
        out.len()
    );
    out
}

fn write_notes(notes: &[Note], track: &mut TrackWriter) {
    let mut pending_rest = 0u32;

    for note in notes {
        let ticks = ticks_for(note.duration, note.dotted);
        match midi_key(note.pitch, note.octave) {
            None => pending_rest += ticks,
            Some(key) => {
                track.note_on(pending_rest, CHANNEL, key, NOTE_ON_VELOCITY);
                track.note_off(ticks, CHANNEL, key, 0);
                pending_rest = 0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Defaults;

    fn note(duration: Duration, pitch: Pitch, dotted: bool, octave: u8) -> Note {
        Note { duration, pitch, dotted, octave }
    }

    #[test]
    fn test_ticks_table() {
        assert_eq!(ticks_for(Duration::Whole, false), 1536);
        assert_eq!(ticks_for(Duration::Half, false), 768);
        assert_eq!(ticks_for(Duration::Quarter, false), 384);
        assert_eq!(ticks_for(Duration::Eighth, false), 192);
        assert_eq!(ticks_for(Duration::Sixteenth, false), 96);
        assert_eq!(ticks_for(Duration::ThirtySecond, false), 48);
    }

    #[test]
    fn test_dotted_ticks() {
        assert_eq!(ticks_for(Duration::Quarter, true), 576);
        assert_eq!(ticks_for(Duration::Whole, true), 2304);
        assert_eq!(ticks_for(Duration::ThirtySecond, true), 72);
    }

    #[test]
    fn test_midi_keys() {
        assert_eq!(midi_key(Pitch::C, 4), Some(48));
        assert_eq!(midi_key(Pitch::A, 4), Some(57));
        assert_eq!(midi_key(Pitch::C, 5), Some(60));
        assert_eq!(midi_key(Pitch::B, 7), Some(95));
        assert_eq!(midi_key(Pitch::Rest, 5), None);
    }

    #[test]
    fn test_rests_fold_into_next_delta() {
        let tune = Tune {
            name: String::new(),
            defaults: Defaults::default(),
            notes: vec![
                note(Duration::Quarter, Pitch::Rest, false, 5),
                note(Duration::Eighth, Pitch::Rest, true, 5),
                note(Duration::Quarter, Pitch::C, false, 5),
                note(Duration::Quarter, Pitch::D, false, 5),
            ],
        };
        let mut track = TrackWriter::new();
        write_notes(&tune.notes, &mut track);
        assert_eq!(
            track.into_bytes(),
            vec![
                0x85, 0x20, 0x90, 60, 100, // 384 + 288 = 672 ticks of rest
                0x83, 0x00, 0x80, 60, 0,
                0x00, 0x90, 62, 100,
                0x83, 0x00, 0x80, 62, 0,
            ]
        );
    }

    #[test]
    fn test_trailing_rest_is_dropped() {
        let mut track = TrackWriter::new();
        write_notes(&[note(Duration::Whole, Pitch::Rest, false, 6)], &mut track);
        assert!(track.is_empty());
    }

    #[test]
    fn test_empty_tune_layout() {
        let bytes = tune_to_midi(&Tune::default(), 0);
        let parts: [&[u8]; 7] = [
            &[0x00, 0xFF, 0x02, 21],
            COPYRIGHT.as_bytes(),
            &[0x00, 0xFF, 0x03, 0x00],
            &[0x00, 0xB0, 0x07, 0x7F],
            &[0x00, 0xFF, 0x51, 0x03, 0x0E, 0x88, 0x3C], // 952380 us for 63 BPM
            &[0x00, 0xC0, 0x00],
            &[0x00, 0xFF, 0x2F, 0x00],
        ];
        let expected_track = parts.concat();

        assert_eq!(&bytes[..14], &[0x4D, 0x54, 0x68, 0x64, 0, 0, 0, 6, 0, 0, 0, 1, 0x01, 0x80]);
        assert_eq!(&bytes[14..18], b"MTrk");
        assert_eq!(&bytes[18..22], &(expected_track.len() as u32).to_be_bytes());
        assert_eq!(&bytes[22..], &expected_track[..]);
    }
}
