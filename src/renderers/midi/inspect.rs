//! Read-back of Standard MIDI Files
//!
//! Decodes SMF bytes with `midly` and reports what a preview player needs to
//! show: title, tempo, instrument, note count and running time.

use midly::{Format, MetaMessage, MidiMessage, Smf, Timing, TrackEventKind};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("invalid MIDI data: {0}")]
    Midi(#[from] midly::Error),

    #[error("unsupported MIDI file: {0}")]
    Unsupported(String),
}

/// Overview of a decoded MIDI file
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MidiSummary {
    /// SMF format (0, 1 or 2)
    pub format: u16,
    pub track_count: usize,
    pub ticks_per_quarter: u16,
    pub track_name: Option<String>,
    pub copyright: Option<String>,
    /// First tempo meta-event, microseconds per quarter note
    pub tempo_micros: Option<u32>,
    /// First program change
    pub program: Option<u8>,
    /// Note-on events with non-zero velocity
    pub note_count: usize,
    /// Length of the longest track in ticks
    pub total_ticks: u64,
}

impl MidiSummary {
    pub fn bpm(&self) -> Option<f64> {
        match self.tempo_micros {
            Some(micros) if micros > 0 => Some(60_000_000.0 / micros as f64),
            _ => None,
        }
    }

    /// Playing time, assuming the first tempo holds throughout
    pub fn duration_seconds(&self) -> Option<f64> {
        let micros = self.tempo_micros?;
        let quarters = self.total_ticks as f64 / self.ticks_per_quarter as f64;
        Some(quarters * micros as f64 / 1_000_000.0)
    }
}

/// Decode `bytes` and summarize them
pub fn summarize_midi(bytes: &[u8]) -> Result<MidiSummary, InspectError> {
    let smf = Smf::parse(bytes)?;

    let ticks_per_quarter = match smf.header.timing {
        Timing::Metrical(tpq) => tpq.as_int(),
        Timing::Timecode(fps, sub) => {
            return Err(InspectError::Unsupported(format!(
                "timecode division ({:?}, {} subframes)",
                fps, sub
            )))
        }
    };

    let format = match smf.header.format {
        Format::SingleTrack => 0,
        Format::Parallel => 1,
        Format::Sequential => 2,
    };

    let mut summary = MidiSummary {
        format,
        track_count: smf.tracks.len(),
        ticks_per_quarter,
        track_name: None,
        copyright: None,
        tempo_micros: None,
        program: None,
        note_count: 0,
        total_ticks: 0,
    };

    for track in &smf.tracks {
        let mut ticks = 0u64;
        for event in track {
            ticks += u64::from(event.delta.as_int());
            match event.kind {
                TrackEventKind::Meta(MetaMessage::TrackName(name)) => {
                    summary
                        .track_name
                        .get_or_insert_with(|| String::from_utf8_lossy(name).into_owned());
                }
                TrackEventKind::Meta(MetaMessage::Copyright(text)) => {
                    summary
                        .copyright
                        .get_or_insert_with(|| String::from_utf8_lossy(text).into_owned());
                }
                TrackEventKind::Meta(MetaMessage::Tempo(micros)) => {
                    summary.tempo_micros.get_or_insert(micros.as_int());
                }
                TrackEventKind::Midi { message: MidiMessage::ProgramChange { program }, .. } => {
                    summary.program.get_or_insert(program.as_int());
                }
                TrackEventKind::Midi { message: MidiMessage::NoteOn { vel, .. }, .. }
                    if vel.as_int() > 0 =>
                {
                    summary.note_count += 1;
                }
                _ => {}
            }
        }
        summary.total_ticks = summary.total_ticks.max(ticks);
    }

    log::debug!("summarized MIDI file: {:?}", summary);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_rtttl;
    use crate::renderers::midi::tune_to_midi;

    #[test]
    fn test_summarize_encoded_tune() {
        let tune = parse_rtttl("Scale:d=8,o=5,b=120:c,d,e,f,4p,g").unwrap();
        let summary = summarize_midi(&tune_to_midi(&tune, 19)).unwrap();

        assert_eq!(summary.format, 0);
        assert_eq!(summary.track_count, 1);
        assert_eq!(summary.ticks_per_quarter, 384);
        assert_eq!(summary.track_name.as_deref(), Some("Scale"));
        assert_eq!(summary.copyright.as_deref(), Some("(c)2024 Emily Johnson"));
        assert_eq!(summary.tempo_micros, Some(500_000));
        assert_eq!(summary.bpm(), Some(120.0));
        assert_eq!(summary.program, Some(19));
        assert_eq!(summary.note_count, 5);
        // five eighths plus a quarter rest
        assert_eq!(summary.total_ticks, 5 * 192 + 384);
        assert_eq!(summary.duration_seconds(), Some(1.75));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            summarize_midi(b"not a midi file"),
            Err(InspectError::Midi(_))
        ));
    }
}
