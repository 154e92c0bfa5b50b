//! Parsing module for RTTTL ringtone text
//!
//! This module turns `name:controls:notes` text into a `Tune`,
//! reporting the first problem found as a `ParseError`.

pub mod controls;
pub mod error;
pub mod notes;
pub mod rtttl;

// Re-export commonly used types
pub use controls::parse_controls;
pub use error::ParseError;
pub use notes::{parse_note, parse_notes};
pub use rtttl::{parse_rtttl, parse_rtttl_with, ParseOptions};
