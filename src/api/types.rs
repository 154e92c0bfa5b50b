//! Shared types for the WASM API
//!
//! JavaScript callers see a parse as a flat object with an error flag rather
//! than a `Result`; these types convert between the two shapes.

use serde::{Deserialize, Serialize};

use crate::models::{Defaults, Note, Tune};
use crate::parse::ParseError;

/// Parse result as handed to JavaScript
///
/// When `has_parse_error` is set the remaining fields hold an empty tune and
/// must not be encoded.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParseOutcome {
    pub name: String,
    pub defaults: Defaults,
    pub notes: Vec<Note>,
    pub has_parse_error: bool,
    pub parse_error_message: String,
}

impl From<Result<Tune, ParseError>> for ParseOutcome {
    fn from(result: Result<Tune, ParseError>) -> Self {
        match result {
            Ok(tune) => Self {
                name: tune.name,
                defaults: tune.defaults,
                notes: tune.notes,
                has_parse_error: false,
                parse_error_message: String::new(),
            },
            Err(err) => Self {
                name: String::new(),
                defaults: Defaults::default(),
                notes: Vec::new(),
                has_parse_error: true,
                parse_error_message: err.to_string(),
            },
        }
    }
}

impl ParseOutcome {
    /// Recover the tune, or the error message if parsing failed
    pub fn into_tune(self) -> Result<Tune, String> {
        if self.has_parse_error {
            return Err(self.parse_error_message);
        }
        Ok(Tune {
            name: self.name,
            defaults: self.defaults,
            notes: self.notes,
        })
    }
}
