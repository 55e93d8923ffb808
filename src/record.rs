// src/record.rs

use serde::Serialize;

/// One observed game. Constructed fresh on every extraction pass and never
/// mutated afterwards; sinks consume the full list once per run.
///
/// Field order matters for the JSON sink: it mirrors the column order of the
/// tabular sink, with the raw fragment appended for audit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameRecord {
    /// Display-form date from the enclosing section heading. Opaque grouping
    /// key, never parsed into a calendar type.
    pub date: String,
    /// Away team, by convention.
    pub team1: Option<String>,
    /// Home team.
    pub team2: Option<String>,
    pub score1: Option<u32>,
    pub score2: Option<u32>,
    /// Start time, present only for upcoming games.
    pub time: Option<String>,
    /// `None` means regular season.
    pub game_type: Option<String>,
    /// Original markup fragment, kept for debugging/audit.
    pub raw_html: String,
    /// Flattened human-readable text of the fragment.
    pub text_content: String,
}

impl GameRecord {
    /// Both scores present ⇒ the game has been played.
    pub fn is_completed(&self) -> bool {
        self.score1.is_some() && self.score2.is_some()
    }
}
