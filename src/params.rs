// src/params.rs
use std::path::PathBuf;

pub const DEFAULT_HTML_FILE: &str = "html/MLB-schedule.shtml";
pub const DEFAULT_CSV_FILE: &str = "mlb_schedule_all_games.csv";
pub const DEFAULT_JSON_FILE: &str = "mlb_schedule_all_games.json";
pub const DEFAULT_ODDS_FILE: &str = "odds/march18odds";
pub const DEFAULT_ODDS_CSV: &str = "odds/march18odds.csv";
pub const DEFAULT_WINPROB_FILE: &str = "espn/guardians-mets.html";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Schedule,
    Odds,
    WinProb,
    Day,
}

#[derive(Clone)]
pub struct Params {
    pub page: PageKind,            // which snapshot to read
    pub update: bool,              // extract only when the source changed
    pub force: bool,               // extract even when it hasn't
    pub html_file: Option<PathBuf>,// source document override
    pub csv_file: Option<PathBuf>, // tabular sink override
    pub json_file: Option<PathBuf>,// structured sink override
    pub date: Option<String>,      // day view target, e.g. "August 4, 2025"
    pub update_today: bool,        // rewrite the Today's Games section
}

impl Params {
    pub fn new() -> Self {
        Self {
            page: PageKind::Schedule,
            update: false,
            force: false,
            html_file: None,
            csv_file: None,
            json_file: None,
            date: None,
            update_today: false,
        }
    }

    /// Source document, defaulted per page kind.
    pub fn source(&self) -> PathBuf {
        self.html_file.clone().unwrap_or_else(|| {
            PathBuf::from(match self.page {
                PageKind::Schedule | PageKind::Day => DEFAULT_HTML_FILE,
                PageKind::Odds => DEFAULT_ODDS_FILE,
                PageKind::WinProb => DEFAULT_WINPROB_FILE,
            })
        })
    }

    pub fn csv_sink(&self) -> PathBuf {
        self.csv_file.clone().unwrap_or_else(|| {
            PathBuf::from(match self.page {
                PageKind::Odds => DEFAULT_ODDS_CSV,
                _ => DEFAULT_CSV_FILE,
            })
        })
    }

    pub fn json_sink(&self) -> PathBuf {
        self.json_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_JSON_FILE))
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
