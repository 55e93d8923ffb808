// src/file.rs
//
// Sink writers. Two independent serializations of the same record list:
// a flat CSV with a fixed column set, and a JSON document keeping every
// field (raw fragment included) verbatim.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::sanitize::clean_text;
use crate::csv;
use crate::error::Result;
use crate::record::GameRecord;
use crate::scrape::odds::OddsRow;

pub const SCHEDULE_COLUMNS: [&str; 8] = [
    "date", "team1", "team2", "score1", "score2", "time", "game_type", "text_content",
];

pub const ODDS_COLUMNS: [&str; 7] = [
    "date", "team1", "team2", "pitcher1", "pitcher2", "away_odds", "home_odds",
];

/// Write the tabular sink. Returns the number of rows written; an empty
/// record list writes nothing and returns 0 (runner reports it).
pub fn save_to_csv(games: &[GameRecord], path: &Path) -> Result<usize> {
    if games.is_empty() {
        return Ok(0);
    }
    let mut out = create_buffered(path)?;
    csv::write_header(&mut out, &SCHEDULE_COLUMNS)?;
    for g in games {
        csv::write_row(&mut out, &schedule_row(g))?;
    }
    out.flush()?;
    Ok(games.len())
}

/// Write the structured sink: pretty-printed, UTF-8, non-ASCII unescaped
/// (serde_json's default). Empty list ⇒ no file.
pub fn save_to_json(games: &[GameRecord], path: &Path) -> Result<usize> {
    if games.is_empty() {
        return Ok(0);
    }
    ensure_parent(path)?;
    let body = serde_json::to_string_pretty(games)?;
    fs::write(path, body)?;
    Ok(games.len())
}

pub fn save_odds_csv(rows: &[OddsRow], path: &Path) -> Result<usize> {
    if rows.is_empty() {
        return Ok(0);
    }
    let mut out = create_buffered(path)?;
    csv::write_header(&mut out, &ODDS_COLUMNS)?;
    for r in rows {
        csv::write_row(&mut out, &r.to_row())?;
    }
    out.flush()?;
    Ok(rows.len())
}

/* ---------------- helpers ---------------- */

fn schedule_row(g: &GameRecord) -> Vec<String> {
    vec![
        g.date.clone(),
        g.team1.clone().unwrap_or_default(),
        g.team2.clone().unwrap_or_default(),
        g.score1.map(|v| v.to_string()).unwrap_or_default(),
        g.score2.map(|v| v.to_string()).unwrap_or_default(),
        g.time.clone().unwrap_or_default(),
        g.game_type.clone().unwrap_or_default(),
        clean_text(&g.text_content),
    ]
}

fn create_buffered(path: &Path) -> Result<BufWriter<File>> {
    ensure_parent(path)?;
    Ok(BufWriter::new(File::create(path)?))
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn tmp(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("mlb_file_{name}"))
    }

    fn sample() -> GameRecord {
        GameRecord {
            date: s!("August 4, 2025"),
            team1: Some(s!("Guardians")),
            team2: Some(s!("Mets")),
            score1: Some(3),
            score2: Some(5),
            time: None,
            game_type: None,
            raw_html: s!(r#"<p class="game">Guardians (3) @ Mets (5)</p>"#),
            text_content: s!("\n Guardians\n (3)\n @\n Mets\n (5)\n "),
        }
    }

    #[test]
    fn empty_list_writes_nothing() {
        let p = tmp("empty.csv");
        let _ = fs::remove_file(&p);
        assert_eq!(save_to_csv(&[], &p).unwrap(), 0);
        assert!(!p.exists());
    }

    #[test]
    fn csv_has_header_and_cleaned_text() {
        let p = tmp("one.csv");
        assert_eq!(save_to_csv(&[sample()], &p).unwrap(), 1);
        let body = fs::read_to_string(&p).unwrap();
        let mut lines = body.lines();
        assert_eq!(
            lines.next().unwrap(),
            "date,team1,team2,score1,score2,time,game_type,text_content"
        );
        let row = lines.next().unwrap();
        assert!(row.contains("Guardians,Mets,3,5"));
        // whitespace runs collapsed in the free-text column
        assert!(row.ends_with("Guardians (3) @ Mets (5)"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn json_keeps_raw_fragment() {
        let p = tmp("one.json");
        assert_eq!(save_to_json(&[sample()], &p).unwrap(), 1);
        let body = fs::read_to_string(&p).unwrap();
        let v: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(v[0]["date"], "August 4, 2025");
        assert_eq!(v[0]["score2"], 5);
        assert!(v[0]["raw_html"].as_str().unwrap().contains("p class"));
        assert!(v[0]["time"].is_null());
    }
}
