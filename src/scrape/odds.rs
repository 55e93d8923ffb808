// src/scrape/odds.rs
//
// Odds-table extractor. The snapshot embeds its whole dataset as one JSON
// payload inside a script tag; everything here is regex + serde_json, no
// HTML tree needed.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;

use crate::error::{Result, ScrapeError};
use crate::teams;

static NEXT_DATA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<script id="__NEXT_DATA__" type="application/json">(.*?)</script>"#).unwrap()
});

const GAME_ROWS: &str = "/props/pageProps/oddsTables/0/oddsTableModel/gameRows";
const BOOKMAKER: &str = "bet365";

#[derive(Debug, Clone, PartialEq)]
pub struct OddsRow {
    pub date: String,
    pub team1: String,
    pub team2: String,
    pub pitcher1: String,
    pub pitcher2: String,
    pub away_odds: String,
    pub home_odds: String,
}

impl OddsRow {
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.team1.clone(),
            self.team2.clone(),
            self.pitcher1.clone(),
            self.pitcher2.clone(),
            self.away_odds.clone(),
            self.home_odds.clone(),
        ]
    }
}

pub fn extract(path: &Path) -> Result<Vec<OddsRow>> {
    if !path.exists() {
        return Err(ScrapeError::NotFound(path.to_path_buf()));
    }
    let html = fs::read_to_string(path)?;
    parse_doc(&html)
}

/// Split out for unit tests.
pub fn parse_doc(html: &str) -> Result<Vec<OddsRow>> {
    let payload = NEXT_DATA
        .captures(html)
        .map(|c| c.get(1).map_or("", |m| m.as_str()))
        .ok_or_else(|| ScrapeError::ParseFailure(s!("no embedded JSON data in document")))?;

    let data: Value = serde_json::from_str(payload)?;
    let rows = data
        .pointer(GAME_ROWS)
        .and_then(Value::as_array)
        .ok_or_else(|| ScrapeError::ParseFailure(s!("odds payload has no game rows")))?;

    let mut out = Vec::with_capacity(rows.len());
    for game in rows {
        let gv = &game["gameView"];
        let away = str_at(gv, "/awayTeam/displayName");
        let home = str_at(gv, "/homeTeam/displayName");
        let (away_odds, home_odds) = bookmaker_line(game);

        out.push(OddsRow {
            date: reformat_date(str_at(gv, "/startDate")),
            team1: s!(teams::code_for(away)),
            team2: s!(teams::code_for(home)),
            pitcher1: starter_name(gv, "awayStarter"),
            pitcher2: starter_name(gv, "homeStarter"),
            away_odds,
            home_odds,
        });
    }
    Ok(out)
}

/* ---------------- helpers ---------------- */

fn str_at<'a>(v: &'a Value, pointer: &str) -> &'a str {
    v.pointer(pointer).and_then(Value::as_str).unwrap_or("")
}

/// ISO "yyyy-mm-dd…" prefix → "dd-mm-yyyy". Unparseable dates pass through.
fn reformat_date(start: &str) -> String {
    let prefix = start.get(..10).unwrap_or(start);
    match NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
        Ok(d) => d.format("%d-%m-%Y").to_string(),
        Err(_) => s!(prefix),
    }
}

fn starter_name(gv: &Value, side: &str) -> String {
    let first = str_at(gv, &format!("/{side}/firstName"));
    let last = str_at(gv, &format!("/{side}/lastName"));
    join!(first, " ", last).trim().to_string()
}

/// First non-null oddsViews entry for the configured book; absent book or
/// line ⇒ both sides "N/A".
fn bookmaker_line(game: &Value) -> (String, String) {
    let book = game["oddsViews"].as_array().and_then(|views| {
        views
            .iter()
            .find(|v| !v.is_null() && v["sportsbook"].as_str() == Some(BOOKMAKER))
    });
    match book {
        Some(v) => (
            odds_value(&v["currentLine"]["awayOdds"]),
            odds_value(&v["currentLine"]["homeOdds"]),
        ),
        None => (s!("N/A"), s!("N/A")),
    }
}

fn odds_value(v: &Value) -> String {
    match v {
        Value::Number(n) => n.to_string(),
        Value::String(t) => t.clone(),
        _ => s!("N/A"),
    }
}
