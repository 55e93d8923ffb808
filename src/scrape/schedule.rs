// src/scrape/schedule.rs
//
// Canonical schedule extraction: one forward pass over the document's
// headings and game paragraphs, carrying an "active date" context.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::core::sanitize::normalize_ws;
use crate::error::{Result, ScrapeError};
use crate::record::GameRecord;
use crate::scrape::game;

// Date headings interleave with game paragraphs as siblings; everything else
// on the page is noise.
static BLOCK_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h3, p.game").unwrap());
static YEAR_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{4}\b").unwrap());

const TODAY_HEADING: &str = "Today's Games";
const EXHIBITION_MARKER: &str = "(Spring)";

/// Current local date rendered the way the schedule renders its headings,
/// day not zero-padded: "Monday, August 4, 2025".
pub fn today_string() -> String {
    chrono::Local::now().format("%A, %B %-d, %Y").to_string()
}

/// Read and parse a local schedule snapshot. Re-reads on every call.
pub fn load_document(path: &Path) -> Result<Html> {
    if !path.exists() {
        return Err(ScrapeError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    parse_markup(&text)
}

/// Minimal markup check; html5ever recovers from almost anything, so only
/// element-free input counts as unparseable.
pub fn parse_markup(text: &str) -> Result<Html> {
    if text.trim().is_empty() {
        return Err(ScrapeError::ParseFailure(s!("empty document")));
    }
    Ok(Html::parse_document(text))
}

/// Convenience: load + extract in one go, with parse timing in the log.
pub fn extract(path: &Path) -> Result<Vec<GameRecord>> {
    let doc = load_document(path)?;
    let t = std::time::Instant::now();
    let games = parse_doc(&doc);
    logd!("Schedule: parsed {} games from {} in {:?}", games.len(), path.display(), t.elapsed());
    Ok(games)
}

/// Walk headings and game paragraphs in document order.
///
/// - A heading equal to "Today's Games" substitutes the current real date.
/// - A heading with a comma and a four-digit year is adopted verbatim.
/// - Game paragraphs before any date heading are dropped, as are exhibition
///   fragments and fragments with fewer than two team links.
///
/// Never fails: malformed fragments degrade, they don't abort.
pub fn parse_doc(doc: &Html) -> Vec<GameRecord> {
    let mut games = Vec::new();
    let mut current_date: Option<String> = None;
    let today = today_string();

    for element in doc.select(&BLOCK_SEL) {
        if element.value().name() == "h3" {
            let date_text = normalize_ws(&element.text().collect::<String>());
            if date_text == TODAY_HEADING {
                current_date = Some(today.clone());
            } else if date_text.contains(',') && YEAR_TOKEN.is_match(&date_text) {
                current_date = Some(date_text);
            }
            // anything else leaves the active context unchanged
            continue;
        }

        // p.game
        let Some(date) = current_date.clone() else { continue };

        let text: String = element.text().collect();
        if text.contains(EXHIBITION_MARKER) {
            continue;
        }

        let f = game::read_fields(element);
        let (Some(team1), Some(team2)) = (f.team1, f.team2) else { continue };

        games.push(GameRecord {
            date,
            team1: Some(team1),
            team2: Some(team2),
            score1: f.score1,
            score2: f.score2,
            time: f.time,
            game_type: f.game_type,
            raw_html: element.html(),
            text_content: text,
        });
    }

    games
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> Vec<GameRecord> {
        parse_doc(&Html::parse_document(html))
    }

    const ONE_DAY: &str = r#"
        <html><body><div>
          <h3>August 4, 2025</h3>
          <p class="game">
            <a href="/teams/CLE/2025.shtml">Guardians</a> (3)
            @
            <strong><a href="/teams/NYM/2025.shtml">Mets</a> (5)</strong>
            &nbsp;&nbsp;&nbsp;&nbsp;<em><a href="/boxes/NYM/NYM202508040.shtml">Boxscore</a></em>
          </p>
        </div></body></html>
    "#;

    #[test]
    fn extracts_one_completed_game() {
        let games = parse(ONE_DAY);
        assert_eq!(games.len(), 1);
        let g = &games[0];
        assert_eq!(g.date, "August 4, 2025");
        assert_eq!(g.team1.as_deref(), Some("Guardians"));
        assert_eq!(g.team2.as_deref(), Some("Mets"));
        assert_eq!(g.score1, Some(3));
        assert_eq!(g.score2, Some(5));
        assert!(g.is_completed());
        assert!(g.raw_html.contains("Boxscore"));
    }

    #[test]
    fn no_date_heading_means_no_games() {
        let games = parse(
            r#"<div>
              <p class="game">
                <a href="/teams/CLE/2025.shtml">Guardians</a>
                @
                <a href="/teams/NYM/2025.shtml">Mets</a>
              </p>
            </div>"#,
        );
        assert!(games.is_empty());
    }

    #[test]
    fn non_date_heading_leaves_context_unchanged() {
        let games = parse(
            r#"<div>
              <h3>August 4, 2025</h3>
              <h3>Standings</h3>
              <p class="game">
                <a href="/teams/CLE/2025.shtml">Guardians</a>
                @
                <a href="/teams/NYM/2025.shtml">Mets</a>
              </p>
            </div>"#,
        );
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].date, "August 4, 2025");
    }

    #[test]
    fn exhibition_fragments_are_filtered() {
        let games = parse(
            r#"<div>
              <h3>March 1, 2025</h3>
              <p class="game">
                <span>(Spring)</span>
                <a href="/teams/CHC/2025.shtml">Cubs</a>
                @
                <a href="/teams/SF/2025.shtml">Giants</a>
              </p>
            </div>"#,
        );
        assert!(games.is_empty());
    }

    #[test]
    fn fragments_with_one_team_are_dropped() {
        let games = parse(
            r#"<div>
              <h3>August 4, 2025</h3>
              <p class="game"><a href="/teams/CLE/2025.shtml">Guardians</a> (3)</p>
            </div>"#,
        );
        assert!(games.is_empty());
    }

    #[test]
    fn future_game_keeps_time_and_empty_scores() {
        let games = parse(
            r#"<div>
              <h3>September 12, 2025</h3>
              <p class="game">
                <span tz="E"><strong>7:10 pm</strong></span>
                <a href="/teams/CLE/2025.shtml">Guardians</a>
                @
                <a href="/teams/NYM/2025.shtml">Mets</a>
              </p>
            </div>"#,
        );
        assert_eq!(games.len(), 1);
        let g = &games[0];
        assert_eq!(g.time.as_deref(), Some("7:10 pm"));
        assert_eq!(g.score1, None);
        assert_eq!(g.score2, None);
        assert!(!g.is_completed());
    }

    #[test]
    fn todays_games_heading_becomes_current_date() {
        let games = parse(
            r#"<div>
              <h3>Today's Games</h3>
              <p class="game">
                <a href="/teams/CLE/2025.shtml">Guardians</a>
                @
                <a href="/teams/NYM/2025.shtml">Mets</a>
              </p>
            </div>"#,
        );
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].date, today_string());
    }

    #[test]
    fn today_string_has_no_zero_padded_day() {
        let today = today_string();
        // "Weekday, Month D, Year" with no " 0D" form
        assert!(today.contains(','));
        assert!(!today.contains(" 0"));
    }

    #[test]
    fn extraction_is_idempotent() {
        let doc = Html::parse_document(ONE_DAY);
        assert_eq!(parse_doc(&doc), parse_doc(&doc));
    }

    #[test]
    fn empty_input_is_a_parse_failure() {
        assert!(matches!(
            parse_markup("   \n  "),
            Err(ScrapeError::ParseFailure(_))
        ));
    }

    #[test]
    fn missing_file_is_not_found() {
        let p = std::env::temp_dir().join("mlb_scrape_no_such_file.shtml");
        assert!(matches!(
            load_document(&p),
            Err(ScrapeError::NotFound(_))
        ));
    }
}
