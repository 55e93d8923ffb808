// src/scrape/day.rs
//
// Date-filtered view of the schedule page, plus the in-place "Today's
// Games" rewriter. Unlike the canonical schedule pass, this view keeps
// exhibition games and tags them — an alternate extraction policy.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use scraper::{Html, Selector};

use crate::core::sanitize::normalize_ws;
use crate::error::{Result, ScrapeError};
use crate::record::GameRecord;
use crate::scrape::{game, schedule};

static DIV_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div").unwrap());
static H3_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h3").unwrap());
static GAME_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p.game").unwrap());

// Timed preview entries on the Today's Games section.
static PREVIEW_GAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<p class="game">\s*<span tz="E"><strong>([^<]+)</strong></span>\s*<a href="([^"]+)">([^<]+)</a>\s*@\s*<a href="([^"]+)">([^<]+)</a>\s*&nbsp;&nbsp;&nbsp;&nbsp;<em><a href="([^"]+)">Preview</a></em>\s*</p>"#,
    )
    .unwrap()
});
// /ABC<year> path segments gain the club-code directory: /ABC/ABC<year>
static BOX_PATH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/([A-Z]+)(\d{4})").unwrap());

const TODAY_HEADER: &str = "<h3><span id='today'>Today's Games</span></h3>";

/// One date section of the schedule with its normalized games.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySection {
    pub date: String,
    pub games: Vec<GameRecord>,
}

/// Every `div` carrying game paragraphs, paired with its heading date.
pub fn sections(doc: &Html) -> Vec<DaySection> {
    let mut out = Vec::new();
    for div in doc.select(&DIV_SEL) {
        let game_ps: Vec<_> = div.select(&GAME_SEL).collect();
        if game_ps.is_empty() {
            continue;
        }
        let date = div
            .select(&H3_SEL)
            .next()
            .map(|h| normalize_ws(&h.text().collect::<String>()))
            .unwrap_or_else(|| s!("Unknown Date"));

        let games = game_ps
            .into_iter()
            .filter_map(|p| {
                let f = game::read_fields(p);
                let (Some(team1), Some(team2)) = (f.team1, f.team2) else {
                    return None;
                };
                Some(GameRecord {
                    date: date.clone(),
                    team1: Some(team1),
                    team2: Some(team2),
                    score1: f.score1,
                    score2: f.score2,
                    time: f.time,
                    game_type: f.game_type,
                    raw_html: p.html(),
                    text_content: normalize_ws(&p.text().collect::<String>()),
                })
            })
            .collect();

        out.push(DaySection { date, games });
    }
    out
}

/// Two-tier date match over the section headings:
/// tier 1 — token-bounded month/day/year regex (day's leading zero
/// stripped); tier 2 — plain substring, used only when tier 1 produces
/// nothing (irregular headings, or a target that isn't "Month Day, Year").
pub fn games_for_date(doc: &Html, target: &str) -> Vec<DaySection> {
    let all = sections(doc);
    let target_lc = target.to_lowercase();

    let mut matched: Vec<DaySection> = Vec::new();
    if let Some(re) = tier1_pattern(&target_lc) {
        matched = all
            .iter()
            .filter(|s| re.is_match(&s.date.to_lowercase()))
            .cloned()
            .collect();
    }
    if matched.is_empty() {
        matched = all
            .iter()
            .filter(|s| s.date.to_lowercase().contains(&target_lc))
            .cloned()
            .collect();
    }
    matched
}

fn tier1_pattern(target_lc: &str) -> Option<Regex> {
    let parts: Vec<&str> = target_lc.split_whitespace().collect();
    if parts.len() < 3 {
        return None;
    }
    let month = parts[0];
    let day = parts[1].trim_end_matches(',');
    let day = day.strip_prefix('0').unwrap_or(day);
    let year = parts[2];

    let pattern = format!(
        r"\b{}\b.*\b{}\b.*\b{}\b",
        regex::escape(month),
        regex::escape(day),
        regex::escape(year)
    );
    Regex::new(&pattern).ok()
}

/// Replace the "Today's Games" section header with the current date and
/// rewrite each timed preview entry into the completed-game shape with
/// `(TBD)` scores and a Boxscore link. Returns the substituted date.
pub fn rewrite_today(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ScrapeError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let date = schedule::today_string();

    let content = content.replace(TODAY_HEADER, &format!("<h3>{date}</h3>"));
    let content = PREVIEW_GAME
        .replace_all(&content, |c: &Captures| {
            let (t1_url, t1) = (&c[2], &c[3]);
            let (t2_url, t2) = (&c[4], &c[5]);
            let box_url = boxscore_url(&c[6]);
            format!(
                "<p class=\"game\">\n\n <a href=\"{t1_url}\">{t1}</a>\n (TBD)\n @\n \
                 <strong> <a href=\"{t2_url}\">{t2}</a>\n (TBD)</strong>\n \
                 &nbsp;&nbsp;&nbsp;&nbsp;<em><a href=\"{box_url}\">Boxscore</a></em>\n </p>"
            )
        })
        .into_owned();

    fs::write(path, content)?;
    logf!("Rewrote Today's Games as {} in {}", date, path.display());
    Ok(date)
}

fn boxscore_url(preview_url: &str) -> String {
    let url = preview_url.replace("/previews/", "/boxes/");
    BOX_PATH
        .replace_all(&url, |c: &Captures| format!("/{}/{}{}", &c[1], &c[1], &c[2]))
        .into_owned()
}
