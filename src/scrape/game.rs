// src/scrape/game.rs
//
// Field normalizer for one game paragraph. Pure function of the fragment;
// tolerant of anything missing.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::core::sanitize::normalize_ws;

static TIME_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"span[tz="E"]"#).unwrap());
static SPAN_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span").unwrap());
static LINK_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

// Team pages look like /teams/CLE/2025.shtml
static TEAM_HREF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/teams/[A-Z]+/").unwrap());
static SCORE_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\((\d+)\)").unwrap());

#[derive(Debug, Default, Clone, PartialEq)]
pub struct GameFields {
    pub team1: Option<String>,
    pub team2: Option<String>,
    pub score1: Option<u32>,
    pub score2: Option<u32>,
    pub time: Option<String>,
    pub game_type: Option<String>,
}

/// Pull the normalized fields out of one `p.game` fragment.
///
/// - Fewer than two team links ⇒ both team names stay `None`; the caller
///   skips the fragment.
/// - One parenthesized score token sets only `score1`. That partial state is
///   preserved as-is, not inferred away.
pub fn read_fields(p: ElementRef<'_>) -> GameFields {
    let mut out = GameFields::default();

    // A tz-tagged span marks an upcoming game; its text is the start time.
    if let Some(span) = p.select(&TIME_SEL).next() {
        out.time = Some(normalize_ws(&span.text().collect::<String>()));
    }

    // First inline span classifies exhibitions.
    if let Some(span) = p.select(&SPAN_SEL).next() {
        if span.text().collect::<String>().contains("Spring") {
            out.game_type = Some(s!("Spring"));
        }
    }

    let mut links = p
        .select(&LINK_SEL)
        .filter(|a| a.value().attr("href").is_some_and(|h| TEAM_HREF.is_match(h)));
    match (links.next(), links.next()) {
        (Some(a1), Some(a2)) => {
            out.team1 = Some(normalize_ws(&a1.text().collect::<String>()));
            out.team2 = Some(normalize_ws(&a2.text().collect::<String>()));
        }
        _ => return out, // caller drops fragments with <2 teams
    }

    let text: String = p.text().collect();
    let mut scores = SCORE_TOKEN
        .captures_iter(&text)
        .filter_map(|c| c[1].parse::<u32>().ok());
    out.score1 = scores.next();
    out.score2 = scores.next();
    // any further tokens are ignored

    out
}
