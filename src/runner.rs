// src/runner.rs
//
// Top-level orchestration: dispatch on page kind, decide whether to run at
// all (staleness gate), write sinks, report to stdout.

use std::path::Path;

use crate::error::{Result, ScrapeError};
use crate::params::{PageKind, Params};
use crate::record::GameRecord;
use crate::scrape::{day, odds, schedule, win_prob};
use crate::{file, store};

pub fn run(params: &Params) -> Result<()> {
    match params.page {
        PageKind::Schedule => run_schedule(params),
        PageKind::Odds => run_odds(params),
        PageKind::WinProb => run_win_prob(params),
        PageKind::Day => run_day(params),
    }
}

/* ---------------- schedule ---------------- */

fn run_schedule(params: &Params) -> Result<()> {
    let src = params.source();
    let csv = params.csv_sink();
    let json = params.json_sink();
    let gated = params.update || params.force;

    if gated {
        println!("Checking for updates to MLB schedule...");
        println!("  source: {} (modified {})", src.display(), store::mtime_display(&src));
        println!("  output: {} (modified {})", csv.display(), store::mtime_display(&csv));
        if !store::needs_update(&src, &csv, params.force)? {
            logd!("Schedule: {} up to date, skipping", csv.display());
            println!("{} is up to date (source hasn't changed)", csv.display());
            return Ok(());
        }
    }

    let games = schedule::extract(&src)?;
    if games.is_empty() {
        println!("No games found in {}", src.display());
        return Ok(());
    }

    let n = file::save_to_csv(&games, &csv)?;
    println!("Saved {} games to {}", n, csv.display());
    let n = file::save_to_json(&games, &json)?;
    println!("Saved {} games to {}", n, json.display());

    if gated {
        // keep the gate honest: the write happened after the source was
        // touched, so pin the output's mtime back to the source's
        store::align_mtime(&csv, &src)?;
        logd!("Schedule: aligned {} mtime to {}", csv.display(), src.display());
    }

    print_summary(&games);
    Ok(())
}

fn print_summary(games: &[GameRecord]) {
    let mut days: Vec<&str> = Vec::new();
    for g in games {
        if !days.contains(&g.date.as_str()) {
            days.push(&g.date);
        }
    }
    let completed = games.iter().filter(|g| g.is_completed()).count();
    println!(
        "Days: {}  Games: {}  Completed: {}  Future: {}",
        days.len(),
        games.len(),
        completed,
        games.len() - completed
    );
}

/* ---------------- peripherals ---------------- */

fn run_odds(params: &Params) -> Result<()> {
    let src = params.source();
    let out = params.csv_sink();

    let rows = odds::extract(&src)?;
    if rows.is_empty() {
        println!("No data to save");
        return Ok(());
    }
    let n = file::save_odds_csv(&rows, &out)?;
    println!("Saved {} games to {}", n, out.display());
    Ok(())
}

fn run_win_prob(params: &Params) -> Result<()> {
    let src = params.source();
    match win_prob::extract(&src)? {
        Some(p) => println!("Win probability: {}", p),
        None => println!("Win probability not found"),
    }
    Ok(())
}

fn run_day(params: &Params) -> Result<()> {
    let src = params.source();

    if params.update_today {
        let date = day::rewrite_today(&src)?;
        println!("Replaced 'Today's Games' with '{}' in {}", date, src.display());
        return Ok(());
    }

    let Some(target) = params.date.as_deref() else {
        return Err(ScrapeError::Usage(s!(
            "day view needs --date \"Month Day, Year\" or --update-today"
        )));
    };

    let doc = schedule::load_document(&src)?;
    let matched = day::games_for_date(&doc, target);
    if matched.is_empty() {
        println!("Date '{}' not found in schedule. Available dates include:", target);
        for section in day::sections(&doc).iter().take(5) {
            println!("  - {}", section.date);
        }
        return Ok(());
    }

    print_day_listing(&matched, target);
    Ok(())
}

fn print_day_listing(days: &[day::DaySection], target: &str) {
    println!("MLB schedule for: {}", target);
    for section in days {
        println!("\n{} ({} games)", section.date, section.games.len());
        for g in &section.games {
            print_game_line(g);
        }
    }

    let total: usize = days.iter().map(|d| d.games.len()).sum();
    let completed: usize = days
        .iter()
        .map(|d| d.games.iter().filter(|g| g.is_completed()).count())
        .sum();
    println!(
        "\nDays: {}  Games: {}  Completed: {}  Future: {}",
        days.len(),
        total,
        completed,
        total - completed
    );
}

fn print_game_line(g: &GameRecord) {
    let unknown = s!("?");
    let t1 = g.team1.as_ref().unwrap_or(&unknown);
    let t2 = g.team2.as_ref().unwrap_or(&unknown);
    let score = match (g.score1, g.score2) {
        (Some(a), Some(b)) => format!("{} - {}", a, b),
        _ => s!("TBD"),
    };
    let mut line = format!("  {} @ {}  {}", t1, t2, score);
    if let Some(t) = &g.time {
        line.push_str(&format!("  {}", t));
    }
    if let Some(k) = &g.game_type {
        line.push_str(&format!("  [{}]", k));
    }
    println!("{}", line);
}

/* ---------------- convenience for tests and embedding ---------------- */

/// One-call schedule pipeline without the gate: extract and write both
/// sinks. Returns the records so callers can inspect them.
pub fn extract_to(src: &Path, csv: &Path, json: &Path) -> Result<Vec<GameRecord>> {
    let games = schedule::extract(src)?;
    file::save_to_csv(&games, csv)?;
    file::save_to_json(&games, json)?;
    Ok(games)
}
