// src/cli.rs
use std::{env, path::PathBuf};

use crate::error::{Result, ScrapeError};
use crate::params::{PageKind, Params};

pub fn parse() -> Result<Params> {
    let mut params = Params::new();
    parse_args(&mut params, env::args().skip(1))?;
    Ok(params)
}

fn parse_args(params: &mut Params, mut args: impl Iterator<Item = String>) -> Result<()> {
    while let Some(a) = args.next() {
        match a.as_str() {
            "--page" => {
                let v = next_value(&mut args, "--page")?;
                params.page = match v.to_ascii_lowercase().as_str() {
                    "schedule" => PageKind::Schedule,
                    "odds" => PageKind::Odds,
                    "winprob" => PageKind::WinProb,
                    "day" => PageKind::Day,
                    other => return Err(ScrapeError::Usage(format!("Unknown page: {}", other))),
                };
            }
            "-u" | "--update" => params.update = true,
            "-f" | "--force" => params.force = true,
            "--html-file" => params.html_file = Some(PathBuf::from(next_value(&mut args, "--html-file")?)),
            "--csv-file" => params.csv_file = Some(PathBuf::from(next_value(&mut args, "--csv-file")?)),
            "--json-file" => params.json_file = Some(PathBuf::from(next_value(&mut args, "--json-file")?)),
            "-d" | "--date" => params.date = Some(next_value(&mut args, "--date")?),
            "--update-today" => params.update_today = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(ScrapeError::Usage(format!("Unknown arg: {}", a))),
        }
    }

    // day-only flags imply the day page, so `--date` alone does what you mean
    if params.page == PageKind::Schedule && (params.date.is_some() || params.update_today) {
        params.page = PageKind::Day;
    }

    Ok(())
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| ScrapeError::Usage(format!("Missing value for {}", flag)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(args: &[&str]) -> Result<Params> {
        let mut p = Params::new();
        parse_args(&mut p, args.iter().map(|a| s!(*a)))?;
        Ok(p)
    }

    #[test]
    fn defaults_to_schedule_extract() {
        let p = parsed(&[]).unwrap();
        assert_eq!(p.page, PageKind::Schedule);
        assert!(!p.update && !p.force);
        assert_eq!(p.source(), PathBuf::from("html/MLB-schedule.shtml"));
    }

    #[test]
    fn update_and_overrides() {
        let p = parsed(&["-u", "--html-file", "snap.shtml", "--csv-file", "out.csv"]).unwrap();
        assert!(p.update);
        assert_eq!(p.source(), PathBuf::from("snap.shtml"));
        assert_eq!(p.csv_sink(), PathBuf::from("out.csv"));
    }

    #[test]
    fn date_flag_selects_day_page() {
        let p = parsed(&["--date", "August 4, 2025"]).unwrap();
        assert_eq!(p.page, PageKind::Day);
        assert_eq!(p.date.as_deref(), Some("August 4, 2025"));
    }

    #[test]
    fn odds_page_has_odds_defaults() {
        let p = parsed(&["--page", "odds"]).unwrap();
        assert_eq!(p.source(), PathBuf::from("odds/march18odds"));
        assert_eq!(p.csv_sink(), PathBuf::from("odds/march18odds.csv"));
    }

    #[test]
    fn unknown_flag_is_a_usage_error() {
        assert!(matches!(
            parsed(&["--bogus"]),
            Err(ScrapeError::Usage(_))
        ));
    }
}
