// src/scrape/win_prob.rs
//
// Single-value extractor: find the first win probability embedded in a raw
// game-page snapshot. Two payload shapes exist in the wild; they are tried
// in priority order and the first numeric hit wins.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, ScrapeError};

// Shape 1: "wnPrb": { "pts": { "<k>": <float>, … } }
static WNPRB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""wnPrb":\s*\{\s*"pts":\s*\{([^}]*)\}"#).unwrap());
static FIRST_FLOAT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":\s*([\d.]+)").unwrap());

// Shape 2: "mtchpPrdctr": { "teams": [ { … "value": <float> … } ] }
static PREDICTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""mtchpPrdctr":\s*\{\s*"teams":\s*\[\s*\{[^}]*"value":\s*([\d.]+)"#).unwrap()
});

pub fn extract(path: &Path) -> Result<Option<f64>> {
    if !path.exists() {
        return Err(ScrapeError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    Ok(parse_doc(&content))
}

/// "Not found" is `None`, not an error — the snapshot simply predates the
/// widget.
pub fn parse_doc(content: &str) -> Option<f64> {
    if let Some(caps) = WNPRB.captures(content) {
        let inner = caps.get(1).map_or("", |m| m.as_str());
        if let Some(v) = FIRST_FLOAT
            .captures(inner)
            .and_then(|c| c[1].parse::<f64>().ok())
        {
            return Some(v);
        }
    }

    PREDICTOR
        .captures(content)
        .and_then(|c| c[1].parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_win_prob_points() {
        let content = r#"var g = {"wnPrb": {"pts": {"1": 55.3, "2": 44.7}}};"#;
        assert_eq!(parse_doc(content), Some(55.3));
    }

    #[test]
    fn falls_back_to_matchup_predictor() {
        let content =
            r#"{"mtchpPrdctr": {"teams": [{"abbrev": "CLE", "value": 60.1}, {"value": 39.9}]}}"#;
        assert_eq!(parse_doc(content), Some(60.1));
    }

    #[test]
    fn points_shape_takes_priority() {
        let content = concat!(
            r#"{"wnPrb": {"pts": {"0": 48.2}}}"#,
            r#"{"mtchpPrdctr": {"teams": [{"value": 60.1}]}}"#,
        );
        assert_eq!(parse_doc(content), Some(48.2));
    }

    #[test]
    fn absent_payloads_yield_none() {
        assert_eq!(parse_doc("<html>nothing embedded</html>"), None);
    }
}
