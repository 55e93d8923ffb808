// src/teams.rs
//
// Static display-name → club-code table used by the odds extractor.
// Built once at first use; unmapped names pass through unchanged.

use std::collections::HashMap;
use std::sync::LazyLock;

static TEAM_CODES: &[(&str, &str)] = &[
    ("Arizona Diamondbacks", "ARI"),
    ("Arizona", "ARI"),
    ("Atlanta Braves", "ATL"),
    ("Atlanta", "ATL"),
    ("Baltimore Orioles", "BAL"),
    ("Baltimore", "BAL"),
    ("Boston Red Sox", "BOS"),
    ("Boston", "BOS"),
    ("Chicago White Sox", "CWS"),
    ("Chi. White Sox", "CWS"),
    ("White Sox", "CWS"),
    ("Chicago Cubs", "CHC"),
    ("Chi. Cubs", "CHC"),
    ("Cubs", "CHC"),
    ("Cincinnati Reds", "CIN"),
    ("Cincinnati", "CIN"),
    ("Cleveland Guardians", "CLE"),
    ("Cleveland", "CLE"),
    ("Colorado Rockies", "COL"),
    ("Colorado", "COL"),
    ("Detroit Tigers", "DET"),
    ("Detroit", "DET"),
    ("Houston Astros", "HOU"),
    ("Houston", "HOU"),
    ("Kansas City Royals", "KC"),
    ("Kansas City", "KC"),
    ("Los Angeles Angels", "LAA"),
    ("LA Angels", "LAA"),
    ("Angels", "LAA"),
    ("Los Angeles Dodgers", "LAD"),
    ("LA Dodgers", "LAD"),
    ("Dodgers", "LAD"),
    ("Miami Marlins", "MIA"),
    ("Miami", "MIA"),
    ("Milwaukee Brewers", "MIL"),
    ("Milwaukee", "MIL"),
    ("Minnesota Twins", "MIN"),
    ("Minnesota", "MIN"),
    ("New York Yankees", "NYY"),
    ("NY Yankees", "NYY"),
    ("Yankees", "NYY"),
    ("New York Mets", "NYM"),
    ("NY Mets", "NYM"),
    ("Mets", "NYM"),
    ("Oakland Athletics", "OAK"),
    ("Oakland", "OAK"),
    ("Philadelphia Phillies", "PHI"),
    ("Philadelphia", "PHI"),
    ("Pittsburgh Pirates", "PIT"),
    ("Pittsburgh", "PIT"),
    ("San Diego Padres", "SD"),
    ("San Diego", "SD"),
    ("San Francisco Giants", "SF"),
    ("San Francisco", "SF"),
    ("Seattle Mariners", "SEA"),
    ("Seattle", "SEA"),
    ("St. Louis Cardinals", "STL"),
    ("St. Louis", "STL"),
    ("Tampa Bay Rays", "TB"),
    ("Tampa Bay", "TB"),
    ("Texas Rangers", "TEX"),
    ("Texas", "TEX"),
    ("Toronto Blue Jays", "TOR"),
    ("Toronto", "TOR"),
    ("Washington Nationals", "WSH"),
    ("Washington", "WSH"),
];

static CODE_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| TEAM_CODES.iter().copied().collect());

/// Map a display name to its club code, or hand the name back unchanged.
pub fn code_for(name: &str) -> &str {
    CODE_MAP.get(name).copied().unwrap_or(name)
}
