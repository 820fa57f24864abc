use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Published nflverse team table (one row per team, logo URLs included).
pub const DEFAULT_CSV_URL: &str =
    "https://raw.githubusercontent.com/nflverse/nflverse-pbp/master/teams_colors_logos.csv";

/// Where logos land, relative to the working directory.
pub const DEFAULT_OUT_DIR: &str = "public/images/nfl/teams";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_USER_AGENT: &str = "seahawksfanzone/1.0";

/// Header names accepted for the team abbreviation, highest priority first.
pub const ABBR_CANDIDATES: &[&str] = &["team_abbr", "abbr", "team"];

/// Header names accepted for the logo URL, highest priority first.
pub const LOGO_CANDIDATES: &[&str] = &[
    "team_logo_wikipedia",
    "team_logo_espn",
    "team_logo",
    "logo",
    "logo_url",
];

/// Parameters for one run. The binary only ever uses `FetchConfig::default()`;
/// other values exist so tests can point the pipeline at a local server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// CSV listing one team per row.
    pub csv_url: String,
    /// Output directory for `{ABBR}{ext}` files.
    pub out_dir: PathBuf,
    /// Per-request timeout in seconds (applies to connect and whole transfer).
    pub timeout_secs: u64,
    /// Sent as `User-Agent` on every request.
    pub user_agent: String,
    /// Abbreviation column candidates in priority order.
    pub abbr_candidates: Vec<String>,
    /// Logo URL column candidates in priority order.
    pub logo_candidates: Vec<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            csv_url: DEFAULT_CSV_URL.to_string(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            abbr_candidates: ABBR_CANDIDATES.iter().map(|s| s.to_string()).collect(),
            logo_candidates: LOGO_CANDIDATES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FetchConfig {
    /// Same defaults, different source and destination.
    pub fn with_source(csv_url: impl Into<String>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            csv_url: csv_url.into(),
            out_dir: out_dir.into(),
            ..Self::default()
        }
    }

    /// TOML rendering used for the startup debug log.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
