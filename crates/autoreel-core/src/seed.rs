use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::reels::ReelStatus;
use crate::ConfigError;

/// A monitored profile to seed. Relative ages are resolved against the
/// seeding time so demo data always looks recent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedProfile {
    pub username: String,
    pub display_name: Option<String>,
    pub profile_picture_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default = "default_interval")]
    pub check_interval_minutes: i32,
    pub last_checked_minutes_ago: Option<i64>,
    pub last_posted_hours_ago: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedReel {
    pub code: String,
    /// Username of the owning [`SeedProfile`].
    pub profile: String,
    pub caption: Option<String>,
    pub status: ReelStatus,
    #[serde(default)]
    pub created_hours_ago: i64,
    pub posted_hours_ago: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedLog {
    pub level: String,
    pub message: String,
    #[serde(default)]
    pub hours_ago: i64,
    #[serde(default)]
    pub context: serde_json::Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub profiles: Vec<SeedProfile>,
    #[serde(default)]
    pub reels: Vec<SeedReel>,
    #[serde(default)]
    pub logs: Vec<SeedLog>,
}

/// Oldest relative age a seed entry may carry: ten years.
pub const MAX_SEED_AGE_HOURS: i64 = 10 * 365 * 24;
const MAX_SEED_AGE_MINUTES: i64 = MAX_SEED_AGE_HOURS * 60;

fn default_true() -> bool {
    true
}

fn default_interval() -> i32 {
    60
}

impl SeedReel {
    #[must_use]
    pub fn url(&self) -> String {
        format!("https://instagram.com/reel/{}", self.code)
    }
}

/// Load and validate seed data from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_seed(path: &Path) -> Result<SeedFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SeedFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_seed(&content)
}

/// Parse and validate seed YAML already in memory.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_seed(content: &str) -> Result<SeedFile, ConfigError> {
    let seed: SeedFile = serde_yaml::from_str(content).map_err(ConfigError::SeedFileParse)?;
    validate_seed(&seed)?;
    Ok(seed)
}

fn check_age(owner: &str, field: &str, value: i64, max: i64) -> Result<(), ConfigError> {
    if (0..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Validation(format!(
            "'{owner}' has {field} = {value}; must be between 0 and {max}"
        )))
    }
}

fn validate_seed(seed: &SeedFile) -> Result<(), ConfigError> {
    let mut usernames = HashSet::new();
    for profile in &seed.profiles {
        if profile.username.trim().is_empty() {
            return Err(ConfigError::Validation(
                "profile username must be non-empty".to_string(),
            ));
        }
        if profile.check_interval_minutes <= 0 {
            return Err(ConfigError::Validation(format!(
                "profile '{}' has invalid check interval {}; must be positive",
                profile.username, profile.check_interval_minutes
            )));
        }
        if let Some(m) = profile.last_checked_minutes_ago {
            check_age(&profile.username, "last_checked_minutes_ago", m, MAX_SEED_AGE_MINUTES)?;
        }
        if let Some(h) = profile.last_posted_hours_ago {
            check_age(&profile.username, "last_posted_hours_ago", h, MAX_SEED_AGE_HOURS)?;
        }
        if !usernames.insert(profile.username.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate profile username: '{}'",
                profile.username
            )));
        }
    }

    let mut codes = HashSet::new();
    for reel in &seed.reels {
        if !usernames.contains(&reel.profile.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "reel '{}' references unknown profile '{}'",
                reel.code, reel.profile
            )));
        }
        if reel.status == ReelStatus::Unknown {
            return Err(ConfigError::Validation(format!(
                "reel '{}' has an unsupported status",
                reel.code
            )));
        }
        check_age(&reel.code, "created_hours_ago", reel.created_hours_ago, MAX_SEED_AGE_HOURS)?;
        if let Some(h) = reel.posted_hours_ago {
            check_age(&reel.code, "posted_hours_ago", h, MAX_SEED_AGE_HOURS)?;
        }
        if !codes.insert(reel.code.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate reel code: '{}'",
                reel.code
            )));
        }
    }

    for log in &seed.logs {
        check_age(&log.message, "hours_ago", log.hours_ago, MAX_SEED_AGE_HOURS)?;
        if crate::logs::normalize_level(&log.level).is_none() {
            return Err(ConfigError::Validation(format!(
                "log '{}' has unknown level '{}'",
                log.message, log.level
            )));
        }
    }

    Ok(())
}
