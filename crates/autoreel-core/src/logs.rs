use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row from the application log, as served by `/logs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    pub level: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub context: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogList {
    pub logs: Vec<LogEntry>,
}

/// Log levels accepted by the `/logs` filter, upper-cased as stored.
pub const LOG_LEVELS: [&str; 4] = ["DEBUG", "INFO", "WARNING", "ERROR"];

/// Normalizes a user-supplied level (`warn`, `Warning`, ...) to its stored form.
#[must_use]
pub fn normalize_level(raw: &str) -> Option<&'static str> {
    let upper = raw.trim().to_ascii_uppercase();
    let upper = if upper == "WARN" { "WARNING".to_string() } else { upper };
    LOG_LEVELS.iter().copied().find(|l| *l == upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_level_accepts_aliases() {
        assert_eq!(normalize_level("warn"), Some("WARNING"));
        assert_eq!(normalize_level(" error "), Some("ERROR"));
        assert_eq!(normalize_level("Info"), Some("INFO"));
        assert_eq!(normalize_level("trace"), None);
    }
}
