//! Display formatting shared by the page renderers.
//!
//! Everything here is pure: relative times take `now` explicitly so output is
//! reproducible in tests.

use chrono::{DateTime, Utc};

/// Formats an integer with en-US thousands separators (`15420` → `"15,420"`).
#[must_use]
pub fn format_count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// [`format_count`] for figures that arrive as JSON numbers, rounded to the
/// nearest whole unit.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_number(value: f64) -> String {
    format_count(value.round() as i64)
}

/// Formats a percentage with one decimal place (`12.46` → `"12.5%"`).
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Like [`format_percent`] but always signed, for growth figures.
#[must_use]
pub fn format_growth(value: f64) -> String {
    if value > 0.0 {
        format!("+{value:.1}%")
    } else {
        format!("{value:.1}%")
    }
}

/// Portuguese relative time used across the dashboard.
///
/// Buckets by whole minutes elapsed: under one minute (or in the future) is
/// "Agora mesmo", then minutes, hours and days, each floored.
#[must_use]
pub fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - then).num_minutes();
    if minutes < 1 {
        "Agora mesmo".to_string()
    } else if minutes < 60 {
        format!("{minutes} min atrás")
    } else if minutes < 1440 {
        format!("{}h atrás", minutes / 60)
    } else {
        format!("{} dias atrás", minutes / 1440)
    }
}

/// [`format_time_ago`] for optional timestamps, with a fallback label.
#[must_use]
pub fn format_time_ago_or(then: Option<DateTime<Utc>>, now: DateTime<Utc>, missing: &str) -> String {
    then.map_or_else(|| missing.to_string(), |t| format_time_ago(t, now))
}

/// Cuts `text` to at most `max` characters, appending `...` when shortened.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max).collect::<String>())
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(15420), "15,420");
        assert_eq!(format_count(1_234_567), "1,234,567");
        assert_eq!(format_count(-4500), "-4,500");
    }

    #[test]
    fn format_number_rounds_then_groups() {
        assert_eq!(format_number(10_000.0), "10,000");
        assert_eq!(format_number(12_345.6), "12,346");
    }

    #[test]
    fn format_percent_rounds_to_one_decimal() {
        assert_eq!(format_percent(66.666), "66.7%");
        assert_eq!(format_percent(0.0), "0.0%");
    }

    #[test]
    fn format_growth_is_signed() {
        assert_eq!(format_growth(12.5), "+12.5%");
        assert_eq!(format_growth(-3.0), "-3.0%");
        assert_eq!(format_growth(0.0), "0.0%");
    }

    #[test]
    fn time_ago_buckets() {
        let now = now();
        assert_eq!(format_time_ago(now - Duration::seconds(30), now), "Agora mesmo");
        assert_eq!(format_time_ago(now - Duration::minutes(5), now), "5 min atrás");
        assert_eq!(format_time_ago(now - Duration::minutes(59), now), "59 min atrás");
        assert_eq!(format_time_ago(now - Duration::minutes(60), now), "1h atrás");
        assert_eq!(format_time_ago(now - Duration::minutes(150), now), "2h atrás");
        assert_eq!(format_time_ago(now - Duration::minutes(1440), now), "1 dias atrás");
        assert_eq!(format_time_ago(now - Duration::days(9), now), "9 dias atrás");
    }

    #[test]
    fn time_ago_future_is_now() {
        let now = now();
        assert_eq!(format_time_ago(now + Duration::hours(2), now), "Agora mesmo");
    }

    #[test]
    fn time_ago_or_uses_fallback() {
        assert_eq!(format_time_ago_or(None, now(), "Nunca"), "Nunca");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("Motivação", 20), "Motivação");
        assert_eq!(truncate("Motivação diária", 9), "Motivação...");
    }
}
