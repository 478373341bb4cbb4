//! Human-readable formatting for durations and counts.

use std::time::Duration;

const SECS_PER_HOUR: u64 = 3600;
const HOURS_PER_YEAR: u64 = 8760;

/// Returns a human-readable rendering of a duration, bucketed the way a
/// search ETA is usually read: seconds, minutes, hours+minutes, days+hours,
/// weeks, months or years.
pub fn humanize_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let hours = secs / SECS_PER_HOUR;

    // beyond anything worth quantifying (saturated estimates land here)
    if hours > HOURS_PER_YEAR * 1000 {
        return "hundreds of years".into();
    }
    if hours > HOURS_PER_YEAR {
        let y = hours / HOURS_PER_YEAR;
        return format!("{} {}", y, plural("year", y));
    }
    if hours > 720 {
        let m = hours / 24 / 30;
        return format!("{} {}", m, plural("month", m));
    }
    if hours > 168 {
        let w = hours / 168;
        return format!("{} {}", w, plural("week", w));
    }
    if secs < 60 {
        return format!("{} {}", secs, plural("second", secs));
    }
    let minutes = secs / 60;
    if minutes < 60 {
        return format!("{} {}", minutes, plural("minute", minutes));
    }
    if hours < 24 {
        let m = minutes % 60;
        return format!(
            "{} {}, {} {}",
            hours,
            plural("hour", hours),
            m,
            plural("minute", m)
        );
    }
    let d = hours / 24;
    let h = hours % 24;
    format!("{} {}, {} {}", d, plural("day", d), h, plural("hour", h))
}

/// Returns a thousands-separated rendering of a number, eg: 1,123,456.
pub fn number_format(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Returns the plural of `s` unless `v` is exactly 1.
pub fn plural(s: &str, v: u64) -> String {
    if v == 1 {
        s.to_string()
    } else {
        format!("{}s", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds() {
        assert_eq!(humanize_duration(Duration::from_secs(1)), "1 second");
        assert_eq!(humanize_duration(Duration::from_secs(45)), "45 seconds");
    }

    #[test]
    fn test_minutes() {
        assert_eq!(humanize_duration(Duration::from_secs(60)), "1 minute");
        assert_eq!(humanize_duration(Duration::from_secs(59 * 60)), "59 minutes");
    }

    #[test]
    fn test_hours_and_minutes() {
        let d = Duration::from_secs(3 * 3600 + 25 * 60);
        assert_eq!(humanize_duration(d), "3 hours, 25 minutes");
    }

    #[test]
    fn test_days_and_hours() {
        let d = Duration::from_secs(2 * 24 * 3600 + 5 * 3600);
        assert_eq!(humanize_duration(d), "2 days, 5 hours");
    }

    #[test]
    fn test_weeks() {
        let d = Duration::from_secs(3 * 168 * 3600);
        assert_eq!(humanize_duration(d), "3 weeks");
    }

    #[test]
    fn test_months() {
        let d = Duration::from_secs(2 * 30 * 24 * 3600);
        assert_eq!(humanize_duration(d), "2 months");
    }

    #[test]
    fn test_years() {
        let d = Duration::from_secs(2 * 8760 * 3600);
        assert_eq!(humanize_duration(d), "2 years");
    }

    #[test]
    fn test_astronomical() {
        assert_eq!(humanize_duration(Duration::MAX), "hundreds of years");
    }

    #[test]
    fn test_number_format() {
        assert_eq!(number_format(0), "0");
        assert_eq!(number_format(999), "999");
        assert_eq!(number_format(1_000), "1,000");
        assert_eq!(number_format(1_123_456), "1,123,456");
        assert_eq!(number_format(12_345), "12,345");
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural("core", 1), "core");
        assert_eq!(plural("core", 2), "cores");
        assert_eq!(plural("result", 0), "results");
    }
}
