use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a backend timestamp into an instant usable as a sort key.
///
/// RFC 3339 strings keep their offset; naive strings are interpreted as
/// local time. Returns `None` for anything unparseable, which callers sort
/// ahead of all parseable timestamps.
pub fn parse_timestamp(ts: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(ts, fmt) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc));
        }
    }
    None
}

/// Render a timestamp as `dd/mm/yyyy hh:mm:ss` (24-hour), in the wall-clock
/// frame it was written with. Unparseable input passes through unchanged.
pub fn format_timestamp(ts: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return dt.naive_local().format(DISPLAY_FORMAT).to_string();
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(ts, fmt) {
            return naive.format(DISPLAY_FORMAT).to_string();
        }
    }
    ts.to_string()
}

/// Render the moment a poll completed, in the viewer's clock.
pub fn format_update_time(time: DateTime<Local>) -> String {
    time.format(DISPLAY_FORMAT).to_string()
}

/// Integers render without decimals, everything else with exactly two.
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}
