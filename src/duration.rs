use chrono::NaiveTime;

pub const INVALID_RANGE: &str = "Invalid time range";

fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Human-readable span between two same-day clock times ("HH:MM").
///
/// `None` when either side is blank. Unparsable times and ends at or before
/// the start give [`INVALID_RANGE`].
pub fn estimate_duration(start: &str, end: &str) -> Option<String> {
    if start.trim().is_empty() || end.trim().is_empty() {
        return None;
    }
    let (Some(start), Some(end)) = (parse_time(start), parse_time(end)) else {
        return Some(INVALID_RANGE.to_string());
    };
    if end <= start {
        return Some(INVALID_RANGE.to_string());
    }

    let minutes_total = (end - start).num_minutes();
    let hours = minutes_total / 60;
    let minutes = minutes_total % 60;

    let mut parts = Vec::with_capacity(2);
    if hours > 0 {
        parts.push(plural(hours, "hour"));
    }
    if minutes > 0 {
        parts.push(plural(minutes, "minute"));
    }
    Some(parts.join(" "))
}
