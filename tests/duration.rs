use jambo_timesheet::TimesheetRecord;
use jambo_timesheet::duration::{INVALID_RANGE, estimate_duration};

#[test]
fn hours_and_minutes() {
    assert_eq!(
        estimate_duration("09:00", "10:30").as_deref(),
        Some("1 hour 30 minutes")
    );
    assert_eq!(
        estimate_duration("08:00", "10:05").as_deref(),
        Some("2 hours 5 minutes")
    );
    assert_eq!(estimate_duration("09:00", "10:00").as_deref(), Some("1 hour"));
    assert_eq!(estimate_duration("09:00", "09:01").as_deref(), Some("1 minute"));
    assert_eq!(
        estimate_duration("13:15:00", "13:45:00").as_deref(),
        Some("30 minutes")
    );
}

#[test]
fn reversed_or_equal_range_is_invalid() {
    assert_eq!(estimate_duration("10:30", "09:00").as_deref(), Some(INVALID_RANGE));
    assert_eq!(estimate_duration("09:00", "09:00").as_deref(), Some(INVALID_RANGE));
    assert_eq!(INVALID_RANGE, "Invalid time range");
}

#[test]
fn unparsable_time_is_invalid() {
    assert_eq!(estimate_duration("nine", "10:00").as_deref(), Some(INVALID_RANGE));
    assert_eq!(estimate_duration("09:00", "25:00").as_deref(), Some(INVALID_RANGE));
}

#[test]
fn blank_side_yields_nothing() {
    assert_eq!(estimate_duration("", "10:00"), None);
    assert_eq!(estimate_duration("09:00", "  "), None);
}

#[test]
fn record_refresh_uses_start_and_actual_finish() {
    let mut record = TimesheetRecord {
        start_time: "09:00".into(),
        actual_finish_time: "10:30".into(),
        estimated_duration: "stale".into(),
        ..TimesheetRecord::default()
    };
    record.refresh_duration();
    assert_eq!(record.estimated_duration, "1 hour 30 minutes");

    record.actual_finish_time.clear();
    record.refresh_duration();
    assert_eq!(record.estimated_duration, "1 hour 30 minutes");
}
