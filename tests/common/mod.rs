#![allow(dead_code)]

use std::io::Cursor;

use base64::Engine;
use jambo_timesheet::TimesheetRecord;
use jambo_timesheet::document::{BLACK, DrawOp, Page, RectStyle};

/// A record with every section filled in.
pub fn filled_record() -> TimesheetRecord {
    TimesheetRecord {
        date: "2024/01/05".into(),
        start_time: "09:00".into(),
        estimated_duration: "1 hour 30 minutes".into(),
        language: "Swahili".into(),
        subject: "Outpatient appointment".into(),
        location: "St James's Hospital, Leeds".into(),
        booking_made_by: "A. Booker".into(),
        service_user_name: "J. Doe".into(),
        notes_to_interpreter: "Report to reception on arrival.".into(),
        interpreter_name: "Amani Mwangi".into(),
        job_reference_no: "JR-99!".into(),
        interpreter_reports_to: "Ward 12 nurse".into(),
        reports_to_contact_number: "0113 000 0000".into(),
        actual_start_time: "09:05".into(),
        actual_finish_time: "10:30".into(),
        service_user_attended: "yes".into(),
        interpreter_on_time: "no".into(),
        easy_to_arrange: "yes".into(),
        performance_rating: "good".into(),
        customer_full_name: "MARY SMITH".into(),
        department: "OUTPATIENTS".into(),
        customer_signature: "M Smith".into(),
        customer_date: "05/01/2024".into(),
        interpreter_signature: "A Mwangi".into(),
        interpreter_date: "05/01/2024".into(),
        ..TimesheetRecord::default()
    }
}

/// A `data:image/png;base64,` URL of a small translucent image.
pub fn png_data_url(width: u32, height: u32) -> String {
    let img = image::RgbaImage::from_fn(width, height, |x, _| {
        image::Rgba([0, 0, (x * 40 % 255) as u8, 200])
    });
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("encode png");
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(&bytes)
    )
}

/// Tick marks are drawn as two black 0.5 mm strokes each.
pub fn tick_strokes(ops: &[DrawOp]) -> usize {
    ops.iter()
        .filter(|op| matches!(op, DrawOp::Line { color, width, .. } if *color == BLACK && *width == 0.5))
        .count()
}

pub fn checkbox_count(ops: &[DrawOp]) -> usize {
    ops.iter()
        .filter(|op| {
            matches!(op, DrawOp::Rect { w, h, style: RectStyle::Stroke { color, .. }, .. }
                if *color == BLACK && *w == 3.0 && *h == 3.0)
        })
        .count()
}

pub fn all_text(pages: &[Page]) -> Vec<String> {
    pages
        .iter()
        .flat_map(|p| p.texts().map(|(t, _, _)| t.to_string()))
        .collect()
}

/// Baseline of the first text op equal to `needle` on `page`.
pub fn text_y(page: &Page, needle: &str) -> Option<f32> {
    page.texts().find(|(t, _, _)| *t == needle).map(|(_, _, y)| y)
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}
