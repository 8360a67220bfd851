mod common;

use jambo_timesheet::assets::{FileLogo, NoLogo, load_logo};
use jambo_timesheet::document::{DrawOp, ImageId, RectStyle};
use jambo_timesheet::export::{ExportMode, ExportOutcome, export};
use jambo_timesheet::layout::{LOGO_PLACEHOLDER_COLOR, PLACEHOLDER, PageMetrics, layout_timesheet};
use jambo_timesheet::{RenderOptions, render_timesheet};

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

fn image_ops(ops: &[DrawOp]) -> usize {
    ops.iter()
        .filter(|op| matches!(op, DrawOp::Image { .. }))
        .count()
}

fn has_logo_placeholder(ops: &[DrawOp]) -> bool {
    ops.iter().any(|op| {
        matches!(op, DrawOp::Rect { style: RectStyle::Fill(c), .. } if *c == LOGO_PLACEHOLDER_COLOR)
    })
}

#[test]
fn renders_a_pdf() {
    let _ = env_logger::try_init();
    let rendered = render_timesheet(&common::filled_record(), &RenderOptions::default(), &NoLogo)
        .expect("render");
    assert_eq!(rendered.page_count, 1);
    assert_eq!(rendered.filename, "Jambo_Timesheet_2024-01-05_JR-99.pdf");
    assert!(rendered.bytes.starts_with(b"%PDF-"));
    assert!(contains(&rendered.bytes, b"%%EOF"));
    assert!(contains(&rendered.bytes, b"/Helvetica-Bold"));
    assert!(contains(&rendered.bytes, b"/WinAnsiEncoding"));
}

#[test]
fn blank_template_renders() {
    let _ = env_logger::try_init();
    let mut record = common::filled_record();
    record.custom_declaration = "We confirm the hours above.".into();
    record.customer_signature_image = Some(common::png_data_url(40, 12));
    record.interpreter_signature_image = Some(common::png_data_url(40, 12));

    let options = RenderOptions {
        blank: true,
        ..RenderOptions::default()
    };
    let rendered = render_timesheet(&record, &options, &NoLogo).expect("render");
    assert_eq!(rendered.filename, "Jambo_Timesheet_Template.pdf");
    assert_eq!(rendered.page_count, 1);

    let doc = layout_timesheet(&record.blank_template(), PageMetrics::default(), None)
        .expect("layout");
    let texts = common::all_text(&doc.pages);
    assert_eq!(texts.iter().filter(|t| *t == PLACEHOLDER).count(), 22);
    assert!(texts.iter().any(|t| t == "We confirm the hours above."));
    assert!(!texts.iter().any(|t| t == "Swahili" || t == "MARY SMITH"));

    assert!(doc.images.is_empty());
    for page in &doc.pages {
        assert_eq!(common::tick_strokes(&page.content), 0);
        assert_eq!(image_ops(&page.content), 0);
    }
}

#[test]
fn signature_image_is_embedded() {
    let mut record = common::filled_record();
    record.customer_signature_image = Some(common::png_data_url(40, 12));

    let doc = layout_timesheet(&record, PageMetrics::default(), None).expect("layout");
    assert_eq!(doc.images.len(), 1);
    let signature = doc.image(ImageId(0)).expect("embedded signature");
    assert_eq!((signature.pixel_width, signature.pixel_height), (40, 12));
    assert!(doc.image(ImageId(1)).is_none());
    assert_eq!(image_ops(&doc.pages[0].content), 1);
    assert!(!doc.pages[0].texts().any(|(t, _, _)| t == "M Smith"));

    let bytes = jambo_timesheet::pdf::write(&doc);
    assert!(contains(&bytes, b"/SMask"));
}

#[test]
fn undecodable_signature_falls_back_to_text() {
    let mut record = common::filled_record();
    record.customer_signature_image = Some("data:image/png;base64,!!!not-base64".into());
    record.interpreter_signature_image = Some("data:image/png;base64,aGVsbG8=".into());

    let doc = layout_timesheet(&record, PageMetrics::default(), None).expect("layout");
    assert!(doc.images.is_empty());
    assert_eq!(image_ops(&doc.pages[0].content), 0);
    assert!(doc.pages[0].texts().any(|(t, _, _)| t == "M Smith"));
    assert!(doc.pages[0].texts().any(|(t, _, _)| t == "A Mwangi"));
}

#[test]
fn missing_logo_draws_placeholder() {
    let logo = load_logo(&FileLogo("/nonexistent/jambo-logo.png".into()));
    assert!(logo.is_none());

    let doc = layout_timesheet(&common::filled_record(), PageMetrics::default(), logo)
        .expect("layout");
    let page = &doc.pages[0];
    assert!(has_logo_placeholder(&page.content));
    assert!(page.texts().any(|(t, _, _)| t == "COMPANY"));
    assert!(page.texts().any(|(t, _, _)| t == "LOGO"));
}

#[test]
fn logo_file_is_embedded_once() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("logo.png");
    let img = image::RgbImage::from_pixel(90, 24, image::Rgb([128, 0, 128]));
    img.save(&path).expect("save png");

    let logo = load_logo(&FileLogo(path));
    assert!(logo.is_some());

    let mut record = common::filled_record();
    record.custom_declaration = (1..=45)
        .map(|i| format!("Clause {i}."))
        .collect::<Vec<_>>()
        .join("\n");
    let doc = layout_timesheet(&record, PageMetrics::default(), logo).expect("layout");
    assert_eq!(doc.page_count(), 2);
    assert_eq!(doc.images.len(), 1);
    for page in &doc.pages {
        assert_eq!(image_ops(&page.content), 1);
        assert!(!has_logo_placeholder(&page.content));
    }
}

#[test]
fn export_saves_and_falls_back_from_share() {
    let dir = tempfile::tempdir().expect("tempdir");
    let rendered = render_timesheet(&common::filled_record(), &RenderOptions::default(), &NoLogo)
        .expect("render");

    let outcome = export(&rendered, ExportMode::Download, dir.path(), None).expect("save");
    let expected = dir.path().join(&rendered.filename);
    assert_eq!(outcome, ExportOutcome::Saved(expected.clone()));
    assert_eq!(std::fs::read(&expected).expect("read"), rendered.bytes);

    let outcome = export(&rendered, ExportMode::Share, dir.path(), None).expect("fallback");
    assert_eq!(outcome, ExportOutcome::Saved(expected.clone()));

    let outcome = export(
        &rendered,
        ExportMode::Share,
        dir.path(),
        Some("jambo-no-such-share-command --flag"),
    )
    .expect("fallback");
    assert_eq!(outcome, ExportOutcome::Saved(expected));
}
