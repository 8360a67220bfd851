mod common;

use jambo_timesheet::assets::NoLogo;
use jambo_timesheet::config::{Config, ENV_LOGO, ENV_OUTPUT_DIR, ENV_STATE_DIR};
use jambo_timesheet::model::{DEFAULT_DECLARATION, NOTES_MAX_CHARS};
use jambo_timesheet::store::{FormStore, StoredForm};
use jambo_timesheet::{Error, RenderOptions, TimesheetRecord, render_timesheet};

#[test]
fn partial_json_fills_defaults() {
    let record = TimesheetRecord::from_json(r#"{"language":"Swahili","jobReferenceNo":"J7"}"#)
        .expect("parse");
    assert_eq!(record.language, "Swahili");
    assert_eq!(record.job_reference_no, "J7");
    assert_eq!(record.date, "");
    assert_eq!(record.custom_declaration, DEFAULT_DECLARATION);
    assert!(record.customer_signature_image.is_none());
}

#[test]
fn merge_lets_input_win() {
    let saved = common::filled_record();
    let merged = saved
        .merged_with_json(r#"{"language":"Lingala","department":""}"#)
        .expect("merge");
    assert_eq!(merged.language, "Lingala");
    assert_eq!(merged.department, "");
    assert_eq!(merged.interpreter_name, saved.interpreter_name);
}

#[test]
fn blank_template_keeps_only_declaration() {
    let mut record = common::filled_record();
    record.custom_declaration = "Custom wording.".into();
    record.customer_signature_image = Some(common::png_data_url(4, 2));

    let blank = record.blank_template();
    assert_eq!(blank.custom_declaration, "Custom wording.");
    assert_eq!(blank.language, "");
    assert!(blank.customer_signature_image.is_none());
    assert_eq!(
        blank,
        TimesheetRecord {
            custom_declaration: "Custom wording.".into(),
            ..TimesheetRecord::empty()
        }
    );
}

#[test]
fn notes_length_is_validated() {
    let mut record = common::filled_record();
    record.notes_to_interpreter = "n".repeat(NOTES_MAX_CHARS);
    assert!(record.validate().is_ok());

    record.notes_to_interpreter.push('!');
    let err = render_timesheet(&record, &RenderOptions::default(), &NoLogo)
        .expect_err("notes too long");
    assert!(
        matches!(err, Error::NotesTooLong { len: 151, max: 150 }),
        "got {err:?}"
    );

    let blank = RenderOptions {
        blank: true,
        ..RenderOptions::default()
    };
    render_timesheet(&record, &blank, &NoLogo).expect("blank mode skips validation");
}

#[test]
fn store_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FormStore::new(dir.path().join("nested"));

    let fresh = store.load();
    assert!(fresh.preview_open);
    assert_eq!(fresh.form, TimesheetRecord::default());

    let stored = StoredForm {
        form: common::filled_record(),
        preview_open: false,
    };
    store.save(&stored).expect("save");
    assert!(store.path().exists());
    assert_eq!(store.load(), stored);

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(store.path()).expect("read"))
            .expect("json");
    assert_eq!(json["form"]["jobReferenceNo"], "JR-99!");
    assert_eq!(json["preview_open"], false);
}

#[test]
fn corrupt_store_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FormStore::new(dir.path());
    std::fs::write(store.path(), "{ not json").expect("write");
    assert_eq!(store.load(), StoredForm::default());
}

#[test]
fn config_reads_lookup() {
    let config = Config::from_lookup(|key| match key {
        ENV_LOGO => Some("https://example.com/logo.png".into()),
        ENV_OUTPUT_DIR => Some("/tmp/out".into()),
        ENV_STATE_DIR => Some("/tmp/state".into()),
        _ => None,
    });
    assert_eq!(config.logo.as_deref(), Some("https://example.com/logo.png"));
    assert_eq!(config.output_dir, std::path::PathBuf::from("/tmp/out"));
    assert_eq!(config.state_dir, Some(std::path::PathBuf::from("/tmp/state")));
    assert_eq!(config.share_command, None);

    let blank = Config::from_lookup(|key| (key == ENV_LOGO).then(|| "  ".to_string()));
    assert_eq!(blank.logo, None);
    assert_eq!(blank.output_dir, std::path::PathBuf::from("."));
}
