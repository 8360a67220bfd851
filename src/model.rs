use serde::{Deserialize, Serialize};

use crate::duration::estimate_duration;
use crate::error::Error;

/// Longest accepted "notes to interpreter" text, in characters.
pub const NOTES_MAX_CHARS: usize = 150;

pub const DEFAULT_DECLARATION: &str = "I am an authorised signatory for my department. I am signing to confirm that the Interpreter and the hours that I am authorising are accurate and I approve payment. I am signing to confirm that I have checked and verified the photo identification of the interpreter with the timesheet. I understand that if I knowingly provide false information this may result in disciplinary action and I may be liable to prosecution and civil recovery proceedings. I consent to the disclosure of information from this form to and by the Participating Authority for the purpose of verification of this claim and the investigation, prevention, detection and prosecution of fraud.";

/// Keys accepted by the performance rating row, in display order.
pub const RATING_KEYS: [&str; 5] = ["excellent", "good", "fair", "poor", "very poor"];

/// One filled-in timesheet. Every value is free text; enumerated answers
/// ("yes"/"no", rating keys) are plain strings matched exactly at render time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimesheetRecord {
    pub date: String,
    pub start_time: String,
    pub estimated_duration: String,
    pub language: String,
    pub subject: String,
    pub location: String,
    pub booking_made_by: String,
    pub service_user_name: String,
    pub notes_to_interpreter: String,
    pub interpreter_name: String,
    pub job_reference_no: String,
    pub interpreter_reports_to: String,
    pub reports_to_contact_number: String,
    pub actual_start_time: String,
    pub actual_finish_time: String,
    pub service_user_attended: String,
    pub interpreter_on_time: String,
    pub easy_to_arrange: String,
    pub performance_rating: String,
    pub customer_full_name: String,
    pub department: String,
    pub customer_signature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_signature_image: Option<String>,
    pub customer_date: String,
    pub interpreter_signature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpreter_signature_image: Option<String>,
    pub interpreter_date: String,
    pub custom_declaration: String,
}

impl Default for TimesheetRecord {
    fn default() -> Self {
        Self {
            date: String::new(),
            start_time: String::new(),
            estimated_duration: String::new(),
            language: String::new(),
            subject: String::new(),
            location: String::new(),
            booking_made_by: String::new(),
            service_user_name: String::new(),
            notes_to_interpreter: String::new(),
            interpreter_name: String::new(),
            job_reference_no: String::new(),
            interpreter_reports_to: String::new(),
            reports_to_contact_number: String::new(),
            actual_start_time: String::new(),
            actual_finish_time: String::new(),
            service_user_attended: String::new(),
            interpreter_on_time: String::new(),
            easy_to_arrange: String::new(),
            performance_rating: String::new(),
            customer_full_name: String::new(),
            department: String::new(),
            customer_signature: String::new(),
            customer_signature_image: None,
            customer_date: String::new(),
            interpreter_signature: String::new(),
            interpreter_signature_image: None,
            interpreter_date: String::new(),
            custom_declaration: DEFAULT_DECLARATION.to_string(),
        }
    }
}

impl TimesheetRecord {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply the fields present in a (possibly partial) JSON object on top of
    /// this record. Keys in `json` win.
    pub fn merged_with_json(&self, json: &str) -> Result<Self, Error> {
        let overlay: serde_json::Value = serde_json::from_str(json)?;
        let serde_json::Value::Object(fields) = overlay else {
            return Self::from_json(json);
        };
        let mut base = serde_json::to_value(self)?;
        if let serde_json::Value::Object(base_fields) = &mut base {
            base_fields.extend(fields);
        }
        Ok(serde_json::from_value(base)?)
    }

    /// A record with every field emptied except the declaration text.
    pub fn blank_template(&self) -> Self {
        Self {
            custom_declaration: self.custom_declaration.clone(),
            ..Self::empty()
        }
    }

    /// All fields empty, declaration included.
    pub fn empty() -> Self {
        Self {
            custom_declaration: String::new(),
            ..Self::default()
        }
    }

    /// Declaration text to print; the standard wording when none was given.
    pub fn declaration(&self) -> &str {
        if self.custom_declaration.trim().is_empty() {
            DEFAULT_DECLARATION
        } else {
            &self.custom_declaration
        }
    }

    /// Recompute `estimated_duration` from the booked start and actual finish
    /// times. Leaves the field alone unless both times are filled in.
    pub fn refresh_duration(&mut self) {
        if let Some(duration) = estimate_duration(&self.start_time, &self.actual_finish_time) {
            self.estimated_duration = duration;
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        let len = self.notes_to_interpreter.chars().count();
        if len > NOTES_MAX_CHARS {
            return Err(Error::NotesTooLong {
                len,
                max: NOTES_MAX_CHARS,
            });
        }
        Ok(())
    }
}

/// True when a value should render as the placeholder.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
