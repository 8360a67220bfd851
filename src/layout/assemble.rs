use chrono::NaiveDate;

use crate::document::{Document, EmbeddedImage, ImageId};
use crate::error::Error;
use crate::model::TimesheetRecord;

use super::{BLOCK_GAP, Block, Cell, Column, LINE_SMALL, LayoutEngine, PageMetrics, RenderItem, SECTION_GAP, TwoColumn};

pub const TEMPLATE_FILENAME: &str = "Jambo_Timesheet_Template.pdf";
const FILENAME_PREFIX: &str = "Jambo_Timesheet";
const JOB_REF_MAX_CHARS: usize = 24;

const KV_LABEL_WIDTH: f32 = 40.0;
const BOOKING_SPACING: f32 = 1.2;
const CUSTOMER_SPACING: f32 = 1.8;

/// Signature images already embedded in the engine's image table.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignatureImages {
    pub customer: Option<ImageId>,
    pub interpreter: Option<ImageId>,
}

/// The timesheet's sections in print order.
pub fn timesheet_blocks(
    record: &TimesheetRecord,
    m: &PageMetrics,
    signatures: SignatureImages,
) -> Vec<Block> {
    let left_x = m.margin_x;
    let col_w = m.column_width();
    let half_w = m.content_width() / 2.0 - 6.0;
    let right_half_x = m.margin_x + m.content_width() / 2.0 + 6.0;
    let full = |label_width| Column::new(m.margin_x, label_width, m.content_width());
    let item = |label: &str, value: &str, spacing| RenderItem::new(label, value, spacing);

    let booking = |label: &str, value: &str| item(label, value, BOOKING_SPACING);
    let booking_details = TwoColumn {
        left_title: "BOOKING DETAILS".into(),
        left_column: Column::new(left_x, KV_LABEL_WIDTH, col_w),
        left: vec![
            booking("Date:", &record.date),
            booking("Start time:", &record.start_time),
            booking("End time:", &record.actual_finish_time),
            booking("Duration:", &record.estimated_duration),
            booking("Language:", &record.language),
            booking("Subject:", &record.subject),
            booking("Location:", &record.location),
            booking("Booking made by:", &record.booking_made_by),
            booking("Service user name:", &record.service_user_name),
            booking("Notes to interpreter:", &record.notes_to_interpreter),
        ],
        right_title: "INTERPRETER PROFILE".into(),
        right_column: Column::new(left_x + col_w + m.gutter, KV_LABEL_WIDTH, col_w),
        right: vec![
            booking("Name:", &record.interpreter_name),
            booking("Job Ref No:", &record.job_reference_no),
            booking("Reports to:", &record.interpreter_reports_to),
            booking("Contact number:", &record.reports_to_contact_number),
        ],
    };

    let yes_no = |question: &str, answer: &str| Block::YesNo {
        question: question.into(),
        answer: answer.into(),
    };

    vec![
        Block::TwoColumn(booking_details),
        Block::SectionTitle("TO BE COMPLETED BY THE CUSTOMER".into()),
        Block::Pair {
            left: Cell::Field {
                column: Column::new(left_x, 24.0, half_w),
                item: item("Start Time:", &record.actual_start_time, BOOKING_SPACING),
            },
            right: Cell::Field {
                column: Column::new(right_half_x, 24.0, half_w),
                item: item("Finish Time:", &record.actual_finish_time, BOOKING_SPACING),
            },
            gap_after: BLOCK_GAP,
        },
        yes_no("Did the service user attend?", &record.service_user_attended),
        yes_no("Did the interpreter arrive on time?", &record.interpreter_on_time),
        yes_no("Was it easy to arrange the interpreter?", &record.easy_to_arrange),
        Block::Rating {
            question: "How would you rate their performance?".into(),
            value: record.performance_rating.clone(),
        },
        Block::Instruction("Please complete the following fields in BLOCK CAPITALS:".into()),
        Block::Row(Cell::Field {
            column: full(40.0),
            item: item("Customer Full Name:", &record.customer_full_name, CUSTOMER_SPACING),
        }),
        Block::Row(Cell::Field {
            column: full(28.0),
            item: item("Department:", &record.department, CUSTOMER_SPACING),
        }),
        Block::Pair {
            left: Cell::Signature {
                column: Column::new(left_x, 42.0, half_w),
                item: item("Customer's Signature:", &record.customer_signature, CUSTOMER_SPACING),
                image: signatures.customer,
            },
            right: Cell::Field {
                column: Column::new(right_half_x, 14.0, half_w),
                item: item("Date:", &record.customer_date, CUSTOMER_SPACING),
            },
            gap_after: SECTION_GAP,
        },
        Block::SectionTitle("INTERPRETER'S DECLARATION".into()),
        Block::Paragraph(record.declaration().to_string()),
        Block::Pair {
            left: Cell::Signature {
                column: Column::new(left_x, 44.0, half_w),
                item: item("Interpreter's Signature:", &record.interpreter_signature, CUSTOMER_SPACING),
                image: signatures.interpreter,
            },
            right: Cell::Field {
                column: Column::new(right_half_x, 14.0, half_w),
                item: item("Date:", &record.interpreter_date, BOOKING_SPACING),
            },
            gap_after: LINE_SMALL * 1.2,
        },
    ]
}

/// Lay out `record` as it is; callers substitute a blank template beforehand
/// when one is wanted.
pub fn layout_timesheet(
    record: &TimesheetRecord,
    metrics: PageMetrics,
    logo: Option<EmbeddedImage>,
) -> Result<Document, Error> {
    let mut engine = LayoutEngine::new(metrics, logo);
    let signatures = SignatureImages {
        customer: engine.embed_signature(record.customer_signature_image.as_deref()),
        interpreter: engine.embed_signature(record.interpreter_signature_image.as_deref()),
    };

    for block in timesheet_blocks(record, &metrics, signatures) {
        engine.emit(&block)?;
    }
    log::debug!(
        "layout finished on page {} at y={:.1}mm",
        engine.cursor().page + 1,
        engine.cursor().y
    );
    Ok(engine.finish())
}

/// Job reference reduced to `[A-Za-z0-9_-]`, at most 24 characters.
fn sanitize_job_ref(job_ref: &str) -> String {
    job_ref
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .take(JOB_REF_MAX_CHARS)
        .collect()
}

/// `Jambo_Timesheet_<date>[_<job>].pdf`, or the fixed template name for blank
/// output. An empty date falls back to `today`.
pub fn timesheet_filename(record: &TimesheetRecord, blank: bool, today: NaiveDate) -> String {
    if blank {
        return TEMPLATE_FILENAME.to_string();
    }
    let date = if record.date.trim().is_empty() {
        today.format("%Y-%m-%d").to_string()
    } else {
        record.date.trim().replace('/', "-")
    };
    let job = sanitize_job_ref(&record.job_reference_no);
    if job.is_empty() {
        format!("{FILENAME_PREFIX}_{date}.pdf")
    } else {
        format!("{FILENAME_PREFIX}_{date}_{job}.pdf")
    }
}
