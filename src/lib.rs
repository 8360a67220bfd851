pub mod assets;
pub mod config;
pub mod document;
pub mod duration;
mod error;
pub mod export;
pub mod fonts;
pub mod images;
pub mod layout;
pub mod model;
pub mod pdf;
pub mod store;

pub use error::{AssetError, Error, ImageError};
pub use model::TimesheetRecord;

use std::time::Instant;

use assets::LogoSource;
use layout::PageMetrics;

#[derive(Clone, Debug, Default)]
pub struct RenderOptions {
    /// Render an empty template: every value becomes the placeholder and no
    /// signature images are drawn. The declaration text is kept.
    pub blank: bool,
    pub metrics: PageMetrics,
}

#[derive(Clone, Debug)]
pub struct RenderedTimesheet {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

pub fn render_timesheet(
    record: &TimesheetRecord,
    options: &RenderOptions,
    logo: &dyn LogoSource,
) -> Result<RenderedTimesheet, Error> {
    let t0 = Instant::now();

    let template;
    let record = if options.blank {
        template = record.blank_template();
        &template
    } else {
        record.validate()?;
        record
    };

    let logo_image = assets::load_logo(logo);
    log::debug!(
        "logo from {}: {}",
        logo.describe(),
        if logo_image.is_some() { "loaded" } else { "placeholder" }
    );
    let t_logo = t0.elapsed();

    let doc = layout::layout_timesheet(record, options.metrics, logo_image)?;
    let t_layout = t0.elapsed();

    let bytes = pdf::write(&doc);
    let t_total = t0.elapsed();

    let today = chrono::Utc::now().date_naive();
    let filename = layout::timesheet_filename(record, options.blank, today);

    log::info!(
        "Timing: logo={:.1}ms, layout={:.1}ms, write={:.1}ms, total={:.1}ms ({} pages, {} bytes)",
        t_logo.as_secs_f64() * 1000.0,
        (t_layout - t_logo).as_secs_f64() * 1000.0,
        (t_total - t_layout).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        doc.page_count(),
        bytes.len(),
    );

    Ok(RenderedTimesheet {
        filename,
        bytes,
        page_count: doc.page_count(),
    })
}
