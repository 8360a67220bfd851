//! Paginated layout of a timesheet into [`Document`] pages.
//!
//! Coordinates are millimetres from the top-left page corner. The engine owns
//! a single [`LayoutCursor`]; every block is measured first, the pagination
//! check runs, and only then is the block drawn.

mod assemble;
mod blocks;
mod chrome;

use crate::document::{Document, DrawOp, EmbeddedImage, ImageId, Page, RectStyle, Rgb};
use crate::error::Error;
use crate::fonts::FontStyle;
use crate::images::decode_data_url;

pub use assemble::{
    SignatureImages, TEMPLATE_FILENAME, layout_timesheet, timesheet_blocks, timesheet_filename,
};
pub use blocks::{Block, Cell, Column, RenderItem, TwoColumn};
pub use chrome::{COMPANY_NAME, LOGO_PLACEHOLDER_COLOR};

/// Substituted for empty field values.
pub const PLACEHOLDER: &str = "_________________";

pub const LINE_SMALL: f32 = 3.0;
pub const LINE_NORMAL: f32 = 4.2;
pub const SECTION_GAP: f32 = 3.6;
pub const BLOCK_GAP: f32 = 4.8;

/// Font sizes in points.
pub const SECTION_SIZE: f32 = 11.0;
pub const LABEL_SIZE: f32 = 10.0;
pub const VALUE_SIZE: f32 = 10.0;
pub const SMALL_SIZE: f32 = 9.0;
pub const DECLARATION_SIZE: f32 = 8.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageMetrics {
    pub page_width: f32,
    pub page_height: f32,
    pub margin_x: f32,
    pub margin_y: f32,
    pub footer_height: f32,
    pub header_height: f32,
    pub gutter: f32,
    pub safety_buffer: f32,
}

impl Default for PageMetrics {
    /// A4 portrait.
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin_x: 15.0,
            margin_y: 15.0,
            footer_height: 18.0,
            header_height: 30.0,
            gutter: 8.0,
            safety_buffer: 3.0,
        }
    }
}

impl PageMetrics {
    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin_x
    }

    pub fn column_width(&self) -> f32 {
        (self.content_width() - self.gutter) / 2.0
    }

    /// Top edge of the footer band.
    pub fn footer_top(&self) -> f32 {
        self.page_height - self.margin_y - self.footer_height
    }

    /// Lowest cursor position a block may reach. Keeps a clearance band the
    /// height of the footer above it, plus the safety buffer.
    pub fn usable_bottom(&self) -> f32 {
        self.footer_top() - self.footer_height - self.safety_buffer
    }

    /// Cursor position right below the header band.
    pub fn content_top(&self) -> f32 {
        self.margin_y + self.header_height + 5.0
    }

    pub fn usable_height(&self) -> f32 {
        self.usable_bottom() - self.content_top()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutCursor {
    pub y: f32,
    /// Zero-based index of the page being written.
    pub page: usize,
}

pub struct LayoutEngine {
    metrics: PageMetrics,
    pages: Vec<Page>,
    images: Vec<EmbeddedImage>,
    cursor: LayoutCursor,
    logo: Option<ImageId>,
}

impl LayoutEngine {
    /// Start a document with its first page and header already drawn.
    pub fn new(metrics: PageMetrics, logo: Option<EmbeddedImage>) -> Self {
        let mut engine = Self {
            metrics,
            pages: Vec::new(),
            images: Vec::new(),
            cursor: LayoutCursor {
                y: metrics.content_top(),
                page: 0,
            },
            logo: None,
        };
        let logo = logo.map(|img| engine.embed_image(img));
        engine.logo = logo;
        engine.start_page();
        engine
    }

    pub fn metrics(&self) -> &PageMetrics {
        &self.metrics
    }

    pub fn cursor(&self) -> LayoutCursor {
        self.cursor
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn embed_image(&mut self, image: EmbeddedImage) -> ImageId {
        self.images.push(image);
        ImageId(self.images.len() - 1)
    }

    /// Embed a signature drawn or uploaded as a data URL. Undecodable payloads
    /// yield `None` so the row falls back to its text value.
    pub fn embed_signature(&mut self, data_url: Option<&str>) -> Option<ImageId> {
        let url = data_url.filter(|u| !u.trim().is_empty())?;
        match decode_data_url(url) {
            Ok(image) => Some(self.embed_image(image)),
            Err(e) => {
                log::warn!("Signature image not embeddable: {e}; using text fallback");
                None
            }
        }
    }

    fn start_page(&mut self) {
        self.pages.push(Page::default());
        self.cursor = LayoutCursor {
            y: self.metrics.content_top(),
            page: self.pages.len() - 1,
        };
        let header = chrome::header_ops(&self.metrics, self.logo);
        self.current_page().content.extend(header);
    }

    /// Break to a new page unless `required` more millimetres fit above the
    /// usable bottom. Returns whether a page was added.
    pub fn ensure_space(&mut self, required: f32) -> bool {
        if self.cursor.y + required <= self.metrics.usable_bottom() {
            return false;
        }
        log::debug!(
            "page break before block of {required:.1}mm at y={:.1} (page {})",
            self.cursor.y,
            self.cursor.page + 1
        );
        self.start_page();
        true
    }

    /// Measure, paginate and draw one block. Returns the height consumed.
    pub fn emit(&mut self, block: &Block) -> Result<f32, Error> {
        let height = self.block_height(block);
        let available = self.metrics.usable_height();
        if height > available {
            return Err(Error::BlockTooTall { height, available });
        }
        self.ensure_space(height);
        let start = self.cursor.y;
        self.draw_block(block);
        Ok(self.cursor.y - start)
    }

    /// Overlay the footer on every page and hand out the finished document.
    pub fn finish(mut self) -> Document {
        let footer = chrome::footer_ops(&self.metrics);
        for page in &mut self.pages {
            page.footer = footer.clone();
        }
        Document {
            page_width: self.metrics.page_width,
            page_height: self.metrics.page_height,
            pages: self.pages,
            images: self.images,
        }
    }

    fn current_page(&mut self) -> &mut Page {
        let idx = self.cursor.page;
        &mut self.pages[idx]
    }

    fn push(&mut self, op: DrawOp) {
        self.current_page().content.push(op);
    }

    fn text(&mut self, x: f32, y: f32, text: &str, font: FontStyle, size: f32, color: Rgb) {
        if text.is_empty() {
            return;
        }
        self.push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
            font,
            size,
            color,
        });
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgb, width: f32) {
        self.push(DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            width,
        });
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, style: RectStyle) {
        self.push(DrawOp::Rect { x, y, w, h, style });
    }

    fn image(&mut self, x: f32, y: f32, w: f32, h: f32, image: ImageId) {
        self.push(DrawOp::Image { x, y, w, h, image });
    }
}
