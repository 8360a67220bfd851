//! Laid-out output: pages of drawing operations in millimetres, origin at the
//! top-left corner of the page, text positioned by its baseline.

use crate::fonts::FontStyle;

pub type Rgb = [u8; 3];

pub const BLACK: Rgb = [0, 0, 0];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageId(pub usize);

#[derive(Clone, Debug, PartialEq)]
pub enum RectStyle {
    Fill(Rgb),
    Stroke { color: Rgb, width: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        style: RectStyle,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Rgb,
        width: f32,
    },
    Text {
        x: f32,
        y: f32,
        text: String,
        font: FontStyle,
        size: f32,
        color: Rgb,
    },
    Image {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        image: ImageId,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    pub content: Vec<DrawOp>,
    /// Filled by the footer pass once every page exists.
    pub footer: Vec<DrawOp>,
}

impl Page {
    /// Content operations followed by the footer overlay.
    pub fn ops(&self) -> impl Iterator<Item = &DrawOp> {
        self.content.iter().chain(self.footer.iter())
    }

    /// Every text string on the page with its baseline position.
    pub fn texts(&self) -> impl Iterator<Item = (&str, f32, f32)> {
        self.ops().filter_map(|op| match op {
            DrawOp::Text { text, x, y, .. } => Some((text.as_str(), *x, *y)),
            _ => None,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ImageData {
    /// Baseline JPEG passed through with DCTDecode.
    Jpeg(Vec<u8>),
    /// 8-bit RGB samples, plus an 8-bit soft mask when any pixel is translucent.
    Raw { rgb: Vec<u8>, alpha: Option<Vec<u8>> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct EmbeddedImage {
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub data: ImageData,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub page_width: f32,
    pub page_height: f32,
    pub pages: Vec<Page>,
    pub images: Vec<EmbeddedImage>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn image(&self, id: ImageId) -> Option<&EmbeddedImage> {
        self.images.get(id.0)
    }
}
