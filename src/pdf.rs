use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str};

use crate::document::{Document, DrawOp, EmbeddedImage, ImageData, RectStyle, Rgb};
use crate::fonts::{FontStyle, PT_PER_MM, to_winansi_bytes};

fn rgb(c: Rgb) -> (f32, f32, f32) {
    (c[0] as f32 / 255.0, c[1] as f32 / 255.0, c[2] as f32 / 255.0)
}

fn embed_image(pdf: &mut Pdf, img: &EmbeddedImage, alloc: &mut impl FnMut() -> Ref) -> Ref {
    let xobj_ref = alloc();
    let (w, h) = (img.pixel_width as i32, img.pixel_height as i32);

    match &img.data {
        ImageData::Jpeg(bytes) => {
            let mut xobj = pdf.image_xobject(xobj_ref, bytes);
            xobj.filter(Filter::DctDecode);
            xobj.width(w);
            xobj.height(h);
            xobj.color_space().device_rgb();
            xobj.bits_per_component(8);
        }
        ImageData::Raw { rgb, alpha } => {
            let smask_ref = alpha.as_ref().map(|alpha| {
                let compressed_alpha = miniz_oxide::deflate::compress_to_vec_zlib(alpha, 6);
                let mask_ref = alloc();
                let mut mask = pdf.image_xobject(mask_ref, &compressed_alpha);
                mask.filter(Filter::FlateDecode);
                mask.width(w);
                mask.height(h);
                mask.color_space().device_gray();
                mask.bits_per_component(8);
                mask_ref
            });

            let compressed_rgb = miniz_oxide::deflate::compress_to_vec_zlib(rgb, 6);
            let mut xobj = pdf.image_xobject(xobj_ref, &compressed_rgb);
            xobj.filter(Filter::FlateDecode);
            xobj.width(w);
            xobj.height(h);
            xobj.color_space().device_rgb();
            xobj.bits_per_component(8);
            if let Some(mask_ref) = smask_ref {
                xobj.s_mask(mask_ref);
            }
        }
    }
    xobj_ref
}

fn image_name(index: usize) -> String {
    format!("Im{}", index + 1)
}

/// Translates top-left millimetre coordinates into PDF user space.
struct PageSpace {
    height_mm: f32,
}

impl PageSpace {
    fn x(&self, x: f32) -> f32 {
        x * PT_PER_MM
    }

    /// PDF y of a point `y` millimetres below the top edge.
    fn y(&self, y: f32) -> f32 {
        (self.height_mm - y) * PT_PER_MM
    }

    fn len(&self, l: f32) -> f32 {
        l * PT_PER_MM
    }
}

fn render_ops<'a>(content: &mut Content, ops: impl Iterator<Item = &'a DrawOp>, space: &PageSpace) {
    for op in ops {
        match op {
            DrawOp::Rect { x, y, w, h, style } => {
                content.save_state();
                match style {
                    RectStyle::Fill(color) => {
                        let (r, g, b) = rgb(*color);
                        content.set_fill_rgb(r, g, b);
                    }
                    RectStyle::Stroke { color, width } => {
                        let (r, g, b) = rgb(*color);
                        content.set_stroke_rgb(r, g, b);
                        content.set_line_width(space.len(*width));
                    }
                }
                content.rect(
                    space.x(*x),
                    space.y(y + h),
                    space.len(*w),
                    space.len(*h),
                );
                match style {
                    RectStyle::Fill(_) => content.fill_nonzero(),
                    RectStyle::Stroke { .. } => content.stroke(),
                };
                content.restore_state();
            }
            DrawOp::Line {
                x1,
                y1,
                x2,
                y2,
                color,
                width,
            } => {
                let (r, g, b) = rgb(*color);
                content.save_state();
                content.set_stroke_rgb(r, g, b);
                content.set_line_width(space.len(*width));
                content.move_to(space.x(*x1), space.y(*y1));
                content.line_to(space.x(*x2), space.y(*y2));
                content.stroke();
                content.restore_state();
            }
            DrawOp::Text {
                x,
                y,
                text,
                font,
                size,
                color,
            } => {
                let (r, g, b) = rgb(*color);
                content.begin_text();
                content.set_fill_rgb(r, g, b);
                content.set_font(Name(font.pdf_name().as_bytes()), *size);
                content.next_line(space.x(*x), space.y(*y));
                content.show(Str(&to_winansi_bytes(text)));
                content.end_text();
            }
            DrawOp::Image { x, y, w, h, image } => {
                let name = image_name(image.0);
                content.save_state();
                content.transform([
                    space.len(*w),
                    0.0,
                    0.0,
                    space.len(*h),
                    space.x(*x),
                    space.y(y + h),
                ]);
                content.x_object(Name(name.as_bytes()));
                content.restore_state();
            }
        }
    }
}

/// Serialize a laid-out document. Footer overlays are drawn after each page's
/// content so they sit on top.
pub fn write(doc: &Document) -> Vec<u8> {
    let t0 = std::time::Instant::now();
    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();

    let font_refs: Vec<(FontStyle, Ref)> = FontStyle::ALL
        .iter()
        .map(|&style| {
            let font_ref = alloc();
            pdf.type1_font(font_ref)
                .base_font(Name(style.base_font().as_bytes()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
            (style, font_ref)
        })
        .collect();

    let image_refs: Vec<(String, Ref)> = doc
        .images
        .iter()
        .enumerate()
        .map(|(i, img)| (image_name(i), embed_image(&mut pdf, img, &mut alloc)))
        .collect();
    let t_images = t0.elapsed();

    let space = PageSpace {
        height_mm: doc.page_height,
    };
    let n = doc.pages.len();
    let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

    for (i, page) in doc.pages.iter().enumerate() {
        let mut content = Content::new();
        render_ops(&mut content, page.ops(), &space);
        let raw = content.finish();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(raw.as_slice(), 6);
        pdf.stream(content_ids[i], &compressed)
            .filter(Filter::FlateDecode);
    }

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(n as i32);

    let media_box = Rect::new(
        0.0,
        0.0,
        doc.page_width * PT_PER_MM,
        doc.page_height * PT_PER_MM,
    );
    for i in 0..n {
        let mut page = pdf.page(page_ids[i]);
        page.media_box(media_box)
            .parent(pages_id)
            .contents(content_ids[i]);
        let mut resources = page.resources();
        {
            let mut fonts = resources.fonts();
            for (style, font_ref) in &font_refs {
                fonts.pair(Name(style.pdf_name().as_bytes()), *font_ref);
            }
        }
        if !image_refs.is_empty() {
            let mut xobjects = resources.x_objects();
            for (name, xobj_ref) in &image_refs {
                xobjects.pair(Name(name.as_bytes()), *xobj_ref);
            }
        }
    }

    let bytes = pdf.finish();
    log::info!(
        "PDF write: images={:.1}ms, pages={:.1}ms ({} pages, {} bytes)",
        t_images.as_secs_f64() * 1000.0,
        (t0.elapsed() - t_images).as_secs_f64() * 1000.0,
        n,
        bytes.len(),
    );
    bytes
}
