use crate::document::{DrawOp, ImageId, RectStyle, Rgb};
use crate::fonts::{FontStyle, text_width};

use super::PageMetrics;

pub const COMPANY_NAME: &str = "Jambo Linguists Ltd";
const TAGLINE: &str = "The Home Of Swahili";
const BUILDING: &str = "Radley House";
const ADDRESS: &str = "Richardshaw Rd, Pudsey, LS28 6LE";
const COMPANY_NUMBER: &str = "Company No. 15333696";
const EMAIL: &str = "jamii@jambolinguists.com";
const PHONE: &str = "+44 7938 065717";
const FOOTER_ADDRESS: [&str; 2] = ["Radley House, Richardshaw Rd", "Pudsey, LS28 6LE"];
const TITLE: &str = "TIMESHEET";

const BAND_FILL: Rgb = [248, 250, 252];
const BAND_BORDER: Rgb = [200, 200, 200];
const SLATE: Rgb = [51, 65, 85];
const SLATE_LIGHT: Rgb = [71, 85, 105];
const SLATE_DARK: Rgb = [30, 41, 59];
const WHITE: Rgb = [255, 255, 255];
pub const LOGO_PLACEHOLDER_COLOR: Rgb = [128, 0, 128];

const LOGO_WIDTH: f32 = 45.0;
const LOGO_HEIGHT: f32 = 12.0;
const LOGO_INSET: f32 = 5.0;
const TITLE_SIZE: f32 = 19.0;

enum Align {
    Left,
    Center,
    Right,
}

fn text(
    ops: &mut Vec<DrawOp>,
    s: &str,
    x: f32,
    y: f32,
    align: Align,
    font: FontStyle,
    size: f32,
    color: Rgb,
) {
    let x = match align {
        Align::Left => x,
        Align::Center => x - text_width(s, font, size) / 2.0,
        Align::Right => x - text_width(s, font, size),
    };
    ops.push(DrawOp::Text {
        x,
        y,
        text: s.to_string(),
        font,
        size,
        color,
    });
}

fn band(ops: &mut Vec<DrawOp>, x: f32, y: f32, w: f32, h: f32) {
    ops.push(DrawOp::Rect {
        x,
        y,
        w,
        h,
        style: RectStyle::Fill(BAND_FILL),
    });
    ops.push(DrawOp::Rect {
        x,
        y,
        w,
        h,
        style: RectStyle::Stroke {
            color: BAND_BORDER,
            width: 0.3,
        },
    });
}

/// Letterhead band drawn at the top of every page.
pub(super) fn header_ops(m: &PageMetrics, logo: Option<ImageId>) -> Vec<DrawOp> {
    let mut ops = Vec::new();
    let (left, top) = (m.margin_x, m.margin_y);
    let right = m.page_width - m.margin_x;
    band(&mut ops, left, top, m.content_width(), m.header_height);

    let (logo_x, logo_y) = (left + LOGO_INSET, top + LOGO_INSET);
    match logo {
        Some(image) => ops.push(DrawOp::Image {
            x: logo_x,
            y: logo_y,
            w: LOGO_WIDTH,
            h: LOGO_HEIGHT,
            image,
        }),
        None => {
            ops.push(DrawOp::Rect {
                x: logo_x,
                y: logo_y,
                w: LOGO_WIDTH,
                h: LOGO_HEIGHT,
                style: RectStyle::Fill(LOGO_PLACEHOLDER_COLOR),
            });
            let cx = logo_x + LOGO_WIDTH / 2.0;
            let cy = logo_y + LOGO_HEIGHT / 2.0;
            text(&mut ops, "COMPANY", cx, cy - 2.0, Align::Center, FontStyle::Bold, 8.0, WHITE);
            text(&mut ops, "LOGO", cx, cy + 2.0, Align::Center, FontStyle::Bold, 8.0, WHITE);
        }
    }

    let details_x = right - 5.0;
    text(&mut ops, BUILDING, details_x, top + 8.0, Align::Right, FontStyle::Bold, 9.0, SLATE);
    for (i, line) in [ADDRESS, COMPANY_NUMBER].iter().enumerate() {
        let y = top + 12.0 + i as f32 * 3.0;
        text(&mut ops, line, details_x, y, Align::Right, FontStyle::Regular, 7.0, SLATE_LIGHT);
    }

    let title_y = top + m.header_height - 8.0;
    text(
        &mut ops,
        TITLE,
        m.page_width / 2.0,
        title_y,
        Align::Center,
        FontStyle::Bold,
        TITLE_SIZE,
        SLATE_DARK,
    );
    let rule_y = top + m.header_height - 5.0;
    ops.push(DrawOp::Line {
        x1: left + 10.0,
        y1: rule_y,
        x2: right - 10.0,
        y2: rule_y,
        color: BAND_BORDER,
        width: 0.5,
    });

    ops
}

/// Contact band overlaid at the bottom of every page after layout.
pub(super) fn footer_ops(m: &PageMetrics) -> Vec<DrawOp> {
    let mut ops = Vec::new();
    let left = m.margin_x;
    let right = m.page_width - m.margin_x;
    let center = m.page_width / 2.0;
    let top = m.footer_top();

    band(&mut ops, left, top, m.content_width(), m.footer_height);
    ops.push(DrawOp::Line {
        x1: left,
        y1: top,
        x2: right,
        y2: top,
        color: BAND_BORDER,
        width: 0.3,
    });

    text(&mut ops, COMPANY_NAME, center, top + 6.0, Align::Center, FontStyle::Bold, 8.0, SLATE);
    text(&mut ops, TAGLINE, center, top + 10.0, Align::Center, FontStyle::Italic, 6.0, SLATE_LIGHT);

    text(&mut ops, EMAIL, left + 5.0, top + 14.0, Align::Left, FontStyle::Regular, 5.0, SLATE_LIGHT);
    text(&mut ops, PHONE, left + 5.0, top + 17.0, Align::Left, FontStyle::Regular, 5.0, SLATE_LIGHT);
    for (i, line) in FOOTER_ADDRESS.iter().enumerate() {
        let y = top + 14.0 + i as f32 * 3.0;
        text(&mut ops, line, right - 5.0, y, Align::Right, FontStyle::Regular, 5.0, SLATE_LIGHT);
    }

    text(
        &mut ops,
        COMPANY_NUMBER,
        center,
        top + m.footer_height,
        Align::Center,
        FontStyle::Regular,
        4.0,
        SLATE_LIGHT,
    );

    ops
}
