//! Standard Helvetica faces: metrics, WinAnsi encoding and line wrapping.
//!
//! All layout measurement goes through this module so that identical input
//! always produces identical line breaks.

/// Points per millimetre.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
}

impl FontStyle {
    pub const ALL: [FontStyle; 3] = [FontStyle::Regular, FontStyle::Bold, FontStyle::Italic];

    /// Resource name inside page dictionaries.
    pub fn pdf_name(self) -> &'static str {
        match self {
            FontStyle::Regular => "F1",
            FontStyle::Bold => "F2",
            FontStyle::Italic => "F3",
        }
    }

    pub fn base_font(self) -> &'static str {
        match self {
            FontStyle::Regular => "Helvetica",
            FontStyle::Bold => "Helvetica-Bold",
            FontStyle::Italic => "Helvetica-Oblique",
        }
    }

    fn widths(self) -> &'static [u16; 95] {
        match self {
            // Oblique shares the upright advance widths.
            FontStyle::Regular | FontStyle::Italic => &HELVETICA_WIDTHS,
            FontStyle::Bold => &HELVETICA_BOLD_WIDTHS,
        }
    }

    /// Advance width of one character in 1000-units.
    pub fn char_width_1000(self, ch: char) -> f32 {
        let byte = char_to_winansi(ch);
        match byte {
            32..=126 => self.widths()[(byte - 32) as usize] as f32,
            0 => 0.0,
            // Latin-1 and the 0x80 block: average lowercase width.
            _ => 556.0,
        }
    }
}

/// Helvetica AFM advance widths for WinAnsi 32..=126.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,      // p..~
];

/// Helvetica-Bold AFM advance widths for WinAnsi 32..=126.
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Map a single Unicode char to its WinAnsi byte, or 0 if unmappable.
fn char_to_winansi(c: char) -> u8 {
    match c as u32 {
        0x0020..=0x007E => c as u8,
        0x00A0..=0x00FF => c as u8,
        0x20AC => 0x80,
        0x201A => 0x82,
        0x0192 => 0x83,
        0x201E => 0x84,
        0x2026 => 0x85,
        0x2020 => 0x86,
        0x2021 => 0x87,
        0x02C6 => 0x88,
        0x2030 => 0x89,
        0x0160 => 0x8A,
        0x2039 => 0x8B,
        0x0152 => 0x8C,
        0x017D => 0x8E,
        0x2018 => 0x91,
        0x2019 => 0x92,
        0x201C => 0x93,
        0x201D => 0x94,
        0x2022 => 0x95,
        0x2013 => 0x96,
        0x2014 => 0x97,
        0x02DC => 0x98,
        0x2122 => 0x99,
        0x0161 => 0x9A,
        0x203A => 0x9B,
        0x0153 => 0x9C,
        0x017E => 0x9E,
        0x0178 => 0x9F,
        _ => 0,
    }
}

/// Convert a UTF-8 string to WinAnsi (Windows-1252) bytes for PDF Str encoding.
/// Unmappable characters are dropped.
pub(crate) fn to_winansi_bytes(s: &str) -> Vec<u8> {
    s.chars()
        .map(char_to_winansi)
        .filter(|&b| b != 0)
        .collect()
}

/// Width of `text` in millimetres at `size_pt`.
pub fn text_width(text: &str, style: FontStyle, size_pt: f32) -> f32 {
    let units: f32 = text.chars().map(|ch| style.char_width_1000(ch)).sum();
    units * size_pt / 1000.0 / PT_PER_MM
}

/// Break `text` into lines no wider than `max_width` millimetres.
///
/// Explicit newlines always break. Words are separated by single spaces; a
/// word wider than the whole line is split between characters. Returns at
/// least one line.
pub fn wrap_text(text: &str, style: FontStyle, size_pt: f32, max_width: f32) -> Vec<String> {
    let max_width = max_width.max(0.0);
    let space_w = text_width(" ", style, size_pt);
    let mut lines: Vec<String> = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_w = 0.0f32;

        for word in paragraph.split_whitespace() {
            let ww = text_width(word, style, size_pt);
            let proposed = if current.is_empty() {
                ww
            } else {
                current_w + space_w + ww
            };
            if proposed <= max_width {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                current_w = proposed;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_w = 0.0;
            }

            if ww <= max_width {
                current.push_str(word);
                current_w = ww;
                continue;
            }

            // Overlong word: hard-break between characters.
            for ch in word.chars() {
                let cw = style.char_width_1000(ch) * size_pt / 1000.0 / PT_PER_MM;
                if !current.is_empty() && current_w + cw > max_width {
                    lines.push(std::mem::take(&mut current));
                    current_w = 0.0;
                }
                current.push(ch);
                current_w += cw;
            }
        }
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
