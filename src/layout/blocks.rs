use crate::document::{BLACK, ImageId, RectStyle};
use crate::fonts::{FontStyle, text_width, wrap_text};
use crate::model::{DEFAULT_DECLARATION, RATING_KEYS, is_blank};

use super::{
    BLOCK_GAP, DECLARATION_SIZE, LABEL_SIZE, LINE_NORMAL, LINE_SMALL, LayoutEngine, PLACEHOLDER,
    SECTION_GAP, SECTION_SIZE, SMALL_SIZE, VALUE_SIZE,
};

const RULE_COLOR: [u8; 3] = [200, 200, 200];
const DIVIDER_COLOR: [u8; 3] = [230, 230, 230];

const CHECKBOX_SIZE: f32 = 3.0;
const CHECKBOX_LABEL_GAP: f32 = 3.0;
const CHECKBOX_LINE_WIDTH: f32 = 0.2;
const TICK_LINE_WIDTH: f32 = 0.5;
const QUESTION_GAP: f32 = 8.0;
const YES_NO_GAP: f32 = 12.0;
const RATING_GAP: f32 = 10.0;
const RATING_LABELS: [&str; 5] = ["Excellent", "Good", "Fair", "Poor", "Very Poor"];

const SIGNATURE_IMAGE_HEIGHT: f32 = 12.0;
const SIGNATURE_IMAGE_GAP: f32 = 2.0;

/// Title baseline to underline.
const TITLE_RULE_OFFSET: f32 = 2.0;

fn question_advance() -> f32 {
    BLOCK_GAP * 1.2
}

fn instruction_advance() -> f32 {
    LINE_SMALL + (SECTION_GAP + 2.0) * 1.2
}

const PARAGRAPH_TRAILING: f32 = SECTION_GAP + 3.6;

/// Horizontal geometry of one label/value column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Column {
    pub x: f32,
    pub label_width: f32,
    pub value_width: f32,
}

impl Column {
    /// A column starting at `x` spanning `total_width`, values pushed right by
    /// `label_width`.
    pub fn new(x: f32, label_width: f32, total_width: f32) -> Self {
        Self {
            x,
            label_width,
            value_width: total_width - label_width,
        }
    }

    pub fn total_width(&self) -> f32 {
        self.label_width + self.value_width
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderItem {
    pub label: String,
    pub value: String,
    pub extra_spacing: f32,
}

impl RenderItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>, extra_spacing: f32) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            extra_spacing,
        }
    }

    fn display_value(&self) -> &str {
        if is_blank(&self.value) {
            PLACEHOLDER
        } else {
            &self.value
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Field {
        column: Column,
        item: RenderItem,
    },
    /// Signature image when one embedded, otherwise the typed value.
    Signature {
        column: Column,
        item: RenderItem,
        image: Option<ImageId>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct TwoColumn {
    pub left_title: String,
    pub left_column: Column,
    pub left: Vec<RenderItem>,
    pub right_title: String,
    pub right_column: Column,
    pub right: Vec<RenderItem>,
}

/// One unit of layout with a height known before drawing.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    SectionTitle(String),
    TwoColumn(TwoColumn),
    Row(Cell),
    /// Two cells side by side from the same baseline.
    Pair {
        left: Cell,
        right: Cell,
        gap_after: f32,
    },
    YesNo {
        question: String,
        answer: String,
    },
    Rating {
        question: String,
        value: String,
    },
    /// Divider rule followed by an italic instruction line.
    Instruction(String),
    /// Full-width wrapped text; empty text prints the standard declaration.
    Paragraph(String),
    Spacer(f32),
}

fn paragraph_text(text: &str) -> &str {
    if is_blank(text) { DEFAULT_DECLARATION } else { text }
}

impl LayoutEngine {
    /// Height of a label/value row: the wrapped value's line count at the
    /// small line height, never less than one normal line, plus the item's
    /// extra spacing.
    pub fn row_height(&self, item: &RenderItem, column: &Column) -> f32 {
        let lines = wrap_text(
            item.display_value(),
            FontStyle::Regular,
            VALUE_SIZE,
            column.value_width,
        );
        LINE_NORMAL.max(lines.len() as f32 * LINE_SMALL) + item.extra_spacing
    }

    pub fn column_height(&self, items: &[RenderItem], column: &Column) -> f32 {
        items.iter().map(|it| self.row_height(it, column)).sum()
    }

    fn cell_height(&self, cell: &Cell) -> f32 {
        match cell {
            Cell::Field { column, item } => self.row_height(item, column),
            Cell::Signature {
                image: Some(_), ..
            } => SIGNATURE_IMAGE_HEIGHT + SIGNATURE_IMAGE_GAP,
            Cell::Signature {
                column,
                item,
                image: None,
            } => self.row_height(item, column),
        }
    }

    /// Vertical space `block` consumes when drawn at the cursor.
    pub fn block_height(&self, block: &Block) -> f32 {
        match block {
            Block::SectionTitle(_) => TITLE_RULE_OFFSET + SECTION_GAP,
            Block::TwoColumn(tc) => {
                let left = self.column_height(&tc.left, &tc.left_column);
                let right = self.column_height(&tc.right, &tc.right_column);
                TITLE_RULE_OFFSET + SECTION_GAP + left.max(right) + BLOCK_GAP
            }
            Block::Row(cell) => self.cell_height(cell),
            Block::Pair {
                left,
                right,
                gap_after,
            } => self.cell_height(left).max(self.cell_height(right)) + gap_after,
            Block::YesNo { .. } => question_advance(),
            Block::Rating { .. } => 2.0 * question_advance(),
            Block::Instruction(_) => instruction_advance(),
            Block::Paragraph(text) => {
                let lines = wrap_text(
                    paragraph_text(text),
                    FontStyle::Regular,
                    DECLARATION_SIZE,
                    self.metrics.content_width(),
                );
                lines.len() as f32 * LINE_SMALL + PARAGRAPH_TRAILING
            }
            Block::Spacer(h) => *h,
        }
    }

    pub(super) fn draw_block(&mut self, block: &Block) {
        match block {
            Block::SectionTitle(title) => {
                let (x, width) = (self.metrics.margin_x, self.metrics.content_width());
                self.draw_title(title, x, width);
                self.cursor.y += TITLE_RULE_OFFSET + SECTION_GAP;
            }
            Block::TwoColumn(tc) => self.draw_two_column(tc),
            Block::Row(cell) => {
                self.draw_cell(cell);
            }
            Block::Pair {
                left,
                right,
                gap_after,
            } => {
                let start = self.cursor.y;
                self.draw_cell(left);
                let left_end = self.cursor.y;
                self.cursor.y = start;
                self.draw_cell(right);
                self.cursor.y = left_end.max(self.cursor.y) + gap_after;
            }
            Block::YesNo { question, answer } => self.draw_yes_no(question, answer),
            Block::Rating { question, value } => self.draw_rating(question, value),
            Block::Instruction(text) => {
                let (x, width) = (self.metrics.margin_x, self.metrics.content_width());
                let y = self.cursor.y;
                self.line(x, y, x + width, y, DIVIDER_COLOR, CHECKBOX_LINE_WIDTH);
                self.cursor.y += LINE_SMALL;
                let y = self.cursor.y;
                self.text(x, y, text, FontStyle::Italic, SMALL_SIZE, BLACK);
                self.cursor.y += (SECTION_GAP + 2.0) * 1.2;
            }
            Block::Paragraph(text) => {
                let x = self.metrics.margin_x;
                let lines = wrap_text(
                    paragraph_text(text),
                    FontStyle::Regular,
                    DECLARATION_SIZE,
                    self.metrics.content_width(),
                );
                let top = self.cursor.y;
                for (i, line) in lines.iter().enumerate() {
                    let y = top + i as f32 * LINE_SMALL;
                    self.text(x, y, line, FontStyle::Regular, DECLARATION_SIZE, BLACK);
                }
                self.cursor.y += lines.len() as f32 * LINE_SMALL + PARAGRAPH_TRAILING;
            }
            Block::Spacer(h) => self.cursor.y += h,
        }
    }

    fn draw_title(&mut self, title: &str, x: f32, width: f32) {
        let y = self.cursor.y;
        self.text(x, y, title, FontStyle::Bold, SECTION_SIZE, BLACK);
        let rule_y = y + TITLE_RULE_OFFSET;
        self.line(x, rule_y, x + width, rule_y, RULE_COLOR, 0.4);
    }

    /// Bold label, then the wrapped value (or placeholder) beside it. Advances
    /// the cursor by the row height and returns it.
    fn draw_label_value(&mut self, item: &RenderItem, column: &Column) -> f32 {
        let y = self.cursor.y;
        self.text(column.x, y, &item.label, FontStyle::Bold, LABEL_SIZE, BLACK);

        let lines = wrap_text(
            item.display_value(),
            FontStyle::Regular,
            VALUE_SIZE,
            column.value_width,
        );
        let value_x = column.x + column.label_width;
        for (i, line) in lines.iter().enumerate() {
            let line_y = y + i as f32 * LINE_SMALL;
            self.text(value_x, line_y, line, FontStyle::Regular, VALUE_SIZE, BLACK);
        }

        let height = self.row_height(item, column);
        self.cursor.y += height;
        height
    }

    /// Draw items top to bottom from `start_y` without page-break checks and
    /// return where the column ends.
    fn draw_items(&mut self, items: &[RenderItem], column: &Column, start_y: f32) -> f32 {
        self.cursor.y = start_y;
        for item in items {
            self.draw_label_value(item, column);
        }
        self.cursor.y
    }

    fn draw_two_column(&mut self, tc: &TwoColumn) {
        self.draw_title(&tc.left_title, tc.left_column.x, tc.left_column.total_width());
        self.draw_title(&tc.right_title, tc.right_column.x, tc.right_column.total_width());
        self.cursor.y += TITLE_RULE_OFFSET + SECTION_GAP;

        let start = self.cursor.y;
        let left_end = self.draw_items(&tc.left, &tc.left_column, start);
        let right_end = self.draw_items(&tc.right, &tc.right_column, start);
        self.cursor.y = left_end.max(right_end) + BLOCK_GAP;
    }

    fn draw_cell(&mut self, cell: &Cell) {
        match cell {
            Cell::Field { column, item } => {
                self.draw_label_value(item, column);
            }
            Cell::Signature {
                column,
                item,
                image: Some(image),
            } => {
                let y = self.cursor.y;
                self.text(column.x, y, &item.label, FontStyle::Bold, LABEL_SIZE, BLACK);
                self.image(
                    column.x + column.label_width,
                    y - (SIGNATURE_IMAGE_HEIGHT - 3.0),
                    column.value_width,
                    SIGNATURE_IMAGE_HEIGHT,
                    *image,
                );
                self.cursor.y += SIGNATURE_IMAGE_HEIGHT + SIGNATURE_IMAGE_GAP;
            }
            Cell::Signature {
                column,
                item,
                image: None,
            } => {
                self.draw_label_value(item, column);
            }
        }
    }

    /// Box with an optional tick, then its label. Returns the horizontal
    /// advance (box, gap and label width).
    fn draw_checkbox(&mut self, x: f32, baseline: f32, label: &str, checked: bool) -> f32 {
        let s = CHECKBOX_SIZE;
        let box_y = baseline - s + 1.0;
        self.rect(
            x,
            box_y,
            s,
            s,
            RectStyle::Stroke {
                color: BLACK,
                width: CHECKBOX_LINE_WIDTH,
            },
        );
        if checked {
            let (x1, y1) = (x + 0.7, box_y + s * 0.55);
            let (x2, y2) = (x + s * 0.45, box_y + s - 0.7);
            let (x3, y3) = (x + s - 0.6, box_y + 0.7);
            self.line(x1, y1, x2, y2, BLACK, TICK_LINE_WIDTH);
            self.line(x2, y2, x3, y3, BLACK, TICK_LINE_WIDTH);
        }
        self.text(x + s + CHECKBOX_LABEL_GAP, baseline, label, FontStyle::Regular, VALUE_SIZE, BLACK);
        s + CHECKBOX_LABEL_GAP + text_width(label, FontStyle::Regular, VALUE_SIZE)
    }

    fn draw_yes_no(&mut self, question: &str, answer: &str) {
        let x = self.metrics.margin_x;
        let y = self.cursor.y;
        self.text(x, y, question, FontStyle::Regular, VALUE_SIZE, BLACK);

        let mut cursor_x = x + text_width(question, FontStyle::Regular, VALUE_SIZE) + QUESTION_GAP;
        cursor_x += self.draw_checkbox(cursor_x, y, "Yes", answer == "yes") + YES_NO_GAP;
        self.draw_checkbox(cursor_x, y, "No", answer == "no");

        self.cursor.y += question_advance();
    }

    fn draw_rating(&mut self, question: &str, value: &str) {
        let x = self.metrics.margin_x;
        let y = self.cursor.y;
        self.text(x, y, question, FontStyle::Regular, VALUE_SIZE, BLACK);
        self.cursor.y += question_advance();

        let y = self.cursor.y;
        let mut cursor_x = x;
        for (label, key) in RATING_LABELS.iter().zip(RATING_KEYS) {
            cursor_x += self.draw_checkbox(cursor_x, y, label, value == key) + RATING_GAP;
        }
        self.cursor.y += question_advance();
    }
}
