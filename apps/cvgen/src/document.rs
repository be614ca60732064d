//! In-memory document model handed from the composer to the layout engine.
#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use crate::style::{Alignment, Color, Font, CV_SECTION};

/// Points per inch.
pub const INCH: f32 = 72.0;

// ────────────────────────────────────────────────────────────────────────────
// Rich text
// ────────────────────────────────────────────────────────────────────────────

/// One annotated run of paragraph text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextRun {
    Text(String),
    Bold(String),
    LineBreak,
}

/// Paragraph text as a sequence of runs. Whitespace inside runs is collapsed at layout time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText {
    pub runs: Vec<TextRun>,
}

impl RichText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new().text(text)
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.runs.push(TextRun::Text(text.into()));
        self
    }

    pub fn bold(mut self, text: impl Into<String>) -> Self {
        self.runs.push(TextRun::Bold(text.into()));
        self
    }

    pub fn line_break(mut self) -> Self {
        self.runs.push(TextRun::LineBreak);
        self
    }

    /// The text without annotations; line breaks become `\n`.
    pub fn plain_text(&self) -> String {
        self.runs
            .iter()
            .map(|run| match run {
                TextRun::Text(s) | TextRun::Bold(s) => s.as_str(),
                TextRun::LineBreak => "\n",
            })
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Blocks
// ────────────────────────────────────────────────────────────────────────────

/// Attributes shared by every cell of one table column.
#[derive(Debug, Clone, PartialEq)]
pub struct CellStyle {
    pub font: Font,
    pub font_size: f32,
    pub leading: f32,
    pub color: Color,
    pub alignment: Alignment,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

/// A two-column grid of (label, value) rows. Cells hold a single line and are top-aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct TableBlock {
    pub rows: Vec<(String, String)>,
    pub column_widths: [f32; 2],
    pub columns: [CellStyle; 2],
    pub padding: Padding,
}

impl TableBlock {
    pub const COLUMNS: usize = 2;

    pub fn width(&self) -> f32 {
        self.column_widths.iter().sum()
    }

    pub fn row_height(&self) -> f32 {
        let content = self.columns[0].leading.max(self.columns[1].leading);
        self.padding.top + content + self.padding.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

/// A horizontal rule spanning `width_fraction` of the frame, centred.
#[derive(Debug, Clone, PartialEq)]
pub struct DividerBlock {
    pub width_fraction: f32,
    pub thickness: f32,
    pub color: Color,
    pub cap: LineCap,
    pub space_before: f32,
    pub space_after: f32,
}

/// One discrete, styled unit of document content. `style` names an entry of the style sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Heading { text: String, style: String },
    Subheading { text: String, style: String },
    Paragraph { text: RichText, style: String },
    Divider(DividerBlock),
    Spacer { height: f32 },
    Table(TableBlock),
}

impl ContentBlock {
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Heading { .. } => "heading",
            ContentBlock::Subheading { .. } => "subheading",
            ContentBlock::Paragraph { .. } => "paragraph",
            ContentBlock::Divider(_) => "divider",
            ContentBlock::Spacer { .. } => "spacer",
            ContentBlock::Table(_) => "table",
        }
    }

    /// Section headings stay on the same page as the first line of whatever follows them.
    pub fn keeps_with_next(&self) -> bool {
        matches!(self, ContentBlock::Heading { style, .. } if style == CV_SECTION)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Document
// ────────────────────────────────────────────────────────────────────────────

/// Page size, margins and the inner padding of the content frame, all in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSetup {
    pub width: f32,
    pub height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub frame_padding: f32,
}

impl PageSetup {
    pub const A4_WIDTH: f32 = 595.275_6;
    pub const A4_HEIGHT: f32 = 841.889_8;

    /// A4 with one-inch margins.
    pub fn a4() -> Self {
        PageSetup {
            width: Self::A4_WIDTH,
            height: Self::A4_HEIGHT,
            margin_top: INCH,
            margin_bottom: INCH,
            margin_left: INCH,
            margin_right: INCH,
            frame_padding: 6.0,
        }
    }

    pub fn frame_left(&self) -> f32 {
        self.margin_left + self.frame_padding
    }

    pub fn frame_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right - 2.0 * self.frame_padding
    }

    /// y of the top edge of the frame (PDF coordinates, origin bottom-left).
    pub fn frame_top(&self) -> f32 {
        self.height - self.margin_top - self.frame_padding
    }

    pub fn frame_bottom(&self) -> f32 {
        self.margin_bottom + self.frame_padding
    }

    pub fn frame_height(&self) -> f32 {
        self.frame_top() - self.frame_bottom()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    pub title: String,
    pub author: String,
}

/// An ordered block sequence plus page configuration. Built once, rendered once.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub page: PageSetup,
    pub metadata: Metadata,
    pub blocks: Vec<ContentBlock>,
}
