//! Layout engine: turns a [`Document`] into positioned draw operations on fixed-size pages.
#![allow(dead_code)]
//!
//! Every block is first measured into a [`Flowable`] (a list of unsplittable units plus
//! the space around them), then units are stacked top-down in the page frame. A unit that
//! does not fit starts a new page; page breaks happen only between units, so paragraphs
//! and tables split at line and row boundaries.
//!
//! Layout is a pure function of the document and the style sheet.

pub mod encoding;
pub mod font_metrics;
pub mod paragraph;

use tracing::{debug, warn};

use crate::document::{
    ContentBlock, DividerBlock, Document, LineCap, Metadata, PageSetup, RichText, TableBlock,
};
use crate::errors::LayoutError;
use crate::style::{Alignment, Color, Font, StyleSheet};

use self::encoding::encode_str;
use self::font_metrics::get_metrics;
use self::paragraph::{wrap, Line};

/// Tolerance for float comparisons against the frame bottom.
const EPSILON: f32 = 1e-3;

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// A positioned drawing instruction in PDF user space (points, origin bottom-left).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// One run of text; `(x, y)` is the start of its baseline.
    Text {
        x: f32,
        y: f32,
        font: Font,
        size: f32,
        color: Color,
        text: String,
        /// `text` in WinAnsiEncoding.
        encoded: Vec<u8>,
    },
    /// A horizontal rule centred on `y`.
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
        thickness: f32,
        color: Color,
        cap: LineCap,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// Text runs in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            DrawOp::Rule { .. } => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutDocument {
    pub page: PageSetup,
    pub metadata: Metadata,
    pub pages: Vec<Page>,
}

impl LaidOutDocument {
    pub fn fonts_used(&self) -> Vec<Font> {
        let mut fonts: Vec<Font> = self
            .pages
            .iter()
            .flat_map(|p| &p.ops)
            .filter_map(|op| match op {
                DrawOp::Text { font, .. } => Some(*font),
                DrawOp::Rule { .. } => None,
            })
            .collect();
        fonts.sort();
        fonts.dedup();
        fonts
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Measured blocks
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Unit {
    TextLine {
        line: Line,
        size: f32,
        leading: f32,
        color: Color,
        alignment: Alignment,
    },
    TableRow {
        label: String,
        value: String,
    },
    Rule,
    Space(f32),
}

/// A measured block: what to stack, and the gaps around it.
#[derive(Debug, Clone)]
struct Flowable<'a> {
    kind: &'static str,
    space_before: f32,
    space_after: f32,
    keep_with_next: bool,
    units: Vec<Unit>,
    table: Option<&'a TableBlock>,
    divider: Option<&'a DividerBlock>,
}

impl Flowable<'_> {
    fn unit_height(&self, unit: &Unit) -> f32 {
        match unit {
            Unit::TextLine { leading, .. } => *leading,
            Unit::TableRow { .. } => self.table.map(TableBlock::row_height).unwrap_or(0.0),
            Unit::Rule => self.divider.map(|d| d.thickness).unwrap_or(0.0),
            Unit::Space(h) => *h,
        }
    }

    /// How a unit is named in errors, e.g. "paragraph line" or "table row".
    fn unit_name(&self, unit: &Unit) -> String {
        match unit {
            Unit::TextLine { .. } => format!("{} line", self.kind),
            Unit::TableRow { .. } => "table row".to_string(),
            Unit::Rule => "divider rule".to_string(),
            Unit::Space(_) => "spacer".to_string(),
        }
    }

    fn total_height(&self) -> f32 {
        self.units.iter().map(|u| self.unit_height(u)).sum()
    }

    /// Height of the first unit that would carry ink, for keep-with-next checks.
    fn first_height(&self) -> f32 {
        match self.units.first() {
            Some(Unit::Space(_)) | None => 0.0,
            Some(unit) => self.unit_height(unit),
        }
    }
}

fn measure<'a>(
    block: &'a ContentBlock,
    styles: &StyleSheet,
    page: &PageSetup,
) -> Result<Flowable<'a>, LayoutError> {
    let frame_width = page.frame_width();
    let text_flowable = |text: &RichText, style_name: &str| -> Result<Flowable<'a>, LayoutError> {
        let style = styles.get(style_name)?;
        let units = wrap(text, style.font, style.font_size, frame_width)
            .into_iter()
            .map(|line| Unit::TextLine {
                line,
                size: style.font_size,
                leading: style.leading,
                color: style.text_color,
                alignment: style.alignment,
            })
            .collect();
        Ok(Flowable {
            kind: block.kind(),
            space_before: style.space_before,
            space_after: style.space_after,
            keep_with_next: block.keeps_with_next(),
            units,
            table: None,
            divider: None,
        })
    };

    let flowable = match block {
        ContentBlock::Heading { text, style } | ContentBlock::Subheading { text, style } => {
            text_flowable(&RichText::plain(text.clone()), style)?
        }
        ContentBlock::Paragraph { text, style } => text_flowable(text, style)?,
        ContentBlock::Divider(divider) => Flowable {
            kind: block.kind(),
            space_before: divider.space_before,
            space_after: divider.space_after,
            keep_with_next: false,
            units: vec![Unit::Rule],
            table: None,
            divider: Some(divider),
        },
        ContentBlock::Spacer { height } => Flowable {
            kind: block.kind(),
            space_before: 0.0,
            space_after: 0.0,
            keep_with_next: false,
            units: vec![Unit::Space(*height)],
            table: None,
            divider: None,
        },
        ContentBlock::Table(table) => {
            if table.width() > page.width + EPSILON {
                return Err(LayoutError::TableTooWide {
                    width: table.width(),
                    page_width: page.width,
                });
            }
            Flowable {
                kind: block.kind(),
                space_before: 0.0,
                space_after: 0.0,
                keep_with_next: false,
                units: table
                    .rows
                    .iter()
                    .map(|(label, value)| Unit::TableRow {
                        label: label.clone(),
                        value: value.clone(),
                    })
                    .collect(),
                table: Some(table),
                divider: None,
            }
        }
    };
    Ok(flowable)
}

// ────────────────────────────────────────────────────────────────────────────
// Pagination
// ────────────────────────────────────────────────────────────────────────────

struct Paginator {
    setup: PageSetup,
    pages: Vec<Page>,
    current: Page,
    /// Top of the free space on the current page.
    cursor: f32,
    at_top: bool,
}

impl Paginator {
    fn new(setup: PageSetup) -> Self {
        Paginator {
            setup,
            pages: Vec::new(),
            current: Page::default(),
            cursor: setup.frame_top(),
            at_top: true,
        }
    }

    fn new_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.cursor = self.setup.frame_top();
        self.at_top = true;
    }

    fn fits(&self, height: f32) -> bool {
        self.cursor - height >= self.setup.frame_bottom() - EPSILON
    }

    fn skip(&mut self, height: f32) {
        if !self.at_top {
            self.cursor -= height;
        }
    }

    fn place(
        &mut self,
        flowable: &Flowable<'_>,
        next: Option<&Flowable<'_>>,
    ) -> Result<(), LayoutError> {
        self.skip(flowable.space_before);

        if flowable.keep_with_next && !self.at_top {
            let needed = flowable.total_height()
                + next
                    .map(|n| flowable.space_after + n.space_before + n.first_height())
                    .unwrap_or(0.0);
            if needed <= self.setup.frame_height() && !self.fits(needed) {
                debug!(
                    kind = flowable.kind,
                    "Moving block to next page to keep it with its successor"
                );
                self.new_page();
            }
        }

        for unit in &flowable.units {
            let height = flowable.unit_height(unit);

            if let Unit::Space(_) = unit {
                // A gap that runs off the page is absorbed by the page break.
                if self.fits(height) {
                    self.cursor -= height;
                    self.at_top = false;
                } else {
                    self.new_page();
                }
                continue;
            }

            let available = self.setup.frame_height();
            if height > available + EPSILON {
                return Err(LayoutError::TooTall {
                    unit: flowable.unit_name(unit),
                    height,
                    available,
                });
            }
            if !self.fits(height) {
                self.new_page();
            }
            self.draw(flowable, unit)?;
            self.cursor -= height;
            self.at_top = false;
        }

        self.skip(flowable.space_after);
        Ok(())
    }

    fn draw(&mut self, flowable: &Flowable<'_>, unit: &Unit) -> Result<(), LayoutError> {
        let frame_left = self.setup.frame_left();
        let frame_width = self.setup.frame_width();

        match unit {
            Unit::TextLine {
                line,
                size,
                color,
                alignment,
                ..
            } => {
                let mut x = frame_left + align_offset(*alignment, frame_width, line.width);
                let ascent = line
                    .fragments
                    .first()
                    .map(|f| get_metrics(f.font).ascent(*size))
                    .unwrap_or(0.0);
                let y = self.cursor - ascent;
                for fragment in &line.fragments {
                    self.current.ops.push(DrawOp::Text {
                        x,
                        y,
                        font: fragment.font,
                        size: *size,
                        color: *color,
                        text: fragment.text.clone(),
                        encoded: encode_str(&fragment.text)?,
                    });
                    x += fragment.width;
                }
            }
            Unit::TableRow { label, value } => {
                let Some(table) = flowable.table else {
                    return Ok(());
                };
                let mut cell_left = frame_left + (frame_width - table.width()) / 2.0;
                for (i, text) in [label, value].into_iter().enumerate() {
                    let style = &table.columns[i];
                    let column_width = table.column_widths[i];
                    let inner = column_width - table.padding.left - table.padding.right;
                    let width = get_metrics(style.font).measure_str(text, style.font_size);
                    if width > inner + EPSILON {
                        warn!(
                            column = i,
                            width, inner, "Table cell text overflows its column: {text}"
                        );
                    }
                    if !text.is_empty() {
                        self.current.ops.push(DrawOp::Text {
                            x: cell_left
                                + table.padding.left
                                + align_offset(style.alignment, inner, width),
                            y: self.cursor - table.padding.top - style.font_size,
                            font: style.font,
                            size: style.font_size,
                            color: style.color,
                            text: text.clone(),
                            encoded: encode_str(text)?,
                        });
                    }
                    cell_left += column_width;
                }
            }
            Unit::Rule => {
                let Some(divider) = flowable.divider else {
                    return Ok(());
                };
                let width = frame_width * divider.width_fraction;
                let x1 = frame_left + (frame_width - width) / 2.0;
                self.current.ops.push(DrawOp::Rule {
                    x1,
                    x2: x1 + width,
                    y: self.cursor - divider.thickness / 2.0,
                    thickness: divider.thickness,
                    color: divider.color,
                    cap: divider.cap,
                });
            }
            Unit::Space(_) => {}
        }
        Ok(())
    }

    fn finish(mut self) -> Vec<Page> {
        if !self.current.ops.is_empty() || self.pages.is_empty() {
            self.pages.push(self.current);
        }
        self.pages
    }
}

fn align_offset(alignment: Alignment, available: f32, width: f32) -> f32 {
    match alignment {
        Alignment::Left => 0.0,
        Alignment::Center => (available - width) / 2.0,
        Alignment::Right => available - width,
    }
}

/// Lays `doc` out on pages of `doc.page`'s size.
pub fn layout_document(
    doc: &Document,
    styles: &StyleSheet,
) -> Result<LaidOutDocument, LayoutError> {
    let flowables = doc
        .blocks
        .iter()
        .map(|block| measure(block, styles, &doc.page))
        .collect::<Result<Vec<_>, _>>()?;

    let mut paginator = Paginator::new(doc.page);
    for (i, flowable) in flowables.iter().enumerate() {
        paginator.place(flowable, flowables.get(i + 1))?;
    }
    let pages = paginator.finish();

    debug!(
        blocks = doc.blocks.len(),
        pages = pages.len(),
        "Laid out document"
    );

    Ok(LaidOutDocument {
        page: doc.page,
        metadata: doc.metadata.clone(),
        pages,
    })
}
