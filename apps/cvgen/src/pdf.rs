//! Serializes a laid-out document into PDF bytes.
//!
//! Object numbering is fixed: catalog, page tree, document info, one object per font,
//! then a (page, content stream) pair per page. Nothing time- or environment-dependent is
//! written, so equal input gives byte-identical output.

use pdf_writer::types::LineCapStyle;
use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};
use tracing::debug;

use crate::document::LineCap;
use crate::layout::{DrawOp, LaidOutDocument, Page};
use crate::style::{Color, Font};

const CATALOG_ID: Ref = Ref::new(1);
const PAGE_TREE_ID: Ref = Ref::new(2);
const INFO_ID: Ref = Ref::new(3);
const FIRST_FONT_ID: i32 = 4;

const CREATOR: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

fn font_ref(font: Font) -> Ref {
    let index = Font::ALL.iter().position(|f| *f == font).unwrap_or(0);
    Ref::new(FIRST_FONT_ID + index as i32)
}

/// Builds the complete PDF file for `doc`.
pub fn render_pdf(doc: &LaidOutDocument) -> Vec<u8> {
    let mut pdf = Pdf::new();

    pdf.catalog(CATALOG_ID).pages(PAGE_TREE_ID);

    pdf.document_info(INFO_ID)
        .title(TextStr(&doc.metadata.title))
        .author(TextStr(&doc.metadata.author))
        .creator(TextStr(CREATOR));

    for font in Font::ALL {
        pdf.type1_font(font_ref(font))
            .base_font(Name(font.base_font().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }

    let first_page_id = FIRST_FONT_ID + Font::ALL.len() as i32;
    let page_ids: Vec<Ref> = (0..doc.pages.len())
        .map(|i| Ref::new(first_page_id + 2 * i as i32))
        .collect();

    pdf.pages(PAGE_TREE_ID)
        .kids(page_ids.iter().copied())
        .count(page_ids.len() as i32);

    let media_box = Rect::new(0.0, 0.0, doc.page.width, doc.page.height);
    for (page, page_id) in doc.pages.iter().zip(&page_ids) {
        let content_id = Ref::new(page_id.get() + 1);

        let mut writer = pdf.page(*page_id);
        writer
            .media_box(media_box)
            .parent(PAGE_TREE_ID)
            .contents(content_id);
        {
            let mut resources = writer.resources();
            let mut fonts = resources.fonts();
            for font in Font::ALL {
                fonts.pair(Name(font.resource_name()), font_ref(font));
            }
        }
        writer.finish();

        let content = page_content(page);
        pdf.stream(content_id, &content);
    }

    let bytes = pdf.finish();
    debug!(pages = doc.pages.len(), bytes = bytes.len(), "Serialized PDF");
    bytes
}

fn page_content(page: &Page) -> Vec<u8> {
    let mut content = Content::new();

    for op in &page.ops {
        match op {
            DrawOp::Text {
                x,
                y,
                font,
                size,
                color,
                encoded,
                ..
            } => {
                set_fill(&mut content, *color);
                content
                    .begin_text()
                    .set_font(Name(font.resource_name()), *size)
                    .next_line(*x, *y)
                    .show(Str(encoded.as_slice()))
                    .end_text();
            }
            DrawOp::Rule {
                x1,
                x2,
                y,
                thickness,
                color,
                cap,
            } => {
                content
                    .save_state()
                    .set_stroke_rgb(color.r, color.g, color.b)
                    .set_line_width(*thickness)
                    .set_line_cap(line_cap(*cap))
                    .move_to(*x1, *y)
                    .line_to(*x2, *y)
                    .stroke()
                    .restore_state();
            }
        }
    }

    content.finish().to_vec()
}

fn set_fill(content: &mut Content, color: Color) {
    content.set_fill_rgb(color.r, color.g, color.b);
}

fn line_cap(cap: LineCap) -> LineCapStyle {
    match cap {
        LineCap::Butt => LineCapStyle::ButtCap,
        LineCap::Round => LineCapStyle::RoundCap,
        LineCap::Square => LineCapStyle::ProjectingSquareCap,
    }
}
