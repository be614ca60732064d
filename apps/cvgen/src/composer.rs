//! Turns CV records into the ordered block sequence of a [`Document`].
//!
//! Order: identity (name, title), contact lines, spacer / divider / spacer, then one
//! heading plus body per section. Paragraphs inside a section are separated by 8pt,
//! sections by 12pt. Inline markup is left to the layout engine.

use tracing::debug;

use crate::cv::{CvContent, SectionBody, SkillRow};
use crate::document::{
    CellStyle, ContentBlock, DividerBlock, Document, LineCap, Metadata, Padding, PageSetup,
    RichText, TableBlock, INCH,
};
use crate::errors::StyleError;
use crate::style::{
    Alignment, Color, Font, StyleSheet, CV_CONTACT, CV_CONTENT, CV_NAME, CV_SECTION, CV_TITLE,
};

const CONTACT_GAP: f32 = 20.0;
const PARAGRAPH_GAP: f32 = 8.0;
const SECTION_GAP: f32 = 12.0;

const DIVIDER_COLOR: &str = "#e5e7eb";
const SKILL_LABEL_COLOR: &str = "#059669";
const SKILL_VALUE_COLOR: &str = "#374151";

/// Builds the document for `cv`. Every style the blocks reference must exist in `styles`.
pub fn compose(cv: &CvContent, styles: &StyleSheet) -> Result<Document, StyleError> {
    for name in [CV_NAME, CV_TITLE, CV_SECTION, CV_CONTENT, CV_CONTACT] {
        styles.get(name)?;
    }

    let mut blocks = vec![
        ContentBlock::Heading {
            text: cv.name.clone(),
            style: CV_NAME.to_string(),
        },
        ContentBlock::Subheading {
            text: cv.title.clone(),
            style: CV_TITLE.to_string(),
        },
    ];

    blocks.extend(cv.contact.iter().map(|line| ContentBlock::Paragraph {
        text: RichText::plain(line.clone()),
        style: CV_CONTACT.to_string(),
    }));

    blocks.push(ContentBlock::Spacer {
        height: CONTACT_GAP,
    });
    blocks.push(ContentBlock::Divider(divider()?));
    blocks.push(ContentBlock::Spacer {
        height: CONTACT_GAP,
    });

    let last = cv.sections.len().saturating_sub(1);
    for (i, section) in cv.sections.iter().enumerate() {
        blocks.push(ContentBlock::Heading {
            text: section.title.clone(),
            style: CV_SECTION.to_string(),
        });

        match &section.body {
            SectionBody::Paragraphs(paragraphs) => {
                for (j, text) in paragraphs.iter().enumerate() {
                    if j > 0 {
                        blocks.push(ContentBlock::Spacer {
                            height: PARAGRAPH_GAP,
                        });
                    }
                    blocks.push(ContentBlock::Paragraph {
                        text: text.clone(),
                        style: CV_CONTENT.to_string(),
                    });
                }
            }
            SectionBody::Table(rows) => blocks.push(ContentBlock::Table(skills_table(rows)?)),
        }

        if i != last {
            blocks.push(ContentBlock::Spacer {
                height: SECTION_GAP,
            });
        }
    }

    debug!(
        sections = cv.sections.len(),
        blocks = blocks.len(),
        "Composed document"
    );

    Ok(Document {
        page: PageSetup::a4(),
        metadata: Metadata {
            title: format!("{} - CV", cv.name),
            author: cv.name.clone(),
        },
        blocks,
    })
}

fn divider() -> Result<DividerBlock, StyleError> {
    Ok(DividerBlock {
        width_fraction: 1.0,
        thickness: 1.0,
        color: Color::from_hex(DIVIDER_COLOR)?,
        cap: LineCap::Round,
        space_before: 1.0,
        space_after: 1.0,
    })
}

/// Label column 1.5in, value column 5in, Helvetica 10pt, colour by column.
fn skills_table(rows: &[SkillRow]) -> Result<TableBlock, StyleError> {
    let cell = |hex: &str| -> Result<CellStyle, StyleError> {
        Ok(CellStyle {
            font: Font::Helvetica,
            font_size: 10.0,
            leading: 12.0,
            color: Color::from_hex(hex)?,
            alignment: Alignment::Left,
        })
    };

    Ok(TableBlock {
        rows: rows
            .iter()
            .map(|r| (r.category.clone(), r.items.clone()))
            .collect(),
        column_widths: [1.5 * INCH, 5.0 * INCH],
        columns: [cell(SKILL_LABEL_COLOR)?, cell(SKILL_VALUE_COLOR)?],
        padding: Padding {
            top: 3.0,
            bottom: 6.0,
            left: 6.0,
            right: 6.0,
        },
    })
}
