//! Named paragraph styles and the primitives they are made of.
#![allow(dead_code)]
//!
//! A [`StyleSheet`] starts from three base styles (`Normal`, `Heading1`, `Heading2`).
//! Custom styles name a parent and override only the attributes they list; everything
//! else, leading included, is inherited. Once built the sheet is read-only and is passed
//! explicitly to the composer and the layout engine.

use crate::errors::StyleError;

pub const NORMAL: &str = "Normal";
pub const HEADING1: &str = "Heading1";
pub const HEADING2: &str = "Heading2";

pub const CV_NAME: &str = "CustomName";
pub const CV_TITLE: &str = "CustomTitle";
pub const CV_SECTION: &str = "CustomSection";
pub const CV_CONTENT: &str = "CustomContent";
pub const CV_CONTACT: &str = "CustomContact";

// ────────────────────────────────────────────────────────────────────────────
// Primitives
// ────────────────────────────────────────────────────────────────────────────

/// The standard PDF fonts the generator can draw with. No font files are embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

impl Font {
    pub const ALL: [Font; 2] = [Font::Helvetica, Font::HelveticaBold];

    /// PostScript name written as the font's `/BaseFont`.
    pub fn base_font(self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Name under which the font is registered in each page's resources.
    pub fn resource_name(self) -> &'static [u8] {
        match self {
            Font::Helvetica => b"F1",
            Font::HelveticaBold => b"F2",
        }
    }

    /// The bold face of this family.
    pub fn bold(self) -> Font {
        Font::HelveticaBold
    }
}

/// An RGB colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Parses `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Color, StyleError> {
        let invalid = || StyleError::InvalidColor(hex.to_string());
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| invalid())
        };
        Ok(Color {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

// ────────────────────────────────────────────────────────────────────────────
// Styles
// ────────────────────────────────────────────────────────────────────────────

/// A named, immutable bundle of text attributes. Sizes and spacing are in points.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDefinition {
    pub name: String,
    pub parent: Option<String>,
    pub font: Font,
    pub font_size: f32,
    /// Baseline-to-baseline distance.
    pub leading: f32,
    pub text_color: Color,
    pub space_before: f32,
    pub space_after: f32,
    pub alignment: Alignment,
}

/// Attributes a derived style replaces; `None` inherits from the parent.
#[derive(Debug, Clone, Default)]
pub struct StyleOverrides<'a> {
    pub font: Option<Font>,
    pub font_size: Option<f32>,
    pub leading: Option<f32>,
    /// `#rrggbb`
    pub text_color: Option<&'a str>,
    pub space_before: Option<f32>,
    pub space_after: Option<f32>,
    pub alignment: Option<Alignment>,
}

/// Ordered collection of styles, looked up by name.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    styles: Vec<StyleDefinition>,
}

impl StyleSheet {
    /// The three base styles every sheet starts from.
    pub fn sample() -> StyleSheet {
        let normal = StyleDefinition {
            name: NORMAL.to_string(),
            parent: None,
            font: Font::Helvetica,
            font_size: 10.0,
            leading: 12.0,
            text_color: Color::BLACK,
            space_before: 0.0,
            space_after: 0.0,
            alignment: Alignment::Left,
        };
        let heading1 = StyleDefinition {
            name: HEADING1.to_string(),
            parent: Some(NORMAL.to_string()),
            font: Font::HelveticaBold,
            font_size: 18.0,
            leading: 22.0,
            space_after: 6.0,
            ..normal.clone()
        };
        let heading2 = StyleDefinition {
            name: HEADING2.to_string(),
            parent: Some(NORMAL.to_string()),
            font: Font::HelveticaBold,
            font_size: 14.0,
            leading: 18.0,
            space_before: 12.0,
            space_after: 6.0,
            ..normal.clone()
        };
        StyleSheet {
            styles: vec![normal, heading1, heading2],
        }
    }

    /// The sample sheet plus the five styles the CV uses.
    pub fn cv() -> Result<StyleSheet, StyleError> {
        let mut sheet = StyleSheet::sample();

        sheet.derive(
            CV_NAME,
            HEADING1,
            StyleOverrides {
                font: Some(Font::HelveticaBold),
                font_size: Some(24.0),
                text_color: Some("#1e293b"),
                space_after: Some(6.0),
                alignment: Some(Alignment::Center),
                ..Default::default()
            },
        )?;
        sheet.derive(
            CV_TITLE,
            HEADING2,
            StyleOverrides {
                font: Some(Font::Helvetica),
                font_size: Some(14.0),
                text_color: Some("#64748b"),
                space_after: Some(20.0),
                alignment: Some(Alignment::Center),
                ..Default::default()
            },
        )?;
        sheet.derive(
            CV_SECTION,
            HEADING2,
            StyleOverrides {
                font: Some(Font::HelveticaBold),
                font_size: Some(16.0),
                text_color: Some("#059669"),
                space_before: Some(16.0),
                space_after: Some(12.0),
                ..Default::default()
            },
        )?;
        sheet.derive(
            CV_CONTENT,
            NORMAL,
            StyleOverrides {
                font: Some(Font::Helvetica),
                font_size: Some(11.0),
                text_color: Some("#374151"),
                space_after: Some(8.0),
                ..Default::default()
            },
        )?;
        sheet.derive(
            CV_CONTACT,
            NORMAL,
            StyleOverrides {
                font: Some(Font::Helvetica),
                font_size: Some(10.0),
                text_color: Some("#64748b"),
                space_after: Some(4.0),
                alignment: Some(Alignment::Center),
                ..Default::default()
            },
        )?;

        Ok(sheet)
    }

    /// Adds `name` as a copy of `parent` with `overrides` applied.
    /// Redefining an existing name replaces it in place.
    pub fn derive(
        &mut self,
        name: &str,
        parent: &str,
        overrides: StyleOverrides<'_>,
    ) -> Result<(), StyleError> {
        let base = self.get(parent).map_err(|_| StyleError::UnknownParent {
            style: name.to_string(),
            parent: parent.to_string(),
        })?;

        let text_color = match overrides.text_color {
            Some(hex) => Color::from_hex(hex)?,
            None => base.text_color,
        };

        let style = StyleDefinition {
            name: name.to_string(),
            parent: Some(parent.to_string()),
            font: overrides.font.unwrap_or(base.font),
            font_size: overrides.font_size.unwrap_or(base.font_size),
            leading: overrides.leading.unwrap_or(base.leading),
            text_color,
            space_before: overrides.space_before.unwrap_or(base.space_before),
            space_after: overrides.space_after.unwrap_or(base.space_after),
            alignment: overrides.alignment.unwrap_or(base.alignment),
        };

        match self.styles.iter_mut().find(|s| s.name == name) {
            Some(existing) => *existing = style,
            None => self.styles.push(style),
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&StyleDefinition, StyleError> {
        self.styles
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| StyleError::UnknownStyle(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.iter().map(|s| s.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_parses_components() {
        let color = Color::from_hex("#059669").unwrap();
        assert!((color.r - 5.0 / 255.0).abs() < 1e-6);
        assert!((color.g - 150.0 / 255.0).abs() < 1e-6);
        assert!((color.b - 105.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_from_hex_accepts_missing_hash_and_uppercase() {
        assert_eq!(
            Color::from_hex("FFFFFF").unwrap(),
            Color {
                r: 1.0,
                g: 1.0,
                b: 1.0
            }
        );
    }

    #[test]
    fn test_from_hex_rejects_malformed_input() {
        for bad in ["", "#fff", "#12345g", "#1234567", "blue"] {
            assert_eq!(
                Color::from_hex(bad),
                Err(StyleError::InvalidColor(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_derived_style_inherits_unlisted_attributes() {
        let sheet = StyleSheet::cv().unwrap();
        let name = sheet.get(CV_NAME).unwrap();
        // Leading comes from Heading1 even though the font size grows.
        assert_eq!(name.font_size, 24.0);
        assert_eq!(name.leading, 22.0);
        assert_eq!(name.parent.as_deref(), Some(HEADING1));

        let title = sheet.get(CV_TITLE).unwrap();
        assert_eq!(title.space_before, 12.0, "space_before inherited from Heading2");
        assert_eq!(title.font, Font::Helvetica);
        assert_eq!(title.alignment, Alignment::Center);
    }

    #[test]
    fn test_cv_sheet_has_all_styles_in_order() {
        let sheet = StyleSheet::cv().unwrap();
        let names: Vec<&str> = sheet.names().collect();
        assert_eq!(
            names,
            vec![NORMAL, HEADING1, HEADING2, CV_NAME, CV_TITLE, CV_SECTION, CV_CONTENT, CV_CONTACT]
        );
    }

    #[test]
    fn test_unknown_style_lookup_fails() {
        let sheet = StyleSheet::sample();
        assert_eq!(
            sheet.get("Missing"),
            Err(StyleError::UnknownStyle("Missing".to_string()))
        );
    }

    #[test]
    fn test_derive_from_unknown_parent_fails() {
        let mut sheet = StyleSheet::sample();
        let err = sheet
            .derive("Child", "Nope", StyleOverrides::default())
            .unwrap_err();
        assert_eq!(
            err,
            StyleError::UnknownParent {
                style: "Child".to_string(),
                parent: "Nope".to_string()
            }
        );
    }

    #[test]
    fn test_derive_with_bad_colour_fails() {
        let mut sheet = StyleSheet::sample();
        let err = sheet
            .derive(
                "Child",
                NORMAL,
                StyleOverrides {
                    text_color: Some("#zzzzzz"),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert_eq!(err, StyleError::InvalidColor("#zzzzzz".to_string()));
    }

    #[test]
    fn test_redefining_a_style_replaces_it() {
        let mut sheet = StyleSheet::sample();
        sheet
            .derive(
                "Child",
                NORMAL,
                StyleOverrides {
                    font_size: Some(9.0),
                    ..Default::default()
                },
            )
            .unwrap();
        sheet
            .derive(
                "Child",
                NORMAL,
                StyleOverrides {
                    font_size: Some(13.0),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(sheet.get("Child").unwrap().font_size, 13.0);
        assert_eq!(sheet.names().filter(|n| *n == "Child").count(), 1);
    }
}
