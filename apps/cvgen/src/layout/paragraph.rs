//! Greedy line breaking for rich text.
#![allow(dead_code)]
//!
//! Runs are first split into tokens (words, collapsed spaces, forced breaks), then words
//! are packed onto lines until the next one would exceed the available width. A word
//! wider than the whole line still gets a line of its own. Adjacent text in the same
//! font is merged into one fragment so each line draws with as few text operations as
//! possible.

use crate::document::{RichText, TextRun};
use crate::layout::font_metrics::get_metrics;
use crate::style::Font;

/// A run of text drawn in one font.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub font: Font,
    pub text: String,
    /// Width in points.
    pub width: f32,
}

/// One printed line. An empty line (two consecutive breaks) has no fragments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    pub fragments: Vec<Fragment>,
    pub width: f32,
}

impl Line {
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    fn last_font(&self) -> Option<Font> {
        self.fragments.last().map(|f| f.font)
    }

    fn push(&mut self, font: Font, text: &str, width: f32) {
        match self.fragments.last_mut() {
            Some(last) if last.font == font => {
                last.text.push_str(text);
                last.width += width;
            }
            _ => self.fragments.push(Fragment {
                font,
                text: text.to_string(),
                width,
            }),
        }
        self.width += width;
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    /// Consecutive non-space characters; pieces differ in font when bold starts mid-word.
    Word(Vec<(Font, String)>),
    Space,
    Break,
}

fn tokenize(text: &RichText, base: Font) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word: Vec<(Font, String)> = Vec::new();

    fn flush(word: &mut Vec<(Font, String)>, tokens: &mut Vec<Token>) {
        if !word.is_empty() {
            tokens.push(Token::Word(std::mem::take(word)));
        }
    }

    for run in &text.runs {
        let (font, s) = match run {
            TextRun::Text(s) => (base, s),
            TextRun::Bold(s) => (base.bold(), s),
            TextRun::LineBreak => {
                flush(&mut word, &mut tokens);
                tokens.push(Token::Break);
                continue;
            }
        };

        for c in s.chars() {
            // A no-break space belongs to the word.
            if c.is_whitespace() && c != '\u{a0}' {
                flush(&mut word, &mut tokens);
                if tokens.last() != Some(&Token::Space) {
                    tokens.push(Token::Space);
                }
                continue;
            }
            match word.last_mut() {
                Some((f, piece)) if *f == font => piece.push(c),
                _ => word.push((font, c.to_string())),
            }
        }
    }
    flush(&mut word, &mut tokens);
    tokens
}

/// Breaks `text` into lines no wider than `max_width` points (except single long words).
///
/// Leading spaces on every line are dropped. Trailing breaks do not produce a final
/// empty line; breaks in the middle always do.
pub fn wrap(text: &RichText, font: Font, size: f32, max_width: f32) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut current = Line::default();
    let mut pending_space = false;

    for token in tokenize(text, font) {
        match token {
            Token::Space => pending_space = !current.is_empty(),
            Token::Break => {
                lines.push(std::mem::take(&mut current));
                pending_space = false;
            }
            Token::Word(pieces) => {
                let word_width: f32 = pieces
                    .iter()
                    .map(|(f, s)| get_metrics(*f).measure_str(s, size))
                    .sum();

                if pending_space {
                    // The space takes the font of the text before it.
                    let space_font = current.last_font().unwrap_or(font);
                    let space_width = get_metrics(space_font).space_width(size);
                    if current.width + space_width + word_width > max_width {
                        lines.push(std::mem::take(&mut current));
                    } else {
                        current.push(space_font, " ", space_width);
                    }
                }
                for (f, s) in &pieces {
                    current.push(*f, s, get_metrics(*f).measure_str(s, size));
                }
                pending_space = false;
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(lines: &[Line]) -> Vec<String> {
        lines.iter().map(Line::text).collect()
    }

    #[test]
    fn test_short_text_is_one_line() {
        let lines = wrap(&RichText::plain("Galicia, España"), Font::Helvetica, 10.0, 400.0);
        assert_eq!(texts(&lines), vec!["Galicia, España"]);
        assert_eq!(lines[0].fragments.len(), 1);
    }

    #[test]
    fn test_whitespace_collapses_and_edges_are_trimmed() {
        let text = RichText::plain("\n    Desarrollador   Full\tStack  \n ");
        let lines = wrap(&text, Font::Helvetica, 11.0, 400.0);
        assert_eq!(texts(&lines), vec!["Desarrollador Full Stack"]);
    }

    #[test]
    fn test_long_text_wraps_within_width() {
        let text = RichText::plain("word ".repeat(60));
        let max_width = 200.0;
        let lines = wrap(&text, Font::Helvetica, 11.0, max_width);
        assert!(lines.len() > 1, "expected wrapping, got {} line(s)", lines.len());
        for line in &lines {
            assert!(line.width <= max_width, "line width {} exceeds {max_width}", line.width);
            assert!(!line.text().starts_with(' ') && !line.text().ends_with(' '));
        }
        let words: usize = lines.iter().map(|l| l.text().split(' ').count()).sum();
        assert_eq!(words, 60);
    }

    #[test]
    fn test_overlong_word_gets_its_own_line() {
        let text = RichText::plain("a supercalifragilisticexpialidocious b");
        let lines = wrap(&text, Font::Helvetica, 12.0, 60.0);
        assert_eq!(
            texts(&lines),
            vec!["a", "supercalifragilisticexpialidocious", "b"]
        );
        assert!(lines[1].width > 60.0);
    }

    #[test]
    fn test_line_breaks_force_new_lines_and_double_break_leaves_blank_line() {
        let text = RichText::new()
            .text("uno")
            .line_break()
            .text("  dos")
            .line_break()
            .line_break()
            .text("tres")
            .line_break();
        let lines = wrap(&text, Font::Helvetica, 11.0, 400.0);
        assert_eq!(texts(&lines), vec!["uno", "dos", "", "tres"]);
        assert!(lines[2].is_empty());
    }

    #[test]
    fn test_bold_runs_become_separate_fragments() {
        let text = RichText::new()
            .bold("Idiomas:")
            .text(" Español (nativo)");
        let lines = wrap(&text, Font::Helvetica, 11.0, 400.0);
        assert_eq!(lines.len(), 1);
        let fragments: Vec<(Font, &str)> = lines[0]
            .fragments
            .iter()
            .map(|f| (f.font, f.text.as_str()))
            .collect();
        assert_eq!(
            fragments,
            vec![
                (Font::HelveticaBold, "Idiomas: "),
                (Font::Helvetica, "Español (nativo)"),
            ]
        );
        let total: f32 = lines[0].fragments.iter().map(|f| f.width).sum();
        assert!((total - lines[0].width).abs() < 1e-3);
    }

    #[test]
    fn test_bold_inside_a_word_does_not_split_it() {
        let text = RichText::new().bold("Re").text("act rocks");
        let lines = wrap(&text, Font::Helvetica, 11.0, 400.0);
        assert_eq!(texts(&lines), vec!["React rocks"]);
        assert_eq!(lines[0].fragments[0].font, Font::HelveticaBold);
        assert_eq!(lines[0].fragments[0].text, "Re");
    }

    #[test]
    fn test_empty_text_has_no_lines() {
        assert!(wrap(&RichText::new(), Font::Helvetica, 11.0, 400.0).is_empty());
        assert!(wrap(&RichText::plain("   "), Font::Helvetica, 11.0, 400.0).is_empty());
    }
}
