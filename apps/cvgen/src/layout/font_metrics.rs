//! Static advance-width tables for the two standard Helvetica faces.
//!
//! Widths are in font units (1/1000 em), taken from the Adobe core font metrics.
//! The ASCII tables cover 0x20..=0x7E (95 printable characters), index = `c as usize - 32`.
//! Accented Latin letters measure as their base letter; a short list covers the WinAnsi
//! punctuation the content uses; anything else falls back to `average_char_width`.

use crate::style::Font;

/// Static character-width table for one font.
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    widths: [u16; 95],
    /// (character, width) pairs outside ASCII that do not measure as a base letter.
    extras: &'static [(char, u16)],
    pub average_char_width: u16,
    /// Distance from the baseline to the top of the tallest capitals.
    pub ascent: u16,
}

impl FontMetricTable {
    /// Advance width of one character in font units.
    pub fn char_width(&self, c: char) -> u16 {
        if let Some(width) = self.ascii_width(c) {
            return width;
        }
        if let Some(&(_, width)) = self.extras.iter().find(|(e, _)| *e == c) {
            return width;
        }
        match base_letter(c).and_then(|b| self.ascii_width(b)) {
            Some(width) => width,
            None => self.average_char_width,
        }
    }

    /// Rendered width of `s` in points at `size`.
    pub fn measure_str(&self, s: &str, size: f32) -> f32 {
        let units: u32 = s.chars().map(|c| self.char_width(c) as u32).sum();
        units as f32 * size / 1000.0
    }

    pub fn space_width(&self, size: f32) -> f32 {
        self.char_width(' ') as f32 * size / 1000.0
    }

    pub fn ascent(&self, size: f32) -> f32 {
        self.ascent as f32 * size / 1000.0
    }

    fn ascii_width(&self, c: char) -> Option<u16> {
        let code = c as usize;
        (32..=126).contains(&code).then(|| self.widths[code - 32])
    }
}

/// The unaccented letter an accented Latin-1 letter is drawn on.
fn base_letter(c: char) -> Option<char> {
    let base = match c {
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ñ' => 'N',
        'Ò'..='Ö' | 'Ø' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' | 'Ÿ' => 'Y',
        'Š' => 'S',
        'Ž' => 'Z',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'š' => 's',
        'ž' => 'z',
        _ => return None,
    };
    Some(base)
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables
// ────────────────────────────────────────────────────────────────────────────

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        278, 278, 584, 584, 584, 556, 1015,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        278, 278, 278, 469, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
        // {    |    }    ~
        334, 260, 334, 584,
    ],
    extras: &[
        ('\u{a0}', 278), ('•', 350), ('–', 556), ('—', 1000), ('…', 1000),
        ('‘', 222), ('’', 222), ('“', 333), ('”', 333), ('€', 556),
        ('¡', 333), ('¿', 611), ('ª', 370), ('º', 365), ('°', 400),
        ('·', 278), ('«', 556), ('»', 556), ('©', 737), ('®', 737),
        ('ì', 278), ('í', 278), ('î', 278), ('ï', 278), ('ß', 611),
        ('Æ', 1000), ('æ', 889), ('×', 584), ('÷', 584),
    ],
    average_char_width: 556,
    ascent: 718,
};

static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        333, 333, 584, 584, 584, 611, 975,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        333, 278, 333, 584, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
        // {    |    }    ~
        389, 280, 389, 584,
    ],
    extras: &[
        ('\u{a0}', 278), ('•', 350), ('–', 556), ('—', 1000), ('…', 1000),
        ('‘', 278), ('’', 278), ('“', 500), ('”', 500), ('€', 556),
        ('¡', 333), ('¿', 611), ('ª', 370), ('º', 365), ('°', 400),
        ('·', 278), ('«', 556), ('»', 556), ('©', 737), ('®', 737),
        ('ß', 611), ('Æ', 1000), ('æ', 889), ('×', 584), ('÷', 584),
    ],
    average_char_width: 611,
    ascent: 718,
};

/// Returns the static metric table for a font.
pub fn get_metrics(font: Font) -> &'static FontMetricTable {
    match font {
        Font::Helvetica => &HELVETICA_TABLE,
        Font::HelveticaBold => &HELVETICA_BOLD_TABLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        assert_eq!(get_metrics(Font::Helvetica).measure_str("", 11.0), 0.0);
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        let metrics = get_metrics(Font::Helvetica);
        // "Rust" = R(722) + u(556) + s(500) + t(278) = 2056 units
        let width = metrics.measure_str("Rust", 10.0);
        assert!((width - 20.56).abs() < 1e-3, "got {width}");
    }

    #[test]
    fn test_bold_is_wider_than_regular() {
        let text = "Experiencia Profesional";
        let regular = get_metrics(Font::Helvetica).measure_str(text, 16.0);
        let bold = get_metrics(Font::HelveticaBold).measure_str(text, 16.0);
        assert!(bold > regular, "bold {bold} should exceed regular {regular}");
    }

    #[test]
    fn test_accented_letters_measure_as_base_letter() {
        let metrics = get_metrics(Font::Helvetica);
        assert_eq!(metrics.char_width('ó'), metrics.char_width('o'));
        assert_eq!(metrics.char_width('ñ'), metrics.char_width('n'));
        assert_eq!(metrics.char_width('É'), metrics.char_width('E'));
        // Accented i is drawn on the dotless i, which is wider than 'i' in regular Helvetica.
        assert_eq!(metrics.char_width('í'), 278);
    }

    #[test]
    fn test_bullet_has_its_own_width() {
        assert_eq!(get_metrics(Font::Helvetica).char_width('•'), 350);
        assert_eq!(get_metrics(Font::HelveticaBold).char_width('•'), 350);
    }

    #[test]
    fn test_unknown_characters_fall_back_to_average() {
        let metrics = get_metrics(Font::HelveticaBold);
        assert_eq!(metrics.char_width('✅'), metrics.average_char_width);
    }

    #[test]
    fn test_space_and_ascent_scale_with_size() {
        let metrics = get_metrics(Font::Helvetica);
        assert!((metrics.space_width(10.0) - 2.78).abs() < 1e-4);
        assert!((metrics.ascent(24.0) - 17.232).abs() < 1e-3);
    }
}
