//! Static font-metric tables and page geometry.
//!
//! Character widths are in em units (relative to font size), approximating the
//! advance widths of the two Roboto faces the document is set in. The tables are
//! only used to estimate how many lines a run wraps to, which is enough to
//! decide where pages break.
//!
//! All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FormError;
use crate::render::TextStyle;

// ────────────────────────────────────────────────────────────────────────────
// Faces and page formats
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFace {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageFormat {
    /// 595 × 842 pt.
    A4,
    /// 612 × 792 pt.
    Letter,
}

impl PageFormat {
    /// `(width, height)` in points.
    pub fn size_pt(self) -> (f32, f32) {
        match self {
            PageFormat::A4 => (595.0, 842.0),
            PageFormat::Letter => (612.0, 792.0),
        }
    }
}

impl FromStr for PageFormat {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a4" => Ok(PageFormat::A4),
            "letter" | "us-letter" => Ok(PageFormat::Letter),
            other => Err(FormError::UnknownPageFormat(other.to_string())),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Page configuration
// ────────────────────────────────────────────────────────────────────────────

/// Geometry used to flow blocks onto pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    pub format: PageFormat,
    /// Padding on all four sides, in points.
    pub padding_pt: f32,
    /// Line height as a multiple of font size, for styles that do not set their own.
    pub line_height: f32,
}

/// A4 with 20pt padding, matching the exported page.
pub fn default_page_config(format: PageFormat) -> PageConfig {
    PageConfig {
        format,
        padding_pt: 20.0,
        line_height: 1.2,
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        default_page_config(PageFormat::A4)
    }
}

impl PageConfig {
    pub fn content_width_pt(&self) -> f32 {
        self.format.size_pt().0 - 2.0 * self.padding_pt
    }

    pub fn content_height_pt(&self) -> f32 {
        self.format.size_pt().1 - 2.0 * self.padding_pt
    }
}

/// Resolved typography for a [`TextStyle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleMetrics {
    pub face: FontFace,
    pub size_pt: f32,
    /// `None` means the page default.
    pub line_height: Option<f32>,
    /// Extra space after the line, in points.
    pub margin_bottom_pt: f32,
}

pub fn style_metrics(style: TextStyle) -> StyleMetrics {
    let (face, size_pt, line_height, margin_bottom_pt) = match style {
        TextStyle::Name => (FontFace::Bold, 24.0, None, 5.0),
        TextStyle::Location => (FontFace::Regular, 12.0, None, 10.0),
        TextStyle::Contact => (FontFace::Regular, 10.0, None, 10.0),
        TextStyle::Heading => (FontFace::Bold, 16.0, None, 7.0),
        TextStyle::Strong => (FontFace::Bold, 12.0, None, 0.0),
        TextStyle::Body => (FontFace::Regular, 12.0, None, 0.0),
        TextStyle::Caption => (FontFace::Regular, 10.0, None, 0.0),
        TextStyle::Skill => (FontFace::Regular, 12.0, Some(1.5), 0.0),
    };
    StyleMetrics {
        face,
        size_pt,
        line_height,
        margin_bottom_pt,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for one face.
///
/// `widths[i]` = width of ASCII character `(i + 32)` at 1em.
pub struct FontMetricTable {
    pub face: FontFace,
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters.
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures a string in em units. Non-ASCII characters use `average_char_width`.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Lines one paragraph occupies under greedy word-wrap at `max_width_em`.
    ///
    /// A paragraph with no words still takes one line. A single word wider than
    /// the line is not broken.
    pub fn estimated_lines(&self, paragraph: &str, max_width_em: f32) -> u32 {
        let mut line_count = 1u32;
        let mut current_width = 0.0_f32;
        let mut first = true;

        for word in paragraph.split_whitespace() {
            let word_w = self.measure_str(word);
            let space_w = if first { 0.0 } else { self.space_width };

            if !first && current_width + space_w + word_w > max_width_em {
                line_count += 1;
                current_width = word_w;
            } else {
                current_width += space_w + word_w;
                first = false;
            }
        }
        line_count
    }

    /// Lines a multi-paragraph text occupies; explicit newlines always break.
    pub fn wrapped_lines(&self, text: &str, max_width_em: f32) -> u32 {
        text.split('\n')
            .map(|paragraph| self.estimated_lines(paragraph, max_width_em))
            .sum::<u32>()
            .max(1)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables
// ────────────────────────────────────────────────────────────────────────────

static ROBOTO_REGULAR_TABLE: FontMetricTable = FontMetricTable {
    face: FontFace::Regular,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.25, 0.26, 0.32, 0.62, 0.56, 0.73, 0.62, 0.17, 0.34, 0.35, 0.43, 0.57, 0.20, 0.28, 0.26, 0.41,
        // 0     1     2     3     4     5     6     7     8     9
        0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56,
        // :     ;     <     =     >     ?     @
        0.24, 0.21, 0.51, 0.55, 0.52, 0.47, 0.90,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.65, 0.62, 0.65, 0.66, 0.57, 0.55, 0.68, 0.71, 0.27, 0.55, 0.63, 0.54, 0.87,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.71, 0.69, 0.63, 0.69, 0.62, 0.59, 0.60, 0.65, 0.64, 0.89, 0.63, 0.60, 0.60,
        // [     \     ]     ^     _     `
        0.27, 0.41, 0.27, 0.42, 0.45, 0.31,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.54, 0.56, 0.52, 0.56, 0.53, 0.35, 0.56, 0.55, 0.24, 0.24, 0.51, 0.24, 0.88,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.55, 0.57, 0.56, 0.57, 0.34, 0.52, 0.33, 0.55, 0.48, 0.75, 0.50, 0.47, 0.50,
        // {     |     }     ~
        0.34, 0.24, 0.34, 0.68,
    ],
    average_char_width: 0.53,
    space_width: 0.25,
};

/// Roboto Bold. Roughly 4% wider than regular.
static ROBOTO_BOLD_TABLE: FontMetricTable = FontMetricTable {
    face: FontFace::Bold,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.25, 0.27, 0.32, 0.61, 0.56, 0.73, 0.64, 0.16, 0.35, 0.35, 0.44, 0.55, 0.22, 0.28, 0.27, 0.40,
        // 0     1     2     3     4     5     6     7     8     9
        0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56,
        // :     ;     <     =     >     ?     @
        0.26, 0.24, 0.50, 0.55, 0.51, 0.48, 0.89,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.67, 0.63, 0.65, 0.65, 0.57, 0.55, 0.68, 0.71, 0.29, 0.55, 0.63, 0.54, 0.87,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.71, 0.69, 0.64, 0.69, 0.63, 0.60, 0.61, 0.65, 0.66, 0.87, 0.63, 0.62, 0.60,
        // [     \     ]     ^     _     `
        0.27, 0.42, 0.27, 0.43, 0.45, 0.32,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.54, 0.56, 0.52, 0.56, 0.54, 0.35, 0.57, 0.56, 0.26, 0.25, 0.53, 0.26, 0.88,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.56, 0.57, 0.56, 0.57, 0.36, 0.52, 0.33, 0.56, 0.50, 0.76, 0.51, 0.49, 0.51,
        // {     |     }     ~
        0.34, 0.25, 0.34, 0.68,
    ],
    average_char_width: 0.55,
    space_width: 0.25,
};

pub fn get_metrics(face: FontFace) -> &'static FontMetricTable {
    match face {
        FontFace::Regular => &ROBOTO_REGULAR_TABLE,
        FontFace::Bold => &ROBOTO_BOLD_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
