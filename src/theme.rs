//! Every size, colour and gap the resume renderer uses.
//!
//! Lengths are in millimetres and font sizes in points. A theme deserializes from any
//! subset of its fields, the rest falling back to the defaults:
//!
//! ```
//! use resume_pdf::{pagesize::Paper, Mm, Theme};
//!
//! let theme: Theme = serde_json::from_str(r#"{"paper": "letter", "margin": 20}"#).unwrap();
//! assert_eq!(theme.paper, Paper::Letter);
//! assert_eq!(theme.margin, Mm(20.0));
//! assert_eq!(theme.header, Theme::default().header);
//! ```

use crate::colour::Colour;
use crate::pagesize::Paper;
use crate::surface::Weight;
use crate::units::{Mm, Pt};
use crate::PDFError;
use serde::{Deserialize, Serialize};

fn grey(v: u8) -> Colour {
    Colour::new_rgb_bytes(v, v, v)
}

fn accent() -> Colour {
    Colour::new_rgb_bytes(78, 107, 235)
}

/// The font and colour a piece of text is set in
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub size: Pt,
    pub weight: Weight,
    pub colour: Colour,
}

impl TextStyle {
    pub fn new(size: f32, weight: Weight, colour: Colour) -> TextStyle {
        TextStyle {
            size: Pt(size),
            weight,
            colour,
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle::new(10.0, Weight::Normal, grey(50))
    }
}

/// Wrapped, left-aligned text such as the summary or a project description
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphStyle {
    pub text: TextStyle,
    /// Scales the line spacing derived from the font size
    pub line_height: f32,
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        ParagraphStyle {
            text: TextStyle::default(),
            line_height: 1.2,
        }
    }
}

/// The person's name and the contact rows beneath it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingTheme {
    pub name: TextStyle,
    pub name_advance: Mm,
    pub contact: TextStyle,
    /// Space reserved after each item when packing contact items into rows
    pub contact_packing_gap: Mm,
    /// Space actually drawn between items on a contact row
    pub contact_gap: Mm,
    pub contact_row_advance: Mm,
    pub contact_block_gap: Mm,
}

impl Default for HeadingTheme {
    fn default() -> Self {
        HeadingTheme {
            name: TextStyle::new(22.0, Weight::Bold, grey(30)),
            name_advance: Mm(10.0),
            contact: TextStyle::new(9.0, Weight::Normal, grey(60)),
            contact_packing_gap: Mm(10.0),
            contact_gap: Mm(8.0),
            contact_row_advance: Mm(5.0),
            contact_block_gap: Mm(5.0),
        }
    }
}

/// Section titles and the rule drawn under them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderTheme {
    pub text: TextStyle,
    pub check: Mm,
    pub rule_width: Mm,
    /// Distance of the rule below the title's baseline
    pub rule_offset: Mm,
    pub advance: Mm,
}

impl Default for HeaderTheme {
    fn default() -> Self {
        HeaderTheme {
            text: TextStyle::new(13.0, Weight::Bold, grey(40)),
            check: Mm(12.0),
            rule_width: Mm(0.5),
            rule_offset: Mm(1.0),
            advance: Mm(8.0),
        }
    }
}

/// Responsibility and achievement bullets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListTheme {
    pub text: TextStyle,
    pub check: Mm,
    pub marker_indent: Mm,
    pub text_indent: Mm,
    /// How much narrower than the content width the item text wraps
    pub wrap_inset: Mm,
    pub line_advance: Mm,
    pub item_gap: Mm,
    pub bullet: String,
    pub achievement: String,
    /// Shown in place of a marker the current font has no glyph for
    pub fallback: String,
}

impl Default for ListTheme {
    fn default() -> Self {
        ListTheme {
            text: TextStyle::new(10.0, Weight::Normal, grey(50)),
            check: Mm(10.0),
            marker_indent: Mm(1.0),
            text_indent: Mm(4.0),
            wrap_inset: Mm(6.0),
            line_advance: Mm(4.2),
            item_gap: Mm(4.0),
            bullet: "\u{2022}".to_string(),
            achievement: "\u{2713}".to_string(),
            fallback: "\u{bb}".to_string(),
        }
    }
}

/// Spacing shared by experience, education and project entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryTheme {
    /// Position, degree and project names
    pub title: TextStyle,
    pub title_advance: Mm,
    /// Company, dates and education details
    pub meta: TextStyle,
    pub meta_advance: Mm,
    pub experience_check: Mm,
    pub experience_gap: Mm,
    pub experience_trailing_gap: Mm,
    pub education_check: Mm,
    pub education_advance: Mm,
    pub project_check: Mm,
    pub project_gap: Mm,
    pub project_trailing_gap: Mm,
    pub url: TextStyle,
    pub url_advance: Mm,
    pub description: ParagraphStyle,
    pub technologies: TextStyle,
    pub technologies_check: Mm,
    pub technologies_advance: Mm,
}

impl Default for EntryTheme {
    fn default() -> Self {
        EntryTheme {
            title: TextStyle::new(11.0, Weight::Bold, grey(30)),
            title_advance: Mm(5.0),
            meta: TextStyle::new(10.0, Weight::Normal, grey(80)),
            meta_advance: Mm(5.0),
            experience_check: Mm(30.0),
            experience_gap: Mm(2.0),
            experience_trailing_gap: Mm(2.0),
            education_check: Mm(12.0),
            education_advance: Mm(7.0),
            project_check: Mm(20.0),
            project_gap: Mm(2.0),
            project_trailing_gap: Mm(1.0),
            url: TextStyle::new(9.0, Weight::Normal, accent()),
            url_advance: Mm(5.0),
            description: ParagraphStyle {
                text: TextStyle::new(10.0, Weight::Normal, grey(50)),
                line_height: 1.4,
            },
            technologies: TextStyle::new(9.0, Weight::Normal, grey(80)),
            technologies_check: Mm(5.0),
            technologies_advance: Mm(5.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsTheme {
    pub label: TextStyle,
    pub label_advance: Mm,
    pub list: ParagraphStyle,
    pub separator: String,
    pub group_gap: Mm,
}

impl Default for SkillsTheme {
    fn default() -> Self {
        SkillsTheme {
            label: TextStyle::new(10.0, Weight::Bold, grey(50)),
            label_advance: Mm(5.0),
            list: ParagraphStyle {
                text: TextStyle::new(10.0, Weight::Normal, grey(60)),
                line_height: 1.3,
            },
            separator: " \u{2022} ".to_string(),
            group_gap: Mm(3.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationTheme {
    pub name: TextStyle,
    pub byline: TextStyle,
    pub check: Mm,
    /// Distance of the issuer line below the name
    pub byline_offset: Mm,
    pub advance: Mm,
}

impl Default for CertificationTheme {
    fn default() -> Self {
        CertificationTheme {
            name: TextStyle::new(10.0, Weight::Normal, grey(50)),
            byline: TextStyle::new(9.0, Weight::Normal, grey(80)),
            check: Mm(8.0),
            byline_offset: Mm(4.0),
            advance: Mm(7.0),
        }
    }
}

/// The complete look of a rendered resume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub paper: Paper,
    /// Applied to all four sides of every page
    pub margin: Mm,
    /// Millimetres of line spacing per point of font size, before the paragraph's
    /// line height multiplier
    pub line_spacing_per_pt: f32,
    /// Extra room a paragraph line needs below its spacing before it is placed
    pub paragraph_check_extra: Mm,
    pub paragraph_trailing_gap: Mm,
    pub accent: Colour,
    pub heading: HeadingTheme,
    pub header: HeaderTheme,
    pub summary: ParagraphStyle,
    pub list: ListTheme,
    pub entry: EntryTheme,
    pub skills: SkillsTheme,
    pub certification: CertificationTheme,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            paper: Paper::A4,
            margin: Mm(15.0),
            line_spacing_per_pt: 0.35,
            paragraph_check_extra: Mm(2.0),
            paragraph_trailing_gap: Mm(1.0),
            accent: accent(),
            heading: HeadingTheme::default(),
            header: HeaderTheme::default(),
            summary: ParagraphStyle {
                text: TextStyle::new(10.0, Weight::Normal, grey(50)),
                line_height: 1.4,
            },
            list: ListTheme::default(),
            entry: EntryTheme::default(),
            skills: SkillsTheme::default(),
            certification: CertificationTheme::default(),
        }
    }
}

impl Theme {
    /// Load a theme from JSON; missing fields keep their default values
    pub fn from_json(json: &str) -> Result<Theme, PDFError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Distance between the baselines of a paragraph set in `style`
    pub fn line_spacing(&self, style: &ParagraphStyle) -> Mm {
        Mm(style.text.size.0 * self.line_spacing_per_pt * style.line_height)
    }
}
