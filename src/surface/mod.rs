//! Drawing surfaces: the low-level primitives the resume renderer is written against.
//!
//! A [`Surface`] is a stack of pages that text and lines are placed on at absolute
//! coordinates. Coordinates passed to a surface have their origin at the **top-left**
//! corner of the page with `y` growing downwards, and text is placed by its baseline.
//! Surfaces also answer measurement questions (how wide is this string in the current
//! font, how would it wrap) so that layout code never needs to know about fonts.
//!
//! Two implementations are provided:
//!
//! - [`PdfSurface`] draws into a [`Document`](crate::Document) and serializes it
//! - [`RecordingSurface`] keeps a list of every draw call, for tests and layout
//!   inspection

mod pdf;
mod recording;

pub use pdf::*;
pub use recording::*;

use crate::colour::{colours, Colour};
use crate::layout::split_to_width;
use crate::pagesize::PageSize;
use crate::units::{Mm, Pt};
use serde::{Deserialize, Serialize};

/// Font weight; each surface maps these to a regular and a bold face
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    #[default]
    Normal,
    Bold,
}

/// The font, colour and stroke settings that apply to the next placement
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GraphicsState {
    pub font_size: Pt,
    pub weight: Weight,
    pub text_colour: Colour,
    pub line_width: Pt,
    pub draw_colour: Colour,
}

impl Default for GraphicsState {
    fn default() -> Self {
        GraphicsState {
            font_size: Pt(16.0),
            weight: Weight::Normal,
            text_colour: colours::BLACK,
            line_width: Mm(0.2).into(),
            draw_colour: colours::BLACK,
        }
    }
}

pub trait Surface {
    /// Width and height of every page
    fn page_size(&self) -> PageSize;

    /// Number of pages, including the one currently being drawn on
    fn page_count(&self) -> usize;

    /// Finish the current page and continue on a fresh one
    fn add_page(&mut self);

    fn set_font_size(&mut self, size: Pt);

    fn set_weight(&mut self, weight: Weight);

    fn set_text_colour(&mut self, colour: Colour);

    fn set_line_width(&mut self, width: Pt);

    fn set_draw_colour(&mut self, colour: Colour);

    /// Stroke a line segment with the current line width and draw colour
    fn line(&mut self, from: (Pt, Pt), to: (Pt, Pt));

    /// Place `text` with its baseline starting at `at` on the current page
    fn text(&mut self, text: &str, at: (Pt, Pt));

    /// Width of `text` in the current font and size
    fn text_width(&self, text: &str) -> Pt;

    /// Wrap `text` into lines no wider than `max_width` in the current font and size
    fn split_text_to_size(&self, text: &str, max_width: Pt) -> Vec<String> {
        split_to_width(text, max_width, |s| self.text_width(s))
    }

    /// Whether the current font can show every character of `text`
    fn can_render(&self, _text: &str) -> bool {
        true
    }

    /// Mark a navigation point titled `title` at height `y` of the current page
    fn bookmark(&mut self, _title: &str, _y: Pt) {}
}
