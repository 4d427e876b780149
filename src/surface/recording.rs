use super::{GraphicsState, Surface, Weight};
use crate::colour::Colour;
use crate::pagesize::PageSize;
use crate::standard::{self, StandardFont};
use crate::units::Pt;

/// A piece of text as it was placed on a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub struct TextOp {
    /// 0-based page index
    pub page: usize,
    pub text: String,
    /// Left edge of the text
    pub x: Pt,
    /// Baseline, measured down from the top of the page
    pub y: Pt,
    pub size: Pt,
    pub weight: Weight,
    pub colour: Colour,
    /// Measured width of the text at placement
    pub width: Pt,
}

/// A line segment as it was stroked on a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub struct LineOp {
    pub page: usize,
    pub from: (Pt, Pt),
    pub to: (Pt, Pt),
    pub width: Pt,
    pub colour: Colour,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text(TextOp),
    Line(LineOp),
}

/// A [`Surface`] that draws nothing and instead records every placement, measuring
/// text with the built-in Helvetica metrics so that its layout matches a
/// [`PdfSurface`](super::PdfSurface) created with [`PdfSurface::new`](super::PdfSurface::new).
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    page_size: PageSize,
    pages: usize,
    state: GraphicsState,
    pub ops: Vec<DrawOp>,
    /// (title, page, y) of every bookmark
    pub bookmarks: Vec<(String, usize, Pt)>,
}

impl RecordingSurface {
    pub fn new(page_size: PageSize) -> RecordingSurface {
        RecordingSurface {
            page_size,
            pages: 1,
            state: GraphicsState::default(),
            ops: Vec::new(),
            bookmarks: Vec::new(),
        }
    }

    fn font(&self) -> StandardFont {
        match self.state.weight {
            Weight::Normal => StandardFont::Helvetica,
            Weight::Bold => StandardFont::HelveticaBold,
        }
    }

    /// Every text placement, in drawing order
    pub fn texts(&self) -> impl Iterator<Item = &TextOp> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(text) => Some(text),
            DrawOp::Line(_) => None,
        })
    }

    /// Every stroked line, in drawing order
    pub fn lines(&self) -> impl Iterator<Item = &LineOp> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Line(line) => Some(line),
            DrawOp::Text(_) => None,
        })
    }

    /// The first placement whose text is exactly `text`
    pub fn find_text(&self, text: &str) -> Option<&TextOp> {
        self.texts().find(|op| op.text == text)
    }
}

impl Surface for RecordingSurface {
    fn page_size(&self) -> PageSize {
        self.page_size
    }

    fn page_count(&self) -> usize {
        self.pages
    }

    fn add_page(&mut self) {
        self.pages += 1;
    }

    fn set_font_size(&mut self, size: Pt) {
        self.state.font_size = size;
    }

    fn set_weight(&mut self, weight: Weight) {
        self.state.weight = weight;
    }

    fn set_text_colour(&mut self, colour: Colour) {
        self.state.text_colour = colour;
    }

    fn set_line_width(&mut self, width: Pt) {
        self.state.line_width = width;
    }

    fn set_draw_colour(&mut self, colour: Colour) {
        self.state.draw_colour = colour;
    }

    fn line(&mut self, from: (Pt, Pt), to: (Pt, Pt)) {
        self.ops.push(DrawOp::Line(LineOp {
            page: self.pages - 1,
            from,
            to,
            width: self.state.line_width,
            colour: self.state.draw_colour,
        }));
    }

    fn text(&mut self, text: &str, at: (Pt, Pt)) {
        if text.is_empty() {
            return;
        }
        let width = self.text_width(text);
        self.ops.push(DrawOp::Text(TextOp {
            page: self.pages - 1,
            text: text.to_string(),
            x: at.0,
            y: at.1,
            size: self.state.font_size,
            weight: self.state.weight,
            colour: self.state.text_colour,
            width,
        }));
    }

    fn text_width(&self, text: &str) -> Pt {
        self.font().text_width(text, self.state.font_size)
    }

    fn can_render(&self, text: &str) -> bool {
        standard::can_encode(text)
    }

    fn bookmark(&mut self, title: &str, y: Pt) {
        self.bookmarks.push((title.to_string(), self.pages - 1, y));
    }
}
