use super::{GraphicsState, Surface, Weight};
use crate::colour::Colour;
use crate::document::Document;
use crate::font::Font;
use crate::info::Info;
use crate::layout::Margins;
use crate::page::{LineLayout, Page, SpanFont, SpanLayout, Typeface};
use crate::pagesize::PageSize;
use crate::standard::{self, StandardFont};
use crate::units::Pt;
use crate::PDFError;
use id_arena::Id;

/// A [`Surface`] that draws straight into a PDF [`Document`].
///
/// The surface starts out with one empty page. Text is set in a regular and a bold
/// face, which are either the built-in Helvetica faces ([`PdfSurface::new`]) or two
/// embedded fonts ([`PdfSurface::with_fonts`]).
pub struct PdfSurface {
    document: Document,
    page_size: PageSize,
    margins: Option<Margins>,
    current: Id<Page>,
    regular: Typeface,
    bold: Typeface,
    state: GraphicsState,
}

impl PdfSurface {
    /// A surface using the built-in Helvetica faces, which need no font files but can
    /// only show characters from the Windows-1252 repertoire
    pub fn new(page_size: PageSize, margins: Option<Margins>) -> PdfSurface {
        PdfSurface::with_faces(
            Document::default(),
            page_size,
            margins,
            Typeface::Standard(StandardFont::Helvetica),
            Typeface::Standard(StandardFont::HelveticaBold),
        )
    }

    /// A surface that embeds `regular` and `bold` and sets all text in them
    pub fn with_fonts(
        page_size: PageSize,
        margins: Option<Margins>,
        regular: Font,
        bold: Font,
    ) -> PdfSurface {
        let mut document = Document::default();
        let regular = Typeface::Embedded(document.add_font(regular));
        let bold = Typeface::Embedded(document.add_font(bold));
        PdfSurface::with_faces(document, page_size, margins, regular, bold)
    }

    fn with_faces(
        mut document: Document,
        page_size: PageSize,
        margins: Option<Margins>,
        regular: Typeface,
        bold: Typeface,
    ) -> PdfSurface {
        let current = document.add_page(Page::new(page_size, margins));
        PdfSurface {
            document,
            page_size,
            margins,
            current,
            regular,
            bold,
            state: GraphicsState::default(),
        }
    }

    fn face(&self) -> Typeface {
        match self.state.weight {
            Weight::Normal => self.regular,
            Weight::Bold => self.bold,
        }
    }

    /// Convert a top-down surface coordinate into PDF space
    fn flip(&self, at: (Pt, Pt)) -> (Pt, Pt) {
        (at.0, self.page_size.1 - at.1)
    }

    /// The document drawn so far
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Serialize every page into a single PDF file, attaching `info` if given
    pub fn finish(self, info: Option<Info>) -> Result<Vec<u8>, PDFError> {
        let mut document = self.document;
        if let Some(info) = info {
            document.set_info(info);
        }
        document.to_bytes()
    }
}

impl Surface for PdfSurface {
    fn page_size(&self) -> PageSize {
        self.page_size
    }

    fn page_count(&self) -> usize {
        self.document.page_count()
    }

    fn add_page(&mut self) {
        self.current = self
            .document
            .add_page(Page::new(self.page_size, self.margins));
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
        let line = LineLayout {
            from: self.flip(from),
            to: self.flip(to),
            width: self.state.line_width,
            colour: self.state.draw_colour,
        };
        self.document.pages[self.current].add_line(line);
    }

    fn text(&mut self, text: &str, at: (Pt, Pt)) {
        if text.is_empty() {
            return;
        }
        let span = SpanLayout {
            text: text.to_string(),
            font: SpanFont {
                face: self.face(),
                size: self.state.font_size,
            },
            colour: self.state.text_colour,
            coords: self.flip(at),
        };
        self.document.pages[self.current].add_span(span);
    }

    fn text_width(&self, text: &str) -> Pt {
        match self.face() {
            Typeface::Standard(font) => font.text_width(text, self.state.font_size),
            Typeface::Embedded(id) => self.document.fonts[id].text_width(text, self.state.font_size),
        }
    }

    fn can_render(&self, text: &str) -> bool {
        match self.face() {
            Typeface::Standard(_) => standard::can_encode(text),
            Typeface::Embedded(id) => self.document.fonts[id].has_glyphs(text),
        }
    }

    fn bookmark(&mut self, title: &str, y: Pt) {
        let top = self.page_size.1 - y + self.state.font_size;
        let page_index = self.document.page_count() - 1;
        self.document.add_bookmark(title, page_index, top);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize;
    use crate::page::PageContents;

    #[test]
    fn flips_coordinates_into_pdf_space() {
        let mut surface = PdfSurface::new(pagesize::LETTER, None);
        surface.set_font_size(Pt(10.0));
        surface.text("Top", (Pt(72.0), Pt(72.0)));

        let page = surface.document().pages.iter().next().expect("has a page").1;
        match &page.contents[0] {
            PageContents::Text(spans) => {
                assert_eq!(spans[0].coords, (Pt(72.0), Pt(11.0 * 72.0 - 72.0)));
                assert_eq!(spans[0].font.size, Pt(10.0));
            }
            other => panic!("expected text, found {other:?}"),
        }
    }

    #[test]
    fn weight_selects_the_face_used_for_measuring() {
        let mut surface = PdfSurface::new(pagesize::A4, None);
        surface.set_font_size(Pt(10.0));
        let regular = surface.text_width("Skills");
        surface.set_weight(Weight::Bold);
        assert!(surface.text_width("Skills") > regular);
        assert!(!surface.can_render("\u{2713}"));
        assert!(surface.can_render("\u{2022} Rust"));
    }

    #[test]
    fn pages_and_bookmarks_serialize() {
        let mut surface = PdfSurface::new(pagesize::A4, None);
        surface.add_page();
        surface.bookmark("EDUCATION", Pt(100.0));
        assert_eq!(surface.page_count(), 2);

        let bytes = surface.finish(None).expect("can serialize");
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Count 2"));
        assert!(text.contains("(EDUCATION)"));
    }
}
