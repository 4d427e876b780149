use crate::colour::Colour;
use crate::content::render_contents;
use crate::font::Font;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::standard::StandardFont;
use crate::units::Pt;
use crate::PDFError;
use id_arena::{Arena, Id};
use pdf_writer::{Filter, Finish, Name, Pdf};

/// The face a span is set in: one of the built-in faces, or a font embedded in the
/// document
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Typeface {
    Standard(StandardFont),
    Embedded(Id<Font>),
}

impl Typeface {
    /// The name the face is registered under in every page's resource dictionary
    pub(crate) fn resource_name(&self) -> String {
        match self {
            Typeface::Standard(StandardFont::Helvetica) => "H0".to_string(),
            Typeface::Standard(StandardFont::HelveticaBold) => "H1".to_string(),
            Typeface::Embedded(id) => format!("F{}", id.index()),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub face: Typeface,
    pub size: Pt,
}

/// A run of text sharing one font and colour, placed with its baseline starting at
/// `coords` (PDF space, origin at the bottom-left of the page)
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

/// A stroked straight line segment, in PDF space
#[derive(Clone, PartialEq, Debug)]
pub struct LineLayout {
    pub from: (Pt, Pt),
    pub to: (Pt, Pt),
    pub width: Pt,
    pub colour: Colour,
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(Vec<SpanLayout>),
    Line(LineLayout),
}

/// A single page of the document
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// The laid out text and line art, in painting order
    pub contents: Vec<PageContents>,
}

impl Page {
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let (width, height) = size;
        let margins = margins.unwrap_or_default();
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: width - margins.right,
                y2: height - margins.top,
            },
            contents: Vec::default(),
        }
    }

    /// Add a span of text to the page. Consecutive spans are grouped so that font and
    /// colour changes are only written when they actually change
    pub fn add_span(&mut self, span: SpanLayout) {
        match self.contents.last_mut() {
            Some(PageContents::Text(spans)) => spans.push(span),
            _ => self.contents.push(PageContents::Text(vec![span])),
        }
    }

    pub fn add_line(&mut self, line: LineLayout) {
        self.contents.push(PageContents::Line(line));
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &Arena<Font>,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let id = refs.get(RefType::Page(page_index)).ok_or(PDFError::PageMissing)?;
        let page_tree = refs.get_or_gen(RefType::PageTree);
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(page_tree);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (i, standard) in [StandardFont::Helvetica, StandardFont::HelveticaBold]
            .into_iter()
            .enumerate()
        {
            resource_fonts.pair(
                Name(Typeface::Standard(standard).resource_name().as_bytes()),
                refs.get_or_gen(RefType::StandardFont(i)),
            );
        }
        for (font_id, _) in fonts.iter() {
            resource_fonts.pair(
                Name(Typeface::Embedded(font_id).resource_name().as_bytes()),
                refs.get_or_gen(RefType::Font(font_id.index())),
            );
        }
        resource_fonts.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let rendered = render_contents(&self.contents, fonts)?;
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            rendered.as_slice(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(content_id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::pagesize;

    fn span(text: &str) -> SpanLayout {
        SpanLayout {
            text: text.to_string(),
            font: SpanFont {
                face: Typeface::Standard(StandardFont::Helvetica),
                size: Pt(10.0),
            },
            colour: colours::BLACK,
            coords: (Pt(0.0), Pt(0.0)),
        }
    }

    #[test]
    fn content_box_sits_inside_the_margins() {
        let page = Page::new(pagesize::LETTER, Some(Margins::all(Pt(36.0))));
        assert_eq!(page.content_box.x1, Pt(36.0));
        assert_eq!(page.content_box.y2, Pt(11.0 * 72.0 - 36.0));
        assert_eq!(page.content_box.width(), Pt(8.5 * 72.0 - 72.0));
    }

    #[test]
    fn spans_group_until_a_line_interrupts() {
        let mut page = Page::new(pagesize::A4, None);
        page.add_span(span("a"));
        page.add_span(span("b"));
        page.add_line(LineLayout {
            from: (Pt(0.0), Pt(0.0)),
            to: (Pt(10.0), Pt(0.0)),
            width: Pt(1.0),
            colour: colours::BLACK,
        });
        page.add_span(span("c"));

        assert_eq!(page.contents.len(), 3);
        assert!(matches!(&page.contents[0], PageContents::Text(spans) if spans.len() == 2));
    }
}
