use crate::{
    font::Font,
    info::Info,
    outline::Outline,
    page::Page,
    refs::{ObjectReferences, RefType},
    standard::StandardFont,
    PDFError, Pt,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Name, Pdf, Ref};
use std::io::Write;

#[derive(Default)]
/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub fonts: Arena<Font>,
    pub outline: Outline,
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its id
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// Number of pages added so far
    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// Add a font to the document structure. Fonts are stored "globally" within the
    /// document, such that any page can refer to it by the returned id.
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        self.fonts.alloc(font)
    }

    /// Add a bookmark in the document outline pointing at `top` (PDF space) on the page
    /// at `page_index`
    pub fn add_bookmark<S: ToString>(&mut self, title: S, page_index: usize, top: Pt) {
        self.outline.add_bookmark(title.to_string(), page_index, top);
    }

    /// Render the whole document into memory and return the PDF bytes
    pub fn to_bytes(self) -> Result<Vec<u8>, PDFError> {
        let Document {
            info,
            pages,
            page_order,
            fonts,
            outline,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        // page refs are keyed by position in the document (not arena index) so that
        // bookmarks can reference pages by their page number
        let page_refs: Vec<Ref> = (0..page_order.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for (i, standard) in [StandardFont::Helvetica, StandardFont::HelveticaBold]
            .into_iter()
            .enumerate()
        {
            let id = refs.gen(RefType::StandardFont(i));
            writer
                .type1_font(id)
                .base_font(Name(standard.base_font()))
                .pair(Name(b"Encoding"), Name(b"WinAnsiEncoding"));
        }

        for (id, font) in fonts.iter() {
            font.write(&mut refs, id, &mut writer);
        }

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(PDFError::PageMissing)?;
            page.write(&mut refs, page_index, &fonts, &mut writer)?;
        }

        outline.write(&mut refs, &mut writer);

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        if let Some(outlines_id) = refs.get(RefType::Outlines) {
            catalog.outlines(outlines_id);
        }
        catalog.finish();

        Ok(writer.finish())
    }

    /// Write the entire document to the writer. Note: although this can write to arbitrary
    /// streams, the entire document is "rendered" in memory first.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), PDFError> {
        let bytes = self.to_bytes()?;
        w.write_all(bytes.as_slice()).map_err(Into::into)
    }
}
