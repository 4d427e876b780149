//! The resume layout engine.
//!
//! Content flows down the page from the top margin. Before anything is placed, the
//! renderer checks whether the block it is about to place still fits above the bottom
//! margin and starts a new page if it doesn't, so a line of text is never split across
//! two pages. Sections with nothing to show are left out entirely.
//!
//! ```
//! use resume_pdf::{pagesize, RecordingSurface, Renderer, ResumeDocument};
//!
//! let doc = ResumeDocument::from_json(
//!     r#"{"personalInfo": {"name": "Jane Doe"}, "summary": "Builds things."}"#,
//! )
//! .unwrap();
//!
//! let mut surface = RecordingSurface::new(pagesize::A4);
//! let summary = Renderer::default().render(&doc, &mut surface);
//! assert_eq!(summary.pages, 1);
//! assert_eq!(summary.sections, vec![("PROFESSIONAL SUMMARY".to_string(), 0)]);
//! ```

mod cursor;
mod session;

pub use cursor::*;

use crate::font::Font;
use crate::info::Info;
use crate::layout::Margins;
use crate::resume::ResumeDocument;
use crate::surface::{PdfSurface, Surface};
use crate::theme::Theme;
use crate::PDFError;
use session::RenderSession;
use tracing::debug;

/// What a render produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    pub pages: usize,
    /// Each section title that was rendered, with the 0-based page it starts on
    pub sections: Vec<(String, usize)>,
}

/// Lays resumes out according to a [`Theme`]. A renderer holds no per-document state
/// and can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> Renderer {
        Renderer { theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Lay `doc` out onto `surface`, which should be freshly created. Layout never fails;
    /// absent or blank fields just leave their content out.
    pub fn render<S: Surface>(&self, doc: &ResumeDocument, surface: &mut S) -> RenderSummary {
        let summary = RenderSession::new(&self.theme, surface).run(doc);
        debug!(pages = summary.pages, sections = summary.sections.len(), "rendered resume");
        summary
    }

    /// A PDF surface sized and margined for this renderer's theme, set in the built-in
    /// Helvetica faces
    pub fn surface(&self) -> PdfSurface {
        PdfSurface::new(self.theme.paper.size(), Some(Margins::all(self.theme.margin)))
    }

    /// Like [`Renderer::surface`], with text set in the given embedded fonts
    pub fn surface_with_fonts(&self, regular: Font, bold: Font) -> PdfSurface {
        PdfSurface::with_fonts(
            self.theme.paper.size(),
            Some(Margins::all(self.theme.margin)),
            regular,
            bold,
        )
    }

    /// Render `doc` into the bytes of a PDF file
    pub fn render_pdf(&self, doc: &ResumeDocument) -> Result<Vec<u8>, PDFError> {
        let mut surface = self.surface();
        self.render(doc, &mut surface);
        surface.finish(Some(document_info(doc)))
    }

    /// Render `doc` into the bytes of a PDF file, embedding `regular` and `bold`
    pub fn render_pdf_with_fonts(
        &self,
        doc: &ResumeDocument,
        regular: Font,
        bold: Font,
    ) -> Result<Vec<u8>, PDFError> {
        let mut surface = self.surface_with_fonts(regular, bold);
        self.render(doc, &mut surface);
        surface.finish(Some(document_info(doc)))
    }
}

/// Render `doc` with the default theme into the bytes of a PDF file
pub fn render(doc: &ResumeDocument) -> Result<Vec<u8>, PDFError> {
    Renderer::default().render_pdf(doc)
}

/// The metadata block for a rendered resume. No creation date is set.
pub fn document_info(doc: &ResumeDocument) -> Info {
    let name = doc.personal_info.name.trim();
    let mut info = Info::new();
    info.subject("Resume");
    if !name.is_empty() {
        info.title(format!("{name} - Resume")).author(name);
    }
    if let Some(keywords) = doc.keywords() {
        info.keywords(keywords);
    }
    info
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::{Experience, PersonalInfo, Skills};
    use crate::surface::RecordingSurface;
    use crate::units::{Mm, Pt};

    fn doc() -> ResumeDocument {
        ResumeDocument {
            personal_info: PersonalInfo {
                name: "Jane Doe".to_string(),
                email: Some("jane@example.com".to_string()),
                ..Default::default()
            },
            skills: Some(Skills {
                technical: vec!["Rust".to_string(), "SQL".to_string()],
                soft: vec![],
            }),
            ..Default::default()
        }
    }

    #[test]
    fn metadata_names_the_person() {
        let info = document_info(&doc());
        assert_eq!(info.title.as_deref(), Some("Jane Doe - Resume"));
        assert_eq!(info.author.as_deref(), Some("Jane Doe"));
        assert_eq!(info.subject.as_deref(), Some("Resume"));
        assert_eq!(info.keywords.as_deref(), Some("Rust, SQL"));
        assert_eq!(info.creation_date, None);
    }

    #[test]
    fn heading_sits_at_the_top_margin() {
        let mut surface = RecordingSurface::new(crate::pagesize::A4);
        Renderer::default().render(&doc(), &mut surface);

        let name = surface.find_text("Jane Doe").expect("name is placed");
        let margin: Pt = Mm(15.0).into();
        assert_eq!((name.x, name.y), (margin, margin));
        assert_eq!(name.size, Pt(22.0));

        let email = surface.find_text("jane@example.com").expect("email is placed");
        let advance: Pt = Mm(10.0).into();
        assert_eq!(email.y, margin + advance);
        assert_eq!(email.size, Pt(9.0));
    }

    #[test]
    fn blank_entries_do_not_produce_sections() {
        let mut doc = doc();
        doc.skills = None;
        doc.summary = Some("   ".to_string());
        doc.experience = vec![Experience::default()];

        let mut surface = RecordingSurface::new(crate::pagesize::A4);
        let summary = Renderer::default().render(&doc, &mut surface);
        assert!(summary.sections.is_empty());
        assert!(surface.lines().next().is_none());
    }

    #[test]
    fn renders_a_pdf() {
        let bytes = render(&doc()).expect("renders");
        assert!(bytes.starts_with(b"%PDF-"));
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("(Jane Doe - Resume)"));
        assert!(text.contains("/Helvetica-Bold"));
    }
}
