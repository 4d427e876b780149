//! Lay out structured resume records as paginated PDF documents.
//!
//! A [`ResumeDocument`] (usually deserialized from JSON) is handed to a [`Renderer`],
//! which flows it down the pages of a [`Surface`]: the person's name and contact rows,
//! then each section that has content. [`PdfSurface`] turns the result into a PDF file;
//! [`RecordingSurface`] keeps every placement for inspection.
//!
//! ```
//! use resume_pdf::ResumeDocument;
//!
//! let doc = ResumeDocument::from_json(r#"{
//!     "personalInfo": {"name": "Jane Doe", "email": "jane@example.com"},
//!     "experience": [{
//!         "company": "Acme", "position": "Engineer",
//!         "startDate": "2020", "endDate": "Present",
//!         "responsibilities": ["Built the billing pipeline"]
//!     }]
//! }"#).unwrap();
//!
//! let pdf = resume_pdf::render(&doc).unwrap();
//! assert!(pdf.starts_with(b"%PDF-"));
//! ```

mod colour;
pub use colour::*;

mod content;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// Utility functions and structures to layout objects (most text) on pages
pub mod layout;

mod outline;
pub use outline::*;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod render;
pub use render::*;

mod resume;
pub use resume::*;

pub mod standard;
pub use standard::StandardFont;

mod surface;
pub use surface::*;

mod theme;
pub use theme::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
