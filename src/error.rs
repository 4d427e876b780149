use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error("font has no unicode character map")]
    /// The font can't map characters to glyphs, so no text can be set in it
    MissingCmap,

    #[error("page is not part of the document")]
    /// A page listed in the page order is missing from the page arena
    PageMissing,

    #[error("invalid JSON: {0}")]
    /// A resume or theme could not be deserialized
    Json(#[from] serde_json::Error),
}
