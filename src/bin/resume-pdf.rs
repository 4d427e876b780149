//! resume-pdf - Render a resume record into a PDF file
//!
//! Reads the resume JSON (optionally wrapped in a markdown code fence, as AI services
//! tend to return it) from a file or standard input and writes the laid out PDF.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use resume_pdf::pagesize::Paper;
use resume_pdf::{document_info, Font, Renderer, ResumeDocument, Theme};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Paper format, overriding the theme's
#[derive(Debug, Clone, Copy, ValueEnum)]
enum PaperArg {
    A4,
    A5,
    Letter,
    Legal,
}

impl From<PaperArg> for Paper {
    fn from(paper: PaperArg) -> Paper {
        match paper {
            PaperArg::A4 => Paper::A4,
            PaperArg::A5 => Paper::A5,
            PaperArg::Letter => Paper::Letter,
            PaperArg::Legal => Paper::Legal,
        }
    }
}

/// Render a resume record into a PDF file.
#[derive(Parser, Debug)]
#[command(name = "resume-pdf")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Resume JSON to read; standard input if omitted
    input: Option<PathBuf>,

    /// Where to write the PDF
    #[arg(short, long)]
    output: PathBuf,

    /// JSON file overriding any subset of the layout theme
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Paper format
    #[arg(short, long, value_enum)]
    paper: Option<PaperArg>,

    /// TrueType/OpenType font to set regular text in, instead of Helvetica
    #[arg(long, requires = "bold_font")]
    font: Option<PathBuf>,

    /// TrueType/OpenType font to set bold text in
    #[arg(long, requires = "font")]
    bold_font: Option<PathBuf>,

    /// Leave the creation date out of the document info, so identical input produces
    /// identical files
    #[arg(long)]
    no_timestamp: bool,
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut json = String::new();
            io::stdin()
                .read_to_string(&mut json)
                .context("failed to read standard input")?;
            Ok(json)
        }
    }
}

fn load_font(path: &Path) -> Result<Font> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let font =
        Font::load(bytes).with_context(|| format!("failed to load font {}", path.display()))?;
    debug!(font = %font.name(), path = %path.display(), "loaded font");
    Ok(font)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let mut theme = match &args.theme {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Theme::from_json(&json).with_context(|| format!("invalid theme {}", path.display()))?
        }
        None => Theme::default(),
    };
    if let Some(paper) = args.paper {
        theme.paper = paper.into();
    }

    let json = read_input(args.input.as_deref())?;
    let doc = ResumeDocument::from_json(&json).context("invalid resume")?;
    if doc.personal_info.name.trim().is_empty() {
        bail!("resume has no name");
    }

    let renderer = Renderer::new(theme);
    let mut surface = match (&args.font, &args.bold_font) {
        (Some(regular), Some(bold)) => {
            renderer.surface_with_fonts(load_font(regular)?, load_font(bold)?)
        }
        _ => renderer.surface(),
    };
    let summary = renderer.render(&doc, &mut surface);

    let mut metadata = document_info(&doc);
    if !args.no_timestamp {
        metadata.created_at(chrono::Local::now().fixed_offset());
    }
    let bytes = surface.finish(Some(metadata)).context("failed to serialize PDF")?;
    fs::write(&args.output, bytes)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    info!(
        pages = summary.pages,
        sections = summary.sections.len(),
        output = %args.output.display(),
        "wrote resume"
    );
    Ok(())
}
