//! Renders a resume read from JSON in a pair of TrueType/OpenType fonts.
//!
//! ```sh
//! cargo run --example embedded-fonts -- resume.json Inter-Regular.ttf Inter-Bold.ttf
//! ```

use resume_pdf::{Font, Renderer, ResumeDocument};

fn main() {
    let mut args = std::env::args().skip(1);
    let (Some(input), Some(regular), Some(bold)) = (args.next(), args.next(), args.next()) else {
        eprintln!("usage: embedded-fonts <resume.json> <regular.ttf> <bold.ttf>");
        std::process::exit(2);
    };

    // the JSON may still be wrapped in the code fence a chat model put around it
    let json = std::fs::read_to_string(input).expect("can read resume");
    let doc = ResumeDocument::from_json(&json).expect("resume is valid");

    let regular = Font::load(std::fs::read(regular).expect("can read font")).expect("can load font");
    let bold = Font::load(std::fs::read(bold).expect("can read font")).expect("can load font");

    // embedded fonts usually carry the check mark, so achievements keep their marker
    let pdf = Renderer::default()
        .render_pdf_with_fonts(&doc, regular, bold)
        .expect("can render");
    std::fs::write("embedded-fonts.pdf", pdf).expect("can write pdf");
}
