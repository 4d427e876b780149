//! Content stream generation for pages.

use crate::font::Font;
use crate::page::{LineLayout, PageContents, SpanLayout, Typeface};
use crate::standard;
use id_arena::Arena;
use std::io::Write;

/// Renders page contents to an (uncompressed) PDF content stream, converting the
/// high-level content items into low-level PDF operators.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(
    contents: &[PageContents],
    fonts: &Arena<Font>,
) -> Result<Vec<u8>, std::io::Error> {
    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(spans) => render_text_spans(&mut content, spans, fonts)?,
            PageContents::Line(line) => render_line(&mut content, line)?,
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_text_spans(
    content: &mut Vec<u8>,
    spans: &[SpanLayout],
    fonts: &Arena<Font>,
) -> Result<(), std::io::Error> {
    let Some(first) = spans.first() else {
        return Ok(());
    };

    write!(content, "q\n")?;

    let mut current_font = first.font;
    let mut current_colour = first.colour;
    write!(
        content,
        "/{} {} Tf\n",
        current_font.face.resource_name(),
        current_font.size
    )?;
    write!(content, "{}\n", current_colour.operator(false))?;

    for span in spans.iter() {
        if span.font != current_font {
            current_font = span.font;
            write!(
                content,
                "/{} {} Tf\n",
                current_font.face.resource_name(),
                current_font.size
            )?;
        }
        if span.colour != current_colour {
            current_colour = span.colour;
            write!(content, "{}\n", current_colour.operator(false))?;
        }

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;
        write!(content, "<")?;
        match current_font.face {
            Typeface::Standard(_) => {
                for byte in standard::encode(&span.text) {
                    write!(content, "{byte:02x}")?;
                }
            }
            Typeface::Embedded(id) => {
                let font = &fonts[id];
                for ch in span.text.chars() {
                    let gid = font
                        .glyph_id(ch)
                        .or_else(|| font.fallback_glyph_id())
                        .unwrap_or(0);
                    write!(content, "{gid:04x}")?;
                }
            }
        }
        write!(content, "> Tj\n")?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_line(content: &mut Vec<u8>, line: &LineLayout) -> Result<(), std::io::Error> {
    write!(content, "q\n")?;
    write!(content, "{} w\n", line.width)?;
    write!(content, "{}\n", line.colour.operator(true))?;
    write!(content, "{} {} m\n", line.from.0, line.from.1)?;
    write!(content, "{} {} l\n", line.to.0, line.to.1)?;
    write!(content, "S\n")?;
    write!(content, "Q\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::{colours, Colour};
    use crate::page::SpanFont;
    use crate::standard::StandardFont;
    use crate::units::Pt;

    #[test]
    fn standard_text_is_written_as_winansi_hex() {
        let spans = vec![SpanLayout {
            text: "Hi\u{2022}".to_string(),
            font: SpanFont {
                face: Typeface::Standard(StandardFont::HelveticaBold),
                size: Pt(12.0),
            },
            colour: colours::BLACK,
            coords: (Pt(10.0), Pt(20.0)),
        }];
        let rendered =
            render_contents(&[PageContents::Text(spans)], &Arena::new()).expect("can render");
        let rendered = String::from_utf8(rendered).expect("content is ascii");

        assert!(rendered.contains("/H1 12 Tf\n"));
        assert!(rendered.contains("10 20 Td\n<486995> Tj\n"));
    }

    #[test]
    fn lines_are_stroked_in_their_own_graphics_state() {
        let line = LineLayout {
            from: (Pt(0.0), Pt(5.0)),
            to: (Pt(50.0), Pt(5.0)),
            width: Pt(1.5),
            colour: Colour::new_rgb(0.0, 0.0, 1.0),
        };
        let rendered =
            render_contents(&[PageContents::Line(line)], &Arena::new()).expect("can render");
        assert_eq!(
            String::from_utf8(rendered).expect("content is ascii"),
            "q\n1.5 w\n0 0 1 RG\n0 5 m\n50 5 l\nS\nQ\n"
        );
    }
}
