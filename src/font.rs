use crate::{
    refs::{ObjectReferences, RefType},
    PDFError, Pt,
};
use id_arena::Id;
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Ref, Str,
};
use std::collections::HashMap;

/// A parsed TrueType or OpenType font, embedded in its entirety in the generated PDF.
/// Use these when the built-in Helvetica faces can't show the text (non-Latin names,
/// check marks, ...) or when the resume should be set in a specific typeface.
///
/// Fonts are referred to from pages by their [Id] within the [Document](crate::Document).
pub struct Font {
    pub face: OwnedFace,
    /// glyph id => the first character that maps to it, for the ToUnicode map and the
    /// width array
    glyphs: HashMap<u16, char>,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed or has no unicode character map
    pub fn load(bytes: Vec<u8>) -> Result<Font, PDFError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        let glyphs = unicode_glyphs(face.as_face_ref()).ok_or(PDFError::MissingCmap)?;

        Ok(Font { face, glyphs })
    }

    fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    fn scaling(&self, size: Pt) -> Pt {
        size / self.face().units_per_em() as f32
    }

    /// The full name of the font, falling back to the family name
    pub fn name(&self) -> String {
        self.name_entry(owned_ttf_parser::name_id::FULL_NAME)
            .or_else(|| self.family())
            .unwrap_or_else(|| "EmbeddedFont".to_string())
    }

    /// The family name of the font, if the font declares one
    pub fn family(&self) -> Option<String> {
        self.name_entry(owned_ttf_parser::name_id::FAMILY)
    }

    fn name_entry(&self, id: u16) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Calculate the width of a given string of text at the given font size. Characters
    /// missing from the font are measured as the glyph that will be drawn in their place
    pub fn text_width(&self, text: &str, size: Pt) -> Pt {
        let scaling = self.scaling(size);
        text.chars()
            .filter_map(|ch| self.glyph_id(ch).or_else(|| self.fallback_glyph_id()))
            .map(|gid| {
                scaling * self.face().glyph_hor_advance(GlyphId(gid)).unwrap_or_default() as f32
            })
            .sum()
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face().glyph_index(ch).map(|i| i.0)
    }

    /// The glyph drawn for characters the font doesn't cover: the replacement
    /// character if present, otherwise a question mark
    pub fn fallback_glyph_id(&self) -> Option<u16> {
        self.glyph_id('\u{FFFD}').or_else(|| self.glyph_id('?'))
    }

    pub fn has_glyphs(&self, text: &str) -> bool {
        text.chars().all(|ch| self.glyph_id(ch).is_some())
    }

    /// (advance, height) in font units for every mapped glyph
    fn glyph_sizes(&self) -> HashMap<u16, (u16, i16)> {
        let face = self.face();
        self.glyphs
            .keys()
            .filter_map(|&gid| {
                let advance = face.glyph_hor_advance(GlyphId(gid))?;
                let height = face
                    .glyph_bounding_box(GlyphId(gid))
                    .map(|bbox| bbox.y_max - bbox.y_min - face.descender())
                    .unwrap_or(1000);
                Some((gid, (advance, height)))
            })
            .collect()
    }

    fn write_cid(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) -> Ref {
        let font_descriptor_id = self.write_descriptor(refs, font_index, writer);

        let id = refs.gen(RefType::CidFont(font_index));

        let mut cid_font = writer.cid_font(id);
        cid_font.subtype(CidFontType::Type2);
        cid_font.base_font(Name(format!("F{font_index}").as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(font_descriptor_id);

        let scaling = 1000.0 / self.face().units_per_em() as f32;
        let sizes = self.glyph_sizes();

        // the most common advance becomes /DW
        let mut width_counts: HashMap<u16, usize> = HashMap::new();
        for (advance, _) in sizes.values() {
            *width_counts.entry(*advance).or_insert(0) += 1;
        }
        let default_width = width_counts
            .iter()
            .max_by_key(|&(&width, &count)| (count, width))
            .map(|(&width, _)| width as f32 * scaling)
            .unwrap_or(1000.0);

        let mut id_widths: Vec<(u16, f32)> = sizes
            .iter()
            .map(|(&gid, &(advance, _))| (gid, advance as f32 * scaling))
            .collect();
        id_widths.sort_by_key(|(gid, _)| *gid);

        let mut widths = cid_font.widths();
        widths.consecutive(0, [1000.0]);
        // runs of consecutive glyph ids share one entry
        let mut runs: Vec<(u16, Vec<f32>)> = Vec::new();
        for (gid, width) in id_widths {
            match runs.last_mut() {
                Some((start, run)) if (gid - *start) as usize == run.len() => run.push(width),
                _ => runs.push((gid, vec![width])),
            }
        }
        for (start, run) in runs {
            widths.consecutive(start, run);
        }
        widths.finish();

        cid_font.default_width(default_width);
        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));

        id
    }

    fn write_font_data(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.gen(RefType::FontData(font_index));

        writer
            .stream(id, self.face.as_slice())
            .pair(Name(b"Length1"), self.face.as_slice().len() as i32);

        id
    }

    fn write_descriptor(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let font_data_stream_id = self.write_font_data(refs, font_index, writer);

        let sizes = self.glyph_sizes();
        let max_width = sizes.values().map(|&(w, _)| w).max().unwrap_or_default();
        let max_height = sizes.values().map(|&(_, h)| h).max().unwrap_or_default();
        let sum_width: usize = sizes.values().map(|&(w, _)| w as usize).sum();
        let avg_width = sum_width as f32 / sizes.len().max(1) as f32;

        let face = self.face();
        let scaling = 1000.0 / face.units_per_em() as f32;

        let id = refs.gen(RefType::FontDescriptor(font_index));
        let mut descriptor = writer.font_descriptor(id);
        descriptor.name(Name(self.name().as_bytes()));
        if let Some(family) = self.family() {
            descriptor.family(Str(family.as_bytes()));
        }
        descriptor.weight(face.weight().to_number());

        let mut flags: FontFlags = FontFlags::NON_SYMBOLIC;
        if face.is_monospaced() {
            flags.set(FontFlags::FIXED_PITCH, true);
        }
        if face.is_italic() {
            flags.set(FontFlags::ITALIC, true);
        }
        descriptor.flags(flags);

        descriptor.bbox(pdf_writer::Rect {
            x1: 0.0,
            y1: 0.0,
            x2: max_width as f32 * scaling,
            y2: max_height as f32 * scaling,
        });
        descriptor.italic_angle(if face.is_italic() { -12.0 } else { 0.0 });
        descriptor.ascent(face.ascender() as f32 * scaling);
        descriptor.descent(face.descender() as f32 * scaling);
        descriptor.leading(face.line_gap() as f32 * scaling);
        let cap_height = face.capital_height().map(|h| h as f32 * scaling).unwrap_or(1000.0);
        descriptor.cap_height(cap_height);
        descriptor.x_height(
            face.x_height()
                .map(|h| h as f32 * scaling)
                .unwrap_or(cap_height),
        );
        // fonts don't record their stem width; 80 is the conventional regular value
        descriptor.stem_v(if face.is_bold() { 140.0 } else { 80.0 });
        descriptor.avg_width(avg_width * scaling);
        descriptor.max_width(max_width as f32 * scaling);
        descriptor.missing_width(max_width as f32 * scaling);

        descriptor.font_file2(font_data_stream_id);

        id
    }

    fn write_to_unicode(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.gen(RefType::ToUnicode(font_index));

        let mut map = String::from(
            "/CIDInit /ProcSet findresource begin\n\
             12 dict begin\n\
             begincmap\n\
             /CIDSystemInfo\n\
             << /Registry (Adobe)\n\
             /Ordering (UCS) /Supplement 0 >> def\n\
             /CMapName /Adobe-Identity-UCS def\n\
             /CMapType 2 def\n\
             1 begincodespacerange\n\
             <0000> <FFFF>\n\
             endcodespacerange\n",
        );

        let mut ids: Vec<(u16, char)> = self.glyphs.iter().map(|(&id, &ch)| (id, ch)).collect();
        ids.sort_by_key(|&(id, _)| id);

        // a bfchar block holds at most 100 entries sharing a common high byte
        let mut blocks: Vec<Vec<(u16, char)>> = Vec::new();
        for (id, ch) in ids {
            match blocks.last_mut() {
                Some(block)
                    if block.len() < 100 && block.first().map(|&(first, _)| first >> 8) == Some(id >> 8) =>
                {
                    block.push((id, ch))
                }
                _ => blocks.push(vec![(id, ch)]),
            }
        }

        for block in blocks {
            map.push_str(&format!("{} beginbfchar\n", block.len()));
            for (id, ch) in block {
                let mut utf16 = [0u16; 2];
                let units: String = ch
                    .encode_utf16(&mut utf16)
                    .iter()
                    .map(|unit| format!("{unit:04x}"))
                    .collect();
                map.push_str(&format!("<{id:04x}> <{units}>\n"));
            }
            map.push_str("endbfchar\n");
        }

        map.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            map.as_bytes(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        id
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        let font_index = id.index();
        let font_id = refs.gen(RefType::Font(font_index));
        let cid_font_id = self.write_cid(refs, font_index, writer);
        let to_unicode_id = self.write_to_unicode(refs, font_index, writer);

        let mut font = writer.type0_font(font_id);
        font.base_font(Name(format!("F{font_index}").as_bytes()));
        font.encoding_predefined(Name(b"Identity-H"));
        font.descendant_font(cid_font_id);
        font.to_unicode(to_unicode_id);
    }
}

/// Collect every glyph reachable from a unicode cmap subtable. Returns [None] if the
/// font has no cmap at all
fn unicode_glyphs(face: &Face<'_>) -> Option<HashMap<u16, char>> {
    let cmap = face.tables().cmap?;
    let mut map: HashMap<u16, char> = HashMap::new();

    for subtable in cmap.subtables.into_iter().filter(|table| table.is_unicode()) {
        subtable.codepoints(|codepoint: u32| {
            if let Ok(ch) = char::try_from(codepoint) {
                if let Some(index) = subtable.glyph_index(codepoint).filter(|index| index.0 > 0) {
                    map.entry(index.0).or_insert(ch);
                }
            }
        });
    }

    Some(map)
}
