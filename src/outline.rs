use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use pdf_writer::{Finish, Name, Null, Pdf, TextStr};

/// The document outline ("bookmarks" in most viewers): a flat list of entries, each
/// jumping to a spot on a page
#[derive(Default, Debug)]
pub struct Outline {
    pub entries: Vec<OutlineEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry {
    pub title: String,
    pub page_index: usize,
    /// Where the viewer should scroll to, in PDF space (distance from the bottom of the
    /// page)
    pub top: Pt,
}

impl Outline {
    pub fn add_bookmark(&mut self, title: String, page_index: usize, top: Pt) {
        self.entries.push(OutlineEntry {
            title,
            page_index,
            top,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        if self.entries.is_empty() {
            return;
        }

        let outlines_id = refs.gen(RefType::Outlines);
        let ids: Vec<_> = (0..self.entries.len())
            .map(|i| refs.gen(RefType::OutlineEntry(i)))
            .collect();

        let mut outline = writer.outline(outlines_id);
        outline.first(ids[0]);
        outline.last(ids[ids.len() - 1]);
        outline.count(ids.len() as i32);
        outline.finish();

        for (i, entry) in self.entries.iter().enumerate() {
            let Some(page_id) = refs.get(RefType::Page(entry.page_index)) else {
                continue;
            };

            let mut item = writer.outline_item(ids[i]);
            item.parent(outlines_id);
            item.title(TextStr(entry.title.as_str()));
            if i > 0 {
                item.prev(ids[i - 1]);
            }
            if i + 1 < ids.len() {
                item.next(ids[i + 1]);
            }
            item.insert(Name(b"Dest"))
                .array()
                .item(page_id)
                .item(Name(b"XYZ"))
                .item(Null)
                .item(*entry.top)
                .item(Null);
        }
    }
}
