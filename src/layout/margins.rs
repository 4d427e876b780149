use crate::units::Pt;

/// The blank border kept around the content of every page. Layout code places content
/// inside the margins, and [`Page`](crate::Page)s record them as their `ArtBox`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Margins of `value` on every side
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// The horizontal space between the margins of a page `page_width` wide
    pub fn content_width(&self, page_width: Pt) -> Pt {
        page_width - self.left - self.right
    }

    /// Distance from the top of a page `page_height` tall down to its bottom margin
    pub fn content_bottom(&self, page_height: Pt) -> Pt {
        page_height - self.bottom
    }

    /// Distance from the left of a page `page_width` wide across to its right margin
    pub fn content_right(&self, page_width: Pt) -> Pt {
        page_width - self.right
    }
}
