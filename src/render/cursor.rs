use crate::units::Pt;

/// Where the next placement goes: a page index and a baseline offset from the top of
/// that page
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LayoutCursor {
    pub page: usize,
    pub y: Pt,
}

impl LayoutCursor {
    pub fn new(page: usize, top: Pt) -> LayoutCursor {
        LayoutCursor { page, y: top }
    }

    pub fn advance<D: Into<Pt>>(&mut self, by: D) {
        self.y += by.into();
    }

    /// Whether a block of `height` placed here stays above `bottom`
    pub fn fits(&self, height: Pt, bottom: Pt) -> bool {
        self.y + height <= bottom
    }

    pub fn next_page(&mut self, top: Pt) {
        self.page += 1;
        self.y = top;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Mm;

    #[test]
    fn fits_until_the_bottom_is_crossed() {
        let mut cursor = LayoutCursor::new(0, Pt(10.0));
        assert!(cursor.fits(Pt(90.0), Pt(100.0)));
        assert!(!cursor.fits(Pt(90.5), Pt(100.0)));

        cursor.advance(Pt(50.0));
        assert!(!cursor.fits(Pt(60.0), Pt(100.0)));
        cursor.next_page(Pt(10.0));
        assert_eq!(cursor, LayoutCursor::new(1, Pt(10.0)));
    }

    #[test]
    fn advances_in_any_unit() {
        let mut cursor = LayoutCursor::new(0, Pt(0.0));
        cursor.advance(Mm(25.4));
        assert!((cursor.y.0 - 72.0).abs() < 1e-4);
    }
}
