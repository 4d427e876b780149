//! Paper formats a resume is commonly printed on.
//!
//! All sizes are given in portrait orientation as (width, height) in points.
//!
//! ```
//! use resume_pdf::pagesize::{self, Paper};
//!
//! assert_eq!(Paper::Letter.size(), pagesize::LETTER);
//! ```

use crate::units::*;
use serde::{Deserialize, Serialize};

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

// north american sizes
pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(14.0 * 72.0));

// iso a-series (converted from mm to points)
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
pub const A5: PageSize = (Pt(148.0 * 72.0 / 25.4), Pt(210.0 * 72.0 / 25.4));

/// Named paper formats, for configuration files and the command line
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Paper {
    #[default]
    A4,
    A5,
    Letter,
    Legal,
}

impl Paper {
    pub fn size(self) -> PageSize {
        match self {
            Paper::A4 => A4,
            Paper::A5 => A5,
            Paper::Letter => LETTER,
            Paper::Legal => LEGAL,
        }
    }
}
