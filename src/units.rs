//! Physical lengths.
//!
//! Everything that ends up in the PDF is expressed in [`Pt`] (1/72 inch). [`Mm`] and
//! [`In`] exist so that layout constants can be written in the unit they were
//! designed in and converted at the point of use.
//!
//! ```
//! use resume_pdf::{Mm, Pt};
//!
//! let margin: Pt = Mm(25.4).into();
//! assert!((margin.0 - 72.0).abs() < 1e-4);
//! ```

use derive_more::{Add, AddAssign, Deref, DerefMut, Display, From, Into, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul, Neg};

/// A length in PostScript points
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Sum,
    Deref,
    DerefMut,
    Display,
    From,
    Into,
)]
#[serde(transparent)]
pub struct Pt(pub f32);

/// A length in millimetres
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize, Add, Sub, Display, From,
)]
#[serde(transparent)]
pub struct Mm(pub f32);

/// A length in inches
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize, Add, Sub, Display, From,
)]
#[serde(transparent)]
pub struct In(pub f32);

const POINTS_PER_INCH: f32 = 72.0;
const MM_PER_INCH: f32 = 25.4;

impl From<In> for Pt {
    fn from(value: In) -> Self {
        Pt(value.0 * POINTS_PER_INCH)
    }
}

impl From<Mm> for Pt {
    fn from(value: Mm) -> Self {
        Pt(value.0 * POINTS_PER_INCH / MM_PER_INCH)
    }
}

impl From<Pt> for Mm {
    fn from(value: Pt) -> Self {
        Mm(value.0 * MM_PER_INCH / POINTS_PER_INCH)
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

impl Neg for Pt {
    type Output = Pt;

    fn neg(self) -> Pt {
        Pt(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_between_units() {
        assert_eq!(Pt::from(In(1.0)), Pt(72.0));
        let a4_width: Pt = Mm(210.0).into();
        assert!((a4_width.0 - 595.2756).abs() < 1e-3);
        let back: Mm = a4_width.into();
        assert!((back.0 - 210.0).abs() < 1e-3);
    }

    #[test]
    fn arithmetic_stays_in_points() {
        let mut y = Pt(10.0) + Pt(2.5) * 2.0;
        y -= Pt(5.0);
        assert_eq!(y, Pt(10.0));
        assert_eq!(-y / 2.0, Pt(-5.0));
        let total: Pt = [Pt(1.0), Pt(2.0), Pt(3.0)].into_iter().sum();
        assert_eq!(total, Pt(6.0));
    }
}
