use serde::{Deserialize, Serialize};

/// A colour, expressed in the RGB or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// The PDF operator arguments that select this colour, for fill (`rg`/`g`) or
    /// stroke (`RG`/`G`) operations
    pub(crate) fn operator(&self, stroke: bool) -> String {
        match (*self, stroke) {
            (Colour::RGB { r, g, b }, false) => format!("{r} {g} {b} rg"),
            (Colour::RGB { r, g, b }, true) => format!("{r} {g} {b} RG"),
            (Colour::Grey { g }, false) => format!("{g} g"),
            (Colour::Grey { g }, true) => format!("{g} G"),
        }
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8)) -> Self {
        Colour::new_rgb_bytes(c.0, c.1, c.2)
    }
}

impl From<[u8; 3]> for Colour {
    fn from(c: [u8; 3]) -> Self {
        let [r, g, b] = c;
        Colour::new_rgb_bytes(r, g, b)
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_colours_scale_to_unit_range() {
        assert_eq!(
            Colour::from((255, 0, 51)),
            Colour::RGB {
                r: 1.0,
                g: 0.0,
                b: 0.2
            }
        );
    }

    #[test]
    fn operators_distinguish_fill_and_stroke() {
        assert_eq!(colours::BLACK.operator(false), "0 g");
        assert_eq!(Colour::new_rgb(1.0, 0.5, 0.0).operator(true), "1 0.5 0 RG");
    }

    #[test]
    fn deserializes_either_space() {
        let rgb: Colour = serde_json::from_str(r#"{"r":1.0,"g":0.0,"b":0.0}"#).unwrap();
        assert_eq!(rgb, Colour::new_rgb(1.0, 0.0, 0.0));
        let grey: Colour = serde_json::from_str(r#"{"g":0.25}"#).unwrap();
        assert_eq!(grey, Colour::new_grey(0.25));
    }
}
