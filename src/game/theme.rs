//! Board color palettes.

use crate::board::Square;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Draw an RGBA overlay on top of this color.
    #[must_use]
    pub fn blend(self, overlay: [u8; 4]) -> Rgb {
        let alpha = u16::from(overlay[3]);
        let mix = |base: u8, top: u8| {
            ((u16::from(top) * alpha + u16::from(base) * (255 - alpha) + 127) / 255) as u8
        };
        Rgb(
            mix(self.0, overlay[0]),
            mix(self.1, overlay[1]),
            mix(self.2, overlay[2]),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Theme {
    pub light: Rgb,
    pub dark: Rgb,
}

impl Theme {
    /// Color of `sq`; the top-left square is light.
    #[must_use]
    pub const fn square_color(&self, sq: Square) -> Rgb {
        if (sq.0 + sq.1) % 2 == 0 {
            self.light
        } else {
            self.dark
        }
    }
}

pub const THEMES: [Theme; 4] = [
    Theme {
        light: Rgb(210, 180, 140),
        dark: Rgb(139, 69, 19),
    },
    Theme {
        light: Rgb(240, 240, 240),
        dark: Rgb(50, 50, 50),
    },
    Theme {
        light: Rgb(255, 223, 186),
        dark: Rgb(128, 0, 0),
    },
    Theme {
        light: Rgb(224, 255, 255),
        dark: Rgb(0, 51, 102),
    },
];

/// RGBA overlay drawn on legal destinations.
pub const HIGHLIGHT_RGBA: [u8; 4] = [0, 255, 0, 100];
