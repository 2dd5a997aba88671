/// Generated colors and their conversion to RGB.
use std::fmt;

use crate::palette::ColorFamily;
use crate::range::Range;

/// An 8-bit RGBA value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// CSS-style `#rrggbb`, alpha dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A color in hue/saturation/brightness, with the family it was drawn from.
///
/// `h` is in `0..360`, `s` and `b` in `0..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    h: i32,
    s: i32,
    b: i32,
    family: ColorFamily,
}

impl Color {
    pub fn new(h: i32, s: i32, b: i32, family: ColorFamily) -> Self {
        debug_assert!((0..=360).contains(&h), "hue {h} out of range");
        debug_assert!((0..=100).contains(&s), "saturation {s} out of range");
        debug_assert!((0..=100).contains(&b), "brightness {b} out of range");
        Self { h, s, b, family }
    }

    pub fn hue(&self) -> i32 {
        self.h
    }

    pub fn saturation(&self) -> i32 {
        self.s
    }

    pub fn brightness(&self) -> i32 {
        self.b
    }

    /// The family whose curve produced the saturation and brightness.
    pub fn family(&self) -> ColorFamily {
        self.family
    }

    pub fn hue_range(&self) -> Range {
        self.family.hue_range()
    }

    pub fn saturation_range(&self) -> Range {
        self.family.saturation_range()
    }

    pub fn brightness_range(&self) -> Range {
        self.family.brightness_range()
    }

    /// Convert to RGB. Alpha is always opaque.
    ///
    /// Hue 0 is treated as 1 and 360 as 359, so both ends of the wheel stay
    /// off the sector boundary. Channels are floored, not rounded.
    pub fn to_rgba(&self) -> Rgba {
        let h = match self.h {
            0 => 1,
            360 => 359,
            h => h,
        };
        let h = f64::from(h) / 360.0;
        let s = f64::from(self.s) / 100.0;
        let v = f64::from(self.b) / 100.0;

        let sector = (h * 6.0).floor();
        let f = h * 6.0 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);

        let (r, g, b) = match sector as u8 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Rgba {
            r: channel(r),
            g: channel(g),
            b: channel(b),
            a: u8::MAX,
        }
    }

    pub fn to_rgb(&self) -> [u8; 3] {
        let Rgba { r, g, b, .. } = self.to_rgba();
        [r, g, b]
    }

    pub fn to_hex(&self) -> String {
        self.to_rgba().to_hex()
    }
}

fn channel(fraction: f64) -> u8 {
    (fraction * 255.0).floor().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
