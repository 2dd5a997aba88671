//! The palette table: named hue families and their brightness floors.
//!
//! Every family owns a hue interval and a lower-bound curve. The curve is a
//! list of `(saturation, min_brightness)` points with strictly increasing
//! saturation; brightness falls as saturation rises. Interpolating the curve
//! gives the darkest brightness that still reads as a clean color at a given
//! saturation.
//!
//! Red's interval starts below zero so hues just under 360 land in it.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::range::Range;

/// One `(saturation, min_brightness)` point of a lower-bound curve.
pub type BoundPoint = (i32, i32);

/// Hues at or above this value are shifted down by 360 before lookup.
const WRAP_START: i32 = 334;

/// The fixed set of color families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorFamily {
    /// Grayscale only. Never returned by [`ColorFamily::lookup`].
    Monochrome,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
}

struct FamilyData {
    hue_range: Range,
    lower_bounds: &'static [BoundPoint],
}

const MONOCHROME: FamilyData = FamilyData {
    hue_range: Range::new(0, 0),
    lower_bounds: &[(0, 0), (100, 0)],
};

const RED: FamilyData = FamilyData {
    hue_range: Range::new(-26, 18),
    lower_bounds: &[
        (20, 100),
        (30, 92),
        (40, 89),
        (50, 85),
        (60, 78),
        (70, 70),
        (80, 60),
        (90, 55),
        (100, 50),
    ],
};

const ORANGE: FamilyData = FamilyData {
    hue_range: Range::new(19, 46),
    lower_bounds: &[
        (20, 100),
        (30, 93),
        (40, 88),
        (50, 86),
        (60, 85),
        (70, 70),
        (100, 70),
    ],
};

const YELLOW: FamilyData = FamilyData {
    hue_range: Range::new(47, 62),
    lower_bounds: &[
        (25, 100),
        (40, 94),
        (50, 89),
        (60, 86),
        (70, 84),
        (80, 82),
        (90, 80),
        (100, 75),
    ],
};

const GREEN: FamilyData = FamilyData {
    hue_range: Range::new(63, 178),
    lower_bounds: &[
        (30, 100),
        (40, 90),
        (50, 85),
        (60, 81),
        (70, 74),
        (80, 64),
        (90, 50),
        (100, 40),
    ],
};

const BLUE: FamilyData = FamilyData {
    hue_range: Range::new(179, 257),
    lower_bounds: &[
        (20, 100),
        (30, 86),
        (40, 80),
        (50, 74),
        (60, 60),
        (70, 52),
        (80, 44),
        (90, 39),
        (100, 35),
    ],
};

const PURPLE: FamilyData = FamilyData {
    hue_range: Range::new(258, 282),
    lower_bounds: &[
        (20, 100),
        (30, 87),
        (40, 79),
        (50, 70),
        (60, 65),
        (70, 59),
        (80, 52),
        (90, 45),
        (100, 42),
    ],
};

const PINK: FamilyData = FamilyData {
    hue_range: Range::new(283, 334),
    lower_bounds: &[
        (20, 100),
        (30, 90),
        (40, 86),
        (60, 84),
        (80, 80),
        (90, 75),
        (100, 73),
    ],
};

impl ColorFamily {
    /// All families in table order.
    pub const ALL: [ColorFamily; 8] = [
        ColorFamily::Monochrome,
        ColorFamily::Red,
        ColorFamily::Orange,
        ColorFamily::Yellow,
        ColorFamily::Green,
        ColorFamily::Blue,
        ColorFamily::Purple,
        ColorFamily::Pink,
    ];

    const fn data(self) -> &'static FamilyData {
        match self {
            Self::Monochrome => &MONOCHROME,
            Self::Red => &RED,
            Self::Orange => &ORANGE,
            Self::Yellow => &YELLOW,
            Self::Green => &GREEN,
            Self::Blue => &BLUE,
            Self::Purple => &PURPLE,
            Self::Pink => &PINK,
        }
    }

    /// Lowercase name used on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monochrome => "monochrome",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Pink => "pink",
        }
    }

    /// The hue interval, possibly with a negative lower bound.
    pub const fn hue_range(self) -> Range {
        self.data().hue_range
    }

    pub const fn lower_bounds(self) -> &'static [BoundPoint] {
        self.data().lower_bounds
    }

    /// Saturation span covered by the curve: first point to last point.
    pub fn saturation_range(self) -> Range {
        let (first, last) = self.curve_ends();
        Range::new(first.0, last.0)
    }

    /// Brightness span covered by the curve: last point to first point.
    pub fn brightness_range(self) -> Range {
        let (first, last) = self.curve_ends();
        Range::new(last.1, first.1)
    }

    fn curve_ends(self) -> (BoundPoint, BoundPoint) {
        let bounds = self.lower_bounds();
        debug_assert!(bounds.len() >= 2, "{self} has a degenerate curve");
        (bounds[0], bounds[bounds.len() - 1])
    }

    /// Minimum brightness for `saturation`, by linear interpolation between
    /// the two curve points that bracket it.
    ///
    /// Arithmetic is integer: the segment slope truncates toward zero before
    /// it is applied. Saturations outside the curve yield 0.
    pub fn minimum_brightness(self, saturation: i32) -> i32 {
        let bounds = self.lower_bounds();
        debug_assert!(
            bounds.windows(2).all(|w| w[0].0 < w[1].0),
            "{self} curve is not sorted by saturation"
        );
        for pair in bounds.windows(2) {
            let (s1, v1) = pair[0];
            let (s2, v2) = pair[1];
            if saturation >= s1 && saturation <= s2 {
                let slope = (v2 - v1) / (s2 - s1);
                return v1 + slope * (saturation - s1);
            }
        }
        0
    }

    /// Find the family whose hue interval contains `hue` (degrees).
    ///
    /// Hues in `334..=360` are shifted down by 360 first. Monochrome is only
    /// reachable by explicit selection, so it is skipped here and is also the
    /// fallback when nothing matches.
    pub fn lookup(hue: i32) -> ColorFamily {
        let hue = if (WRAP_START..=360).contains(&hue) {
            hue - 360
        } else {
            hue
        };
        ColorFamily::ALL
            .into_iter()
            .filter(|family| *family != ColorFamily::Monochrome)
            .find(|family| family.hue_range().contains(hue))
            .unwrap_or_else(|| {
                log::warn!("hue {hue} matches no palette family, using monochrome");
                ColorFamily::Monochrome
            })
    }
}

impl fmt::Display for ColorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorFamily {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ColorFamily::ALL
            .into_iter()
            .find(|family| family.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::UnknownFamily(s.to_string()))
    }
}
