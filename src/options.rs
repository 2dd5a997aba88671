/// The caller's request: which hue to aim for and how light or dark to go.
use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::error::ParseError;
use crate::palette::ColorFamily;
use crate::range::Range;

/// Preset that narrows the saturation and brightness intervals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Luminosity {
    /// Family saturation range, any brightness.
    #[default]
    Default,
    Bright,
    Dark,
    Light,
    /// Saturation anywhere in `0..=100`, ignoring the family.
    Random,
}

impl Luminosity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Bright => "bright",
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Random => "random",
        }
    }
}

impl fmt::Display for Luminosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Luminosity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bright" => Ok(Self::Bright),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            "random" => Ok(Self::Random),
            "" | "default" => Ok(Self::Default),
            _ => Err(ParseError::UnknownLuminosity(s.to_string())),
        }
    }
}

/// Parameters for a single generated color.
///
/// `family` wins over `hue`: when both are set the hue is drawn from the
/// family's interval and the family's curve drives saturation and brightness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Exact hue in degrees. Only `1..=359` pins the hue; anything else is
    /// treated as unconstrained.
    pub hue: Option<i32>,
    pub family: Option<ColorFamily>,
    pub luminosity: Luminosity,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain new colors to the family `color` was drawn from.
    pub fn like(color: &Color) -> Self {
        Self::new().family(color.family())
    }

    pub fn hue(mut self, degrees: i32) -> Self {
        self.hue = Some(degrees);
        self
    }

    pub fn family(mut self, family: ColorFamily) -> Self {
        self.family = Some(family);
        self
    }

    pub fn luminosity(mut self, luminosity: Luminosity) -> Self {
        self.luminosity = luminosity;
        self
    }

    /// The degree hue, if it is usable as an exact selector.
    pub fn exact_hue(&self) -> Option<i32> {
        self.hue.filter(|h| *h > 0 && *h < 360)
    }

    /// Interval the hue is drawn from.
    pub fn hue_range(&self) -> Range {
        if let Some(family) = self.family {
            return family.hue_range();
        }
        match self.exact_hue() {
            Some(h) => Range::exact(h),
            None => Range::new(0, 360),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unconstrained() {
        let opts = Options::new();
        assert_eq!(opts.hue_range(), Range::new(0, 360));
        assert_eq!(opts.luminosity, Luminosity::Default);
    }

    #[test]
    fn exact_hue_collapses_range() {
        assert_eq!(Options::new().hue(200).hue_range(), Range::exact(200));
        assert_eq!(Options::new().hue(1).hue_range(), Range::exact(1));
        assert_eq!(Options::new().hue(359).hue_range(), Range::exact(359));
    }

    #[test]
    fn out_of_range_hue_is_unconstrained() {
        for h in [0, 360, -5, 720] {
            assert_eq!(Options::new().hue(h).exact_hue(), None, "{h}");
            assert_eq!(Options::new().hue(h).hue_range(), Range::new(0, 360));
        }
    }

    #[test]
    fn family_takes_precedence_over_hue() {
        let opts = Options::new().hue(200).family(ColorFamily::Red);
        assert_eq!(opts.hue_range(), Range::new(-26, 18));
    }

    #[test]
    fn parse_luminosity() {
        assert_eq!("bright".parse(), Ok(Luminosity::Bright));
        assert_eq!("DARK".parse(), Ok(Luminosity::Dark));
        assert_eq!("light".parse(), Ok(Luminosity::Light));
        assert_eq!("random".parse(), Ok(Luminosity::Random));
        assert_eq!("".parse(), Ok(Luminosity::Default));
        assert_eq!(
            "dim".parse::<Luminosity>(),
            Err(ParseError::UnknownLuminosity("dim".to_string()))
        );
    }
}
