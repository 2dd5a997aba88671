//! Turning [`Options`] into a concrete [`Color`].
//!
//! Hue is drawn first. The family that drives saturation and brightness is
//! the explicit one from the options, or else the family the drawn hue falls
//! into. Saturation is drawn from that family's curve span, then brightness
//! from an interval whose floor depends on the drawn saturation.

use rand::RngExt;

use crate::color::Color;
use crate::options::{Luminosity, Options};
use crate::palette::ColorFamily;
use crate::range::Range;

/// Saturation floor for `Bright`, ceiling for `Light`.
const SATURATION_PIVOT: i32 = 55;
/// How far above the curve `Dark` lets brightness go.
const DARK_SPREAD: i32 = 20;
const FULL: Range = Range::new(0, 100);

/// Generate one color using the caller's random source.
pub fn generate_with<R: RngExt + ?Sized>(rng: &mut R, options: &Options) -> Color {
    let hue = pick_hue(rng, options);
    let family = options.family.unwrap_or_else(|| ColorFamily::lookup(hue));
    let saturation = pick_saturation(rng, family, options.luminosity);
    let brightness = pick_brightness(rng, family, saturation, options.luminosity);

    log::debug!(
        "generated hsb({hue}, {saturation}, {brightness}) from {family} ({})",
        options.luminosity
    );
    Color::new(hue, saturation, brightness, family)
}

fn pick_hue<R: RngExt + ?Sized>(rng: &mut R, options: &Options) -> i32 {
    let range = options.hue_range();
    log::trace!("hue range {range}");
    range.sample(rng).rem_euclid(360)
}

fn pick_saturation<R: RngExt + ?Sized>(
    rng: &mut R,
    family: ColorFamily,
    luminosity: Luminosity,
) -> i32 {
    if family == ColorFamily::Monochrome {
        return 0;
    }
    let range = saturation_range(family, luminosity);
    log::trace!("saturation range {range}");
    range.sample(rng)
}

fn pick_brightness<R: RngExt + ?Sized>(
    rng: &mut R,
    family: ColorFamily,
    saturation: i32,
    luminosity: Luminosity,
) -> i32 {
    let range = brightness_range(family, saturation, luminosity);
    log::trace!("brightness range {range}");
    range.sample(rng)
}

/// Interval saturation is drawn from for a non-monochrome family.
pub fn saturation_range(family: ColorFamily, luminosity: Luminosity) -> Range {
    let Range { low, high } = family.saturation_range();
    let range = match luminosity {
        Luminosity::Bright => Range::new(low.max(SATURATION_PIVOT), high),
        Luminosity::Dark => Range::new(high - 10, high),
        Luminosity::Light => Range::new(low, SATURATION_PIVOT),
        Luminosity::Random => FULL,
        Luminosity::Default => Range::new(low, high),
    };
    debug_assert!(
        range.low <= range.high,
        "{family}/{luminosity} saturation range {range} is empty"
    );
    range
}

/// Interval brightness is drawn from once saturation is known.
pub fn brightness_range(family: ColorFamily, saturation: i32, luminosity: Luminosity) -> Range {
    let floor = family.minimum_brightness(saturation);
    let range = match luminosity {
        Luminosity::Dark => Range::new(floor, (floor + DARK_SPREAD).min(100)),
        Luminosity::Light => Range::new((floor + 100) / 2, 100),
        Luminosity::Bright => Range::new(floor, 100),
        Luminosity::Default | Luminosity::Random => FULL,
    };
    debug_assert!(
        range.low <= range.high,
        "{family}/{luminosity} brightness range {range} is empty"
    );
    range
}
