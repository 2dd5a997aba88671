use rand::{SeedableRng, rngs::StdRng};
use randomcolor::{ColorFamily, Generator, Luminosity, Options, generate_with};

const HUED: [ColorFamily; 7] = [
    ColorFamily::Red,
    ColorFamily::Orange,
    ColorFamily::Yellow,
    ColorFamily::Green,
    ColorFamily::Blue,
    ColorFamily::Purple,
    ColorFamily::Pink,
];

fn folded_contains(family: ColorFamily, hue: i32) -> bool {
    let range = family.hue_range();
    range.contains(hue) || range.contains(hue - 360)
}

#[test]
fn exact_hue_is_returned_verbatim() {
    let mut rng = StdRng::seed_from_u64(2024);
    for h in 1..360 {
        let color = generate_with(&mut rng, &Options::new().hue(h));
        assert_eq!(color.hue(), h);
    }
}

#[test]
fn family_hue_stays_in_family_interval() {
    let mut rng = StdRng::seed_from_u64(77);
    for family in HUED {
        for _ in 0..300 {
            let color = generate_with(&mut rng, &Options::new().family(family));
            assert!((0..360).contains(&color.hue()));
            assert!(folded_contains(family, color.hue()), "{family}: {}", color.hue());
        }
    }
}

#[test]
fn monochrome_is_gray() {
    let generator = Generator::with_seed(5);
    for luminosity in [
        Luminosity::Default,
        Luminosity::Bright,
        Luminosity::Dark,
        Luminosity::Light,
        Luminosity::Random,
    ] {
        let opts = Options::new()
            .family(ColorFamily::Monochrome)
            .luminosity(luminosity);
        for color in generator.generate_many(&opts, 100) {
            assert_eq!(color.saturation(), 0);
            let rgba = color.to_rgba();
            assert_eq!(rgba.r, rgba.g);
            assert_eq!(rgba.g, rgba.b);
        }
    }
}

#[test]
fn dark_stays_near_the_curve() {
    let generator = Generator::with_seed(11);
    for family in HUED {
        let opts = Options::new().family(family).luminosity(Luminosity::Dark);
        for color in generator.generate_many(&opts, 300) {
            let floor = family.minimum_brightness(color.saturation());
            assert!(color.brightness() >= floor);
            assert!(color.brightness() <= floor + 20, "{family}: {color:?}");
        }
    }
}

#[test]
fn light_stays_in_the_upper_half() {
    let generator = Generator::with_seed(12);
    for family in HUED {
        let opts = Options::new().family(family).luminosity(Luminosity::Light);
        for color in generator.generate_many(&opts, 300) {
            let floor = family.minimum_brightness(color.saturation());
            assert!(color.brightness() >= (floor + 100) / 2, "{family}: {color:?}");
            assert!(color.saturation() <= 55);
        }
    }
}

#[test]
fn unconstrained_light_uses_the_hue_family() {
    let generator = Generator::with_seed(21);
    let opts = Options::new().luminosity(Luminosity::Light);
    for color in generator.generate_many(&opts, 1000) {
        let floor = color.family().minimum_brightness(color.saturation());
        assert!(color.brightness() >= (floor + 100) / 2, "{color:?}");
    }
}

#[test]
fn random_luminosity_spans_full_saturation() {
    let generator = Generator::with_seed(31);
    let opts = Options::new()
        .family(ColorFamily::Green)
        .luminosity(Luminosity::Random);
    let colors = generator.generate_many(&opts, 2000);
    assert!(colors.iter().all(|c| (0..=100).contains(&c.saturation())));
    // Green's curve starts at 30; random ignores that floor.
    assert!(colors.iter().any(|c| c.saturation() < 30));
}

#[test]
fn bright_purple_scenario() {
    let generator = Generator::with_seed(1000);
    let opts = Options::new()
        .family(ColorFamily::Purple)
        .luminosity(Luminosity::Bright);
    let saturation = ColorFamily::Purple.saturation_range();
    for color in generator.generate_many(&opts, 1000) {
        assert!(color.saturation() >= 55);
        assert!(saturation.contains(color.saturation()));
        assert!((258..=282).contains(&color.hue()));
        let floor = ColorFamily::Purple.minimum_brightness(color.saturation());
        assert!((floor..=100).contains(&color.brightness()));
        // u8 channels cannot leave 0..=255; the alpha must stay opaque.
        assert_eq!(color.to_rgba().a, 255);
    }
}

#[test]
fn hue_extremes_are_adjacent_reds() {
    let low = randomcolor::Color::new(0, 80, 90, ColorFamily::Red).to_rgba();
    let high = randomcolor::Color::new(360, 80, 90, ColorFamily::Red).to_rgba();
    assert_eq!(low.r, high.r);
    assert!(low.r > 200);
    assert!(low.g.abs_diff(high.b) <= 1);
    assert_eq!(low.b, high.g);
}

#[test]
fn reusing_a_result_as_constraint() {
    let generator = Generator::with_seed(64);
    let seed_color = generator.generate(&Options::new().hue(215));
    assert_eq!(seed_color.family(), ColorFamily::Blue);
    for color in generator.generate_many(&Options::like(&seed_color), 100) {
        assert_eq!(color.family(), ColorFamily::Blue);
        assert!(seed_color.hue_range().contains(color.hue()));
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let opts = Options::new();
    let first: Vec<_> = Generator::with_seed(7)
        .generate_many(&opts, 100)
        .iter()
        .map(|c| c.to_hex())
        .collect();
    let second: Vec<_> = Generator::with_seed(7)
        .generate_many(&opts, 100)
        .iter()
        .map(|c| c.to_hex())
        .collect();
    assert_eq!(first, second);
}
