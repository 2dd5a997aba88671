/// CLI argument parsing and command handling.
use std::io::{self, Write};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use crossterm::style::{Color as TermColor, Stylize};

use randomcolor::{Color, ColorFamily, Generator, Luminosity, Options};

#[derive(Parser)]
#[command(
    name = "randomcolor",
    version,
    about = "randomcolor - Attractive random colors from a named hue palette"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print randomly generated colors, one per line.
    Generate {
        #[arg(short = 'n', long = "count", default_value_t = 1)]
        count: usize,
        /// Exact hue in degrees.
        #[arg(long, value_parser = clap::value_parser!(i32).range(1..360))]
        hue: Option<i32>,
        /// Named family; overrides --hue.
        #[arg(short = 'f', long = "family")]
        family: Option<ColorFamily>,
        #[arg(short = 'l', long = "luminosity", default_value_t = Luminosity::Default)]
        luminosity: Luminosity,
        /// Seed for a reproducible sequence.
        #[arg(short = 's', long = "seed")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = Format::Hex)]
        format: Format,
        /// Prefix each line with a true-color block.
        #[arg(long)]
        swatch: bool,
    },
    /// List the palette families and their ranges.
    Families,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Hex,
    Rgb,
    Rgba,
    Hsb,
}

impl Default for Command {
    fn default() -> Self {
        Command::Generate {
            count: 1,
            hue: None,
            family: None,
            luminosity: Luminosity::Default,
            seed: None,
            format: Format::Hex,
            swatch: false,
        }
    }
}

/// Execute a CLI command, writing to stdout.
pub fn run(command: Command) -> Result<()> {
    let mut out = io::stdout().lock();
    match command {
        Command::Generate {
            count,
            hue,
            family,
            luminosity,
            seed,
            format,
            swatch,
        } => {
            let options = Options {
                hue,
                family,
                luminosity,
            };
            handle_generate(&options, count, seed, format, swatch, &mut out)?
        }
        Command::Families => handle_families(&mut out)?,
    }
    Ok(())
}

fn handle_generate(
    options: &Options,
    count: usize,
    seed: Option<u64>,
    format: Format,
    swatch: bool,
    out: &mut impl Write,
) -> Result<()> {
    let generator = seed.map(Generator::with_seed).unwrap_or_default();
    for color in generator.generate_many(options, count) {
        if swatch {
            write!(out, "{} ", swatch_block(&color))?;
        }
        writeln!(out, "{}", format_color(&color, format))?;
    }
    Ok(())
}

fn handle_families(out: &mut impl Write) -> Result<()> {
    for family in ColorFamily::ALL {
        writeln!(out, "{}", format_family(family))?;
    }
    Ok(())
}

fn format_color(color: &Color, format: Format) -> String {
    let rgba = color.to_rgba();
    match format {
        Format::Hex => rgba.to_hex(),
        Format::Rgb => format!("rgb({}, {}, {})", rgba.r, rgba.g, rgba.b),
        Format::Rgba => format!("rgba({}, {}, {}, {})", rgba.r, rgba.g, rgba.b, rgba.a),
        Format::Hsb => format!(
            "hsb({}, {}, {})",
            color.hue(),
            color.saturation(),
            color.brightness()
        ),
    }
}

fn format_family(family: ColorFamily) -> String {
    format!(
        "{:<10}  hue {:>9}  saturation {:>9}  brightness {:>9}",
        family.name(),
        family.hue_range().to_string(),
        family.saturation_range().to_string(),
        family.brightness_range().to_string(),
    )
}

fn swatch_block(color: &Color) -> String {
    let [r, g, b] = color.to_rgb();
    "    ".on(TermColor::Rgb { r, g, b }).to_string()
}
