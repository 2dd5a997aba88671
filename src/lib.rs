//! Attractive random colors.
//!
//! Colors are drawn in hue/saturation/brightness space from a small table of
//! named hue families. Each family carries a curve giving the minimum
//! brightness per saturation, so draws avoid the muddy corners that uniform
//! RGB sampling lands in.
//!
//! ```no_run
//! use randomcolor::{ColorFamily, Luminosity, Options};
//!
//! let opts = Options::new()
//!     .family(ColorFamily::Purple)
//!     .luminosity(Luminosity::Bright);
//! let color = randomcolor::generate(&opts);
//! println!("{}", color.to_hex());
//! ```

pub mod color;
pub mod error;
pub mod generator;
pub mod options;
pub mod palette;
pub mod range;
pub mod resolve;

pub use color::{Color, Rgba};
pub use error::ParseError;
pub use generator::{Generator, generate};
pub use options::{Luminosity, Options};
pub use palette::ColorFamily;
pub use range::Range;
pub use resolve::generate_with;
