/// Errors raised when turning user text into palette options.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown color family '{0}' (expected one of monochrome, red, orange, yellow, green, blue, purple, pink)")]
    UnknownFamily(String),

    #[error("unknown luminosity '{0}' (expected bright, dark, light or random)")]
    UnknownLuminosity(String),
}
