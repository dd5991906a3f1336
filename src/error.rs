use thiserror::Error;

/// A color string that is neither empty, a `#rgb`/`#rrggbb` hex value, nor a known color name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized color `{0}`")]
pub struct ParseColorError(pub String);

/// A font descriptor without a family name, or with a size that is zero or out of range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid font descriptor `{0}`")]
pub struct ParseFontError(pub String);
