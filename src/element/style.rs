use std::fmt;
use std::str::FromStr;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{ParseColorError, ParseFontError};

/// Font used for text shapes when nothing else is configured.
pub const DEFAULT_FONT_FAMILY: &str = "Arial";
pub const DEFAULT_FONT_SIZE: u32 = 12;

/// A paint value: either a concrete color or no paint at all (transparent).
///
/// Persisted as `"#rrggbb"`, with the empty string meaning [`Paint::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Paint {
    #[default]
    None,
    Color(Color32),
}

impl Paint {
    pub const BLACK: Paint = Paint::Color(Color32::BLACK);

    /// The color to paint with, or `None` when nothing should be drawn.
    pub fn color(self) -> Option<Color32> {
        match self {
            Paint::None => None,
            Paint::Color(color) => Some(color),
        }
    }

    pub fn is_none(self) -> bool {
        matches!(self, Paint::None)
    }
}

impl From<Color32> for Paint {
    fn from(color: Color32) -> Self {
        Paint::Color(color)
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::None => Ok(()),
            Paint::Color(c) => write!(f, "#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b()),
        }
    }
}

impl FromStr for Paint {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Paint::None);
        }
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex)
                .map(Paint::Color)
                .ok_or_else(|| ParseColorError(s.to_owned()));
        }
        named_color(&s.to_ascii_lowercase())
            .map(Paint::Color)
            .ok_or_else(|| ParseColorError(s.to_owned()))
    }
}

impl TryFrom<String> for Paint {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Paint> for String {
    fn from(paint: Paint) -> Self {
        paint.to_string()
    }
}

fn parse_hex(hex: &str) -> Option<Color32> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        // #rgb expands each digit, so "f80" is "ff8800"
        3 => {
            let mut rgb = [0u8; 3];
            for (i, digit) in hex.chars().enumerate() {
                let v = digit.to_digit(16)? as u8;
                rgb[i] = v * 17;
            }
            Some(Color32::from_rgb(rgb[0], rgb[1], rgb[2]))
        }
        6 => Some(Color32::from_rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

fn named_color(name: &str) -> Option<Color32> {
    let color = match name {
        "black" => Color32::BLACK,
        "white" => Color32::WHITE,
        "red" => Color32::from_rgb(255, 0, 0),
        "green" => Color32::from_rgb(0, 255, 0),
        "blue" => Color32::from_rgb(0, 0, 255),
        "yellow" => Color32::from_rgb(255, 255, 0),
        "cyan" => Color32::from_rgb(0, 255, 255),
        "magenta" => Color32::from_rgb(255, 0, 255),
        "gray" | "grey" => Color32::from_rgb(190, 190, 190),
        "orange" => Color32::from_rgb(255, 165, 0),
        "purple" => Color32::from_rgb(160, 32, 240),
        "brown" => Color32::from_rgb(165, 42, 42),
        "pink" => Color32::from_rgb(255, 192, 203),
        _ => return None,
    };
    Some(color)
}

/// Font descriptor for text shapes, persisted as `"<family> <size>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FontSpec {
    family: String,
    size: u32,
}

impl FontSpec {
    /// Whitespace in the family is collapsed; an empty family becomes the default one.
    pub fn new(family: impl Into<String>, size: u32) -> Self {
        let family = family.into().split_whitespace().collect::<Vec<_>>().join(" ");
        Self {
            family: if family.is_empty() { DEFAULT_FONT_FAMILY.to_owned() } else { family },
            size: size.max(1),
        }
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    /// Point size.
    pub fn size(&self) -> u32 {
        self.size
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE)
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.size)
    }
}

impl FromStr for FontSpec {
    type Err = ParseFontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let Some((last, rest)) = tokens.split_last() else {
            return Err(ParseFontError(s.to_owned()));
        };
        if !last.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(Self::new(tokens.join(" "), DEFAULT_FONT_SIZE));
        }
        // A trailing number is always the size and must be representable as-is
        match last.parse::<u32>() {
            Ok(size) if size > 0 && !rest.is_empty() => Ok(Self::new(rest.join(" "), size)),
            _ => Err(ParseFontError(s.to_owned())),
        }
    }
}

impl TryFrom<String> for FontSpec {
    type Error = ParseFontError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FontSpec> for String {
    fn from(font: FontSpec) -> Self {
        font.to_string()
    }
}
