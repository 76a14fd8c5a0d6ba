//! Stroke color parsing and formatting.
//!
//! Accepts hexadecimal colors (`#336699`, `#FF0`, with or without `#`),
//! `rgb(r, g, b)` and bare `r, g, b` triplets.

use regex::Regex;
use std::fmt;
use std::str::FromStr;

use super::error::WaveError;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses any of the supported color notations.
    ///
    /// # Errors
    /// - If the string matches no supported notation
    /// - If a decimal channel is above 255
    pub fn parse(input: &str) -> Result<Self, WaveError> {
        let trimmed = input.trim();
        let invalid = || WaveError::InvalidColor(input.to_string());

        let short = Regex::new(r"(?i)^#?([a-f\d])([a-f\d])([a-f\d])$")?;
        if let Some(caps) = short.captures(trimmed) {
            let channel = |i: usize| u8::from_str_radix(&caps[i].repeat(2), 16);
            return Ok(Rgb::new(
                channel(1).map_err(|_| invalid())?,
                channel(2).map_err(|_| invalid())?,
                channel(3).map_err(|_| invalid())?,
            ));
        }

        let long = Regex::new(r"(?i)^#?([a-f\d]{2})([a-f\d]{2})([a-f\d]{2})$")?;
        if let Some(caps) = long.captures(trimmed) {
            let channel = |i: usize| u8::from_str_radix(&caps[i], 16);
            return Ok(Rgb::new(
                channel(1).map_err(|_| invalid())?,
                channel(2).map_err(|_| invalid())?,
                channel(3).map_err(|_| invalid())?,
            ));
        }

        let inner = match trimmed.strip_prefix("rgb(") {
            Some(rest) => rest.strip_suffix(')').ok_or_else(invalid)?,
            None => trimmed,
        };
        let triplet = Regex::new(r"^\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*$")?;
        if let Some(caps) = triplet.captures(inner) {
            let channel = |i: usize| caps[i].parse::<u8>();
            return Ok(Rgb::new(
                channel(1).map_err(|_| invalid())?,
                channel(2).map_err(|_| invalid())?,
                channel(3).map_err(|_| invalid())?,
            ));
        }

        Err(invalid())
    }

    /// Formats the color as a CSS `rgba(...)` stroke style.
    pub fn rgba(&self, opacity: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, opacity)
    }

    /// Pre-multiplies the color over a black backdrop.
    pub fn over_black(&self, opacity: f64) -> Rgb {
        let alpha = opacity.clamp(0.0, 1.0);
        let scale = |c: u8| (c as f64 * alpha).round() as u8;
        Rgb::new(scale(self.r), scale(self.g), scale(self.b))
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::WHITE
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = WaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::parse(s)
    }
}
