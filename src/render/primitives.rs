use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serialized as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Opaque color from 8-bit channels.
    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    /// Parses `#rrggbb` or `#rrggbbaa` (case-insensitive).
    pub fn from_hex(text: &str) -> ChartResult<Self> {
        let invalid = || ChartError::Configuration(format!("invalid color `{text}`"));
        let digits = text.strip_prefix('#').ok_or_else(invalid)?;
        if !matches!(digits.len(), 6 | 8) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |index: usize| -> ChartResult<f64> {
            let pair = digits.get(index * 2..index * 2 + 2).ok_or_else(invalid)?;
            let value = u8::from_str_radix(pair, 16).map_err(|_| invalid())?;
            Ok(f64::from(value) / 255.0)
        };
        let alpha = if digits.len() == 8 { channel(3)? } else { 1.0 };
        Ok(Self::rgba(channel(0)?, channel(1)?, channel(2)?, alpha))
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn channel_byte(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}",
            channel_byte(self.red),
            channel_byte(self.green),
            channel_byte(self.blue)
        )?;
        if self.alpha < 1.0 {
            write!(f, "{:02x}", channel_byte(self.alpha))?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_prints_hex() {
        let color = Color::from_hex("#0F0000").expect("color");
        assert!((color.red - 15.0 / 255.0).abs() <= 1e-12);
        assert_eq!(color.alpha, 1.0);
        assert_eq!(color.to_string(), "#0f0000");
    }

    #[test]
    fn rejects_malformed_hex() {
        for text in ["0f0000", "#0f00", "#zzzzzz", "#0f0000f"] {
            assert!(Color::from_hex(text).is_err(), "{text}");
        }
    }

    #[test]
    fn translucent_colors_keep_alpha() {
        let color = Color::from_hex("#ff000080").expect("color");
        assert_eq!(color.to_string(), "#ff000080");
    }
}
