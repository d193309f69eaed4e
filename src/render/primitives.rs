use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
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

    #[must_use]
    pub fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    /// Parses `#rgb` or `#rrggbb`.
    pub fn from_hex(hex: &str) -> ChartResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return Err(ChartError::InvalidData(format!("invalid hex color `{hex}`")));
        }
        let channel = |text: &str| {
            u8::from_str_radix(text, 16)
                .map_err(|_| ChartError::InvalidData(format!("invalid hex color `{hex}`")))
        };
        match digits.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (slot, index) in channels.iter_mut().zip(0..3) {
                    *slot = channel(&digits[index..=index])? * 17;
                }
                Ok(Self::rgb8(channels[0], channels[1], channels[2]))
            }
            6 => Ok(Self::rgb8(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(ChartError::InvalidData(format!(
                "invalid hex color `{hex}`"
            ))),
        }
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

/// CSS `rgba(...)` form, 8-bit channels.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let to_u8 = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(
            f,
            "rgba({},{},{},{})",
            to_u8(self.red),
            to_u8(self.green),
            to_u8(self.blue),
            self.alpha
        )
    }
}
