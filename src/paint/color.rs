use std::fmt;
use std::str::FromStr;

use crate::foundation::core::Rgba8;
use crate::foundation::error::SquigglyError;

/// Opaque tint color as written in configuration files and on the command line.
///
/// Accepts `"#RRGGBB"` or an `[r, g, b]` array of bytes. Opacity is configured separately
/// through the `alpha` setting, so a tint carrying its own alpha channel is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "TintRepr", into = "String")]
pub struct TintDef {
    r: u8,
    g: u8,
    b: u8,
}

impl TintDef {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Tint from its three color channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Fully opaque [`Rgba8`] of this tint.
    pub fn to_rgba8(self) -> Rgba8 {
        Rgba8::new(self.r, self.g, self.b, 255)
    }
}

impl Default for TintDef {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for TintDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for TintDef {
    type Err = SquigglyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().strip_prefix('#').ok_or_else(|| {
            SquigglyError::validation(format!("tint \"{s}\" must start with '#'"))
        })?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SquigglyError::validation(format!(
                "tint \"{s}\" has non-hex digits"
            )));
        }
        match digits.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
                match (channel(0), channel(2), channel(4)) {
                    (Ok(r), Ok(g), Ok(b)) => Ok(Self::rgb(r, g, b)),
                    _ => Err(SquigglyError::validation(format!("invalid tint \"{s}\""))),
                }
            }
            8 => Err(alpha_rejected()),
            _ => Err(SquigglyError::validation(format!(
                "tint \"{s}\" must be #RRGGBB"
            ))),
        }
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum TintRepr {
    Hex(String),
    Channels(Vec<u8>),
}

impl TryFrom<TintRepr> for TintDef {
    type Error = SquigglyError;

    fn try_from(repr: TintRepr) -> Result<Self, Self::Error> {
        match repr {
            TintRepr::Hex(s) => s.parse(),
            TintRepr::Channels(v) => match v.as_slice() {
                &[r, g, b] => Ok(Self::rgb(r, g, b)),
                [_, _, _, _] => Err(alpha_rejected()),
                _ => Err(SquigglyError::validation(
                    "tint array must be [r, g, b] bytes",
                )),
            },
        }
    }
}

impl From<TintDef> for String {
    fn from(tint: TintDef) -> Self {
        tint.to_string()
    }
}

fn alpha_rejected() -> SquigglyError {
    SquigglyError::validation("tint has no alpha channel; set `alpha` instead")
}

#[cfg(test)]
#[path = "../../tests/unit/paint/color.rs"]
mod tests;
