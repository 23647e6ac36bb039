pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Monotonic host timestamp in milliseconds.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// Signed milliseconds elapsed from `earlier` to `self`.
    ///
    /// Hosts occasionally hand out out-of-order timestamps; the result is negative then.
    pub fn millis_since(self, earlier: Timestamp) -> f64 {
        self.0 as f64 - earlier.0 as f64
    }

    /// Build a timestamp from fractional seconds, flooring to whole milliseconds.
    pub fn from_secs_f64(secs: f64) -> Self {
        Self((secs * 1000.0).floor().max(0.0) as u64)
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Build a color from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color channels with a replaced alpha component.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Convert into premultiplied form for rasterization.
    pub fn premultiplied(self) -> Rgba8Premul {
        Rgba8Premul::from_straight_rgba(self.r, self.g, self.b, self.a)
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red channel premultiplied by alpha.
    pub r: u8,
    /// Green channel premultiplied by alpha.
    pub g: u8,
    /// Blue channel premultiplied by alpha.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Convert straight-alpha RGBA8 into premultiplied RGBA8.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Undo premultiplication, rounding to the nearest straight value.
    pub fn to_straight(self) -> Rgba8 {
        if self.a == 0 {
            return Rgba8::new(0, 0, 0, 0);
        }
        let unpremul = |c: u8| -> u8 {
            let c = u32::from(c);
            let a = u32::from(self.a);
            ((c * 255 + a / 2) / a).min(255) as u8
        };
        Rgba8::new(unpremul(self.r), unpremul(self.g), unpremul(self.b), self.a)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
