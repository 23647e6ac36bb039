use crate::foundation::core::Rgba8;

/// Alpha of the remainder line when the wave is fully opaque; scaled by the requested alpha.
pub const DISABLED_ALPHA: u8 = 77;

/// The two paint colors derived from a tint and an alpha.
///
/// Always rebuilt as a whole from its inputs, so the wave and line colors cannot drift apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorState {
    tint: Rgba8,
    alpha: u8,
    active: Rgba8,
    inactive: Rgba8,
}

impl ColorState {
    /// Colors for `tint` at `alpha`; the tint's own alpha is replaced.
    pub fn derive(tint: Rgba8, alpha: u8) -> Self {
        let dimmed = (u32::from(DISABLED_ALPHA) * u32::from(alpha) / 255) as u8;
        Self {
            tint,
            alpha,
            active: tint.with_alpha(alpha),
            inactive: tint.with_alpha(dimmed),
        }
    }

    /// Color of the wave over the progressed region.
    pub fn active(&self) -> Rgba8 {
        self.active
    }

    /// Color of the remainder past the progress point.
    pub fn inactive(&self) -> Rgba8 {
        self.inactive
    }

    /// Tint the colors were derived from.
    pub fn tint(&self) -> Rgba8 {
        self.tint
    }

    /// Alpha of the active color.
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Same alpha, new tint. `None` keeps the current colors.
    pub fn with_tint(self, tint: Option<Rgba8>) -> Self {
        match tint {
            Some(tint) => Self::derive(tint, self.alpha),
            None => self,
        }
    }

    /// Same tint, new alpha.
    pub fn with_alpha(self, alpha: u8) -> Self {
        Self::derive(self.tint, alpha)
    }

    /// Same tint, alpha from a `[0, 1]` opacity. Out-of-range values are clamped; NaN is ignored.
    pub fn with_opacity(self, opacity: f32) -> Self {
        if opacity.is_nan() {
            return self;
        }
        self.with_alpha((opacity.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

impl Default for ColorState {
    fn default() -> Self {
        Self::derive(Rgba8::WHITE, 255)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/tint.rs"]
mod tests;
