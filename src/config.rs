use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{SquigglyError, SquigglyResult};
use crate::paint::color::TintDef;
use crate::wave::params::WaveParams;

/// JSON-facing description of a progress indicator.
///
/// Every field is optional; missing fields take the defaults of [`ProgressConfig::default`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProgressConfig {
    /// Full wave period in pixels. Must be finite and positive.
    pub wave_length: f64,
    /// Peak wave height in pixels.
    pub line_amplitude: f64,
    /// Horizontal drift in pixels per second; negative drifts left.
    pub phase_speed: f64,
    /// Stroke width in pixels for the wave and the remainder.
    pub stroke_width: f64,
    /// Decay the wave around the progress point and draw the remainder as a dimmed wave.
    pub transition_enabled: bool,
    /// Start with the wave moving.
    pub animate: bool,
    /// Opaque tint; opacity comes from `alpha`.
    pub tint: TintDef,
    /// Wave opacity, `0..=255`.
    pub alpha: u8,
    /// Progress fraction in `[0, 1]`.
    pub level: f64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        let wave = WaveParams::default();
        Self {
            wave_length: wave.wave_length,
            line_amplitude: wave.line_amplitude,
            phase_speed: wave.phase_speed,
            stroke_width: wave.stroke_width,
            transition_enabled: true,
            animate: true,
            tint: TintDef::WHITE,
            alpha: 255,
            level: 0.0,
        }
    }
}

impl ProgressConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SquigglyResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| SquigglyError::serde(format!("parse progress config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a configuration from a JSON file on disk.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> SquigglyResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SquigglyError::validation(format!("open progress config '{}': {e}", path.display()))
        })?;
        let cfg = Self::from_reader(BufReader::new(f))?;
        tracing::debug!(?cfg, "loaded progress config");
        Ok(cfg)
    }

    /// Reject values outside the domains documented on each field.
    pub fn validate(&self) -> SquigglyResult<()> {
        if !(self.wave_length.is_finite() && self.wave_length > 0.0) {
            return Err(SquigglyError::validation(
                "wave_length must be finite and > 0",
            ));
        }
        if !(self.line_amplitude.is_finite() && self.line_amplitude >= 0.0) {
            return Err(SquigglyError::validation(
                "line_amplitude must be finite and >= 0",
            ));
        }
        if !self.phase_speed.is_finite() {
            return Err(SquigglyError::validation("phase_speed must be finite"));
        }
        if !(self.stroke_width.is_finite() && self.stroke_width >= 0.0) {
            return Err(SquigglyError::validation(
                "stroke_width must be finite and >= 0",
            ));
        }
        if !(0.0..=1.0).contains(&self.level) {
            return Err(SquigglyError::validation("level must be in [0, 1]"));
        }
        Ok(())
    }

    /// Wave geometry and motion from this config.
    pub fn wave_params(&self) -> WaveParams {
        WaveParams {
            wave_length: self.wave_length,
            line_amplitude: self.line_amplitude,
            phase_speed: self.phase_speed,
            stroke_width: self.stroke_width,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
