use std::f64::consts::TAU;

use crate::foundation::core::{BezPath, Point, Rect, Vec2};
use crate::paint::tint::ColorState;
use crate::render::surface::{DrawSurface, SaveGuard, StrokePaint};

/// Per-frame layout the compositor needs besides the path itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompositeFrame {
    /// Drawable bounds on the host surface.
    pub bounds: Rect,
    /// Progress boundary in pixels from the left edge.
    pub progress_px: f64,
    /// x where the wave path begins (crest), relative to the left edge.
    pub wave_start: f64,
    /// Full wave period, used for the end cap height.
    pub wave_length: f64,
    /// Peak wave height; also sizes the clip.
    pub line_amplitude: f64,
    /// Show/hide envelope in `[0, 1]`.
    pub height_fraction: f64,
    /// Stroke width shared by every draw.
    pub stroke_width: f64,
    /// Draw the remainder as a dimmed wave instead of a flat line.
    pub transition_enabled: bool,
}

impl CompositeFrame {
    /// Vertical cut-off of both clip regions, above and below the center line.
    pub fn clip_extent(&self) -> f64 {
        self.line_amplitude + self.stroke_width
    }

    /// Height of the wave where it enters the bar at x = 0.
    pub fn start_cap_y(&self) -> f64 {
        if self.wave_length.is_nan() || self.wave_length <= 0.0 {
            return 0.0;
        }
        let start_amp = (self.wave_start.abs() / self.wave_length * TAU).cos();
        start_amp * self.line_amplitude * self.height_fraction
    }
}

/// Draw one frame of the indicator onto `surface`.
///
/// The wave is drawn in the active color up to the progress point. Past it, the same path is
/// drawn again in the dimmed color when transitions are on, otherwise a flat dimmed line runs to
/// the end. The surface's save/restore state is left as it was found.
pub fn composite<S: DrawSurface + ?Sized>(
    surface: &mut S,
    frame: &CompositeFrame,
    path: &BezPath,
    colors: &ColorState,
) {
    let width = frame.bounds.width();
    let clip_top = frame.clip_extent();
    let wave_paint = StrokePaint {
        color: colors.active(),
        width: frame.stroke_width,
    };
    let line_paint = StrokePaint {
        color: colors.inactive(),
        width: frame.stroke_width,
    };

    let mut local = SaveGuard::new(surface);
    local.translate(Vec2::new(frame.bounds.x0, frame.bounds.center().y));

    {
        let mut progressed = SaveGuard::new(&mut *local);
        progressed.clip_rect(Rect::new(0.0, -clip_top, frame.progress_px, clip_top));
        progressed.stroke_path(path, &wave_paint);
    }

    if frame.transition_enabled {
        let mut remaining = SaveGuard::new(&mut *local);
        remaining.clip_rect(Rect::new(frame.progress_px, -clip_top, width, clip_top));
        remaining.stroke_path(path, &line_paint);
    } else {
        local.draw_line(
            Point::new(frame.progress_px, 0.0),
            Point::new(width, 0.0),
            &line_paint,
        );
    }

    local.draw_point(Point::new(0.0, frame.start_cap_y()), &wave_paint);
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
