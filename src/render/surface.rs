use std::ops::{Deref, DerefMut};

use crate::foundation::core::{BezPath, Point, Rect, Rgba8, Vec2};

/// Stroke used for the wave, the remainder line and the end cap. Caps are always round.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokePaint {
    /// Straight-alpha stroke color.
    pub color: Rgba8,
    /// Stroke width in pixels.
    pub width: f64,
}

/// Drawing capabilities the compositor needs from a host canvas.
///
/// Semantics follow a save/restore canvas: [`DrawSurface::save`] snapshots the current
/// translation and clip, [`DrawSurface::restore`] returns to the most recent snapshot.
/// Clips intersect with the current clip and are given in the current (translated)
/// coordinate space.
pub trait DrawSurface {
    /// Push the current translation and clip.
    fn save(&mut self);
    /// Pop back to the most recent [`DrawSurface::save`]. Unmatched calls are ignored.
    fn restore(&mut self);
    /// Shift the origin by `offset`.
    fn translate(&mut self, offset: Vec2);
    /// Intersect the current clip with `rect`.
    fn clip_rect(&mut self, rect: Rect);
    /// Stroke `path` with round caps.
    fn stroke_path(&mut self, path: &BezPath, paint: &StrokePaint);
    /// Stroke a straight segment with round caps.
    fn draw_line(&mut self, from: Point, to: Point, paint: &StrokePaint);
    /// A single round dot of diameter `paint.width` centered at `at`.
    fn draw_point(&mut self, at: Point, paint: &StrokePaint);
}

/// Saves the surface on creation and restores it when dropped.
pub struct SaveGuard<'a, S: DrawSurface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: DrawSurface + ?Sized> SaveGuard<'a, S> {
    /// Save `surface`; it is restored when the guard drops.
    pub fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: DrawSurface + ?Sized> Deref for SaveGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: DrawSurface + ?Sized> DerefMut for SaveGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: DrawSurface + ?Sized> Drop for SaveGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}
