use crate::foundation::core::{BezPath, Point, Rect, Vec2};
use crate::render::surface::{DrawSurface, StrokePaint};

/// A drawing command captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// [`DrawSurface::stroke_path`].
    StrokePath {
        /// Path in the surface's local coordinates.
        path: BezPath,
        /// Stroke color and width.
        paint: StrokePaint,
    },
    /// [`DrawSurface::draw_line`].
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke color and width.
        paint: StrokePaint,
    },
    /// [`DrawSurface::draw_point`].
    Point {
        /// Dot center.
        at: Point,
        /// Dot color; the width is the diameter.
        paint: StrokePaint,
    },
}

/// A recorded draw together with the surface state it was issued under.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedDraw {
    /// The captured command.
    pub op: DrawOp,
    /// Accumulated translation at the time of the draw.
    pub offset: Vec2,
    /// Effective clip in surface coordinates, `None` when unclipped.
    pub clip: Option<Rect>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct RecState {
    offset: Vec2,
    clip: Option<Rect>,
}

/// Surface that records draws instead of rasterizing them.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    draws: Vec<RecordedDraw>,
    state: RecState,
    stack: Vec<RecState>,
    saves: usize,
    unmatched_restores: usize,
}

impl RecordingSurface {
    /// Empty recording with no saved state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws recorded so far, in issue order.
    pub fn draws(&self) -> &[RecordedDraw] {
        &self.draws
    }

    /// Hand out the recorded draws and start a fresh list; save state is kept.
    pub fn take_draws(&mut self) -> Vec<RecordedDraw> {
        std::mem::take(&mut self.draws)
    }

    /// Number of `save` calls not yet matched by a `restore`.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Total `save` calls since creation.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// `true` when every save was restored and no restore ran on an empty stack.
    pub fn is_balanced(&self) -> bool {
        self.stack.is_empty() && self.unmatched_restores == 0
    }

    /// Current accumulated translation.
    pub fn offset(&self) -> Vec2 {
        self.state.offset
    }

    /// Current effective clip.
    pub fn clip(&self) -> Option<Rect> {
        self.state.clip
    }

    fn record(&mut self, op: DrawOp) {
        self.draws.push(RecordedDraw {
            op,
            offset: self.state.offset,
            clip: self.state.clip,
        });
    }
}

impl DrawSurface for RecordingSurface {
    fn save(&mut self) {
        self.saves += 1;
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => self.unmatched_restores += 1,
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.state.offset += offset;
    }

    fn clip_rect(&mut self, rect: Rect) {
        let world = rect.abs() + self.state.offset;
        self.state.clip = Some(match self.state.clip {
            Some(clip) => clip.intersect(world),
            None => world,
        });
    }

    fn stroke_path(&mut self, path: &BezPath, paint: &StrokePaint) {
        self.record(DrawOp::StrokePath {
            path: path.clone(),
            paint: *paint,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, paint: &StrokePaint) {
        self.record(DrawOp::Line {
            from,
            to,
            paint: *paint,
        });
    }

    fn draw_point(&mut self, at: Point, paint: &StrokePaint) {
        self.record(DrawOp::Point { at, paint: *paint });
    }
}
