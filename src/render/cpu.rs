use kurbo::{PathEl, Shape};

use crate::foundation::core::{Affine, BezPath, Point, Rect, Rgba8, Rgba8Premul, Vec2};
use crate::foundation::error::{SquigglyError, SquigglyResult};
use crate::render::surface::{DrawSurface, StrokePaint};

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha**; the `premultiplied` flag makes this explicit at API
/// boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8Premul> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some(Rgba8Premul {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        })
    }

    /// Straight-alpha copy of the pixel data, as image encoders expect.
    pub fn to_straight_rgba(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            let c = Rgba8Premul {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            }
            .to_straight();
            out.extend_from_slice(&[c.r, c.g, c.b, c.a]);
        }
        out
    }
}

#[derive(Clone, Copy, Debug)]
struct CpuState {
    transform: Affine,
    clip_layers: usize,
}

/// [`DrawSurface`] rasterizing through `vello_cpu`.
pub struct CpuSurface {
    ctx: vello_cpu::RenderContext,
    width: u16,
    height: u16,
    state: CpuState,
    stack: Vec<CpuState>,
}

impl CpuSurface {
    /// Create a surface of `width` x `height` pixels, optionally cleared to `clear`.
    pub fn new(width: u32, height: u32, clear: Option<Rgba8>) -> SquigglyResult<Self> {
        let w: u16 = width
            .try_into()
            .map_err(|_| SquigglyError::render(format!("surface width exceeds u16: {width}")))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| SquigglyError::render(format!("surface height exceeds u16: {height}")))?;
        if w == 0 || h == 0 {
            return Err(SquigglyError::render("surface width/height must be > 0"));
        }

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        if let Some(c) = clear {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(w),
                f64::from(h),
            ));
        }

        Ok(Self {
            ctx,
            width: w,
            height: h,
            state: CpuState {
                transform: Affine::IDENTITY,
                clip_layers: 0,
            },
            stack: Vec::new(),
        })
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Close any clips left open, rasterize, and read back the pixels.
    pub fn into_frame(mut self) -> FrameRGBA {
        while self.state.clip_layers > 0 {
            self.ctx.pop_layer();
            self.state.clip_layers -= 1;
        }
        for saved in self.stack.drain(..) {
            for _ in 0..saved.clip_layers {
                self.ctx.pop_layer();
            }
        }

        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn apply(&mut self, paint: &StrokePaint) {
        let c = paint.color;
        self.ctx.set_transform(affine_to_cpu(self.state.transform));
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
        self.ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(paint.width.max(0.0))
                .with_caps(vello_cpu::kurbo::Cap::Round),
        );
    }
}

impl DrawSurface for CpuSurface {
    fn save(&mut self) {
        self.stack.push(self.state);
        // Clip layers opened after this point belong to the new level.
        self.state.clip_layers = 0;
    }

    fn restore(&mut self) {
        let Some(saved) = self.stack.pop() else {
            tracing::warn!("restore without matching save");
            return;
        };
        for _ in 0..self.state.clip_layers {
            self.ctx.pop_layer();
        }
        self.state = saved;
    }

    fn translate(&mut self, offset: Vec2) {
        self.state.transform *= Affine::translate(offset);
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.ctx.set_transform(affine_to_cpu(self.state.transform));
        let clip = bezpath_to_cpu(&rect.abs().to_path(0.1));
        self.ctx.push_clip_layer(&clip);
        self.state.clip_layers += 1;
    }

    fn stroke_path(&mut self, path: &BezPath, paint: &StrokePaint) {
        if paint.width <= 0.0 || paint.color.a == 0 {
            return;
        }
        self.apply(paint);
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }

    fn draw_line(&mut self, from: Point, to: Point, paint: &StrokePaint) {
        if paint.width <= 0.0 || paint.color.a == 0 {
            return;
        }
        let mut line = BezPath::new();
        line.move_to(from);
        line.line_to(to);
        self.apply(paint);
        self.ctx.stroke_path(&bezpath_to_cpu(&line));
    }

    fn draw_point(&mut self, at: Point, paint: &StrokePaint) {
        if paint.width <= 0.0 || paint.color.a == 0 {
            return;
        }
        let dot = kurbo::Circle::new(at, paint.width / 2.0).to_path(0.1);
        self.apply(paint);
        self.ctx.fill_path(&bezpath_to_cpu(&dot));
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let pt = |p: Point| vello_cpu::kurbo::Point::new(p.x, p.y);

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
