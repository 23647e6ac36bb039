/// Per-frame drawing of the wave onto a surface.
pub mod compositor;
/// Raster surface backed by `vello_cpu`.
pub mod cpu;
/// Surface that records draws for inspection.
pub mod recording;
/// The drawing interface hosts implement.
pub mod surface;
