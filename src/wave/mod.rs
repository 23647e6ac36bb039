/// Amplitude envelope around the progress point.
pub mod amplitude;
/// Wave parameters and constants.
pub mod params;
/// Cubic sine path builder.
pub mod path;
/// Phase integration over time.
pub mod phase;
