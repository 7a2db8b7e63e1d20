/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Default minimum Laplacian variance. Tuned for phone-camera resolutions;
/// the statistic is not normalized by image size.
pub const DEFAULT_BLUR_THRESHOLD: f64 = 100.0;

/// Default minimum mean intensity on a 0-255 scale.
pub const DEFAULT_DARKNESS_THRESHOLD: f64 = 50.0;

/// Default minimum fraction of strong-edge pixels.
pub const DEFAULT_FOCUS_THRESHOLD: f64 = 0.3;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Full-scale value of the grayscale buffer.
pub const INTENSITY_MAX: f32 = 255.0;

/// Divisor mapping 16-bit samples onto the 0-255 scale (65535 / 255).
pub const U16_TO_U8_SCALE: f32 = 257.0;
