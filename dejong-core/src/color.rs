// dejong-core/src/color.rs

/// Opaque black, the background every sweep starts from.
pub const BLACK: [u8; 4] = [0, 0, 0, 255];

/// Normalized iteration fraction `t = j / n`, in `[0, 1)` for `j < n`.
#[inline]
pub fn iteration_fraction(j: u32, n: u32) -> f64 {
    j as f64 / n as f64
}

/// Map an iteration fraction to an RGBA color.
///
/// Red fades out, green peaks at `t = 0.5`, blue fades in. The color depends
/// on `t` alone, never on the seed point or the coefficients.
pub fn gradient_color(t: f64, alpha: u8) -> [u8; 4] {
    let r = ((1.0 - t) * 255.0).round();
    let g = (2.0 * t * (1.0 - t) * 255.0).round();
    let b = (t * 255.0).round();
    [channel(r), channel(g), channel(b), alpha]
}

#[inline]
fn channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}
