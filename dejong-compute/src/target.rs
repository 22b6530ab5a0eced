use dejong_core::Origin;

/// Anything a sweep can draw into.
///
/// `Surface` is the real implementation; tests substitute counting or
/// recording targets to observe the plot stream.
pub trait PlotTarget {
    /// `(width, height)` in pixels.
    fn size(&self) -> (u32, u32);

    /// Local coordinate convention used by `plot`.
    fn origin(&self) -> Origin;

    /// Fill the whole target with `color`.
    fn clear(&mut self, color: [u8; 4]);

    /// Draw one point at local coordinates `(x, y)`. Out-of-bounds points are dropped.
    fn plot(&mut self, x: f64, y: f64, color: [u8; 4]);
}
