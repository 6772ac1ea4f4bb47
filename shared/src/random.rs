use rand::Rng;

/// Source of uniform floats in `[0, 1)` used to pick segments and extra turns.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Draws an index in `[0, len)` from one unit sample.
/// `len` must be non-zero.
pub fn draw_index<S: RandomSource + ?Sized>(source: &mut S, len: usize) -> usize {
    let sample = source.next_unit().clamp(0.0, 1.0);
    // A source returning exactly 1.0 would otherwise step past the end.
    ((sample * len as f64).floor() as usize).min(len - 1)
}
