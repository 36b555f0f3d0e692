/// Accumulates frame time and fires once per drop interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GravityTimer {
    elapsed: f32,
    interval: f32,
}

impl GravityTimer {
    pub fn new(interval: f32) -> Self {
        Self { elapsed: 0.0, interval }
    }

    /// Adds `dt` seconds. Returns true when the piece should fall a row, in
    /// which case the accumulator starts over from zero.
    pub fn advance(&mut self, dt: f32) -> bool {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        if self.elapsed >= self.interval {
            self.elapsed = 0.0;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
