use crate::constants::EASE_SPIN;

/// A CSS `cubic-bezier(x1, y1, x2, y2)` timing function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Quick start, long coast to a stop.
    pub const fn spin() -> Self {
        Self::new(EASE_SPIN.0, EASE_SPIN.1, EASE_SPIN.2, EASE_SPIN.3)
    }

    fn sample(a1: f64, a2: f64, t: f64) -> f64 {
        let inv = 1.0 - t;
        3.0 * inv * inv * t * a1 + 3.0 * inv * t * t * a2 + t * t * t
    }

    fn slope(a1: f64, a2: f64, t: f64) -> f64 {
        let inv = 1.0 - t;
        3.0 * inv * inv * a1 + 6.0 * inv * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, t) - x;
            if err.abs() < 1e-7 {
                return t;
            }
            let d = Self::slope(self.x1, self.x2, t);
            if d.abs() < 1e-6 {
                break;
            }
            t -= err / d;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        while hi - lo > 1e-7 {
            if Self::sample(self.x1, self.x2, t) < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    /// Eased progress for linear progress `t`, clamped to `[0, 1]`.
    pub fn ease(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        Self::sample(self.y1, self.y2, self.solve_t(t))
    }
}

/// Interpolates the wheel from one rotation to the next over a fixed window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinAnimation {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
    pub curve: CubicBezier,
}

impl SpinAnimation {
    pub fn new(from: f64, to: f64, duration_ms: u32) -> Self {
        Self {
            from,
            to,
            duration_ms: f64::from(duration_ms),
            curve: CubicBezier::spin(),
        }
    }

    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn rotation_at(&self, elapsed_ms: f64) -> f64 {
        if self.is_finished(elapsed_ms) {
            return self.to;
        }
        self.from + (self.to - self.from) * self.curve.ease(self.progress(elapsed_ms))
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_endpoints() {
        let curve = CubicBezier::spin();
        assert_eq!(curve.ease(0.0), 0.0);
        assert_eq!(curve.ease(1.0), 1.0);
        assert_eq!(curve.ease(-0.5), 0.0);
        assert_eq!(curve.ease(3.0), 1.0);
    }

    #[test]
    fn test_linear_curve_is_identity() {
        let linear = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        for step in 1..10 {
            let t = step as f64 / 10.0;
            assert!((linear.ease(t) - t).abs() < 1e-5);
        }
    }

    #[test]
    fn test_spin_curve_is_monotonic_and_front_loaded() {
        let curve = CubicBezier::spin();
        let mut previous = 0.0;
        for step in 1..=100 {
            let value = curve.ease(step as f64 / 100.0);
            assert!(value >= previous - 1e-9);
            previous = value;
        }
        assert!(curve.ease(0.25) > 0.6);
    }

    #[test]
    fn test_animation_reaches_target() {
        let animation = SpinAnimation::new(0.0, 2025.0, 4000);
        assert_eq!(animation.rotation_at(0.0), 0.0);
        assert_eq!(animation.rotation_at(4000.0), 2025.0);
        assert_eq!(animation.rotation_at(9000.0), 2025.0);
        assert!(animation.is_finished(4000.0));
        assert!(!animation.is_finished(3999.0));

        let halfway = animation.rotation_at(2000.0);
        assert!(halfway > 1012.5 && halfway < 2025.0);
    }
}
