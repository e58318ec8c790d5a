//! Cubic Bezier segments evaluated as functions of time.
//!
//! A [`CubicBezier`] spans a window on the time axis (`x`, in milliseconds)
//! and carries the animated value on `y`. Evaluation inverts the time
//! equation in closed form to recover the curve parameter for a given
//! moment, then samples the value axis at that parameter. There is no
//! iterative refinement anywhere on this path.

use glide_core::Vec2;

/// One cubic Bezier segment with time on `x` and the animated value on `y`.
///
/// Anchors are absolute points; the control handles are stored as offsets
/// RELATIVE to their anchor. The monomial coefficients of the time-axis
/// projection are computed once at construction and never change, so
/// [`value_at`](Self::value_at) needs no mutable state.
///
/// Callers must keep segments monotonic in time: anchors ordered
/// (`start.x <= end.x`) and both control handles inside the segment's time
/// span. [`is_time_monotonic`](Self::is_time_monotonic) checks exactly
/// that contract. Curves that break it still evaluate deterministically,
/// but the recovered parameter may belong to a different fold of the
/// curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    start: Vec2,
    start_ctrl: Vec2,
    end_ctrl: Vec2,
    end: Vec2,
    // Time-axis monomials, cached at construction: a3·t³ + a2·t² + a1·t + a0.
    a3: f64,
    a2: f64,
    a1: f64,
    a0: f64,
}

impl CubicBezier {
    /// Builds a segment from its anchors and relative control offsets.
    pub fn new(start: Vec2, start_ctrl: Vec2, end_ctrl: Vec2, end: Vec2) -> Self {
        let a = start.x as f64;
        let b = (start.x + start_ctrl.x) as f64;
        let c = (end.x + end_ctrl.x) as f64;
        let d = end.x as f64;
        Self {
            start,
            start_ctrl,
            end_ctrl,
            end,
            a3: -a + 3.0 * b - 3.0 * c + d,
            a2: 3.0 * a - 6.0 * b + 3.0 * c,
            a1: -3.0 * a + 3.0 * b,
            a0: a,
        }
    }

    /// Straight segment between two anchors (both control offsets zero).
    pub fn linear(start: Vec2, end: Vec2) -> Self {
        Self::new(start, Vec2::ZERO, Vec2::ZERO, end)
    }

    /// Segment whose handles only displace along the time axis.
    ///
    /// `start_dx` pushes the start handle forward in time, `end_dx` is
    /// added to the end anchor's time (pass a negative value to pull the
    /// handle back into the segment). Shapes acceleration without bending
    /// the value axis.
    pub fn with_time_offsets(start: Vec2, start_dx: f32, end_dx: f32, end: Vec2) -> Self {
        Self::new(start, Vec2::new(start_dx, 0.0), Vec2::new(end_dx, 0.0), end)
    }

    /// First anchor (`x` = start time, `y` = start value).
    pub fn start(&self) -> Vec2 {
        self.start
    }

    /// Last anchor (`x` = end time, `y` = end value).
    pub fn end(&self) -> Vec2 {
        self.end
    }

    /// Control offset attached to the start anchor.
    pub fn start_ctrl(&self) -> Vec2 {
        self.start_ctrl
    }

    /// Control offset attached to the end anchor.
    pub fn end_ctrl(&self) -> Vec2 {
        self.end_ctrl
    }

    /// Absolute position of the start control handle.
    pub fn start_handle(&self) -> Vec2 {
        Vec2::new(
            self.start.x + self.start_ctrl.x,
            self.start.y + self.start_ctrl.y,
        )
    }

    /// Absolute position of the end control handle.
    pub fn end_handle(&self) -> Vec2 {
        Vec2::new(self.end.x + self.end_ctrl.x, self.end.y + self.end_ctrl.y)
    }

    /// Length of the segment's time span in milliseconds.
    pub fn duration(&self) -> f32 {
        self.end.x - self.start.x
    }

    /// Checks the caller contract for time inversion: anchors ordered in
    /// time and both control handles inside the segment's time span. Those
    /// bounds keep the time projection non-decreasing over the segment.
    pub fn is_time_monotonic(&self) -> bool {
        let h0 = self.start.x + self.start_ctrl.x;
        let h1 = self.end.x + self.end_ctrl.x;
        self.start.x <= self.end.x
            && self.start.x <= h0
            && h0 <= self.end.x
            && self.start.x <= h1
            && h1 <= self.end.x
    }

    /// Value of the curve at time `x`.
    ///
    /// Solves the cached time equation for the curve parameter in closed
    /// form, then evaluates the value axis at that parameter. Computes in
    /// f64 internally to keep per-frame deltas stable; the stored geometry
    /// stays f32.
    ///
    /// `x` outside the segment's time span is allowed and evaluates the
    /// same polynomial. Sequenced playback leans on this when a tick
    /// overshoots the final segment.
    pub fn value_at(&self, x: f64) -> f64 {
        let t = solve_cubic(self.a3, self.a2, self.a1, self.a0 - x);
        self.y_at(t)
    }

    /// Bernstein form of the value axis at parameter `t`, with the handles
    /// made absolute.
    #[inline]
    fn y_at(&self, t: f64) -> f64 {
        let u = 1.0 - t;
        let p0 = self.start.y as f64;
        let h0 = (self.start.y + self.start_ctrl.y) as f64;
        let h1 = (self.end.y + self.end_ctrl.y) as f64;
        let p1 = self.end.y as f64;
        u * u * u * p0 + 3.0 * u * u * t * h0 + 3.0 * u * t * t * h1 + t * t * t * p1
    }
}

/// Solves `a3·t³ + a2·t² + a1·t + a0 = 0` for the playback parameter.
///
/// Closed-form resolvent: a degenerate-linear shortcut, a triple-root
/// shortcut, the trigonometric form when all three roots are real, and
/// Cardano otherwise. For the monotonic-in-time segments this crate works
/// with, the selected root is the one inside the playback window.
fn solve_cubic(a3: f64, a2: f64, a1: f64, a0: f64) -> f64 {
    if a3 == 0.0 && a2 == 0.0 {
        // Handles sit at exact thirds of the span: the time equation
        // collapses to a line.
        return -a0 / a1;
    }

    // Depressed-cubic helpers.
    let f = ((3.0 * a1 / a3) - (a2 * a2 / (a3 * a3))) / 3.0;
    let g = ((2.0 * a2 * a2 * a2 / (a3 * a3 * a3)) - (9.0 * a2 * a1 / (a3 * a3))
        + (27.0 * a0 / a3))
        / 27.0;
    let h = g * g / 4.0 + f * f * f / 27.0;

    if f == 0.0 && g == 0.0 && h == 0.0 {
        // Triple root.
        return -nth_root(a0 / a3, 3.0);
    }

    if h <= 0.0 {
        // Three real roots: trigonometric form.
        let i = (g * g / 4.0 - h).sqrt();
        let j = nth_root(i, 3.0);
        let k = (-(g / (2.0 * i))).acos();
        return -j * ((k / 3.0).cos() - 3.0_f64.sqrt() * (k / 3.0).sin()) - a2 / (3.0 * a3);
    }

    // One real root: Cardano.
    if a0 == 0.0 {
        // Constant term zero: t = 0 solves exactly.
        return 0.0;
    }
    let r = -g / 2.0 + h.sqrt();
    let s = nth_root(r, 3.0);
    let u = -g / 2.0 - h.sqrt();
    let v = nth_root(u, 3.0);
    if r >= 0.0 {
        s + v - a2 / (3.0 * a3)
    } else {
        -s + v - a2 / (3.0 * a3)
    }
}

/// `x^(1/n)` with the sign carried through odd roots of negative numbers.
#[inline]
fn nth_root(x: f64, n: f64) -> f64 {
    if x < 0.0 {
        -(-x).powf(1.0 / n)
    } else {
        x.powf(1.0 / n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_segment_returns_constant() {
        let flat = CubicBezier::linear(Vec2::new(0.0, 5.0), Vec2::new(100.0, 5.0));
        for x in [0.0, 12.5, 50.0, 99.0, 100.0] {
            assert!((flat.value_at(x) - 5.0).abs() < 1e-9, "x = {x}");
        }

        let eased = CubicBezier::with_time_offsets(
            Vec2::new(0.0, 2.5),
            30.0,
            -30.0,
            Vec2::new(100.0, 2.5),
        );
        for x in [0.0, 25.0, 50.0, 75.0, 100.0] {
            assert!((eased.value_at(x) - 2.5).abs() < 1e-9, "x = {x}");
        }
    }

    #[test]
    fn endpoints_are_exact() {
        let eased = CubicBezier::with_time_offsets(
            Vec2::new(0.0, 0.0),
            300.0,
            -300.0,
            Vec2::new(1000.0, 1.0),
        );
        assert!(eased.value_at(0.0).abs() < 1e-6);
        assert!((eased.value_at(1000.0) - 1.0).abs() < 1e-6);

        let plain = CubicBezier::linear(Vec2::new(0.0, 0.0), Vec2::new(1000.0, 1.0));
        assert!(plain.value_at(0.0).abs() < 1e-6);
        assert!((plain.value_at(1000.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn zero_offset_segment_midpoint() {
        // Symmetric segment: the midpoint of the span maps to t = 0.5 and
        // the halfway value.
        let curve = CubicBezier::linear(Vec2::new(0.0, 0.0), Vec2::new(1000.0, 1.0));
        assert!((curve.value_at(500.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn thirds_handles_collapse_to_linear() {
        // Handles at exact thirds of both axes make the whole curve an
        // identity ramp, taking the degenerate-linear path.
        let curve = CubicBezier::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 1.0),
            Vec2::new(-100.0, -1.0),
            Vec2::new(300.0, 3.0),
        );
        assert!(curve.value_at(0.0).abs() < 1e-9);
        assert!((curve.value_at(150.0) - 1.5).abs() < 1e-9);
        assert!((curve.value_at(300.0) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn solve_degenerate_linear() {
        assert!((solve_cubic(0.0, 0.0, 300.0, -150.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn solve_triple_root() {
        // (t - 1)³ = t³ - 3t² + 3t - 1.
        assert!((solve_cubic(1.0, -3.0, 3.0, -1.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn solve_single_real_root() {
        // t³ - t - 6 has the lone real root t = 2.
        assert!((solve_cubic(1.0, 0.0, -1.0, -6.0) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn solve_three_real_roots() {
        // t³ - 6t² + 11t - 6 = (t-1)(t-2)(t-3); the trigonometric form
        // lands on the middle root.
        assert!((solve_cubic(1.0, -6.0, 11.0, -6.0) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn solve_zero_constant_term() {
        // t³ + t² + t has one real root and a zero constant term, so the
        // exact shortcut returns t = 0.
        assert_eq!(solve_cubic(1.0, 1.0, 1.0, 0.0), 0.0);
    }

    #[test]
    fn monotonic_contract() {
        let ok = CubicBezier::with_time_offsets(
            Vec2::new(0.0, 0.0),
            100.0,
            -100.0,
            Vec2::new(300.0, 1.0),
        );
        assert!(ok.is_time_monotonic());

        // Start handle overshoots the end of the span.
        let overshoot = CubicBezier::with_time_offsets(
            Vec2::new(0.0, 0.0),
            400.0,
            -100.0,
            Vec2::new(300.0, 1.0),
        );
        assert!(!overshoot.is_time_monotonic());

        // End handle pushed past the end anchor.
        let outward = CubicBezier::with_time_offsets(
            Vec2::new(0.0, 0.0),
            100.0,
            50.0,
            Vec2::new(300.0, 1.0),
        );
        assert!(!outward.is_time_monotonic());

        // Anchors reversed in time.
        let reversed = CubicBezier::linear(Vec2::new(300.0, 0.0), Vec2::new(0.0, 1.0));
        assert!(!reversed.is_time_monotonic());
    }

    #[test]
    fn accessors_round_trip() {
        let curve = CubicBezier::new(
            Vec2::new(10.0, 1.0),
            Vec2::new(5.0, 2.0),
            Vec2::new(-5.0, -2.0),
            Vec2::new(30.0, 4.0),
        );
        assert_eq!(curve.start(), Vec2::new(10.0, 1.0));
        assert_eq!(curve.end(), Vec2::new(30.0, 4.0));
        assert_eq!(curve.start_ctrl(), Vec2::new(5.0, 2.0));
        assert_eq!(curve.end_ctrl(), Vec2::new(-5.0, -2.0));
        assert_eq!(curve.start_handle(), Vec2::new(15.0, 3.0));
        assert_eq!(curve.end_handle(), Vec2::new(25.0, 2.0));
        assert_eq!(curve.duration(), 20.0);
    }
}
