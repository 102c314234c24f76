use log::debug;
use ndarray::Array2;
use num::complex::Complex;

/// Escape-time evaluator for the recurrence `z = z*z + c`.
///
/// The recurrence is seeded with `z = c` (one offset application before the
/// loop) rather than the textbook `z = 0`. This shifts the escape boundary
/// slightly and is kept on purpose: it is what the rendered image is
/// calibrated against.
#[derive(Clone, Debug)]
pub struct EscapeSolver {
    max_iter: u32,
    threshold: f64,
}

impl EscapeSolver {
    pub fn new(max_iter: u32) -> Self {
        Self {
            max_iter,
            threshold: 4.0,
        }
    }

    pub fn max_iter(&self) -> u32 {
        self.max_iter
    }

    /// Normalized escape value for a single point.
    ///
    /// Points that escape within `max_iter` iterations map to
    /// `i / max_iter` in `[0, 1)`, where `i` is the iteration at which
    /// `|z|` first exceeded the threshold. Points that never escape map to
    /// `|z| / threshold`, which is in `[0, 1]` since every in-loop check
    /// passed. Pure and total: no side effects, always terminates.
    pub fn evaluate(&self, c: Complex<f64>) -> f64 {
        let mut z = c;
        let mut escaped_at = None;
        for i in 0..self.max_iter {
            z = z * z + c;
            if z.norm() > self.threshold {
                escaped_at = Some(i);
                break;
            }
        }
        match escaped_at {
            Some(i) => i as f64 / self.max_iter as f64,
            None => z.norm() / self.threshold,
        }
    }

    /// Evaluates every coordinate in the grid.
    pub fn solve(&self, coords: &Array2<Complex<f64>>) -> Array2<f64> {
        debug!(
            "solving {}x{} grid, max {} iterations",
            coords.ncols(),
            coords.nrows(),
            self.max_iter
        );
        coords.map(|&c| self.evaluate(c))
    }
}

impl Default for EscapeSolver {
    fn default() -> Self {
        Self::new(20)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_origin_never_escapes() {
        // z stays at the origin, so the interior value |z|/4 is exactly 0.
        let solver = EscapeSolver::new(20);
        assert_eq!(solver.evaluate(Complex::new(0.0, 0.0)), 0.0);
    }

    #[test]
    fn test_fast_escape_is_below_one() {
        let solver = EscapeSolver::new(20);
        for c in [
            Complex::new(1.5, 0.0),
            Complex::new(3.0, 0.0),
            Complex::new(0.0, 2.5),
            Complex::new(-2.5, 2.5),
        ] {
            let v = solver.evaluate(c);
            assert!(v < 1.0, "{c} gave {v}");
            assert!(v >= 0.0);
        }
    }

    #[test]
    fn test_immediate_escape_is_zero() {
        // |z| exceeds the threshold on the very first update.
        let solver = EscapeSolver::new(20);
        assert_eq!(solver.evaluate(Complex::new(10.0, 10.0)), 0.0);
    }

    #[test]
    fn test_interior_value_is_bounded() {
        let solver = EscapeSolver::new(20);
        // c = -1 cycles between -1 and 0; it never escapes.
        let v = solver.evaluate(Complex::new(-1.0, 0.0));
        assert!((0.0..=1.0).contains(&v));
    }

    #[test]
    fn test_slow_escape_counts_iterations() {
        // c = 0.26 sits just outside the main cardioid and escapes late.
        let solver = EscapeSolver::new(100);
        let v = solver.evaluate(Complex::new(0.26, 0.0));
        assert!(v > 0.1, "expected a slow escape, got {v}");
        assert!(v < 1.0);
    }

    #[test]
    fn test_solve_matches_evaluate() {
        let solver = EscapeSolver::new(20);
        let coords = Array2::from_shape_fn((3, 3), |(y, x)| {
            Complex::new(x as f64 - 2.0, y as f64 - 1.0)
        });
        let values = solver.solve(&coords);
        for (idx, &c) in coords.indexed_iter() {
            assert_eq!(values[idx], solver.evaluate(c));
        }
    }
}
