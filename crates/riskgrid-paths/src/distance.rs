use std::f64::consts::SQRT_2;

use riskgrid_core::Pos;

/// Straight-line (L2) distance in grid units.
#[inline]
pub fn euclidean(a: Pos, b: Pos) -> f64 {
    f64::from(a.row - b.row).hypot(f64::from(a.col - b.col))
}

/// Chebyshev (L∞) distance: the number of 8-directional steps between two
/// positions.
#[inline]
pub fn chebyshev(a: Pos, b: Pos) -> i32 {
    (a.row - b.row).abs().max((a.col - b.col).abs())
}

/// Octile distance: the cheapest obstacle-free cost between two positions
/// when orthogonal steps cost 1 and diagonal steps cost √2.
#[inline]
pub fn octile(a: Pos, b: Pos) -> f64 {
    let dr = (a.row - b.row).abs();
    let dc = (a.col - b.col).abs();
    let diag = dr.min(dc);
    SQRT_2 * f64::from(diag) + f64::from(dr.max(dc) - diag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Pos::new(0, 0);
        let b = Pos::new(3, 4);
        assert_eq!(euclidean(a, b), 5.0);
        assert_eq!(chebyshev(a, b), 4);
        assert!((octile(a, b) - (3.0 * SQRT_2 + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn euclidean_never_exceeds_octile() {
        for r in -6..=6 {
            for c in -6..=6 {
                let p = Pos::new(r, c);
                assert!(euclidean(Pos::ZERO, p) <= octile(Pos::ZERO, p) + 1e-12);
            }
        }
    }
}
