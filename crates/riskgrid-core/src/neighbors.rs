use crate::geom::Pos;

/// The eight step directions as `(dr, dc)`: orthogonal moves first, then
/// diagonals. Neighbor lists are always produced in this order.
pub const DIRECTIONS: [Pos; 8] = [
    Pos::new(0, 1),
    Pos::new(0, -1),
    Pos::new(1, 0),
    Pos::new(-1, 0),
    Pos::new(1, 1),
    Pos::new(-1, -1),
    Pos::new(1, -1),
    Pos::new(-1, 1),
];

/// Reusable neighbor enumeration buffer.
///
/// Enumerates the 8-directional neighbors of a grid position, filtered by a
/// predicate, without allocating after the first call.
pub struct Neighbors {
    buf: Vec<Pos>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(DIRECTIONS.len()),
        }
    }

    /// Return the 4 orthogonal neighbors of `p` for which `keep` returns
    /// `true`.
    pub fn orthogonal(&mut self, p: Pos, keep: impl Fn(Pos) -> bool) -> &[Pos] {
        self.collect(p, &DIRECTIONS[..4], keep)
    }

    /// Return the 8-directional neighbors of `p` for which `keep` returns
    /// `true`, in [`DIRECTIONS`] order.
    pub fn all(&mut self, p: Pos, keep: impl Fn(Pos) -> bool) -> &[Pos] {
        self.collect(p, &DIRECTIONS, keep)
    }

    fn collect(&mut self, p: Pos, dirs: &[Pos], keep: impl Fn(Pos) -> bool) -> &[Pos] {
        self.buf.clear();
        for &d in dirs {
            let n = p + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_keeps_direction_order() {
        let mut nb = Neighbors::new();
        let got = nb.all(Pos::new(5, 5), |_| true).to_vec();
        let want: Vec<Pos> = DIRECTIONS.iter().map(|&d| Pos::new(5, 5) + d).collect();
        assert_eq!(got, want);
    }

    #[test]
    fn filter_applies() {
        let mut nb = Neighbors::new();
        let got = nb.all(Pos::ZERO, |p| p.row >= 0 && p.col >= 0);
        assert_eq!(got, &[Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)]);
    }

    #[test]
    fn orthogonal_has_no_diagonals() {
        let mut nb = Neighbors::new();
        let got = nb.orthogonal(Pos::new(2, 2), |_| true);
        assert_eq!(got.len(), 4);
        assert!(got.iter().all(|&n| !n.is_diagonal_to(Pos::new(2, 2))));
    }
}
