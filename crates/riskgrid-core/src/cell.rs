//! The [`Cell`] type and its terrain [`Role`].

use crate::geom::Pos;

/// What a cell is for. Renderers map roles to colors or glyphs; the role
/// itself carries no display information.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    #[default]
    Free,
    Start,
    End,
    Barrier,
    Risky,
    Waypoint,
    PathMarked,
}

impl Role {
    /// All roles, in declaration order.
    pub const ALL: [Role; 7] = [
        Role::Free,
        Role::Start,
        Role::End,
        Role::Barrier,
        Role::Risky,
        Role::Waypoint,
        Role::PathMarked,
    ];

    /// Canonical ASCII glyph for this role.
    pub const fn glyph(self) -> char {
        match self {
            Role::Free => '.',
            Role::Start => 'S',
            Role::End => 'E',
            Role::Barrier => '#',
            Role::Risky => '~',
            Role::Waypoint => 'W',
            Role::PathMarked => '*',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    pub fn from_glyph(ch: char) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.glyph() == ch)
    }

    /// Whether a search may enter a cell with this role.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Role::Barrier)
    }

    /// Roles that mark a required point of a path request; path marking
    /// leaves them untouched.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Role::Start | Role::End | Role::Waypoint)
    }
}

/// A single grid element.
///
/// `risk` is zero unless the cell is [`Role::Risky`], or is a risky cell that
/// has since been painted [`Role::PathMarked`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Pos,
    pub role: Role,
    pub risk: f64,
}

impl Cell {
    /// A free cell with no risk.
    #[inline]
    pub const fn new(pos: Pos) -> Self {
        Self {
            pos,
            role: Role::Free,
            risk: 0.0,
        }
    }

    #[inline]
    pub const fn is_barrier(&self) -> bool {
        matches!(self.role, Role::Barrier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_round_trip() {
        for r in Role::ALL {
            assert_eq!(Role::from_glyph(r.glyph()), Some(r));
        }
        assert_eq!(Role::from_glyph('?'), None);
    }

    #[test]
    fn only_barrier_blocks() {
        for r in Role::ALL {
            assert_eq!(r.is_passable(), r != Role::Barrier);
        }
    }

    #[test]
    fn new_cell_is_free() {
        let c = Cell::new(Pos::new(1, 1));
        assert_eq!(c.role, Role::Free);
        assert_eq!(c.risk, 0.0);
        assert!(!c.is_barrier());
    }
}
