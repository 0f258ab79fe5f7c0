//! Building grids from ASCII maps.
//!
//! Each line is one row and every line must have the same width. Cells use
//! the [`Role::glyph`] vocabulary:
//!
//! ```text
//! S..#....
//! .~.#.W..
//! ...#...E
//! ```
//!
//! Leading and trailing whitespace of the whole text is trimmed, but not of
//! individual lines. Risky cells start with zero penalty; sample or set one
//! afterwards.

use std::str::FromStr;

use crate::cell::Role;
use crate::geom::Pos;
use crate::grid::Grid;

/// Errors from [`Grid::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("map row {row} is {found} cells wide, expected {expected}")]
    InconsistentWidth {
        row: i32,
        expected: i32,
        found: i32,
    },

    #[error("unknown map glyph {ch:?} at {pos}")]
    UnknownGlyph { ch: char, pos: Pos },

    #[error("second {role:?} cell at {pos}")]
    DuplicateRole { role: Role, pos: Pos },
}

impl Grid {
    /// Parse an ASCII map. See the [module docs](self) for the format.
    pub fn parse(s: &str) -> Result<Grid, MapError> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Grid::new(0, 0));
        }

        let mut rows: Vec<Vec<Role>> = Vec::new();
        let mut width: Option<i32> = None;
        for (r, line) in s.lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let row = r as i32;
            let mut roles = Vec::with_capacity(line.len());
            for (c, ch) in line.chars().enumerate() {
                let role = Role::from_glyph(ch).ok_or(MapError::UnknownGlyph {
                    ch,
                    pos: Pos::new(row, c as i32),
                })?;
                roles.push(role);
            }
            let found = roles.len() as i32;
            match width {
                Some(expected) if expected != found => {
                    return Err(MapError::InconsistentWidth {
                        row,
                        expected,
                        found,
                    });
                }
                _ => width = Some(found),
            }
            rows.push(roles);
        }

        let mut grid = Grid::new(rows.len() as i32, width.unwrap_or(0));
        let mut seen_start = false;
        let mut seen_end = false;
        for (r, roles) in rows.into_iter().enumerate() {
            for (c, role) in roles.into_iter().enumerate() {
                let pos = Pos::new(r as i32, c as i32);
                let seen = match role {
                    Role::Start => Some(&mut seen_start),
                    Role::End => Some(&mut seen_end),
                    _ => None,
                };
                if let Some(seen) = seen {
                    if *seen {
                        return Err(MapError::DuplicateRole { role, pos });
                    }
                    *seen = true;
                }
                grid.set_role(pos, role);
            }
        }
        grid.refresh_neighbors();
        Ok(grid)
    }
}

impl FromStr for Grid {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s)
    }
}
