use std::fmt::{self, Debug};
use std::rc::Rc;

use crate::{Color, Quad};

/// A design: one solid color, or a four-way split into sub-squares.
///
/// Cloning is cheap shared ownership, and every operation that "changes" a
/// square builds a new value while leaving the old one intact; the two
/// versions share all subtrees not on the edited path.
#[derive(Clone, Eq)]
pub struct Square(Rc<SquareKind>);

/// The two cases of a square, exposed by [`Square::kind`] for matching.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SquareKind {
    Solid(Color),
    Split(Quad<Square>),
}

impl Square {
    /// A leaf filled with the one color.
    pub fn solid(color: Color) -> Self {
        Self(Rc::new(SquareKind::Solid(color)))
    }
    /// An internal node over four already built squares, taking shared
    /// ownership of each. The children need not be alike in any way.
    pub fn split(children: Quad<Square>) -> Self {
        Self(Rc::new(SquareKind::Split(children)))
    }
    pub fn kind(&self) -> &SquareKind {
        &self.0
    }
    /// The fill color, for a solid square.
    pub fn color(&self) -> Option<Color> {
        match self.kind() {
            SquareKind::Solid(color) => Some(*color),
            SquareKind::Split(_) => None,
        }
    }
    /// The four sub-squares, for a split square.
    pub fn children(&self) -> Option<&Quad<Square>> {
        match self.kind() {
            SquareKind::Solid(_) => None,
            SquareKind::Split(children) => Some(children),
        }
    }
    /// Whether two squares are the same shared node, not merely equal.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Color> for Square {
    fn from(color: Color) -> Self {
        Self::solid(color)
    }
}
impl From<Quad<Square>> for Square {
    fn from(children: Quad<Square>) -> Self {
        Self::split(children)
    }
}

impl PartialEq for Square {
    fn eq(&self, other: &Self) -> bool {
        // shared subtrees compare equal without being walked
        self.ptr_eq(other) || self.kind() == other.kind()
    }
}
impl Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind().fmt(f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn equality_is_structural() {
        let a = Square::split(Quad {
            nw: Square::solid(Color::Red),
            ne: Square::solid(Color::Blue),
            sw: Square::solid(Color::Red),
            se: Square::solid(Color::Blue),
        });
        let b = Square::split(Quad {
            nw: Square::solid(Color::Red),
            ne: Square::solid(Color::Blue),
            sw: Square::solid(Color::Red),
            se: Square::solid(Color::Blue),
        });
        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));
        assert_ne!(a, Square::solid(Color::Red));
    }

    #[test]
    fn clones_share() {
        let sq = Square::solid(Color::Green);
        assert!(sq.ptr_eq(&sq.clone()));
    }

    #[test]
    fn accessors_match_the_kind() {
        let leaf = Square::from(Color::Purple);
        assert_eq!(leaf.color(), Some(Color::Purple));
        assert!(leaf.children().is_none());

        let sq = Square::from(Quad {
            nw: leaf.clone(),
            ne: leaf.clone(),
            sw: leaf.clone(),
            se: leaf.clone(),
        });
        assert_eq!(sq.color(), None);
        assert!(sq.children().unwrap().iter().all(|c| c.ptr_eq(&leaf)));
    }
}
