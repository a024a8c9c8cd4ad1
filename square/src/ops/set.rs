use crate::{Path, Quadrant, Square, SquareKind};

impl Square {
    /// A new square equal to this one except that the node at `path` is
    /// `replacement`. `self` is left untouched and stays valid.
    ///
    /// Symmetric to [`Square::get`]: replacing at or below a solid square
    /// replaces the solid square itself. The three siblings at each step of
    /// the walk are shared with `self` rather than copied, so the new
    /// square allocates one node per path segment.
    pub fn set(&self, path: &Path, replacement: Square) -> Square {
        self.set_along(path.as_slice(), replacement)
    }
    fn set_along(&self, path: &[Quadrant], replacement: Square) -> Square {
        match (path.split_first(), self.kind()) {
            (Some((&dir, rest)), SquareKind::Split(children)) => {
                let mut children = children.clone();
                children[dir] = children[dir].set_along(rest, replacement);
                Square::split(children)
            }
            _ => replacement,
        }
    }
}
