use crate::{Path, Square, SquareKind};

impl Square {
    /// The node reached by walking `path` from this square.
    ///
    /// Walking never fails. A path that continues past a solid square
    /// resolves to that square and the unconsumed directions are dropped,
    /// so the caller cannot tell an exact match from an overshoot.
    pub fn get(&self, path: &Path) -> &Square {
        let mut sq = self;
        for dir in path {
            match sq.kind() {
                SquareKind::Solid(_) => break,
                SquareKind::Split(children) => sq = &children[dir],
            }
        }
        sq
    }
}
