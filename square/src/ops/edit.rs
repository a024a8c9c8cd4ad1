use thiserror::Error;

use crate::{Color, Path, Quad, Square};

/// An edit the tree cannot apply.
#[derive(Clone, Copy, PartialEq, Eq, Error, Debug)]
pub enum EditError {
    /// Only a solid square can be merged into its parent.
    #[error("cannot merge a split square")]
    MergeOfSplit,
    /// The root square has no parent to merge into.
    #[error("cannot merge the root square")]
    MergeOfRoot,
}

impl Square {
    /// Replaces the node at `path` with a four-way split of itself.
    ///
    /// All four quadrants share the one selected node rather than copying
    /// it.
    pub fn split_at(&self, path: &Path) -> Square {
        let selected = self.get(path).clone();
        self.set(
            path,
            Square::split(Quad {
                nw: selected.clone(),
                ne: selected.clone(),
                sw: selected.clone(),
                se: selected,
            }),
        )
    }

    /// Collapses the parent of the solid node at `path` into a solid
    /// square of that node's color.
    pub fn merge_at(&self, path: &Path) -> Result<Square, EditError> {
        let color = self.get(path).color().ok_or(EditError::MergeOfSplit)?;
        let parent = path.parent().ok_or(EditError::MergeOfRoot)?;
        Ok(self.set(&parent, Square::solid(color)))
    }

    /// Replaces the node at `path` with a solid square of `color`,
    /// collapsing it if it was split.
    pub fn recolor_at(&self, path: &Path, color: Color) -> Square {
        self.set(path, Square::solid(color))
    }
}
