use itertools::Itertools;
use serde_json::Value;
use thiserror::Error;

use crate::{InvalidColor, Quad, Square, SquareKind};

impl Square {
    /// The canonical serialized form: a solid square is its color's name,
    /// a split square is the four serialized quadrants in nw, ne, sw, se
    /// order.
    pub fn to_json(&self) -> Value {
        match self.kind() {
            SquareKind::Solid(color) => Value::String(color.name().to_owned()),
            SquareKind::Split(children) => {
                Value::Array(children.iter().map(Square::to_json).collect())
            }
        }
    }

    /// Decodes the form produced by [`Square::to_json`].
    ///
    /// The arity of an array is checked before its elements, so a
    /// wrong-sized split is reported as such even when its elements are
    /// themselves malformed.
    pub fn from_json(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::String(name) => Ok(Square::solid(name.parse()?)),
            Value::Array(parts) => {
                let (nw, ne, sw, se) = parts
                    .iter()
                    .collect_tuple()
                    .ok_or(DecodeError::MalformedSplit(parts.len()))?;
                Ok(Square::split(Quad {
                    nw: Square::from_json(nw)?,
                    ne: Square::from_json(ne)?,
                    sw: Square::from_json(sw)?,
                    se: Square::from_json(se)?,
                }))
            }
            other => Err(DecodeError::NotASquare(other.clone())),
        }
    }

    /// Renders the square as JSON text, for the wire.
    pub fn write_to_string(&self) -> String {
        self.to_json().to_string()
    }

    /// Reads a square back from JSON text.
    pub fn read_from_string(text: &str) -> Result<Self, DecodeError> {
        Square::from_json(&serde_json::from_str(text)?)
    }
}

/// Why a serialized value does not describe a square.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The text is not JSON at all.
    #[error("invalid json: {0}")]
    Syntax(#[from] serde_json::Error),
    #[error(transparent)]
    InvalidColor(#[from] InvalidColor),
    /// A split must have exactly four parts.
    #[error("split has {0} parts instead of 4")]
    MalformedSplit(usize),
    /// Neither a color name nor a split.
    #[error("{0} is not a square")]
    NotASquare(Value),
}
