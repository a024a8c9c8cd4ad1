use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

/// The closed palette a solid square can be filled with.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    White,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
}

/// A string that names no color in the palette.
#[derive(Clone, PartialEq, Eq, Error, Debug)]
#[error("unknown color {0:?}")]
pub struct InvalidColor(pub String);

impl Color {
    /// Every color, in palette order.
    pub const ALL: [Color; 7] = [
        Color::White,
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Purple,
    ];

    /// The canonical name, as used by the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
        }
    }
}

impl FromStr for Color {
    type Err = InvalidColor;

    /// names are matched case-sensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" => Ok(Self::White),
            "red" => Ok(Self::Red),
            "orange" => Ok(Self::Orange),
            "yellow" => Ok(Self::Yellow),
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            "purple" => Ok(Self::Purple),
            _ => Err(InvalidColor(s.to_owned())),
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
