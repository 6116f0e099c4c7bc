use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use std::ops::Neg;

/// A player, and the stone that player places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum Stone {
    Red = 1,
    Blue = -1,
}

impl Stone {
    pub fn from_int(v: i8) -> Option<Self> {
        match v.signum() {
            1 => Some(Stone::Red),
            -1 => Some(Stone::Blue),
            _ => None,
        }
    }

    pub fn to_int(self) -> i8 {
        self as i8
    }

    pub fn opp(self) -> Self {
        match self {
            Stone::Red => Stone::Blue,
            Stone::Blue => Stone::Red,
        }
    }

    /// Single-letter code used on the wire.
    pub fn letter(self) -> &'static str {
        match self {
            Stone::Red => "R",
            Stone::Blue => "B",
        }
    }
}

impl Neg for Stone {
    type Output = Self;

    fn neg(self) -> Self {
        self.opp()
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Red => write!(f, "Red"),
            Stone::Blue => write!(f, "Blue"),
        }
    }
}
