//! Overlay corner positions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Corner of the reference canvas the overlay clip is anchored to.
///
/// Serialized in camelCase to match the wire format of requests and edit
/// documents (`topLeft`, `topRight`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Position {
    /// All positions, in the order they are listed in validation messages.
    pub const ALL: &'static [Position] = &[
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// Wire-format name of the position.
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::TopLeft => "topLeft",
            Position::TopRight => "topRight",
            Position::BottomLeft => "bottomLeft",
            Position::BottomRight => "bottomRight",
        }
    }

    /// Whether the overlay hugs the left edge of the canvas.
    pub fn is_left(&self) -> bool {
        matches!(self, Position::TopLeft | Position::BottomLeft)
    }

    /// Whether the overlay hugs the top edge of the canvas.
    pub fn is_top(&self) -> bool {
        matches!(self, Position::TopLeft | Position::TopRight)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Position {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "topLeft" => Ok(Position::TopLeft),
            "topRight" => Ok(Position::TopRight),
            "bottomLeft" => Ok(Position::BottomLeft),
            "bottomRight" => Ok(Position::BottomRight),
            _ => Err(PositionParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown position: {0}")]
pub struct PositionParseError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_parse() {
        assert_eq!("topLeft".parse::<Position>().unwrap(), Position::TopLeft);
        assert_eq!(
            "bottomRight".parse::<Position>().unwrap(),
            Position::BottomRight
        );
        // Wire names are exact; no case folding
        assert!("topleft".parse::<Position>().is_err());
        assert!("center".parse::<Position>().is_err());
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::TopRight.to_string(), "topRight");
        assert_eq!(Position::BottomLeft.to_string(), "bottomLeft");
    }

    #[test]
    fn test_position_serde() {
        let json = serde_json::to_string(&Position::BottomRight).unwrap();
        assert_eq!(json, "\"bottomRight\"");

        let parsed: Position = serde_json::from_str("\"topLeft\"").unwrap();
        assert_eq!(parsed, Position::TopLeft);
    }

    #[test]
    fn test_position_edges() {
        assert!(Position::TopLeft.is_left());
        assert!(Position::TopLeft.is_top());
        assert!(!Position::BottomRight.is_left());
        assert!(!Position::BottomRight.is_top());
    }
}
