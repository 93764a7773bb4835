//! Subway line entity.

use crate::domain::LineId;
use serde::{Deserialize, Serialize};

/// A persisted subway line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub id: LineId,
    /// Display color, e.g. `bg-green-600`.
    pub color: String,
    /// Line name. Unique across all lines.
    pub name: String,
}

impl Line {
    pub fn new(id: LineId, color: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            color: color.into(),
            name: name.into(),
        }
    }
}

/// A line that has not been saved yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLine {
    pub color: String,
    pub name: String,
}

impl NewLine {
    pub fn new(color: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            name: name.into(),
        }
    }

    /// Attach the identity assigned by the database.
    pub fn with_id(self, id: LineId) -> Line {
        Line {
            id,
            color: self.color,
            name: self.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_id_keeps_fields() {
        let line = NewLine::new("bg-red-600", "신분당선").with_id(LineId::new(1));
        assert_eq!(line, Line::new(LineId::new(1), "bg-red-600", "신분당선"));
    }

    #[test]
    fn test_line_json_shape() {
        let line = Line::new(LineId::new(2), "bg-green-600", "2호선");
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["color"], "bg-green-600");
        assert_eq!(json["name"], "2호선");
    }
}
