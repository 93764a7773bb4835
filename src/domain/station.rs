//! Station entity.

use crate::domain::StationId;
use serde::{Deserialize, Serialize};

/// A persisted station. Names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
}

impl Station {
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A station that has not been saved yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStation {
    pub name: String,
}

impl NewStation {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Attach the identity assigned by the database.
    pub fn with_id(self, id: StationId) -> Station {
        Station { id, name: self.name }
    }
}
