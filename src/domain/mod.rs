//! Domain types for the subway backend.
//!
//! - Identity newtypes: LineId, StationId
//! - Persisted entities and their unsaved counterparts

pub mod line;
pub mod primitives;
pub mod station;

pub use line::{Line, NewLine};
pub use primitives::{LineId, StationId};
pub use station::{NewStation, Station};
