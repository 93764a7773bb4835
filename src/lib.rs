pub mod config;
pub mod db;
pub mod domain;
pub mod error;

pub use config::Config;
pub use db::{init_db, LineRepository, StationRepository};
pub use domain::{Line, LineId, NewLine, NewStation, Station, StationId};
pub use error::{RepoError, RepoResult};
