//! Configuration and path management

pub mod paths;
pub mod state;

pub use paths::TrackerPaths;
pub use state::VisitFlag;
