pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod output;
pub mod registry;
pub mod rules;
pub mod source;

pub use engine::{run, AttendanceBook, IngestStats, Standings};
pub use error::AttendanceError;
pub use registry::{User, UserId, UserRegistry};
