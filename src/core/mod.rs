pub mod backup;
pub mod log;
pub mod progress;
pub mod state;
pub mod summary;
