//! Subcommand implementations

pub mod data;
pub mod optimize;
pub mod pool;

pub use optimize::Optimize;
pub use pool::Pool;
