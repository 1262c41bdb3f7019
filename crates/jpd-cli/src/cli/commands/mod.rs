//! CLI command handlers. Each command is in its own file.

mod fetch;
mod grab;
mod serve;

pub use fetch::run_fetch;
pub use grab::run_grab;
pub use serve::run_serve;
