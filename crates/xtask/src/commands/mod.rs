//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod fight;
mod names;
mod season;
mod tournament;

pub use fight::Fight;
pub use names::Names;
pub use season::Season;
pub use tournament::Tournament;
