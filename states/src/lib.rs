//! Minimal state container for the portal admin desk.
//!
//! - [`State`]: a value owned by [`StateCtx`] and keyed by its type
//! - [`Command`]: a manual-only side effect, spawned on Tokio
//! - [`Updater`]: the only way a command writes back, applied on [`StateCtx::sync`]

mod basic_state;
mod command;
mod ctx;
mod error;
mod snapshot;
mod state;
mod task;
mod updater;

pub use basic_state::Time;
pub use command::{Command, CommandFuture};
pub use ctx::StateCtx;
pub use error::StateError;
pub use snapshot::CommandSnapshot;
pub use state::State;
pub use task::{TaskHandle, TaskId};
pub use updater::Updater;
