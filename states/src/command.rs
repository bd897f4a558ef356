use std::any::Any;
use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::{CommandSnapshot, Updater};

pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// A manual-only side effect (network IO and the like).
///
/// Commands never run implicitly. The UI (or a controller function) dispatches
/// them explicitly via `StateCtx::dispatch::<C>()`. The command reads what it
/// needs from the snapshot synchronously, then returns a future that reports
/// results through the updater.
///
/// Every code path of the returned future must leave the states it touched in
/// a settled shape; there is no supervisor that cleans up after a command.
pub trait Command: Any {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> CommandFuture;
}
