use std::any::{TypeId, type_name};
use std::collections::BTreeMap;

use flume::{Receiver, Sender};
use log::{debug, error, warn};
use tokio_util::sync::CancellationToken;

use crate::task::{TaskHandle, TaskId};
use crate::updater::{self, Mutation};
use crate::{Command, CommandSnapshot, State, StateError, Updater};

/// Owner of every registered state and command.
///
/// Lives on the UI thread. The frame loop is:
/// 1. `sync()` to apply mutations queued by finished commands,
/// 2. render, reading states and editing them in place,
/// 3. `dispatch::<C>()` for any side effect the frame asked for.
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    commands: BTreeMap<TypeId, Box<dyn Command>>,
    send: Sender<Mutation>,
    recv: Receiver<Mutation>,
    tasks: Vec<TaskHandle>,
    generation: u64,
    cancel: CancellationToken,
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("commands", &self.commands.len())
            .field("tasks", &self.tasks.len())
            .field("pending_updates", &self.recv.len())
            .finish()
    }
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for StateCtx {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = updater::channel();
        Self {
            states: BTreeMap::new(),
            commands: BTreeMap::new(),
            send,
            recv,
            tasks: Vec::new(),
            generation: 0,
            cancel: CancellationToken::new(),
        }
    }

    /// Register (or replace) a state.
    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    /// Register (or replace) a command.
    pub fn record_command<T: Command>(&mut self, command: T) {
        self.commands.insert(TypeId::of::<T>(), Box::new(command));
    }

    pub fn try_state<T: State>(&self) -> Result<&T, StateError> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or_else(StateError::state_not_registered::<T>)
    }

    pub fn try_state_mut<T: State>(&mut self) -> Result<&mut T, StateError> {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .ok_or_else(StateError::state_not_registered::<T>)
    }

    /// # Panics
    /// Panics if `T` was never registered; registration happens once at startup.
    pub fn state<T: State>(&self) -> &T {
        match self.try_state::<T>() {
            Ok(state) => state,
            Err(err) => panic!("{err}"),
        }
    }

    /// # Panics
    /// Panics if `T` was never registered; registration happens once at startup.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        match self.try_state_mut::<T>() {
            Ok(state) => state,
            Err(err) => panic!("{err}"),
        }
    }

    /// Edit a state in place. Unregistered states are logged and skipped.
    pub fn update<T: State>(&mut self, edit: impl FnOnce(&mut T)) {
        match self.try_state_mut::<T>() {
            Ok(state) => edit(state),
            Err(err) => warn!("update skipped: {err}"),
        }
    }

    /// A write handle that queues mutations for the next `sync()`.
    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    fn snapshot(&self) -> CommandSnapshot {
        let mut snap = CommandSnapshot::new();
        for (id, state) in &self.states {
            if let Some(boxed) = state.snapshot() {
                snap.insert_boxed(*id, boxed);
            }
        }
        snap
    }

    /// Spawn command `C` on the current Tokio runtime.
    ///
    /// The snapshot is taken now, so inputs written before this call are
    /// visible to the command and anything written after is not.
    pub fn dispatch<C: Command>(&mut self) -> Result<TaskId, StateError> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|err| {
            error!("Cannot dispatch {}: {err}", type_name::<C>());
            StateError::NoRuntime {
                type_name: type_name::<C>(),
            }
        })?;

        let snap = self.snapshot();
        let generation = self.generation + 1;

        let Some(command) = self.commands.get(&TypeId::of::<C>()) else {
            return Err(StateError::CommandNotRegistered {
                type_name: type_name::<C>(),
            });
        };
        let future = command.run(snap, self.updater(), self.cancel.child_token());

        let id = TaskId::new(generation);
        debug!("Dispatching {} (generation {generation})", type_name::<C>());

        let join = runtime.spawn(future);
        self.generation = generation;
        self.tasks.retain(|task| !task.is_finished());
        self.tasks.push(TaskHandle::new(type_name::<C>(), join));

        Ok(id)
    }

    /// Apply every queued mutation in send order. Returns how many were applied.
    pub fn sync(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(mutation) = self.recv.try_recv() {
            match self.states.get_mut(&mutation.target) {
                Some(state) => {
                    (mutation.apply)(state.as_any_mut());
                    applied += 1;
                }
                None => warn!(
                    "Dropping update for unregistered state {}",
                    mutation.type_name
                ),
            }
        }
        self.tasks.retain(|task| !task.is_finished());
        applied
    }

    /// True while any dispatched command has not finished yet.
    pub fn has_running_tasks(&self) -> bool {
        self.tasks.iter().any(|task| !task.is_finished())
    }

    /// Wait for every dispatched command to finish, then `sync()`.
    pub async fn flush_and_wait(&mut self) -> usize {
        for task in std::mem::take(&mut self.tasks) {
            let name = task.name();
            if let Err(err) = task.into_join().await {
                error!("Command {name} did not complete: {err}");
            }
        }
        self.sync()
    }

    /// Ask every running command to wind down. Commands see it through the
    /// token passed to `Command::run`.
    pub fn shutdown(&mut self) {
        self.cancel.cancel();
    }
}
