use std::any::{Any, TypeId};
use std::collections::BTreeMap;

use crate::{State, StateError};

/// Owned copies of every snapshot-able state, captured when a command is dispatched.
///
/// The snapshot is `Send` so the command future can move it onto a worker thread.
#[derive(Default)]
pub struct CommandSnapshot {
    inner: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl std::fmt::Debug for CommandSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSnapshot")
            .field("states", &self.inner.len())
            .finish()
    }
}

impl CommandSnapshot {
    pub fn new() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }

    pub fn insert_boxed(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        self.inner.insert(id, value);
    }

    /// Insert a state by value. Handy for tests that run a command without a `StateCtx`.
    pub fn with<T: State + Send>(mut self, value: T) -> Self {
        self.inner.insert(TypeId::of::<T>(), Box::new(value));
        self
    }

    pub fn state<T: State>(&self) -> Result<&T, StateError> {
        self.inner
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .ok_or_else(StateError::snapshot_missing::<T>)
    }
}
