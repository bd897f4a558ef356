use std::any::{Any, TypeId, type_name};

use flume::{Receiver, Sender};
use log::warn;

use crate::State;

type ApplyFn = Box<dyn FnOnce(&mut dyn Any) + Send>;

/// One queued state mutation, applied on the UI thread by `StateCtx::sync`.
pub(crate) struct Mutation {
    pub(crate) target: TypeId,
    pub(crate) type_name: &'static str,
    pub(crate) apply: ApplyFn,
}

pub(crate) fn channel() -> (Sender<Mutation>, Receiver<Mutation>) {
    flume::unbounded()
}

/// Write handle given to commands.
///
/// Mutations are queued, not applied: the owning `StateCtx` applies them in
/// send order the next time it syncs. A command therefore never observes a
/// half-applied update, and the UI never sees a state change mid-frame.
#[derive(Clone)]
pub struct Updater {
    send: Sender<Mutation>,
}

impl std::fmt::Debug for Updater {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Updater")
            .field("pending", &self.send.len())
            .finish()
    }
}

impl Updater {
    pub(crate) fn new(send: Sender<Mutation>) -> Self {
        Self { send }
    }

    /// Replace the state of type `T` wholesale.
    pub fn set<T: State + Send>(&self, value: T) {
        self.update::<T>(move |state| *state = value);
    }

    /// Queue an in-place edit of the state of type `T`.
    pub fn update<T: State>(&self, edit: impl FnOnce(&mut T) + Send + 'static) {
        let apply: ApplyFn = Box::new(move |any: &mut dyn Any| {
            if let Some(state) = any.downcast_mut::<T>() {
                edit(state);
            }
        });

        let mutation = Mutation {
            target: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            apply,
        };

        if self.send.send(mutation).is_err() {
            warn!(
                "Dropping update for {}: state context is gone",
                type_name::<T>()
            );
        }
    }
}
