//! Handles for commands that have been spawned onto the runtime.
//!
//! Each dispatch gets a `TaskId` from a generation counter, so logs can tell
//! two runs of the same command apart.

use tokio::task::JoinHandle;

/// Unique identifier for a spawned command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    generation: u64,
}

impl TaskId {
    pub fn new(generation: u64) -> Self {
        Self { generation }
    }

    /// Higher generation values indicate more recently spawned tasks.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// A running command.
#[derive(Debug)]
pub struct TaskHandle {
    name: &'static str,
    join: JoinHandle<()>,
}

impl TaskHandle {
    pub(crate) fn new(name: &'static str, join: JoinHandle<()>) -> Self {
        Self { name, join }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    pub(crate) fn into_join(self) -> JoinHandle<()> {
        self.join
    }
}
