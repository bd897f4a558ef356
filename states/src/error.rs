use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("State not registered: {type_name}")]
    StateNotRegistered { type_name: &'static str },

    #[error("State snapshot missing: {type_name}")]
    SnapshotMissing { type_name: &'static str },

    #[error("Command not registered: {type_name}")]
    CommandNotRegistered { type_name: &'static str },

    #[error("No Tokio runtime available to run {type_name}")]
    NoRuntime { type_name: &'static str },
}

impl StateError {
    pub fn state_not_registered<T: ?Sized>() -> Self {
        Self::StateNotRegistered {
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn snapshot_missing<T: ?Sized>() -> Self {
        Self::SnapshotMissing {
            type_name: std::any::type_name::<T>(),
        }
    }
}
