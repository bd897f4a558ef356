use std::any::Any;

/// A value stored in [`StateCtx`](crate::StateCtx), keyed by its concrete type.
///
/// States are owned by the UI thread. Commands never touch them directly; they
/// read a [`CommandSnapshot`](crate::CommandSnapshot) taken at dispatch time and
/// report back through an [`Updater`](crate::Updater).
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Clone of this state handed to commands at dispatch time.
    ///
    /// States that commands never read keep the default `None`.
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }
}
