use std::any::Any;

use chrono::{DateTime, Utc};

use crate::State;

/// Wall clock as seen by the UI.
///
/// The app advances it once per frame; tests move it by hand so anything
/// time-based (toast expiry) is deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Time {
    virt: DateTime<Utc>,
}

impl Time {
    pub fn at(virt: DateTime<Utc>) -> Self {
        Self { virt }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { virt: Utc::now() }
    }
}

impl State for Time {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(*self))
    }
}

impl AsMut<DateTime<Utc>> for Time {
    fn as_mut(&mut self) -> &mut DateTime<Utc> {
        &mut self.virt
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.virt
    }
}
