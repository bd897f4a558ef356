//! Transient toast messages.

use std::any::Any;

use chrono::{DateTime, TimeDelta, Utc};
use portal_states::State;

/// How long a toast stays on screen.
pub const TOAST_TTL: TimeDelta = TimeDelta::seconds(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Toast {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.created_at >= TOAST_TTL
    }
}

/// Queue of toasts, oldest first.
#[derive(Debug, Default)]
pub struct Notifications {
    toasts: Vec<Toast>,
}

impl Notifications {
    pub fn success(&mut self, message: impl Into<String>, now: DateTime<Utc>) {
        self.push(ToastKind::Success, message.into(), now);
    }

    pub fn error(&mut self, message: impl Into<String>, now: DateTime<Utc>) {
        self.push(ToastKind::Error, message.into(), now);
    }

    fn push(&mut self, kind: ToastKind, message: String, created_at: DateTime<Utc>) {
        self.toasts.push(Toast {
            kind,
            message,
            created_at,
        });
    }

    /// Drop every toast that has outlived `TOAST_TTL`.
    pub fn prune(&mut self, now: DateTime<Utc>) {
        self.toasts.retain(|toast| !toast.is_expired(now));
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.toasts.len() {
            self.toasts.remove(index);
        }
    }
}

impl State for Notifications {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
