//! State behind the user administration page.
//!
//! UI code reads this through `ctx.state::<UserListState>()` and changes it
//! only through the functions in `controller`. Command completions land here
//! through the `*_succeeded` / `*_failed` methods, applied by `StateCtx::sync`.

use std::any::Any;

use portal_states::State;

use super::draft::UserDraft;
use super::model::{NewUser, UserId, UserRecord};
use super::search::filter_users;

pub const FETCH_FAILED: &str = "Error fetching users";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Which form, if any, is on screen. Replaces a pair of booleans so add and
/// edit can never be open together.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UserModal {
    #[default]
    Closed,
    Add(UserDraft),
    Edit(UserDraft),
}

impl UserModal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn draft(&self) -> Option<&UserDraft> {
        match self {
            Self::Closed => None,
            Self::Add(draft) | Self::Edit(draft) => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut UserDraft> {
        match self {
            Self::Closed => None,
            Self::Add(draft) | Self::Edit(draft) => Some(draft),
        }
    }
}

#[derive(Debug, Default)]
pub struct UserListState {
    /// Canonical list in fetch/insertion order.
    users: Vec<UserRecord>,
    status: LoadStatus,
    search_term: String,
    modal: UserModal,
    /// User awaiting delete confirmation.
    pending_delete: Option<UserRecord>,
    is_adding: bool,
    is_updating: bool,
    is_deleting: bool,
}

impl UserListState {
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn filtered(&self) -> Vec<&UserRecord> {
        filter_users(&self.users, &self.search_term)
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn modal(&self) -> &UserModal {
        &self.modal
    }

    pub fn draft_mut(&mut self) -> Option<&mut UserDraft> {
        self.modal.draft_mut()
    }

    pub fn pending_delete(&self) -> Option<&UserRecord> {
        self.pending_delete.as_ref()
    }

    pub fn is_adding(&self) -> bool {
        self.is_adding
    }

    pub fn is_updating(&self) -> bool {
        self.is_updating
    }

    pub fn is_deleting(&self) -> bool {
        self.is_deleting
    }

    /// True while the open form's submission is in flight.
    pub fn is_submitting(&self) -> bool {
        match self.modal {
            UserModal::Add(_) => self.is_adding,
            UserModal::Edit(_) => self.is_updating,
            UserModal::Closed => false,
        }
    }

    pub(crate) fn set_search_term(&mut self, term: String) {
        self.search_term = term;
    }

    pub(crate) fn set_modal(&mut self, modal: UserModal) {
        self.modal = modal;
    }

    pub(crate) fn set_pending_delete(&mut self, record: Option<UserRecord>) {
        self.pending_delete = record;
    }

    pub(crate) fn take_pending_delete(&mut self) -> Option<UserRecord> {
        self.pending_delete.take()
    }

    pub(crate) fn begin_fetch(&mut self) {
        self.status = LoadStatus::Loading;
    }

    pub(crate) fn begin_add(&mut self) {
        self.is_adding = true;
    }

    pub(crate) fn begin_update(&mut self) {
        self.is_updating = true;
    }

    pub(crate) fn begin_delete(&mut self) {
        self.is_deleting = true;
    }

    pub fn fetch_succeeded(&mut self, users: Vec<UserRecord>) {
        self.users = users;
        self.status = LoadStatus::Loaded;
    }

    pub fn fetch_failed(&mut self) {
        self.status = LoadStatus::Failed(FETCH_FAILED.to_owned());
    }

    /// Append the created record and close the add form.
    pub fn create_succeeded(&mut self, record: UserRecord) {
        self.users.push(record);
        self.is_adding = false;
        if matches!(self.modal, UserModal::Add(_)) {
            self.modal = UserModal::Closed;
        }
    }

    /// The add form stays open with what was typed.
    pub fn create_failed(&mut self) {
        self.is_adding = false;
    }

    /// Replace the entry with the same id and close the edit form.
    pub fn update_succeeded(&mut self, record: UserRecord) {
        if let Some(existing) = self.users.iter_mut().find(|user| user.id == record.id) {
            *existing = record;
        }
        self.is_updating = false;
        if matches!(self.modal, UserModal::Edit(_)) {
            self.modal = UserModal::Closed;
        }
    }

    pub fn update_failed(&mut self) {
        self.is_updating = false;
    }

    pub fn delete_succeeded(&mut self, id: UserId) {
        self.users.retain(|user| user.id != id);
        self.is_deleting = false;
    }

    pub fn delete_failed(&mut self) {
        self.is_deleting = false;
    }
}

impl State for UserListState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Payload for `CreateUserCommand`, written right before dispatch.
#[derive(Debug, Clone, Default)]
pub struct CreateUserInput {
    pub user: Option<NewUser>,
}

impl State for CreateUserInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

/// Payload for `UpdateUserCommand`.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserInput {
    pub user: Option<UserRecord>,
}

impl State for UpdateUserInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

/// Payload for `DeleteUserCommand`.
#[derive(Debug, Clone, Default)]
pub struct DeleteUserInput {
    pub user: Option<UserRecord>,
}

impl State for DeleteUserInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}
