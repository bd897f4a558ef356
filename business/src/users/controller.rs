//! Entry points the UI calls to drive the user page.
//!
//! Everything here runs on the UI thread against `StateCtx`. Local changes
//! (search term, modal, pending delete) apply immediately; backend work is
//! handed to a command and lands on a later `sync()`.

use chrono::Utc;
use log::{debug, error};
use portal_states::{Command, StateCtx, StateError};

use super::commands::{
    CreateUserCommand, DeleteUserCommand, FetchUsersCommand, USER_ADD_FAILED, USER_DELETE_FAILED,
    USER_UPDATE_FAILED, UpdateUserCommand,
};
use super::draft::UserDraft;
use super::model::UserRecord;
use super::password::PASSWORD_TOO_SHORT;
use super::state::{
    CreateUserInput, DeleteUserInput, LoadStatus, UpdateUserInput, UserListState, UserModal,
};
use crate::notifications::Notifications;

/// What happened to a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// A request is on its way.
    Dispatched,
    /// Blocked before any request, with the reason shown to the user.
    Rejected(&'static str),
    /// Nothing to submit: wrong form open, or already in flight.
    Ignored,
}

fn users(ctx: &StateCtx) -> &UserListState {
    ctx.state::<UserListState>()
}

fn users_mut(ctx: &mut StateCtx) -> &mut UserListState {
    ctx.state_mut::<UserListState>()
}

fn dispatch<C: Command>(ctx: &mut StateCtx) -> Result<(), StateError> {
    ctx.dispatch::<C>().map(|id| {
        debug!("dispatched generation {}", id.generation());
    })
}

fn toast_error(ctx: &mut StateCtx, message: &'static str) {
    ctx.update::<Notifications>(|n| n.error(message, Utc::now()));
}

/// Load (or reload) the list. Ignored while a fetch is already running.
pub fn list_users(ctx: &mut StateCtx) {
    if users(ctx).is_loading() {
        return;
    }
    users_mut(ctx).begin_fetch();
    if let Err(err) = dispatch::<FetchUsersCommand>(ctx) {
        error!("Cannot fetch users: {err}");
        users_mut(ctx).fetch_failed();
    }
}

/// Fetch once, the first time the page is shown.
pub fn ensure_loaded(ctx: &mut StateCtx) {
    if *users(ctx).status() == LoadStatus::Idle {
        list_users(ctx);
    }
}

pub fn set_search_term(ctx: &mut StateCtx, term: impl Into<String>) {
    users_mut(ctx).set_search_term(term.into());
}

pub fn open_add(ctx: &mut StateCtx) {
    let state = users_mut(ctx);
    if state.is_submitting() {
        return;
    }
    state.set_modal(UserModal::Add(UserDraft::empty()));
}

/// Open the edit form on a copy of `record`; the list is untouched until
/// the update succeeds.
pub fn open_edit(ctx: &mut StateCtx, record: &UserRecord) {
    let state = users_mut(ctx);
    if state.is_submitting() {
        return;
    }
    state.set_modal(UserModal::Edit(UserDraft::from_record(record)));
}

/// Discard the open draft. No-op while its submission is in flight.
pub fn close_modal(ctx: &mut StateCtx) {
    let state = users_mut(ctx);
    if state.is_submitting() {
        return;
    }
    state.set_modal(UserModal::Closed);
}

/// Submit the add form.
pub fn create_user(ctx: &mut StateCtx) -> Submission {
    let state = users_mut(ctx);
    if state.is_adding() {
        return Submission::Ignored;
    }
    let UserModal::Add(draft) = state.modal() else {
        return Submission::Ignored;
    };

    if !draft.password_check().is_valid() {
        if let Some(draft) = state.draft_mut() {
            draft.set_password_error(Some(PASSWORD_TOO_SHORT));
        }
        return Submission::Rejected(PASSWORD_TOO_SHORT);
    }
    if let Some(label) = draft.missing_required() {
        return Submission::Rejected(label);
    }

    let payload = draft.to_new_user();
    state.begin_add();
    ctx.state_mut::<CreateUserInput>().user = Some(payload);

    match dispatch::<CreateUserCommand>(ctx) {
        Ok(()) => Submission::Dispatched,
        Err(err) => {
            error!("Cannot create user: {err}");
            users_mut(ctx).create_failed();
            toast_error(ctx, USER_ADD_FAILED);
            Submission::Ignored
        }
    }
}

/// Submit the edit form.
pub fn update_user(ctx: &mut StateCtx) -> Submission {
    let state = users_mut(ctx);
    if state.is_updating() {
        return Submission::Ignored;
    }
    let UserModal::Edit(draft) = state.modal() else {
        return Submission::Ignored;
    };
    if let Some(label) = draft.missing_required() {
        return Submission::Rejected(label);
    }
    let Some(record) = draft.to_record() else {
        return Submission::Ignored;
    };

    state.begin_update();
    ctx.state_mut::<UpdateUserInput>().user = Some(record);

    match dispatch::<UpdateUserCommand>(ctx) {
        Ok(()) => Submission::Dispatched,
        Err(err) => {
            error!("Cannot update user: {err}");
            users_mut(ctx).update_failed();
            toast_error(ctx, USER_UPDATE_FAILED);
            Submission::Ignored
        }
    }
}

/// First step of a delete: ask for confirmation.
pub fn request_delete(ctx: &mut StateCtx, record: &UserRecord) {
    let state = users_mut(ctx);
    if state.is_deleting() {
        return;
    }
    state.set_pending_delete(Some(record.clone()));
}

/// Decline the confirmation. Nothing is sent.
pub fn cancel_delete(ctx: &mut StateCtx) {
    users_mut(ctx).set_pending_delete(None);
}

/// Accept the confirmation and delete the pending user.
pub fn confirm_delete(ctx: &mut StateCtx) {
    let state = users_mut(ctx);
    if state.is_deleting() {
        return;
    }
    let Some(record) = state.take_pending_delete() else {
        return;
    };

    state.begin_delete();
    ctx.state_mut::<DeleteUserInput>().user = Some(record);

    if let Err(err) = dispatch::<DeleteUserCommand>(ctx) {
        error!("Cannot delete user: {err}");
        users_mut(ctx).delete_failed();
        toast_error(ctx, USER_DELETE_FAILED);
    }
}

/// Sentence shown in the delete confirmation dialog.
pub fn delete_prompt(record: &UserRecord) -> String {
    format!("Are you sure you want to delete {}?", record.name)
}
