//! Manual-only commands that talk to `/api/user`.
//!
//! Each command reads its inputs from the snapshot taken at dispatch, awaits
//! one request, then queues the outcome through the `Updater`. Every path,
//! including a missing input or a cancelled request, ends with exactly one
//! `*_succeeded` / `*_failed` call so the in-flight flag always clears.

use std::future::Future;

use chrono::Utc;
use log::{error, info, warn};
use portal_states::{Command, CommandFuture, CommandSnapshot, Updater};
use tokio_util::sync::CancellationToken;

use super::api::{ApiResult, UsersApi, UsersApiError};
use super::state::{CreateUserInput, DeleteUserInput, UpdateUserInput, UserListState};
use crate::notifications::Notifications;

pub const USER_ADDED: &str = "User added successfully";
pub const USER_ADD_FAILED: &str = "Failed to add user";
pub const USER_UPDATED: &str = "User updated successfully";
pub const USER_UPDATE_FAILED: &str = "Failed to update user";
pub const USER_DELETED: &str = "User deleted successfully";
pub const USER_DELETE_FAILED: &str = "Failed to delete user";

async fn cancellable<T>(
    cancel: &CancellationToken,
    request: impl Future<Output = ApiResult<T>>,
) -> ApiResult<T> {
    tokio::select! {
        () = cancel.cancelled() => Err(UsersApiError::Cancelled),
        result = request => result,
    }
}

fn toast_success(updater: &Updater, message: &'static str) {
    updater.update::<Notifications>(move |n| n.success(message, Utc::now()));
}

fn toast_error(updater: &Updater, message: &'static str) {
    updater.update::<Notifications>(move |n| n.error(message, Utc::now()));
}

/// GET `/api/user`, replacing the whole list on success.
#[derive(Debug, Default)]
pub struct FetchUsersCommand;

impl Command for FetchUsersCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> CommandFuture {
        let api = match snap.state::<UsersApi>() {
            Ok(api) => api.clone(),
            Err(err) => {
                error!("FetchUsersCommand: {err}");
                updater.update::<UserListState>(UserListState::fetch_failed);
                return Box::pin(async {});
            }
        };

        Box::pin(async move {
            match cancellable(&cancel, api.list_users()).await {
                Ok(users) => {
                    info!("FetchUsersCommand: fetched {} users", users.len());
                    updater.update::<UserListState>(move |state| state.fetch_succeeded(users));
                }
                Err(err) => {
                    error!("FetchUsersCommand: {err}");
                    updater.update::<UserListState>(UserListState::fetch_failed);
                }
            }
        })
    }
}

/// POST `/api/user` with the payload from `CreateUserInput`.
#[derive(Debug, Default)]
pub struct CreateUserCommand;

impl Command for CreateUserCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> CommandFuture {
        let inputs = snap.state::<UsersApi>().and_then(|api| {
            snap.state::<CreateUserInput>()
                .map(|input| (api.clone(), input.user.clone()))
        });
        let (api, user) = match inputs {
            Ok((api, Some(user))) => (api, user),
            Ok((_, None)) => {
                warn!("CreateUserCommand: dispatched without a payload");
                updater.update::<UserListState>(UserListState::create_failed);
                return Box::pin(async {});
            }
            Err(err) => {
                error!("CreateUserCommand: {err}");
                updater.update::<UserListState>(UserListState::create_failed);
                toast_error(&updater, USER_ADD_FAILED);
                return Box::pin(async {});
            }
        };

        Box::pin(async move {
            match cancellable(&cancel, api.create_user(&user)).await {
                Ok(record) => {
                    info!("CreateUserCommand: created user {}", record.id);
                    updater.update::<UserListState>(move |state| state.create_succeeded(record));
                    toast_success(&updater, USER_ADDED);
                }
                Err(err) => {
                    error!("CreateUserCommand: {err}");
                    updater.update::<UserListState>(UserListState::create_failed);
                    toast_error(&updater, USER_ADD_FAILED);
                }
            }
        })
    }
}

/// PUT `/api/user/{id}` with the record from `UpdateUserInput`.
#[derive(Debug, Default)]
pub struct UpdateUserCommand;

impl Command for UpdateUserCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> CommandFuture {
        let inputs = snap.state::<UsersApi>().and_then(|api| {
            snap.state::<UpdateUserInput>()
                .map(|input| (api.clone(), input.user.clone()))
        });
        let (api, user) = match inputs {
            Ok((api, Some(user))) => (api, user),
            Ok((_, None)) => {
                warn!("UpdateUserCommand: dispatched without a payload");
                updater.update::<UserListState>(UserListState::update_failed);
                return Box::pin(async {});
            }
            Err(err) => {
                error!("UpdateUserCommand: {err}");
                updater.update::<UserListState>(UserListState::update_failed);
                toast_error(&updater, USER_UPDATE_FAILED);
                return Box::pin(async {});
            }
        };

        Box::pin(async move {
            match cancellable(&cancel, api.update_user(&user)).await {
                Ok(()) => {
                    info!("UpdateUserCommand: updated user {}", user.id);
                    updater.update::<UserListState>(move |state| state.update_succeeded(user));
                    toast_success(&updater, USER_UPDATED);
                }
                Err(err) => {
                    error!("UpdateUserCommand: {err}");
                    updater.update::<UserListState>(UserListState::update_failed);
                    toast_error(&updater, USER_UPDATE_FAILED);
                }
            }
        })
    }
}

/// DELETE `/api/user/{id}` for the user in `DeleteUserInput`.
#[derive(Debug, Default)]
pub struct DeleteUserCommand;

impl Command for DeleteUserCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> CommandFuture {
        let inputs = snap.state::<UsersApi>().and_then(|api| {
            snap.state::<DeleteUserInput>()
                .map(|input| (api.clone(), input.user.as_ref().map(|user| user.id)))
        });
        let (api, id) = match inputs {
            Ok((api, Some(id))) => (api, id),
            Ok((_, None)) => {
                warn!("DeleteUserCommand: dispatched without a target");
                updater.update::<UserListState>(UserListState::delete_failed);
                return Box::pin(async {});
            }
            Err(err) => {
                error!("DeleteUserCommand: {err}");
                updater.update::<UserListState>(UserListState::delete_failed);
                toast_error(&updater, USER_DELETE_FAILED);
                return Box::pin(async {});
            }
        };

        Box::pin(async move {
            match cancellable(&cancel, api.delete_user(id)).await {
                Ok(()) => {
                    info!("DeleteUserCommand: deleted user {id}");
                    updater.update::<UserListState>(move |state| state.delete_succeeded(id));
                    toast_success(&updater, USER_DELETED);
                }
                Err(err) => {
                    error!("DeleteUserCommand: {err}");
                    updater.update::<UserListState>(UserListState::delete_failed);
                    toast_error(&updater, USER_DELETE_FAILED);
                }
            }
        })
    }
}
