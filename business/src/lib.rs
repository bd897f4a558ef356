mod config;
pub mod notifications;
pub mod users;

use portal_states::{StateCtx, Time};

pub use config::BusinessConfig;
pub use notifications::{Notifications, TOAST_TTL, Toast, ToastKind};
pub use users::{
    CreateUserCommand, CreateUserInput, DeleteUserCommand, DeleteUserInput, FetchUsersCommand,
    LoadStatus, NewUser, PasswordCheck, Role, Submission, UpdateUserCommand, UpdateUserInput,
    UserDraft, UserId, UserListState, UserModal, UserRecord, UsersApi, UsersApiError,
    check_password, controller, filter_users,
};

/// Register every state and command the user page needs.
///
/// Fails only if the HTTP client cannot be built.
pub fn register(ctx: &mut StateCtx, config: BusinessConfig) -> Result<(), UsersApiError> {
    let api = UsersApi::new(&config)?;

    ctx.add_state(Time::default());
    ctx.add_state(config);
    ctx.add_state(api);
    ctx.add_state(UserListState::default());
    ctx.add_state(Notifications::default());
    ctx.add_state(CreateUserInput::default());
    ctx.add_state(UpdateUserInput::default());
    ctx.add_state(DeleteUserInput::default());

    ctx.record_command(FetchUsersCommand);
    ctx.record_command(CreateUserCommand);
    ctx.record_command(UpdateUserCommand);
    ctx.record_command(DeleteUserCommand);

    Ok(())
}
