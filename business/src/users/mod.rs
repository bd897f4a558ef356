//! User administration domain.
//!
//! - `model`: wire types for `/api/user`
//! - `password` / `draft`: form-side rules, no IO
//! - `search`: client-side filtering
//! - `api`: the REST client
//! - `state` / `commands` / `controller`: what the UI reads and calls
//!
//! UI code should not define `State` or `Command` types for this page. It
//! reads `UserListState` and calls into `controller`.

pub mod api;
pub mod commands;
pub mod controller;
pub mod draft;
pub mod model;
pub mod password;
pub mod search;
pub mod state;

pub use api::{UsersApi, UsersApiError};
pub use commands::{CreateUserCommand, DeleteUserCommand, FetchUsersCommand, UpdateUserCommand};
pub use controller::Submission;
pub use draft::UserDraft;
pub use model::{NewUser, Role, UserId, UserRecord};
pub use password::{PasswordCheck, check_password};
pub use search::filter_users;
pub use state::{
    CreateUserInput, DeleteUserInput, LoadStatus, UpdateUserInput, UserListState, UserModal,
};
