//! User management page.
//!
//! - `panel`: header, search, list/loading/error views, footer
//! - `table`: the users grid
//! - `form`: add/edit window
//! - `confirm`: delete confirmation window
//!
//! Widgets only read `UserListState` and collect what was clicked; the
//! collected actions go to `portal_business::controller` after rendering.

mod confirm;
mod form;
mod panel;
pub mod table;

use portal_business::UserRecord;

pub use panel::users_page;

pub const PAGE_TITLE: &str = "User Management";
pub const ADD_USER: &str = "Add User";
pub const SEARCH_HINT: &str = "Search by name, email, employee code, or medical card number...";
pub const NO_MATCHES: &str = "No users found matching your search criteria";
pub const LOADING: &str = "Loading users...";
pub const TRY_AGAIN: &str = "Try Again";

/// Something the user clicked during this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    Retry,
    OpenAdd,
    Edit(UserRecord),
    Delete(UserRecord),
    Search(String),
}
