mod toasts;
pub mod users;

pub use toasts::toasts;
pub use users::users_page;
