use serde::Serialize;

use crate::domain::user::models::User;

pub mod current_user;
pub mod get_user;
pub mod list_users;
pub mod login;
pub mod register;

pub use current_user::current_user;
pub use get_user::get_user;
pub use list_users::list_users;
pub use login::login;
pub use register::register;

/// Public view of a user. The password hash has no counterpart here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            username: user.username.as_str().to_string(),
            email: user.email.as_ref().map(|e| e.as_str().to_string()),
        }
    }
}
