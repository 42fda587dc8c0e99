use crate::password::Password;

/// A registered user account.
///
/// Users authenticate with their unique `name`. The e-mail address is
/// informational and may be changed from the profile page.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name     : String,
    pub email    : String,
    pub password : Password,
}

/// The public profile paired 1:1 with a user account.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserProfile {
    pub user_name   : String,
    pub bio         : String,
    pub picture_url : Option<String>,
}
