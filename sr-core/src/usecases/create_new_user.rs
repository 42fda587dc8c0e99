use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Register a new account together with an empty profile.
pub fn create_new_user<R: UserRepo + ProfileRepo>(repo: &R, u: NewUser) -> Result<()> {
    let password = u.password.parse::<Password>()?;
    if !validate::is_valid_user_name(&u.name) {
        return Err(Error::UserName);
    }
    if !validate::is_valid_email(&u.email) {
        return Err(Error::Email);
    }
    if repo.try_get_user_by_name(&u.name)?.is_some() {
        return Err(Error::UserExists);
    }
    let new_user = User {
        name: u.name,
        email: u.email,
        password,
    };
    log::debug!("Creating new user: name = {}", new_user.name);
    repo.create_user(&new_user)?;
    repo.create_profile(&UserProfile {
        user_name: new_user.name,
        ..Default::default()
    })?;
    Ok(())
}
