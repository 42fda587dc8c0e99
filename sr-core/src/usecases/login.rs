use super::prelude::*;

pub struct Credentials<'a> {
    pub name: &'a str,
    pub password: &'a str,
}

pub fn login_with_name<R>(repo: &R, login: &Credentials) -> Result<User>
where
    R: UserRepo,
{
    repo.try_get_user_by_name(login.name)
        .map_err(Error::Repo)
        .and_then(|user| {
            if let Some(u) = user {
                if u.password.verify(login.password) {
                    Ok(u)
                } else {
                    Err(Error::Credentials)
                }
            } else {
                Err(Error::Credentials)
            }
        })
}
