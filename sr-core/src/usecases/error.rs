use thiserror::Error;

use crate::repositories;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Empty input")]
    EmptyComment,
    #[error("Invalid user name")]
    UserName,
    #[error("Invalid email address")]
    Email,
    #[error("Invalid password")]
    Password,
    #[error("The user already exists")]
    UserExists,
    #[error("Invalid credentials")]
    Credentials,
    #[error("This is not allowed")]
    Forbidden,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<sr_entities::password::ParseError> for Error {
    fn from(_: sr_entities::password::ParseError) -> Self {
        Self::Password
    }
}
