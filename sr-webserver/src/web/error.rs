use rocket::{
    self,
    http::Status,
    response::{self, Redirect, Responder},
};
use thiserror::Error;

use sr_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        Self::Parameter(err.into())
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::Parameter(err) => match err {
                // Requests for objects that do not exist are answered
                // with a redirect to the homepage instead of a bare 404.
                ParameterError::Repo(RepoError::NotFound) => Redirect::to("/").respond_to(req),
                ParameterError::Credentials | ParameterError::Forbidden => {
                    Err(Status::Unauthorized)
                }
                ParameterError::Repo(err) => {
                    error!("Repository error: {err}");
                    Err(Status::InternalServerError)
                }
                _ => Err(Status::BadRequest),
            },
            Error::Other(err) => {
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
        }
    }
}
