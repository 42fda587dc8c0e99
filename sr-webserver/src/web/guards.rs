use std::ops::Deref;

use anyhow::Result as Fallible;
use rocket::{
    self,
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    State,
};

use sr_core::{gateways::search::SearchGateway, usecases::Error as ParameterError};
use sr_db_sqlite::{DbReadOnly, DbReadWrite};

pub const COOKIE_USER_KEY: &str = "stream-rater-user";

type Result<T> = std::result::Result<T, crate::web::Error>;

/// Hands the managed database pool out to routes.
///
/// Routes ask for `shared()` (read-only) or `exclusive()` (single
/// writer) access per request.
#[derive(Clone)]
pub struct Connections(sr_db_sqlite::Connections);

impl Connections {
    pub fn shared(&self) -> Fallible<DbReadOnly> {
        self.0.shared()
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite> {
        self.0.exclusive()
    }
}

impl From<sr_db_sqlite::Connections> for Connections {
    fn from(pool: sr_db_sqlite::Connections) -> Self {
        Self(pool)
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Connections {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let pool = try_outcome!(request.guard::<&State<Connections>>().await);
        Outcome::Success(pool.inner().clone())
    }
}

/// Authentication state extracted from the session cookie.
#[derive(Debug)]
pub struct Auth {
    account_name: Option<String>,
}

impl Auth {
    pub fn account_name(&self) -> Result<&str> {
        self.account_name
            .as_deref()
            .ok_or_else(|| ParameterError::Forbidden.into())
    }

    fn account_name_from_cookie(request: &Request) -> Option<String> {
        request
            .cookies()
            .get_private(COOKIE_USER_KEY)
            .and_then(|cookie| cookie.value().parse().ok())
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let account_name = Self::account_name_from_cookie(request);
        Outcome::Success(Self { account_name })
    }
}

/// An authenticated user account, required by routes that
/// refuse anonymous access.
#[derive(Debug)]
pub struct Account(String);

impl Account {
    pub fn name(&self) -> &str {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth = try_outcome!(Auth::from_request(request).await);
        match auth.account_name() {
            Ok(name) => Outcome::Success(Account(name.to_owned())),
            _ => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

pub struct Search(pub Box<dyn SearchGateway + Send + Sync>);

impl Deref for Search {
    type Target = dyn SearchGateway;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
