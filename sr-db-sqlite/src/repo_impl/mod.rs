// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use diesel::{
    self,
    prelude::*,
    result::Error as DieselError,
};

use sr_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod category;
mod comment;
mod streamer;
mod sub_comment;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        _ => repo::Error::Other(err.into()),
    }
}

fn resolve_category_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::category::dsl;
    schema::category::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}

fn resolve_streamer_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::streamer::dsl;
    schema::streamer::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}

fn resolve_comment_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::comment::dsl;
    schema::comment::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}

fn resolve_user_rowid(conn: &mut SqliteConnection, name: &str) -> Result<i64> {
    use schema::users::dsl;
    schema::users::table
        .select(dsl::rowid)
        .filter(dsl::name.eq(name))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}
