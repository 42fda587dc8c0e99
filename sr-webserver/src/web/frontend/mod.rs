use maud::Markup;
use rocket::{
    self,
    form::Form,
    get, post,
    request::FlashMessage,
    response::{content::RawCss, Flash, Redirect},
    routes, uri, FromForm, Route, State,
};

use crate::web::{error::Error, guards::*, Cfg};
use sr_core::{
    repositories::{
        CategoryRepo as _, CommentRepository as _, Error as RepoError, StreamerRepo as _,
    },
    usecases,
};

mod login;
mod profile;
mod register;
mod view;

#[cfg(test)]
mod tests;

const MAIN_CSS: &str = include_str!("main.css");

type Result<T> = std::result::Result<T, Error>;

#[get("/")]
pub fn get_index(db: Connections, auth: Auth) -> Result<Markup> {
    let categories = db.shared()?.all_categories()?;
    Ok(view::index(auth.account_name().ok(), &categories))
}

#[get("/about")]
pub fn get_about(auth: Auth) -> Markup {
    view::about(auth.account_name().ok())
}

#[get("/main.css")]
pub fn get_main_css() -> RawCss<&'static str> {
    RawCss(MAIN_CSS)
}

#[get("/category/<slug>")]
pub fn get_category(
    db: Connections,
    slug: &str,
    auth: Auth,
    flash: Option<FlashMessage>,
) -> Result<Markup> {
    let db = db.shared()?;
    let category = match db.get_category_by_slug(slug) {
        Ok(category) => category,
        Err(RepoError::NotFound) => {
            return Ok(view::category_not_found(auth.account_name().ok(), slug));
        }
        Err(err) => return Err(err.into()),
    };
    let streamers = db.streamers_of_category(category.id.as_ref())?;
    Ok(view::category(
        auth.account_name().ok(),
        flash,
        &category,
        &streamers,
    ))
}

#[derive(FromForm)]
pub struct SearchQuery<'r> {
    query: &'r str,
}

#[post("/category/<slug>/search", data = "<data>")]
pub fn post_category_search(
    db: Connections,
    search_gw: &State<Search>,
    cfg: &State<Cfg>,
    slug: &str,
    auth: Auth,
    data: Form<SearchQuery>,
) -> Result<Markup> {
    let category = db.shared()?.get_category_by_slug(slug)?;
    let query = data.into_inner().query;
    let hits = search_gw
        .run_query(query, cfg.search_result_limit)
        .unwrap_or_else(|err| {
            warn!("Web search for {query:?} failed: {err}");
            vec![]
        });
    Ok(view::search_results(
        auth.account_name().ok(),
        &category,
        query,
        &hits,
    ))
}

#[get("/streamer/<name>")]
pub fn get_streamer(
    db: Connections,
    name: &str,
    auth: Auth,
    flash: Option<FlashMessage>,
) -> Result<Markup> {
    let page = usecases::load_streamer_page(&db.shared()?, name)?;
    Ok(view::streamer(auth.account_name().ok(), flash, &page))
}

#[get("/streamer/<name>/comment")]
pub fn get_new_comment(
    account: Account,
    name: &str,
    flash: Option<FlashMessage>,
) -> Markup {
    view::comment_form(account.name(), flash, name)
}

#[derive(FromForm)]
pub struct CommentForm<'r> {
    rating: i8,
    text: &'r str,
}

#[allow(clippy::result_large_err)]
#[post("/streamer/<name>/comment", data = "<data>")]
pub fn post_new_comment(
    db: Connections,
    account: Account,
    name: &str,
    data: Form<CommentForm>,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    let CommentForm { rating, text } = data.into_inner();
    let streamer = db
        .shared()
        .map_err(Error::from)
        .and_then(|db| db.get_streamer_by_name(name).map_err(Into::into))
        .map_err(|_| {
            Flash::error(
                Redirect::to(uri!(get_index)),
                "This streamer does not exist.",
            )
        })?;
    let new_comment = usecases::NewComment {
        streamer_id: streamer.id,
        text: text.to_string(),
        rating,
    };
    let principal = usecases::Principal::new(account.name());
    let db = db.exclusive().map_err(|_| {
        Flash::error(
            Redirect::to(uri!(get_streamer(name))),
            "We are so sorry! An internal server error has occurred. Please try again later.",
        )
    })?;
    match usecases::submit_comment(&db, &principal, new_comment) {
        Ok(_) => Ok(Redirect::to(uri!(get_streamer(name)))),
        Err(usecases::Error::RatingValue) => Err(Flash::error(
            Redirect::to(uri!(get_new_comment(name))),
            "The rating must be between 1 and 5 stars.",
        )),
        Err(_) => Err(Flash::error(
            Redirect::to(uri!(get_new_comment(name))),
            "Failed to add your comment.",
        )),
    }
}

#[get("/comments/<id>/reply?<streamer>")]
pub fn get_new_reply(
    db: Connections,
    account: Account,
    id: &str,
    streamer: &str,
    flash: Option<FlashMessage>,
) -> Result<Markup> {
    let parent = db.shared()?.load_comment(id)?;
    Ok(view::reply_form(account.name(), flash, &parent, streamer))
}

#[derive(FromForm)]
pub struct ReplyForm<'r> {
    text: &'r str,
    // Streamer name, used as redirect target only.
    streamer: &'r str,
}

#[allow(clippy::result_large_err)]
#[post("/comments/<id>/reply", data = "<data>")]
pub fn post_new_reply(
    db: Connections,
    account: Account,
    id: &str,
    data: Form<ReplyForm>,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    let ReplyForm { text, streamer } = data.into_inner();
    let new_sub_comment = usecases::NewSubComment {
        comment_id: id.into(),
        text: text.to_string(),
    };
    let principal = usecases::Principal::new(account.name());
    let result = db
        .exclusive()
        .map_err(Error::from)
        .and_then(|db| {
            usecases::submit_sub_comment(&db, &principal, new_sub_comment).map_err(Into::into)
        });
    match result {
        Ok(_) => Ok(Redirect::to(uri!(get_streamer(streamer)))),
        Err(Error::Parameter(usecases::Error::EmptyComment)) => Err(Flash::error(
            Redirect::to(uri!(get_new_reply(id, streamer))),
            "A reply must not be empty.",
        )),
        Err(_) => Err(Flash::error(
            Redirect::to(uri!(get_streamer(streamer))),
            "Failed to add your reply.",
        )),
    }
}

pub fn routes() -> Vec<Route> {
    routes![
        get_index,
        get_about,
        get_main_css,
        get_category,
        post_category_search,
        get_streamer,
        get_new_comment,
        post_new_comment,
        get_new_reply,
        post_new_reply,
        login::get_login,
        login::post_login,
        login::post_logout,
        register::get_register,
        register::post_register,
        profile::get_profile,
        profile::get_user_profile,
        profile::get_edit_profile,
        profile::post_edit_profile,
        profile::get_register_profile,
        profile::post_register_profile,
    ]
}
