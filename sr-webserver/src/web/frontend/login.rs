use maud::Markup;
use rocket::{
    self,
    form::Form,
    get,
    http::{Cookie, CookieJar, SameSite},
    post,
    request::FlashMessage,
    response::{Flash, Redirect},
    uri, FromForm,
};

use super::{super::guards::*, view};

use sr_core::usecases::{self, Error as ParameterError};

#[derive(FromForm)]
pub struct LoginCredentials<'r> {
    pub(crate) name: &'r str,
    pub(crate) password: &'r str,
}

#[allow(clippy::result_large_err)]
#[get("/login")]
pub fn get_login(
    account: Option<Account>,
    flash: Option<FlashMessage>,
) -> std::result::Result<Markup, Redirect> {
    if account.is_some() {
        Err(Redirect::to(uri!(super::get_index)))
    } else {
        Ok(view::login(flash))
    }
}

#[allow(clippy::result_large_err)]
#[post("/login", data = "<credentials>")]
pub fn post_login(
    db: Connections,
    credentials: Form<LoginCredentials>,
    cookies: &CookieJar<'_>,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    let Ok(db) = db.shared() else {
        return Err(Flash::error(
            Redirect::to(uri!(get_login)),
            "We are so sorry! An internal server error has occurred. Please try again later.",
        ));
    };
    let login = usecases::Credentials {
        name: credentials.name,
        password: credentials.password,
    };
    match usecases::login_with_name(&db, &login) {
        Err(err) => {
            let msg = match err {
                ParameterError::Credentials => "Invalid user name or password.",
                _ => "We are so sorry, something went wrong :(",
            };
            Err(Flash::error(Redirect::to(uri!(get_login)), msg))
        }
        Ok(user) => {
            cookies.add_private(
                Cookie::build((COOKIE_USER_KEY, user.name))
                    .http_only(true)
                    .same_site(SameSite::Lax),
            );
            Ok(Redirect::to(uri!(super::get_index)))
        }
    }
}

#[post("/logout")]
pub fn post_logout(cookies: &CookieJar<'_>) -> Flash<Redirect> {
    cookies.remove_private(Cookie::from(COOKIE_USER_KEY));
    Flash::success(
        Redirect::to(uri!(super::get_index)),
        "You have successfully logged out.",
    )
}
