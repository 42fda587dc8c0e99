use maud::Markup;
use rocket::{
    self,
    form::Form,
    get, post,
    request::FlashMessage,
    response::{Flash, Redirect},
    uri, FromForm,
};

use super::view;
use crate::web::{error::Error, guards::*};
use sr_core::usecases::{self, Error as ParameterError, Principal};

type Result<T> = std::result::Result<T, Error>;

#[get("/profile")]
pub fn get_profile(
    db: Connections,
    account: Account,
    flash: Option<FlashMessage>,
) -> Result<Markup> {
    let (user, profile) = usecases::get_user_with_profile(&db.shared()?, account.name())?;
    Ok(view::profile(Some(account.name()), flash, &user, &profile))
}

#[get("/user/<name>")]
pub fn get_user_profile(db: Connections, name: &str, auth: Auth) -> Result<Markup> {
    let (user, profile) = usecases::get_user_with_profile(&db.shared()?, name)?;
    Ok(view::profile(auth.account_name().ok(), None, &user, &profile))
}

#[get("/profile/edit")]
pub fn get_edit_profile(
    db: Connections,
    account: Account,
    flash: Option<FlashMessage>,
) -> Result<Markup> {
    let (user, profile) = usecases::get_user_with_profile(&db.shared()?, account.name())?;
    Ok(view::edit_profile_form(flash, &user, &profile))
}

#[derive(FromForm)]
pub struct EditProfile<'r> {
    email: &'r str,
    bio: &'r str,
}

#[allow(clippy::result_large_err)]
#[post("/profile/edit", data = "<data>")]
pub fn post_edit_profile(
    db: Connections,
    account: Account,
    data: Form<EditProfile>,
) -> std::result::Result<Flash<Redirect>, Flash<Redirect>> {
    let EditProfile { email, bio } = data.into_inner();
    let update = usecases::ProfileUpdate {
        email: Some(email.to_string()),
        bio: Some(bio.to_string()),
    };
    let principal = Principal::new(account.name());
    let result = db
        .exclusive()
        .map_err(Error::from)
        .and_then(|db| usecases::update_profile(&db, &principal, update).map_err(Into::into));
    match result {
        Ok(()) => Ok(Flash::success(
            Redirect::to(uri!(get_profile)),
            "Your profile has been updated.",
        )),
        Err(Error::Parameter(ParameterError::Email)) => Err(Flash::error(
            Redirect::to(uri!(get_edit_profile)),
            "Invalid email address.",
        )),
        Err(_) => Err(Flash::error(
            Redirect::to(uri!(get_edit_profile)),
            "Failed to update your profile.",
        )),
    }
}

#[get("/profile/register")]
pub fn get_register_profile(account: Account, flash: Option<FlashMessage>) -> Markup {
    view::register_profile_form(account.name(), flash)
}

#[derive(FromForm)]
pub struct RegisterProfile<'r> {
    bio: &'r str,
    picture_url: &'r str,
}

#[allow(clippy::result_large_err)]
#[post("/profile/register", data = "<data>")]
pub fn post_register_profile(
    db: Connections,
    account: Account,
    data: Form<RegisterProfile>,
) -> std::result::Result<Flash<Redirect>, Flash<Redirect>> {
    let RegisterProfile { bio, picture_url } = data.into_inner();
    let new_profile = usecases::NewProfile {
        bio: bio.to_string(),
        picture_url: Some(picture_url)
            .filter(|url| !url.is_empty())
            .map(ToString::to_string),
    };
    let principal = Principal::new(account.name());
    let result = db
        .exclusive()
        .map_err(Error::from)
        .and_then(|db| usecases::register_profile(&db, &principal, new_profile).map_err(Into::into));
    match result {
        Ok(()) => Ok(Flash::success(
            Redirect::to(uri!(get_profile)),
            "Your profile has been saved.",
        )),
        Err(_) => Err(Flash::error(
            Redirect::to(uri!(get_register_profile)),
            "Failed to save your profile.",
        )),
    }
}
