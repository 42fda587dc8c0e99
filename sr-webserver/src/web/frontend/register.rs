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
use crate::web::guards::Connections;
use sr_core::usecases::{self, Error as ParameterError};

#[derive(FromForm)]
pub struct RegisterCredentials<'r> {
    name: &'r str,
    email: &'r str,
    password: &'r str,
}

#[get("/register")]
pub fn get_register(flash: Option<FlashMessage>) -> Markup {
    view::register(flash)
}

#[allow(clippy::result_large_err)]
#[post("/register", data = "<credentials>")]
pub fn post_register(
    db: Connections,
    credentials: Form<RegisterCredentials>,
) -> std::result::Result<Flash<Redirect>, Flash<Redirect>> {
    match db.exclusive() {
        Err(_) => Err(Flash::error(
            Redirect::to(uri!(get_register)),
            "We are so sorry! An internal server error has occurred. Please try again later.",
        )),
        Ok(db) => {
            let RegisterCredentials {
                name,
                email,
                password,
            } = credentials.into_inner();
            let new_user = usecases::NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            };
            match usecases::create_new_user(&db, new_user) {
                Err(err) => {
                    let msg = match err {
                        ParameterError::UserExists => "A user with this name already exists.",
                        ParameterError::UserName => "This user name is not allowed.",
                        ParameterError::Email => "Invalid email address.",
                        ParameterError::Password => "Invalid password.",
                        _ => "We are so sorry, something went wrong :(",
                    };
                    Err(Flash::error(Redirect::to(uri!(get_register)), msg))
                }
                Ok(()) => Ok(Flash::success(
                    Redirect::to(uri!(super::login::get_login)),
                    "Registered successfully. You can now log in.",
                )),
            }
        }
    }
}
