mod create_new_user;
mod error;
mod get_user;
mod login;
mod principal;
mod register_profile;
mod streamer_page;
mod submit_comment;
mod submit_sub_comment;
mod update_profile;

#[cfg(test)]
pub mod tests;

pub use self::{
    create_new_user::*, error::Error, get_user::*, login::*, principal::*, register_profile::*,
    streamer_page::*, submit_comment::*, submit_sub_comment::*, update_profile::*,
};

mod prelude {
    pub use super::{error::Error, principal::Principal};
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, rating::*, repositories::*};
}
