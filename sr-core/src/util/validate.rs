use lazy_static::lazy_static;
use regex::Regex;

pub use fast_chemail::is_valid_email;

lazy_static! {
    // Letters, digits and @/./+/-/_ only, 150 characters or fewer.
    static ref USER_NAME_REGEX: Regex = Regex::new(r"^[\w.@+-]{1,150}$").unwrap();
}

pub fn is_valid_user_name(name: &str) -> bool {
    USER_NAME_REGEX.is_match(name)
}
