use crate::id::Id;

/// The reviewed entity that comments and ratings attach to.
///
/// The displayed rating is never stored with the streamer. It is derived
/// from the ratings of all comments at read time.
#[rustfmt::skip]
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Streamer {
    pub id          : Id,
    pub category_id : Id,
    pub name        : String,
    pub image_url   : Option<String>,
    pub views       : u64,
}
