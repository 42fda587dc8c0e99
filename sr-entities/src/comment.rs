use crate::{id::*, rating::*, time::*};

/// A top-level, rated review attached to a streamer.
///
/// `user_name` is the display name of the author captured at creation
/// time. It is intentionally not a reference to the user account and does
/// not change if the account is renamed later.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id          : Id,
    pub streamer_id : Id,
    pub user_name   : String,
    pub rating      : RatingValue,
    pub text        : String,
    pub created_at  : Timestamp,
}

/// An unrated reply attached to a specific comment.
///
/// Sub-comments provide one level of threading, no further nesting.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubComment {
    pub id          : Id,
    pub comment_id  : Id,
    pub user_name   : String,
    pub text        : String,
    pub created_at  : Timestamp,
}
