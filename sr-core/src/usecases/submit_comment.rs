use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewComment {
    pub streamer_id: Id,
    pub text: String,
    pub rating: i8,
}

/// Create a rated review for a streamer on behalf of `principal`.
///
/// The rating must be an integer in [1,5]. An empty text is accepted for
/// top-level comments (unlike sub-comments). On validation failure
/// nothing is written.
pub fn submit_comment<R>(repo: &R, principal: &Principal, new_comment: NewComment) -> Result<Comment>
where
    R: CommentRepository,
{
    let NewComment {
        streamer_id,
        text,
        rating,
    } = new_comment;
    let rating = RatingValue::from(rating);
    if !rating.is_valid() {
        return Err(Error::RatingValue);
    }
    let comment = Comment {
        id: Id::new(),
        streamer_id,
        user_name: principal.user_name.clone(),
        rating,
        text,
        created_at: Timestamp::now(),
    };
    log::debug!(
        "Creating new comment for streamer {} by {}",
        comment.streamer_id,
        comment.user_name
    );
    repo.create_comment(comment.clone())?;
    Ok(comment)
}
