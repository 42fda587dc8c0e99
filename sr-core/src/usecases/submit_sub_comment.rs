use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewSubComment {
    pub comment_id: Id,
    pub text: String,
}

/// Create a reply to an existing comment on behalf of `principal`.
///
/// An empty text is rejected, unlike for top-level comments.
pub fn submit_sub_comment<R>(
    repo: &R,
    principal: &Principal,
    new_sub_comment: NewSubComment,
) -> Result<SubComment>
where
    R: CommentRepository + SubCommentRepository,
{
    let NewSubComment { comment_id, text } = new_sub_comment;
    if text.is_empty() {
        return Err(Error::EmptyComment);
    }
    let parent = repo.load_comment(comment_id.as_ref())?;
    let sub_comment = SubComment {
        id: Id::new(),
        comment_id: parent.id,
        user_name: principal.user_name.clone(),
        text,
        created_at: Timestamp::now(),
    };
    log::debug!(
        "Creating new sub-comment for comment {} by {}",
        sub_comment.comment_id,
        sub_comment.user_name
    );
    repo.create_sub_comment(sub_comment.clone())?;
    Ok(sub_comment)
}
