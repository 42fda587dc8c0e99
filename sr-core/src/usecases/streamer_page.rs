use super::prelude::*;

/// The view-ready bundle of rating and threaded discussion for one
/// streamer.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamerPage {
    pub streamer: Streamer,
    pub avg_rating: AvgRatingValue,
    pub comment_count: usize,
    // Comments in creation order, each zipped with its sub-comments
    // in creation order.
    pub comments: Vec<(Comment, Vec<SubComment>)>,
}

/// Assemble the page for the streamer with the given name.
///
/// This is a pure read: nothing is written and repeated calls without
/// intervening writes yield identical results.
pub fn load_streamer_page<R>(repo: &R, streamer_name: &str) -> Result<StreamerPage>
where
    R: StreamerRepo + CommentRepository + SubCommentRepository,
{
    let streamer = repo.get_streamer_by_name(streamer_name)?;
    let comments = repo.load_comments_of_streamer(streamer.id.as_ref())?;
    let avg_rating = streamer.avg_rating(&comments);
    let comment_count = comments.len();
    let comments = repo.zip_comments_with_sub_comments(comments)?;
    Ok(StreamerPage {
        streamer,
        avg_rating,
        comment_count,
        comments,
    })
}
