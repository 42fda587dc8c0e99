// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait CategoryRepo {
    fn create_category(&self, category: &Category) -> Result<()>;

    fn get_category_by_slug(&self, slug: &str) -> Result<Category>;
    fn all_categories(&self) -> Result<Vec<Category>>;
    fn count_categories(&self) -> Result<usize>;
}

pub trait StreamerRepo {
    fn create_streamer(&self, streamer: &Streamer) -> Result<()>;

    fn get_streamer_by_name(&self, name: &str) -> Result<Streamer>;
    fn streamers_of_category(&self, category_id: &str) -> Result<Vec<Streamer>>;
}

pub trait CommentRepository {
    fn create_comment(&self, comment: Comment) -> Result<()>;

    fn load_comment(&self, id: &str) -> Result<Comment>;

    // In creation order, oldest first
    fn load_comments_of_streamer(&self, streamer_id: &str) -> Result<Vec<Comment>>;
}

pub trait SubCommentRepository {
    fn create_sub_comment(&self, sub_comment: SubComment) -> Result<()>;

    // In creation order, oldest first
    fn load_sub_comments_of_comment(&self, comment_id: &str) -> Result<Vec<SubComment>>;

    // The inner sequence at position i belongs to the comment at position i.
    fn zip_comments_with_sub_comments(
        &self,
        comments: Vec<Comment>,
    ) -> Result<Vec<(Comment, Vec<SubComment>)>> {
        let mut results = Vec::with_capacity(comments.len());
        for comment in comments {
            let sub_comments = self.load_sub_comments_of_comment(comment.id.as_ref())?;
            results.push((comment, sub_comments));
        }
        Ok(results)
    }
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;

    fn get_user_by_name(&self, name: &str) -> Result<User>;
    fn try_get_user_by_name(&self, name: &str) -> Result<Option<User>>;
    fn count_users(&self) -> Result<usize>;
}

pub trait ProfileRepo {
    fn create_profile(&self, profile: &UserProfile) -> Result<()>;
    fn update_profile(&self, profile: &UserProfile) -> Result<()>;

    fn get_profile_of_user(&self, user_name: &str) -> Result<UserProfile>;
}
