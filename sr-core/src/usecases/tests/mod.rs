use std::{cell::RefCell, result};

use crate::{
    entities::*,
    repositories::{Error as RepoError, *},
};

type RepoResult<T> = result::Result<T, RepoError>;

trait Key {
    fn key(&self) -> &str;
}

impl Key for Category {
    fn key(&self) -> &str {
        self.slug.as_str()
    }
}

impl Key for Streamer {
    fn key(&self) -> &str {
        self.name.as_str()
    }
}

impl Key for Comment {
    fn key(&self) -> &str {
        self.id.as_ref()
    }
}

impl Key for SubComment {
    fn key(&self) -> &str {
        self.id.as_ref()
    }
}

impl Key for User {
    fn key(&self) -> &str {
        self.name.as_str()
    }
}

impl Key for UserProfile {
    fn key(&self) -> &str {
        self.user_name.as_str()
    }
}

fn get<T: Clone + Key>(objects: &[T], key: &str) -> RepoResult<T> {
    match objects.iter().find(|x| x.key() == key) {
        Some(x) => Ok(x.clone()),
        None => Err(RepoError::NotFound),
    }
}

fn create<T: Clone + Key>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.key() == e.key()) {
        return Err(RepoError::AlreadyExists);
    } else {
        objects.push(e);
    }
    Ok(())
}

fn update<T: Clone + Key>(objects: &mut [T], e: &T) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.key() == e.key()) {
        objects[pos] = e.clone();
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

// Entries are kept in insertion order, which doubles as creation order
// for comments and sub-comments.
#[derive(Default)]
pub struct MockDb {
    pub categories: RefCell<Vec<Category>>,
    pub streamers: RefCell<Vec<Streamer>>,
    pub comments: RefCell<Vec<Comment>>,
    pub sub_comments: RefCell<Vec<SubComment>>,
    pub users: RefCell<Vec<User>>,
    pub profiles: RefCell<Vec<UserProfile>>,
}

impl CategoryRepo for MockDb {
    fn create_category(&self, category: &Category) -> RepoResult<()> {
        create(&mut self.categories.borrow_mut(), category.clone())
    }

    fn get_category_by_slug(&self, slug: &str) -> RepoResult<Category> {
        get(&self.categories.borrow(), slug)
    }

    fn all_categories(&self) -> RepoResult<Vec<Category>> {
        Ok(self.categories.borrow().clone())
    }

    fn count_categories(&self) -> RepoResult<usize> {
        self.all_categories().map(|v| v.len())
    }
}

impl StreamerRepo for MockDb {
    fn create_streamer(&self, streamer: &Streamer) -> RepoResult<()> {
        create(&mut self.streamers.borrow_mut(), streamer.clone())
    }

    fn get_streamer_by_name(&self, name: &str) -> RepoResult<Streamer> {
        get(&self.streamers.borrow(), name)
    }

    fn streamers_of_category(&self, category_id: &str) -> RepoResult<Vec<Streamer>> {
        Ok(self
            .streamers
            .borrow()
            .iter()
            .filter(|s| s.category_id.as_str() == category_id)
            .cloned()
            .collect())
    }
}

impl CommentRepository for MockDb {
    fn create_comment(&self, comment: Comment) -> RepoResult<()> {
        create(&mut self.comments.borrow_mut(), comment)
    }

    fn load_comment(&self, id: &str) -> RepoResult<Comment> {
        get(&self.comments.borrow(), id)
    }

    fn load_comments_of_streamer(&self, streamer_id: &str) -> RepoResult<Vec<Comment>> {
        Ok(self
            .comments
            .borrow()
            .iter()
            .filter(|c| c.streamer_id.as_str() == streamer_id)
            .cloned()
            .collect())
    }
}

impl SubCommentRepository for MockDb {
    fn create_sub_comment(&self, sub_comment: SubComment) -> RepoResult<()> {
        create(&mut self.sub_comments.borrow_mut(), sub_comment)
    }

    fn load_sub_comments_of_comment(&self, comment_id: &str) -> RepoResult<Vec<SubComment>> {
        Ok(self
            .sub_comments
            .borrow()
            .iter()
            .filter(|sc| sc.comment_id.as_str() == comment_id)
            .cloned()
            .collect())
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, u: &User) -> RepoResult<()> {
        create(&mut self.users.borrow_mut(), u.clone())
    }

    fn update_user(&self, u: &User) -> RepoResult<()> {
        update(&mut self.users.borrow_mut(), u)
    }

    fn get_user_by_name(&self, name: &str) -> RepoResult<User> {
        get(&self.users.borrow(), name)
    }

    fn try_get_user_by_name(&self, name: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.name == name)
            .cloned())
    }

    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }
}

impl ProfileRepo for MockDb {
    fn create_profile(&self, profile: &UserProfile) -> RepoResult<()> {
        create(&mut self.profiles.borrow_mut(), profile.clone())
    }

    fn update_profile(&self, profile: &UserProfile) -> RepoResult<()> {
        update(&mut self.profiles.borrow_mut(), profile)
    }

    fn get_profile_of_user(&self, user_name: &str) -> RepoResult<UserProfile> {
        get(&self.profiles.borrow(), user_name)
    }
}
