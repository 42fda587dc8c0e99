#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = category)]
pub struct NewCategory<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub slug: &'a str,
    pub image_url: Option<&'a str>,
}

#[derive(Queryable)]
pub struct CategoryEntity {
    pub rowid: i64,
    pub id: String,
    pub name: String,
    pub slug: String,
    pub image_url: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = streamer)]
pub struct NewStreamer<'a> {
    pub parent_rowid: i64,
    pub id: &'a str,
    pub name: &'a str,
    pub image_url: Option<&'a str>,
    pub views: i64,
}

#[derive(Queryable)]
pub struct JoinedStreamer {
    pub rowid: i64,
    pub id: String,
    pub name: String,
    pub image_url: Option<String>,
    pub views: i64,
    // Joined columns
    pub category_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = comment)]
pub struct NewComment {
    pub parent_rowid: i64,
    pub id: String,
    pub created_at: i64,
    pub created_by: String,
    pub rating: i16,
    pub text: String,
}

#[derive(Queryable)]
pub struct JoinedComment {
    pub rowid: i64,
    pub id: String,
    pub created_at: i64,
    pub created_by: String,
    pub rating: i16,
    pub text: String,
    // Joined columns
    pub streamer_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = sub_comment)]
pub struct NewSubComment {
    pub parent_rowid: i64,
    pub id: String,
    pub created_at: i64,
    pub created_by: String,
    pub text: String,
}

#[derive(Queryable)]
pub struct JoinedSubComment {
    pub rowid: i64,
    pub id: String,
    pub created_at: i64,
    pub created_by: String,
    pub text: String,
    // Joined columns
    pub comment_id: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub rowid: i64,
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = user_profiles)]
pub struct NewUserProfile<'a> {
    pub user_rowid: i64,
    pub bio: &'a str,
    pub picture_url: Option<&'a str>,
}

#[derive(Queryable)]
pub struct JoinedUserProfile {
    pub bio: String,
    pub picture_url: Option<String>,
    // Joined columns
    pub user_name: String,
}

use sr_core::entities::{
    Category, Comment, Password, RatingValue, Streamer, SubComment, Timestamp, User, UserProfile,
};

impl From<CategoryEntity> for Category {
    fn from(from: CategoryEntity) -> Self {
        let CategoryEntity {
            rowid: _,
            id,
            name,
            slug,
            image_url,
        } = from;
        Self {
            id: id.into(),
            name,
            slug,
            image_url,
        }
    }
}

impl From<JoinedStreamer> for Streamer {
    fn from(from: JoinedStreamer) -> Self {
        let JoinedStreamer {
            rowid: _,
            id,
            name,
            image_url,
            views,
            category_id,
        } = from;
        Self {
            id: id.into(),
            category_id: category_id.into(),
            name,
            image_url,
            views: views as u64,
        }
    }
}

impl From<JoinedComment> for Comment {
    fn from(from: JoinedComment) -> Self {
        let JoinedComment {
            rowid: _,
            id,
            created_at,
            created_by,
            rating,
            text,
            streamer_id,
        } = from;
        Self {
            id: id.into(),
            streamer_id: streamer_id.into(),
            user_name: created_by,
            rating: RatingValue::from(rating as i8),
            text,
            created_at: Timestamp::from_millis(created_at),
        }
    }
}

impl From<JoinedSubComment> for SubComment {
    fn from(from: JoinedSubComment) -> Self {
        let JoinedSubComment {
            rowid: _,
            id,
            created_at,
            created_by,
            text,
            comment_id,
        } = from;
        Self {
            id: id.into(),
            comment_id: comment_id.into(),
            user_name: created_by,
            text,
            created_at: Timestamp::from_millis(created_at),
        }
    }
}

impl From<UserEntity> for User {
    fn from(from: UserEntity) -> Self {
        let UserEntity {
            rowid: _,
            name,
            email,
            password,
        } = from;
        Self {
            name,
            email,
            password: Password::from_hash(password),
        }
    }
}

impl From<JoinedUserProfile> for UserProfile {
    fn from(from: JoinedUserProfile) -> Self {
        let JoinedUserProfile {
            bio,
            picture_url,
            user_name,
        } = from;
        Self {
            user_name,
            bio,
            picture_url,
        }
    }
}
