///////////////////////////////////////////////////////////////////////
// Categories & streamers
///////////////////////////////////////////////////////////////////////

table! {
    category (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
        slug -> Text,
        image_url -> Nullable<Text>,
    }
}

table! {
    streamer (rowid) {
        rowid -> BigInt,
        parent_rowid -> BigInt,
        id -> Text,
        name -> Text,
        image_url -> Nullable<Text>,
        views -> BigInt,
    }
}

joinable!(streamer -> category (parent_rowid));

///////////////////////////////////////////////////////////////////////
// Comments
///////////////////////////////////////////////////////////////////////

table! {
    comment (rowid) {
        rowid -> BigInt,
        parent_rowid -> BigInt,
        id -> Text,
        created_at -> BigInt,
        created_by -> Text,
        rating -> SmallInt,
        text -> Text,
    }
}

joinable!(comment -> streamer (parent_rowid));

table! {
    sub_comment (rowid) {
        rowid -> BigInt,
        parent_rowid -> BigInt,
        id -> Text,
        created_at -> BigInt,
        created_by -> Text,
        text -> Text,
    }
}

joinable!(sub_comment -> comment (parent_rowid));

///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (rowid) {
        rowid -> BigInt,
        name -> Text,
        email -> Text,
        password -> Text,
    }
}

table! {
    user_profiles (user_rowid) {
        user_rowid -> BigInt,
        bio -> Text,
        picture_url -> Nullable<Text>,
    }
}

joinable!(user_profiles -> users (user_rowid));

///////////////////////////////////////////////////////////////////////

allow_tables_to_appear_in_same_query!(
    category,
    streamer,
    comment,
    sub_comment,
    users,
    user_profiles,
);
