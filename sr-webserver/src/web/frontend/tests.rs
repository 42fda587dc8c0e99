use rocket::http::Status as HttpStatus;

use super::*;
use crate::web::{
    self,
    guards::Connections,
    tests::{prelude::*, register_user},
};
use sr_entities::builders::*;

fn setup() -> (Client, Connections) {
    let (client, db) = web::tests::rocket_test_setup(vec![("/", super::routes())]);
    (client, db)
}

fn login(client: &Client, name: &str, password: &str) {
    let res = client
        .post("/login")
        .header(ContentType::Form)
        .body(format!("name={name}&password={password}"))
        .dispatch();
    assert_eq!(res.status(), HttpStatus::SeeOther);
}

fn seed_streamer(pool: &Connections, category_name: &str, streamer_name: &str) -> Streamer {
    let db = pool.exclusive().unwrap();
    let category = Category::new(category_name, None);
    db.create_category(&category).unwrap();
    let streamer = Streamer::build()
        .category_id(category.id.as_str())
        .name(streamer_name)
        .finish();
    db.create_streamer(&streamer).unwrap();
    streamer
}

fn seed_comment(pool: &Connections, streamer: &Streamer, user_name: &str, rating: i8) -> Comment {
    let db = pool.exclusive().unwrap();
    let comment = Comment::build()
        .streamer_id(streamer.id.as_str())
        .user_name(user_name)
        .rating(rating)
        .text("some text")
        .finish();
    db.create_comment(comment.clone()).unwrap();
    comment
}

#[test]
fn get_index_lists_categories() {
    let (client, pool) = setup();
    seed_streamer(&pool, "Just Chatting", "alice");
    let res = client.get("/").dispatch();
    assert_eq!(res.status(), HttpStatus::Ok);
    let body_str = res.into_string().unwrap();
    assert!(body_str.contains("Just Chatting"));
    assert!(body_str.contains("/category/just-chatting"));
}

#[test]
fn get_about() {
    let (client, _) = setup();
    let res = client.get("/about").dispatch();
    assert_eq!(res.status(), HttpStatus::Ok);
}

#[test]
fn get_category_lists_streamers() {
    let (client, pool) = setup();
    seed_streamer(&pool, "Just Chatting", "alice");
    let res = client.get("/category/just-chatting").dispatch();
    assert_eq!(res.status(), HttpStatus::Ok);
    let body_str = res.into_string().unwrap();
    assert!(body_str.contains("alice"));
    assert!(body_str.contains("/streamer/alice"));
}

#[test]
fn unknown_category_renders_not_found_page() {
    let (client, _) = setup();
    let res = client.get("/category/no-such-category").dispatch();
    assert_eq!(res.status(), HttpStatus::Ok);
    let body_str = res.into_string().unwrap();
    assert!(body_str.contains("Category not found"));
}

#[test]
fn unknown_streamer_redirects_to_homepage() {
    let (client, _) = setup();
    let res = client.get("/streamer/nobody").dispatch();
    assert_eq!(res.status(), HttpStatus::SeeOther);
    for h in res.headers().iter() {
        if h.name.as_str() == "Location" {
            assert_eq!(h.value, "/");
        }
    }
}

#[test]
fn public_profile_by_user_name() {
    let (client, pool) = setup();
    register_user(&pool, "foo", "secret123");
    let res = client.get("/user/foo").dispatch();
    assert_eq!(res.status(), HttpStatus::Ok);
    let body_str = res.into_string().unwrap();
    assert!(body_str.contains("foo"));
    // The email stays private on the public view.
    assert!(!body_str.contains("foo@example.com"));
}

#[test]
fn streamer_page_shows_average_rating() {
    let (client, pool) = setup();
    let streamer = seed_streamer(&pool, "FPS", "bob");
    seed_comment(&pool, &streamer, "u1", 3);
    seed_comment(&pool, &streamer, "u2", 4);
    seed_comment(&pool, &streamer, "u3", 2);
    let res = client.get("/streamer/bob").dispatch();
    assert_eq!(res.status(), HttpStatus::Ok);
    let body_str = res.into_string().unwrap();
    assert!(body_str.contains("3.00"));
}

#[test]
fn streamer_without_comments_has_zero_rating() {
    let (client, pool) = setup();
    seed_streamer(&pool, "FPS", "bob");
    let res = client.get("/streamer/bob").dispatch();
    assert_eq!(res.status(), HttpStatus::Ok);
    let body_str = res.into_string().unwrap();
    assert!(body_str.contains("0.00"));
}

#[test]
fn streamer_page_shows_replies_under_their_comment() {
    let (client, pool) = setup();
    let streamer = seed_streamer(&pool, "FPS", "bob");
    let first = seed_comment(&pool, &streamer, "u1", 4);
    seed_comment(&pool, &streamer, "u2", 5);
    {
        let db = pool.exclusive().unwrap();
        for text in ["an early reply", "a later reply"] {
            db.create_sub_comment(
                SubComment::build()
                    .comment_id(first.id.as_str())
                    .user_name("u3")
                    .text(text)
                    .finish(),
            )
            .unwrap();
        }
    }
    let res = client.get("/streamer/bob").dispatch();
    assert_eq!(res.status(), HttpStatus::Ok);
    let body_str = res.into_string().unwrap();
    // Replies are rendered oldest first.
    let early = body_str.find("an early reply").unwrap();
    let later = body_str.find("a later reply").unwrap();
    assert!(early < later);
    // 9/2 = 4.5
    assert!(body_str.contains("4.50"));
}

#[test]
fn posting_a_comment_requires_login() {
    let (client, pool) = setup();
    seed_streamer(&pool, "FPS", "bob");
    let res = client
        .post("/streamer/bob/comment")
        .header(ContentType::Form)
        .body("rating=4&text=nice")
        .dispatch();
    assert_eq!(res.status(), HttpStatus::Unauthorized);
}

#[test]
fn post_comment() {
    let (client, pool) = setup();
    let streamer = seed_streamer(&pool, "FPS", "bob");
    register_user(&pool, "foo", "secret123");
    login(&client, "foo", "secret123");
    let res = client
        .post("/streamer/bob/comment")
        .header(ContentType::Form)
        .body("rating=4&text=nice")
        .dispatch();
    assert_eq!(res.status(), HttpStatus::SeeOther);
    let comments = pool
        .exclusive()
        .unwrap()
        .load_comments_of_streamer(streamer.id.as_ref())
        .unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].user_name, "foo");
    assert_eq!(i8::from(comments[0].rating), 4);
}

#[test]
fn post_comment_with_invalid_rating_is_rejected() {
    let (client, pool) = setup();
    let streamer = seed_streamer(&pool, "FPS", "bob");
    register_user(&pool, "foo", "secret123");
    login(&client, "foo", "secret123");
    let res = client
        .post("/streamer/bob/comment")
        .header(ContentType::Form)
        .body("rating=6&text=nice")
        .dispatch();
    assert_eq!(res.status(), HttpStatus::SeeOther);
    for h in res.headers().iter() {
        if h.name.as_str() == "Location" {
            assert_eq!(h.value, "/streamer/bob/comment");
        }
    }
    let comments = pool
        .exclusive()
        .unwrap()
        .load_comments_of_streamer(streamer.id.as_ref())
        .unwrap();
    assert!(comments.is_empty());
}

#[test]
fn post_reply() {
    let (client, pool) = setup();
    let streamer = seed_streamer(&pool, "FPS", "bob");
    let comment = seed_comment(&pool, &streamer, "u1", 4);
    register_user(&pool, "foo", "secret123");
    login(&client, "foo", "secret123");
    let res = client
        .post(format!("/comments/{}/reply", comment.id))
        .header(ContentType::Form)
        .body("text=well+said&streamer=bob")
        .dispatch();
    assert_eq!(res.status(), HttpStatus::SeeOther);
    let replies = pool
        .exclusive()
        .unwrap()
        .load_sub_comments_of_comment(comment.id.as_ref())
        .unwrap();
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].text, "well said");
    assert_eq!(replies[0].user_name, "foo");
}

#[test]
fn post_empty_reply_is_rejected() {
    let (client, pool) = setup();
    let streamer = seed_streamer(&pool, "FPS", "bob");
    let comment = seed_comment(&pool, &streamer, "u1", 4);
    register_user(&pool, "foo", "secret123");
    login(&client, "foo", "secret123");
    let res = client
        .post(format!("/comments/{}/reply", comment.id))
        .header(ContentType::Form)
        .body("text=&streamer=bob")
        .dispatch();
    assert_eq!(res.status(), HttpStatus::SeeOther);
    let replies = pool
        .exclusive()
        .unwrap()
        .load_sub_comments_of_comment(comment.id.as_ref())
        .unwrap();
    assert!(replies.is_empty());
}

#[test]
fn category_search_with_dummy_gateway() {
    let (client, pool) = setup();
    seed_streamer(&pool, "FPS", "bob");
    let res = client
        .post("/category/fps/search")
        .header(ContentType::Form)
        .body("query=quake")
        .dispatch();
    assert_eq!(res.status(), HttpStatus::Ok);
    let body_str = res.into_string().unwrap();
    assert!(body_str.contains("quake"));
}
