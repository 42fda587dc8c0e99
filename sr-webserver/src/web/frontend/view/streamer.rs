use maud::{html, Markup};
use rocket::request::FlashMessage;

use super::page::*;
use sr_core::{entities::*, usecases::StreamerPage};

pub fn streamer(
    account: Option<&str>,
    flash: Option<FlashMessage>,
    p: &StreamerPage,
) -> Markup {
    page(
        &format!("{} | Stream Rater", p.streamer.name),
        account,
        flash,
        streamer_detail(account, p),
    )
}

fn streamer_detail(account: Option<&str>, p: &StreamerPage) -> Markup {
    let StreamerPage {
        streamer,
        avg_rating,
        comment_count,
        comments,
    } = p;
    html! {
        main {
            h1 { (streamer.name) }
            @if let Some(ref url) = streamer.image_url {
                img class="streamer-image" src=(url) alt=(streamer.name);
            }
            p class="rating-summary" {
                span class="avg-rating" { (format!("{:.2}", f64::from(*avg_rating))) }
                " stars from "
                (comment_count) " comments, "
                (streamer.views) " views"
            }
            @if account.is_some() {
                a class="btn" href=(format!("/streamer/{}/comment", streamer.name)) {
                    "Add a comment"
                }
            } @else {
                p { a href="/login" { "Log in" } " to add a comment." }
            }
            h3 { "Comments" }
            ul class="comment-list" {
                @for (c, sub_comments) in comments {
                    li {
                        (comment(account, &streamer.name, c, sub_comments))
                    }
                }
            }
        }
    }
}

fn comment(
    account: Option<&str>,
    streamer_name: &str,
    c: &Comment,
    sub_comments: &[SubComment],
) -> Markup {
    html! {
        h5 {
            (c.user_name)
            " "
            span class="stars" { (format!("({}/5)", i8::from(c.rating))) }
            " "
            span class="date" { (c.created_at.to_string()) }
        }
        p { (c.text) }
        ul class="reply-list" {
            @for sc in sub_comments {
                li {
                    h6 {
                        (sc.user_name)
                        " "
                        span class="date" { (sc.created_at.to_string()) }
                    }
                    p { (sc.text) }
                }
            }
        }
        @if account.is_some() {
            a href=(format!("/comments/{}/reply?streamer={streamer_name}", c.id)) {
                "Reply"
            }
        }
    }
}

pub fn comment_form(account: &str, flash: Option<FlashMessage>, streamer_name: &str) -> Markup {
    page(
        &format!("Comment on {streamer_name} | Stream Rater"),
        Some(account),
        flash,
        html! {
            main {
                h3 { (format!("Comment on {streamer_name}")) }
                form class="comment" action=(format!("/streamer/{streamer_name}/comment")) method="POST" {
                    fieldset {
                        label {
                            "Rating:"
                            br;
                            select name="rating" required? {
                                option value="5" { "5 - excellent" }
                                option value="4" { "4 - good" }
                                option value="3" { "3 - okay" }
                                option value="2" { "2 - poor" }
                                option value="1" { "1 - awful" }
                            }
                        }
                        br;
                        label {
                            "Comment:"
                            br;
                            textarea name="text" rows="5" cols="50" {}
                        }
                        br;
                        input type="submit" value="submit";
                    }
                }
            }
        },
    )
}

pub fn reply_form(
    account: &str,
    flash: Option<FlashMessage>,
    parent: &Comment,
    streamer_name: &str,
) -> Markup {
    page(
        "Reply | Stream Rater",
        Some(account),
        flash,
        html! {
            main {
                h3 { (format!("Reply to {}", parent.user_name)) }
                blockquote { (parent.text) }
                form class="reply" action=(format!("/comments/{}/reply", parent.id)) method="POST" {
                    fieldset {
                        label {
                            "Reply:"
                            br;
                            textarea name="text" rows="5" cols="50" {}
                        }
                        input type="hidden" name="streamer" value=(streamer_name);
                        br;
                        input type="submit" value="submit";
                    }
                }
            }
        },
    )
}
