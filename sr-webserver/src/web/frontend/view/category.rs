use maud::{html, Markup};
use rocket::request::FlashMessage;

use super::page::*;
use sr_core::entities::*;

pub fn category(
    account: Option<&str>,
    flash: Option<FlashMessage>,
    category: &Category,
    streamers: &[Streamer],
) -> Markup {
    page(
        &format!("{} | Stream Rater", category.name),
        account,
        flash,
        html! {
            main {
                h1 { (category.name) }
                @if let Some(ref url) = category.image_url {
                    img class="category-image" src=(url) alt=(category.name);
                }
                (category_search_form(&category.slug, None))
                h3 { "Streamers" }
                @if streamers.is_empty() {
                    p { "No streamers in this category yet." }
                } @else {
                    ul class="streamer-list" {
                        @for s in streamers {
                            li {
                                a href=(format!("/streamer/{}", s.name)) { (s.name) }
                                " "
                                span class="views" { (format!("({} views)", s.views)) }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn category_not_found(account: Option<&str>, slug: &str) -> Markup {
    page(
        "Category not found | Stream Rater",
        account,
        None,
        html! {
            main {
                h1 { "Category not found" }
                p {
                    "There is no category "
                    em { (format!("'{slug}'")) }
                    ". "
                    a href="/" { "Back to all categories." }
                }
            }
        },
    )
}

pub fn category_search_form(slug: &str, search_term: Option<&str>) -> Markup {
    html! {
        div class="search-form" {
            form action=(format!("/category/{slug}/search")) method="POST" {
                input
                    type="text"
                    name="query"
                    value=(search_term.unwrap_or(""))
                    size=(50)
                    maxlength=(200)
                    placeholder="search the web for streams";
                br;
                input class="btn" type="submit" value="search";
            }
        }
    }
}
