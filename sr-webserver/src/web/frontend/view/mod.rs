use maud::{html, Markup};

use sr_core::{entities::*, gateways::search::SearchHit};

mod category;
mod login;
mod page;
mod profile;
mod register;
mod streamer;

pub use category::*;
pub use login::*;
use page::*;
pub use profile::*;
pub use register::*;
pub use streamer::*;

pub fn index(account: Option<&str>, categories: &[Category]) -> Markup {
    page(
        "Stream Rater",
        account,
        None,
        html! {
            main {
                h1 { "Stream Rater" }
                p { "Pick a category and rate your favorite streamers." }
                ul class="category-list" {
                    @for c in categories {
                        li {
                            a href=(format!("/category/{}", c.slug)) { (c.name) }
                        }
                    }
                }
            }
        },
    )
}

pub fn about(account: Option<&str>) -> Markup {
    page(
        "About | Stream Rater",
        account,
        None,
        html! {
            main {
                h1 { "About" }
                p {
                    "Stream Rater collects star ratings and comments for
                     streamers, grouped by category. Anyone can browse,
                     registered users can rate and discuss."
                }
            }
        },
    )
}

pub fn search_results(
    account: Option<&str>,
    category: &Category,
    search_term: &str,
    hits: &[SearchHit],
) -> Markup {
    page(
        &format!("{} | Stream Rater", category.name),
        account,
        None,
        html! {
            main {
                h1 { (category.name) }
                (category_search_form(&category.slug, Some(search_term)))
                div class="results" {
                    @if hits.is_empty() {
                        p {
                            "We could not find anything related to "
                            em { (format!("'{search_term}'")) }
                        }
                    } @else {
                        ul class="result-list" {
                            @for hit in hits {
                                li {
                                    h3 { a href=(hit.url) { (hit.title) } }
                                    p { (hit.summary) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
