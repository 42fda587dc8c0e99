use maud::{html, Markup, DOCTYPE};
use rocket::request::FlashMessage;

const MAIN_CSS_URL: &str = "/main.css";

pub fn page(
    title: &str,
    account: Option<&str>,
    flash: Option<FlashMessage>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no";
            title {(title)}
            link rel="stylesheet" href=(MAIN_CSS_URL);
        }
        body {
            (flash_msg(flash))
            (header(account))
            (content)
        }
    }
}

fn flash_msg(flash: Option<FlashMessage>) -> Markup {
    html! {
        @if let Some(msg) = flash {
            div class=(format!("flash {}", msg.kind())) {
                (msg.message())
            }
        }
    }
}

fn header(account: Option<&str>) -> Markup {
    html! {
    header {
        nav {
            a href="/" { "home" }
            a href="/about" { "about" }
        }
        @if let Some(name) = account {
            div class="msg" { "You are logged in as " span class="user" { (name) } }
            nav {
                a href="/profile" { "profile" }
                form class="logout" action="/logout" method="POST" {
                    input type="submit" value="logout";
                }
            }
        }
        @ else {
            nav {
                a href="/login" { "login" }
                a href="/register" { "register" }
            }
        }
    }
    }
}
