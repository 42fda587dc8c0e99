use maud::{html, Markup};
use rocket::request::FlashMessage;

use super::page::*;

pub fn login(flash: Option<FlashMessage>) -> Markup {
    page(
        "Login | Stream Rater",
        None,
        flash,
        html! {
            main {
                form class="login" action="/login" method="POST" {
                    fieldset {
                        label {
                            "User name:"
                            br;
                            input type="text" name="name" placeholder="user name";
                        }
                        br;
                        label {
                            "Password:"
                            br;
                            input type="password" name="password" placeholder="password";
                        }
                        br;
                        input type="submit" value="login";
                        a href="/register" { "create an account" }
                    }
                }
            }
        },
    )
}
