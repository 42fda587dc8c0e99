use maud::{html, Markup};
use rocket::request::FlashMessage;

use super::page::*;

pub fn register(flash: Option<FlashMessage>) -> Markup {
    page(
        "Register | Stream Rater",
        None,
        flash,
        html! {
            main {
                form class="register" action="/register" method="POST" {
                    fieldset {
                        label {
                            "User name:"
                            br;
                            input type="text" name="name" placeholder="user name";
                        }
                        br;
                        label {
                            "eMail:"
                            br;
                            input type="email" name="email" placeholder="eMail address";
                        }
                        br;
                        label {
                            "Password:"
                            br;
                            input type="password" name="password" placeholder="password";
                        }
                        br;
                        input type="submit" value="register";
                    }
                }
            }
        },
    )
}
