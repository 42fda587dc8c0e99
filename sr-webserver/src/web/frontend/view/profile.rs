use maud::{html, Markup};
use rocket::request::FlashMessage;

use super::page::*;
use sr_core::entities::*;

pub fn profile(
    account: Option<&str>,
    flash: Option<FlashMessage>,
    user: &User,
    p: &UserProfile,
) -> Markup {
    let is_own = account == Some(user.name.as_str());
    page(
        &format!("{} | Stream Rater", user.name),
        account,
        flash,
        html! {
            main {
                h1 { (user.name) }
                @if let Some(ref url) = p.picture_url {
                    img class="profile-image" src=(url) alt=(user.name);
                }
                table {
                    @if is_own {
                        tr {
                            td { "eMail" }
                            td { (user.email) }
                        }
                    }
                    tr {
                        td { "Bio" }
                        td { (p.bio) }
                    }
                }
                @if is_own {
                    nav {
                        a href="/profile/edit" { "edit profile" }
                        a href="/profile/register" { "fill in profile" }
                    }
                }
            }
        },
    )
}

pub fn edit_profile_form(
    flash: Option<FlashMessage>,
    user: &User,
    p: &UserProfile,
) -> Markup {
    page(
        "Edit profile | Stream Rater",
        Some(&user.name),
        flash,
        html! {
            main {
                h3 { "Edit your profile" }
                form class="profile" action="/profile/edit" method="POST" {
                    fieldset {
                        label {
                            "eMail:"
                            br;
                            input type="email" name="email" value=(user.email);
                        }
                        br;
                        label {
                            "Bio:"
                            br;
                            textarea name="bio" rows="5" cols="50" { (p.bio) }
                        }
                        br;
                        input type="submit" value="save";
                    }
                }
            }
        },
    )
}

pub fn register_profile_form(account: &str, flash: Option<FlashMessage>) -> Markup {
    page(
        "Fill in profile | Stream Rater",
        Some(account),
        flash,
        html! {
            main {
                h3 { "Fill in your profile" }
                form class="profile" action="/profile/register" method="POST" {
                    fieldset {
                        label {
                            "Bio:"
                            br;
                            textarea name="bio" rows="5" cols="50" {}
                        }
                        br;
                        label {
                            "Picture URL:"
                            br;
                            input type="text" name="picture_url" placeholder="https://";
                        }
                        br;
                        input type="submit" value="save";
                    }
                }
            }
        },
    )
}
