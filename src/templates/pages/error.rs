use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        message,
        html! {
            main class="container error-page" {
                h1 { (status) }
                p { (message) }
                a class="btn" href="/" { "Back to home" }
            }
        },
    )
}
