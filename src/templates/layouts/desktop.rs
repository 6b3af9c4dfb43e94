use crate::data::SITE_NAME;
use maud::{html, Markup, DOCTYPE};

pub const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

/// Public site shell. `description` feeds the meta description.
pub fn desktop_layout(title: &str, description: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(description);
                title { (title) " | " (SITE_NAME) }
                link rel="icon" type="image/svg+xml" href="/static/placeholder.svg";
                link rel="stylesheet" href="/static/main.css";
                script src=(HTMX_SRC) defer {};
            }
            body {
              header class="site-header" {
                  a href="/" class="brand" {
                      svg
                          xmlns="http://www.w3.org/2000/svg"
                          width="24"
                          height="24"
                          viewBox="0 0 24 24"
                          fill="none"
                          stroke="currentColor"
                          stroke-width="2"
                          stroke-linecap="round"
                          stroke-linejoin="round"
                          class="icon icon-home"
                      {
                          path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                          path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                          path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                      }
                      span { (SITE_NAME) }
                  }
                  nav {
                      ul {
                          li { a href="/" { "Home" } }
                          li { a href="/properties" { "Properties" } }
                          li { a href="/user-dashboard" { "Dashboard" } }
                      }
                  }
              }
                (content)
              footer class="site-footer" {
                  p { "© " (SITE_NAME) }
              }
            }
        }
    }
}
