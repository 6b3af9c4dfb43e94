use crate::data::SITE_NAME;
use crate::domain::notifications::Role;
use crate::domain::ui_state::{DashboardChrome, UserInfo};
use crate::templates::components::top_bar;
use crate::templates::layouts::desktop::HTMX_SRC;
use maud::{html, Markup, DOCTYPE};

/// `href_for` rebuilds the current page's URL for a given chrome state, so
/// the top-bar toggles land back on the same page.
pub fn dashboard_layout(
    title: &str,
    role: Role,
    chrome: DashboardChrome,
    user: &UserInfo,
    href_for: &dyn Fn(DashboardChrome) -> String,
    content: Markup,
) -> Markup {
    let base = role.dashboard_path();
    let body_class = if chrome.dark_mode { "dashboard dark" } else { "dashboard" };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (SITE_NAME) }
                link rel="stylesheet" href="/static/main.css";
                script src=(HTMX_SRC) defer {};
            }
            body class=(body_class) {
                @if chrome.sidebar_open {
                    aside class="sidebar" {
                        nav {
                            ul {
                                li { a href=(format!("{base}?{}", chrome.to_query())) { "Overview" } }
                                @if role == Role::Admin {
                                    li { a href=(format!("{base}/sales?{}", chrome.to_query())) { "Sales Analytics" } }
                                }
                                li { a href="/properties" { "Browse Properties" } }
                            }
                        }
                    }
                }
                div class="dashboard-main" {
                    (top_bar(role, chrome, user, href_for))
                    main class="container" {
                        (content)
                    }
                }
            }
        }
    }
}
