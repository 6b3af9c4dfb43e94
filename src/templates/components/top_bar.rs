use crate::domain::notifications::{notifications_for, Role};
use crate::domain::ui_state::{DashboardChrome, UserInfo};
use maud::{html, Markup};

const UNREAD_MESSAGES: u32 = 5;

pub fn top_bar(
    role: Role,
    chrome: DashboardChrome,
    user: &UserInfo,
    href_for: &dyn Fn(DashboardChrome) -> String,
) -> Markup {
    let base = role.dashboard_path();
    let notifications = notifications_for(role);

    html! {
        div class="top-bar" {
            a class="icon-btn mobile-only" href=(href_for(chrome.toggle_sidebar())) {
                "☰"
                span class="sr-only" { "Toggle menu" }
            }

            a class="brand mobile-only" href=(base) {
                span class="brand-mark" { "HP" }
                span { "HOMEPULSE" }
            }

            form class="top-search desktop-only" action="/properties" method="get" {
                input type="search" name="location" placeholder="Search...";
            }

            a class="icon-btn mobile-only" href=(href_for(chrome.toggle_search())) {
                "🔍"
                span class="sr-only" { "Toggle search" }
            }

            @if chrome.search_open {
                div class="mobile-search mobile-only" {
                    form action="/properties" method="get" {
                        input type="search" name="location" placeholder="Search..." autofocus;
                    }
                }
            }

            div class="top-actions" {
                details class="notifications" {
                    summary class="icon-btn" {
                        "🔔"
                        span class="badge" { (notifications.len()) }
                        span class="sr-only" { "Notifications" }
                    }
                    ul class="dropdown" {
                        @for n in &notifications {
                            li class=(format!("notification {}", n.kind.tint_class())) {
                                span class="notification-icon" { (n.kind.icon()) }
                                div {
                                    p class="notification-title" { (n.title) }
                                    p class="notification-message" { (n.message) }
                                    p class="notification-time" { (n.time) }
                                }
                            }
                        }
                    }
                }

                span class="icon-btn desktop-only" {
                    "💬"
                    span class="badge badge-success" { (UNREAD_MESSAGES) }
                    span class="sr-only" { "Messages" }
                }

                a class="icon-btn theme-toggle" href=(href_for(chrome.toggle_dark_mode())) {
                    @if chrome.dark_mode { "☀" } @else { "☾" }
                    span class="sr-only" { "Toggle theme" }
                }

                details class="user-menu" {
                    summary class="avatar" {
                        @if let Some(src) = &user.image {
                            img src=(src) alt=(user.name);
                        } @else {
                            span class="avatar-fallback" { (user.initials()) }
                        }
                    }
                    div class="dropdown" {
                        div class="user-label" {
                            p class="user-name" { (user.name) }
                            p class="user-email" { (user.email) }
                        }
                        hr;
                        a href=(format!("{base}/profile")) { "Profile" }
                        a href=(format!("{base}/settings")) { "Settings" }
                        hr;
                        a class="destructive" href="/" { "Log out" }
                    }
                }
            }
        }
    }
}
