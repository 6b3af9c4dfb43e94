use crate::domain::notifications::Role;
use crate::domain::ui_state::{DashboardChrome, UserInfo};
use crate::templates::{card, dashboard_layout};
use maud::{html, Markup};
use std::str::FromStr;

/// Pages behind the top-bar user menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountSection {
    Profile,
    Settings,
}

impl AccountSection {
    pub fn slug(self) -> &'static str {
        match self {
            AccountSection::Profile => "profile",
            AccountSection::Settings => "settings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AccountSection::Profile => "Profile",
            AccountSection::Settings => "Settings",
        }
    }
}

impl FromStr for AccountSection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "profile" => Ok(AccountSection::Profile),
            "settings" => Ok(AccountSection::Settings),
            other => Err(format!("unknown account section: {other}")),
        }
    }
}

pub fn account_page(
    role: Role,
    section: AccountSection,
    chrome: DashboardChrome,
    user: &UserInfo,
) -> Markup {
    let path = format!("{}/{}", role.dashboard_path(), section.slug());
    let href_for = |c: DashboardChrome| format!("{path}?{}", c.to_query());

    dashboard_layout(
        section.label(),
        role,
        chrome,
        user,
        &href_for,
        html! {
            h1 { (section.label()) }
            @match section {
                AccountSection::Profile => {
                    (card("Your details", html! {
                        dl class="details" {
                            dt { "Name" } dd { (user.name) }
                            dt { "Email" } dd { (user.email) }
                            dt { "Initials" } dd { (user.initials()) }
                            dt { "Role" } dd { (role.slug()) }
                        }
                    }))
                },
                AccountSection::Settings => {
                    (card("Appearance", html! {
                        p {
                            "Theme: " strong { @if chrome.dark_mode { "Dark" } @else { "Light" } }
                        }
                        a class="btn" href=(href_for(chrome.toggle_dark_mode())) { "Switch theme" }
                    }))
                    (card("Layout", html! {
                        p {
                            "Sidebar: " strong { @if chrome.sidebar_open { "Shown" } @else { "Hidden" } }
                        }
                        a class="btn btn-outline" href=(href_for(chrome.toggle_sidebar())) { "Toggle sidebar" }
                    }))
                },
            }
        },
    )
}
