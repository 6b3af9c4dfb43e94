// src/domain/ui_state.rs

//! View-local state for the pieces of the site that toggle or step.
//! Each value is rebuilt from the request URL and discarded after rendering.

use crate::domain::query::RawParams;
use url::form_urlencoded;

/// Active slide of a wrapping carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Out-of-range indexes wrap around.
    pub fn at(index: usize, len: usize) -> Self {
        let index = if len == 0 { 0 } else { index % len };
        Self { index, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        let index = if self.index == 0 {
            self.len - 1
        } else {
            self.index - 1
        };
        Self { index, ..self }
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        let index = if self.index == self.len - 1 {
            0
        } else {
            self.index + 1
        };
        Self { index, ..self }
    }

    /// Ignores indexes past the end.
    pub fn go_to(self, index: usize) -> Self {
        if index < self.len {
            Self { index, ..self }
        } else {
            self
        }
    }
}

/// Dashboard chrome toggles, carried in the dashboard URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardChrome {
    pub dark_mode: bool,
    pub sidebar_open: bool,
    pub search_open: bool,
}

impl Default for DashboardChrome {
    fn default() -> Self {
        Self {
            dark_mode: false,
            sidebar_open: true,
            search_open: false,
        }
    }
}

impl DashboardChrome {
    pub fn from_params(raw: &RawParams) -> Self {
        let defaults = Self::default();
        Self {
            dark_mode: raw.get("theme") == Some("dark"),
            sidebar_open: match raw.get("sidebar") {
                Some("closed") => false,
                Some("open") => true,
                _ => defaults.sidebar_open,
            },
            search_open: raw.get("search") == Some("open"),
        }
    }

    pub fn toggle_dark_mode(self) -> Self {
        Self {
            dark_mode: !self.dark_mode,
            ..self
        }
    }

    pub fn toggle_sidebar(self) -> Self {
        Self {
            sidebar_open: !self.sidebar_open,
            ..self
        }
    }

    pub fn toggle_search(self) -> Self {
        Self {
            search_open: !self.search_open,
            ..self
        }
    }

    pub fn to_query(self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        ser.append_pair("theme", if self.dark_mode { "dark" } else { "light" });
        ser.append_pair("sidebar", if self.sidebar_open { "open" } else { "closed" });
        if self.search_open {
            ser.append_pair("search", "open");
        }
        ser.finish()
    }
}

/// What the identity provider knows about the signed-in person.
#[derive(Debug, Clone, Default)]
pub struct UserProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub name: String,
    pub email: String,
    pub image: Option<String>,
}

impl UserInfo {
    pub fn from_profile(profile: Option<&UserProfile>) -> Self {
        let email = profile.and_then(|p| non_blank(p.email.as_deref()));

        let name = match profile.and_then(|p| non_blank(p.first_name.as_deref())) {
            Some(first) => {
                let last = profile
                    .and_then(|p| non_blank(p.last_name.as_deref()))
                    .unwrap_or("");
                format!("{first} {last}").trim_end().to_string()
            }
            None => email
                .and_then(|e| e.split('@').next())
                .filter(|local| !local.is_empty())
                .unwrap_or("User")
                .to_string(),
        };

        Self {
            name,
            email: email.unwrap_or("user@example.com").to_string(),
            image: profile.and_then(|p| non_blank(p.avatar_url.as_deref()).map(str::to_string)),
        }
    }

    /// Avatar fallback: first two characters of the display name.
    pub fn initials(&self) -> String {
        self.name.chars().take(2).collect()
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
