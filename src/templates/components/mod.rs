use maud::{html, Markup};

pub mod filters;
pub mod hero_search;
pub mod market_trends;
pub mod property_card;
pub mod testimonials;
pub mod top_bar;

pub use filters::filter_panel;
pub use hero_search::hero_search;
pub use market_trends::market_trends;
pub use property_card::property_card;
pub use testimonials::{testimonial_slide, testimonials_section};
pub use top_bar::top_bar;

pub fn button(label: &str) -> Markup {
    html! {
        button class="btn" { (label) }
    }
}

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h3 class="card-title" { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Word with a gold underline accent, used in section headings.
pub fn accent(text: &str) -> Markup {
    html! {
        span class="accent" { (text) }
    }
}
