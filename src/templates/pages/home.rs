// templates/pages/home.rs

use crate::data::LOCATIONS;
use crate::domain::property::PropertyRecord;
use crate::domain::ui_state::Carousel;
use crate::templates::{
    components::{accent, hero_search, market_trends, property_card, testimonials_section},
    desktop_layout,
};
use maud::{html, Markup};
use url::form_urlencoded;

/// Landing page. `featured` is already ordered and capped by the caller.
pub fn home_page(featured: &[&PropertyRecord], testimonials: Carousel) -> Markup {
    desktop_layout(
        "Home",
        "Find your dream home in Enugu, Calabar, Lagos and across Nigeria.",
        html! {
            (hero_search())

            section class="container locations" {
                h2 { "Explore Prime " (accent("Locations")) }
                div class="grid grid-3" {
                    @for loc in &LOCATIONS {
                        @let query = form_urlencoded::Serializer::new(String::new())
                            .append_pair("location", loc.name)
                            .finish();
                        a class="location-card" href=(format!("/properties?{query}")) {
                            img src=(loc.image) alt=(loc.name) loading="lazy";
                            div class="location-body" {
                                h3 { (loc.name) }
                                p { (loc.blurb) }
                                div class="location-meta" {
                                    span { (loc.listings) }
                                    span { (loc.from_price) }
                                }
                            }
                        }
                    }
                }
            }

            section class="container featured" {
                div class="section-head" {
                    h2 { "Featured " (accent("Properties")) }
                    a href="/properties" { "View all" }
                }
                @if featured.is_empty() {
                    p class="muted" { "No featured properties right now." }
                } @else {
                    div class="grid grid-3" {
                        @for p in featured {
                            (property_card(p))
                        }
                    }
                }
            }

            div class="container" {
                (market_trends())
                (testimonials_section(testimonials))
            }
        },
    )
}
