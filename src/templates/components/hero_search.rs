use crate::data::{POPULAR_SEARCHES, PRICE_RANGE_LABELS};
use crate::domain::property::PropertyType;
use maud::{html, Markup};
use url::form_urlencoded;

fn listings_href(key: &str, value: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(key, value)
        .finish();
    format!("/properties?{query}")
}

/// Location / type / price search that lands on the listings page.
pub fn hero_search() -> Markup {
    html! {
        section class="hero" {
            div class="hero-inner" {
                h1 { "Find Your Dream Home in Nigeria" }
                p class="lead" {
                    "Discover premium properties in Enugu, Calabar, and across Nigeria."
                }

                form class="hero-search" action="/properties" method="get" {
                    label {
                        span class="sr-only" { "Location" }
                        input type="text" name="location" placeholder="City, neighborhood, or address";
                    }
                    label {
                        span class="sr-only" { "Property type" }
                        select name="type" {
                            option value="" { "Property Type" }
                            @for kind in PropertyType::ALL {
                                option value=(kind.label()) { (kind.label()) }
                            }
                        }
                    }
                    label {
                        span class="sr-only" { "Price range" }
                        select name="price" {
                            option value="" { "Price Range" }
                            @for label in PRICE_RANGE_LABELS {
                                option value=(label) { (label) }
                            }
                        }
                    }
                    button type="submit" class="btn btn-primary" { "Search" }
                }

                div class="popular-searches" {
                    span { "Popular:" }
                    @for place in POPULAR_SEARCHES {
                        a class="chip" href=(listings_href("location", place)) { (place) }
                    }
                }

                div class="quick-links" {
                    a class="btn" href=(listings_href("status", "For Sale")) { "Buy" }
                    a class="btn btn-outline" href=(listings_href("status", "For Rent")) { "Rent" }
                }
            }
        }
    }
}
