use crate::domain::format::{format_price, with_commas};
use crate::domain::property::PropertyRecord;
use crate::templates::components::property_card::count_label;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn property_page(p: &PropertyRecord) -> Markup {
    let description = p.description.as_deref().unwrap_or("");

    desktop_layout(
        &p.title,
        description,
        html! {
            main class="container property-detail" {
                a class="back-link" href="/properties" { "‹ Back to listings" }

                div class="gallery" {
                    img class="gallery-main" src=(p.primary_image()) alt=(p.title);
                    @for src in p.images.iter().skip(1) {
                        img class="gallery-thumb" src=(src) alt=(p.title) loading="lazy";
                    }
                }

                div class="detail-head" {
                    div {
                        h1 { (p.title) }
                        p class="location" {
                            @if !p.address.street.is_empty() {
                                (p.address.street) ", "
                            }
                            (p.location_label()) " " (p.address.zip_code)
                        }
                    }
                    div class="detail-price" {
                        span class="badge" { (p.status.label()) }
                        p class="price" { (format_price(p.price)) }
                    }
                }

                ul class="facts" {
                    li { (p.property_type.label()) }
                    li { (count_label(p.bedrooms_or_zero(), "Bed")) }
                    li { (count_label(p.bathrooms_or_zero(), "Bath")) }
                    @if let Some(sqft) = p.square_feet {
                        li { (with_commas(u64::from(sqft))) " sqft" }
                    }
                    li { "Listed " (p.created_at.format("%b %-d, %Y").to_string()) }
                }

                @if let Some(text) = &p.description {
                    section {
                        h2 { "About this property" }
                        p { (text) }
                    }
                }

                @if !p.amenities.is_empty() {
                    section {
                        h2 { "Amenities" }
                        ul class="amenities" {
                            @for tag in &p.amenities {
                                li class="chip" { (tag) }
                            }
                        }
                    }
                }
            }
        },
    )
}
