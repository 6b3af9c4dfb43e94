use crate::domain::format::{format_price, with_commas};
use crate::domain::property::{ListingStatus, PropertyRecord};
use maud::{html, Markup};

/// "1 Bed", "3 Beds", "0 Beds".
pub fn count_label(n: u32, singular: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {singular}s")
    }
}

fn status_class(status: ListingStatus) -> &'static str {
    match status {
        ListingStatus::ForSale => "badge badge-sale",
        ListingStatus::ForRent => "badge badge-rent",
        ListingStatus::Sold => "badge badge-sold",
    }
}

pub fn property_card(p: &PropertyRecord) -> Markup {
    let href = format!("/properties/{}", p.id);

    html! {
        article class="property-card" {
            a href=(href) class="property-card-image" {
                img src=(p.primary_image()) alt=(p.title) loading="lazy";
                span class=(status_class(p.status)) { (p.status.label()) }
            }
            div class="property-card-body" {
                h3 { a href=(href) { (p.title) } }
                p class="location" { (p.location_label()) }
                p class="price" { (format_price(p.price)) }
                ul class="facts" {
                    li { (count_label(p.bedrooms_or_zero(), "Bed")) }
                    li { (count_label(p.bathrooms_or_zero(), "Bath")) }
                    @if let Some(sqft) = p.square_feet {
                        li { (with_commas(u64::from(sqft))) " sqft" }
                    }
                }
            }
        }
    }
}
