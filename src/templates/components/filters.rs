use crate::data::AMENITIES;
use crate::domain::property::{ListingStatus, PropertyType};
use crate::domain::query::ListingParams;
use maud::{html, Markup};

const ROOM_MINIMUMS: [u32; 5] = [1, 2, 3, 4, 5];

/// Sidebar form for the listings page. Submitting resets to page one and
/// keeps the current sort and view.
pub fn filter_panel(params: &ListingParams) -> Markup {
    let c = &params.criteria;
    let (min_price, max_price) = match c.price_range {
        Some(r) => (
            (r.min > 0).then_some(r.min),
            (r.max < u64::MAX).then_some(r.max),
        ),
        None => (None, None),
    };

    html! {
        form class="filter-panel" action="/properties" method="get" {
            input type="hidden" name="sort" value=(params.sort.as_param());
            input type="hidden" name="view" value=(params.view.as_param());

            fieldset {
                legend { "Location" }
                input type="text" name="location" placeholder="City, state or ZIP"
                    value=[c.search_term.as_deref()];
            }

            fieldset {
                legend { "Property Type" }
                @for kind in PropertyType::ALL {
                    label class="check" {
                        input type="checkbox" name="type" value=(kind.label())
                            checked[c.property_types.contains(&kind)];
                        (kind.label())
                    }
                }
            }

            fieldset {
                legend { "Status" }
                select name="status" {
                    option value="" { "Any" }
                    @for status in ListingStatus::ALL {
                        option value=(status.label()) selected[c.status == Some(status)] {
                            (status.label())
                        }
                    }
                }
            }

            fieldset {
                legend { "Price" }
                input type="number" name="min_price" min="0" placeholder="Min"
                    value=[min_price];
                input type="number" name="max_price" min="0" placeholder="Max"
                    value=[max_price];
            }

            fieldset {
                legend { "Bedrooms" }
                select name="beds" {
                    option value="" { "Any" }
                    @for n in ROOM_MINIMUMS {
                        option value=(n) selected[c.bedrooms == Some(n)] { (n) "+" }
                    }
                }
            }

            fieldset {
                legend { "Bathrooms" }
                select name="baths" {
                    option value="" { "Any" }
                    @for n in ROOM_MINIMUMS {
                        option value=(n) selected[c.bathrooms == Some(n)] { (n) "+" }
                    }
                }
            }

            fieldset {
                legend { "Amenities" }
                @for tag in AMENITIES {
                    label class="check" {
                        input type="checkbox" name="amenity" value=(tag)
                            checked[c.amenities.contains(tag)];
                        (tag)
                    }
                }
            }

            button type="submit" class="btn btn-primary" { "Apply Filters" }
            a class="btn btn-outline" href="/properties" { "Reset" }
        }
    }
}
