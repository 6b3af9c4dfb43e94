use crate::domain::paging::Page;
use crate::domain::property::PropertyRecord;
use crate::domain::query::{ListingParams, ListingView, SortKey};
use crate::templates::components::{filter_panel, property_card};
use crate::templates::desktop_layout;
use maud::{html, Markup};

fn listings_href(params: &ListingParams) -> String {
    format!("/properties?{}", params.to_query())
}

fn showing_label(count: usize) -> String {
    if count == 1 {
        "Showing 1 property".to_string()
    } else {
        format!("Showing {count} properties")
    }
}

fn pagination(params: &ListingParams, page: &Page<&PropertyRecord>) -> Markup {
    html! {
        @if page.total_pages > 1 {
            nav class="pagination" aria-label="Pagination" {
                @if page.has_prev() {
                    a class="page-link" href=(listings_href(&params.with_page(page.page - 1))) { "Previous" }
                }
                @for n in 1..=page.total_pages {
                    @if n == page.page {
                        span class="page-link current" aria-current="page" { (n) }
                    } @else {
                        a class="page-link" href=(listings_href(&params.with_page(n))) { (n) }
                    }
                }
                @if page.has_next() {
                    a class="page-link" href=(listings_href(&params.with_page(page.page + 1))) { "Next" }
                }
            }
        }
    }
}

/// Browse page. `page` holds the filtered, sorted records for the current
/// page; `total_items` is the full match count.
pub fn listings_page(params: &ListingParams, page: &Page<&PropertyRecord>) -> Markup {
    let view_class = match params.view {
        ListingView::Grid => "grid grid-3",
        ListingView::List => "list",
    };

    desktop_layout(
        "Properties",
        "Browse homes, apartments and land for sale and rent.",
        html! {
            main class="container listings" {
                h1 { "Properties" }

                div class="listings-layout" {
                    aside { (filter_panel(params)) }

                    section {
                        div class="listings-toolbar" {
                            p class="result-count" { (showing_label(page.total_items)) }

                            @if let Some(label) = &params.price_label {
                                p class="notice" {
                                    "Price range \u{201c}" (label) "\u{201d} is not applied. "
                                    "Use the min and max price filters to narrow by price."
                                }
                            }

                            form action="/properties" method="get" class="sort-form" {
                                @for (key, value) in url::form_urlencoded::parse(params.with_page(1).to_query().as_bytes()) {
                                    @if key != "sort" {
                                        input type="hidden" name=(&*key) value=(&*value);
                                    }
                                }
                                label {
                                    "Sort by "
                                    select name="sort" onchange="this.form.submit()" {
                                        @for (key, label) in SortKey::CHOICES {
                                            option value=(key.as_param()) selected[params.sort == key] { (label) }
                                        }
                                    }
                                }
                                noscript { button type="submit" class="btn" { "Sort" } }
                            }

                            div class="view-toggle" {
                                a class=(if params.view == ListingView::Grid { "icon-btn active" } else { "icon-btn" })
                                    href=(listings_href(&params.with_view(ListingView::Grid))) { "Grid" }
                                a class=(if params.view == ListingView::List { "icon-btn active" } else { "icon-btn" })
                                    href=(listings_href(&params.with_view(ListingView::List))) { "List" }
                            }

                            a class="btn btn-outline"
                                href=(format!("/properties/export.xlsx?{}", params.to_query())) {
                                "Export XLSX"
                            }
                        }

                        @if page.items.is_empty() {
                            div class="empty-state" {
                                h2 { "No properties found" }
                                p { "Try adjusting your filters to see more results." }
                                a class="btn" href="/properties" { "Clear filters" }
                            }
                        } @else {
                            div class=(view_class) {
                                @for p in &page.items {
                                    (property_card(p))
                                }
                            }
                            (pagination(params, page))
                        }
                    }
                }
            }
        },
    )
}
