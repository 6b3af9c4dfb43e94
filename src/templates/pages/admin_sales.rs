// templates/pages/admin_sales.rs

use crate::data::{
    DAILY_SALES, MONTHLY_SALES, SALES_BY_LOCATION, SALES_BY_PRICE_RANGE, SALES_BY_TYPE,
    YEARLY_SALES,
};
use crate::domain::format::{format_change, format_compact, format_price};
use crate::domain::notifications::Role;
use crate::domain::sales::{
    bar_width, max_sales, period_summary, shares, year_summary, SalesPoint, SalesTab, Slice,
};
use crate::domain::ui_state::{DashboardChrome, UserInfo};
use crate::templates::{card, dashboard_layout};
use chrono::{Datelike, NaiveDate};
use maud::{html, Markup};

const SALES_PATH: &str = "/admin-dashboard/sales";

fn tab_href(tab: SalesTab, chrome: DashboardChrome) -> String {
    format!("{SALES_PATH}?tab={}&{}", tab.slug(), chrome.to_query())
}

fn change_text(change: Option<f64>) -> String {
    change.map_or_else(|| "n/a".to_string(), format_change)
}

fn stat_card(title: &str, value: String, note: String) -> Markup {
    card(
        title,
        html! {
            p class="stat" { (value) }
            p class="muted" { (note) }
        },
    )
}

fn series_table(points: &[SalesPoint]) -> Markup {
    let max = u64::from(max_sales(points));

    html! {
        table class="sales-table" {
            thead {
                tr { th { "Period" } th { "Sales" } th {} th { "Value" } }
            }
            tbody {
                @for p in points {
                    tr {
                        td { (p.label) }
                        td { (p.sales) }
                        td class="bar-cell" {
                            div class="bar" style=(format!("width: {}%", bar_width(u64::from(p.sales), max))) {}
                        }
                        td { (format_compact(p.value)) }
                    }
                }
            }
        }
    }
}

fn breakdown(title: &str, slices: &[Slice]) -> Markup {
    html! {
        section class="breakdown" {
            h2 { (title) }
            ul class="slices" {
                @for (slice, pct) in shares(slices) {
                    li {
                        span class="swatch" style=(format!("background: {}", slice.fill)) {}
                        span class="slice-name" { (slice.name) }
                        div class="bar" style=(format!("width: {pct}%; background: {}", slice.fill)) {}
                        span class="slice-pct" { (pct) "%" }
                    }
                }
            }
        }
    }
}

fn yearly_cards() -> Markup {
    let Some(year) = year_summary(&YEARLY_SALES) else {
        return html! {};
    };

    html! {
        div class="grid grid-3 stats" {
            (stat_card(
                "Total Sales",
                year.current.sales.to_string(),
                format!("{} vs last year", change_text(year.sales_change)),
            ))
            (stat_card(
                "Total Revenue",
                format_compact(year.current.value),
                format!("{} vs last year", change_text(year.revenue_change)),
            ))
            (stat_card(
                "Average Sale Price",
                format_price(year.average_price),
                format!("{} vs last year", change_text(year.average_price_change)),
            ))
        }
        div class="grid grid-2 stats" {
            (stat_card(
                "Year-over-Year",
                change_text(year.revenue_change),
                format!("{} revenue", year.current.label),
            ))
            (stat_card(
                "Growth Rate",
                change_text(year.growth_rate),
                "Average annual growth in sales".to_string(),
            ))
        }
    }
}

fn period_cards(points: &[SalesPoint], current: usize, unit: &str) -> Markup {
    let Some(s) = period_summary(points, current) else {
        return html! {};
    };
    let delta = s
        .sales_delta()
        .map_or_else(|| "first period".to_string(), |d| format!("{d:+} sales vs previous {unit}"));

    html! {
        div class="grid grid-3 stats" {
            (stat_card(
                &format!("Current {unit}"),
                format!("{} sales", s.current.sales),
                format!("{} ({})", s.current.label, delta),
            ))
            @if let Some(best) = s.best {
                (stat_card(
                    &format!("Best {unit}"),
                    best.label.to_string(),
                    format!("{} sales, {}", best.sales, format_compact(best.value)),
                ))
            }
            (stat_card(
                "Revenue Change",
                change_text(s.revenue_change),
                format!("{} vs previous {unit}", format_compact(s.current.value)),
            ))
        }
    }
}

/// Sales analytics for the admin dashboard. `today` picks the current day
/// and month out of the fixed series.
pub fn admin_sales_page(
    tab: SalesTab,
    chrome: DashboardChrome,
    user: &UserInfo,
    today: NaiveDate,
) -> Markup {
    let day_idx = today.weekday().num_days_from_monday() as usize;
    let month_idx = today.month0() as usize;
    let href_for = move |c: DashboardChrome| tab_href(tab, c);

    dashboard_layout(
        "Sales Analytics",
        Role::Admin,
        chrome,
        user,
        &href_for,
        html! {
            h1 { "Sales Analytics" }

            nav class="tabs" {
                @for t in SalesTab::ALL {
                    a class=(if t == tab { "tab active" } else { "tab" }) href=(tab_href(t, chrome)) {
                        (t.label())
                    }
                }
            }

            @match tab {
                SalesTab::Overview => {
                    (yearly_cards())
                    (period_cards(&MONTHLY_SALES, month_idx, "Month"))
                    h2 { "Monthly Sales" }
                    (series_table(&MONTHLY_SALES))
                },
                SalesTab::Daily => {
                    (period_cards(&DAILY_SALES, day_idx, "Day"))
                    h2 { "Daily Sales" }
                    (series_table(&DAILY_SALES))
                },
                SalesTab::Monthly => {
                    (period_cards(&MONTHLY_SALES, month_idx, "Month"))
                    h2 { "Monthly Sales" }
                    (series_table(&MONTHLY_SALES))
                },
                SalesTab::Yearly => {
                    (yearly_cards())
                    h2 { "Yearly Sales" }
                    (series_table(&YEARLY_SALES))
                },
                SalesTab::PropertyType => (breakdown("Sales by Property Type", &SALES_BY_TYPE)),
                SalesTab::Location => (breakdown("Sales by Location", &SALES_BY_LOCATION)),
                SalesTab::PriceRange => (breakdown("Sales by Price Range", &SALES_BY_PRICE_RANGE)),
            }
        },
    )
}
