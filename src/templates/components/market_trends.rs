use crate::data::MARKET_TRENDS;
use crate::templates::components::button;
use maud::{html, Markup};

pub fn market_trends() -> Markup {
    html! {
        section class="market-trends" {
            h2 { "Market Trends" }
            p class="muted" { "Stay informed with the latest real estate market insights." }
            div class="grid grid-4" {
                @for trend in &MARKET_TRENDS {
                    div class="trend-card" {
                        div class="trend-head" {
                            h3 { (trend.title) }
                            span class=(trend.trend.css_class()) { (trend.trend.icon()) }
                        }
                        p class="trend-value" { (trend.value) }
                        p class="muted" { (trend.description) }
                    }
                }
            }
            div class="centered" {
                (button("View Full Market Report"))
            }
        }
    }
}
