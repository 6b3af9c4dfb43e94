// src/domain/market.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn icon(self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Stable => "●",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Trend::Up => "trend-up",
            Trend::Down => "trend-down",
            Trend::Stable => "trend-stable",
        }
    }
}

#[derive(Debug, Clone)]
pub struct MarketTrend {
    pub id: u32,
    pub title: &'static str,
    /// Pre-formatted headline figure, e.g. "+5.2%".
    pub value: &'static str,
    pub description: &'static str,
    pub trend: Trend,
}
