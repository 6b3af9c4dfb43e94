// src/domain/sales.rs

//! Figures behind the admin sales-analytics page. Summary cards are derived
//! from the series rather than stored alongside them.

/// One bucket of a sales series (a day, a month or a year).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalesPoint {
    pub label: &'static str,
    pub sales: u32,
    /// Total sale value in whole dollars.
    pub value: u64,
}

/// One slice of a categorical breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub name: &'static str,
    pub value: u32,
    pub fill: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SalesTab {
    #[default]
    Overview,
    Daily,
    Monthly,
    Yearly,
    PropertyType,
    Location,
    PriceRange,
}

impl SalesTab {
    pub const ALL: [SalesTab; 7] = [
        SalesTab::Overview,
        SalesTab::Daily,
        SalesTab::Monthly,
        SalesTab::Yearly,
        SalesTab::PropertyType,
        SalesTab::Location,
        SalesTab::PriceRange,
    ];

    /// Unknown tabs fall back to the overview.
    pub fn from_param(s: &str) -> Self {
        SalesTab::ALL
            .into_iter()
            .find(|t| t.slug() == s)
            .unwrap_or_default()
    }

    pub fn slug(self) -> &'static str {
        match self {
            SalesTab::Overview => "overview",
            SalesTab::Daily => "daily",
            SalesTab::Monthly => "monthly",
            SalesTab::Yearly => "yearly",
            SalesTab::PropertyType => "property-type",
            SalesTab::Location => "location",
            SalesTab::PriceRange => "price-range",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SalesTab::Overview => "Overview",
            SalesTab::Daily => "Daily",
            SalesTab::Monthly => "Monthly",
            SalesTab::Yearly => "Yearly",
            SalesTab::PropertyType => "Property Type",
            SalesTab::Location => "Location",
            SalesTab::PriceRange => "Price Range",
        }
    }
}

/// `value` as a whole percentage of `max`, for bar widths.
pub fn bar_width(value: u64, max: u64) -> u32 {
    if max == 0 {
        return 0;
    }
    ((value as f64 / max as f64) * 100.0).round().min(100.0) as u32
}

pub fn max_sales(points: &[SalesPoint]) -> u32 {
    points.iter().map(|p| p.sales).max().unwrap_or(0)
}

/// Highest sales count; the earliest bucket wins a tie.
pub fn best(points: &[SalesPoint]) -> Option<&SalesPoint> {
    points
        .iter()
        .fold(None, |best: Option<&SalesPoint>, p| match best {
            Some(b) if b.sales >= p.sales => Some(b),
            _ => Some(p),
        })
}

/// Percentage change from `prev` to `cur`; `None` when `prev` is zero.
pub fn pct_change(prev: f64, cur: f64) -> Option<f64> {
    if prev == 0.0 {
        None
    } else {
        Some((cur - prev) / prev * 100.0)
    }
}

pub fn average_price(point: &SalesPoint) -> u64 {
    if point.sales == 0 {
        0
    } else {
        (point.value as f64 / point.sales as f64).round() as u64
    }
}

/// Latest year against the one before it.
#[derive(Debug, Clone, PartialEq)]
pub struct YearSummary {
    pub current: SalesPoint,
    pub previous: Option<SalesPoint>,
    pub average_price: u64,
    pub sales_change: Option<f64>,
    pub revenue_change: Option<f64>,
    pub average_price_change: Option<f64>,
    /// Compound annual growth of the sales count across the whole series.
    pub growth_rate: Option<f64>,
}

pub fn year_summary(years: &[SalesPoint]) -> Option<YearSummary> {
    let current = *years.last()?;
    let previous = years.len().checked_sub(2).map(|i| years[i]);

    let change = |f: fn(&SalesPoint) -> f64| previous.and_then(|p| pct_change(f(&p), f(&current)));

    Some(YearSummary {
        current,
        previous,
        average_price: average_price(&current),
        sales_change: change(|p| p.sales as f64),
        revenue_change: change(|p| p.value as f64),
        average_price_change: change(|p| average_price(p) as f64),
        growth_rate: compound_growth(years),
    })
}

fn compound_growth(years: &[SalesPoint]) -> Option<f64> {
    let first = years.first()?;
    let last = years.last()?;
    let periods = years.len().checked_sub(1).filter(|n| *n > 0)? as f64;
    if first.sales == 0 {
        return None;
    }
    Some(((last.sales as f64 / first.sales as f64).powf(1.0 / periods) - 1.0) * 100.0)
}

/// A bucket compared with the one immediately before it.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSummary {
    pub current: SalesPoint,
    pub previous: Option<SalesPoint>,
    pub best: Option<SalesPoint>,
    pub revenue_change: Option<f64>,
}

impl PeriodSummary {
    pub fn sales_delta(&self) -> Option<i64> {
        self.previous
            .map(|p| self.current.sales as i64 - p.sales as i64)
    }
}

/// `current` is clamped into the series.
pub fn period_summary(points: &[SalesPoint], current: usize) -> Option<PeriodSummary> {
    if points.is_empty() {
        return None;
    }
    let idx = current.min(points.len() - 1);
    let cur = points[idx];
    let previous = idx.checked_sub(1).map(|i| points[i]);

    Some(PeriodSummary {
        current: cur,
        previous,
        best: best(points).copied(),
        revenue_change: previous.and_then(|p| pct_change(p.value as f64, cur.value as f64)),
    })
}

/// Each slice paired with its whole-number share of the total.
pub fn shares(slices: &[Slice]) -> Vec<(Slice, u32)> {
    let total: u32 = slices.iter().map(|s| s.value).sum();
    slices
        .iter()
        .map(|s| {
            let pct = if total == 0 {
                0
            } else {
                (s.value as f64 / total as f64 * 100.0).round() as u32
            };
            (*s, pct)
        })
        .collect()
}
