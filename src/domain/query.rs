// src/domain/query.rs

//! Filter and sort pipeline behind the listings page.
//!
//! Everything here is a pure function of its inputs: records are borrowed,
//! never mutated, and the output is a new vector of references into the
//! same collection.

use crate::domain::property::{ListingStatus, PropertyRecord, PropertyType};
use std::collections::BTreeSet;
use url::form_urlencoded;

/// Constraints narrowing the displayed records. Every field is optional;
/// `None` or an empty set means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_term: Option<String>,
    pub property_types: BTreeSet<PropertyType>,
    /// Inclusive minimum.
    pub bedrooms: Option<u32>,
    /// Inclusive minimum.
    pub bathrooms: Option<u32>,
    pub price_range: Option<PriceRange>,
    /// Any-match: a record needs at least one of these tags.
    pub amenities: BTreeSet<String>,
    pub status: Option<ListingStatus>,
}

/// Inclusive `[min, max]` price bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    /// Builds a range from optional bounds, swapping them if given reversed.
    pub fn from_bounds(min: Option<u64>, max: Option<u64>) -> Option<Self> {
        match (min, max) {
            (None, None) => None,
            (Some(a), Some(b)) => Some(Self {
                min: a.min(b),
                max: a.max(b),
            }),
            (Some(min), None) => Some(Self { min, max: u64::MAX }),
            (None, Some(max)) => Some(Self { min: 0, max }),
        }
    }

    pub fn contains(&self, price: u64) -> bool {
        self.min <= price && price <= self.max
    }
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        *self == FilterCriteria::default()
    }

    /// Each criterion is an independent predicate, so the order in which
    /// they are checked never changes the outcome.
    pub fn matches(&self, record: &PropertyRecord) -> bool {
        self.matches_search(record)
            && self.matches_type(record)
            && self.bedrooms.map_or(true, |min| record.bedrooms_or_zero() >= min)
            && self.bathrooms.map_or(true, |min| record.bathrooms_or_zero() >= min)
            && self.price_range.map_or(true, |r| r.contains(record.price))
            && (self.amenities.is_empty() || record.has_any_amenity(&self.amenities))
            && self.status.map_or(true, |s| record.status == s)
    }

    fn matches_search(&self, record: &PropertyRecord) -> bool {
        // Matched verbatim after lower-casing; only the empty string is absent.
        let term = match self.search_term.as_deref() {
            Some(t) if !t.is_empty() => t.to_lowercase(),
            _ => return true,
        };

        [
            record.address.city.as_str(),
            record.address.state.as_str(),
            record.address.zip_code.as_str(),
            record.title.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
    }

    fn matches_type(&self, record: &PropertyRecord) -> bool {
        self.property_types.is_empty() || self.property_types.contains(&record.property_type)
    }
}

/// Keeps the records satisfying every present criterion, in input order.
pub fn apply_filters<'a>(
    records: &'a [PropertyRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a PropertyRecord> {
    records.iter().filter(|r| criteria.matches(r)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    /// Leaves the input order untouched.
    Unsorted,
}

impl SortKey {
    pub const CHOICES: [(SortKey, &'static str); 3] = [
        (SortKey::Newest, "Newest First"),
        (SortKey::PriceAsc, "Price: Low to High"),
        (SortKey::PriceDesc, "Price: High to Low"),
    ];

    /// Unknown values map to `Unsorted` rather than failing.
    pub fn from_param(s: &str) -> Self {
        match s.trim() {
            "newest" => SortKey::Newest,
            "price_asc" => SortKey::PriceAsc,
            "price_desc" => SortKey::PriceDesc,
            _ => SortKey::Unsorted,
        }
    }

    pub fn as_param(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::Unsorted => "none",
        }
    }
}

/// Returns a reordered copy of `records`. `sort_by` is a stable merge sort,
/// so records comparing equal keep their relative order.
pub fn sort_records<'a>(records: &[&'a PropertyRecord], key: SortKey) -> Vec<&'a PropertyRecord> {
    let mut out = records.to_vec();
    match key {
        SortKey::Newest => out.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::PriceAsc => out.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => out.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Unsorted => {}
    }
    out
}

/// Filter then sort.
pub fn select<'a>(
    records: &'a [PropertyRecord],
    criteria: &FilterCriteria,
    key: SortKey,
) -> Vec<&'a PropertyRecord> {
    sort_records(&apply_filters(records, criteria), key)
}

/// Decoded query-string pairs, repeated keys kept in order.
#[derive(Debug, Clone, Default)]
pub struct RawParams(Vec<(String, String)>);

impl RawParams {
    pub fn from_query(query: &str) -> Self {
        Self(
            form_urlencoded::parse(query.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        )
    }

    /// First non-blank value for `key`, trimmed.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .find(|v| !v.is_empty())
    }

    /// First non-empty value for `key`, exactly as sent.
    pub fn get_verbatim(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .find(|v| !v.is_empty())
    }

    /// Every non-blank value for `key`, trimmed.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
    }

    fn parse<T: std::str::FromStr>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(|v| v.parse().ok())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Maps the hero-search contract (`location`, `type`, `price`) onto criteria.
///
/// `price` carries a bucket label whose numeric bounds are not defined, so it
/// never produces a `price_range`; see `ListingParams::price_label`.
pub fn parse_query_params(raw: &RawParams) -> FilterCriteria {
    let mut criteria = FilterCriteria::default();

    if let Some(location) = raw.get_verbatim("location") {
        criteria.search_term = Some(location.to_string());
    }
    if let Some(kind) = raw.get("type").and_then(|t| t.parse::<PropertyType>().ok()) {
        criteria.property_types.insert(kind);
    }

    criteria
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingView {
    #[default]
    Grid,
    List,
}

impl ListingView {
    pub fn as_param(self) -> &'static str {
        match self {
            ListingView::Grid => "grid",
            ListingView::List => "list",
        }
    }
}

/// Everything the listings page reads from its URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingParams {
    pub criteria: FilterCriteria,
    pub sort: SortKey,
    pub view: ListingView,
    /// 1-based.
    pub page: usize,
    /// Raw `price` bucket label from the hero search, shown but not applied.
    pub price_label: Option<String>,
}

impl Default for ListingParams {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            sort: SortKey::Newest,
            view: ListingView::Grid,
            page: 1,
            price_label: None,
        }
    }
}

/// Hero contract plus the filter-panel keys. Malformed values are dropped.
pub fn parse_listing_params(raw: &RawParams) -> ListingParams {
    let mut criteria = parse_query_params(raw);

    criteria.property_types.extend(
        raw.get_all("type")
            .filter_map(|t| t.parse::<PropertyType>().ok()),
    );
    criteria.bedrooms = raw.parse("beds");
    criteria.bathrooms = raw.parse("baths");
    criteria.price_range = PriceRange::from_bounds(raw.parse("min_price"), raw.parse("max_price"));
    criteria.amenities = raw.get_all("amenity").map(str::to_string).collect();
    criteria.status = raw.parse("status");

    let view = match raw.get("view") {
        Some("list") => ListingView::List,
        _ => ListingView::Grid,
    };

    ListingParams {
        criteria,
        sort: raw.get("sort").map_or(SortKey::Newest, SortKey::from_param),
        view,
        page: raw.parse::<usize>("page").filter(|p| *p > 0).unwrap_or(1),
        price_label: raw.get("price").map(str::to_string),
    }
}

impl ListingParams {
    /// Serializes back into the query string `parse_listing_params` reads.
    pub fn to_query(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        let c = &self.criteria;

        if let Some(term) = &c.search_term {
            ser.append_pair("location", term);
        }
        for kind in &c.property_types {
            ser.append_pair("type", kind.label());
        }
        if let Some(b) = c.bedrooms {
            ser.append_pair("beds", &b.to_string());
        }
        if let Some(b) = c.bathrooms {
            ser.append_pair("baths", &b.to_string());
        }
        if let Some(range) = c.price_range {
            if range.min > 0 {
                ser.append_pair("min_price", &range.min.to_string());
            }
            if range.max < u64::MAX {
                ser.append_pair("max_price", &range.max.to_string());
            }
        }
        for tag in &c.amenities {
            ser.append_pair("amenity", tag);
        }
        if let Some(status) = c.status {
            ser.append_pair("status", status.label());
        }
        if let Some(label) = &self.price_label {
            ser.append_pair("price", label);
        }
        ser.append_pair("sort", self.sort.as_param());
        ser.append_pair("view", self.view.as_param());
        if self.page > 1 {
            ser.append_pair("page", &self.page.to_string());
        }

        ser.finish()
    }

    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    pub fn with_view(&self, view: ListingView) -> Self {
        Self {
            view,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::property::Address;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn record(id: &str, price: u64, created: (i32, u32, u32)) -> PropertyRecord {
        let (y, m, d) = created;
        PropertyRecord {
            id: id.to_string(),
            title: format!("Listing {id}"),
            price,
            address: Address {
                street: "1 Test Way".to_string(),
                city: "Lagos".to_string(),
                state: "LA".to_string(),
                zip_code: "100001".to_string(),
            },
            property_type: PropertyType::House,
            status: ListingStatus::ForSale,
            bedrooms: Some(2),
            bathrooms: Some(1),
            square_feet: None,
            amenities: BTreeSet::new(),
            images: vec![],
            featured: false,
            description: None,
            created_at: Utc.from_utc_datetime(
                &NaiveDate::from_ymd_opt(y, m, d)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap(),
            ),
        }
    }

    fn ids(records: &[&PropertyRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    fn sample() -> Vec<PropertyRecord> {
        let mut a = record("a", 400_000, (2024, 1, 1));
        a.property_type = PropertyType::Condo;
        a.bedrooms = Some(1);
        a.amenities = ["pool".to_string()].into();

        let mut b = record("b", 700_000, (2024, 3, 1));
        b.bedrooms = Some(4);
        b.bathrooms = Some(3);
        b.amenities = ["garage".to_string(), "garden".to_string()].into();

        let mut c = record("c", 350_000, (2024, 2, 1));
        c.address.city = "Enugu".to_string();
        c.address.state = "EN".to_string();
        c.bedrooms = None;

        let mut d = record("d", 550_000, (2023, 12, 1));
        d.status = ListingStatus::ForRent;
        d.bedrooms = Some(3);

        vec![a, b, c, d]
    }

    #[test]
    fn empty_criteria_keeps_everything_in_order() {
        let records = sample();
        let out = apply_filters(&records, &FilterCriteria::default());
        assert_eq!(ids(&out), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn bedroom_minimum_partitions_records() {
        let records = sample();
        let criteria = FilterCriteria {
            bedrooms: Some(3),
            ..Default::default()
        };

        let out = apply_filters(&records, &criteria);
        assert_eq!(ids(&out), vec!["b", "d"]);

        for r in &records {
            let kept = out.iter().any(|o| o.id == r.id);
            assert_eq!(kept, r.bedrooms_or_zero() >= 3, "record {}", r.id);
        }
    }

    #[test]
    fn amenities_match_any_requested_tag() {
        let records = sample();
        let criteria = FilterCriteria {
            amenities: ["pool".to_string(), "garage".to_string()].into(),
            ..Default::default()
        };

        assert_eq!(ids(&apply_filters(&records, &criteria)), vec!["a", "b"]);
    }

    #[test]
    fn search_term_is_case_insensitive() {
        let records = sample();
        for term in ["ENUGU", "enugu", "EnUgU", "nug"] {
            let criteria = FilterCriteria {
                search_term: Some(term.to_string()),
                ..Default::default()
            };
            assert_eq!(ids(&apply_filters(&records, &criteria)), vec!["c"], "term {term}");
        }
    }

    #[test]
    fn search_term_matches_zip_and_title() {
        let records = sample();
        let by_zip = FilterCriteria {
            search_term: Some("10000".to_string()),
            ..Default::default()
        };
        assert_eq!(apply_filters(&records, &by_zip).len(), 4);

        let by_title = FilterCriteria {
            search_term: Some("listing b".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&records, &by_title)), vec!["b"]);
    }

    #[test]
    fn padded_search_term_is_matched_verbatim() {
        let records = sample();
        let padded = FilterCriteria {
            search_term: Some(" enugu".to_string()),
            ..Default::default()
        };
        assert!(apply_filters(&records, &padded).is_empty());
    }

    #[test]
    fn whitespace_search_term_is_a_substring() {
        let records = sample();
        let search = |term: &str| {
            let criteria = FilterCriteria {
                search_term: Some(term.to_string()),
                ..Default::default()
            };
            ids(&apply_filters(&records, &criteria))
        };

        // Every title is "Listing <id>", so one space matches all of them
        // and three spaces match none.
        assert_eq!(search(" "), vec!["a", "b", "c", "d"]);
        assert!(search("   ").is_empty());
        assert_eq!(search(""), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn type_and_price_combine() {
        let mut records = sample();
        records.push({
            let mut r = record("e", 700_000, (2024, 4, 1));
            r.property_type = PropertyType::House;
            r
        });

        let criteria = FilterCriteria {
            property_types: [PropertyType::House].into(),
            price_range: Some(PriceRange {
                min: 300_000,
                max: 600_000,
            }),
            ..Default::default()
        };

        let out = apply_filters(&records, &criteria);
        // "a" is a Condo at 400k, "b" and "e" are Houses above the range.
        assert_eq!(ids(&out), vec!["c", "d"]);
    }

    #[test]
    fn price_range_is_inclusive() {
        let records = sample();
        let criteria = FilterCriteria {
            price_range: Some(PriceRange {
                min: 350_000,
                max: 400_000,
            }),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&records, &criteria)), vec!["a", "c"]);
    }

    #[test]
    fn filters_commute() {
        let records = sample();
        let full = FilterCriteria {
            bedrooms: Some(1),
            bathrooms: Some(1),
            amenities: ["garage".to_string(), "pool".to_string()].into(),
            ..Default::default()
        };
        let beds_only = FilterCriteria {
            bedrooms: Some(1),
            ..Default::default()
        };
        let rest = FilterCriteria {
            bedrooms: None,
            ..full.clone()
        };

        let one_pass = ids(&apply_filters(&records, &full));
        let first: Vec<PropertyRecord> = apply_filters(&records, &beds_only)
            .into_iter()
            .cloned()
            .collect();
        let two_pass = ids(&apply_filters(&first, &rest));

        assert_eq!(one_pass, two_pass);
    }

    #[test]
    fn status_filter_narrows_to_rentals() {
        let records = sample();
        let criteria = FilterCriteria {
            status: Some(ListingStatus::ForRent),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&records, &criteria)), vec!["d"]);
    }

    #[test]
    fn concrete_price_and_recency_ordering() {
        let records = vec![
            record("old", 500_000, (2024, 1, 1)),
            record("new", 300_000, (2024, 2, 1)),
        ];
        let refs: Vec<&PropertyRecord> = records.iter().collect();

        let by_price: Vec<u64> = sort_records(&refs, SortKey::PriceAsc)
            .iter()
            .map(|r| r.price)
            .collect();
        assert_eq!(by_price, vec![300_000, 500_000]);

        assert_eq!(ids(&sort_records(&refs, SortKey::Newest)), vec!["new", "old"]);
    }

    #[test]
    fn sorting_is_stable_for_equal_prices() {
        let records = vec![
            record("x", 200_000, (2024, 1, 1)),
            record("y", 100_000, (2024, 1, 2)),
            record("z", 200_000, (2024, 1, 3)),
            record("w", 200_000, (2024, 1, 4)),
        ];
        let refs: Vec<&PropertyRecord> = records.iter().collect();

        assert_eq!(ids(&sort_records(&refs, SortKey::PriceAsc)), vec!["y", "x", "z", "w"]);
        assert_eq!(ids(&sort_records(&refs, SortKey::PriceDesc)), vec!["x", "z", "w", "y"]);
    }

    #[test]
    fn sort_leaves_input_untouched() {
        let records = sample();
        let refs: Vec<&PropertyRecord> = records.iter().collect();
        let before = ids(&refs);

        let _ = sort_records(&refs, SortKey::PriceDesc);

        assert_eq!(ids(&refs), before);
    }

    #[test]
    fn unknown_sort_key_is_identity() {
        let records = sample();
        let refs: Vec<&PropertyRecord> = records.iter().collect();

        let key = SortKey::from_param("popular");
        assert_eq!(key, SortKey::Unsorted);
        assert_eq!(ids(&sort_records(&refs, key)), ids(&refs));
    }

    #[test]
    fn hero_params_map_to_criteria() {
        let raw = RawParams::from_query("location=Enugu&type=House&price=Under+%24300k");
        let criteria = parse_query_params(&raw);

        assert_eq!(criteria.search_term.as_deref(), Some("Enugu"));
        assert_eq!(criteria.property_types, [PropertyType::House].into());
        assert_eq!(criteria.price_range, None);
    }

    #[test]
    fn hero_location_is_kept_verbatim() {
        let raw = RawParams::from_query("location=+Enugu+");
        assert_eq!(
            parse_query_params(&raw).search_term.as_deref(),
            Some(" Enugu ")
        );
    }

    #[test]
    fn absent_or_unknown_hero_params_leave_criteria_unset() {
        assert!(parse_query_params(&RawParams::from_query("")).is_empty());
        assert!(parse_query_params(&RawParams::from_query("location=&type=Castle")).is_empty());
    }

    #[test]
    fn listing_params_read_filter_panel_keys() {
        let raw = RawParams::from_query(
            "type=House&type=condo&beds=2&baths=x&min_price=600000&max_price=300000\
             &amenity=pool&amenity=+&status=For+Rent&sort=price_desc&view=list&page=3&price=Over+%241M",
        );
        let params = parse_listing_params(&raw);
        let c = &params.criteria;

        assert_eq!(c.property_types, [PropertyType::House, PropertyType::Condo].into());
        assert_eq!(c.bedrooms, Some(2));
        assert_eq!(c.bathrooms, None);
        assert_eq!(
            c.price_range,
            Some(PriceRange {
                min: 300_000,
                max: 600_000
            })
        );
        assert_eq!(c.amenities, ["pool".to_string()].into());
        assert_eq!(c.status, Some(ListingStatus::ForRent));
        assert_eq!(params.sort, SortKey::PriceDesc);
        assert_eq!(params.view, ListingView::List);
        assert_eq!(params.page, 3);
        assert_eq!(params.price_label.as_deref(), Some("Over $1M"));
    }

    #[test]
    fn one_sided_price_bounds() {
        let raw = RawParams::from_query("min_price=500000");
        let range = parse_listing_params(&raw).criteria.price_range.unwrap();
        assert!(range.contains(u64::MAX));
        assert!(!range.contains(499_999));
    }

    #[test]
    fn listing_params_defaults() {
        let params = parse_listing_params(&RawParams::from_query("page=0"));
        assert_eq!(params, ListingParams::default());
    }

    #[test]
    fn to_query_round_trips() {
        let raw = RawParams::from_query(
            "location=Enugu&type=Land&beds=1&min_price=100&amenity=garden&sort=price_asc&view=list&page=2",
        );
        let params = parse_listing_params(&raw);
        let again = parse_listing_params(&RawParams::from_query(&params.to_query()));
        assert_eq!(params, again);
    }
}
