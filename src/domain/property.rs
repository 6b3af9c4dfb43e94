// src/domain/property.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

pub const PLACEHOLDER_IMAGE: &str = "/static/placeholder.svg";

/// A single listing as the site displays it.
/// Records are loaded by a `PropertySource` and never mutated by queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: String,
    pub title: String,
    pub price: u64,
    pub address: Address,
    pub property_type: PropertyType,
    pub status: ListingStatus,

    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub bathrooms: Option<u32>,
    #[serde(default)]
    pub square_feet: Option<u32>,

    #[serde(default)]
    pub amenities: BTreeSet<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub description: Option<String>,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl PropertyRecord {
    pub fn bedrooms_or_zero(&self) -> u32 {
        self.bedrooms.unwrap_or(0)
    }

    pub fn bathrooms_or_zero(&self) -> u32 {
        self.bathrooms.unwrap_or(0)
    }

    pub fn primary_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// "City, State" as shown under the card title.
    pub fn location_label(&self) -> String {
        format!("{}, {}", self.address.city, self.address.state)
    }

    /// True when the record carries at least one of `wanted`.
    pub fn has_any_amenity(&self, wanted: &BTreeSet<String>) -> bool {
        wanted.iter().any(|tag| self.amenities.contains(tag))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PropertyType {
    House,
    Apartment,
    Condo,
    Townhouse,
    Land,
}

impl PropertyType {
    pub const ALL: [PropertyType; 5] = [
        PropertyType::House,
        PropertyType::Apartment,
        PropertyType::Condo,
        PropertyType::Townhouse,
        PropertyType::Land,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PropertyType::House => "House",
            PropertyType::Apartment => "Apartment",
            PropertyType::Condo => "Condo",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::Land => "Land",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PropertyType {
    type Err = String;

    /// Accepts the display label in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PropertyType::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown property type: {wanted}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingStatus {
    #[serde(rename = "For Sale")]
    ForSale,
    #[serde(rename = "For Rent")]
    ForRent,
    Sold,
}

impl ListingStatus {
    pub const ALL: [ListingStatus; 3] = [
        ListingStatus::ForSale,
        ListingStatus::ForRent,
        ListingStatus::Sold,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ListingStatus::ForSale => "For Sale",
            ListingStatus::ForRent => "For Rent",
            ListingStatus::Sold => "Sold",
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ListingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ListingStatus::ALL
            .into_iter()
            .find(|st| st.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown listing status: {wanted}"))
    }
}
