// src/data.rs

//! Static site content: testimonials, market figures, sales series and the
//! hero-search vocabulary. Listings themselves live in the database.

use crate::domain::market::{MarketTrend, Trend};
use crate::domain::notifications::Role;
use crate::domain::sales::{SalesPoint, Slice};
use crate::domain::ui_state::UserProfile;

pub const SITE_NAME: &str = "HomePulse Realty";

/// Listings JSON inserted into an empty database.
pub const SEED_PROPERTIES_JSON: &str = include_str!("../data/properties.json");

pub const POPULAR_SEARCHES: [&str; 4] = ["Enugu", "Calabar", "Lagos", "Abuja"];

/// Labels offered by the hero search's price select. They travel as the
/// `price` query parameter and are not mapped to numeric bounds.
pub const PRICE_RANGE_LABELS: [&str; 5] = [
    "Under $300k",
    "$300k-$500k",
    "$500k-$750k",
    "$750k-$1M",
    "Over $1M",
];

pub const AMENITIES: [&str; 8] = [
    "pool",
    "garage",
    "garden",
    "gym",
    "security",
    "borehole",
    "generator",
    "balcony",
];

pub struct FeaturedLocation {
    pub name: &'static str,
    pub blurb: &'static str,
    pub listings: &'static str,
    pub from_price: &'static str,
    pub image: &'static str,
}

pub const LOCATIONS: [FeaturedLocation; 3] = [
    FeaturedLocation {
        name: "Enugu",
        blurb: "Known as the 'Coal City', Enugu offers a blend of urban amenities and natural beauty.",
        listings: "240+ Properties",
        from_price: "From ₦25M",
        image: "https://images.unsplash.com/photo-1577979538850-f3f88e8e8885?q=80&w=800&auto=format&fit=crop",
    },
    FeaturedLocation {
        name: "Calabar",
        blurb: "The 'Canaan City' is known for its cleanliness, hospitality, and vibrant cultural heritage.",
        listings: "180+ Properties",
        from_price: "From ₦22M",
        image: "https://images.unsplash.com/photo-1580392443763-c4a9a8dea3c8?q=80&w=800&auto=format&fit=crop",
    },
    FeaturedLocation {
        name: "Lagos",
        blurb: "Nigeria's economic hub offering premium waterfront properties and urban living.",
        listings: "320+ Properties",
        from_price: "From ₦35M",
        image: "https://images.unsplash.com/photo-1577948000111-9c970dfe3743?q=80&w=800&auto=format&fit=crop",
    },
];

pub struct Testimonial {
    pub name: &'static str,
    pub location: &'static str,
    pub image: &'static str,
    /// Out of five.
    pub rating: u8,
    pub testimonial: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Ngozi Eze",
        location: "Enugu",
        image: "/static/people/ngozi.jpg",
        rating: 5,
        testimonial: "The team found us a family home in Independence Layout within a month. Every viewing was on time and every question answered.",
    },
    Testimonial {
        name: "Emeka Okafor",
        location: "Calabar",
        image: "/static/people/emeka.jpg",
        rating: 4,
        testimonial: "Listing my duplex was painless. The market report helped me price it right and it sold above asking.",
    },
    Testimonial {
        name: "Aisha Bello",
        location: "Lagos",
        image: "/static/people/aisha.jpg",
        rating: 5,
        testimonial: "As a first-time buyer I needed a lot of guidance. My agent walked me through every document and negotiation.",
    },
];

pub const MARKET_TRENDS: [MarketTrend; 4] = [
    MarketTrend {
        id: 1,
        title: "Median Home Price",
        value: "+5.2%",
        description: "Year-over-year increase in median sale price across our markets.",
        trend: Trend::Up,
    },
    MarketTrend {
        id: 2,
        title: "Days on Market",
        value: "-8 days",
        description: "Homes are selling faster than the same period last year.",
        trend: Trend::Down,
    },
    MarketTrend {
        id: 3,
        title: "Mortgage Rates",
        value: "18.5%",
        description: "Average lending rate has held steady over the last quarter.",
        trend: Trend::Stable,
    },
    MarketTrend {
        id: 4,
        title: "New Listings",
        value: "+12%",
        description: "More inventory is coming to market in Enugu and Calabar.",
        trend: Trend::Up,
    },
];

pub const MONTHLY_SALES: [SalesPoint; 12] = [
    SalesPoint { label: "Jan", sales: 4, value: 1_250_000 },
    SalesPoint { label: "Feb", sales: 6, value: 2_100_000 },
    SalesPoint { label: "Mar", sales: 8, value: 2_850_000 },
    SalesPoint { label: "Apr", sales: 10, value: 3_500_000 },
    SalesPoint { label: "May", sales: 7, value: 2_450_000 },
    SalesPoint { label: "Jun", sales: 9, value: 3_200_000 },
    SalesPoint { label: "Jul", sales: 11, value: 3_900_000 },
    SalesPoint { label: "Aug", sales: 8, value: 2_800_000 },
    SalesPoint { label: "Sep", sales: 12, value: 4_250_000 },
    SalesPoint { label: "Oct", sales: 10, value: 3_600_000 },
    SalesPoint { label: "Nov", sales: 9, value: 3_100_000 },
    SalesPoint { label: "Dec", sales: 14, value: 4_950_000 },
];

pub const DAILY_SALES: [SalesPoint; 7] = [
    SalesPoint { label: "Mon", sales: 3, value: 125_000 },
    SalesPoint { label: "Tue", sales: 5, value: 175_000 },
    SalesPoint { label: "Wed", sales: 7, value: 250_000 },
    SalesPoint { label: "Thu", sales: 9, value: 320_000 },
    SalesPoint { label: "Fri", sales: 12, value: 420_000 },
    SalesPoint { label: "Sat", sales: 8, value: 280_000 },
    SalesPoint { label: "Sun", sales: 4, value: 140_000 },
];

pub const YEARLY_SALES: [SalesPoint; 5] = [
    SalesPoint { label: "2020", sales: 82, value: 28_500_000 },
    SalesPoint { label: "2021", sales: 96, value: 33_600_000 },
    SalesPoint { label: "2022", sales: 104, value: 36_400_000 },
    SalesPoint { label: "2023", sales: 115, value: 40_250_000 },
    SalesPoint { label: "2024", sales: 108, value: 37_950_000 },
];

pub const SALES_BY_TYPE: [Slice; 5] = [
    Slice { name: "House", value: 35, fill: "#8884d8" },
    Slice { name: "Apartment", value: 25, fill: "#83a6ed" },
    Slice { name: "Condo", value: 20, fill: "#8dd1e1" },
    Slice { name: "Townhouse", value: 15, fill: "#82ca9d" },
    Slice { name: "Land", value: 5, fill: "#ffc658" },
];

pub const SALES_BY_LOCATION: [Slice; 3] = [
    Slice { name: "Urban", value: 45, fill: "#8884d8" },
    Slice { name: "Suburban", value: 35, fill: "#83a6ed" },
    Slice { name: "Rural", value: 20, fill: "#82ca9d" },
];

pub const SALES_BY_PRICE_RANGE: [Slice; 5] = [
    Slice { name: "Under $300k", value: 15, fill: "#8884d8" },
    Slice { name: "$300k-$500k", value: 25, fill: "#83a6ed" },
    Slice { name: "$500k-$750k", value: 30, fill: "#8dd1e1" },
    Slice { name: "$750k-$1M", value: 20, fill: "#82ca9d" },
    Slice { name: "Over $1M", value: 10, fill: "#ffc658" },
];

/// Stand-in identity per dashboard until sign-in exists.
pub fn demo_profile(role: Role) -> UserProfile {
    match role {
        Role::Admin => UserProfile {
            first_name: Some("Adaeze".into()),
            last_name: Some("Nwosu".into()),
            email: Some("admin@homepulse.ng".into()),
            avatar_url: None,
        },
        Role::Agent => UserProfile {
            first_name: Some("Tunde".into()),
            last_name: None,
            email: Some("tunde.agent@homepulse.ng".into()),
            avatar_url: None,
        },
        Role::User => UserProfile {
            email: Some("buyer@example.ng".into()),
            ..Default::default()
        },
    }
}
