//! Fixed categorical domains and sampling constants.
//!
//! RULE: These domains are part of the persisted file format. Changing a
//! label or the order of an `ALL` array changes generated output and breaks
//! previously written CSV files. Append-only, same as the RNG field slots.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Product category, 15 values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    HomeGarden,
    SportsOutdoors,
    Books,
    ToysGames,
    HealthBeauty,
    Automotive,
    Grocery,
    PetSupplies,
    OfficeSupplies,
    MusicMovies,
    Jewelry,
    BabyProducts,
    ToolsHardware,
}

impl Category {
    pub const ALL: [Category; 15] = [
        Category::Electronics,
        Category::Clothing,
        Category::HomeGarden,
        Category::SportsOutdoors,
        Category::Books,
        Category::ToysGames,
        Category::HealthBeauty,
        Category::Automotive,
        Category::Grocery,
        Category::PetSupplies,
        Category::OfficeSupplies,
        Category::MusicMovies,
        Category::Jewelry,
        Category::BabyProducts,
        Category::ToolsHardware,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Clothing => "Clothing",
            Self::HomeGarden => "Home & Garden",
            Self::SportsOutdoors => "Sports & Outdoors",
            Self::Books => "Books",
            Self::ToysGames => "Toys & Games",
            Self::HealthBeauty => "Health & Beauty",
            Self::Automotive => "Automotive",
            Self::Grocery => "Grocery",
            Self::PetSupplies => "Pet Supplies",
            Self::OfficeSupplies => "Office Supplies",
            Self::MusicMovies => "Music & Movies",
            Self::Jewelry => "Jewelry",
            Self::BabyProducts => "Baby Products",
            Self::ToolsHardware => "Tools & Hardware",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == s)
    }
}

/// Payment method, 7 values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    PayPal,
    ApplePay,
    GooglePay,
    GiftCard,
    WireTransfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 7] = [
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::PayPal,
        PaymentMethod::ApplePay,
        PaymentMethod::GooglePay,
        PaymentMethod::GiftCard,
        PaymentMethod::WireTransfer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::DebitCard => "Debit Card",
            Self::PayPal => "PayPal",
            Self::ApplePay => "Apple Pay",
            Self::GooglePay => "Google Pay",
            Self::GiftCard => "Gift Card",
            Self::WireTransfer => "Wire Transfer",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.label() == s)
    }
}

/// Sales region, 8 values. Uncorrelated with city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    Northeast,
    Southeast,
    Midwest,
    Southwest,
    WestCoast,
    Northwest,
    MidAtlantic,
    GreatPlains,
}

impl Region {
    pub const ALL: [Region; 8] = [
        Region::Northeast,
        Region::Southeast,
        Region::Midwest,
        Region::Southwest,
        Region::WestCoast,
        Region::Northwest,
        Region::MidAtlantic,
        Region::GreatPlains,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Northeast => "Northeast",
            Self::Southeast => "Southeast",
            Self::Midwest => "Midwest",
            Self::Southwest => "Southwest",
            Self::WestCoast => "West Coast",
            Self::Northwest => "Northwest",
            Self::MidAtlantic => "Mid-Atlantic",
            Self::GreatPlains => "Great Plains",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.label() == s)
    }
}

/// Order status, 6 values with fixed marginal probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Status {
    Completed,
    Pending,
    Shipped,
    Cancelled,
    Returned,
    Refunded,
}

impl Status {
    pub const ALL: [Status; 6] = [
        Status::Completed,
        Status::Pending,
        Status::Shipped,
        Status::Cancelled,
        Status::Returned,
        Status::Refunded,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
            Self::Shipped => "Shipped",
            Self::Cancelled => "Cancelled",
            Self::Returned => "Returned",
            Self::Refunded => "Refunded",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s2| s2.label() == s)
    }
}

/// City labels, 30 values. Never grouped or filtered on, so a plain
/// label table is enough — rows hold the canonical &'static str.
pub const CITIES: [&str; 30] = [
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Phoenix",
    "Philadelphia",
    "San Antonio",
    "San Diego",
    "Dallas",
    "San Jose",
    "Austin",
    "Jacksonville",
    "Fort Worth",
    "Columbus",
    "Charlotte",
    "Indianapolis",
    "San Francisco",
    "Seattle",
    "Denver",
    "Nashville",
    "Portland",
    "Las Vegas",
    "Memphis",
    "Louisville",
    "Baltimore",
    "Milwaukee",
    "Albuquerque",
    "Tucson",
    "Fresno",
    "Sacramento",
];

pub fn city_from_label(s: &str) -> Option<&'static str> {
    CITIES.iter().copied().find(|c| *c == s)
}

// ── Sampling constants ─────────────────────────────────────────────

/// Mean of the exponential unit-price draw, before the +0.99 shift.
pub const UNIT_PRICE_MEAN: f64 = 50.0;

/// Shift applied to every unit-price draw, giving a $0.99 floor.
pub const UNIT_PRICE_SHIFT: f64 = 0.99;

/// Quantity is uniform over 1..=MAX_QUANTITY.
pub const MAX_QUANTITY: u64 = 20;

/// Discount wheel: equally likely slots, half of them zero, so 50% of
/// rows carry no discount and each nonzero rate is equally likely.
pub const DISCOUNT_WHEEL: [f64; 10] = [0.0, 0.0, 0.0, 0.0, 0.0, 0.05, 0.10, 0.15, 0.20, 0.25];

/// Tax rates, drawn uniformly.
pub const TAX_RATES: [f64; 8] = [0.0, 0.05, 0.06, 0.07, 0.075, 0.08, 0.0825, 0.10];

/// Status marginals, aligned with `Status::ALL`.
pub const STATUS_WEIGHTS: [f64; 6] = [0.60, 0.10, 0.12, 0.08, 0.06, 0.04];

/// Probability a row belongs to a member account.
pub const MEMBER_PROBABILITY: f64 = 0.35;

/// Rating marginals: slot 0 is "no rating", slots 1..=5 are the stars.
pub const RATING_WEIGHTS: [f64; 6] = [0.30, 0.03, 0.07, 0.15, 0.25, 0.20];

/// Customer ids are uniform over [CUSTOMER_ID_MIN, CUSTOMER_ID_MAX).
pub const CUSTOMER_ID_MIN: u64 = 10_000;
pub const CUSTOMER_ID_MAX: u64 = 99_999;

/// Product ids are uniform over [PRODUCT_ID_MIN, PRODUCT_ID_MAX).
pub const PRODUCT_ID_MIN: u64 = 100_000;
pub const PRODUCT_ID_MAX: u64 = 999_999;

/// Start of the two-year sampling window (inclusive).
pub fn window_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .expect("static date")
        .and_hms_opt(0, 0, 0)
        .expect("static time")
}

/// End of the sampling window (exclusive upper bound of the offset draw).
pub fn window_end() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 12, 31)
        .expect("static date")
        .and_hms_opt(0, 0, 0)
        .expect("static time")
}

/// Window length in seconds. Offsets are drawn uniformly from [0, this).
pub fn window_seconds() -> u64 {
    (window_end() - window_start()).num_seconds() as u64
}
