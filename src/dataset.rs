//! Static reference data served by the tools.
//!
//! The [`Directory`] is built once at startup and never mutated; every
//! handler reads it through a shared reference, so concurrent tool calls
//! need no locking.

use serde::{Deserialize, Serialize};

/// Stored availability of a professional.
///
/// `any` is a query-side wildcard, not a stored value — see
/// [`AvailabilityFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    AvailableNow,
    AvailableThisWeek,
    AvailableLater,
}

impl Availability {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AvailableNow => "available_now",
            Self::AvailableThisWeek => "available_this_week",
            Self::AvailableLater => "available_later",
        }
    }

    /// Human-readable form: underscores replaced with spaces.
    pub fn human(self) -> String {
        self.as_str().replace('_', " ")
    }
}

/// Query-side availability filter. `Any` matches every stored value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityFilter {
    #[default]
    Any,
    AvailableNow,
    AvailableThisWeek,
}

impl AvailabilityFilter {
    pub fn matches(self, stored: Availability) -> bool {
        match self {
            Self::Any => true,
            Self::AvailableNow => stored == Availability::AvailableNow,
            Self::AvailableThisWeek => stored == Availability::AvailableThisWeek,
        }
    }
}

/// Difficulty classification of an advice entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "DIY")]
    Diy,
    #[serde(rename = "hire_a_pro")]
    HireAPro,
    #[serde(rename = "DIY_or_pro")]
    DiyOrPro,
}

/// A verified home service professional.
#[derive(Debug, Clone)]
pub struct Professional {
    /// Unique, stable identifier (e.g. "pro-001").
    pub id: String,
    pub name: String,
    pub business_name: String,
    /// Single canonical category, lower-case.
    pub category: String,
    pub sub_categories: Vec<String>,
    /// Zip codes the professional serves.
    pub zip_codes: Vec<String>,
    pub availability: Availability,
    /// Rating in [0, 5].
    pub rating: f64,
    pub review_count: u32,
    pub years_in_business: u32,
    pub hourly_rate: Option<String>,
    pub phone: String,
    pub bio: String,
    pub badges: Vec<String>,
}

/// A canned answer to a common home-improvement question.
#[derive(Debug, Clone)]
pub struct AdviceEntry {
    /// Canonical short topic, lower-case.
    pub topic: String,
    /// Keywords matched as substrings of the question.
    pub keywords: Vec<String>,
    pub answer: String,
    pub estimated_cost: Option<String>,
    pub difficulty: Difficulty,
    /// Non-empty: drives the suggested-action branch.
    pub related_categories: Vec<String>,
}

/// The immutable dataset: professionals plus advice entries.
///
/// Record order is significant. Search ties (same rating and review count)
/// preserve it, and advice matching is first-match-wins over it.
#[derive(Debug, Clone)]
pub struct Directory {
    pub professionals: Vec<Professional>,
    pub advice: Vec<AdviceEntry>,
}

impl Directory {
    pub fn new(professionals: Vec<Professional>, advice: Vec<AdviceEntry>) -> Self {
        Self {
            professionals,
            advice,
        }
    }

    pub fn professional_by_id(&self, id: &str) -> Option<&Professional> {
        self.professionals.iter().find(|p| p.id == id)
    }

    /// The built-in dataset served by the standalone binary.
    pub fn seeded() -> Self {
        Self::new(seed_professionals(), seed_advice())
    }
}

fn pro(
    id: &str,
    name: &str,
    business_name: &str,
    category: &str,
    sub_categories: &[&str],
    zip_codes: &[&str],
    availability: Availability,
    rating: f64,
    review_count: u32,
    years_in_business: u32,
    hourly_rate: Option<&str>,
    phone: &str,
    bio: &str,
    badges: &[&str],
) -> Professional {
    Professional {
        id: id.to_string(),
        name: name.to_string(),
        business_name: business_name.to_string(),
        category: category.to_string(),
        sub_categories: sub_categories.iter().map(|s| s.to_string()).collect(),
        zip_codes: zip_codes.iter().map(|s| s.to_string()).collect(),
        availability,
        rating,
        review_count,
        years_in_business,
        hourly_rate: hourly_rate.map(|s| s.to_string()),
        phone: phone.to_string(),
        bio: bio.to_string(),
        badges: badges.iter().map(|s| s.to_string()).collect(),
    }
}

fn seed_professionals() -> Vec<Professional> {
    vec![
        pro(
            "pro-001",
            "Mike Rodriguez",
            "Rodriguez Plumbing & Drain",
            "plumbing",
            &["drain cleaning", "water heater installation", "leak repair"],
            &["90210", "90211", "90212"],
            Availability::AvailableNow,
            4.8,
            327,
            12,
            Some("$95-150/hr"),
            "(310) 555-0142",
            "Family-owned plumbing company serving the Westside for over a decade. \
             Specializing in emergency repairs and tankless water heater installs.",
            &["Angi Certified", "Licensed & Insured", "Top Pro 2024"],
        ),
        pro(
            "pro-002",
            "Sarah Chen",
            "Bright Spark Electric",
            "electrical",
            &["panel upgrades", "ev charger installation", "lighting"],
            &["90210", "90401", "90405"],
            Availability::AvailableThisWeek,
            4.9,
            214,
            9,
            Some("$110-175/hr"),
            "(310) 555-0178",
            "Master electrician focused on residential service upgrades, EV charging, \
             and smart-home wiring. Free safety inspection with every visit.",
            &["Angi Certified", "Licensed & Insured"],
        ),
        pro(
            "pro-003",
            "Dan Kowalski",
            "Pacific Air Heating & Cooling",
            "hvac",
            &["ac repair", "furnace installation", "duct cleaning"],
            &["90001", "90012", "90210"],
            Availability::AvailableNow,
            4.7,
            452,
            15,
            Some("$120-180/hr"),
            "(213) 555-0199",
            "Full-service HVAC contractor. Same-day AC repair, seasonal tune-ups, \
             and high-efficiency system replacements.",
            &["Angi Certified", "Licensed & Insured", "Top Pro 2023"],
        ),
        pro(
            "pro-004",
            "Luis Alvarez",
            "Summit Roofing Co.",
            "roofing",
            &["shingle replacement", "leak repair", "gutter installation"],
            &["90012", "90401"],
            Availability::AvailableLater,
            4.6,
            189,
            20,
            None,
            "(213) 555-0151",
            "Twenty years of residential roofing. Free drone roof inspections and \
             detailed written estimates on every job.",
            &["Licensed & Insured"],
        ),
        pro(
            "pro-005",
            "Maria Santos",
            "Sparkle Home Cleaning",
            "cleaning",
            &["deep cleaning", "move-out cleaning", "recurring service"],
            &["90210", "90211", "90401"],
            Availability::AvailableNow,
            4.9,
            611,
            7,
            Some("$60-90/hr"),
            "(310) 555-0123",
            "Background-checked cleaning crews with eco-friendly supplies. \
             Weekly, bi-weekly, and one-time deep cleans.",
            &["Angi Certified", "Background Checked"],
        ),
        pro(
            "pro-006",
            "James Park",
            "Park Design + Build",
            "remodeling",
            &["kitchen remodeling", "bathroom remodeling", "additions"],
            &["90210", "90405"],
            Availability::AvailableLater,
            4.8,
            98,
            18,
            None,
            "(310) 555-0167",
            "Design-build firm handling kitchens, baths, and whole-home remodels \
             from permits through final walkthrough.",
            &["Angi Certified", "Licensed & Insured", "Top Pro 2024"],
        ),
        pro(
            "pro-007",
            "Tom Nguyen",
            "Evergreen Landscape Services",
            "landscaping",
            &["lawn care", "irrigation", "tree trimming"],
            &["90001", "90012"],
            Availability::AvailableThisWeek,
            4.5,
            276,
            11,
            Some("$55-85/hr"),
            "(213) 555-0134",
            "Crews for weekly maintenance, drip irrigation retrofits, and \
             drought-tolerant yard conversions.",
            &["Licensed & Insured"],
        ),
        pro(
            "pro-008",
            "Dave Miller",
            "Miller Home Repair",
            "handyman",
            &["drywall repair", "painting", "fixture installation"],
            &["90211", "90405"],
            Availability::AvailableNow,
            4.4,
            143,
            6,
            Some("$75/hr"),
            "(310) 555-0188",
            "One call for the small stuff: drywall patches, caulking, fixture swaps, \
             and honey-do lists.",
            &["Background Checked"],
        ),
    ]
}

fn advice(
    topic: &str,
    keywords: &[&str],
    answer: &str,
    estimated_cost: Option<&str>,
    difficulty: Difficulty,
    related_categories: &[&str],
) -> AdviceEntry {
    AdviceEntry {
        topic: topic.to_string(),
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        answer: answer.to_string(),
        estimated_cost: estimated_cost.map(|s| s.to_string()),
        difficulty,
        related_categories: related_categories.iter().map(|s| s.to_string()).collect(),
    }
}

fn seed_advice() -> Vec<AdviceEntry> {
    vec![
        advice(
            "faucet",
            &["leaky faucet", "dripping faucet", "faucet repair"],
            "Most leaky faucets are caused by a worn washer or cartridge. Shut off \
             the water under the sink, disassemble the handle, and replace the \
             cartridge with a matching part from any hardware store.",
            Some("$0-25 in parts if you DIY; $100-250 for a plumber"),
            Difficulty::Diy,
            &["plumbing"],
        ),
        advice(
            "roof",
            &["roof repair cost", "roof leak", "replace my roof", "shingles"],
            "Small shingle repairs run a few hundred dollars, but roof work is \
             dangerous and mistakes cause hidden water damage. Get a professional \
             inspection for any active leak; full replacement is priced per square.",
            Some("$400-1,600 for typical repairs; $9,000-25,000 for full replacement"),
            Difficulty::HireAPro,
            &["roofing"],
        ),
        advice(
            "hvac",
            &["ac not cooling", "furnace not working", "hvac maintenance", "air filter"],
            "Start with the simple checks: replace the air filter, confirm the \
             thermostat mode and batteries, and clear debris from the outdoor unit. \
             If the system still under-performs, refrigerant and electrical work \
             require a licensed technician.",
            Some("$75-200 for a tune-up; $150-650 for common repairs"),
            Difficulty::DiyOrPro,
            &["hvac"],
        ),
        advice(
            "drain",
            &["clogged drain", "slow drain", "unclog"],
            "Try a cup plunger or a hand auger first; avoid chemical cleaners, which \
             damage pipes and rarely clear full blockages. Recurring clogs in the \
             same line usually mean a deeper obstruction worth a camera inspection.",
            Some("$0-30 DIY; $150-350 for professional drain cleaning"),
            Difficulty::DiyOrPro,
            &["plumbing"],
        ),
        advice(
            "paint",
            &["paint a room", "interior painting cost", "painting"],
            "A standard bedroom takes a weekend: one day of prep and cutting in, one \
             day of rolling two coats. Quality tape, primer, and a 3/8-inch roller \
             cover matter more than premium paint.",
            Some("$100-300 DIY per room; $300-800 hiring a painter"),
            Difficulty::DiyOrPro,
            &["painting", "handyman"],
        ),
        advice(
            "water heater",
            &["water heater", "no hot water", "tankless"],
            "No hot water usually means a failed heating element or thermocouple on \
             tank units. Water heaters involve gas, high-amperage circuits, and \
             pressure relief — replacement and repair are professional jobs.",
            Some("$150-450 for repairs; $1,200-3,500 for replacement"),
            Difficulty::HireAPro,
            &["plumbing"],
        ),
    ]
}

