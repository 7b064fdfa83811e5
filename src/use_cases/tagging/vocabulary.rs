use std::collections::HashMap;

use once_cell::sync::Lazy;

/// The closed set of tag names a grant may carry. Order matters only for
/// seeding; matching treats it as a set.
pub const VOCABULARY: &[&str] = &[
    "agriculture",
    "aquaculture",
    "capacity-building",
    "capital",
    "climate",
    "community-benefit",
    "conservation",
    "cost-share",
    "dairy",
    "distribution",
    "drought",
    "education",
    "equipment",
    "equine",
    "equine-owners",
    "food-safety",
    "farmer",
    "farm-to-school",
    "grant",
    "infrastructure",
    "irrigation",
    "local-food",
    "local-government",
    "logistics",
    "marketing",
    "mixed-operations",
    "nonprofit",
    "nutrient-management",
    "operational",
    "organic-certification",
    "organic-transition",
    "outreach",
    "planning",
    "pilot",
    "producer-group",
    "procurement",
    "processing",
    "research",
    "resilience",
    "reimbursement",
    "rolling",
    "rural",
    "safety-net",
    "school",
    "seafood",
    "seafood-harvester",
    "soil",
    "supply-chain",
    "technical-assistance",
    "training",
    "value-added",
    "water",
    "water-storage",
    "working-capital",
    "row-crops",
    "vegetables",
    "fruit",
    "livestock",
    "competitive",
    "match-required",
    "public-entity-eligible",
    "individual-eligible",
    "rfa-open",
    "wi",
    "va",
    "ri",
    "nh",
    "mn",
    "me",
    "ky",
    "co",
    "cooperative",
    "for-profit",
    "university",
    "extension",
    "tribal",
    "veteran",
    "beginning-farmer",
    "underserved",
    "youth",
    "food-access",
    "nutrition",
    "workforce",
    "energy",
    "renewable-energy",
    "water-quality",
    "soil-health",
    "wildlife-habitat",
    "pasture",
    "grazing",
    "manure-management",
    "disaster-relief",
    "flood",
];

pub fn is_in_vocabulary(name: &str) -> bool {
    VOCABULARY.contains(&name)
}

/// Synonym phrases that count as a match for a tag. A couple of keys fell out
/// of the vocabulary over time; the vocabulary filter in assignment keeps them
/// from ever reaching storage.
pub(crate) static KEYWORD_MAPPINGS: Lazy<HashMap<&'static str, Vec<&'static str>>> =
    Lazy::new(|| {
        HashMap::from([
            (
                "agriculture",
                vec![
                    "agriculture",
                    "agricultural",
                    "farming",
                    "farm",
                    "farmer",
                    "farmers",
                ],
            ),
            (
                "education",
                vec![
                    "education",
                    "educational",
                    "learning",
                    "teach",
                    "training",
                    "workshop",
                ],
            ),
            (
                "sustainability",
                vec!["sustainable", "sustainability", "environmental", "eco-friendly"],
            ),
            (
                "conservation",
                vec!["conservation", "conserving", "preserve", "protection"],
            ),
            (
                "water",
                vec!["water", "irrigation", "drought", "water-storage", "water-quality"],
            ),
            (
                "soil",
                vec!["soil", "nutrient", "nutrient-management", "soil-health"],
            ),
            (
                "research",
                vec!["research", "studies", "investigation", "analysis"],
            ),
            (
                "infrastructure",
                vec!["infrastructure", "facilities", "buildings", "construction"],
            ),
            (
                "equipment",
                vec!["equipment", "machinery", "tools", "technology"],
            ),
            (
                "marketing",
                vec!["marketing", "promotion", "advertising", "branding"],
            ),
            (
                "local-food",
                vec!["local food", "local-food", "locally sourced", "regional"],
            ),
            (
                "farm-to-school",
                vec!["farm to school", "farm-to-school", "school meals"],
            ),
            (
                "organic",
                vec!["organic", "organic-certification", "organic-transition"],
            ),
            ("dairy", vec!["dairy", "milk", "cattle", "cows"]),
            (
                "livestock",
                vec!["livestock", "animals", "cattle", "poultry", "sheep"],
            ),
            ("equine", vec!["equine", "horse", "horses", "equestrian"]),
            ("seafood", vec!["seafood", "fish", "fishing", "aquaculture"]),
            ("youth", vec!["youth", "young", "students", "children", "kids"]),
            ("rural", vec!["rural", "countryside", "remote", "small town"]),
            (
                "disaster-relief",
                vec!["disaster", "emergency", "relief", "crisis"],
            ),
            (
                "climate",
                vec!["climate", "weather", "environmental", "greenhouse"],
            ),
            ("energy", vec!["energy", "renewable", "solar", "wind", "power"]),
            (
                "nutrition",
                vec!["nutrition", "healthy", "food access", "hunger"],
            ),
            (
                "workforce",
                vec!["workforce", "employment", "jobs", "career"],
            ),
            (
                "beginning-farmer",
                vec!["beginning farmer", "new farmer", "startup"],
            ),
            (
                "underserved",
                vec!["underserved", "disadvantaged", "minority", "low-income"],
            ),
            ("veteran", vec!["veteran", "military", "service member"]),
            ("tribal", vec!["tribal", "native", "indigenous", "reservation"]),
            (
                "cooperative",
                vec!["cooperative", "co-op", "collective", "partnership"],
            ),
            (
                "nonprofit",
                vec!["nonprofit", "non-profit", "charity", "foundation"],
            ),
            (
                "university",
                vec!["university", "college", "academic", "institution"],
            ),
            (
                "extension",
                vec!["extension", "outreach", "advisory", "consulting"],
            ),
            ("pilot", vec!["pilot", "test", "trial", "demonstration"]),
            (
                "competitive",
                vec!["competitive", "competition", "award", "prize"],
            ),
            (
                "match-required",
                vec!["match", "matching", "cost-share", "co-funding"],
            ),
            (
                "reimbursement",
                vec!["reimbursement", "reimburse", "refund", "repayment"],
            ),
            ("rolling", vec!["rolling", "continuous", "ongoing", "open"]),
            (
                "rfa-open",
                vec!["rfa", "request for applications", "open", "available"],
            ),
        ])
    });
