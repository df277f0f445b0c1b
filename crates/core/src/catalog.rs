//! Fixed option sets offered by the proposal form and the case-study filter.

/// Services a prospect can request on the proposal form.
pub const SERVICES: &[&str] = &[
    "Web Development",
    "Mobile App Development",
    "Digital Marketing",
    "SEO Optimization",
    "E-commerce Development",
    "Brand Design",
    "Content Marketing",
    "Social Media Management",
];

pub const BUDGET_RANGES: &[&str] = &[
    "Under $5,000",
    "$5,000 - $10,000",
    "$10,000 - $25,000",
    "$25,000 - $50,000",
    "Over $50,000",
];

pub const TIMELINES: &[&str] = &[
    "ASAP (Rush project)",
    "1-2 months",
    "3-4 months",
    "6+ months",
    "Flexible timeline",
];

/// Category that disables the case-study tag filter.
pub const CATEGORY_ALL: &str = "all";

/// Categories offered on the public case-study page.
pub const CASE_STUDY_CATEGORIES: &[&str] = &[
    CATEGORY_ALL,
    "Web Development",
    "Digital Marketing",
    "E-commerce",
    "Branding",
];

pub fn is_known_service(value: &str) -> bool {
    SERVICES.contains(&value)
}

pub fn is_known_budget_range(value: &str) -> bool {
    BUDGET_RANGES.contains(&value)
}

pub fn is_known_timeline(value: &str) -> bool {
    TIMELINES.contains(&value)
}

/// Whether a case study with `tags` belongs in `category`.
pub fn matches_category(tags: &[String], category: &str) -> bool {
    category == CATEGORY_ALL || tags.iter().any(|tag| tag == category)
}
